use crate::api::SharedSong;
use crate::components::Icon;
use crate::utils::encode_id;
use dioxus::prelude::*;

/// Keys that activate a focused card, matching native button behaviour.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

pub fn youtube_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", encode_id(video_id))
}

/// Display projection of one song card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub song_id: String,
    pub aria_label: String,
    pub thumbnail_url: String,
    pub number: String,
    pub topic: String,
    pub title: String,
    pub artist: String,
    pub tags: Vec<String>,
}

impl CardView {
    pub fn from_song(song: &SharedSong) -> Self {
        Self {
            song_id: song.id.clone(),
            aria_label: format!("{} by {}", song.title, song.artist),
            thumbnail_url: youtube_thumbnail_url(&song.youtube_id),
            number: song.number.clone(),
            topic: song.topic.clone(),
            title: song.title.clone(),
            artist: song.artist.clone(),
            tags: song.tags.clone(),
        }
    }
}

#[component]
pub fn SongGrid(songs: Vec<SharedSong>, on_select: EventHandler<SharedSong>) -> Element {
    rsx! {
        div { id: "song-grid", class: "song-grid",
            for song in songs {
                SongCard { key: "{song.id}", song: song.clone(), on_select }
            }
        }
    }
}

#[component]
pub fn SongCard(song: SharedSong, on_select: EventHandler<SharedSong>) -> Element {
    let card = CardView::from_song(&song);

    let on_click = {
        let song = song.clone();
        move |_: MouseEvent| on_select.call(song.clone())
    };

    let on_keydown = {
        let song = song.clone();
        move |evt: KeyboardEvent| {
            if is_activation_key(&evt.key().to_string()) {
                evt.prevent_default();
                on_select.call(song.clone());
            }
        }
    };

    rsx! {
        article {
            class: "card",
            "data-song-id": "{card.song_id}",
            tabindex: "0",
            role: "button",
            aria_label: "{card.aria_label}",
            onclick: on_click,
            onkeydown: on_keydown,
            div {
                class: "card-thumbnail",
                style: "background-image: url('{card.thumbnail_url}')",
            }
            div { class: "card-header",
                span { class: "card-number", "{card.number}" }
                Icon { name: "youtube".to_string(), class: "card-icon".to_string() }
            }
            div { class: "card-body",
                span { class: "card-topic", "{card.topic}" }
                h2 { class: "card-title", "{card.title}" }
                p { class: "card-artist", "{card.artist}" }
                div { class: "card-tags",
                    for tag in card.tags.iter() {
                        span { class: "tag", "{tag}" }
                    }
                }
            }
        }
    }
}
