// Detail overlay component: derives display fields, then renders the view chunk.
#[component]
pub fn SongModal(controller: SongModalController) -> Element {
    let state = controller.current();

    let Some(song) = state.current_song().cloned() else {
        return rsx! {
            div { id: "modal-overlay", class: "modal-overlay", aria_hidden: "true" }
        };
    };

    let overlay_class = if state.is_expanded() {
        "modal-overlay active expanded"
    } else {
        "modal-overlay active"
    };
    let (expand_label, expand_icon) = if state.is_expanded() {
        ("Collapse details", "minimize")
    } else {
        ("Expand details", "maximize")
    };
    let blocks = description_blocks(&song.description);
    let genre_label = song.genre_label();
    let duration_label = song.duration_label();
    let youtube_link = Some(song.youtube_url.trim().to_string()).filter(|url| !url.is_empty());

    let on_backdrop_click = {
        let mut controller = controller;
        move |_: MouseEvent| controller.close()
    };

    include!("overlay_view.rs")
}

#[component]
fn OrbBackdrop(orbs: Signal<OrbLayout>) -> Element {
    let style = orbs.read().css_vars();
    rsx! {
        div { class: "modal-orbs", style: "{style}", aria_hidden: "true",
            div { class: "orb orb-1" }
            div { class: "orb orb-2" }
            div { class: "orb orb-3" }
        }
    }
}

#[component]
fn DescriptionBlocks(blocks: Vec<String>) -> Element {
    if blocks.len() > 1 {
        rsx! {
            div { id: "modal-description", class: "modal-description",
                for (index, block) in blocks.iter().enumerate() {
                    p { key: "{index}", "{block}" }
                }
            }
        }
    } else {
        let text = blocks.first().cloned().unwrap_or_default();
        rsx! {
            div { id: "modal-description", class: "modal-description", "{text}" }
        }
    }
}
