// Player tabs and the two embed frames; exactly one container is active.

const PLAYER_TABS: [ActivePlayer; 2] = [ActivePlayer::YouTube, ActivePlayer::Spotify];

fn player_icon(player: ActivePlayer) -> &'static str {
    match player {
        ActivePlayer::YouTube => "youtube",
        ActivePlayer::Spotify => "spotify",
    }
}

#[component]
fn PlayerPanel(
    song: SharedSong,
    active: ActivePlayer,
    youtube_src: Option<String>,
    spotify_src: Option<String>,
    on_switch: EventHandler<ActivePlayer>,
) -> Element {
    let youtube_class = if active == ActivePlayer::YouTube {
        "player-container active"
    } else {
        "player-container"
    };
    let spotify_class = if active == ActivePlayer::Spotify {
        "player-container active"
    } else {
        "player-container"
    };

    rsx! {
        div { class: "modal-player",
            div { class: "player-tabs", role: "tablist",
                for tab in PLAYER_TABS {
                    {
                        let selected = tab == active;
                        let tab_id = if tab == ActivePlayer::YouTube { "tab-youtube" } else { "tab-spotify" };
                        rsx! {
                            button {
                                id: tab_id,
                                class: if selected { "player-tab active" } else { "player-tab" },
                                role: "tab",
                                aria_selected: "{selected}",
                                onclick: move |_| on_switch.call(tab),
                                Icon { name: player_icon(tab).to_string(), class: "w-4 h-4".to_string() }
                                "{tab.label()}"
                            }
                        }
                    }
                }
            }

            div { id: "youtube-container", class: "{youtube_class}",
                // Rendering without a src drops the frame and stops playback.
                if let Some(src) = youtube_src {
                    iframe {
                        id: "youtube-player",
                        src: "{src}",
                        title: "YouTube video player",
                        allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                        allowfullscreen: true,
                    }
                }
            }

            div { id: "spotify-container", class: "{spotify_class}",
                if let Some(src) = spotify_src {
                    iframe {
                        id: "spotify-player",
                        src: "{src}",
                        title: "Spotify player",
                        allow: "autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture",
                    }
                } else if active == ActivePlayer::Spotify && !song.has_spotify() {
                    p { class: "player-unavailable", "This song is not available on Spotify." }
                }
            }
        }
    }
}
