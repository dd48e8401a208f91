// Overlay layout: backdrop, orbs, header actions, players, text, references.
{
    rsx! {
        div {
            id: "modal-overlay",
            class: "{overlay_class}",
            onclick: on_backdrop_click,
            OrbBackdrop { orbs: controller.orbs() }
            div {
                id: "modal",
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "modal-title",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                div { class: "modal-actions",
                    button {
                        class: "modal-action",
                        aria_label: "Show references",
                        onclick: {
                            let mut controller = controller;
                            move |_| controller.open_references()
                        },
                        Icon { name: "book".to_string(), class: "w-5 h-5".to_string() }
                    }
                    button {
                        class: "modal-action",
                        aria_label: "{expand_label}",
                        aria_pressed: "{state.is_expanded()}",
                        onclick: {
                            let mut controller = controller;
                            move |_| controller.toggle_expand()
                        },
                        Icon { name: expand_icon.to_string(), class: "w-5 h-5".to_string() }
                    }
                    button {
                        id: "modal-close",
                        class: "modal-action modal-close",
                        aria_label: "Close song details",
                        // Mounted once per open; focus keeps Tab and Escape inside the dialog.
                        onmounted: move |evt: MountedEvent| async move {
                            if let Err(err) = evt.data().set_focus(true).await {
                                tracing::warn!("could not focus overlay close button: {err:?}");
                            }
                        },
                        onclick: {
                            let mut controller = controller;
                            move |_| controller.close()
                        },
                        Icon { name: "x".to_string(), class: "w-5 h-5".to_string() }
                    }
                }

                PlayerPanel {
                    song: song.clone(),
                    active: state.active_player(),
                    youtube_src: state.youtube_src().map(str::to_string),
                    spotify_src: state.spotify_src().map(str::to_string),
                    on_switch: {
                        let mut controller = controller;
                        move |target: ActivePlayer| controller.switch_player(target)
                    },
                }

                div { class: "modal-content",
                    span { id: "modal-topic", class: "modal-topic", "{song.topic}" }
                    h2 { id: "modal-title", class: "modal-title", "{song.title}" }
                    p { id: "modal-artist", class: "modal-artist", "{song.artist}" }
                    if !genre_label.is_empty() {
                        p { id: "modal-genre", class: "modal-genre", "{genre_label}" }
                    }
                    if let Some(duration) = duration_label.clone() {
                        p { id: "spotify-duration", class: "modal-duration",
                            Icon { name: "clock".to_string(), class: "w-4 h-4".to_string() }
                            "{duration}"
                        }
                    }
                    DescriptionBlocks { blocks: blocks.clone() }
                    if let Some(url) = youtube_link.clone() {
                        a {
                            id: "youtube-link",
                            class: "modal-link",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { name: "external-link".to_string(), class: "w-4 h-4".to_string() }
                            "Watch on YouTube"
                        }
                    }
                    if !song.lyrics.trim().is_empty() {
                        section { class: "modal-lyrics",
                            h3 { "Lyrics" }
                            pre { id: "lyrics-content", class: "lyrics-content", "{song.lyrics}" }
                        }
                    }
                }

                ReferencesPanel {
                    open: state.references_open(),
                    title: format!("References · {}", song.title),
                    references: song.references.clone(),
                    on_close: {
                        let mut controller = controller;
                        move |_| controller.close_references()
                    },
                }
            }
        }
    }
}
