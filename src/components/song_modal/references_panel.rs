// Slide-in references list, shared by the song overlay and the page footer.

#[component]
pub fn ReferencesPanel(
    open: bool,
    title: String,
    references: Vec<Reference>,
    on_close: EventHandler<()>,
) -> Element {
    let hidden = !open;
    rsx! {
        aside {
            class: if open { "references-panel active" } else { "references-panel" },
            aria_hidden: "{hidden}",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            div { class: "references-header",
                h3 { "{title}" }
                button {
                    class: "references-close",
                    aria_label: "Close references",
                    onclick: move |_| on_close.call(()),
                    Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                }
            }
            if references.is_empty() {
                p { class: "references-empty", "No references listed." }
            } else {
                ul { class: "references-list",
                    for (index, reference) in references.iter().enumerate() {
                        li { key: "{index}",
                            if let Some(url) = reference.url.clone() {
                                a {
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{reference.title}"
                                }
                            } else {
                                span { "{reference.title}" }
                            }
                            if let Some(note) = reference.note.clone() {
                                p { class: "reference-note", "{note}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
