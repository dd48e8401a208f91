use crate::api::{load_songs, Catalog, SharedSong};
use crate::components::{
    Icon, ReferencesPanel, SongGrid, SongModal, SongModalController, SongModalState,
};
use crate::config::GalleryConfig;
use crate::overlay::{OrbLayout, CANCEL_KEY};
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// What the song grid area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryContent {
    Loading,
    Empty,
    Songs(Vec<SharedSong>),
}

impl GalleryContent {
    pub fn from_catalog(catalog: Option<&Catalog>) -> Self {
        match catalog {
            None => Self::Loading,
            Some(catalog) if catalog.is_empty() => Self::Empty,
            Some(catalog) => Self::Songs(catalog.songs.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeTarget {
    SongOverlay,
    PageReferences,
}

/// The song overlay sits above the page, so it takes the cancel key first.
pub fn escape_target(
    key: &str,
    overlay_open: bool,
    page_references_open: bool,
) -> Option<EscapeTarget> {
    if key != CANCEL_KEY {
        return None;
    }
    if overlay_open {
        Some(EscapeTarget::SongOverlay)
    } else if page_references_open {
        Some(EscapeTarget::PageReferences)
    } else {
        None
    }
}

/// Applies a key press to whichever layer `escape_target` picks.
pub fn dispatch_escape(
    key: &str,
    mut song_modal: SongModalController,
    mut page_references_open: Signal<bool>,
) {
    let overlay_open = song_modal.is_open();
    let references_open = *page_references_open.peek();
    match escape_target(key, overlay_open, references_open) {
        Some(EscapeTarget::SongOverlay) => {
            song_modal.handle_key(key);
        }
        Some(EscapeTarget::PageReferences) => page_references_open.set(false),
        None => {}
    }
}

#[component]
fn GalleryMain(
    content: GalleryContent,
    empty_message: String,
    on_select: EventHandler<SharedSong>,
) -> Element {
    match content {
        GalleryContent::Loading => rsx! {
            div { id: "song-grid", class: "song-grid loading",
                Icon { name: "loader".to_string(), class: "w-6 h-6 animate-spin".to_string() }
            }
        },
        GalleryContent::Empty => rsx! {
            div { id: "song-grid", class: "song-grid",
                p { class: "empty-state", "{empty_message}" }
            }
        },
        GalleryContent::Songs(songs) => rsx! {
            SongGrid { songs, on_select }
        },
    }
}

#[component]
pub fn GalleryShell() -> Element {
    let config = use_context::<GalleryConfig>();
    let modal_state = use_signal(SongModalState::default);
    let orbs = use_signal(OrbLayout::default);
    let song_modal = SongModalController::new(modal_state, orbs, config.frame_interval_ms());
    let mut page_references_open = use_signal(|| false);

    let catalog = {
        let config = config.clone();
        use_resource(move || {
            let config = config.clone();
            async move { load_songs(&config).await }
        })
    };

    let loaded = catalog();
    let content = GalleryContent::from_catalog(loaded.as_ref());
    let page_references = loaded
        .as_ref()
        .map(|catalog| catalog.references.clone())
        .unwrap_or_default();

    // Escape has to work wherever focus sits, so the web build listens on the document
    #[cfg(target_arch = "wasm32")]
    {
        let listener = use_hook(move || {
            let runtime = Runtime::current();
            let on_key = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                let _guard = RuntimeGuard::new(runtime.clone());
                dispatch_escape(&e.key(), song_modal, page_references_open);
            }) as Box<dyn FnMut(_)>);
            if let Some(document) = window().and_then(|win| win.document()) {
                let _ = document
                    .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
            }
            Rc::new(on_key)
        });
        use_drop(move || {
            let on_key: &Closure<dyn FnMut(web_sys::KeyboardEvent)> = &listener;
            if let Some(document) = window().and_then(|win| win.document()) {
                let _ = document
                    .remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
            }
        });
    }

    let on_keydown = move |evt: KeyboardEvent| {
        if cfg!(not(target_arch = "wasm32")) {
            dispatch_escape(&evt.key().to_string(), song_modal, page_references_open);
        }
    };

    let on_select = {
        let mut song_modal = song_modal;
        move |song: SharedSong| song_modal.open(song)
    };

    let body_class = if song_modal.is_open() {
        "app-shell modal-open"
    } else {
        "app-shell"
    };

    rsx! {
        div { class: "{body_class}", onkeydown: on_keydown,
            header { class: "page-header",
                h1 { class: "page-title", "SongDeck" }
            }

            main { class: "page-main",
                GalleryMain { content, empty_message: config.empty_message.clone(), on_select }
            }

            footer { class: "page-footer",
                button {
                    id: "footer-references-btn",
                    class: "footer-references",
                    onclick: move |_| page_references_open.set(true),
                    Icon { name: "book".to_string(), class: "w-4 h-4".to_string() }
                    "References"
                }
            }

            ReferencesPanel {
                open: page_references_open(),
                title: "References".to_string(),
                references: page_references,
                on_close: move |_| page_references_open.set(false),
            }

            SongModal { controller: song_modal }
        }
    }
}
