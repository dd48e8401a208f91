use dioxus::prelude::*;
use tracing::Level;

mod api;
mod components;
mod config;
mod diagnostics;
mod overlay;
mod utils;

use components::GalleryShell;
use config::GalleryConfig;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(GalleryConfig::default);

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Meta { name: "theme-color", content: "#1b1530" }
        document::Meta { name: "apple-mobile-web-app-title", content: "SongDeck" }
        document::Title { "SongDeck" }

        document::Stylesheet { href: APP_CSS }

        GalleryShell {}
    }
}
