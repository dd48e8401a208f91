use crate::api::models::*;
use crate::config::GalleryConfig;
use crate::diagnostics::{log_perf, Stopwatch};
#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Directory that relative catalog paths resolve against on native targets.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_ASSET_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn parse_catalog(body: &str) -> Result<Catalog, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(body)?;
    Ok(document.into())
}

/// Loads the song catalog once. Failures are logged and reported as an
/// empty catalog so the page can fall back to its empty state.
pub async fn load_songs(config: &GalleryConfig) -> Catalog {
    let stopwatch = Stopwatch::start();
    match fetch_catalog(&config.catalog_url).await {
        Ok(catalog) => {
            log_perf(
                "catalog.load",
                &stopwatch,
                &format!("{} songs", catalog.songs.len()),
            );
            tracing::info!(
                url = %config.catalog_url,
                songs = catalog.songs.len(),
                "loaded song catalog"
            );
            catalog
        }
        Err(err) => {
            tracing::error!(url = %config.catalog_url, "Error loading songs: {err}");
            Catalog::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(CatalogError::Http(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Transport(e.to_string()))?;
    parse_catalog(&body)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        let response = HTTP_CLIENT
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Http(status.as_u16()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        return parse_catalog(&body);
    }

    let body = tokio::fs::read_to_string(native_catalog_path(url)).await?;
    parse_catalog(&body)
}

#[cfg(not(target_arch = "wasm32"))]
fn native_catalog_path(url: &str) -> std::path::PathBuf {
    let path = std::path::Path::new(url);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::path::Path::new(NATIVE_ASSET_DIR).join(url.trim_start_matches("./"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SONGS: &str = r#"{
        "songs": [
            {"id": "a", "number": 1, "title": "First", "artist": "One", "youtubeId": "y1"},
            {"id": "b", "number": 2, "title": "Second", "artist": "Two", "youtubeId": "y2", "spotifyId": "s2"}
        ],
        "references": [{"title": "Liner notes", "url": "https://example.org/notes"}]
    }"#;

    #[test]
    fn parse_keeps_document_order() {
        let catalog = parse_catalog(TWO_SONGS).unwrap();
        let ids: Vec<&str> = catalog.songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(catalog.references.len(), 1);
    }

    #[test]
    fn parse_rejects_missing_songs_field() {
        let err = parse_catalog(r#"{"tracks": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_catalog("<html>404</html>"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn relative_paths_resolve_under_public_dir() {
        assert_eq!(
            native_catalog_path("./data/songs.json"),
            std::path::Path::new("public").join("data/songs.json")
        );
    }

    #[tokio::test]
    async fn load_reads_catalog_file() {
        let path = std::env::temp_dir().join(format!("songdeck-catalog-{}.json", std::process::id()));
        tokio::fs::write(&path, TWO_SONGS).await.unwrap();

        let config = GalleryConfig {
            catalog_url: path.to_string_lossy().into_owned(),
            ..GalleryConfig::default()
        };
        let catalog = load_songs(&config).await;
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(catalog.songs.len(), 2);
        assert_eq!(catalog.songs[1].spotify_id.as_deref(), Some("s2"));
    }

    #[tokio::test]
    async fn load_failure_yields_empty_catalog() {
        let config = GalleryConfig {
            catalog_url: "/definitely/not/here/songs.json".to_string(),
            ..GalleryConfig::default()
        };
        assert!(load_songs(&config).await.is_empty());
    }

    #[tokio::test]
    async fn load_malformed_file_yields_empty_catalog() {
        let path = std::env::temp_dir().join(format!("songdeck-bad-{}.json", std::process::id()));
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let config = GalleryConfig {
            catalog_url: path.to_string_lossy().into_owned(),
            ..GalleryConfig::default()
        };
        let catalog = load_songs(&config).await;
        let _ = tokio::fs::remove_file(&path).await;

        assert!(catalog.is_empty());
    }
}
