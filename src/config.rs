//! Compile-time gallery settings, provided to the component tree via context.

pub const DEFAULT_CATALOG_URL: &str = "data/songs.json";
/// Roughly one animation frame at 60Hz.
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 16;
pub const DEFAULT_EMPTY_MESSAGE: &str = "No songs found.";

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub catalog_url: String,
    pub frame_interval_ms: u32,
    pub empty_message: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn frame_interval_ms(&self) -> u32 {
        self.frame_interval_ms.max(1)
    }
}
