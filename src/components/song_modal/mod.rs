//! Song detail overlay: controller binding, players, and references panel.

use crate::api::{Reference, SharedSong};
use crate::components::Icon;
use crate::diagnostics::Stopwatch;
use crate::overlay::{orb_layout, ActivePlayer, FrameScheduler, OrbLayout, OverlayState};
use crate::utils::description_blocks;
use dioxus::core::{current_scope_id, Runtime, Task};
use dioxus::prelude::*;

// Dioxus-backed controller and the orb animation task it owns.
include!("controller.rs");
// Overlay component split into setup and view chunks.
include!("overlay.rs");
// YouTube/Spotify tabs and embed frames.
include!("players.rs");
// Per-song references sub-panel.
include!("references_panel.rs");
