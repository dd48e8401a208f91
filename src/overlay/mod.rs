//! Song overlay state machine.
//!
//! Kept free of any rendering framework: the UI binds events to these
//! methods and reads the resulting state back. The decorative animation is
//! started and cancelled through a [`FrameScheduler`] supplied by the caller.

mod animation;

pub use animation::*;

use crate::api::SharedSong;
use crate::utils::encode_id;

pub const CANCEL_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePlayer {
    #[default]
    YouTube,
    Spotify,
}

impl ActivePlayer {
    pub fn label(self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
            Self::Spotify => "Spotify",
        }
    }
}

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}?rel=0", encode_id(video_id))
}

pub fn spotify_embed_url(track_id: &str) -> String {
    format!(
        "https://open.spotify.com/embed/track/{}?utm_source=generator&theme=0",
        encode_id(track_id)
    )
}

/// Starts and stops the recurring per-frame task behind the overlay.
pub trait FrameScheduler {
    type Handle;

    fn start(&mut self) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState<H> {
    is_open: bool,
    current_song: Option<SharedSong>,
    active_player: ActivePlayer,
    is_expanded: bool,
    references_open: bool,
    animation: Option<H>,
    youtube_src: Option<String>,
    spotify_src: Option<String>,
}

impl<H> Default for OverlayState<H> {
    fn default() -> Self {
        Self {
            is_open: false,
            current_song: None,
            active_player: ActivePlayer::YouTube,
            is_expanded: false,
            references_open: false,
            animation: None,
            youtube_src: None,
            spotify_src: None,
        }
    }
}

impl<H> OverlayState<H> {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_song(&self) -> Option<&SharedSong> {
        self.current_song.as_ref()
    }

    pub fn active_player(&self) -> ActivePlayer {
        self.active_player
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    pub fn references_open(&self) -> bool {
        self.references_open
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Handle of the running animation, if any.
    pub fn animation(&self) -> Option<&H> {
        self.animation.as_ref()
    }

    pub fn youtube_src(&self) -> Option<&str> {
        self.youtube_src.as_deref()
    }

    pub fn spotify_src(&self) -> Option<&str> {
        self.spotify_src.as_deref()
    }

    /// Show `song`. Re-opening while already open swaps the song and
    /// restarts the animation so only one task is ever running.
    pub fn open<S>(&mut self, song: SharedSong, scheduler: &mut S)
    where
        S: FrameScheduler<Handle = H>,
    {
        if let Some(handle) = self.animation.take() {
            scheduler.cancel(handle);
        }

        self.youtube_src = Some(youtube_embed_url(&song.youtube_id));
        self.spotify_src = None;
        self.current_song = Some(song);
        self.is_open = true;
        self.active_player = ActivePlayer::YouTube;
        self.is_expanded = false;
        self.references_open = false;
        self.animation = Some(scheduler.start());
    }

    /// Hide the overlay and reset everything, stopping both embeds.
    /// Safe to call at any time; closing twice equals closing once.
    pub fn close<S>(&mut self, scheduler: &mut S)
    where
        S: FrameScheduler<Handle = H>,
    {
        if let Some(handle) = self.animation.take() {
            scheduler.cancel(handle);
        }
        self.is_expanded = false;
        self.references_open = false;
        self.youtube_src = None;
        self.spotify_src = None;
        self.current_song = None;
        self.is_open = false;
    }

    pub fn switch_player(&mut self, target: ActivePlayer) {
        if !self.is_open {
            return;
        }
        let Some(song) = self.current_song.clone() else {
            return;
        };

        self.active_player = target;
        match target {
            ActivePlayer::Spotify => {
                self.youtube_src = None;
                self.spotify_src = song.spotify_id.as_deref().map(spotify_embed_url);
            }
            ActivePlayer::YouTube => {
                self.spotify_src = None;
                self.youtube_src = Some(youtube_embed_url(&song.youtube_id));
            }
        }
    }

    pub fn toggle_expand(&mut self) {
        if self.is_open {
            self.is_expanded = !self.is_expanded;
        }
    }

    pub fn open_references(&mut self) {
        if self.is_open {
            self.references_open = true;
        }
    }

    pub fn close_references(&mut self) {
        self.references_open = false;
    }

    /// Returns `true` when the key was consumed by the overlay.
    pub fn handle_key<S>(&mut self, key: &str, scheduler: &mut S) -> bool
    where
        S: FrameScheduler<Handle = H>,
    {
        if key == CANCEL_KEY && self.is_open {
            self.close(scheduler);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Song;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[derive(Default)]
    struct CountingScheduler {
        next: u32,
        running: HashSet<u32>,
        started: u32,
    }

    impl FrameScheduler for CountingScheduler {
        type Handle = u32;

        fn start(&mut self) -> u32 {
            self.next += 1;
            self.started += 1;
            self.running.insert(self.next);
            self.next
        }

        fn cancel(&mut self, handle: u32) {
            assert!(self.running.remove(&handle), "cancelled unknown task {handle}");
        }
    }

    fn song(id: &str, spotify: Option<&str>) -> SharedSong {
        Rc::new(Song {
            id: id.to_string(),
            title: format!("Title {id}"),
            artist: "Artist".to_string(),
            youtube_id: format!("yt-{id}"),
            spotify_id: spotify.map(str::to_string),
            ..Song::default()
        })
    }

    fn assert_closed(state: &OverlayState<u32>, scheduler: &CountingScheduler) {
        assert!(!state.is_open());
        assert!(state.current_song().is_none());
        assert!(state.youtube_src().is_none());
        assert!(state.spotify_src().is_none());
        assert!(!state.is_expanded());
        assert!(!state.references_open());
        assert!(!state.is_animating());
        assert!(scheduler.running.is_empty());
    }

    #[test]
    fn open_defaults_to_youtube_and_leaves_spotify_unloaded() {
        let mut scheduler = CountingScheduler::default();
        let mut state = OverlayState::default();
        state.open(song("a", Some("sp-a")), &mut scheduler);

        assert!(state.is_open());
        assert_eq!(state.current_song().map(|s| s.id.as_str()), Some("a"));
        assert_eq!(state.active_player(), ActivePlayer::YouTube);
        assert_eq!(
            state.youtube_src(),
            Some("https://www.youtube.com/embed/yt-a?rel=0")
        );
        assert!(state.spotify_src().is_none());
        assert!(state.is_animating());
        assert_eq!(scheduler.running.len(), 1);
    }

    #[test]
    fn open_then_close_resets_everything() {
        for spotify in [None, Some("sp")] {
            let mut scheduler = CountingScheduler::default();
            let mut state = OverlayState::default();
            state.open(song("a", spotify), &mut scheduler);
            state.toggle_expand();
            state.open_references();
            state.switch_player(ActivePlayer::Spotify);
            state.close(&mut scheduler);
            assert_closed(&state, &scheduler);
        }
    }

    #[test]
    fn close_twice_equals_close_once() {
        let mut scheduler = CountingScheduler::default();
        let mut state = OverlayState::default();
        state.open(song("a", Some("sp")), &mut scheduler);
        state.close(&mut scheduler);
        let once = state.clone();
        state.close(&mut scheduler);
        assert_eq!(state, once);
        assert_closed(&state, &scheduler);
    }

    #[test]
    fn close_without_open_is_harmless() {
        let mut scheduler = CountingScheduler::default();
        let mut state = OverlayState::<u32>::default();
        state.close(&mut scheduler);
        assert_closed(&state, &scheduler);
        assert_eq!(scheduler.started, 0);
    }

    #[test]
    fn reopen_replaces_song_and_animation() {
        let mut scheduler = CountingScheduler::default();
        let mut state = OverlayState::default();
        state.open(song("a", Some("sp-a")), &mut scheduler);
        state.switch_player(ActivePlayer::Spotify);
        state.toggle_expand();
        state.open(song("b", None), &mut scheduler);

        assert_eq!(state.current_song().map(|s| s.id.as_str()), Some("b"));
        assert_eq!(state.active_player(), ActivePlayer::YouTube);
        assert!(!state.is_expanded());
        assert!(state.spotify_src().is_none());
        assert_eq!(scheduler.started, 2);
        assert_eq!(scheduler.running.len(), 1);
    }

    #[test]
    fn switching_keeps_exactly_one_source_loaded() {
        let mut scheduler = CountingScheduler::default();
        let mut state = OverlayState::default();
        state.open(song("a", Some("sp-a")), &mut scheduler);

        state.switch_player(ActivePlayer::Spotify);
        assert_eq!(state.active_player(), ActivePlayer::Spotify);
        assert!(state.youtube_src().is_none());
        assert_eq!(
            state.spotify_src(),
            Some("https://open.spotify.com/embed/track/sp-a?utm_source=generator&theme=0")
        );

        state.switch_player(ActivePlayer::YouTube);
        assert!(state.spotify_src().is_none());
        assert!(state.youtube_src().is_some());

        state.switch_player(ActivePlayer::YouTube);
        assert!(state.spotify_src().is_none());
        assert!(state.youtube_src().is_some());
    }

    #[test]
    fn spotify_without_track_leaves_both_players_empty() {
        let mut scheduler = CountingScheduler::default();
        let mut state = OverlayState::default();
        state.open(song("a", None), &mut scheduler);
        state.switch_player(ActivePlayer::Spotify);

        assert!(state.is_open());
        assert_eq!(state.active_player(), ActivePlayer::Spotify);
        assert!(state.youtube_src().is_none());
        assert!(state.spotify_src().is_none());
    }

    #[test]
    fn switching_while_closed_does_nothing() {
        let mut state = OverlayState::<u32>::default();
        state.switch_player(ActivePlayer::Spotify);
        assert_eq!(state, OverlayState::default());
    }

    #[test]
    fn expand_and_references_are_independent_of_player() {
        let mut scheduler = CountingScheduler::default();
        let mut state = OverlayState::default();
        state.open(song("a", Some("sp")), &mut scheduler);
        let youtube = state.youtube_src().map(str::to_string);

        state.toggle_expand();
        assert!(state.is_expanded());
        assert_eq!(state.youtube_src().map(str::to_string), youtube);

        state.open_references();
        state.switch_player(ActivePlayer::Spotify);
        assert!(state.references_open());
        assert!(state.is_expanded());

        state.close_references();
        state.toggle_expand();
        assert!(!state.references_open());
        assert!(!state.is_expanded());
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut scheduler = CountingScheduler::default();
        let mut state = OverlayState::<u32>::default();
        assert!(!state.handle_key(CANCEL_KEY, &mut scheduler));
        assert_eq!(state, OverlayState::default());

        state.open(song("a", None), &mut scheduler);
        assert!(!state.handle_key("Enter", &mut scheduler));
        assert!(state.is_open());
        assert!(state.handle_key(CANCEL_KEY, &mut scheduler));
        assert_closed(&state, &scheduler);
    }

    #[test]
    fn repeated_cycles_leak_no_animation() {
        let mut scheduler = CountingScheduler::default();
        let mut state = OverlayState::default();
        for n in 0..25 {
            state.open(song(&n.to_string(), None), &mut scheduler);
            if n % 3 == 0 {
                state.open(song("again", Some("sp")), &mut scheduler);
            }
            state.close(&mut scheduler);
        }
        assert!(scheduler.running.is_empty());
    }
}
