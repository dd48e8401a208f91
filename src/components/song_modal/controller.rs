// Overlay controller: owns the state signal and drives the orb animation.

#[cfg(not(target_arch = "wasm32"))]
async fn frame_delay_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

#[cfg(target_arch = "wasm32")]
async fn frame_delay_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

async fn animate_orbs(mut orbs: Signal<OrbLayout>, frame_interval_ms: u32) {
    let clock = Stopwatch::start();
    loop {
        orbs.set(orb_layout(clock.elapsed_secs()));
        frame_delay_ms(frame_interval_ms).await;
    }
}

pub type SongModalState = OverlayState<Task>;

struct OrbTicker {
    owner: ScopeId,
    orbs: Signal<OrbLayout>,
    frame_interval_ms: u32,
}

impl FrameScheduler for OrbTicker {
    type Handle = Task;

    // Event handlers run in the scope of the element that fired, so the task
    // is pinned to the scope that built the controller.
    fn start(&mut self) -> Task {
        let animation = animate_orbs(self.orbs, self.frame_interval_ms);
        Runtime::current().in_scope(self.owner, || spawn(animation))
    }

    fn cancel(&mut self, task: Task) {
        task.cancel();
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct SongModalController {
    owner: ScopeId,
    state: Signal<SongModalState>,
    orbs: Signal<OrbLayout>,
    frame_interval_ms: u32,
}

impl SongModalController {
    /// Must be called while rendering the component that owns the overlay.
    pub fn new(
        state: Signal<SongModalState>,
        orbs: Signal<OrbLayout>,
        frame_interval_ms: u32,
    ) -> Self {
        Self {
            owner: current_scope_id(),
            state,
            orbs,
            frame_interval_ms,
        }
    }

    fn ticker(&self) -> OrbTicker {
        OrbTicker {
            owner: self.owner,
            orbs: self.orbs,
            frame_interval_ms: self.frame_interval_ms,
        }
    }

    pub fn open(&mut self, song: SharedSong) {
        tracing::debug!(song = %song.id, "opening song overlay");
        let mut ticker = self.ticker();
        self.state.with_mut(|state| state.open(song, &mut ticker));
    }

    pub fn close(&mut self) {
        let mut ticker = self.ticker();
        self.state.with_mut(|state| state.close(&mut ticker));
    }

    pub fn switch_player(&mut self, target: ActivePlayer) {
        self.state.with_mut(|state| state.switch_player(target));
    }

    pub fn toggle_expand(&mut self) {
        self.state.with_mut(|state| state.toggle_expand());
    }

    pub fn open_references(&mut self) {
        self.state.with_mut(|state| state.open_references());
    }

    pub fn close_references(&mut self) {
        self.state.with_mut(|state| state.close_references());
    }

    /// Returns `true` when the overlay consumed the key.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.state.peek().is_open() {
            return false;
        }
        let mut ticker = self.ticker();
        self.state.with_mut(|state| state.handle_key(key, &mut ticker))
    }

    pub fn is_open(&self) -> bool {
        self.state.read().is_open()
    }

    pub fn current(&self) -> SongModalState {
        (self.state)()
    }

    pub fn orbs(&self) -> Signal<OrbLayout> {
        self.orbs
    }
}
