/// Wall-clock timer that works on both native and wasm targets.
pub struct Stopwatch {
    #[cfg(not(target_arch = "wasm32"))]
    started_at: std::time::Instant,
    #[cfg(target_arch = "wasm32")]
    started_at_ms: f64,
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            started_at: std::time::Instant::now(),
            #[cfg(target_arch = "wasm32")]
            started_at_ms: now_ms(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started_at.elapsed().as_secs_f64()
        }
        #[cfg(target_arch = "wasm32")]
        {
            ((now_ms() - self.started_at_ms) / 1000.0).max(0.0)
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        (self.elapsed_secs() * 1000.0).round() as u64
    }
}

#[inline]
pub fn log_perf(scope: &str, stopwatch: &Stopwatch, details: &str) {
    let elapsed_ms = stopwatch.elapsed_ms();
    if details.trim().is_empty() {
        tracing::debug!("[perf] {scope} took {elapsed_ms}ms");
    } else {
        tracing::debug!("[perf] {scope} took {elapsed_ms}ms | {details}");
    }
}
