//! Timer primitives for the carousel and section sequencers.

/// Sleep for `ms` milliseconds on the platform's event loop.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let clamped = ms.min(u64::from(u32::MAX)) as u32;
    gloo_timers::future::TimeoutFuture::new(clamped).await;
}

/// Sleep for `ms` milliseconds on the platform's event loop.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Milliseconds in `secs` whole seconds.
pub fn secs_to_ms(secs: u32) -> u64 {
    u64::from(secs) * 1_000
}
