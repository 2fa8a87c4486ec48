//! Browser console output. Only the wasm32 build talks to `web_sys`; native
//! builds route the same messages through `tracing`.

pub fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("{message}");
}

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("{message}");
}
