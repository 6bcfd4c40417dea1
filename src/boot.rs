//! Browser environment initialization.
//!
//! Called once from the host app's hydrate entry before any component
//! mounts.

/// Install the panic hook and console logger for browser builds.
#[cfg(feature = "hydrate")]
pub fn init_browser_env() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// No-op outside the browser; logging is left to the host process.
#[cfg(not(feature = "hydrate"))]
pub fn init_browser_env() {}
