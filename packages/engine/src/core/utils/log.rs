//! Console logging macros
//!
//! In the browser: forwards to `console.log` / `console.warn` / `console.error`.
//! Natively: messages are dropped (tests never touch JS imports).
//!
//! Usage:
//! ```rust
//! use tumble_engine::console_log;
//!
//! let bodies = 3;
//! console_log!("spawned {} bodies", bodies);
//! ```

/// Log an informational message to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::log::log(&format!($($arg)*))
    };
}

/// Log a warning to the browser console.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::log::warn(&format!($($arg)*))
    };
}

/// Log an error to the browser console.
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::core::log::error(&format!($($arg)*))
    };
}

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_message: &str) {}
