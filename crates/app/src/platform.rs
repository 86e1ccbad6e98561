//! Display server detection for startup logging
//!
//! Pinecamp runs wherever Slint does; knowing the session type up front
//! makes renderer issues much easier to triage from logs.

use std::env;

/// Best-effort guess at the active display server
pub fn display_server() -> &'static str {
    if env::var_os("WAYLAND_DISPLAY").is_some() {
        "Wayland"
    } else if env::var_os("DISPLAY").is_some() {
        "X11"
    } else {
        "Unknown"
    }
}

/// Log platform information at startup
pub fn log_platform_info() {
    tracing::info!(display_server = display_server(), "Display server detected");

    if let Ok(backend) = env::var("SLINT_BACKEND") {
        tracing::info!(backend = %backend, "Slint backend override");
    }

    if let Ok(session_type) = env::var("XDG_SESSION_TYPE") {
        tracing::debug!(session_type = %session_type, "XDG session type");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_server_is_known_label() {
        assert!(["Wayland", "X11", "Unknown"].contains(&display_server()));
    }
}
