//! Process-wide panic logging.

use podbot_common::panic_message;
use tracing::error;

/// Routes panics from any thread or task through `tracing`.
///
/// Panics inside a command are already caught by the dispatcher; this hook
/// covers everything else, such as a failing gateway task. Install it after
/// logging is initialised.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map_or_else(|| "<unknown>".to_string(), |l| format!("{}:{}", l.file(), l.line()));
        let thread = std::thread::current();
        error!(
            target: "podbot::panic",
            thread = thread.name().unwrap_or("<unnamed>"),
            "Unhandled panic at {}: {}",
            location,
            panic_message(info.payload())
        );
    }));
}
