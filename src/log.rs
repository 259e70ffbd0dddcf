//! Browser console logging.

const PREFIX: &str = "ANM";

fn format_message(msg: &str) -> String {
    format!("{}: {}", PREFIX, msg)
}

/// Log a non-fatal problem to the browser console.
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&format_message(msg).into());
}

/// Log a diagnostic message. Debug builds only.
pub fn debug(msg: &str) {
    if cfg!(debug_assertions) {
        web_sys::console::debug_1(&format_message(msg).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_prefixed() {
        assert_eq!(format_message("route not found"), "ANM: route not found");
    }
}
