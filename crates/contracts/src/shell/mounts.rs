//! Mount points rendered by the server and filled by the client.

/// Attribute carrying the mount name.
pub const MOUNT_ATTR: &str = "data-mount";

pub const NAVBAR: &str = "navbar";
pub const SETTINGS_MODAL: &str = "settings-modal";
pub const NOTIFICATIONS: &str = "notifications";
pub const PERFORMANCE_MONITOR: &str = "performance-monitor";

/// Id of the `<main>` content region.
pub const MAIN_ID: &str = "main-content";

/// Collaborator mounts in document order.
pub const ALL: [&str; 4] = [NAVBAR, SETTINGS_MODAL, NOTIFICATIONS, PERFORMANCE_MONITOR];

/// CSS selector of a mount point.
pub fn selector(name: &str) -> String {
    format!("[{MOUNT_ATTR}=\"{name}\"]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector() {
        assert_eq!(selector(NAVBAR), "[data-mount=\"navbar\"]");
    }
}
