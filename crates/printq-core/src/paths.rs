use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const PRINTQ_DIR: &str = ".printq";

/// Durable slot holding the full order collection as a JSON array.
pub const ORDERS_FILE: &str = ".printq/orders.json";

/// Volatile slot holding the current session identity as JSON.
pub const SESSION_FILE: &str = ".printq/session.json";

/// Identity registry and administrator marker.
pub const CONFIG_FILE: &str = ".printq/config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn printq_dir(root: &Path) -> PathBuf {
    root.join(PRINTQ_DIR)
}

pub fn orders_path(root: &Path) -> PathBuf {
    root.join(ORDERS_FILE)
}

pub fn session_path(root: &Path) -> PathBuf {
    root.join(SESSION_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
