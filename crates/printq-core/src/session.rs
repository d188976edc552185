use crate::auth::Identity;
use crate::paths;
use std::path::{Path, PathBuf};
use tracing::warn;

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

/// Volatile slot caching the authenticated identity between commands.
///
/// Writes are fire-and-forget: if the slot is unavailable the system keeps
/// going and the user re-authenticates next time. A stored value that no
/// longer parses is cleared and reported as absent, never as an error.
pub trait SessionStore {
    fn load(&self) -> Option<Identity>;
    fn save(&self, identity: &Identity);
    fn clear(&self);
}

// ---------------------------------------------------------------------------
// FileSessionStore
// ---------------------------------------------------------------------------

/// Session slot at `.printq/session.json`, JSON `{uid, email}`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(root: &Path) -> Self {
        Self {
            path: paths::session_path(root),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Identity> {
        let data = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&data) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "clearing unparseable session slot");
                self.clear();
                None
            }
        }
    }

    fn save(&self, identity: &Identity) {
        let data = match serde_json::to_vec(identity) {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "failed to serialize session, continuing without one");
                return;
            }
        };
        if let Err(e) = crate::io::atomic_write(&self.path, &data) {
            warn!(path = %self.path.display(), error = %e, "failed to persist session, continuing without one");
        }
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "failed to clear session slot");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
