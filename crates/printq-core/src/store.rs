use crate::error::{QueueError, Result};
use crate::order::Order;
use crate::paths;
use std::path::{Path, PathBuf};
use tracing::warn;

// ---------------------------------------------------------------------------
// OrderStore
// ---------------------------------------------------------------------------

/// Durable slot holding the full order collection.
///
/// Reads never fail: an absent or malformed slot degrades to an empty
/// collection. Writes replace the whole collection; a failed write surfaces
/// as [`QueueError::Persistence`] so callers can warn that the submission
/// may not be saved. The whole-collection write is a deliberate
/// last-writer-wins simplification kept behind this trait so it can be
/// swapped for a version-checked store without touching callers.
pub trait OrderStore {
    fn load(&self) -> Vec<Order>;
    fn save(&self, orders: &[Order]) -> Result<()>;
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// File-backed store: a single JSON array at `.printq/orders.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: &Path) -> Self {
        Self {
            path: paths::orders_path(root),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderStore for JsonFileStore {
    fn load(&self) -> Vec<Order> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable order slot, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(orders) => orders,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed order slot, treating as empty");
                Vec::new()
            }
        }
    }

    fn save(&self, orders: &[Order]) -> Result<()> {
        let data = serde_json::to_vec_pretty(orders)
            .map_err(|e| QueueError::Persistence(e.to_string()))?;
        crate::io::atomic_write(&self.path, &data)
            .map_err(|e| QueueError::Persistence(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Identity;
    use crate::order::OrderDraft;
    use crate::types::{Area, Part};
    use tempfile::TempDir;

    fn sample_order(id: &str) -> Order {
        let draft = OrderDraft {
            name_and_registration: "Maria 12345".to_string(),
            area: Area::Processos,
            email: "maria@example.com".to_string(),
            part: Part::Helice,
            other_part_description: None,
            manufacturer_code: "FAB-7".to_string(),
            equipment: "Misturador".to_string(),
        };
        let identity = Identity {
            uid: "2".to_string(),
            email: "user@example.com".to_string(),
        };
        Order::from_draft(id.to_string(), draft, &identity)
    }

    #[test]
    fn absent_slot_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load().is_empty());
    }

    #[test]
    fn malformed_slot_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::create_dir_all(dir.path().join(".printq")).unwrap();
        std::fs::write(store.path(), b"{not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let orders = vec![sample_order("1"), sample_order("2")];
        store.save(&orders).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "1");
        assert_eq!(loaded[1].part, Part::Helice);
    }

    #[test]
    fn unwritable_slot_surfaces_persistence() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        // A directory where the slot file should be makes the rename fail
        std::fs::create_dir_all(store.path()).unwrap();

        let result = store.save(&[sample_order("1")]);
        assert!(matches!(result, Err(QueueError::Persistence(_))));
    }

    #[test]
    fn slot_is_a_json_array() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save(&[sample_order("1")]).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
    }
}
