use crate::order::Order;
use chrono::DateTime;
use std::fmt;

// ---------------------------------------------------------------------------
// SortMode
// ---------------------------------------------------------------------------

/// How a viewer wants their visible queue ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Most recent first.
    Recency,
    /// In progress, then pending, then completed, then failed/cancelled.
    Status,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Recency => "recency",
            SortMode::Status => "status",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortMode {
    type Err = crate::error::QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            // "createdAt" is the legacy name for the recency mode
            "recency" | "createdAt" => Ok(SortMode::Recency),
            "status" => Ok(SortMode::Status),
            _ => Err(crate::error::QueueError::Validation(vec![format!(
                "unknown sort mode '{s}' (expected 'recency' or 'status')"
            )])),
        }
    }
}

// ---------------------------------------------------------------------------
// sort
// ---------------------------------------------------------------------------

/// Derive the display ordering for a snapshot. Pure and deterministic for
/// identical inputs; the input slice is left untouched.
///
/// Status ties break on descending `created_at`, so the freshest work shows
/// first within each status band.
pub fn sort(orders: &[Order], mode: SortMode) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    match mode {
        SortMode::Recency => {
            sorted.sort_by_key(|o| std::cmp::Reverse(created_millis(o)));
        }
        SortMode::Status => {
            sorted.sort_by_key(|o| (o.status.priority(), std::cmp::Reverse(created_millis(o))));
        }
    }
    sorted
}

/// Creation instant in epoch milliseconds. An unparseable timestamp sorts
/// as oldest rather than failing the whole view.
fn created_millis(order: &Order) -> i64 {
    DateTime::parse_from_rfc3339(&order.created_at)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(i64::MIN)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Area, Part, Status};
    use std::str::FromStr;

    fn order(id: &str, created_at: &str, status: Status) -> Order {
        Order {
            id: id.to_string(),
            name_and_registration: "Maria 12345".to_string(),
            area: Area::Envase,
            email: "maria@example.com".to_string(),
            part: Part::Sapata,
            other_part_description: None,
            manufacturer_code: "FAB-001".to_string(),
            equipment: "Enchedora".to_string(),
            status,
            created_at: created_at.to_string(),
            user_id: "2".to_string(),
            user_email: "user@example.com".to_string(),
        }
    }

    #[test]
    fn recency_most_recent_first() {
        let orders = vec![
            order("a", "2024-01-01T00:00:00Z", Status::Pendente),
            order("b", "2024-03-01T00:00:00Z", Status::Pendente),
            order("c", "2024-02-01T00:00:00Z", Status::Pendente),
        ];
        let sorted = sort(&orders, SortMode::Recency);
        let ids: Vec<&str> = sorted.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn status_priority_ordering() {
        let orders = vec![
            order("done", "2024-01-01T00:00:00Z", Status::Concluido),
            order("wip", "2024-01-01T00:00:00Z", Status::EmAndamento),
            order("dead", "2024-01-01T00:00:00Z", Status::Falha),
            order("wait", "2024-01-01T00:00:00Z", Status::Pendente),
        ];
        let sorted = sort(&orders, SortMode::Status);
        let ids: Vec<&str> = sorted.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["wip", "wait", "done", "dead"]);
    }

    #[test]
    fn status_ties_break_on_recency() {
        let orders = vec![
            order("old", "2024-01-01T00:00:00Z", Status::Pendente),
            order("new", "2024-02-01T00:00:00Z", Status::Pendente),
        ];
        let sorted = sort(&orders, SortMode::Status);
        assert_eq!(sorted[0].id, "new");
        assert_eq!(sorted[1].id, "old");
    }

    #[test]
    fn sort_does_not_mutate_input() {
        let orders = vec![
            order("a", "2024-01-01T00:00:00Z", Status::Pendente),
            order("b", "2024-03-01T00:00:00Z", Status::Pendente),
        ];
        let _ = sort(&orders, SortMode::Recency);
        assert_eq!(orders[0].id, "a");
    }

    #[test]
    fn sort_mode_parsing() {
        assert_eq!(SortMode::from_str("recency").unwrap(), SortMode::Recency);
        assert_eq!(SortMode::from_str("createdAt").unwrap(), SortMode::Recency);
        assert_eq!(SortMode::from_str("status").unwrap(), SortMode::Status);
        assert!(SortMode::from_str("priority").is_err());
    }
}
