use crate::auth::Identity;
use crate::error::{QueueError, Result};
use crate::order::{Order, OrderDraft};
use crate::store::OrderStore;
use crate::types::Status;
use chrono::Utc;
use tracing::debug;

// ---------------------------------------------------------------------------
// OrderRepository
// ---------------------------------------------------------------------------

/// Owns the canonical order collection and enforces visibility and mutation
/// authorization.
///
/// There is no in-memory cache: every operation re-reads the durable slot
/// before acting, so a change made by another process (the administrator in
/// a different session, say) is picked up on the next call. Mutations
/// read-modify-write the entire collection; two writers inside the same
/// wall-clock window race last-writer-wins.
pub struct OrderRepository<S: OrderStore> {
    store: S,
}

impl<S: OrderStore> OrderRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The viewer-scoped snapshot: everything for the administrator, own
    /// orders only for everyone else. An empty, absent, or corrupt slot is
    /// an empty queue, never an error.
    pub fn list_visible(&self, identity: &Identity, is_admin: bool) -> Vec<Order> {
        let orders = self.store.load();
        if is_admin {
            return orders;
        }
        orders
            .into_iter()
            .filter(|order| order.user_id == identity.uid)
            .collect()
    }

    /// Validate the draft, stamp a new pending order owned by `identity`,
    /// and persist it appended to a freshly re-read collection.
    pub fn create(&self, identity: &Identity, draft: OrderDraft) -> Result<Order> {
        draft.validate()?;

        let mut orders = self.store.load();
        let id = next_id(&orders);
        let order = Order::from_draft(id, draft, identity);
        debug!(id = %order.id, owner = %order.user_id, "creating order");

        orders.push(order.clone());
        self.store.save(&orders)?;
        Ok(order)
    }

    /// Administrator-only status change. Any target status is accepted from
    /// any current status; there are no forbidden transitions.
    pub fn update_status(
        &self,
        is_admin: bool,
        order_id: &str,
        new_status: Status,
    ) -> Result<Order> {
        if !is_admin {
            return Err(QueueError::NotAdministrator);
        }

        let mut orders = self.store.load();
        let order = orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or_else(|| QueueError::OrderNotFound(order_id.to_string()))?;

        order.status = new_status;
        let updated = order.clone();
        debug!(id = %order_id, status = %new_status, "updating order status");

        self.store.save(&orders)?;
        Ok(updated)
    }
}

/// Creation-timestamp id, disambiguated against the current collection in
/// case two creations land in the same millisecond.
fn next_id(orders: &[Order]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    while orders.iter().any(|o| o.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
