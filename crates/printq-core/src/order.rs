use crate::auth::Identity;
use crate::error::{QueueError, Result};
use crate::types::{Area, Part, Status};
use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

/// One print-job request. Field names below are the durable wire format;
/// every field except `status` is immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub name_and_registration: String,
    pub area: Area,
    pub email: String,
    pub part: Part,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_part_description: Option<String>,
    pub manufacturer_code: String,
    pub equipment: String,
    pub status: Status,
    /// ISO-8601 timestamp fixed at creation.
    pub created_at: String,
    pub user_id: String,
    pub user_email: String,
}

// ---------------------------------------------------------------------------
// OrderDraft
// ---------------------------------------------------------------------------

/// The user-supplied subset of an order, before the repository stamps
/// id, status, timestamp, and owner.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub name_and_registration: String,
    pub area: Area,
    pub email: String,
    pub part: Part,
    pub other_part_description: Option<String>,
    pub manufacturer_code: String,
    pub equipment: String,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

impl OrderDraft {
    /// Check required fields, the `Outra` description rule, and the minimal
    /// `local@domain.tld` email shape. Returns every offending field at once
    /// so a form can show the full list.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.name_and_registration.trim().is_empty() {
            problems.push("name and registration is required".to_string());
        }
        if self.email.trim().is_empty() {
            problems.push("contact e-mail is required".to_string());
        } else if !email_re().is_match(self.email.trim()) {
            problems.push(format!("'{}' is not a valid e-mail", self.email));
        }
        if self.manufacturer_code.trim().is_empty() {
            problems.push("manufacturer code is required".to_string());
        }
        if self.equipment.trim().is_empty() {
            problems.push("equipment is required".to_string());
        }
        if self.part == Part::Outra
            && self
                .other_part_description
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .is_empty()
        {
            problems.push("part 'Outra' requires a description".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(QueueError::Validation(problems))
        }
    }
}

impl Order {
    /// Build a new pending order owned by `identity`. `id` must already be
    /// unique within the collection the caller is about to persist.
    /// Free-text fields are trimmed so the durable record matches what
    /// validation checked.
    pub fn from_draft(id: String, draft: OrderDraft, identity: &Identity) -> Self {
        // The description only means anything for the Outra sentinel.
        let other_part_description = if draft.part == Part::Outra {
            draft.other_part_description.map(|d| d.trim().to_string())
        } else {
            None
        };
        Self {
            id,
            name_and_registration: draft.name_and_registration.trim().to_string(),
            area: draft.area,
            email: draft.email.trim().to_string(),
            part: draft.part,
            other_part_description,
            manufacturer_code: draft.manufacturer_code.trim().to_string(),
            equipment: draft.equipment.trim().to_string(),
            status: Status::Pendente,
            created_at: Utc::now().to_rfc3339(),
            user_id: identity.uid.clone(),
            user_email: identity.email.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
