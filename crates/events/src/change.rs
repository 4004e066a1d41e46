//! The cart change notification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::Event;

/// What kind of mutation happened.
///
/// Advisory only: the kind is useful for logging and diagnostics, but
/// consumers must not reconstruct cart state from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    LineAdded,
    QuantityUpdated,
    LineRemoved,
    Cleared,
    CustomerSaved,
}

/// Published once per cart engine mutation, fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartChanged {
    pub event_id: Uuid,
    pub kind: ChangeKind,
    pub occurred_at: DateTime<Utc>,
}

impl CartChanged {
    pub fn now(kind: ChangeKind) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            kind,
            occurred_at: Utc::now(),
        }
    }
}

impl Event for CartChanged {
    fn event_type(&self) -> &'static str {
        match self.kind {
            ChangeKind::LineAdded => "cart.line_added",
            ChangeKind::QuantityUpdated => "cart.quantity_updated",
            ChangeKind::LineRemoved => "cart.line_removed",
            ChangeKind::Cleared => "cart.cleared",
            ChangeKind::CustomerSaved => "cart.customer_saved",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_is_stable_per_kind() {
        let kinds = [
            (ChangeKind::LineAdded, "cart.line_added"),
            (ChangeKind::QuantityUpdated, "cart.quantity_updated"),
            (ChangeKind::LineRemoved, "cart.line_removed"),
            (ChangeKind::Cleared, "cart.cleared"),
            (ChangeKind::CustomerSaved, "cart.customer_saved"),
        ];
        for (kind, expected) in kinds {
            assert_eq!(CartChanged::now(kind).event_type(), expected);
        }
    }

    #[test]
    fn notification_round_trips_through_serde() {
        let changed = CartChanged::now(ChangeKind::LineAdded);
        let raw = serde_json::to_string(&changed).unwrap();
        let back: CartChanged = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, changed);
    }
}
