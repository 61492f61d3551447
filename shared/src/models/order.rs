//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status as reported by the backend
///
/// ```text
/// pending ──accept──▶ accepted ──complete──▶ completed
///    │                   │
///    └──reject──▶ rejected ◀──delete──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Completed,
    Rejected,
    /// Any status this console does not know about; treated as terminal
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Completed => "completed",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Unknown => "unknown",
        }
    }

    /// Actions offered for an order in this status
    pub fn actions(&self) -> &'static [OrderAction] {
        match self {
            OrderStatus::Pending => &[OrderAction::Accept, OrderAction::Reject],
            OrderStatus::Accepted => &[OrderAction::Complete, OrderAction::Delete],
            OrderStatus::Completed | OrderStatus::Rejected | OrderStatus::Unknown => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.actions().is_empty()
    }

    /// Whether `action` may be applied from this status
    pub fn allows(&self, action: OrderAction) -> bool {
        self.actions().contains(&action)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Order status transition triggered from the orders table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderAction {
    Accept,
    Reject,
    Complete,
    /// Offered on accepted orders; moves them to `rejected`
    Delete,
}

impl OrderAction {
    /// Status the order moves to
    pub fn target(&self) -> OrderStatus {
        match self {
            OrderAction::Accept => OrderStatus::Accepted,
            OrderAction::Reject | OrderAction::Delete => OrderStatus::Rejected,
            OrderAction::Complete => OrderStatus::Completed,
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            OrderAction::Accept => "Accept",
            OrderAction::Reject => "Reject",
            OrderAction::Complete => "Complete",
            OrderAction::Delete => "Delete",
        }
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: OrderStatus,
    pub total: f64,
    /// User reference, either an id or a populated user document
    #[serde(default)]
    pub user: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Best-effort display name for the ordering user
    pub fn user_label(&self) -> String {
        match &self.user {
            serde_json::Value::String(id) => id.clone(),
            serde_json::Value::Object(doc) => ["name", "email", "_id"]
                .iter()
                .find_map(|key| doc.get(*key).and_then(|v| v.as_str()))
                .unwrap_or("-")
                .to_string(),
            _ => "-".to_string(),
        }
    }
}

/// Aggregate counts shown on the overview tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl OrderSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        Self {
            total: orders.len(),
            pending: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            completed: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Completed)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn actions_follow_the_status_machine() {
        assert_eq!(
            OrderStatus::Pending.actions(),
            &[OrderAction::Accept, OrderAction::Reject]
        );
        assert_eq!(
            OrderStatus::Accepted.actions(),
            &[OrderAction::Complete, OrderAction::Delete]
        );
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Rejected.is_terminal());
        assert!(!OrderStatus::Pending.allows(OrderAction::Complete));
        assert_eq!(OrderAction::Delete.target(), OrderStatus::Rejected);
        assert_eq!(OrderAction::Delete.label(), "Delete");
    }

    #[test]
    fn unknown_status_decodes_as_terminal() {
        let order: Order = serde_json::from_value(json!({
            "_id": "o1",
            "status": "refunded",
            "total": 12.0,
            "user": {"name": "Ana"},
            "createdAt": "2024-05-01T12:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(order.status, OrderStatus::Unknown);
        assert!(order.status.is_terminal());
        assert_eq!(order.user_label(), "Ana");
    }

    #[test]
    fn summary_counts_pending_and_completed() {
        let order = |id: &str, status: &str| -> Order {
            serde_json::from_value(json!({
                "_id": id, "status": status, "total": 1.0, "user": "u1",
                "createdAt": "2024-05-01T12:00:00Z"
            }))
            .unwrap()
        };
        let orders = vec![
            order("1", "pending"),
            order("2", "pending"),
            order("3", "completed"),
            order("4", "rejected"),
        ];

        assert_eq!(
            OrderSummary::from_orders(&orders),
            OrderSummary {
                total: 4,
                pending: 2,
                completed: 1
            }
        );
    }
}
