//! Order status transitions

use admin_client::ConsoleApi;
use shared::{OrderAction, OrderStatus};

use super::{Dashboard, messages};

impl<A: ConsoleApi> Dashboard<A> {
    /// Sends `{status}` for the order and re-fetches all orders
    pub async fn change_order_status(&mut self, order_id: &str, status: OrderStatus) -> bool {
        match self.api.update_order_status(order_id, status).await {
            Ok(()) => {
                self.notify(format!("Order {}", status));
                self.refresh_orders().await;
                true
            }
            Err(e) => {
                self.fail(messages::ORDER_UPDATE_FAILED, &e);
                false
            }
        }
    }

    /// Applies a table action, only if the order's current status offers it.
    ///
    /// Unknown orders and unavailable actions are ignored without a request.
    pub async fn apply_order_action(&mut self, order_id: &str, action: OrderAction) -> bool {
        let allowed = self
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .is_some_and(|o| o.status.allows(action));

        if !allowed {
            tracing::warn!(order_id, action = action.label(), "Order action not available");
            return false;
        }
        self.change_order_status(order_id, action.target()).await
    }
}
