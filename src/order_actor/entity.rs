//! [`ActorEntity`] implementation for [`ProcessOrder`].
//!
//! Status side effects run inside the hooks, against the staged order:
//!
//! | Transition | Effect |
//! |------------|--------|
//! | anything → `InProduction` | ensure the order has a tracking row |
//! | anything → `Delivered` | stamp `delivered_at` with today, unless already set |
//!
//! Creation counts as a transition from no status, so an order created in production
//! gets its tracking row immediately.

use super::{OrderContext, ProcessOrderError};
use crate::model::{
    ProcessOrder, ProcessOrderId, ProcessOrderInput, ProcessOrderUpdate, ProcessStatus,
    DATE_FORMAT,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::{debug, info};

fn validate(order: &ProcessOrder) -> Result<(), ProcessOrderError> {
    if order.company_name.trim().is_empty() {
        return Err(ProcessOrderError::ValidationError(
            "company_name must not be blank".into(),
        ));
    }
    if order.product_name.trim().is_empty() {
        return Err(ProcessOrderError::ValidationError(
            "product_name must not be blank".into(),
        ));
    }
    let money = [
        ("manufacturing_cost", Some(order.manufacturing_cost)),
        ("total_quote_price", Some(order.total_quote_price)),
        ("actual_order_amount", order.actual_order_amount),
    ];
    for (field, value) in money {
        if value.is_some_and(|v| v < 0) {
            return Err(ProcessOrderError::ValidationError(format!(
                "{field} must not be negative"
            )));
        }
    }
    Ok(())
}

impl ProcessOrder {
    async fn enter_status(
        &mut self,
        previous: Option<ProcessStatus>,
        ctx: &OrderContext,
    ) -> Result<(), ProcessOrderError> {
        if previous == Some(self.status) {
            return Ok(());
        }
        match self.status {
            ProcessStatus::InProduction => {
                let ensured = ctx
                    .tracking
                    .ensure_for_order(self.id)
                    .await
                    .map_err(|e| ProcessOrderError::TrackingFailed(e.to_string()))?;
                debug!(order_id = %self.id, tracking_id = %ensured.id(), created = ensured.was_created(), "Tracking ensured");
            }
            ProcessStatus::Delivered if self.delivered_at.is_none() => {
                let today = ctx.clock.today().format(DATE_FORMAT).to_string();
                info!(order_id = %self.id, delivered_at = %today, "Order delivered");
                self.delivered_at = Some(today);
            }
            _ => {}
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for ProcessOrder {
    type Id = ProcessOrderId;
    type Create = ProcessOrderInput;
    type Update = ProcessOrderUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = OrderContext;
    type Error = ProcessOrderError;

    fn id(&self) -> ProcessOrderId {
        self.id
    }

    fn from_create_params(id: ProcessOrderId, params: ProcessOrderInput) -> Result<Self, Self::Error> {
        let order = ProcessOrder::new(id, params);
        validate(&order)?;
        Ok(order)
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        self.enter_status(None, ctx).await
    }

    async fn on_update(
        &mut self,
        update: ProcessOrderUpdate,
        ctx: &OrderContext,
    ) -> Result<(), Self::Error> {
        let previous = self.status;
        self.apply(update);
        validate(self)?;
        self.enter_status(Some(previous), ctx).await
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &OrderContext) -> Result<(), Self::Error> {
        match action {}
    }
}
