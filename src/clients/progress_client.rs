use super::OrderProgressClient;
use crate::model::{OrderProgress, OrderProgressInput, ProcessOrderId};
use crate::progress_actor::OrderProgressError;
use actor_framework::ActorClient;
use tracing::{debug, instrument};

impl OrderProgressClient {
    /// Writes the progress row of `order_id`, replacing any previous one.
    #[instrument(skip(self, input))]
    pub async fn upsert(
        &self,
        order_id: ProcessOrderId,
        input: OrderProgressInput,
    ) -> Result<OrderProgress, OrderProgressError> {
        debug!("Sending request");
        self.inner.upsert(order_id, input).await.map_err(Into::into)
    }

    pub async fn for_order(&self, order_id: ProcessOrderId) -> Result<Option<OrderProgress>, OrderProgressError> {
        self.get(order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;

    #[tokio::test]
    async fn upsert_returns_the_stored_row_or_the_lookup_error() {
        let mut mock = MockClient::<OrderProgress>::new();
        let client = OrderProgressClient::new(mock.client());
        let input = OrderProgressInput {
            stage: Some("firing".into()),
            ..Default::default()
        };
        let row = OrderProgress::new(ProcessOrderId(3), input.clone());

        mock.expect_upsert(ProcessOrderId(3)).return_ok(row.clone());
        assert_eq!(client.upsert(ProcessOrderId(3), input).await.unwrap(), row);

        mock.expect_upsert(ProcessOrderId(8)).return_err(FrameworkError::EntityError(
            Box::new(OrderProgressError::NotFound("order_8".into())),
        ));
        let err = client
            .upsert(ProcessOrderId(8), OrderProgressInput::default())
            .await
            .unwrap_err();
        assert_eq!(err, OrderProgressError::NotFound("order_8".into()));

        mock.verify();
    }
}
