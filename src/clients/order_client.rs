use super::ProcessOrderClient;
use crate::model::{ProcessOrder, ProcessOrderId, ProcessOrderInput, ProcessOrderUpdate, ProcessStatus};
use crate::order_actor::ProcessOrderError;
use actor_framework::ActorClient;
use tracing::{debug, info, instrument};

impl ProcessOrderClient {
    /// Creates an order and returns it as stored, derived fields included.
    #[instrument(skip(self, input), fields(company = %input.company_name))]
    pub async fn create_order(&self, input: ProcessOrderInput) -> Result<ProcessOrder, ProcessOrderError> {
        debug!(?input, "create_order called");
        let id = self.inner.create(input).await?;
        info!(order_id = %id, "Order created");
        self.get(id)
            .await?
            .ok_or_else(|| ProcessOrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, update))]
    pub async fn update_order(
        &self,
        id: ProcessOrderId,
        update: ProcessOrderUpdate,
    ) -> Result<ProcessOrder, ProcessOrderError> {
        debug!(?update, "update_order called");
        self.inner.update(id, update).await.map_err(Into::into)
    }

    /// Orders whose status is `Delivered`, in id order.
    #[instrument(skip(self))]
    pub async fn list_delivered(&self) -> Result<Vec<ProcessOrder>, ProcessOrderError> {
        debug!("Sending request");
        self.inner
            .list_where(|order: &ProcessOrder| order.status == ProcessStatus::Delivered)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_create, expect_get};
    use chrono::NaiveDate;

    fn input() -> ProcessOrderInput {
        ProcessOrderInput {
            company_name: "Hanul Ceramics".into(),
            quote_date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            category: "sintering".into(),
            product_name: "alumina plate".into(),
            quantity: 2,
            manufacturing_cost: 600,
            total_quote_price: 1000,
            status: ProcessStatus::Quoting,
            actual_order_amount: None,
            related_file: None,
            due_date: NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_order_reads_back_the_stored_row() {
        let (inner, mut receiver) = create_mock_client::<ProcessOrder>(4);
        let client = ProcessOrderClient::new(inner);

        let call = tokio::spawn(async move { client.create_order(input()).await });

        let (params, respond_to) = expect_create(&mut receiver).await.unwrap();
        assert_eq!(params, input());
        respond_to.send(Ok(ProcessOrderId(6))).unwrap();

        let (id, respond_to) = expect_get(&mut receiver).await.unwrap();
        assert_eq!(id, ProcessOrderId(6));
        let stored = ProcessOrder::new(id, params);
        respond_to.send(Ok(Some(stored.clone()))).unwrap();

        let order = call.await.unwrap().unwrap();
        assert_eq!(order, stored);
        assert_eq!(order.unit_quote_price, 500);
    }

    #[tokio::test]
    async fn create_order_reports_a_row_gone_before_read_back() {
        let (inner, mut receiver) = create_mock_client::<ProcessOrder>(4);
        let client = ProcessOrderClient::new(inner);

        let call = tokio::spawn(async move { client.create_order(input()).await });

        let (_, respond_to) = expect_create(&mut receiver).await.unwrap();
        respond_to.send(Ok(ProcessOrderId(6))).unwrap();
        let (_, respond_to) = expect_get(&mut receiver).await.unwrap();
        respond_to.send(Ok(None)).unwrap();

        assert_eq!(
            call.await.unwrap().unwrap_err(),
            ProcessOrderError::NotFound("order_6".into())
        );
    }
}
