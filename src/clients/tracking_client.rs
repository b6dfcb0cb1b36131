use super::ProcessTrackingClient;
use crate::model::{ProcessOrderId, ProcessTracking, ProcessTrackingCreate, TrackingId, TrackingMetrics};
use crate::tracking_actor::ProcessTrackingError;
use actor_framework::Ensured;
use tracing::{debug, instrument};

impl ProcessTrackingClient {
    /// Makes sure `order_id` has at least one tracking row, creating a default one if not.
    ///
    /// Check and insert happen in one actor turn; racing callers still end up with one row.
    #[instrument(skip(self))]
    pub async fn ensure_for_order(
        &self,
        order_id: ProcessOrderId,
    ) -> Result<Ensured<TrackingId>, ProcessTrackingError> {
        debug!("Sending request");
        let params = ProcessTrackingCreate {
            order_id,
            metrics: TrackingMetrics::default(),
        };
        self.inner
            .create_unless(move |row: &ProcessTracking| row.order_id == order_id, params)
            .await
            .map_err(Into::into)
    }

    /// Adds a row unconditionally.
    #[instrument(skip(self, metrics))]
    pub async fn add(
        &self,
        order_id: ProcessOrderId,
        metrics: TrackingMetrics,
    ) -> Result<TrackingId, ProcessTrackingError> {
        debug!("Sending request");
        self.inner
            .create(ProcessTrackingCreate { order_id, metrics })
            .await
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    pub async fn for_order(
        &self,
        order_id: ProcessOrderId,
    ) -> Result<Vec<ProcessTracking>, ProcessTrackingError> {
        debug!("Sending request");
        self.inner
            .list_where(move |row: &ProcessTracking| row.order_id == order_id)
            .await
            .map_err(Into::into)
    }
}
