//! Source of the active project titles the engine allocates over.

use super::engine::active_project_titles;
use crate::clients::ProjectClient;
use crate::project_actor::ProjectError;
use actor_framework::ActorClient;
use async_trait::async_trait;

#[async_trait]
pub trait ActiveProjectRegistry: Send + Sync {
    /// Distinct titles of active projects, in first-occurrence order.
    async fn active_titles(&self) -> Result<Vec<String>, ProjectError>;
}

#[async_trait]
impl ActiveProjectRegistry for ProjectClient {
    async fn active_titles(&self) -> Result<Vec<String>, ProjectError> {
        let projects = self.list().await?;
        Ok(active_project_titles(&projects))
    }
}
