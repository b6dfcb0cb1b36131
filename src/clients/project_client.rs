use super::ProjectClient;
use crate::model::{Project, ProjectId, ProjectUpdate};
use crate::project_actor::ProjectError;
use tracing::{debug, instrument};

impl ProjectClient {
    /// Applies a partial edit and returns the project as stored.
    #[instrument(skip(self, update))]
    pub async fn update_project(
        &self,
        id: ProjectId,
        update: ProjectUpdate,
    ) -> Result<Project, ProjectError> {
        debug!(?update, "update_project called");
        self.inner.update(id, update).await.map_err(Into::into)
    }
}
