//! Type-safe wrappers around [`ResourceClient`].
//!
//! Every resource gets a `<Entity>Client` that maps framework errors into the
//! resource's `<Entity>Error` and inherits `get`, `list` and `delete` from
//! [`ActorClient`]. Domain operations live in the per-resource files below.

pub mod order_client;
pub mod progress_client;
pub mod project_client;
pub mod share_client;
pub mod tracking_client;

use crate::equipment_actor::EquipmentError;
use crate::model::{
    Equipment, OrderProgress, Personnel, ProcessOrder, ProcessTracking, Project, ProjectShare,
};
use crate::order_actor::ProcessOrderError;
use crate::personnel_actor::PersonnelError;
use crate::progress_actor::OrderProgressError;
use crate::project_actor::ProjectError;
use crate::share_actor::ProjectShareError;
use crate::tracking_actor::ProcessTrackingError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;

macro_rules! resource_client {
    ($(#[$meta:meta])* $entity:ident, create) => {
        resource_client!($(#[$meta])* $entity);

        paste::paste! {
            impl [<$entity Client>] {
                #[tracing::instrument(skip(self, params))]
                pub async fn create(
                    &self,
                    params: <$entity as actor_framework::ActorEntity>::Create,
                ) -> Result<<$entity as actor_framework::ActorEntity>::Id, [<$entity Error>]> {
                    tracing::debug!(?params, "Sending request");
                    self.inner.create(params).await.map_err(Into::into)
                }
            }
        }
    };
    ($(#[$meta:meta])* $entity:ident) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Clone)]
            pub struct [<$entity Client>] {
                inner: ResourceClient<$entity>,
            }

            impl [<$entity Client>] {
                pub fn new(inner: ResourceClient<$entity>) -> Self {
                    Self { inner }
                }
            }

            #[async_trait]
            impl ActorClient<$entity> for [<$entity Client>] {
                type Error = [<$entity Error>];

                fn inner(&self) -> &ResourceClient<$entity> {
                    &self.inner
                }

                fn map_error(e: FrameworkError) -> Self::Error {
                    e.into()
                }
            }
        }
    };
}

resource_client!(
    /// Client for the Personnel actor.
    Personnel,
    create
);
resource_client!(
    /// Client for the Equipment actor.
    Equipment,
    create
);
resource_client!(
    /// Client for the Project actor. Also serves as the active-project registry.
    Project,
    create
);
resource_client!(
    /// Client for the Share actor.
    ProjectShare
);
resource_client!(
    /// Client for the Order actor.
    ProcessOrder
);
resource_client!(
    /// Client for the Tracking actor.
    ProcessTracking
);
resource_client!(
    /// Client for the Progress actor.
    OrderProgress
);
