//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `list` and `delete`
//! built on top of a generic `ResourceClient`, with errors mapped into the resource's
//! own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Implementors supply `inner()` and `map_error()`; everything else is provided.
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)]
/// struct Machine { id: u32 }
/// #[derive(Debug)] struct MachineCreate;
/// #[derive(Debug)] struct MachineError(String);
///
/// impl std::fmt::Display for MachineError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
/// impl std::error::Error for MachineError {}
/// impl From<String> for MachineError {
///     fn from(s: String) -> Self { MachineError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Machine {
///     type Id = u32;
///     type Create = MachineCreate;
///     type Update = Infallible;
///     type Action = Infallible;
///     type ActionResult = ();
///     type Context = ();
///     type Error = MachineError;
///
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(id: u32, _: MachineCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, update: Infallible, _: &()) -> Result<(), Self::Error> {
///         match update {}
///     }
///     async fn handle_action(&mut self, action: Infallible, _: &()) -> Result<(), Self::Error> {
///         match action {}
///     }
/// }
///
/// struct MachineClient {
///     inner: ResourceClient<Machine>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Machine> for MachineClient {
///     type Error = MachineError;
///
///     fn inner(&self) -> &ResourceClient<Machine> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         MachineError(e.to_string())
///     }
/// }
///
/// async fn usage(client: MachineClient) {
///     // get(), list() and delete() come for free
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in id order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
