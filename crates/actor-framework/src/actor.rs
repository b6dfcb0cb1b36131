//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::{FrameworkError, StorageError};
use crate::message::{Ensured, Filter, ResourceRequest};
use crate::repository::{InMemoryRepository, Repository, Snapshot};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Previous value of every row a mutation touched, in the order touched.
type UndoLog<T> = Vec<(<T as ActorEntity>::Id, Option<T>)>;

/// The generic actor that manages a collection of entities.
///
/// The actor owns its `store` and the receiving end of the channel, and processes one
/// message at a time, so the store needs no lock.
///
/// # Unit of Work
///
/// Every mutating request is handled as a single unit:
///
/// 1. Hooks run against staged values; a hook error leaves the store untouched.
/// 2. The staged rows are applied to the store, recording what they replaced.
/// 3. The full row set is committed to the [`Repository`].
/// 4. If the commit fails, the recorded rows are restored and the caller receives
///    [`FrameworkError::Storage`].
///
/// Ids are allocated from a `u32` counter that never goes backwards. An id that reached
/// `on_create` stays spent even when its commit fails, and ids of deleted rows are not
/// reused.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` (in memory) or `ResourceActor::with_repository()`.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
    repository: Box<dyn Repository<T>>,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an in-memory `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel; when it is full, client calls
    /// wait for space. Must be greater than zero.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::assemble(buffer_size, Box::new(InMemoryRepository), Snapshot::default())
    }

    /// Creates an actor whose rows are loaded from, and committed to, `repository`.
    pub fn with_repository(
        buffer_size: usize,
        mut repository: Box<dyn Repository<T>>,
    ) -> Result<(Self, ResourceClient<T>), StorageError> {
        let snapshot = repository.load()?;
        Ok(Self::assemble(buffer_size, repository, snapshot))
    }

    fn assemble(
        buffer_size: usize,
        repository: Box<dyn Repository<T>>,
        snapshot: Snapshot<T>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "ProcessOrder" rather than "madde_ledger::model::process_order::ProcessOrder"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let store = snapshot
            .rows
            .into_iter()
            .map(|row| (row.id(), row))
            .collect();
        let actor = Self {
            receiver,
            store,
            next_id: snapshot.next_id.max(1),
            repository,
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` is injected into every entity hook, so dependencies created after
    /// the actor itself can still be handed to it here.
    pub async fn run(mut self, context: T::Context) {
        info!(
            entity_type = self.entity_type,
            size = self.store.len(),
            "Actor started"
        );

        while let Some(msg) = self.receiver.recv().await {
            self.dispatch(msg, &context).await;
        }

        info!(entity_type = self.entity_type, size = self.store.len(), "Shutdown");
    }

    async fn dispatch(&mut self, msg: ResourceRequest<T>, ctx: &T::Context) {
        match msg {
            ResourceRequest::Create { params, respond_to } => {
                let _ = respond_to.send(self.create(params, ctx).await);
            }
            ResourceRequest::CreateUnless {
                exists,
                params,
                respond_to,
            } => {
                let _ = respond_to.send(self.create_unless(exists, params, ctx).await);
            }
            ResourceRequest::Get { id, respond_to } => {
                let item = self.store.get(&id).cloned();
                debug!(entity_type = self.entity_type, %id, found = item.is_some(), "Get");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::List { filter, respond_to } => {
                let _ = respond_to.send(Ok(self.list(filter)));
            }
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            } => {
                let _ = respond_to.send(self.update(id, update, ctx).await);
            }
            ResourceRequest::Upsert {
                id,
                params,
                respond_to,
            } => {
                let _ = respond_to.send(self.upsert(id, params, ctx).await);
            }
            ResourceRequest::Replace {
                scope,
                params,
                respond_to,
            } => {
                let _ = respond_to.send(self.replace(scope, params, ctx).await);
            }
            ResourceRequest::Delete { id, respond_to } => {
                let _ = respond_to.send(self.delete(id, ctx).await);
            }
            ResourceRequest::DeleteWhere { filter, respond_to } => {
                let _ = respond_to.send(self.delete_where(filter, ctx).await);
            }
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            } => {
                let _ = respond_to.send(self.action(id, action, ctx).await);
            }
        }
    }

    fn entity_error(e: T::Error) -> FrameworkError {
        FrameworkError::EntityError(Box::new(e))
    }

    /// Builds a new entity under the next id and runs `on_create`. Nothing is stored.
    ///
    /// The id is spent once `on_create` runs, whatever happens afterwards, since the
    /// hook may already have recorded it in another actor.
    async fn stage_new(&mut self, params: T::Create, ctx: &T::Context) -> Result<T, FrameworkError> {
        let id = T::Id::from(self.next_id);
        let mut item = T::from_create_params(id, params).map_err(|e| {
            warn!(entity_type = self.entity_type, error = %e, "Create failed");
            Self::entity_error(e)
        })?;
        self.next_id += 1;
        if let Err(e) = item.on_create(ctx).await {
            warn!(entity_type = self.entity_type, error = %e, "on_create failed");
            return Err(Self::entity_error(e));
        }
        Ok(item)
    }

    /// Persists the current store, or restores the rows in `undo` if that fails.
    /// The id counter is never wound back.
    fn commit(&mut self, undo: UndoLog<T>) -> Result<(), FrameworkError> {
        let rows: Vec<&T> = self.store.values().collect();
        let Err(e) = self.repository.commit(self.next_id, &rows) else {
            return Ok(());
        };

        error!(entity_type = self.entity_type, error = %e, rows = undo.len(), "Commit failed, rolling back");
        for (id, previous) in undo.into_iter().rev() {
            match previous {
                Some(item) => {
                    self.store.insert(id, item);
                }
                None => {
                    self.store.remove(&id);
                }
            }
        }
        Err(FrameworkError::Storage(e))
    }

    async fn create(&mut self, params: T::Create, ctx: &T::Context) -> Result<T::Id, FrameworkError> {
        debug!(entity_type = self.entity_type, ?params, "Create");
        let item = self.stage_new(params, ctx).await?;
        let id = item.id();
        let previous = self.store.insert(id.clone(), item);
        self.commit(vec![(id.clone(), previous)])?;
        info!(entity_type = self.entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    async fn create_unless(
        &mut self,
        exists: Filter<T>,
        params: T::Create,
        ctx: &T::Context,
    ) -> Result<Ensured<T::Id>, FrameworkError> {
        if let Some(found) = self.store.values().find(|item| exists(*item)) {
            let id = found.id();
            debug!(entity_type = self.entity_type, %id, "Match exists, create skipped");
            return Ok(Ensured::Existing(id));
        }
        self.create(params, ctx).await.map(Ensured::Created)
    }

    fn list(&self, filter: Option<Filter<T>>) -> Vec<T> {
        let items: Vec<T> = match filter {
            Some(filter) => self
                .store
                .values()
                .filter(|item| filter(*item))
                .cloned()
                .collect(),
            None => self.store.values().cloned().collect(),
        };
        debug!(entity_type = self.entity_type, count = items.len(), "List");
        items
    }

    async fn update(&mut self, id: T::Id, update: T::Update, ctx: &T::Context) -> Result<T, FrameworkError> {
        debug!(entity_type = self.entity_type, %id, ?update, "Update");
        let Some(current) = self.store.get(&id) else {
            warn!(entity_type = self.entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        let mut staged = current.clone();
        if let Err(e) = staged.on_update(update, ctx).await {
            warn!(entity_type = self.entity_type, %id, error = %e, "Update failed");
            return Err(Self::entity_error(e));
        }
        let previous = self.store.insert(id.clone(), staged.clone());
        self.commit(vec![(id.clone(), previous)])?;
        info!(entity_type = self.entity_type, %id, "Updated");
        Ok(staged)
    }

    async fn upsert(&mut self, id: T::Id, params: T::Create, ctx: &T::Context) -> Result<T, FrameworkError> {
        debug!(entity_type = self.entity_type, %id, ?params, "Upsert");
        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type = self.entity_type, %id, error = %e, "Upsert failed");
            Self::entity_error(e)
        })?;
        if let Err(e) = item.on_create(ctx).await {
            warn!(entity_type = self.entity_type, %id, error = %e, "on_create failed");
            return Err(Self::entity_error(e));
        }
        let previous = self.store.insert(id.clone(), item.clone());
        let replaced = previous.is_some();
        self.commit(vec![(id.clone(), previous)])?;
        info!(entity_type = self.entity_type, %id, replaced, "Upserted");
        Ok(item)
    }

    async fn replace(
        &mut self,
        scope: Filter<T>,
        params: Vec<T::Create>,
        ctx: &T::Context,
    ) -> Result<Vec<T::Id>, FrameworkError> {
        debug!(entity_type = self.entity_type, ?params, "Replace");
        let mut staged = Vec::with_capacity(params.len());
        for p in params {
            staged.push(self.stage_new(p, ctx).await?);
        }

        let doomed: Vec<T::Id> = self
            .store
            .values()
            .filter(|item| scope(*item))
            .map(|item| item.id())
            .collect();
        let removed = doomed.len();
        let mut undo: UndoLog<T> = Vec::with_capacity(removed + staged.len());
        for id in doomed {
            let previous = self.store.remove(&id);
            undo.push((id, previous));
        }
        let mut ids = Vec::with_capacity(staged.len());
        for item in staged {
            let id = item.id();
            let previous = self.store.insert(id.clone(), item);
            undo.push((id.clone(), previous));
            ids.push(id);
        }

        self.commit(undo)?;
        info!(entity_type = self.entity_type, removed, inserted = ids.len(), "Replaced");
        Ok(ids)
    }

    async fn delete(&mut self, id: T::Id, ctx: &T::Context) -> Result<(), FrameworkError> {
        debug!(entity_type = self.entity_type, %id, "Delete");
        let Some(item) = self.store.get(&id) else {
            warn!(entity_type = self.entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_delete(ctx).await {
            warn!(entity_type = self.entity_type, %id, error = %e, "on_delete failed");
            return Err(Self::entity_error(e));
        }
        let previous = self.store.remove(&id);
        self.commit(vec![(id.clone(), previous)])?;
        info!(entity_type = self.entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }

    async fn delete_where(&mut self, filter: Filter<T>, ctx: &T::Context) -> Result<usize, FrameworkError> {
        let doomed: Vec<T> = self
            .store
            .values()
            .filter(|item| filter(*item))
            .cloned()
            .collect();
        for item in &doomed {
            if let Err(e) = item.on_delete(ctx).await {
                warn!(entity_type = self.entity_type, id = %item.id(), error = %e, "on_delete failed");
                return Err(Self::entity_error(e));
            }
        }

        let mut undo: UndoLog<T> = Vec::with_capacity(doomed.len());
        for item in doomed {
            let id = item.id();
            let previous = self.store.remove(&id);
            undo.push((id, previous));
        }
        let count = undo.len();
        if count > 0 {
            self.commit(undo)?;
        }
        info!(entity_type = self.entity_type, count, size = self.store.len(), "Deleted matching");
        Ok(count)
    }

    async fn action(
        &mut self,
        id: T::Id,
        action: T::Action,
        ctx: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        debug!(entity_type = self.entity_type, %id, ?action, "Action");
        let Some(current) = self.store.get(&id) else {
            warn!(entity_type = self.entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        let mut staged = current.clone();
        let result = match staged.handle_action(action, ctx).await {
            Ok(result) => result,
            Err(e) => {
                warn!(entity_type = self.entity_type, %id, error = %e, "Action failed");
                return Err(Self::entity_error(e));
            }
        };
        let previous = self.store.insert(id.clone(), staged);
        self.commit(vec![(id.clone(), previous)])?;
        info!(entity_type = self.entity_type, %id, "Action ok");
        Ok(result)
    }
}
