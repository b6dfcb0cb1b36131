use actor_framework::{
    ActorEntity, Ensured, FrameworkError, JsonFileRepository, Repository, ResourceActor,
    Snapshot, StorageError,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Batch {
    id: u32,
    line: String,
    quantity: u32,
    closed: bool,
}

#[derive(Debug)]
struct BatchCreate {
    line: String,
    quantity: u32,
}

#[derive(Debug)]
struct BatchUpdate {
    quantity: Option<u32>,
}

#[derive(Debug)]
enum BatchAction {
    Close,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum BatchError {
    #[error("line must not be empty")]
    EmptyLine,
    #[error("closed batches cannot change")]
    Closed,
}

#[async_trait]
impl ActorEntity for Batch {
    type Id = u32;
    type Create = BatchCreate;
    type Update = BatchUpdate;
    type Action = BatchAction;
    type ActionResult = bool;
    type Context = ();
    type Error = BatchError;

    fn id(&self) -> u32 {
        self.id
    }

    fn from_create_params(id: u32, params: BatchCreate) -> Result<Self, Self::Error> {
        if params.line.is_empty() {
            return Err(BatchError::EmptyLine);
        }
        Ok(Self {
            id,
            line: params.line,
            quantity: params.quantity,
            closed: false,
        })
    }

    async fn on_update(&mut self, update: BatchUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if self.closed {
            return Err(BatchError::Closed);
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: BatchAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            BatchAction::Close => {
                let changed = !self.closed;
                self.closed = true;
                Ok(changed)
            }
        }
    }
}

fn batch(line: &str, quantity: u32) -> BatchCreate {
    BatchCreate {
        line: line.to_string(),
        quantity,
    }
}

/// Accepts commits until `failing` is set.
struct SwitchableRepository {
    failing: Arc<AtomicBool>,
}

impl Repository<Batch> for SwitchableRepository {
    fn load(&mut self) -> Result<Snapshot<Batch>, StorageError> {
        Ok(Snapshot::default())
    }

    fn commit(&mut self, _next_id: u32, _rows: &[&Batch]) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(std::io::Error::other("disk full").into())
        } else {
            Ok(())
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Batch>::new(10);
    tokio::spawn(actor.run(()));

    let id: u32 = client.create(batch("A", 10)).await.unwrap();
    assert_eq!(id, 1);

    let updated = client
        .update(id, BatchUpdate { quantity: Some(12) })
        .await
        .unwrap();
    assert_eq!(updated.quantity, 12);

    let changed: bool = client.perform_action(id, BatchAction::Close).await.unwrap();
    assert!(changed);
    let changed_again: bool = client.perform_action(id, BatchAction::Close).await.unwrap();
    assert!(!changed_again);

    // Hook failure leaves the stored value alone
    let err = client
        .update(id, BatchUpdate { quantity: Some(1) })
        .await
        .unwrap_err();
    assert_eq!(err.downcast_entity::<BatchError>().unwrap(), BatchError::Closed);
    let stored: Batch = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.quantity, 12);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(matches!(
        client.delete(id).await,
        Err(FrameworkError::NotFound(_))
    ));

    // Ids are not reused after delete
    let next = client.create(batch("B", 1)).await.unwrap();
    assert_eq!(next, 2);
}

#[tokio::test]
async fn list_is_ordered_and_filterable() {
    let (actor, client) = ResourceActor::<Batch>::new(10);
    tokio::spawn(actor.run(()));

    for (line, qty) in [("A", 1), ("B", 2), ("A", 3)] {
        client.create(batch(line, qty)).await.unwrap();
    }

    let all = client.list().await.unwrap();
    assert_eq!(all.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 2, 3]);

    let line_a = client.list_where(|b| b.line == "A").await.unwrap();
    assert_eq!(line_a.iter().map(|b| b.quantity).collect::<Vec<_>>(), vec![1, 3]);
}

#[tokio::test]
async fn create_unless_creates_once_under_concurrency() {
    let (actor, client) = ResourceActor::<Batch>::new(64);
    tokio::spawn(actor.run(()));

    let mut tasks = Vec::new();
    for _ in 0..20 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client
                .create_unless(|b| b.line == "C", batch("C", 5))
                .await
                .unwrap()
        }));
    }

    let mut created = 0;
    for task in tasks {
        if task.await.unwrap().was_created() {
            created += 1;
        }
    }
    assert_eq!(created, 1);
    assert_eq!(client.list_where(|b| b.line == "C").await.unwrap().len(), 1);

    let again = client
        .create_unless(|b| b.line == "C", batch("C", 5))
        .await
        .unwrap();
    assert_eq!(again, Ensured::Existing(1));
}

#[tokio::test]
async fn replace_swaps_the_scoped_rows_only() {
    let (actor, client) = ResourceActor::<Batch>::new(10);
    tokio::spawn(actor.run(()));

    client.create(batch("A", 1)).await.unwrap();
    client.create(batch("B", 2)).await.unwrap();
    client.create(batch("A", 3)).await.unwrap();

    let ids = client
        .replace(|b| b.line == "A", vec![batch("A", 7)])
        .await
        .unwrap();
    assert_eq!(ids, vec![4]);

    let rows = client.list().await.unwrap();
    assert_eq!(
        rows.iter().map(|b| (b.id, b.quantity)).collect::<Vec<_>>(),
        vec![(2, 2), (4, 7)]
    );

    // A bad element rejects the whole replacement
    let err = client
        .replace(|b| b.line == "A", vec![batch("A", 8), batch("", 9)])
        .await
        .unwrap_err();
    assert_eq!(err.downcast_entity::<BatchError>().unwrap(), BatchError::EmptyLine);
    assert_eq!(client.list().await.unwrap(), rows);
}

#[tokio::test]
async fn upsert_and_delete_where() {
    let (actor, client) = ResourceActor::<Batch>::new(10);
    tokio::spawn(actor.run(()));

    let first = client.upsert(40, batch("Z", 1)).await.unwrap();
    assert_eq!(first.id, 40);
    let second = client.upsert(40, batch("Z", 2)).await.unwrap();
    assert_eq!(second.quantity, 2);
    assert_eq!(client.list().await.unwrap().len(), 1);

    client.create(batch("Y", 1)).await.unwrap();
    client.create(batch("Y", 1)).await.unwrap();
    assert_eq!(client.delete_where(|b| b.line == "Y").await.unwrap(), 2);
    assert_eq!(client.delete_where(|b| b.line == "Y").await.unwrap(), 0);
    assert_eq!(client.list().await.unwrap(), vec![second]);
}

#[tokio::test]
async fn failed_commit_rolls_back() {
    let failing = Arc::new(AtomicBool::new(false));
    let repo = SwitchableRepository {
        failing: failing.clone(),
    };
    let (actor, client) = ResourceActor::<Batch>::with_repository(10, Box::new(repo)).unwrap();
    tokio::spawn(actor.run(()));

    let id = client.create(batch("A", 1)).await.unwrap();
    failing.store(true, Ordering::SeqCst);

    assert!(matches!(
        client.create(batch("B", 1)).await,
        Err(FrameworkError::Storage(_))
    ));
    assert!(matches!(
        client.update(id, BatchUpdate { quantity: Some(9) }).await,
        Err(FrameworkError::Storage(_))
    ));
    assert!(matches!(
        client.replace(|b| b.line == "A", vec![batch("C", 3)]).await,
        Err(FrameworkError::Storage(_))
    ));
    assert!(matches!(
        client.delete(id).await,
        Err(FrameworkError::Storage(_))
    ));

    let rows = client.list().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantity, 1);
    assert_eq!(rows[0].line, "A");

    // Ids 2 and 3 went to the failed create and replace and stay spent
    failing.store(false, Ordering::SeqCst);
    assert_eq!(client.create(batch("B", 1)).await.unwrap(), 4);
}

#[tokio::test]
async fn json_repository_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batches.json");

    {
        let repo = JsonFileRepository::new(&path);
        let (actor, client) = ResourceActor::<Batch>::with_repository(10, Box::new(repo)).unwrap();
        let handle = tokio::spawn(actor.run(()));
        client.create(batch("A", 1)).await.unwrap();
        let doomed = client.create(batch("B", 2)).await.unwrap();
        client.delete(doomed).await.unwrap();
        drop(client);
        handle.await.unwrap();
    }

    let repo = JsonFileRepository::new(&path);
    let (actor, client) = ResourceActor::<Batch>::with_repository(10, Box::new(repo)).unwrap();
    tokio::spawn(actor.run(()));

    let rows = client.list().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].line, "A");
    assert_eq!(client.create(batch("C", 3)).await.unwrap(), 3);
}
