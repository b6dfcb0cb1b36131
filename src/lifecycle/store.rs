//! Opening the store behind each actor.

use crate::config::Config;
use actor_framework::{ActorEntity, JsonFileRepository, ResourceActor, ResourceClient, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

/// Creates an actor for `T`, backed by `<data_dir>/<name>.json` when a data directory is
/// configured and by memory otherwise.
pub fn open_store<T>(
    config: &Config,
    name: &str,
) -> Result<(ResourceActor<T>, ResourceClient<T>), StorageError>
where
    T: ActorEntity + Serialize + DeserializeOwned,
{
    match &config.data_dir {
        Some(dir) => {
            let path = dir.join(format!("{name}.json"));
            info!(store = name, path = %path.display(), "Opening JSON store");
            ResourceActor::with_repository(
                config.channel_buffer,
                Box::new(JsonFileRepository::new(path)),
            )
        }
        None => Ok(ResourceActor::new(config.channel_buffer)),
    }
}
