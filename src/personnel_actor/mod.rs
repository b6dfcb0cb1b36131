//! # Personnel Actor
//!
//! Owns personnel records. Its context is the share client: deleting a person first
//! deletes every [`ProjectShare`](crate::model::ProjectShare) they own.

pub mod entity;
pub mod error;

pub use error::*;

use crate::config::Config;
use crate::lifecycle::open_store;
use crate::model::Personnel;
use actor_framework::{ResourceActor, ResourceClient, StorageError};

/// Creates a new Personnel actor and its client.
pub fn new(config: &Config) -> Result<(ResourceActor<Personnel>, ResourceClient<Personnel>), StorageError> {
    open_store(config, "personnel")
}
