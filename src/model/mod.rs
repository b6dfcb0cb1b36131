//! # Domain Model
//!
//! Plain data managed by the resource actors. Each entity type has a typed id, the
//! entity itself, and the payloads used to create or change it. The
//! [`ActorEntity`](actor_framework::ActorEntity) implementations live in the matching
//! `*_actor` modules.

/// Declares a `u32` id newtype displayed as `<prefix>_<n>`.
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

/// Deserializes a present field, `null` included, as `Some(value)`. Paired with
/// `#[serde(default)]` so an omitted field stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Some)
}

pub mod equipment;
pub mod personnel;
pub mod process_order;
pub mod progress;
pub mod project;
pub mod share;
pub mod tracking;

pub use equipment::*;
pub use personnel::*;
pub use process_order::*;
pub use progress::*;
pub use project::*;
pub use share::*;
pub use tracking::*;
