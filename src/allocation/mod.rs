//! # Share Allocation
//!
//! [`engine`] turns store contents into an [`AllocationReport`]; [`AllocationService`]
//! reads the stores through the actor clients and asks an [`ActiveProjectRegistry`] which
//! projects are active.

pub mod engine;
pub mod registry;
pub mod service;

pub use engine::*;
pub use registry::*;
pub use service::*;
