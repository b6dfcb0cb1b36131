//! # System Lifecycle & Orchestration
//!
//! [`LedgerSystem`] creates every resource actor, injects each one's dependencies as its
//! `Context` at `run()` time, and owns the task handles for shutdown.
//!
//! | Actor | Context |
//! |-------|---------|
//! | Personnel, Equipment | share client (delete cascade) |
//! | Order | tracking client and clock |
//! | Progress | order client (existence check) |
//! | Project, Share, Tracking | none |
//!
//! The graph is acyclic, so dropping the public clients is enough to stop everything:
//! each actor exits when its inbox closes, which drops the clients it held in turn.

pub mod ledger_system;
pub mod store;
pub mod tracing;

pub use ledger_system::*;
pub use store::*;
pub use tracing::*;
