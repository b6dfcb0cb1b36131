//! # Madde Ledger
//!
//! Cost allocation and process-order bookkeeping for a small manufacturing lab, built on
//! resource actors from [`actor_framework`].
//!
//! ## Module Tour
//!
//! ### 1. The Stores ([`personnel_actor`], [`equipment_actor`], [`project_actor`], [`share_actor`], [`order_actor`], [`tracking_actor`], [`progress_actor`])
//! One `ResourceActor<T>` per entity type. Each module holds the entity's
//! [`ActorEntity`](actor_framework::ActorEntity) implementation and its error enum. The
//! order actor is where status side effects live: entering production ensures a tracking
//! row, entering delivery stamps the delivery date.
//!
//! ### 2. The Interface ([`clients`])
//! Typed wrappers around `ResourceClient<T>`, one per store, carrying the domain
//! operations (`ensure_for_order`, `replace_for_owner`, `list_delivered`, ...).
//!
//! ### 3. The Engines ([`allocation`], [`revenue`])
//! Pure report builders plus the services that feed them from the stores.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`LedgerSystem`](lifecycle::LedgerSystem) opens the stores, wires actor contexts and
//! shuts everything down.
//!
//! ### 5. The Edge ([`http`], [`config`])
//! An axum router over the clients and services, configured from the environment.
//!
//! ## Running
//!
//! ```bash
//! LEDGER_DATA_DIR=./data RUST_LOG=info cargo run
//! ```

pub mod allocation;
pub mod clients;
pub mod clock;
pub mod config;
mod error;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod revenue;

pub mod equipment_actor;
pub mod order_actor;
pub mod personnel_actor;
pub mod progress_actor;
pub mod project_actor;
pub mod share_actor;
pub mod tracking_actor;
