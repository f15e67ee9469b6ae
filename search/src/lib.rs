//! Cairn Search: order-fixed tree exploration over stateless, opaque nodes.
//!
//! The engine holds no explicit tree: nodes carry their own state and
//! successors are regenerated on demand from a caller-supplied space, so
//! there are no parent/child links to maintain. This crate is the base
//! layer — it knows nothing about any concrete problem domain.
//!
//! # Crate dependency graph
//!
//! ```text
//! cairn_search  ←  cairn_harness
//! (frontier, engine)  (worlds, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchSpaceV1`] — contract trait for successor/goal/comparator callbacks
//! - [`FnSpace`] — closure adapter implementing the contract
//! - [`ExploreOrder`] — breadth-first (FIFO) vs depth-first (LIFO) removal
//! - [`TreeSearchV1`] — the step-wise search instance
//! - [`SearchStatsV1`] — integer step counters for hashed run reports
//! - [`RunDigest`] — `"sha256:<hex>"` content digest for report artifacts
//!
//! [`SearchSpaceV1`]: contract::SearchSpaceV1
//! [`FnSpace`]: contract::FnSpace
//! [`ExploreOrder`]: frontier::ExploreOrder
//! [`TreeSearchV1`]: engine::TreeSearchV1
//! [`SearchStatsV1`]: stats::SearchStatsV1
//! [`RunDigest`]: digest::RunDigest

#![forbid(unsafe_code)]

pub mod canon;
pub mod contract;
pub mod digest;
pub mod engine;
pub mod frontier;
pub mod stats;
