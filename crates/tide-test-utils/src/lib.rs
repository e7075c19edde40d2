//! Shared test utilities for the tide-sync workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: schema documents shaped like the real knowledge-graph schemas
//! - [`repo`]: [`TestRepo`](repo::TestRepo) builder for content repositories

pub mod fixtures;
pub mod repo;

pub use repo::TestRepo;
