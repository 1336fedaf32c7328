//! Domain state core for a farm machinery, labour, and transport
//! marketplace.
//!
//! The crate is the client-side "core" behind the app's screens: in-memory
//! domain stores with synchronous CRUD mutators, multi-step listing wizards
//! that accumulate a draft across screens and commit it after validation,
//! and the transient search-filter state. Rendering, navigation, identity,
//! and the backend API are external collaborators; the thin wrappers for
//! the last live under [`services`].

pub mod config;
pub mod domain;
pub mod drafts;
pub mod services;
pub mod stores;
pub mod telemetry;

pub use drafts::{DraftError, DraftState, DraftWorkflow};
pub use stores::MutationOutcome;
