//! In-memory domain stores.
//!
//! Each store owns one domain's collections and exposes synchronous
//! mutators. Listing collections hold `Arc` elements so a mutation replaces
//! only the matched entry; unrelated entries keep their identity and
//! snapshots stay cheap for identity-based change detection downstream.
//!
//! Stores never fail by contract. Mutations targeting an absent id leave the
//! collection untouched and report [`MutationOutcome::NotFound`] so callers
//! can react instead of discovering a silent no-op later.

pub mod filters;
pub mod labour;
pub mod rental;
pub mod selling;
pub mod session;
pub mod transporter;

/// Tagged result of a mutation aimed at an existing entity.
#[must_use = "a NotFound outcome means the store was left unchanged"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    NotFound,
}

impl MutationOutcome {
    pub const fn is_applied(self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }

    pub const fn is_not_found(self) -> bool {
        matches!(self, MutationOutcome::NotFound)
    }
}

pub use filters::{BuyMachineFilters, MachineCondition, PriceBounds};
pub use labour::LabourStore;
pub use rental::RentalStore;
pub use selling::SellingStore;
pub use session::SessionStore;
pub use transporter::TransporterStore;
