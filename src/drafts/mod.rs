//! Multi-step listing wizards.
//!
//! A wizard screen collects a handful of fields and merges them into a
//! shared draft on "Next". Merges are additive and last-write-wins per
//! field; nothing a step sets can be removed by a later step, so steps may
//! be skipped or reordered as long as every required field is present
//! before publish. Commit validates the accumulated draft, assigns an id
//! when no step set one, hands the finished entity to the target store,
//! and resets the workflow.
//!
//! Back-navigation does not touch the draft. Dropping collected fields is
//! only possible through [`DraftWorkflow::abandon`].

pub mod rental;
pub mod selling;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::rental::MachineId;

/// One listing type's accumulated draft.
pub trait DraftForm: Default {
    type Patch;
    type Entity;

    /// Merge a step's partial fields. Present fields overwrite, absent
    /// fields are preserved.
    fn merge(&mut self, patch: Self::Patch);

    /// True when no step has written anything yet.
    fn is_blank(&self) -> bool;

    /// Build the finished entity, or report every missing required field.
    fn finalize(&self) -> Result<Self::Entity, DraftError>;
}

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DraftState {
    #[default]
    Empty,
    Collecting,
}

/// Error raised when a draft cannot be committed.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("no draft in progress")]
    NothingCollected,
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Carries one draft across the wizard's screens.
#[derive(Debug, Default)]
pub struct DraftWorkflow<D: DraftForm> {
    form: D,
    state: DraftState,
}

impl<D: DraftForm> DraftWorkflow<D> {
    pub fn new() -> Self {
        Self {
            form: D::default(),
            state: DraftState::Empty,
        }
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn draft(&self) -> &D {
        &self.form
    }

    /// Merge a step's fields into the draft. The first write moves the
    /// workflow from `Empty` to `Collecting`.
    pub fn apply(&mut self, patch: D::Patch) {
        self.form.merge(patch);
        self.state = DraftState::Collecting;
    }

    /// Validate and build the finished entity, then reset to `Empty`.
    /// An incomplete draft is left intact so the user can fill the gaps.
    pub fn commit(&mut self) -> Result<D::Entity, DraftError> {
        if self.state == DraftState::Empty {
            return Err(DraftError::NothingCollected);
        }

        let entity = self.form.finalize()?;
        self.form = D::default();
        self.state = DraftState::Empty;
        Ok(entity)
    }

    /// Explicitly drop everything collected so far.
    pub fn abandon(&mut self) {
        self.form = D::default();
        self.state = DraftState::Empty;
    }
}

/// Last-write-wins field merge: an absent patch field preserves the draft's.
pub(crate) fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Record the field as missing when unset, cloning it out otherwise.
pub(crate) fn require<T: Clone>(
    slot: &Option<T>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<T> {
    if slot.is_none() {
        missing.push(field);
    }
    slot.clone()
}

static LISTING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Process-wide id for listings whose draft never set one.
pub(crate) fn next_listing_id() -> MachineId {
    let id = LISTING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    MachineId(format!("lst-{id:06}"))
}

pub use rental::{publish_rental, RentalDraftPatch, RentalListingForm};
pub use selling::{publish_sale, SaleDraftPatch, SaleListingForm};
