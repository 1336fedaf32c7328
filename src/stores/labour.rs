use std::sync::Arc;

use super::MutationOutcome;
use crate::domain::labour::{LabourProfile, LabourProfilePatch, Lead};

/// Store for the session's labour profile and the leads raised against it.
///
/// The profile is a singleton: registration sets it, later edits merge into
/// it. Lead appends keep `calls_received` equal to the number of leads, so
/// an append without a registered profile is refused rather than leaving the
/// counter orphaned.
#[derive(Debug, Default)]
pub struct LabourStore {
    profile: Option<Arc<LabourProfile>>,
    leads: Vec<Arc<Lead>>,
}

impl LabourStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the singleton profile.
    pub fn set_profile(&mut self, profile: LabourProfile) {
        self.profile = Some(Arc::new(profile));
    }

    /// Merge a partial update into the registered profile. `NotFound` when
    /// no profile exists; callers redirect to registration in that case.
    pub fn update_profile(&mut self, patch: LabourProfilePatch) -> MutationOutcome {
        match self.profile.as_mut() {
            Some(slot) => {
                let mut next = (**slot).clone();
                next.apply(patch);
                *slot = Arc::new(next);
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        }
    }

    pub fn profile(&self) -> Option<&Arc<LabourProfile>> {
        self.profile.as_ref()
    }

    pub fn clear_profile(&mut self) {
        self.profile = None;
        self.leads.clear();
    }

    /// Prepend a lead (most-recent-first) and bump `calls_received` in the
    /// same transition.
    pub fn add_lead(&mut self, lead: Lead) -> MutationOutcome {
        let Some(slot) = self.profile.as_mut() else {
            return MutationOutcome::NotFound;
        };

        let mut next = (**slot).clone();
        next.calls_received += 1;
        *slot = Arc::new(next);
        self.leads.insert(0, Arc::new(lead));
        MutationOutcome::Applied
    }

    pub fn leads(&self) -> &[Arc<Lead>] {
        &self.leads
    }

    pub fn lead_snapshot(&self) -> Vec<Arc<Lead>> {
        self.leads.clone()
    }
}
