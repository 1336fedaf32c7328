use std::sync::Arc;

use super::MutationOutcome;
use crate::domain::rental::{
    MachineId, PaymentStatus, RentalMachine, RentalMachinePatch, RentalRequest, RequestStatus,
};

/// Store for rental listings and the requests raised against them.
#[derive(Debug, Default)]
pub struct RentalStore {
    machines: Vec<Arc<RentalMachine>>,
    requests: Vec<Arc<RentalRequest>>,
}

impl RentalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listing. Duplicate ids are not checked; callers own id
    /// assignment.
    pub fn add_machine(&mut self, machine: RentalMachine) {
        self.machines.push(Arc::new(machine));
    }

    /// Merge a partial update into the matched listing. Only the matched
    /// entry is replaced.
    pub fn update_machine(&mut self, id: &MachineId, patch: RentalMachinePatch) -> MutationOutcome {
        self.replace_machine(id, move |machine| machine.apply(patch))
    }

    pub fn remove_machine(&mut self, id: &MachineId) -> MutationOutcome {
        let before = self.machines.len();
        self.machines.retain(|machine| machine.id != *id);
        if self.machines.len() == before {
            MutationOutcome::NotFound
        } else {
            MutationOutcome::Applied
        }
    }

    /// Flip the listing's `visible` flag. Applying this twice restores the
    /// original value.
    pub fn toggle_visibility(&mut self, id: &MachineId) -> MutationOutcome {
        self.replace_machine(id, |machine| machine.visible = !machine.visible)
    }

    /// Flip `expired` on. Independent of `visible`; an expired listing keeps
    /// whatever visibility it had.
    pub fn mark_expired(&mut self, id: &MachineId) -> MutationOutcome {
        self.replace_machine(id, |machine| machine.expired = true)
    }

    pub fn machines(&self) -> &[Arc<RentalMachine>] {
        &self.machines
    }

    /// Cheap full-collection snapshot for subscribers; elements are shared.
    pub fn machine_snapshot(&self) -> Vec<Arc<RentalMachine>> {
        self.machines.clone()
    }

    pub fn add_request(&mut self, request: RentalRequest) {
        self.requests.push(Arc::new(request));
    }

    pub fn set_request_status(&mut self, id: &str, status: RequestStatus) -> MutationOutcome {
        self.replace_request(id, move |request| request.status = status)
    }

    pub fn set_payment_status(&mut self, id: &str, payment: PaymentStatus) -> MutationOutcome {
        self.replace_request(id, move |request| request.payment = payment)
    }

    pub fn requests(&self) -> &[Arc<RentalRequest>] {
        &self.requests
    }

    pub fn request_snapshot(&self) -> Vec<Arc<RentalRequest>> {
        self.requests.clone()
    }

    fn replace_machine(
        &mut self,
        id: &MachineId,
        mutate: impl FnOnce(&mut RentalMachine),
    ) -> MutationOutcome {
        match self.machines.iter_mut().find(|machine| machine.id == *id) {
            Some(slot) => {
                let mut next = (**slot).clone();
                mutate(&mut next);
                *slot = Arc::new(next);
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        }
    }

    fn replace_request(
        &mut self,
        id: &str,
        mutate: impl FnOnce(&mut RentalRequest),
    ) -> MutationOutcome {
        match self.requests.iter_mut().find(|request| request.id == id) {
            Some(slot) => {
                let mut next = (**slot).clone();
                mutate(&mut next);
                *slot = Arc::new(next);
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        }
    }
}
