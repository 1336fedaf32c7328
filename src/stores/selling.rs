use std::sync::Arc;

use super::MutationOutcome;
use crate::domain::rental::MachineId;
use crate::domain::selling::{SellingMachine, SellingMachinePatch};

/// Store for second-hand sale listings. Same contract as
/// [`super::RentalStore`] minus the request sub-collection.
#[derive(Debug, Default)]
pub struct SellingStore {
    machines: Vec<Arc<SellingMachine>>,
}

impl SellingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_machine(&mut self, machine: SellingMachine) {
        self.machines.push(Arc::new(machine));
    }

    pub fn update_machine(
        &mut self,
        id: &MachineId,
        patch: SellingMachinePatch,
    ) -> MutationOutcome {
        self.replace(id, move |machine| machine.apply(patch))
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

    pub fn toggle_visibility(&mut self, id: &MachineId) -> MutationOutcome {
        self.replace(id, |machine| machine.visible = !machine.visible)
    }

    pub fn machines(&self) -> &[Arc<SellingMachine>] {
        &self.machines
    }

    pub fn machine_snapshot(&self) -> Vec<Arc<SellingMachine>> {
        self.machines.clone()
    }

    fn replace(
        &mut self,
        id: &MachineId,
        mutate: impl FnOnce(&mut SellingMachine),
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
}
