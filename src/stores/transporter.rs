use std::sync::Arc;

use super::MutationOutcome;
use crate::domain::labour::Lead;
use crate::domain::transporter::{
    PaymentRecord, TransporterProfile, TransporterProfilePatch, Vehicle,
};

/// Store for the session's transporter profile, its fleet, payment history,
/// and incoming leads.
///
/// Fleet additions are atomic with their payment record: either the vehicle
/// lands in the fleet and the payment at the head of the history, or (with
/// no registered profile) neither does.
#[derive(Debug, Default)]
pub struct TransporterStore {
    profile: Option<Arc<TransporterProfile>>,
    leads: Vec<Arc<Lead>>,
}

impl TransporterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_profile(&mut self, profile: TransporterProfile) {
        self.profile = Some(Arc::new(profile));
    }

    /// Merge a partial update into the registered profile; `NotFound` when
    /// registration has not happened.
    pub fn update_profile(&mut self, patch: TransporterProfilePatch) -> MutationOutcome {
        self.replace_profile(move |profile| profile.apply(patch))
    }

    pub fn profile(&self) -> Option<&Arc<TransporterProfile>> {
        self.profile.as_ref()
    }

    pub fn clear_profile(&mut self) {
        self.profile = None;
        self.leads.clear();
    }

    /// Add a vehicle to the fleet and record its payment in one transition.
    pub fn add_vehicle(&mut self, vehicle: Vehicle, payment: PaymentRecord) -> MutationOutcome {
        self.replace_profile(move |profile| {
            profile.vehicles.push(vehicle);
            profile.payments.insert(0, payment);
        })
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        self.profile
            .as_deref()
            .map(|profile| profile.vehicles.as_slice())
            .unwrap_or(&[])
    }

    pub fn payments(&self) -> &[PaymentRecord] {
        self.profile
            .as_deref()
            .map(|profile| profile.payments.as_slice())
            .unwrap_or(&[])
    }

    /// Prepend a lead and bump `leads_received` in the same transition.
    pub fn add_lead(&mut self, lead: Lead) -> MutationOutcome {
        let outcome = self.replace_profile(|profile| profile.leads_received += 1);
        if outcome.is_applied() {
            self.leads.insert(0, Arc::new(lead));
        }
        outcome
    }

    pub fn leads(&self) -> &[Arc<Lead>] {
        &self.leads
    }

    pub fn lead_snapshot(&self) -> Vec<Arc<Lead>> {
        self.leads.clone()
    }

    fn replace_profile(&mut self, mutate: impl FnOnce(&mut TransporterProfile)) -> MutationOutcome {
        match self.profile.as_mut() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::labour::LeadStatus;
    use crate::domain::transporter::VehicleDriver;
    use crate::domain::ContactCard;
    use chrono::NaiveDate;

    fn profile() -> TransporterProfile {
        TransporterProfile {
            id: "trans-1".to_string(),
            name: "Shivam Logistics".to_string(),
            location: "Nagpur".to_string(),
            service_area: "Vidarbha".to_string(),
            verified: false,
            rating: 4.1,
            leads_received: 0,
            vehicles: Vec::new(),
            payments: Vec::new(),
        }
    }

    fn vehicle(id: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            vehicle_type: "Mini truck".to_string(),
            registration_number: "MH-31-AB-1234".to_string(),
            capacity_tonnes: 1.5,
            driver: VehicleDriver {
                name: "Prakash".to_string(),
                phone: "+91-90000-55555".to_string(),
                licence_number: "MH31 20220001234".to_string(),
            },
        }
    }

    fn payment(id: &str, vehicle_id: &str) -> PaymentRecord {
        PaymentRecord {
            id: id.to_string(),
            vehicle_id: vehicle_id.to_string(),
            amount: 499,
            paid_on: NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid"),
            description: "Fleet listing fee".to_string(),
        }
    }

    fn lead(id: &str) -> Lead {
        Lead {
            id: id.to_string(),
            counterpart: ContactCard {
                user_id: "farmer-3".to_string(),
                name: "Devendra".to_string(),
                phone: "+91-90000-66666".to_string(),
            },
            location: "Wardha".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 10).expect("valid"),
            work_type: "Soybean, 2t".to_string(),
            status: LeadStatus::New,
        }
    }

    #[test]
    fn vehicle_addition_is_atomic_with_its_payment() {
        let mut store = TransporterStore::new();
        store.set_profile(profile());

        let outcome = store.add_vehicle(vehicle("veh-1"), payment("pay-1", "veh-1"));

        assert!(outcome.is_applied());
        assert_eq!(store.vehicles().len(), 1);
        assert_eq!(store.payments()[0].id, "pay-1");
    }

    #[test]
    fn vehicle_addition_without_profile_leaves_nothing_behind() {
        let mut store = TransporterStore::new();

        let outcome = store.add_vehicle(vehicle("veh-1"), payment("pay-1", "veh-1"));

        assert!(outcome.is_not_found());
        assert!(store.vehicles().is_empty());
        assert!(store.payments().is_empty());
    }

    #[test]
    fn payments_are_most_recent_first() {
        let mut store = TransporterStore::new();
        store.set_profile(profile());
        assert!(store
            .add_vehicle(vehicle("veh-1"), payment("pay-1", "veh-1"))
            .is_applied());
        assert!(store
            .add_vehicle(vehicle("veh-2"), payment("pay-2", "veh-2"))
            .is_applied());

        assert_eq!(store.payments()[0].id, "pay-2");
        assert_eq!(store.vehicles()[0].id, "veh-1");
    }

    #[test]
    fn leads_drive_the_received_counter() {
        let mut store = TransporterStore::new();
        store.set_profile(profile());

        assert!(store.add_lead(lead("lead-1")).is_applied());
        assert!(store.add_lead(lead("lead-2")).is_applied());

        let merged = store.profile().expect("profile registered");
        assert_eq!(merged.leads_received, 2);
        assert_eq!(store.leads()[0].id, "lead-2");
    }
}
