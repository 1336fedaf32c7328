use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Driver assigned to a vehicle. Embedded in the vehicle record rather than
/// tracked as its own collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDriver {
    pub name: String,
    pub phone: String,
    pub licence_number: String,
}

/// A vehicle in the transporter's fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub vehicle_type: String,
    pub registration_number: String,
    pub capacity_tonnes: f32,
    pub driver: VehicleDriver,
}

/// Listing-fee or subscription payment tied to a fleet addition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub vehicle_id: String,
    pub amount: u32,
    pub paid_on: NaiveDate,
    pub description: String,
}

/// The session's transporter profile. Singleton like [`super::LabourProfile`],
/// additionally owning the fleet and its payment history.
///
/// Invariant: `leads_received` equals the number of leads appended through
/// the transporter store since registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransporterProfile {
    pub id: String,
    pub name: String,
    pub location: String,
    pub service_area: String,
    pub verified: bool,
    pub rating: f32,
    pub leads_received: u32,
    pub vehicles: Vec<Vehicle>,
    pub payments: Vec<PaymentRecord>,
}

/// Partial update merged into the registered profile. Fleet and payment
/// history are store-managed and not patchable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransporterProfilePatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub service_area: Option<String>,
    pub verified: Option<bool>,
    pub rating: Option<f32>,
}

impl TransporterProfile {
    pub fn apply(&mut self, patch: TransporterProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(service_area) = patch.service_area {
            self.service_area = service_area;
        }
        if let Some(verified) = patch.verified {
            self.verified = verified;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
    }
}
