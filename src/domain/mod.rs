//! Entity records for the marketplace domains.
//!
//! Everything here is a plain serde record: no inheritance, no behavior
//! beyond labelling helpers. Stores own the collections; these types only
//! describe their shape.

pub mod labour;
pub mod rental;
pub mod selling;
pub mod session;
pub mod transporter;

use serde::{Deserialize, Serialize};

/// Identity attached to the counterpart of a listing or lead (owner,
/// borrower, or caller). The marketplace assigns these ids upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub user_id: String,
    pub name: String,
    pub phone: String,
}

pub use labour::{LabourProfile, LabourProfilePatch, Lead, LeadStatus, WorkPreference};
pub use rental::{
    MachineId, PaymentStatus, PricingPeriod, RentalMachine, RentalMachinePatch, RentalRequest,
    RequestStatus,
};
pub use selling::{SellingMachine, SellingMachinePatch, UsageLevel};
pub use session::{Session, SessionPatch, UserRole};
pub use transporter::{
    PaymentRecord, TransporterProfile, TransporterProfilePatch, Vehicle, VehicleDriver,
};
