use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ContactCard;

/// Identifier wrapper shared by rental and sale listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineId(pub String);

impl MachineId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Billing unit attached to a rental price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingPeriod {
    PerHour,
    PerDay,
    PerAcre,
}

impl PricingPeriod {
    pub const fn label(self) -> &'static str {
        match self {
            PricingPeriod::PerHour => "per_hour",
            PricingPeriod::PerDay => "per_day",
            PricingPeriod::PerAcre => "per_acre",
        }
    }
}

/// A machine advertised for rent.
///
/// `visible` and `expired` are independent flags: consumers derive the
/// Live/Hidden badge from `visible` alone, so an expired listing can still
/// be marked visible. That combination is allowed by contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalMachine {
    pub id: MachineId,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub price: u32,
    pub pricing_period: PricingPeriod,
    pub expires_on: NaiveDate,
    pub visible: bool,
    pub expired: bool,
    pub image_key: String,
    pub owner: ContactCard,
    pub location: String,
    pub rating: f32,
}

/// Partial update for a rental listing; absent fields are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RentalMachinePatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub price: Option<u32>,
    pub pricing_period: Option<PricingPeriod>,
    pub expires_on: Option<NaiveDate>,
    pub image_key: Option<String>,
    pub location: Option<String>,
    pub rating: Option<f32>,
}

impl RentalMachine {
    pub fn apply(&mut self, patch: RentalMachinePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(pricing_period) = patch.pricing_period {
            self.pricing_period = pricing_period;
        }
        if let Some(expires_on) = patch.expires_on {
            self.expires_on = expires_on;
        }
        if let Some(image_key) = patch.image_key {
            self.image_key = image_key;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
    }
}

/// Lifecycle of a borrower's rental request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl RequestStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Completed => "completed",
        }
    }
}

/// Settlement state of a rental request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

impl PaymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Paid => "paid",
        }
    }
}

/// A borrower's request against a rental listing. Created outside this core;
/// the store only transitions its status fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRequest {
    pub id: String,
    pub machine_id: MachineId,
    pub borrower: ContactCard,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: u32,
    pub status: RequestStatus,
    pub payment: PaymentStatus,
}
