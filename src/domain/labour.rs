use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ContactCard;

/// Whether a labourer takes work alone or as part of a crew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkPreference {
    Individual,
    Group,
}

impl WorkPreference {
    pub const fn label(self) -> &'static str {
        match self {
            WorkPreference::Individual => "individual",
            WorkPreference::Group => "group",
        }
    }
}

/// The session's labour profile. At most one exists per session; it is
/// created once through registration and only merged into afterwards.
///
/// Invariant: `calls_received` equals the number of leads appended through
/// the labour store since registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabourProfile {
    pub id: String,
    pub name: String,
    pub location: String,
    pub labour_types: Vec<String>,
    pub preference: WorkPreference,
    pub daily_rate: u32,
    pub verified: bool,
    pub rating: f32,
    pub jobs_completed: u32,
    pub calls_received: u32,
}

/// Partial update merged into the registered profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabourProfilePatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub labour_types: Option<Vec<String>>,
    pub preference: Option<WorkPreference>,
    pub daily_rate: Option<u32>,
    pub verified: Option<bool>,
    pub rating: Option<f32>,
    pub jobs_completed: Option<u32>,
}

impl LabourProfile {
    pub fn apply(&mut self, patch: LabourProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(labour_types) = patch.labour_types {
            self.labour_types = labour_types;
        }
        if let Some(preference) = patch.preference {
            self.preference = preference;
        }
        if let Some(daily_rate) = patch.daily_rate {
            self.daily_rate = daily_rate;
        }
        if let Some(verified) = patch.verified {
            self.verified = verified;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(jobs_completed) = patch.jobs_completed {
            self.jobs_completed = jobs_completed;
        }
    }
}

/// Callback state of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Closed,
}

impl LeadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Closed => "closed",
        }
    }
}

/// A farmer's contact inquiry against a labour or transporter profile.
/// Leads are append-only and kept most-recent-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub counterpart: ContactCard,
    pub location: String,
    pub date: NaiveDate,
    /// Work type for labour leads, load type for transport leads.
    pub work_type: String,
    pub status: LeadStatus,
}
