use serde::{Deserialize, Serialize};

use super::rental::MachineId;
use super::ContactCard;

/// How heavily a second-hand machine has been used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsageLevel {
    LikeNew,
    Light,
    Moderate,
    Heavy,
}

impl UsageLevel {
    pub const fn label(self) -> &'static str {
        match self {
            UsageLevel::LikeNew => "like_new",
            UsageLevel::Light => "light",
            UsageLevel::Moderate => "moderate",
            UsageLevel::Heavy => "heavy",
        }
    }
}

/// A machine listed for outright sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellingMachine {
    pub id: MachineId,
    pub brand: String,
    pub model: String,
    pub asking_price: u32,
    pub media_keys: Vec<String>,
    pub category: String,
    pub sub_category: String,
    pub usage: UsageLevel,
    pub availability: String,
    pub visible: bool,
    pub expired: bool,
    pub owner: ContactCard,
    pub location: String,
}

/// Partial update for a sale listing; absent fields are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SellingMachinePatch {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub asking_price: Option<u32>,
    pub media_keys: Option<Vec<String>>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub usage: Option<UsageLevel>,
    pub availability: Option<String>,
    pub location: Option<String>,
}

impl SellingMachine {
    pub fn apply(&mut self, patch: SellingMachinePatch) {
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(asking_price) = patch.asking_price {
            self.asking_price = asking_price;
        }
        if let Some(media_keys) = patch.media_keys {
            self.media_keys = media_keys;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(sub_category) = patch.sub_category {
            self.sub_category = sub_category;
        }
        if let Some(usage) = patch.usage {
            self.usage = usage;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
    }
}
