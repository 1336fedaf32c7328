use serde::{Deserialize, Serialize};

use super::{next_listing_id, overwrite, require, DraftError, DraftForm, DraftWorkflow};
use crate::domain::rental::MachineId;
use crate::domain::selling::{SellingMachine, UsageLevel};
use crate::domain::ContactCard;
use crate::stores::SellingStore;

/// Draft accumulated by the sell-machine wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleListingForm {
    pub id: Option<MachineId>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub asking_price: Option<u32>,
    pub media_keys: Option<Vec<String>>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub usage: Option<UsageLevel>,
    pub availability: Option<String>,
    pub owner: Option<ContactCard>,
    pub location: Option<String>,
}

/// One step's contribution to the sale draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleDraftPatch {
    pub id: Option<MachineId>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub asking_price: Option<u32>,
    pub media_keys: Option<Vec<String>>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub usage: Option<UsageLevel>,
    pub availability: Option<String>,
    pub owner: Option<ContactCard>,
    pub location: Option<String>,
}

impl DraftForm for SaleListingForm {
    type Patch = SaleDraftPatch;
    type Entity = SellingMachine;

    fn merge(&mut self, patch: SaleDraftPatch) {
        overwrite(&mut self.id, patch.id);
        overwrite(&mut self.brand, patch.brand);
        overwrite(&mut self.model, patch.model);
        overwrite(&mut self.asking_price, patch.asking_price);
        overwrite(&mut self.media_keys, patch.media_keys);
        overwrite(&mut self.category, patch.category);
        overwrite(&mut self.sub_category, patch.sub_category);
        overwrite(&mut self.usage, patch.usage);
        overwrite(&mut self.availability, patch.availability);
        overwrite(&mut self.owner, patch.owner);
        overwrite(&mut self.location, patch.location);
    }

    fn is_blank(&self) -> bool {
        self.id.is_none()
            && self.brand.is_none()
            && self.model.is_none()
            && self.asking_price.is_none()
            && self.media_keys.is_none()
            && self.category.is_none()
            && self.sub_category.is_none()
            && self.usage.is_none()
            && self.availability.is_none()
            && self.owner.is_none()
            && self.location.is_none()
    }

    fn finalize(&self) -> Result<SellingMachine, DraftError> {
        let mut missing = Vec::new();
        let brand = require(&self.brand, "brand", &mut missing);
        let model = require(&self.model, "model", &mut missing);
        let asking_price = require(&self.asking_price, "asking_price", &mut missing);
        let category = require(&self.category, "category", &mut missing);
        let sub_category = require(&self.sub_category, "sub_category", &mut missing);
        let usage = require(&self.usage, "usage", &mut missing);
        let availability = require(&self.availability, "availability", &mut missing);
        let owner = require(&self.owner, "owner", &mut missing);
        let location = require(&self.location, "location", &mut missing);

        match (
            brand,
            model,
            asking_price,
            category,
            sub_category,
            usage,
            availability,
            owner,
            location,
        ) {
            (
                Some(brand),
                Some(model),
                Some(asking_price),
                Some(category),
                Some(sub_category),
                Some(usage),
                Some(availability),
                Some(owner),
                Some(location),
            ) => Ok(SellingMachine {
                id: self.id.clone().unwrap_or_else(next_listing_id),
                brand,
                model,
                asking_price,
                media_keys: self.media_keys.clone().unwrap_or_default(),
                category,
                sub_category,
                usage,
                availability,
                visible: true,
                expired: false,
                owner,
                location,
            }),
            _ => Err(DraftError::MissingFields(missing)),
        }
    }
}

/// Publish step for sale listings; mirrors [`super::publish_rental`].
pub fn publish_sale(
    workflow: &mut DraftWorkflow<SaleListingForm>,
    store: &mut SellingStore,
) -> Result<MachineId, DraftError> {
    let machine = workflow.commit()?;
    let id = machine.id.clone();
    store.add_machine(machine);
    Ok(id)
}
