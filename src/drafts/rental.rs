use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{next_listing_id, overwrite, require, DraftError, DraftForm, DraftWorkflow};
use crate::domain::rental::{MachineId, PricingPeriod, RentalMachine};
use crate::domain::ContactCard;
use crate::stores::RentalStore;

/// Draft accumulated by the add-machine wizard: machine details, pricing
/// preferences, availability, then publish.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RentalListingForm {
    pub id: Option<MachineId>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub price: Option<u32>,
    pub pricing_period: Option<PricingPeriod>,
    pub expires_on: Option<NaiveDate>,
    pub image_key: Option<String>,
    pub owner: Option<ContactCard>,
    pub location: Option<String>,
}

/// One step's contribution to the rental draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RentalDraftPatch {
    pub id: Option<MachineId>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub price: Option<u32>,
    pub pricing_period: Option<PricingPeriod>,
    pub expires_on: Option<NaiveDate>,
    pub image_key: Option<String>,
    pub owner: Option<ContactCard>,
    pub location: Option<String>,
}

impl DraftForm for RentalListingForm {
    type Patch = RentalDraftPatch;
    type Entity = RentalMachine;

    fn merge(&mut self, patch: RentalDraftPatch) {
        overwrite(&mut self.id, patch.id);
        overwrite(&mut self.name, patch.name);
        overwrite(&mut self.category, patch.category);
        overwrite(&mut self.brand, patch.brand);
        overwrite(&mut self.model, patch.model);
        overwrite(&mut self.price, patch.price);
        overwrite(&mut self.pricing_period, patch.pricing_period);
        overwrite(&mut self.expires_on, patch.expires_on);
        overwrite(&mut self.image_key, patch.image_key);
        overwrite(&mut self.owner, patch.owner);
        overwrite(&mut self.location, patch.location);
    }

    fn is_blank(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.category.is_none()
            && self.brand.is_none()
            && self.model.is_none()
            && self.price.is_none()
            && self.pricing_period.is_none()
            && self.expires_on.is_none()
            && self.image_key.is_none()
            && self.owner.is_none()
            && self.location.is_none()
    }

    fn finalize(&self) -> Result<RentalMachine, DraftError> {
        let mut missing = Vec::new();
        let name = require(&self.name, "name", &mut missing);
        let category = require(&self.category, "category", &mut missing);
        let brand = require(&self.brand, "brand", &mut missing);
        let model = require(&self.model, "model", &mut missing);
        let price = require(&self.price, "price", &mut missing);
        let pricing_period = require(&self.pricing_period, "pricing_period", &mut missing);
        let expires_on = require(&self.expires_on, "expires_on", &mut missing);
        let owner = require(&self.owner, "owner", &mut missing);
        let location = require(&self.location, "location", &mut missing);

        match (
            name,
            category,
            brand,
            model,
            price,
            pricing_period,
            expires_on,
            owner,
            location,
        ) {
            (
                Some(name),
                Some(category),
                Some(brand),
                Some(model),
                Some(price),
                Some(pricing_period),
                Some(expires_on),
                Some(owner),
                Some(location),
            ) => Ok(RentalMachine {
                id: self.id.clone().unwrap_or_else(next_listing_id),
                name,
                category,
                brand,
                model,
                price,
                pricing_period,
                expires_on,
                visible: true,
                expired: false,
                image_key: self.image_key.clone().unwrap_or_default(),
                owner,
                location,
                rating: 0.0,
            }),
            _ => Err(DraftError::MissingFields(missing)),
        }
    }
}

/// Publish step: validate the draft, commit the listing into the rental
/// store, and return the assigned id.
pub fn publish_rental(
    workflow: &mut DraftWorkflow<RentalListingForm>,
    store: &mut RentalStore,
) -> Result<MachineId, DraftError> {
    let machine = workflow.commit()?;
    let id = machine.id.clone();
    store.add_machine(machine);
    Ok(id)
}
