//! End-to-end scenarios for the add-machine wizard: independent screens
//! merge partial fields into one draft, publish validates and commits into
//! the rental store, and the store's mutators behave per contract afterwards.

mod common {
    use chrono::NaiveDate;

    use agrilink::domain::rental::PricingPeriod;
    use agrilink::domain::ContactCard;
    use agrilink::drafts::RentalDraftPatch;

    pub(super) fn owner() -> ContactCard {
        ContactCard {
            user_id: "farmer-12".to_string(),
            name: "Kisan Rao".to_string(),
            phone: "+91-90000-11111".to_string(),
        }
    }

    /// Screen 1: machine details.
    pub(super) fn details_step() -> RentalDraftPatch {
        RentalDraftPatch {
            name: Some("Combine harvester".to_string()),
            category: Some("Harvesting".to_string()),
            brand: Some("John Deere".to_string()),
            model: Some("W70".to_string()),
            image_key: Some("media/machines/w70.jpg".to_string()),
            ..RentalDraftPatch::default()
        }
    }

    /// Screen 2: pricing preferences.
    pub(super) fn pricing_step() -> RentalDraftPatch {
        RentalDraftPatch {
            price: Some(1800),
            pricing_period: Some(PricingPeriod::PerAcre),
            ..RentalDraftPatch::default()
        }
    }

    /// Screen 3: availability.
    pub(super) fn availability_step() -> RentalDraftPatch {
        RentalDraftPatch {
            expires_on: NaiveDate::from_ymd_opt(2026, 4, 30),
            location: Some("Karnal".to_string()),
            ..RentalDraftPatch::default()
        }
    }

    /// Screen 4: publish confirmation attaches the owner from the session.
    pub(super) fn publish_step() -> RentalDraftPatch {
        RentalDraftPatch {
            owner: Some(owner()),
            ..RentalDraftPatch::default()
        }
    }
}

use std::sync::Arc;

use agrilink::domain::rental::{PricingPeriod, RentalMachinePatch};
use agrilink::drafts::{
    publish_rental, DraftError, DraftState, DraftWorkflow, RentalDraftPatch, RentalListingForm,
};
use agrilink::stores::RentalStore;

use common::*;

#[test]
fn wizard_steps_merge_into_one_published_listing() {
    let mut workflow: DraftWorkflow<RentalListingForm> = DraftWorkflow::new();
    let mut store = RentalStore::new();

    workflow.apply(details_step());
    assert_eq!(workflow.state(), DraftState::Collecting);
    workflow.apply(pricing_step());
    workflow.apply(availability_step());
    workflow.apply(publish_step());

    let id = publish_rental(&mut workflow, &mut store).expect("complete wizard publishes");

    assert_eq!(workflow.state(), DraftState::Empty);
    let listing = &store.machines()[0];
    assert_eq!(listing.id, id);
    assert_eq!(listing.name, "Combine harvester");
    assert_eq!(listing.price, 1800);
    assert_eq!(listing.pricing_period, PricingPeriod::PerAcre);
    assert_eq!(listing.location, "Karnal");
    assert_eq!(listing.owner, owner());
    assert!(listing.visible);
    assert!(!listing.expired);
}

#[test]
fn later_steps_overwrite_only_the_fields_they_set() {
    let mut workflow: DraftWorkflow<RentalListingForm> = DraftWorkflow::new();

    workflow.apply(RentalDraftPatch {
        name: Some("Combine harvester".to_string()),
        ..RentalDraftPatch::default()
    });
    workflow.apply(RentalDraftPatch {
        category: Some("Harvesting".to_string()),
        ..RentalDraftPatch::default()
    });

    let draft = workflow.draft();
    assert_eq!(draft.name.as_deref(), Some("Combine harvester"));
    assert_eq!(draft.category.as_deref(), Some("Harvesting"));

    workflow.apply(RentalDraftPatch {
        name: Some("Combine W70".to_string()),
        ..RentalDraftPatch::default()
    });
    assert_eq!(workflow.draft().name.as_deref(), Some("Combine W70"));
    assert_eq!(workflow.draft().category.as_deref(), Some("Harvesting"));
}

#[test]
fn incomplete_publish_is_rejected_and_resumable() {
    let mut workflow: DraftWorkflow<RentalListingForm> = DraftWorkflow::new();
    let mut store = RentalStore::new();
    workflow.apply(details_step());

    match publish_rental(&mut workflow, &mut store) {
        Err(DraftError::MissingFields(missing)) => {
            assert!(missing.contains(&"price"));
            assert!(missing.contains(&"owner"));
        }
        other => panic!("expected missing fields, got {other:?}"),
    }
    assert!(store.machines().is_empty());
    // Back-navigation resumes: the partial draft survived the rejection.
    assert_eq!(workflow.state(), DraftState::Collecting);

    workflow.apply(pricing_step());
    workflow.apply(availability_step());
    workflow.apply(publish_step());
    publish_rental(&mut workflow, &mut store).expect("completed draft publishes");
    assert_eq!(store.machines().len(), 1);
}

#[test]
fn visibility_toggled_twice_ends_live() {
    let mut workflow: DraftWorkflow<RentalListingForm> = DraftWorkflow::new();
    let mut store = RentalStore::new();
    workflow.apply(details_step());
    workflow.apply(pricing_step());
    workflow.apply(availability_step());
    workflow.apply(publish_step());
    let id = publish_rental(&mut workflow, &mut store).expect("publishes");

    assert!(store.toggle_visibility(&id).is_applied());
    assert!(store.toggle_visibility(&id).is_applied());

    let listing = &store.machines()[0];
    assert!(listing.visible);
    assert!(!listing.expired);
}

#[test]
fn updating_one_listing_leaves_the_rest_untouched() {
    let mut store = RentalStore::new();
    for _ in 0..2 {
        let mut workflow: DraftWorkflow<RentalListingForm> = DraftWorkflow::new();
        workflow.apply(details_step());
        workflow.apply(pricing_step());
        workflow.apply(availability_step());
        workflow.apply(publish_step());
        publish_rental(&mut workflow, &mut store).expect("publishes");
    }
    let first = store.machines()[0].clone();
    let second_id = store.machines()[1].id.clone();

    let outcome = store.update_machine(
        &second_id,
        RentalMachinePatch {
            price: Some(2000),
            ..RentalMachinePatch::default()
        },
    );

    assert!(outcome.is_applied());
    assert!(Arc::ptr_eq(&first, &store.machines()[0]));
    assert_eq!(store.machines()[1].price, 2000);
}
