use serde::{Deserialize, Serialize};

use crate::services::storage::{KeyValueStore, StorageError};

/// Storage key used when the filter state is persisted opportunistically.
pub const FILTER_STORAGE_KEY: &str = "buy_machine_filters";

const DEFAULT_MAX_DISTANCE_KM: u32 = 50;

/// Condition filter for the buy-machine search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineCondition {
    Any,
    New,
    Used,
}

impl MachineCondition {
    pub const fn label(self) -> &'static str {
        match self {
            MachineCondition::Any => "any",
            MachineCondition::New => "new",
            MachineCondition::Used => "used",
        }
    }
}

/// Inclusive price bounds; either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl PriceBounds {
    pub fn contains(&self, price: u32) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Transient search criteria for the buy-machine screen.
///
/// Defaults: no category, open price bounds, 50 km radius, negotiable-only
/// off, any condition. `reset` restores exactly these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyMachineFilters {
    pub category: Option<String>,
    pub price: PriceBounds,
    pub max_distance_km: u32,
    pub negotiable_only: bool,
    pub condition: MachineCondition,
}

impl Default for BuyMachineFilters {
    fn default() -> Self {
        Self {
            category: None,
            price: PriceBounds::default(),
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            negotiable_only: false,
            condition: MachineCondition::Any,
        }
    }
}

impl BuyMachineFilters {
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    pub fn set_price_bounds(&mut self, min: Option<u32>, max: Option<u32>) {
        self.price = PriceBounds { min, max };
    }

    pub fn set_max_distance_km(&mut self, km: u32) {
        self.max_distance_km = km;
    }

    pub fn set_negotiable_only(&mut self, negotiable_only: bool) {
        self.negotiable_only = negotiable_only;
    }

    pub fn set_condition(&mut self, condition: MachineCondition) {
        self.condition = condition;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Persist the criteria through the key-value collaborator. The core
    /// works fine without this; it only survives restarts when called.
    pub fn persist_to(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        let value = serde_json::to_value(self).map_err(StorageError::Serialize)?;
        store.set(FILTER_STORAGE_KEY, value)
    }

    /// Restore persisted criteria, falling back to defaults when nothing was
    /// saved.
    pub fn restore_from(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        match store.get(FILTER_STORAGE_KEY)? {
            Some(value) => serde_json::from_value(value).map_err(StorageError::Serialize),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryKeyValueStore;

    #[test]
    fn reset_restores_documented_defaults() {
        let mut filters = BuyMachineFilters::default();
        filters.set_category(Some("Harvester".to_string()));
        filters.set_price_bounds(Some(1000), Some(5000));
        filters.set_max_distance_km(200);
        filters.set_negotiable_only(true);
        filters.set_condition(MachineCondition::Used);

        filters.reset();

        assert_eq!(filters, BuyMachineFilters::default());
        assert_eq!(filters.max_distance_km, 50);
        assert_eq!(filters.condition, MachineCondition::Any);
    }

    #[test]
    fn price_bounds_are_inclusive_and_open_ended() {
        let open = PriceBounds::default();
        assert!(open.contains(0));
        assert!(open.contains(u32::MAX));

        let bounded = PriceBounds {
            min: Some(1000),
            max: Some(5000),
        };
        assert!(bounded.contains(1000));
        assert!(bounded.contains(5000));
        assert!(!bounded.contains(999));
        assert!(!bounded.contains(5001));
    }

    #[test]
    fn round_trips_through_the_key_value_collaborator() {
        let store = MemoryKeyValueStore::default();
        let mut filters = BuyMachineFilters::default();
        filters.set_category(Some("Tractor".to_string()));
        filters.set_negotiable_only(true);

        filters.persist_to(&store).expect("persist succeeds");
        let restored = BuyMachineFilters::restore_from(&store).expect("restore succeeds");

        assert_eq!(restored, filters);
    }

    #[test]
    fn restore_without_saved_state_yields_defaults() {
        let store = MemoryKeyValueStore::default();
        let restored = BuyMachineFilters::restore_from(&store).expect("restore succeeds");
        assert_eq!(restored, BuyMachineFilters::default());
    }
}
