//! Country fuel price index.

use crate::models::{CountryCode, FuelPriceRecord, FuelType};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Price snapshot used for one planning run.
///
/// Built once from a batch of observations and read-only afterwards:
/// lookups are O(1) and the planner never goes back to the backing store
/// mid-run, so a fully built index can be shared across concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct PriceIndex {
    prices: HashMap<(CountryCode, FuelType), PricePoint>,
}

/// One usable price with its observation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub price_per_liter_eur: f64,
    pub recorded_at: DateTime<Utc>,
}

impl PriceIndex {
    /// Build the index keeping the most recent observation per
    /// (country, fuel type) pair. On equal timestamps the later record wins.
    pub fn from_records(records: &[FuelPriceRecord]) -> Self {
        let mut prices: HashMap<(CountryCode, FuelType), PricePoint> = HashMap::new();
        for record in records {
            let key = (record.country_code.clone(), record.fuel_type);
            let point = PricePoint {
                price_per_liter_eur: record.price_per_liter_eur,
                recorded_at: record.recorded_at,
            };
            let newer = match prices.get(&key) {
                Some(existing) => record.recorded_at >= existing.recorded_at,
                None => true,
            };
            if newer {
                prices.insert(key, point);
            }
        }
        Self { prices }
    }

    pub fn lookup(&self, country: &CountryCode, fuel_type: FuelType) -> Option<PricePoint> {
        self.prices.get(&(country.clone(), fuel_type)).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
