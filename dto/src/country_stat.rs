use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Share of the recipients living in a given country.
/// `percentage` is rounded to the nearest integer.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct CountryStat {
    country: String,
    count: usize,
    percentage: u8,
}

impl CountryStat {
    pub fn new(country: String, count: usize, percentage: u8) -> Self {
        Self {
            country,
            count,
            percentage,
        }
    }
}
