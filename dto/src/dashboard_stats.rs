use crate::country_stat::CountryStat;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Figures displayed on the dashboard, derived from the recipient list.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    total_recipients: usize,
    countries_count: usize,
    duplicate_groups_count: usize,
    country_breakdown: Vec<CountryStat>,
    available_countries: Vec<String>,
}

impl DashboardStats {
    pub fn new(
        total_recipients: usize,
        countries_count: usize,
        duplicate_groups_count: usize,
        country_breakdown: Vec<CountryStat>,
        available_countries: Vec<String>,
    ) -> Self {
        Self {
            total_recipients,
            countries_count,
            duplicate_groups_count,
            country_breakdown,
            available_countries,
        }
    }
}
