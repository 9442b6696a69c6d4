use crate::recipient::directory::RecipientDirectory;
use dto::dashboard_stats::DashboardStats;

pub fn build_dashboard_stats(directory: &RecipientDirectory) -> DashboardStats {
    DashboardStats::new(
        directory.len(),
        directory.distinct_countries(),
        directory.find_duplicate_groups().len(),
        directory.country_breakdown(),
        directory.available_countries(),
    )
}
