use crate::community::CommunityReport;
use crate::events::CivicEvent;
use crate::feedback::ResolvedIssue;
use crate::leaderboard::{Achievement, LeaderboardData};
use crate::profile::{Notification, UserProfile};
use crate::report::Report;
use crate::rewards::Reward;
use crate::stats::DashboardStats;
use serde::de::DeserializeOwned;

/// The embedded sample data driving every screen. There is no backend;
/// this is the whole world.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleData {
    pub profile: UserProfile,
    pub notifications: Vec<Notification>,
    pub reports: Vec<Report>,
    pub community: Vec<CommunityReport>,
    pub leaderboard: LeaderboardData,
    pub achievements: Vec<Achievement>,
    pub rewards: Vec<Reward>,
    pub events: Vec<CivicEvent>,
    pub resolved_issues: Vec<ResolvedIssue>,
    pub dashboard: DashboardStats,
}

/// Parse one embedded asset. Malformed data recovers to the default value
/// rather than failing the boot.
fn parse_asset<T: DeserializeOwned + Default>(raw: &str) -> T {
    parse_json(raw).unwrap_or_default()
}

/// Strict parse, used by tests to catch asset drift.
///
/// # Errors
/// Returns the underlying JSON error with context.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).map_err(Into::into)
}

impl SampleData {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every embedded sample-data asset.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self {
            profile: parse_asset(include_str!("../assets/data/profile.json")),
            notifications: parse_asset(include_str!("../assets/data/notifications.json")),
            reports: parse_asset(include_str!("../assets/data/reports.json")),
            community: parse_asset(include_str!("../assets/data/community.json")),
            leaderboard: parse_asset(include_str!("../assets/data/leaderboard.json")),
            achievements: parse_asset(include_str!("../assets/data/achievements.json")),
            rewards: parse_asset(include_str!("../assets/data/rewards.json")),
            events: parse_asset(include_str!("../assets/data/events.json")),
            resolved_issues: parse_asset(include_str!("../assets/data/resolved.json")),
            dashboard: parse_asset(include_str!("../assets/data/stats.json")),
        }
    }

    /// Recent reports teaser for the dashboard.
    #[must_use]
    pub fn recent_reports(&self) -> &[Report] {
        &self.reports[..self.reports.len().min(3)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_assets_recover_to_defaults() {
        let reports: Vec<Report> = parse_asset("not json at all");
        assert!(reports.is_empty());

        let profile: UserProfile = parse_asset("{\"points\": \"oops\"}");
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn embedded_assets_all_load() {
        let data = SampleData::load_from_static();
        assert!(!data.reports.is_empty());
        assert!(!data.community.is_empty());
        assert!(!data.leaderboard.monthly.is_empty());
        assert!(!data.rewards.is_empty());
        assert!(!data.events.is_empty());
        assert!(!data.resolved_issues.is_empty());
        assert!(data.dashboard.stats.total_reports > 0);
        assert_eq!(data.recent_reports().len(), 3);
    }
}
