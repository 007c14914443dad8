//! The four tab sets mirrored into query parameters, one per tab-bearing
//! page. Each set is closed; the first entry is the page's default.

use crate::app::query::TabParam;

/// `/track-my-reports?tab=…`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportsTab {
    MyReports,
    PublicReports,
}

impl TabParam for ReportsTab {
    const PARAM: &'static str = "tab";
    const ALL: &'static [Self] = &[Self::MyReports, Self::PublicReports];

    fn as_str(self) -> &'static str {
        match self {
            Self::MyReports => "my-reports",
            Self::PublicReports => "public-reports",
        }
    }
}

impl ReportsTab {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MyReports => "My Reports",
            Self::PublicReports => "Community Reports",
        }
    }
}

/// `/community-leaderboard?period=…`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardPeriod {
    Monthly,
    Weekly,
}

impl TabParam for LeaderboardPeriod {
    const PARAM: &'static str = "period";
    const ALL: &'static [Self] = &[Self::Monthly, Self::Weekly];

    fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
        }
    }
}

impl LeaderboardPeriod {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "This Month",
            Self::Weekly => "This Week",
        }
    }
}

/// `/rewards-and-events?section=…`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardsSection {
    Rewards,
    Events,
}

impl TabParam for RewardsSection {
    const PARAM: &'static str = "section";
    const ALL: &'static [Self] = &[Self::Rewards, Self::Events];

    fn as_str(self) -> &'static str {
        match self {
            Self::Rewards => "rewards",
            Self::Events => "events",
        }
    }
}

impl RewardsSection {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rewards => "Rewards",
            Self::Events => "Events",
        }
    }
}

/// `/emergency-sos?type=…`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SosMode {
    Instant,
    Report,
}

impl TabParam for SosMode {
    const PARAM: &'static str = "type";
    const ALL: &'static [Self] = &[Self::Instant, Self::Report];

    fn as_str(self) -> &'static str {
        match self {
            Self::Instant => "instant",
            Self::Report => "report",
        }
    }
}

impl SosMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Instant => "Instant Alert",
            Self::Report => "Report Emergency",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::query::{TabResolution, resolve_tab};

    #[test]
    fn every_tab_value_round_trips() {
        fn check<T: TabParam + std::fmt::Debug>() {
            for tab in T::ALL {
                assert_eq!(T::parse(tab.as_str()), Some(*tab));
            }
        }
        check::<ReportsTab>();
        check::<LeaderboardPeriod>();
        check::<RewardsSection>();
        check::<SosMode>();
    }

    #[test]
    fn defaults_match_the_url_table() {
        assert_eq!(ReportsTab::default_tab(), ReportsTab::MyReports);
        assert_eq!(LeaderboardPeriod::default_tab(), LeaderboardPeriod::Monthly);
        assert_eq!(RewardsSection::default_tab(), RewardsSection::Rewards);
        assert_eq!(SosMode::default_tab(), SosMode::Instant);
    }

    #[test]
    fn unknown_values_fall_back_per_page() {
        assert_eq!(
            resolve_tab::<LeaderboardPeriod>(Some("yearly")),
            TabResolution::Defaulted(LeaderboardPeriod::Monthly)
        );
        assert_eq!(
            resolve_tab::<SosMode>(Some("manual")),
            TabResolution::Defaulted(SosMode::Instant)
        );
    }

    #[test]
    fn canonical_queries_use_each_pages_param() {
        assert_eq!(ReportsTab::PublicReports.query(), "?tab=public-reports");
        assert_eq!(LeaderboardPeriod::Weekly.query(), "?period=weekly");
        assert_eq!(RewardsSection::Events.query(), "?section=events");
        assert_eq!(SosMode::Report.query(), "?type=report");
    }
}
