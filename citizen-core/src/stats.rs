use crate::report::IssueCategory;
use serde::{Deserialize, Serialize};

/// City-wide report totals for the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CityStats {
    pub total_reports: u32,
    pub resolved: u32,
    pub in_progress: u32,
    pub pending: u32,
}

impl CityStats {
    /// Share of reports resolved, in percent. Zero when nothing was
    /// reported yet.
    #[must_use]
    pub fn resolution_rate(&self) -> f64 {
        if self.total_reports == 0 {
            return 0.0;
        }
        f64::from(self.resolved) * 100.0 / f64::from(self.total_reports)
    }
}

/// How many reports a category contributed, for the category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: IssueCategory,
    pub count: u32,
}

/// Reports filed per month, for the trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub reports: u32,
}

/// Bar height (percent of the tallest bar) for a simple CSS bar chart.
#[must_use]
pub fn trend_bar_pct(value: u32, series_max: u32) -> u8 {
    if series_max == 0 {
        return 0;
    }
    let pct = (u64::from(value) * 100) / u64::from(series_max);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

/// Everything the dashboard charts need, bundled for the data file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub stats: CityStats,
    pub category_shares: Vec<CategoryShare>,
    pub monthly_trends: Vec<MonthlyTrend>,
}

impl DashboardStats {
    #[must_use]
    pub fn trend_max(&self) -> u32 {
        self.monthly_trends
            .iter()
            .map(|trend| trend.reports)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn share_total(&self) -> u32 {
        self.category_shares.iter().map(|share| share.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_rate_handles_empty_city() {
        assert!((CityStats::default().resolution_rate() - 0.0).abs() < f64::EPSILON);

        let stats = CityStats {
            total_reports: 1247,
            resolved: 956,
            in_progress: 167,
            pending: 124,
        };
        let rate = stats.resolution_rate();
        assert!((rate - 76.66).abs() < 0.1);
    }

    #[test]
    fn trend_bars_scale_to_series_max() {
        assert_eq!(trend_bar_pct(50, 100), 50);
        assert_eq!(trend_bar_pct(100, 100), 100);
        assert_eq!(trend_bar_pct(5, 0), 0);
        assert_eq!(trend_bar_pct(200, 100), 100);
    }

    #[test]
    fn dashboard_aggregates_derive_from_series() {
        let dashboard = DashboardStats {
            stats: CityStats::default(),
            category_shares: vec![
                CategoryShare {
                    category: IssueCategory::Pothole,
                    count: 30,
                },
                CategoryShare {
                    category: IssueCategory::Garbage,
                    count: 20,
                },
            ],
            monthly_trends: vec![
                MonthlyTrend {
                    month: String::from("Jan"),
                    reports: 180,
                },
                MonthlyTrend {
                    month: String::from("Feb"),
                    reports: 240,
                },
            ],
        };
        assert_eq!(dashboard.trend_max(), 240);
        assert_eq!(dashboard.share_total(), 50);
    }
}
