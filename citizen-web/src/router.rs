use crate::app::page::Page;
use yew_router::prelude::*;

/// Canonical URL surface of the app. Every [`Page`] owns exactly one path;
/// `/` and unrecognized paths resolve to the dashboard.
#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/report-new-issue")]
    ReportIssue,
    #[at("/track-my-reports")]
    MyReports,
    #[at("/community-leaderboard")]
    Leaderboard,
    #[at("/rewards-and-events")]
    Rewards,
    #[at("/emergency-sos")]
    Sos,
    #[at("/feedback-center")]
    Feedback,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_page(page: Page) -> Self {
        match page {
            Page::Dashboard => Self::Dashboard,
            Page::ReportIssue => Self::ReportIssue,
            Page::MyReports => Self::MyReports,
            Page::Leaderboard => Self::Leaderboard,
            Page::Rewards => Self::Rewards,
            Page::Sos => Self::Sos,
            Page::Feedback => Self::Feedback,
        }
    }

    /// Total in both directions: `/` and unknown paths fall back to the
    /// dashboard rather than erroring.
    #[must_use]
    pub const fn to_page(self) -> Page {
        match self {
            Self::Home | Self::Dashboard | Self::NotFound => Page::Dashboard,
            Self::ReportIssue => Page::ReportIssue,
            Self::MyReports => Page::MyReports,
            Self::Leaderboard => Page::Leaderboard,
            Self::Rewards => Page::Rewards,
            Self::Sos => Page::Sos,
            Self::Feedback => Page::Feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_route_round_trip_holds_for_every_page() {
        for page in Page::ALL {
            assert_eq!(Route::from_page(page).to_page(), page);
        }
    }

    #[test]
    fn canonical_paths_match_the_url_table() {
        assert_eq!(Route::from_page(Page::Dashboard).to_path(), "/dashboard");
        assert_eq!(
            Route::from_page(Page::ReportIssue).to_path(),
            "/report-new-issue"
        );
        assert_eq!(
            Route::from_page(Page::MyReports).to_path(),
            "/track-my-reports"
        );
        assert_eq!(
            Route::from_page(Page::Leaderboard).to_path(),
            "/community-leaderboard"
        );
        assert_eq!(
            Route::from_page(Page::Rewards).to_path(),
            "/rewards-and-events"
        );
        assert_eq!(Route::from_page(Page::Sos).to_path(), "/emergency-sos");
        assert_eq!(
            Route::from_page(Page::Feedback).to_path(),
            "/feedback-center"
        );
    }

    #[test]
    fn root_and_unknown_routes_fall_back_to_dashboard() {
        assert_eq!(Route::Home.to_page(), Page::Dashboard);
        assert_eq!(Route::NotFound.to_page(), Page::Dashboard);
        assert_eq!(
            Route::recognize("/definitely-not-a-page"),
            Some(Route::NotFound)
        );
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
    }
}
