//! CitizenConnect Core
//!
//! Platform-agnostic domain model for the CitizenConnect civic-reporting
//! dashboard. This crate holds reports, community interactions, rewards,
//! events, emergency contacts, feedback, and the embedded sample data,
//! without any UI or browser-specific dependencies.

pub mod community;
pub mod data;
pub mod draft;
pub mod emergency;
pub mod events;
pub mod feedback;
pub mod leaderboard;
pub mod profile;
pub mod report;
pub mod rewards;
pub mod stats;

// Re-export commonly used types
pub use community::{Comment, CommunityReport, add_comment_in, toggle_like_in};
pub use data::SampleData;
pub use draft::{DraftError, ReportDraft, ReportSubmission};
pub use emergency::{
    AlertDraft, AlertError, EmergencyCategory, QUICK_CONTACTS, QuickContact, instant_alert_ready,
};
pub use events::{CivicEvent, EventStatus, RegistrationError};
pub use feedback::{
    FeedbackError, IssueFeedback, ResolvedIssue, feedback_counts, issues_awaiting, issues_rated,
    quick_feedback, validate_feedback,
};
pub use leaderboard::{
    Achievement, LeaderboardData, LeaderboardEntry, current_user, next_rank_gap, podium,
    rank_progress_pct,
};
pub use profile::{Notification, NotificationKind, UserProfile};
pub use report::{
    IssueCategory, Report, ReportStatus, StatusCounts, StatusFilter, TIMELINE_STEPS, TimelineStep,
    filter_reports, status_counts,
};
pub use rewards::{ClaimEligibility, Reward, claim_eligibility, claim_progress_pct};
pub use stats::{CategoryShare, CityStats, DashboardStats, MonthlyTrend, trend_bar_pct};
