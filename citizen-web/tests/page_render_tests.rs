use citizen_core::SampleData;
use citizen_web::app::state::ToastKind;
use citizen_web::pages::{
    dashboard::{DashboardPage, DashboardPageProps},
    feedback::{FeedbackPage, FeedbackPageProps},
    leaderboard::{LeaderboardPage, LeaderboardPageProps},
    my_reports::{MyReportsPage, MyReportsPageProps},
    report_issue::{ReportIssuePage, ReportIssuePageProps},
    rewards::{RewardsPage, RewardsPageProps},
    sos::{SosPage, SosPageProps},
};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

fn sample() -> SampleData {
    SampleData::load_from_static()
}

fn toast() -> Callback<(String, ToastKind)> {
    Callback::noop()
}

#[test]
fn dashboard_page_renders_stats_and_charts() {
    let data = sample();
    let props = DashboardPageProps {
        dashboard: data.dashboard.clone(),
        recent: data.recent_reports().to_vec(),
        profile: data.profile.clone(),
    };
    let html = block_on(LocalServerRenderer::<DashboardPage>::with_props(props).render());
    assert!(html.contains("Welcome back, Priya!"));
    assert!(html.contains("Total Reports"));
    assert!(html.contains("Resolution Rate"));
    assert!(html.contains("trend-chart"));
}

#[test]
fn report_issue_page_renders_category_grid() {
    let props = ReportIssuePageProps {
        on_toast: toast(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ReportIssuePage>::with_props(props).render());
    assert!(html.contains("Report New Issue"));
    assert!(html.contains("category-pothole"));
    assert!(html.contains("category-other"));
    assert!(html.contains("submit-report"));
    assert!(html.contains("Go to SOS"));
}

#[test]
fn my_reports_page_defaults_to_personal_tab() {
    let data = sample();
    let props = MyReportsPageProps {
        reports: data.reports.clone(),
        community: data.community.clone(),
        on_like: Callback::noop(),
        on_comment: Callback::noop(),
        on_toast: toast(),
    };
    let html = block_on(LocalServerRenderer::<MyReportsPage>::with_props(props).render());
    assert!(html.contains("my-reports-list"));
    assert!(html.contains("tab-my-reports"));
    assert!(html.contains("tab-public-reports"));
    assert!(html.contains("Large pothole on MG Road"));
    // The community pane is only mounted on its tab.
    assert!(!html.contains("community-list"));
}

#[test]
fn leaderboard_page_renders_podium_and_achievements() {
    let data = sample();
    let props = LeaderboardPageProps {
        leaderboard: data.leaderboard.clone(),
        achievements: data.achievements.clone(),
    };
    let html = block_on(LocalServerRenderer::<LeaderboardPage>::with_props(props).render());
    assert!(html.contains("podium"));
    assert!(html.contains("Rajesh Kumar"));
    assert!(html.contains("Your Stats"));
    assert!(html.contains("First Report"));
    assert!(html.contains("tab-monthly"));
    assert!(html.contains("tab-weekly"));
}

#[test]
fn rewards_page_defaults_to_rewards_section() {
    let data = sample();
    let props = RewardsPageProps {
        rewards: data.rewards.clone(),
        events: data.events.clone(),
        points: data.profile.points,
        on_toast: toast(),
    };
    let html = block_on(LocalServerRenderer::<RewardsPage>::with_props(props).render());
    assert!(html.contains("rewards-grid"));
    assert!(html.contains("Local Cafe Voucher"));
    assert!(html.contains("Out of Stock"));
    assert!(!html.contains("events-list"));
}

#[test]
fn sos_page_renders_instant_alert_by_default() {
    let props = SosPageProps { on_toast: toast() };
    let html = block_on(LocalServerRenderer::<SosPage>::with_props(props).render());
    assert!(html.contains("send-alert"));
    assert!(html.contains("emergency-fire"));
    assert!(html.contains("dial-100"));
    assert!(html.contains("Fetching location..."));
}

#[test]
fn feedback_page_partitions_rated_and_awaiting() {
    let data = sample();
    let props = FeedbackPageProps {
        issues: data.resolved_issues.clone(),
        on_toast: toast(),
    };
    let html = block_on(LocalServerRenderer::<FeedbackPage>::with_props(props).render());
    assert!(html.contains("Resolved Issues Awaiting Feedback"));
    assert!(html.contains("Previous Feedback"));
    assert!(html.contains("Pothole repair on MG Road"));
    assert!(html.contains("★★★★★"));
}
