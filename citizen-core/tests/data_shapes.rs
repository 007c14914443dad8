use citizen_core::data::parse_json;
use citizen_core::{
    CivicEvent, CommunityReport, LeaderboardData, Report, ResolvedIssue, Reward, SampleData,
    current_user, status_counts,
};

#[test]
fn every_asset_parses_strictly() {
    parse_json::<Vec<Report>>(include_str!("../assets/data/reports.json")).unwrap();
    parse_json::<Vec<CommunityReport>>(include_str!("../assets/data/community.json")).unwrap();
    parse_json::<LeaderboardData>(include_str!("../assets/data/leaderboard.json")).unwrap();
    parse_json::<Vec<Reward>>(include_str!("../assets/data/rewards.json")).unwrap();
    parse_json::<Vec<CivicEvent>>(include_str!("../assets/data/events.json")).unwrap();
    parse_json::<Vec<ResolvedIssue>>(include_str!("../assets/data/resolved.json")).unwrap();
}

#[test]
fn report_ids_are_unique_across_personal_and_community_sets() {
    let data = SampleData::load_from_static();
    let mut ids: Vec<u32> = data
        .reports
        .iter()
        .map(|report| report.id)
        .chain(data.community.iter().map(|entry| entry.report.id))
        .collect();
    ids.sort_unstable();
    let before = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), before, "duplicate report id in sample data");
}

#[test]
fn both_leaderboard_periods_contain_the_current_user() {
    let data = SampleData::load_from_static();
    assert!(current_user(&data.leaderboard.monthly).is_some());
    assert!(current_user(&data.leaderboard.weekly).is_some());
}

#[test]
fn personal_report_counts_line_up_with_statuses() {
    let data = SampleData::load_from_static();
    let counts = status_counts(&data.reports);
    assert_eq!(counts.total, data.reports.len());
    assert_eq!(
        counts.pending + counts.in_progress + counts.resolved + counts.rejected,
        counts.total
    );
}

#[test]
fn resolved_progress_matches_resolved_status() {
    let data = SampleData::load_from_static();
    for report in &data.reports {
        if report.status == citizen_core::ReportStatus::Resolved {
            assert_eq!(report.progress, 100, "resolved report {} not at 100%", report.id);
        }
    }
}

#[test]
fn event_participation_never_exceeds_capacity() {
    let data = SampleData::load_from_static();
    for event in &data.events {
        assert!(
            event.participants <= event.max_participants,
            "event {} is over capacity",
            event.id
        );
    }
}
