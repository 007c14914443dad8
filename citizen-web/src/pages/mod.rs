pub mod dashboard;
pub mod feedback;
pub mod leaderboard;
pub mod my_reports;
pub mod report_issue;
pub mod rewards;
pub mod sos;
