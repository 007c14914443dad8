use crate::report::Report;
use serde::{Deserialize, Serialize};

/// Comment left on a community report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub text: String,
    pub time: String,
}

/// Publicly visible report with social interactions attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityReport {
    #[serde(flatten)]
    pub report: Report,
    pub author: String,
    pub likes: u32,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl CommunityReport {
    /// Flip the current user's like, adjusting the counter. The counter
    /// never drops below zero even on inconsistent sample data.
    pub fn toggle_like(&mut self) -> bool {
        if self.liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.liked = !self.liked;
        self.liked
    }

    /// Prepend a comment. Blank text is rejected and leaves the report
    /// untouched.
    pub fn add_comment(&mut self, author: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let next_id = self
            .comments
            .iter()
            .map(|comment| comment.id)
            .max()
            .unwrap_or(0)
            + 1;
        self.comments.insert(
            0,
            Comment {
                id: next_id,
                author: author.to_string(),
                text: text.to_string(),
                time: String::from("Just now"),
            },
        );
        true
    }

    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// Toggle the like on the report with the given id, returning the new liked
/// state, or `None` when the id is unknown.
pub fn toggle_like_in(reports: &mut [CommunityReport], id: u32) -> Option<bool> {
    reports
        .iter_mut()
        .find(|entry| entry.report.id == id)
        .map(CommunityReport::toggle_like)
}

/// Add a comment to the report with the given id. Returns false for blank
/// text or an unknown id.
pub fn add_comment_in(reports: &mut [CommunityReport], id: u32, author: &str, text: &str) -> bool {
    reports
        .iter_mut()
        .find(|entry| entry.report.id == id)
        .is_some_and(|entry| entry.add_comment(author, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{IssueCategory, ReportStatus};
    use chrono::NaiveDate;

    fn community_report(id: u32) -> CommunityReport {
        CommunityReport {
            report: Report {
                id,
                title: String::from("Road construction blocking traffic"),
                category: IssueCategory::Traffic,
                location: String::from("Brigade Road"),
                status: ReportStatus::InProgress,
                date: NaiveDate::from_ymd_opt(2024, 1, 23).unwrap(),
                description: String::new(),
                progress: 40,
                photos: 4,
                resolution_note: String::new(),
                has_after_photo: false,
            },
            author: String::from("Rajesh Kumar"),
            likes: 24,
            liked: false,
            comments: vec![Comment {
                id: 1,
                author: String::from("Priya Sharma"),
                text: String::from("This is affecting my daily commute too!"),
                time: String::from("2 hours ago"),
            }],
        }
    }

    #[test]
    fn toggle_like_flips_flag_and_counter() {
        let mut entry = community_report(5);
        assert!(entry.toggle_like());
        assert_eq!(entry.likes, 25);
        assert!(!entry.toggle_like());
        assert_eq!(entry.likes, 24);
    }

    #[test]
    fn unliking_never_underflows() {
        let mut entry = community_report(5);
        entry.liked = true;
        entry.likes = 0;
        assert!(!entry.toggle_like());
        assert_eq!(entry.likes, 0);
    }

    #[test]
    fn comments_are_prepended_with_fresh_ids() {
        let mut entry = community_report(5);
        assert!(entry.add_comment("Priya Sharma", "Any update on this?"));
        assert_eq!(entry.comment_count(), 2);
        assert_eq!(entry.comments[0].id, 2);
        assert_eq!(entry.comments[0].time, "Just now");
    }

    #[test]
    fn blank_comments_are_rejected() {
        let mut entry = community_report(5);
        assert!(!entry.add_comment("Priya Sharma", "   "));
        assert_eq!(entry.comment_count(), 1);
    }

    #[test]
    fn lookup_helpers_target_by_report_id() {
        let mut feed = vec![community_report(5), community_report(6)];
        assert_eq!(toggle_like_in(&mut feed, 6), Some(true));
        assert!(feed[1].liked);
        assert_eq!(toggle_like_in(&mut feed, 99), None);
        assert!(add_comment_in(&mut feed, 5, "Amit Singh", "Noted."));
        assert!(!add_comment_in(&mut feed, 99, "Amit Singh", "Noted."));
    }
}
