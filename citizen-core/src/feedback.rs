use crate::report::IssueCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Feedback a citizen left on a resolved issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueFeedback {
    pub rating: u8,
    pub satisfied: bool,
    pub comment: String,
}

/// Resolved issue eligible for (or already carrying) feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedIssue {
    pub id: u32,
    pub title: String,
    pub resolved_date: NaiveDate,
    pub category: IssueCategory,
    pub description: String,
    #[serde(default)]
    pub feedback: Option<IssueFeedback>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
    #[error("Please provide your feedback comment")]
    MissingComment,
}

/// Validate a detailed feedback submission. A rating of 4 or more counts as
/// satisfied.
///
/// # Errors
/// Rejects out-of-range ratings and blank comments.
pub fn validate_feedback(rating: u8, comment: &str) -> Result<IssueFeedback, FeedbackError> {
    if !(1..=5).contains(&rating) {
        return Err(FeedbackError::RatingOutOfRange);
    }
    let comment = comment.trim();
    if comment.is_empty() {
        return Err(FeedbackError::MissingComment);
    }
    Ok(IssueFeedback {
        rating,
        satisfied: rating >= 4,
        comment: comment.to_string(),
    })
}

/// Canned entry produced by the one-tap thumbs up / thumbs down buttons.
#[must_use]
pub fn quick_feedback(satisfied: bool) -> IssueFeedback {
    IssueFeedback {
        rating: if satisfied { 5 } else { 2 },
        satisfied,
        comment: String::from(if satisfied {
            "Quick positive feedback"
        } else {
            "Quick negative feedback"
        }),
    }
}

#[must_use]
pub fn issues_awaiting(issues: &[ResolvedIssue]) -> Vec<ResolvedIssue> {
    issues
        .iter()
        .filter(|issue| issue.feedback.is_none())
        .cloned()
        .collect()
}

#[must_use]
pub fn issues_rated(issues: &[ResolvedIssue]) -> Vec<ResolvedIssue> {
    issues
        .iter()
        .filter(|issue| issue.feedback.is_some())
        .cloned()
        .collect()
}

/// (given, pending) feedback totals for the stats row.
#[must_use]
pub fn feedback_counts(issues: &[ResolvedIssue]) -> (usize, usize) {
    let given = issues
        .iter()
        .filter(|issue| issue.feedback.is_some())
        .count();
    (given, issues.len() - given)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: u32, feedback: Option<IssueFeedback>) -> ResolvedIssue {
        ResolvedIssue {
            id,
            title: String::from("Pothole repair on MG Road"),
            resolved_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            category: IssueCategory::Pothole,
            description: String::new(),
            feedback,
        }
    }

    #[test]
    fn detailed_feedback_validates_rating_and_comment() {
        let entry = validate_feedback(5, "Excellent work!").unwrap();
        assert!(entry.satisfied);

        let entry = validate_feedback(3, "Could be faster").unwrap();
        assert!(!entry.satisfied);

        assert_eq!(validate_feedback(0, "x"), Err(FeedbackError::RatingOutOfRange));
        assert_eq!(validate_feedback(6, "x"), Err(FeedbackError::RatingOutOfRange));
        assert_eq!(validate_feedback(4, "  "), Err(FeedbackError::MissingComment));
    }

    #[test]
    fn quick_feedback_maps_to_canned_ratings() {
        assert_eq!(quick_feedback(true).rating, 5);
        assert_eq!(quick_feedback(false).rating, 2);
        assert!(!quick_feedback(false).satisfied);
    }

    #[test]
    fn partition_helpers_split_on_feedback_presence() {
        let issues = vec![
            issue(1, None),
            issue(2, Some(quick_feedback(true))),
            issue(3, None),
        ];
        assert_eq!(issues_awaiting(&issues).len(), 2);
        assert_eq!(issues_rated(&issues).len(), 1);
        assert_eq!(feedback_counts(&issues), (1, 2));
    }
}
