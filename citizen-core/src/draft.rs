use crate::report::IssueCategory;
use thiserror::Error;

/// In-progress report form state. Kept intact when validation fails so the
/// user never has to re-enter data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub category: Option<IssueCategory>,
    pub custom_category: String,
    pub location: String,
    pub description: String,
    pub photos: Vec<String>,
}

/// Recoverable validation failures, surfaced as non-fatal messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please select an issue category")]
    MissingCategory,
    #[error("Please specify the custom category")]
    MissingCustomCategory,
    #[error("Please provide the issue location")]
    MissingLocation,
    #[error("Please describe the issue")]
    MissingDescription,
}

/// A draft that passed validation and is ready to submit.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSubmission {
    pub category: IssueCategory,
    pub category_label: String,
    pub location: String,
    pub description: String,
    pub photos: u8,
}

impl ReportDraft {
    /// Validate the draft, returning the first problem found.
    ///
    /// # Errors
    /// Returns a [`DraftError`] naming the field the user still has to fill.
    pub fn validate(&self) -> Result<ReportSubmission, DraftError> {
        let category = self.category.ok_or(DraftError::MissingCategory)?;
        if category == IssueCategory::Other && self.custom_category.trim().is_empty() {
            return Err(DraftError::MissingCustomCategory);
        }
        if self.location.trim().is_empty() {
            return Err(DraftError::MissingLocation);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::MissingDescription);
        }
        let category_label = if category == IssueCategory::Other {
            self.custom_category.trim().to_string()
        } else {
            category.label().to_string()
        };
        Ok(ReportSubmission {
            category,
            category_label,
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            photos: u8::try_from(self.photos.len()).unwrap_or(u8::MAX),
        })
    }

    /// Reset every field after a successful submission.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ReportDraft {
        ReportDraft {
            category: Some(IssueCategory::Pothole),
            custom_category: String::new(),
            location: String::from("MG Road, Block A"),
            description: String::from("Deep pothole causing traffic issues"),
            photos: vec![String::from("pothole.jpg")],
        }
    }

    #[test]
    fn complete_draft_produces_submission() {
        let submission = filled_draft().validate().expect("draft is complete");
        assert_eq!(submission.category, IssueCategory::Pothole);
        assert_eq!(submission.category_label, "Potholes");
        assert_eq!(submission.photos, 1);
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut draft = ReportDraft::default();
        assert_eq!(draft.validate(), Err(DraftError::MissingCategory));

        draft.category = Some(IssueCategory::Garbage);
        assert_eq!(draft.validate(), Err(DraftError::MissingLocation));

        draft.location = String::from("Park Street");
        assert_eq!(draft.validate(), Err(DraftError::MissingDescription));
    }

    #[test]
    fn other_category_requires_custom_text() {
        let mut draft = filled_draft();
        draft.category = Some(IssueCategory::Other);
        assert_eq!(draft.validate(), Err(DraftError::MissingCustomCategory));

        draft.custom_category = String::from("Noise pollution");
        let submission = draft.validate().expect("custom category provided");
        assert_eq!(submission.category_label, "Noise pollution");
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = filled_draft();
        draft.clear();
        assert_eq!(draft, ReportDraft::default());
    }
}
