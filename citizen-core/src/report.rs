use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of infrastructure problem a report is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    Pothole,
    Garbage,
    Streetlight,
    Water,
    Traffic,
    Trees,
    Safety,
    Other,
}

impl IssueCategory {
    pub const ALL: [Self; 8] = [
        Self::Pothole,
        Self::Garbage,
        Self::Streetlight,
        Self::Water,
        Self::Traffic,
        Self::Trees,
        Self::Safety,
        Self::Other,
    ];

    /// Stable identifier used in data files and DOM test ids.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Pothole => "pothole",
            Self::Garbage => "garbage",
            Self::Streetlight => "streetlight",
            Self::Water => "water",
            Self::Traffic => "traffic",
            Self::Trees => "trees",
            Self::Safety => "safety",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pothole => "Potholes",
            Self::Garbage => "Garbage",
            Self::Streetlight => "Street Light",
            Self::Water => "Water Issues",
            Self::Traffic => "Traffic",
            Self::Trees => "Trees & Parks",
            Self::Safety => "Safety",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Pothole => "🚧",
            Self::Garbage => "🗑️",
            Self::Streetlight => "💡",
            Self::Water => "💧",
            Self::Traffic => "🚗",
            Self::Trees => "🌳",
            Self::Safety => "🛡️",
            Self::Other => "⚠️",
        }
    }
}

/// Where a report sits in the municipal resolution pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl ReportStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Resolved,
        Self::Rejected,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending Review",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Rejected => "Needs Review",
        }
    }

    #[must_use]
    pub fn from_id(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.id() == raw)
    }
}

/// One issue report with its resolution progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u32,
    pub title: String,
    pub category: IssueCategory,
    pub location: String,
    pub status: ReportStatus,
    pub date: NaiveDate,
    pub description: String,
    pub progress: u8,
    pub photos: u8,
    #[serde(default)]
    pub resolution_note: String,
    #[serde(default)]
    pub has_after_photo: bool,
}

/// Milestone on the submitted → resolved timeline, unlocked once the
/// report's progress reaches the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStep {
    pub label: &'static str,
    pub threshold: u8,
}

pub const TIMELINE_STEPS: [TimelineStep; 4] = [
    TimelineStep {
        label: "Submitted",
        threshold: 25,
    },
    TimelineStep {
        label: "Under Review",
        threshold: 50,
    },
    TimelineStep {
        label: "In Progress",
        threshold: 75,
    },
    TimelineStep {
        label: "Resolved",
        threshold: 100,
    },
];

impl Report {
    #[must_use]
    pub const fn milestone_reached(&self, step: TimelineStep) -> bool {
        self.progress >= step.threshold
    }
}

/// Status filter for report lists. Unknown select values fall back to
/// [`StatusFilter::All`], never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReportStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn from_id(raw: &str) -> Self {
        ReportStatus::from_id(raw).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.id(),
        }
    }

    #[must_use]
    pub fn matches(self, report: &Report) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => report.status == status,
        }
    }
}

#[must_use]
pub fn filter_reports(reports: &[Report], filter: StatusFilter) -> Vec<Report> {
    reports
        .iter()
        .filter(|report| filter.matches(report))
        .cloned()
        .collect()
}

/// Per-status totals shown in the stats row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub rejected: usize,
}

#[must_use]
pub fn status_counts(reports: &[Report]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: reports.len(),
        ..StatusCounts::default()
    };
    for report in reports {
        match report.status {
            ReportStatus::Pending => counts.pending += 1,
            ReportStatus::InProgress => counts.in_progress += 1,
            ReportStatus::Resolved => counts.resolved += 1,
            ReportStatus::Rejected => counts.rejected += 1,
        }
    }
    counts
}
