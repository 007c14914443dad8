/// Top-level screens of the app. Exactly one page is current at any time;
/// the set is closed so an unknown page is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    ReportIssue,
    MyReports,
    Leaderboard,
    Rewards,
    Sos,
    Feedback,
}

impl Page {
    /// Sidebar menu order.
    pub const ALL: [Self; 7] = [
        Self::Dashboard,
        Self::ReportIssue,
        Self::MyReports,
        Self::Leaderboard,
        Self::Rewards,
        Self::Sos,
        Self::Feedback,
    ];

    /// Stable identifier used in DOM test ids and the test bridge.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::ReportIssue => "report-issue",
            Self::MyReports => "my-reports",
            Self::Leaderboard => "leaderboard",
            Self::Rewards => "rewards",
            Self::Sos => "sos",
            Self::Feedback => "feedback",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::ReportIssue => "Report Issue",
            Self::MyReports => "My Reports",
            Self::Leaderboard => "Leaderboard",
            Self::Rewards => "Rewards & Events",
            Self::Sos => "SOS Emergency",
            Self::Feedback => "Feedback",
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Dashboard => "🏠",
            Self::ReportIssue => "➕",
            Self::MyReports => "📄",
            Self::Leaderboard => "🏆",
            Self::Rewards => "🎁",
            Self::Sos => "🚨",
            Self::Feedback => "💬",
        }
    }

    /// The SOS entry gets the red pulsing treatment in the sidebar.
    #[must_use]
    pub const fn is_highlight(self) -> bool {
        matches!(self, Self::Sos)
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn page_ids_are_unique() {
        for (index, page) in Page::ALL.iter().enumerate() {
            for other in &Page::ALL[index + 1..] {
                assert_ne!(page.id(), other.id());
            }
        }
    }

    #[test]
    fn only_sos_is_highlighted() {
        let highlighted: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|page| page.is_highlight())
            .collect();
        assert_eq!(highlighted, vec![Page::Sos]);
    }
}
