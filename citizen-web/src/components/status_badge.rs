use citizen_core::ReportStatus;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct StatusBadgeProps {
    pub status: ReportStatus,
}

#[must_use]
pub const fn status_class(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Pending => "badge-warning",
        ReportStatus::InProgress => "badge-info",
        ReportStatus::Resolved => "badge-success",
        ReportStatus::Rejected => "badge-error",
    }
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span
            class={classes!("badge", status_class(props.status))}
            data-status={props.status.id()}
        >
            { props.status.label() }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_gets_a_distinct_badge_class() {
        let classes: Vec<&str> = ReportStatus::ALL.into_iter().map(status_class).collect();
        let mut deduped = classes.clone();
        deduped.dedup();
        assert_eq!(classes.len(), deduped.len());
    }
}
