use crate::components::progress::ProgressBar;
use crate::components::stat_card::StatCard;
use crate::components::status_badge::StatusBadge;
use citizen_core::{DashboardStats, Report, UserProfile, trend_bar_pct};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DashboardPageProps {
    pub dashboard: DashboardStats,
    pub recent: Vec<Report>,
    pub profile: UserProfile,
}

fn first_name(full: &str) -> &str {
    full.split_whitespace().next().unwrap_or(full)
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let stats = props.dashboard.stats;
    let trend_max = props.dashboard.trend_max();
    let share_max = props
        .dashboard
        .category_shares
        .iter()
        .map(|share| share.count)
        .max()
        .unwrap_or(0);
    let rate = stats.resolution_rate();

    html! {
        <div class="space-y-6" data-testid="dashboard-page">
            <div class="hero-banner rounded-2xl p-6 bg-primary text-primary-content">
                <h1 class="text-3xl font-bold mb-2">
                    { format!("Welcome back, {}! 👋", first_name(&props.profile.name)) }
                </h1>
                <p class="opacity-80">
                    { format!(
                        "Let's make our city better together. You've reported {} issues this month!",
                        props.profile.reports_this_month
                    )}
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                <StatCard label="Total Reports" value={stats.total_reports.to_string()} glyph="📈" accent="text-primary" />
                <StatCard label="Resolved Issues" value={stats.resolved.to_string()} glyph="✅" accent="text-success" />
                <StatCard label="In Progress" value={stats.in_progress.to_string()} glyph="⏳" accent="text-warning" />
                <StatCard label="Your Points" value={props.profile.points.to_string()} glyph="🏅" accent="text-secondary" />
            </div>

            <div class="card bg-base-200 border border-base-300">
                <div class="card-body">
                    <h2 class="card-title">{ "Recent Community Reports" }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        { for props.recent.iter().map(|report| html! {
                            <div key={report.id} class="p-4 rounded-lg border border-base-300 space-y-2">
                                <div class="flex items-start gap-2">
                                    <span aria-hidden="true">{ report.category.glyph() }</span>
                                    <div>
                                        <h3 class="font-medium text-sm">{ report.title.clone() }</h3>
                                        <p class="text-xs opacity-60">{ report.location.clone() }</p>
                                    </div>
                                </div>
                                <div class="flex items-center justify-between">
                                    <StatusBadge status={report.status} />
                                    <span class="text-xs opacity-60">{ report.date.to_string() }</span>
                                </div>
                            </div>
                        })}
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-200 border border-base-300">
                    <div class="card-body">
                        <h2 class="card-title">{ "Issue Categories" }</h2>
                        <div class="space-y-2">
                            { for props.dashboard.category_shares.iter().map(|share| html! {
                                <div key={share.category.id()} class="flex items-center gap-2">
                                    <span class="w-28 text-sm">{ share.category.label() }</span>
                                    <ProgressBar value={trend_bar_pct(share.count, share_max)} class={classes!("flex-1")} />
                                    <span class="text-sm opacity-70 w-10 text-right">{ share.count }</span>
                                </div>
                            })}
                        </div>
                    </div>
                </div>

                <div class="card bg-base-200 border border-base-300">
                    <div class="card-body">
                        <h2 class="card-title">{ "Monthly Report Trends" }</h2>
                        <div class="flex items-end gap-3 h-40" data-testid="trend-chart">
                            { for props.dashboard.monthly_trends.iter().map(|trend| html! {
                                <div key={trend.month.clone()} class="flex flex-col items-center flex-1 gap-1">
                                    <div
                                        class="w-6 rounded-t bg-primary trend-bar"
                                        style={format!("height: {}%", trend_bar_pct(trend.reports, trend_max))}
                                    ></div>
                                    <span class="text-xs opacity-60">{ trend.month.clone() }</span>
                                </div>
                            })}
                        </div>
                    </div>
                </div>
            </div>

            <div class="card bg-base-200 border border-base-300">
                <div class="card-body space-y-4">
                    <h2 class="card-title">{ "Resolution Rate" }</h2>
                    <div class="flex justify-between items-center">
                        <span class="text-sm font-medium">{ "Overall Resolution Rate" }</span>
                        <span class="text-sm opacity-70">{ format!("{rate:.1}%") }</span>
                    </div>
                    <ProgressBar value={rate_pct(rate)} />
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4 text-center">
                        <div>
                            <p class="text-2xl font-bold text-success">{ stats.resolved }</p>
                            <p class="text-sm opacity-60">{ "Resolved" }</p>
                        </div>
                        <div>
                            <p class="text-2xl font-bold text-warning">{ stats.in_progress }</p>
                            <p class="text-sm opacity-60">{ "In Progress" }</p>
                        </div>
                        <div>
                            <p class="text-2xl font-bold text-error">{ stats.pending }</p>
                            <p class="text-sm opacity-60">{ "Pending" }</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rate_pct(rate: f64) -> u8 {
    rate.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::{first_name, rate_pct};

    #[test]
    fn greeting_uses_the_first_name() {
        assert_eq!(first_name("Priya Sharma"), "Priya");
        assert_eq!(first_name("Priya"), "Priya");
    }

    #[test]
    fn rate_rounds_and_clamps() {
        assert_eq!(rate_pct(76.66), 77);
        assert_eq!(rate_pct(-3.0), 0);
        assert_eq!(rate_pct(140.0), 100);
    }
}
