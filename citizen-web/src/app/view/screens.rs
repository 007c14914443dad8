use crate::app::page::Page;
use crate::app::state::AppState;
use crate::app::view::AppHandlers;
use crate::pages::dashboard::DashboardPage;
use crate::pages::feedback::FeedbackPage;
use crate::pages::leaderboard::LeaderboardPage;
use crate::pages::my_reports::MyReportsPage;
use crate::pages::report_issue::ReportIssuePage;
use crate::pages::rewards::RewardsPage;
use crate::pages::sos::SosPage;
use yew::prelude::*;

/// Dispatch on the current page. Each arm remounts its page component on
/// entry, which is what re-triggers the mount-time tab read.
pub fn render_current_page(state: &AppState, handlers: &AppHandlers) -> Html {
    if !state.data_ready() {
        return html! {
            <div class="boot-screen flex flex-col items-center gap-4 p-12" data-testid="boot-screen">
                <span class="loading loading-spinner loading-lg"></span>
                <progress class="progress w-56" value={state.preload_progress.to_string()} max="100" />
            </div>
        };
    }

    let data = &*state.data;
    match *state.page {
        Page::Dashboard => html! {
            <DashboardPage
                dashboard={data.dashboard.clone()}
                recent={data.recent_reports().to_vec()}
                profile={(*state.profile).clone()}
            />
        },
        Page::ReportIssue => html! {
            <ReportIssuePage
                on_toast={handlers.toast.clone()}
                on_navigate={handlers.navigate.clone()}
            />
        },
        Page::MyReports => html! {
            <MyReportsPage
                reports={data.reports.clone()}
                community={(*state.community).clone()}
                on_like={handlers.toggle_like.clone()}
                on_comment={handlers.add_comment.clone()}
                on_toast={handlers.toast.clone()}
            />
        },
        Page::Leaderboard => html! {
            <LeaderboardPage
                leaderboard={data.leaderboard.clone()}
                achievements={data.achievements.clone()}
            />
        },
        Page::Rewards => html! {
            <RewardsPage
                rewards={data.rewards.clone()}
                events={data.events.clone()}
                points={state.profile.points}
                on_toast={handlers.toast.clone()}
            />
        },
        Page::Sos => html! {
            <SosPage on_toast={handlers.toast.clone()} />
        },
        Page::Feedback => html! {
            <FeedbackPage
                issues={data.resolved_issues.clone()}
                on_toast={handlers.toast.clone()}
            />
        },
    }
}
