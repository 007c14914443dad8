use crate::app::query::{TabParam, use_tab_param};
use crate::app::state::ToastKind;
use crate::app::tabs::ReportsTab;
use crate::components::avatar::Avatar;
use crate::components::progress::ProgressBar;
use crate::components::status_badge::StatusBadge;
use crate::components::tab_strip::{TabStrip, TabStripItem};
use citizen_core::{
    CommunityReport, Report, StatusFilter, TIMELINE_STEPS, filter_reports, status_counts,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MyReportsPageProps {
    pub reports: Vec<Report>,
    pub community: Vec<CommunityReport>,
    pub on_like: Callback<u32>,
    pub on_comment: Callback<(u32, String)>,
    pub on_toast: Callback<(String, ToastKind)>,
}

fn tab_items() -> Vec<TabStripItem> {
    ReportsTab::ALL
        .iter()
        .map(|tab| TabStripItem {
            id: AttrValue::from(tab.as_str()),
            label: AttrValue::from(tab.label()),
        })
        .collect()
}

fn render_timeline(report: &Report) -> Html {
    html! {
        <div class="flex items-center justify-between mt-3 text-xs">
            { for TIMELINE_STEPS.iter().map(|step| {
                let reached = report.milestone_reached(*step);
                let dot = if reached { "bg-primary" } else { "bg-base-300" };
                let text = if reached { "text-primary" } else { "opacity-50" };
                html! {
                    <span class={classes!("flex", "items-center", "gap-1", text)}>
                        <span class={classes!("w-2", "h-2", "rounded-full", dot)}></span>
                        { step.label }
                    </span>
                }
            })}
        </div>
    }
}

#[function_component(MyReportsPage)]
pub fn my_reports_page(props: &MyReportsPageProps) -> Html {
    let (tab, set_tab) = use_tab_param::<ReportsTab>();
    let filter = use_state(StatusFilter::default);
    let selected = use_state(|| None::<Report>);
    let comment_input = use_state(String::new);

    let counts = status_counts(&props.reports);
    let filtered = filter_reports(&props.reports, *filter);

    let on_tab_select = {
        let set_tab = set_tab.clone();
        Callback::from(move |id: AttrValue| {
            if let Some(next) = ReportsTab::parse(&id) {
                set_tab.emit(next);
            }
        })
    };

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(StatusFilter::from_id(&select.value()));
        })
    };

    let close_detail = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let on_share = {
        let on_toast = props.on_toast.clone();
        Callback::from(move |_| {
            on_toast.emit((String::from("Share link copied!"), ToastKind::Info));
        })
    };

    let my_reports_pane = html! {
        <div class="card bg-base-200 border border-base-300">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">{ "Your Reports" }</h2>
                    <select
                        class="select select-bordered select-sm"
                        onchange={on_filter}
                        data-testid="status-filter"
                    >
                        <option value="all" selected={*filter == StatusFilter::All}>{ "All Reports" }</option>
                        { for citizen_core::ReportStatus::ALL.into_iter().map(|status| html! {
                            <option
                                value={status.id()}
                                selected={*filter == StatusFilter::Only(status)}
                            >
                                { status.label() }
                            </option>
                        })}
                    </select>
                </div>
                <div class="space-y-4" data-testid="my-reports-list">
                    { for filtered.iter().map(|report| {
                        let open_detail = {
                            let selected = selected.clone();
                            let report = report.clone();
                            Callback::from(move |_| selected.set(Some(report.clone())))
                        };
                        html! {
                            <div
                                key={report.id}
                                class="border border-base-300 rounded-lg p-4 cursor-pointer hover:shadow-md"
                                onclick={open_detail}
                            >
                                <div class="flex items-start justify-between mb-3">
                                    <div>
                                        <h3 class="font-medium text-lg">{ report.title.clone() }</h3>
                                        <p class="text-sm opacity-60">
                                            { format!("{} · {} · {} photos", report.location, report.date, report.photos) }
                                        </p>
                                    </div>
                                    <StatusBadge status={report.status} />
                                </div>
                                <div class="flex justify-between text-sm mb-1">
                                    <span class="opacity-60">{ "Progress" }</span>
                                    <span class="font-medium">{ format!("{}%", report.progress) }</span>
                                </div>
                                <ProgressBar value={report.progress} />
                                { render_timeline(report) }
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    };

    let community_pane = html! {
        <div class="card bg-base-200 border border-base-300">
            <div class="card-body space-y-6" data-testid="community-list">
                <h2 class="card-title">{ "Community Reports" }</h2>
                { for props.community.iter().map(|entry| {
                    let like = {
                        let on_like = props.on_like.clone();
                        let id = entry.report.id;
                        Callback::from(move |_| on_like.emit(id))
                    };
                    let send_comment = {
                        let on_comment = props.on_comment.clone();
                        let comment_input = comment_input.clone();
                        let id = entry.report.id;
                        Callback::from(move |_| {
                            if !comment_input.trim().is_empty() {
                                on_comment.emit((id, (*comment_input).clone()));
                                comment_input.set(String::new());
                            }
                        })
                    };
                    let on_comment_change = {
                        let comment_input = comment_input.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            comment_input.set(input.value());
                        })
                    };
                    let like_class = if entry.liked {
                        classes!("btn", "btn-sm", "btn-error")
                    } else {
                        classes!("btn", "btn-sm", "btn-ghost")
                    };
                    html! {
                        <div key={entry.report.id} class="border border-base-300 rounded-lg p-4 space-y-3">
                            <div class="flex items-start gap-3">
                                <Avatar name={entry.author.clone()} class={classes!("w-10", "h-10")} />
                                <div class="flex-1">
                                    <div class="flex items-center gap-2 mb-1">
                                        <h4 class="font-medium text-sm">{ entry.author.clone() }</h4>
                                        <StatusBadge status={entry.report.status} />
                                    </div>
                                    <h3 class="font-medium text-lg">{ entry.report.title.clone() }</h3>
                                    <p class="text-sm opacity-70">{ entry.report.description.clone() }</p>
                                    <p class="text-sm opacity-50">
                                        { format!("{} · {}", entry.report.location, entry.report.date) }
                                    </p>
                                </div>
                            </div>
                            <div class="flex items-center gap-3 pt-2 border-t border-base-300">
                                <button
                                    class={like_class}
                                    data-testid={format!("like-{}", entry.report.id)}
                                    onclick={like}
                                >
                                    { format!("❤ {}", entry.likes) }
                                </button>
                                <span class="text-sm opacity-60">
                                    { format!("💬 {}", entry.comment_count()) }
                                </span>
                                <button class="btn btn-sm btn-ghost" onclick={on_share.clone()}>
                                    { "Share" }
                                </button>
                            </div>
                            { if entry.comments.is_empty() {
                                Html::default()
                            } else {
                                html! {
                                    <div class="bg-base-300/50 rounded-lg p-3 space-y-2">
                                        { for entry.comments.iter().take(2).map(|comment| html! {
                                            <div key={comment.id} class="flex items-start gap-2">
                                                <Avatar name={comment.author.clone()} class={classes!("w-6", "h-6", "text-xs")} />
                                                <div>
                                                    <p class="text-sm">
                                                        <span class="font-medium">{ comment.author.clone() }</span>
                                                        {" "}
                                                        <span class="opacity-50 text-xs">{ comment.time.clone() }</span>
                                                    </p>
                                                    <p class="text-sm opacity-80">{ comment.text.clone() }</p>
                                                </div>
                                            </div>
                                        })}
                                    </div>
                                }
                            }}
                            <div class="flex gap-2">
                                <input
                                    class="input input-bordered input-sm flex-1"
                                    placeholder="Add a comment..."
                                    value={(*comment_input).clone()}
                                    onchange={on_comment_change}
                                    data-testid={format!("comment-input-{}", entry.report.id)}
                                />
                                <button
                                    class="btn btn-sm btn-primary"
                                    data-testid={format!("comment-send-{}", entry.report.id)}
                                    onclick={send_comment}
                                >
                                    { "Send" }
                                </button>
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    };

    html! {
        <div class="space-y-6" data-testid="my-reports-page">
            <div class="hero-banner rounded-2xl p-6 bg-secondary text-secondary-content">
                <h1 class="text-3xl font-bold mb-2">{ "Reports & Community" }</h1>
                <p class="opacity-80">{ "Track your reports and engage with community issues." }</p>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-center">
                <div class="card bg-base-200 p-4">
                    <p class="text-2xl font-bold text-primary">{ counts.total }</p>
                    <p class="text-sm opacity-60">{ "Total Reports" }</p>
                </div>
                <div class="card bg-base-200 p-4">
                    <p class="text-2xl font-bold text-success">{ counts.resolved }</p>
                    <p class="text-sm opacity-60">{ "Resolved" }</p>
                </div>
                <div class="card bg-base-200 p-4">
                    <p class="text-2xl font-bold text-warning">{ counts.in_progress }</p>
                    <p class="text-sm opacity-60">{ "In Progress" }</p>
                </div>
                <div class="card bg-base-200 p-4">
                    <p class="text-2xl font-bold opacity-70">{ counts.pending }</p>
                    <p class="text-sm opacity-60">{ "Pending" }</p>
                </div>
            </div>

            <TabStrip tabs={tab_items()} active={AttrValue::from(tab.as_str())} on_select={on_tab_select} />

            { match *tab {
                ReportsTab::MyReports => my_reports_pane,
                ReportsTab::PublicReports => community_pane,
            }}

            { if let Some(report) = (*selected).clone() {
                html! {
                    <div class="fixed right-4 top-20 w-80 z-50 card bg-base-100 shadow-xl" data-testid="report-detail">
                        <div class="card-body space-y-3">
                            <div class="flex items-center justify-between">
                                <h2 class="card-title">{ "Report Details" }</h2>
                                <button class="btn btn-ghost btn-sm" aria-label="Close" onclick={close_detail}>{"✕"}</button>
                            </div>
                            <h3 class="font-medium">{ report.title.clone() }</h3>
                            <p class="text-sm opacity-70">{ report.description.clone() }</p>
                            <p class="text-sm"><span class="font-medium">{ "Location: " }</span>{ report.location.clone() }</p>
                            <p class="text-sm"><span class="font-medium">{ "Submitted: " }</span>{ report.date.to_string() }</p>
                            <p class="text-sm"><span class="font-medium">{ "Resolution: " }</span>{ report.resolution_note.clone() }</p>
                            { if report.status == citizen_core::ReportStatus::Resolved {
                                html! {
                                    <div class="p-3 rounded bg-success/10 text-sm">
                                        { "🎉 Issue resolved! Thank you for helping improve your community. You earned 50 points!" }
                                    </div>
                                }
                            } else {
                                Html::default()
                            }}
                        </div>
                    </div>
                }
            } else {
                Html::default()
            }}
        </div>
    }
}
