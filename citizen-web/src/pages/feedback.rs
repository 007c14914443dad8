use crate::app::state::ToastKind;
use crate::app::tasks::{SUBMIT_DELAY_MS, spawn_after, use_task_scope};
use crate::components::modal::Modal;
use citizen_core::{
    IssueFeedback, ResolvedIssue, feedback_counts, issues_awaiting, issues_rated, quick_feedback,
    validate_feedback,
};
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FeedbackPageProps {
    pub issues: Vec<ResolvedIssue>,
    pub on_toast: Callback<(String, ToastKind)>,
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    let mut out = "★".repeat(filled);
    out.push_str(&"☆".repeat(5 - filled));
    out
}

fn apply_feedback(issues: &mut [ResolvedIssue], id: u32, entry: IssueFeedback) -> bool {
    issues
        .iter_mut()
        .find(|issue| issue.id == id)
        .map(|issue| issue.feedback = Some(entry))
        .is_some()
}

#[function_component(FeedbackPage)]
pub fn feedback_page(props: &FeedbackPageProps) -> Html {
    // Feedback is local-only: the mutation lives and dies with the page.
    let issues = use_state(|| props.issues.clone());
    let selected = use_state(|| None::<ResolvedIssue>);
    let rating = use_state(|| 5_u8);
    let comment = use_state(String::new);
    let submitting = use_state(|| false);
    let scope = use_task_scope();

    let (given, pending) = feedback_counts(&issues);
    let awaiting = issues_awaiting(&issues);
    let rated = issues_rated(&issues);

    let close_modal = {
        let selected = selected.clone();
        let comment = comment.clone();
        let rating = rating.clone();
        Callback::from(move |()| {
            selected.set(None);
            comment.set(String::new());
            rating.set(5);
        })
    };

    let on_rating = {
        let rating = rating.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            rating.set(input.value().parse().unwrap_or(5));
        })
    };

    let on_comment = {
        let comment = comment.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            comment.set(input.value());
        })
    };

    let submit_detailed = {
        let issues = issues.clone();
        let selected = selected.clone();
        let rating = rating.clone();
        let comment = comment.clone();
        let submitting = submitting.clone();
        let on_toast = props.on_toast.clone();
        let scope = scope.clone();
        Callback::from(move |_| {
            let Some(issue) = (*selected).clone() else {
                return;
            };
            match validate_feedback(*rating, &comment) {
                Err(err) => on_toast.emit((err.to_string(), ToastKind::Error)),
                Ok(entry) => {
                    submitting.set(true);
                    let issues = issues.clone();
                    let selected = selected.clone();
                    let comment = comment.clone();
                    let rating = rating.clone();
                    let submitting = submitting.clone();
                    let on_toast = on_toast.clone();
                    spawn_after(&scope, SUBMIT_DELAY_MS, move || {
                        let mut next = (*issues).clone();
                        apply_feedback(&mut next, issue.id, entry);
                        issues.set(next);
                        submitting.set(false);
                        selected.set(None);
                        comment.set(String::new());
                        rating.set(5);
                        on_toast.emit((
                            String::from("Thank you for your feedback! 🎉"),
                            ToastKind::Success,
                        ));
                    });
                }
            }
        })
    };

    html! {
        <div class="space-y-6" data-testid="feedback-page">
            <div class="hero-banner rounded-2xl p-6 bg-accent text-accent-content">
                <h1 class="text-3xl font-bold mb-2">{ "💬 Feedback Center" }</h1>
                <p class="opacity-80">{ "Help us improve by sharing your experience with resolved issues." }</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 text-center">
                <div class="card bg-base-200 p-4">
                    <p class="text-2xl font-bold text-success">{ issues.len() }</p>
                    <p class="text-sm opacity-60">{ "Issues Resolved" }</p>
                </div>
                <div class="card bg-base-200 p-4">
                    <p class="text-2xl font-bold text-primary">{ given }</p>
                    <p class="text-sm opacity-60">{ "Feedback Given" }</p>
                </div>
                <div class="card bg-base-200 p-4">
                    <p class="text-2xl font-bold text-warning">{ pending }</p>
                    <p class="text-sm opacity-60">{ "Pending Feedback" }</p>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-200 border border-base-300">
                    <div class="card-body space-y-4">
                        <h2 class="card-title">{ "Resolved Issues Awaiting Feedback" }</h2>
                        { for awaiting.iter().map(|issue| {
                            let thumbs = |satisfied: bool| {
                                let issues = issues.clone();
                                let on_toast = props.on_toast.clone();
                                let id = issue.id;
                                Callback::from(move |_| {
                                    let mut next = (*issues).clone();
                                    apply_feedback(&mut next, id, quick_feedback(satisfied));
                                    issues.set(next);
                                    let text = if satisfied {
                                        "Thanks for the positive feedback!"
                                    } else {
                                        "Thanks for your feedback. We'll improve next time."
                                    };
                                    on_toast.emit((String::from(text), ToastKind::Success));
                                })
                            };
                            let open_detail = {
                                let selected = selected.clone();
                                let issue = issue.clone();
                                Callback::from(move |_| selected.set(Some(issue.clone())))
                            };
                            html! {
                                <div key={issue.id} class="border border-base-300 rounded-lg p-4 space-y-3">
                                    <div>
                                        <h3 class="font-medium">{ issue.title.clone() }</h3>
                                        <p class="text-sm opacity-70">{ issue.description.clone() }</p>
                                        <p class="text-xs opacity-50 mt-1">
                                            { format!("Resolved {}", issue.resolved_date) }
                                        </p>
                                    </div>
                                    <div class="flex flex-wrap gap-2">
                                        <button
                                            class="btn btn-success btn-sm"
                                            data-testid={format!("satisfied-{}", issue.id)}
                                            onclick={thumbs(true)}
                                        >
                                            { "👍 Satisfied" }
                                        </button>
                                        <button
                                            class="btn btn-outline btn-warning btn-sm"
                                            data-testid={format!("unsatisfied-{}", issue.id)}
                                            onclick={thumbs(false)}
                                        >
                                            { "👎 Not Satisfied" }
                                        </button>
                                        <button
                                            class="btn btn-ghost btn-sm"
                                            data-testid={format!("detailed-{}", issue.id)}
                                            onclick={open_detail}
                                        >
                                            { "Detailed Feedback" }
                                        </button>
                                    </div>
                                </div>
                            }
                        })}
                        { if awaiting.is_empty() {
                            html! { <p class="text-sm opacity-60">{ "All caught up - nothing awaiting feedback." }</p> }
                        } else {
                            Html::default()
                        }}
                    </div>
                </div>

                <div class="card bg-base-200 border border-base-300">
                    <div class="card-body space-y-4">
                        <h2 class="card-title">{ "Previous Feedback" }</h2>
                        { for rated.iter().map(|issue| {
                            let feedback = issue.feedback.clone().unwrap_or_else(|| quick_feedback(true));
                            let badge = if feedback.satisfied {
                                html! { <span class="badge badge-success badge-sm">{ "Satisfied" }</span> }
                            } else {
                                html! { <span class="badge badge-warning badge-sm">{ "Needs Improvement" }</span> }
                            };
                            html! {
                                <div key={issue.id} class="border border-base-300 rounded-lg p-4 bg-base-300/30">
                                    <div class="flex items-start justify-between mb-1">
                                        <h3 class="font-medium text-sm">{ issue.title.clone() }</h3>
                                        <span class="text-xs opacity-50">{ issue.resolved_date.to_string() }</span>
                                    </div>
                                    <div class="flex items-center gap-2 mb-2">
                                        <span class="text-warning" aria-label={format!("{} out of 5 stars", feedback.rating)}>
                                            { stars(feedback.rating) }
                                        </span>
                                        { badge }
                                    </div>
                                    <p class="text-sm opacity-70 italic">{ format!("\"{}\"", feedback.comment) }</p>
                                </div>
                            }
                        })}
                    </div>
                </div>
            </div>

            <Modal
                open={selected.is_some()}
                title="Provide Detailed Feedback"
                on_close={close_modal.clone()}
            >
                { if let Some(issue) = selected.as_ref() {
                    html! {
                        <div class="space-y-4">
                            <div>
                                <h3 class="font-medium mb-1">{ issue.title.clone() }</h3>
                                <p class="text-sm opacity-70">{ issue.description.clone() }</p>
                            </div>
                            <div>
                                <label class="block text-sm font-medium mb-2" for="feedback-rating">
                                    { format!("Overall Satisfaction ({}/5)", *rating) }
                                </label>
                                <input
                                    id="feedback-rating"
                                    type="range"
                                    min="1"
                                    max="5"
                                    step="1"
                                    class="range w-full"
                                    value={rating.to_string()}
                                    onchange={on_rating}
                                    data-testid="rating-slider"
                                />
                                <p class="text-center text-warning mt-1">{ stars(*rating) }</p>
                            </div>
                            <div>
                                <label class="block text-sm font-medium mb-2" for="feedback-comment">{ "Comments" }</label>
                                <textarea
                                    id="feedback-comment"
                                    class="textarea textarea-bordered w-full"
                                    rows="4"
                                    placeholder="Share your experience with the resolution quality, timeline, communication, etc."
                                    value={(*comment).clone()}
                                    onchange={on_comment}
                                    data-testid="feedback-comment"
                                />
                            </div>
                            <div class="flex items-center gap-2 pt-2">
                                <button
                                    class="btn btn-primary flex-1"
                                    disabled={*submitting}
                                    data-testid="submit-feedback"
                                    onclick={submit_detailed}
                                >
                                    { if *submitting { "Submitting…" } else { "Submit Feedback" } }
                                </button>
                                <button
                                    class="btn btn-outline"
                                    disabled={*submitting}
                                    onclick={Callback::from(move |_| close_modal.emit(()))}
                                >
                                    { "Cancel" }
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    Html::default()
                }}
            </Modal>
        </div>
    }
}
