use crate::app::page::Page;
use crate::app::state::ToastKind;
use crate::app::tasks::{
    LOCATION_DELAY_MS, SUBMIT_DELAY_MS, simulated_submission, spawn_after, use_task_scope,
};
use citizen_core::{IssueCategory, ReportDraft};
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

const FETCHED_LOCATION: &str = "Khandari, Agra, Uttar Pradesh 282002";

#[derive(Properties, Clone, PartialEq)]
pub struct ReportIssuePageProps {
    pub on_toast: Callback<(String, ToastKind)>,
    pub on_navigate: Callback<Page>,
}

#[function_component(ReportIssuePage)]
pub fn report_issue_page(props: &ReportIssuePageProps) -> Html {
    let draft = use_state(ReportDraft::default);
    let submitting = use_state(|| false);
    let fetching_location = use_state(|| false);
    let scope = use_task_scope();

    let select_category = {
        let draft = draft.clone();
        Callback::from(move |category: IssueCategory| {
            let mut next = (*draft).clone();
            next.category = Some(category);
            draft.set(next);
        })
    };

    let on_custom_category = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.custom_category = input.value();
            draft.set(next);
        })
    };

    let on_location = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.location = input.value();
            draft.set(next);
        })
    };

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.description = input.value();
            draft.set(next);
        })
    };

    let fetch_location = {
        let draft = draft.clone();
        let fetching = fetching_location.clone();
        let on_toast = props.on_toast.clone();
        let scope = scope.clone();
        Callback::from(move |_| {
            fetching.set(true);
            let draft = draft.clone();
            let fetching = fetching.clone();
            let on_toast = on_toast.clone();
            spawn_after(&scope, LOCATION_DELAY_MS, move || {
                let mut next = (*draft).clone();
                next.location = FETCHED_LOCATION.to_string();
                draft.set(next);
                fetching.set(false);
                on_toast.emit((String::from("Location fetched successfully!"), ToastKind::Success));
            });
        })
    };

    let on_photos = {
        let draft = draft.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(files) = input.files() else {
                return;
            };
            let mut next = (*draft).clone();
            let mut added = 0;
            for index in 0..files.length() {
                if let Some(file) = files.get(index) {
                    next.photos.push(file.name());
                    added += 1;
                }
            }
            if added > 0 {
                draft.set(next);
                on_toast.emit((
                    format!("{added} image(s) uploaded successfully!"),
                    ToastKind::Success,
                ));
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let on_toast = props.on_toast.clone();
        let scope = scope.clone();
        Callback::from(move |_| {
            match (*draft).validate() {
                // Form state is preserved on validation failure.
                Err(err) => on_toast.emit((err.to_string(), ToastKind::Error)),
                Ok(submission) => {
                    submitting.set(true);
                    let draft = draft.clone();
                    let submitting = submitting.clone();
                    let on_toast = on_toast.clone();
                    spawn_after(&scope, SUBMIT_DELAY_MS, move || {
                        submitting.set(false);
                        match simulated_submission() {
                            Ok(()) => {
                                on_toast.emit((
                                    format!(
                                        "Issue reported successfully: {} 🎉",
                                        submission.category_label
                                    ),
                                    ToastKind::Success,
                                ));
                                draft.set(ReportDraft::default());
                            }
                            // Retryable: the draft is kept so nothing has
                            // to be re-entered.
                            Err(err) => on_toast.emit((err.to_string(), ToastKind::Error)),
                        }
                    });
                }
            }
        })
    };

    let go_to_sos = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Sos))
    };

    html! {
        <div class="max-w-4xl mx-auto space-y-6" data-testid="report-issue-page">
            <div class="hero-banner rounded-2xl p-6 bg-success text-success-content">
                <h1 class="text-3xl font-bold mb-2">{ "Report New Issue" }</h1>
                <p class="opacity-80">{ "Help improve your community by reporting issues you encounter." }</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 space-y-6">
                    <div class="card bg-base-200 border border-base-300">
                        <div class="card-body">
                            <h2 class="card-title">{ "Select Issue Category" }</h2>
                            <div class="grid grid-cols-2 md:grid-cols-3 gap-3">
                                { for IssueCategory::ALL.into_iter().map(|category| {
                                    let selected = draft.category == Some(category);
                                    let on_click = {
                                        let select = select_category.clone();
                                        Callback::from(move |_| select.emit(category))
                                    };
                                    let mut class = classes!("btn", "h-auto", "py-4", "flex-col", "gap-2");
                                    if selected {
                                        class.push("btn-primary");
                                    } else {
                                        class.push("btn-outline");
                                    }
                                    html! {
                                        <button
                                            class={class}
                                            data-testid={format!("category-{}", category.id())}
                                            aria-pressed={selected.to_string()}
                                            onclick={on_click}
                                        >
                                            <span class="text-2xl" aria-hidden="true">{ category.glyph() }</span>
                                            <span class="text-sm font-medium">{ category.label() }</span>
                                        </button>
                                    }
                                })}
                            </div>
                            { if draft.category == Some(IssueCategory::Other) {
                                html! {
                                    <div class="mt-2">
                                        <input
                                            class="input input-bordered w-full"
                                            placeholder="Please specify the issue category..."
                                            value={draft.custom_category.clone()}
                                            onchange={on_custom_category.clone()}
                                            data-testid="custom-category"
                                        />
                                        <p class="text-sm opacity-60 mt-1">
                                            { "Example: Noise pollution, Construction debris, Stray animals, etc." }
                                        </p>
                                    </div>
                                }
                            } else {
                                Html::default()
                            }}
                        </div>
                    </div>

                    <div class="card bg-base-200 border border-base-300">
                        <div class="card-body space-y-3">
                            <h2 class="card-title">{ "Location" }</h2>
                            <div class="flex gap-2">
                                <input
                                    class="input input-bordered flex-1"
                                    placeholder="Enter location or use GPS"
                                    value={draft.location.clone()}
                                    onchange={on_location}
                                    data-testid="location-input"
                                />
                                <button
                                    class="btn btn-outline"
                                    onclick={fetch_location}
                                    disabled={*fetching_location}
                                    data-testid="fetch-location"
                                >
                                    { if *fetching_location { "Locating…" } else { "📍 Use GPS" } }
                                </button>
                            </div>
                            { if draft.location.is_empty() {
                                Html::default()
                            } else {
                                html! {
                                    <p class="text-sm text-success" data-testid="location-confirmed">
                                        { format!("Location confirmed: {}", draft.location) }
                                    </p>
                                }
                            }}
                        </div>
                    </div>

                    <div class="card bg-base-200 border border-base-300">
                        <div class="card-body">
                            <h2 class="card-title">{ "Upload Photos" }</h2>
                            <label class="border-2 border-dashed border-base-300 rounded-lg p-6 text-center block cursor-pointer">
                                <input
                                    type="file"
                                    multiple=true
                                    accept="image/*"
                                    class="hidden"
                                    onchange={on_photos}
                                    data-testid="photo-input"
                                />
                                <p class="font-medium">{ "Drop images here or click to upload" }</p>
                                <p class="text-sm opacity-60">{ "Support: JPG, PNG, GIF (Max 5MB each)" }</p>
                            </label>
                            { if draft.photos.is_empty() {
                                Html::default()
                            } else {
                                html! {
                                    <ul class="mt-3 space-y-1 text-sm" data-testid="photo-list">
                                        { for draft.photos.iter().map(|name| html! {
                                            <li key={name.clone()}>{ format!("📷 {name}") }</li>
                                        })}
                                    </ul>
                                }
                            }}
                        </div>
                    </div>

                    <div class="card bg-base-200 border border-base-300">
                        <div class="card-body space-y-3">
                            <h2 class="card-title">{ "Description" }</h2>
                            <textarea
                                class="textarea textarea-bordered w-full"
                                rows="4"
                                placeholder="Describe the issue in detail..."
                                value={draft.description.clone()}
                                onchange={on_description}
                                data-testid="description-input"
                            />
                        </div>
                    </div>
                </div>

                <div class="space-y-6">
                    <div class="card bg-base-200 border border-base-300">
                        <div class="card-body">
                            <button
                                class="btn btn-success w-full"
                                onclick={on_submit}
                                disabled={*submitting}
                                data-testid="submit-report"
                            >
                                { if *submitting { "Submitting…" } else { "Submit Report" } }
                            </button>
                            <p class="text-sm mt-3 p-3 rounded bg-base-300">
                                { "You'll earn 50 points for submitting this report!" }
                            </p>
                        </div>
                    </div>

                    <div class="card bg-base-200 border border-base-300">
                        <div class="card-body space-y-2">
                            <h2 class="card-title text-lg">{ "Reporting Tips" }</h2>
                            <p class="text-sm opacity-70">{ "Take clear photos from multiple angles" }</p>
                            <p class="text-sm opacity-70">{ "Provide accurate location details" }</p>
                            <p class="text-sm opacity-70">{ "Describe the severity and impact" }</p>
                            <p class="text-sm opacity-70">{ "Avoid duplicate reports" }</p>
                        </div>
                    </div>

                    <div class="card bg-error/10 border border-error">
                        <div class="card-body">
                            <p class="font-medium text-error">{ "Emergency?" }</p>
                            <p class="text-sm opacity-70">
                                { "For urgent issues requiring immediate attention, use the SOS feature instead." }
                            </p>
                            <button class="btn btn-outline btn-error btn-sm" onclick={go_to_sos} data-testid="go-to-sos">
                                { "Go to SOS" }
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
