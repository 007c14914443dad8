use crate::app::query::{TabParam, use_tab_param};
use crate::app::state::ToastKind;
use crate::app::tabs::SosMode;
use crate::app::tasks::{
    LOCATION_DELAY_MS, SOS_ACTIVE_MS, SUBMIT_DELAY_MS, simulated_submission, spawn_after,
    use_task_scope,
};
use crate::components::tab_strip::{TabStrip, TabStripItem};
use citizen_core::{AlertDraft, EmergencyCategory, QUICK_CONTACTS, instant_alert_ready};
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

const FETCHED_LOCATION: &str = "MG Road, Bangalore, Karnataka 560001";

#[derive(Properties, Clone, PartialEq)]
pub struct SosPageProps {
    pub on_toast: Callback<(String, ToastKind)>,
}

fn tab_items() -> Vec<TabStripItem> {
    SosMode::ALL
        .iter()
        .map(|mode| TabStripItem {
            id: AttrValue::from(mode.as_str()),
            label: AttrValue::from(mode.label()),
        })
        .collect()
}

#[function_component(SosPage)]
pub fn sos_page(props: &SosPageProps) -> Html {
    let (mode, set_mode) = use_tab_param::<SosMode>();
    let category = use_state(|| None::<EmergencyCategory>);
    let alert_active = use_state(|| false);
    let location = use_state(|| None::<String>);
    let draft = use_state(AlertDraft::default);
    let submitting = use_state(|| false);
    let scope = use_task_scope();

    // Simulated geolocation kicks off on mount; the guard drops the
    // completion if the user has already left the page.
    {
        let location = location.clone();
        let scope = scope.clone();
        use_effect_with((), move |()| {
            spawn_after(&scope, LOCATION_DELAY_MS, move || {
                location.set(Some(FETCHED_LOCATION.to_string()));
            });
        });
    }

    let on_tab_select = {
        let set_mode = set_mode.clone();
        Callback::from(move |id: AttrValue| {
            if let Some(next) = SosMode::parse(&id) {
                set_mode.emit(next);
            }
        })
    };

    let select_category = {
        let category = category.clone();
        Callback::from(move |next: EmergencyCategory| category.set(Some(next)))
    };

    let send_alert = {
        let category = category.clone();
        let alert_active = alert_active.clone();
        let on_toast = props.on_toast.clone();
        let scope = scope.clone();
        Callback::from(move |_| {
            if !instant_alert_ready(*category) {
                on_toast.emit((
                    String::from("Please select an emergency category first"),
                    ToastKind::Error,
                ));
                return;
            }
            alert_active.set(true);
            on_toast.emit((
                String::from("Emergency alert sent! Help is on the way."),
                ToastKind::Success,
            ));
            let alert_active = alert_active.clone();
            let on_toast = on_toast.clone();
            spawn_after(&scope, SOS_ACTIVE_MS, move || {
                alert_active.set(false);
                on_toast.emit((
                    String::from("Emergency services have been notified. Stay safe!"),
                    ToastKind::Success,
                ));
            });
        })
    };

    let on_draft_location = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.location = input.value();
            draft.set(next);
        })
    };

    let on_draft_description = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.description = input.value();
            draft.set(next);
        })
    };

    let fetch_draft_location = {
        let draft = draft.clone();
        let on_toast = props.on_toast.clone();
        let scope = scope.clone();
        Callback::from(move |_| {
            let draft = draft.clone();
            let on_toast = on_toast.clone();
            spawn_after(&scope, LOCATION_DELAY_MS, move || {
                let mut next = (*draft).clone();
                next.location = FETCHED_LOCATION.to_string();
                draft.set(next);
                on_toast.emit((String::from("Location fetched successfully!"), ToastKind::Success));
            });
        })
    };

    let submit_report = {
        let draft = draft.clone();
        let category = category.clone();
        let submitting = submitting.clone();
        let on_toast = props.on_toast.clone();
        let scope = scope.clone();
        Callback::from(move |_| {
            let mut candidate = (*draft).clone();
            candidate.category = candidate.category.or(*category);
            match candidate.validate() {
                Err(err) => on_toast.emit((err.to_string(), ToastKind::Error)),
                Ok(_) => {
                    submitting.set(true);
                    let draft = draft.clone();
                    let submitting = submitting.clone();
                    let on_toast = on_toast.clone();
                    spawn_after(&scope, SUBMIT_DELAY_MS, move || {
                        submitting.set(false);
                        match simulated_submission() {
                            Ok(()) => {
                                on_toast.emit((
                                    String::from(
                                        "Emergency report submitted! Authorities have been notified. 🚨",
                                    ),
                                    ToastKind::Success,
                                ));
                                draft.set(AlertDraft::default());
                            }
                            Err(err) => on_toast.emit((err.to_string(), ToastKind::Error)),
                        }
                    });
                }
            }
        })
    };

    let category_grid = html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
            { for EmergencyCategory::ALL.into_iter().map(|entry| {
                let selected = *category == Some(entry);
                let on_click = {
                    let select = select_category.clone();
                    Callback::from(move |_| select.emit(entry))
                };
                let mut class = classes!("btn", "h-auto", "py-4", "justify-start", "gap-3");
                if selected {
                    class.push("btn-error");
                } else {
                    class.push("btn-outline");
                }
                html! {
                    <button
                        class={class}
                        data-testid={format!("emergency-{}", entry.id())}
                        aria-pressed={selected.to_string()}
                        onclick={on_click}
                    >
                        <span class="text-2xl" aria-hidden="true">{ entry.glyph() }</span>
                        <span class="text-left">
                            <span class="block font-medium">{ entry.label() }</span>
                            <span class="block text-xs opacity-70">{ format!("Helpline {}", entry.helpline()) }</span>
                        </span>
                    </button>
                }
            })}
        </div>
    };

    let instant_pane = html! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 space-y-6">
                <div class="card bg-base-200 border border-base-300">
                    <div class="card-body space-y-4">
                        <h2 class="card-title">{ "What's the emergency?" }</h2>
                        { category_grid.clone() }
                        <button
                            class={classes!("btn", "btn-error", "btn-lg", "w-full", (*alert_active).then_some("animate-pulse"))}
                            disabled={*alert_active}
                            data-testid="send-alert"
                            onclick={send_alert}
                        >
                            { if *alert_active { "🚨 Alert active — help is on the way" } else { "🚨 Send Emergency Alert" } }
                        </button>
                        <p class="text-sm opacity-70" data-testid="sos-location">
                            { match location.as_ref() {
                                Some(resolved) => format!("Your location: {resolved}"),
                                None => String::from("Fetching location..."),
                            }}
                        </p>
                    </div>
                </div>
            </div>

            <div class="card bg-base-200 border border-base-300 h-fit">
                <div class="card-body space-y-2">
                    <h2 class="card-title">{ "Quick Contacts" }</h2>
                    { for QUICK_CONTACTS.iter().map(|contact| {
                        let dial = {
                            let on_toast = props.on_toast.clone();
                            let name = contact.name;
                            let number = contact.number;
                            Callback::from(move |_| {
                                on_toast.emit((format!("Calling {name} ({number})..."), ToastKind::Info));
                            })
                        };
                        html! {
                            <button
                                key={contact.number}
                                class="btn btn-outline w-full justify-between"
                                data-testid={format!("dial-{}", contact.number)}
                                onclick={dial}
                            >
                                <span>{ contact.name }</span>
                                <span class="font-bold">{ contact.number }</span>
                            </button>
                        }
                    })}
                </div>
            </div>
        </div>
    };

    let report_pane = html! {
        <div class="card bg-base-200 border border-base-300">
            <div class="card-body space-y-4">
                <h2 class="card-title">{ "Report an Emergency" }</h2>
                { category_grid.clone() }
                <div class="flex gap-2">
                    <input
                        class="input input-bordered flex-1"
                        placeholder="Emergency location"
                        value={draft.location.clone()}
                        onchange={on_draft_location}
                        data-testid="sos-location-input"
                    />
                    <button class="btn btn-outline" onclick={fetch_draft_location}>{ "📍" }</button>
                </div>
                <textarea
                    class="textarea textarea-bordered w-full"
                    rows="4"
                    placeholder="Describe the emergency..."
                    value={draft.description.clone()}
                    onchange={on_draft_description}
                    data-testid="sos-description-input"
                />
                <button
                    class="btn btn-error w-full"
                    disabled={*submitting}
                    data-testid="submit-emergency"
                    onclick={submit_report}
                >
                    { if *submitting { "Submitting…" } else { "Submit Emergency Report" } }
                </button>
            </div>
        </div>
    };

    html! {
        <div class="space-y-6" data-testid="sos-page">
            <div class="hero-banner rounded-2xl p-6 bg-error text-error-content">
                <h1 class="text-3xl font-bold mb-2">{ "🚨 Emergency SOS" }</h1>
                <p class="opacity-80 mb-2">
                    { "Use this feature only for genuine emergencies requiring immediate assistance." }
                </p>
                <span class="badge badge-outline">{ "Emergency services will be contacted immediately" }</span>
            </div>

            <TabStrip tabs={tab_items()} active={AttrValue::from(mode.as_str())} on_select={on_tab_select} />

            { match *mode {
                SosMode::Instant => instant_pane,
                SosMode::Report => report_pane,
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::tab_items;

    #[test]
    fn tab_strip_lists_instant_and_report_modes() {
        let items = tab_items();
        assert_eq!(items[0].id.as_str(), "instant");
        assert_eq!(items[1].id.as_str(), "report");
    }
}
