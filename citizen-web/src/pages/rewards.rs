use crate::app::query::{TabParam, use_tab_param};
use crate::app::state::ToastKind;
use crate::app::tabs::RewardsSection;
use crate::components::progress::ProgressBar;
use crate::components::tab_strip::{TabStrip, TabStripItem};
use citizen_core::{
    CivicEvent, ClaimEligibility, EventStatus, Reward, claim_eligibility, claim_progress_pct,
};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RewardsPageProps {
    pub rewards: Vec<Reward>,
    pub events: Vec<CivicEvent>,
    pub points: u32,
    pub on_toast: Callback<(String, ToastKind)>,
}

fn tab_items() -> Vec<TabStripItem> {
    RewardsSection::ALL
        .iter()
        .map(|section| TabStripItem {
            id: AttrValue::from(section.as_str()),
            label: AttrValue::from(section.label()),
        })
        .collect()
}

fn claim_button_label(eligibility: ClaimEligibility, claimed: bool) -> String {
    if claimed {
        return String::from("Claimed");
    }
    match eligibility {
        ClaimEligibility::Claimable => String::from("Claim Reward"),
        ClaimEligibility::NeedMorePoints(_) => String::from("Need More Points"),
        ClaimEligibility::OutOfStock => String::from("Out of Stock"),
    }
}

#[function_component(RewardsPage)]
pub fn rewards_page(props: &RewardsPageProps) -> Html {
    let (section, set_section) = use_tab_param::<RewardsSection>();
    // Claiming and registering are local-only mutations; nothing persists.
    let rewards = use_state(|| props.rewards.clone());
    let events = use_state(|| props.events.clone());

    let on_tab_select = {
        let set_section = set_section.clone();
        Callback::from(move |id: AttrValue| {
            if let Some(next) = RewardsSection::parse(&id) {
                set_section.emit(next);
            }
        })
    };

    let rewards_pane = html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6" data-testid="rewards-grid">
            { for rewards.iter().map(|reward| {
                let eligibility = claim_eligibility(props.points, reward);
                let claim = {
                    let rewards = rewards.clone();
                    let on_toast = props.on_toast.clone();
                    let id = reward.id;
                    let title = reward.title.clone();
                    Callback::from(move |_| {
                        let mut next = (*rewards).clone();
                        if let Some(entry) = next.iter_mut().find(|entry| entry.id == id) {
                            entry.claimed = true;
                        }
                        rewards.set(next);
                        on_toast.emit((format!("Reward claimed: {title} 🎉"), ToastKind::Success));
                    })
                };
                let disabled = reward.claimed || eligibility != ClaimEligibility::Claimable;
                html! {
                    <div key={reward.id} class="card bg-base-200 border border-base-300">
                        <div class="card-body space-y-3">
                            <div class="flex items-start justify-between">
                                <div class="flex items-center gap-3">
                                    <span class="text-3xl" aria-hidden="true">{ reward.icon.clone() }</span>
                                    <div>
                                        <h3 class="card-title text-lg">{ reward.title.clone() }</h3>
                                        <div class="flex items-center gap-2 mt-1">
                                            <span class="badge badge-outline">{ format!("{} points", reward.points) }</span>
                                            <span class="badge badge-ghost">{ reward.category.clone() }</span>
                                        </div>
                                    </div>
                                </div>
                            </div>
                            <p class="text-sm opacity-70">{ reward.description.clone() }</p>
                            { if let ClaimEligibility::NeedMorePoints(shortfall) = eligibility {
                                html! {
                                    <div class="space-y-1">
                                        <div class="flex justify-between text-sm">
                                            <span class="opacity-60">{ "Progress" }</span>
                                            <span class="font-medium">{ format!("{}/{} points", props.points, reward.points) }</span>
                                        </div>
                                        <ProgressBar value={claim_progress_pct(props.points, reward.points)} />
                                        <p class="text-xs opacity-60">{ format!("Need {shortfall} more points") }</p>
                                    </div>
                                }
                            } else {
                                Html::default()
                            }}
                            <button
                                class="btn btn-primary w-full"
                                disabled={disabled}
                                data-testid={format!("claim-{}", reward.id)}
                                onclick={claim}
                            >
                                { claim_button_label(eligibility, reward.claimed) }
                            </button>
                        </div>
                    </div>
                }
            })}
        </div>
    };

    let events_pane = html! {
        <div class="space-y-4" data-testid="events-list">
            { for events.iter().map(|event| {
                let register = {
                    let events = events.clone();
                    let on_toast = props.on_toast.clone();
                    let id = event.id;
                    Callback::from(move |_| {
                        let mut next = (*events).clone();
                        let Some(entry) = next.iter_mut().find(|entry| entry.id == id) else {
                            return;
                        };
                        match entry.register() {
                            Ok(()) => {
                                let title = entry.title.clone();
                                events.set(next);
                                on_toast.emit((
                                    format!("Registered for {title}!"),
                                    ToastKind::Success,
                                ));
                            }
                            Err(err) => {
                                on_toast.emit((err.to_string(), ToastKind::Error));
                            }
                        }
                    })
                };
                let status_badge = match event.status {
                    EventStatus::Upcoming => html! { <span class="badge badge-info">{ "Upcoming" }</span> },
                    EventStatus::Completed => html! { <span class="badge badge-success">{ "Completed" }</span> },
                };
                html! {
                    <div key={event.id} class="card bg-base-200 border border-base-300">
                        <div class="card-body space-y-3">
                            <div class="flex items-start justify-between">
                                <div>
                                    <h3 class="text-xl font-bold">{ event.title.clone() }</h3>
                                    <p class="text-sm opacity-60">
                                        { format!("{} · {}", event.date, event.time) }
                                    </p>
                                </div>
                                <div class="flex items-center gap-2">
                                    { status_badge }
                                    { if event.registered {
                                        html! { <span class="badge badge-outline badge-success">{ "Registered" }</span> }
                                    } else {
                                        Html::default()
                                    }}
                                </div>
                            </div>
                            <p class="opacity-70">{ event.description.clone() }</p>
                            <p class="text-sm opacity-60">
                                { format!(
                                    "📍 {} · 👥 {}/{} participants · ⭐ {} points reward",
                                    event.location, event.participants, event.max_participants, event.points
                                )}
                            </p>
                            { if event.status == EventStatus::Upcoming {
                                html! {
                                    <div class="space-y-1">
                                        <div class="flex justify-between text-sm">
                                            <span class="opacity-60">{ "Registration" }</span>
                                            <span class="font-medium">
                                                { format!("{}/{} spots filled", event.participants, event.max_participants) }
                                            </span>
                                        </div>
                                        <ProgressBar value={event.capacity_pct()} />
                                    </div>
                                }
                            } else {
                                Html::default()
                            }}
                            { if event.status == EventStatus::Upcoming && !event.registered {
                                html! {
                                    <button
                                        class="btn btn-primary w-fit"
                                        data-testid={format!("register-{}", event.id)}
                                        onclick={register}
                                    >
                                        { "Register Now" }
                                    </button>
                                }
                            } else if event.status == EventStatus::Completed && event.registered {
                                html! {
                                    <span class="badge badge-success">
                                        { format!("✓ Completed - Earned {} points", event.points) }
                                    </span>
                                }
                            } else {
                                Html::default()
                            }}
                        </div>
                    </div>
                }
            })}
        </div>
    };

    html! {
        <div class="space-y-6" data-testid="rewards-page">
            <div class="hero-banner rounded-2xl p-6 bg-secondary text-secondary-content">
                <h1 class="text-3xl font-bold mb-2">{ "🎁 Rewards & Events" }</h1>
                <p class="opacity-80">{ "Earn rewards for your contributions and join community events!" }</p>
            </div>

            <div class="card bg-success/10 border border-success/30">
                <div class="card-body flex-row items-center justify-between">
                    <div>
                        <h2 class="text-2xl font-bold">{ "Your Reward Points" }</h2>
                        <p class="opacity-70">{ "Keep contributing to earn more rewards!" }</p>
                    </div>
                    <p class="text-4xl font-bold text-success" data-testid="points-total">{ props.points }</p>
                </div>
            </div>

            <TabStrip tabs={tab_items()} active={AttrValue::from(section.as_str())} on_select={on_tab_select} />

            { match *section {
                RewardsSection::Rewards => rewards_pane,
                RewardsSection::Events => events_pane,
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_button_label_tracks_eligibility() {
        assert_eq!(
            claim_button_label(ClaimEligibility::Claimable, false),
            "Claim Reward"
        );
        assert_eq!(
            claim_button_label(ClaimEligibility::NeedMorePoints(100), false),
            "Need More Points"
        );
        assert_eq!(
            claim_button_label(ClaimEligibility::OutOfStock, false),
            "Out of Stock"
        );
        assert_eq!(
            claim_button_label(ClaimEligibility::Claimable, true),
            "Claimed"
        );
    }

    #[test]
    fn tab_strip_lists_both_sections() {
        let items = tab_items();
        assert_eq!(items[0].id.as_str(), "rewards");
        assert_eq!(items[1].id.as_str(), "events");
    }
}
