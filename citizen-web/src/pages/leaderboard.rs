use crate::app::query::{TabParam, use_tab_param};
use crate::app::tabs::LeaderboardPeriod;
use crate::components::avatar::Avatar;
use crate::components::progress::ProgressBar;
use crate::components::tab_strip::{TabStrip, TabStripItem};
use citizen_core::{
    Achievement, LeaderboardData, LeaderboardEntry, current_user, next_rank_gap, podium,
    rank_progress_pct,
};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LeaderboardPageProps {
    pub leaderboard: LeaderboardData,
    pub achievements: Vec<Achievement>,
}

fn tab_items() -> Vec<TabStripItem> {
    LeaderboardPeriod::ALL
        .iter()
        .map(|period| TabStripItem {
            id: AttrValue::from(period.as_str()),
            label: AttrValue::from(period.label()),
        })
        .collect()
}

fn rank_glyph(rank: u32) -> Html {
    match rank {
        1 => html! { <span aria-hidden="true">{"🏆"}</span> },
        2 => html! { <span aria-hidden="true">{"🥈"}</span> },
        3 => html! { <span aria-hidden="true">{"🥉"}</span> },
        other => html! { <span class="text-sm font-bold opacity-60">{ other }</span> },
    }
}

fn render_row(entry: &LeaderboardEntry) -> Html {
    let row_class = if entry.is_current_user {
        classes!("flex", "items-center", "gap-4", "p-4", "rounded-lg", "border", "border-primary", "bg-primary/10")
    } else {
        classes!("flex", "items-center", "gap-4", "p-4", "rounded-lg", "border", "border-base-300")
    };
    html! {
        <div key={entry.rank} class={row_class}>
            <div class="w-10 flex justify-center">{ rank_glyph(entry.rank) }</div>
            <Avatar name={entry.name.clone()} class={classes!("w-12", "h-12")} />
            <div class="flex-1">
                <div class="flex items-center gap-2">
                    <h3 class="font-medium">{ entry.name.clone() }</h3>
                    { if entry.is_current_user {
                        html! { <span class="badge badge-primary badge-sm">{ "You" }</span> }
                    } else {
                        Html::default()
                    }}
                    { if let Some(badge) = &entry.badge {
                        html! { <span class="badge badge-outline badge-sm">{ badge.clone() }</span> }
                    } else {
                        Html::default()
                    }}
                </div>
                <p class="text-sm opacity-60">
                    { format!("{} reports · {} resolved", entry.reports, entry.resolved) }
                    { if entry.streak > 0 { format!(" · 🔥 {} day streak", entry.streak) } else { String::new() } }
                </p>
            </div>
            <div class="text-right">
                <p class="text-xl font-bold text-primary">{ entry.points }</p>
                <p class="text-xs opacity-60">{ "points" }</p>
            </div>
        </div>
    }
}

#[function_component(LeaderboardPage)]
pub fn leaderboard_page(props: &LeaderboardPageProps) -> Html {
    let (period, set_period) = use_tab_param::<LeaderboardPeriod>();

    let entries = match *period {
        LeaderboardPeriod::Monthly => &props.leaderboard.monthly,
        LeaderboardPeriod::Weekly => &props.leaderboard.weekly,
    };
    let top = podium(entries);
    let user = current_user(entries);

    let on_tab_select = {
        let set_period = set_period.clone();
        Callback::from(move |id: AttrValue| {
            if let Some(next) = LeaderboardPeriod::parse(&id) {
                set_period.emit(next);
            }
        })
    };

    html! {
        <div class="space-y-6" data-testid="leaderboard-page">
            <div class="hero-banner rounded-2xl p-6 bg-warning text-warning-content">
                <h1 class="text-3xl font-bold mb-2">{ "🏆 Leaderboard" }</h1>
                <p class="opacity-80">{ "See how you rank among community champions making a difference!" }</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 card bg-base-200 border border-base-300">
                    <div class="card-body space-y-4">
                        <h2 class="card-title">{ "Community Leaders" }</h2>
                        <TabStrip
                            tabs={tab_items()}
                            active={AttrValue::from(period.as_str())}
                            on_select={on_tab_select}
                        />

                        <div class="flex justify-center items-end gap-4 my-4" data-testid="podium">
                            { for top.iter().map(|entry| html! {
                                <div key={entry.rank} class="text-center">
                                    <Avatar
                                        name={entry.name.clone()}
                                        class={if entry.rank == 1 { classes!("w-20", "h-20") } else { classes!("w-16", "h-16") }}
                                    />
                                    <div>{ rank_glyph(entry.rank) }</div>
                                    <h3 class="font-medium text-sm">{ entry.name.clone() }</h3>
                                    <p class="text-lg font-bold text-primary">{ entry.points }</p>
                                    <p class="text-xs opacity-60">{ format!("{} reports", entry.reports) }</p>
                                </div>
                            })}
                        </div>

                        <div class="space-y-3" data-testid="rankings">
                            { for entries.iter().map(render_row) }
                        </div>
                    </div>
                </div>

                <div class="space-y-6">
                    <div class="card bg-base-200 border border-base-300">
                        <div class="card-body space-y-4">
                            <h2 class="card-title">{ "Your Stats" }</h2>
                            { if let Some(user) = user {
                                html! {
                                    <>
                                        <div class="text-center">
                                            <p class="text-3xl font-bold text-primary">{ user.rank }</p>
                                            <p class="text-sm opacity-60">{ "Current Rank" }</p>
                                        </div>
                                        <div class="grid grid-cols-2 gap-3 text-center">
                                            <div class="p-3 rounded-lg bg-success/10">
                                                <p class="text-lg font-bold text-success">{ user.points }</p>
                                                <p class="text-xs opacity-60">{ "Total Points" }</p>
                                            </div>
                                            <div class="p-3 rounded-lg bg-secondary/10">
                                                <p class="text-lg font-bold text-secondary">{ user.streak }</p>
                                                <p class="text-xs opacity-60">{ "Day Streak" }</p>
                                            </div>
                                        </div>
                                        { if let Some(gap) = next_rank_gap(entries) {
                                            html! {
                                                <div class="p-3 rounded-lg bg-primary/10 space-y-2">
                                                    <p class="text-sm font-medium">{ "Next Rank in" }</p>
                                                    <p class="text-lg font-bold text-primary">{ format!("{gap} points") }</p>
                                                    <ProgressBar value={rank_progress_pct(entries)} />
                                                </div>
                                            }
                                        } else {
                                            Html::default()
                                        }}
                                    </>
                                }
                            } else {
                                html! { <p class="text-sm opacity-60">{ "You are not ranked this period yet." }</p> }
                            }}
                        </div>
                    </div>

                    <div class="card bg-base-200 border border-base-300">
                        <div class="card-body space-y-3">
                            <h2 class="card-title">{ "Achievements" }</h2>
                            { for props.achievements.iter().map(|achievement| {
                                let card_class = if achievement.earned {
                                    classes!("flex", "items-center", "gap-3", "p-3", "rounded-lg", "bg-success/10", "border", "border-success/30")
                                } else {
                                    classes!("flex", "items-center", "gap-3", "p-3", "rounded-lg", "bg-base-300/50")
                                };
                                html! {
                                    <div key={achievement.title.clone()} class={card_class}>
                                        <span class={if achievement.earned { "text-xl" } else { "text-xl grayscale opacity-50" }} aria-hidden="true">
                                            { achievement.icon.clone() }
                                        </span>
                                        <div class="flex-1">
                                            <h4 class="text-sm font-medium">{ achievement.title.clone() }</h4>
                                            <p class="text-xs opacity-60">{ achievement.description.clone() }</p>
                                        </div>
                                        { if achievement.earned {
                                            html! { <span class="badge badge-success">{ "✓" }</span> }
                                        } else {
                                            Html::default()
                                        }}
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
