use crate::components::avatar::Avatar;
use citizen_core::{Notification, NotificationKind, UserProfile};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HeaderProps {
    pub profile: UserProfile,
    pub notifications: Vec<Notification>,
    pub on_toggle_sidebar: Callback<()>,
}

const fn notification_dot_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "bg-success",
        NotificationKind::Info => "bg-info",
        NotificationKind::Achievement => "bg-warning",
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let show_notifications = use_state(|| false);
    let show_profile_menu = use_state(|| false);

    let toggle_sidebar = {
        let cb = props.on_toggle_sidebar.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_notifications = {
        let show = show_notifications.clone();
        Callback::from(move |_| show.set(!*show))
    };
    let toggle_profile_menu = {
        let show = show_profile_menu.clone();
        Callback::from(move |_| show.set(!*show))
    };

    html! {
        <header role="banner" class="navbar fixed top-0 left-0 right-0 z-50 bg-base-100/95 border-b border-base-300 shadow-sm">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="flex items-center justify-between w-full px-4">
                <div class="flex items-center gap-3">
                    <button
                        class="btn btn-ghost btn-square"
                        aria-label="Toggle navigation"
                        data-testid="sidebar-toggle"
                        onclick={toggle_sidebar}
                    >
                        {"☰"}
                    </button>
                    <img
                        src={crate::paths::asset_path("static/img/logo.svg")}
                        alt=""
                        class="w-10 h-10"
                    />
                    <div>
                        <h1 class="text-xl font-bold">{ "CitizenConnect" }</h1>
                        <p class="text-sm opacity-60">{ "Dashboard" }</p>
                    </div>
                </div>

                <div class="flex items-center gap-4">
                    <span class="badge badge-success hidden sm:inline-flex" data-testid="points-badge">
                        { format!("{} Points", props.profile.points) }
                    </span>

                    <div class="relative">
                        <button
                            class="btn btn-ghost btn-square indicator"
                            aria-label="Notifications"
                            data-testid="notifications-toggle"
                            onclick={toggle_notifications}
                        >
                            {"🔔"}
                            { if props.notifications.is_empty() {
                                Html::default()
                            } else {
                                html! { <span class="indicator-item w-3 h-3 rounded-full bg-error"></span> }
                            }}
                        </button>
                        { if *show_notifications {
                            html! {
                                <ul class="menu dropdown-content bg-base-100 rounded-box shadow w-80 absolute right-0 z-50" data-testid="notifications-menu">
                                    { for props.notifications.iter().map(|notification| html! {
                                        <li key={notification.id} class="p-2">
                                            <div class="flex items-start gap-2">
                                                <span class={classes!("w-2", "h-2", "rounded-full", "mt-2", notification_dot_class(notification.kind))}></span>
                                                <p class="text-sm">{ notification.text.clone() }</p>
                                            </div>
                                        </li>
                                    })}
                                </ul>
                            }
                        } else {
                            Html::default()
                        }}
                    </div>

                    <div class="relative">
                        <button
                            class="flex items-center gap-2"
                            data-testid="profile-toggle"
                            onclick={toggle_profile_menu}
                        >
                            <Avatar name={props.profile.name.clone()} class={classes!("w-8", "h-8")} />
                            <span class="hidden sm:block text-left">
                                <span class="block text-sm font-medium">{ props.profile.name.clone() }</span>
                                <span class="block text-xs opacity-60">{ format!("Rank #{}", props.profile.rank) }</span>
                            </span>
                            {"▾"}
                        </button>
                        { if *show_profile_menu {
                            html! {
                                <ul class="menu dropdown-content bg-base-100 rounded-box shadow w-48 absolute right-0 z-50" data-testid="profile-menu">
                                    <li><button>{ "Profile Settings" }</button></li>
                                    <li><button>{ "Privacy" }</button></li>
                                    <li><button>{ "Help & Support" }</button></li>
                                    <li><button class="text-error">{ "Sign Out" }</button></li>
                                </ul>
                            }
                        } else {
                            Html::default()
                        }}
                    </div>
                </div>
            </div>
        </header>
    }
}
