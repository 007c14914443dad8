mod handlers;
mod screens;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::components::toast::ToastStack;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let main_view = screens::render_current_page(state, &handlers);

    html! {
        <div class="app-shell min-h-screen bg-base-100" data-testid="app-shell">
            <Header
                profile={(*state.profile).clone()}
                notifications={state.data.notifications.clone()}
                on_toggle_sidebar={handlers.toggle_sidebar.clone()}
            />
            <div class="app-body flex pt-16">
                <Sidebar
                    current={*state.page}
                    collapsed={*state.sidebar_collapsed}
                    mobile={*state.is_mobile}
                    impact_count={state.profile.reports_this_month}
                    on_navigate={handlers.navigate.clone()}
                    on_collapse={handlers.set_sidebar.clone()}
                />
                <main id="main" role="main" class="flex-1 p-4 lg:p-6">
                    { main_view }
                </main>
            </div>
            <ToastStack
                toasts={(*state.toasts).clone()}
                on_dismiss={handlers.dismiss_toast.clone()}
            />
        </div>
    }
}
