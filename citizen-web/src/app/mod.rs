#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod layout;
pub mod page;
pub mod query;
pub mod routing;
pub mod state;
pub mod tabs;
pub mod tasks;
pub mod test_bridge;
pub mod view;

pub use page::Page;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    layout::use_viewport(&app_state);
    test_bridge::use_test_bridge(&app_state);

    let navigator = use_navigator();
    let route = use_route::<Route>();

    routing::use_sync_route_with_page(&app_state.page, navigator.clone(), route);
    routing::use_sync_page_with_route(&app_state.page, route);

    view::render_app(&app_state, navigator)
}

#[cfg(test)]
mod tests {
    use super::Page;
    use crate::router::Route;
    use yew_router::Routable;

    #[test]
    fn route_page_mappings_cover_all_pages() {
        for page in Page::ALL {
            let route = Route::from_page(page);
            assert_eq!(route.to_page(), page);
            // The canonical path parses back to the same route.
            assert_eq!(Route::recognize(&route.to_path()), Some(route));
        }
    }
}
