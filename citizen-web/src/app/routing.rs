#[cfg(any(target_arch = "wasm32", test))]
use crate::app::page::Page;
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// Startup page, derived once from the initial URL. Unrecognized paths
/// resolve to the dashboard.
#[must_use]
pub fn initial_page() -> crate::app::page::Page {
    #[cfg(target_arch = "wasm32")]
    {
        use yew_router::Routable;
        crate::dom::current_pathname()
            .and_then(|path| crate::router::Route::recognize(&path))
            .map_or(crate::app::page::Page::Dashboard, |route| route.to_page())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        crate::app::page::Page::Dashboard
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_page(page: Page, current_route: Option<&Route>) -> Option<Route> {
    // A route that already resolves to the current page is in sync; this
    // keeps `/` and unrecognized paths untouched instead of rewriting them.
    if current_route.is_some_and(|route| route.to_page() == page) {
        return None;
    }
    Some(Route::from_page(page))
}

#[cfg(any(target_arch = "wasm32", test))]
fn next_page_for_route(current_page: Page, route: Option<Route>) -> Option<Page> {
    let new_page = route?.to_page();
    (new_page != current_page).then_some(new_page)
}

/// Push a history entry whenever the page state moves ahead of the address
/// bar. Every page transition is permitted; the enum being closed makes an
/// invalid target unrepresentable.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_page(
    page: &UseStateHandle<Page>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let page = page.clone();
    use_effect_with((page, active_route), move |(page, current_route)| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_page(**page, current_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

/// Re-derive the current page whenever the route changes, which covers
/// browser back/forward navigation. Re-deriving from the same route is a
/// no-op, so the transition is idempotent.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_page_with_route(page: &UseStateHandle<Page>, route: Option<Route>) {
    let page = page.clone();
    use_effect_with(route, move |route| {
        if let Some(new_page) = next_page_for_route(*page, *route) {
            page.set(new_page);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_push_skips_when_address_bar_already_agrees() {
        assert!(next_route_for_page(Page::Leaderboard, Some(&Route::Leaderboard)).is_none());
        // `/` already resolves to the dashboard: no canonicalizing push.
        assert!(next_route_for_page(Page::Dashboard, Some(&Route::Home)).is_none());
        assert!(next_route_for_page(Page::Dashboard, Some(&Route::NotFound)).is_none());
        assert_eq!(
            next_route_for_page(Page::Leaderboard, Some(&Route::Dashboard)),
            Some(Route::Leaderboard)
        );
        assert_eq!(
            next_route_for_page(Page::Sos, None),
            Some(Route::Sos)
        );
    }

    #[test]
    fn page_rederivation_is_idempotent() {
        assert!(next_page_for_route(Page::Dashboard, Some(Route::Dashboard)).is_none());
        assert!(next_page_for_route(Page::Dashboard, Some(Route::Home)).is_none());
        assert!(next_page_for_route(Page::Dashboard, None).is_none());
        assert_eq!(
            next_page_for_route(Page::Dashboard, Some(Route::MyReports)),
            Some(Page::MyReports)
        );
    }

    #[test]
    fn unknown_routes_rederive_the_dashboard() {
        assert_eq!(
            next_page_for_route(Page::Rewards, Some(Route::NotFound)),
            Some(Page::Dashboard)
        );
        assert!(next_page_for_route(Page::Dashboard, Some(Route::NotFound)).is_none());
    }

    #[test]
    fn every_page_can_reach_every_other_page() {
        for from in Page::ALL {
            for to in Page::ALL {
                if from != to {
                    assert_eq!(
                        next_page_for_route(from, Some(Route::from_page(to))),
                        Some(to)
                    );
                }
            }
        }
    }
}
