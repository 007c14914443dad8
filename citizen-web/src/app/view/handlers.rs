use crate::app::page::Page;
use crate::app::state::{AppState, ToastKind};
use crate::router::Route;
use citizen_core::{add_comment_in, toggle_like_in};
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// Every mutation of shared state flows through one of these callbacks;
/// views never touch [`AppState`] handles directly.
#[derive(Clone, PartialEq)]
pub struct AppHandlers {
    pub navigate: Callback<Page>,
    pub toggle_sidebar: Callback<()>,
    pub set_sidebar: Callback<bool>,
    pub toast: Callback<(String, ToastKind)>,
    pub dismiss_toast: Callback<u32>,
    pub toggle_like: Callback<u32>,
    pub add_comment: Callback<(u32, String)>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            navigate: build_navigate(state, navigator),
            toggle_sidebar: build_toggle_sidebar(state),
            set_sidebar: build_set_sidebar(state),
            toast: build_toast(state),
            dismiss_toast: build_dismiss_toast(state),
            toggle_like: build_toggle_like(state),
            add_comment: build_add_comment(state),
        }
    }
}

/// Push the canonical path and update the page state within the same
/// synchronous call; no intermediate state is observable.
fn build_navigate(state: &AppState, navigator: Option<Navigator>) -> Callback<Page> {
    let page = state.page.clone();
    Callback::from(move |next: Page| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::from_page(next));
        }
        page.set(next);
    })
}

fn build_toggle_sidebar(state: &AppState) -> Callback<()> {
    let collapsed = state.sidebar_collapsed.clone();
    Callback::from(move |()| {
        collapsed.set(!*collapsed);
    })
}

fn build_set_sidebar(state: &AppState) -> Callback<bool> {
    let collapsed = state.sidebar_collapsed.clone();
    Callback::from(move |next: bool| {
        collapsed.set(next);
    })
}

fn build_toast(state: &AppState) -> Callback<(String, ToastKind)> {
    let state = state.clone();
    Callback::from(move |(text, kind): (String, ToastKind)| {
        state.push_toast(text, kind);
    })
}

fn build_dismiss_toast(state: &AppState) -> Callback<u32> {
    let toasts = state.toasts.clone();
    Callback::from(move |id: u32| {
        let mut next = (*toasts).clone();
        next.retain(|toast| toast.id != id);
        toasts.set(next);
    })
}

fn build_toggle_like(state: &AppState) -> Callback<u32> {
    let community = state.community.clone();
    let state = state.clone();
    Callback::from(move |id: u32| {
        let mut feed = (*community).clone();
        if let Some(liked) = toggle_like_in(&mut feed, id) {
            community.set(feed);
            let text = if liked { "Report liked!" } else { "Like removed" };
            state.push_toast(text, ToastKind::Success);
        }
    })
}

fn build_add_comment(state: &AppState) -> Callback<(u32, String)> {
    let community = state.community.clone();
    let state = state.clone();
    Callback::from(move |(id, text): (u32, String)| {
        let mut feed = (*community).clone();
        if add_comment_in(&mut feed, id, &state.profile.name, &text) {
            community.set(feed);
            state.push_toast("Comment added!", ToastKind::Success);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(HandlersHarness)]
    fn handlers_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let handlers = AppHandlers::new(&app_state, None);

        // Without a navigator the page state still updates synchronously.
        handlers.navigate.emit(Page::Leaderboard);
        handlers.toggle_sidebar.emit(());
        handlers.set_sidebar.emit(true);
        handlers.toast.emit((String::from("hello"), ToastKind::Info));
        handlers.dismiss_toast.emit(0);
        handlers.toggle_like.emit(9999);
        handlers.add_comment.emit((9999, String::from("hi")));
        Html::default()
    }

    #[test]
    fn handlers_survive_emission_without_a_browser() {
        let _ = block_on(LocalServerRenderer::<HandlersHarness>::new().render());
    }
}
