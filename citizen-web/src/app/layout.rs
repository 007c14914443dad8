//! Responsive layout state: a single width threshold decides the mobile
//! treatment and the navigation drawer's default collapse.

#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Viewports narrower than this get the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 576.0;

#[must_use]
pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

/// Drawer starts collapsed on mobile-sized viewports.
#[must_use]
pub fn initial_drawer_collapsed(width: Option<f64>) -> bool {
    width.is_some_and(is_mobile_width)
}

/// One-directional auto-collapse: shrinking below the breakpoint forces
/// the drawer shut, growing back never reopens it.
#[must_use]
pub fn drawer_collapsed_after_resize(collapsed: bool, width: f64) -> bool {
    collapsed || is_mobile_width(width)
}

/// Watch the viewport: registers a `resize` listener on mount and removes
/// it unconditionally on unmount.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_viewport(app_state: &AppState) {
    let is_mobile = app_state.is_mobile.clone();
    let sidebar_collapsed = app_state.sidebar_collapsed.clone();
    use_effect_with((), move |()| {
        let listener = Closure::<dyn FnMut()>::new(move || {
            if let Some(width) = crate::dom::viewport_width() {
                let mobile = is_mobile_width(width);
                is_mobile.set(mobile);
                if mobile {
                    sidebar_collapsed.set(true);
                }
            }
        });
        let window = crate::dom::window();
        if let Some(win) = window.as_ref() {
            let _ = win
                .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        }
        move || {
            if let Some(win) = window.as_ref() {
                let _ = win.remove_event_listener_with_callback(
                    "resize",
                    listener.as_ref().unchecked_ref(),
                );
            }
            drop(listener);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_separates_mobile_from_desktop() {
        assert!(is_mobile_width(575.0));
        assert!(!is_mobile_width(576.0));
        assert!(!is_mobile_width(1280.0));
    }

    #[test]
    fn initial_collapse_follows_viewport_width() {
        assert!(initial_drawer_collapsed(Some(480.0)));
        assert!(!initial_drawer_collapsed(Some(1024.0)));
        // No measurable viewport (e.g. prerendering): keep the drawer open.
        assert!(!initial_drawer_collapsed(None));
    }

    #[test]
    fn auto_collapse_is_one_directional() {
        // Shrinking collapses an expanded drawer.
        assert!(drawer_collapsed_after_resize(false, 400.0));
        // Growing back does not reopen a collapsed drawer.
        assert!(drawer_collapsed_after_resize(true, 1024.0));
        // Desktop resize leaves an expanded drawer alone.
        assert!(!drawer_collapsed_after_resize(false, 1024.0));
    }
}
