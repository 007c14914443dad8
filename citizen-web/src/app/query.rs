//! Query-string ↔ tab synchronization, shared by every tab-bearing page.
//!
//! The contract is identical on all pages: the mount-time read resolves
//! the named query parameter against the page's closed tab set, rewriting
//! the URL in place when it has to fall back to the default (no history
//! entry for a default nobody chose); a user-initiated tab change pushes
//! exactly one entry so back can undo it. Tab state never changes the
//! page and never touches the path segment.

use yew::prelude::*;

/// A page-local tab set mirrored into one query parameter.
pub trait TabParam: Copy + PartialEq + 'static {
    /// Query-string key carrying the selection.
    const PARAM: &'static str;
    /// Closed set of valid tabs; the first one is the default.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    #[must_use]
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tab| tab.as_str() == raw)
    }

    #[must_use]
    fn default_tab() -> Self {
        Self::ALL[0]
    }

    /// Canonical query string for this selection, e.g. `?period=weekly`.
    #[must_use]
    fn query(self) -> String {
        format!("?{}={}", Self::PARAM, self.as_str())
    }
}

/// Outcome of the mount-time read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabResolution<T> {
    /// The URL already named a valid tab; leave it alone.
    Known(T),
    /// Missing or unrecognized value: activate the default and rewrite the
    /// URL in place to the canonical query.
    Defaulted(T),
}

#[must_use]
pub fn resolve_tab<T: TabParam>(raw: Option<&str>) -> TabResolution<T> {
    raw.and_then(T::parse)
        .map_or_else(|| TabResolution::Defaulted(T::default_tab()), TabResolution::Known)
}

/// Page-local tab state synchronized with the URL. Returns the current tab
/// and the change callback for the tab strip.
///
/// Only the mount reads the query string; back/forward across pages
/// remounts the page component, which re-triggers the read.
#[hook]
pub fn use_tab_param<T: TabParam>() -> (UseStateHandle<T>, Callback<T>) {
    let tab = use_state(T::default_tab);

    {
        let tab = tab.clone();
        use_effect_with((), move |()| {
            #[cfg(target_arch = "wasm32")]
            match resolve_tab::<T>(crate::dom::query_param(T::PARAM).as_deref()) {
                TabResolution::Known(value) => tab.set(value),
                TabResolution::Defaulted(value) => {
                    if let Err(err) = crate::dom::rewrite_query(&value.query(), false) {
                        log::warn!(
                            "failed to canonicalize `{}`: {}",
                            T::PARAM,
                            crate::dom::js_error_message(&err)
                        );
                    }
                    tab.set(value);
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = &tab;
        });
    }

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |next: T| {
            #[cfg(target_arch = "wasm32")]
            if let Err(err) = crate::dom::rewrite_query(&next.query(), true) {
                log::warn!(
                    "failed to push `{}` change: {}",
                    T::PARAM,
                    crate::dom::js_error_message(&err)
                );
            }
            tab.set(next);
        })
    };

    (tab, on_select)
}
