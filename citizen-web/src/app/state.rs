use crate::app::page::Page;
use citizen_core::{CommunityReport, SampleData, UserProfile};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Info => "alert-info",
            Self::Error => "alert-error",
        }
    }
}

/// Fire-and-forget acknowledgement shown in the toast stack.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: u32,
    pub text: AttrValue,
    pub kind: ToastKind,
}

/// All shared mutable state, owned here and mutated only through the
/// callbacks in [`crate::app::view::AppHandlers`].
#[derive(Clone)]
pub struct AppState {
    pub page: UseStateHandle<Page>,
    pub sidebar_collapsed: UseStateHandle<bool>,
    pub is_mobile: UseStateHandle<bool>,
    pub data: UseStateHandle<SampleData>,
    pub boot_ready: UseStateHandle<bool>,
    pub preload_progress: UseStateHandle<u8>,
    pub profile: UseStateHandle<UserProfile>,
    pub community: UseStateHandle<Vec<CommunityReport>>,
    pub toasts: UseStateHandle<Vec<ToastMessage>>,
    pub toast_serial: UseStateHandle<u32>,
}

fn startup_width() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::viewport_width()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[hook]
pub fn use_app_state() -> AppState {
    let width = startup_width();
    AppState {
        page: use_state(crate::app::routing::initial_page),
        sidebar_collapsed: use_state(|| crate::app::layout::initial_drawer_collapsed(width)),
        is_mobile: use_state(|| width.is_some_and(crate::app::layout::is_mobile_width)),
        data: use_state(SampleData::empty),
        boot_ready: use_state(|| false),
        preload_progress: use_state(|| 0_u8),
        profile: use_state(UserProfile::default),
        community: use_state(Vec::new),
        toasts: use_state(Vec::new),
        toast_serial: use_state(|| 0_u32),
    }
}

impl AppState {
    /// Append a toast, assigning it the next serial id.
    pub fn push_toast(&self, text: impl Into<AttrValue>, kind: ToastKind) {
        let id = *self.toast_serial;
        let mut toasts = (*self.toasts).clone();
        toasts.push(ToastMessage {
            id,
            text: text.into(),
            kind,
        });
        self.toasts.set(toasts);
        self.toast_serial.set(id + 1);
    }

    #[must_use]
    pub fn data_ready(&self) -> bool {
        *self.boot_ready
    }
}
