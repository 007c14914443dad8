#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use citizen_core::SampleData;
#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Clone)]
struct BootstrapHandles {
    data: UseStateHandle<SampleData>,
    profile: UseStateHandle<citizen_core::UserProfile>,
    community: UseStateHandle<Vec<citizen_core::CommunityReport>>,
    preload_progress: UseStateHandle<u8>,
    boot_ready: UseStateHandle<bool>,
}

#[cfg(any(target_arch = "wasm32", test))]
fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        data: app_state.data.clone(),
        profile: app_state.profile.clone(),
        community: app_state.community.clone(),
        preload_progress: app_state.preload_progress.clone(),
        boot_ready: app_state.boot_ready.clone(),
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn bootstrap_load(handles: &BootstrapHandles) {
    handles.preload_progress.set(10);
    let loaded = SampleData::load_from_static();
    handles.preload_progress.set(80);
    handles.profile.set(loaded.profile.clone());
    handles.community.set(loaded.community.clone());
    handles.data.set(loaded);
    handles.preload_progress.set(100);
    handles.boot_ready.set(true);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            bootstrap_load(&handles);
        });
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(BootstrapHarness)]
    fn bootstrap_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let handles = handles_from_state(&app_state);
        let initialized = use_state(|| false);
        if !*initialized {
            initialized.set(true);
            bootstrap_load(&handles);
        }
        Html::default()
    }

    #[test]
    fn bootstrap_loads_sample_data_for_tests() {
        let _ = block_on(LocalServerRenderer::<BootstrapHarness>::new().render());
    }
}
