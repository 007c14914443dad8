//! Simulated network latency with cancellation tied to view lifetime.
//!
//! Every "network call" in the app is a fixed-delay timer. The delay
//! itself is harmless; applying its completion to a view that has since
//! unmounted is not. A [`TaskScope`] is the liveness flag shared between a
//! view and its in-flight simulations: the owning component cancels the
//! scope in its effect cleanup, and late completions are dropped.

use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use yew::prelude::*;

/// Failure of a simulated network submission. The mock transport never
/// produces one, but every consumer treats it as a retryable error and
/// keeps its form state, so a real backend can slot in unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Network error - your submission was not sent. Please try again.")]
    Network,
}

/// Outcome of the mock transport: always success.
#[must_use]
pub fn simulated_submission() -> Result<(), SubmitError> {
    Ok(())
}

/// Standard delay for simulated form submissions.
pub const SUBMIT_DELAY_MS: i32 = 2000;
/// Standard delay for the simulated geolocation lookup.
pub const LOCATION_DELAY_MS: i32 = 2000;
/// How long the instant SOS alert stays in its "help is coming" state.
pub const SOS_ACTIVE_MS: i32 = 5000;

#[derive(Clone)]
pub struct TaskScope {
    alive: Rc<Cell<bool>>,
}

impl TaskScope {
    #[must_use]
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    /// Drop all pending completions. Idempotent.
    pub fn cancel(&self) {
        self.alive.set(false);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Run `f` only while the scope is alive. Returns whether it ran.
    pub fn run_if_alive(&self, f: impl FnOnce()) -> bool {
        if self.alive.get() {
            f();
            true
        } else {
            false
        }
    }
}

impl Default for TaskScope {
    fn default() -> Self {
        Self::new()
    }
}

/// A scope that is cancelled when the calling component unmounts.
#[hook]
pub fn use_task_scope() -> TaskScope {
    let scope = (*use_memo((), |_| TaskScope::new())).clone();
    {
        let scope = scope.clone();
        use_effect_with((), move |()| move || scope.cancel());
    }
    scope
}

/// Run `f` after a simulated network delay unless the owning view has
/// unmounted in the meantime.
pub fn spawn_after(scope: &TaskScope, delay_ms: i32, f: impl FnOnce() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        let scope = scope.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = crate::dom::sleep_ms(delay_ms).await {
                log::error!(
                    "simulated delay failed: {}",
                    crate::dom::js_error_message(&err)
                );
                return;
            }
            scope.run_if_alive(f);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (scope, delay_ms);
        drop(f);
    }
}
