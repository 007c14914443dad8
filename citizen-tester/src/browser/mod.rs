mod bridge;
mod session;

pub use bridge::{BridgeState, CitizenBridge};
pub use session::{BrowserConfig, BrowserKind, new_session};
