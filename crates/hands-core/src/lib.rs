//! Gesture classification and effect state for the neon hand overlay.
//!
//! Nothing in this crate touches browser APIs; the web frontend feeds it
//! landmarks and executes the draw list it returns.

pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod feed;
pub mod gesture;
pub mod landmarks;
pub mod palette;
pub mod scene;
pub mod session;
pub mod trigger;
pub mod upload;

pub use config::{AppConfig, DeviceProfile};
pub use error::{Error, Recovery, Result};
pub use feed::{GapPolicy, HandInput, LatestSlot, Resolved};
pub use gesture::{classify, Gesture};
pub use landmarks::{parse_flat_hands, Hand, HandId, HandSet, Landmark};
pub use scene::DrawOp;
pub use session::{RenderSession, SessionSettings, TickReport};
pub use trigger::SpawnCommand;
pub use upload::{SnapshotTarget, UploadStats};
