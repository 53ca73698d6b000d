//! Canvas bridge: pointer input and file access for an embedded editor canvas.
//!
//! Two independent pieces share a [`Session`]:
//!
//! - [`input::PointerBridge`] turns raw device events into surface-local
//!   press, drag, release and click events for a [`SessionController`].
//! - [`files::FileCapabilityManager`] shows open/save dialogs, remembers the
//!   chosen files per slot and performs permission-checked reads and writes.
//!
//! Host platforms plug in through the [`input::Surface`] and
//! [`files::FilePicker`] / [`files::FileHandle`] traits.

pub mod constants;
pub mod controller;
pub mod files;
pub mod input;
pub mod logging;
pub mod notifications;
pub mod perf;
pub mod session;
pub mod settings;
pub mod testing;
pub mod types;

pub use controller::SessionController;
pub use notifications::{Notice, NoticeLevel};
pub use session::Session;
pub use settings::BridgeSettings;
pub use types::{PointerEvent, RawPointerEvent, SurfacePoint, SurfaceRect};
