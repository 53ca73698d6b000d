//! The outbound endpoint of the bridge.

use crate::files::SlotId;
use crate::notifications::Notice;
use crate::types::PointerEvent;

/// Remote session controller.
///
/// Every call is a one-way notification: nothing is returned, nothing is
/// awaited and failed deliveries are the controller's concern.
pub trait SessionController: Send + Sync {
    /// A normalized pointer event from the surface.
    fn emit(&self, event: PointerEvent);

    /// Full text content of a file the user opened.
    fn file_loaded(&self, content: &str);

    /// Display name of the file now bound to `slot`.
    fn file_name_set(&self, slot: &SlotId, name: &str);

    /// A user-visible message for a failed file operation.
    fn notify(&self, notice: Notice);
}
