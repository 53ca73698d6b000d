//! Test doubles for surfaces, controllers, dialogs and file handles.
//!
//! All fakes are deterministic and count the calls that matter for the
//! bridge's guarantees: bounding-rectangle queries, permission prompts, and
//! opened vs released write streams.
//!
//! ```ignore
//! let file = MemoryFileHandle::new("doc.json");
//! let picker = ScriptedPicker::new().then_save(file.clone());
//! let manager = FileCapabilityManager::new(Arc::new(picker), Arc::new(CapabilityTable::new()));
//! block_on(manager.pick_for_save("doc", &PickerOptions::default()))?;
//! block_on(manager.write_to_slot(&"doc".into(), "hello"))?;
//! assert_eq!(file.content(), "hello");
//! ```

use crate::controller::SessionController;
use crate::files::{
    AccessMode, FileHandle, FilePicker, PermissionState, PickerOptions, SlotId, WritableStream,
};
use crate::input::Surface;
use crate::notifications::Notice;
use crate::types::{PointerEvent, SurfaceRect};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

// ============================================================================
// Surface
// ============================================================================

/// Surface with a rectangle the test can move between events.
pub struct FixedSurface {
    rect: Mutex<SurfaceRect>,
    queries: AtomicUsize,
}

impl FixedSurface {
    pub fn new(rect: SurfaceRect) -> Self {
        Self {
            rect: Mutex::new(rect),
            queries: AtomicUsize::new(0),
        }
    }

    pub fn set_rect(&self, rect: SurfaceRect) {
        *self.rect.lock() = rect;
    }

    /// Number of `bounding_rect` calls so far.
    pub fn rect_queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Surface for FixedSurface {
    fn bounding_rect(&self) -> SurfaceRect {
        self.queries.fetch_add(1, Ordering::SeqCst);
        *self.rect.lock()
    }

    fn client_width(&self) -> f64 {
        self.rect.lock().width
    }

    fn client_height(&self) -> f64 {
        self.rect.lock().height
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Controller that records everything it receives, in order.
#[derive(Default)]
pub struct RecordingController {
    events: Mutex<Vec<PointerEvent>>,
    loaded: Mutex<Vec<String>>,
    names: Mutex<Vec<(SlotId, String)>>,
    notices: Mutex<Vec<Notice>>,
}

impl RecordingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PointerEvent> {
        self.events.lock().clone()
    }

    pub fn loaded(&self) -> Vec<String> {
        self.loaded.lock().clone()
    }

    pub fn file_names(&self) -> Vec<(SlotId, String)> {
        self.names.lock().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl SessionController for RecordingController {
    fn emit(&self, event: PointerEvent) {
        self.events.lock().push(event);
    }

    fn file_loaded(&self, content: &str) {
        self.loaded.lock().push(content.to_string());
    }

    fn file_name_set(&self, slot: &SlotId, name: &str) {
        self.names.lock().push((slot.clone(), name.to_string()));
    }

    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

// ============================================================================
// File Handle
// ============================================================================

type PromptHook = Box<dyn Fn() + Send + Sync>;

struct MemoryFileState {
    content: Mutex<String>,
    permission: Mutex<PermissionState>,
    answer: Mutex<PermissionState>,
    on_prompt: Mutex<Option<PromptHook>>,
    queries: AtomicUsize,
    prompts: AtomicUsize,
    reads: AtomicUsize,
    streams_opened: AtomicUsize,
    streams_released: AtomicUsize,
    commits: AtomicUsize,
    fail_open: AtomicBool,
    fail_write: AtomicBool,
    fail_close: AtomicBool,
    fail_read: AtomicBool,
    fail_permission: AtomicBool,
}

/// In-memory file handle. Clones share state, so a test can keep one clone
/// and hand another to a picker.
///
/// Starts undecided (`Prompt`) and grants when asked.
#[derive(Clone)]
pub struct MemoryFileHandle {
    name: String,
    state: Arc<MemoryFileState>,
}

impl MemoryFileHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(MemoryFileState {
                content: Mutex::new(String::new()),
                permission: Mutex::new(PermissionState::Prompt),
                answer: Mutex::new(PermissionState::Granted),
                on_prompt: Mutex::new(None),
                queries: AtomicUsize::new(0),
                prompts: AtomicUsize::new(0),
                reads: AtomicUsize::new(0),
                streams_opened: AtomicUsize::new(0),
                streams_released: AtomicUsize::new(0),
                commits: AtomicUsize::new(0),
                fail_open: AtomicBool::new(false),
                fail_write: AtomicBool::new(false),
                fail_close: AtomicBool::new(false),
                fail_read: AtomicBool::new(false),
                fail_permission: AtomicBool::new(false),
            }),
        }
    }

    pub fn with_content(self, content: impl Into<String>) -> Self {
        *self.state.content.lock() = content.into();
        self
    }

    /// State reported by permission queries.
    pub fn with_permission(self, state: PermissionState) -> Self {
        self.set_permission(state);
        self
    }

    /// What the user answers when prompted.
    pub fn answering(self, answer: PermissionState) -> Self {
        self.set_answer(answer);
        self
    }

    pub fn failing_open(self) -> Self {
        self.state.fail_open.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_writes(self) -> Self {
        self.state.fail_write.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_close(self) -> Self {
        self.state.fail_close.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_reads(self) -> Self {
        self.state.fail_read.store(true, Ordering::SeqCst);
        self
    }

    /// Permission queries and requests fail with an I/O error.
    pub fn failing_permission(self) -> Self {
        self.state.fail_permission.store(true, Ordering::SeqCst);
        self
    }

    /// Run `hook` while the permission prompt is showing.
    pub fn on_prompt(self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        *self.state.on_prompt.lock() = Some(Box::new(hook));
        self
    }

    pub fn set_permission(&self, state: PermissionState) {
        *self.state.permission.lock() = state;
    }

    pub fn set_answer(&self, answer: PermissionState) {
        *self.state.answer.lock() = answer;
    }

    pub fn content(&self) -> String {
        self.state.content.lock().clone()
    }

    pub fn query_count(&self) -> usize {
        self.state.queries.load(Ordering::SeqCst)
    }

    pub fn prompt_count(&self) -> usize {
        self.state.prompts.load(Ordering::SeqCst)
    }

    /// Number of `read_text` calls, failed ones included.
    pub fn read_count(&self) -> usize {
        self.state.reads.load(Ordering::SeqCst)
    }

    pub fn streams_opened(&self) -> usize {
        self.state.streams_opened.load(Ordering::SeqCst)
    }

    /// Streams opened but neither closed nor aborted.
    pub fn open_streams(&self) -> usize {
        self.streams_opened() - self.state.streams_released.load(Ordering::SeqCst)
    }

    /// Number of successful closes.
    pub fn commit_count(&self) -> usize {
        self.state.commits.load(Ordering::SeqCst)
    }
}

fn injected(what: &str) -> io::Error {
    io::Error::other(format!("injected {what} failure"))
}

#[async_trait]
impl FileHandle for MemoryFileHandle {
    fn name(&self) -> &str {
        &self.name
    }

    async fn query_permission(&self, _mode: AccessMode) -> io::Result<PermissionState> {
        self.state.queries.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_permission.load(Ordering::SeqCst) {
            return Err(injected("permission query"));
        }
        Ok(*self.state.permission.lock())
    }

    async fn request_permission(&self, _mode: AccessMode) -> io::Result<PermissionState> {
        self.state.prompts.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_permission.load(Ordering::SeqCst) {
            return Err(injected("permission request"));
        }
        if let Some(hook) = self.state.on_prompt.lock().as_ref() {
            hook();
        }
        let answer = *self.state.answer.lock();
        self.set_permission(answer);
        Ok(answer)
    }

    async fn read_text(&self) -> io::Result<String> {
        self.state.reads.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_read.load(Ordering::SeqCst) {
            return Err(injected("read"));
        }
        Ok(self.content())
    }

    async fn create_writable(&self) -> io::Result<Box<dyn WritableStream>> {
        if self.state.fail_open.load(Ordering::SeqCst) {
            return Err(injected("open"));
        }
        self.state.streams_opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryStream {
            state: Arc::clone(&self.state),
            buffer: String::new(),
        }))
    }
}

struct MemoryStream {
    state: Arc<MemoryFileState>,
    buffer: String,
}

#[async_trait]
impl WritableStream for MemoryStream {
    async fn write(&mut self, data: &str) -> io::Result<()> {
        if self.state.fail_write.load(Ordering::SeqCst) {
            return Err(injected("write"));
        }
        self.buffer.push_str(data);
        Ok(())
    }

    async fn close(self: Box<Self>) -> io::Result<()> {
        let MemoryStream { state, buffer } = *self;
        state.streams_released.fetch_add(1, Ordering::SeqCst);
        if state.fail_close.load(Ordering::SeqCst) {
            return Err(injected("close"));
        }
        *state.content.lock() = buffer;
        state.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn abort(self: Box<Self>) -> io::Result<()> {
        self.state.streams_released.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Picker
// ============================================================================

/// One scripted dialog outcome.
pub enum PickResponse {
    Pick(Arc<dyn FileHandle>),
    Cancel,
    Fail,
}

impl PickResponse {
    pub fn pick(handle: impl FileHandle + 'static) -> Self {
        Self::Pick(Arc::new(handle))
    }
}

/// Picker that replays queued outcomes. An empty queue behaves like the user
/// dismissing the dialog.
pub struct ScriptedPicker {
    open: Mutex<VecDeque<PickResponse>>,
    save: Mutex<VecDeque<PickResponse>>,
    open_calls: AtomicUsize,
    save_calls: AtomicUsize,
    save_supported: bool,
    last_options: Mutex<Option<PickerOptions>>,
}

impl Default for ScriptedPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedPicker {
    pub fn new() -> Self {
        Self {
            open: Mutex::new(VecDeque::new()),
            save: Mutex::new(VecDeque::new()),
            open_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            save_supported: true,
            last_options: Mutex::new(None),
        }
    }

    pub fn then_open(self, handle: impl FileHandle + 'static) -> Self {
        self.push_open(PickResponse::pick(handle));
        self
    }

    pub fn then_save(self, handle: impl FileHandle + 'static) -> Self {
        self.push_save(PickResponse::pick(handle));
        self
    }

    pub fn without_save_support(mut self) -> Self {
        self.save_supported = false;
        self
    }

    pub fn push_open(&self, response: PickResponse) {
        self.open.lock().push_back(response);
    }

    pub fn push_save(&self, response: PickResponse) {
        self.save.lock().push_back(response);
    }

    pub fn open_calls(&self) -> usize {
        self.open_calls.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// Options passed to the most recent dialog.
    pub fn last_options(&self) -> Option<PickerOptions> {
        self.last_options.lock().clone()
    }

    fn next(
        &self,
        queue: &Mutex<VecDeque<PickResponse>>,
        options: &PickerOptions,
    ) -> io::Result<Option<Arc<dyn FileHandle>>> {
        *self.last_options.lock() = Some(options.clone());
        match queue.lock().pop_front() {
            Some(PickResponse::Pick(handle)) => Ok(Some(handle)),
            Some(PickResponse::Fail) => Err(injected("dialog")),
            Some(PickResponse::Cancel) | None => Ok(None),
        }
    }
}

#[async_trait]
impl FilePicker for ScriptedPicker {
    async fn show_open_picker(
        &self,
        options: &PickerOptions,
    ) -> io::Result<Option<Vec<Arc<dyn FileHandle>>>> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.next(&self.open, options)?.map(|handle| vec![handle]))
    }

    async fn show_save_picker(
        &self,
        options: &PickerOptions,
    ) -> io::Result<Option<Arc<dyn FileHandle>>> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.next(&self.save, options)
    }

    fn supports_save_picker(&self) -> bool {
        self.save_supported
    }
}
