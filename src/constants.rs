//! Crate-wide constants.
//!
//! Centralizes default picker descriptions and logging directives so the
//! settings defaults and the tests agree on them.

// ============================================================================
// Picker Defaults
// ============================================================================

/// Description shown for the default file type filter
pub const DEFAULT_FILTER_DESCRIPTION: &str = "Workflows";

/// MIME type accepted by the default file type filter
pub const DEFAULT_FILTER_MIME: &str = "application/json";

/// Extensions accepted by the default file type filter
pub const DEFAULT_FILTER_EXTENSIONS: &[&str] = &[".pwf", ".json"];

// ============================================================================
// Logging & Settings
// ============================================================================

/// Log directive used when neither `RUST_LOG` nor settings provide one
pub const DEFAULT_LOG_FILTER: &str = "canvas_bridge=info";

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "canvas-bridge";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ============================================================================
// Profiling
// ============================================================================

/// Pointer handlers slower than this are reported when profiling is enabled
pub const POINTER_HANDLER_WARN_MS: f64 = 4.0;

/// Scoped writes slower than this are reported when profiling is enabled
pub const SCOPED_WRITE_WARN_MS: f64 = 250.0;
