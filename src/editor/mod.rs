//! Editor module - the stateful side of the floor-plan editor
//!
//! A WebView owns pixels and DOM; this module owns the model. Pointer
//! events, sidebar edits and file operations arrive as JSON-RPC requests,
//! mutate the single `EditorState`, and the client redraws from snapshots.
//!
//! # Module Structure
//! - `protocol` - JSON-RPC request/response types
//! - `state` - Editor session state and interaction machine
//! - `hit` - Point-to-entity hit testing
//! - `util` - Param parsing helpers
//! - `handlers` - Request handlers organized by functionality

pub mod handlers;
pub mod hit;
pub mod protocol;
pub mod state;
pub mod util;

// Re-export key types for convenience
pub use protocol::{error_codes, ErrorResponse, Request, Response};
pub use state::{
    EditorState, Interaction, Mode, OpeningDraft, ResizeHandle, ResizeStart, Selection,
};
