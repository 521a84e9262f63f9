//! Handler module declarations and re-exports

pub mod file;
pub mod furniture;
pub mod opening;
pub mod pointer;
pub mod room;
pub mod snapshot;
pub mod view;

// Re-export all handlers for convenient access
pub use file::*;
pub use furniture::*;
pub use opening::*;
pub use pointer::*;
pub use room::*;
pub use snapshot::*;
pub use view::*;
