//! Shared value types.

pub mod id;
pub mod session;

pub use id::MenuId;
pub use session::SessionContext;
