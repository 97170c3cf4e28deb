//! Traits for the collaborators the host application supplies.

pub mod host;
pub mod notify;
pub mod picker;

pub use host::{HostLink, HostRoot};
pub use notify::{Notification, Notifier, Severity};
pub use picker::{FileFilter, FilePicker};
