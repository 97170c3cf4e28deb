//! Local stand-ins for the collaborators a CAD host would supply.

pub mod console;
pub mod local;
pub mod prompt;

pub use console::ConsoleNotifier;
pub use local::LocalHost;
pub use prompt::PromptPicker;
