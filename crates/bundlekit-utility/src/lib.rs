//! Resolution and invocation of external OS utilities.
//!
//! The workflow never renders dialogs or notifications itself; it shells out
//! to whatever helper binaries are available on the machine (terminal
//! notifiers, dialog tools) and reads back their text output and exit codes.

pub mod dialog;
pub mod exec;
pub mod locate;
pub mod notify;

pub use exec::UtilityError;
pub use locate::locate;
pub use notify::notify;
