//! Input contracts for TUI components
//!
//! App routes each key event to the focused component through
//! [`Interactive`]. Components report whether they consumed the key with
//! [`Handled`], and unhandled keys fall back to the App.

mod interactive;

pub use interactive::{Handled, Interactive};
