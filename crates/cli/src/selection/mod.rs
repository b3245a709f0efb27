//! Interactive single and multi choice prompts.
//!
//! This module puts the terminal into raw mode, decodes the input byte stream
//! into key events and drives the selection widgets, redrawing them in place
//! below the cursor. When input is not a terminal the same widgets are driven
//! by whole lines instead.
//!
//! # Key Features
//!
//! - **Key Decoding**: Arrows, Home/End and function keys from CSI/SS3 sequences, with a short lookahead for a bare Escape
//! - **In-Place Redraw**: Frames are drawn from a saved cursor anchor, so nothing scrolls away
//! - **Scoped Terminal State**: Raw mode and the hidden cursor are given back on every exit path
//! - **Line Fallback**: Numbered lists and typed answers for pipes and redirected input
//!
//! # Keys
//!
//! - Up/Down move the cursor, wrapping at both ends; Home/End jump to the first/last choice
//! - Digits `1`-`9` pick (single) or toggle (multi) the matching choice
//! - Space toggles the choice under the cursor (multi)
//! - Enter confirms; Escape or Ctrl+C cancels

pub mod cancel;
pub mod colors;
pub mod fallback;
pub mod keys;
pub mod multi;
pub mod raw_mode;
pub mod render;
pub mod session;
pub mod single;
pub mod source;
pub mod types;
pub mod ui;
pub mod widget;

// Re-exports for convenience
pub use cancel::CancelToken;
pub use session::{select, Prompter, StdioPrompter};
pub use types::{KeyEvent, Outcome};
