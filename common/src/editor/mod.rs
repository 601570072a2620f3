//! Editing model for legal documents: the command set offered by the
//! toolbar, HTML normalization, text statistics and the save session.

pub mod command;
pub mod sanitize;
pub mod session;
pub mod stats;

pub use command::{Alignment, EditorCommand, HeadingLevel, BUBBLE_MENU, TOOLBAR};
pub use sanitize::normalize_html;
pub use session::{DocumentSession, SavePhase};
pub use stats::TextStats;
