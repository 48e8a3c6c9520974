//! Pure view logic shared by the beets web front-end crates.
//!
//! Nothing in here performs I/O: pagination arithmetic, the command
//! transcript buffer, request generation tickets and display formatting.

mod action_phase;
mod format;
mod pagination;
mod ticket;
mod transcript;

pub use action_phase::ActionPhase;
pub use format::{format_bitrate, format_length};
pub use pagination::Pagination;
pub use ticket::{RequestTracker, Ticket};
pub use transcript::Transcript;
