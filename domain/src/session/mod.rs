//! Survey session domain.
//!
//! - [`entities::SessionState`]: immutable snapshot of position, answers and
//!   confirmation flag
//! - [`event::FlowEvent`]: a user gesture applied to a snapshot
//! - [`event::FlowRejection`]: why a gesture left the snapshot unchanged

pub mod entities;
pub mod event;
