//! Data models for the Baidu Push API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Identifiers, platform and message type codes
//! - [`push`] - Push options and results
//! - [`report`] - Delivery reports
//! - [`timer`] - Timer tasks
//! - [`tag`] - Tags and tag membership
//! - [`topic`] - Topics

pub mod primitives;
pub mod push;
pub mod report;
pub mod tag;
pub mod timer;
pub mod topic;

// Re-export commonly used types
pub use primitives::*;
pub use push::*;
pub use report::*;
pub use tag::*;
pub use timer::*;
pub use topic::*;
