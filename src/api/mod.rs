//! API service modules for push service endpoints.
//!
//! Each service groups the operations of one API class.

mod push;
mod report;
mod tags;
mod timers;
mod topics;

pub use push::PushService;
pub use report::ReportService;
pub use tags::TagsService;
pub use timers::TimersService;
pub use topics::TopicsService;
