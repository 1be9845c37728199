//! # baidupush-rs
//!
//! An async Rust client for the Baidu Cloud Push REST API (v3.0).
//!
//! Every request is an authenticated form call: the channel adds the common
//! fields (`apikey`, `timestamp`, `device_type`), checks caller-supplied
//! optional fields against a per-operation whitelist, signs the request with
//! the application's secret key and decodes the JSON envelope the service
//! answers with.
//!
//! ## Features
//!
//! - **Push**: single device, device batches, all devices, tagged devices,
//!   immediate or scheduled
//! - **Reports**: message status, timer task records, topic records
//! - **Timers**: list and cancel scheduled pushes
//! - **Tags**: create, delete, bind devices, count devices
//! - **Typed errors**: server codes surface as [`Error::Server`] with the
//!   service's request id
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use baidupush_rs::{Channel, ChannelId, Credentials, DeviceType};
//! use baidupush_rs::models::PushOptions;
//!
//! #[tokio::main]
//! async fn main() -> baidupush_rs::Result<()> {
//!     let channel = Channel::new(
//!         Credentials::new("api-key", "secret-key"),
//!         DeviceType::Android,
//!     )?;
//!
//!     let receipt = channel
//!         .push()
//!         .single_device(
//!             &ChannelId::new("4215667327923129295"),
//!             r#"{"title":"hello world"}"#,
//!             PushOptions::new(),
//!         )
//!         .await?;
//!
//!     println!("msg {} (request {})", receipt.msg_id, receipt.request_id);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use baidupush_rs::{Channel, Error};
//!
//! # async fn example(channel: Channel) {
//! match channel.tags().delete("missing").await {
//!     Ok(deleted) => println!("deleted {}", *deleted),
//!     Err(Error::Server { code, message, request_id }) => {
//!         eprintln!("server refused ({code}): {message}, request {request_id:?}");
//!     }
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod error_code;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{ApiResponse, Channel, ChannelConfig, Operation, ParameterSet};
pub use error::{Error, Result};
pub use models::{ChannelId, DeployStatus, DeviceType, MsgType};

/// Prelude module for convenient imports.
///
/// ```rust
/// use baidupush_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::Credentials;
    pub use crate::client::{ApiResponse, Channel, ChannelConfig, ParameterSet};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        ChannelId, DeployStatus, DeviceType, MsgType, SendTime,
        // Option builders
        PushOptions, RecordsQuery, TagQuery, TimerQuery, TopicQuery,
        // Results
        MessageResult, MessageStatus, PushResult, TagInfo, TagResult, TagsInfo, TimerRecords,
        TimerResult, TimerTasks, TopicList, TopicRecords, TopicResult,
    };
}
