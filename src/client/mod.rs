//! Request pipeline and channel for the Baidu Push API.
//!
//! Every operation runs through the same steps:
//!
//! 1. optional parameters are checked against the operation's whitelist
//!    ([`validate`])
//! 2. common fields (`apikey`, `timestamp`, `device_type`) are merged with
//!    the mandatory and optional fields
//! 3. the merged set is signed and sent ([`sign`](crate::auth::sign))
//! 4. the response envelope is decoded ([`decode`])
//!
//! The main entry point is [`Channel`].

mod config;
mod envelope;
mod http;
mod operation;
mod params;
mod validator;

pub use config::{ChannelConfig, DEFAULT_HOST, HOST_ENV, SDK_NAME_VERSION};
pub use envelope::{decode, decode_ack, ApiResponse};
pub use http::Channel;
pub use operation::{HttpMethod, Operation};
pub use params::ParameterSet;
pub use validator::{permitted_keys, validate};
pub(crate) use http::ChannelInner;
