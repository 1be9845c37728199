//! Credentials and request signing.
//!
//! Requests are authenticated by an API key sent in the clear and an MD5
//! signature computed over the request with the application's secret key.
//!
//! ```
//! use baidupush_rs::{Credentials, ParameterSet};
//! use baidupush_rs::auth::sign;
//!
//! let credentials = Credentials::new("api-key", "secret-key");
//! let params = ParameterSet::new()
//!     .with("apikey", credentials.api_key())
//!     .with("timestamp", 1700000000)
//!     .with("device_type", 3)
//!     .with("tag", "beta");
//!
//! let signature = sign(
//!     "GET",
//!     "http://api.tuisong.baidu.com/rest/3.0/tag/device_num",
//!     "secret-key",
//!     &params,
//! );
//! assert_eq!(signature.len(), 32);
//! ```

mod credentials;
mod signer;

pub use credentials::{Credentials, API_KEY_ENV, SECRET_KEY_ENV};
pub use signer::{sign, SIGN_KEY};
