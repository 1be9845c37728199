//! Request signature.
//!
//! The service recomputes the signature from the request it receives, so
//! every byte of the gathered string matters: key order, the encoding of the
//! whole string as one query component, and lowercase hex output.

use md5::{Digest, Md5};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::client::ParameterSet;

/// Name of the field that carries the signature.
pub const SIGN_KEY: &str = "sign";

/// Bytes left unescaped in a query component: `A-Z a-z 0-9 - _ . ~`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Compute the signature of a request.
///
/// Gathers `http_method`, `url`, `key=value` for every parameter in
/// ascending key order and finally `secret`, escapes the result as a single
/// query component and returns the lowercase hex MD5 digest of it.
///
/// A `sign` entry in `params` is skipped. Only the first value of a
/// multi-valued key is signed.
///
/// # Example
///
/// ```
/// use baidupush_rs::ParameterSet;
/// use baidupush_rs::auth::sign;
///
/// let params = ParameterSet::new().with("apikey", "key").with("timestamp", 1);
/// let a = sign("GET", "http://host/rest/3.0/tag/device_num", "secret", &params);
/// let b = sign("GET", "http://host/rest/3.0/tag/device_num", "secret", &params);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 32);
/// ```
pub fn sign(http_method: &str, url: &str, secret: &str, params: &ParameterSet) -> String {
    let mut gather = String::with_capacity(256);
    gather.push_str(http_method);
    gather.push_str(url);

    for key in params.keys().filter(|key| *key != SIGN_KEY) {
        gather.push_str(key);
        gather.push('=');
        gather.push_str(params.get(key).unwrap_or_default());
    }

    gather.push_str(secret);

    hex::encode(Md5::digest(query_escape(&gather).as_bytes()))
}

/// Escape `s` as a query component, with spaces rendered as `+`.
fn query_escape(s: &str) -> String {
    s.split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("+")
}
