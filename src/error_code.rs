//! Catalog of error codes reported by the push service.
//!
//! The table is not exhaustive. Codes missing from it still fail the call,
//! with a generic description (see [`crate::Error::Server`]).

/// Internal server error.
pub const INTERNAL_SERVER_ERROR: i64 = 30600;
/// Request signature or API key rejected.
pub const AUTHENTICATION_FAILED: i64 = 30603;
/// Message quota used up.
pub const QUOTA_EXHAUSTED: i64 = 30604;
/// The named tag does not exist.
pub const TAG_NOT_FOUND: i64 = 30611;
/// Requests are too frequent and were temporarily rejected.
pub const TOO_FREQUENT: i64 = 30699;
/// The timer task does not exist.
pub const TIMER_TASK_NOT_FOUND: i64 = 41001;

static CATALOG: &[(i64, &str)] = &[
    (30600, "internal server error"),
    (30601, "method not allowed"),
    (30602, "request params not valid"),
    (30603, "authentication failed"),
    (30604, "quota use up, payment required"),
    (30605, "data required not found"),
    (30606, "request time expires timeout"),
    (30607, "channel token timeout"),
    (30608, "bind relation not found"),
    (30609, "bind number too many"),
    (30610, "duplicate operation"),
    (30611, "tag not found"),
    (30612, "app forbidden, need whitelist authorization"),
    (30613, "app need initiated first in push console"),
    (30616, "app is not approved, can not use the push service"),
    (30617, "app do not have broadcast push capability"),
    (30618, "app do not have unicast or groupcast push capability"),
    (30619, "default tag is reserved"),
    (30620, "one app could only have one kind of device platform"),
    (30621, "package name invalid"),
    (
        30699,
        "requests are too frequent to be temporarily rejected or need whitelist authorization",
    ),
    (40001, "invalid iOS device token"),
    (40002, "invalid iOS message"),
    (40003, "iOS bad device token"),
    (40004, "iOS certification error"),
    (40005, "iOS duplicate message"),
    (40006, "iOS production certification invalid"),
    (40007, "iOS development certification invalid"),
    (40008, "iOS production certification expire"),
    (40009, "iOS development certification expire"),
    (40010, "type error, need a development certification"),
    (40011, "type error, need a production certification"),
    (40012, "iOS certification file invalid"),
    (41001, "timer task not exist"),
    (41002, "timer task duplicated"),
    (41003, "timer task num exceed"),
    (41004, "timer task will be executed, can not be canceled"),
    (41005, "timer task has been executed"),
    (50001, "generate CSRF token failed"),
    (50002, "invalid CSRF token"),
    (50003, "CSRF token expired"),
    (50004, "passport not login"),
    (50005, "invalid BDUSS"),
    (50006, "required to register as a developer"),
    (50007, "invalid developer"),
    (50008, "invalid app name"),
];

/// Look up the description of a server error code.
///
/// Returns `None` for codes the catalog does not know.
pub fn describe(code: i64) -> Option<&'static str> {
    CATALOG
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|idx| CATALOG[idx].1)
}

/// Iterate over every `(code, description)` pair in the catalog.
pub fn entries() -> impl Iterator<Item = (i64, &'static str)> {
    CATALOG.iter().copied()
}
