//! Per-operation whitelist of optional request parameters.
//!
//! Optional keys are checked before a request is built. A single key that
//! is not on the operation's whitelist fails the whole call.

use super::params::ParameterSet;
use crate::{Error, Result};

const PUSH_SINGLE: &[&str] = &["expires", "device_type", "msg_type", "msg_expires", "deploy_status"];
const PUSH_BATCH: &[&str] = &["expires", "device_type", "msg_type", "msg_expires", "topic_id"];
const PUSH_BROADCAST: &[&str] = &[
    "expires",
    "device_type",
    "msg_type",
    "msg_expires",
    "deploy_status",
    "send_time",
];
const QUERY_MSG_STATUS: &[&str] = &["expires", "device_type"];
const QUERY_RECORDS: &[&str] = &["expires", "device_type", "start", "limit", "range_start", "range_end"];
const QUERY_TIMER_TASKS: &[&str] = &["expires", "device_type", "timer_id", "start", "limit"];
const QUERY_TAGS: &[&str] = &["expires", "device_type", "tag", "start", "limit"];
const QUERY_TOPIC_LIST: &[&str] = &["expires", "device_type", "start", "limit"];
const NONE: &[&str] = &[];

/// Optional keys permitted for the operation registered as `operation`.
///
/// Returns `None` when no operation is registered under that name.
pub fn permitted_keys(operation: &str) -> Option<&'static [&'static str]> {
    let keys = match operation {
        "PushMsgToSingleDevice" => PUSH_SINGLE,
        "PushMsgToBatchDevices" => PUSH_BATCH,
        "PushMsgToAllDevice" | "PushMsgToTag" => PUSH_BROADCAST,
        "QueryMsgStatus" => QUERY_MSG_STATUS,
        "QueryTimerRecords" | "QueryTopicRecords" => QUERY_RECORDS,
        "QueryTimerTasks" => QUERY_TIMER_TASKS,
        "QueryTagsInfo" => QUERY_TAGS,
        "QueryTopicList" => QUERY_TOPIC_LIST,
        "CancelTimerTask" | "CreateTag" | "DeleteTag" | "AddTagDevices" | "DeleteTagDevices"
        | "GetTagDevicesNumber" => NONE,
        _ => return None,
    };
    Some(keys)
}

/// Check `optionals` against the whitelist of `operation`.
///
/// # Errors
///
/// - [`Error::UnknownOperation`] if `operation` is not registered
/// - [`Error::InvalidParameter`] naming the first key that is not permitted
///
/// # Example
///
/// ```
/// use baidupush_rs::ParameterSet;
/// use baidupush_rs::client::validate;
///
/// let ok = ParameterSet::new().with("msg_type", 1);
/// assert!(validate("PushMsgToSingleDevice", &ok).is_ok());
///
/// let bad = ParameterSet::new().with("send_time", 1700000000);
/// assert!(validate("PushMsgToSingleDevice", &bad).is_err());
/// ```
pub fn validate(operation: &str, optionals: &ParameterSet) -> Result<()> {
    let permitted = permitted_keys(operation)
        .ok_or_else(|| Error::UnknownOperation(operation.to_string()))?;

    if let Some(key) = optionals.keys().find(|key| !permitted.contains(key)) {
        return Err(Error::InvalidParameter(format!(
            "{} is not allowed in API {}",
            key, operation
        )));
    }

    Ok(())
}
