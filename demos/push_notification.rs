//! Push notification example.
//!
//! This example pushes a notification to one Android device and then
//! queries its delivery status.
//!
//! Run with: cargo run --example push_notification -- <channel_id>
//!
//! Requires BAIDU_PUSH_API_KEY and BAIDU_PUSH_SECRET_KEY; BAIDU_PUSH_HOST
//! optionally points the channel at another host.

use baidupush_rs::models::{MsgType, PushOptions};
use baidupush_rs::{Channel, ChannelId, DeviceType, Error, ParameterSet};

#[tokio::main]
async fn main() -> baidupush_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let channel_id = std::env::args()
        .nth(1)
        .map(ChannelId::new)
        .ok_or_else(|| Error::Config("usage: push_notification <channel_id>".to_string()))?;

    let channel = Channel::from_env(DeviceType::Android)?;
    println!("Pushing to {} via {}...", channel_id, channel.host());

    let receipt = channel
        .push()
        .single_device(
            &channel_id,
            r#"{"title":"hello","description":"hello world"}"#,
            PushOptions::new()
                .msg_type(MsgType::Notification)
                .msg_expires(3600),
        )
        .await?;

    println!("Message {} sent at {}", receipt.msg_id, receipt.send_time);
    println!("Request id: {}", receipt.request_id);

    match channel
        .report()
        .msg_status(&receipt.msg_id, ParameterSet::new())
        .await
    {
        Ok(status) => {
            for record in &status.records {
                println!(
                    "  - {} status={} success={}",
                    record.msg_id, record.status, record.success
                );
            }
        }
        Err(e) if e.is_rate_limited() => println!("Status query throttled, try again later"),
        Err(e) => return Err(e),
    }

    println!("\nDone!");
    Ok(())
}
