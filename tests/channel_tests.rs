//! Integration tests for baidupush-rs
//!
//! Every test runs against a local wiremock server; no credentials or
//! network access are needed.
//!
//! Run with: cargo test --test channel_tests
//!
//! Set RUST_LOG=baidupush_rs=debug to see request logging.

use std::net::SocketAddr;
use std::sync::{Mutex, Once};

use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use baidupush_rs::auth::{sign, SIGN_KEY};
use baidupush_rs::error_code;
use baidupush_rs::prelude::*;

static INIT: Once = Once::new();

const API_KEY: &str = "NM2AmKF7f84qw7l26h1ICEVf";
const SECRET_KEY: &str = "LlITGDusuKhLTuBKoBjP2yCZLql3Ieun";

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

async fn setup() -> (MockServer, Channel) {
    init_logging();
    let server = MockServer::start().await;
    let channel = Channel::with_host(
        server.address().to_string(),
        Credentials::new(API_KEY, SECRET_KEY),
        DeviceType::Android,
    )
    .expect("channel against mock server");
    (server, channel)
}

fn success(request_id: u64, params: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "request_id": request_id,
        "response_params": params,
    }))
}

fn failure(request_id: u64, code: i64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "request_id": request_id,
        "error_code": code,
        "error_msg": "server side message",
    }))
}

/// Collect the fields a request carried, from the form body or the query.
fn request_params(request: &Request) -> ParameterSet {
    let mut params = ParameterSet::new();
    if request.method.as_str() == "GET" {
        for (k, v) in request.url.query_pairs() {
            params.add(k.into_owned(), v);
        }
    } else {
        for (k, v) in url::form_urlencoded::parse(&request.body) {
            params.add(k.into_owned(), v);
        }
    }
    params
}

/// Check the request signature the way the service does.
fn signature_valid(address: &SocketAddr, request: &Request) -> bool {
    let params = request_params(request);
    let Some(received) = params.get(SIGN_KEY) else {
        return false;
    };
    let url = format!("http://{}{}", address, request.url.path());
    sign(request.method.as_str(), &url, SECRET_KEY, &params) == received
}

fn channel_ids(n: usize) -> Vec<ChannelId> {
    (0..n)
        .map(|i| ChannelId::new(format!("42156673279231292{:02}", i)))
        .collect()
}

// =============================================================================
// Push
// =============================================================================

#[tokio::test]
async fn test_push_single_device() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/3.0/push/single_device"))
        .and(header(
            "content-type",
            "application/x-www-form-urlencoded;charset=utf-8",
        ))
        .and(body_string_contains("channel_id=4215667327923129295"))
        .and(body_string_contains("apikey=NM2AmKF7f84qw7l26h1ICEVf"))
        .and(body_string_contains("device_type=3"))
        .and(body_string_contains("sign="))
        .respond_with(success(
            3_810_024_455,
            json!({"msg_id": "8412263217423218281", "send_time": 1_700_000_000}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = channel
        .push()
        .single_device(
            &ChannelId::new("4215667327923129295"),
            r#"{"title":"hello world"}"#,
            PushOptions::new().msg_type(MsgType::Notification),
        )
        .await
        .expect("push should succeed");

    assert!(!receipt.msg_id.is_empty());
    assert!(receipt.send_time > 0);
    assert!(!receipt.is_scheduled());
    assert_eq!(receipt.request_id, 3_810_024_455);
    assert_eq!(channel.last_request_id(), Some(3_810_024_455));
}

#[tokio::test]
async fn test_push_request_is_signed() {
    let (server, channel) = setup().await;
    let address = *server.address();

    Mock::given(method("POST"))
        .and(path("/rest/3.0/push/all"))
        .and(move |request: &Request| signature_valid(&address, request))
        .respond_with(success(1, json!({"msg_id": "m", "send_time": 1})))
        .expect(1)
        .mount(&server)
        .await;

    channel
        .push()
        .all(r#"{"title":"a b ~*"}"#, PushOptions::new())
        .await
        .expect("signed push should match");
}

#[tokio::test]
async fn test_scheduled_push_returns_timer_id() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/3.0/push/all"))
        .and(body_string_contains("send_time=1700000120"))
        .respond_with(success(
            9,
            json!({"msg_id": "m", "timer_id": "t-1", "send_time": "1700000120"}),
        ))
        .mount(&server)
        .await;

    let receipt = channel
        .push()
        .all("{}", PushOptions::new().send_time(1_700_000_120))
        .await
        .unwrap();

    assert!(receipt.is_scheduled());
    assert_eq!(receipt.timer_id.as_deref(), Some("t-1"));
    assert_eq!(receipt.send_time, 1_700_000_120);
}

#[tokio::test]
async fn test_batch_push_sends_json_channel_ids() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/3.0/push/batch_device"))
        .and(move |request: &Request| {
            let params = request_params(request);
            params.get("channel_ids") == Some(r#"["a","b"]"#) && params.get("topic_id") == Some("news")
        })
        .respond_with(success(2, json!({"msg_id": "m", "send_time": 1})))
        .expect(1)
        .mount(&server)
        .await;

    channel
        .push()
        .batch_devices(
            &[ChannelId::new("a"), ChannelId::new("b")],
            "{}",
            PushOptions::new().topic_id("news"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_tagged_push_sets_type() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/3.0/push/tags"))
        .and(move |request: &Request| {
            let params = request_params(request);
            params.get("type") == Some("1") && params.get("tag") == Some("beta")
        })
        .respond_with(success(3, json!({"msg_id": "m", "send_time": 1})))
        .expect(1)
        .mount(&server)
        .await;

    channel
        .push()
        .tagged("beta", "{}", PushOptions::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_disallowed_option_never_reaches_network() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .respond_with(success(1, json!({})))
        .expect(0)
        .mount(&server)
        .await;

    // topic_id is only accepted by batch pushes
    let result = channel
        .push()
        .single_device(
            &ChannelId::new("1"),
            "{}",
            PushOptions::new().topic_id("news"),
        )
        .await;

    match result {
        Err(Error::InvalidParameter(message)) => {
            assert!(message.contains("topic_id"));
            assert!(message.contains("PushMsgToSingleDevice"));
        }
        other => panic!("expected InvalidParameter, got {:?}", other),
    }
    assert_eq!(channel.last_request_id(), None);
}

#[tokio::test]
async fn test_optional_overrides_common_field() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/3.0/push/all"))
        .and(body_string_contains("device_type=4"))
        .respond_with(success(1, json!({"msg_id": "m", "send_time": 1})))
        .expect(1)
        .mount(&server)
        .await;

    channel
        .push()
        .all("{}", PushOptions::new().device_type(DeviceType::Ios))
        .await
        .unwrap();
}

// =============================================================================
// Reports, timers and topics
// =============================================================================

#[tokio::test]
async fn test_msg_status_is_get() {
    let (server, channel) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/3.0/report/query_msg_status"))
        .and(query_param("msg_id", "8412263217423218281"))
        .and(query_param("device_type", "3"))
        .respond_with(success(
            11,
            json!({
                "total_num": 1,
                "result": [{"msg_id": "8412263217423218281", "status": 0, "success": 10, "send_time": 1700000000}]
            }),
        ))
        .mount(&server)
        .await;

    let status = channel
        .report()
        .msg_status("8412263217423218281", ParameterSet::new())
        .await
        .unwrap();

    assert_eq!(status.total_num, 1);
    assert_eq!(status.records[0].success, 10);
}

#[tokio::test]
async fn test_timer_records_query_is_get() {
    let (server, channel) = setup().await;
    let address = *server.address();

    Mock::given(method("GET"))
        .and(path("/rest/3.0/report/query_timer_records"))
        .and(query_param("timer_id", "t-1"))
        .and(query_param("limit", "5"))
        .and(move |request: &Request| signature_valid(&address, request))
        .respond_with(success(
            12,
            json!({"timer_id": "t-1", "result": [{"msg_id": "m", "status": 0, "send_time": "1700000000"}]}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let records = channel
        .report()
        .timer_records("t-1", RecordsQuery::new().limit(5))
        .await
        .unwrap();

    assert_eq!(records.timer_id, "t-1");
    assert_eq!(records.records[0].send_time, 1_700_000_000);
}

#[tokio::test]
async fn test_cancel_timer() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/3.0/timer/cancel"))
        .and(body_string_contains("timer_id=t-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"request_id": 13})))
        .mount(&server)
        .await;

    let ack = channel.timers().cancel("t-1").await.unwrap();
    assert_eq!(ack.request_id, 13);
    assert_eq!(channel.last_request_id(), Some(13));
}

#[tokio::test]
async fn test_list_timers_and_topics() {
    let (server, channel) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/3.0/timer/query_list"))
        .respond_with(success(
            14,
            json!({
                "total_num": 1,
                "result": [{"timer_id": "t-1", "msg": "{}", "send_time": 1700000120, "msg_type": 1, "range_type": 0}]
            }),
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/3.0/topic/query_list"))
        .respond_with(success(
            15,
            json!({"total_num": 1, "result": [{"topic_id": "news", "first_push_time": 1700000000}]}),
        ))
        .mount(&server)
        .await;

    let timers = channel.timers().list(TimerQuery::new()).await.unwrap();
    assert_eq!(timers.tasks[0].message_type(), Some(MsgType::Notification));

    let topics = channel.topics().list(TopicQuery::new()).await.unwrap();
    assert_eq!(topics.topics[0].topic_id, "news");
    assert_eq!(channel.last_request_id(), Some(15));
}

// =============================================================================
// Tags
// =============================================================================

/// Minimal in-memory tag registry that rejects badly signed requests.
struct TagRegistry {
    address: SocketAddr,
    tags: Mutex<Vec<String>>,
    next_request_id: Mutex<u64>,
}

impl TagRegistry {
    fn new(address: SocketAddr) -> Self {
        Self {
            address,
            tags: Mutex::new(Vec::new()),
            next_request_id: Mutex::new(100),
        }
    }
}

impl Respond for TagRegistry {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let request_id = {
            let mut next = self.next_request_id.lock().unwrap();
            *next += 1;
            *next
        };

        if !signature_valid(&self.address, request) {
            return failure(request_id, error_code::AUTHENTICATION_FAILED);
        }

        let params = request_params(request);
        let tag = params.get("tag").unwrap_or_default().to_string();
        let mut tags = self.tags.lock().unwrap();

        match request.url.path() {
            "/rest/3.0/app/create_tag" => {
                if !tags.contains(&tag) {
                    tags.push(tag.clone());
                }
                success(request_id, json!({"tag": tag, "result": 0}))
            }
            "/rest/3.0/app/del_tag" => match tags.iter().position(|t| *t == tag) {
                Some(index) => {
                    tags.remove(index);
                    success(request_id, json!({"tag": tag, "result": 0}))
                }
                None => failure(request_id, error_code::TAG_NOT_FOUND),
            },
            "/rest/3.0/app/query_tags" => {
                let result: Vec<Value> = tags
                    .iter()
                    .enumerate()
                    .map(|(i, t)| {
                        json!({"tid": i.to_string(), "tag": t, "info": "", "type": 2, "create_time": 1700000000})
                    })
                    .collect();
                success(request_id, json!({"total_num": tags.len(), "result": result}))
            }
            _ => failure(request_id, 30602),
        }
    }
}

async fn mount_tag_registry(server: &MockServer) {
    Mock::given(wiremock::matchers::path_regex("^/rest/3.0/app/"))
        .respond_with(TagRegistry::new(*server.address()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_create_tag_then_list() {
    let (server, channel) = setup().await;
    mount_tag_registry(&server).await;

    let before = channel.tags().list(TagQuery::new()).await.unwrap();

    let created = channel.tags().create("tag1").await.unwrap();
    assert_eq!(created.data, "tag1");

    let after = channel.tags().list(TagQuery::new()).await.unwrap();
    assert_eq!(after.total_num, before.total_num + 1);
    assert!(after.find("tag1").is_some());
    assert!(after.request_id > before.request_id);
    assert_eq!(channel.last_request_id(), Some(after.request_id));
}

#[tokio::test]
async fn test_delete_missing_tag() {
    let (server, channel) = setup().await;
    mount_tag_registry(&server).await;

    match channel.tags().delete("nope").await {
        Err(Error::Server {
            code,
            message,
            request_id,
        }) => {
            assert_eq!(code, error_code::TAG_NOT_FOUND);
            assert_eq!(message, "tag not found");
            assert!(request_id.is_some());
        }
        other => panic!("expected server error, got {:?}", other),
    }
    assert_eq!(channel.last_request_id(), None);
}

#[tokio::test]
async fn test_wrong_secret_is_rejected() {
    init_logging();
    let server = MockServer::start().await;
    mount_tag_registry(&server).await;

    let channel = Channel::with_host(
        server.address().to_string(),
        Credentials::new(API_KEY, "not-the-secret"),
        DeviceType::Android,
    )
    .unwrap();

    let err = channel.tags().create("tag1").await.unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_create_tag_inner_failure() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/3.0/app/create_tag"))
        .respond_with(success(1, json!({"tag": "tag1", "result": 1})))
        .mount(&server)
        .await;

    let err = channel.tags().create("tag1").await.unwrap_err();
    assert!(matches!(err, Error::BusinessFailure { code: 1, .. }));
}

#[tokio::test]
async fn test_tag_device_bounds() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/3.0/tag/add_devices"))
        .respond_with(success(1, json!({"result": []})))
        .expect(0)
        .mount(&server)
        .await;

    for n in [0, 11] {
        let err = channel
            .tags()
            .add_devices("tag1", &channel_ids(n))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)), "{} devices", n);
    }
}

#[tokio::test]
async fn test_tag_device_bounds_accepted() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/3.0/tag/del_devices"))
        .respond_with(move |request: &Request| {
            let params = request_params(request);
            let ids: Vec<String> =
                serde_json::from_str(params.get("channel_ids").unwrap_or("[]")).unwrap();
            let result: Vec<Value> = ids
                .iter()
                .map(|id| json!({"channel_id": id, "result": 0}))
                .collect();
            success(1, json!({"result": result}))
        })
        .expect(2)
        .mount(&server)
        .await;

    for n in [1, 10] {
        let results = channel
            .tags()
            .delete_devices("tag1", &channel_ids(n))
            .await
            .unwrap();
        assert_eq!(results.len(), n);
        assert!(results.iter().all(|r| r.is_success()));
    }
}

#[tokio::test]
async fn test_tag_device_count() {
    let (server, channel) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/3.0/tag/device_num"))
        .and(query_param("tag", "a b"))
        .respond_with(success(21, json!({"device_num": 42})))
        .mount(&server)
        .await;

    let count = channel.tags().device_count("a b").await.unwrap();
    assert_eq!(*count, 42);
    assert_eq!(count.request_id, 21);
}

// =============================================================================
// Malformed responses
// =============================================================================

#[tokio::test]
async fn test_non_json_body() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = channel
        .push()
        .all("{}", PushOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert_eq!(channel.last_request_id(), None);
}

#[tokio::test]
async fn test_unexpected_send_time_type() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .respond_with(success(1, json!({"msg_id": "m", "send_time": "tomorrow"})))
        .mount(&server)
        .await;

    let err = channel
        .push()
        .all("{}", PushOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_unknown_error_code() {
    let (server, channel) = setup().await;

    Mock::given(method("POST"))
        .respond_with(failure(5, 99999))
        .mount(&server)
        .await;

    let err = channel
        .push()
        .all("{}", PushOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.server_code(), Some(99999));
    assert_eq!(
        err.to_string(),
        "Server error 99999: unknown error code 99999"
    );
}
