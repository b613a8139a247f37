use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use athletrack::{
    advisory::GenerativeModel, build_app, config::AppConfig, state::AppState, store::MemStore,
};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Model double that always returns the same reply and counts calls.
struct ScriptedModel {
    reply: String,
    calls: AtomicUsize,
}

impl ScriptedModel {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

struct FailingModel;

#[async_trait]
impl GenerativeModel for FailingModel {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        anyhow::bail!("upstream model exploded")
    }
}

fn app_with_model(model: Arc<dyn GenerativeModel>) -> Router {
    let state = AppState::from_parts(
        Arc::new(MemStore::new()),
        model,
        Arc::new(AppConfig::default()),
    );
    build_app(state)
}

fn app() -> Router {
    app_with_model(Arc::new(FailingModel))
}

async fn send(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> (StatusCode, Value, Option<String>) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(c) = cookie {
        builder = builder.header(header::COOKIE, c);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let session_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or_default().to_string());

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json, session_cookie)
}

async fn register(app: &Router, username: &str, password: &str) -> (Value, String) {
    let (status, body, cookie) = send(
        app,
        "POST",
        "/api/register",
        Some(json!({ "username": username, "password": password })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    (body, cookie.expect("register must set a session cookie"))
}

#[tokio::test]
async fn register_returns_account_and_logs_the_caller_in() {
    let app = app();
    let (account, cookie) = register(&app, "alice", "pw1").await;

    assert_eq!(account["username"], "alice");
    assert_eq!(account["id"], 1);
    assert!(account.get("passwordHash").is_none());
    assert_eq!(account["name"], "Athlete");
    assert_eq!(account["dailyCalorieGoal"], 2000);

    // Registration implies login.
    let (status, me, _) = send(&app, "GET", "/api/user", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "alice");
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let app = app();
    register(&app, "alice", "pw1").await;

    let (status, body, _) = send(
        &app,
        "POST",
        "/api/register",
        Some(json!({ "username": "alice", "password": "other" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username already exists");

    // The first account still authenticates.
    let (status, _, _) = send(
        &app,
        "POST",
        "/api/login",
        Some(json!({ "username": "alice", "password": "pw1" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn register_names_missing_fields() {
    let app = app();
    let (status, body, _) = send(&app, "POST", "/api/register", Some(json!({})), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"], json!(["username", "password"]));
}

#[tokio::test]
async fn login_failures_do_not_reveal_which_factor_failed() {
    let app = app();
    register(&app, "alice", "pw1").await;

    let (wrong_pw_status, wrong_pw_body, _) = send(
        &app,
        "POST",
        "/api/login",
        Some(json!({ "username": "alice", "password": "nope" })),
        None,
    )
    .await;
    let (unknown_status, unknown_body, _) = send(
        &app,
        "POST",
        "/api/login",
        Some(json!({ "username": "ghost", "password": "nope" })),
        None,
    )
    .await;

    assert_eq!(wrong_pw_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pw_body, unknown_body);
}

#[tokio::test]
async fn login_establishes_a_session() {
    let app = app();
    register(&app, "alice", "pw1").await;

    let (status, account, cookie) = send(
        &app,
        "POST",
        "/api/login",
        Some(json!({ "username": "alice", "password": "pw1" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(account["username"], "alice");

    let cookie = cookie.expect("login must set a session cookie");
    let (status, me, _) = send(&app, "GET", "/api/user", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], account["id"]);
}

#[tokio::test]
async fn logout_invalidates_the_session_and_is_idempotent() {
    let app = app();
    let (_, cookie) = register(&app, "alice", "pw1").await;

    let (status, _, _) = send(&app, "POST", "/api/logout", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = send(&app, "GET", "/api/user", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Logging out twice is not an error.
    let (status, _, _) = send(&app, "POST", "/api/logout", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn user_endpoint_requires_a_session() {
    let app = app();
    let (status, _, _) = send(&app, "GET", "/api/user", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn metric_lifecycle_matches_the_reference_flow() {
    let app = app();
    let (account, cookie) = register(&app, "alice", "pw1").await;
    assert_eq!(account["id"], 1);

    // Create path requires no session; ids come from the shared counter,
    // so the record id lands above the account id.
    let (status, record, _) = send(
        &app,
        "POST",
        "/api/metrics",
        Some(json!({
            "userId": 1,
            "date": "2024-01-01",
            "metricType": "sprint",
            "value": 11.2,
            "unit": "s"
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["id"], 2);
    assert_eq!(record["userId"], 1);
    assert_eq!(record["metricType"], "sprint");
    assert_eq!(record["date"], "2024-01-01");

    let (status, mine, _) = send(&app, "GET", "/api/metrics", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine.as_array().unwrap().len(), 1);
    assert_eq!(mine[0]["id"], 2);

    // Unknown owner on the debug surface: empty array, no error.
    let (status, empty, _) = send(&app, "GET", "/api/metrics/999", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty, json!([]));
}

#[tokio::test]
async fn listing_own_records_requires_a_session() {
    let app = app();
    for path in ["/api/metrics", "/api/nutrition", "/api/injuries", "/api/finances"] {
        let (status, _, _) = send(&app, "GET", path, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn create_rejects_unknown_owner() {
    let app = app();
    let (status, body, _) = send(
        &app,
        "POST",
        "/api/metrics",
        Some(json!({
            "userId": 999,
            "metricType": "sprint",
            "value": 11.2,
            "unit": "s"
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"], json!(["userId"]));
}

#[tokio::test]
async fn create_names_missing_record_fields() {
    let app = app();
    let (status, body, _) = send(&app, "POST", "/api/injuries", Some(json!({})), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["fields"],
        json!(["userId", "injuryType", "bodyPart", "severity"])
    );
}

#[tokio::test]
async fn records_are_partitioned_per_owner() {
    let app = app();
    let (alice, alice_cookie) = register(&app, "alice", "pw1").await;
    let (bob, bob_cookie) = register(&app, "bob", "pw2").await;

    for (owner, category) in [(&alice, "travel"), (&bob, "equipment")] {
        let (status, _, _) = send(
            &app,
            "POST",
            "/api/finances",
            Some(json!({
                "userId": owner["id"],
                "category": category,
                "amount": 50.0
            })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, alices, _) = send(&app, "GET", "/api/finances", None, Some(&alice_cookie)).await;
    let (_, bobs, _) = send(&app, "GET", "/api/finances", None, Some(&bob_cookie)).await;
    assert_eq!(alices.as_array().unwrap().len(), 1);
    assert_eq!(alices[0]["category"], "travel");
    assert_eq!(bobs.as_array().unwrap().len(), 1);
    assert_eq!(bobs[0]["category"], "equipment");
}

#[tokio::test]
async fn full_record_kinds_accept_their_payloads() {
    let app = app();
    register(&app, "alice", "pw1").await;

    let (status, nutrition, _) = send(
        &app,
        "POST",
        "/api/nutrition",
        Some(json!({
            "userId": 1,
            "mealType": "breakfast",
            "foodItems": "oats, eggs",
            "calories": 540,
            "protein": 32
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(nutrition["mealType"], "breakfast");

    let (status, injury, _) = send(
        &app,
        "POST",
        "/api/injuries",
        Some(json!({
            "userId": 1,
            "injuryType": "sprain",
            "bodyPart": "ankle",
            "severity": "Mild"
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(injury["status"], "Active");

    let (status, finance, _) = send(
        &app,
        "POST",
        "/api/finances",
        Some(json!({
            "userId": 1,
            "category": "sponsorship",
            "amount": 1500.0,
            "isIncome": true
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(finance["isIncome"], true);
}

#[tokio::test]
async fn nutrition_analyze_rejects_blank_input_before_calling_the_model() {
    let model = ScriptedModel::new(r#"{"calories": 1, "protein": 1, "confidence": 1}"#);
    let app = app_with_model(model.clone());

    for body in [json!({ "foodItems": "" }), json!({ "foodItems": "   " }), json!({})] {
        let (status, reply, _) = send(&app, "POST", "/api/nutrition/analyze", Some(body), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply["fields"], json!(["foodItems"]));
    }
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn nutrition_analyze_clamps_model_output() {
    let model = ScriptedModel::new(r#"{"calories": -512.4, "protein": 41.6, "confidence": 1.7}"#);
    let app = app_with_model(model);

    let (status, estimate, _) = send(
        &app,
        "POST",
        "/api/nutrition/analyze",
        Some(json!({ "foodItems": "mystery shake" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(estimate, json!({ "calories": 0, "protein": 42, "confidence": 1.0 }));
}

#[tokio::test]
async fn advisory_relays_the_parsed_model_reply() {
    let model = ScriptedModel::new(
        r#"{"advice": "taper this week", "suggestedActions": ["sleep more"], "confidence": 0.8}"#,
    );
    let app = app_with_model(model);

    let (status, advice, _) = send(
        &app,
        "POST",
        "/api/ai-coach/advice",
        Some(json!({ "question": "How do I peak for nationals?" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(advice["advice"], "taper this week");
    assert_eq!(advice["suggestedActions"], json!(["sleep more"]));
}

#[tokio::test]
async fn advisory_failure_surfaces_as_500_without_side_effects() {
    let app = app();
    register(&app, "alice", "pw1").await;

    let (status, body, _) = send(
        &app,
        "POST",
        "/api/ai-coach/advice",
        Some(json!({ "question": "anything" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("upstream model exploded"));

    // Failure must not write records.
    let (_, metrics, _) = send(&app, "GET", "/api/metrics/1", None, None).await;
    assert_eq!(metrics, json!([]));
}

#[tokio::test]
async fn advisory_rejects_unparseable_model_replies() {
    let model = ScriptedModel::new("sorry, I can only answer in prose");
    let app = app_with_model(model);

    let (status, body, _) = send(
        &app,
        "POST",
        "/api/ai-coach/training-plan",
        Some(json!({ "level": "intermediate", "goals": "sub-40 10k" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().contains("unparseable"));
}
