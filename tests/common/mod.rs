// In-process stand-in for the Spotify accounts/API services and a Discord webhook
#![allow(dead_code, missing_docs)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use radarcast::config::Settings;
use radarcast::radar::{ConfigBuilder, ReleaseRadar};
use reqwest::Client;
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";
pub const PLAYLIST_ID: &str = "37i9dQZEVXbpvPPlKXkJ3x";

pub struct FakeServices {
    pub token_status: StatusCode,
    pub playlist_status: StatusCode,
    pub webhook_status: StatusCode,
    pub page: Value,
    pub webhook_delay: Option<Duration>,

    pub token_hits: AtomicUsize,
    pub playlist_hits: AtomicUsize,
    pub webhook_hits: AtomicUsize,
    pub webhooks_in_flight: AtomicUsize,
    pub max_webhooks_in_flight: AtomicUsize,
    pub token_form: Mutex<Option<HashMap<String, String>>>,
    pub authorization: Mutex<Option<String>>,
    pub requested_playlist: Mutex<Option<String>>,
    pub webhook_content_type: Mutex<Option<String>>,
    pub webhook_body: Mutex<Option<Value>>,
}

impl FakeServices {
    pub fn new(items: Vec<Value>) -> Self {
        FakeServices {
            token_status: StatusCode::OK,
            playlist_status: StatusCode::OK,
            webhook_status: StatusCode::NO_CONTENT,
            page: page(items, None),
            webhook_delay: None,
            token_hits: AtomicUsize::new(0),
            playlist_hits: AtomicUsize::new(0),
            webhook_hits: AtomicUsize::new(0),
            webhooks_in_flight: AtomicUsize::new(0),
            max_webhooks_in_flight: AtomicUsize::new(0),
            token_form: Mutex::new(None),
            authorization: Mutex::new(None),
            requested_playlist: Mutex::new(None),
            webhook_content_type: Mutex::new(None),
            webhook_body: Mutex::new(None),
        }
    }

    pub fn hits(&self) -> (usize, usize, usize) {
        (
            self.token_hits.load(Ordering::SeqCst),
            self.playlist_hits.load(Ordering::SeqCst),
            self.webhook_hits.load(Ordering::SeqCst),
        )
    }

    pub fn webhook_body(&self) -> Value {
        self.webhook_body
            .lock()
            .unwrap()
            .clone()
            .expect("webhook was not called")
    }
}

pub fn page(items: Vec<Value>, next: Option<&str>) -> Value {
    json!({
        "href": "https://api.spotify.com/v1/playlists/x/tracks?offset=0&limit=100",
        "limit": 100,
        "next": next,
        "offset": 0,
        "previous": null,
        "total": items.len(),
        "items": items,
    })
}

pub fn entry(name: &str, artists: &[&str]) -> Value {
    let artists: Vec<_> = artists
        .iter()
        .map(|a| json!({ "id": format!("id-{a}"), "name": a }))
        .collect();
    json!({
        "added_at": "2024-01-05T00:00:00Z",
        "added_by": { "id": "spotify" },
        "is_local": false,
        "track": {
            "id": format!("id-{name}"),
            "name": name,
            "artists": artists,
            "external_urls": { "spotify": format!("https://open.spotify.com/track/{name}") },
            "album": {
                "images": [
                    { "url": format!("https://i.scdn.co/{name}/640"), "height": 640, "width": 640 },
                    { "url": format!("https://i.scdn.co/{name}/300"), "height": 300, "width": 300 }
                ]
            }
        }
    })
}

async fn token(
    State(fake): State<Arc<FakeServices>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    fake.token_hits.fetch_add(1, Ordering::SeqCst);
    *fake.token_form.lock().unwrap() = Some(form);

    if !fake.token_status.is_success() {
        return (fake.token_status, r#"{"error":"invalid_client"}"#).into_response();
    }
    Json(json!({ "access_token": TOKEN, "token_type": "Bearer", "expires_in": 3600 }))
        .into_response()
}

async fn playlist_tracks(
    State(fake): State<Arc<FakeServices>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    fake.playlist_hits.fetch_add(1, Ordering::SeqCst);
    *fake.requested_playlist.lock().unwrap() = Some(id);
    *fake.authorization.lock().unwrap() = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    if !fake.playlist_status.is_success() {
        return (fake.playlist_status, "Invalid playlist Id").into_response();
    }
    Json(fake.page.clone()).into_response()
}

async fn webhook(
    State(fake): State<Arc<FakeServices>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    fake.webhook_hits.fetch_add(1, Ordering::SeqCst);
    *fake.webhook_content_type.lock().unwrap() = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *fake.webhook_body.lock().unwrap() = Some(body);

    let in_flight = fake.webhooks_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    fake.max_webhooks_in_flight.fetch_max(in_flight, Ordering::SeqCst);
    if let Some(delay) = fake.webhook_delay {
        tokio::time::sleep(delay).await;
    }
    fake.webhooks_in_flight.fetch_sub(1, Ordering::SeqCst);

    if !fake.webhook_status.is_success() {
        return (fake.webhook_status, "Unknown Webhook").into_response();
    }
    fake.webhook_status.into_response()
}

/// Serve `fake` on a random local port and return settings pointing at it.
pub async fn serve(fake: Arc<FakeServices>) -> Settings {
    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/playlists/{id}/tracks", get(playlist_tracks))
        .route("/webhook", post(webhook))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Settings::new(
        "client-id",
        "client-secret",
        PLAYLIST_ID,
        format!("http://{addr}/webhook"),
    )
    .with_endpoints(format!("http://{addr}/api/token"), format!("http://{addr}/v1"))
}

pub async fn radar(fake: Arc<FakeServices>) -> ReleaseRadar {
    let settings = serve(fake).await;
    radar_with(settings, Client::new())
}

pub fn radar_with(settings: Settings, http: Client) -> ReleaseRadar {
    let config = ConfigBuilder::new()
        .settings(settings)
        .http_client(http)
        .build()
        .unwrap();
    ReleaseRadar::new(config)
}

/// Yield until `done` holds, giving the runtime a chance to drive socket I/O.
pub async fn wait_for(done: impl Fn() -> bool) {
    let deadline = std::time::Instant::now() + Duration::from_secs(10);
    while !done() {
        assert!(
            std::time::Instant::now() < deadline,
            "condition not reached in time"
        );
        tokio::task::yield_now().await;
    }
}
