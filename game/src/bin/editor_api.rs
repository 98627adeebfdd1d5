use std::{
    env,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use engine::editor::{
    HighScoreResponse, ReportScoreRequest, ReportScoreResponse, RunSnapshot, SaveCodeRequest,
    SaveCodeResponse, SourceResponse, StepRequest,
};
use game::editor_api::{EditorApiError, EditorSession};
use game::hiscore::HighScoreStore;

#[derive(Clone)]
struct AppState {
    session: Arc<Mutex<EditorSession>>,
    scores: Arc<HighScoreStore>,
}

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/source", get(get_source).post(save_source))
        .route("/api/highscore", get(get_high_score).post(report_score))
        .route("/api/run/state", get(run_state))
        .route("/api/run/step", post(run_step))
        .route("/api/run/reset", post(run_reset))
        .with_state(state)
        .layer(cors)
}

fn resolve_editor_api_addr<F>(mut get_env: F) -> SocketAddr
where
    F: FnMut(&str) -> Option<String>,
{
    if let Some(addr) = get_env("DASH_EDITOR_API_ADDR").and_then(|v| v.parse().ok()) {
        return addr;
    }

    if let Some(port) = get_env("DASH_EDITOR_API_PORT").and_then(|v| v.parse::<u16>().ok()) {
        return SocketAddr::from(([127, 0, 0, 1], port));
    }

    "127.0.0.1:4600"
        .parse()
        .expect("default editor api listen addr should parse")
}

async fn health() -> &'static str {
    "ok"
}

async fn get_source(State(state): State<AppState>) -> Result<Json<SourceResponse>, (StatusCode, String)> {
    let session = state
        .session
        .lock()
        .expect("editor api session lock should be available");
    match session.source() {
        Ok(code) => Ok(Json(SourceResponse {
            path: session.source_path().display().to_string(),
            code,
        })),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to read game source: {err}"),
        )),
    }
}

// Save failures are reported in-band so the editor can show them next to
// the code instead of handling transport errors.
async fn save_source(
    State(state): State<AppState>,
    Json(payload): Json<SaveCodeRequest>,
) -> Json<SaveCodeResponse> {
    let result = {
        let session = state
            .session
            .lock()
            .expect("editor api session lock should be available");
        session.save_source(&payload.code)
    };

    match result {
        Ok(()) => Json(SaveCodeResponse {
            success: true,
            error: None,
        }),
        Err(err) => Json(SaveCodeResponse {
            success: false,
            error: Some(err.to_string()),
        }),
    }
}

async fn get_high_score(State(state): State<AppState>) -> Json<HighScoreResponse> {
    Json(HighScoreResponse {
        best: state.scores.load(),
    })
}

async fn report_score(
    State(state): State<AppState>,
    Json(payload): Json<ReportScoreRequest>,
) -> Result<Json<ReportScoreResponse>, (StatusCode, String)> {
    match state.scores.record(payload.score) {
        Ok(updated) => Ok(Json(ReportScoreResponse {
            best: state.scores.load(),
            updated,
        })),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to persist high score: {err}"),
        )),
    }
}

async fn run_state(State(state): State<AppState>) -> Json<RunSnapshot> {
    let snapshot = {
        let session = state
            .session
            .lock()
            .expect("editor api session lock should be available");
        session.state()
    };
    Json(snapshot)
}

async fn run_step(
    State(state): State<AppState>,
    Json(payload): Json<StepRequest>,
) -> Result<Json<RunSnapshot>, (StatusCode, String)> {
    let result = {
        let mut session = state
            .session
            .lock()
            .expect("editor api session lock should be available");
        session.step(&payload.action_id)
    };

    match result {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(EditorApiError::UnknownActionId(action_id)) => Err((
            StatusCode::BAD_REQUEST,
            format!("unknown actionId: {action_id}"),
        )),
        Err(err) => Err((StatusCode::INTERNAL_SERVER_ERROR, err.to_string())),
    }
}

async fn run_reset(State(state): State<AppState>) -> Json<RunSnapshot> {
    let snapshot = {
        let mut session = state
            .session
            .lock()
            .expect("editor api session lock should be available");
        session.reset()
    };
    Json(snapshot)
}

#[tokio::main]
async fn main() {
    let state = AppState {
        session: Arc::new(Mutex::new(EditorSession::new(0))),
        scores: Arc::new(HighScoreStore::from_env()),
    };
    let app = router(state);

    let addr = resolve_editor_api_addr(|k| env::var(k).ok());
    println!("editor api listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind editor api");

    axum::serve(listener, app)
        .await
        .expect("serve editor api");
}
