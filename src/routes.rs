use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::error::LlmError;
use crate::page::{self, FormValues, PageState};
use crate::state::AppState;
use crate::translate::{TargetLanguage, TranslateRequest, TranslateResponse};

const EMPTY_INPUT_WARNING: &str = "Please enter some text to translate.";

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // HTML form
        .route("/", get(index))
        .route("/translate", post(submit_translation))

        // JSON API
        .route("/api/health", get(health_check))
        .route("/api/languages", get(list_languages))
        .route("/api/translate", post(api_translate))
}

/// The complete application with middleware, ready to serve.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct TranslateForm {
    #[serde(default)]
    text: String,
    #[serde(default)]
    target_lang: String,
}

fn render_page(status: StatusCode, state: PageState, form: &FormValues) -> (StatusCode, Html<String>) {
    (status, Html(page::render(&state, form)))
}

async fn index() -> Html<String> {
    Html(page::render(&PageState::Idle, &FormValues::default()))
}

async fn submit_translation(
    State(state): State<AppState>,
    Form(form): Form<TranslateForm>,
) -> (StatusCode, Html<String>) {
    let target = match form.target_lang.parse::<TargetLanguage>() {
        Ok(target) => target,
        Err(e) => {
            warn!("Rejected form submission: {}", e);
            let values = FormValues {
                text: form.text,
                target_lang: TargetLanguage::default(),
            };
            return render_page(
                StatusCode::BAD_REQUEST,
                PageState::Warning("Please choose one of the listed languages.".to_string()),
                &values,
            );
        }
    };

    let values = FormValues {
        text: form.text,
        target_lang: target,
    };

    if values.text.trim().is_empty() {
        return render_page(
            StatusCode::OK,
            PageState::Warning(EMPTY_INPUT_WARNING.to_string()),
            &values,
        );
    }

    match state.translator.translate(&values.text, target).await {
        Ok(text) => render_page(StatusCode::OK, PageState::Translated { target, text }, &values),
        Err(e) => render_page(StatusCode::BAD_GATEWAY, PageState::Failed(e.to_string()), &values),
    }
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.config.llm_config.llm_provider,
        "model": state.translator.model()
    }))
}

async fn list_languages() -> Json<Value> {
    let labels: Vec<&str> = TargetLanguage::ALL.iter().map(|l| l.label()).collect();
    Json(json!(labels))
}

async fn api_translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<Value>)> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("Rejected API request: {}", rejection.body_text());
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": rejection.body_text()})),
        )
    })?;

    let target = payload.target_lang.parse::<TargetLanguage>().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": e.to_string()})),
        )
    })?;

    if payload.text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": EMPTY_INPUT_WARNING})),
        ));
    }

    let translated_text = state
        .translator
        .translate(&payload.text, target)
        .await
        .map_err(upstream_error)?;

    Ok(Json(TranslateResponse {
        translated_text,
        target_lang: target,
    }))
}

fn upstream_error(e: LlmError) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({"error": e.to_string()})),
    )
}
