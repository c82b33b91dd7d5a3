//! HTTP route handlers and router assembly.

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, info};

use crate::dashboard;
use crate::db;
use crate::error::{AppError, GENERATION_FAILURE_DETAIL};
use crate::feedback;
use crate::llm::RETRY_FALLBACK;
use crate::models::{DailyEmotion, DashboardQuery, FeedbackResponse, SurveySubmission};
use crate::state::AppState;

/// Build the application router.
///
/// CORS is wide open: the frontend is served from a different origin
/// during development and this service is not a security boundary.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/submit-survey", post(submit_survey))
        .route("/dashboard-data", get(dashboard_data))
        .layer(cors)
        .with_state(state)
}

/// `POST /submit-survey` - persist a submission, then generate feedback.
///
/// The row is stored before the generation call, so a failed or empty
/// completion never loses the response. Generation failures come back
/// as a 500 with a fixed detail message and are not retried.
pub async fn submit_survey(
    State(state): State<AppState>,
    Json(data): Json<SurveySubmission>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let is_anonymous = data.is_anonymous();
    let full_name = data.display_name().to_string();

    let id = db::insert_response(&state.pool, &full_name, is_anonymous, &data).await?;
    info!("Survey response stored with id {id}");
    debug!("Received submission: {data:?}");

    let context = feedback::derive_context(&data.answers());
    let prompt = feedback::build_prompt(
        &full_name,
        &data.gender,
        &data.class_name,
        &context,
        &data.open_ended,
    );

    let outcome = state.llm.generate(&prompt).await;
    if let Err(ref e) = outcome {
        error!("Feedback generation failed for response {id}: {e:#}");
    }

    let feedback = resolve_feedback(outcome)?;
    Ok(Json(FeedbackResponse { feedback }))
}

/// Map the generation outcome to the response body text.
///
/// Blank completions become the fixed retry fallback; failures become
/// the fixed 500 detail. The row written before the call is unaffected
/// either way.
fn resolve_feedback(outcome: anyhow::Result<String>) -> Result<String, AppError> {
    match outcome {
        Ok(text) if text.trim().is_empty() => Ok(RETRY_FALLBACK.to_string()),
        Ok(text) => Ok(text),
        Err(_) => Err(AppError::Generation(GENERATION_FAILURE_DETAIL.to_string())),
    }
}

/// `GET /dashboard-data` - per-day average composite scores over an
/// optional inclusive date range. A pure read with no side effects.
pub async fn dashboard_data(
    State(state): State<AppState>,
    Query(range): Query<DashboardQuery>,
) -> Result<Json<Vec<DailyEmotion>>, AppError> {
    let (start, end) = dashboard::resolve_range(range.start_date, range.end_date, Utc::now());
    debug!("Dashboard query for {start}..{end}");

    let rows = db::responses_between(&state.pool, start, end).await?;
    Ok(Json(dashboard::aggregate_daily(&rows)))
}
