use axum::http::StatusCode;
use axum::Json;
use contracts::system::vitals::VitalsReport;

use crate::shared::error::AppError;

/// POST /api/vitals
pub async fn report(Json(report): Json<VitalsReport>) -> Result<StatusCode, AppError> {
    if !report.is_plausible() {
        return Err(AppError::ImplausibleVitals(report.path));
    }

    tracing::info!(
        target: "vitals",
        path = %report.path,
        ttfb_ms = report.ttfb_ms,
        dom_content_loaded_ms = report.dom_content_loaded_ms,
        load_ms = report.load_ms,
        "page load timing"
    );
    Ok(StatusCode::NO_CONTENT)
}
