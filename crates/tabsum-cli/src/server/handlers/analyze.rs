//! Upload analysis handler.

use axum::extract::{Multipart, State};
use axum::Json;
use tabsum::AnalysisResult;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Analyze an uploaded delimited file.
///
/// Expects a multipart form with a `file` field carrying both the filename
/// and the content. The upload lives only for the duration of this request.
pub async fn analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or_else(|| ApiError::BadRequest("upload has no filename".to_string()))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("failed to read upload: {}", e)))?;

        let result = state.analyzer.analyze_bytes(&filename, &bytes)?;

        tracing::info!(
            filename = %result.filename,
            rows = result.rows,
            cols = result.cols,
            "analyzed upload"
        );

        return Ok(Json(result));
    }

    Err(ApiError::BadRequest(
        "multipart field 'file' is required".to_string(),
    ))
}
