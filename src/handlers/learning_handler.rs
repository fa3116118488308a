use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::{TranscriptRequestDto, VideoRequestDto},
};

#[post("/process-video")]
pub async fn process_video(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<VideoRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    let request = request.into_inner();
    request.validate()?;

    log::info!("[{}] Processing video {}", request_id, request.youtube_url);
    let materials = state
        .learning_service
        .process_video_reference(&request.youtube_url)
        .await
        .inspect_err(|e| log::error!("[{}] Video processing failed: {}", request_id, e))?;

    log::info!(
        "[{}] Generated materials for '{}'",
        request_id,
        materials.video_title
    );
    Ok(HttpResponse::Ok().json(materials))
}

#[post("/process-transcript")]
pub async fn process_transcript(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<TranscriptRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "[{}] Processing transcript '{}' ({} characters)",
        request_id,
        request.video_title,
        request.transcript.chars().count()
    );
    let materials = state
        .learning_service
        .process_raw_transcript(&request.transcript, &request.video_title)
        .await
        .inspect_err(|e| log::error!("[{}] Transcript processing failed: {}", request_id, e))?;

    Ok(HttpResponse::Ok().json(materials))
}
