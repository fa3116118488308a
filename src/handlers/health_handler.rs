use actix_web::{get, HttpResponse};

use crate::models::dto::response::{HealthResponse, RootResponse};

#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(RootResponse {
        message: "Smart Video Learning Tool API".to_string(),
        status: "running".to_string(),
        endpoints: vec![
            "POST /process-video".to_string(),
            "POST /process-transcript".to_string(),
            "GET /health".to_string(),
        ],
    })
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
