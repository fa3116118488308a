pub mod health_handler;
pub mod learning_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{health_check, root};
pub use learning_handler::{process_transcript, process_video};

/// Routes body decoding failures through the structured error response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
