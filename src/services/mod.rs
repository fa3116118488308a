pub mod caption_provider;
pub mod completion_provider;
pub mod learning_service;
pub mod metadata_provider;
pub mod normalizer;
pub mod study_material_service;
pub mod transcript_service;
