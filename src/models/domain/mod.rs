pub mod learning_materials;
pub mod lenient;
pub mod quiz_question;
pub mod transcript;
pub use learning_materials::{LearningContent, LearningMaterials, RawLearningMaterials};
pub use lenient::{describe_json, Lenient};
pub use quiz_question::{QuizQuestion, RawQuizQuestion};
pub use transcript::{CaptionSegment, TranscriptBundle, VideoMetadata};
