pub mod learning_prompt;
