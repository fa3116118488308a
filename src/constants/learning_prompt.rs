use crate::config::ShapeRules;

const SYSTEM_PROMPT_INTRO: &str = "You are an expert educational content analyzer. Generate comprehensive learning materials from video transcripts.";

/// Builds the instruction that pins the completion to the learning-materials JSON shape.
pub fn build_system_prompt(rules: &ShapeRules) -> String {
    let key_point_examples = numbered_items("point", rules.key_points);
    let note_examples = numbered_items("detailed note", rules.target_notes);
    let option_examples = (0..rules.quiz_options)
        .map(|i| format!("\"Option {}\"", (b'A' + (i % 26) as u8) as char))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{intro}

CRITICAL: Return ONLY valid JSON with this exact structure:
{{
  \"summary\": \"{paragraphs} well-written paragraphs separated by a blank line\",
  \"keyPoints\": [{key_point_examples}],
  \"notes\": [{note_examples}],
  \"quiz\": [
    {{
      \"question\": \"Question text?\",
      \"options\": [{option_examples}],
      \"correctAnswer\": \"Option A\"
    }}
  ]
}}

IMPORTANT RULES:
- summary: Must be exactly {paragraphs} paragraphs providing a high-level overview
- keyPoints: Must be exactly {key_points} BRIEF one-line key insights
- notes: Must be exactly {notes} DETAILED study notes, each 2-4 sentences with explanations, context, examples and real-world applications
- quiz: Must be exactly {questions} questions with varied difficulty
- Each quiz question must have exactly {options} distinct options
- correctAnswer MUST be the EXACT text of one of the {options} options (copy it precisely)
- No extra fields, no markdown, just pure JSON",
        intro = SYSTEM_PROMPT_INTRO,
        paragraphs = rules.summary_paragraphs,
        key_points = rules.key_points,
        notes = rules.target_notes,
        questions = rules.quiz_questions,
        options = rules.quiz_options,
    )
}

pub fn build_user_prompt(transcript: &str, video_title: &str, rules: &ShapeRules) -> String {
    format!(
        "Video Title: {video_title}

Transcript:
{transcript}

Generate:
1. A {paragraphs}-paragraph summary (high-level overview of the content)
2. {key_points} key points (brief, one-line insights)
3. {notes} detailed study notes (2-4 sentences each with examples, context and explanations)
4. {questions} multiple-choice quiz questions with {options} options each (varied difficulty)

Return as JSON only.",
        paragraphs = rules.summary_paragraphs,
        key_points = rules.key_points,
        notes = rules.target_notes,
        questions = rules.quiz_questions,
        options = rules.quiz_options,
    )
}

fn numbered_items(label: &str, count: usize) -> String {
    (1..=count)
        .map(|i| format!("\"{} {}\"", label, i))
        .collect::<Vec<_>>()
        .join(", ")
}
