use once_cell::sync::Lazy;
use regex::Regex;

const FENCE: &str = "```";

// Tab, newline and carriage return are kept here and escaped inside strings later.
static FORBIDDEN_CONTROL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]")
        .expect("FORBIDDEN_CONTROL_CHARS is a valid regex pattern")
});

/// Removes a leading ```` ```lang ```` fence and a trailing ```` ``` ```` fence.
pub fn strip_markdown_fences(text: &str) -> String {
    let mut content = text.trim();

    if let Some(rest) = content.strip_prefix(FENCE) {
        content = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    }
    if let Some(rest) = content.strip_suffix(FENCE) {
        content = rest;
    }

    content.trim().to_string()
}

pub fn scrub_control_characters(text: &str) -> String {
    FORBIDDEN_CONTROL_CHARS.replace_all(text, "").into_owned()
}

/// Escapes raw newlines, carriage returns and tabs that sit inside string
/// literals, leaving structural whitespace between tokens alone.
///
/// Best effort: an unescaped quote inside a value ends the literal early, and
/// whatever follows is then treated as structure. Decoding remains the final check.
pub fn escape_newlines_in_strings(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if !in_string {
            if c == '"' {
                in_string = true;
            }
            out.push(c);
            continue;
        }

        if escaped {
            escaped = false;
            out.push(c);
            continue;
        }

        match c {
            '\\' => {
                escaped = true;
                out.push(c);
            }
            '"' => {
                in_string = false;
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }

    out
}

/// Applies every textual repair, in order, to a raw completion.
pub fn repair_completion(raw: &str) -> String {
    let content = strip_markdown_fences(raw);
    let content = scrub_control_characters(&content);
    escape_newlines_in_strings(&content)
}
