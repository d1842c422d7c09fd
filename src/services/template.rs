//! services/template.rs
//! Strict `{name}` substitution for campaign message templates.
//!
//! `{{` and `}}` produce literal braces. Every other `{...}` must name one of
//! the supplied values, otherwise rendering fails instead of passing the token
//! through.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unsupported placeholder '{{{0}}}'")]
    UnknownPlaceholder(String),
    #[error("unclosed '{{' in template")]
    UnclosedBrace,
    #[error("single '}}' encountered in template")]
    UnmatchedClosingBrace,
}

pub fn render(template: &str, values: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') | None => return Err(TemplateError::UnclosedBrace),
                        Some(ch) => name.push(ch),
                    }
                }
                let value = values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .ok_or(TemplateError::UnknownPlaceholder(name))?;
                out.push_str(value);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(TemplateError::UnmatchedClosingBrace),
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Prefix cut on character boundaries, not bytes.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_pos, _)) => text[..byte_pos].to_string(),
        None => text.to_string(),
    }
}
