//! Best-effort JSON extraction from model output.
//!
//! Models routinely wrap JSON in markdown fences or surround it with prose.
//! `extract_json` strips fences and returns the first balanced top-level
//! `{...}` block; failure to find one is a `MalformedResponse`.

use serde::de::DeserializeOwned;

use crate::error::{LlmError, LlmResult};

/// Extract the first top-level JSON object from `text`.
pub fn extract_json(text: &str) -> LlmResult<&str> {
    let text = strip_fences(text.trim());

    let start = text
        .find('{')
        .ok_or_else(|| LlmError::malformed("no JSON object in response"))?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&text[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }

    Err(LlmError::malformed("unbalanced JSON object in response"))
}

/// Extract and deserialize the first top-level JSON object in `text`.
pub fn parse_json_response<T: DeserializeOwned>(text: &str) -> LlmResult<T> {
    let json = extract_json(text)?;
    serde_json::from_str(json).map_err(|e| LlmError::malformed(e.to_string()))
}

/// Strip a leading markdown fence (```json or ```) and a trailing ```.
fn strip_fences(text: &str) -> &str {
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_object() {
        assert_eq!(extract_json(r#"{"a": 1}"#).unwrap(), r#"{"a": 1}"#);
    }

    #[test]
    fn test_fenced_object() {
        let fenced = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json(fenced).unwrap(), r#"{"a": 1}"#);
    }

    #[test]
    fn test_fence_without_language_tag() {
        let fenced = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(fenced).unwrap(), r#"{"a": 1}"#);
    }

    #[test]
    fn test_surrounding_prose() {
        let text = "Here is the script you asked for:\n{\"a\": {\"b\": 2}}\nHope this helps!";
        assert_eq!(extract_json(text).unwrap(), r#"{"a": {"b": 2}}"#);
    }

    #[test]
    fn test_braces_inside_strings_ignored() {
        let text = r#"{"dialogue": "set {x} to }"}"#;
        assert_eq!(extract_json(text).unwrap(), text);
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let text = r#"{"a": "he said \"}\" loudly"}"#;
        assert_eq!(extract_json(text).unwrap(), text);
    }

    #[test]
    fn test_no_object_is_malformed() {
        let err = extract_json("sorry, I can't do that").unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));
    }

    #[test]
    fn test_unbalanced_is_malformed() {
        let err = extract_json(r#"{"a": 1"#).unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));
    }

    #[test]
    fn test_fenced_and_bare_parse_identically() {
        #[derive(serde::Deserialize, PartialEq, Debug)]
        struct S {
            a: u32,
        }
        let bare: S = parse_json_response(r#"{"a": 7}"#).unwrap();
        let fenced: S = parse_json_response("```json\n{\"a\": 7}\n```").unwrap();
        assert_eq!(bare, fenced);
    }
}
