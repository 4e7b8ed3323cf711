//! Prompt template rendering.
//!
//! Persona prompt templates are plain strings with `{user_name}` and
//! `{user_goal}` placeholders. Rendering substitutes both values and
//! fails with `MissingPlaceholder` if the template references anything
//! the caller did not supply. `{{` and `}}` escape literal braces.

use crate::error::{ParleyError, Result};

/// Placeholder name for the user's display name.
pub const PLACEHOLDER_USER_NAME: &str = "user_name";

/// Placeholder name for the user's stated goal.
pub const PLACEHOLDER_USER_GOAL: &str = "user_goal";

/// Renders a prompt template, substituting `{user_name}` and `{user_goal}`.
///
/// # Arguments
///
/// * `template` - The raw prompt template text
/// * `user_name` - Value substituted for `{user_name}`
/// * `user_goal` - Value substituted for `{user_goal}`
///
/// # Errors
///
/// Returns `ParleyError::MissingPlaceholder` if the template references a
/// placeholder other than the two supplied fields. Supplied fields the
/// template does not reference are ignored.
pub fn render(template: &str, user_name: &str, user_goal: &str) -> Result<String> {
    let mut out = String::with_capacity(template.len() + user_name.len() + user_goal.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    name.push(inner);
                }
                if !closed {
                    // Unterminated brace, keep it as literal text
                    out.push('{');
                    out.push_str(&name);
                    continue;
                }
                match name.as_str() {
                    PLACEHOLDER_USER_NAME => out.push_str(user_name),
                    PLACEHOLDER_USER_GOAL => out.push_str(user_goal),
                    _ => return Err(ParleyError::missing_placeholder(name)),
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_both_placeholders() {
        let rendered = render(
            "Hello {user_name}, your goal is: {user_goal}.",
            "Ana",
            "practice interviews",
        )
        .unwrap();
        assert_eq!(rendered, "Hello Ana, your goal is: practice interviews.");
    }

    #[test]
    fn test_render_ignores_unreferenced_fields() {
        let rendered = render("No placeholders here.", "Ana", "anything").unwrap();
        assert_eq!(rendered, "No placeholders here.");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let rendered = render("{user_name} and {user_name}", "Bo", "").unwrap();
        assert_eq!(rendered, "Bo and Bo");
    }

    #[test]
    fn test_render_rejects_unknown_placeholder() {
        let err = render("Hi {user_age}", "Ana", "goal").unwrap_err();
        assert_eq!(
            err,
            ParleyError::missing_placeholder("user_age"),
        );
    }

    #[test]
    fn test_render_escaped_braces() {
        let rendered = render("{{not a placeholder}} for {user_name}", "Ana", "").unwrap();
        assert_eq!(rendered, "{not a placeholder} for Ana");
    }

    #[test]
    fn test_render_unterminated_brace_kept_literal() {
        let rendered = render("broken {user_na", "Ana", "").unwrap();
        assert_eq!(rendered, "broken {user_na");
    }
}
