//! Placeholder scanner for output templates.
//!
//! Performs `{name}` substitution in a single left-to-right pass. Unlike a
//! general template engine it never fails: a placeholder the resolver does
//! not know, an empty `{}`, or a `{` without a closing `}` is copied to the
//! output exactly as written. There is no escape syntax, so a template
//! without known tokens comes back byte-for-byte unchanged.
//!
//! Substituted values are never re-scanned.

/// Expand every `{name}` in `template` for which `resolve` returns a value.
///
/// The name is passed to `resolve` verbatim (no trimming).
///
/// # Examples
///
/// ```ignore
/// let out = substitute("{a}-{b}", |name| (name == "a").then(|| "1".to_string()));
/// assert_eq!(out, "1-{b}");
/// ```
pub fn substitute<F>(template: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        // A nested `{` restarts the placeholder, so `{{a}` keeps the first brace literal.
        let close = match after_open.find(['{', '}']) {
            Some(idx) if after_open.as_bytes()[idx] == b'}' => idx,
            Some(idx) => {
                result.push_str(&rest[open..open + 1 + idx]);
                rest = &after_open[idx..];
                continue;
            }
            None => {
                result.push_str(&rest[open..]);
                rest = "";
                break;
            }
        };

        let name = &after_open[..close];
        match resolve(name).filter(|_| !name.is_empty()) {
            Some(value) => result.push_str(&value),
            None => {
                result.push('{');
                result.push_str(name);
                result.push('}');
            }
        }
        rest = &after_open[close + 1..];
    }

    result.push_str(rest);
    result
}
