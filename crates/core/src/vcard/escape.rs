//! Escaping of vCard 3.0 reserved characters.

/// Escapes reserved characters in a free-text property value.
///
/// `\` `,` `;` and newline become `\\` `\,` `\;` and `\n`. A single pass
/// over the input keeps backslashes written by the earlier substitutions
/// from being escaped again.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_text("Alon Gonda"), "Alon Gonda");
    }

    #[test]
    fn escapes_each_reserved_character() {
        assert_eq!(escape_text("a\\b"), "a\\\\b");
        assert_eq!(escape_text("a,b"), "a\\,b");
        assert_eq!(escape_text("a;b"), "a\\;b");
        assert_eq!(escape_text("a\nb"), "a\\nb");
    }

    #[test]
    fn backslash_before_comma_is_not_double_escaped() {
        // `\,` in the input must become `\\` + `\,`, not `\\\,` via a second
        // pass over the freshly written backslash.
        assert_eq!(escape_text("\\,"), "\\\\\\,");
    }

    #[test]
    fn mixed_reserved_characters() {
        assert_eq!(
            escape_text("Smith; Jones, Ltd\nBack\\slash"),
            "Smith\\; Jones\\, Ltd\\nBack\\\\slash"
        );
    }

    #[test]
    fn carriage_return_passes_through() {
        // Only the four reserved characters are touched.
        assert_eq!(escape_text("a\rb"), "a\rb");
    }
}
