//! Normalising user-typed text before it goes into a template.

/// Whitespace a browser form's `trim()` strips: ASCII tab/VT/FF/space, line
/// terminators, NBSP, the byte-order mark and the other space separators.
///
/// Unlike `char::is_whitespace` this keeps U+0085 and drops U+FEFF.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Value with form whitespace stripped from both ends.
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Trimmed text split at each line break (`\r\n` or `\n`).
///
/// Always yields at least one line, possibly empty.
pub fn note_lines(value: &str) -> Vec<&str> {
    trim_value(value)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
