//! Character classes for the local and domain parts.

/// Returns true if `ch` may appear unquoted in a dot-atom local part.
///
/// RFC 5322 `atext`, extended to every non-ASCII code point.
#[must_use]
pub const fn is_local_char(ch: char) -> bool {
    matches!(
        ch,
        'a'..='z'
            | 'A'..='Z'
            | '0'..='9'
            | '!'
            | '#'
            | '$'
            | '%'
            | '&'
            | '\''
            | '*'
            | '+'
            | '-'
            | '/'
            | '='
            | '?'
            | '^'
            | '_'
            | '`'
            | '{'
            | '|'
            | '}'
            | '~'
    ) || !ch.is_ascii()
}

/// Returns true if `ch` may appear in a domain label.
#[must_use]
pub const fn is_domain_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}
