//! Address scanner.
//!
//! A single left-to-right pass over the input's code points drives a
//! finite-state machine through the local part, the `@` separator and the
//! domain. Comments (`(...)`) are skipped wherever a new atom could start,
//! and bracketed domain literals are read whole and classified as IPv4 or
//! IPv6.
//!
//! ```text
//! LocalStart ──atext──→ LocalPart ──'.'──→ LocalStart
//!     │                     │
//!    '"'                   '@'──────────────→ DomainStart ──'['──→ DomainLiteralTrailer
//!     ↓                                          │
//! QuotedString ──'"'──→ QuotedStringAfterQuote  alnum
//!   ↑     │                 │  '.' → LocalStart  ↓
//!   │    '\'                └─ '@' → DomainStart DomainPart ←─alnum── DomainPartAfterSeparator
//!   │     ↓                                        └──'.' or '-'──→──────┘
//!   └─ QuotedStringEscaped
//! ```

mod cursor;

use std::fmt;

use crate::charset::{is_domain_char, is_local_char};
use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::literal::DomainLiteral;

use cursor::Cursor;

/// Scanner state.
///
/// The `Reject` state is represented by the [`Error`] returned from a
/// transition; it is absorbing, so the scan stops there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// First character of a dot-atom segment in the local part.
    LocalStart,
    /// Inside a dot-atom segment.
    LocalPart,
    /// First character of the domain.
    DomainStart,
    /// Inside a domain label.
    DomainPart,
    /// Just read a `.` or `-` in the domain.
    DomainPartAfterSeparator,
    /// Inside a quoted local part.
    QuotedString,
    /// Just closed a quoted local part.
    QuotedStringAfterQuote,
    /// Just read a `\` inside a quoted local part.
    QuotedStringEscaped,
    /// After a valid domain literal; only comments may follow.
    DomainLiteralTrailer,
}

impl State {
    /// Returns true if the scan may end in this state.
    #[must_use]
    pub const fn is_accepting(self) -> bool {
        matches!(self, Self::DomainPart | Self::DomainLiteralTrailer)
    }

    /// Returns true if this state belongs to the local part.
    #[must_use]
    pub const fn is_local(self) -> bool {
        matches!(
            self,
            Self::LocalStart
                | Self::LocalPart
                | Self::QuotedString
                | Self::QuotedStringAfterQuote
                | Self::QuotedStringEscaped
        )
    }

    /// Returns true if a comment may open in this state.
    const fn allows_comment(self) -> bool {
        matches!(
            self,
            Self::LocalStart
                | Self::LocalPart
                | Self::DomainStart
                | Self::DomainPart
                | Self::DomainLiteralTrailer
        )
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::LocalStart => "start of local part",
            Self::LocalPart => "local part",
            Self::DomainStart => "start of domain",
            Self::DomainPart => "domain label",
            Self::DomainPartAfterSeparator => "after domain separator",
            Self::QuotedString => "quoted string",
            Self::QuotedStringAfterQuote => "after closing quote",
            Self::QuotedStringEscaped => "quoted-pair",
            Self::DomainLiteralTrailer => "after domain literal",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of a successful scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    /// Byte offset of the `@` separating local part and domain.
    pub separator: usize,
    /// Code points in the local part, comments excluded.
    pub local_len: usize,
    /// Domain literal, if the domain was one.
    pub literal: Option<DomainLiteral>,
}

struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: State,
    local_len: usize,
    separator: Option<usize>,
    literal: Option<DomainLiteral>,
}

impl<'a> Scanner<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            state: State::LocalStart,
            local_len: 0,
            separator: None,
            literal: None,
        }
    }

    fn run(mut self, limits: &Limits) -> Result<Scan> {
        while let Some((offset, ch)) = self.cursor.next() {
            self.state = self.step(offset, ch)?;
        }

        if !self.state.is_accepting() {
            return Err(Error::Incomplete { state: self.state });
        }
        if self.local_len > limits.max_local_part_len {
            return Err(Error::LocalPartTooLong {
                len: self.local_len,
                max: limits.max_local_part_len,
            });
        }

        // Every accepting state is past the separator.
        let Some(separator) = self.separator else {
            return Err(Error::Incomplete { state: self.state });
        };
        Ok(Scan {
            separator,
            local_len: self.local_len,
            literal: self.literal,
        })
    }

    /// Consumes `ch` (and, for comments and literals, what follows it).
    fn step(&mut self, offset: usize, ch: char) -> Result<State> {
        use State::{
            DomainLiteralTrailer, DomainPart, DomainPartAfterSeparator, DomainStart, LocalPart,
            LocalStart, QuotedString, QuotedStringAfterQuote, QuotedStringEscaped,
        };

        let next = match (self.state, ch) {
            (state, '(') if state.allows_comment() => {
                self.cursor.skip_comment(offset)?;
                state
            }

            // Local part
            (LocalStart, '"') => self.push_local(QuotedString),
            (LocalStart | LocalPart, c) if is_local_char(c) => self.push_local(LocalPart),
            (LocalPart | QuotedStringAfterQuote, '.') => self.push_local(LocalStart),
            (LocalPart | QuotedStringAfterQuote, '@') => {
                self.separator = Some(offset);
                DomainStart
            }
            (QuotedString, '\\') => self.push_local(QuotedStringEscaped),
            (QuotedString, '"') => self.push_local(QuotedStringAfterQuote),
            (QuotedString, _) => self.push_local(QuotedString),
            (QuotedStringEscaped, '\\' | '"') => self.push_local(QuotedString),
            (QuotedStringEscaped, found) => return Err(Error::InvalidEscape { found, offset }),

            // Domain
            (DomainStart, '[') => {
                let interior = self.cursor.read_domain_literal();
                self.literal = Some(DomainLiteral::parse(interior)?);
                DomainLiteralTrailer
            }
            (DomainStart | DomainPart | DomainPartAfterSeparator, c) if is_domain_char(c) => {
                DomainPart
            }
            (DomainPart, '.') | (DomainPart | DomainPartAfterSeparator, '-') => {
                DomainPartAfterSeparator
            }

            (state, found) => {
                return Err(Error::UnexpectedChar {
                    found,
                    offset,
                    state,
                });
            }
        };
        Ok(next)
    }

    const fn push_local(&mut self, next: State) -> State {
        self.local_len += 1;
        next
    }
}

/// Validates `input` against the given limits.
///
/// # Errors
///
/// Returns the reason the input was rejected.
pub fn validate_with(input: &str, limits: &Limits) -> Result<Scan> {
    let result = scan(input, limits);
    match &result {
        Ok(scan) => tracing::trace!(input, separator = scan.separator, "address accepted"),
        Err(error) => tracing::trace!(input, %error, "address rejected"),
    }
    result
}

fn scan(input: &str, limits: &Limits) -> Result<Scan> {
    if input.is_empty() {
        return Err(Error::Empty);
    }
    if input.len() > limits.max_address_len {
        return Err(Error::TooLong {
            len: input.len(),
            max: limits.max_address_len,
        });
    }
    Scanner::new(input).run(limits)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn check(input: &str) -> Result<Scan> {
        validate_with(input, &Limits::default())
    }

    #[test]
    fn test_simple() {
        let scan = check("first.last@iana.org").unwrap();
        assert_eq!(scan.separator, 10);
        assert_eq!(scan.local_len, 10);
        assert_eq!(scan.literal, None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(check(""), Err(Error::Empty));
    }

    #[test]
    fn test_too_long_checked_first() {
        let input = " ".repeat(255);
        assert_eq!(check(&input), Err(Error::TooLong { len: 255, max: 254 }));
    }

    #[test]
    fn test_comments_not_counted() {
        let scan = check("(comment)ab(comment)@iana.org").unwrap();
        assert_eq!(scan.local_len, 2);
        assert_eq!(scan.separator, 20);
    }

    #[test]
    fn test_quotes_counted() {
        let scan = check(r#""a b"@iana.org"#).unwrap();
        assert_eq!(scan.local_len, 5);
    }

    #[test]
    fn test_double_dot() {
        assert_eq!(
            check("john..doe@example.com"),
            Err(Error::UnexpectedChar {
                found: '.',
                offset: 5,
                state: State::LocalStart,
            })
        );
    }

    #[test]
    fn test_trailing_domain_dot() {
        assert_eq!(
            check("user@example."),
            Err(Error::Incomplete {
                state: State::DomainPartAfterSeparator,
            })
        );
    }

    #[test]
    fn test_no_domain() {
        assert_eq!(
            check("local@(comment)"),
            Err(Error::Incomplete {
                state: State::DomainStart,
            })
        );
    }

    #[test]
    fn test_comment_only_local() {
        assert!(matches!(
            check("(comment)@sada.com"),
            Err(Error::UnexpectedChar {
                found: '@',
                state: State::LocalStart,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_escape() {
        assert_eq!(
            check(r#""a\b"@iana.org"#),
            Err(Error::InvalidEscape {
                found: 'b',
                offset: 3,
            })
        );
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(
            check(r#""abc@iana.org"#),
            Err(Error::Incomplete {
                state: State::QuotedString,
            })
        );
    }

    #[test]
    fn test_unterminated_comment_after_domain() {
        assert_eq!(
            check("user@iana.org(comment"),
            Err(Error::UnterminatedComment { offset: 13 })
        );
    }

    #[test]
    fn test_comment_not_allowed_after_separator() {
        assert!(matches!(
            check("user@iana.(comment)org"),
            Err(Error::UnexpectedChar {
                found: '(',
                state: State::DomainPartAfterSeparator,
                ..
            })
        ));
    }

    #[test]
    fn test_comment_not_allowed_after_quote() {
        assert!(check(r#""a"(comment)@iana.org"#).is_err());
    }

    #[test]
    fn test_domain_literal() {
        let scan = check("user@[IPv6:2001:db8::1](comment)").unwrap();
        assert!(matches!(scan.literal, Some(DomainLiteral::Ipv6(_))));
    }

    #[test]
    fn test_domain_literal_closed_by_end_of_input() {
        let scan = check("user@[1.2.3.4").unwrap();
        assert!(matches!(scan.literal, Some(DomainLiteral::Ipv4(_))));
        assert!(check("user@[IPv6:2001:db8::1").is_ok());
        assert_eq!(check("user@["), Err(Error::InvalidIpLiteral(String::new())));
        assert!(check("user@[666.666.666.666").is_err());
    }

    #[test]
    fn test_comment_inside_domain() {
        assert!(check("user@iana.org(comment)").is_ok());
        assert!(check("user@iana(c).org").is_ok());
    }

    #[test]
    fn test_literal_trailing_garbage() {
        assert!(matches!(
            check("user@[127.0.0.1](comment)example.com"),
            Err(Error::UnexpectedChar {
                found: 'e',
                state: State::DomainLiteralTrailer,
                ..
            })
        ));
    }

    #[test]
    fn test_literal_only_at_domain_start() {
        assert!(check("user@a[127.0.0.1]").is_err());
    }

    #[test]
    fn test_hyphen_runs() {
        assert!(check("user@a--b.com").is_ok());
        assert!(check("user@a.-b.com").is_ok());
        assert!(check("user@a-.com").is_err());
        assert!(check("user@-a.com").is_err());
        assert!(check("user@a-").is_err());
    }

    #[test]
    fn test_local_part_cap() {
        let local = "a".repeat(64);
        assert!(check(&format!("{local}@iana.org")).is_ok());
        assert_eq!(
            check(&format!("a{local}@iana.org")),
            Err(Error::LocalPartTooLong { len: 65, max: 64 })
        );
    }

    #[test]
    fn test_local_part_cap_counts_code_points() {
        let local = "é".repeat(64);
        assert!(check(&format!("{local}@iana.org")).is_ok());
    }

    #[test]
    fn test_custom_limits() {
        let limits = Limits::new().with_max_local_part_len(3);
        assert!(validate_with("abc@iana.org", &limits).is_ok());
        assert!(validate_with("abcd@iana.org", &limits).is_err());

        let limits = Limits::new().with_max_address_len(10);
        assert!(validate_with("a@iana.org", &limits).is_ok());
        assert!(validate_with("ab@iana.org", &limits).is_err());
    }

    #[test]
    fn test_state_flags() {
        assert!(State::DomainPart.is_accepting());
        assert!(State::DomainLiteralTrailer.is_accepting());
        assert!(!State::DomainStart.is_accepting());
        assert!(State::QuotedStringEscaped.is_local());
        assert!(!State::DomainPart.is_local());
    }
}
