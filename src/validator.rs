//! Single-pass syntax check for semantic version strings.
//!
//! The scanner walks the input once, left to right, and moves between named
//! states (`Prefix`, `Major`, `Minor`, `Patch`, `Prerelease`, `Build`). Each
//! state consumes its own segment and hands over to the next one; a rejection
//! ends the walk immediately and nothing after it is looked at.
//!
//! Grammar (after an optional recognized prefix):
//!
//! ```text
//! version    := number "." number "." number [ "-" prerelease ] [ "+" build ]
//! number     := "0" | nonzero-digit *digit
//! prerelease := ident ( "." ident )*
//! ident      := 1*( digit | ALPHA | "-" )    ; all-digit idents: no leading zero
//! build      := 1*( digit | ALPHA | "-" | "." )
//! ```

/// Prefix recognized on every call, in addition to caller-supplied ones.
pub const DEFAULT_PREFIX: &str = "v";

/// Reports whether `text` is a valid semantic version.
///
/// Only the `v` prefix is recognized.
///
/// # Example
/// ```
/// assert!(tagver::is_valid("v1.2.3-rc.1+build.5"));
/// assert!(!tagver::is_valid("1.2"));
/// ```
pub fn is_valid(text: &str) -> bool {
    is_valid_with_prefixes::<&str>(text, &[])
}

/// Reports whether `text` is a valid semantic version, allowing either the
/// `v` prefix or exactly one of `prefixes` in front of the numeric core.
///
/// # Example
/// ```
/// assert!(tagver::is_valid_with_prefixes("release-1.2.3", &["release-"]));
/// assert!(!tagver::is_valid_with_prefixes("rel-1.2.3", &["release-"]));
/// ```
pub fn is_valid_with_prefixes<S: AsRef<str>>(text: &str, prefixes: &[S]) -> bool {
    Scanner::new(text, prefixes).run()
}

/// Reports whether `text` is a single well-formed pre-release identifier.
pub fn is_valid_identifier(text: &str) -> bool {
    let mut scanner = Scanner::<&str>::new(text, &[]);
    scanner.identifier() && scanner.peek().is_none()
}

/// Reports whether `text` is well-formed build metadata (the part after `+`).
pub fn is_valid_build(text: &str) -> bool {
    Scanner::<&str>::new(text, &[]).build() == State::Accept
}

/// Position of the first ASCII digit, i.e. where the numeric core starts.
pub(crate) fn core_start(text: &str) -> Option<usize> {
    text.bytes().position(|b| b.is_ascii_digit())
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Prefix,
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
    Accept,
    Reject,
}

struct Scanner<'a, S> {
    bytes: &'a [u8],
    text: &'a str,
    prefixes: &'a [S],
    pos: usize,
}

impl<'a, S: AsRef<str>> Scanner<'a, S> {
    fn new(text: &'a str, prefixes: &'a [S]) -> Self {
        Scanner {
            bytes: text.as_bytes(),
            text,
            prefixes,
            pos: 0,
        }
    }

    fn run(mut self) -> bool {
        let mut state = State::Prefix;
        loop {
            state = match state {
                State::Prefix => self.prefix(),
                State::Major => self.major(),
                State::Minor => self.minor(),
                State::Patch => self.patch(),
                State::Prerelease => self.prerelease(),
                State::Build => self.build(),
                State::Accept => return true,
                State::Reject => return false,
            };
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Everything before the first digit must be a recognized prefix.
    fn prefix(&mut self) -> State {
        let Some(start) = core_start(self.text) else {
            return State::Reject;
        };

        if start > 0 {
            // The first digit is ASCII, so `start` is a char boundary.
            let prefix = &self.text[..start];
            if prefix != DEFAULT_PREFIX && !self.prefixes.iter().any(|p| p.as_ref() == prefix) {
                return State::Reject;
            }
        }

        self.pos = start;
        State::Major
    }

    fn major(&mut self) -> State {
        self.dotted_number(State::Minor)
    }

    fn minor(&mut self) -> State {
        self.dotted_number(State::Patch)
    }

    fn patch(&mut self) -> State {
        if !self.number() {
            return State::Reject;
        }

        match self.peek() {
            None => State::Accept,
            Some(b'-') => {
                self.pos += 1;
                State::Prerelease
            }
            Some(b'+') => {
                self.pos += 1;
                State::Build
            }
            Some(_) => State::Reject,
        }
    }

    fn prerelease(&mut self) -> State {
        loop {
            if !self.identifier() {
                return State::Reject;
            }

            match self.peek() {
                None => return State::Accept,
                Some(b'.') => self.pos += 1,
                Some(b'+') => {
                    self.pos += 1;
                    return State::Build;
                }
                Some(_) => return State::Reject,
            }
        }
    }

    /// Build metadata is checked for its character set only.
    fn build(&mut self) -> State {
        if self.peek().is_none() {
            return State::Reject;
        }

        while let Some(b) = self.peek() {
            if !is_identifier_byte(b) && b != b'.' {
                return State::Reject;
            }
            self.pos += 1;
        }

        State::Accept
    }

    /// MAJOR and MINOR must be followed by a dot; reaching the end is a rejection.
    fn dotted_number(&mut self, next: State) -> State {
        if !self.number() {
            return State::Reject;
        }

        match self.peek() {
            Some(b'.') => {
                self.pos += 1;
                next
            }
            _ => State::Reject,
        }
    }

    /// Consumes a digit run. False when the run is empty or has a leading zero.
    fn number(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }

        let len = self.pos - start;
        len == 1 || (len > 1 && self.bytes[start] != b'0')
    }

    /// Consumes one pre-release identifier, stopping at the first byte outside
    /// `[0-9A-Za-z-]`. False when the identifier is empty or is an all-digit
    /// run with a leading zero.
    fn identifier(&mut self) -> bool {
        let mut len = 0;
        let mut numeric = true;
        let mut leading_zero = false;

        while let Some(b) = self.peek() {
            if !is_identifier_byte(b) {
                break;
            }
            if len == 0 && b == b'0' {
                leading_zero = true;
            }
            if !b.is_ascii_digit() {
                numeric = false;
            }
            len += 1;
            self.pos += 1;
        }

        len > 0 && !(numeric && leading_zero && len > 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    fn scanner_at(text: &str, pos: usize) -> Scanner<'_, &'static str> {
        let mut scanner = Scanner::new(text, NONE);
        scanner.pos = pos;
        scanner
    }

    // Transition tests

    #[test]
    fn test_prefix_state_moves_to_first_digit() {
        let mut scanner = scanner_at("v1.2.3", 0);
        assert_eq!(scanner.prefix(), State::Major);
        assert_eq!(scanner.pos, 1);
    }

    #[test]
    fn test_prefix_state_rejects_unknown_prefix() {
        assert_eq!(scanner_at("x1.2.3", 0).prefix(), State::Reject);
        assert_eq!(scanner_at("vv1.2.3", 0).prefix(), State::Reject);
        assert_eq!(scanner_at("", 0).prefix(), State::Reject);
        assert_eq!(scanner_at("version", 0).prefix(), State::Reject);
    }

    #[test]
    fn test_prefix_state_uses_supplied_prefixes() {
        let prefixes = ["release-"];
        let mut scanner = Scanner::new("release-1.0.0", &prefixes);
        assert_eq!(scanner.prefix(), State::Major);
        assert_eq!(scanner.pos, 8);
    }

    #[test]
    fn test_major_state_requires_dot() {
        let mut scanner = scanner_at("12.0.0", 0);
        assert_eq!(scanner.major(), State::Minor);
        assert_eq!(scanner.pos, 3);

        assert_eq!(scanner_at("12", 0).major(), State::Reject);
        assert_eq!(scanner_at("12-pre", 0).major(), State::Reject);
        assert_eq!(scanner_at(".0.0", 0).major(), State::Reject);
    }

    #[test]
    fn test_major_state_rejects_leading_zero() {
        assert_eq!(scanner_at("01.0.0", 0).major(), State::Reject);
        assert_eq!(scanner_at("0.1.0", 0).major(), State::Minor);
    }

    #[test]
    fn test_minor_state_moves_to_patch() {
        let mut scanner = scanner_at("1.20.3", 2);
        assert_eq!(scanner.minor(), State::Patch);
        assert_eq!(scanner.pos, 5);
        assert_eq!(scanner_at("1.00.3", 2).minor(), State::Reject);
        assert_eq!(scanner_at("1.2", 2).minor(), State::Reject);
    }

    #[test]
    fn test_patch_state_transitions() {
        assert_eq!(scanner_at("1.2.3", 4).patch(), State::Accept);
        assert_eq!(scanner_at("1.2.3-rc", 4).patch(), State::Prerelease);
        assert_eq!(scanner_at("1.2.3+b", 4).patch(), State::Build);
        assert_eq!(scanner_at("1.2.3.4", 4).patch(), State::Reject);
        assert_eq!(scanner_at("1.2.03", 4).patch(), State::Reject);
        assert_eq!(scanner_at("1.2.", 4).patch(), State::Reject);
        assert_eq!(scanner_at("1.2.3a", 4).patch(), State::Reject);
    }

    #[test]
    fn test_prerelease_state_transitions() {
        assert_eq!(scanner_at("alpha.1", 0).prerelease(), State::Accept);
        assert_eq!(scanner_at("alpha.1+meta", 0).prerelease(), State::Build);
        assert_eq!(scanner_at("alpha..1", 0).prerelease(), State::Reject);
        assert_eq!(scanner_at("alpha.", 0).prerelease(), State::Reject);
        assert_eq!(scanner_at("alpha.+meta", 0).prerelease(), State::Reject);
        assert_eq!(scanner_at("", 0).prerelease(), State::Reject);
        assert_eq!(scanner_at("al_pha", 0).prerelease(), State::Reject);
    }

    #[test]
    fn test_prerelease_state_reclassifies_numeric_identifiers() {
        // Starts out looking numeric with a leading zero, then becomes alphanumeric.
        assert_eq!(scanner_at("0456a", 0).prerelease(), State::Accept);
        assert_eq!(scanner_at("0456", 0).prerelease(), State::Reject);
        assert_eq!(scanner_at("0", 0).prerelease(), State::Accept);
        assert_eq!(scanner_at("rc.01", 0).prerelease(), State::Reject);
        assert_eq!(scanner_at("0-0", 0).prerelease(), State::Accept);
    }

    #[test]
    fn test_build_state_is_character_set_only() {
        assert_eq!(scanner_at("meta", 0).build(), State::Accept);
        assert_eq!(scanner_at("a..b", 0).build(), State::Accept);
        assert_eq!(scanner_at("001", 0).build(), State::Accept);
        assert_eq!(scanner_at("", 0).build(), State::Reject);
        assert_eq!(scanner_at("a+b", 0).build(), State::Reject);
        assert_eq!(scanner_at("a_b", 0).build(), State::Reject);
    }

    // Whole-string tests

    #[test]
    fn test_is_valid_table() {
        let cases = [
            ("", false),
            ("0.1.0-alpha.24+sha.19031c2.darwin.amd64", true),
            ("0.1.0-alpha.24+sha.19031c2-darwin-amd64", true),
            ("bad", false),
            ("1-alpha.beta.gamma", false),
            ("1-pre", false),
            ("1+meta", false),
            ("1-pre+meta", false),
            ("1.2-pre", false),
            ("1.2+meta", false),
            ("1.2-pre+meta", false),
            ("1.0.0-alpha", true),
            ("1.0.0-alpha.1", true),
            ("1.0.0-alpha.beta", true),
            ("1.0.0-beta", true),
            ("1.0.0-beta.2", true),
            ("1.0.0-beta.11", true),
            ("1.0.0-rc.1", true),
            ("1", false),
            ("1.0", false),
            ("1.0.0", true),
            ("1.2", false),
            ("1.2.0", true),
            ("1.2.3-456", true),
            ("1.2.3-456.789", true),
            ("1.2.3-456-789", true),
            ("1.2.3-456a", true),
            ("1.2.3-pre", true),
            ("1.2.3-pre+meta", true),
            ("1.2.3-pre.1", true),
            ("1.2.3-zzz", true),
            ("1.2.3", true),
            ("1.2.3+meta", true),
            ("1.2.3+meta-pre", true),
            ("1.2.3+meta-pre.sha.256a", true),
        ];

        for (input, want) in cases {
            assert_eq!(is_valid(input), want, "is_valid({:?})", input);
            let prefixed = format!("v{}", input);
            // "v" alone has no digit and stays invalid.
            assert_eq!(is_valid(&prefixed), want, "is_valid({:?})", prefixed);
        }
    }

    #[test]
    fn test_leading_zeros_in_core() {
        assert!(is_valid("0.0.0"));
        assert!(is_valid("10.20.30"));
        assert!(!is_valid("01.0.0"));
        assert!(!is_valid("1.01.0"));
        assert!(!is_valid("1.0.01"));
        assert!(!is_valid("00.0.0"));
    }

    #[test]
    fn test_prerelease_leading_zero_rule() {
        assert!(is_valid("1.2.3-456a"));
        assert!(!is_valid("1.2.3-0456"));
        assert!(is_valid("1.2.3-0"));
        assert!(is_valid("1.2.3-0a.0"));
        assert!(!is_valid("1.2.3-alpha.00"));
        assert!(!is_valid("1.2.3-00+meta"));
    }

    #[test]
    fn test_empty_segments() {
        assert!(!is_valid("1.2.3-"));
        assert!(!is_valid("1.2.3+"));
        assert!(!is_valid("1.2.3-+meta"));
        assert!(!is_valid("1.2.3-pre+"));
        assert!(!is_valid("1.2.3-.pre"));
        assert!(!is_valid("1.2.3-pre..1"));
        assert!(!is_valid("1..2.3"));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(!is_valid("1.2.3-pre_1"));
        assert!(!is_valid("1.2.3+meta!"));
        assert!(!is_valid("1.2.3 "));
        assert!(!is_valid(" 1.2.3"));
        assert!(!is_valid("1.2.3-ß"));
        assert!(!is_valid("1.2.3+meta+more"));
    }

    #[test]
    fn test_prefixes() {
        assert!(is_valid_with_prefixes("foo1.2.3", &["foo"]));
        assert!(!is_valid_with_prefixes("bar1.2.3", &["foo"]));
        assert!(is_valid_with_prefixes("v1.2.3", &["foo"]));
        assert!(is_valid_with_prefixes("1.2.3", &["foo"]));
        assert!(!is_valid("V1.2.3"));
        assert!(is_valid_with_prefixes("V1.2.3", &["V"]));
    }

    #[test]
    fn test_prefix_must_match_exactly() {
        let prefixes = ["semver", "se"];
        assert!(is_valid_with_prefixes("semver1.2.3", &prefixes));
        assert!(is_valid_with_prefixes("se1.2.3-rc.1", &prefixes));
        assert!(!is_valid_with_prefixes("sem1.2.3", &prefixes));
        assert!(!is_valid_with_prefixes("semver1.2", &prefixes));
        assert!(!is_valid_with_prefixes("semverbad", &prefixes));
    }

    #[test]
    fn test_prefixes_accept_owned_strings() {
        let prefixes = vec!["release-".to_string()];
        assert!(is_valid_with_prefixes("release-2.0.0+ci.7", &prefixes));
    }

    #[test]
    fn test_non_ascii_prefix() {
        assert!(is_valid_with_prefixes("версия1.0.0", &["версия"]));
        assert!(!is_valid("версия1.0.0"));
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("alpha"));
        assert!(is_valid_identifier("0"));
        assert!(is_valid_identifier("x-1"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("01"));
        assert!(!is_valid_identifier("a.b"));
        assert!(!is_valid_identifier("a+b"));
    }

    #[test]
    fn test_is_valid_build() {
        assert!(is_valid_build("sha.19031c2"));
        assert!(is_valid_build("007"));
        assert!(!is_valid_build(""));
        assert!(!is_valid_build("a b"));
    }
}
