//! Pre-release identifiers and their precedence rules
//!
//! A pre-release is the dot-separated list after the `-` in `1.0.0-alpha.1`.
//! Each identifier is either numeric or alphanumeric, and the two kinds never
//! compare equal. Precedence follows semver.org item 11:
//! https://semver.org/#spec-item-11

use crate::error::{Result, TagverError};
use crate::validator;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One dot-separated pre-release identifier.
///
/// Variant order is significant: the derived `Ord` ranks every `Numeric`
/// identifier below every `Alphanumeric` one, numbers compare by value and
/// text compares byte-wise (ASCII order).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    /// A clean numeral such as `0` or `11`
    Numeric(u64),
    /// Any other identifier, kept verbatim
    Alphanumeric(String),
}

impl Identifier {
    /// Classify one identifier taken from version text.
    ///
    /// All-digit identifiers become `Numeric`; anything else is kept as text.
    /// The identifier must satisfy the pre-release grammar.
    pub fn parse(s: &str) -> Result<Self> {
        if !validator::is_valid_identifier(s) {
            return Err(TagverError::identifier(s));
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            s.parse::<u64>()
                .map(Identifier::Numeric)
                .map_err(|_| TagverError::identifier(format!("{} (numeric overflow)", s)))
        } else {
            Ok(Identifier::Alphanumeric(s.to_string()))
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// Length of the textual form in characters
    pub fn len(&self) -> usize {
        match self {
            Identifier::Numeric(n) => n.checked_ilog10().unwrap_or(0) as usize + 1,
            Identifier::Alphanumeric(s) => s.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Identifier::Alphanumeric(s) if s.is_empty())
    }
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Identifier::Numeric(n)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::Alphanumeric(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier::Alphanumeric(s)
    }
}

impl TryFrom<&toml::Value> for Identifier {
    type Error = TagverError;

    fn try_from(value: &toml::Value) -> Result<Self> {
        match value {
            toml::Value::Integer(n) => u64::try_from(*n)
                .map(Identifier::Numeric)
                .map_err(|_| TagverError::identifier(n.to_string())),
            toml::Value::String(s) => Ok(Identifier::Alphanumeric(s.clone())),
            other => Err(TagverError::identifier(other.to_string())),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Alphanumeric(s) => f.write_str(s),
        }
    }
}

/// Ordered pre-release identifiers of a version
///
/// An empty sequence means the version has no pre-release component.
///
/// # Examples
/// - "alpha" -> [Alphanumeric("alpha")]
/// - "beta.11" -> [Alphanumeric("beta"), Numeric(11)]
/// - "" -> []
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prerelease {
    identifiers: Vec<Identifier>,
}

impl Prerelease {
    /// The empty pre-release (a plain release)
    pub const EMPTY: Prerelease = Prerelease {
        identifiers: Vec::new(),
    };

    /// Build a pre-release from typed values, in order.
    ///
    /// Numbers become numeric identifiers and strings are kept verbatim. No
    /// grammar check is performed, so an identifier such as `""` or `"a.b"`
    /// renders to text that does not parse back.
    ///
    /// # Examples
    /// ```
    /// use tagver::domain::{Identifier, Prerelease};
    ///
    /// let pre = Prerelease::new([Identifier::from(0u64), Identifier::from("beta")]);
    /// assert_eq!(pre.to_string(), "0.beta");
    /// ```
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        Prerelease {
            identifiers: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a pre-release from loosely typed values.
    ///
    /// Non-negative integers become numeric identifiers and strings are kept
    /// verbatim. Any other value fails with `InvalidIdentifier`.
    pub fn from_values(values: &[toml::Value]) -> Result<Self> {
        let identifiers = values
            .iter()
            .map(Identifier::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Prerelease { identifiers })
    }

    /// Parse the text after the `-` of a version. `""` is the empty pre-release.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// Three-way precedence comparison, same as `Ord::cmp`.
    pub fn compare(&self, other: &Prerelease) -> Ordering {
        self.cmp(other)
    }
}

impl FromStr for Prerelease {
    type Err = TagverError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Prerelease::EMPTY);
        }

        let identifiers = s
            .split('.')
            .map(Identifier::parse)
            .collect::<Result<Vec<_>>>()?;

        Ok(Prerelease { identifiers })
    }
}

impl Ord for Prerelease {
    fn cmp(&self, other: &Self) -> Ordering {
        // No pre-release outranks any pre-release.
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Lexicographic: first differing identifier decides, then the
            // shorter list ranks lower.
            (false, false) => self.identifiers.cmp(&other.identifiers),
        }
    }
}

impl PartialOrd for Prerelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ident) in self.identifiers.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", ident)?;
        }
        Ok(())
    }
}

impl Serialize for Prerelease {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepted serialized forms: dotted text (`"rc.2"`) or a list (`["rc", 2]`)
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrerelease {
    Text(String),
    Values(Vec<toml::Value>),
}

impl<'de> Deserialize<'de> for Prerelease {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match RawPrerelease::deserialize(deserializer)? {
            RawPrerelease::Text(s) => Prerelease::parse(&s),
            RawPrerelease::Values(values) => Prerelease::from_values(&values),
        }
        .map_err(serde::de::Error::custom)
    }
}
