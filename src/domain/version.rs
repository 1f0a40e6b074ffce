use crate::domain::Prerelease;
use crate::error::{Result, TagverError};
use crate::validator;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Semantic version representation
///
/// The prefix a version was parsed with is not kept; `Display` always
/// renders the canonical `MAJOR.MINOR.PATCH[-PRE][+BUILD]` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Prerelease,
    pub build: Option<String>,
}

impl Version {
    /// Create a new release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: Prerelease::EMPTY,
            build: None,
        }
    }

    pub fn with_pre(mut self, pre: Prerelease) -> Self {
        self.pre = pre;
        self
    }

    /// Attach build metadata. The text is not checked against the grammar.
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }

    /// Parse a version, allowing only the `v` prefix (e.g., "v1.2.3-rc.1")
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_prefixes::<&str>(text, &[])
    }

    /// Parse a version that may start with `v` or one of `prefixes`
    pub fn parse_with_prefixes<S: AsRef<str>>(text: &str, prefixes: &[S]) -> Result<Self> {
        if !validator::is_valid_with_prefixes(text, prefixes) {
            debug!(input = text, "rejected version string");
            return Err(TagverError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z[-PRE][+BUILD]",
                text
            )));
        }

        let start = validator::core_start(text).unwrap_or(0);
        Self::decompose(&text[start..])
    }

    /// Parse a version whose minor and patch numbers may be missing.
    ///
    /// Missing components are filled with zero before strict parsing, so
    /// "1" becomes 1.0.0 and "v2.1-rc+7" becomes 2.1.0-rc+7.
    pub fn parse_lax<S: AsRef<str>>(text: &str, prefixes: &[S]) -> Result<Self> {
        let Some(start) = validator::core_start(text) else {
            debug!(input = text, "no numeric core in version string");
            return Err(TagverError::version(format!(
                "Invalid version format: '{}' - no version number found",
                text
            )));
        };

        let (prefix, body) = text.split_at(start);
        let end = body.find(|c: char| c == '-' || c == '+').unwrap_or(body.len());
        let (numbers, tail) = body.split_at(end);

        let filled = match numbers.matches('.').count() {
            0 => format!("{}{}.0.0{}", prefix, numbers, tail),
            1 => format!("{}{}.0{}", prefix, numbers, tail),
            _ => text.to_string(),
        };

        Self::parse_with_prefixes(&filled, prefixes).map_err(|_| {
            TagverError::version(format!(
                "Invalid version format: '{}' - expected X[.Y[.Z]][-PRE][+BUILD]",
                text
            ))
        })
    }

    /// Split an already validated, prefix-free version into its parts.
    fn decompose(core: &str) -> Result<Self> {
        let (rest, build) = match core.split_once('+') {
            Some((rest, build)) => (rest, Some(build.to_string())),
            None => (core, None),
        };
        // Core numbers never contain '-', so the first one starts the pre-release.
        let (numbers, pre) = rest.split_once('-').unwrap_or((rest, ""));

        let mut parts = numbers.splitn(3, '.');
        let major = parse_component(parts.next(), "major")?;
        let minor = parse_component(parts.next(), "minor")?;
        let patch = parse_component(parts.next(), "patch")?;

        Ok(Version {
            major,
            minor,
            patch,
            pre: Prerelease::parse(pre)?,
            build,
        })
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Compare by SemVer precedence. Build metadata is ignored.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| self.pre.cmp(&other.pre))
    }
}

fn parse_component(part: Option<&str>, name: &str) -> Result<u64> {
    let part = part.ok_or_else(|| TagverError::version(format!("Missing {} version", name)))?;
    part.parse::<u64>()
        .map_err(|_| TagverError::version(format!("Invalid {} version: {}", name, part)))
}

impl Ord for Version {
    /// Precedence first; build metadata only breaks ties so that `Ord`
    /// agrees with `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = TagverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
