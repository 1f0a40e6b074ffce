use crate::domain::Version;
use std::ops::Deref;

/// Collection of versions that sorts by SemVer precedence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Versions(Vec<Version>);

impl Versions {
    pub fn new(versions: Vec<Version>) -> Self {
        Versions(versions)
    }

    /// Sort ascending by precedence. Stable, so versions that differ only in
    /// build metadata order by that metadata.
    pub fn sort(&mut self) {
        self.0.sort();
    }

    /// Sort descending by precedence
    pub fn sort_reverse(&mut self) {
        self.0.sort_by(|a, b| b.cmp(a));
    }

    /// Highest version by precedence, if any
    pub fn latest(&self) -> Option<&Version> {
        self.0.iter().max()
    }

    /// Highest version that has no pre-release component
    pub fn latest_release(&self) -> Option<&Version> {
        self.0.iter().filter(|v| !v.is_prerelease()).max()
    }

    pub fn push(&mut self, version: Version) {
        self.0.push(version);
    }

    pub fn into_inner(self) -> Vec<Version> {
        self.0
    }
}

impl Deref for Versions {
    type Target = [Version];

    fn deref(&self) -> &[Version] {
        &self.0
    }
}

impl FromIterator<Version> for Versions {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        Versions(iter.into_iter().collect())
    }
}

impl IntoIterator for Versions {
    type Item = Version;
    type IntoIter = std::vec::IntoIter<Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
