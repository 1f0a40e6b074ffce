//! Domain types - versions, pre-release identifiers and their ordering

pub mod prerelease;
pub mod version;
pub mod versions;

pub use prerelease::{Identifier, Prerelease};
pub use version::Version;
pub use versions::Versions;
