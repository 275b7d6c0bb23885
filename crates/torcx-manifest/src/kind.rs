//! Manifest `kind` tags.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use torcx_common::constants::PROFILE_MANIFEST_V0_KIND;

/// Document type and schema version carried in a manifest's `kind` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    /// `profile-manifest-v0`.
    ProfileManifestV0,
    /// Any tag this build does not understand, kept verbatim.
    Unknown(String),
}

impl ManifestKind {
    /// Returns the wire form of the tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ProfileManifestV0 => PROFILE_MANIFEST_V0_KIND,
            Self::Unknown(raw) => raw,
        }
    }

    /// Whether this build can decode documents of this kind.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for ManifestKind {
    fn from(s: &str) -> Self {
        match s {
            PROFILE_MANIFEST_V0_KIND => Self::ProfileManifestV0,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl FromStr for ManifestKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_v0_tag() {
        assert_eq!(
            ManifestKind::from("profile-manifest-v0"),
            ManifestKind::ProfileManifestV0
        );
        assert!(ManifestKind::ProfileManifestV0.is_known());
    }

    #[test]
    fn unknown_tag_is_kept_verbatim() {
        let kind = ManifestKind::from("profile-manifest-v1");
        assert_eq!(kind, ManifestKind::Unknown("profile-manifest-v1".into()));
        assert!(!kind.is_known());
        assert_eq!(kind.to_string(), "profile-manifest-v1");
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(
            ManifestKind::ProfileManifestV0.to_string(),
            PROFILE_MANIFEST_V0_KIND
        );
    }
}
