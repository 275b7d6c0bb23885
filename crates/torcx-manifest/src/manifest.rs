//! Versioned profile manifests.
//!
//! A manifest is a tagged document `{"kind": ..., "value": ...}` where the
//! `kind` tag selects the payload shape. Decoding inspects the tag first and
//! refuses unknown versions instead of force-fitting the payload.

use std::fmt::Display;

use serde::de::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use torcx_common::error::{Result, TorcxError};

use crate::kind::ManifestKind;

/// An addon image reference within a profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    /// Addon identifier.
    pub name: String,
    /// Opaque version or tag selecting which build of the addon to use.
    pub reference: String,
}

impl Image {
    /// Creates an image entry.
    #[must_use]
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
        }
    }
}

/// Payload of a `profile-manifest-v0` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImagesV0 {
    /// Images in activation order.
    pub images: Vec<Image>,
}

impl ImagesV0 {
    /// Decodes the payload object. Absent or `null` `images` is empty.
    fn from_object(mut payload: Map<String, Value>) -> Result<Self> {
        let items = match payload.remove("images") {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(malformed_v0("\"images\" must be an array")),
        };
        let images = items
            .into_iter()
            .map(|item| match item {
                Value::Object(entry) => serde_json::from_value(Value::Object(entry))
                    .map_err(|source| TorcxError::MalformedManifest {
                        kind: ManifestKind::ProfileManifestV0.to_string(),
                        source,
                    }),
                _ => Err(malformed_v0("image entries must be objects")),
            })
            .collect::<Result<Vec<Image>>>()?;
        Ok(Self { images })
    }
}

fn malformed(kind: &str, message: impl Display) -> TorcxError {
    TorcxError::MalformedManifest {
        kind: kind.to_string(),
        source: serde_json::Error::custom(message),
    }
}

fn malformed_v0(message: impl Display) -> TorcxError {
    malformed(ManifestKind::ProfileManifestV0.as_str(), message)
}

/// A profile manifest of a known version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileManifest {
    /// Version 0: an ordered list of images.
    V0(ImagesV0),
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    kind: &'a str,
    value: &'a T,
}

impl ProfileManifest {
    /// Creates a manifest of the current version holding `images`.
    #[must_use]
    pub fn new(images: Vec<Image>) -> Self {
        Self::V0(ImagesV0 { images })
    }

    /// Returns the `kind` tag this manifest encodes with.
    #[must_use]
    pub const fn kind(&self) -> ManifestKind {
        match self {
            Self::V0(_) => ManifestKind::ProfileManifestV0,
        }
    }

    /// Images in activation order.
    #[must_use]
    pub fn images(&self) -> &[Image] {
        match self {
            Self::V0(payload) => &payload.images,
        }
    }

    /// Consumes the manifest, returning its images.
    #[must_use]
    pub fn into_images(self) -> Vec<Image> {
        match self {
            Self::V0(payload) => payload.images,
        }
    }

    /// Decodes a manifest from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns `TorcxError::UnsupportedManifestVersion` if `kind` is absent or
    /// unknown, and `TorcxError::MalformedManifest` if the document or its
    /// payload does not have the expected shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let document: Value =
            serde_json::from_slice(bytes).map_err(|source| TorcxError::MalformedManifest {
                kind: String::new(),
                source,
            })?;
        Self::from_value(document)
    }

    /// Decodes a manifest from an already parsed JSON document.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ProfileManifest::from_slice`].
    pub fn from_value(document: Value) -> Result<Self> {
        let Value::Object(mut fields) = document else {
            return Err(malformed("", "manifest must be a JSON object"));
        };
        let kind = match fields.remove("kind") {
            None | Some(Value::Null) => ManifestKind::Unknown(String::new()),
            Some(Value::String(tag)) => ManifestKind::from(tag.as_str()),
            Some(_) => return Err(malformed("", "\"kind\" must be a string")),
        };
        match kind {
            ManifestKind::ProfileManifestV0 => {
                let payload = match fields.remove("value") {
                    None | Some(Value::Null) => ImagesV0::default(),
                    Some(Value::Object(payload)) => ImagesV0::from_object(payload)?,
                    Some(_) => return Err(malformed_v0("\"value\" must be an object")),
                };
                Ok(Self::V0(payload))
            }
            ManifestKind::Unknown(kind) => Err(TorcxError::UnsupportedManifestVersion { kind }),
        }
    }

    /// Encodes the manifest into a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Encodes the manifest as pretty-printed JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_vec_pretty(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

impl Serialize for ProfileManifest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let kind = self.kind();
        match self {
            Self::V0(payload) => Envelope {
                kind: kind.as_str(),
                value: payload,
            }
            .serialize(serializer),
        }
    }
}
