//! Centralized asset-identifier parsing and source resolution.
//!
//! CDN asset identifiers follow a fixed dash-delimited convention:
//!
//! ```text
//! image-6ac29c68b72cfcfe03fdb0753d154f4b30190cc3-90x90-png
//! <kind>-<hash>-----------------------------------<WxH>-<ext>
//! ```
//!
//! Only the third segment carries intrinsic dimensions; it is the single
//! source of truth for aspect-ratio computation and is re-parsed on every
//! call rather than cached.
//!
//! ## Sources
//!
//! An image can be bound from two shapes:
//! - a bare identifier string, used as-is
//! - a reference document (`{"_ref": …}` or `{"_id": …}`), as stored inside
//!   CDN datasets — `_ref` wins, `_id` is the fallback, and empty strings
//!   count as absent

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("no image source bound; call `image()` before requesting responsive attributes")]
    MissingSource,
    #[error("cannot find an asset id on the bound source (expected `_ref` or `_id`)")]
    UnresolvableId,
    #[error("malformed asset id: {0}")]
    Malformed(String),
}

/// Intrinsic pixel dimensions parsed from an asset id.
///
/// Stored as `f64`: the identifier grammar admits any finite positive
/// numeric token, and the aspect ratio is a float division whose default
/// formatting is part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Full decomposition of a four-segment asset id.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetParts<'a> {
    pub hash: &'a str,
    pub dimensions: Dimensions,
    pub extension: &'a str,
}

/// A bound image source: either a bare asset id or a reference document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    Id(String),
    Reference(AssetRef),
}

/// Reference document pointing at an asset, as found in CDN datasets.
///
/// Unknown fields (`_type`, projections, …) are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

impl From<&str> for ImageSource {
    fn from(id: &str) -> Self {
        ImageSource::Id(id.to_string())
    }
}

impl From<String> for ImageSource {
    fn from(id: String) -> Self {
        ImageSource::Id(id)
    }
}

impl From<AssetRef> for ImageSource {
    fn from(asset: AssetRef) -> Self {
        ImageSource::Reference(asset)
    }
}

/// Extract intrinsic dimensions from an asset id.
///
/// Splits on `-`, takes the third segment, splits that on `x` and parses
/// both tokens. Fails with [`AssetError::Malformed`] when the segment is
/// missing or either token is not a finite positive number. There is no
/// partial recovery: both dimensions parse or the call fails as a whole.
pub fn parse_dimensions(id: &str) -> Result<Dimensions, AssetError> {
    id.split('-')
        .nth(2)
        .and_then(parse_dimension_segment)
        .ok_or_else(|| AssetError::Malformed(id.to_string()))
}

/// Decompose a full `<kind>-<hash>-<WxH>-<ext>` id.
///
/// Stricter than [`parse_dimensions`]: the id must have exactly four
/// segments with a non-empty hash and extension. Used where the URL path is
/// rebuilt from the id (`<hash>-<WxH>.<ext>`), not just the ratio.
pub fn parse_asset_id(id: &str) -> Result<AssetParts<'_>, AssetError> {
    let segments: Vec<&str> = id.split('-').collect();
    let [_kind, hash, dimension_segment, extension] = segments[..] else {
        return Err(AssetError::Malformed(id.to_string()));
    };
    if hash.is_empty() || extension.is_empty() {
        return Err(AssetError::Malformed(id.to_string()));
    }
    let dimensions = parse_dimension_segment(dimension_segment)
        .ok_or_else(|| AssetError::Malformed(id.to_string()))?;
    Ok(AssetParts {
        hash,
        dimensions,
        extension,
    })
}

fn parse_dimension_segment(segment: &str) -> Option<Dimensions> {
    let (w, h) = segment.split_once('x')?;
    Some(Dimensions {
        width: parse_pixel_token(w)?,
        height: parse_pixel_token(h)?,
    })
}

fn parse_pixel_token(token: &str) -> Option<f64> {
    let value: f64 = token.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Resolve the asset id off a bound source.
///
/// - `None` fails with [`AssetError::MissingSource`] — the common usage
///   mistake of calling an extension before binding an image
/// - string sources pass through unchanged
/// - reference documents yield `_ref`, falling back to `_id`; empty strings
///   count as absent, and [`AssetError::UnresolvableId`] is raised when
///   neither field yields a value
pub fn resolve_id(source: Option<&ImageSource>) -> Result<&str, AssetError> {
    let source = source.ok_or(AssetError::MissingSource)?;
    match source {
        ImageSource::Id(id) => Ok(id.as_str()),
        ImageSource::Reference(asset) => asset
            .reference
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| asset.document_id.as_deref().filter(|s| !s.is_empty()))
            .ok_or(AssetError::UnresolvableId),
    }
}
