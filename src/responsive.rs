//! Pure string-level extensions: aspect ratio and srcset rendering.
//!
//! Both functions are free of I/O and independent of any concrete builder;
//! they are the computations the [`Extended`](crate::extend) decorator
//! diverts to when a chain ends in `ratio()` or `srcset()`.

use crate::asset::{self, AssetError, ImageSource};
use crate::builder::ImageUrlBuilder;

/// Candidate suffix distinguishing width-based from density-based srcsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Descriptor {
    /// `w` — width candidates, the default.
    #[default]
    Width,
    /// `x` — pixel-density candidates.
    Density,
}

impl Descriptor {
    pub fn suffix(self) -> &'static str {
        match self {
            Descriptor::Width => "w",
            Descriptor::Density => "x",
        }
    }
}

/// Compute a CSS `aspect-ratio` token from the bound source.
///
/// The identifier is resolved and parsed on every call — no caching, the id
/// is the single source of truth. The result is the plain float division in
/// default formatting: a 90x90 asset yields `"1 / 1"`, a 16x9 asset yields
/// `"1.7777777777777777 / 1"`. Shortest-roundtrip `f64` formatting is part
/// of the contract; do not round.
pub fn ratio(source: Option<&ImageSource>) -> Result<String, AssetError> {
    let id = asset::resolve_id(source)?;
    let dimensions = asset::parse_dimensions(id)?;
    Ok(format!("{} / 1", dimensions.width / dimensions.height))
}

/// Render one srcset candidate per width, in input order.
///
/// Each candidate is the builder's URL with that width applied, followed by
/// the width and descriptor suffix. Order is preserved, duplicates are
/// preserved, and an empty width list yields an empty string.
///
/// Deliberately operates on the unwrapped builder rather than back through
/// the decorator: each candidate needs `width(value)` then `url()` and
/// nothing else, so re-wrapping every intermediate would only add noise.
pub fn srcset<B: ImageUrlBuilder>(
    builder: &B,
    widths: &[u32],
    descriptor: Descriptor,
) -> Result<String, AssetError> {
    let mut candidates = Vec::with_capacity(widths.len());
    for &width in widths {
        let url = builder.clone().width(width).url()?;
        candidates.push(format!("{} {}{}", url, width, descriptor.suffix()));
    }
    Ok(candidates.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetRef;
    use crate::test_helpers::{SQUARE_ID, square_ref, test_builder};

    // =========================================================================
    // ratio() tests
    // =========================================================================

    #[test]
    fn ratio_square_is_one_to_one() {
        let source = square_ref();
        assert_eq!(ratio(Some(&source)).unwrap(), "1 / 1");
    }

    #[test]
    fn ratio_sixteen_by_nine_keeps_full_precision() {
        let source = ImageSource::from("image-abc123-16x9-jpg");
        assert_eq!(ratio(Some(&source)).unwrap(), "1.7777777777777777 / 1");
    }

    #[test]
    fn ratio_four_by_three() {
        let source = ImageSource::from("image-abc123-100x75-jpg");
        assert_eq!(ratio(Some(&source)).unwrap(), "1.3333333333333333 / 1");
    }

    #[test]
    fn ratio_resolves_through_reference() {
        let source = ImageSource::Reference(AssetRef {
            reference: None,
            document_id: Some(SQUARE_ID.to_string()),
        });
        assert_eq!(ratio(Some(&source)).unwrap(), "1 / 1");
    }

    #[test]
    fn ratio_without_source_is_missing_source() {
        assert_eq!(ratio(None), Err(AssetError::MissingSource));
    }

    #[test]
    fn ratio_malformed_id_propagates() {
        let source = ImageSource::from("image-abc-notanumber-png");
        assert!(matches!(ratio(Some(&source)), Err(AssetError::Malformed(_))));
    }

    // =========================================================================
    // srcset() tests
    // =========================================================================

    #[test]
    fn srcset_empty_widths_is_empty_string() {
        let builder = test_builder().into_inner().image(square_ref());
        assert_eq!(srcset(&builder, &[], Descriptor::Width).unwrap(), "");
    }

    #[test]
    fn srcset_renders_one_candidate_per_width_in_order() {
        let builder = test_builder().into_inner().image(square_ref());
        let out = srcset(&builder, &[100, 200, 300], Descriptor::Width).unwrap();
        let candidates: Vec<&str> = out.split(", ").collect();
        assert_eq!(candidates.len(), 3);
        assert!(candidates[0].ends_with(" 100w"));
        assert!(candidates[1].ends_with(" 200w"));
        assert!(candidates[2].ends_with(" 300w"));
        assert!(candidates[0].contains("w=100"));
    }

    #[test]
    fn srcset_preserves_duplicates() {
        let builder = test_builder().into_inner().image(square_ref());
        let out = srcset(&builder, &[200, 200], Descriptor::Width).unwrap();
        assert_eq!(out.matches(" 200w").count(), 2);
    }

    #[test]
    fn srcset_density_descriptor_uses_x_suffix() {
        let builder = test_builder().into_inner().image(square_ref());
        let out = srcset(&builder, &[1, 2], Descriptor::Density).unwrap();
        assert!(out.contains(" 1x, "));
        assert!(out.ends_with(" 2x"));
    }
}
