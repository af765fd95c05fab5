//! Shared fixtures for unit tests.

use crate::asset::{AssetRef, ImageSource};
use crate::builder::ImageUrlBuilder;
use crate::cdn::CdnUrlBuilder;
use crate::extend::{Extended, extend};

/// The canonical 90x90 test asset.
pub const SQUARE_ID: &str = "image-6ac29c68b72cfcfe03fdb0753d154f4b30190cc3-90x90-png";

/// `SQUARE_ID` as a dataset-style reference document.
pub fn square_ref() -> ImageSource {
    ImageSource::Reference(AssetRef {
        reference: Some(SQUARE_ID.to_string()),
        document_id: None,
    })
}

/// An extended builder with no source bound.
pub fn test_builder() -> Extended<CdnUrlBuilder> {
    extend(CdnUrlBuilder::new("abcdefgh", "development"))
}

/// An extended builder bound to the canonical square asset.
pub fn bound_builder() -> Extended<CdnUrlBuilder> {
    test_builder().image(square_ref())
}
