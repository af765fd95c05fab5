//! The extension decorator around a URL builder.
//!
//! [`Extended<B>`] wraps any [`ImageUrlBuilder`] and adds the three
//! responsive extensions — [`ratio`](Extended::ratio),
//! [`srcset`](Extended::srcset), [`sizes`](Extended::sizes) — without
//! touching the builder itself. It implements `ImageUrlBuilder` too: every
//! configuration call forwards to the wrapped builder and re-wraps the
//! result, so the extensions stay reachable after an arbitrarily long chain:
//!
//! ```
//! use respimg::{CdnUrlBuilder, ImageUrlBuilder, extend};
//!
//! let thumb = extend(CdnUrlBuilder::new("abcdefgh", "production"))
//!     .image("image-6ac29c68b72cfcfe03fdb0753d154f4b30190cc3-90x90-png")
//!     .height(300)
//!     .quality(80);
//!
//! assert_eq!(thumb.ratio().unwrap(), "1 / 1");
//! ```
//!
//! Only values declared `-> Self` are re-wrapped; the terminal `url()` and
//! the `source()` accessor pass through untouched, so a non-chainable value
//! can never end up inside a decorator.
//!
//! The wrapper holds nothing but the builder — all state lives in the
//! wrapped value, and each call produces a fresh `Extended` around the
//! builder's own rebuilt successor.

use crate::asset::{AssetError, ImageSource};
use crate::builder::ImageUrlBuilder;
use crate::params::{AutoMode, CropMode, FitMode, ImageFormat, Orientation};
use crate::responsive::{self, Descriptor};
use crate::sizes::Sizes;

/// Wrap a builder so responsive extensions are available on the chain.
pub fn extend<B: ImageUrlBuilder>(builder: B) -> Extended<B> {
    Extended::new(builder)
}

/// A URL builder plus the responsive extension surface. See the
/// [module docs](self).
#[derive(Debug, Clone, PartialEq)]
pub struct Extended<B> {
    inner: B,
}

impl<B: ImageUrlBuilder> Extended<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    /// The wrapped builder.
    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// Unwrap, discarding the extension surface.
    pub fn into_inner(self) -> B {
        self.inner
    }

    /// CSS `aspect-ratio` token computed from the bound source's id.
    ///
    /// Unaffected by configuration calls on the chain — the intrinsic
    /// dimensions come from the identifier, not from `width`/`height`.
    pub fn ratio(&self) -> Result<String, AssetError> {
        responsive::ratio(self.inner.source())
    }

    /// Width-descriptor srcset candidates for the given widths.
    pub fn srcset(&self, widths: &[u32]) -> Result<String, AssetError> {
        responsive::srcset(&self.inner, widths, Descriptor::Width)
    }

    /// Like [`srcset`](Self::srcset) with an explicit descriptor.
    pub fn srcset_with(
        &self,
        widths: &[u32],
        descriptor: Descriptor,
    ) -> Result<String, AssetError> {
        responsive::srcset(&self.inner, widths, descriptor)
    }

    /// Start a conditional `sizes`/`srcset` chain. The accumulator borrows
    /// this decorator so its serialization runs back through the full chain.
    pub fn sizes(&self) -> Sizes<'_, B> {
        Sizes::new(self)
    }
}

impl<B: ImageUrlBuilder> ImageUrlBuilder for Extended<B> {
    fn image(self, source: impl Into<ImageSource>) -> Self {
        Self::new(self.inner.image(source))
    }

    fn source(&self) -> Option<&ImageSource> {
        self.inner.source()
    }

    fn url(&self) -> Result<String, AssetError> {
        self.inner.url()
    }

    fn project_id(self, project_id: &str) -> Self {
        Self::new(self.inner.project_id(project_id))
    }

    fn dataset(self, dataset: &str) -> Self {
        Self::new(self.inner.dataset(dataset))
    }

    fn width(self, width: u32) -> Self {
        Self::new(self.inner.width(width))
    }

    fn height(self, height: u32) -> Self {
        Self::new(self.inner.height(height))
    }

    fn size(self, width: u32, height: u32) -> Self {
        Self::new(self.inner.size(width, height))
    }

    fn min_width(self, width: u32) -> Self {
        Self::new(self.inner.min_width(width))
    }

    fn max_width(self, width: u32) -> Self {
        Self::new(self.inner.max_width(width))
    }

    fn min_height(self, height: u32) -> Self {
        Self::new(self.inner.min_height(height))
    }

    fn max_height(self, height: u32) -> Self {
        Self::new(self.inner.max_height(height))
    }

    fn rect(self, left: u32, top: u32, width: u32, height: u32) -> Self {
        Self::new(self.inner.rect(left, top, width, height))
    }

    fn focal_point(self, x: f64, y: f64) -> Self {
        Self::new(self.inner.focal_point(x, y))
    }

    fn orientation(self, orientation: Orientation) -> Self {
        Self::new(self.inner.orientation(orientation))
    }

    fn fit(self, mode: FitMode) -> Self {
        Self::new(self.inner.fit(mode))
    }

    fn crop(self, mode: CropMode) -> Self {
        Self::new(self.inner.crop(mode))
    }

    fn pad(self, pad: u32) -> Self {
        Self::new(self.inner.pad(pad))
    }

    fn dpr(self, dpr: f64) -> Self {
        Self::new(self.inner.dpr(dpr))
    }

    fn blur(self, amount: u32) -> Self {
        Self::new(self.inner.blur(amount))
    }

    fn sharpen(self, amount: u32) -> Self {
        Self::new(self.inner.sharpen(amount))
    }

    fn invert(self, invert: bool) -> Self {
        Self::new(self.inner.invert(invert))
    }

    fn saturation(self, saturation: i32) -> Self {
        Self::new(self.inner.saturation(saturation))
    }

    fn bg(self, color: &str) -> Self {
        Self::new(self.inner.bg(color))
    }

    fn flip_horizontal(self) -> Self {
        Self::new(self.inner.flip_horizontal())
    }

    fn flip_vertical(self) -> Self {
        Self::new(self.inner.flip_vertical())
    }

    fn quality(self, quality: u32) -> Self {
        Self::new(self.inner.quality(quality))
    }

    fn format(self, format: ImageFormat) -> Self {
        Self::new(self.inner.format(format))
    }

    fn auto(self, mode: AutoMode) -> Self {
        Self::new(self.inner.auto(mode))
    }

    fn force_download(self, filename: Option<&str>) -> Self {
        Self::new(self.inner.force_download(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{bound_builder, square_ref, test_builder};

    #[test]
    fn configuration_calls_stay_extended() {
        // The whole point: extensions remain reachable at any chain depth.
        let chained = bound_builder()
            .width(100)
            .height(50)
            .quality(80)
            .fit(FitMode::Crop);
        assert_eq!(chained.ratio().unwrap(), "1 / 1");
    }

    #[test]
    fn ratio_ignores_configured_dimensions() {
        let plain = bound_builder();
        let configured = bound_builder().width(4000).height(1);
        assert_eq!(plain.ratio().unwrap(), configured.ratio().unwrap());
    }

    #[test]
    fn extensions_are_idempotent() {
        let builder = bound_builder().width(100);
        assert_eq!(builder.ratio().unwrap(), builder.ratio().unwrap());
        assert_eq!(
            builder.srcset(&[100, 200]).unwrap(),
            builder.srcset(&[100, 200]).unwrap()
        );
    }

    #[test]
    fn srcset_observes_preceding_configuration() {
        let out = bound_builder().quality(60).srcset(&[100]).unwrap();
        assert!(out.contains("q=60"));
        assert!(out.contains("w=100"));
    }

    #[test]
    fn terminal_url_passes_through_unwrapped() {
        let url = bound_builder().width(100).url().unwrap();
        assert!(url.starts_with("https://"));
        assert!(url.contains("w=100"));
    }

    #[test]
    fn image_binding_goes_through_the_decorator() {
        let builder = test_builder().image(square_ref());
        assert!(builder.source().is_some());
        assert_eq!(builder.ratio().unwrap(), "1 / 1");
    }

    #[test]
    fn into_inner_round_trips() {
        let builder = bound_builder().width(100);
        let rewrapped = extend(builder.clone().into_inner());
        assert_eq!(builder, rewrapped);
    }
}
