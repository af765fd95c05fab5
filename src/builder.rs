//! The collaborator contract: what any wrapped URL builder must support.
//!
//! [`ImageUrlBuilder`] is the seam between this crate and whatever actually
//! constructs CDN URLs. The extension layer ([`Extended`](crate::extend))
//! depends on four things only — binding a source, setting a width, reading
//! the bound source back, and producing the terminal URL — but the trait
//! carries the full known configuration surface so the decorator can forward
//! all of it and keep the chain extended after any call.
//!
//! Every configuration method consumes the builder and returns a new one
//! (immutable-rebuild convention); `Clone` is a supertrait because rendering
//! a srcset derives one URL per width from a single configured builder.
//!
//! The production implementation is [`CdnUrlBuilder`](crate::cdn) — a pure
//! in-memory parameter map with no I/O.

use crate::asset::{AssetError, ImageSource};
use crate::params::{AutoMode, CropMode, FitMode, ImageFormat, Orientation};

pub trait ImageUrlBuilder: Clone + Sized {
    /// Bind the asset the chain operates on.
    fn image(self, source: impl Into<ImageSource>) -> Self;

    /// The currently-bound source, if any. Read by the `ratio`/`srcset`
    /// extensions; never mutated through this accessor.
    fn source(&self) -> Option<&ImageSource>;

    /// Terminal call: render the accumulated configuration into a URL.
    fn url(&self) -> Result<String, AssetError>;

    // --- addressing ---

    fn project_id(self, project_id: &str) -> Self;
    fn dataset(self, dataset: &str) -> Self;

    // --- geometry ---

    fn width(self, width: u32) -> Self;
    fn height(self, height: u32) -> Self;
    /// Shorthand for `width(w).height(h)`.
    fn size(self, width: u32, height: u32) -> Self;
    fn min_width(self, width: u32) -> Self;
    fn max_width(self, width: u32) -> Self;
    fn min_height(self, height: u32) -> Self;
    fn max_height(self, height: u32) -> Self;
    /// Crop rectangle in source pixels.
    fn rect(self, left: u32, top: u32, width: u32, height: u32) -> Self;
    /// Focal point as fractions of width/height in `0.0..=1.0`.
    fn focal_point(self, x: f64, y: f64) -> Self;
    fn orientation(self, orientation: Orientation) -> Self;
    fn fit(self, mode: FitMode) -> Self;
    fn crop(self, mode: CropMode) -> Self;
    fn pad(self, pad: u32) -> Self;
    fn dpr(self, dpr: f64) -> Self;

    // --- appearance ---

    fn blur(self, amount: u32) -> Self;
    fn sharpen(self, amount: u32) -> Self;
    fn invert(self, invert: bool) -> Self;
    fn saturation(self, saturation: i32) -> Self;
    /// Background color for padded or transparent areas, as a hex string.
    fn bg(self, color: &str) -> Self;
    fn flip_horizontal(self) -> Self;
    fn flip_vertical(self) -> Self;

    // --- delivery ---

    fn quality(self, quality: u32) -> Self;
    fn format(self, format: ImageFormat) -> Self;
    fn auto(self, mode: AutoMode) -> Self;
    /// Serve as an attachment. `None` lets the CDN pick the filename.
    fn force_download(self, filename: Option<&str>) -> Self;
}
