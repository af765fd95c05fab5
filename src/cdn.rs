//! Reference URL builder for sanity-style image CDNs.
//!
//! The production implementation of [`ImageUrlBuilder`]: a pure in-memory
//! value that accumulates query parameters and renders
//!
//! ```text
//! <base>/images/<project>/<dataset>/<hash>-<WxH>.<ext>?<params>
//! ```
//!
//! The file segment is rebuilt from the bound asset id, so `url()` shares
//! the [`asset`](crate::asset) parser — and its failure modes — with the
//! ratio extension. Parameters live in a `BTreeMap`, which keeps query
//! order deterministic (alphabetical by key) across calls and re-runs.
//!
//! No validation is attempted on parameter values and no I/O is performed;
//! this builder only agrees with the CDN on address shape.

use crate::asset::{self, AssetError, ImageSource};
use crate::builder::ImageUrlBuilder;
use crate::params::{AutoMode, CropMode, FitMode, ImageFormat, Orientation};
use std::collections::BTreeMap;

pub const DEFAULT_BASE_URL: &str = "https://cdn.sanity.io";

#[derive(Debug, Clone, PartialEq)]
pub struct CdnUrlBuilder {
    base_url: String,
    project_id: String,
    dataset: String,
    source: Option<ImageSource>,
    params: BTreeMap<&'static str, String>,
}

impl CdnUrlBuilder {
    pub fn new(project_id: &str, dataset: &str) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            project_id: project_id.to_string(),
            dataset: dataset.to_string(),
            source: None,
            params: BTreeMap::new(),
        }
    }

    /// Point at a different CDN host (self-hosted proxies, staging).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The accumulated query parameter for `key`, if set. Mostly useful in
    /// tests asserting what a chain configured.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    fn with_param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.insert(key, value.to_string());
        self
    }

    /// Requesting one axis then the other collapses into `flip=hv`.
    fn merge_flip(self, axis: &str) -> Self {
        let merged = match self.params.get("flip").map(String::as_str) {
            Some(existing) if existing.contains(axis) => existing.to_string(),
            Some(_) => "hv".to_string(),
            None => axis.to_string(),
        };
        self.with_param("flip", merged)
    }
}

impl ImageUrlBuilder for CdnUrlBuilder {
    fn image(mut self, source: impl Into<ImageSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    fn url(&self) -> Result<String, AssetError> {
        let id = asset::resolve_id(self.source.as_ref())?;
        let parts = asset::parse_asset_id(id)?;
        let mut url = format!(
            "{}/images/{}/{}/{}-{}x{}.{}",
            self.base_url,
            self.project_id,
            self.dataset,
            parts.hash,
            parts.dimensions.width,
            parts.dimensions.height,
            parts.extension,
        );
        if !self.params.is_empty() {
            let query: Vec<String> = self
                .params
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }
        Ok(url)
    }

    fn project_id(mut self, project_id: &str) -> Self {
        self.project_id = project_id.to_string();
        self
    }

    fn dataset(mut self, dataset: &str) -> Self {
        self.dataset = dataset.to_string();
        self
    }

    fn width(self, width: u32) -> Self {
        self.with_param("w", width)
    }

    fn height(self, height: u32) -> Self {
        self.with_param("h", height)
    }

    fn size(self, width: u32, height: u32) -> Self {
        self.width(width).height(height)
    }

    fn min_width(self, width: u32) -> Self {
        self.with_param("min-w", width)
    }

    fn max_width(self, width: u32) -> Self {
        self.with_param("max-w", width)
    }

    fn min_height(self, height: u32) -> Self {
        self.with_param("min-h", height)
    }

    fn max_height(self, height: u32) -> Self {
        self.with_param("max-h", height)
    }

    fn rect(self, left: u32, top: u32, width: u32, height: u32) -> Self {
        self.with_param("rect", format!("{},{},{},{}", left, top, width, height))
    }

    fn focal_point(self, x: f64, y: f64) -> Self {
        self.with_param("fp-x", x).with_param("fp-y", y)
    }

    fn orientation(self, orientation: Orientation) -> Self {
        self.with_param("or", orientation.as_str())
    }

    fn fit(self, mode: FitMode) -> Self {
        self.with_param("fit", mode.as_str())
    }

    fn crop(self, mode: CropMode) -> Self {
        self.with_param("crop", mode.as_str())
    }

    fn pad(self, pad: u32) -> Self {
        self.with_param("pad", pad)
    }

    fn dpr(self, dpr: f64) -> Self {
        self.with_param("dpr", dpr)
    }

    fn blur(self, amount: u32) -> Self {
        self.with_param("blur", amount)
    }

    fn sharpen(self, amount: u32) -> Self {
        self.with_param("sharp", amount)
    }

    fn invert(self, invert: bool) -> Self {
        self.with_param("invert", invert)
    }

    fn saturation(self, saturation: i32) -> Self {
        self.with_param("sat", saturation)
    }

    fn bg(self, color: &str) -> Self {
        self.with_param("bg", color)
    }

    fn flip_horizontal(self) -> Self {
        self.merge_flip("h")
    }

    fn flip_vertical(self) -> Self {
        self.merge_flip("v")
    }

    fn quality(self, quality: u32) -> Self {
        self.with_param("q", quality)
    }

    fn format(self, format: ImageFormat) -> Self {
        self.with_param("fm", format.as_str())
    }

    fn auto(self, mode: AutoMode) -> Self {
        self.with_param("auto", mode.as_str())
    }

    fn force_download(self, filename: Option<&str>) -> Self {
        self.with_param("dl", filename.unwrap_or_default())
    }
}
