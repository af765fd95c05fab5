//! Typed parameter vocabulary for the builder configuration surface.
//!
//! These enums describe *what* the CDN should do, not *how* a given builder
//! encodes it. Each variant knows its canonical query-parameter token via
//! `as_str()`; builders decide which parameter key the token lands under.

/// Output format override (`fm` on most CDNs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpg,
    /// Progressive JPEG.
    Pjpg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Pjpg => "pjpg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }

    /// MIME type for `<source type=…>` attributes.
    pub fn mime(self) -> &'static str {
        match self {
            ImageFormat::Jpg | ImageFormat::Pjpg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Webp => "image/webp",
        }
    }
}

/// How the image is fitted when both dimensions are constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    Clip,
    Crop,
    Fill,
    FillMax,
    Max,
    Scale,
    Min,
}

impl FitMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FitMode::Clip => "clip",
            FitMode::Crop => "crop",
            FitMode::Fill => "fill",
            FitMode::FillMax => "fillmax",
            FitMode::Max => "max",
            FitMode::Scale => "scale",
            FitMode::Min => "min",
        }
    }
}

/// Which part of the image survives a crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropMode {
    Top,
    Bottom,
    Left,
    Right,
    Center,
    FocalPoint,
    Entropy,
}

impl CropMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CropMode::Top => "top",
            CropMode::Bottom => "bottom",
            CropMode::Left => "left",
            CropMode::Right => "right",
            CropMode::Center => "center",
            CropMode::FocalPoint => "focalpoint",
            CropMode::Entropy => "entropy",
        }
    }
}

/// Automatic content negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoMode {
    /// Let the CDN pick the best format the client accepts.
    Format,
}

impl AutoMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AutoMode::Format => "format",
        }
    }
}

/// Rotation applied before any other transform, in degrees clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Deg0 => "0",
            Orientation::Deg90 => "90",
            Orientation::Deg180 => "180",
            Orientation::Deg270 => "270",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tokens() {
        assert_eq!(ImageFormat::Jpg.as_str(), "jpg");
        assert_eq!(ImageFormat::Pjpg.as_str(), "pjpg");
        assert_eq!(ImageFormat::Webp.as_str(), "webp");
    }

    #[test]
    fn progressive_jpeg_shares_jpeg_mime() {
        assert_eq!(ImageFormat::Pjpg.mime(), "image/jpeg");
        assert_eq!(ImageFormat::Jpg.mime(), "image/jpeg");
    }

    #[test]
    fn fit_and_crop_tokens_are_lowercase() {
        assert_eq!(FitMode::FillMax.as_str(), "fillmax");
        assert_eq!(CropMode::FocalPoint.as_str(), "focalpoint");
    }

    #[test]
    fn orientation_tokens_are_degrees() {
        assert_eq!(Orientation::Deg0.as_str(), "0");
        assert_eq!(Orientation::Deg270.as_str(), "270");
    }
}
