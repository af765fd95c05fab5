//! Markup helpers: render the responsive attributes straight into tags.
//!
//! Thin layer over [maud](https://maud.lambda.xyz/) for callers that want
//! an `<img>` or `<picture>` element rather than raw attribute strings.
//! The fallback `src` uses the middle width of the candidate list — large
//! enough to look right on most viewports, small enough not to punish the
//! ones that ignore srcset.

use crate::asset::AssetError;
use crate::builder::ImageUrlBuilder;
use crate::extend::Extended;
use crate::params::ImageFormat;
use maud::{Markup, html};

/// Render an `<img>` carrying `src`, `srcset`, `sizes`, `alt`, and an
/// `aspect-ratio` style computed from the bound asset.
pub fn img<B: ImageUrlBuilder>(
    builder: &Extended<B>,
    widths: &[u32],
    sizes: &str,
    alt: &str,
) -> Result<Markup, AssetError> {
    let srcset = builder.srcset(widths)?;
    let style = format!("aspect-ratio: {};", builder.ratio()?);
    let src = default_src(builder, widths)?;
    Ok(html! {
        img src=(src) srcset=(srcset) sizes=(sizes) alt=(alt) style=(style);
    })
}

/// Render a `<picture>` with one `<source>` per requested format, in order,
/// around the [`img`] fallback.
pub fn picture<B: ImageUrlBuilder>(
    builder: &Extended<B>,
    formats: &[ImageFormat],
    widths: &[u32],
    sizes: &str,
    alt: &str,
) -> Result<Markup, AssetError> {
    let mut sources = Vec::with_capacity(formats.len());
    for &format in formats {
        let srcset = builder.clone().format(format).srcset(widths)?;
        sources.push((format.mime(), srcset));
    }
    let fallback = img(builder, widths, sizes, alt)?;
    Ok(html! {
        picture {
            @for (mime, srcset) in &sources {
                source type=(mime) srcset=(srcset) sizes=(sizes);
            }
            (fallback)
        }
    })
}

fn default_src<B: ImageUrlBuilder>(
    builder: &Extended<B>,
    widths: &[u32],
) -> Result<String, AssetError> {
    match widths.get(widths.len() / 2) {
        Some(&width) => builder.inner().clone().width(width).url(),
        None => builder.url(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::bound_builder;

    #[test]
    fn img_carries_all_responsive_attributes() {
        let builder = bound_builder();
        let markup = img(&builder, &[400, 800, 1200], "(max-width:600px) 100vw, 50vw", "A square")
            .unwrap()
            .into_string();

        assert!(markup.contains("srcset=\""));
        assert!(markup.contains(" 400w"));
        assert!(markup.contains(" 1200w"));
        assert!(markup.contains("sizes=\"(max-width:600px) 100vw, 50vw\""));
        assert!(markup.contains("aspect-ratio: 1 / 1;"));
        assert!(markup.contains("alt=\"A square\""));
    }

    #[test]
    fn img_src_uses_middle_width() {
        let markup = img(&bound_builder(), &[400, 800, 1200], "100vw", "x")
            .unwrap()
            .into_string();
        assert!(markup.contains("src=\"https://cdn.sanity.io/images/abcdefgh/development/6ac29c68b72cfcfe03fdb0753d154f4b30190cc3-90x90.png?w=800\""));
    }

    #[test]
    fn picture_emits_one_source_per_format() {
        let markup = picture(
            &bound_builder(),
            &[ImageFormat::Webp, ImageFormat::Jpg],
            &[400, 800],
            "100vw",
            "x",
        )
        .unwrap()
        .into_string();

        assert!(markup.starts_with("<picture>"));
        assert!(markup.contains("type=\"image/webp\""));
        assert!(markup.contains("type=\"image/jpeg\""));
        assert!(markup.contains("fm=webp"));
        assert!(markup.contains("fm=jpg"));
        // The fallback img is still there.
        assert!(markup.contains("<img"));
    }

    #[test]
    fn unbound_builder_fails_missing_source() {
        use crate::cdn::CdnUrlBuilder;
        use crate::extend::extend;

        let unbound = extend(CdnUrlBuilder::new("abcdefgh", "development"));
        assert!(matches!(
            img(&unbound, &[400], "100vw", "x"),
            Err(AssetError::MissingSource)
        ));
    }
}
