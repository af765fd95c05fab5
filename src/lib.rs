//! # respimg
//!
//! Responsive-image ergonomics for image-CDN URL builders: intrinsic aspect
//! ratios, `srcset` candidate lists, and a conditional `sizes`/`srcset` DSL,
//! all bolted onto a fluent builder without modifying it.
//!
//! # Architecture: A Decorator Around a Builder
//!
//! Everything hangs off one type, [`Extended<B>`]: a decorator that wraps a
//! URL builder and keeps the chain "extended" through every call.
//!
//! ```text
//! extend(builder)            →  Extended<B>
//!   .image(source)           →  Extended<B>   (forwarded, re-wrapped)
//!   .width(1200).quality(80) →  Extended<B>   (forwarded, re-wrapped)
//!   .url()                   →  String        (terminal, never wrapped)
//!   .ratio()/.srcset()/.sizes()              (diverted to the extensions)
//! ```
//!
//! The builder is opaque to the extension layer. Anything implementing
//! [`ImageUrlBuilder`] can be wrapped; the crate ships [`CdnUrlBuilder`] for
//! sanity-style CDNs, and the extensions only ever touch a builder through
//! `image`, `width`, `url`, and the `source` accessor.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`extend`](mod@extend) | The decorator — forwarding plus the three extension entry points |
//! | [`builder`] | The [`ImageUrlBuilder`] collaborator contract |
//! | [`asset`] | Asset-id parsing and source resolution (`<kind>-<hash>-<WxH>-<ext>`) |
//! | [`responsive`] | `ratio` and `srcset` string rendering |
//! | [`sizes`] | The `when`/`then`/`otherwise` conditional DSL |
//! | [`params`] | Typed configuration vocabulary (formats, fit/crop modes, …) |
//! | [`cdn`] | Reference sanity-style builder (pure parameter map, no I/O) |
//! | [`html`] | maud `<img>`/`<picture>` helpers carrying the attributes |
//!
//! # Design Decisions
//!
//! ## Static Decorator, Not Dynamic Dispatch
//!
//! The builder's configuration surface is finite and known, so [`Extended`]
//! implements [`ImageUrlBuilder`] itself and forwards each method
//! explicitly, re-wrapping the result. That keeps every chain statically
//! checked: a typo'd method is a compile error, a terminal value can never
//! masquerade as a builder, and the extensions remain reachable after any
//! sequence of configuration calls.
//!
//! ## The Identifier Is the Source of Truth
//!
//! `ratio()` re-parses the bound asset id on every call. Intrinsic
//! dimensions are never cached and never influenced by `width`/`height`
//! configuration — a chain can resize freely and still report the asset's
//! true aspect ratio.
//!
//! ## Exact Float Formatting
//!
//! Aspect ratios render with `f64`'s shortest-roundtrip formatting
//! (`"1.7777777777777777 / 1"` for 16x9). Rounding would be prettier and
//! wrong: the string feeds CSS `aspect-ratio` and must match what the
//! equivalent client-side computation produces.
//!
//! # Example
//!
//! ```
//! use respimg::{CdnUrlBuilder, Condition, ImageUrlBuilder, extend};
//!
//! let card = extend(CdnUrlBuilder::new("abcdefgh", "production"))
//!     .image("image-6ac29c68b72cfcfe03fdb0753d154f4b30190cc3-90x90-png")
//!     .quality(80);
//!
//! assert_eq!(card.ratio().unwrap(), "1 / 1");
//!
//! let attrs = card
//!     .sizes()
//!     .when(Condition::MaxWidth(600))
//!     .then(480)?
//!     .otherwise(800)?;
//! assert_eq!(attrs.sizes, "(max-width:600px) 480px, 800px");
//! # Ok::<(), respimg::SizesError>(())
//! ```

pub mod asset;
pub mod builder;
pub mod cdn;
pub mod extend;
pub mod html;
pub mod params;
pub mod responsive;
pub mod sizes;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use asset::{AssetError, AssetParts, AssetRef, Dimensions, ImageSource};
pub use builder::ImageUrlBuilder;
pub use cdn::CdnUrlBuilder;
pub use extend::{Extended, extend};
pub use params::{AutoMode, CropMode, FitMode, ImageFormat, Orientation};
pub use responsive::Descriptor;
pub use sizes::{Condition, ResponsiveAttrs, Sizes, SizesError};
