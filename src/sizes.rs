//! The `sizes`/`srcset` conditional DSL.
//!
//! A [`Sizes`] value accumulates breakpoint → width rules and serializes
//! them into the paired `sizes` and `srcset` attribute strings:
//!
//! ```
//! use respimg::{CdnUrlBuilder, Condition, ImageUrlBuilder, extend};
//!
//! let hero = extend(CdnUrlBuilder::new("abcdefgh", "production"))
//!     .image("image-6ac29c68b72cfcfe03fdb0753d154f4b30190cc3-90x90-png");
//!
//! let attrs = hero
//!     .sizes()
//!     .when(Condition::MaxWidth(600))
//!     .then(480)?
//!     .otherwise(800)?;
//!
//! assert_eq!(attrs.sizes, "(max-width:600px) 480px, 800px");
//! # Ok::<(), respimg::SizesError>(())
//! ```
//!
//! ## State machine
//!
//! The chain is a small write-once machine: `when` stashes a pending
//! condition, `then` completes it into a rule, and `otherwise` appends the
//! default rule and serializes. Out-of-order calls are rejected with
//! explicit errors; the terminal state needs no representation because
//! `otherwise` consumes the value — nothing can be called after it.
//!
//! Rule order is insertion order and determines CSS media-query precedence,
//! so callers list the most specific breakpoint first. Each rule contributes
//! its width and twice its width to the srcset, producing a 1x and a 2x
//! density variant per breakpoint.

use crate::asset::AssetError;
use crate::builder::ImageUrlBuilder;
use crate::extend::Extended;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SizesError {
    #[error("`then()` must follow a `when()` that set a media condition")]
    DanglingThen,
    #[error("`otherwise()` found a `when()` with no matching `then()`")]
    DanglingElse,
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// A named breakpoint: the media feature plus its pixel threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    MinWidth(u32),
    MaxWidth(u32),
}

impl Condition {
    fn media(self) -> &'static str {
        match self {
            Condition::MinWidth(_) => "min-width",
            Condition::MaxWidth(_) => "max-width",
        }
    }

    fn breakpoint(self) -> u32 {
        match self {
            Condition::MinWidth(value) | Condition::MaxWidth(value) => value,
        }
    }
}

/// Terminal output of a [`Sizes`] chain: the paired attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveAttrs {
    pub sizes: String,
    pub srcset: String,
}

/// Accumulator for conditional width rules. Created by
/// [`Extended::sizes`](crate::extend::Extended::sizes); single-use.
#[derive(Debug)]
pub struct Sizes<'a, B: ImageUrlBuilder> {
    builder: &'a Extended<B>,
    rules: Vec<(Condition, u32)>,
    pending: Option<Condition>,
}

impl<'a, B: ImageUrlBuilder> Sizes<'a, B> {
    pub(crate) fn new(builder: &'a Extended<B>) -> Self {
        Self {
            builder,
            rules: Vec::new(),
            pending: None,
        }
    }

    /// Open a rule for the given breakpoint.
    ///
    /// A second `when` before the matching [`then`](Self::then) replaces the
    /// pending condition; the earlier one is discarded.
    pub fn when(mut self, condition: Condition) -> Self {
        self.pending = Some(condition);
        self
    }

    /// Bind the output width for the pending condition, completing the rule.
    pub fn then(mut self, width: u32) -> Result<Self, SizesError> {
        let condition = self.pending.take().ok_or(SizesError::DanglingThen)?;
        self.rules.push((condition, width));
        Ok(self)
    }

    /// Close the chain with the unconditional fallback width and serialize.
    pub fn otherwise(self, width: u32) -> Result<ResponsiveAttrs, SizesError> {
        if self.pending.is_some() {
            return Err(SizesError::DanglingElse);
        }
        self.serialize(width)
    }

    fn serialize(self, default_width: u32) -> Result<ResponsiveAttrs, SizesError> {
        let mut widths = Vec::with_capacity((self.rules.len() + 1) * 2);
        let mut clauses = Vec::with_capacity(self.rules.len() + 1);

        for &(condition, width) in &self.rules {
            widths.push(width);
            widths.push(width * 2);
            clauses.push(format!(
                "({}:{}px) {}px",
                condition.media(),
                condition.breakpoint(),
                width
            ));
        }
        widths.push(default_width);
        widths.push(default_width * 2);
        clauses.push(format!("{}px", default_width));

        // The srcset goes back through the decorator so the whole configured
        // chain is in effect for every candidate.
        Ok(ResponsiveAttrs {
            sizes: clauses.join(", "),
            srcset: self.builder.srcset(&widths)?,
        })
    }
}
