//! CSS Compose - compound selector construction and small data helpers
//!
//! Three independent units:
//! - [`selector`]: a fluent builder that assembles compound CSS selector
//!   strings, enforcing the category order and single-occurrence rules at
//!   append time, plus combinator joining of finished selectors.
//! - [`json`]: typed encode/decode wrappers over serde_json.
//! - [`shape`]: a rectangle value object with a computed area.
//!
//! No data flows between the units; they share only the crate.

pub mod json;
pub mod selector;
pub mod shape;

pub use json::{decode, decode_value, encode, ParseError, SerializationError};
pub use selector::{Combinator, Part, SelectorBuilder, SelectorError};
pub use shape::Rectangle;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        decode, decode_value, encode, Combinator, ParseError, Part, Rectangle, SelectorBuilder,
        SelectorError, SerializationError,
    };
}
