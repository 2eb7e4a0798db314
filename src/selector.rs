//! CSS Selectors - Fluent construction of compound selector strings
//!
//! A [`SelectorBuilder`] accumulates selector parts in the category order
//! CSS mandates for a compound selector (type, id, class, attribute,
//! pseudo-class, pseudo-element) and rejects out-of-order or duplicate
//! parts at append time. [`SelectorBuilder::combine`] joins two finished
//! selectors with a combinator.

use core::fmt;

/// A selector-part category.
///
/// Categories are totally ordered by their position in a compound
/// selector; [`Part::rank`] exposes the position as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Part {
    /// Type/element selector (e.g., `div`, `p`)
    Element,
    /// ID selector (e.g., `#id-name`)
    Id,
    /// Class selector (e.g., `.class-name`)
    Class,
    /// Attribute selector (e.g., `[attr]`, `[attr=value]`)
    Attribute,
    /// Pseudo-class (e.g., `:hover`, `:first-child`)
    PseudoClass,
    /// Pseudo-element (e.g., `::before`, `::after`)
    PseudoElement,
}

impl Part {
    /// Position of this category in a compound selector, 1 through 6.
    pub const fn rank(self) -> u8 {
        match self {
            Part::Element => 1,
            Part::Id => 2,
            Part::Class => 3,
            Part::Attribute => 4,
            Part::PseudoClass => 5,
            Part::PseudoElement => 6,
        }
    }

    /// Whether CSS restricts this category to one occurrence per
    /// compound selector.
    pub const fn is_unique(self) -> bool {
        matches!(self, Part::Element | Part::Id | Part::PseudoElement)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Element => write!(f, "element"),
            Part::Id => write!(f, "id"),
            Part::Class => write!(f, "class"),
            Part::Attribute => write!(f, "attribute"),
            Part::PseudoClass => write!(f, "pseudo-class"),
            Part::PseudoElement => write!(f, "pseudo-element"),
        }
    }
}

/// Selector combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (space)
    Descendant,
    /// Child combinator `>`
    Child,
    /// Next sibling combinator `+`
    NextSibling,
    /// Subsequent sibling combinator `~`
    SubsequentSibling,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::Descendant => write!(f, " "),
            Combinator::Child => write!(f, " > "),
            Combinator::NextSibling => write!(f, " + "),
            Combinator::SubsequentSibling => write!(f, " ~ "),
        }
    }
}

/// Selector construction error.
///
/// Both variants reject the offending append before anything is written,
/// so a retained clone of the builder is exactly as it was.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A part was appended after a later-ranked category was committed.
    #[error("{part} selector cannot follow {committed} selector")]
    OutOfOrder { part: Part, committed: Part },
    /// A second occurrence of a single-occurrence category.
    #[error("{part} selector already present; at most one allowed")]
    Duplicate { part: Part },
}

/// Fluent builder for a compound selector string.
///
/// Append methods consume the builder and return it on success, so a
/// chain reads as one expression:
///
/// ```
/// use css_compose::SelectorBuilder;
///
/// let sel = SelectorBuilder::new()
///     .element("a")?
///     .attr("href$=\".png\"")?
///     .pseudo_class("focus")?;
/// assert_eq!(sel.stringify(), "a[href$=\".png\"]:focus");
/// # Ok::<(), css_compose::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    buffer: String,
    committed: Option<Part>,
    seen_element: bool,
    seen_id: bool,
    seen_pseudo_element: bool,
}

impl SelectorBuilder {
    /// Create an empty builder with no committed category.
    pub fn new() -> Self {
        SelectorBuilder::default()
    }

    /// Append a type selector: `name`. Rank 1, at most one per selector.
    pub fn element(self, name: &str) -> Result<Self, SelectorError> {
        let mut this = self.admit(Part::Element)?;
        this.buffer.push_str(name);
        Ok(this)
    }

    /// Append an ID selector: `#name`. Rank 2, at most one per selector.
    pub fn id(self, name: &str) -> Result<Self, SelectorError> {
        let mut this = self.admit(Part::Id)?;
        this.buffer.push('#');
        this.buffer.push_str(name);
        Ok(this)
    }

    /// Append a class selector: `.name`. Rank 3, repeatable.
    pub fn class(self, name: &str) -> Result<Self, SelectorError> {
        let mut this = self.admit(Part::Class)?;
        this.buffer.push('.');
        this.buffer.push_str(name);
        Ok(this)
    }

    /// Append an attribute selector: `[spec]`. Rank 4, repeatable.
    ///
    /// `spec` is the full bracket interior, e.g. `href$=".png"`; it is
    /// not parsed or validated.
    pub fn attr(self, spec: &str) -> Result<Self, SelectorError> {
        let mut this = self.admit(Part::Attribute)?;
        this.buffer.push('[');
        this.buffer.push_str(spec);
        this.buffer.push(']');
        Ok(this)
    }

    /// Append a pseudo-class: `:name`. Rank 5, repeatable.
    pub fn pseudo_class(self, name: &str) -> Result<Self, SelectorError> {
        let mut this = self.admit(Part::PseudoClass)?;
        this.buffer.push(':');
        this.buffer.push_str(name);
        Ok(this)
    }

    /// Append a pseudo-element: `::name`. Rank 6, at most one per selector.
    pub fn pseudo_element(self, name: &str) -> Result<Self, SelectorError> {
        let mut this = self.admit(Part::PseudoElement)?;
        this.buffer.push_str("::");
        this.buffer.push_str(name);
        Ok(this)
    }

    /// The accumulated selector text. Idempotent; the builder remains
    /// usable afterwards.
    pub fn stringify(&self) -> &str {
        &self.buffer
    }

    /// Join two finished selectors with a combinator, producing a fresh
    /// builder. Neither input is mutated.
    ///
    /// The combined text is committed through the element category, so
    /// the result behaves like a selector whose type part is already
    /// present: it accepts further parts of rank 2 and up, and is itself
    /// a legal operand for another `combine`.
    pub fn combine(a: &SelectorBuilder, combinator: Combinator, b: &SelectorBuilder) -> Self {
        SelectorBuilder {
            buffer: format!("{}{}{}", a.buffer, combinator, b.buffer),
            committed: Some(Part::Element),
            seen_element: true,
            seen_id: false,
            seen_pseudo_element: false,
        }
    }

    /// Check ordering and uniqueness for `part`, then commit it.
    /// Nothing is mutated on rejection.
    fn admit(mut self, part: Part) -> Result<Self, SelectorError> {
        if let Some(committed) = self.committed {
            if part.rank() < committed.rank() {
                log::debug!("rejected {part} after {committed}: out of order");
                return Err(SelectorError::OutOfOrder { part, committed });
            }
        }
        let seen = match part {
            Part::Element => &mut self.seen_element,
            Part::Id => &mut self.seen_id,
            Part::PseudoElement => &mut self.seen_pseudo_element,
            _ => {
                self.committed = Some(part);
                return Ok(self);
            }
        };
        if *seen {
            log::debug!("rejected duplicate {part}");
            return Err(SelectorError::Duplicate { part });
        }
        *seen = true;
        self.committed = Some(part);
        Ok(self)
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
