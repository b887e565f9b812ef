use super::size::SizeLevel;
use crate::LayoutError;
use crate::algorithms::pack::{GlueOrder, PackDims};
use crate::config::{GROW_FACTOR, SHRINK_FACTOR};
use std::fmt;
use std::str::FromStr;

/// The named glue specifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlueSpec {
    Fil,
    Fill,
    Filll,
    NegFil,
    NegFill,
    NegFilll,
    Empty,
    /// Stretches and shrinks at first order; used to center material.
    Ss,
}

impl GlueSpec {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlueSpec::Fil => "fil",
            GlueSpec::Fill => "fill",
            GlueSpec::Filll => "filll",
            GlueSpec::NegFil => "neg_fil",
            GlueSpec::NegFill => "neg_fill",
            GlueSpec::NegFilll => "neg_filll",
            GlueSpec::Empty => "empty",
            GlueSpec::Ss => "ss",
        }
    }
}

impl FromStr for GlueSpec {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fil" => Ok(GlueSpec::Fil),
            "fill" => Ok(GlueSpec::Fill),
            "filll" => Ok(GlueSpec::Filll),
            "neg_fil" => Ok(GlueSpec::NegFil),
            "neg_fill" => Ok(GlueSpec::NegFill),
            "neg_filll" => Ok(GlueSpec::NegFilll),
            "empty" => Ok(GlueSpec::Empty),
            "ss" => Ok(GlueSpec::Ss),
            _ => Err(LayoutError::UnknownGlue(s.to_string())),
        }
    }
}

/// Elastic spacing.
///
/// Only the natural width follows size changes; stretch and shrink are
/// relative amounts and are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glue {
    level: SizeLevel,
    width: f64,
    stretch: f64,
    stretch_order: GlueOrder,
    shrink: f64,
    shrink_order: GlueOrder,
}

impl Glue {
    pub fn new(
        width: f64,
        stretch: f64,
        stretch_order: GlueOrder,
        shrink: f64,
        shrink_order: GlueOrder,
    ) -> Self {
        Self {
            level: SizeLevel::default(),
            width,
            stretch,
            stretch_order,
            shrink,
            shrink_order,
        }
    }

    pub fn from_spec(spec: GlueSpec) -> Self {
        use GlueOrder::*;
        match spec {
            GlueSpec::Fil => Self::new(0.0, 1.0, Fil, 0.0, Normal),
            GlueSpec::Fill => Self::new(0.0, 1.0, Fill, 0.0, Normal),
            GlueSpec::Filll => Self::new(0.0, 1.0, Filll, 0.0, Normal),
            GlueSpec::NegFil => Self::new(0.0, 0.0, Normal, 1.0, Fil),
            GlueSpec::NegFill => Self::new(0.0, 0.0, Normal, 1.0, Fill),
            GlueSpec::NegFilll => Self::new(0.0, 0.0, Normal, 1.0, Filll),
            GlueSpec::Empty => Self::default(),
            GlueSpec::Ss => Self::new(0.0, 1.0, Fil, -1.0, Fil),
        }
    }

    /// Glue from a specification name such as `"fil"` or `"ss"`.
    pub fn named(name: &str) -> Result<Self, LayoutError> {
        Ok(Self::from_spec(name.parse()?))
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn stretch(&self) -> f64 {
        self.stretch
    }

    pub fn stretch_order(&self) -> GlueOrder {
        self.stretch_order
    }

    pub fn shrink_amount(&self) -> f64 {
        self.shrink
    }

    pub fn shrink_order(&self) -> GlueOrder {
        self.shrink_order
    }

    pub fn shrink(&mut self) {
        if self.level.shrink() {
            self.width *= SHRINK_FACTOR;
        }
    }

    pub fn grow(&mut self) {
        self.level.grow();
        self.width *= GROW_FACTOR;
    }

    pub(crate) fn hpack_dims(&self, dims: &mut PackDims) {
        dims.width += self.width;
        self.add_totals(dims);
    }

    pub(crate) fn vpack_dims(&self, dims: &mut PackDims) {
        dims.height += dims.depth + self.width;
        dims.depth = 0.0;
        self.add_totals(dims);
    }

    fn add_totals(&self, dims: &mut PackDims) {
        dims.stretch[self.stretch_order.index()] += self.stretch;
        dims.shrink[self.shrink_order.index()] += self.shrink;
    }
}

impl fmt::Display for Glue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "g{:.2}+{}{:?}-{}{:?}",
            self.width, self.stretch, self.stretch_order, self.shrink, self.shrink_order
        )
    }
}
