//! Interpolation modes, element tiers and the tier classifier
//!
//! Every element type the engine accepts belongs to exactly one
//! [`ElementTier`]. The tier decides which [`Interpolation`] modes are legal
//! and whether the data can be ordered natively or only through a derived key.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Policy for combining the order statistics around a fractional rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// `lower + (higher - lower) * fraction`
    ///
    /// For 64-bit integers beyond 2^53 the result may be rounded; use
    /// [`Interpolation::Lower`], [`Interpolation::Higher`] or
    /// [`Interpolation::Nearest`] when exactness matters.
    Linear,

    /// The order statistic at the lower index
    Lower,

    /// The order statistic at the higher index
    Higher,

    /// The order statistic whose index is nearest to the rank position
    Nearest,

    /// `(lower + higher) / 2`
    Midpoint,
}

impl Interpolation {
    /// All modes, in declaration order
    pub const ALL: [Interpolation; 5] = [
        Interpolation::Linear,
        Interpolation::Lower,
        Interpolation::Higher,
        Interpolation::Nearest,
        Interpolation::Midpoint,
    ];

    /// Whether the mode combines two values arithmetically
    pub fn requires_arithmetic(&self) -> bool {
        matches!(self, Interpolation::Linear | Interpolation::Midpoint)
    }

    /// Mode used when none is configured
    ///
    /// Values without arithmetic fall back to their lower order statistic;
    /// everything else interpolates linearly.
    pub fn default_for(tier: ElementTier) -> Self {
        if tier.has_arithmetic() {
            Interpolation::Linear
        } else {
            Interpolation::Lower
        }
    }

    /// Upper-case name
    pub fn name(&self) -> &'static str {
        match self {
            Interpolation::Linear => "LINEAR",
            Interpolation::Lower => "LOWER",
            Interpolation::Higher => "HIGHER",
            Interpolation::Nearest => "NEAREST",
            Interpolation::Midpoint => "MIDPOINT",
        }
    }
}

impl Default for Interpolation {
    fn default() -> Self {
        Self::Linear
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolation {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Interpolation::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(text.trim()))
            .ok_or_else(|| Error::UnknownInterpolation(text.to_string()))
    }
}

/// Arithmetic tier of an element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementTier {
    /// Machine-width numbers with a natural order
    FixedWidthNumber,
    /// Unbounded integers, interpolated exactly
    ArbitraryPrecisionInteger,
    /// Exact decimals, interpolated exactly
    ArbitraryPrecisionDecimal,
    /// Numbers of mixed or unknown width, ordered through an `f64` key
    PolymorphicNumber,
    /// Totally ordered values without arithmetic
    GenericOrderedValue,
}

impl ElementTier {
    /// Whether `interpolation` can be computed for this tier
    pub fn supports(&self, interpolation: Interpolation) -> bool {
        self.has_arithmetic() || !interpolation.requires_arithmetic()
    }

    pub fn has_arithmetic(&self) -> bool {
        !matches!(self, ElementTier::GenericOrderedValue)
    }

    /// Whether native comparisons are unsafe and a derived key must be sorted on
    pub fn requires_key_sort(&self) -> bool {
        matches!(self, ElementTier::PolymorphicNumber)
    }
}

impl fmt::Display for ElementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementTier::FixedWidthNumber => "fixed-width number",
            ElementTier::ArbitraryPrecisionInteger => "arbitrary-precision integer",
            ElementTier::ArbitraryPrecisionDecimal => "arbitrary-precision decimal",
            ElementTier::PolymorphicNumber => "polymorphic number",
            ElementTier::GenericOrderedValue => "generic ordered value",
        };
        f.write_str(name)
    }
}

/// Declared element type of a collection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    BigInteger,
    BigDecimal,
    /// A number of unknown concrete width
    Number,
    /// Any other type
    Other { name: String, totally_ordered: bool },
}

impl TypeTag {
    /// Tag for an ordered non-numeric type
    pub fn ordered(name: impl Into<String>) -> Self {
        TypeTag::Other {
            name: name.into(),
            totally_ordered: true,
        }
    }

    /// Tag for a type without a total order
    pub fn unordered(name: impl Into<String>) -> Self {
        TypeTag::Other {
            name: name.into(),
            totally_ordered: false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::I8 => f.write_str("i8"),
            TypeTag::I16 => f.write_str("i16"),
            TypeTag::I32 => f.write_str("i32"),
            TypeTag::I64 => f.write_str("i64"),
            TypeTag::U8 => f.write_str("u8"),
            TypeTag::U16 => f.write_str("u16"),
            TypeTag::U32 => f.write_str("u32"),
            TypeTag::U64 => f.write_str("u64"),
            TypeTag::F32 => f.write_str("f32"),
            TypeTag::F64 => f.write_str("f64"),
            TypeTag::BigInteger => f.write_str("BigInt"),
            TypeTag::BigDecimal => f.write_str("Decimal"),
            TypeTag::Number => f.write_str("Number"),
            TypeTag::Other { name, .. } => f.write_str(name),
        }
    }
}

/// Map a declared element type to its tier
pub fn classify(tag: &TypeTag) -> Result<ElementTier> {
    match tag {
        TypeTag::I8
        | TypeTag::I16
        | TypeTag::I32
        | TypeTag::I64
        | TypeTag::U8
        | TypeTag::U16
        | TypeTag::U32
        | TypeTag::U64
        | TypeTag::F32
        | TypeTag::F64 => Ok(ElementTier::FixedWidthNumber),
        TypeTag::BigInteger => Ok(ElementTier::ArbitraryPrecisionInteger),
        TypeTag::BigDecimal => Ok(ElementTier::ArbitraryPrecisionDecimal),
        TypeTag::Number => Ok(ElementTier::PolymorphicNumber),
        TypeTag::Other {
            totally_ordered: true,
            ..
        } => Ok(ElementTier::GenericOrderedValue),
        TypeTag::Other { name, .. } => Err(Error::UnsupportedType(name.clone())),
    }
}
