//! Quantiles of columns whose element type is only known at runtime
//!
//! A [`Sample`] is classified once from its [`TypeTag`], the request is
//! validated against the resulting tier, and the data is handed to the
//! matching monomorphized [`Quantiles`] engine; no per-element type checks
//! happen.

use crate::kernels::{
    BigIntegerKernel, DecimalKernel, FixedWidthKernel, OrderedKernel, PolymorphicKernel,
    QuantileKernel,
};
use crate::{classify, Interpolation, QuantileRequest, Quantiles, Result, TypeTag};
use ordstat_core::{BigInt, Decimal, Number};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// A column of values of one element type
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    BigInteger(Vec<BigInt>),
    Decimal(Vec<Decimal>),
    Number(Vec<Number>),
    /// Totally ordered values without arithmetic
    Text(Vec<String>),
}

impl Sample {
    /// Declared element type of the column
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Sample::I8(_) => TypeTag::I8,
            Sample::I16(_) => TypeTag::I16,
            Sample::I32(_) => TypeTag::I32,
            Sample::I64(_) => TypeTag::I64,
            Sample::U8(_) => TypeTag::U8,
            Sample::U16(_) => TypeTag::U16,
            Sample::U32(_) => TypeTag::U32,
            Sample::U64(_) => TypeTag::U64,
            Sample::F32(_) => TypeTag::F32,
            Sample::F64(_) => TypeTag::F64,
            Sample::BigInteger(_) => TypeTag::BigInteger,
            Sample::Decimal(_) => TypeTag::BigDecimal,
            Sample::Number(_) => TypeTag::Number,
            Sample::Text(_) => TypeTag::ordered("String"),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Sample::I8(v) => v.len(),
            Sample::I16(v) => v.len(),
            Sample::I32(v) => v.len(),
            Sample::I64(v) => v.len(),
            Sample::U8(v) => v.len(),
            Sample::U16(v) => v.len(),
            Sample::U32(v) => v.len(),
            Sample::U64(v) => v.len(),
            Sample::F32(v) => v.len(),
            Sample::F64(v) => v.len(),
            Sample::BigInteger(v) => v.len(),
            Sample::Decimal(v) => v.len(),
            Sample::Number(v) => v.len(),
            Sample::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One quantile of a [`Sample`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantileValue {
    /// Result of a fixed-width or polymorphic column
    Float(f64),
    /// Exact result of an arbitrary-precision column
    Decimal(Decimal),
    /// Element of a text column
    Text(String),
}

impl QuantileValue {
    /// The value as `f64`, if it is numeric
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            QuantileValue::Float(value) => Some(*value),
            QuantileValue::Decimal(value) => Some(value.to_f64()),
            QuantileValue::Text(_) => None,
        }
    }
}

impl fmt::Display for QuantileValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantileValue::Float(value) => write!(f, "{value}"),
            QuantileValue::Decimal(value) => write!(f, "{value}"),
            QuantileValue::Text(value) => f.write_str(value),
        }
    }
}

/// Quantiles of a dynamically typed column
///
/// Validation is identical to the typed path: bad fractions or a mode the
/// column's tier cannot support fail before the data is touched.
#[instrument(level = "debug", skip(fractions, sample), fields(element = %sample.type_tag(), len = sample.len()))]
pub fn compute_sample(
    fractions: &[f64],
    interpolation: Interpolation,
    sample: Sample,
) -> Result<Vec<Option<QuantileValue>>> {
    let tag = sample.type_tag();
    let tier = classify(&tag)?;
    let request = QuantileRequest::for_type(fractions.to_vec(), interpolation, tier, &tag.to_string())?;
    debug!("Dispatching {} fractions to the {} engine", fractions.len(), tier);
    match sample {
        Sample::I8(v) => run::<FixedWidthKernel<i8>>(request, v, QuantileValue::Float),
        Sample::I16(v) => run::<FixedWidthKernel<i16>>(request, v, QuantileValue::Float),
        Sample::I32(v) => run::<FixedWidthKernel<i32>>(request, v, QuantileValue::Float),
        Sample::I64(v) => run::<FixedWidthKernel<i64>>(request, v, QuantileValue::Float),
        Sample::U8(v) => run::<FixedWidthKernel<u8>>(request, v, QuantileValue::Float),
        Sample::U16(v) => run::<FixedWidthKernel<u16>>(request, v, QuantileValue::Float),
        Sample::U32(v) => run::<FixedWidthKernel<u32>>(request, v, QuantileValue::Float),
        Sample::U64(v) => run::<FixedWidthKernel<u64>>(request, v, QuantileValue::Float),
        Sample::F32(v) => run::<FixedWidthKernel<f32>>(request, v, QuantileValue::Float),
        Sample::F64(v) => run::<FixedWidthKernel<f64>>(request, v, QuantileValue::Float),
        Sample::BigInteger(v) => run::<BigIntegerKernel>(request, v, QuantileValue::Decimal),
        Sample::Decimal(v) => run::<DecimalKernel>(request, v, QuantileValue::Decimal),
        Sample::Number(v) => run::<PolymorphicKernel>(request, v, QuantileValue::Float),
        Sample::Text(v) => run::<OrderedKernel<String>>(request, v, QuantileValue::Text),
    }
}

fn run<K: QuantileKernel>(
    request: QuantileRequest,
    data: Vec<K::Item>,
    wrap: fn(K::Output) -> QuantileValue,
) -> Result<Vec<Option<QuantileValue>>> {
    let results = Quantiles::<K>::from_request(request).compute(data)?;
    Ok(results.into_iter().map(|result| result.map(wrap)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElementTier, Error};

    #[test]
    fn test_type_tags_classify() {
        assert_eq!(classify(&Sample::U16(vec![]).type_tag()).unwrap(), ElementTier::FixedWidthNumber);
        assert_eq!(
            classify(&Sample::Decimal(vec![]).type_tag()).unwrap(),
            ElementTier::ArbitraryPrecisionDecimal
        );
        assert_eq!(
            classify(&Sample::Text(vec![]).type_tag()).unwrap(),
            ElementTier::GenericOrderedValue
        );
        assert!(Sample::Number(vec![]).is_empty());
    }

    #[test]
    fn test_fixed_width_dispatch() {
        let result =
            compute_sample(&[0.5], Interpolation::Linear, Sample::I64(vec![4, 1, 3, 2])).unwrap();
        assert_eq!(result, vec![Some(QuantileValue::Float(2.5))]);
    }

    #[test]
    fn test_exact_dispatch() {
        let data = vec![BigInt::from(1), BigInt::from(2)];
        let result = compute_sample(&[0.5], Interpolation::Midpoint, Sample::BigInteger(data)).unwrap();
        assert_eq!(result[0].as_ref().map(|v| v.to_string()), Some("1.5".to_string()));
    }

    #[test]
    fn test_text_dispatch() {
        let words = vec!["b".to_string(), "c".to_string(), "a".to_string()];
        let result = compute_sample(&[0.0, 1.0], Interpolation::Lower, Sample::Text(words.clone())).unwrap();
        assert_eq!(
            result,
            vec![
                Some(QuantileValue::Text("a".to_string())),
                Some(QuantileValue::Text("c".to_string()))
            ]
        );

        let err = compute_sample(&[0.5], Interpolation::Linear, Sample::Text(words)).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedInterpolation { ref type_name, .. } if type_name == "String"
        ));
    }

    #[test]
    fn test_empty_and_invalid() {
        let result = compute_sample(&[0.2, 0.8], Interpolation::Nearest, Sample::F32(vec![])).unwrap();
        assert_eq!(result, vec![None, None]);

        let err = compute_sample(&[1.5], Interpolation::Linear, Sample::F64(vec![1.0])).unwrap_err();
        assert!(matches!(err, Error::InvalidFraction { .. }));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(QuantileValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(QuantileValue::Decimal("2.25".parse().unwrap()).as_f64(), Some(2.25));
        assert_eq!(QuantileValue::Text("x".to_string()).as_f64(), None);
        let json = serde_json::to_string(&QuantileValue::Decimal("0.1".parse().unwrap())).unwrap();
        assert_eq!(json, "\"0.1\"");
    }
}
