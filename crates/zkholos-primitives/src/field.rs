//! Canonical conversions between user-facing string encodings and field
//! elements.
//!
//! Every value entering the proving pipeline passes through this module
//! exactly once; no caller converts strings to field elements on its own.
//! Out-of-range values are rejected here with an [`PrimitivesError::Encoding`]
//! error instead of surfacing as opaque failures deeper in the pipeline.

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;

use crate::error::{PrimitivesError, Result};

/// Parses a decimal or `0x`-prefixed hex string into a field element,
/// range-checked against the field modulus.
pub fn parse_field<F: PrimeField>(value: &str) -> Result<F> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PrimitivesError::Encoding(
            "empty field element string".into(),
        ));
    }

    let digits = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hexdigits) => BigUint::parse_bytes(hexdigits.as_bytes(), 16),
        None => BigUint::parse_bytes(trimmed.as_bytes(), 10),
    }
    .ok_or_else(|| PrimitivesError::Encoding(format!("malformed numeric string: {trimmed}")))?;

    biguint_to_field(&digits)
}

/// Parses a claim label into a field element. Numeric strings take the
/// canonical [`parse_field`] path; any other label is encoded as the
/// big-endian integer of its UTF-8 bytes (at most 31 bytes).
pub fn parse_label<F: PrimeField>(value: &str) -> Result<F> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PrimitivesError::Encoding("empty label".into()));
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) || trimmed.starts_with("0x") {
        return parse_field(trimmed);
    }
    biguint_to_field(&BigUint::from_bytes_be(trimmed.as_bytes()))
}

/// Converts a 20-byte `0x`-address into a field element. The `0x` prefix is
/// stripped before the numeric conversion.
pub fn address_to_field<F: PrimeField>(address: &str) -> Result<F> {
    let hexdigits = address
        .trim()
        .strip_prefix("0x")
        .or_else(|| address.trim().strip_prefix("0X"))
        .unwrap_or_else(|| address.trim());
    let bytes = hex::decode(hexdigits)
        .map_err(|e| PrimitivesError::Encoding(format!("malformed address hex: {e}")))?;
    if bytes.len() != 20 {
        return Err(PrimitivesError::Encoding(format!(
            "voter address must be 20 bytes, got {}",
            bytes.len()
        )));
    }
    biguint_to_field(&BigUint::from_bytes_be(&bytes))
}

/// Renders a field element as the decimal string of its canonical integer
/// representative.
pub fn field_to_decimal<F: PrimeField>(value: &F) -> String {
    value.into_bigint().to_string()
}

fn biguint_to_field<F: PrimeField>(digits: &BigUint) -> Result<F> {
    let modulus = BigUint::from_bytes_be(&F::MODULUS.to_bytes_be());
    if *digits >= modulus {
        return Err(PrimitivesError::Encoding(format!(
            "value {digits} exceeds the scalar field modulus"
        )));
    }
    Ok(F::from_le_bytes_mod_order(&digits.to_bytes_le()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_ff::One;

    #[test]
    fn parses_decimal_and_hex() {
        let a: Fr = parse_field("123").unwrap();
        let b: Fr = parse_field("0x7b").unwrap();
        assert_eq!(a, b);
        assert_eq!(field_to_decimal(&a), "123");
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert!(parse_field::<Fr>("").is_err());
        assert!(parse_field::<Fr>("  ").is_err());
        assert!(parse_field::<Fr>("12a3").is_err());
        assert!(parse_field::<Fr>("0xzz").is_err());
    }

    #[test]
    fn rejects_values_at_or_above_the_modulus() {
        // BN254 scalar field modulus
        let modulus =
            "21888242871839275222246405745257275088548364400416034343698204186575808495617";
        assert!(parse_field::<Fr>(modulus).is_err());

        let modulus_minus_one =
            "21888242871839275222246405745257275088548364400416034343698204186575808495616";
        let parsed: Fr = parse_field(modulus_minus_one).unwrap();
        assert_eq!(parsed, -Fr::one());
    }

    #[test]
    fn address_conversion_strips_prefix() {
        let with_prefix: Fr = address_to_field("0x1234567890123456789012345678901234567890").unwrap();
        let without: Fr = address_to_field("1234567890123456789012345678901234567890").unwrap();
        assert_eq!(with_prefix, without);
        assert!(address_to_field::<Fr>("0x1234").is_err());
    }

    #[test]
    fn labels_encode_deterministically() {
        let kyiv: Fr = parse_label("KYIV").unwrap();
        let again: Fr = parse_label("KYIV").unwrap();
        assert_eq!(kyiv, again);
        // numeric labels take the canonical numeric path
        let one: Fr = parse_label("1").unwrap();
        assert_eq!(one, Fr::one());
    }
}
