//! Decimal-string codecs for BN254 curve points.

use ark_bn254::{Fq, Fq2, G1Affine, G2Affine};

use crate::error::{PrimitivesError, Result};
use crate::field;

pub(crate) fn g1_to_decimal(point: &G1Affine) -> [String; 2] {
    [
        field::field_to_decimal(&point.x),
        field::field_to_decimal(&point.y),
    ]
}

pub(crate) fn g1_from_decimal(coords: &[String; 2]) -> Result<G1Affine> {
    let x: Fq = field::parse_field(&coords[0])?;
    let y: Fq = field::parse_field(&coords[1])?;
    let point = G1Affine::new_unchecked(x, y);
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(PrimitivesError::Encoding("G1 point is not on curve".into()));
    }
    Ok(point)
}

/// Natural limb order `[c0, c1]`, used by the verification-key JSON.
pub(crate) fn g2_to_decimal(point: &G2Affine) -> [[String; 2]; 2] {
    [
        [
            field::field_to_decimal(&point.x.c0),
            field::field_to_decimal(&point.x.c1),
        ],
        [
            field::field_to_decimal(&point.y.c0),
            field::field_to_decimal(&point.y.c1),
        ],
    ]
}

pub(crate) fn g2_from_decimal(coords: &[[String; 2]; 2]) -> Result<G2Affine> {
    g2_from_limbs(
        &coords[0][0],
        &coords[0][1],
        &coords[1][0],
        &coords[1][1],
    )
}

/// EVM pairing-precompile limb order `[c1, c0]`, used by proof calldata.
pub(crate) fn g2_to_decimal_evm(point: &G2Affine) -> [[String; 2]; 2] {
    [
        [
            field::field_to_decimal(&point.x.c1),
            field::field_to_decimal(&point.x.c0),
        ],
        [
            field::field_to_decimal(&point.y.c1),
            field::field_to_decimal(&point.y.c0),
        ],
    ]
}

pub(crate) fn g2_from_decimal_evm(coords: &[[String; 2]; 2]) -> Result<G2Affine> {
    g2_from_limbs(
        &coords[0][1],
        &coords[0][0],
        &coords[1][1],
        &coords[1][0],
    )
}

fn g2_from_limbs(x_c0: &str, x_c1: &str, y_c0: &str, y_c1: &str) -> Result<G2Affine> {
    let x = Fq2::new(field::parse_field(x_c0)?, field::parse_field(x_c1)?);
    let y = Fq2::new(field::parse_field(y_c0)?, field::parse_field(y_c1)?);
    let point = G2Affine::new_unchecked(x, y);
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(PrimitivesError::Encoding("G2 point is not on curve".into()));
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::AffineRepr;

    #[test]
    fn g1_round_trips_through_decimal() {
        let g = G1Affine::generator();
        let coords = g1_to_decimal(&g);
        assert_eq!(g1_from_decimal(&coords).unwrap(), g);
    }

    #[test]
    fn g2_round_trips_in_both_limb_orders() {
        let g = G2Affine::generator();
        assert_eq!(g2_from_decimal(&g2_to_decimal(&g)).unwrap(), g);
        assert_eq!(g2_from_decimal_evm(&g2_to_decimal_evm(&g)).unwrap(), g);
    }

    #[test]
    fn off_curve_points_are_rejected() {
        let coords = ["1".to_string(), "1".to_string()];
        assert!(g1_from_decimal(&coords).is_err());
    }
}
