//! ABI-ready calldata encoding for on-chain submission.
//!
//! The wire format is the positional tuple expected by the on-chain
//! verifier, serialized as a JSON array of decimal-string big integers:
//!
//! ```text
//! [["a0","a1"],[["b00","b01"],["b10","b11"]],["c0","c1"],["s0","s1",...]]
//! ```
//!
//! G2 limbs are in EVM pairing order (`c1` before `c0`). Encoder and parser
//! round-trip losslessly; the byte layout is a compatibility contract with
//! the verifier ABI and must not change.

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_groth16::Proof;

use crate::error::{PrimitivesError, Result};
use crate::points;
use crate::proof::{EligibilityProof, PublicSignals};

type CalldataTuple = ([String; 2], [[String; 2]; 2], [String; 2], Vec<String>);

/// A parsed calldata tuple: the three proof components plus the public
/// inputs, ready for the on-chain verifier.
#[derive(Debug, Clone)]
pub struct ProofCalldata {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
    pub public_inputs: PublicSignals,
}

impl ProofCalldata {
    pub fn encode(proof: &EligibilityProof, signals: &PublicSignals) -> Result<String> {
        let groth = proof.as_groth16();
        let tuple: CalldataTuple = (
            points::g1_to_decimal(&groth.a),
            points::g2_to_decimal_evm(&groth.b),
            points::g1_to_decimal(&groth.c),
            signals.to_decimal_strings(),
        );
        serde_json::to_string(&tuple)
            .map_err(|e| PrimitivesError::Calldata(format!("calldata serialization failed: {e}")))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let (a, b, c, signals): CalldataTuple = serde_json::from_str(raw)
            .map_err(|e| PrimitivesError::Calldata(format!("malformed calldata: {e}")))?;
        Ok(Self {
            a: points::g1_from_decimal(&a)
                .map_err(|e| PrimitivesError::Calldata(format!("component a: {e}")))?,
            b: points::g2_from_decimal_evm(&b)
                .map_err(|e| PrimitivesError::Calldata(format!("component b: {e}")))?,
            c: points::g1_from_decimal(&c)
                .map_err(|e| PrimitivesError::Calldata(format!("component c: {e}")))?,
            public_inputs: PublicSignals::from_decimal_strings(&signals)
                .map_err(|e| PrimitivesError::Calldata(format!("public inputs: {e}")))?,
        })
    }

    /// Reassembles the proof object carried by this calldata.
    pub fn to_proof(&self) -> EligibilityProof {
        EligibilityProof::Groth16Bn254(Proof::<Bn254> {
            a: self.a,
            b: self.b,
            c: self.c,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_ec::AffineRepr;

    fn synthetic_proof() -> EligibilityProof {
        EligibilityProof::Groth16Bn254(Proof::<Bn254> {
            a: G1Affine::generator(),
            b: G2Affine::generator(),
            c: G1Affine::generator(),
        })
    }

    #[test]
    fn calldata_round_trips() {
        let signals = PublicSignals::new(vec![Fr::from(7u64), Fr::from(1u64), Fr::from(3u64)]);
        let encoded = ProofCalldata::encode(&synthetic_proof(), &signals).unwrap();
        let parsed = ProofCalldata::parse(&encoded).unwrap();
        assert_eq!(parsed.public_inputs, signals);
        assert_eq!(parsed.to_proof(), synthetic_proof());
    }

    #[test]
    fn rejects_garbage_and_tampered_points() {
        assert!(ProofCalldata::parse("not calldata").is_err());
        assert!(ProofCalldata::parse("[1,2]").is_err());

        let signals = PublicSignals::new(vec![Fr::from(1u64)]);
        let encoded = ProofCalldata::encode(&synthetic_proof(), &signals).unwrap();
        // corrupt one coordinate of component a: "1" is not on the curve
        let tampered = encoded.replacen("\"1\"", "\"4\"", 1);
        assert!(ProofCalldata::parse(&tampered).is_err());
    }
}
