//! Verification-key JSON artifact codec.
//!
//! The on-disk layout mirrors the de facto `verification_key.json` shape:
//! decimal-string curve coordinates keyed by `vk_alpha_1`/`vk_beta_2`/... ,
//! with `nPublic` declaring the circuit's public-input count. The document
//! is read-only at runtime and must structurally match the proving key of
//! the same circuit version.

use ark_bn254::Bn254;
use ark_groth16::VerifyingKey;
use serde::{Deserialize, Serialize};

use crate::error::{PrimitivesError, Result};
use crate::points;
use crate::proof::{CURVE_BN254, PROTOCOL_GROTH16};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationKeyFile {
    pub protocol: String,
    pub curve: String,
    #[serde(rename = "nPublic")]
    pub n_public: usize,
    pub vk_alpha_1: [String; 2],
    pub vk_beta_2: [[String; 2]; 2],
    pub vk_gamma_2: [[String; 2]; 2],
    pub vk_delta_2: [[String; 2]; 2],
    #[serde(rename = "IC")]
    pub ic: Vec<[String; 2]>,
}

impl VerificationKeyFile {
    pub fn from_vk(vk: &VerifyingKey<Bn254>) -> Self {
        Self {
            protocol: PROTOCOL_GROTH16.to_string(),
            curve: CURVE_BN254.to_string(),
            n_public: vk.gamma_abc_g1.len().saturating_sub(1),
            vk_alpha_1: points::g1_to_decimal(&vk.alpha_g1),
            vk_beta_2: points::g2_to_decimal(&vk.beta_g2),
            vk_gamma_2: points::g2_to_decimal(&vk.gamma_g2),
            vk_delta_2: points::g2_to_decimal(&vk.delta_g2),
            ic: vk.gamma_abc_g1.iter().map(points::g1_to_decimal).collect(),
        }
    }

    pub fn to_vk(&self) -> Result<VerifyingKey<Bn254>> {
        if self.protocol != PROTOCOL_GROTH16 || self.curve != CURVE_BN254 {
            return Err(PrimitivesError::VerificationKey(format!(
                "unsupported protocol/curve: {}/{}",
                self.protocol, self.curve
            )));
        }
        if self.ic.len() != self.n_public + 1 {
            return Err(PrimitivesError::VerificationKey(format!(
                "IC length {} does not match nPublic {}",
                self.ic.len(),
                self.n_public
            )));
        }
        let annotate =
            |part: &str, e: PrimitivesError| PrimitivesError::VerificationKey(format!("{part}: {e}"));
        Ok(VerifyingKey {
            alpha_g1: points::g1_from_decimal(&self.vk_alpha_1)
                .map_err(|e| annotate("vk_alpha_1", e))?,
            beta_g2: points::g2_from_decimal(&self.vk_beta_2)
                .map_err(|e| annotate("vk_beta_2", e))?,
            gamma_g2: points::g2_from_decimal(&self.vk_gamma_2)
                .map_err(|e| annotate("vk_gamma_2", e))?,
            delta_g2: points::g2_from_decimal(&self.vk_delta_2)
                .map_err(|e| annotate("vk_delta_2", e))?,
            gamma_abc_g1: self
                .ic
                .iter()
                .enumerate()
                .map(|(i, coords)| {
                    points::g1_from_decimal(coords)
                        .map_err(|e| annotate(&format!("IC[{i}]"), e))
                })
                .collect::<Result<Vec<_>>>()?,
        })
    }

    /// Declared public-input arity of the circuit this key verifies.
    pub fn arity(&self) -> usize {
        self.n_public
    }
}
