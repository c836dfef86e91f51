//! Poseidon parameters and native hashing over the BN254 scalar field.
//!
//! The same configuration backs the in-circuit gadget and the native hash,
//! so public signals computed outside the circuit match the constraint
//! system bit for bit.

use ark_bn254::Fr;
use ark_crypto_primitives::crh::poseidon::CRH;
use ark_crypto_primitives::crh::CRHScheme;
use ark_crypto_primitives::sponge::poseidon::{find_poseidon_ark_and_mds, PoseidonConfig};
use ark_ff::PrimeField;
use lazy_static::lazy_static;

use crate::error::{ProverError, Result};

const FULL_ROUNDS: usize = 8;
const PARTIAL_ROUNDS: usize = 57;
const ALPHA: u64 = 5;
const RATE: usize = 2;
const CAPACITY: usize = 1;

lazy_static! {
    static ref POSEIDON_CONFIG: PoseidonConfig<Fr> = {
        let (ark, mds) = find_poseidon_ark_and_mds::<Fr>(
            Fr::MODULUS_BIT_SIZE as u64,
            RATE,
            FULL_ROUNDS as u64,
            PARTIAL_ROUNDS as u64,
            0,
        );
        PoseidonConfig::new(FULL_ROUNDS, PARTIAL_ROUNDS, ALPHA, mds, ark, RATE, CAPACITY)
    };
}

pub fn poseidon_config() -> PoseidonConfig<Fr> {
    POSEIDON_CONFIG.clone()
}

pub fn poseidon_hash(inputs: &[Fr]) -> Result<Fr> {
    CRH::<Fr>::evaluate(&POSEIDON_CONFIG, inputs.to_vec())
        .map_err(|e| ProverError::ProofGeneration(format!("poseidon evaluation failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_input_sensitive() {
        let a = poseidon_hash(&[Fr::from(1u64), Fr::from(2u64)]).unwrap();
        let b = poseidon_hash(&[Fr::from(1u64), Fr::from(2u64)]).unwrap();
        let c = poseidon_hash(&[Fr::from(2u64), Fr::from(1u64)]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
