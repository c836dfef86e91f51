//! The voter-eligibility constraint system.
//!
//! Public inputs, in protocol order: `claim_hash`, `eligibility_flag`,
//! `election_id`. Everything else in the claim stays private. The circuit
//! enforces:
//!
//! 1. both flags are bits (`x^2 - x = 0`);
//! 2. `claim_hash = Poseidon(region_hash, election_id, voter_address,
//!    region)`;
//! 3. `eligibility_flag = is_registered * is_eligible`.

use ark_bn254::Fr;
use ark_crypto_primitives::crh::poseidon::constraints::{CRHGadget, CRHParametersVar};
use ark_crypto_primitives::crh::CRHSchemeGadget;
use ark_crypto_primitives::sponge::poseidon::PoseidonConfig;
use ark_r1cs_std::fields::fp::FpVar;
use ark_r1cs_std::prelude::*;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

use zkholos_primitives::claim::ClaimInputs;
use zkholos_primitives::proof::PublicSignals;

use crate::error::Result;
use crate::poseidon;

#[derive(Clone)]
pub struct EligibilityCircuit {
    pub hash_config: PoseidonConfig<Fr>,

    // public inputs
    pub claim_hash: Option<Fr>,
    pub eligibility_flag: Option<Fr>,
    pub election_id: Option<Fr>,

    // private witnesses
    pub region_hash: Option<Fr>,
    pub voter_address: Option<Fr>,
    pub region: Option<Fr>,
    pub is_registered: Option<Fr>,
    pub is_eligible: Option<Fr>,
}

impl EligibilityCircuit {
    /// Unassigned circuit, used for key generation.
    pub fn blank(hash_config: PoseidonConfig<Fr>) -> Self {
        Self {
            hash_config,
            claim_hash: None,
            eligibility_flag: None,
            election_id: None,
            region_hash: None,
            voter_address: None,
            region: None,
            is_registered: None,
            is_eligible: None,
        }
    }

    /// Fully assigned circuit for a canonicalized claim, plus the ordered
    /// public signals the resulting proof commits to.
    pub fn from_claim(
        inputs: &ClaimInputs,
        hash_config: PoseidonConfig<Fr>,
    ) -> Result<(Self, PublicSignals)> {
        let claim_hash = poseidon::poseidon_hash(&[
            inputs.region_hash,
            inputs.election_id,
            inputs.voter_address,
            inputs.region,
        ])?;
        let eligibility_flag = inputs.is_registered * inputs.is_eligible;

        let circuit = Self {
            hash_config,
            claim_hash: Some(claim_hash),
            eligibility_flag: Some(eligibility_flag),
            election_id: Some(inputs.election_id),
            region_hash: Some(inputs.region_hash),
            voter_address: Some(inputs.voter_address),
            region: Some(inputs.region),
            is_registered: Some(inputs.is_registered),
            is_eligible: Some(inputs.is_eligible),
        };
        let signals = PublicSignals::new(vec![claim_hash, eligibility_flag, inputs.election_id]);
        Ok((circuit, signals))
    }
}

impl ConstraintSynthesizer<Fr> for EligibilityCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> ark_relations::r1cs::Result<()> {
        let hash_params = CRHParametersVar::<Fr>::new_constant(cs.clone(), self.hash_config)?;
        let zero = FpVar::<Fr>::zero();

        // public inputs; allocation order defines the signal order
        let claim_hash = FpVar::<Fr>::new_input(cs.clone(), || {
            self.claim_hash.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let eligibility_flag = FpVar::<Fr>::new_input(cs.clone(), || {
            self.eligibility_flag.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let election_id = FpVar::<Fr>::new_input(cs.clone(), || {
            self.election_id.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // witnesses
        let region_hash = FpVar::<Fr>::new_witness(cs.clone(), || {
            self.region_hash.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let voter_address = FpVar::<Fr>::new_witness(cs.clone(), || {
            self.voter_address.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let region = FpVar::<Fr>::new_witness(cs.clone(), || {
            self.region.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let is_registered = FpVar::<Fr>::new_witness(cs.clone(), || {
            self.is_registered.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let is_eligible = FpVar::<Fr>::new_witness(cs.clone(), || {
            self.is_eligible.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // 1. is_registered and is_eligible are bits
        for flag in [&is_registered, &is_eligible] {
            let squared = flag * flag;
            (squared - flag).enforce_equal(&zero)?;
        }

        // 2. claim_hash binds every claim field
        let hash_input = vec![
            region_hash,
            election_id.clone(),
            voter_address,
            region,
        ];
        let computed_hash = CRHGadget::<Fr>::evaluate(&hash_params, &hash_input)?;
        computed_hash.enforce_equal(&claim_hash)?;

        // 3. the disclosed eligibility bit is the conjunction of both flags
        let conjunction = &is_registered * &is_eligible;
        conjunction.enforce_equal(&eligibility_flag)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_relations::r1cs::ConstraintSystem;
    use zkholos_primitives::claim::EligibilityClaim;

    fn assigned_circuit(is_registered: u8, is_eligible: u8) -> EligibilityCircuit {
        let claim = EligibilityClaim {
            region_hash: "123".into(),
            election_id: "1".into(),
            voter_address: "0x1234567890123456789012345678901234567890".into(),
            region: "1".into(),
            is_registered,
            is_eligible,
        };
        let inputs = claim.to_field_inputs().unwrap();
        EligibilityCircuit::from_claim(&inputs, poseidon::poseidon_config())
            .unwrap()
            .0
    }

    #[test]
    fn satisfied_for_well_formed_claims() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        assigned_circuit(1, 1).generate_constraints(cs.clone()).unwrap();
        assert!(cs.is_satisfied().unwrap());
    }

    #[test]
    fn unsatisfied_when_the_claim_hash_is_wrong() {
        let mut circuit = assigned_circuit(1, 1);
        circuit.claim_hash = Some(Fr::from(42u64));
        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();
        assert!(!cs.is_satisfied().unwrap());
    }

    #[test]
    fn unsatisfied_for_non_binary_flags() {
        let mut circuit = assigned_circuit(1, 1);
        circuit.is_registered = Some(Fr::from(2u64));
        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();
        assert!(!cs.is_satisfied().unwrap());
    }

    #[test]
    fn eligibility_flag_is_the_conjunction() {
        let claim = EligibilityClaim {
            region_hash: "123".into(),
            election_id: "1".into(),
            voter_address: "0x1234567890123456789012345678901234567890".into(),
            region: "1".into(),
            is_registered: 1,
            is_eligible: 0,
        };
        let inputs = claim.to_field_inputs().unwrap();
        let (circuit, signals) =
            EligibilityCircuit::from_claim(&inputs, poseidon::poseidon_config()).unwrap();
        assert_eq!(signals.as_slice()[1], Fr::from(0u64));
        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).unwrap();
        assert!(cs.is_satisfied().unwrap());
    }
}
