//! The voter registry contract.
//!
//! Consumes "valid proof" outcomes from the eligibility verifier and keeps
//! the per-address registration records. Two uniqueness constraints stack
//! here: commitment uniqueness in the verifier stops proof replay, address
//! uniqueness in the registry stops one identity from registering twice
//! with fresh proofs.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};
use ark_bn254::Fr;
use ark_ff::PrimeField;

use zkholos_primitives::calldata::ProofCalldata;
use zkholos_primitives::commitment::derive_commitment;
use zkholos_primitives::proof::{SIGNAL_ELECTION_ID, SIGNAL_ELIGIBILITY};

use crate::error::{ChainError, Result};
use crate::verifier::EligibilityVerifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoterRecord {
    pub region: String,
    pub is_registered: bool,
    pub is_eligible: bool,
    pub registered_at: u64,
}

#[derive(Debug)]
pub struct VoterRegistry {
    admin: Address,
    election_id: U256,
    verifier: EligibilityVerifier,
    voters: HashMap<Address, VoterRecord>,
    region_counts: HashMap<String, u64>,
    height: u64,
}

impl VoterRegistry {
    pub fn new(admin: Address, election_id: U256, verifier: EligibilityVerifier) -> Self {
        Self {
            admin,
            election_id,
            verifier,
            voters: HashMap::new(),
            region_counts: HashMap::new(),
            height: 0,
        }
    }

    /// Registers the calling voter with a fresh eligibility proof.
    ///
    /// The commitment is derived here from the submitting address and this
    /// registry's election id, never taken from the caller, so a voter
    /// cannot mint fresh commitments to evade the replay protection.
    pub fn register_voter(
        &mut self,
        voter: Address,
        region: &str,
        calldata: &ProofCalldata,
    ) -> Result<()> {
        if self.voters.contains_key(&voter) {
            return Err(ChainError::DuplicateRegistration);
        }

        let expected_election = u256_to_field(self.election_id);
        match calldata.public_inputs.get(SIGNAL_ELECTION_ID) {
            Some(id) if *id == expected_election => {}
            _ => return Err(ChainError::ElectionMismatch),
        }

        let commitment = derive_commitment(voter, self.election_id);
        self.verifier.verify_and_consume(calldata, commitment)?;

        let is_eligible = calldata
            .public_inputs
            .get(SIGNAL_ELIGIBILITY)
            .is_some_and(|flag| *flag == Fr::from(1u64));

        self.height += 1;
        self.voters.insert(
            voter,
            VoterRecord {
                region: region.to_string(),
                is_registered: true,
                is_eligible,
                registered_at: self.height,
            },
        );
        *self.region_counts.entry(region.to_string()).or_insert(0) += 1;

        tracing::info!(%voter, region, is_eligible, "voter registered");
        Ok(())
    }

    pub fn is_registered(&self, voter: &Address) -> bool {
        self.voters.contains_key(voter)
    }

    pub fn get_voter_info(&self, voter: &Address) -> Option<&VoterRecord> {
        self.voters.get(voter)
    }

    pub fn region_voter_count(&self, region: &str) -> u64 {
        self.region_counts.get(region).copied().unwrap_or(0)
    }

    pub fn update_voter_region(
        &mut self,
        caller: Address,
        voter: Address,
        region: &str,
    ) -> Result<()> {
        self.ensure_admin(caller)?;
        let record = self
            .voters
            .get_mut(&voter)
            .ok_or(ChainError::UnknownVoter)?;
        if let Some(count) = self.region_counts.get_mut(&record.region) {
            *count = count.saturating_sub(1);
        }
        record.region = region.to_string();
        *self.region_counts.entry(region.to_string()).or_insert(0) += 1;
        self.height += 1;
        Ok(())
    }

    pub fn update_voter_eligibility(
        &mut self,
        caller: Address,
        voter: Address,
        eligible: bool,
    ) -> Result<()> {
        self.ensure_admin(caller)?;
        let record = self
            .voters
            .get_mut(&voter)
            .ok_or(ChainError::UnknownVoter)?;
        record.is_eligible = eligible;
        self.height += 1;
        Ok(())
    }

    pub fn remove_voter(&mut self, caller: Address, voter: Address) -> Result<()> {
        self.ensure_admin(caller)?;
        let record = self.voters.remove(&voter).ok_or(ChainError::UnknownVoter)?;
        if let Some(count) = self.region_counts.get_mut(&record.region) {
            *count = count.saturating_sub(1);
        }
        self.height += 1;
        tracing::info!(%voter, "voter removed");
        Ok(())
    }

    fn ensure_admin(&self, caller: Address) -> Result<()> {
        if caller != self.admin {
            return Err(ChainError::NotAdmin);
        }
        Ok(())
    }
}

fn u256_to_field(value: U256) -> Fr {
    Fr::from_le_bytes_mod_order(&value.to_le_bytes::<32>())
}
