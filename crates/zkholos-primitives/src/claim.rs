//! Voter eligibility claims.
//!
//! A claim is the tuple of voter/election attributes fed into the proving
//! pipeline. The JSON shape matches the circuit input document produced by
//! registration clients: string-encoded numerics plus two binary flags.

use alloy_primitives::{Address, U256};
use ark_bn254::Fr;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{PrimitivesError, Result};
use crate::field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityClaim {
    pub region_hash: String,
    pub election_id: String,
    pub voter_address: String,
    pub region: String,
    pub is_registered: u8,
    pub is_eligible: u8,
}

/// Claim fields canonicalized into the proving backend's native field
/// representation, in circuit witness order.
#[derive(Debug, Clone, Copy)]
pub struct ClaimInputs {
    pub region_hash: Fr,
    pub election_id: Fr,
    pub voter_address: Fr,
    pub region: Fr,
    pub is_registered: Fr,
    pub is_eligible: Fr,
}

impl EligibilityClaim {
    /// Checks structural validity: every field present and non-empty, both
    /// flags exactly 0 or 1. Pure check, rejects before any expensive work.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("regionHash", &self.region_hash),
            ("electionId", &self.election_id),
            ("voterAddress", &self.voter_address),
            ("region", &self.region),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(PrimitivesError::Validation(format!(
                    "missing required input: {name}"
                )));
            }
        }
        if self.is_registered > 1 || self.is_eligible > 1 {
            return Err(PrimitivesError::Validation(
                "isRegistered and isEligible must be 0 or 1".into(),
            ));
        }
        Ok(())
    }

    /// Canonicalizes every claim field into the scalar field. Validates
    /// first, then rejects malformed or out-of-range numerics.
    pub fn to_field_inputs(&self) -> Result<ClaimInputs> {
        self.validate()?;
        Ok(ClaimInputs {
            region_hash: field::parse_field(&self.region_hash)?,
            election_id: field::parse_field(&self.election_id)?,
            voter_address: field::address_to_field(&self.voter_address)?,
            region: field::parse_label(&self.region)?,
            is_registered: Fr::from(u64::from(self.is_registered)),
            is_eligible: Fr::from(u64::from(self.is_eligible)),
        })
    }

    pub fn voter_address_parsed(&self) -> Result<Address> {
        Address::from_str(self.voter_address.trim())
            .map_err(|e| PrimitivesError::Encoding(format!("malformed voter address: {e}")))
    }

    pub fn election_id_parsed(&self) -> Result<U256> {
        U256::from_str_radix(self.election_id.trim(), 10)
            .map_err(|e| PrimitivesError::Encoding(format!("malformed election id: {e}")))
    }
}
