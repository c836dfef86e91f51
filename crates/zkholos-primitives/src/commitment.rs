//! One-time-use commitment binding a proof submission to a voter identity.
//!
//! The commitment is derived deterministically from the submitting address
//! and the election id, so a voter cannot mint a fresh commitment per
//! attempt to sidestep the replay protection. The registry recomputes the
//! same value on-chain; clients use this helper for pre-flight checks.

use alloy_primitives::{keccak256, Address, B256, U256};

pub fn derive_commitment(voter: Address, election_id: U256) -> B256 {
    let mut preimage = [0u8; 52];
    preimage[..20].copy_from_slice(voter.as_slice());
    preimage[20..].copy_from_slice(&election_id.to_be_bytes::<32>());
    keccak256(preimage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn commitment_is_deterministic_per_voter_and_election() {
        let voter = address!("1234567890123456789012345678901234567890");
        let first = derive_commitment(voter, U256::from(1));
        let again = derive_commitment(voter, U256::from(1));
        assert_eq!(first, again);
    }

    #[test]
    fn different_election_or_voter_changes_the_commitment() {
        let voter = address!("1234567890123456789012345678901234567890");
        let other = address!("0000000000000000000000000000000000000001");
        let base = derive_commitment(voter, U256::from(1));
        assert_ne!(base, derive_commitment(voter, U256::from(2)));
        assert_ne!(base, derive_commitment(other, U256::from(1)));
    }
}
