use alloy_primitives::keccak256;
use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_ec::AffineRepr;

use zkholos_chain::{ChainError, EligibilityVerifier, MockBackend};
use zkholos_primitives::calldata::ProofCalldata;
use zkholos_primitives::commitment::derive_commitment;
use zkholos_primitives::proof::{PublicSignals, SIGNAL_ELIGIBILITY};

use common::{claim_for, election, parse_calldata, prove, setup_artifacts, verification_key, VOTER};

mod common;

/// Structurally valid calldata that is not a real proof; only meaningful
/// against the mock backend.
fn synthetic_calldata() -> ProofCalldata {
    ProofCalldata {
        a: G1Affine::generator(),
        b: G2Affine::generator(),
        c: G1Affine::generator(),
        public_inputs: PublicSignals::new(vec![
            Fr::from(9u64),
            Fr::from(1u64),
            Fr::from(1u64),
        ]),
    }
}

#[test]
fn commitment_is_consumed_exactly_once() {
    let mut verifier = EligibilityVerifier::new(Box::new(MockBackend::new(true)));
    let commitment = keccak256(b"test_commitment");

    verifier
        .verify_and_consume(&synthetic_calldata(), commitment)
        .expect("first submission");
    assert!(verifier.is_used(&commitment));

    let err = verifier
        .verify_and_consume(&synthetic_calldata(), commitment)
        .unwrap_err();
    assert!(matches!(err, ChainError::CommitmentReused));
}

#[test]
fn rejected_proof_leaves_no_state_behind() {
    let mut verifier = EligibilityVerifier::new(Box::new(MockBackend::new(false)));
    let commitment = keccak256(b"test_commitment");

    let err = verifier
        .verify_and_consume(&synthetic_calldata(), commitment)
        .unwrap_err();
    assert!(matches!(err, ChainError::VerificationRejected));
    assert!(!verifier.is_used(&commitment));
}

#[tokio::test]
async fn replay_is_rejected_even_with_a_valid_proof() {
    let (_dir, paths) = setup_artifacts();
    let bundle = prove(&paths, &claim_for(VOTER, "KYIV", 1)).await;
    let calldata = parse_calldata(&bundle);

    let mut verifier = EligibilityVerifier::groth16(verification_key(&paths)).unwrap();
    let commitment = derive_commitment(VOTER, election(1));

    verifier
        .verify_and_consume(&calldata, commitment)
        .expect("first submission");

    // identical, still-valid proof: the spent commitment alone rejects it
    let err = verifier
        .verify_and_consume(&calldata, commitment)
        .unwrap_err();
    assert!(matches!(err, ChainError::CommitmentReused));
}

#[tokio::test]
async fn onchain_and_offchain_verdicts_agree() {
    let (_dir, paths) = setup_artifacts();
    let bundle = prove(&paths, &claim_for(VOTER, "KYIV", 1)).await;
    let offchain = zkholos_prover::verifier::OffchainVerifier::new(&paths.verification_key);

    // accept case
    let calldata = parse_calldata(&bundle);
    let mut verifier = EligibilityVerifier::groth16(verification_key(&paths)).unwrap();
    assert!(offchain.verify_bundle(&bundle).unwrap());
    verifier
        .verify_and_consume(&calldata, derive_commitment(VOTER, election(1)))
        .expect("on-chain accept");

    // reject case: one tampered public signal flips both verdicts
    let mut signals = bundle.public_signals.as_slice().to_vec();
    signals[SIGNAL_ELIGIBILITY] += Fr::from(1u64);
    let tampered_signals = PublicSignals::new(signals);
    let tampered = ProofCalldata {
        public_inputs: tampered_signals.clone(),
        ..calldata
    };

    assert!(!offchain.verify(&tampered_signals, &bundle.proof).unwrap());
    let commitment = keccak256(b"fresh_commitment");
    let err = verifier.verify_and_consume(&tampered, commitment).unwrap_err();
    assert!(matches!(err, ChainError::VerificationRejected));
    assert!(!verifier.is_used(&commitment));
}
