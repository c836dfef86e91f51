//! Proof objects and public signals produced by the proving backend.

use alloy_primitives::{B256, U256};
use ark_bn254::{Bn254, Fr};
use ark_groth16::Proof;
use serde::{Deserialize, Serialize};

use crate::error::{PrimitivesError, Result};
use crate::field;
use crate::points;

pub const PROTOCOL_GROTH16: &str = "groth16";
pub const CURVE_BN254: &str = "bn254";

/// Positions of the circuit's public signals. The order is protocol-defined
/// and must never be reordered between generation and verification.
pub const SIGNAL_CLAIM_HASH: usize = 0;
pub const SIGNAL_ELIGIBILITY: usize = 1;
pub const SIGNAL_ELECTION_ID: usize = 2;
pub const PUBLIC_SIGNAL_COUNT: usize = 3;

/// A succinct eligibility proof, tagged by protocol and curve. Produced once
/// per claim and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum EligibilityProof {
    Groth16Bn254(Proof<Bn254>),
}

impl EligibilityProof {
    pub fn protocol(&self) -> &'static str {
        match self {
            Self::Groth16Bn254(_) => PROTOCOL_GROTH16,
        }
    }

    pub fn curve(&self) -> &'static str {
        match self {
            Self::Groth16Bn254(_) => CURVE_BN254,
        }
    }

    pub fn as_groth16(&self) -> &Proof<Bn254> {
        match self {
            Self::Groth16Bn254(proof) => proof,
        }
    }
}

/// Ordered public outputs of the circuit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PublicSignals(Vec<Fr>);

impl PublicSignals {
    pub fn new(signals: Vec<Fr>) -> Self {
        Self(signals)
    }

    pub fn from_decimal_strings(values: &[String]) -> Result<Self> {
        values
            .iter()
            .map(|v| field::parse_field(v))
            .collect::<Result<Vec<Fr>>>()
            .map(Self)
    }

    pub fn to_decimal_strings(&self) -> Vec<String> {
        self.0.iter().map(field::field_to_decimal).collect()
    }

    pub fn as_slice(&self) -> &[Fr] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&Fr> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Explicit arity check against the circuit's declared public-input
    /// count.
    pub fn expect_arity(&self, expected: usize) -> Result<()> {
        if self.0.len() != expected {
            return Err(PrimitivesError::SignalArity {
                expected,
                got: self.0.len(),
            });
        }
        Ok(())
    }
}

/// Everything the generator hands back for one claim: the proof itself, the
/// ordered public signals, the ABI-ready calldata string, and the submission
/// metadata (election id, one-time commitment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ProofBundleWire", try_from = "ProofBundleWire")]
pub struct ProofBundle {
    pub proof: EligibilityProof,
    pub public_signals: PublicSignals,
    pub calldata: String,
    pub election_id: U256,
    pub commitment: B256,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProofWire {
    pi_a: [String; 2],
    pi_b: [[String; 2]; 2],
    pi_c: [String; 2],
    protocol: String,
    curve: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProofBundleWire {
    proof: ProofWire,
    public_signals: Vec<String>,
    calldata: String,
    election_id: String,
    commitment: B256,
}

impl From<ProofBundle> for ProofBundleWire {
    fn from(bundle: ProofBundle) -> Self {
        let groth = bundle.proof.as_groth16();
        ProofBundleWire {
            proof: ProofWire {
                pi_a: points::g1_to_decimal(&groth.a),
                pi_b: points::g2_to_decimal_evm(&groth.b),
                pi_c: points::g1_to_decimal(&groth.c),
                protocol: bundle.proof.protocol().to_string(),
                curve: bundle.proof.curve().to_string(),
            },
            public_signals: bundle.public_signals.to_decimal_strings(),
            calldata: bundle.calldata,
            election_id: bundle.election_id.to_string(),
            commitment: bundle.commitment,
        }
    }
}

impl TryFrom<ProofBundleWire> for ProofBundle {
    type Error = PrimitivesError;

    fn try_from(wire: ProofBundleWire) -> Result<Self> {
        if wire.proof.protocol != PROTOCOL_GROTH16 || wire.proof.curve != CURVE_BN254 {
            return Err(PrimitivesError::Encoding(format!(
                "unsupported proof protocol/curve: {}/{}",
                wire.proof.protocol, wire.proof.curve
            )));
        }
        let proof = Proof::<Bn254> {
            a: points::g1_from_decimal(&wire.proof.pi_a)?,
            b: points::g2_from_decimal_evm(&wire.proof.pi_b)?,
            c: points::g1_from_decimal(&wire.proof.pi_c)?,
        };
        Ok(ProofBundle {
            proof: EligibilityProof::Groth16Bn254(proof),
            public_signals: PublicSignals::from_decimal_strings(&wire.public_signals)?,
            calldata: wire.calldata,
            election_id: U256::from_str_radix(&wire.election_id, 10)
                .map_err(|e| PrimitivesError::Encoding(format!("malformed election id: {e}")))?,
            commitment: wire.commitment,
        })
    }
}
