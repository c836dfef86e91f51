//! Circuit artifact handling.
//!
//! Three artifacts make up one circuit version: the circuit manifest
//! (JSON), the proving key (binary, compressed), and the verification key
//! (JSON). They are produced once by [`crate::setup`], located by fixed
//! relative paths, and read-only afterwards. Loaded keys are cached for the
//! process lifetime; concurrent reads are safe.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use ark_bn254::Bn254;
use ark_groth16::{ProvingKey, VerifyingKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use zkholos_primitives::proof::PUBLIC_SIGNAL_COUNT;
use zkholos_primitives::vkey::VerificationKeyFile;

use crate::error::{ProverError, Result};

pub const CIRCUIT_NAME: &str = "VoterEligibility";
pub const CIRCUIT_VERSION: u32 = 1;

/// Declares which circuit version a key pair belongs to, and the ordered
/// public-signal names. Mismatched key/circuit pairs fail here with a clear
/// error instead of an opaque cryptographic rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitManifest {
    pub circuit: String,
    pub version: u32,
    pub public_signals: Vec<String>,
}

impl CircuitManifest {
    pub fn current() -> Self {
        Self {
            circuit: CIRCUIT_NAME.to_string(),
            version: CIRCUIT_VERSION,
            public_signals: vec![
                "claimHash".to_string(),
                "eligibilityFlag".to_string(),
                "electionId".to_string(),
            ],
        }
    }

    pub fn arity(&self) -> usize {
        self.public_signals.len()
    }

    pub fn ensure_current(&self) -> Result<()> {
        if self.circuit != CIRCUIT_NAME || self.version != CIRCUIT_VERSION {
            return Err(ProverError::Artifact(format!(
                "circuit manifest is for {} v{}, this build expects {} v{}",
                self.circuit, self.version, CIRCUIT_NAME, CIRCUIT_VERSION
            )));
        }
        if self.arity() != PUBLIC_SIGNAL_COUNT {
            return Err(ProverError::Artifact(format!(
                "circuit manifest declares {} public signals, this build expects {}",
                self.arity(),
                PUBLIC_SIGNAL_COUNT
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    pub manifest: PathBuf,
    pub proving_key: PathBuf,
    pub verification_key: PathBuf,
}

impl ArtifactPaths {
    pub fn under(dir: &Path) -> Self {
        Self {
            manifest: dir.join("voter_eligibility.manifest.json"),
            proving_key: dir.join("voter_eligibility.pk.dat"),
            verification_key: dir.join("verification_key.json"),
        }
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::under(Path::new("build/circuits"))
    }
}

lazy_static! {
    static ref PROVING_KEYS: Mutex<HashMap<PathBuf, Arc<ProvingKey<Bn254>>>> =
        Mutex::new(HashMap::new());
    static ref VERIFYING_KEYS: Mutex<HashMap<PathBuf, Arc<VerifyingKey<Bn254>>>> =
        Mutex::new(HashMap::new());
}

pub fn require_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        return Err(ProverError::ArtifactMissing(format!(
            "{what} not found at {}",
            path.display()
        )));
    }
    Ok(())
}

pub fn load_manifest(path: &Path) -> Result<CircuitManifest> {
    require_exists(path, "circuit manifest")?;
    let raw = fs::read_to_string(path)
        .map_err(|e| ProverError::Artifact(format!("reading circuit manifest: {e}")))?;
    serde_json::from_str(&raw)
        .map_err(|e| ProverError::Artifact(format!("parsing circuit manifest: {e}")))
}

pub fn load_proving_key(path: &Path) -> Result<Arc<ProvingKey<Bn254>>> {
    require_exists(path, "proving key")?;
    let mut cache = PROVING_KEYS.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(pk) = cache.get(path) {
        return Ok(pk.clone());
    }
    let file =
        File::open(path).map_err(|e| ProverError::Artifact(format!("opening proving key: {e}")))?;
    let mut reader = BufReader::new(file);
    let pk = ProvingKey::<Bn254>::deserialize_compressed(&mut reader)
        .map_err(|e| ProverError::Artifact(format!("proving key deserialization failed: {e}")))?;
    let pk = Arc::new(pk);
    cache.insert(path.to_path_buf(), pk.clone());
    Ok(pk)
}

pub fn load_verifying_key(path: &Path) -> Result<Arc<VerifyingKey<Bn254>>> {
    require_exists(path, "verification key")?;
    let mut cache = VERIFYING_KEYS.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(vk) = cache.get(path) {
        return Ok(vk.clone());
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| ProverError::Artifact(format!("reading verification key: {e}")))?;
    let file: VerificationKeyFile = serde_json::from_str(&raw)
        .map_err(|e| ProverError::Artifact(format!("parsing verification key: {e}")))?;
    let vk = Arc::new(file.to_vk()?);
    cache.insert(path.to_path_buf(), vk.clone());
    Ok(vk)
}

pub fn store_artifacts(
    paths: &ArtifactPaths,
    pk: &ProvingKey<Bn254>,
    vk: &VerifyingKey<Bn254>,
) -> Result<()> {
    for path in [&paths.manifest, &paths.proving_key, &paths.verification_key] {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ProverError::Artifact(format!("creating artifact dir: {e}")))?;
        }
    }

    let manifest = serde_json::to_string_pretty(&CircuitManifest::current())
        .map_err(|e| ProverError::Artifact(format!("serializing circuit manifest: {e}")))?;
    fs::write(&paths.manifest, manifest)
        .map_err(|e| ProverError::Artifact(format!("writing circuit manifest: {e}")))?;

    let pk_file = File::create(&paths.proving_key)
        .map_err(|e| ProverError::Artifact(format!("creating proving key file: {e}")))?;
    let mut writer = BufWriter::new(pk_file);
    pk.serialize_compressed(&mut writer)
        .map_err(|e| ProverError::Artifact(format!("serializing proving key: {e}")))?;
    writer
        .flush()
        .map_err(|e| ProverError::Artifact(format!("writing proving key: {e}")))?;

    let vk_json = serde_json::to_string_pretty(&VerificationKeyFile::from_vk(vk))
        .map_err(|e| ProverError::Artifact(format!("serializing verification key: {e}")))?;
    fs::write(&paths.verification_key, vk_json)
        .map_err(|e| ProverError::Artifact(format!("writing verification key: {e}")))?;

    Ok(())
}
