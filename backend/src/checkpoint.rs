//! Checkpoint - Save/Load Engine State
//!
//! Serializes an engine's state to JSON so a stream can be paused and
//! resumed later, in this process or another.
//!
//! # Critical Invariants
//!
//! - **Continuation**: a loaded engine produces exactly the output the saved
//!   engine would have produced next
//! - **Integrity**: a snapshot whose checksum does not match its state is
//!   rejected
//!
//! # Example
//!
//! ```
//! use chi_rng::{checkpoint, Engine};
//!
//! let mut engine = Engine::with_seed(12345);
//! engine.next64();
//!
//! let saved = checkpoint::save(&engine).unwrap();
//! let mut resumed = checkpoint::load(&saved).unwrap();
//! assert_eq!(engine.next64(), resumed.next64());
//! ```

use crate::rng::{Engine, EngineState};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Checkpoint errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckpointError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}

/// Engine state snapshot with integrity checksum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// The three state words
    pub state: EngineState,

    /// SHA256 of the canonical state string (lowercase hex)
    pub checksum: String,
}

impl EngineSnapshot {
    /// Capture the state of `engine`.
    pub fn capture(engine: &Engine) -> Self {
        let state = engine.state();
        Self {
            version: SNAPSHOT_VERSION,
            state,
            checksum: compute_checksum(SNAPSHOT_VERSION, &state),
        }
    }

    /// Check version and checksum.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(CheckpointError::UnsupportedVersion(self.version));
        }

        let expected = compute_checksum(self.version, &self.state);
        if expected != self.checksum {
            return Err(CheckpointError::ChecksumMismatch {
                expected,
                actual: self.checksum.clone(),
            });
        }
        Ok(())
    }

    /// Validate and rebuild the engine.
    pub fn restore(&self) -> Result<Engine, CheckpointError> {
        self.validate()?;
        Ok(Engine::from_state(self.state))
    }
}

/// Compute the SHA256 checksum of a state.
///
/// Hashes the canonical string `"{version}:{a:016x}:{b:016x}:{c:016x}"`.
pub fn compute_checksum(version: u32, state: &EngineState) -> String {
    let canonical = format!("{}:{:016x}:{:016x}:{:016x}", version, state.a, state.b, state.c);

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Serialize `engine` to a JSON snapshot.
pub fn save(engine: &Engine) -> Result<String, CheckpointError> {
    serde_json::to_string(&EngineSnapshot::capture(engine))
        .map_err(|e| CheckpointError::Serialization(format!("Snapshot serialization failed: {}", e)))
}

/// Parse and validate a JSON snapshot produced by [`save`].
pub fn load(json: &str) -> Result<Engine, CheckpointError> {
    let snapshot: EngineSnapshot = serde_json::from_str(json).map_err(|e| {
        CheckpointError::Serialization(format!("Snapshot deserialization failed: {}", e))
    })?;

    match snapshot.restore() {
        Ok(engine) => {
            debug!("restored engine from snapshot version {}", snapshot.version);
            Ok(engine)
        }
        Err(e) => {
            warn!("rejected engine snapshot: {}", e);
            Err(e)
        }
    }
}
