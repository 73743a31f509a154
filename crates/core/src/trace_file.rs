//! File-backed solve traces with a SHA-256 integrity digest.
//!
//! The file format is a single JSON document: the trace body plus a
//! `sha256_hex` of the body's canonical JSON encoding. Loading re-serializes
//! the parsed body, recomputes the digest, and rejects any mismatch, so a
//! hand-edited or truncated trace file never reaches the replay machinery
//! looking authentic.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::trace::SolveTrace;

#[derive(Serialize, Deserialize, Debug, Clone)]
struct TraceFileDoc {
    trace: SolveTrace,
    sha256_hex: String,
}

#[derive(Debug)]
pub enum TraceFileError {
    Io(io::Error),
    Json(serde_json::Error),
    DigestMismatch { expected: String, actual: String },
}

impl fmt::Display for TraceFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceFileError::Io(err) => write!(f, "trace file io error: {err}"),
            TraceFileError::Json(err) => write!(f, "trace file json error: {err}"),
            TraceFileError::DigestMismatch { expected, actual } => {
                write!(f, "trace digest mismatch: recorded {expected}, computed {actual}")
            }
        }
    }
}

impl From<io::Error> for TraceFileError {
    fn from(err: io::Error) -> Self {
        TraceFileError::Io(err)
    }
}

impl From<serde_json::Error> for TraceFileError {
    fn from(err: serde_json::Error) -> Self {
        TraceFileError::Json(err)
    }
}

/// Compute `hex(SHA-256(canonical_body_json))`.
fn compute_trace_sha256(trace: &SolveTrace) -> Result<String, TraceFileError> {
    let body_json = serde_json::to_string(trace)?;
    let mut hasher = Sha256::new();
    hasher.update(body_json.as_bytes());
    let result = hasher.finalize();
    Ok(format!("{result:064x}"))
}

pub fn save_trace(path: &Path, trace: &SolveTrace) -> Result<(), TraceFileError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let doc = TraceFileDoc { trace: trace.clone(), sha256_hex: compute_trace_sha256(trace)? };
    let mut json = serde_json::to_string_pretty(&doc)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

pub fn load_trace(path: &Path) -> Result<SolveTrace, TraceFileError> {
    let raw = fs::read_to_string(path)?;
    let doc: TraceFileDoc = serde_json::from_str(&raw)?;
    let actual = compute_trace_sha256(&doc.trace)?;
    if actual != doc.sha256_hex {
        return Err(TraceFileError::DigestMismatch { expected: doc.sha256_hex, actual });
    }
    Ok(doc.trace)
}
