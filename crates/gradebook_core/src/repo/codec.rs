//! Encoding of a record collection into one backing file.
//!
//! # Invariants
//! - `decode(encode(records))` yields the same records in the same order.
//! - A document written for one record kind is never decoded as another.

use crate::model::Entity;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Converts a full record collection to and from file bytes.
pub trait Codec<E> {
    fn encode(&self, records: &[E]) -> Result<Vec<u8>, CodecError>;
    fn decode(&self, bytes: &[u8]) -> Result<Vec<E>, CodecError>;
}

#[derive(Debug)]
pub enum CodecError {
    Json(serde_json::Error),
    KindMismatch {
        expected: &'static str,
        found: String,
    },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed document: {err}"),
            Self::KindMismatch { expected, found } => write!(
                f,
                "document holds `{found}` records, expected `{expected}`"
            ),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::KindMismatch { .. } => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Pretty-printed JSON document: `{ "kind": "...", "records": [...] }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[derive(Serialize)]
struct DocumentOut<'a, E> {
    kind: &'static str,
    records: &'a [E],
}

/// Records stay untyped until `kind` has been checked.
#[derive(Deserialize)]
struct DocumentIn {
    kind: String,
    records: serde_json::Value,
}

impl<E: Entity> Codec<E> for JsonCodec {
    fn encode(&self, records: &[E]) -> Result<Vec<u8>, CodecError> {
        let document = DocumentOut {
            kind: E::KIND,
            records,
        };
        let mut bytes = serde_json::to_vec_pretty(&document)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<E>, CodecError> {
        let document: DocumentIn = serde_json::from_slice(bytes)?;
        if document.kind != E::KIND {
            return Err(CodecError::KindMismatch {
                expected: E::KIND,
                found: document.kind,
            });
        }
        Ok(serde_json::from_value(document.records)?)
    }
}
