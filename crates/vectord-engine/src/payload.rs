//! Call payload encoding.
//!
//! Success values are JSON documents; documents larger than the
//! configured threshold are gzip-compressed before transport. The
//! decode side accepts either form.

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::Value;
use std::io::{Read, Write};
use thiserror::Error;
use tracing::warn;

use vectord_types::{InvokeError, Payload};

/// Errors while decoding a payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("decompression error: {0}")]
    Io(#[from] std::io::Error),

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode an oracle result value. JSON documents strictly larger than
/// `min_bytes` are gzip-compressed at best compression; on a
/// compression failure the raw document is sent instead.
pub fn encode_payload(value: &Value, min_bytes: usize) -> Result<Payload, InvokeError> {
    let json = serde_json::to_vec(value)?;

    if json.len() > min_bytes {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
        let compressed = match encoder.write_all(&json) {
            Ok(()) => encoder.finish(),
            Err(e) => Err(e),
        };
        match compressed {
            Ok(body) => {
                return Ok(Payload {
                    compressed: true,
                    body,
                })
            }
            Err(e) => warn!("payload compression failed, sending raw: {}", e),
        }
    }

    Ok(Payload {
        compressed: false,
        body: json,
    })
}

/// Decode a payload back into the JSON value the oracle returned.
pub fn decode_payload(payload: &Payload) -> Result<Value, PayloadError> {
    let json = if payload.compressed {
        let mut decoder = GzDecoder::new(payload.body.as_slice());
        let mut buf = Vec::new();
        decoder.read_to_end(&mut buf)?;
        buf
    } else {
        payload.body.clone()
    };
    Ok(serde_json::from_slice(&json)?)
}
