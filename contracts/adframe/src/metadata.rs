//! Holder-token metadata.
//!
//! `token_uri` returns `data:application/json;base64,<payload>` where the
//! decoded payload is a JSON document with `name`, `description`, `image` and
//! `attributes`. `image` is itself an SVG data URI. Everything is rendered into
//! fixed stack buffers; the contract has no allocator.

use core::fmt::{self, Write};

use adframe_errors::ContractError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use soroban_sdk::{Env, String};

use crate::types::HolderToken;

pub const JSON_URI_PREFIX: &str = "data:application/json;base64,";
pub const SVG_URI_PREFIX: &str = "data:image/svg+xml;base64,";

const SVG_CAP: usize = 512;
const SVG_B64_CAP: usize = 700;
const JSON_CAP: usize = 1_200;
const URI_CAP: usize = 1_700;

/// Renders token metadata.
pub trait MetadataProvider {
    fn token_uri(&self, e: &Env, token_id: u32, token: &HolderToken)
        -> Result<String, ContractError>;
}

/// Self-contained metadata generated from the token record.
pub struct OnChainMetadata;

/// `core::fmt::Write` over a fixed byte buffer.
struct SliceWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    fn written(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len.checked_add(s.len()).ok_or(fmt::Error)?;
        if end > self.buf.len() {
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

fn overflow(_: fmt::Error) -> ContractError {
    ContractError::Overflow
}

/// Base64 of `input`, written into `out`. Returns the encoded length.
fn encode(input: &[u8], out: &mut [u8]) -> Result<usize, ContractError> {
    STANDARD
        .encode_slice(input, out)
        .map_err(|_| ContractError::Overflow)
}

/// Base64 output is pure ASCII.
fn ascii(bytes: &[u8]) -> Result<&str, ContractError> {
    core::str::from_utf8(bytes).map_err(|_| ContractError::Overflow)
}

impl MetadataProvider for OnChainMetadata {
    fn token_uri(
        &self,
        e: &Env,
        token_id: u32,
        token: &HolderToken,
    ) -> Result<String, ContractError> {
        let mut svg_buf = [0u8; SVG_CAP];
        let mut svg = SliceWriter::new(&mut svg_buf);
        write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"350\" height=\"350\">\
             <rect width=\"100%\" height=\"100%\" fill=\"black\"/>\
             <text x=\"50%\" y=\"45%\" fill=\"white\" text-anchor=\"middle\">AdFrame #{}</text>\
             <text x=\"50%\" y=\"60%\" fill=\"gray\" text-anchor=\"middle\">since epoch {}</text>\
             </svg>",
            token_id, token.minted_epoch
        )
        .map_err(overflow)?;

        let mut svg_b64 = [0u8; SVG_B64_CAP];
        let svg_len = encode(svg.written(), &mut svg_b64)?;

        let mut json_buf = [0u8; JSON_CAP];
        let mut json = SliceWriter::new(&mut json_buf);
        write!(
            json,
            "{{\"name\":\"AdFrame Member #{}\",\
             \"description\":\"Revenue share in the AdFrame billboard.\",\
             \"image\":\"{}{}\",\
             \"attributes\":[{{\"trait_type\":\"Minted Epoch\",\"value\":{}}}]}}",
            token_id,
            SVG_URI_PREFIX,
            ascii(&svg_b64[..svg_len])?,
            token.minted_epoch
        )
        .map_err(overflow)?;

        let mut uri_buf = [0u8; URI_CAP];
        let prefix = JSON_URI_PREFIX.as_bytes();
        uri_buf[..prefix.len()].copy_from_slice(prefix);
        let body_len = encode(json.written(), &mut uri_buf[prefix.len()..])?;

        Ok(String::from_bytes(e, &uri_buf[..prefix.len() + body_len]))
    }
}
