//! Reading the two-integer input files both programs consume.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::{MatrixError, Result};

/// Longest token accepted as a field; any `u32` fits in far fewer bytes.
const MAX_TOKEN_LEN: usize = 32;

fn parse_field(name: &'static str, token: Option<&str>) -> Result<u32> {
    let token = token.ok_or(MatrixError::MissingField(name))?;
    token.parse::<u32>().map_err(|_| MatrixError::InvalidField {
        name,
        value: token.to_string(),
    })
}

/// Parse the first two whitespace-separated tokens of `text` as unsigned
/// integers. `names` label the fields in error messages. Anything after the
/// second token is ignored.
pub fn parse_pair(text: &str, names: [&'static str; 2]) -> Result<(u32, u32)> {
    let mut tokens = text.split_whitespace();
    let first = parse_field(names[0], tokens.next())?;
    let second = parse_field(names[1], tokens.next())?;
    Ok((first, second))
}

/// Reads the next whitespace-delimited token, or `None` at end of input.
///
/// Consumes bytes only up to the end of the token, so whatever follows is
/// never read. Tokens longer than [`MAX_TOKEN_LEN`] are rejected as invalid.
fn read_token<R: BufRead>(reader: &mut R, name: &'static str) -> Result<Option<String>> {
    let mut token = Vec::new();
    for byte in reader.by_ref().bytes() {
        let byte = byte?;
        if byte.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(byte);
        if token.len() > MAX_TOKEN_LEN {
            return Err(MatrixError::InvalidField {
                name,
                value: format!("{}...", String::from_utf8_lossy(&token)),
            });
        }
    }
    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&token).into_owned()))
}

/// Read the two leading unsigned integers of the file at `path`.
///
/// Only the bytes of the two fields are read; trailing content, valid UTF-8
/// or not, is ignored.
pub fn read_pair(path: &Path, names: [&'static str; 2]) -> Result<(u32, u32)> {
    let file = File::open(path).map_err(|source| MatrixError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let first = parse_field(names[0], read_token(&mut reader, names[0])?.as_deref())?;
    let second = parse_field(names[1], read_token(&mut reader, names[1])?.as_deref())?;
    debug!(
        "read {}: {}={} {}={}",
        path.display(),
        names[0],
        first,
        names[1],
        second
    );
    Ok((first, second))
}
