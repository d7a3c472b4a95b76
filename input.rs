use std::fs;
use std::path::Path;
use encoding_rs::{Encoding, UTF_8};

use crate::error::{FreqError, Result};

/// Read the whole file and decode it as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| FreqError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input");
    Ok(decode(&bytes, path))
}

/// Every byte that does not start a valid sequence becomes one U+FFFD and
/// decoding resumes at the next byte. A leading BOM is kept as a character.
fn decode(bytes: &[u8], path: &Path) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut rest = bytes;
    let mut replaced = 0usize;
    loop {
        let valid_up_to = Encoding::utf8_valid_up_to(rest);
        let (valid, _) = UTF_8.decode_without_bom_handling(&rest[..valid_up_to]);
        text.push_str(&valid);
        if valid_up_to == rest.len() {
            break;
        }
        text.push(char::REPLACEMENT_CHARACTER);
        replaced += 1;
        rest = &rest[valid_up_to + 1..];
    }
    if replaced > 0 {
        tracing::warn!(path = %path.display(), replaced, "input is not valid UTF-8, malformed bytes counted as U+FFFD");
    }
    text
}
