//! SHA-256 helpers for verifying pipeline inputs.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

/// Compute the lowercase hex SHA-256 of a file, streaming its content.
pub fn hash_file(path: &Path) -> io::Result<String> {
  let mut reader = BufReader::new(File::open(path)?);
  let mut hasher = Sha256::new();
  let mut buf = [0u8; 8192];

  loop {
    let n = reader.read(&mut buf)?;
    if n == 0 {
      break;
    }
    hasher.update(&buf[..n]);
  }

  Ok(hex::encode(hasher.finalize()))
}
