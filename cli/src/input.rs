use std::fs;
use std::path::Path;

use macvend_common::error::InputError;

/// Gathers the addresses to look up: explicit ones first, then the file's lines.
///
/// File lines are trimmed and blank ones skipped. Fails if the file cannot be
/// read or nothing was supplied at all.
pub fn collect(macs: &[String], file: Option<&Path>) -> Result<Vec<String>, InputError> {
    let mut addresses: Vec<String> = macs.to_vec();

    if let Some(path) = file {
        let content = fs::read_to_string(path).map_err(|source| InputError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        addresses.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    if addresses.is_empty() {
        return Err(InputError::NoAddresses);
    }
    Ok(addresses)
}
