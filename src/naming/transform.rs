//! Base-name transformation.
//!
//! Two passes, always in this order:
//! 1. strip: delete strip-set characters from the stem only (extension kept);
//! 2. spaces: remove or substitute spaces across the whole name.

use super::policy::TransformPolicy;
use super::split::{split_extension, split_path};
use crate::errors::SpacermError;

/// Apply `policy` to a base name. The result may be empty; see [`renamed_path`].
pub fn transform_name(base_name: &str, policy: &TransformPolicy) -> String {
    let stripped = if policy.strip_set().is_empty() {
        base_name.to_owned()
    } else {
        let parts = split_extension(base_name);
        let mut out: String = parts
            .stem
            .chars()
            .filter(|c| !policy.strip_set().contains(c))
            .collect();
        out.push_str(parts.extension);
        out
    };

    match policy.spaces().replacement() {
        Some(r) => stripped.replace(' ', &r.to_string()),
        None => stripped.chars().filter(|&c| c != ' ').collect(),
    }
}

/// Compute the new full path for `path`: directory prefix untouched, base
/// name transformed. Fails when there is no base name or nothing is left.
pub fn renamed_path(path: &str, policy: &TransformPolicy) -> Result<String, SpacermError> {
    let split = split_path(path)?;
    let new_base = transform_name(split.base_name, policy);
    if new_base.is_empty() {
        return Err(SpacermError::invalid_path(
            path,
            "every character of the file name would be removed",
        ));
    }
    Ok(split.with_base_name(&new_base))
}
