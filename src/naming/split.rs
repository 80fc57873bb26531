//! Path and base-name decomposition.
//!
//! Only the final component of a path is ever rewritten; the directory prefix
//! is carried through verbatim, so `dir with space/file name` can only become
//! `dir with space/<new name>`.

use crate::errors::SpacermError;

/// A path cut at its last `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPath<'a> {
    /// Everything up to and including the last `/` (may be empty).
    pub prefix: &'a str,
    /// The final component; never empty.
    pub base_name: &'a str,
}

impl<'a> SplitPath<'a> {
    /// Directory holding the entry, with `dirname(3)` semantics.
    pub fn containing_dir(&self) -> &'a str {
        if self.prefix.is_empty() {
            return ".";
        }
        let trimmed = self.prefix.trim_end_matches('/');
        if trimmed.is_empty() { "/" } else { trimmed }
    }

    /// Rebuild a full path with `new_base` in place of the base name.
    pub fn with_base_name(&self, new_base: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + new_base.len());
        out.push_str(self.prefix);
        out.push_str(new_base);
        out
    }
}

/// Split `path` into directory prefix and base name.
pub fn split_path(path: &str) -> Result<SplitPath<'_>, SpacermError> {
    let (prefix, base_name) = match path.rfind('/') {
        Some(idx) => path.split_at(idx + 1),
        None => ("", path),
    };
    if base_name.is_empty() {
        return Err(SpacermError::invalid_path(path, "no file name component"));
    }
    Ok(SplitPath { prefix, base_name })
}

/// The final component of `path`.
pub fn base_name(path: &str) -> Result<&str, SpacermError> {
    split_path(path).map(|s| s.base_name)
}

/// A base name decomposed at its last `.`; `stem + extension == base name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameExtensionSplit<'a> {
    pub stem: &'a str,
    /// From the last `.` (inclusive) to the end; empty without a `.`.
    pub extension: &'a str,
}

/// A leading dot counts: `.hidden` has an empty stem and extension `.hidden`.
pub fn split_extension(base_name: &str) -> NameExtensionSplit<'_> {
    match base_name.rfind('.') {
        Some(idx) => {
            let (stem, extension) = base_name.split_at(idx);
            NameExtensionSplit { stem, extension }
        }
        None => NameExtensionSplit {
            stem: base_name,
            extension: "",
        },
    }
}
