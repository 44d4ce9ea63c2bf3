//! Path and extension utilities

use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::types::Extension;

/// Convert absolute path to relative path from base
pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|p| p.to_path_buf())
}

/// Extension of a file name: everything from the last `.` on, dot included.
/// Returns None when the name has no dot or is not valid UTF-8.
pub fn file_extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rfind('.').map(|i| &name[i..])
}

/// True if the path's extension, lower-cased, equals `ext`.
pub fn has_extension(path: &Path, ext: &Extension) -> bool {
    file_extension(path).is_some_and(|e| e.to_lowercase() == ext.as_str())
}

/// Swap the trailing `source_ext` of `source`'s file name for `target_ext`.
///
/// Only the last `source_ext.len()` bytes change; the rest of the path is kept as is. The file name
/// must end with `source_ext` (case-insensitive), which the walk guarantees for matched files.
pub fn target_path_for(
    source: &Path,
    source_ext: &Extension,
    target_ext: &Extension,
) -> Result<PathBuf, ConvertError> {
    let mismatch = || ConvertError::ExtensionMismatch {
        path: source.to_path_buf(),
        ext: source_ext.to_string(),
    };
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(mismatch)?;
    debug_assert!(
        name.to_lowercase().ends_with(source_ext.as_str()),
        "{name} does not end with {source_ext}"
    );
    let cut = name
        .len()
        .checked_sub(source_ext.len())
        .filter(|&i| name.is_char_boundary(i))
        .filter(|&i| name[i..].to_lowercase() == source_ext.as_str())
        .ok_or_else(mismatch)?;
    Ok(source.with_file_name(format!("{}{}", &name[..cut], target_ext)))
}
