//! Collision avoidance for tile filenames and output directories

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::debug;
use regex::Regex;

use crate::split::errors::{SplitError, SplitResult};

const WITH_EXTENSION: &str = r"^(.*?)(?:\((\d+)\))?\.\w+$";
const WITHOUT_EXTENSION: &str = r"^(.*?)(?:\((\d+)\))?$";

/// Lowest iteration suffix not used by any of `base_names` among `entries`
///
/// An entry matches when it reads `<base>`, optionally `(<digits>)`, then an
/// extension. The extension is required unless the tiles have none
/// (`extension` empty). A match without the parenthesized part uses
/// iteration 0.
pub fn allocate_iteration_suffix<I, S>(base_names: &[String], extension: &str, entries: I) -> SplitResult<u32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if base_names.is_empty() {
        return Ok(0);
    }

    let pattern = if extension.is_empty() { WITHOUT_EXTENSION } else { WITH_EXTENSION };
    let matcher = Regex::new(pattern)
        .map_err(|e| SplitError::GenericError(format!("Failed to build name pattern: {}", e)))?;
    let bases: HashSet<&str> = base_names.iter().map(String::as_str).collect();

    let mut used = HashSet::new();
    for entry in entries {
        let Some(captures) = matcher.captures(entry.as_ref()) else {
            continue;
        };
        if !bases.contains(&captures[1]) {
            continue;
        }
        let iteration = match captures.get(2) {
            None => 0,
            Some(digits) => match digits.as_str().parse::<u32>() {
                Ok(n) => n,
                // Too large to ever collide with a suffix we would pick
                Err(_) => continue,
            },
        };
        used.insert(iteration);
    }

    let mut suffix = 0;
    while used.contains(&suffix) {
        suffix += 1;
    }
    debug!("Iteration suffixes in use: {:?}, picked {}", used, suffix);
    Ok(suffix)
}

/// `base` if `exists` says it is free, else the first free `base(1)`, `base(2)`, ...
pub fn allocate_directory_suffix_with<F>(base: &Path, exists: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    if !exists(base) {
        return base.to_path_buf();
    }
    let mut iteration: u32 = 1;
    loop {
        let mut candidate = base.as_os_str().to_os_string();
        candidate.push(format!("({})", iteration));
        let candidate = PathBuf::from(candidate);
        if !exists(&candidate) {
            debug!("{} exists, using {}", base.display(), candidate.display());
            return candidate;
        }
        iteration += 1;
    }
}

/// Undisambiguated per-image directory: `<root>/<stem prefix><suffix>`
pub fn save_directory_base(root: &Path, source: &Path, stem_chars: usize, dir_suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let prefix: String = stem.chars().take(stem_chars).collect();
    root.join(format!("{}{}", prefix, dir_suffix))
}
