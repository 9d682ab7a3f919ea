//! Classification of positional CLI tokens
//!
//! Tokens may come in any order. `NxM` (also `N:M`, `N/M`) expands to two
//! integers, a bare number is one integer and anything else is a path.

use std::path::PathBuf;

use regex::Regex;

use crate::config::SplitConfig;
use crate::geometry::{AspectRatio, GridRequest, GridSpec};
use crate::split::{SplitError, SplitResult};

const PAIR_PATTERN: &str = r"^(\d+)[xX:/](\d+)$";
const INT_PATTERN: &str = r"^\d+$";

/// Positional tokens sorted into what they mean
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTokens {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub grid: GridRequest,
    pub aspect: Option<AspectRatio>,
    /// Problems that were resolved by falling back to defaults
    pub warnings: Vec<String>,
}

/// Sort `tokens` into paths, grid and aspect ratio
///
/// Bad numbers fall back to defaults and leave a warning instead of failing.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S], config: &SplitConfig) -> SplitResult<ParsedTokens> {
    let pair_token = Regex::new(PAIR_PATTERN).map_err(|e| SplitError::GenericError(e.to_string()))?;
    let int_token = Regex::new(INT_PATTERN).map_err(|e| SplitError::GenericError(e.to_string()))?;

    let mut warnings = Vec::new();
    let mut integers: Vec<u32> = Vec::new();
    let mut paths: Vec<PathBuf> = Vec::new();

    for token in tokens.iter().map(|t| t.as_ref()) {
        if let Some(caps) = pair_token.captures(token) {
            for group in [&caps[1], &caps[2]] {
                push_integer(group, token, &mut integers, &mut warnings);
            }
        } else if int_token.is_match(token) {
            push_integer(token, token, &mut integers, &mut warnings);
        } else {
            paths.push(PathBuf::from(token));
        }
    }

    let default_grid = GridRequest::Legacy(config.default_grid_size);
    let grid = match integers.len() {
        0 => default_grid,
        1 => {
            let size = integers[0];
            if config.is_valid_grid_size(size) {
                GridRequest::Legacy(size)
            } else {
                warnings.push(format!(
                    "Invalid grid size {}, expected one of {:?}; using {}",
                    size, config.valid_grid_sizes, config.default_grid_size
                ));
                default_grid
            }
        }
        _ => match GridSpec::new(integers[0], integers[1]) {
            Ok(spec) => GridRequest::Explicit(spec),
            Err(_) => {
                warnings.push(format!(
                    "Invalid grid {}x{}; using {}",
                    integers[0], integers[1], config.default_grid_size
                ));
                default_grid
            }
        },
    };

    let aspect = match integers.len() {
        3 => {
            warnings.push(format!("Ignoring {}: an aspect ratio needs two numbers", integers[2]));
            None
        }
        n if n >= 4 => {
            if n > 4 {
                warnings.push(format!("Ignoring extra numbers {:?}", &integers[4..]));
            }
            match AspectRatio::new(integers[2], integers[3]) {
                Ok(aspect) => Some(aspect),
                Err(_) => {
                    warnings.push(format!(
                        "Invalid aspect ratio {}:{}; splitting without one",
                        integers[2], integers[3]
                    ));
                    None
                }
            }
        }
        _ => None,
    };

    let mut paths = paths.into_iter();
    let source = paths.next();
    let destination = paths.next();
    let extra: Vec<String> = paths.map(|p| p.display().to_string()).collect();
    if !extra.is_empty() {
        warnings.push(format!("Ignoring extra arguments: {}", extra.join(" ")));
    }

    Ok(ParsedTokens {
        source,
        destination,
        grid,
        aspect,
        warnings,
    })
}

fn push_integer(digits: &str, token: &str, integers: &mut Vec<u32>, warnings: &mut Vec<String>) {
    match digits.parse::<u32>() {
        Ok(value) => integers.push(value),
        Err(_) => warnings.push(format!("Ignoring '{}': number too large", token)),
    }
}
