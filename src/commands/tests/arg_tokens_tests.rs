use std::path::PathBuf;

use crate::commands::arg_tokens::{parse_tokens, ParsedTokens};
use crate::config::SplitConfig;
use crate::geometry::{AspectRatio, GridRequest, GridSpec};

fn parse(tokens: &[&str]) -> ParsedTokens {
    parse_tokens(tokens, &SplitConfig::default()).unwrap()
}

#[test]
fn test_source_alone_uses_default_legacy_grid() {
    let parsed = parse(&["photo.png"]);
    assert_eq!(parsed.source, Some(PathBuf::from("photo.png")));
    assert_eq!(parsed.destination, None);
    assert_eq!(parsed.grid, GridRequest::Legacy(3));
    assert_eq!(parsed.aspect, None);
    assert!(parsed.warnings.is_empty());
}

#[test]
fn test_tokens_are_order_independent() {
    let a = parse(&["4x3", "in.jpg", "out"]);
    let b = parse(&["in.jpg", "4", "out", "3"]);
    assert_eq!(a.grid, GridRequest::Explicit(GridSpec::new(4, 3).unwrap()));
    assert_eq!(a, b);
    assert_eq!(a.destination, Some(PathBuf::from("out")));
}

#[test]
fn test_pair_separators() {
    for token in ["2x5", "2X5", "2:5", "2/5"] {
        assert_eq!(
            parse(&[token, "a.png"]).grid,
            GridRequest::Explicit(GridSpec::new(2, 5).unwrap()),
            "token {}",
            token
        );
    }
}

#[test]
fn test_legacy_size_is_validated() {
    assert_eq!(parse(&["a.png", "12"]).grid, GridRequest::Legacy(12));

    let parsed = parse(&["a.png", "5"]);
    assert_eq!(parsed.grid, GridRequest::Legacy(3));
    assert_eq!(parsed.warnings.len(), 1);
}

#[test]
fn test_aspect_ratio_follows_grid() {
    let parsed = parse(&["3x1", "16:9", "pano.jpg"]);
    assert_eq!(parsed.grid, GridRequest::Explicit(GridSpec::new(3, 1).unwrap()));
    assert_eq!(parsed.aspect, Some(AspectRatio::new(16, 9).unwrap()));
}

#[test]
fn test_zero_values_fall_back_with_warnings() {
    let grid = parse(&["0x2", "a.png"]);
    assert_eq!(grid.grid, GridRequest::Legacy(3));
    assert_eq!(grid.warnings.len(), 1);

    let aspect = parse(&["2x2", "0:1", "a.png"]);
    assert_eq!(aspect.grid, GridRequest::Explicit(GridSpec::new(2, 2).unwrap()));
    assert_eq!(aspect.aspect, None);
    assert_eq!(aspect.warnings.len(), 1);
}

#[test]
fn test_dangling_third_integer_is_ignored() {
    let parsed = parse(&["2", "2", "7", "a.png"]);
    assert_eq!(parsed.grid, GridRequest::Explicit(GridSpec::new(2, 2).unwrap()));
    assert_eq!(parsed.aspect, None);
    assert_eq!(parsed.warnings.len(), 1);
}

#[test]
fn test_mixed_tokens_are_paths() {
    let parsed = parse(&["3x", "x3", "img_2x2.png"]);
    assert_eq!(parsed.source, Some(PathBuf::from("3x")));
    assert_eq!(parsed.destination, Some(PathBuf::from("x3")));
    assert_eq!(parsed.warnings, vec!["Ignoring extra arguments: img_2x2.png".to_string()]);
}

#[test]
fn test_no_tokens() {
    let parsed = parse(&[]);
    assert_eq!(parsed.source, None);
    assert_eq!(parsed.grid, GridRequest::Legacy(3));
}

#[test]
fn test_oversized_number_is_dropped() {
    let parsed = parse(&["a.png", "99999999999"]);
    assert_eq!(parsed.grid, GridRequest::Legacy(3));
    assert_eq!(parsed.warnings.len(), 1);
}
