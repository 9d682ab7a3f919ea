//! Tests for tile filename construction

use std::path::Path;

use crate::geometry::{plan_tiles, GridSpec, ImageDimensions};
use crate::naming::{column_letter, tile_base_name, tile_file_name, NamingPlan};

#[test]
fn test_base_names_follow_grid_position() {
    assert_eq!(tile_base_name("img", 0, 0).unwrap(), "img_a1");
    assert_eq!(tile_base_name("img", 1, 0).unwrap(), "img_b1");
    assert_eq!(tile_base_name("img", 0, 1).unwrap(), "img_a2");
    assert_eq!(tile_base_name("img", 25, 11).unwrap(), "img_z12");
}

#[test]
fn test_columns_beyond_z_are_rejected() {
    assert_eq!(column_letter(25), Some('z'));
    assert_eq!(column_letter(26), None);
    assert!(tile_base_name("img", 26, 0).is_err());
}

#[test]
fn test_suffix_marker() {
    assert_eq!(tile_file_name("img_a1", 0, ".png"), "img_a1.png");
    assert_eq!(tile_file_name("img_a1", 3, ".png"), "img_a1(3).png");
    assert_eq!(tile_file_name("img_a1", 1, ""), "img_a1(1)");
}

#[test]
fn test_plan_keeps_source_extension_case() {
    let tiles = plan_tiles(ImageDimensions::new(20, 10), GridSpec::new(2, 2).unwrap(), None).unwrap();
    let mut plan = NamingPlan::for_tiles(Path::new("/tmp/Holiday Photo.JPG"), &tiles).unwrap();
    assert_eq!(
        plan.file_names(),
        vec![
            "Holiday Photo_a1.JPG",
            "Holiday Photo_b1.JPG",
            "Holiday Photo_a2.JPG",
            "Holiday Photo_b2.JPG"
        ]
    );
    plan.suffix = 2;
    assert_eq!(plan.file_name(3).as_deref(), Some("Holiday Photo_b2(2).JPG"));
    assert_eq!(plan.file_name(4), None);
}
