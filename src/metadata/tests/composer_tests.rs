//! Tests for metadata composition

use exif::{Field, In, Tag, Value};
use image::ImageFormat;

use crate::metadata::jpeg_exif::user_comment_text;
use crate::metadata::{compose_metadata, SourceMetadata, TextEntry, TileMetadata};

const PROVENANCE: &str = "Created using Splyt v1.0";

fn png_source() -> SourceMetadata {
    SourceMetadata {
        text_entries: vec![TextEntry::new("Title", "Pier"), TextEntry::new("Comment", "shot on film")],
        ..Default::default()
    }
}

fn jpeg_source() -> SourceMetadata {
    let mut source = SourceMetadata::default();
    let make = Field {
        tag: Tag::Make,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![b"Test Camera".to_vec()]),
    };
    source.exif.insert(make.tag.number(), make);
    source
}

fn text_entries(metadata: TileMetadata) -> Vec<TextEntry> {
    match metadata {
        TileMetadata::TextComment(entries) => entries,
        other => panic!("expected text metadata, got {:?}", other),
    }
}

#[test]
fn test_png_copy_only_is_unmodified() {
    let source = png_source();
    let composed = compose_metadata(&source, ImageFormat::Png, true, false, PROVENANCE);
    assert_eq!(text_entries(composed), source.text_entries);
}

#[test]
fn test_png_add_appends_to_existing_comment() {
    let composed = compose_metadata(&png_source(), ImageFormat::Png, true, true, PROVENANCE);
    let entries = text_entries(composed);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1], TextEntry::new("Comment", "shot on film\nCreated using Splyt v1.0"));
}

#[test]
fn test_png_add_only_contains_provenance() {
    let composed = compose_metadata(&png_source(), ImageFormat::Png, false, true, PROVENANCE);
    assert_eq!(text_entries(composed), vec![TextEntry::new("Comment", PROVENANCE)]);
}

#[test]
fn test_nothing_requested_is_empty() {
    for format in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Bmp] {
        let composed = compose_metadata(&png_source(), format, false, false, PROVENANCE);
        assert!(matches!(composed, TileMetadata::Empty));
    }
}

#[test]
fn test_copy_of_nothing_collapses_to_empty() {
    let composed = compose_metadata(&SourceMetadata::default(), ImageFormat::Png, true, false, PROVENANCE);
    assert!(matches!(composed, TileMetadata::Empty));
}

#[test]
fn test_jpeg_copy_and_add() {
    let source = jpeg_source();

    let copied = compose_metadata(&source, ImageFormat::Jpeg, true, false, PROVENANCE);
    match copied {
        TileMetadata::ExifMap(fields) => {
            assert_eq!(fields.len(), 1);
            assert!(fields.contains_key(&Tag::Make.number()));
        }
        other => panic!("expected EXIF, got {:?}", other),
    }

    let added = compose_metadata(&source, ImageFormat::Jpeg, false, true, PROVENANCE);
    match added {
        TileMetadata::ExifMap(fields) => {
            assert_eq!(fields.len(), 1);
            let comment = &fields[&Tag::UserComment.number()];
            assert_eq!(user_comment_text(comment).as_deref(), Some(PROVENANCE));
        }
        other => panic!("expected EXIF, got {:?}", other),
    }
}

#[test]
fn test_formats_without_metadata_support() {
    for format in [ImageFormat::Bmp, ImageFormat::Gif, ImageFormat::Tiff, ImageFormat::WebP] {
        let composed = compose_metadata(&png_source(), format, true, true, PROVENANCE);
        assert!(matches!(composed, TileMetadata::Empty));
    }
}
