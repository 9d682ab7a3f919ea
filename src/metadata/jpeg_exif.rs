//! JPEG EXIF reading and writing
//!
//! Fields are parsed and re-serialized with kamadak-exif; the resulting
//! TIFF structure is carried in an APP1 segment placed right after SOI.

use std::io::Cursor;

use byteorder::{BigEndian, WriteBytesExt};
use exif::experimental::Writer;
use exif::{Context, Field, In, Tag, Value};
use log::debug;

use crate::split::errors::{SplitError, SplitResult};
use super::types::ExifMap;

const SOI: [u8; 2] = [0xFF, 0xD8];
const APP0: [u8; 2] = [0xFF, 0xE0];
const APP1: [u8; 2] = [0xFF, 0xE1];
const EXIF_HEADER: &[u8; 6] = b"Exif\0\0";
const ASCII_CHARSET: &[u8; 8] = b"ASCII\0\0\0";

// The length field counts itself but not the marker
const MAX_SEGMENT_PAYLOAD: usize = u16::MAX as usize - 2;

/// Tags the writer derives from the layout it produces
fn is_structural(tag: Tag) -> bool {
    matches!(
        tag,
        Tag::ExifIFDPointer
            | Tag::GPSInfoIFDPointer
            | Tag::InteropIFDPointer
            | Tag::StripOffsets
            | Tag::StripByteCounts
            | Tag::TileOffsets
            | Tag::TileByteCounts
            | Tag::JPEGInterchangeFormat
            | Tag::JPEGInterchangeFormatLength
    )
}

/// Primary-image EXIF fields of a JPEG, or an empty map when there are none
///
/// Interoperability fields are dropped: their tag numbers overlap the GPS
/// range and the map is keyed by number alone.
pub fn read_exif_fields(bytes: &[u8]) -> ExifMap {
    let mut fields = ExifMap::new();
    let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            debug!("No usable EXIF data: {}", e);
            return fields;
        }
    };

    for field in exif.fields() {
        if field.ifd_num != In::PRIMARY
            || field.tag.context() == Context::Interop
            || is_structural(field.tag)
        {
            continue;
        }
        fields.insert(field.tag.number(), field.clone());
    }
    fields
}

/// A UserComment field holding `text` with the ASCII character code
pub fn user_comment_field(text: &str) -> Field {
    let mut data = ASCII_CHARSET.to_vec();
    data.extend_from_slice(text.as_bytes());
    Field {
        tag: Tag::UserComment,
        ifd_num: In::PRIMARY,
        value: Value::Undefined(data, 0),
    }
}

/// Text of a UserComment field, without its character code prefix
pub fn user_comment_text(field: &Field) -> Option<String> {
    match &field.value {
        Value::Undefined(data, _) if data.len() >= ASCII_CHARSET.len() => {
            let text = &data[ASCII_CHARSET.len()..];
            Some(String::from_utf8_lossy(text).trim_end_matches('\0').to_string())
        }
        _ => None,
    }
}

/// Serialize `fields` as a little-endian TIFF structure
fn serialize(fields: &ExifMap) -> SplitResult<Vec<u8>> {
    let mut writer = Writer::new();
    for field in fields.values() {
        writer.push_field(field);
    }
    let mut buffer = Cursor::new(Vec::new());
    writer
        .write(&mut buffer, true)
        .map_err(|e| SplitError::Metadata(format!("cannot encode EXIF: {}", e)))?;
    Ok(buffer.into_inner())
}

/// Offset just past a JFIF APP0 segment following SOI, or just past SOI
fn insertion_point(jpeg: &[u8]) -> usize {
    if jpeg.len() >= 6 && jpeg[2..4] == APP0 {
        let length = u16::from_be_bytes([jpeg[4], jpeg[5]]) as usize;
        let end = 4 + length;
        if length >= 2 && end <= jpeg.len() {
            return end;
        }
    }
    SOI.len()
}

/// Insert an EXIF APP1 segment into an encoded JPEG
///
/// The segment goes after the JFIF APP0 header when there is one.
pub fn embed_exif(jpeg: &[u8], fields: &ExifMap) -> SplitResult<Vec<u8>> {
    if jpeg.len() < SOI.len() || jpeg[..2] != SOI {
        return Err(SplitError::Metadata("not a JPEG stream".to_string()));
    }

    let tiff = serialize(fields)?;
    let payload_len = EXIF_HEADER.len() + tiff.len();
    if payload_len > MAX_SEGMENT_PAYLOAD {
        return Err(SplitError::Metadata(format!(
            "EXIF block of {} bytes does not fit in one APP1 segment",
            payload_len
        )));
    }

    let at = insertion_point(jpeg);
    let mut out = Vec::with_capacity(jpeg.len() + payload_len + 4);
    out.extend_from_slice(&jpeg[..at]);
    out.extend_from_slice(&APP1);
    out.write_u16::<BigEndian>((payload_len + 2) as u16)?;
    out.extend_from_slice(EXIF_HEADER);
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&jpeg[at..]);
    Ok(out)
}
