//! PNG text chunk reading and writing
//!
//! Only the chunk stream is touched here; pixel data is left to the image
//! encoder. Chunks are `length | type | data | crc`, big-endian.

use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use flate2::read::ZlibDecoder;
use flate2::Crc;
use log::debug;

use crate::split::errors::{SplitError, SplitResult};
use super::types::TextEntry;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const MAX_KEYWORD_LEN: usize = 79;

/// A chunk located inside a PNG byte stream
struct RawChunk<'a> {
    kind: [u8; 4],
    data: &'a [u8],
    /// Offset just past the CRC
    end: usize,
}

fn read_chunks(bytes: &[u8]) -> SplitResult<Vec<RawChunk<'_>>> {
    if bytes.len() < PNG_SIGNATURE.len() || bytes[..8] != PNG_SIGNATURE {
        return Err(SplitError::Metadata("not a PNG stream".to_string()));
    }

    let mut chunks = Vec::new();
    let mut cursor = Cursor::new(bytes);
    cursor.set_position(PNG_SIGNATURE.len() as u64);

    while (cursor.position() as usize) < bytes.len() {
        let length = cursor.read_u32::<BigEndian>()? as usize;
        let mut kind = [0u8; 4];
        cursor.read_exact(&mut kind)?;

        let start = cursor.position() as usize;
        let data_end = start
            .checked_add(length)
            .filter(|&end| end + 4 <= bytes.len())
            .ok_or_else(|| SplitError::Metadata(format!("truncated {} chunk", String::from_utf8_lossy(&kind))))?;

        chunks.push(RawChunk {
            kind,
            data: &bytes[start..data_end],
            end: data_end + 4,
        });
        cursor.set_position((data_end + 4) as u64);

        if &kind == b"IEND" {
            break;
        }
    }
    Ok(chunks)
}

/// Decode every tEXt, zTXt and iTXt chunk in file order
pub fn read_text_chunks(bytes: &[u8]) -> SplitResult<Vec<TextEntry>> {
    let mut entries = Vec::new();
    for chunk in read_chunks(bytes)? {
        let entry = match &chunk.kind {
            b"tEXt" => decode_text(chunk.data)?,
            b"zTXt" => decode_compressed_text(chunk.data)?,
            b"iTXt" => decode_international_text(chunk.data)?,
            _ => continue,
        };
        debug!("Found PNG text chunk '{}'", entry.keyword);
        entries.push(entry);
    }
    Ok(entries)
}

fn split_at_nul(data: &[u8]) -> SplitResult<(&[u8], &[u8])> {
    let nul = data
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| SplitError::Metadata("text chunk without keyword separator".to_string()))?;
    Ok((&data[..nul], &data[nul + 1..]))
}

fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn inflate(data: &[u8]) -> SplitResult<Vec<u8>> {
    let mut out = Vec::new();
    ZlibDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(|e| SplitError::Metadata(format!("bad compressed text: {}", e)))?;
    Ok(out)
}

fn decode_text(data: &[u8]) -> SplitResult<TextEntry> {
    let (keyword, text) = split_at_nul(data)?;
    Ok(TextEntry {
        keyword: latin1_to_string(keyword),
        text: latin1_to_string(text),
    })
}

fn decode_compressed_text(data: &[u8]) -> SplitResult<TextEntry> {
    let (keyword, rest) = split_at_nul(data)?;
    // rest[0] is the compression method, zlib is the only one defined
    let compressed = rest
        .get(1..)
        .ok_or_else(|| SplitError::Metadata("zTXt chunk without method byte".to_string()))?;
    Ok(TextEntry {
        keyword: latin1_to_string(keyword),
        text: latin1_to_string(&inflate(compressed)?),
    })
}

fn decode_international_text(data: &[u8]) -> SplitResult<TextEntry> {
    let (keyword, rest) = split_at_nul(data)?;
    if rest.len() < 2 {
        return Err(SplitError::Metadata("iTXt chunk too short".to_string()));
    }
    let compressed = rest[0] == 1;
    let (_language, rest) = split_at_nul(&rest[2..])?;
    let (_translated, text) = split_at_nul(rest)?;
    let text = if compressed { inflate(text)? } else { text.to_vec() };
    Ok(TextEntry {
        keyword: latin1_to_string(keyword),
        text: String::from_utf8(text)
            .map_err(|_| SplitError::Metadata("iTXt text is not UTF-8".to_string()))?,
    })
}

fn is_latin1(text: &str) -> bool {
    text.chars().all(|c| (c as u32) <= 0xFF && c != '\0')
}

fn encode_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) -> SplitResult<()> {
    let length = u32::try_from(data.len())
        .map_err(|_| SplitError::Metadata("text chunk too large".to_string()))?;
    let mut crc = Crc::new();
    crc.update(kind);
    crc.update(data);

    out.write_u32::<BigEndian>(length)?;
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    out.write_u32::<BigEndian>(crc.sum())?;
    Ok(())
}

fn encode_entry(out: &mut Vec<u8>, entry: &TextEntry) -> SplitResult<()> {
    let keyword = &entry.keyword;
    if keyword.is_empty() || keyword.chars().count() > MAX_KEYWORD_LEN || !is_latin1(keyword) {
        return Err(SplitError::Metadata(format!("invalid PNG text keyword '{}'", keyword)));
    }

    let mut data: Vec<u8> = keyword.chars().map(|c| c as u8).collect();
    data.push(0);

    if is_latin1(&entry.text) {
        data.extend(entry.text.chars().map(|c| c as u8));
        encode_chunk(out, b"tEXt", &data)
    } else {
        // uncompressed, no language tag, no translated keyword
        data.extend_from_slice(&[0, 0, 0, 0]);
        data.extend_from_slice(entry.text.as_bytes());
        encode_chunk(out, b"iTXt", &data)
    }
}

/// Insert `entries` right after the IHDR chunk of an encoded PNG
pub fn embed_text_chunks(png: &[u8], entries: &[TextEntry]) -> SplitResult<Vec<u8>> {
    let chunks = read_chunks(png)?;
    let header = chunks
        .first()
        .filter(|c| &c.kind == b"IHDR")
        .ok_or_else(|| SplitError::Metadata("PNG stream does not start with IHDR".to_string()))?;

    let mut text = Vec::new();
    for entry in entries {
        encode_entry(&mut text, entry)?;
    }

    let mut out = Vec::with_capacity(png.len() + text.len());
    out.extend_from_slice(&png[..header.end]);
    out.extend_from_slice(&text);
    out.extend_from_slice(&png[header.end..]);
    Ok(out)
}
