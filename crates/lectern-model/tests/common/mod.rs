//! Fixture helpers: a minimal NBT encoder for building structure files in
//! tests. The workspace itself never writes NBT.

use byteorder::{BigEndian, WriteBytesExt};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

pub struct PaletteEntry {
    pub name: &'static str,
    pub properties: Vec<(&'static str, &'static str)>,
}

pub fn entry(name: &'static str) -> PaletteEntry {
    PaletteEntry {
        name,
        properties: Vec::new(),
    }
}

pub fn entry_with(name: &'static str, properties: &[(&'static str, &'static str)]) -> PaletteEntry {
    PaletteEntry {
        name,
        properties: properties.to_vec(),
    }
}

fn write_named_header(out: &mut Vec<u8>, type_id: u8, name: &str) {
    out.write_u8(type_id).unwrap();
    out.write_u16::<BigEndian>(name.len() as u16).unwrap();
    out.extend_from_slice(name.as_bytes());
}

fn write_string_payload(out: &mut Vec<u8>, value: &str) {
    out.write_u16::<BigEndian>(value.len() as u16).unwrap();
    out.extend_from_slice(value.as_bytes());
}

fn write_palette_entry(out: &mut Vec<u8>, entry: &PaletteEntry) {
    write_named_header(out, 8, "Name");
    write_string_payload(out, entry.name);
    if !entry.properties.is_empty() {
        write_named_header(out, 10, "Properties");
        for (key, value) in &entry.properties {
            write_named_header(out, 8, key);
            write_string_payload(out, value);
        }
        out.write_u8(0).unwrap();
    }
    out.write_u8(0).unwrap();
}

fn write_placement(out: &mut Vec<u8>, state: i32, pos: [i32; 3]) {
    write_named_header(out, 3, "state");
    out.write_i32::<BigEndian>(state).unwrap();
    write_named_header(out, 9, "pos");
    out.write_u8(3).unwrap();
    out.write_i32::<BigEndian>(3).unwrap();
    for component in pos {
        out.write_i32::<BigEndian>(component).unwrap();
    }
    out.write_u8(0).unwrap();
}

/// Encodes an uncompressed structure file with the given palette and
/// placements.
pub fn encode_structure(palette: &[PaletteEntry], blocks: &[(i32, [i32; 3])]) -> Vec<u8> {
    let mut out = Vec::new();
    write_named_header(&mut out, 10, "");

    write_named_header(&mut out, 9, "palette");
    out.write_u8(10).unwrap();
    out.write_i32::<BigEndian>(palette.len() as i32).unwrap();
    for entry in palette {
        write_palette_entry(&mut out, entry);
    }

    write_named_header(&mut out, 9, "blocks");
    out.write_u8(10).unwrap();
    out.write_i32::<BigEndian>(blocks.len() as i32).unwrap();
    for &(state, pos) in blocks {
        write_placement(&mut out, state, pos);
    }

    out.write_u8(0).unwrap();
    out
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}
