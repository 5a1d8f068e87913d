//! Rendering of pixel dumps for terminals and tooling.

use std::io::{self, Write};

use clap::ValueEnum;
use pixelsmith_core::PixelDump;
use serde::Serialize;

/// Output format for `pixelsmith dump`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// `(R G B)` per pixel, one line per image row.
    #[default]
    Text,
    /// A JSON document with the dimensions and `[r, g, b]` triplets.
    Json,
}

/// Write `(R G B)` for every pixel, breaking the line after each row.
pub fn write_text<W: Write>(dump: PixelDump<'_>, out: &mut W) -> io::Result<()> {
    let width = dump.width() as usize;
    if width == 0 {
        return Ok(());
    }
    for (i, px) in dump.enumerate() {
        write!(out, "{px}")?;
        if (i + 1) % width == 0 {
            writeln!(out)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct DumpDocument {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

/// Write the dump as one JSON document.
pub fn write_json<W: Write>(dump: PixelDump<'_>, out: &mut W) -> serde_json::Result<()> {
    let document = DumpDocument {
        width: dump.width(),
        height: dump.height(),
        pixels: dump.map(|px| px.channels()).collect(),
    };
    serde_json::to_writer(&mut *out, &document)?;
    writeln!(out).map_err(serde_json::Error::io)
}
