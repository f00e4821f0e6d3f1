//! Canonical hex+ASCII rendering of byte streams

use std::io::{self, Read, Write};

/// Bytes rendered per output line.
pub const ROW_WIDTH: usize = 16;

/// Stream `reader` to `out` as hex dump rows, labelling the first row with
/// `base_offset`. Returns the number of bytes dumped.
///
/// Each row reads `{offset:08x}  {hex bytes}  |{ascii}|`, the hex column is
/// padded so the ASCII column stays aligned on a short final row.
pub fn write_hex_dump<R: Read>(
    mut reader: R,
    out: &mut dyn Write,
    base_offset: u64,
) -> io::Result<u64> {
    let mut row = [0u8; ROW_WIDTH];
    let mut offset = base_offset;
    loop {
        let len = fill_row(&mut reader, &mut row)?;
        if len == 0 {
            break;
        }
        writeln!(out, "{}", format_row(offset, &row[..len]))?;
        offset += len as u64;
        if len < ROW_WIDTH {
            break;
        }
    }
    Ok(offset - base_offset)
}

/// Render a single row of at most [`ROW_WIDTH`] bytes.
pub fn format_row(offset: u64, bytes: &[u8]) -> String {
    let encoded = hex::encode(bytes);
    let pairs: Vec<&str> = (0..encoded.len())
        .step_by(2)
        .map(|i| &encoded[i..i + 2])
        .collect();
    let ascii: String = bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        })
        .collect();
    format!(
        "{:08x}  {:<width$}  |{}|",
        offset,
        pairs.join(" "),
        ascii,
        width = ROW_WIDTH * 3 - 1
    )
}

// Short reads are allowed by `Read`, keep reading until the row is full or EOF.
fn fill_row<R: Read>(reader: &mut R, row: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < row.len() {
        match reader.read(&mut row[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
