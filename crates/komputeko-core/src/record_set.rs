//! JSON boundary between extraction and page generation.

use std::io::{Read, Write};

use komputeko_types::{Entry, Terminaro};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::ExtractError;

/// Write the record set as an indented JSON array followed by a newline
pub fn write_json(
    entries: &[Entry],
    mut writer: impl Write,
    indent: usize,
) -> Result<(), ExtractError> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    entries.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn read_json(reader: impl Read) -> Result<Terminaro, ExtractError> {
    Ok(serde_json::from_reader(reader)?)
}
