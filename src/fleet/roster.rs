//! JSON persistence for ship rosters.
//!
//! Rosters are written as indented (4-space) JSON arrays so the files
//! stay readable by hand.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::starship::{Captain, Starship};
use crate::error::Result;

/// The demo roster: three Federation ships and one captain without surname.
#[must_use]
pub fn default_roster() -> Vec<Starship> {
    vec![
        Starship::new("Enterprise", Captain::new("Jean-Luc").with_surname("Picard")),
        Starship::new("Voyager", Captain::new("Kathryn").with_surname("Janeway")),
        Starship::new("Defiant", Captain::new("Benjamin").with_surname("Sisco")),
        Starship::new("Unknown", Captain::new("Nobody")),
    ]
}

/// Render ships as indented JSON.
pub fn to_pretty_json(ships: &[Starship]) -> Result<String> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    ships.serialize(&mut ser)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Write a roster to `path`, replacing any existing file.
pub fn save_roster(path: impl AsRef<Path>, ships: &[Starship]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(to_pretty_json(ships)?.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    info!(path = %path.display(), ships = ships.len(), "roster saved");
    Ok(())
}

/// Read a roster written by [`save_roster`].
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Starship>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    Ok(serde_json::from_reader(reader)?)
}
