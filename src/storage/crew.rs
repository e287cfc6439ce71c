//! Crew roster text files.
//!
//! A crew file is plain text with one or more names per line. Mirror
//! files hold each name reversed and title-cased, one per line.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;

/// Read every whitespace-separated name from `path`.
pub fn read_crew(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut crew = Vec::new();
    for line in reader.lines() {
        crew.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(crew)
}

/// Like [`read_crew`], but a missing file is reported and yields no names.
///
/// Other I/O errors are still returned.
pub fn read_crew_or_report(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    match read_crew(path) {
        Err(crate::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Oh no! Crew file not found");
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Title-case: first letter of each alphabetic run upper, the rest lower.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Reverse a name and title-case the result (`Picard` -> `Dracip`).
#[must_use]
pub fn mirror_name(name: &str) -> String {
    let reversed: String = name.chars().rev().collect();
    title_case(&reversed)
}

/// Write the mirrored crew to `path`, one name per line.
pub fn write_mirror_crew(path: impl AsRef<Path>, crew: &[String]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    for name in crew {
        writeln!(writer, "{}", mirror_name(name))?;
    }
    writer.flush()?;
    info!(path = %path.display(), names = crew.len(), "mirror crew written");
    Ok(())
}

/// Append one line to `path`, creating the file if needed.
pub fn append_line(path: impl AsRef<Path>, line: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path.as_ref())?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// Read a file line by line with trailing whitespace stripped.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    reader
        .lines()
        .map(|line| -> Result<String> { Ok(line?.trim_end().to_string()) })
        .collect()
}
