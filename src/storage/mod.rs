//! Plain-text file storage.

pub mod crew;

pub use crew::{append_line, mirror_name, read_crew, read_crew_or_report, read_lines, write_mirror_crew};
