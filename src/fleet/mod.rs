//! Starship roster model and its JSON files.

pub mod roster;
pub mod starship;

pub use roster::{default_roster, load_roster, save_roster, to_pretty_json};
pub use starship::{Captain, ShipClass, Starship};
