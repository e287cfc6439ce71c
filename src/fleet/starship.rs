//! Captains and starships.
//!
//! Ship behaviour that differs by class (shields, weapons) is selected
//! by matching on [`ShipClass`] rather than through a type hierarchy.

use serde::{Deserialize, Serialize};

/// Ship commander. The surname is optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captain {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
}

impl Captain {
    /// Captain with a given name only.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: None,
        }
    }

    /// Set the surname. An empty surname is treated as absent.
    #[must_use]
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        let surname = surname.into();
        self.surname = (!surname.is_empty()).then_some(surname);
        self
    }

    /// Name and surname joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.surname {
            Some(surname) => format!("{} {}", self.name, surname),
            None => self.name.clone(),
        }
    }
}

/// Ship class and class-specific state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipClass {
    #[default]
    Federation,
    Klingon { lasers: bool },
}

/// A named ship under a captain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starship {
    pub name: String,
    pub captain: Captain,
    pub stardate: i64,

    #[serde(default)]
    pub class: ShipClass,
}

impl Starship {
    /// Federation ship at stardate 0.
    #[must_use]
    pub fn new(name: impl Into<String>, captain: Captain) -> Self {
        Self {
            name: name.into(),
            captain,
            stardate: 0,
            class: ShipClass::Federation,
        }
    }

    /// Klingon ship with lasers armed. Klingon ships go unnamed.
    #[must_use]
    pub fn klingon(captain: Captain) -> Self {
        Self {
            name: "Unknown".to_string(),
            captain,
            stardate: 0,
            class: ShipClass::Klingon { lasers: true },
        }
    }

    #[must_use]
    pub fn engage(&self, warp: u8) -> String {
        format!("Warp {}, engage!", warp)
    }

    #[must_use]
    pub fn raise_shields(&self) -> &'static str {
        match self.class {
            ShipClass::Federation => "Raising shields.",
            ShipClass::Klingon { .. } => "Klingon shields raised.",
        }
    }

    /// Fire lasers. `None` for ships without weapons.
    #[must_use]
    pub fn fire(&self) -> Option<String> {
        match self.class {
            ShipClass::Federation => None,
            ShipClass::Klingon { lasers: true } => {
                Some(format!("Stardate {}: Firing all lasers!", self.stardate))
            }
            ShipClass::Klingon { lasers: false } => {
                Some(format!("Stardate {}: We can't fire lasers.", self.stardate))
            }
        }
    }
}

impl std::fmt::Display for Starship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t(captain: {})", self.name, self.captain.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captain_full_name() {
        assert_eq!(Captain::new("Jean-Luc").with_surname("Picard").full_name(), "Jean-Luc Picard");
        assert_eq!(Captain::new("Worf").full_name(), "Worf");
        assert_eq!(Captain::new("Q").with_surname("").surname, None);
    }

    #[test]
    fn test_federation_ship() {
        let enterprise = Starship::new("Enterprise", Captain::new("Jean-Luc").with_surname("Picard"));
        assert_eq!(enterprise.stardate, 0);
        assert_eq!(enterprise.engage(9), "Warp 9, engage!");
        assert_eq!(enterprise.raise_shields(), "Raising shields.");
        assert_eq!(enterprise.fire(), None);
        assert_eq!(enterprise.to_string(), "Enterprise\t(captain: Jean-Luc Picard)");
    }

    #[test]
    fn test_klingon_ship() {
        let mut ship = Starship::klingon(Captain::new("Worf"));
        assert_eq!(ship.name, "Unknown");
        assert_eq!(ship.fire().unwrap(), "Stardate 0: Firing all lasers!");
        assert_eq!(ship.raise_shields(), "Klingon shields raised.");

        ship.stardate = 9000;
        ship.class = ShipClass::Klingon { lasers: false };
        assert_eq!(ship.fire().unwrap(), "Stardate 9000: We can't fire lasers.");
    }

    #[test]
    fn test_missing_surname_is_absent_not_null() {
        let json = serde_json::to_string(&Captain::new("Nobody")).unwrap();
        assert_eq!(json, r#"{"name":"Nobody"}"#);

        let captain: Captain = serde_json::from_str(r#"{"name":"Nobody"}"#).unwrap();
        assert_eq!(captain.surname, None);
    }

    #[test]
    fn test_class_defaults_to_federation() {
        let json = r#"{"name":"Voyager","captain":{"name":"Kathryn","surname":"Janeway"},"stardate":0}"#;
        let ship: Starship = serde_json::from_str(json).unwrap();
        assert_eq!(ship.class, ShipClass::Federation);
        assert_eq!(ship.captain.full_name(), "Kathryn Janeway");
    }
}
