//! Integers modulo `m`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Residue class `val (mod modulus)`, always stored in `[0, modulus)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModularInt {
    val: u64,
    modulus: u64,
}

impl ModularInt {
    /// Normalise `val` into `[0, modulus)`. Negative values wrap around.
    pub fn new(val: i64, modulus: u64) -> Result<Self> {
        if modulus == 0 {
            return Err(Error::InvalidModulus);
        }
        let val = (val as i128).rem_euclid(modulus as i128) as u64;
        Ok(Self { val, modulus })
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.val
    }

    #[must_use]
    pub fn modulus(self) -> u64 {
        self.modulus
    }

    fn check_modulus(self, other: Self) -> Result<()> {
        if self.modulus != other.modulus {
            return Err(Error::ModulusMismatch {
                left: self.modulus,
                right: other.modulus,
            });
        }
        Ok(())
    }

    /// Sum in the shared group; fails for different moduli.
    pub fn checked_add(self, other: Self) -> Result<Self> {
        self.check_modulus(other)?;
        let val = (self.val as u128 + other.val as u128) % self.modulus as u128;
        Ok(Self { val: val as u64, ..self })
    }

    /// Product in the shared group; fails for different moduli.
    pub fn checked_mul(self, other: Self) -> Result<Self> {
        self.check_modulus(other)?;
        let val = (self.val as u128 * other.val as u128) % self.modulus as u128;
        Ok(Self { val: val as u64, ..self })
    }
}

impl std::fmt::Display for ModularInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_[{}]", self.val, self.modulus)
    }
}
