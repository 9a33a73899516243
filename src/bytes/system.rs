use std::fmt;

use crate::bytes::*;

/// Radix used to scale a byte count into larger units.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Base {
    #[default]
    Binary,
    Decimal,
}

impl Base {
    pub const BINARY_UNITS: [&str; 9] = [B, KIB, MIB, GIB, TIB, PIB, EIB, ZIB, YIB];
    pub const DECIMAL_UNITS: [&str; 11] = [B, KB, MB, GB, TB, PB, EB, ZB, YB, RB, QB];

    pub fn value(&self) -> u64 {
        match self {
            Self::Binary => 1024,
            Self::Decimal => 1000,
        }
    }

    pub fn default_units(&self) -> &'static [&'static str] {
        match self {
            Self::Binary => &Self::BINARY_UNITS,
            Self::Decimal => &Self::DECIMAL_UNITS,
        }
    }

    /// Exact `floor(log_base(bytes))`, with zero mapped to index 0.
    pub fn magnitude(&self, bytes: u64) -> usize {
        let base = self.value();
        let mut value = bytes;
        let mut index = 0;

        while value >= base {
            value /= base;
            index += 1;
        }

        index
    }

    /// `bytes / base^index` as a float, for display only.
    pub fn scale(&self, bytes: u64, index: usize) -> f64 {
        let divisor = (self.value() as f64).powi(index as i32);
        bytes as f64 / divisor
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Decimal => write!(f, "decimal"),
        }
    }
}
