use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    bytes::system::Base,
    error::{FileSizeError, Result},
};

pub const BINARY_UNITS_KEY: &str = "binary_units";
pub const DECIMAL_UNITS_KEY: &str = "decimal_units";

/// Suffix tables for both bases. Both tables are always non-empty.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UnitTables {
    binary_units: Vec<String>,
    decimal_units: Vec<String>,
}

impl UnitTables {
    pub fn new<B, D>(binary_units: B, decimal_units: D) -> Result<Self>
    where
        B: IntoIterator,
        B::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let binary_units: Vec<String> = binary_units.into_iter().map(Into::into).collect();
        let decimal_units: Vec<String> = decimal_units.into_iter().map(Into::into).collect();

        if binary_units.is_empty() || decimal_units.is_empty() {
            let units = serde_json::json!({
                "binary_units": binary_units,
                "decimal_units": decimal_units,
            });
            return Err(FileSizeError::Configuration {
                units: units.to_string(),
            });
        }

        Ok(Self {
            binary_units,
            decimal_units,
        })
    }

    pub fn validate(value: &Value) -> Result<Self> {
        let table = |key: &str| -> Option<Vec<String>> {
            let items = value.get(key)?.as_array()?;
            if items.is_empty() {
                return None;
            }
            items
                .iter()
                .map(|item| item.as_str().map(String::from))
                .collect()
        };

        match (table(BINARY_UNITS_KEY), table(DECIMAL_UNITS_KEY)) {
            (Some(binary_units), Some(decimal_units)) => Ok(Self {
                binary_units,
                decimal_units,
            }),
            _ => Err(FileSizeError::Configuration {
                units: value.to_string(),
            }),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|_| FileSizeError::Configuration {
                units: json.trim().to_string(),
            })?;
        Self::validate(&value)
    }

    pub fn table(&self, base: Base) -> &[String] {
        match base {
            Base::Binary => &self.binary_units,
            Base::Decimal => &self.decimal_units,
        }
    }

    pub fn clamp_index(&self, base: Base, index: usize) -> usize {
        index.min(self.table(base).len().saturating_sub(1))
    }

    pub fn suffix(&self, base: Base, index: usize) -> &str {
        let table = self.table(base);
        table
            .get(self.clamp_index(base, index))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl Default for UnitTables {
    fn default() -> Self {
        let owned =
            |units: &[&str]| -> Vec<String> { units.iter().map(|u| u.to_string()).collect() };
        Self {
            binary_units: owned(Base::Binary.default_units()),
            decimal_units: owned(Base::Decimal.default_units()),
        }
    }
}

impl<'de> Deserialize<'de> for UnitTables {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::validate(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_tables() {
        let units = UnitTables::default();
        assert_eq!(units.table(Base::Binary).len(), 9);
        assert_eq!(units.table(Base::Decimal).len(), 11);
        assert_eq!(units.suffix(Base::Binary, 1), "KiB");
        assert_eq!(units.suffix(Base::Decimal, 10), "QB");
    }

    #[test]
    fn test_new_rejects_empty_table() {
        let err = UnitTables::new(Vec::<String>::new(), ["B"]).unwrap_err();
        assert!(matches!(err, FileSizeError::Configuration { .. }));

        let err = UnitTables::new(["B"], Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, FileSizeError::Configuration { .. }));
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let value = json!({ "binary_units": ["o", "Kio"], "decimal_units": ["o", "ko", "Mo"] });
        let units = UnitTables::validate(&value).unwrap();
        assert_eq!(units.table(Base::Binary), ["o", "Kio"]);
        assert_eq!(units.table(Base::Decimal), ["o", "ko", "Mo"]);
    }

    #[test]
    fn test_validate_rejects_malformed() {
        let cases = [
            json!({ "binary_units": [], "decimal_units": ["B"] }),
            json!({ "binary_units": ["B"] }),
            json!({ "decimal_units": ["B"] }),
            json!({ "binary_units": "B", "decimal_units": ["B"] }),
            json!({ "binary_units": ["B"], "decimal_units": [1, 2] }),
            json!(["B", "KB"]),
            json!(null),
        ];

        for value in cases {
            let err = UnitTables::validate(&value).unwrap_err();
            match err {
                FileSizeError::Configuration { units } => assert_eq!(units, value.to_string()),
                other => panic!("unexpected error for {value}: {other}"),
            }
        }
    }

    #[test]
    fn test_from_json() {
        let units =
            UnitTables::from_json(r#"{"binary_units":["B","KiB"],"decimal_units":["B","kB"]}"#)
                .unwrap();
        assert_eq!(units.suffix(Base::Decimal, 1), "kB");

        assert!(matches!(
            UnitTables::from_json("not json"),
            Err(FileSizeError::Configuration { .. })
        ));
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let ok: std::result::Result<UnitTables, _> =
            serde_json::from_str(r#"{"binary_units":["B"],"decimal_units":["B"]}"#);
        assert!(ok.is_ok());

        let bad: std::result::Result<UnitTables, _> =
            serde_json::from_str(r#"{"binary_units":[],"decimal_units":["B"]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_clamp_index() {
        let units = UnitTables::new(["B", "KiB"], ["B", "KB"]).unwrap();
        assert_eq!(units.clamp_index(Base::Decimal, 0), 0);
        assert_eq!(units.clamp_index(Base::Decimal, 1), 1);
        assert_eq!(units.clamp_index(Base::Decimal, 5), 1);
        assert_eq!(units.suffix(Base::Decimal, 5), "KB");
    }
}
