use std::{fmt, path::Path};

use serde_json::Value;
use tracing::debug;

use crate::{
    bytes::{system::Base, units::UnitTables},
    error::Result,
    locale::Locale,
    source::{LocalFile, NullSource, SizeSource, SourceAdapter},
};

pub const DEFAULT_PRECISION: usize = 2;

/// Turns the byte count of its current source into a string such as
/// `"1.43 MiB"`.
///
/// The last formatted string is cached. Any configuration change (base or
/// source) clears the cache.
pub struct SizeFormatter {
    base: Base,
    locale: Locale,
    units: UnitTables,
    source: Box<dyn SizeSource>,
    cache: Option<String>,
}

impl SizeFormatter {
    pub fn new() -> Self {
        Self {
            base: Base::default(),
            locale: Locale::default(),
            units: UnitTables::default(),
            source: Box::new(NullSource),
            cache: None,
        }
    }

    pub fn create(locale: Option<&str>, units: Option<UnitTables>) -> Result<Self> {
        let locale = parse_locale(locale)?;
        Ok(Self {
            locale,
            units: units.unwrap_or_default(),
            ..Self::new()
        })
    }

    /// `null` or an empty object/array selects the built-in tables.
    pub fn create_with_units_value(locale: Option<&str>, units: &Value) -> Result<Self> {
        let locale = parse_locale(locale)?;
        let units = if is_empty_document(units) {
            UnitTables::default()
        } else {
            UnitTables::validate(units)?
        };

        Ok(Self {
            locale,
            units,
            ..Self::new()
        })
    }

    pub fn with_base(&mut self, base: Base) -> &mut Self {
        self.base = base;
        self.cache = None;
        self
    }

    pub fn with_base_binary(&mut self) -> &mut Self {
        self.with_base(Base::Binary)
    }

    pub fn with_base_decimal(&mut self) -> &mut Self {
        self.with_base(Base::Decimal)
    }

    pub fn with_source<S>(&mut self, source: S) -> &mut Self
    where
        S: SizeSource + 'static,
    {
        debug!("attaching custom size source");
        self.source = Box::new(SourceAdapter::new(source));
        self.cache = None;
        self
    }

    // On NotFound the current source is kept.
    pub fn with_local_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let local = LocalFile::new(path)?;
        debug!("attaching local file '{}'", local.path().display());
        self.source = Box::new(local);
        self.cache = None;
        Ok(self)
    }

    pub fn size_in_bytes(&self) -> Result<u64> {
        self.source.size_in_bytes()
    }

    pub fn formatted_size(&mut self, precision: usize) -> Result<String> {
        let bytes = self.size_in_bytes()?;
        let formatted = self.format_bytes(bytes, precision);

        debug!(
            "formatted {} bytes ({}, {}) as '{}'",
            bytes, self.base, self.locale, formatted
        );

        self.cache = Some(formatted.clone());
        Ok(formatted)
    }

    /// Counts past the largest unit stay in that unit (`5,000.00 KB` for a
    /// table that stops at `KB`).
    pub fn format_bytes(&self, bytes: u64, precision: usize) -> String {
        let index = self
            .units
            .clamp_index(self.base, self.base.magnitude(bytes));
        let value = self.base.scale(bytes, index);

        format!(
            "{} {}",
            self.locale.format_decimal(value, precision),
            self.units.suffix(self.base, index)
        )
    }

    pub fn to_size_string(&mut self) -> Result<String> {
        match &self.cache {
            Some(cached) => Ok(cached.clone()),
            None => self.formatted_size(DEFAULT_PRECISION),
        }
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn units(&self) -> &UnitTables {
        &self.units
    }

    pub fn cached(&self) -> Option<&str> {
        self.cache.as_deref()
    }
}

impl Default for SizeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SizeFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeFormatter")
            .field("base", &self.base)
            .field("locale", &self.locale.as_str())
            .field("units", &self.units)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

fn parse_locale(locale: Option<&str>) -> Result<Locale> {
    match locale {
        Some(tag) => Locale::parse(tag),
        None => Ok(Locale::default()),
    }
}

fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
