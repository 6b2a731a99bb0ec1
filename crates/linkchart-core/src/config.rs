// File: crates/linkchart-core/src/config.rs
// Summary: Typed option schemas with a uniform by-name get/set over JSON values.
// Notes:
// - Option names follow the camelCase spelling callers already use (`cellWidth`, `xoffset`).
// - Unknown names are rejected, never merged.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ChartError, Result};

/// An enumerated option schema for one component.
pub trait ChartConfig: Serialize + DeserializeOwned + Clone {
    /// Component name used in error messages and logs.
    const COMPONENT: &'static str;
}

/// Owned option set of a single chart instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Options<C> {
    inner: C,
}

impl<C: ChartConfig> Options<C> {
    pub fn new(base: C) -> Self { Self { inner: base } }

    /// Start from `base` and apply every key of `overrides` (a JSON object, or null).
    pub fn with_overrides(base: C, overrides: &Value) -> Result<Self> {
        let mut opts = Self::new(base);
        match overrides {
            Value::Null => {}
            Value::Object(entries) => opts.merge(entries)?,
            other => {
                return Err(ChartError::invalid_input(format!(
                    "{} options must be a JSON object, got {other}",
                    C::COMPONENT
                )))
            }
        }
        Ok(opts)
    }

    /// Apply all entries at once; on error the options are left unchanged.
    pub fn merge(&mut self, entries: &Map<String, Value>) -> Result<()> {
        let mut next = self.inner.clone();
        for (name, value) in entries {
            next = apply(&next, name, value.clone())?;
        }
        self.inner = next;
        Ok(())
    }

    /// Current value of option `name`.
    pub fn get(&self, name: &str) -> Result<Value> {
        fields(&self.inner)?
            .remove(name)
            .ok_or_else(|| unknown::<C>(name))
    }

    /// Replace option `name`; the value must fit the option's type.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        self.inner = apply(&self.inner, name, value)?;
        Ok(())
    }

    /// Names of every option in the schema.
    pub fn names(&self) -> Result<Vec<String>> {
        Ok(fields(&self.inner)?.keys().cloned().collect())
    }

    pub fn get_ref(&self) -> &C { &self.inner }
}

fn fields<C: ChartConfig>(cfg: &C) -> Result<Map<String, Value>> {
    match serde_json::to_value(cfg)? {
        Value::Object(map) => Ok(map),
        _ => Err(ChartError::invalid_input(format!("{} options are not a map", C::COMPONENT))),
    }
}

fn unknown<C: ChartConfig>(name: &str) -> ChartError {
    tracing::warn!(component = C::COMPONENT, option = name, "Rejected unknown option");
    ChartError::UnknownOption { component: C::COMPONENT, name: name.to_string() }
}

fn apply<C: ChartConfig>(cfg: &C, name: &str, value: Value) -> Result<C> {
    let mut map = fields(cfg)?;
    if !map.contains_key(name) {
        return Err(unknown::<C>(name));
    }
    map.insert(name.to_string(), value);
    serde_json::from_value(Value::Object(map))
        .map_err(|source| ChartError::InvalidOption { name: name.to_string(), source })
}
