//! Action inputs, read from the environment
//!
//! The runner passes each input as an `INPUT_<NAME>` variable. Unlike the
//! platform toolkit, an empty value is reported as absent, which leaves
//! defaulting to the caller.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::config::INPUT_PREFIX;
use crate::env::{Environment, ProcessEnv};
use crate::error::{ActionError, Result};

/// Value of a single input: `None` when unset or empty
pub type Input = Option<String>;

/// Environment variable holding the input `name`
///
/// Spaces become underscores and the result is uppercased, so `"my input"`
/// maps to `INPUT_MY_INPUT`.
pub fn input_env_key(name: &str) -> String {
    format!("{}{}", INPUT_PREFIX, name.replace(' ', "_").to_uppercase())
}

/// Read one input from the given environment
pub fn get_input_from(env: &dyn Environment, name: &str) -> Input {
    env.var(&input_env_key(name)).filter(|v| !v.is_empty())
}

/// Read one input from the process environment
pub fn get_input(name: &str) -> Input {
    get_input_from(&ProcessEnv, name)
}

/// Read several inputs from the given environment
pub fn get_inputs_from<I, S>(env: &dyn Environment, names: I) -> Inputs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let values = names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            (name.to_string(), get_input_from(env, name))
        })
        .collect();
    Inputs { values }
}

/// Read several inputs from the process environment
pub fn get_inputs<I, S>(names: I) -> Inputs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    get_inputs_from(&ProcessEnv, names)
}

/// Inputs read in one batch, keyed by the names they were requested with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    values: HashMap<String, Input>,
}

impl Inputs {
    /// Value of `name`; `None` if it was absent or never requested
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_deref())
    }

    /// Whether `name` was part of the batch
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Value of `name`, failing when it is absent
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| ActionError::InputRequired(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over every requested name and its value
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Deserialize the batch into a typed struct
    ///
    /// Field names must match the requested input names (use
    /// `#[serde(rename = "...")]` for names that are not valid identifiers).
    /// Absent inputs deserialize as `null`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let object: Map<String, Value> = self
            .values
            .iter()
            .map(|(k, v)| {
                let value = v.clone().map(Value::String).unwrap_or(Value::Null);
                (k.clone(), value)
            })
            .collect();
        Ok(serde_json::from_value(Value::Object(object))?)
    }
}

impl IntoIterator for Inputs {
    type Item = (String, Input);
    type IntoIter = std::collections::hash_map::IntoIter<String, Input>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
