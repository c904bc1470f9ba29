//! The persisted notification settings record.

use std::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::category::DEFAULT_ENABLED_TYPES;

/// Errors from parsing a stored settings record.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The stored text was not JSON, or a known field had the wrong type.
    #[error("Invalid notification settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The stored text was JSON, but not an object.
    #[error("Notification settings must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Notification preferences for the current browser profile.
///
/// Every field is `#[serde(default)]`, so a partial record deserializes to the defaults with the
/// stored fields laid over them. Keys this version doesn't know about are kept in `extra` and
/// written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettings {
    /// Master switch. Notifications are muted when this is false.
    pub system_notifications: bool,
    /// Whether to play a sound when a notification arrives.
    pub notification_sound: bool,
    /// Which categories produce notifications.
    #[serde(deserialize_with = "null_as_default")]
    pub enabled_types: EnabledTypes,
    /// Fields written by other versions.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            system_notifications: true,
            notification_sound: false,
            enabled_types: EnabledTypes::default(),
            extra: Map::new(),
        }
    }
}

impl NotificationSettings {
    /// Parses a stored record and merges it over the defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        Self::from_json_value(serde_json::from_str(raw)?)
    }

    /// Merges an already-parsed record over the defaults.
    pub fn from_json_value(value: Value) -> Result<Self, LoadError> {
        if !value.is_object() {
            return Err(LoadError::NotAnObject(json_kind(&value)));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Whether system notifications are switched off.
    #[inline]
    pub fn is_muted(&self) -> bool {
        !self.system_notifications
    }

    /// Whether notification sounds are on.
    #[inline]
    pub fn sound_enabled(&self) -> bool {
        self.notification_sound
    }

    /// The enabled categories.
    #[inline]
    pub fn enabled_types(&self) -> &EnabledTypes {
        &self.enabled_types
    }

    /// Whether the category with the given id produces notifications.
    #[inline]
    pub fn is_type_enabled(&self, id: &str) -> bool {
        self.enabled_types.contains(id)
    }
}

/// Name of the kind of JSON value, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordered set of enabled category ids.
///
/// Ids keep the order they were added in, but equality ignores order. Any string is accepted as
/// an id, including ones that don't match a known category.
#[derive(Debug, Clone, Eq)]
pub struct EnabledTypes {
    ids: Vec<String>,
}

impl EnabledTypes {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Whether `id` is in the set.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Removes `id` if present, otherwise appends it. Returns whether `id` is now in the set.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|existing| existing == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id.to_owned());
                true
            }
        }
    }

    /// Number of enabled ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no ids are enabled.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the ids in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }
}

impl Default for EnabledTypes {
    fn default() -> Self {
        DEFAULT_ENABLED_TYPES.into_iter().collect()
    }
}

impl PartialEq for EnabledTypes {
    fn eq(&self, other: &Self) -> bool {
        // Neither side contains duplicates, so equal length plus containment is set equality.
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

impl<S: Into<String>> FromIterator<S> for EnabledTypes {
    /// Collects ids, keeping only the first occurrence of each.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut types = Self::new();
        for id in iter {
            let id = id.into();
            if !types.contains(&id) {
                types.ids.push(id);
            }
        }
        types
    }
}

impl Serialize for EnabledTypes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.ids)
    }
}

impl<'de> Deserialize<'de> for EnabledTypes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(EnabledTypesVisitor)
    }
}

struct EnabledTypesVisitor;

impl<'de> Visitor<'de> for EnabledTypesVisitor {
    type Value = EnabledTypes;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of notification category ids")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut types = EnabledTypes::new();
        while let Some(id) = seq.next_element::<String>()? {
            if !types.contains(&id) {
                types.ids.push(id);
            }
        }
        Ok(types)
    }
}
