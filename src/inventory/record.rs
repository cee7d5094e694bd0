/// Device record types: the open, order-preserving row and the fixed five-field device.
use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::errors::InventoryError;

pub const NAME: &str = "Name";
pub const MANAGEMENT_IP: &str = "Management IP";
pub const USERNAME: &str = "Username";
pub const PASSWORD: &str = "Password";
pub const DESCRIPTION: &str = "Description";

/// Column order of the backing file. Fixed regardless of in-memory key order.
pub const FIELDNAMES: [&str; 5] = [NAME, MANAGEMENT_IP, USERNAME, PASSWORD, DESCRIPTION];

/// One inventory row as read from disk: field name to value, in header order.
///
/// Nothing here guarantees the five canonical fields are present. A file with
/// an unexpected header loads into records with unexpected keys; the mismatch
/// only surfaces when the record is converted into a [`Device`] for saving.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DeviceRecord {
    fields: Vec<(String, String)>,
}

impl DeviceRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `key`, if the record carries it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `value`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Drop `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(idx).1)
    }

    /// The `Name` field, the record's identifier by convention.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get(NAME)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DeviceRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Renders like a dictionary literal: `{"Name": "Router1", ...}`.
impl fmt::Debug for DeviceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for DeviceRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DeviceRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = DeviceRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of device field names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut record = DeviceRecord::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    record.insert(k, v);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// A device with exactly the five persisted fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub name: String,
    pub management_ip: String,
    pub username: String,
    pub password: String,
    pub description: String,
}

impl Device {
    /// Values in [`FIELDNAMES`] order, ready to be written as a CSV row.
    #[must_use]
    pub fn to_row(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.management_ip.as_str(),
            self.username.as_str(),
            self.password.as_str(),
            self.description.as_str(),
        ]
    }

    /// Convert a loaded record, failing on any missing or extra field.
    ///
    /// `row` is the 1-based position of the record, used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::MissingField` or `InventoryError::UnexpectedField`.
    pub fn from_record(record: &DeviceRecord, row: usize) -> Result<Self, InventoryError> {
        if let Some(extra) = record.keys().find(|k| !FIELDNAMES.contains(k)) {
            return Err(InventoryError::UnexpectedField {
                row,
                field: extra.to_owned(),
            });
        }

        let take = |field: &'static str| {
            record
                .get(field)
                .map(str::to_owned)
                .ok_or(InventoryError::MissingField { row, field })
        };

        Ok(Self {
            name: take(NAME)?,
            management_ip: take(MANAGEMENT_IP)?,
            username: take(USERNAME)?,
            password: take(PASSWORD)?,
            description: take(DESCRIPTION)?,
        })
    }
}

impl From<Device> for DeviceRecord {
    fn from(device: Device) -> Self {
        FIELDNAMES
            .into_iter()
            .zip([
                device.name,
                device.management_ip,
                device.username,
                device.password,
                device.description,
            ])
            .collect()
    }
}
