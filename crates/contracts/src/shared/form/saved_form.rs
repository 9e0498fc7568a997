use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::FormField;
use super::value::{FieldValue, ValueMap};

/// Снимок формы, который пишется в localStorage:
/// `{ "fields": [...], "values": { "<id>": value } }`.
///
/// Версии у записи нет. Неизвестные ключи при чтении игнорируются,
/// отсутствующие коллекции читаются как пустые. Ключи значений при чтении
/// сопоставляются с id полей (см. [`value_map::align`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SavedFormRecord")]
pub struct SavedForm {
    pub fields: Vec<FormField>,

    #[serde(serialize_with = "value_map::serialize")]
    pub values: ValueMap,
}

impl SavedForm {
    pub fn new(fields: Vec<FormField>, values: ValueMap) -> Self {
        Self { fields, values }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}

/// Запись в том виде, в каком она лежит в JSON: ключи значений ещё строки
#[derive(Deserialize)]
struct SavedFormRecord {
    #[serde(default)]
    fields: Vec<FormField>,

    #[serde(default)]
    values: BTreeMap<String, FieldValue>,
}

impl From<SavedFormRecord> for SavedForm {
    fn from(record: SavedFormRecord) -> Self {
        let values = record
            .values
            .into_iter()
            .map(|(key, value)| (value_map::id_for_key(&record.fields, &key), value))
            .collect();
        Self {
            fields: record.fields,
            values,
        }
    }
}

/// Value map keys in their stored string form.
///
/// A value is stored under [`FieldId::to_key`](super::field::FieldId::to_key), so `1` and `"1"` share a slot.
/// Reading a key back takes the id of the field with that key form; keys
/// without a field fall back to [`FieldId::from_key`](super::field::FieldId::from_key).
pub mod value_map {
    use serde::ser::Error as _;
    use serde::Serializer;
    use std::collections::HashSet;

    use super::super::field::{FieldId, FormField};
    use super::super::value::ValueMap;

    pub fn serialize<S>(values: &ValueMap, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(id) = first_aliased_key(values) {
            return Err(S::Error::custom(format!("value key '{}' is used by more than one field id", id)));
        }
        if let Some((id, _)) = values.iter().find(|(_, value)| !value.is_storable()) {
            return Err(S::Error::custom(format!("value of field '{}' is not a finite number", id)));
        }
        serializer.collect_map(values.iter().map(|(id, value)| (id.to_key(), value)))
    }

    /// First id whose key form collides with an earlier one (`1` vs `"1"`)
    pub fn first_aliased_key(values: &ValueMap) -> Option<&FieldId> {
        let mut seen = HashSet::with_capacity(values.len());
        values.keys().find(|id| !seen.insert(id.to_key()))
    }

    pub fn id_for_key(fields: &[FormField], key: &str) -> FieldId {
        fields
            .iter()
            .find(|field| field.id.to_key() == key)
            .map(|field| field.id.clone())
            .unwrap_or_else(|| FieldId::from_key(key))
    }

    /// Re-keys `values` so a value keyed `"1"` for field `1` (or the other way
    /// round) ends up under the field's own id.
    pub fn align(fields: &[FormField], values: ValueMap) -> ValueMap {
        values
            .into_iter()
            .map(|(id, value)| (id_for_key(fields, &id.to_key()), value))
            .collect()
    }
}
