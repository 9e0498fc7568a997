use std::collections::HashSet;

use contracts::shared::form::{value_map, FieldId, FieldValue, FormField, SavedForm, ValueMap, ValueUpdate};
use leptos::prelude::*;

use crate::shared::error::StoreError;
use crate::shared::storage::{FormStorage, LocalStorage, SAVED_FORM_KEY};

/// Field definitions and entered values of the form being edited.
///
/// Field ids are unique: every operation that installs a field list
/// rejects duplicates and leaves the state untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    fields: Vec<FormField>,
    values: ValueMap,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    pub fn set_fields(&mut self, fields: Vec<FormField>) -> Result<(), StoreError> {
        ensure_unique_ids(&fields)?;
        log::debug!("set_fields: {} field(s)", fields.len());
        self.fields = fields;
        self.values = value_map::align(&self.fields, std::mem::take(&mut self.values));
        Ok(())
    }

    /// Values are keyed by the key form of the id; a key that belongs to a
    /// field is stored under that field's id.
    pub fn set_values(&mut self, values: ValueMap) -> Result<(), StoreError> {
        ensure_storable_values(&values)?;
        log::debug!("set_values: {} value(s)", values.len());
        self.values = value_map::align(&self.fields, values);
        Ok(())
    }

    pub fn update_value(&mut self, id: FieldId, update: ValueUpdate) -> Result<(), StoreError> {
        let key = id.to_key();
        match update {
            ValueUpdate::Set(value) => {
                if !value.is_storable() {
                    return Err(StoreError::NonFiniteValue(id));
                }
                self.values.retain(|existing, _| existing.to_key() != key);
                self.values.insert(value_map::id_for_key(&self.fields, &key), value);
            }
            ValueUpdate::Clear => {
                self.values.retain(|existing, _| existing.to_key() != key);
            }
        }
        Ok(())
    }

    /// Removes every field with `id` and its value. Unknown ids are a no-op.
    pub fn remove_field(&mut self, id: &FieldId) {
        let key = id.to_key();
        self.fields.retain(|field| field.id != *id);
        self.values.retain(|existing, _| existing.to_key() != key);
        log::debug!("remove_field: '{}'", id);
    }

    /// Commits `fields` and `values` in memory, then writes the snapshot to
    /// `storage` under [`SAVED_FORM_KEY`].
    ///
    /// The in-memory commit happens first: a failed write leaves the state
    /// updated and the stored snapshot stale.
    pub fn save_form<S>(&mut self, fields: Vec<FormField>, values: ValueMap, storage: &S) -> Result<(), StoreError>
    where
        S: FormStorage + ?Sized,
    {
        // nothing is committed unless both collections are acceptable
        ensure_unique_ids(&fields)?;
        ensure_storable_values(&values)?;
        self.set_fields(fields)?;
        self.set_values(values)?;

        let record = SavedForm::new(self.fields.clone(), self.values.clone()).to_json()?;
        if let Err(e) = storage.write(SAVED_FORM_KEY, &record) {
            log::error!("Не удалось сохранить форму: {}", e);
            return Err(e.into());
        }
        log::info!("Store: Форма сохранена в localStorage");
        Ok(())
    }

    /// Replaces the state with a previously saved snapshot
    pub fn restore(&mut self, saved: SavedForm) -> Result<(), StoreError> {
        let mut next = FormState::new();
        next.set_fields(saved.fields)?;
        next.set_values(saved.values)?;
        *self = next;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.values.clear();
    }
}

fn ensure_unique_ids(fields: &[FormField]) -> Result<(), StoreError> {
    // compared by key form: 1 and "1" would share a slot in the stored value map
    let mut seen = HashSet::with_capacity(fields.len());
    for field in fields {
        if !seen.insert(field.id.to_key()) {
            return Err(StoreError::DuplicateFieldId(field.id.clone()));
        }
    }
    Ok(())
}

fn ensure_storable_values(values: &ValueMap) -> Result<(), StoreError> {
    if let Some(id) = value_map::first_aliased_key(values) {
        return Err(StoreError::DuplicateFieldId(id.clone()));
    }
    match values.iter().find(|(_, value)| !value.is_storable()) {
        Some((id, _)) => Err(StoreError::NonFiniteValue(id.clone())),
        None => Ok(()),
    }
}

/// Reads the saved form record. `Ok(None)` when nothing was saved yet.
pub fn load_saved_form<S>(storage: &S) -> Result<Option<SavedForm>, StoreError>
where
    S: FormStorage + ?Sized,
{
    match storage.read(SAVED_FORM_KEY)? {
        Some(data) => Ok(Some(SavedForm::from_json(&data)?)),
        None => Ok(None),
    }
}

/// Reactive handle to the form state, provided once through context.
#[derive(Clone, Copy)]
pub struct FormStore {
    state: RwSignal<FormState>,
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FormState::new()),
        }
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.state.with(|state| state.fields().to_vec())
    }

    pub fn values(&self) -> ValueMap {
        self.state.with(|state| state.values().clone())
    }

    pub fn value(&self, id: &FieldId) -> Option<FieldValue> {
        self.state.with(|state| state.values().get(id).cloned())
    }

    pub fn value_untracked(&self, id: &FieldId) -> Option<FieldValue> {
        self.state.with_untracked(|state| state.values().get(id).cloned())
    }

    pub fn is_empty_untracked(&self) -> bool {
        self.state.with_untracked(|state| state.fields().is_empty())
    }

    pub fn set_fields(&self, fields: Vec<FormField>) -> Result<(), StoreError> {
        self.state
            .try_update(|state| state.set_fields(fields))
            .unwrap_or(Err(StoreError::Disposed))
    }

    pub fn set_values(&self, values: ValueMap) -> Result<(), StoreError> {
        self.state
            .try_update(|state| state.set_values(values))
            .unwrap_or(Err(StoreError::Disposed))
    }

    pub fn update_value(&self, id: FieldId, update: ValueUpdate) -> Result<(), StoreError> {
        self.state
            .try_update(|state| state.update_value(id, update))
            .unwrap_or(Err(StoreError::Disposed))
    }

    pub fn remove_field(&self, id: FieldId) -> Result<(), StoreError> {
        self.state
            .try_update(|state| state.remove_field(&id))
            .ok_or(StoreError::Disposed)
    }

    pub fn save_form(&self, fields: Vec<FormField>, values: ValueMap) -> Result<(), StoreError> {
        self.save_form_to(&LocalStorage, fields, values)
    }

    pub fn save_form_to<S>(&self, storage: &S, fields: Vec<FormField>, values: ValueMap) -> Result<(), StoreError>
    where
        S: FormStorage + ?Sized,
    {
        self.state
            .try_update(|state| state.save_form(fields, values, storage))
            .unwrap_or(Err(StoreError::Disposed))
    }

    /// Loads the saved snapshot into the store. Returns `false` when there is none.
    pub fn restore_saved_form(&self) -> Result<bool, StoreError> {
        self.restore_from(&LocalStorage)
    }

    pub fn restore_from<S>(&self, storage: &S) -> Result<bool, StoreError>
    where
        S: FormStorage + ?Sized,
    {
        let Some(saved) = load_saved_form(storage)? else {
            return Ok(false);
        };
        self.state
            .try_update(|state| state.restore(saved))
            .unwrap_or(Err(StoreError::Disposed))?;
        Ok(true)
    }

    /// Empties the store and drops the saved snapshot
    pub fn reset(&self) -> Result<(), StoreError> {
        self.reset_with(&LocalStorage)
    }

    pub fn reset_with<S>(&self, storage: &S) -> Result<(), StoreError>
    where
        S: FormStorage + ?Sized,
    {
        self.state
            .try_update(FormState::clear)
            .ok_or(StoreError::Disposed)?;
        storage.remove(SAVED_FORM_KEY)?;
        log::info!("Store: сохранённая форма удалена");
        Ok(())
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the form store
pub fn use_form_store() -> FormStore {
    use_context::<FormStore>().expect("FormStore not found in component tree")
}
