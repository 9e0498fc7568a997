use contracts::shared::form::{FieldId, FieldValue, FormField, ValueUpdate};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::shared::config::use_base_path;
use crate::shared::state::use_form_store;

/// Turns raw input text into a value update. An emptied input clears the value;
/// whitespace typed into a text input is kept as typed.
pub fn update_from_input(field_type: &str, raw: &str) -> ValueUpdate {
    if raw.is_empty() {
        return ValueUpdate::Clear;
    }
    match field_type {
        "select" | "radio" if raw.trim().is_empty() => ValueUpdate::Clear,
        "number" => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(|n| ValueUpdate::Set(FieldValue::Number(n)))
            .unwrap_or(ValueUpdate::Clear),
        _ => ValueUpdate::Set(FieldValue::Text(raw.to_string())),
    }
}

#[component]
pub fn FormPreviewPage() -> impl IntoView {
    let store = use_form_store();
    let builder_href = AppRoute::FormBuilder.href(&use_base_path());
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);

    // opened directly (or after a reload): show the saved form
    if store.is_empty_untracked() {
        match store.restore_saved_form() {
            Ok(true) => log::info!("Preview: сохранённая форма загружена"),
            Ok(false) => {}
            Err(e) => {
                log::warn!("Preview: не удалось загрузить сохранённую форму: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match store.save_form(store.fields(), store.values()) {
            Ok(()) => {
                error.set(None);
                notice.set(Some("Ответы сохранены".to_string()));
            }
            Err(e) => {
                notice.set(None);
                error.set(Some(format!("Не удалось сохранить ответы: {}", e)));
            }
        }
    };

    view! {
        <section class="page page--preview">
            <h1>"Просмотр формы"</h1>

            {move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}
            {move || notice.get().map(|msg| view! { <div class="notice-message">{msg}</div> })}

            <Show
                when=move || !store.fields().is_empty()
                fallback=move || {
                    view! {
                        <p class="empty-state">
                            "Форма пуста. "
                            <A href=builder_href.clone()>"Добавьте поля в конструкторе"</A>
                        </p>
                    }
                }
            >
                <form class="form-preview" on:submit=on_submit>
                    <For
                        each=move || store.fields()
                        key=|field: &FormField| field.id.clone()
                        children=|field: FormField| view! { <PreviewField field=field /> }
                    />
                    <button type="submit" class="button button--primary">"Сохранить ответы"</button>
                </form>
            </Show>
        </section>
    }
}

/// One input rendered from its field definition
#[component]
fn PreviewField(field: FormField) -> impl IntoView {
    let store = use_form_store();
    let input_id = format!("field-{}", field.id);
    let required = field.is_required();
    let placeholder = field.placeholder.clone().unwrap_or_default();

    let apply = move |id: FieldId, update: ValueUpdate| {
        if let Err(e) = store.update_value(id, update) {
            log::warn!("Preview: значение не принято: {}", e);
        }
    };
    let current_text = {
        let id = field.id.clone();
        move || store.value(&id).map(|value| value.to_input_string()).unwrap_or_default()
    };
    // text inputs own their content while typing; the store only seeds it
    let initial_text = store
        .value_untracked(&field.id)
        .map(|value| value.to_input_string())
        .unwrap_or_default();

    let input = match field.field_type.as_str() {
        "checkbox" => {
            let id = field.id.clone();
            let checked_id = field.id.clone();
            view! {
                <input
                    type="checkbox"
                    id=input_id.clone()
                    prop:checked=move || matches!(store.value(&checked_id), Some(FieldValue::Bool(true)))
                    on:change=move |ev| apply(id.clone(), ValueUpdate::Set(FieldValue::Bool(event_target_checked(&ev))))
                />
            }
            .into_any()
        }
        "select" | "radio" => {
            let id = field.id.clone();
            let options = field.options.clone().unwrap_or_default();
            view! {
                <select
                    id=input_id.clone()
                    required=required
                    on:change=move |ev| apply(id.clone(), update_from_input("select", &event_target_value(&ev)))
                >
                    <option value="">"—"</option>
                    {options
                        .into_iter()
                        .map(|option| {
                            let current_text = current_text.clone();
                            let value = option.clone();
                            let label = option.clone();
                            view! {
                                <option value=option selected=move || current_text() == value>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        "textarea" => {
            let id = field.id.clone();
            view! {
                <textarea
                    id=input_id.clone()
                    required=required
                    placeholder=placeholder
                    prop:value=initial_text
                    on:input=move |ev| apply(id.clone(), update_from_input("textarea", &event_target_value(&ev)))
                ></textarea>
            }
            .into_any()
        }
        kind => {
            let id = field.id.clone();
            let input_type = kind.to_string();
            let value_kind = kind.to_string();
            view! {
                <input
                    type=input_type
                    id=input_id.clone()
                    required=required
                    placeholder=placeholder
                    prop:value=initial_text
                    on:input=move |ev| apply(id.clone(), update_from_input(&value_kind, &event_target_value(&ev)))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-preview__field">
            <label for=input_id>
                {field.label.clone()}
                {required.then(|| view! { <span class="form-preview__required">" *"</span> })}
            </label>
            {input}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_from_input() {
        assert_eq!(update_from_input("text", "Alice"), ValueUpdate::Set(FieldValue::from("Alice")));
        assert_eq!(update_from_input("text", ""), ValueUpdate::Clear);
        assert_eq!(update_from_input("select", "   "), ValueUpdate::Clear);
        assert_eq!(update_from_input("number", " "), ValueUpdate::Clear);
        assert_eq!(update_from_input("number", " 42 "), ValueUpdate::Set(FieldValue::Number(42.0)));
        assert_eq!(update_from_input("number", "abc"), ValueUpdate::Clear);
        assert_eq!(update_from_input("number", "NaN"), ValueUpdate::Clear);
        assert_eq!(update_from_input("number", "inf"), ValueUpdate::Clear);
    }

    #[test]
    fn test_whitespace_in_text_is_kept() {
        // a leading space must not wipe what the user is typing
        assert_eq!(update_from_input("text", " "), ValueUpdate::Set(FieldValue::from(" ")));
        assert_eq!(update_from_input("textarea", "a\n"), ValueUpdate::Set(FieldValue::from("a\n")));
    }
}
