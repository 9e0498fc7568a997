use contracts::shared::form::{FieldId, FormField};
use leptos::prelude::*;
use leptos_router::components::A;
use uuid::Uuid;

use crate::routes::AppRoute;
use crate::shared::config::use_base_path;
use crate::shared::state::use_form_store;

/// Field kinds offered by the builder
pub const FIELD_TYPES: [&str; 7] = ["text", "number", "email", "textarea", "checkbox", "select", "radio"];

pub fn field_uses_options(field_type: &str) -> bool {
    matches!(field_type, "select" | "radio")
}

/// "red, green,, blue " -> ["red", "green", "blue"]
pub fn parse_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inputs of the "add field" form
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDraft {
    pub field_type: String,
    pub label: String,
    pub placeholder: String,
    pub options: String,
    pub required: bool,
}

impl FieldDraft {
    pub fn new() -> Self {
        Self {
            field_type: FIELD_TYPES[0].to_string(),
            label: String::new(),
            placeholder: String::new(),
            options: String::new(),
            required: false,
        }
    }

    pub fn build(&self, id: FieldId) -> Result<FormField, String> {
        let label = self.label.trim();
        if label.is_empty() {
            return Err("Укажите название поля".to_string());
        }

        let uses_options = field_uses_options(&self.field_type);
        let options = parse_options(&self.options);
        if uses_options && options.is_empty() {
            return Err("Добавьте хотя бы один вариант выбора".to_string());
        }

        let placeholder = self.placeholder.trim();
        let mut field = FormField::new(id, self.field_type.clone(), label);
        field.required = self.required.then_some(true);
        field.placeholder = (!placeholder.is_empty()).then(|| placeholder.to_string());
        field.options = uses_options.then_some(options);
        Ok(field)
    }
}

impl Default for FieldDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn FormBuilderPage() -> impl IntoView {
    let store = use_form_store();
    let base = use_base_path();
    let draft = RwSignal::new(FieldDraft::new());
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        notice.set(None);

        let id = FieldId::Text(Uuid::new_v4().to_string());
        let field = match draft.with_untracked(|d| d.build(id)) {
            Ok(field) => field,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };

        let mut fields = store.fields();
        fields.push(field);
        match store.set_fields(fields) {
            Ok(()) => {
                error.set(None);
                // keep the chosen type for the next field
                draft.update(|d| {
                    *d = FieldDraft {
                        field_type: d.field_type.clone(),
                        ..FieldDraft::new()
                    }
                });
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let on_save = move |_| match store.save_form(store.fields(), store.values()) {
        Ok(()) => {
            error.set(None);
            notice.set(Some("Форма сохранена".to_string()));
        }
        Err(e) => {
            notice.set(None);
            error.set(Some(format!("Не удалось сохранить форму: {}", e)));
        }
    };

    let on_reset = move |_| match store.reset() {
        Ok(()) => {
            error.set(None);
            notice.set(Some("Форма очищена".to_string()));
        }
        Err(e) => error.set(Some(e.to_string())),
    };

    view! {
        <section class="page page--builder">
            <h1>"Конструктор формы"</h1>

            {move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}
            {move || notice.get().map(|msg| view! { <div class="notice-message">{msg}</div> })}

            <form class="field-editor" on:submit=on_add>
                <div class="form-group">
                    <label for="field-type">"Тип поля"</label>
                    <select
                        id="field-type"
                        on:change=move |ev| draft.update(|d| d.field_type = event_target_value(&ev))
                    >
                        {FIELD_TYPES
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option
                                        value=kind
                                        selected=move || draft.with(|d| d.field_type == kind)
                                    >
                                        {kind}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="field-label">"Название"</label>
                    <input
                        type="text"
                        id="field-label"
                        prop:value=move || draft.with(|d| d.label.clone())
                        on:input=move |ev| draft.update(|d| d.label = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="field-placeholder">"Подсказка"</label>
                    <input
                        type="text"
                        id="field-placeholder"
                        prop:value=move || draft.with(|d| d.placeholder.clone())
                        on:input=move |ev| draft.update(|d| d.placeholder = event_target_value(&ev))
                    />
                </div>

                <Show when=move || draft.with(|d| field_uses_options(&d.field_type))>
                    <div class="form-group">
                        <label for="field-options">"Варианты (через запятую)"</label>
                        <input
                            type="text"
                            id="field-options"
                            prop:value=move || draft.with(|d| d.options.clone())
                            on:input=move |ev| draft.update(|d| d.options = event_target_value(&ev))
                        />
                    </div>
                </Show>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="field-required"
                        prop:checked=move || draft.with(|d| d.required)
                        on:change=move |ev| draft.update(|d| d.required = event_target_checked(&ev))
                    />
                    <label for="field-required">"Обязательное"</label>
                </div>

                <button type="submit" class="button">"Добавить поле"</button>
            </form>

            <h2>"Поля формы"</h2>
            <Show
                when=move || !store.fields().is_empty()
                fallback=|| view! { <p class="empty-state">"Полей пока нет"</p> }
            >
                <ul class="field-list">
                    <For
                        each=move || store.fields()
                        key=|field: &FormField| field.id.clone()
                        children=move |field: FormField| {
                            let id = field.id.clone();
                            view! {
                                <li class="field-list__item">
                                    <span class="field-list__label">{field.label.clone()}</span>
                                    <span class="field-list__type">{field.field_type.clone()}</span>
                                    {field
                                        .is_required()
                                        .then(|| view! { <span class="field-list__required">"обязательное"</span> })}
                                    <button
                                        type="button"
                                        class="button button--danger"
                                        on:click=move |_| {
                                            if let Err(e) = store.remove_field(id.clone()) {
                                                error.set(Some(e.to_string()));
                                            }
                                        }
                                    >
                                        "Удалить"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <div class="page__actions">
                <button type="button" class="button button--primary" on:click=on_save>"Сохранить"</button>
                <button type="button" class="button" on:click=on_reset>"Очистить"</button>
                <A href=AppRoute::FormPreview.href(&base) attr:class="button">"Предпросмотр"</A>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options() {
        assert_eq!(parse_options("red, green,, blue "), vec!["red", "green", "blue"]);
        assert!(parse_options(" , ").is_empty());
    }

    #[test]
    fn test_build_text_field() {
        let draft = FieldDraft {
            label: "  Name ".to_string(),
            placeholder: "Ваше имя".to_string(),
            options: "ignored".to_string(),
            ..FieldDraft::new()
        };
        let field = draft.build(FieldId::Num(1)).unwrap();
        assert_eq!(field.field_type, "text");
        assert_eq!(field.label, "Name");
        assert_eq!(field.required, None);
        assert_eq!(field.placeholder.as_deref(), Some("Ваше имя"));
        assert_eq!(field.options, None);
    }

    #[test]
    fn test_build_select_requires_options() {
        let mut draft = FieldDraft {
            field_type: "select".to_string(),
            label: "Цвет".to_string(),
            required: true,
            ..FieldDraft::new()
        };
        assert!(draft.build(FieldId::from("color")).is_err());

        draft.options = "red, green".to_string();
        let field = draft.build(FieldId::from("color")).unwrap();
        assert_eq!(field.required, Some(true));
        assert_eq!(field.options, Some(vec!["red".to_string(), "green".to_string()]));
    }

    #[test]
    fn test_build_rejects_blank_label() {
        let draft = FieldDraft {
            label: "   ".to_string(),
            ..FieldDraft::new()
        };
        assert!(draft.build(FieldId::Num(1)).is_err());
    }
}
