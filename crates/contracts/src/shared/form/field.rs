use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор поля формы: число или строка.
///
/// В JSON числовой id пишется числом, строковый строкой. В ключах карты
/// значений оба варианта становятся строками, поэтому для обратного разбора
/// ключей используется [`FieldId::from_key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldId {
    Num(i64),
    Text(String),
}

impl FieldId {
    /// Строковая форма id, под которой значение лежит в карте значений
    pub fn to_key(&self) -> String {
        match self {
            FieldId::Num(n) => n.to_string(),
            FieldId::Text(s) => s.clone(),
        }
    }

    /// Разбор ключа карты значений. Каноническая запись целого числа
    /// ("1", "-7") даёт `Num`, всё остальное `Text`.
    pub fn from_key(key: &str) -> Self {
        match key.parse::<i64>() {
            Ok(n) if n.to_string() == key => FieldId::Num(n),
            _ => FieldId::Text(key.to_string()),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::Num(n) => write!(f, "{}", n),
            FieldId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FieldId {
    fn from(value: i64) -> Self {
        FieldId::Num(value)
    }
}

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        FieldId::Text(value.to_string())
    }
}

impl From<String> for FieldId {
    fn from(value: String) -> Self {
        FieldId::Text(value)
    }
}

// ============================================================================
// Field definition
// ============================================================================

/// Описание одного поля формы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub id: FieldId,

    /// Вид поля ("text", "number", "select", ...). Интерпретирует его только UI.
    #[serde(rename = "type")]
    pub field_type: String,

    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Варианты выбора для полей типа select/radio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl FormField {
    pub fn new(id: impl Into<FieldId>, field_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field_type: field_type.into(),
            label: label.into(),
            required: None,
            placeholder: None,
            options: None,
        }
    }

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_id_key_round_trip() {
        assert_eq!(FieldId::from_key("1"), FieldId::Num(1));
        assert_eq!(FieldId::from_key("-42"), FieldId::Num(-42));
        assert_eq!(FieldId::from_key("name"), FieldId::Text("name".into()));
        // не каноническая запись числа остаётся строкой
        assert_eq!(FieldId::from_key("007"), FieldId::Text("007".into()));
        assert_eq!(FieldId::from_key("+1"), FieldId::Text("+1".into()));

        assert_eq!(FieldId::Num(1).to_key(), "1");
        assert_eq!(FieldId::from("email").to_key(), "email");
    }

    #[test]
    fn test_field_json_shape() {
        let field = FormField::new(1_i64, "text", "Name");
        assert_eq!(
            serde_json::to_string(&field).unwrap(),
            r#"{"id":1,"type":"text","label":"Name"}"#
        );

        let parsed: FormField = serde_json::from_str(
            r#"{"id":"color","type":"select","label":"Цвет","required":true,"options":["red","green"]}"#,
        )
        .unwrap();
        assert_eq!(parsed.id, FieldId::Text("color".into()));
        assert!(parsed.is_required());
        assert_eq!(parsed.placeholder, None);
        assert_eq!(parsed.options, Some(vec!["red".to_string(), "green".to_string()]));
    }
}
