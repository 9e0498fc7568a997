use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::FieldId;

/// Введённое пользователем значение поля
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// JSON has no NaN/Infinity: serde_json would write them as `null`,
    /// which no variant reads back.
    pub fn is_storable(&self) -> bool {
        match self {
            FieldValue::Number(n) => n.is_finite(),
            _ => true,
        }
    }

    /// Представление значения для `value` атрибута input-а
    pub fn to_input_string(&self) -> String {
        match self {
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Изменение одного значения: записать или очистить.
/// `Clear` удаляет ключ, поле снова считается незаполненным.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueUpdate {
    Set(FieldValue),
    Clear,
}

/// Карта "id поля -> значение". Ключа нет, пока значение не введено.
pub type ValueMap = BTreeMap<FieldId, FieldValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_value_parsing() {
        let parsed: Vec<FieldValue> =
            serde_json::from_str(r#"["Alice", 42, true, ["a", "b"], 2.5]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                FieldValue::Text("Alice".into()),
                FieldValue::Number(42.0),
                FieldValue::Bool(true),
                FieldValue::List(vec!["a".into(), "b".into()]),
                FieldValue::Number(2.5),
            ]
        );
    }

    #[test]
    fn test_non_finite_numbers_are_not_storable() {
        assert!(FieldValue::Number(1.5).is_storable());
        assert!(FieldValue::from("NaN").is_storable());
        assert!(!FieldValue::Number(f64::NAN).is_storable());
        assert!(!FieldValue::Number(f64::INFINITY).is_storable());
    }

    #[test]
    fn test_to_input_string() {
        assert_eq!(FieldValue::Number(3.0).to_input_string(), "3");
        assert_eq!(FieldValue::Number(2.5).to_input_string(), "2.5");
        assert_eq!(FieldValue::Bool(false).to_input_string(), "false");
        assert_eq!(
            FieldValue::List(vec!["a".into(), "b".into()]).to_input_string(),
            "a, b"
        );
    }
}
