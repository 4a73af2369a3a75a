//! View models turning opaque backend JSON into template-friendly rows.

use serde_json::Value;

use crate::domain::LoadResult;

/// Fields tried, in order, for a row's human-readable label.
const LABEL_FIELDS: [&str; 4] = ["name", "domain", "title", "url"];
/// Fields tried, in order, for the id used in links to the detail page.
const STORE_ID_FIELDS: [&str; 3] = ["storeid", "store_id", "id"];

/// One rendered entry of a list payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Value of the record's `id`, used by delete forms. Empty when absent.
    pub id: String,
    /// Id used in `/settings/apps/{storeid}` links. Empty when absent.
    pub store_id: String,
    pub label: String,
    /// Compact JSON of the whole record.
    pub detail: String,
}

/// A loaded resource as shown by a template: either rows or a failure
/// sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub sentinel: Option<&'static str>,
    pub rows: Vec<Row>,
}

/// Titled panel, optionally with a delete form per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub panel: Panel,
    pub delete_action: Option<String>,
    pub link_rows: bool,
}

impl Section {
    pub fn new(title: &'static str, result: &LoadResult) -> Self {
        Self {
            title,
            panel: Panel::from_result(result),
            delete_action: None,
            link_rows: false,
        }
    }

    pub fn deletable(mut self, action: impl Into<String>) -> Self {
        self.delete_action = Some(action.into());
        self
    }

    pub fn linked(mut self) -> Self {
        self.link_rows = true;
        self
    }
}

impl Panel {
    pub fn from_result(result: &LoadResult) -> Self {
        match result {
            LoadResult::Loaded(value) => Self {
                sentinel: None,
                rows: rows_of(value),
            },
            failed => Self {
                sentinel: failed.sentinel(),
                rows: Vec::new(),
            },
        }
    }
}

fn rows_of(value: &Value) -> Vec<Row> {
    match value {
        Value::Array(items) => items.iter().map(row_of).collect(),
        Value::Null => Vec::new(),
        other => vec![row_of(other)],
    }
}

fn row_of(item: &Value) -> Row {
    let id = item.get("id").map(scalar).unwrap_or_default();
    let store_id = first_field(item, &STORE_ID_FIELDS).unwrap_or_default();
    let detail = item.to_string();
    let label = first_field(item, &LABEL_FIELDS)
        .or_else(|| (!id.is_empty()).then(|| id.clone()))
        .or_else(|| Some(scalar(item)).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| detail.clone());

    Row {
        id,
        store_id,
        label,
        detail,
    }
}

fn first_field(item: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|field| item.get(*field))
        .map(scalar)
        .find(|s| !s.is_empty())
}

/// Renders strings without quotes and numbers/bools as-is; other values are empty.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Pretty-prints a loaded payload, or returns the sentinel for failures.
pub fn pretty(result: &LoadResult) -> String {
    match result {
        LoadResult::Loaded(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        failed => failed.sentinel().unwrap_or_default().to_string(),
    }
}

/// Picks a display name for an app record (`name` or `app.name`).
pub fn app_title(result: &LoadResult, fallback: &str) -> String {
    result
        .value()
        .and_then(|v| v.pointer("/name").or_else(|| v.pointer("/app/name")))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_panel_rows_from_array() {
        let result = LoadResult::Loaded(json!([
            {"id": 1, "name": "Shop", "storeid": "shop-1"},
            {"id": "n-2", "domain": "links.example.com"},
            {"other": true}
        ]));

        let panel = Panel::from_result(&result);

        assert_eq!(panel.sentinel, None);
        assert_eq!(panel.rows.len(), 3);
        assert_eq!(panel.rows[0].id, "1");
        assert_eq!(panel.rows[0].store_id, "shop-1");
        assert_eq!(panel.rows[0].label, "Shop");
        assert_eq!(panel.rows[1].label, "links.example.com");
        assert_eq!(panel.rows[1].store_id, "n-2");
        assert_eq!(panel.rows[2].id, "");
        assert_eq!(panel.rows[2].label, r#"{"other":true}"#);
    }

    #[test]
    fn test_panel_from_failure() {
        let panel = Panel::from_result(&LoadResult::BackendError);
        assert_eq!(panel.sentinel, Some("Backend Error"));
        assert!(panel.rows.is_empty());
    }

    #[test]
    fn test_panel_from_scalar_payloads() {
        assert!(Panel::from_result(&LoadResult::Loaded(Value::Null)).rows.is_empty());
        assert_eq!(
            Panel::from_result(&LoadResult::Loaded(json!(["a.example.com"]))).rows[0].label,
            "a.example.com"
        );
    }

    #[test]
    fn test_app_title() {
        let flat = LoadResult::Loaded(json!({"name": "Shop"}));
        let nested = LoadResult::Loaded(json!({"app": {"name": "Nested"}}));

        assert_eq!(app_title(&flat, "x"), "Shop");
        assert_eq!(app_title(&nested, "x"), "Nested");
        assert_eq!(app_title(&LoadResult::NotFound, "store-1"), "store-1");
    }

    #[test]
    fn test_pretty() {
        assert_eq!(pretty(&LoadResult::NotFound), "Not Found");
        assert_eq!(pretty(&LoadResult::Loaded(json!({"id": 1}))), "{\n  \"id\": 1\n}");
    }
}
