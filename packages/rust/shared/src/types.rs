//! Core domain types for category trees.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RawCategory
// ---------------------------------------------------------------------------

/// A category record as returned by the content API.
///
/// The API emits `Title` and `MetaTagDescription`; the lower-camel forms are
/// accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    /// Numeric identifier, also the fallback sort order.
    pub id: i64,
    /// Title, optionally of the form `<order>#...`.
    #[serde(rename = "Title", alias = "title")]
    pub title: String,
    /// Used as the image reference of the display category.
    #[serde(rename = "MetaTagDescription", alias = "metaDescription")]
    pub meta_description: String,
    /// Display name.
    pub name: String,
    /// Nested subcategories.
    #[serde(default)]
    pub children: Vec<RawCategory>,
}

/// Payload returned by a category fetch: `{ "data": [...] }`.
///
/// `data` may be missing or `null`, which is treated like an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub data: Option<Vec<RawCategory>>,
}

impl CategoriesResponse {
    /// Wrap a list of categories.
    pub fn new(data: Vec<RawCategory>) -> Self {
        Self { data: Some(data) }
    }
}

// ---------------------------------------------------------------------------
// DisplayCategory
// ---------------------------------------------------------------------------

/// A display-ready category node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCategory {
    pub id: i64,
    /// Sibling sort key. Not necessarily unique.
    pub order: i64,
    pub name: String,
    pub image: String,
    /// Whether the category is highlighted on the landing page.
    pub show_on_home: bool,
    /// Subcategories, sorted ascending by `order`.
    #[serde(default)]
    pub children: Vec<DisplayCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_category_reads_api_field_names() {
        let json = r#"{
            "id": 7,
            "Title": "2#",
            "MetaTagDescription": "https://cdn.example.com/7.png",
            "name": "Toys",
            "children": []
        }"#;

        let raw: RawCategory = serde_json::from_str(json).expect("deserialize");
        assert_eq!(raw.id, 7);
        assert_eq!(raw.title, "2#");
        assert_eq!(raw.meta_description, "https://cdn.example.com/7.png");
        assert!(raw.children.is_empty());
    }

    #[test]
    fn raw_category_accepts_camel_case_aliases() {
        let json = r#"{"id": 1, "title": "3", "metaDescription": "img", "name": "A"}"#;
        let raw: RawCategory = serde_json::from_str(json).expect("deserialize");
        assert_eq!(raw.title, "3");
        assert_eq!(raw.meta_description, "img");
        assert!(raw.children.is_empty());
    }

    #[test]
    fn response_data_may_be_missing_or_null() {
        let missing: CategoriesResponse = serde_json::from_str("{}").expect("deserialize");
        assert!(missing.data.is_none());

        let null: CategoriesResponse =
            serde_json::from_str(r#"{"data": null}"#).expect("deserialize");
        assert!(null.data.is_none());
    }

    #[test]
    fn display_category_serializes_camel_case() {
        let category = DisplayCategory {
            id: 1,
            order: 2,
            name: "A".into(),
            image: "img".into(),
            show_on_home: true,
            children: vec![],
        };

        let value = serde_json::to_value(&category).expect("serialize");
        assert_eq!(value["showOnHome"], serde_json::Value::Bool(true));
        assert_eq!(value["children"], serde_json::json!([]));
        assert!(value.get("show_on_home").is_none());
    }

    #[test]
    fn input_fixture_validates() {
        let fixture = std::fs::read_to_string("../../../fixtures/json/categories.input.json")
            .expect("read fixture");
        let parsed: CategoriesResponse =
            serde_json::from_str(&fixture).expect("deserialize fixture input");
        let data = parsed.data.expect("fixture has data");
        assert_eq!(data.len(), 7);
        assert_eq!(data[0].children.len(), 3);
    }
}
