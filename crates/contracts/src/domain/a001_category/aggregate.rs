use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product category.
///
/// `id` is assigned by the backend; a category without an id has not been
/// persisted yet and is sent as a create request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Category {
    /// Build a category that is not persisted yet
    pub fn new_for_insert(name: String, description: Option<String>) -> Self {
        Self {
            id: None,
            name,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_category_is_sent_without_id() {
        let category = Category::new_for_insert("Books".to_string(), None);
        let json = serde_json::to_value(&category).unwrap();

        assert_eq!(json, serde_json::json!({ "name": "Books" }));
        assert_eq!(category.id, None);
    }

    #[test]
    fn null_description_from_backend_is_accepted() {
        let category: Category =
            serde_json::from_str(r#"{"id":7,"name":"Garden","description":null}"#).unwrap();

        assert_eq!(category.id, Some(7));
        assert_eq!(category.description, None);
    }
}
