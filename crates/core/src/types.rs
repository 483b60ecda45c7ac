//! FAQ search hits as returned by the remote service.

use serde::Deserialize;

/// One FAQ entry as returned by either search endpoint.
///
/// The full-text endpoint returns complete FAQ rows (question, keywords,
/// active flag plus answer/audit fields the UI never shows); the document
/// endpoint returns a trimmed preview without keywords. Every field the
/// renderer touches is therefore optional, and unknown payload fields are
/// ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqHit {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_text_row() {
        let hit: FaqHit = serde_json::from_str(
            r#"{
                "id": 7,
                "question": "Как сбросить пароль?",
                "answer": "Через страницу восстановления.",
                "keywords": ["пароль", "сброс"],
                "created_by": "admin",
                "created_at": "2024-05-01T10:00:00",
                "updated_at": "2024-05-02T10:00:00",
                "active": true,
                "inMongo": false
            }"#,
        )
        .unwrap();
        assert_eq!(hit.id, Some(7));
        assert_eq!(hit.question.as_deref(), Some("Как сбросить пароль?"));
        assert_eq!(
            hit.keywords,
            Some(vec!["пароль".to_string(), "сброс".to_string()])
        );
        assert_eq!(hit.active, Some(true));
    }

    #[test]
    fn deserializes_document_preview_without_keywords() {
        let hit: FaqHit =
            serde_json::from_str(r#"{"id": 3, "question": "Где логи?", "active": false}"#).unwrap();
        assert_eq!(hit.keywords, None);
        assert_eq!(hit.active, Some(false));
    }

    #[test]
    fn tolerates_null_and_missing_fields() {
        let hit: FaqHit = serde_json::from_str(r#"{"question": null, "active": null}"#).unwrap();
        assert_eq!(hit.question, None);
        assert_eq!(hit.active, None);
        assert_eq!(hit.id, None);
    }
}
