//! Backend API contracts.
//!
//! All records are read-only values received from the blog backend. Field
//! names follow the backend's camelCase JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize id as either string or integer
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// The author shown in the header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub bio: String,
    /// Contact address. Absent or empty disables the copy action.
    #[serde(default)]
    pub email: Option<String>,
}

impl Profile {
    /// The email as stored, if it is present and non-blank.
    pub fn copyable_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|email| !email.trim().is_empty())
    }
}

/// Lightweight listing entry for one article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    /// Display string, never parsed.
    #[serde(default)]
    pub publish_date: String,
}

/// Full article including the raw markdown body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub summary: ArticleSummary,
    #[serde(default)]
    pub content: String,
}

impl ArticleDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }

    pub fn publish_date(&self) -> &str {
        &self.summary.publish_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_camel_case() {
        let json =
            r#"{"id":"1","username":"ann","avatarUrl":"/a.png","bio":"hi","email":"ann@x.com"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "1");
        assert_eq!(profile.username, "ann");
        assert_eq!(profile.avatar_url, "/a.png");
        assert_eq!(profile.bio, "hi");
        assert_eq!(profile.copyable_email(), Some("ann@x.com"));
    }

    #[test]
    fn test_profile_without_email() {
        let json = r#"{"id":1,"username":"ann","avatarUrl":"","bio":""}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "1");
        assert!(profile.email.is_none());
        assert_eq!(profile.copyable_email(), None);
    }

    #[test]
    fn test_profile_blank_email_is_not_copyable() {
        let json = r#"{"id":"1","username":"ann","email":"   "}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.copyable_email(), None);
    }

    #[test]
    fn test_copyable_email_is_not_trimmed() {
        let json = r#"{"id":"1","username":"ann","email":" ann@x.com "}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.copyable_email(), Some(" ann@x.com "));
    }

    #[test]
    fn test_article_list_keeps_backend_order() {
        let json = r#"[
            {"id":"2","title":"Newer","publishDate":"2024-02-01"},
            {"id":"1","title":"Older","publishDate":"2024-01-01"},
            {"id":"1","title":"Older","publishDate":"2024-01-01"}
        ]"#;
        let articles: Vec<ArticleSummary> = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "1"]);
    }

    #[test]
    fn test_article_detail_flattens_summary() {
        let json = r##"{"id":10,"title":"First","publishDate":"2024-01-01","content":"# Hi"}"##;
        let detail: ArticleDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id(), "10");
        assert_eq!(detail.title(), "First");
        assert_eq!(detail.publish_date(), "2024-01-01");
        assert_eq!(detail.content, "# Hi");
    }
}
