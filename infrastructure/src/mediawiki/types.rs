//! MediaWiki Action API response types (`formatversion=2`)

use serde::Deserialize;
use std::collections::BTreeMap;

/// Envelope shared by every `action=query` response
#[derive(Debug, Deserialize)]
pub struct ApiResponse<Q> {
    pub query: Option<Q>,
    /// Parameters to merge into the next request, when more results exist
    #[serde(rename = "continue")]
    pub continuation: Option<BTreeMap<String, String>>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

/// `list=usercontribs`
#[derive(Debug, Default, Deserialize)]
pub struct UserContribsQuery {
    #[serde(default)]
    pub usercontribs: Vec<UserContrib>,
}

#[derive(Debug, Deserialize)]
pub struct UserContrib {
    pub title: String,
    pub timestamp: String,
}

/// `prop=revisions` / `prop=info`
#[derive(Debug, Default, Deserialize)]
pub struct PagesQuery {
    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

#[derive(Debug, Deserialize)]
pub struct PageEntry {
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
    #[serde(default)]
    pub redirect: bool,
    #[serde(default)]
    pub revisions: Vec<Revision>,
}

#[derive(Debug, Deserialize)]
pub struct Revision {
    pub user: Option<String>,
    pub timestamp: Option<String>,
    pub slots: Option<Slots>,
}

#[derive(Debug, Deserialize)]
pub struct Slots {
    pub main: Slot,
}

#[derive(Debug, Deserialize)]
pub struct Slot {
    pub content: Option<String>,
}

impl PageEntry {
    /// Main-slot wikitext of the first returned revision
    pub fn content(&self) -> Option<&str> {
        self.revisions
            .first()?
            .slots
            .as_ref()?
            .main
            .content
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_content_response() {
        let json = r#"{
            "batchcomplete": true,
            "query": {
                "pages": [
                    {
                        "pageid": 1,
                        "ns": 4,
                        "title": "Wikipedia:Articles for deletion/Foo",
                        "revisions": [{"slots": {"main": {"contentmodel": "wikitext", "content": "text"}}}]
                    },
                    {"ns": 4, "title": "Wikipedia:Articles for deletion/Gone", "missing": true}
                ]
            }
        }"#;

        let response: ApiResponse<PagesQuery> = serde_json::from_str(json).unwrap();
        let pages = response.query.unwrap().pages;
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].content(), Some("text"));
        assert!(pages[1].missing);
        assert_eq!(pages[1].content(), None);
        assert!(response.continuation.is_none());
    }

    #[test]
    fn test_deserialize_error_response() {
        let json = r#"{"error": {"code": "badvalue", "info": "Unrecognized value"}}"#;
        let response: ApiResponse<PagesQuery> = serde_json::from_str(json).unwrap();
        assert!(response.query.is_none());
        assert_eq!(response.error.unwrap().code, "badvalue");
    }

    #[test]
    fn test_deserialize_continuation() {
        let json = r#"{
            "continue": {"uccontinue": "20200501093000|123", "continue": "-||"},
            "query": {"usercontribs": [{"title": "Wikipedia:Articles for deletion/Foo", "timestamp": "2020-05-01T09:30:00Z"}]}
        }"#;
        let response: ApiResponse<UserContribsQuery> = serde_json::from_str(json).unwrap();
        let continuation = response.continuation.unwrap();
        assert_eq!(continuation["uccontinue"], "20200501093000|123");
        assert_eq!(response.query.unwrap().usercontribs.len(), 1);
    }
}
