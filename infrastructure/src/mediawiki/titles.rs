//! Mapping between API titles and page identifiers
//!
//! The API speaks `Wikipedia:Articles for deletion/Foo bar`; everything
//! else uses the namespace-less underscore form `Articles_for_deletion/Foo_bar`.

/// Project namespace (4) prefix
pub const PROJECT_NAMESPACE: &str = "Wikipedia:";

/// Discussion pages live under this prefix, in underscore form
pub const DISCUSSION_PREFIX: &str = "Articles_for_deletion/";

/// Daily log pages, which transclude discussions but aren't discussions
pub const LOG_PREFIX: &str = "Articles_for_deletion/Log/";

/// `Articles_for_deletion/Foo_bar` -> `Wikipedia:Articles for deletion/Foo bar`
pub fn api_title(page: &str) -> String {
    format!("{}{}", PROJECT_NAMESPACE, page.replace('_', " "))
}

/// `Wikipedia:Articles for deletion/Foo bar` -> `Articles_for_deletion/Foo_bar`
pub fn page_id(title: &str) -> Option<String> {
    title
        .strip_prefix(PROJECT_NAMESPACE)
        .map(|rest| rest.replace(' ', "_"))
}

/// Whether a page identifier names an individual discussion
pub fn is_discussion(page: &str) -> bool {
    page.starts_with(DISCUSSION_PREFIX) && !page.starts_with(LOG_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_title() {
        let page = "Articles_for_deletion/Foo_bar_(2nd_nomination)";
        let title = api_title(page);
        assert_eq!(
            title,
            "Wikipedia:Articles for deletion/Foo bar (2nd nomination)"
        );
        assert_eq!(page_id(&title).as_deref(), Some(page));
    }

    #[test]
    fn test_page_id_requires_namespace() {
        assert_eq!(page_id("Talk:Foo"), None);
    }

    #[test]
    fn test_is_discussion() {
        assert!(is_discussion("Articles_for_deletion/Foo"));
        assert!(!is_discussion("Articles_for_deletion/Log/2020_May_1"));
        assert!(!is_discussion("Deletion_review/Log/2020_June_2"));
    }
}
