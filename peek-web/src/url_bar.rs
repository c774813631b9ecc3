//! What the URL bar loads when Enter is pressed

/// URL to load for the submitted `draft`. An empty draft falls back to
/// `default_url`; anything else is loaded exactly as typed.
pub fn resolve_submission(draft: &str, default_url: &str) -> String {
    if draft.is_empty() {
        default_url.to_string()
    } else {
        draft.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "https://codesandbox.io/s/new";

    #[test]
    fn test_empty_draft_loads_default() {
        assert_eq!(resolve_submission("", DEFAULT), DEFAULT);
    }

    #[test]
    fn test_draft_passes_through() {
        assert_eq!(
            resolve_submission("https://example.com", DEFAULT),
            "https://example.com"
        );
    }

    #[test]
    fn test_draft_keeps_its_query_string() {
        assert_eq!(
            resolve_submission("https://example.com/?a=1&b=2#top", DEFAULT),
            "https://example.com/?a=1&b=2#top"
        );
    }

    #[test]
    fn test_draft_is_not_trimmed_or_validated() {
        assert_eq!(resolve_submission(" ", DEFAULT), " ");
        assert_eq!(resolve_submission("not a url", DEFAULT), "not a url");
    }
}
