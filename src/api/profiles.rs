const COLLECTION: &str = "profiles";

/// Path segments below the API base URL. The trailing empty segment on the
/// collection keeps the `/profiles/` slash the backend routes on.
pub fn collection_segments() -> Vec<&'static str> {
    vec![COLLECTION, ""]
}

pub fn profile_segments(name: &str) -> Vec<&str> {
    vec![COLLECTION, name]
}

pub fn toggle_active_segments(name: &str) -> Vec<&str> {
    vec![COLLECTION, name, "toggle-active"]
}

pub fn crawl_segments(name: &str) -> Vec<&str> {
    vec![COLLECTION, name, "crawl"]
}

pub fn analyze_segments(name: &str) -> Vec<&str> {
    vec![COLLECTION, name, "analyze"]
}
