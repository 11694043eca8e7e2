//! Turns upload paths from the CMS into loadable URLs.

/// Relative paths are joined onto `base`; absolute and protocol-relative
/// URLs pass through. An empty path stays empty.
pub fn resolve_asset_url(base: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_upload_paths() {
        assert_eq!(
            resolve_asset_url("http://localhost:1337/", "/uploads/villa_1.jpg"),
            "http://localhost:1337/uploads/villa_1.jpg"
        );
        assert_eq!(resolve_asset_url("https://cdn.example.com", "uploads/a.mp4"), "https://cdn.example.com/uploads/a.mp4");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let url = "https://res.cloudinary.com/demo/image/upload/v1/x.png";
        assert_eq!(resolve_asset_url("http://localhost:1337", url), url);
        assert_eq!(resolve_asset_url("http://localhost:1337", "//cdn/x.png"), "//cdn/x.png");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(resolve_asset_url("http://localhost:1337", "  "), "");
    }
}
