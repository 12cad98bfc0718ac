use crate::SiteConfig;

/// Collapses any run of forward slashes in `path` down to a single slash.
///
/// Joining configured path segments naively produces doubled slashes when a
/// segment is empty or already carries its own separator.
pub fn replace_slashes(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut previous_was_slash = false;

    for ch in path.chars() {
        if ch == '/' {
            if !previous_was_slash {
                result.push(ch);
            }
            previous_was_slash = true;
        } else {
            result.push(ch);
            previous_was_slash = false;
        }
    }

    result
}

/// Returns the site-relative link target for a tag with the given slug.
pub fn tag_permalink(config: &SiteConfig, slug: &str) -> String {
    replace_slashes(&format!(
        "/{}/{}/{}",
        config.base_path, config.tags_path, slug
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_config(base_path: &str, tags_path: &str) -> SiteConfig {
        SiteConfig {
            base_path: base_path.to_string(),
            tags_path: tags_path.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_replace_slashes() {
        assert_eq!(replace_slashes("//tags//web-development"), "/tags/web-development");
        assert_eq!(replace_slashes("/tags/rust"), "/tags/rust");
        assert_eq!(replace_slashes("///"), "/");
        assert_eq!(replace_slashes(""), "");
    }

    #[test]
    fn test_tag_permalink() {
        assert_eq!(
            tag_permalink(&make_config("/", "tags"), "web-development"),
            "/tags/web-development"
        );
        assert_eq!(
            tag_permalink(&make_config("", "tags"), "rust"),
            "/tags/rust"
        );
        assert_eq!(
            tag_permalink(&make_config("/garden", "topics"), "rust"),
            "/garden/topics/rust"
        );
    }

    #[test]
    fn test_tag_permalink_with_empty_slug_is_the_tags_root() {
        assert_eq!(tag_permalink(&make_config("/", "tags"), ""), "/tags/");
    }
}
