//! Чтение slug из адресной строки: сперва query-параметр `slug`,
//! затем последний сегмент пути вида `/campingPosts/{slug}`.

fn parse_slug_from_search(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            if key == "slug" && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn parse_slug_from_path(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    // Одиночный сегмент — это страница, а не slug.
    if segments.len() < 2 {
        return None;
    }
    segments.last().map(|s| s.to_string())
}

pub(crate) fn slug_from_location() -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();

    if let Ok(search) = location.search() {
        if let Some(slug) = parse_slug_from_search(&search) {
            return Some(slug);
        }
    }

    let path = location.pathname().ok()?;
    parse_slug_from_path(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_slug_from_search_reads_slug_parameter() {
        assert_eq!(parse_slug_from_search("?slug=7").as_deref(), Some("7"));
        assert_eq!(
            parse_slug_from_search("?page=2&slug=lakeside").as_deref(),
            Some("lakeside")
        );
    }

    #[test]
    fn parse_slug_from_search_rejects_missing_or_empty_value() {
        assert!(parse_slug_from_search("").is_none());
        assert!(parse_slug_from_search("?page=2").is_none());
        assert!(parse_slug_from_search("?slug=").is_none());
    }

    #[test]
    fn parse_slug_from_path_takes_last_segment() {
        assert_eq!(
            parse_slug_from_path("/campingPosts/7").as_deref(),
            Some("7")
        );
        assert_eq!(
            parse_slug_from_path("/campingPosts/lakeside/").as_deref(),
            Some("lakeside")
        );
    }

    #[test]
    fn parse_slug_from_path_rejects_short_paths() {
        assert!(parse_slug_from_path("/").is_none());
        assert!(parse_slug_from_path("/index.html").is_none());
    }
}
