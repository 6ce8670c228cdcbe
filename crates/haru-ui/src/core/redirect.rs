//! One-shot default landing-page redirect decision.

/// Resolve the configured default page to a route path.
///
/// Returns `None` when no redirect applies: the current path is not the
/// root, the session already redirected once, the setting is `home`, or the
/// setting is unknown.
#[must_use]
pub fn redirect_target(
    path: &str,
    already_redirected: bool,
    default_page: Option<&str>,
) -> Option<&'static str> {
    if already_redirected || path != "/" {
        return None;
    }
    match default_page? {
        "posts" => Some("/posts"),
        "todo" => Some("/todo"),
        "community" => Some("/community"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::redirect_target;

    #[test]
    fn known_pages_redirect_from_root() {
        assert_eq!(redirect_target("/", false, Some("posts")), Some("/posts"));
        assert_eq!(redirect_target("/", false, Some("todo")), Some("/todo"));
        assert_eq!(
            redirect_target("/", false, Some("community")),
            Some("/community")
        );
    }

    #[test]
    fn home_and_unknown_settings_stay_put() {
        assert_eq!(redirect_target("/", false, Some("home")), None);
        assert_eq!(redirect_target("/", false, Some("archive")), None);
        assert_eq!(redirect_target("/", false, None), None);
    }

    #[test]
    fn redirect_fires_at_most_once_per_session() {
        assert_eq!(redirect_target("/", true, Some("posts")), None);
    }

    #[test]
    fn only_the_root_path_redirects() {
        assert_eq!(redirect_target("/posts", false, Some("todo")), None);
    }
}
