/// Id of the in-page element an `href` points at, if it is a real `#anchor`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
