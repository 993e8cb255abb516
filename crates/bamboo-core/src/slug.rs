//! URL slugs derived from post titles.

/// Map a title to a URL-safe slug.
///
/// Lowercases the input, drops everything that is not an ASCII letter, digit,
/// whitespace, `-` or `_`, turns each run of separators into a single `-`
/// and trims separators from both ends. The output only contains `[a-z0-9-]`.
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut separator = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if separator && !slug.is_empty() {
                slug.push('-');
            }
            separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            separator = true;
        }
    }

    slug
}

/// Whether `slug` is non-empty and made only of `[a-z0-9-]`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
