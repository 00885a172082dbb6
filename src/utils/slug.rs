//! URL-safe slug generation for category names.

/// Generate a slug: lowercase, every non-alphanumeric run becomes a single
/// hyphen, edge hyphens trimmed.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut prev_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }

    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_name() {
        assert_eq!(slugify("Truth or Dare"), "truth-or-dare");
    }

    #[test]
    fn special_characters_collapse() {
        assert_eq!(slugify("Never!! Have -- I Ever?"), "never-have-i-ever");
    }

    #[test]
    fn edge_hyphens_trimmed() {
        assert_eq!(slugify("  Hot Seat  "), "hot-seat");
    }

    #[test]
    fn digits_kept() {
        assert_eq!(slugify("Top 10 Questions"), "top-10-questions");
    }

    #[test]
    fn only_symbols_yields_empty() {
        assert_eq!(slugify("!!!"), "");
    }
}
