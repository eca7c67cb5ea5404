//! URL-safe name normalisation for farms, crops, categories and products.

use unicode_normalization::UnicodeNormalization;

/// Lowercases `text` and reduces it to ASCII alphanumerics, `_` and single `-` separators.
///
/// Text is NFKD-decomposed first, so accented letters keep their base letter
/// and only the combining marks are dropped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.nfkd() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Returns `base` if it is not taken, otherwise the first free `base-N` counting from 1.
pub fn next_free_slug<I, S>(base: &str, taken: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let taken: std::collections::HashSet<String> =
        taken.into_iter().map(|s| s.as_ref().to_string()).collect();

    if !taken.contains(base) {
        return base.to_string();
    }

    let mut counter = 1u32;
    loop {
        let candidate = format!("{base}-{counter}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Escapes `LIKE` wildcards so `text` matches literally.
pub fn escape_like(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// `LIKE` pattern matching `base` and every `base-N` candidate.
pub fn like_pattern(base: &str) -> String {
    format!("{}%", escape_like(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("John Mwangi Farm-plot-1-john_mwangi_0"), "john-mwangi-farm-plot-1-john_mwangi_0");
        assert_eq!(slugify("  Sweet   Potatoes  "), "sweet-potatoes");
        assert_eq!(slugify("kale -- sukuma wiki"), "kale-sukuma-wiki");
    }

    #[test]
    fn slugify_drops_punctuation() {
        assert_eq!(slugify("Murang'a Coffee!"), "muranga-coffee");
        assert_eq!(slugify("--_edge_--"), "edge");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn slugify_keeps_base_letter_of_accented_characters() {
        assert_eq!(slugify("Café Ndizi"), "cafe-ndizi");
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("ﬁne Ｍaize"), "fine-maize");
        assert_eq!(slugify("日本 rice"), "rice");
    }

    #[test]
    fn next_free_slug_keeps_free_base() {
        assert_eq!(next_free_slug("maize", ["beans", "maize-1"]), "maize");
    }

    #[test]
    fn next_free_slug_counts_from_one() {
        assert_eq!(next_free_slug("maize", ["maize"]), "maize-1");
        assert_eq!(next_free_slug("maize", ["maize", "maize-1", "maize-2"]), "maize-3");
        assert_eq!(next_free_slug("maize", ["maize", "maize-2"]), "maize-1");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("john_mwangi"), "john\\_mwangi%");
        assert_eq!(like_pattern("100%"), "100\\%%");
    }
}
