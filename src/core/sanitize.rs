// src/core/sanitize.rs

use unicode_normalization::UnicodeNormalization;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Compatibility-decompose, then keep only ASCII. "José Álvarez" → "Jose Alvarez".
pub fn fold_ascii(s: &str) -> String {
    s.nfkd().filter(char::is_ascii).collect()
}

/// Drop thousands separators and percent signs ahead of numeric parsing.
pub fn strip_numeric_noise(s: &str) -> String {
    s.chars().filter(|&c| c != ',' && c != '%').collect()
}

/// Uppercase the first letter, lowercase nothing else.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Boston \n  Celtics\t"), "Boston Celtics");
    }

    #[test]
    fn fold_drops_accents() {
        assert_eq!(fold_ascii("José Álvarez"), "Jose Alvarez");
        assert_eq!(fold_ascii("Nikola Jokić"), "Nikola Jokic");
        assert_eq!(fold_ascii("Luka Dončić"), "Luka Doncic");
    }

    #[test]
    fn fold_discards_non_latin() {
        assert_eq!(fold_ascii("Yao 姚明"), "Yao ");
    }

    #[test]
    fn numeric_noise() {
        assert_eq!(strip_numeric_noise("1,234"), "1234");
        assert_eq!(strip_numeric_noise("56%"), "56");
    }

    #[test]
    fn capitalize_first() {
        assert_eq!(capitalize("jamesle"), "Jamesle");
        assert_eq!(capitalize(""), "");
    }
}
