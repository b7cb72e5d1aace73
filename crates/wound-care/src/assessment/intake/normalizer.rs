/// Fold a free-form tag into its lookup key: invisible characters removed, whitespace and
/// dashes collapsed to single underscores, ASCII lower-cased.
pub(crate) fn normalize_tag(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}', '\u{200c}', '\u{200d}'], "");
    let spaced: String = cleaned
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();
    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_tag;

    #[test]
    fn strips_invisible_characters_and_folds_separators() {
        assert_eq!(normalize_tag("\u{feff}  Lower - Leg\u{200b} "), "lower_leg");
        assert_eq!(normalize_tag("left__heel"), "left_heel");
        assert_eq!(normalize_tag("diabeticFoot"), "diabeticfoot");
    }

    #[test]
    fn keeps_symbols_used_by_abi_bands() {
        assert_eq!(normalize_tag("< 0.5"), "<_0.5");
        assert_eq!(normalize_tag("lt_0_5"), "lt_0_5");
    }
}
