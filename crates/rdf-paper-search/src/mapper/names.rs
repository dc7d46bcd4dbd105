//! Person name formatting.

/// Reorder a stored `"Last, First Middle"` name to `"First Middle Last"`.
///
/// Names without a comma are returned trimmed. Extra comma-separated parts
/// are joined into the given-name portion.
#[must_use]
pub fn to_display_name(name: &str) -> String {
    let parts: Vec<&str> = name.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();

    match parts.split_first() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("{} {}", rest.join(" "), last).trim().to_string()
        }
        _ => name.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_comma_is_unchanged() {
        assert_eq!(to_display_name("Turing"), "Turing");
        assert_eq!(to_display_name("Alan Turing"), "Alan Turing");
    }

    #[test]
    fn test_reorders_last_first() {
        assert_eq!(to_display_name("Turing, Alan"), "Alan Turing");
        assert_eq!(to_display_name("Turing, Alan M."), "Alan M. Turing");
        assert_eq!(to_display_name(" Ngonga Ngomo ,  Axel-Cyrille "), "Axel-Cyrille Ngonga Ngomo");
    }

    #[test]
    fn test_dangling_comma() {
        assert_eq!(to_display_name("Turing,"), "Turing,");
        assert_eq!(to_display_name("  "), "");
    }
}
