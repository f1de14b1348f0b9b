//! Text formatting helpers for chart labels

/// Human-readable coin name: hyphens become spaces, each word title-cased.
/// "simon-s-cat" -> "Simon S Cat"
pub fn display_name(coin_id: &str) -> String {
    coin_id
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an integer with thousands separators: 900000 -> "900,000"
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("simon-s-cat"), "Simon S Cat");
        assert_eq!(display_name("why"), "Why");
        assert_eq!(display_name("coco-coin"), "Coco Coin");
    }

    #[test]
    fn test_display_name_ignores_empty_segments() {
        assert_eq!(display_name("a--b"), "A B");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(50_000), "50,000");
        assert_eq!(format_thousands(900_000), "900,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
