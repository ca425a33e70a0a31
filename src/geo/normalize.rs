//! City-name normalization.
//!
//! The same transform is applied to dataset keys at build time and to
//! query input at lookup time — both sides must agree exactly for keys
//! to match. Matching is exact string equality afterwards, never fuzzy.

/// Normalize a city name into its lookup key.
///
/// Turkish dotted/dotless I is handled before case-folding: Unicode
/// lowercasing turns `İ` into `i` plus a combining dot, which would
/// never match a plain `i` key.
pub fn normalize(city: &str) -> String {
    let mut lowered = String::with_capacity(city.len());
    for c in city.chars() {
        match c {
            'İ' | 'I' | 'ı' => lowered.push('i'),
            'Ğ' | 'ğ' => lowered.push('g'),
            'Ü' | 'ü' => lowered.push('u'),
            'Ş' | 'ş' => lowered.push('s'),
            'Ö' | 'ö' => lowered.push('o'),
            'Ç' | 'ç' => lowered.push('c'),
            _ => lowered.extend(c.to_lowercase()),
        }
    }

    let folded = lowered.chars().map(|c| match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ý' => 'y',
        _ => c,
    });

    // Collect then collapse whitespace runs and trim in one pass.
    folded
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize("  Stockholm "), "stockholm");
        assert_eq!(normalize("NEW YORK"), "new york");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(normalize("  Multiple   Spaces  "), "multiple spaces");
        assert_eq!(normalize("Rio\tde  Janeiro"), "rio de janeiro");
    }

    #[test]
    fn test_turkish_dotted_i() {
        // Naive Unicode lowercasing of İ yields "i\u{307}" — must not happen.
        assert_eq!(normalize("İzmir"), "izmir");
        assert_eq!(normalize("IZMIR"), "izmir");
        assert_eq!(normalize("ızmır"), "izmir");
        assert_eq!(normalize("İzmir"), normalize("izmir"));
    }

    #[test]
    fn test_turkish_consonants() {
        assert_eq!(normalize("Muğla"), "mugla");
        assert_eq!(normalize("Şanlıurfa"), "sanliurfa");
        assert_eq!(normalize("Çorum"), "corum");
        assert_eq!(normalize("GÜMÜŞHANE"), "gumushane");
        assert_eq!(normalize("Muğla"), normalize("mugla"));
    }

    #[test]
    fn test_accented_latin() {
        assert_eq!(normalize("São Paulo"), "sao paulo");
        assert_eq!(normalize("Montréal"), "montreal");
        assert_eq!(normalize("Málaga"), "malaga");
        assert_eq!(normalize("A Coruña"), "a coruna");
        // Uppercase accents fold through the lowercase pass first.
        assert_eq!(normalize("MONTRÉAL"), "montreal");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_idempotent() {
        for s in ["İstanbul", "Fethiye, Muğla", "  São  Paulo "] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }
}
