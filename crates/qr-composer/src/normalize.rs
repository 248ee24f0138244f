//! Name normalization.
//!
//! Capitalizes each word while keeping hyphens and spaces as word
//! boundaries; apostrophes are not boundaries.

/// Normalize a name: first letter of each hyphen/space-delimited segment
/// uppercased, the remainder lowercased.
///
/// Whitespace runs collapse to a single space. Empty hyphen sub-segments
/// pass through unchanged, so leading, trailing, and doubled hyphens
/// survive. Idempotent.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            word.split('-')
                .map(capitalize)
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_hyphenated_names() {
        assert_eq!(normalize("jean-paul"), "Jean-Paul");
    }

    #[test]
    fn capitalizes_each_space_delimited_word() {
        assert_eq!(normalize("MARIE claire"), "Marie Claire");
    }

    #[test]
    fn apostrophe_is_not_a_boundary() {
        assert_eq!(normalize("  o'brien "), "O'brien");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn preserves_leading_and_doubled_hyphens() {
        assert_eq!(normalize("-anne"), "-Anne");
        assert_eq!(normalize("anne--marie"), "Anne--Marie");
        assert_eq!(normalize("anne-"), "Anne-");
    }

    #[test]
    fn idempotent() {
        for input in ["jean-paul", "MARIE claire", "o'brien", "-anne--MARIE du PONT"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn preserves_boundary_counts() {
        for input in ["jean-paul dupont", "a-b-c d e", "x--y -z"] {
            let out = normalize(input);
            assert_eq!(
                input.split_whitespace().count(),
                out.split(' ').count(),
                "word count changed for {input:?}"
            );
            assert_eq!(
                input.matches('-').count(),
                out.matches('-').count(),
                "hyphen count changed for {input:?}"
            );
        }
    }
}
