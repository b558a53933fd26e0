//! Genre list storage helpers.
//!
//! Venues and artists store their genres as a single comma-delimited string
//! rather than a join table. Individual genres are not escaped, so a genre
//! that itself contains a comma cannot be recovered after joining.

/// Separator used between genres in the stored column.
pub const GENRE_SEPARATOR: char = ',';

/// Join an ordered list of genres into the stored column value.
///
/// - Empty input yields an empty string.
/// - A single element is returned unmodified.
/// - Multiple elements are joined with [`GENRE_SEPARATOR`].
///
/// # Examples
///
/// ```
/// use fyyur_core::genres::join_genres;
/// assert_eq!(join_genres(&[]), "");
/// assert_eq!(join_genres(&["Jazz".to_string()]), "Jazz");
/// assert_eq!(join_genres(&["Jazz".to_string(), "Folk".to_string()]), "Jazz,Folk");
/// ```
pub fn join_genres(values: &[String]) -> String {
    match values {
        [] => String::new(),
        [single] => single.clone(),
        many => many.join(","),
    }
}

/// Split a stored genre column back into its parts.
///
/// Only used to prefill edit forms. An empty column yields an empty list.
pub fn split_genres(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored.split(GENRE_SEPARATOR).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn join_empty_is_empty_string() {
        assert_eq!(join_genres(&[]), "");
    }

    #[test]
    fn join_single_is_unmodified() {
        assert_eq!(join_genres(&owned(&["Rock n Roll"])), "Rock n Roll");
    }

    #[test]
    fn join_many_is_comma_separated() {
        assert_eq!(
            join_genres(&owned(&["Jazz", "Reggae", "Swing"])),
            "Jazz,Reggae,Swing"
        );
    }

    #[test]
    fn join_does_not_escape_embedded_commas() {
        let joined = join_genres(&owned(&["Folk, Acoustic", "Blues"]));
        assert_eq!(joined, "Folk, Acoustic,Blues");
        assert_eq!(split_genres(&joined).len(), 3);
    }

    #[test]
    fn split_reconstructs_comma_free_lists() {
        let cases: [&[&str]; 4] = [
            &["Jazz"],
            &["Jazz", "Folk"],
            &["Classical", "R&B", "Hip-Hop", "Other"],
            &["", "Electronic"],
        ];
        for case in cases {
            let input = owned(case);
            assert_eq!(split_genres(&join_genres(&input)), input, "case {case:?}");
        }
    }

    #[test]
    fn split_empty_is_empty_list() {
        assert!(split_genres("").is_empty());
    }
}
