//! Name search helpers.
//!
//! Search is a case-insensitive substring match on the `name` column only.
//! This module builds the `LIKE`-style pattern and evaluates it with full
//! Unicode lowercasing, which SQLite's built-in `LOWER()` and `LIKE` lack.

/// Build the `LIKE` pattern for a search term.
///
/// Returns `None` for an empty term, which callers treat as "no results"
/// without querying the store. The term is wrapped in `%` wildcards and is
/// otherwise passed through verbatim: `%` and `_` inside the term keep their
/// wildcard meaning.
///
/// # Examples
///
/// ```
/// use fyyur_core::search::name_pattern;
/// assert_eq!(name_pattern("Hop"), Some("%Hop%".to_string()));
/// assert_eq!(name_pattern(""), None);
/// ```
pub fn name_pattern(term: &str) -> Option<String> {
    if term.is_empty() {
        None
    } else {
        Some(format!("%{term}%"))
    }
}

/// Evaluate a `LIKE`-style `pattern` against `value`, ignoring case.
///
/// Both sides are lowercased with Unicode rules. `%` matches any run of
/// characters (including none) and `_` matches exactly one character.
///
/// # Examples
///
/// ```
/// use fyyur_core::search::like_matches;
/// assert!(like_matches("%éclair%", "Café Éclair"));
/// assert!(like_matches("%a_b%", "xAzBy"));
/// assert!(!like_matches("%hop", "The Musical Hop!"));
/// ```
pub fn like_matches(pattern: &str, value: &str) -> bool {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let value: Vec<char> = value.to_lowercase().chars().collect();

    let (mut p, mut v) = (0, 0);
    // Position of the last `%` seen and the value index it is resumed from.
    let mut backtrack: Option<(usize, usize)> = None;

    while v < value.len() {
        match pattern.get(p).copied() {
            Some('%') => {
                backtrack = Some((p, v));
                p += 1;
            }
            Some(c) if c == '_' || c == value[v] => {
                p += 1;
                v += 1;
            }
            _ => match backtrack {
                Some((star, resume)) => {
                    p = star + 1;
                    v = resume + 1;
                    backtrack = Some((star, resume + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '%')
}
