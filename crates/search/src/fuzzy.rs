//! Edit distance and address tokenization.

/// Calculate Levenshtein edit distance between two strings.
///
/// Counts the insertions, deletions and substitutions of single characters
/// (Unicode scalar values) needed to turn `a` into `b`.
///
/// # Example
/// ```
/// use wanderstay_search::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("shimlaa", "shimla"), 1);
/// assert_eq!(levenshtein_distance("agra", "agra"), 0);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Only the previous row of the table is needed
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            curr[j] = if a_chars[i - 1] == b_chars[j - 1] {
                prev[j - 1]
            } else {
                (prev[j - 1] + 1).min(prev[j] + 1).min(curr[j - 1] + 1)
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Split an address into tokens on runs of whitespace and commas.
///
/// Empty pieces produced by leading or trailing separators are dropped.
/// An empty address or one starting with a separator therefore yields no
/// empty token, so a query no longer than the fuzzy threshold cannot match
/// through one.
pub fn tokenize_address(address: &str) -> impl Iterator<Item = &str> {
    address
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

/// Smallest edit distance between `query` and any token of `address`.
///
/// Returns `None` when the address has no tokens.
pub fn min_token_distance(address: &str, query: &str) -> Option<usize> {
    tokenize_address(address)
        .map(|token| levenshtein_distance(query, token))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(levenshtein_distance("shimla", "shimla"), 0);
    }

    #[test]
    fn test_levenshtein_one_edit() {
        assert_eq!(levenshtein_distance("manali", "manali"), 0);
        assert_eq!(levenshtein_distance("manali", "menali"), 1);
        assert_eq!(levenshtein_distance("shimlaa", "shimla"), 1);
        assert_eq!(levenshtein_distance("shmla", "shimla"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein_distance("", "goa"), 3);
        assert_eq!(levenshtein_distance("goa", ""), 3);
        assert_eq!(levenshtein_distance("", ""), 0);
    }

    #[test]
    fn test_levenshtein_classic() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("münchen", "munchen"), 1);
        assert_eq!(levenshtein_distance("दिल्ली", "दिल्ली"), 0);
    }

    #[test]
    fn test_tokenize_address() {
        let tokens: Vec<_> = tokenize_address("12, Mall Road,  Shimla").collect();
        assert_eq!(tokens, ["12", "Mall", "Road", "Shimla"]);
    }

    #[test]
    fn test_tokenize_drops_edge_separators() {
        let tokens: Vec<_> = tokenize_address(", Agra ,").collect();
        assert_eq!(tokens, ["Agra"]);
        assert_eq!(tokenize_address(" ,, ").count(), 0);
    }

    #[test]
    fn test_short_query_has_no_empty_token_to_match() {
        assert_eq!(min_token_distance("", "ab"), None);
        assert_eq!(min_token_distance(", Shimla", "ab"), Some(6));
        assert_eq!(min_token_distance("Agra ,", "ab"), Some(4));
    }

    #[test]
    fn test_min_token_distance() {
        assert_eq!(min_token_distance("mall road, shimla", "shimlaa"), Some(1));
        assert_eq!(min_token_distance("agra", "agra"), Some(0));
        assert_eq!(min_token_distance("", "agra"), None);
    }

    proptest! {
        #[test]
        fn prop_levenshtein_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        }

        #[test]
        fn prop_levenshtein_identity(a in "\\PC{0,16}") {
            prop_assert_eq!(levenshtein_distance(&a, &a), 0);
        }

        #[test]
        fn prop_levenshtein_bounded_by_longer(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
            let d = levenshtein_distance(&a, &b);
            prop_assert!(d <= a.len().max(b.len()));
            prop_assert!(d >= a.len().abs_diff(b.len()));
        }
    }
}
