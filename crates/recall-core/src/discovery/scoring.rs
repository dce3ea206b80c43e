//! PMI and domain-specificity terms of the discovery score

/// Upper bound on the domain boost for words far more common here than in general text
pub const MAX_DOMAIN_BOOST: f64 = 10.0;

/// Boost for words no more frequent here than in general text
pub const COMMON_WORD_BOOST: f64 = 0.5;

/// Boost for unknown words seen at least [`JARGON_MIN_OCCURRENCES`] times
pub const JARGON_BOOST: f64 = 8.0;

/// Boost for rare unknown words
pub const RARE_UNKNOWN_BOOST: f64 = 2.0;

pub const JARGON_MIN_OCCURRENCES: u64 = 10;

/// Pointwise mutual information of `word` with a seed, clamped at zero.
///
/// `count` is the co-occurrence count, `seed_total` the sum of all
/// co-occurrence counts for that seed, `global_freq` the word's corpus count
/// and `corpus_total` the sum of all corpus counts.
pub fn pmi(count: u64, seed_total: u64, global_freq: u64, corpus_total: u64) -> f64 {
    let p_word_given_seed = count as f64 / seed_total.max(1) as f64;
    let p_word = global_freq as f64 / corpus_total.max(1) as f64;
    if p_word > 0.0 && p_word_given_seed > p_word {
        (p_word_given_seed / p_word).log2()
    } else {
        0.0
    }
}

/// Domain-specificity multiplier from in-corpus vs background frequency
pub fn domain_boost(global_freq: u64, corpus_total: u64, background: Option<f64>) -> f64 {
    match background {
        Some(general) if general > 0.0 => {
            let ours = global_freq as f64 / corpus_total.max(1) as f64;
            if ours > general {
                (ours / general).min(MAX_DOMAIN_BOOST)
            } else {
                COMMON_WORD_BOOST
            }
        }
        _ if global_freq >= JARGON_MIN_OCCURRENCES => JARGON_BOOST,
        _ => RARE_UNKNOWN_BOOST,
    }
}

/// Contribution of one (seed, word) pair
pub fn pair_score(count: u64, pmi: f64, boost: f64) -> f64 {
    count as f64 * (1.0 + pmi) * boost
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pmi_monotonic_in_count() {
        let mut last = pmi(1, 100, 5, 10_000);
        for count in 2..50 {
            let next = pmi(count, 100, 5, 10_000);
            assert!(next > last, "pmi({}) = {} not > {}", count, next, last);
            last = next;
        }
    }

    #[test]
    fn test_pmi_never_negative() {
        assert_eq!(pmi(1, 1000, 900, 1000), 0.0);
        assert_eq!(pmi(0, 10, 1, 100), 0.0);
    }

    #[test]
    fn test_pmi_value() {
        // P(w|s) = 0.5, P(w) = 0.125
        assert!((pmi(5, 10, 10, 80) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_domain_boost_known_words() {
        // ours = 0.01, general = 0.001
        assert!((domain_boost(10, 1000, Some(0.001)) - 10.0).abs() < 1e-9);
        assert!((domain_boost(4, 1000, Some(0.001)) - 4.0).abs() < 1e-9);
        assert_eq!(domain_boost(1, 1000, Some(0.01)), COMMON_WORD_BOOST);
    }

    #[test]
    fn test_domain_boost_unknown_words() {
        assert_eq!(domain_boost(10, 1000, None), JARGON_BOOST);
        assert_eq!(domain_boost(9, 1000, None), RARE_UNKNOWN_BOOST);
    }
}
