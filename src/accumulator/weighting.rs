/// TF / IDF の計算式
/// Plug a different formula into `StatisticsAccumulator<I, W>` by implementing this trait.
pub trait Weighting {
    /// IDF for a token
    /// # Arguments
    /// * `doc_count` - documents observed
    /// * `doc_freq` - documents containing the token, always > 0 when called by the accumulator
    fn idf(doc_count: u64, doc_freq: u64) -> f64;

    /// TF for a token
    /// # Arguments
    /// * `count` - occurrences in the document
    /// * `doc_len` - document length, repeats included
    fn tf(count: u64, doc_len: u64) -> f64;
}

/// デフォルトの計算式
/// `idf = ln(n / df)`, `tf = count / len`
///
/// Degenerate inputs pass through as non-finite values instead of being clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicTfIdf;

impl Weighting for ClassicTfIdf {
    #[inline]
    fn idf(doc_count: u64, doc_freq: u64) -> f64 {
        (doc_count as f64 / doc_freq as f64).ln()
    }

    #[inline]
    fn tf(count: u64, doc_len: u64) -> f64 {
        count as f64 / doc_len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_idf_is_natural_log_of_ratio() {
        assert!((ClassicTfIdf::idf(11, 1) - 11f64.ln()).abs() < 1e-12);
        assert!((ClassicTfIdf::idf(11, 4) - (11.0f64 / 4.0).ln()).abs() < 1e-12);
        assert_eq!(ClassicTfIdf::idf(3, 3), 0.0);
    }

    #[test]
    fn classic_tf_is_normalized_count() {
        assert_eq!(ClassicTfIdf::tf(1, 4), 0.25);
        assert_eq!(ClassicTfIdf::tf(0, 4), 0.0);
    }

    #[test]
    fn degenerate_inputs_pass_through() {
        assert!(ClassicTfIdf::idf(0, 0).is_nan());
        assert_eq!(ClassicTfIdf::idf(0, 1), f64::NEG_INFINITY);
        assert!(ClassicTfIdf::tf(0, 0).is_nan());
    }
}
