//! The random source contract used by generators
use rand::Rng;

/// The two capabilities a draw session needs from its random source.
///
/// Every [`rand::Rng`] implements this, so a seeded `StdRng` gives
/// reproducible sessions.
pub trait RandomSource {
    /// A uniformly sampled integer in `[min, max]` (inclusive)
    fn int_in_range(&mut self, min: i64, max: i64) -> i64;

    /// Pick an index with probability proportional to its weight.
    ///
    /// Returns `None` only for an empty candidate list. If every weight is
    /// zero the candidates are treated as equally likely.
    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize>;
}

impl<R: Rng> RandomSource for R {
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        self.gen_range(min..=max)
    }

    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }

        // Scaling by the largest weight keeps the running sum finite
        let largest = weights.iter().fold(0.0f64, |largest, w| largest.max(*w));
        if largest <= 0.0 {
            return Some(self.gen_range(0..weights.len()));
        }
        let scaled: Vec<f64> = weights
            .iter()
            .map(|w| scale_weight(*w, largest))
            .collect();

        let total: f64 = scaled.iter().sum();
        let random_value = self.gen::<f64>() * total;
        let mut cumulative = 0.0;

        for (i, weight) in scaled.iter().enumerate() {
            cumulative += weight;
            if random_value < cumulative {
                return Some(i);
            }
        }

        // Floating point rounding can leave us just past the end
        Some(weights.len() - 1)
    }
}

fn scale_weight(weight: f64, largest: f64) -> f64 {
    if largest.is_infinite() {
        // Only the infinite weights compete
        return if weight == largest { 1.0 } else { 0.0 };
    }
    if weight > 0.0 {
        weight / largest
    } else {
        0.0
    }
}
