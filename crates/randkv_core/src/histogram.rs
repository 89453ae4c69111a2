//! Histogram binning mathematics.
//!
//! Bins a slice of reals into `slots` equal-width slots spanning
//! `[min, max]` of the observed data. The command layer is responsible for
//! reading the list, parsing elements and validating the slot count; this
//! module only does the two-pass binning and the bar-chart rendering.

/// A binned count of a value slice across equal-width sub-ranges.
///
/// Counts are heap-owned and sized from the validated slot count, never a
/// runtime-sized stack array.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Smallest observed value.
    min: f64,
    /// Largest observed value.
    max: f64,
    /// Per-slot counts, length = requested slot count.
    counts: Vec<u64>,
}

impl Histogram {
    /// Bins `values` into `slots` equal-width slots.
    ///
    /// The first pass computes min and max; the second bins each value into
    /// `floor((v - min) / (max - min) * slots)`, clamping the top boundary
    /// value (which computes to exactly `slots`) into the last slot. When
    /// all values are equal the width is zero and every value lands in slot
    /// 0; this is the contract, not an accident of the arithmetic.
    ///
    /// Callers guarantee `values` is non-empty and `slots >= 1`.
    pub fn build(values: &[f64], slots: usize) -> Self {
        debug_assert!(!values.is_empty());
        debug_assert!(slots >= 1);

        let mut min = values[0];
        let mut max = values[0];
        for &v in &values[1..] {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }

        let range = max - min;
        let mut counts = vec![0u64; slots];
        for &v in values {
            let slot = if range == 0.0 {
                0
            } else {
                let raw = ((v - min) / range * slots as f64) as usize;
                raw.min(slots - 1)
            };
            counts[slot] += 1;
        }

        Self { min, max, counts }
    }

    /// Smallest observed value.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest observed value.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Per-slot counts, indexed 0..slots-1.
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Renders one asterisk row per slot, scaled to `column_width`.
    ///
    /// Row `i` has `floor(count[i] / max_count * column_width)` asterisks,
    /// where `max_count` is the largest slot count observed; the fullest
    /// slot therefore spans the whole column width.
    pub fn bar_rows(&self, column_width: usize) -> Vec<String> {
        let max_count = self.counts.iter().copied().max().unwrap_or(0);
        self.counts
            .iter()
            .map(|&count| {
                let len = if max_count == 0 {
                    0
                } else {
                    (count as f64 / max_count as f64 * column_width as f64) as usize
                };
                "*".repeat(len)
            })
            .collect()
    }
}
