//! Continuous rank positions
//!
//! For a collection of `n` elements and a fraction `q` the rank position is
//! `(n - 1) * q`. The two order statistics around it are at `floor` and
//! `ceil` of the position; `fraction` is how far the position lies past the
//! lower one.

/// Rank position of one fraction within a collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankPosition {
    /// Continuous position in `[0, n - 1]`
    pub position: f64,
    /// Index of the lower bracketing order statistic
    pub lower: usize,
    /// Index of the higher bracketing order statistic
    pub higher: usize,
    /// `position - lower`, in `[0, 1)`
    pub fraction: f64,
}

impl RankPosition {
    /// Rank of fraction `q` in a collection of `len` elements
    ///
    /// `len` must be positive and `q` must lie in `[0, 1]`.
    pub fn new(len: usize, q: f64) -> Self {
        debug_assert!(len > 0, "rank of an empty collection");
        debug_assert!((0.0..=1.0).contains(&q));
        let last = len - 1;
        let position = last as f64 * q;
        let lower = (position.floor() as usize).min(last);
        let higher = (position.ceil() as usize).min(last);
        Self {
            position,
            lower,
            higher,
            fraction: position - lower as f64,
        }
    }

    /// Whether the position falls exactly on an element
    pub fn is_exact(&self) -> bool {
        self.lower == self.higher
    }

    /// Index nearest to the position, ties rounding up
    pub fn nearest(&self) -> usize {
        // a tie (fraction == 0.5) goes to the higher index
        if self.fraction < 0.5 {
            self.lower
        } else {
            self.higher
        }
    }
}
