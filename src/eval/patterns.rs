//! Pattern scores for move evaluation
//!
//! A run is valued by its length; each open end multiplies the value.

/// Base value of a run by length
pub struct PatternScore;

impl PatternScore {
    /// Five or more - completes a line
    pub const FIVE: u32 = 10_000;
    pub const FOUR: u32 = 1_000;
    pub const THREE: u32 = 100;
    pub const TWO: u32 = 10;
    /// Isolated mark
    pub const ONE: u32 = 1;
}

/// Map run length to its base value
#[inline]
pub fn run_base(length: usize) -> u32 {
    match length {
        n if n >= 5 => PatternScore::FIVE,
        4 => PatternScore::FOUR,
        3 => PatternScore::THREE,
        2 => PatternScore::TWO,
        _ => PatternScore::ONE,
    }
}

/// Score of one orientation: base value times `(open_ends + 1)`
#[inline]
pub fn run_score(length: usize, open_ends: u32) -> u32 {
    run_base(length) * (open_ends + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::FOUR);
        assert!(PatternScore::FOUR > PatternScore::THREE);
        assert!(PatternScore::THREE > PatternScore::TWO);
        assert!(PatternScore::TWO > PatternScore::ONE);
    }

    #[test]
    fn test_run_base() {
        assert_eq!(run_base(0), 1);
        assert_eq!(run_base(1), 1);
        assert_eq!(run_base(2), 10);
        assert_eq!(run_base(3), 100);
        assert_eq!(run_base(4), 1_000);
        assert_eq!(run_base(5), 10_000);
        assert_eq!(run_base(9), 10_000);
    }

    #[test]
    fn test_open_ends_multiply() {
        assert_eq!(run_score(4, 0), 1_000);
        assert_eq!(run_score(4, 1), 2_000);
        assert_eq!(run_score(4, 2), 3_000);
        // A closed four still beats an open three
        assert!(run_score(4, 0) > run_score(3, 2));
    }
}
