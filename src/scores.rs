pub const HIGH_SCORE_SLOTS: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighScores {
    entries: Vec<u32>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the zero-based rank taken, or `None`. Equal scores rank below earlier ones.
    pub fn record(&mut self, score: u32) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|&entry| score > entry)
            .unwrap_or(self.entries.len());

        if rank >= HIGH_SCORE_SLOTS {
            return None;
        }

        self.entries.insert(rank, score);
        self.entries.truncate(HIGH_SCORE_SLOTS);
        Some(rank)
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn best(&self) -> Option<u32> {
        self.entries.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_top_five() {
        let mut scores = HighScores::new();
        for score in [500, 1500, 900, 1500, 100, 50] {
            scores.record(score);
        }
        assert_eq!(scores.entries(), &[1500, 1500, 900, 500, 100]);
        assert_eq!(scores.best(), Some(1500));
    }

    #[test]
    fn test_record_ranks() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(500), Some(0));
        assert_eq!(scores.record(1500), Some(0));
        assert_eq!(scores.record(900), Some(1));
        assert_eq!(scores.record(1500), Some(1)); // tie goes after the earlier entry
        assert_eq!(scores.record(100), Some(4));
        assert_eq!(scores.record(50), None);
        assert_eq!(scores.record(100), None); // ties never displace
        assert_eq!(scores.record(101), Some(4));
        assert_eq!(scores.entries(), &[1500, 1500, 900, 500, 101]);
    }

    #[test]
    fn test_empty() {
        let scores = HighScores::new();
        assert!(scores.entries().is_empty());
        assert_eq!(scores.best(), None);
    }

    #[test]
    fn test_zero_score_fills_free_slot() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(0), Some(0));
        assert_eq!(scores.entries(), &[0]);
    }
}
