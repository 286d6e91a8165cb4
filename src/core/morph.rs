//! Index bookkeeping for the cycling hero word

/// Delay between two words, in milliseconds
pub const MORPH_INTERVAL_MS: u32 = 2500;

/// Position in an ordered, endlessly repeating list of words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCycle {
    len: usize,
    index: usize,
}

impl TextCycle {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    /// Index that will be shown after the current one
    pub fn peek_next(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.index + 1) % self.len
        }
    }

    /// Move to the next word, wrapping around. An empty list never moves.
    pub fn advance(&mut self) -> usize {
        self.index = self.peek_next();
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(TextCycle::new(5).current(), 0);
    }

    #[test]
    fn test_advance_wraps() {
        let mut cycle = TextCycle::new(3);
        assert_eq!(cycle.advance(), 1);
        assert_eq!(cycle.advance(), 2);
        assert_eq!(cycle.advance(), 0);
        assert_eq!(cycle.peek_next(), 1);
    }

    #[test]
    fn test_single_word_stays_put() {
        let mut cycle = TextCycle::new(1);
        assert_eq!(cycle.advance(), 0);
        assert_eq!(cycle.advance(), 0);
    }

    #[test]
    fn test_empty_list_never_advances() {
        let mut cycle = TextCycle::new(0);
        assert!(cycle.is_empty());
        assert_eq!(cycle.advance(), 0);
        assert_eq!(cycle.current(), 0);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut cycle = TextCycle::new(4);
        for _ in 0..100 {
            assert!(cycle.advance() < cycle.len());
        }
    }
}
