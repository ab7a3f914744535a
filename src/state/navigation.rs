//! Navigation cursor over the registry.

/// Direction for navigation through images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Current position in a registry of `len` records. Wraps at both ends.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    index: usize,
    len: usize,
}

impl NavigationState {
    /// Creates a cursor at the first of `len` records.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves one step and returns the new index, or `None` when there is nothing to navigate.
    pub fn navigate(&mut self, direction: Direction) -> Option<usize> {
        if self.len == 0 {
            return None;
        }

        self.index = match direction {
            Direction::Next => (self.index + 1) % self.len,
            Direction::Previous if self.index == 0 => self.len - 1,
            Direction::Previous => self.index - 1,
        };
        Some(self.index)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.navigate(Direction::Next)
    }

    pub fn previous(&mut self) -> Option<usize> {
        self.navigate(Direction::Previous)
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index < self.len {
            self.index = index;
            Some(index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        for len in 1..6 {
            let mut nav = NavigationState::new(len);
            nav.select(len - 1);
            assert_eq!(nav.next(), Some(0));
        }
    }

    #[test]
    fn previous_wraps_to_last() {
        for len in 1..6 {
            let mut nav = NavigationState::new(len);
            assert_eq!(nav.previous(), Some(len - 1));
        }
    }

    #[test]
    fn full_cycle_returns_home() {
        let mut nav = NavigationState::new(7);
        nav.select(3);
        for _ in 0..7 {
            nav.next();
        }
        assert_eq!(nav.index(), 3);
        for _ in 0..7 {
            nav.previous();
        }
        assert_eq!(nav.index(), 3);
    }

    #[test]
    fn empty_cursor_does_not_move() {
        let mut nav = NavigationState::new(0);
        assert_eq!(nav.next(), None);
        assert_eq!(nav.previous(), None);
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut nav = NavigationState::new(3);
        assert_eq!(nav.select(5), None);
        assert_eq!(nav.index(), 0);
        assert_eq!(nav.select(2), Some(2));
    }
}
