//! Level-to-edge conversion for polled button state.

/// A transition between two consecutive samples of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Low to high (button went down).
    Rising,
    /// High to low (button went up).
    Falling,
}

/// Remembers the previous level and reports a change exactly once.
///
/// Levels that change and change back between two samples are never seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    last: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current level; returns the edge if it differs from the last one.
    pub fn update(&mut self, level: bool) -> Option<Edge> {
        let edge = match (self.last, level) {
            (false, true) => Some(Edge::Rising),
            (true, false) => Some(Edge::Falling),
            _ => None,
        };
        self.last = level;
        edge
    }

    pub fn level(&self) -> bool {
        self.last
    }
}
