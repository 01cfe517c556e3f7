//! Cyclic rotation for the highlighted animal card.

/// Position within a fixed ring of slides.
///
/// The ring only exists when at least one slide does; advancing wraps back
/// to the first slide after the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    index: usize,
}

impl Rotation {
    /// A ring over `len` slides, starting at the first; `None` when empty.
    #[must_use]
    pub const fn new(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self { len, index: 0 })
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Move to the next slide and return its index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }
}
