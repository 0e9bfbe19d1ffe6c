use tracing::debug;

/// Cyclic position over an ordered collection of `len` items.
///
/// The index is `None` exactly when the collection is empty; otherwise it is
/// always a valid position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: Option<usize>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: if len == 0 { None } else { Some(0) },
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Adopts a replaced collection, clamping the current position into it.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.index = match self.index {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => Some(0),
        };
    }

    /// Moves forward, wrapping from the last item to the first.
    pub fn next(&mut self) -> Option<usize> {
        if let Some(index) = self.index {
            self.index = Some((index + 1) % self.len);
        }
        self.index
    }

    /// Moves back, wrapping from the first item to the last.
    pub fn prev(&mut self) -> Option<usize> {
        if let Some(index) = self.index {
            self.index = Some(if index == 0 { self.len - 1 } else { index - 1 });
        }
        self.index
    }

    /// Selects `index` directly. Out-of-range positions leave the carousel unchanged.
    pub fn jump(&mut self, index: usize) -> bool {
        if index >= self.len {
            debug!(index, len = self.len, "Ignoring carousel jump out of range");
            return false;
        }
        self.index = Some(index);
        true
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.index.and_then(|index| items.get(index))
    }
}
