use std::fmt;

#[allow(unused_imports)]
use crate::Llrb;

/// Depth tracks minimum, maximum and average depth at which a walk from
/// the root of an [`Llrb`] tree reaches an absent child position. In a
/// balanced tree `max` is at most twice `min`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Depth {
    samples: usize,
    min: usize,
    max: usize,
    total: usize,
}

impl Depth {
    pub(crate) fn new() -> Depth {
        Default::default()
    }

    pub(crate) fn sample(&mut self, depth: usize) {
        if self.samples == 0 || depth < self.min {
            self.min = depth
        }
        if depth > self.max {
            self.max = depth
        }
        self.samples += 1;
        self.total += depth;
    }

    /// Return number of absent positions sampled in [`Llrb`] instance,
    /// always one more than the number of entries.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return minimum depth of an absent position.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Return maximum depth of an absent position.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the average depth, zero when nothing was sampled.
    pub fn mean(&self) -> usize {
        match self.samples {
            0 => 0,
            n => self.total / n,
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{ samples: {}, min: {}, mean: {}, max: {} }}",
            self.samples,
            self.min,
            self.mean(),
            self.max
        )
    }
}
