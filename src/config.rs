/// Where a temporary 4-node, a node with both children red, gets split
/// by a color-flip during insertion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Split {
    /// Split 4-nodes while walking down the tree, 2-3-4 flavour of LLRB.
    /// Only rotations are applied on the way back up, hence a balanced
    /// 4-node may survive in the tree.
    #[default]
    TopDown,
    /// Split 4-nodes on the way back up, after rotations, 2-3 flavour of
    /// LLRB. Red links always lean left once an insert completes.
    BottomUp,
}

/// Configuration for an [`Llrb`] instance. Each instance carries its own
/// copy, there is no process wide state.
///
/// [`Llrb`]: crate::Llrb
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    split: Split,
    trace: bool,
}

impl Config {
    pub fn new() -> Config {
        Default::default()
    }

    /// Choose the [`Split`] mode, default is [`Split::TopDown`].
    pub fn set_split(&mut self, split: Split) -> &mut Self {
        self.split = split;
        self
    }

    /// Enable verbose logging of every fixup step. Records are emitted
    /// via the `log` facade with target `llrb_tree::fixup`, at trace level.
    pub fn set_trace(&mut self, trace: bool) -> &mut Self {
        self.trace = trace;
        self
    }

    #[inline]
    pub fn split(&self) -> Split {
        self.split
    }

    #[inline]
    pub fn trace(&self) -> bool {
        self.trace
    }
}
