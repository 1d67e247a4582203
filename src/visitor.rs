use std::fmt;

use crate::node::Node;

/// Visitor observes an [`Llrb`] tree during an in-order [`Llrb::walk`].
///
/// For every present node the walk calls `enter`, walks the left
/// sub-tree, calls `visit` with the node, walks the right sub-tree and
/// finally calls `leave`. Every absent child position, and the root
/// position of an empty tree, is reported via `absent`. Only `visit` is
/// mandatory, structural callbacks default to no-op.
///
/// Any closure `FnMut(&Node<K, V>)` is a visitor.
///
/// [`Llrb`]: crate::Llrb
/// [`Llrb::walk`]: crate::Llrb::walk
pub trait Visitor<K, V> {
    fn visit(&mut self, node: &Node<K, V>);

    fn enter(&mut self) {}

    fn leave(&mut self) {}

    fn absent(&mut self) {}
}

impl<K, V, F> Visitor<K, V> for F
where
    F: FnMut(&Node<K, V>),
{
    fn visit(&mut self, node: &Node<K, V>) {
        self(node)
    }
}

/// Render tree shape in sort order, an absent node renders as `.` and a
/// present node renders as `(<left>key<right>)`. For example:
///
/// ```
/// use llrb_tree::{Llrb, Render};
///
/// let mut llrb: Llrb<i64, &str> = Llrb::new("render");
/// llrb.put(7, "payload7");
/// llrb.put(3, "payload3");
/// llrb.put(8, "payload8");
///
/// let mut render = Render::new();
/// llrb.walk(&mut render);
/// assert_eq!(render.as_str(), "((.3.)7(.8.))");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Render {
    out: String,
}

impl Render {
    pub fn new() -> Render {
        Default::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl<K, V> Visitor<K, V> for Render
where
    K: fmt::Display,
{
    fn visit(&mut self, node: &Node<K, V>) {
        self.out.push_str(&node.key().to_string());
    }

    fn enter(&mut self) {
        self.out.push('(');
    }

    fn leave(&mut self) {
        self.out.push(')');
    }

    fn absent(&mut self) {
        self.out.push('.');
    }
}

impl fmt::Display for Render {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.out)
    }
}
