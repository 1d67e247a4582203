use std::ops::Deref;

/// Node corresponds to a single entry in Llrb instance. Nodes are owned
/// by their parent, or by the tree for the root, and carry no back
/// reference to the parent.
#[derive(Clone)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) black: bool,                    // store: black or red
    pub(crate) size: usize,                    // nodes in this sub-tree
    pub(crate) left: Option<Box<Node<K, V>>>,  // store: left child
    pub(crate) right: Option<Box<Node<K, V>>>, // store: right child
}

/// Read API on a single node.
impl<K, V> Node<K, V> {
    /// Return the key of this entry.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Return the value of this entry.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn left(&self) -> Option<&Node<K, V>> {
        self.left_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&Node<K, V>> {
        self.right_deref()
    }

    /// Return number of nodes in the sub-tree rooted at this node,
    /// including itself.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.black
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        !self.black
    }
}

impl<K, V> Node<K, V> {
    // CREATE operation, new nodes are always red.
    pub(crate) fn new(key: K, value: V) -> Box<Node<K, V>> {
        Box::new(Node {
            key,
            value,
            black: false,
            size: 1,
            left: None,
            right: None,
        })
    }

    #[inline]
    pub(crate) fn left_deref(&self) -> Option<&Node<K, V>> {
        self.left.as_ref().map(Deref::deref)
    }

    #[inline]
    pub(crate) fn right_deref(&self) -> Option<&Node<K, V>> {
        self.right.as_ref().map(Deref::deref)
    }

    #[inline]
    pub(crate) fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub(crate) fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    pub(crate) fn set_black(&mut self) {
        self.black = true
    }

    // recompute size from children, children are expected to be current.
    #[inline]
    pub(crate) fn resize(&mut self) {
        self.size = 1 + size(self.left_deref()) + size(self.right_deref());
    }
}

/// Return whether `node` is red. An absent node is black.
pub fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(false, |node| !node.is_black())
}

/// Return whether `node` is black. An absent node is black.
pub fn is_black<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(true, |node| node.is_black())
}

#[inline]
pub(crate) fn size<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |node| node.size)
}

//              (i)                       (i)
//               |                         |
//              node                       x
//              /  \                      / \
//             /    (r)                 (r)  \
//            /       \                 /     \
//          left       x             node      xr
//                    / \            /  \
//                  xl   xr       left   xl
//
// No-op when node has no right child. Caller re-links the returned node.
pub(crate) fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = match node.right.take() {
        Some(x) => x,
        None => return node,
    };
    node.right = x.left.take();
    x.black = node.black;
    node.set_red();
    x.size = node.size;
    node.resize();
    x.left = Some(node);
    x
}

//              (i)                       (i)
//               |                         |
//              node                       x
//              /  \                      / \
//            (r)   \                   (r)  \
//           /       \                 /      \
//          x       right             xl      node
//         / \                                / \
//       xl   xr                             xr  right
//
// No-op when node has no left child. Caller re-links the returned node.
pub(crate) fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut x = match node.left.take() {
        Some(x) => x,
        None => return node,
    };
    node.left = x.right.take();
    x.black = node.black;
    node.set_red();
    x.size = node.size;
    node.resize();
    x.right = Some(node);
    x
}

//        (b)                   (r)
//         |                     |
//        node                  node
//        / \                   / \
//      (r) (r)               (b) (b)
//     /      \              /      \
//   left    right         left    right
//
// Only called when both children are present and red.
pub(crate) fn flip<K, V>(node: &mut Node<K, V>) {
    if let Some(left) = node.left.as_mut() {
        left.set_black();
    }
    if let Some(right) = node.right.as_mut() {
        right.set_black();
    }
    node.set_red();
}
