use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt, mem,
    ops::Deref,
};

use log::{debug, trace};
use rand::Rng;

use crate::config::{Config, Split};
use crate::depth::Depth;
use crate::error::Error;
use crate::node::{self, is_red, Node};
use crate::visitor::{Render, Visitor};

/// Llrb manage a single instance of in-memory index using
/// [left-leaning-red-black][llrb] tree.
///
/// Nodes are owned exclusively by their parent, the tree owns the root.
/// There are no parent pointers, queries that need the parent compute
/// it by walking down from the root.
///
/// [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree
#[derive(Clone)]
pub struct Llrb<K, V>
where
    K: Ord,
{
    name: String,
    config: Config,
    root: Option<Box<Node<K, V>>>,
}

/// Direction of the link taken from a parent node to reach its child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    /// No link was taken, the node is the root or the tree is empty.
    NoDir,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "LEFT"),
            Direction::Right => write!(f, "RIGHT"),
            Direction::NoDir => write!(f, "NODIR"),
        }
    }
}

/// Different ways to construct a new Llrb instance.
impl<K, V> Llrb<K, V>
where
    K: Ord,
{
    /// Create an empty instance of Llrb, identified by `name`, with
    /// default [`Config`]. Applications can choose unique names.
    pub fn new<S>(name: S) -> Llrb<K, V>
    where
        S: AsRef<str>,
    {
        Llrb::with_config(name, Config::default())
    }

    /// Create an empty instance of Llrb, identified by `name`.
    pub fn with_config<S>(name: S, config: Config) -> Llrb<K, V>
    where
        S: AsRef<str>,
    {
        Llrb {
            name: name.as_ref().to_string(),
            config,
            root: Default::default(),
        }
    }

    /// Create a new instance of Llrb tree and load it with entries
    /// from `iter`. When a key repeats, the later value wins.
    pub fn load_from<S, I>(name: S, iter: I) -> Llrb<K, V>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut llrb = Llrb::new(name);
        for (key, value) in iter {
            llrb.put(key, value);
        }
        debug!("{}: loaded {} entries", llrb.name, llrb.len());
        llrb
    }
}

/// Maintenance API.
impl<K, V> Llrb<K, V>
where
    K: Ord,
{
    /// Identify this instance. Applications can choose unique names while
    /// creating Llrb instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Switch verbose logging of fixup steps on or off for this instance.
    /// Tracing never affects tree shape or returned values.
    pub fn set_trace(&mut self, trace: bool) {
        self.config.set_trace(trace);
    }

    /// Return number of entries in this instance, in constant time.
    #[inline]
    pub fn len(&self) -> usize {
        node::size(self.root.as_ref().map(Deref::deref))
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Return the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_ref().map(Deref::deref)
    }

    /// Return quickly with basic statisics, only entries() and
    /// node_size() methods are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.len(), mem::size_of::<Node<K, V>>())
    }
}

/// Write operations on Llrb instance.
impl<K, V> Llrb<K, V>
where
    K: Ord,
{
    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value and return the old value.
    /// Overwrite leaves tree shape and colors untouched.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(old_value) = self.get_mut(&key) {
            return Some(mem::replace(old_value, value));
        }

        let fx = Fixup {
            name: &self.name,
            split: self.config.split(),
            trace: self.config.trace(),
        };
        let mut root = Llrb::insert(self.root.take(), key, value, &fx);
        root.set_black();
        self.root = Some(root);
        None
    }

    /// Rotate left the sub-tree rooted at `key` and re-link the new
    /// sub-tree root into its parent, or as the tree root. Return the new
    /// sub-tree root. Return None, leaving the tree untouched, if key is
    /// missing or its node has no right child.
    ///
    /// Rotations preserve sort order but can break color invariants,
    /// refer to [`Llrb::validate`].
    pub fn rotate_left<Q>(&mut self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Llrb::rotate_at(&mut self.root, key, Rotation::Left)
    }

    /// Mirror image of [`Llrb::rotate_left`].
    pub fn rotate_right<Q>(&mut self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Llrb::rotate_at(&mut self.root, key, Rotation::Right)
    }

    /// Return a mutable reference to the value for key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_deref_mut();
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => nref.right.as_deref_mut(),
                Ordering::Greater => nref.left.as_deref_mut(),
                Ordering::Equal => return Some(&mut nref.value),
            };
        }
        None
    }
}

/// Read operations on Llrb instance.
impl<K, V> Llrb<K, V>
where
    K: Ord,
{
    /// Get the value for key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root();
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => nref.right_deref(),
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => return Some(&nref.value),
            };
        }
        None
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Locate the parent of key. Return a tuple of
    /// (found, parent, direction from parent):
    ///
    /// * Empty tree, `(false, None, NoDir)`.
    /// * Key is at root, `(true, None, NoDir)`.
    /// * Key found elsewhere, `(true, Some(parent), direction)`.
    /// * Key missing, `(false, Some(last-node), direction)` where direction
    ///   is the one key would be inserted at.
    pub fn get_parent<Q>(&self, key: &Q) -> (bool, Option<&Node<K, V>>, Direction)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut parent, mut dir) = (None, Direction::NoDir);
        let mut node = self.root();
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => {
                    dir = Direction::Right;
                    nref.right_deref()
                }
                Ordering::Greater => {
                    dir = Direction::Left;
                    nref.left_deref()
                }
                Ordering::Equal => return (true, parent, dir),
            };
            parent = Some(nref);
        }
        (false, parent, dir)
    }

    /// Walk the tree in sort order, refer to [`Visitor`] for the sequence
    /// of callbacks. Can be called on an empty tree.
    pub fn walk<W>(&self, visitor: &mut W)
    where
        W: Visitor<K, V> + ?Sized,
    {
        Llrb::walk_tree(self.root(), visitor)
    }

    /// Return an iterator over all entries in sort order.
    pub fn iter(&self) -> Iter<K, V> {
        let mut iter = Iter {
            stack: vec![],
            remaining: self.len(),
        };
        iter.push_left(self.root());
        iter
    }

    /// Return the entry at zero based `rank` in sort order.
    pub fn nth(&self, mut rank: usize) -> Option<(&K, &V)> {
        let mut node = self.root();
        while let Some(nref) = node {
            let lsize = node::size(nref.left_deref());
            node = match rank.cmp(&lsize) {
                Ordering::Less => nref.left_deref(),
                Ordering::Equal => return Some((&nref.key, &nref.value)),
                Ordering::Greater => {
                    rank -= lsize + 1;
                    nref.right_deref()
                }
            };
        }
        None
    }

    /// Return the zero based position of key in sort order.
    pub fn rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut rank = 0;
        let mut node = self.root();
        while let Some(nref) = node {
            let lsize = node::size(nref.left_deref());
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => {
                    rank += lsize + 1;
                    nref.right_deref()
                }
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => return Some(rank + lsize),
            };
        }
        None
    }

    /// Return a random entry from this index, every entry being equally
    /// likely.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<(&K, &V)> {
        match self.len() {
            0 => None,
            n => self.nth(rng.gen_range(0..n)),
        }
    }

    /// Validate LLRB tree with following rules:
    ///
    /// * Root node is black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * With [`Split::BottomUp`], no red link leans right.
    /// * Cached sub-tree size matches the actual node count.
    /// * Make sure keys are in sorted order.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Error<K>>
    where
        K: Clone,
    {
        let root = self.root();
        if is_red(root) {
            return Err(Error::RedRoot);
        }

        let mut depths = Depth::new();
        let split = self.config.split();
        let blacks = Llrb::validate_tree(root, false, 0, 0, split, &mut depths)?;

        let mut prev: Option<&K> = None;
        for (key, _) in self.iter() {
            match prev {
                Some(pkey) if pkey >= key => {
                    return Err(Error::SortError(key.clone(), pkey.clone()));
                }
                _ => prev = Some(key),
            }
        }

        let mut stats = self.stats();
        stats.set_blacks(blacks);
        stats.set_depths(depths);
        Ok(stats)
    }
}

impl<K, V> Llrb<K, V>
where
    K: Ord,
{
    fn insert(node: Option<Box<Node<K, V>>>, key: K, value: V, fx: &Fixup) -> Box<Node<K, V>> {
        let mut node = match node {
            None => return Node::new(key, value),
            Some(node) => node,
        };

        if fx.split == Split::TopDown && Llrb::is_four(&node) {
            fx.log("flip-down", &node);
            node::flip(&mut *node);
        }

        match node.key.cmp(&key) {
            Ordering::Greater => {
                let left = Llrb::insert(node.left.take(), key, value, fx);
                node.left = Some(left);
            }
            Ordering::Less => {
                let right = Llrb::insert(node.right.take(), key, value, fx);
                node.right = Some(right);
            }
            Ordering::Equal => {
                node.set_value(value);
            }
        }
        Llrb::walkuprot(node, fx)
    }

    // fixup on the way back up, order of the steps is significant.
    fn walkuprot(mut node: Box<Node<K, V>>, fx: &Fixup) -> Box<Node<K, V>> {
        if is_red(node.right_deref()) && !is_red(node.left_deref()) {
            fx.log("rotate-left", &node);
            node = node::rotate_left(node);
        }
        let left = node.left_deref();
        if is_red(left) && is_red(left.and_then(Node::left_deref)) {
            fx.log("rotate-right", &node);
            node = node::rotate_right(node);
        }
        if fx.split == Split::BottomUp && Llrb::is_four(&node) {
            fx.log("flip-up", &node);
            node::flip(&mut *node);
        }
        node.resize();
        node
    }

    #[inline]
    fn is_four(node: &Node<K, V>) -> bool {
        is_red(node.left_deref()) && is_red(node.right_deref())
    }

    fn rotate_at<'a, Q>(
        slot: &'a mut Option<Box<Node<K, V>>>,
        key: &Q,
        rot: Rotation,
    ) -> Option<&'a Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let cmp = match slot.as_ref() {
            None => return None,
            Some(node) => node.key.borrow().cmp(key),
        };
        match cmp {
            Ordering::Less => slot
                .as_mut()
                .and_then(|node| Llrb::rotate_at(&mut node.right, key, rot)),
            Ordering::Greater => slot
                .as_mut()
                .and_then(|node| Llrb::rotate_at(&mut node.left, key, rot)),
            Ordering::Equal => {
                let node = slot.take()?;
                let (ok, node) = match rot {
                    Rotation::Left => (node.right.is_some(), node::rotate_left(node)),
                    Rotation::Right => (node.left.is_some(), node::rotate_right(node)),
                };
                *slot = Some(node);
                match ok {
                    true => slot.as_deref(),
                    false => None,
                }
            }
        }
    }

    fn walk_tree<W>(node: Option<&Node<K, V>>, visitor: &mut W)
    where
        W: Visitor<K, V> + ?Sized,
    {
        match node {
            None => visitor.absent(),
            Some(node) => {
                visitor.enter();
                Llrb::walk_tree(node.left_deref(), visitor);
                visitor.visit(node);
                Llrb::walk_tree(node.right_deref(), visitor);
                visitor.leave();
            }
        }
    }

    fn validate_tree(
        node: Option<&Node<K, V>>,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        split: Split,
        depths: &mut Depth,
    ) -> Result<usize, Error<K>> {
        let node = match node {
            None => {
                depths.sample(depth);
                return Ok(nb);
            }
            Some(node) => node,
        };

        let red = node.is_red();
        if fromred && red {
            return Err(Error::ConsecutiveReds);
        }
        if split == Split::BottomUp && is_red(node.right_deref()) {
            return Err(Error::RightLeaningRed);
        }
        if !red {
            nb += 1;
        }
        let (left, right) = (node.left_deref(), node.right_deref());
        let lblacks = Llrb::validate_tree(left, red, nb, depth + 1, split, depths)?;
        let rblacks = Llrb::validate_tree(right, red, nb, depth + 1, split, depths)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(Error::UnbalancedBlacks(err));
        }
        let size = 1 + node::size(left) + node::size(right);
        if node.size != size {
            let err = format!("cached: {} actual: {}", node.size, size);
            return Err(Error::SizeMismatch(err));
        }
        Ok(lblacks)
    }
}

impl<K, V> fmt::Display for Llrb<K, V>
where
    K: Ord + fmt::Display,
{
    /// Render tree shape, refer to [`Render`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut render = Render::new();
        self.walk(&mut render);
        write!(f, "{}", render)
    }
}

impl<'a, K, V> IntoIterator for &'a Llrb<K, V>
where
    K: Ord,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

#[derive(Clone, Copy)]
enum Rotation {
    Left,
    Right,
}

// context for a single insert, carried down the recursion.
struct Fixup<'a> {
    name: &'a str,
    split: Split,
    trace: bool,
}

impl<'a> Fixup<'a> {
    fn log<K, V>(&self, step: &str, node: &Node<K, V>) {
        if self.trace {
            trace!(
                target: "llrb_tree::fixup",
                "{}: {} at subtree of size {}",
                self.name,
                step,
                node.size()
            );
        }
    }
}

/// Iterator over entries of [`Llrb`] in sort order.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(nref) = node {
            self.stack.push(nref);
            node = nref.left_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// Statistics on [`Llrb`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Llrb::stats`] method.
/// * To get full statisics via [`Llrb::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`Llrb`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `Llrb<k,V>`. Although
    /// the node overhead is constant, the node size varies based on
    /// key and value types.
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        match &self.depths {
            Some(depths) if depths.samples() > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}
