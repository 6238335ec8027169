use crate::prelude::*;
use crate::config::{Value, NodeIndex, INITIAL_CAPACITY};

// Asserts that a node slot is live when debug_assertions are enabled
macro_rules! debug_assert_index {
    ($self:ident, $index:expr) => {
        #[cfg(debug_assertions)]
        if $index as usize >= $self.nodes.len() {
            panic!("SEQUENCE: invalid node index {}", $index);
        }
        #[cfg(debug_assertions)]
        if !$self.nodes[$index as usize].live {
            panic!("SEQUENCE: operation on previously freed node {}", $index);
        }
    }
}

/// The allocation of a new node slot failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocError;

/// A single element of the sequence.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    /// Integer stored in the node.
    pub value   : Value,
    /// Predecessor (towards the head).
    prev        : Option<NodeIndex>,
    /// Successor (towards the tail).
    next        : Option<NodeIndex>,
    /// Cleared while the slot is on the free list.
    live        : bool,
}

impl Node {
    fn new(value: Value) -> Self {
        Self { value, prev: None, next: None, live: true }
    }
}

/// Doubly linked sequence of integers, usable as stack or queue. Nodes live in an arena and are
/// addressed by index. Freed slots are kept on a free list and reused by later allocations.
#[derive(Debug)]
pub struct Sequence {
    nodes   : Vec<Node>,
    free    : Vec<NodeIndex>,
    head    : Option<NodeIndex>,
    tail    : Option<NodeIndex>,
    len     : usize,
}

impl Sequence {
    /// Creates a new, empty sequence.
    pub fn new() -> Self {
        Self {
            nodes   : Vec::with_capacity(INITIAL_CAPACITY),
            free    : Vec::with_capacity(16),
            head    : None,
            tail    : None,
            len     : 0,
        }
    }
    /// Number of nodes in the sequence.
    pub fn len(self: &Self) -> usize {
        self.len
    }
    /// Whether the sequence holds no nodes.
    pub fn is_empty(self: &Self) -> bool {
        self.head.is_none()
    }
    /// Value of the head node.
    pub fn front(self: &Self) -> Option<Value> {
        self.head.map(|index| self.node(index).value)
    }
    /// Value of the node following the head.
    pub fn second(self: &Self) -> Option<Value> {
        self.head.and_then(|index| self.node(index).next).map(|index| self.node(index).value)
    }
    /// Value of the tail node.
    pub fn back(self: &Self) -> Option<Value> {
        self.tail.map(|index| self.node(index).value)
    }
    /// Returns an iterator over the values from head to tail.
    pub fn iter(self: &Self) -> SequenceIter<'_> {
        SequenceIter { sequence: self, current: self.head }
    }
    /// Allocates a detached node and returns its index.
    fn allocate(self: &mut Self, value: Value) -> Result<NodeIndex, AllocError> {
        if let Some(index) = self.free.pop() {
            self.nodes[index as usize] = Node::new(value);
            Ok(index)
        } else {
            let index = NodeIndex::try_from(self.nodes.len()).map_err(|_| AllocError)?;
            self.nodes.try_reserve(1).map_err(|_| AllocError)?;
            self.nodes.push(Node::new(value));
            Ok(index)
        }
    }
    /// Inserts a value as the new head.
    pub fn push_front(self: &mut Self, value: Value) -> Result<(), AllocError> {
        let index = self.allocate(value)?;
        match self.head {
            Some(head) => {
                self.node_mut(index).next = Some(head);
                self.node_mut(head).prev = Some(index);
            }
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.len += 1;
        Ok(())
    }
    /// Appends a value after the tail.
    pub fn push_back(self: &mut Self, value: Value) -> Result<(), AllocError> {
        let index = self.allocate(value)?;
        match self.tail {
            Some(tail) => {
                self.node_mut(index).prev = Some(tail);
                self.node_mut(tail).next = Some(index);
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
        Ok(())
    }
    /// Removes the head node and returns its value.
    pub fn pop_front(self: &mut Self) -> Option<Value> {
        let head = self.head?;
        let value = self.node(head).value;
        self.excise(head);
        self.release(head);
        Some(value)
    }
    /// Replaces the first two nodes with a single node holding `op(second, head)`. The result is
    /// stored in the former second node, the former head is freed. Returns false without modifying
    /// the sequence if it holds fewer than two nodes.
    pub fn combine_front(self: &mut Self, op: impl FnOnce(Value, Value) -> Value) -> bool {
        let (head, second) = match self.front_pair() {
            Some(pair) => pair,
            None => return false,
        };
        let result = op(self.node(second).value, self.node(head).value);
        self.excise(head);
        self.release(head);
        self.node_mut(second).value = result;
        true
    }
    /// Exchanges the positions of the first two nodes. Returns false if there are fewer than two.
    pub fn swap_front(self: &mut Self) -> bool {
        let (head, second) = match self.front_pair() {
            Some(pair) => pair,
            None => return false,
        };
        self.excise(head);
        self.link_after(second, head);
        true
    }
    /// Moves the head node to the tail. No-op on fewer than two nodes.
    pub fn rotate_left(self: &mut Self) {
        if let (Some((head, _)), Some(tail)) = (self.front_pair(), self.tail) {
            self.excise(head);
            self.link_after(tail, head);
        }
    }
    /// Moves the tail node to the head. No-op on fewer than two nodes.
    pub fn rotate_right(self: &mut Self) {
        if self.len < 2 {
            return;
        }
        if let Some(tail) = self.tail {
            self.excise(tail);
            self.link_front(tail);
        }
    }
    /// Frees every node and resets the sequence to empty. Safe to call repeatedly.
    pub fn release_all(self: &mut Self) -> usize {
        let released = self.len;
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        released
    }
    /// Walks the links from head to tail and verifies that they are acyclic, mirrored and
    /// terminated, and that the walk agrees with the tracked length and tail.
    pub fn is_consistent(self: &Self) -> bool {
        let mut prev = None;
        let mut current = self.head;
        let mut count = 0;
        while let Some(index) = current {
            if index as usize >= self.nodes.len() || count >= self.len || !self.nodes[index as usize].live {
                return false;
            }
            let node = self.node(index);
            if node.prev != prev {
                return false;
            }
            prev = current;
            current = node.next;
            count += 1;
        }
        count == self.len && prev == self.tail
    }
    /// Indices of the head and its successor, if both exist.
    fn front_pair(self: &Self) -> Option<(NodeIndex, NodeIndex)> {
        let head = self.head?;
        let second = self.node(head).next?;
        Some((head, second))
    }
    /// Unlinks a node from its neighbours, leaving the node detached.
    fn excise(self: &mut Self, index: NodeIndex) {
        let Node { prev, next, .. } = *self.node(index);
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        let node = self.node_mut(index);
        node.prev = None;
        node.next = None;
        self.len -= 1;
    }
    /// Links a detached node directly after `anchor`.
    fn link_after(self: &mut Self, anchor: NodeIndex, index: NodeIndex) {
        let next = self.node(anchor).next;
        {
            let node = self.node_mut(index);
            node.prev = Some(anchor);
            node.next = next;
        }
        self.node_mut(anchor).next = Some(index);
        match next {
            Some(next) => self.node_mut(next).prev = Some(index),
            None => self.tail = Some(index),
        }
        self.len += 1;
    }
    /// Links a detached node as the new head.
    fn link_front(self: &mut Self, index: NodeIndex) {
        let head = self.head;
        self.node_mut(index).next = head;
        match head {
            Some(head) => self.node_mut(head).prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.len += 1;
    }
    /// Returns a detached node slot to the free list.
    fn release(self: &mut Self, index: NodeIndex) {
        debug_assert_index!(self, index);
        self.nodes[index as usize].live = false;
        self.free.push(index);
    }
    fn node(self: &Self, index: NodeIndex) -> &Node {
        debug_assert_index!(self, index);
        &self.nodes[index as usize]
    }
    fn node_mut(self: &mut Self, index: NodeIndex) -> &mut Node {
        debug_assert_index!(self, index);
        &mut self.nodes[index as usize]
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over sequence values from head to tail.
pub struct SequenceIter<'a> {
    sequence: &'a Sequence,
    current: Option<NodeIndex>,
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = Value;
    fn next(self: &mut Self) -> Option<Value> {
        let index = self.current?;
        let node = self.sequence.node(index);
        self.current = node.next;
        Some(node.value)
    }
}

impl Display for Sequence {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
