/*!
# Node Representation

We choose `Node = u32` as almost all use-cases often involve less than `2^32` nodes.
This allows as to (1) save space by not using `usize` or `u64` and (2) allows directly manipulating node values without abstracting over them.
*/

use std::fmt::Debug;

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes.
///
/// Setters and clearers return the *previous* value of the bit, so `set_bit` doubles as
/// an "already seen" test in traversals.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeBitSet(FixedBitSet);

impl NodeBitSet {
    /// Creates a bitset for nodes `0..n` with all bits cleared
    pub fn new(n: NumNodes) -> Self {
        Self(FixedBitSet::with_capacity(n as usize))
    }

    /// Creates a bitset for nodes `0..n` with exactly the given bits set
    pub fn new_with_bits_set<I>(n: NumNodes, bits: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut set = Self::new(n);
        set.set_bits(bits);
        set
    }

    /// Returns the number of nodes this bitset can hold
    pub fn number_of_bits(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Sets bit `u` and returns *true* if it was set before.
    /// ** Panics if `u >= n` **
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.0.put(u as usize)
    }

    /// Sets all given bits
    pub fn set_bits<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for u in bits {
            self.set_bit(u);
        }
    }

    /// Clears bit `u` and returns *true* if it was set before.
    /// ** Panics if `u >= n` **
    pub fn clear_bit(&mut self, u: Node) -> bool {
        let was_set = self.0.contains(u as usize);
        self.0.set(u as usize, false);
        was_set
    }

    /// Returns *true* if bit `u` is set
    pub fn get_bit(&self, u: Node) -> bool {
        debug_assert!(u < self.number_of_bits());
        self.0.contains(u as usize)
    }

    /// Returns the number of set bits
    pub fn cardinality(&self) -> NumNodes {
        self.0.count_ones(..) as NumNodes
    }

    /// Returns *true* if no bit is set
    pub fn are_all_unset(&self) -> bool {
        self.0.is_clear()
    }

    /// Clears all bits
    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    /// Iterates over all set bits in ascending order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.ones().map(|u| u as Node)
    }

    /// Iterates over all cleared bits in ascending order
    pub fn iter_cleared_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.zeroes().map(|u| u as Node)
    }
}

impl Debug for NodeBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter_set_bits()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn set_and_clear_report_previous_state() {
        let mut set = NodeBitSet::new(10);
        assert!(set.are_all_unset());

        assert!(!set.set_bit(3));
        assert!(set.set_bit(3));
        assert!(!set.set_bit(7));
        assert_eq!(set.cardinality(), 2);
        assert_eq!(set.iter_set_bits().collect_vec(), vec![3, 7]);

        assert!(set.clear_bit(3));
        assert!(!set.clear_bit(3));
        assert_eq!(set.iter_set_bits().collect_vec(), vec![7]);
        assert_eq!(set.iter_cleared_bits().count(), 9);

        set.clear_all();
        assert!(set.are_all_unset());
        assert_eq!(set.number_of_bits(), 10);
    }

    #[test]
    fn debug_lists_set_bits() {
        let set = NodeBitSet::new_with_bits_set(5, [4, 0]);
        assert_eq!(format!("{set:?}"), "{0, 4}");
    }
}
