// ============================================================================
// Tree: nesting whose depth varies from branch to branch
// ============================================================================

use std::fmt::Display;
use std::io::{self, Write};

use crate::container::{Container, Element, Shape};
use crate::order::SwapOrder;
use crate::print::{self, PrintStyle};
use crate::sort::{self, SortReport};

/// A value that is either a scalar leaf or a branch of further trees.
///
/// Statically nested containers always have the same depth everywhere; a
/// `Tree` carries the shape at runtime so siblings may differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree<T> {
    Leaf(T),
    Branch(Vec<Tree<T>>),
}

impl<T> Tree<T> {
    pub fn leaf(value: T) -> Self {
        Tree::Leaf(value)
    }

    pub fn branch<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Tree<T>>,
    {
        Tree::Branch(children.into_iter().collect())
    }

    /// A branch holding only leaves.
    pub fn row<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Tree::Branch(values.into_iter().map(Tree::Leaf).collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// Zero for a leaf, otherwise one more than the deepest child.
    pub fn depth(&self) -> usize {
        match self {
            Tree::Leaf(_) => 0,
            Tree::Branch(children) => 1 + children.iter().map(Tree::depth).max().unwrap_or(0),
        }
    }

    /// Leaf values in depth-first, left-to-right order.
    pub fn leaves(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a T>) {
        match self {
            Tree::Leaf(value) => out.push(value),
            Tree::Branch(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    pub fn sort_by<O>(&mut self, order: &O) -> SortReport
    where
        T: Display,
        O: SwapOrder<T> + ?Sized,
    {
        match self {
            Tree::Leaf(_) => SortReport::default(),
            Tree::Branch(children) => sort::recursive_sort(children, order),
        }
    }
}

/// Lifts a leaf order to tree nodes; anything involving a branch stays put.
struct LeafOrder<'a, O: ?Sized>(&'a O);

impl<T, O> SwapOrder<Tree<T>> for LeafOrder<'_, O>
where
    O: SwapOrder<T> + ?Sized,
{
    fn should_swap(&self, a: &Tree<T>, b: &Tree<T>) -> bool {
        match (a, b) {
            (Tree::Leaf(x), Tree::Leaf(y)) => self.0.should_swap(x, y),
            _ => false,
        }
    }
}

impl<T: Display> Element for Tree<T> {
    type Scalar = T;

    const SHAPE: Shape = Shape::Container;

    /// An all-leaf level is a leaf sequence. Any other level recurses into
    /// its branches and leaves its loose leaves where they are.
    fn sort_level<C, O>(level: &mut C, order: &O) -> SortReport
    where
        C: Container<Item = Self> + ?Sized,
        O: SwapOrder<Self::Scalar> + ?Sized,
    {
        if level.iter().all(Tree::is_leaf) {
            return sort::exchange_sort(level, &LeafOrder(order));
        }

        let mut report = SortReport::default();
        for node in level.iter_mut() {
            if let Tree::Branch(children) = node {
                report += Self::sort_level(children, order);
            }
        }
        report
    }

    fn write_level<C, W>(level: &C, out: &mut W, style: &PrintStyle) -> io::Result<()>
    where
        C: Container<Item = Self> + ?Sized,
        W: Write + ?Sized,
    {
        print::write_nested(level, out, 0, style)
    }

    fn write_node<W>(&self, out: &mut W, depth: usize, style: &PrintStyle) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        match self {
            Tree::Leaf(value) => print::write_scalar(value, out, depth, style),
            Tree::Branch(children) => print::write_nested(children, out, depth, style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Ascending, EvenFirst};
    use crate::print::render;

    fn sample() -> Tree<i32> {
        Tree::branch([
            Tree::row([3, 1, 2]),
            Tree::branch([Tree::row([9, 7]), Tree::row([6, 4, 5])]),
            Tree::leaf(8),
            Tree::row([]),
        ])
    }

    #[test]
    fn test_depth_is_per_branch() {
        let tree = sample();
        assert_eq!(tree.depth(), 3);
        assert_eq!(Tree::leaf(1).depth(), 0);
        assert_eq!(Tree::<i32>::row([]).depth(), 1);
    }

    #[test]
    fn test_irregular_tree_sorts_each_leaf_row() {
        let mut tree = sample();
        let report = tree.sort_by(&Ascending);

        let expected = Tree::branch([
            Tree::row([1, 2, 3]),
            Tree::branch([Tree::row([7, 9]), Tree::row([4, 5, 6])]),
            Tree::leaf(8),
            Tree::row([]),
        ]);
        assert_eq!(tree, expected);
        assert_eq!(report.sequences, 4);
    }

    #[test]
    fn test_loose_leaf_keeps_position() {
        let mut tree = Tree::branch([Tree::leaf(5), Tree::row([2, 1]), Tree::leaf(0)]);
        tree.sort_by(&Ascending);
        assert_eq!(
            tree.leaves().into_iter().copied().collect::<Vec<_>>(),
            vec![5, 1, 2, 0]
        );
    }

    #[test]
    fn test_leaf_only_top_level_vec() {
        let mut level = vec![Tree::leaf(4i64), Tree::leaf(3), Tree::leaf(2)];
        sort::recursive_sort(&mut level, &EvenFirst);
        assert_eq!(level, vec![Tree::leaf(2), Tree::leaf(4), Tree::leaf(3)]);
    }

    #[test]
    fn test_sorting_a_lone_leaf_is_noop() {
        let mut tree = Tree::leaf(1);
        assert_eq!(tree.sort_by(&Ascending), SortReport::default());
    }

    #[test]
    fn test_tree_prints_nested_at_every_depth() {
        let forest = vec![Tree::leaf(1u8), Tree::row([2, 3])];
        let out = render(&forest, &PrintStyle::default()).unwrap();
        assert_eq!(out, "{\n    1\n    {\n        2\n        3\n    }\n}\n");
    }
}
