// ============================================================================
// Container classifier: compile-time split between containers and scalars
// ============================================================================

use std::collections::{linked_list, vec_deque, LinkedList, VecDeque};
use std::io::{self, Write};
use std::slice;

use crate::order::SwapOrder;
use crate::print::{self, PrintStyle};
use crate::sort::{self, SortReport};

/// The two mutually exclusive shapes a value can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Container,
}

/// A finite, sized, homogeneous sequence with forward iteration.
///
/// Only forward traversal is required, so `LinkedList` qualifies alongside
/// `Vec` and arrays.
pub trait Container {
    type Item;

    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    type IterMut<'a>: Iterator<Item = &'a mut Self::Item>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn iter(&self) -> Self::Iter<'_>;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Anything that may sit inside a [`Container`].
///
/// The impl chosen for the element type decides, with no runtime check,
/// whether the level holding it is a leaf sequence (sorted directly) or a
/// level of sub-containers (recursed into).
pub trait Element: Sized {
    /// The leaf type every comparator at this nesting level works on.
    type Scalar;

    const SHAPE: Shape;

    /// Sort a level whose items are `Self`.
    fn sort_level<C, O>(level: &mut C, order: &O) -> SortReport
    where
        C: Container<Item = Self> + ?Sized,
        O: SwapOrder<Self::Scalar> + ?Sized;

    /// Print a top-level container whose items are `Self`.
    fn write_level<C, W>(level: &C, out: &mut W, style: &PrintStyle) -> io::Result<()>
    where
        C: Container<Item = Self> + ?Sized,
        W: Write + ?Sized;

    /// Print this single value at the given nesting depth.
    fn write_node<W>(&self, out: &mut W, depth: usize, style: &PrintStyle) -> io::Result<()>
    where
        W: Write + ?Sized;
}

pub fn shape_of<T: Element>() -> Shape {
    T::SHAPE
}

pub fn is_container<T: Element>() -> bool {
    matches!(T::SHAPE, Shape::Container)
}

// ============================================================================
// Container impls
// ============================================================================

impl<T> Container for Vec<T> {
    type Item = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;
    type IterMut<'a> = slice::IterMut<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Container for [T] {
    type Item = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;
    type IterMut<'a> = slice::IterMut<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        <[T]>::iter_mut(self)
    }
}

impl<T, const N: usize> Container for [T; N] {
    type Item = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;
    type IterMut<'a> = slice::IterMut<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        N
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Container for VecDeque<T> {
    type Item = T;
    type Iter<'a> = vec_deque::Iter<'a, T> where Self: 'a;
    type IterMut<'a> = vec_deque::IterMut<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        VecDeque::iter_mut(self)
    }
}

impl<T> Container for LinkedList<T> {
    type Item = T;
    type Iter<'a> = linked_list::Iter<'a, T> where Self: 'a;
    type IterMut<'a> = linked_list::IterMut<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        LinkedList::iter_mut(self)
    }
}

// ============================================================================
// Scalar elements
// ============================================================================

macro_rules! impl_scalar_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                type Scalar = $ty;

                const SHAPE: Shape = Shape::Scalar;

                fn sort_level<C, O>(level: &mut C, order: &O) -> SortReport
                where
                    C: Container<Item = Self> + ?Sized,
                    O: SwapOrder<Self::Scalar> + ?Sized,
                {
                    sort::exchange_sort(level, order)
                }

                fn write_level<C, W>(level: &C, out: &mut W, style: &PrintStyle) -> io::Result<()>
                where
                    C: Container<Item = Self> + ?Sized,
                    W: Write + ?Sized,
                {
                    print::write_flat(level, out, style)
                }

                fn write_node<W>(&self, out: &mut W, depth: usize, style: &PrintStyle) -> io::Result<()>
                where
                    W: Write + ?Sized,
                {
                    print::write_scalar(self, out, depth, style)
                }
            }
        )*
    };
}

impl_scalar_element!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, bool, String,
);

impl<'s> Element for &'s str {
    type Scalar = &'s str;

    const SHAPE: Shape = Shape::Scalar;

    fn sort_level<C, O>(level: &mut C, order: &O) -> SortReport
    where
        C: Container<Item = Self> + ?Sized,
        O: SwapOrder<Self::Scalar> + ?Sized,
    {
        sort::exchange_sort(level, order)
    }

    fn write_level<C, W>(level: &C, out: &mut W, style: &PrintStyle) -> io::Result<()>
    where
        C: Container<Item = Self> + ?Sized,
        W: Write + ?Sized,
    {
        print::write_flat(level, out, style)
    }

    fn write_node<W>(&self, out: &mut W, depth: usize, style: &PrintStyle) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        print::write_scalar(self, out, depth, style)
    }
}

// ============================================================================
// Container elements: recurse one level down
// ============================================================================

macro_rules! impl_container_element {
    ($($outer:ident),* $(,)?) => {
        $(
            impl<T: Element> Element for $outer<T> {
                type Scalar = T::Scalar;

                const SHAPE: Shape = Shape::Container;

                fn sort_level<C, O>(level: &mut C, order: &O) -> SortReport
                where
                    C: Container<Item = Self> + ?Sized,
                    O: SwapOrder<Self::Scalar> + ?Sized,
                {
                    let mut report = SortReport::default();
                    for child in level.iter_mut() {
                        report += T::sort_level(child, order);
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
                    print::write_nested(self, out, depth, style)
                }
            }
        )*
    };
}

impl_container_element!(Vec, VecDeque, LinkedList);

impl<T: Element, const N: usize> Element for [T; N] {
    type Scalar = T::Scalar;

    const SHAPE: Shape = Shape::Container;

    fn sort_level<C, O>(level: &mut C, order: &O) -> SortReport
    where
        C: Container<Item = Self> + ?Sized,
        O: SwapOrder<Self::Scalar> + ?Sized,
    {
        let mut report = SortReport::default();
        for child in level.iter_mut() {
            report += T::sort_level(child, order);
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
        print::write_nested(self, out, depth, style)
    }
}
