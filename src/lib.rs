//! # Nested Sort
//!
//! Generic sorting and printing over flat and nested containers.
//!
//! ## Container classification
//! - [`Container`]: sized, forward-iterable sequences (`Vec`, `VecDeque`,
//!   `LinkedList`, arrays, slices)
//! - [`Element`]: decides at compile time whether a level holds scalars or
//!   further containers
//! - [`Tree`]: runtime nesting for branches of different depth
//!
//! ## Ordering strategies
//! - [`SwapOrder`]: "should these neighbours trade places?"
//! - Ready-made orders: [`Ascending`], [`Descending`], [`OddFirst`],
//!   [`EvenFirst`], [`DivisibleBy3First`], [`SumOfDigits`], [`ProximityTo`],
//!   [`AlphabeticalPosition`]
//! - Any `Fn(&T, &T) -> bool` closure
//! - [`Strategy`]: the integer orders as one configurable value
//!
//! ## Sorting and printing
//! - [`exchange_sort`]: bubble sort with early exit, forward traversal only
//! - [`recursive_sort`]: one order applied to every leaf sequence
//! - [`write_container`] / [`print_container`]: flat line for scalars,
//!   indented bracket blocks for nested data
//!
//! ```rust
//! use nested_sort::{recursive_sort, render, DivisibleBy3First, PrintStyle};
//!
//! let mut grid: Vec<Vec<i32>> = vec![vec![5, 2, 9], vec![6, 3, 8], vec![1, 7, 4]];
//! recursive_sort(&mut grid, &DivisibleBy3First);
//! assert_eq!(grid[0], vec![9, 2, 5]);
//!
//! let mut row: Vec<i32> = vec![5, 2, 9, 1, 5, 6];
//! recursive_sort(&mut row, &|a: &i32, b: &i32| a > b);
//! assert_eq!(render(&row, &PrintStyle::default())?, "1 2 5 5 6 9\n");
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod config;
pub mod container;
pub mod error;
pub mod order;
pub mod print;
pub mod sort;
pub mod tree;

pub use config::DemoConfig;
pub use container::{is_container, shape_of, Container, Element, Shape};
pub use error::{ConfigError, StrategyError};
pub use order::{
    AlphabeticalPosition, Ascending, Descending, DivisibleBy3First, EvenFirst, OddFirst,
    ProximityTo, Strategy, SumOfDigits, SwapOrder,
};
pub use print::{
    print_container, print_container_with, render, write_container, write_flat, write_nested,
    PrintStyle,
};
pub use sort::{exchange_sort, recursive_sort, SortReport};
pub use tree::Tree;
