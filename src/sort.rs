// ============================================================================
// Exchange sort and recursive descent sort
// ============================================================================

use std::mem;
use std::ops::{Add, AddAssign};

use tracing::{debug, trace};

use crate::container::{Container, Element};
use crate::order::SwapOrder;

/// What a sort call actually did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortReport {
    /// Leaf sequences visited.
    pub sequences: usize,
    pub passes: usize,
    pub exchanges: usize,
}

impl SortReport {
    pub fn is_noop(&self) -> bool {
        self.exchanges == 0
    }
}

impl Add for SortReport {
    type Output = SortReport;

    fn add(self, rhs: SortReport) -> SortReport {
        SortReport {
            sequences: self.sequences + rhs.sequences,
            passes: self.passes + rhs.passes,
            exchanges: self.exchanges + rhs.exchanges,
        }
    }
}

impl AddAssign for SortReport {
    fn add_assign(&mut self, rhs: SortReport) {
        *self = *self + rhs;
    }
}

/// Bubble sort over forward-only mutable iteration.
///
/// Each pass walks adjacent pairs and exchanges those the order flags; pass
/// `k` stops `k` slots short of the end since the tail is already settled.
/// A pass without exchanges ends the sort, so ordered input costs one pass.
pub fn exchange_sort<C, O>(seq: &mut C, order: &O) -> SortReport
where
    C: Container + ?Sized,
    O: SwapOrder<C::Item> + ?Sized,
{
    let len = seq.len();
    let mut report = SortReport {
        sequences: 1,
        ..SortReport::default()
    };
    if len < 2 {
        return report;
    }

    for pass in 0..len - 1 {
        report.passes += 1;
        let mut swapped = false;

        let mut slots = seq.iter_mut().take(len - pass);
        let Some(mut prev) = slots.next() else {
            break;
        };
        for next in slots {
            if order.should_swap(prev, next) {
                mem::swap(prev, next);
                report.exchanges += 1;
                swapped = true;
            }
            prev = next;
        }

        if !swapped {
            break;
        }
    }

    trace!(len, passes = report.passes, exchanges = report.exchanges, "exchange sort finished");
    report
}

/// Sort every leaf sequence of a possibly nested container with one order.
///
/// Levels of sub-containers are recursed into depth-first, left to right;
/// only the innermost scalar sequences are reordered.
pub fn recursive_sort<C, O>(container: &mut C, order: &O) -> SortReport
where
    C: Container + ?Sized,
    C::Item: Element,
    O: SwapOrder<<C::Item as Element>::Scalar> + ?Sized,
{
    let report = <C::Item as Element>::sort_level(container, order);
    debug!(
        sequences = report.sequences,
        passes = report.passes,
        exchanges = report.exchanges,
        "recursive sort finished"
    );
    report
}
