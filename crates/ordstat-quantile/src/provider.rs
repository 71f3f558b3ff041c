//! Order-statistic provider
//!
//! Produces the element at a given rank index, either from a collection
//! sorted once up front or by selection on an unsorted buffer.
//!
//! # Ownership
//!
//! Input arrives as a [`Storage`]: an owned buffer the engine may reorder
//! freely, or a caller slice. The selection path reorders a caller slice in
//! place (its contents stay a permutation of the input). The sort path never
//! writes to a caller slice and sorts a private copy instead.

use crate::kernels::QuantileKernel;
use crate::ElementTier;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// How order statistics are obtained for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Sort once, then index
    Sort,
    /// Select each index without a full sort
    Select,
}

impl Strategy {
    /// Strategy for `fraction_count` fractions over elements of `tier`
    ///
    /// Several fractions amortize one sort. The polymorphic tier always sorts
    /// because its elements are only comparable through a derived key.
    pub fn choose(fraction_count: usize, tier: ElementTier) -> Self {
        if fraction_count > 1 || tier.requires_key_sort() {
            Strategy::Sort
        } else {
            Strategy::Select
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sort => f.write_str("sort"),
            Strategy::Select => f.write_str("select"),
        }
    }
}

/// Input collection together with its ownership contract
#[derive(Debug)]
pub enum Storage<'a, T> {
    /// Private buffer; the engine may reorder it
    Owned(Vec<T>),
    /// Caller storage; may be reordered by selection, never by sorting
    Borrowed(&'a mut [T]),
}

impl<'a, T> Storage<'a, T> {
    pub fn len(&self) -> usize {
        match self {
            Storage::Owned(items) => items.len(),
            Storage::Borrowed(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mutable view of the elements
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Storage::Owned(items) => items.as_mut_slice(),
            Storage::Borrowed(items) => items,
        }
    }

    /// A buffer the engine owns, copying caller storage if necessary
    pub fn into_owned(self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            Storage::Owned(items) => items,
            Storage::Borrowed(items) => items.to_vec(),
        }
    }
}

impl<T> From<Vec<T>> for Storage<'_, T> {
    fn from(items: Vec<T>) -> Self {
        Storage::Owned(items)
    }
}

impl<'a, T> From<&'a mut [T]> for Storage<'a, T> {
    fn from(items: &'a mut [T]) -> Self {
        Storage::Borrowed(items)
    }
}

impl<'a, T> From<&'a mut Vec<T>> for Storage<'a, T> {
    fn from(items: &'a mut Vec<T>) -> Self {
        Storage::Borrowed(items.as_mut_slice())
    }
}

enum View<'a, T: Clone> {
    Sorted(Cow<'a, [T]>),
    Selection(Storage<'a, T>),
}

/// Prepared data for one computation, bound to a kernel's order
pub struct ComputationContext<'a, K: QuantileKernel> {
    view: View<'a, K::Item>,
    _kernel: PhantomData<fn() -> K>,
}

impl<'a, K: QuantileKernel> ComputationContext<'a, K> {
    /// Prepare `storage` for `strategy`
    pub fn prepare(storage: Storage<'a, K::Item>, strategy: Strategy) -> Self {
        let view = match strategy {
            Strategy::Sort => {
                let mut items = storage.into_owned();
                K::sort(&mut items);
                View::Sorted(Cow::Owned(items))
            }
            Strategy::Select => View::Selection(storage),
        };
        Self {
            view,
            _kernel: PhantomData,
        }
    }

    /// Context over data the caller has already sorted
    pub fn presorted(sorted: &'a [K::Item]) -> Self {
        Self {
            view: View::Sorted(Cow::Borrowed(sorted)),
            _kernel: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        match &self.view {
            View::Sorted(items) => items.len(),
            View::Selection(storage) => storage.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `index`-th smallest element
    ///
    /// On the selection path each call partitions the buffer again, so a
    /// reference returned earlier may no longer point at the same value.
    pub fn element_at(&mut self, index: usize) -> &K::Item {
        match &mut self.view {
            View::Sorted(items) => &items[index],
            View::Selection(storage) => {
                let (_, nth, _) = storage
                    .as_mut_slice()
                    .select_nth_unstable_by(index, K::compare);
                nth
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::{FixedWidthKernel, OrderedKernel, PolymorphicKernel};
    use ordstat_core::Number;

    type F64 = FixedWidthKernel<f64>;

    #[test]
    fn test_strategy_choice() {
        assert_eq!(Strategy::choose(1, ElementTier::FixedWidthNumber), Strategy::Select);
        assert_eq!(Strategy::choose(3, ElementTier::FixedWidthNumber), Strategy::Sort);
        assert_eq!(Strategy::choose(1, ElementTier::PolymorphicNumber), Strategy::Sort);
        assert_eq!(Strategy::choose(1, ElementTier::GenericOrderedValue), Strategy::Select);
    }

    #[test]
    fn test_selection_matches_sorted_order() {
        let data = vec![9.0, -1.0, 4.0, 4.0, 0.5, 7.0, 3.0];
        let mut sorted = data.clone();
        sorted.sort_by(f64::total_cmp);

        let mut ctx = ComputationContext::<F64>::prepare(data.into(), Strategy::Select);
        for (index, expected) in sorted.iter().enumerate().rev() {
            assert_eq!(ctx.element_at(index), expected);
        }
    }

    #[test]
    fn test_sort_path_leaves_caller_storage_untouched() {
        let mut data = vec![3i32, 1, 2];
        let mut ctx =
            ComputationContext::<OrderedKernel<i32>>::prepare((&mut data).into(), Strategy::Sort);
        assert_eq!(*ctx.element_at(0), 1);
        assert_eq!(*ctx.element_at(2), 3);
        drop(ctx);
        assert_eq!(data, vec![3, 1, 2]);
    }

    #[test]
    fn test_selection_permutes_caller_storage() {
        let mut data = vec![5i32, 3, 8, 1, 9, 2];
        let mut ctx =
            ComputationContext::<OrderedKernel<i32>>::prepare((&mut data).into(), Strategy::Select);
        assert_eq!(*ctx.element_at(2), 3);
        drop(ctx);
        let mut permuted = data.clone();
        permuted.sort();
        assert_eq!(permuted, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_presorted_and_key_sort() {
        let sorted = [1.0, 2.0, 3.0];
        let mut ctx = ComputationContext::<F64>::presorted(&sorted);
        assert_eq!(ctx.len(), 3);
        assert_eq!(*ctx.element_at(1), 2.0);

        let mixed = vec![Number::F64(2.5), Number::I8(-1), Number::U32(2)];
        let mut ctx = ComputationContext::<PolymorphicKernel>::prepare(mixed.into(), Strategy::Sort);
        assert_eq!(ctx.element_at(0).to_f64(), -1.0);
        assert_eq!(ctx.element_at(1).to_f64(), 2.0);
        assert_eq!(ctx.element_at(2).to_f64(), 2.5);
    }

    #[test]
    fn test_storage_conversions() {
        let mut vec = vec![1u8, 2];
        let storage: Storage<'_, u8> = (&mut vec).into();
        assert!(matches!(storage, Storage::Borrowed(_)));
        assert_eq!(storage.len(), 2);

        let storage: Storage<'_, u8> = vec![7u8].into();
        assert!(!storage.is_empty());
        assert_eq!(storage.into_owned(), vec![7]);
    }
}
