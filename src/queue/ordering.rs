/*!
 * Queue Ordering Traits
 * Comparator and identity seams for the ordered queue
 */

use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Arc;

/// Decides where an offered item sits relative to an existing entry
///
/// `Less` or `Equal` places `item` before `existing`, `Greater` moves it further back.
pub trait Comparator<T> {
    fn compare(&self, item: &T, existing: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, item: &T, existing: &T) -> Ordering {
        self(item, existing)
    }
}

/// Object identity, independent of any ordering key
pub trait Identity {
    fn is_same(&self, other: &Self) -> bool;
}

impl<U: ?Sized> Identity for Arc<U> {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<U: ?Sized> Identity for Rc<U> {
    #[inline]
    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}
