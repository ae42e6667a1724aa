use crate::comparator::ordering;
use crate::error::CreateError;
use crate::heap::{sift_down, sift_up};
use crate::options::TopKOptions;
use std::fmt::Debug;

/// Keeps the `k` largest elements of a stream under the ordering `less`.
///
/// Elements are held in a binary min-heap of at most `k` entries, so the
/// smallest retained element is always at hand for eviction. Memory is
/// `O(k)` and [`insert`](Self::insert) is `O(log k)`.
///
/// The container is *filling* while `len() < k` and every insert is
/// accepted. Once `len() == k` it is *saturated* for good: an incoming
/// element replaces the minimum only if it is strictly greater, so on a
/// tie the retained element stays and the incoming one is dropped.
///
/// `less` must be a strict weak ordering. If it panics, the panic
/// propagates; every element is still owned by the container afterwards
/// but their ranking is unspecified.
#[derive(Clone)]
pub struct TopK<T, F> {
    k: usize,
    heap: Vec<T>,
    less: F,
}

impl<T, F> TopK<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(k: usize, less: F) -> Result<Self, CreateError> {
        if k == 0 {
            log::debug!("refused to create a top-k with zero capacity");
            return Err(CreateError::InvalidCapacity);
        }
        let mut heap = Vec::new();
        if let Err(e) = heap.try_reserve_exact(k) {
            log::debug!("refused to create a top-k with capacity {k}: {e}");
            return Err(CreateError::InvalidCapacity);
        }
        Ok(Self { k, heap, less })
    }

    pub fn with_options(options: &TopKOptions, less: F) -> Result<Self, CreateError> {
        options.check()?;
        Self::new(options.k as usize, less)
    }

    /// Returns whether `insert(x)` would retain `x`.
    pub fn check(&self, x: &T) -> bool {
        self.heap.len() < self.k || (self.less)(&self.heap[0], x)
    }

    /// Offers `x` to the container.
    ///
    /// Returns the element that is not retained afterwards: `None` while
    /// filling, the evicted minimum when `x` replaces it, or `x` itself
    /// when it is rejected.
    pub fn insert(&mut self, x: T) -> Option<T> {
        if self.heap.len() < self.k {
            self.heap.push(x);
            let last = self.heap.len() - 1;
            sift_up(&mut self.heap, last, &self.less);
            if self.heap.len() == self.k {
                log::trace!("top-k saturated at capacity {}", self.k);
            }
            None
        } else if (self.less)(&self.heap[0], &x) {
            let evicted = std::mem::replace(&mut self.heap[0], x);
            sift_down(&mut self.heap, 0, &self.less);
            Some(evicted)
        } else {
            Some(x)
        }
    }

    /// The smallest retained element, the next one to be evicted.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    pub fn peek(&self) -> &T {
        match self.heap.first() {
            Some(x) => x,
            None => panic!("peek on an empty top-k"),
        }
    }

    pub fn try_peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Retained elements in heap order, without copying.
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether the container is saturated.
    pub fn is_full(&self) -> bool {
        self.heap.len() == self.k
    }

    pub fn capacity(&self) -> usize {
        self.k
    }

    /// Retained elements, largest first. The container is left untouched.
    pub fn extract_sorted(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut sorted = self.heap.clone();
        sorted.sort_by(|a, b| ordering(&self.less, b, a));
        sorted
    }

    pub fn into_sorted_vec(self) -> Vec<T> {
        let Self { mut heap, less, .. } = self;
        heap.sort_by(|a, b| ordering(&less, b, a));
        heap
    }

    pub fn into_vec(self) -> Vec<T> {
        self.heap
    }
}

impl<T, F> Extend<T> for TopK<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<T: Debug, F> Debug for TopK<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopK")
            .field("k", &self.k)
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}
