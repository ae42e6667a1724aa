use crate::error::CreateError;
use crate::options::TopKOptions;
use crate::top_k::TopK;
use parking_lot::{Mutex, MutexGuard};

/// A [`TopK`] shared between producers.
///
/// Each method holds the lock for exactly one call on the inner container.
pub struct SyncTopK<T, F> {
    locked: Mutex<TopK<T, F>>,
}

impl<T, F> SyncTopK<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(k: usize, less: F) -> Result<Self, CreateError> {
        Ok(Self::from(TopK::new(k, less)?))
    }

    pub fn with_options(options: &TopKOptions, less: F) -> Result<Self, CreateError> {
        Ok(Self::from(TopK::with_options(options, less)?))
    }

    pub fn insert(&self, x: T) -> Option<T> {
        self.locked.lock().insert(x)
    }

    pub fn check(&self, x: &T) -> bool {
        self.locked.lock().check(x)
    }

    pub fn len(&self) -> usize {
        self.locked.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.locked.lock().capacity()
    }

    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.locked.lock().try_peek().cloned()
    }

    pub fn extract_sorted(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.locked.lock().extract_sorted()
    }

    /// Locks the container for borrowed access, e.g. [`TopK::as_slice`].
    pub fn lock(&self) -> MutexGuard<'_, TopK<T, F>> {
        self.locked.lock()
    }

    pub fn into_inner(self) -> TopK<T, F> {
        self.locked.into_inner()
    }
}

impl<T, F> From<TopK<T, F>> for SyncTopK<T, F> {
    fn from(top_k: TopK<T, F>) -> Self {
        Self {
            locked: Mutex::new(top_k),
        }
    }
}
