//! Bounded top-k selection.
//!
//! [`TopK`] keeps the `k` largest elements seen in a stream, under an
//! ordering chosen at construction, in `O(k)` memory and `O(log k)` per
//! insert.
//!
//! ```
//! use topk::{comparator::ascending, TopK};
//!
//! let mut top_k = TopK::<i32, _>::new(3, ascending).unwrap();
//! top_k.extend([5, 6, 2, 4, 2]);
//! assert_eq!(top_k.extract_sorted(), vec![6, 5, 4]);
//! ```

mod always_equal;
pub mod comparator;
mod error;
mod heap;
mod options;
mod sync;
mod top_k;

pub use always_equal::AlwaysEqual;
pub use error::CreateError;
pub use options::TopKOptions;
pub use sync::SyncTopK;
pub use top_k::TopK;
