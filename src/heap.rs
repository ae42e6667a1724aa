//! Binary min-heap primitives over a slice.
//!
//! `less(a, b)` is the strict ordering of the heap; index `0` holds an
//! element that no other element is less than.

pub fn sift_up<T>(data: &mut [T], mut pos: usize, less: &impl Fn(&T, &T) -> bool) {
    while pos > 0 {
        let parent = (pos - 1) / 2;
        if !less(&data[pos], &data[parent]) {
            break;
        }
        data.swap(pos, parent);
        pos = parent;
    }
}

pub fn sift_down<T>(data: &mut [T], mut pos: usize, less: &impl Fn(&T, &T) -> bool) {
    let n = data.len();
    loop {
        let left = 2 * pos + 1;
        if left >= n {
            break;
        }
        let right = left + 1;
        let mut child = left;
        if right < n && less(&data[right], &data[left]) {
            child = right;
        }
        if !less(&data[child], &data[pos]) {
            break;
        }
        data.swap(pos, child);
        pos = child;
    }
}

#[cfg(test)]
pub fn is_heap<T>(data: &[T], less: &impl Fn(&T, &T) -> bool) -> bool {
    (1..data.len()).all(|i| !less(&data[i], &data[(i - 1) / 2]))
}
