//! Strided vector views over caller-owned buffers.
//!
//! A view holds the buffer already advanced by its offset, the logical length
//! `n` and the increment. Views are only built from windows the resolver has
//! validated, so `(n - 1) * |inc| < data.len()` always holds when `n > 0`.
//!
//! Negative increments follow the reference BLAS convention: the window
//! occupies the same storage `[0, (n - 1) * |inc|]` for either sign, and a
//! negative increment visits it from the far end back to the start.

/// Storage position of logical element `i`.
#[inline]
fn position(i: usize, n: usize, inc: isize) -> usize {
    let step = inc.unsigned_abs();
    if inc > 0 { i * step } else { (n - 1 - i) * step }
}

/// Read-only strided window.
#[derive(Debug, Clone, Copy)]
pub struct StridedView<'a, T> {
    data: &'a [T],
    n: usize,
    inc: isize,
}

impl<'a, T: Copy> StridedView<'a, T> {
    pub(crate) fn new(data: &'a [T], n: usize, inc: isize) -> Self {
        debug_assert!(inc != 0);
        debug_assert!(n == 0 || (n - 1) * inc.unsigned_abs() < data.len());
        Self { data, n, inc }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn inc(&self) -> isize {
        self.inc
    }

    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.data[position(i, self.n, self.inc)]
    }

    /// Elements in logical order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.n).map(move |i| self.get(i))
    }

    /// The window as a plain slice when it is contiguous and forward.
    pub fn as_contiguous(&self) -> Option<&'a [T]> {
        let data: &'a [T] = self.data;
        if self.inc == 1 { Some(&data[..self.n]) } else { None }
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

/// Mutable strided window.
#[derive(Debug)]
pub struct StridedViewMut<'a, T> {
    data: &'a mut [T],
    n: usize,
    inc: isize,
}

impl<'a, T: Copy> StridedViewMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], n: usize, inc: isize) -> Self {
        debug_assert!(inc != 0);
        debug_assert!(n == 0 || (n - 1) * inc.unsigned_abs() < data.len());
        Self { data, n, inc }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn inc(&self) -> isize {
        self.inc
    }

    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.data[position(i, self.n, self.inc)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: T) {
        let p = position(i, self.n, self.inc);
        self.data[p] = value;
    }

    /// Replace element `i` with `f(element)`.
    #[inline]
    pub fn update(&mut self, i: usize, f: impl FnOnce(T) -> T) {
        let p = position(i, self.n, self.inc);
        self.data[p] = f(self.data[p]);
    }

    pub fn as_contiguous_mut(&mut self) -> Option<&mut [T]> {
        if self.inc == 1 {
            Some(&mut self.data[..self.n])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_stride_skips_elements() {
        let buf = [0, 1, 2, 3, 4, 5, 6];
        let v = StridedView::new(&buf[1..], 3, 2);
        assert_eq!(v.to_vec(), vec![1, 3, 5]);
        assert!(v.as_contiguous().is_none());
    }

    #[test]
    fn negative_stride_walks_window_backward() {
        let buf = [0, 1, 2, 3, 4, 5, 6];
        let v = StridedView::new(&buf[1..], 3, -2);
        assert_eq!(v.to_vec(), vec![5, 3, 1]);
    }

    #[test]
    fn mutable_view_writes_through() {
        let mut buf = [1.0, 2.0, 3.0, 4.0];
        {
            let mut v = StridedViewMut::new(&mut buf[..], 2, -3);
            v.set(0, 10.0);
            v.update(1, |x| x * 5.0);
        }
        assert_eq!(buf, [5.0, 2.0, 3.0, 10.0]);
    }
}
