use std::collections::{vec_deque, VecDeque};
use std::fmt;
use std::iter::Chain;
use std::ops::Index;

/// Sequence split into two double-ended halves kept within one element.
///
/// Invariant: `front.len() - back.len()` is 0 or 1 after every operation.
#[derive(Clone, PartialEq, Eq)]
pub struct Teque<T> {
    front: VecDeque<T>,
    back: VecDeque<T>,
}

impl<T> Teque<T> {
    pub fn new() -> Self {
        Self {
            front: VecDeque::new(),
            back: VecDeque::new(),
        }
    }

    /// Preallocate room for `cap` elements in total.
    pub fn with_capacity(cap: usize) -> Self {
        let half = cap / 2 + 1;
        Self {
            front: VecDeque::with_capacity(half),
            back: VecDeque::with_capacity(half),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    /// Append `x` at the logical end.
    pub fn push_back(&mut self, x: T) {
        self.back.push_back(x);
        if self.back.len() > self.front.len() {
            if let Some(moved) = self.back.pop_front() {
                self.front.push_back(moved);
            }
        }
    }

    /// Prepend `x` at the logical start.
    pub fn push_front(&mut self, x: T) {
        self.front.push_front(x);
        if self.front.len() > self.back.len() + 1 {
            if let Some(moved) = self.front.pop_back() {
                self.back.push_front(moved);
            }
        }
    }

    /// Insert `x` at index `(len + 1) / 2`, the seam between the halves.
    pub fn push_middle(&mut self, x: T) {
        if self.front.len() > self.back.len() {
            self.back.push_front(x);
        } else {
            self.front.push_back(x);
        }
    }

    /// Element at logical index `i`, or `None` when `i >= len()`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        match i.checked_sub(self.front.len()) {
            None => self.front.get(i),
            Some(j) => self.back.get(j),
        }
    }

    /// Lengths of the two halves, `(front, back)`.
    #[inline]
    pub fn halves(&self) -> (usize, usize) {
        (self.front.len(), self.back.len())
    }

    /// Elements in logical order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.front.iter().chain(self.back.iter())
    }
}

/// Logical-order iterator over a [`Teque`].
pub type Iter<'a, T> = Chain<vec_deque::Iter<'a, T>, vec_deque::Iter<'a, T>>;

impl<T> Default for Teque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Teque<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Some(x) => x,
            None => panic!("teque index {i} out of range for length {}", self.len()),
        }
    }
}

impl<T> Extend<T> for Teque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push_back(x);
        }
    }
}

impl<T> FromIterator<T> for Teque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::new();
        t.extend(iter);
        t
    }
}

impl<'a, T> IntoIterator for &'a Teque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Teque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
