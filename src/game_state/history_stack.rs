//! Fixed-capacity ring-buffer stack.
//!
//! Pushing onto a full stack overwrites the oldest entry, so at most `N`
//! entries can ever be popped back, no matter how many were pushed.

#[derive(Debug, Clone)]
pub struct HistoryStack<T, const N: usize> {
    entries: [Option<T>; N],
    start: usize,
    len: usize,
}

impl<T, const N: usize> Default for HistoryStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> HistoryStack<T, N> {
    pub fn new() -> Self {
        Self {
            entries: std::array::from_fn(|_| None),
            start: 0,
            len: 0,
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Push `value`, returning the evicted oldest entry when the stack was full.
    pub fn push(&mut self, value: T) -> Option<T> {
        if N == 0 {
            return Some(value);
        }

        let slot = (self.start + self.len) % N;
        let evicted = self.entries[slot].replace(value);
        if self.is_full() {
            self.start = (self.start + 1) % N;
            evicted
        } else {
            self.len += 1;
            None
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;
        let slot = (self.start + self.len) % N;
        self.entries[slot].take()
    }

    /// Most recent entry without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.entries[(self.start + self.len - 1) % N].as_ref()
    }

    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|entry| *entry = None);
        self.start = 0;
        self.len = 0;
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.entries[(self.start + i) % N].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::HistoryStack;

    #[test]
    fn pushing_past_capacity_keeps_only_the_latest_entries() {
        let mut stack = HistoryStack::<u32, 6>::new();
        for value in 1..=7 {
            stack.push(value);
        }
        assert!(stack.is_full());

        let mut popped = Vec::new();
        while let Some(value) = stack.pop() {
            popped.push(value);
        }
        assert_eq!(popped, vec![7, 6, 5, 4, 3, 2]);
        assert!(stack.is_empty());
    }

    #[test]
    fn push_reports_evicted_entry() {
        let mut stack = HistoryStack::<&str, 2>::new();
        assert_eq!(stack.push("a"), None);
        assert_eq!(stack.push("b"), None);
        assert_eq!(stack.push("c"), Some("a"));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn interleaved_push_and_pop_wraps_around() {
        let mut stack = HistoryStack::<u32, 3>::new();
        for value in 0..5 {
            stack.push(value);
        }
        assert_eq!(stack.pop(), Some(4));
        stack.push(10);
        stack.push(11);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Some(&11));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 10, 11]);
    }

    #[test]
    fn pop_on_empty_stack_returns_none() {
        let mut stack = HistoryStack::<u8, 6>::default();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        stack.push(1);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 6);
    }
}
