/// Lazy generator for every ordering of a fixed set of items.
///
/// Swap-based (Heap's algorithm, iterative form): each step swaps two
/// positions in an internal buffer and a snapshot of the buffer is handed
/// out, so no step mutates a permutation already emitted. The emission order
/// is deterministic but callers should not rely on which ordering comes
/// first. Zero items yield exactly one empty permutation.
pub struct Permutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    cursor: usize,
    emitted_initial: bool,
    done: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: Vec<T>) -> Permutations<T> {
        let counters = vec![0; items.len()];
        Permutations {
            items,
            counters,
            cursor: 1,
            emitted_initial: false,
            done: false,
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.emitted_initial {
            self.emitted_initial = true;
            return Some(self.items.clone());
        }
        while self.cursor < self.items.len() {
            if self.counters[self.cursor] < self.cursor {
                if self.cursor % 2 == 0 {
                    self.items.swap(0, self.cursor);
                } else {
                    self.items.swap(self.counters[self.cursor], self.cursor);
                }
                self.counters[self.cursor] += 1;
                self.cursor = 1;
                return Some(self.items.clone());
            }
            self.counters[self.cursor] = 0;
            self.cursor += 1;
        }
        self.done = true;
        None
    }
}

/* Materialized form, for the parallel engine to partition. */
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    Permutations::new(items.to_vec()).collect()
}
