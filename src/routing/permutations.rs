/// Iterator over every permutation of `items`, in lexicographic order of positions.
///
/// Works on an index array and steps it with the classic next-permutation move, so
/// when `items` is sorted the permutations come out sorted too. Yields `n!` items;
/// an empty input yields a single empty permutation.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    done: bool,
}

impl<T: Copy> Permutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let indices = (0..items.len()).collect();
        Permutations {
            items,
            indices,
            done: false,
        }
    }
}

impl<T: Copy> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.iter().map(|&i| self.items[i]).collect();
        self.done = !advance(&mut self.indices);
        Some(current)
    }
}

/// Rearrange `indices` into the next greater permutation. Returns false once the
/// last (descending) permutation has been reached.
fn advance(indices: &mut [usize]) -> bool {
    let n = indices.len();
    if n < 2 {
        return false;
    }

    let mut pivot = n - 1;
    while pivot > 0 && indices[pivot - 1] >= indices[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut successor = n - 1;
    while indices[successor] <= indices[pivot - 1] {
        successor -= 1;
    }
    indices.swap(pivot - 1, successor);
    indices[pivot..].reverse();
    true
}
