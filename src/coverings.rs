//! The public factory and the resumable solution iterator built on top of
//! [`crate::dlx::Matrix`].

use std::rc::Rc;

use crate::dlx::Matrix;

enum Step {
    Continue,
    Backup,
    Solution,
}

/// A lazily-evaluated sequence of exact covers of the universe implied by
/// the subsets passed to [`coverings`].
///
/// Each item is a `Vec` of the row-tags (the original subsets, by shared
/// reference) chosen for that cover, in the order they were pushed onto
/// the internal solution stack. Dropping the iterator before it is
/// exhausted restores the underlying matrix before releasing it.
pub struct Coverings<S, L> {
    matrix: Matrix<S, L>,
    solution: Vec<usize>,
    first: bool,
}

impl<S, L: Eq + Clone> Coverings<S, L> {
    fn step(&mut self) -> Step {
        match self.matrix.smallest_column() {
            None => Step::Solution,
            Some(c) if self.matrix.col_size(c) == 0 => Step::Backup,
            Some(c) => {
                let r = self.matrix.top(c);
                self.matrix.cover_row(r);
                self.solution.push(r);
                Step::Continue
            }
        }
    }

    /// Retreats from the current solution, trying the next row in the
    /// deepest column that still has one. Returns `false` once the stack
    /// is fully unwound, meaning the iterator is exhausted.
    fn backup(&mut self) -> bool {
        while let Some(&r) = self.solution.last() {
            self.matrix.uncover_row(r);
            let header = self.matrix.column_of(r);
            let next = self.matrix.down(r);
            if next == header {
                self.solution.pop();
            } else {
                self.matrix.cover_row(next);
                *self.solution.last_mut().unwrap() = next;
                return true;
            }
        }
        false
    }
}

impl<S, L: Eq + Clone> Iterator for Coverings<S, L> {
    type Item = Vec<Rc<S>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.first {
            self.first = false;
        } else if !self.backup() {
            return None;
        }

        loop {
            match self.step() {
                Step::Continue => continue,
                Step::Backup => {
                    if !self.backup() {
                        return None;
                    }
                }
                Step::Solution => {
                    return Some(self.solution.iter().map(|&r| self.matrix.row_tag(r)).collect());
                }
            }
        }
    }
}

impl<S, L: Eq + Clone> Drop for Coverings<S, L> {
    fn drop(&mut self) {
        while let Some(r) = self.solution.pop() {
            self.matrix.uncover_row(r);
        }
    }
}

/// Enumerate every exact cover of the universe implied by `subsets`: every
/// selection of pairwise-disjoint subsets whose union is the universe.
///
/// `subsets` and each subset's own element sequence are consumed eagerly
/// while building the internal matrix; the subsets themselves are what the
/// yielded solutions reference; there is no separate "row name", so pair
/// your own name with a subset before handing it to `coverings` if you
/// need one.
///
/// ```
/// use exact_cover::coverings;
///
/// let mut solutions = coverings(vec![vec![1, 2], vec![3, 4]]);
/// let first = solutions.next().unwrap();
/// assert_eq!(first.len(), 2);
/// assert!(solutions.next().is_none());
/// ```
pub fn coverings<S, L>(subsets: impl IntoIterator<Item = S>) -> Coverings<S, L>
where
    S: Clone + IntoIterator<Item = L>,
    L: Eq + Clone,
{
    let matrix = Matrix::build(subsets);
    let capacity = matrix.column_count();
    Coverings {
        matrix,
        solution: Vec::with_capacity(capacity),
        first: true,
    }
}
