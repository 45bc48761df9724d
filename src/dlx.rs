//! The quadruply-linked sparse-matrix substrate and its builder.
//!
//! A [`Matrix`] is an arena of [`Node`]s (`Vec<Node>`, indexed by `usize`
//! rather than linked through `Rc`/raw pointers) instead of a graph of
//! boxed, pointer-linked cells. Index `0` is the root sentinel; every
//! other index is either a column header or a data node, sharing one
//! index space so a node's `column` field can point straight at its
//! header without a second lookup table.

use std::collections::HashSet;
use std::rc::Rc;

const ROOT: usize = 0;

#[derive(Debug, Clone, Copy)]
struct Node {
    /// Index of this node's column header. Self-referential for headers.
    column: usize,
    /// Row this node belongs to; indexes into `Matrix::row_tag`. Unused
    /// (left at 0) for the root and for column headers.
    row: usize,
    left: usize,
    right: usize,
    up: usize,
    down: usize,
}

impl Node {
    fn singleton(column: usize, row: usize) -> Self {
        Node { column, row, left: 0, right: 0, up: 0, down: 0 }
    }
}

/// The sparse matrix: column headers, data nodes, and the bookkeeping
/// vectors kept in lockstep with the node arena.
pub(crate) struct Matrix<S, L> {
    pool: Vec<Node>,
    col_size: Vec<usize>,
    col_label: Vec<Option<L>>,
    row_tag: Vec<Option<Rc<S>>>,
}

impl<S, L: Eq + Clone> Matrix<S, L> {
    fn empty() -> Self {
        let mut pool = Vec::with_capacity(1);
        pool.push(Node::singleton(ROOT, 0));
        pool[ROOT].left = ROOT;
        pool[ROOT].right = ROOT;
        pool[ROOT].up = ROOT;
        pool[ROOT].down = ROOT;
        Matrix {
            pool,
            col_size: vec![0],
            col_label: vec![None],
            row_tag: vec![None],
        }
    }

    fn create_node(&mut self, column: usize, row: usize) -> usize {
        let idx = self.pool.len();
        let mut node = Node::singleton(column, row);
        node.left = idx;
        node.right = idx;
        node.up = idx;
        node.down = idx;
        self.pool.push(node);
        self.col_size.push(0);
        self.col_label.push(None);
        idx
    }

    /// Splice `node` into the horizontal list immediately to the right of `at`.
    fn insert_right(&mut self, at: usize, node: usize) {
        let right = self.pool[at].right;
        self.pool[node].right = right;
        self.pool[node].left = at;
        self.pool[right].left = node;
        self.pool[at].right = node;
    }

    /// Splice `node` into the vertical list immediately below `at`.
    fn insert_down(&mut self, at: usize, node: usize) {
        let down = self.pool[at].down;
        self.pool[node].down = down;
        self.pool[node].up = at;
        self.pool[down].up = node;
        self.pool[at].down = node;
    }

    fn find_or_create_column(&mut self, label: &L) -> usize {
        let mut c = self.pool[ROOT].right;
        while c != ROOT {
            if self.col_label[c].as_ref() == Some(label) {
                return c;
            }
            c = self.pool[c].right;
        }
        let col = self.create_node(0, 0);
        self.pool[col].column = col;
        self.col_label[col] = Some(label.clone());
        let tail = self.pool[ROOT].left;
        self.insert_right(tail, col);
        col
    }

    /// Build a matrix from an iterable of subsets. An element repeated
    /// within one subset is silently deduplicated (see `SPEC_FULL.md`
    /// section 4.2) rather than producing a malformed row.
    pub(crate) fn build<Sub>(subsets: Sub) -> Self
    where
        Sub: IntoIterator<Item = S>,
        S: Clone + IntoIterator<Item = L>,
    {
        let mut matrix = Matrix::empty();
        for subset in subsets {
            matrix.add_row(subset);
        }
        matrix
    }

    fn add_row(&mut self, subset: S)
    where
        S: Clone + IntoIterator<Item = L>,
    {
        let tag = Rc::new(subset.clone());
        let row = self.row_tag.len();
        let mut seen = HashSet::new();
        let mut tail: Option<usize> = None;

        for label in subset {
            let col = self.find_or_create_column(&label);
            if !seen.insert(col) {
                continue;
            }
            let node = self.create_node(col, row);
            let bottom = self.pool[col].up;
            self.insert_down(bottom, node);
            self.col_size[col] += 1;
            if let Some(t) = tail {
                self.insert_right(t, node);
            }
            tail = Some(node);
        }

        self.row_tag.push(Some(tag));
    }

    fn cover_col(&mut self, col: usize) {
        let (left, right) = (self.pool[col].left, self.pool[col].right);
        self.pool[left].right = right;
        self.pool[right].left = left;

        let mut i = self.pool[col].down;
        while i != col {
            let mut j = self.pool[i].right;
            while j != i {
                let (up, down, column) = (self.pool[j].up, self.pool[j].down, self.pool[j].column);
                self.pool[up].down = down;
                self.pool[down].up = up;
                self.col_size[column] -= 1;
                j = self.pool[j].right;
            }
            i = self.pool[i].down;
        }
    }

    fn uncover_col(&mut self, col: usize) {
        let mut i = self.pool[col].up;
        while i != col {
            let mut j = self.pool[i].left;
            while j != i {
                let (up, down, column) = (self.pool[j].up, self.pool[j].down, self.pool[j].column);
                self.pool[up].down = j;
                self.pool[down].up = j;
                self.col_size[column] += 1;
                j = self.pool[j].left;
            }
            i = self.pool[i].up;
        }
        let (left, right) = (self.pool[col].left, self.pool[col].right);
        self.pool[left].right = col;
        self.pool[right].left = col;
    }

    /// Covers every column touched by row `r`, including `r`'s own
    /// column, and unlinks every row conflicting with `r` from those
    /// columns. `r` itself stays addressable as a solution-stack entry.
    pub(crate) fn cover_row(&mut self, r: usize) {
        self.cover_col(self.pool[r].column);
        let mut j = self.pool[r].right;
        while j != r {
            self.cover_col(self.pool[j].column);
            j = self.pool[j].right;
        }
    }

    /// Exact inverse of [`Matrix::cover_row`]; unwinds in mirror order.
    pub(crate) fn uncover_row(&mut self, r: usize) {
        let mut j = self.pool[r].left;
        while j != r {
            self.uncover_col(self.pool[j].column);
            j = self.pool[j].left;
        }
        self.uncover_col(self.pool[r].column);
    }

    /// Active column with the fewest live rows, first-encountered on ties.
    pub(crate) fn smallest_column(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut c = self.pool[ROOT].right;
        while c != ROOT {
            if best.map_or(true, |b| self.col_size[c] < self.col_size[b]) {
                best = Some(c);
            }
            c = self.pool[c].right;
        }
        best
    }

    pub(crate) fn column_count(&self) -> usize {
        let mut count = 0;
        let mut c = self.pool[ROOT].right;
        while c != ROOT {
            count += 1;
            c = self.pool[c].right;
        }
        count
    }

    pub(crate) fn col_size(&self, col: usize) -> usize {
        self.col_size[col]
    }

    pub(crate) fn column_of(&self, r: usize) -> usize {
        self.pool[r].column
    }

    pub(crate) fn top(&self, col: usize) -> usize {
        self.pool[col].down
    }

    pub(crate) fn down(&self, r: usize) -> usize {
        self.pool[r].down
    }

    pub(crate) fn row_tag(&self, r: usize) -> Rc<S> {
        self.row_tag[self.pool[r].row]
            .clone()
            .expect("row has a tag once built")
    }
}
