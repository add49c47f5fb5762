use super::vector;
use rug::Integer;
use std::fmt;

/// Lattice basis stored row-wise; row `i` is the basis vector `b_i`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Basis {
    rows: Vec<Vec<Integer>>,
}

impl Basis {
    pub(crate) fn new(rows: Vec<Vec<Integer>>) -> Self {
        Basis { rows }
    }

    pub(crate) fn from_i64_rows<const N: usize>(rows: &[[i64; N]]) -> Self {
        Basis {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|&v| Integer::from(v)).collect())
                .collect(),
        }
    }

    pub(crate) fn rows(&self) -> &[Vec<Integer>] {
        &self.rows
    }

    pub(crate) fn row(&self, i: usize) -> &[Integer] {
        &self.rows[i]
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the first row, `None` for an empty basis.
    pub(crate) fn dimension(&self) -> Option<usize> {
        self.rows.first().map(Vec::len)
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// `b_k -= q * b_j`
    pub(crate) fn sub_scaled_row(&mut self, k: usize, q: &Integer, j: usize) {
        debug_assert_ne!(k, j);
        let (target, source) = if k > j {
            let (head, tail) = self.rows.split_at_mut(k);
            (&mut tail[0], &head[j])
        } else {
            let (head, tail) = self.rows.split_at_mut(j);
            (&mut head[k], &tail[0])
        };
        vector::sub_scaled(target, q, source);
    }

    /// Drop all-zero rows, returning how many were removed.
    pub(crate) fn retain_nonzero(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !vector::is_zero(row));
        before - self.rows.len()
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
