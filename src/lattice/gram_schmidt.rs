use super::Basis;
use super::vector;
use crate::lll_error::{LllError, LllErrorKind};
use rug::{Integer, Rational};
use std::cmp::Ordering;

/// Gram-Schmidt data of a basis, kept without the orthogonal vectors themselves.
///
/// `norms[i]` is `|b*_i|^2` and `mu[i][j]` (for `j < i`) is `<b_i, b*_j> / |b*_j|^2`.
/// Entries with `j >= i` are unused and stay zero.
#[derive(Debug, Clone)]
pub(crate) struct GramSchmidt {
    mu: Vec<Vec<Rational>>,
    norms: Vec<Rational>,
}

impl GramSchmidt {
    /// Computes the coefficients from inner products of the rows.
    ///
    /// Fails when some `b*_i` is zero, i.e. the rows are linearly dependent.
    pub(crate) fn compute(basis: &Basis) -> Result<Self, Box<LllError>> {
        let n = basis.len();
        if let Some(dimension) = basis.dimension() {
            if let Some(ragged) = basis.rows().iter().position(|row| row.len() != dimension) {
                return Err(LllError::boxed(
                    "Basis rows differ in length",
                    &format!(
                        "row {} has {} entries but row 1 has {dimension}",
                        ragged + 1,
                        basis.row(ragged).len()
                    ),
                    LllErrorKind::Input,
                ));
            }
        }
        let mut mu = vec![vec![Rational::new(); n]; n];
        let mut norms: Vec<Rational> = Vec::with_capacity(n);

        for i in 0..n {
            for j in 0..i {
                let mut s = Rational::from(vector::dot(basis.row(i), basis.row(j)));
                for l in 0..j {
                    s -= mu[j][l].clone() * &mu[i][l] * &norms[l];
                }
                mu[i][j] = s / &norms[j];
            }

            let mut b_i = Rational::from(vector::norm_squared(basis.row(i)));
            for j in 0..i {
                b_i -= mu[i][j].clone().square() * &norms[j];
            }
            if b_i.cmp0() != Ordering::Greater {
                return Err(LllError::boxed(
                    "Basis rows are linearly dependent",
                    &format!(
                        "row {} lies in the span of the rows before it; LLL needs independent rows",
                        i + 1
                    ),
                    LllErrorKind::Reduction,
                ));
            }
            norms.push(b_i);
        }

        Ok(GramSchmidt { mu, norms })
    }

    pub(crate) fn mu(&self, i: usize, j: usize) -> &Rational {
        &self.mu[i][j]
    }

    #[cfg(test)]
    pub(crate) fn norm(&self, i: usize) -> &Rational {
        &self.norms[i]
    }

    /// Mirrors `b_k -= q * b_j` on the coefficients of row `k`.
    pub(crate) fn size_reduce(&mut self, k: usize, j: usize, q: &Integer) {
        let q = Rational::from(q.clone());
        self.mu[k][j] -= &q;
        for i in 0..j {
            let delta = q.clone() * &self.mu[j][i];
            self.mu[k][i] -= delta;
        }
    }

    /// `B_k >= (delta - mu[k][k-1]^2) * B_{k-1}`
    pub(crate) fn lovasz_holds(&self, k: usize, delta: &Rational) -> bool {
        let factor = delta.clone() - self.mu[k][k - 1].clone().square();
        self.norms[k] >= factor * &self.norms[k - 1]
    }

    /// Mirrors swapping rows `k - 1` and `k` of the basis.
    pub(crate) fn swap(&mut self, k: usize) {
        let n = self.norms.len();
        let m = self.mu[k][k - 1].clone();
        let combined = self.norms[k].clone() + m.clone().square() * &self.norms[k - 1];

        self.mu[k][k - 1] = m.clone() * &self.norms[k - 1] / &combined;
        self.norms[k] = self.norms[k - 1].clone() * &self.norms[k] / &combined;
        self.norms[k - 1] = combined;

        {
            let (upper, lower) = self.mu.split_at_mut(k);
            upper[k - 1][..k - 1].swap_with_slice(&mut lower[0][..k - 1]);
        }

        for i in k + 1..n {
            let t = self.mu[i][k].clone();
            let new_ik = self.mu[i][k - 1].clone() - m.clone() * &t;
            let new_ik1 = t + self.mu[k][k - 1].clone() * &new_ik;
            self.mu[i][k] = new_ik;
            self.mu[i][k - 1] = new_ik1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matches_fresh(gs: &GramSchmidt, basis: &Basis) {
        let fresh = GramSchmidt::compute(basis).unwrap();
        for i in 0..basis.len() {
            assert_eq!(gs.norm(i), fresh.norm(i), "norm {i}");
            for j in 0..i {
                assert_eq!(gs.mu(i, j), fresh.mu(i, j), "mu[{i}][{j}]");
            }
        }
    }

    #[test]
    fn test_compute_two_rows() {
        let basis = Basis::from_i64_rows(&[[1, 1], [1, 0]]);
        let gs = GramSchmidt::compute(&basis).unwrap();
        assert_eq!(*gs.norm(0), 2);
        assert_eq!(*gs.mu(1, 0), Rational::from((1, 2)));
        assert_eq!(*gs.norm(1), Rational::from((1, 2)));
    }

    #[test]
    fn test_dependent_rows_rejected() {
        let basis = Basis::from_i64_rows(&[[1, 2, 3], [2, 4, 6]]);
        let err = GramSchmidt::compute(&basis).unwrap_err();
        assert_eq!(err.kind(), LllErrorKind::Reduction);
        assert!(err.message().contains("row 2"));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let basis = Basis::new(vec![
            vec![Integer::from(1), Integer::from(0)],
            vec![Integer::from(0), Integer::from(1), Integer::from(7)],
        ]);
        let err = GramSchmidt::compute(&basis).unwrap_err();
        assert_eq!(err.kind(), LllErrorKind::Input);
        assert!(err.message().contains("row 2 has 3 entries"));

        let basis = Basis::new(vec![
            vec![Integer::from(1), Integer::from(2), Integer::from(3)],
            vec![Integer::from(4)],
        ]);
        assert!(GramSchmidt::compute(&basis).is_err());
    }

    #[test]
    fn test_swap_update_matches_recomputation() {
        let mut basis = Basis::from_i64_rows(&[
            [3, 1, 4, 1],
            [5, 9, 2, 6],
            [5, 3, 5, 8],
            [9, 7, 9, 3],
        ]);
        let mut gs = GramSchmidt::compute(&basis).unwrap();
        for k in [1, 2, 3, 1] {
            basis.swap(k, k - 1);
            gs.swap(k);
            assert_matches_fresh(&gs, &basis);
        }
    }

    #[test]
    fn test_size_reduce_matches_recomputation() {
        let mut basis = Basis::from_i64_rows(&[[1, 0, 0], [4, 1, 0], [7, 5, 1]]);
        let mut gs = GramSchmidt::compute(&basis).unwrap();
        let q = Integer::from(5);
        basis.sub_scaled_row(2, &q, 1);
        gs.size_reduce(2, 1, &q);
        assert_matches_fresh(&gs, &basis);
    }

    #[test]
    fn test_lovasz_on_orthogonal_rows() {
        let basis = Basis::from_i64_rows(&[[1, 0], [0, 1]]);
        let gs = GramSchmidt::compute(&basis).unwrap();
        assert!(gs.lovasz_holds(1, &Rational::from((3, 4))));

        let basis = Basis::from_i64_rows(&[[10, 0], [0, 1]]);
        let gs = GramSchmidt::compute(&basis).unwrap();
        assert!(!gs.lovasz_holds(1, &Rational::from((3, 4))));
    }
}
