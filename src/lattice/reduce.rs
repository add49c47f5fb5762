use super::Basis;
use super::gram_schmidt::GramSchmidt;
use crate::constants::{DEFAULT_DELTA_DENOM, DEFAULT_DELTA_NUMER};
use crate::lll_error::{LllError, LllErrorKind};
use log::{debug, trace};
use rug::{Integer, Rational};
use std::fmt;
use std::str::FromStr;

/// Lovász parameter, kept exact. Valid values satisfy `1/4 < delta <= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Delta(Rational);

impl Delta {
    pub(crate) fn new(value: Rational) -> Result<Self, Box<LllError>> {
        let lower = Rational::from((1, 4));
        if value <= lower || value > 1 {
            return Err(LllError::boxed(
                "Invalid delta",
                &format!("delta must satisfy 1/4 < delta <= 1, got {value}"),
                LllErrorKind::Config,
            ));
        }
        Ok(Delta(value))
    }

    pub(crate) fn value(&self) -> &Rational {
        &self.0
    }
}

impl Default for Delta {
    fn default() -> Self {
        Delta(Rational::from((DEFAULT_DELTA_NUMER, DEFAULT_DELTA_DENOM)))
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Delta {
    type Err = Box<LllError>;

    /// Accepts `p/q` fractions, plain integers and decimals such as `0.99`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || {
            LllError::boxed(
                "Invalid delta",
                &format!("'{text}' is neither a fraction like 3/4 nor a decimal like 0.75"),
                LllErrorKind::Config,
            )
        };

        let value = if text.contains('/') {
            text.parse::<Rational>().map_err(|_| invalid())?
        } else if let Some((whole, frac)) = text.split_once('.') {
            if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let negative = whole.starts_with('-');
            let digits = format!("{}{}", whole.trim_start_matches(['-', '+']), frac);
            let mut numer = digits.parse::<Integer>().map_err(|_| invalid())?;
            if negative {
                numer = -numer;
            }
            let scale = Integer::from(Integer::u_pow_u(10, frac.len() as u32));
            Rational::from((numer, scale))
        } else {
            Rational::from(text.parse::<Integer>().map_err(|_| invalid())?)
        };

        Delta::new(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ReductionStats {
    pub(crate) iterations: u64,
    pub(crate) size_reductions: u64,
    pub(crate) swaps: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReductionReport {
    Reduced,
    /// `|mu[row][against]| > 1/2`, 0-based indices
    NotSizeReduced { row: usize, against: usize },
    /// Lovász condition fails between `row - 1` and `row`
    LovaszViolated { row: usize },
}

impl fmt::Display for ReductionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReductionReport::Reduced => f.write_str("reduced"),
            ReductionReport::NotSizeReduced { row, against } => write!(
                f,
                "not reduced: row {} is not size-reduced against row {}",
                row + 1,
                against + 1
            ),
            ReductionReport::LovaszViolated { row } => write!(
                f,
                "not reduced: Lovász condition fails between rows {} and {}",
                row,
                row + 1
            ),
        }
    }
}

fn nearest_integer(value: &Rational) -> Integer {
    // ties round away from zero
    value.clone().round().into_numer_denom().0
}

/// LLL-reduces `basis` in place with exact rational Gram-Schmidt data.
///
/// `observe` is called after every iteration of the main loop.
pub(crate) fn reduce_with<F>(
    basis: &mut Basis,
    delta: &Delta,
    mut observe: F,
) -> Result<ReductionStats, Box<LllError>>
where
    F: FnMut(&ReductionStats),
{
    let n = basis.len();
    let mut stats = ReductionStats::default();
    if n < 2 {
        debug!("Basis has {n} row(s), nothing to reduce");
        return Ok(stats);
    }

    let mut gs = GramSchmidt::compute(basis)?;
    let half = Rational::from((1, 2));
    let mut k = 1;

    while k < n {
        stats.iterations += 1;

        for j in (0..k).rev() {
            if gs.mu(k, j).clone().abs() > half {
                let q = nearest_integer(gs.mu(k, j));
                trace!("Size-reducing row {k} by {q} x row {j}");
                basis.sub_scaled_row(k, &q, j);
                gs.size_reduce(k, j, &q);
                stats.size_reductions += 1;
            }
        }

        if gs.lovasz_holds(k, delta.value()) {
            k += 1;
        } else {
            trace!("Lovász condition fails at row {k}, swapping with row {}", k - 1);
            basis.swap(k, k - 1);
            gs.swap(k);
            stats.swaps += 1;
            k = (k - 1).max(1);
        }

        observe(&stats);
    }

    debug!(
        "Reduction finished: {} iterations, {} size reductions, {} swaps",
        stats.iterations, stats.size_reductions, stats.swaps
    );
    Ok(stats)
}

/// Reports whether `basis` is already LLL-reduced for `delta`.
pub(crate) fn is_reduced(basis: &Basis, delta: &Delta) -> Result<ReductionReport, Box<LllError>> {
    if basis.len() < 2 {
        return Ok(ReductionReport::Reduced);
    }
    let gs = GramSchmidt::compute(basis)?;
    let half = Rational::from((1, 2));

    for row in 1..basis.len() {
        for against in 0..row {
            if gs.mu(row, against).clone().abs() > half {
                return Ok(ReductionReport::NotSizeReduced { row, against });
            }
        }
    }
    for row in 1..basis.len() {
        if !gs.lovasz_holds(row, delta.value()) {
            return Ok(ReductionReport::LovaszViolated { row });
        }
    }
    Ok(ReductionReport::Reduced)
}
