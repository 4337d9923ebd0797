//! Two-variable pattern search.
//!
//! Each iteration lays an `N×N` grid of candidates over the current search
//! window, centred on the current estimate, moves to the best candidate and
//! shrinks the window. The iteration count is fixed; there is no convergence
//! test, and the result is a local minimum of the squared residuals.

use crate::SolverError;
use serde::{Deserialize, Serialize};

/// Pattern search parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Search domain `[lo, hi]`, shared by both unknowns. Sets the initial
    /// centre (its midpoint) and the initial window width.
    pub domain: (f64, f64),
    /// Candidates per axis per iteration.
    pub slices: u32,
    pub iterations: u32,
    /// Window multiplier applied after every iteration.
    pub shrink: f64,
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), SolverError> {
        let (lo, hi) = self.domain;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(SolverError::DegenerateDomain { lo, hi });
        }
        if self.slices == 0 {
            return Err(SolverError::NoSlices);
        }
        if self.iterations == 0 {
            return Err(SolverError::NoIterations);
        }
        if !(self.shrink > 0.0 && self.shrink <= 1.0) {
            return Err(SolverError::InvalidShrink(self.shrink));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 25.0),
            slices: 8,
            iterations: 60,
            shrink: 0.75,
        }
    }
}

/// Validated pattern search solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternSearch {
    config: SolverConfig,
}

impl PatternSearch {
    pub fn new(config: SolverConfig) -> Result<Self, SolverError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Midpoint of the domain on both axes.
    pub fn initial_guess(&self) -> (f64, f64) {
        let (lo, hi) = self.config.domain;
        let mid = (lo + hi) * 0.5;
        (mid, mid)
    }

    /// Find `(m1, m2)` minimizing
    /// `(t1 - model1(m1, m2))² + (t2 - model2(m1, m2))²`, starting at the
    /// domain midpoint.
    pub fn solve<M1, M2>(&self, targets: (f64, f64), model1: M1, model2: M2) -> (f64, f64)
    where
        M1: Fn(f64, f64) -> f64,
        M2: Fn(f64, f64) -> f64,
    {
        self.solve_from(self.initial_guess(), targets, model1, model2)
    }

    /// Same as [`solve`](Self::solve) but starting from `initial`.
    pub fn solve_from<M1, M2>(
        &self,
        initial: (f64, f64),
        targets: (f64, f64),
        model1: M1,
        model2: M2,
    ) -> (f64, f64)
    where
        M1: Fn(f64, f64) -> f64,
        M2: Fn(f64, f64) -> f64,
    {
        let (t1, t2) = targets;
        let error = |m1: f64, m2: f64| {
            let e1 = t1 - model1(m1, m2);
            let e2 = t2 - model2(m1, m2);
            e1 * e1 + e2 * e2
        };

        let SolverConfig {
            domain: (lo, hi),
            slices,
            iterations,
            shrink,
        } = self.config;
        let n = slices as f64;

        let mut best = initial;
        let mut best_error = error(best.0, best.1);
        let mut range = hi - lo;

        for _ in 0..iterations {
            let step = range / n;
            let first = step * 0.5 - range * 0.5;
            let (c1, c2) = best;

            for i in 0..slices {
                let m1 = c1 + first + i as f64 * step;
                for j in 0..slices {
                    let m2 = c2 + first + j as f64 * step;
                    let e = error(m1, m2);
                    if e < best_error {
                        best = (m1, m2);
                        best_error = e;
                    }
                }
            }

            range *= shrink;
        }

        log::debug!(
            "pattern search: targets=({t1}, {t2}) -> ({:.6}, {:.6}), error={best_error:e}",
            best.0,
            best.1
        );
        best
    }
}

impl Default for PatternSearch {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }
}

/// Solve with the default parameters (domain `[0, 25]`, 8 slices,
/// 60 iterations, shrink 0.75).
pub fn solve<M1, M2>(t1: f64, t2: f64, model1: M1, model2: M2) -> (f64, f64)
where
    M1: Fn(f64, f64) -> f64,
    M2: Fn(f64, f64) -> f64,
{
    PatternSearch::default().solve((t1, t2), model1, model2)
}
