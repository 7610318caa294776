//! Dense two-phase primal simplex with row duals.
//!
//! Standard form
//! - Variables are shifted to `y = x - lb >= 0`; finite upper bounds become
//!   extra `y_j <= ub_j - lb_j` rows appended after the model rows.
//! - Rows with negative rhs are negated (sense flipped) so every rhs is `>= 0`.
//! - Each row gets an identity column: its slack for `<=` rows, its artificial
//!   for `>=`/`==` rows. The phase-2 reduced cost of that column is `-y_i`,
//!   which yields the row dual without a separate B⁻¹.
//!
//! Pivoting uses Bland's rule (smallest improving column, smallest basic
//! index among ratio ties); the row-generation LPs are highly degenerate.

use nalgebra::DMatrix;

use super::cfg::{FEAS_EPS, OPT_EPS, PIVOT_EPS, RATIO_EPS};
use super::{MipError, Sense};

/// Model row over variable indices.
#[derive(Clone, Debug)]
pub(crate) struct Row {
    pub coefs: Vec<(usize, f64)>,
    pub sense: Sense,
    pub rhs: f64,
}

/// LP view borrowed from a model (bounds may be node-local during branching).
pub(crate) struct LpProblem<'a> {
    pub cost: &'a [f64],
    pub lb: &'a [f64],
    pub ub: &'a [f64],
    pub rows: &'a [Row],
}

#[derive(Clone, Debug)]
pub(crate) struct LpSolution {
    pub x: Vec<f64>,
    /// One entry per model row (bound rows excluded).
    pub duals: Vec<f64>,
    pub objective: f64,
    pub pivots: usize,
}

#[derive(Clone, Debug)]
pub(crate) enum LpOutcome {
    Optimal(LpSolution),
    Infeasible,
    Unbounded,
}

enum Phase {
    Optimal,
    Unbounded,
}

/// Tableau rows `0..m` are constraints, row `m` holds reduced costs with
/// `-z` in the rhs column.
struct Tableau {
    t: DMatrix<f64>,
    basis: Vec<usize>,
    pivots: usize,
    pivot_limit: usize,
}

impl Tableau {
    fn rows(&self) -> usize {
        self.t.nrows() - 1
    }

    fn cols(&self) -> usize {
        self.t.ncols() - 1
    }

    fn pivot(&mut self, r: usize, j: usize) {
        let width = self.t.ncols();
        let p = self.t[(r, j)];
        for c in 0..width {
            self.t[(r, c)] /= p;
        }
        self.t[(r, j)] = 1.0;
        for i in 0..self.t.nrows() {
            if i == r {
                continue;
            }
            let f = self.t[(i, j)];
            if f == 0.0 {
                continue;
            }
            for c in 0..width {
                let v = self.t[(r, c)];
                if v != 0.0 {
                    self.t[(i, c)] -= f * v;
                }
            }
            self.t[(i, j)] = 0.0;
        }
        self.basis[r] = j;
        self.pivots += 1;
    }

    /// Pivot until no allowed column improves the objective row.
    fn run(&mut self, allowed: impl Fn(usize) -> bool) -> Result<Phase, MipError> {
        let (m, cols) = (self.rows(), self.cols());
        loop {
            let Some(j) = (0..cols).find(|&j| allowed(j) && self.t[(m, j)] < -OPT_EPS) else {
                return Ok(Phase::Optimal);
            };
            let mut leave: Option<(usize, f64)> = None;
            for i in 0..m {
                let a = self.t[(i, j)];
                if a <= PIVOT_EPS {
                    continue;
                }
                let ratio = self.t[(i, cols)].max(0.0) / a;
                leave = match leave {
                    None => Some((i, ratio)),
                    Some((r, best)) => {
                        let better = ratio < best - RATIO_EPS
                            || (ratio <= best + RATIO_EPS && self.basis[i] < self.basis[r]);
                        if better {
                            Some((i, ratio))
                        } else {
                            Some((r, best))
                        }
                    }
                };
            }
            let Some((r, _)) = leave else {
                return Ok(Phase::Unbounded);
            };
            if self.pivots >= self.pivot_limit {
                return Err(MipError::PivotLimit {
                    pivots: self.pivot_limit,
                });
            }
            self.pivot(r, j);
        }
    }

    /// Overwrite the objective row with reduced costs of `cost` for the current basis.
    fn price(&mut self, cost: &[f64]) {
        let (m, cols) = (self.rows(), self.cols());
        for c in 0..=cols {
            let base = if c < cols { cost[c] } else { 0.0 };
            let mut d = base;
            for i in 0..m {
                let cb = cost[self.basis[i]];
                if cb != 0.0 {
                    d -= cb * self.t[(i, c)];
                }
            }
            self.t[(m, c)] = d;
        }
    }
}

pub(crate) fn solve(p: &LpProblem<'_>, pivot_limit: usize) -> Result<LpOutcome, MipError> {
    let n = p.cost.len();

    // Rows over shifted variables, then bound rows.
    let mut rows: Vec<Row> = p
        .rows
        .iter()
        .map(|r| {
            let shift: f64 = r.coefs.iter().map(|&(j, a)| a * p.lb[j]).sum();
            Row {
                coefs: r.coefs.clone(),
                sense: r.sense,
                rhs: r.rhs - shift,
            }
        })
        .collect();
    let model_rows = rows.len();
    for j in 0..n {
        if p.ub[j].is_finite() {
            let span = p.ub[j] - p.lb[j];
            if span < -FEAS_EPS {
                return Ok(LpOutcome::Infeasible);
            }
            rows.push(Row {
                coefs: vec![(j, 1.0)],
                sense: Sense::Le,
                rhs: span.max(0.0),
            });
        }
    }

    let m = rows.len();
    let mut sign = vec![1.0; m];
    for (i, row) in rows.iter_mut().enumerate() {
        if row.rhs < 0.0 {
            sign[i] = -1.0;
            row.rhs = -row.rhs;
            for c in row.coefs.iter_mut() {
                c.1 = -c.1;
            }
            row.sense = match row.sense {
                Sense::Le => Sense::Ge,
                Sense::Ge => Sense::Le,
                Sense::Eq => Sense::Eq,
            };
        }
    }

    let n_slack = rows.iter().filter(|r| r.sense != Sense::Eq).count();
    let n_art = rows.iter().filter(|r| r.sense != Sense::Le).count();
    let cols = n + n_slack + n_art;
    let mut t = DMatrix::<f64>::zeros(m + 1, cols + 1);
    let mut basis = vec![0usize; m];
    let mut ident = vec![0usize; m];
    let mut is_art = vec![false; cols];
    let (mut next_slack, mut next_art) = (n, n + n_slack);
    let mut rhs_scale: f64 = 1.0;
    for (i, row) in rows.iter().enumerate() {
        for &(j, a) in &row.coefs {
            t[(i, j)] += a;
        }
        t[(i, cols)] = row.rhs;
        rhs_scale = rhs_scale.max(row.rhs);
        if row.sense != Sense::Eq {
            t[(i, next_slack)] = if row.sense == Sense::Le { 1.0 } else { -1.0 };
            if row.sense == Sense::Le {
                basis[i] = next_slack;
                ident[i] = next_slack;
            }
            next_slack += 1;
        }
        if row.sense != Sense::Le {
            t[(i, next_art)] = 1.0;
            basis[i] = next_art;
            ident[i] = next_art;
            is_art[next_art] = true;
            next_art += 1;
        }
    }

    let mut tab = Tableau {
        t,
        basis,
        pivots: 0,
        pivot_limit,
    };

    if n_art > 0 {
        let phase1: Vec<f64> = is_art.iter().map(|&a| if a { 1.0 } else { 0.0 }).collect();
        tab.price(&phase1);
        // Phase 1 is bounded below by zero, so only the optimal arm is reachable.
        if let Phase::Unbounded = tab.run(|_| true)? {
            return Ok(LpOutcome::Infeasible);
        }
        if -tab.t[(m, cols)] > FEAS_EPS * rhs_scale {
            return Ok(LpOutcome::Infeasible);
        }
        for r in 0..m {
            if !is_art[tab.basis[r]] {
                continue;
            }
            // Zero-level artificial: swap in any structural/slack column of its row.
            if let Some(j) = (0..cols).find(|&j| !is_art[j] && tab.t[(r, j)].abs() > PIVOT_EPS) {
                tab.pivot(r, j);
            }
        }
    }

    let mut phase2 = vec![0.0; cols];
    phase2[..n].copy_from_slice(p.cost);
    tab.price(&phase2);
    if let Phase::Unbounded = tab.run(|j| !is_art[j])? {
        return Ok(LpOutcome::Unbounded);
    }

    let mut x = p.lb.to_vec();
    for (i, &b) in tab.basis.iter().enumerate() {
        if b < n {
            x[b] += tab.t[(i, cols)].max(0.0);
        }
    }
    let objective = p.cost.iter().zip(&x).map(|(c, v)| c * v).sum();
    let duals = (0..model_rows)
        .map(|i| -sign[i] * tab.t[(m, ident[i])])
        .collect();
    Ok(LpOutcome::Optimal(LpSolution {
        x,
        duals,
        objective,
        pivots: tab.pivots,
    }))
}
