//! Built-in backend: `DenseSolver` session and `DenseModel`.

use std::time::{Duration, Instant};

use super::branch;
use super::cfg::MipCfg;
use super::simplex::{self, LpOutcome, LpProblem, LpSolution, Row};
use super::{ConstrId, LinExpr, MipError, Model, Sense, Solver, VarId, VarKind};

/// Session for the dense backend. Cheap to share by reference; every
/// `model` call starts from an empty model.
#[derive(Clone, Copy, Debug, Default)]
pub struct DenseSolver {
    pub cfg: MipCfg,
}

impl DenseSolver {
    pub fn new(cfg: MipCfg) -> Self {
        Self { cfg }
    }
}

impl Solver for DenseSolver {
    type Model = DenseModel;

    fn model(&self, name: &str) -> DenseModel {
        DenseModel::new(name, self.cfg)
    }
}

#[derive(Clone, Debug)]
struct VarSpec {
    name: String,
    kind: VarKind,
    lb: f64,
    ub: f64,
}

#[derive(Clone, Debug)]
pub struct DenseModel {
    name: String,
    cfg: MipCfg,
    quiet: bool,
    vars: Vec<VarSpec>,
    rows: Vec<Row>,
    row_names: Vec<String>,
    objective: Vec<f64>,
    solution: Option<LpSolution>,
    runtime: Duration,
}

impl DenseModel {
    pub fn new(name: &str, cfg: MipCfg) -> Self {
        Self {
            name: name.to_string(),
            cfg,
            quiet: false,
            vars: Vec::new(),
            rows: Vec::new(),
            row_names: Vec::new(),
            objective: Vec::new(),
            solution: None,
            runtime: Duration::ZERO,
        }
    }

    #[cfg(test)]
    pub(crate) fn constr_name(&self, c: ConstrId) -> Option<&str> {
        self.row_names.get(c.0).map(String::as_str)
    }

    fn solved(&self) -> Result<&LpSolution, MipError> {
        self.solution.as_ref().ok_or(MipError::NotSolved)
    }
}

impl Model for DenseModel {
    fn add_var(&mut self, name: &str, kind: VarKind, lb: f64, ub: f64) -> VarId {
        self.solution = None;
        self.vars.push(VarSpec {
            name: name.to_string(),
            kind,
            lb,
            ub,
        });
        self.objective.push(0.0);
        VarId(self.vars.len() - 1)
    }

    fn add_constr(&mut self, name: &str, expr: LinExpr, sense: Sense, rhs: f64) -> ConstrId {
        self.solution = None;
        self.rows.push(Row {
            coefs: expr.terms.into_iter().map(|(v, a)| (v.0, a)).collect(),
            sense,
            rhs,
        });
        self.row_names.push(name.to_string());
        ConstrId(self.rows.len() - 1)
    }

    fn set_objective(&mut self, expr: LinExpr) {
        self.solution = None;
        self.objective.iter_mut().for_each(|c| *c = 0.0);
        for (v, a) in expr.terms {
            self.objective[v.0] += a;
        }
    }

    fn optimize(&mut self) -> Result<(), MipError> {
        let start = Instant::now();
        self.solution = None;
        if let Some(v) = self.vars.iter().find(|v| !v.lb.is_finite()) {
            return Err(MipError::UnsupportedBound {
                var: v.name.clone(),
            });
        }
        let lb: Vec<f64> = self.vars.iter().map(|v| v.lb).collect();
        let ub: Vec<f64> = self.vars.iter().map(|v| v.ub).collect();
        let integer: Vec<bool> = self
            .vars
            .iter()
            .map(|v| v.kind == VarKind::Integer)
            .collect();
        let problem = LpProblem {
            cost: &self.objective,
            lb: &lb,
            ub: &ub,
            rows: &self.rows,
        };
        let outcome = if integer.iter().any(|&b| b) {
            branch::solve(&problem, &integer, &self.cfg)
        } else {
            simplex::solve(&problem, self.cfg.pivot_limit)
        };
        self.runtime = start.elapsed();
        match outcome? {
            LpOutcome::Optimal(sol) => {
                if !self.quiet {
                    tracing::debug!(
                        model = %self.name,
                        vars = self.vars.len(),
                        rows = self.rows.len(),
                        pivots = sol.pivots,
                        objective = sol.objective,
                        "optimize"
                    );
                }
                self.solution = Some(sol);
                Ok(())
            }
            LpOutcome::Infeasible => Err(MipError::Infeasible {
                model: self.name.clone(),
            }),
            LpOutcome::Unbounded => Err(MipError::Unbounded {
                model: self.name.clone(),
            }),
        }
    }

    fn value(&self, var: VarId) -> Result<f64, MipError> {
        self.solved()?
            .x
            .get(var.0)
            .copied()
            .ok_or(MipError::NotSolved)
    }

    fn dual(&self, constr: ConstrId) -> Result<f64, MipError> {
        self.solved()?
            .duals
            .get(constr.0)
            .copied()
            .ok_or(MipError::NotSolved)
    }

    fn objective_value(&self) -> Result<f64, MipError> {
        Ok(self.solved()?.objective)
    }

    fn runtime(&self) -> Duration {
        self.runtime
    }

    fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    fn num_constrs(&self) -> usize {
        self.rows.len()
    }
}
