use super::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

const INF: f64 = f64::INFINITY;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn lp_covering_primal_and_duals() {
    // min x + y  s.t.  x + 2y >= 2,  3x + y >= 3
    let mut m = DenseSolver::default().model("cover");
    let x = m.add_var("x", VarKind::Continuous, 0.0, INF);
    let y = m.add_var("y", VarKind::Continuous, 0.0, INF);
    let r1 = m.add_constr("r1", LinExpr::new().with(x, 1.0).with(y, 2.0), Sense::Ge, 2.0);
    let r2 = m.add_constr("r2", LinExpr::new().with(x, 3.0).with(y, 1.0), Sense::Ge, 3.0);
    m.set_objective(LinExpr::new().with(x, 1.0).with(y, 1.0));
    m.optimize().unwrap();
    assert!(close(m.objective_value().unwrap(), 1.4));
    assert!(close(m.value(x).unwrap(), 0.8));
    assert!(close(m.value(y).unwrap(), 0.6));
    assert!(close(m.dual(r1).unwrap(), 0.4));
    assert!(close(m.dual(r2).unwrap(), 0.2));
    assert_eq!(m.num_constrs(), 2);
    assert_eq!(m.constr_name(r2), Some("r2"));
}

#[test]
fn lp_upper_bounds_and_equalities() {
    // min x  s.t.  x + y == 5,  y <= 2 (bound)
    let mut m = DenseSolver::default().model("eq");
    let x = m.add_var("x", VarKind::Continuous, 0.0, INF);
    let y = m.add_var("y", VarKind::Continuous, 0.0, 2.0);
    let row = m.add_constr("sum", LinExpr::new().with(x, 1.0).with(y, 1.0), Sense::Eq, 5.0);
    m.set_objective(LinExpr::new().with(x, 1.0));
    m.optimize().unwrap();
    assert!(close(m.value(x).unwrap(), 3.0));
    assert!(close(m.value(y).unwrap(), 2.0));
    assert!(close(m.dual(row).unwrap(), 1.0));

    // max x + y  s.t.  x + y <= 4,  x <= 3,  y >= 1
    let mut m = DenseSolver::default().model("le");
    let x = m.add_var("x", VarKind::Continuous, 0.0, 3.0);
    let y = m.add_var("y", VarKind::Continuous, 1.0, INF);
    m.add_constr("cap", LinExpr::new().with(x, 1.0).with(y, 1.0), Sense::Le, 4.0);
    m.set_objective(LinExpr::new().with(x, -1.0).with(y, -1.0));
    m.optimize().unwrap();
    assert!(close(m.objective_value().unwrap(), -4.0));
    assert!(m.value(y).unwrap() >= 1.0 - 1e-9);
}

#[test]
fn negated_rows_report_original_dual_sign() {
    // min 2x + y  s.t.  -x - y <= -3
    let mut m = DenseSolver::default().model("neg");
    let x = m.add_var("x", VarKind::Continuous, 0.0, INF);
    let y = m.add_var("y", VarKind::Continuous, 0.0, INF);
    let row = m.add_constr("r", LinExpr::new().with(x, -1.0).with(y, -1.0), Sense::Le, -3.0);
    m.set_objective(LinExpr::new().with(x, 2.0).with(y, 1.0));
    m.optimize().unwrap();
    assert!(close(m.objective_value().unwrap(), 3.0));
    assert!(close(m.value(y).unwrap(), 3.0));
    assert!(close(m.dual(row).unwrap(), -1.0));
}

#[test]
fn infeasible_and_unbounded_are_errors() {
    let mut m = DenseSolver::default().model("infeasible");
    let x = m.add_var("x", VarKind::Continuous, 0.0, INF);
    m.add_constr("lo", LinExpr::new().with(x, 1.0), Sense::Ge, 2.0);
    m.add_constr("hi", LinExpr::new().with(x, 1.0), Sense::Le, 1.0);
    m.set_objective(LinExpr::new().with(x, 1.0));
    assert_eq!(
        m.optimize(),
        Err(MipError::Infeasible {
            model: "infeasible".into()
        })
    );
    assert_eq!(m.value(x), Err(MipError::NotSolved));

    let mut m = DenseSolver::default().model("unbounded");
    let x = m.add_var("x", VarKind::Continuous, 0.0, INF);
    m.set_objective(LinExpr::new().with(x, -1.0));
    assert!(matches!(m.optimize(), Err(MipError::Unbounded { .. })));
}

#[test]
fn free_lower_bound_is_rejected() {
    let mut m = DenseSolver::default().model("free");
    m.add_var("z", VarKind::Continuous, f64::NEG_INFINITY, INF);
    assert_eq!(
        m.optimize(),
        Err(MipError::UnsupportedBound { var: "z".into() })
    );
}

#[test]
fn empty_lp_sits_at_lower_bounds() {
    let mut m = DenseSolver::default().model("empty");
    let x = m.add_var("x", VarKind::Continuous, 0.0, INF);
    let y = m.add_var("y", VarKind::Continuous, 0.0, INF);
    m.set_objective(LinExpr::new().with(x, 0.5).with(y, 1.0));
    m.optimize().unwrap();
    assert_eq!(m.value(x).unwrap(), 0.0);
    assert_eq!(m.objective_value().unwrap(), 0.0);
}

#[test]
fn milp_branches_to_integer_optimum() {
    // max 5x + 4y  s.t.  6x + 4y <= 24,  x + 2y <= 6,  x, y integer
    let mut m = DenseSolver::default().model("knap");
    let x = m.add_var("x", VarKind::Integer, 0.0, INF);
    let y = m.add_var("y", VarKind::Integer, 0.0, INF);
    m.add_constr("a", LinExpr::new().with(x, 6.0).with(y, 4.0), Sense::Le, 24.0);
    m.add_constr("b", LinExpr::new().with(x, 1.0).with(y, 2.0), Sense::Le, 6.0);
    m.set_objective(LinExpr::new().with(x, -5.0).with(y, -4.0));
    m.optimize().unwrap();
    assert!(close(m.objective_value().unwrap(), -20.0));
    assert_eq!(m.value(x).unwrap(), 4.0);
    assert_eq!(m.value(y).unwrap(), 0.0);
}

#[test]
fn milp_parity_needs_even_value() {
    // x in {0,1,2}, x == 2d, d >= 1: the only feasible x is 2.
    let mut m = DenseSolver::default().model("parity");
    let x = m.add_var("x", VarKind::Integer, 0.0, 2.0);
    let d = m.add_var("d", VarKind::Integer, 1.0, INF);
    m.add_constr("deg", LinExpr::new().with(x, 1.0).with(d, -2.0), Sense::Eq, 0.0);
    m.set_objective(LinExpr::new().with(x, 1.0));
    m.optimize().unwrap();
    assert_eq!(m.value(x).unwrap(), 2.0);
    assert_eq!(m.value(d).unwrap(), 1.0);
}

#[test]
fn milp_node_limit_surfaces() {
    let solver = DenseSolver::new(MipCfg {
        pivot_limit: 1_000,
        node_limit: 1,
    });
    let mut m = solver.model("limited");
    let x = m.add_var("x", VarKind::Integer, 0.0, 10.0);
    m.add_constr("half", LinExpr::new().with(x, 2.0), Sense::Ge, 3.0);
    m.set_objective(LinExpr::new().with(x, 1.0));
    assert_eq!(m.optimize(), Err(MipError::NodeLimit { nodes: 1 }));
}

#[test]
fn random_covering_lps_satisfy_strong_duality() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let n = rng.gen_range(2..7);
        let rows = rng.gen_range(1..9);
        let mut m = DenseSolver::default().model("rand");
        let vars: Vec<VarId> = (0..n)
            .map(|j| m.add_var(&format!("c{j}"), VarKind::Continuous, 0.0, INF))
            .collect();
        let weights: Vec<f64> = (0..n).map(|_| rng.gen_range(0.1..1.0)).collect();
        let mut a = vec![vec![0.0; n]; rows];
        let mut constrs = Vec::new();
        for (i, row) in a.iter_mut().enumerate() {
            for v in row.iter_mut() {
                *v = rng.gen_range(0..3) as f64;
            }
            row[i % n] = row[i % n].max(1.0);
            let expr = vars.iter().zip(row.iter()).map(|(&v, &c)| (v, c)).collect();
            constrs.push(m.add_constr("walk", expr, Sense::Ge, 1.0));
        }
        m.set_objective(vars.iter().zip(&weights).map(|(&v, &w)| (v, w)).collect());
        m.optimize().unwrap();

        let opt = m.objective_value().unwrap();
        let duals: Vec<f64> = constrs.iter().map(|&c| m.dual(c).unwrap()).collect();
        let values: Vec<f64> = vars.iter().map(|&v| m.value(v).unwrap()).collect();
        assert!(duals.iter().all(|&y| y >= -1e-9));
        assert!((duals.iter().sum::<f64>() - opt).abs() < 1e-7);
        for (row, &y) in a.iter().zip(&duals) {
            let lhs: f64 = row.iter().zip(&values).map(|(a, c)| a * c).sum();
            assert!(lhs >= 1.0 - 1e-7);
            // complementary slackness
            assert!(y < 1e-9 || (lhs - 1.0).abs() < 1e-7);
        }
        // dual feasibility: Σ_i y_i a_ij <= w_j
        for j in 0..n {
            let used: f64 = a.iter().zip(&duals).map(|(row, y)| row[j] * y).sum();
            assert!(used <= weights[j] + 1e-7);
        }
    }
}
