use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use sepgap::api::*;

mod dataset;
mod provenance;

use dataset::{AncestorRow, RefineRow};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "sepgap")]
#[command(about = "Integrality-gap bounds for SEP vertices: batch drivers")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance sidecars
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Select ancestors of order k from vertices_{n}.txt, n in k+3..=2k
    Ancestors {
        #[arg(long, default_value_t = 3)]
        k_min: usize,
        #[arg(long, default_value_t = 6)]
        k_max: usize,
        #[arg(long)]
        vertices_dir: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
    },
    /// Refine the family-gap of every ancestor of order k
    Refine {
        #[arg(long, default_value_t = 3)]
        k_min: usize,
        #[arg(long, default_value_t = 5)]
        k_max: usize,
        #[arg(long)]
        ancestors_dir: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        #[arg(long, default_value = "4/3", value_parser = rational)]
        target: f64,
        #[arg(long, default_value_t = 12)]
        max_iterations: usize,
        #[command(flatten)]
        gap: GapArgs,
    },
    /// Gap report of a single vertex, printed as JSON
    Gap {
        #[arg(long)]
        n: usize,
        /// Vertex line in canonical edge order
        #[arg(long)]
        vertex: String,
        #[command(flatten)]
        gap: GapArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Copy)]
struct GapArgs {
    #[arg(long, default_value_t = 1e-5)]
    tol: f64,
    #[arg(long, default_value_t = 10_000)]
    max_rows: usize,
    #[arg(long, default_value_t = 10_000)]
    max_cuts: usize,
}

impl From<GapArgs> for GapCfg {
    fn from(a: GapArgs) -> Self {
        GapCfg {
            tol: a.tol,
            max_rows: a.max_rows,
            max_cuts: a.max_cuts,
            ..GapCfg::default()
        }
    }
}

fn rational(s: &str) -> Result<f64, String> {
    parse_rational(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Ancestors {
            k_min,
            k_max,
            vertices_dir,
            out_dir,
        } => ancestors(k_min, k_max, &vertices_dir, &out_dir, cmd.tag),
        Action::Refine {
            k_min,
            k_max,
            ancestors_dir,
            out_dir,
            target,
            max_iterations,
            gap,
        } => {
            let rcfg = RefineCfg {
                target,
                max_iterations,
            };
            refine_ancestors(k_min, k_max, &ancestors_dir, &out_dir, &rcfg, &gap.into(), cmd.tag)
        }
        Action::Gap { n, vertex, gap } => gap_report(n, &vertex, &gap.into()),
        Action::Report => report(cmd.tag),
    }
}

fn ancestors(
    k_min: usize,
    k_max: usize,
    vertices_dir: &Path,
    out_dir: &Path,
    tag: Option<String>,
) -> Result<()> {
    for k in k_min..=k_max {
        println!("Retrieving ancestors of order {k}...");
        let mut rows = Vec::new();
        let mut inputs = Vec::new();
        for n in k + 3..=2 * k {
            let path = dataset::vertices_path(vertices_dir, n);
            let lines = dataset::read_vertex_lines(&path)?;
            let before = rows.len();
            for (i, line) in lines.into_iter().enumerate() {
                let x = line_to_vertex(n, &line)
                    .with_context(|| format!("{}: line {}", path.display(), i + 1))?;
                if is_ancestor(n, &x, k) {
                    rows.push(AncestorRow { n, xi: line });
                }
            }
            tracing::info!(k, n, found = rows.len() - before, tag = ?tag, "ancestors");
            inputs.push(path);
        }
        let out = dataset::ancestors_path(out_dir, k);
        dataset::write_ancestors(&out, &rows)?;
        let payload = Payload::new(json!({ "k": k }), tag.clone()).with_inputs(&inputs);
        provenance::write_sidecar(&out, payload)?;
    }
    Ok(())
}

fn refine_ancestors(
    k_min: usize,
    k_max: usize,
    ancestors_dir: &Path,
    out_dir: &Path,
    rcfg: &RefineCfg,
    cfg: &GapCfg,
    tag: Option<String>,
) -> Result<()> {
    let solver = DenseSolver::default();
    for k in k_min..=k_max {
        println!("Refining family gaps on ancestors of order {k}...");
        let input = dataset::ancestors_path(ancestors_dir, k);
        let mut rows = Vec::new();
        for anc in dataset::read_ancestors(&input)? {
            let x0 = line_to_vertex(anc.n, &anc.xi)
                .with_context(|| format!("{}: n = {}", input.display(), anc.n))?;
            let report = refine(&solver, anc.n, &x0, cfg, rcfg)
                .with_context(|| format!("refining {} on n = {}", anc.xi, anc.n))?;
            tracing::info!(
                k,
                n = anc.n,
                gap = report.gap,
                family_gap = report.family_gap,
                iterations = report.outcome.sentinel(),
                tag = ?tag,
                "refined"
            );
            rows.push(RefineRow {
                n: anc.n,
                x0: anc.xi,
                gap: report.gap,
                family_gap: report.family_gap,
                num_iterations: report.outcome.sentinel(),
            });
        }
        let out = dataset::refine_path(out_dir, k);
        dataset::write_refine(&out, &rows)?;
        let params = json!({
            "k": k,
            "target": rcfg.target,
            "max_iterations": rcfg.max_iterations,
            "tol": cfg.tol,
            "max_rows": cfg.max_rows,
            "max_cuts": cfg.max_cuts,
        });
        provenance::write_sidecar(&out, Payload::new(params, tag.clone()).with_inputs([&input]))?;
    }
    Ok(())
}

/// JSON view of a gap report.
#[derive(Debug, Serialize)]
struct GapSummary {
    n: usize,
    opt: f64,
    gap: f64,
    family_gap: f64,
    worst_one_edge: Option<(usize, usize)>,
    worst_factor: f64,
    certificate_walks: usize,
    runtime_ms: f64,
}

fn summarize(n: usize, vertex: &str, cfg: &GapCfg) -> Result<GapSummary> {
    let x = line_to_vertex(n, vertex)?;
    let report = family_gap(&DenseSolver::default(), n, &x, &[], cfg)?;
    Ok(GapSummary {
        n,
        opt: report.opt,
        gap: report.gap,
        family_gap: report.family_gap,
        worst_one_edge: report.worst_one_edge.map(|e| (e.0, e.1)),
        worst_factor: report.worst_factor,
        certificate_walks: report.certificate.len(),
        runtime_ms: report.runtime.as_secs_f64() * 1e3,
    })
}

fn gap_report(n: usize, vertex: &str, cfg: &GapCfg) -> Result<()> {
    let summary = summarize(n, vertex, cfg)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "sepgap": sepgap::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
