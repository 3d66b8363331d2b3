use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};
use switch_graph::{BipartiteGraph, SwitchGraph};
use switch_mcmc::{job_rng, Chain};

const RESULTS_FILE: &str = "mcmc_results.csv";

#[derive(Args, Debug)]
pub struct SimpleProbabilityArgs {
    /// YAML sweep plan; replaces the grid flags below.
    #[arg(long)]
    pub plan: Option<PathBuf>,
    /// Vertex counts `n`.
    #[arg(short = 'n', long, value_delimiter = ',', num_args = 1.., required_unless_present = "plan")]
    pub nodes: Vec<usize>,
    /// Regular vertex degrees `d`.
    #[arg(short = 'd', long, value_delimiter = ',', num_args = 1.., required_unless_present = "plan")]
    pub degrees: Vec<usize>,
    /// Uniform hyperedge sizes `r`.
    #[arg(short = 'e', long, value_delimiter = ',', num_args = 1.., required_unless_present = "plan")]
    pub edge_sizes: Vec<usize>,
    #[arg(long, default_value_t = 1_000_000)]
    pub iterations: usize,
    #[arg(long, default_value_t = 100)]
    pub burn_in: usize,
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Directory receiving `mcmc_results.csv`; created when missing.
    #[arg(short = 'o', long, default_value = "output")]
    pub out: PathBuf,
}

/// Grid of regular uniform parameters swept by the experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepPlan {
    pub nodes: Vec<usize>,
    pub degrees: Vec<usize>,
    pub edge_sizes: Vec<usize>,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_burn_in")]
    pub burn_in: usize,
    #[serde(default)]
    pub seed: u64,
}

fn default_iterations() -> usize {
    1_000_000
}

fn default_burn_in() -> usize {
    100
}

impl SweepPlan {
    fn from_args(args: &SimpleProbabilityArgs) -> Self {
        Self {
            nodes: args.nodes.clone(),
            degrees: args.degrees.clone(),
            edge_sizes: args.edge_sizes.clone(),
            iterations: args.iterations,
            burn_in: args.burn_in,
            seed: args.seed,
        }
    }

    /// Every `(n, d, r)` in the grid, in nested flag order.
    fn jobs(&self) -> Vec<(usize, usize, usize)> {
        let mut jobs = Vec::new();
        for &n in &self.nodes {
            for &d in &self.degrees {
                for &r in &self.edge_sizes {
                    jobs.push((n, d, r));
                }
            }
        }
        jobs
    }
}

#[derive(Debug, Serialize)]
struct ResultRow {
    nodes: usize,
    degree: usize,
    edge_size: usize,
    samples: usize,
    simple_samples: usize,
}

pub fn run(args: &SimpleProbabilityArgs) -> Result<(), Box<dyn Error>> {
    let plan: SweepPlan = match &args.plan {
        Some(path) => serde_yaml::from_str(&fs::read_to_string(path)?)?,
        None => SweepPlan::from_args(args),
    };
    fs::create_dir_all(&args.out)?;
    let out_path = args.out.join(RESULTS_FILE);
    if out_path.exists() {
        return Err(format!("{} already exists; refusing to overwrite", out_path.display()).into());
    }

    let mut rows = Vec::new();
    for (job_index, (n, d, r)) in plan.jobs().into_iter().enumerate() {
        let Some(row) = run_job(&plan, job_index, n, d, r)? else {
            continue;
        };
        tracing::info!(
            nodes = n,
            degree = d,
            edge_size = r,
            samples = row.samples,
            simple_samples = row.simple_samples,
            "parameters completed"
        );
        rows.push(row);
    }
    write_rows(&out_path, &rows)?;
    Ok(())
}

fn run_job(
    plan: &SweepPlan,
    job_index: usize,
    n: usize,
    d: usize,
    r: usize,
) -> Result<Option<ResultRow>, Box<dyn Error>> {
    let Some(stubs) = n.checked_mul(d) else {
        tracing::warn!(nodes = n, degree = d, edge_size = r, "stub count overflows");
        return Ok(None);
    };
    if r == 0 || stubs % r != 0 {
        tracing::warn!(nodes = n, degree = d, edge_size = r, "no regular uniform hypergraph exists");
        return Ok(None);
    }
    let edges = stubs / r;
    let mut row = ResultRow {
        nodes: n,
        degree: d,
        edge_size: r,
        samples: 0,
        simple_samples: 0,
    };
    let mut graph = match BipartiteGraph::from_degree_sequence(&vec![d; n], &vec![r; edges]) {
        Ok(graph) => graph,
        Err(err) => {
            tracing::warn!(nodes = n, degree = d, edge_size = r, error = %err, "could not build graph");
            return Ok(Some(row));
        }
    };
    let mut chain = Chain::new(&mut graph, job_rng(plan.seed, job_index));
    let history = chain.mcmc(
        plan.iterations,
        Some(|g: &BipartiteGraph| g.simple()),
        1,
        plan.burn_in,
    )?;
    row.samples = history.len();
    row.simple_samples = history.iter().filter(|&&simple| simple).count();
    Ok(Some(row))
}

fn write_rows(path: &Path, rows: &[ResultRow]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    if rows.is_empty() {
        writer.write_record(["nodes", "degree", "edge_size", "samples", "simple_samples"])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
