use std::error::Error;
use std::io::{self, Write};

use clap::{Args, Subcommand};
use switch_core::RngHandle;
use switch_graph::DirectedDegree;
use switch_mcmc::{
    estimate_iterations, sample_bipartite_graph, sample_directed_graph, sample_multi_hypergraph,
    sample_simple_graph,
};

#[derive(Args, Debug)]
pub struct SampleArgs {
    #[command(subcommand)]
    pub family: Family,
    /// Switches applied after the greedy construction; estimated when omitted.
    #[arg(long, global = true)]
    pub iterations: Option<usize>,
    /// Seed for the switch chain.
    #[arg(long, global = true, default_value_t = 0)]
    pub seed: u64,
}

#[derive(Subcommand, Debug)]
pub enum Family {
    /// Bipartite graph; prints `x y` per edge.
    Bipartite {
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        x_degrees: Vec<usize>,
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        y_degrees: Vec<usize>,
    },
    /// Simple graph; prints `u v` per edge with `u < v`.
    Simple {
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        degrees: Vec<usize>,
    },
    /// Loopless directed graph; prints `from to` per arc.
    Directed {
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        out_degrees: Vec<usize>,
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        in_degrees: Vec<usize>,
    },
    /// Multi-hypergraph; prints the members of one hyperedge per line.
    Hypergraph {
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        degrees: Vec<usize>,
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        edge_sizes: Vec<usize>,
    },
}

pub fn run(args: &SampleArgs) -> Result<(), Box<dyn Error>> {
    let mut rng = RngHandle::from_seed(args.seed);
    let iterations = |degrees: &[usize]| iterations_for(args, degrees);
    let lines: Vec<String> = match &args.family {
        Family::Bipartite {
            x_degrees,
            y_degrees,
        } => sample_bipartite_graph(x_degrees, y_degrees, iterations(x_degrees.as_slice()), &mut rng)?
            .into_iter()
            .map(|(x, y)| format!("{x} {y}"))
            .collect(),
        Family::Simple { degrees } => {
            sample_simple_graph(degrees, iterations(degrees.as_slice()), &mut rng)?
                .into_iter()
                .map(|(u, v)| format!("{u} {v}"))
                .collect()
        }
        Family::Directed {
            out_degrees,
            in_degrees,
        } => {
            if out_degrees.len() != in_degrees.len() {
                return Err(format!(
                    "--out-degrees has {} entries but --in-degrees has {}",
                    out_degrees.len(),
                    in_degrees.len()
                )
                .into());
            }
            let sequence: Vec<DirectedDegree> = out_degrees
                .iter()
                .zip(in_degrees)
                .map(|(&out, &inn)| DirectedDegree::new(out, inn))
                .collect();
            sample_directed_graph(&sequence, iterations(out_degrees.as_slice()), &mut rng)?
                .into_iter()
                .map(|(from, to)| format!("{from} {to}"))
                .collect()
        }
        Family::Hypergraph {
            degrees,
            edge_sizes,
        } => sample_multi_hypergraph(degrees, edge_sizes, iterations(degrees.as_slice()), &mut rng)?
            .into_iter()
            .map(|members| {
                members
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    tracing::info!(edges = lines.len(), seed = args.seed, "sample written");
    Ok(())
}

fn iterations_for(args: &SampleArgs, degrees: &[usize]) -> usize {
    args.iterations
        .unwrap_or_else(|| estimate_iterations(degrees, 1e-3) as usize)
}
