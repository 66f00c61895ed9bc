//! CLI entry point for the search comparison runner.
//!
//! Usage:
//!   jug-search run <cases.json> [options]
//!   jug-search run --stdin [options]
//!
//! Options:
//!   --max-depth <n>   Depth budget for the recursive engine (default: 1000)
//!   --show-paths      Include the best path of each engine in the output
//!
//! The input file holds an array of test cases:
//!   [{"name":"classic","capacities":[8,5,3],"goal":[4]}, ...]
//!
//! Every case is run through all four engines; a failure in one engine is
//! reported in its slot of the JSON output and does not abort the others.

mod backtrack;
mod errors;
mod fingerprint;
mod jugs;
mod problem;
mod record;
mod traversal;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use backtrack::{backtracking_search, backtracking_search_iterative, BacktrackConfig};
use errors::SearchError;
use jugs::{JugState, JugsProblem};
use record::SearchRecord;
use traversal::{breadth_first_search, depth_first_search};

#[derive(Parser)]
#[command(name = "jug-search")]
#[command(about = "Uninformed state-space search engines compared on the n-jugs problem")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all four engines over a file of test cases
    Run {
        /// Path to cases JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read cases from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Depth budget for the recursive backtracking engine
        #[arg(long, default_value = "1000")]
        max_depth: usize,

        /// Include each engine's best path in the output
        #[arg(long)]
        show_paths: bool,
    },
}

/// One test case from the input file
#[derive(Debug, Deserialize)]
struct CaseInput {
    #[serde(default)]
    name: String,
    capacities: Vec<u32>,
    goal: Vec<u32>,
}

/// Per-engine slot of the report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EngineOutput {
    found: bool,
    /// Non-finite costs (unreachable goal, exhausted depth budget)
    /// serialize as null.
    best_cost: f64,
    expanded: usize,
    time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution_depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avg_branching: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_path: Option<Vec<JugState>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl EngineOutput {
    fn from_record(record: SearchRecord<JugState>, time_ms: f64, show_paths: bool) -> Self {
        Self {
            found: record.found,
            best_cost: record.best_cost,
            expanded: record.expanded,
            time_ms,
            solution_depth: record.solution_depth,
            max_depth: record.max_depth,
            avg_branching: record.avg_branching,
            best_path: show_paths.then_some(record.best_path),
            error: None,
        }
    }

    fn failed(error: SearchError, time_ms: f64) -> Self {
        Self {
            found: false,
            best_cost: f64::NAN,
            expanded: 0,
            time_ms,
            solution_depth: None,
            max_depth: None,
            avg_branching: None,
            best_path: None,
            error: Some(error.to_string()),
        }
    }

    fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// One case of the report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CaseOutput {
    name: String,
    capacities: Vec<u32>,
    start: Vec<u32>,
    goal: Vec<u32>,
    backtracking: EngineOutput,
    backtracking_iter: EngineOutput,
    bfs: EngineOutput,
    dfs: EngineOutput,
}

fn run_engine<F>(engine: F, show_paths: bool) -> EngineOutput
where
    F: FnOnce() -> Result<SearchRecord<JugState>, SearchError>,
{
    let started = Instant::now();
    let outcome = engine();
    let time_ms = started.elapsed().as_secs_f64() * 1000.0;
    match outcome {
        Ok(record) => EngineOutput::from_record(record, time_ms, show_paths),
        Err(err) => EngineOutput::failed(err, time_ms),
    }
}

fn run_case(case: &CaseInput, config: &BacktrackConfig, show_paths: bool) -> CaseOutput {
    let problem = JugsProblem::new(&case.capacities, &case.goal);

    CaseOutput {
        name: case.name.clone(),
        capacities: case.capacities.clone(),
        start: vec![0; case.capacities.len()],
        goal: case.goal.clone(),
        backtracking: run_engine(|| backtracking_search(&problem, config), show_paths),
        backtracking_iter: run_engine(|| backtracking_search_iterative(&problem), show_paths),
        bfs: run_engine(|| breadth_first_search(&problem), show_paths),
        dfs: run_engine(|| depth_first_search(&problem), show_paths),
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            stdin,
            max_depth,
            show_paths,
        } => {
            // Read cases JSON
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                std::process::exit(1);
            };

            // Parse cases
            let cases: Vec<CaseInput> = match serde_json::from_str(&json_content) {
                Ok(cases) => cases,
                Err(e) => {
                    eprintln!("Error parsing cases JSON: {}", e);
                    std::process::exit(1);
                }
            };

            let config = BacktrackConfig { max_depth };
            let results: Vec<CaseOutput> = cases
                .iter()
                .map(|case| run_case(case, &config, show_paths))
                .collect();

            println!("{}", serde_json::to_string_pretty(&results).unwrap());

            // Nonzero exit if any engine failed on any case
            let any_error = results.iter().any(|case| {
                case.backtracking.is_error()
                    || case.backtracking_iter.is_error()
                    || case.bfs.is_error()
                    || case.dfs.is_error()
            });
            if any_error {
                std::process::exit(1);
            }
        }
    }
}
