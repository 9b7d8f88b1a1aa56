use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the trip analytics workspace",
    long_about = "A unified CLI for running the analyzer, batch reports,\n\
                  benchmarks, and CI checks in the trip analytics workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a trips file (synthesized when no input is given)
    Run {
        /// Path to an existing trips CSV
        #[arg(long)]
        input: Option<String>,
    },
    /// Run the parallel batch-report example
    Batch,
    /// Run Criterion benchmarks
    Bench,
    /// Run load tests (ignored tests in trip_core)
    LoadTest,
    /// Run CI checks (fmt, clippy, tests, examples, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run examples
    Examples,
    /// Run benchmarks
    Bench,
    /// Run check + examples + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

// ── jobs ───────────────────────────────────────────────────────────

fn ci_check() {
    step("cargo fmt --check");
    run_cargo(&["fmt", "--all", "--", "--check"]);
    step("cargo clippy");
    run_cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"]);
    step("cargo test");
    run_cargo(&["test", "--workspace"]);
}

fn ci_examples() {
    step("analyze_run example");
    run_cargo(&["run", "-p", "trip_core", "--release", "--example", "analyze_run"]);
    step("batch_report example");
    run_cargo(&["run", "-p", "trip_reports", "--release", "--example", "batch_report"]);
}

fn ci_bench() {
    step("criterion benches");
    run_cargo(&["bench", "-p", "trip_core"]);
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input } => {
            let mut args = vec!["run", "-p", "trip_core", "--release", "--example", "analyze_run"];
            if let Some(ref input) = input {
                args.push("--");
                args.push(input);
            }
            run_cargo(&args);
        }
        Commands::Batch => {
            run_cargo(&["run", "-p", "trip_reports", "--release", "--example", "batch_report"]);
        }
        Commands::Bench => ci_bench(),
        Commands::LoadTest => {
            step("load tests");
            run_cargo(&[
                "test",
                "-p",
                "trip_core",
                "--release",
                "--test",
                "load_tests",
                "--",
                "--ignored",
            ]);
        }
        Commands::Ci { job } => match job {
            CiJob::Check => ci_check(),
            CiJob::Examples => ci_examples(),
            CiJob::Bench => ci_bench(),
            CiJob::All => {
                ci_check();
                ci_examples();
                ci_bench();
            }
        },
    }
}
