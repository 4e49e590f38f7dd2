use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "minheap workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the heap benchmarks and write a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH_NAME: &str = "min_heap_benchmark";
const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

/// Baseline implementation each group is compared against.
const BASELINES: &[(&str, &str)] = &[
    ("add", "std_binary_heap"),
    ("add_pop", "std_binary_heap"),
    ("delete", "rebuild"),
];

/// group -> size -> implementation -> elements per second
type Results = BTreeMap<String, BTreeMap<u64, BTreeMap<String, f64>>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running {BENCH_NAME}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .args(["bench", "-p", "minheap", "--bench", BENCH_NAME]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to launch cargo bench for {BENCH_NAME}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH_NAME} failed with {status}");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new(CRITERION_DIR);
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    for (group, _) in BASELINES {
        collect_group(&criterion_dir.join(group), group, &mut results)
            .with_context(|| format!("Failed to read results for group {group}"))?;
    }

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# minheap Benchmark Report")?;

    for (group, baseline) in BASELINES {
        let Some(sizes) = results.get(*group) else {
            continue;
        };

        writeln!(file)?;
        writeln!(file, "## {group}")?;
        writeln!(file)?;
        writeln!(file, "| Size | Implementation | Elements/s | vs {baseline} |")?;
        writeln!(file, "|---|---|---|---|")?;

        for (size, impls) in sizes {
            let base = impls.get(*baseline).copied().unwrap_or(0.0);
            for (name, ops) in impls {
                let rel = if base > 0.0 { ops / base } else { 0.0 };
                writeln!(
                    file,
                    "| {size} | {name} | {} | **{rel:.2}x** |",
                    format_rate(*ops)
                )?;
            }
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_rate(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

// Layout: <group>/<implementation>/<size>/new/{estimates,benchmark}.json
fn collect_group(group_dir: &Path, group: &str, results: &mut Results) -> Result<()> {
    if !group_dir.exists() {
        return Ok(());
    }

    for implementation in fs::read_dir(group_dir)?.flatten() {
        let impl_path = implementation.path();
        let impl_name = implementation.file_name().to_string_lossy().into_owned();
        if !impl_path.is_dir() || impl_name == "report" {
            continue;
        }

        for size_entry in fs::read_dir(&impl_path)?.flatten() {
            let Ok(size) = size_entry.file_name().to_string_lossy().parse::<u64>() else {
                continue;
            };
            let run_dir = size_entry.path().join("new");
            if let Some(rate) = read_rate(&run_dir)? {
                results
                    .entry(group.to_string())
                    .or_default()
                    .entry(size)
                    .or_default()
                    .insert(impl_name.clone(), rate);
            }
        }
    }

    Ok(())
}

fn read_rate(run_dir: &Path) -> Result<Option<f64>> {
    let estimates_path = run_dir.join("estimates.json");
    if !estimates_path.exists() {
        return Ok(None);
    }

    let estimates: serde_json::Value = serde_json::from_str(&fs::read_to_string(&estimates_path)?)
        .with_context(|| format!("Malformed {}", estimates_path.display()))?;
    let time_ns = estimates
        .get("mean")
        .and_then(|m| m.get("point_estimate"))
        .and_then(serde_json::Value::as_f64)
        .unwrap_or(0.0);
    if time_ns <= 0.0 {
        return Ok(None);
    }

    // Throughput is recorded per benchmark; fall back to one iteration.
    let mut elements = 1.0;
    if let Ok(content) = fs::read_to_string(run_dir.join("benchmark.json")) {
        let benchmark: serde_json::Value = serde_json::from_str(&content)?;
        if let Some(e) = benchmark
            .get("throughput")
            .and_then(|t| t.get("Elements"))
            .and_then(serde_json::Value::as_f64)
        {
            elements = e;
        }
    }

    Ok(Some(elements * 1e9 / time_ns))
}
