//! Benchmark driver: times the serial baseline and the three parallel
//! row-partitioning strategies across matrix sizes and thread counts,
//! validating every parallel result against the baseline and appending
//! the timings to per-size CSV files.

use std::path::Path;
use std::time::Instant;

use mb_matrix::{multiply_serial, validate, Approach};
use mb_store::{append_metrics, ensure_matrix_files, PerformanceMetric, Result};

const DEFAULT_SIZES: [usize; 3] = [256, 512, 1024];
const DEFAULT_THREADS: [usize; 5] = [2, 4, 8, 16, 32];

fn main() {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("usage: mb-bench [--sizes N,N,...] [--threads N,N,...]");
            std::process::exit(1);
        }
    };

    println!("Matrix Multiplication Benchmark");
    println!("==============================");

    // One failing size does not stop the remaining sizes.
    for &size in &config.sizes {
        if let Err(e) = run_benchmark(
            size,
            &config.threads,
            Path::new("matrices"),
            Path::new("results"),
        ) {
            eprintln!("error: benchmark for size {} failed: {}", size, e);
        }
    }
}

/// Benchmark one matrix size across all configured thread counts.
///
/// Inputs are loaded from (or generated into) `matrices_dir`; the serial
/// kernel runs once as the timing and correctness baseline; each parallel
/// strategy then runs per thread count. A validation failure is reported
/// on the console and the run continues. Metrics for the size are
/// appended to `results_dir/performance_{size}.csv`.
fn run_benchmark(
    size: usize,
    thread_counts: &[usize],
    matrices_dir: &Path,
    results_dir: &Path,
) -> Result<()> {
    println!("\nRunning benchmark for {}x{} matrices", size, size);
    println!("================================================");

    std::fs::create_dir_all(matrices_dir)?;
    std::fs::create_dir_all(results_dir)?;

    let path_a = matrices_dir.join(format!("matrix_a_{}.bin", size));
    let path_b = matrices_dir.join(format!("matrix_b_{}.bin", size));
    let (a, b) = ensure_matrix_files(size, &path_a, &path_b)?;

    let mut metrics = Vec::new();

    println!("\nRunning serial implementation...");
    let (baseline, serial_ms) = time_millis(|| multiply_serial(&a, &b));
    let baseline = baseline?;
    println!("Serial execution time: {:.3} ms", serial_ms);
    metrics.push(PerformanceMetric {
        matrix_size: size,
        num_threads: 1,
        approach: Approach::Serial,
        execution_time_ms: serial_ms,
    });

    for &threads in thread_counts {
        println!("\nTesting with {} threads:", threads);
        for approach in Approach::PARALLEL {
            let (result, ms) = time_millis(|| approach.run(&a, &b, threads));
            let result = result?;
            if validate(&baseline, &result) {
                println!("{}: {:.3} ms (validation passed)", approach, ms);
            } else {
                println!(
                    "{}: {:.3} ms (validation FAILED: results differ from serial)",
                    approach, ms
                );
            }
            metrics.push(PerformanceMetric {
                matrix_size: size,
                num_threads: threads,
                approach,
                execution_time_ms: ms,
            });
        }
    }

    let log_path = results_dir.join(format!("performance_{}.csv", size));
    append_metrics(&log_path, &metrics)?;
    println!("\nMetrics appended to {}", log_path.display());
    Ok(())
}

/// Times a closure, returning its result and the elapsed wall-clock
/// milliseconds.
fn time_millis<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}

struct Config {
    sizes: Vec<usize>,
    threads: Vec<usize>,
}

impl Config {
    fn from_args(mut args: impl Iterator<Item = String>) -> std::result::Result<Config, String> {
        let mut config = Config {
            sizes: DEFAULT_SIZES.to_vec(),
            threads: DEFAULT_THREADS.to_vec(),
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--sizes" => {
                    let value = args.next().ok_or("--sizes requires a value")?;
                    config.sizes = parse_list(&value)?;
                }
                "--threads" => {
                    let value = args.next().ok_or("--threads requires a value")?;
                    config.threads = parse_list(&value)?;
                }
                other => return Err(format!("unknown argument: {}", other)),
            }
        }
        Ok(config)
    }
}

/// Parses a comma-separated list of positive integers.
fn parse_list(value: &str) -> std::result::Result<Vec<usize>, String> {
    value
        .split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<usize>() {
                Ok(0) | Err(_) => Err(format!("invalid value: {:?}", part)),
                Ok(n) => Ok(n),
            }
        })
        .collect()
}
