//! hanoi-sim: interactive Towers-of-Hanoi solver and experiment runner.
//!
//! Wraps the core library in a small menu loop (or one-shot flags): solve a
//! single instance, or sweep N over a range and write the CSV/Markdown
//! report. Every error from the core is recoverable here; the menu prints
//! the message and re-prompts instead of exiting.

mod config;
mod output;

use config::{Config, Mode};
use hanoi_sim_core::error::{Error, SolverError, SweepError};
use hanoi_sim_core::solver::{solve_single, SingleRunOptions};
use hanoi_sim_core::sweep;
use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    let code = match config.mode {
        Mode::Single(n) => run_single(n, &config),
        Mode::Sweep(max_n) => run_sweep(max_n, &config),
        Mode::Interactive => run_menu(&config),
    };
    std::process::exit(code);
}

/// Solve one instance and print its summary. Negative input becomes the
/// explicit disk-count error; zero is a valid no-op solve.
fn run_single(n: i64, config: &Config) -> i32 {
    if n < 0 {
        eprintln!(
            "error: {}",
            Error::from(SolverError::NegativeDiskCount { n })
        );
        return 1;
    }

    // Checked narrowing: an over-u32 count must hit the disk limit error,
    // never wrap into a small value that the limit would wave through.
    let n = match u32::try_from(n) {
        Ok(n) => n,
        Err(_) => {
            eprintln!(
                "error: {}",
                Error::from(SolverError::TooManyDisks {
                    n: n as u64,
                    max: config.max_disks,
                })
            );
            return 1;
        }
    };

    let opts = SingleRunOptions {
        move_display_threshold: config.move_display_threshold,
        max_disks: config.max_disks,
    };

    match solve_single(n, &opts) {
        Ok(run) => {
            run.print_summary();
            0
        }
        Err(e) => {
            eprintln!("error: {}", e);
            1
        }
    }
}

/// Run a sweep, print the table, and write the report files unless disabled.
fn run_sweep(max_n: i64, config: &Config) -> i32 {
    if max_n <= 0 {
        eprintln!("error: {}", Error::from(SweepError::InvalidBound { max_n }));
        return 1;
    }

    let max_n = match u32::try_from(max_n) {
        Ok(max_n) => max_n,
        Err(_) => {
            eprintln!(
                "error: {}",
                Error::from(SolverError::TooManyDisks {
                    n: max_n as u64,
                    max: config.max_disks,
                })
            );
            return 1;
        }
    };

    let report = match sweep::run_sweep_bounded(max_n, config.max_disks) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            return 1;
        }
    };

    report.print_table();

    if config.write_files {
        match output::write_report_files(&report, &config.out_dir) {
            Ok(paths) => {
                println!("\nTable saved to:  {}", paths.csv.display());
                println!("Report saved to: {}", paths.markdown.display());
            }
            Err(e) => {
                eprintln!("error: {}", e);
                return 1;
            }
        }
    }

    0
}

/// The interactive menu loop. EOF on stdin ends the session cleanly.
fn run_menu(config: &Config) -> i32 {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Towers of Hanoi: optimal move search for N disks.");

    loop {
        println!("\nChoose a mode:");
        println!("  1 - solve a single N (prints moves for small N)");
        println!("  2 - experiment sweep (table, CSV, Markdown report)");
        println!("  0 - exit");

        let choice = match prompt(&mut lines, "Your choice: ") {
            Some(line) => line,
            None => return 0,
        };

        match choice.trim() {
            "0" => {
                println!("Exit.");
                return 0;
            }
            "1" => {
                let raw = match prompt(&mut lines, "Enter disk count N: ") {
                    Some(line) => line,
                    None => return 0,
                };
                match raw.trim().parse::<i64>() {
                    Ok(n) => {
                        run_single(n, config);
                    }
                    Err(_) => println!("Not a number: {}", raw.trim()),
                }
            }
            "2" => {
                let raw = match prompt(&mut lines, "Enter maximum N for the sweep: ") {
                    Some(line) => line,
                    None => return 0,
                };
                match raw.trim().parse::<i64>() {
                    Ok(max_n) => {
                        run_sweep(max_n, config);
                    }
                    Err(_) => println!("Not a number: {}", raw.trim()),
                }
            }
            other => println!("Unknown mode: {}. Try again.", other),
        }
    }
}

/// Print a prompt and read one line. None means EOF (or a read error),
/// which ends the interactive session.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Option<String> {
    print!("{}", text);
    let _ = io::stdout().flush();

    match lines.next() {
        Some(Ok(line)) => Some(line),
        _ => None,
    }
}
