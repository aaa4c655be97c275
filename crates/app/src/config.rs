//! Configuration for the hanoi-sim application.
//!
//! Handles parsing command-line arguments into a run mode plus the knobs the
//! core consumes (disk limit, move-print threshold) and the app-side output
//! settings.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: no flags means the interactive
//! menu, and every default is a fixed, documented constant so runs are
//! reproducible without remembering anything.

use hanoi_sim_core::solver::{DEFAULT_MOVE_DISPLAY_THRESHOLD, MAX_DISKS};
use std::path::PathBuf;

/// How the process should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Menu loop on stdin/stdout
    Interactive,

    /// Solve once for the given disk count and exit.
    ///
    /// Parsed as signed so negative input reaches the explicit
    /// configuration error instead of dying in the parser.
    Single(i64),

    /// Run one sweep for N = 1..=bound and exit
    Sweep(i64),
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Mode ===
    /// What to do (interactive menu unless --n/--sweep given)
    pub mode: Mode,

    // === Core knobs ===
    /// Print full move sequences only for n at or below this
    pub move_display_threshold: u32,

    /// Hard limit on disk count (clamped to the counter-safe maximum)
    pub max_disks: u32,

    // === Output ===
    /// Directory for report artifacts (CSV under <out_dir>/csv)
    pub out_dir: PathBuf,

    /// Whether sweeps write CSV/Markdown files
    pub write_files: bool,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut single_n: Option<i64> = None;
        let mut sweep_max_n: Option<i64> = None;
        let mut move_display_threshold: Option<u32> = None;
        let mut max_disks: Option<u32> = None;
        let mut out_dir: Option<PathBuf> = None;
        let mut write_files = true;
        let mut print_config = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--n" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--n requires a number".to_string());
                    }
                    single_n = Some(args[i].parse().map_err(|_| "invalid disk count")?);
                }
                "--sweep" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sweep requires a number".to_string());
                    }
                    sweep_max_n = Some(args[i].parse().map_err(|_| "invalid sweep bound")?);
                }
                "--threshold" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--threshold requires a number".to_string());
                    }
                    move_display_threshold =
                        Some(args[i].parse().map_err(|_| "invalid threshold")?);
                }
                "--max-disks" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--max-disks requires a number".to_string());
                    }
                    max_disks = Some(args[i].parse().map_err(|_| "invalid max-disks")?);
                }
                "--out-dir" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out-dir requires a path".to_string());
                    }
                    out_dir = Some(PathBuf::from(&args[i]));
                }
                "--no-files" => {
                    write_files = false;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        let mode = match (single_n, sweep_max_n) {
            (Some(_), Some(_)) => {
                return Err("--n and --sweep are mutually exclusive".to_string());
            }
            (Some(n), None) => Mode::Single(n),
            (None, Some(max_n)) => Mode::Sweep(max_n),
            (None, None) => Mode::Interactive,
        };

        Ok(Config {
            mode,
            move_display_threshold: move_display_threshold
                .unwrap_or(DEFAULT_MOVE_DISPLAY_THRESHOLD),
            max_disks: max_disks.unwrap_or(MAX_DISKS).min(MAX_DISKS),
            out_dir: out_dir.unwrap_or_else(|| PathBuf::from("data")),
            write_files,
            print_config,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Mode: {:?}", self.mode);
        println!("Move display threshold: {}", self.move_display_threshold);
        println!("Max disks: {}", self.max_disks);
        println!("Output directory: {}", self.out_dir.display());
        println!("Write report files: {}", self.write_files);
        println!();
    }
}

fn print_help() {
    println!("hanoi-sim: Towers-of-Hanoi solver and growth experiments");
    println!();
    println!("USAGE:");
    println!("    hanoi-sim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --n <N>            Solve a single N-disk instance and exit");
    println!("    --sweep <MAXN>     Run experiments for N = 1..=MAXN and exit");
    println!();
    println!(
        "    --threshold <N>    Print full move list only for n <= N (default: {})",
        DEFAULT_MOVE_DISPLAY_THRESHOLD
    );
    println!(
        "    --max-disks <N>    Hard limit on disk count (default and ceiling: {})",
        MAX_DISKS
    );
    println!("    --out-dir <PATH>   Directory for report files (default: data)");
    println!("    --no-files         Don't write CSV/Markdown report files");
    println!();
    println!("    --print-config     Print resolved configuration");
    println!("    --help, -h         Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    hanoi-sim                  # Interactive menu");
    println!("    hanoi-sim --n 4            # Solve 4 disks, print every move");
    println!("    hanoi-sim --sweep 20       # Table + data/csv/hanoi_results.csv + data/hanoi_report.md");
    println!("    hanoi-sim --sweep 20 --no-files");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_interactive() {
        let config = Config::from_args(&[]).unwrap();
        assert_eq!(config.mode, Mode::Interactive);
        assert_eq!(config.move_display_threshold, 5);
        assert_eq!(config.max_disks, 62);
        assert!(config.write_files);
    }

    #[test]
    fn test_single_mode() {
        let config = Config::from_args(&args(&["--n", "7"])).unwrap();
        assert_eq!(config.mode, Mode::Single(7));
    }

    #[test]
    fn test_negative_n_parses() {
        // Negative input must reach the explicit runtime error, not die here
        let config = Config::from_args(&args(&["--n", "-3"])).unwrap();
        assert_eq!(config.mode, Mode::Single(-3));
    }

    #[test]
    fn test_sweep_mode_with_options() {
        let config = Config::from_args(&args(&[
            "--sweep", "15", "--out-dir", "/tmp/hanoi", "--no-files",
        ]))
        .unwrap();
        assert_eq!(config.mode, Mode::Sweep(15));
        assert_eq!(config.out_dir, PathBuf::from("/tmp/hanoi"));
        assert!(!config.write_files);
    }

    #[test]
    fn test_modes_are_exclusive() {
        assert!(Config::from_args(&args(&["--n", "3", "--sweep", "5"])).is_err());
    }

    #[test]
    fn test_max_disks_clamped() {
        let config = Config::from_args(&args(&["--max-disks", "100"])).unwrap();
        assert_eq!(config.max_disks, 62);
    }

    #[test]
    fn test_unknown_argument() {
        assert!(Config::from_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_missing_value() {
        assert!(Config::from_args(&args(&["--n"])).is_err());
    }
}
