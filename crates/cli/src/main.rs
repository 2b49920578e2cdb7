//! RV32I pipeline simulator CLI.
//!
//! This binary runs a flat bare-metal binary on the pipeline model. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overridden by a JSON file and flags.
//! 2. **Loading:** Places the binary at the configured memory base.
//! 3. **Reporting:** Prints the exit reason, statistics, and optionally the register file.

use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rvpipe_core::common::{SimError, Trap};
use rvpipe_core::config::Config;
use rvpipe_core::sim::{ExitReason, Simulator, loader};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Cycle-level RV32I pipeline simulator",
    long_about = "Run a flat bare-metal RV32I binary until it traps or hits the cycle limit.\n\nIn direct mode (the default) the first trap ends the run; programs conventionally end with `ebreak`.\n\nExamples:\n  sim program.bin\n  sim program.bin --config sim.json --regs\n  RUST_LOG=debug sim program.bin"
)]
struct Cli {
    /// Flat binary to load at the memory base.
    binary: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the cycle limit.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Log per-stage instruction events.
    #[arg(long)]
    trace: bool,

    /// Dump the register file after the run.
    #[arg(long)]
    regs: bool,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }
    }
}

/// Loads the configuration from disk, or returns the defaults.
fn load_config(path: Option<&PathBuf>) -> Result<Config, SimError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| SimError::Io {
                path: path.display().to_string(),
                source,
            })?;
            Config::from_json(&text)
        }
        None => Ok(Config::default()),
    }
}

/// Installs the log subscriber; `RUST_LOG` wins over the trace flag.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs the simulation and returns the process exit code.
///
/// `ebreak` and `ecall` end a run successfully; other traps and the cycle
/// limit do not.
fn run(cli: &Cli) -> Result<i32, SimError> {
    let mut config = load_config(cli.config.as_ref())?;
    if let Some(max) = cli.max_cycles {
        config.general.max_cycles = max;
    }
    config.general.trace_instructions |= cli.trace;
    init_logging(config.general.trace_instructions);
    tracing::debug!(?config, "configuration");

    println!(
        "Configuration: start_pc={:#010x} memory={:#010x}+{} KiB latency={} direct_mode={}",
        config.general.start_pc,
        config.memory.base,
        config.memory.size / 1024,
        config.memory.latency,
        config.general.direct_mode
    );

    let mut sim = Simulator::new(&config);
    let bytes = loader::load_program(&mut sim.cpu, &cli.binary)?;
    println!("[*] Loaded {} ({bytes} bytes)", cli.binary.display());

    let outcome = sim.run();
    let code = match outcome.exit {
        ExitReason::Trap(info) => {
            println!(
                "\n[*] Trap {} at pc={:#010x} (mcause={}, mtval={:#010x})",
                info.trap,
                info.pc,
                info.cause(),
                info.value()
            );
            i32::from(!matches!(info.trap, Trap::Breakpoint(_) | Trap::EnvironmentCall))
        }
        ExitReason::CycleLimit => {
            println!("\n[*] Cycle limit reached ({} cycles)", outcome.cycles);
            2
        }
    };

    if cli.regs {
        sim.cpu.dump_state();
    }
    sim.cpu.stats.print();
    Ok(code)
}
