use std::io::Write;
use std::process::ExitCode;
use std::sync::atomic::{AtomicU32, Ordering};

use clap::{Parser, Subcommand};
use firmware::board::Board;
use firmware::config::{parse_u32, BoundsOverrides};

/// Run the firmware constraint checks against a simulated board.
///
/// Fatal violations halt through the simulated watchdog, which exits with
/// status `0x80 | constraint id`.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Minimum clock frequency in Hz
    #[arg(long, global = true)]
    clock_min: Option<String>,

    /// Maximum clock frequency in Hz
    #[arg(long, global = true)]
    clock_max: Option<String>,

    /// First RAM address
    #[arg(long, global = true)]
    ram_start: Option<String>,

    /// RAM size in bytes
    #[arg(long, global = true)]
    ram_size: Option<String>,

    /// Clock frequency the simulated board reports
    #[arg(long, global = true, default_value = "100_000_000", value_parser = parse_number)]
    clock_hz: u32,

    /// Simulate a sensor that stopped responding
    #[arg(long, global = true)]
    sensor_timeout: bool,

    /// Simulate an overflowing communication buffer
    #[arg(long, global = true)]
    comm_buffer_full: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a clock frequency in Hz
    Clock {
        #[arg(value_parser = parse_number)]
        hz: u32,
    },
    /// Validate a memory address
    Ram {
        #[arg(value_parser = parse_number)]
        address: u32,
    },
    /// Check a critical resource by id
    Resource {
        #[arg(value_parser = parse_number)]
        id: u32,
    },
    /// Report a violation by constraint id
    Report {
        #[arg(value_parser = parse_number)]
        id: u32,
        message: String,
    },
    /// Run the boot sequence and application loop
    Boot {
        /// Loop iterations, forever if omitted
        #[arg(long)]
        ticks: Option<u64>,
    },
}

fn parse_number(text: &str) -> Result<u32, String> {
    parse_u32(text).ok_or_else(|| format!("`{text}` is not a 32-bit unsigned number"))
}

struct HostBoard {
    clock_hz: u32,
    sensor_timeout: bool,
    comm_buffer_full: bool,
    fault_id: AtomicU32,
}

impl Board for HostBoard {
    fn write_console(&self, text: &str) {
        let _ = std::io::stdout().lock().write_all(text.as_bytes());
    }

    fn clock_frequency_hz(&self) -> u32 {
        self.clock_hz
    }

    fn sensor_timed_out(&self) -> bool {
        self.sensor_timeout
    }

    fn comm_buffer_full(&self) -> bool {
        self.comm_buffer_full
    }

    fn set_fault_led(&self, code: u8) {
        self.write_console(&format!("fault LED pattern {code:#04x}\n"));
    }

    fn store_fault_log(&self, constraint_id: u32, message: &str) {
        self.fault_id.store(constraint_id, Ordering::SeqCst);
        self.write_console(&format!(
            "fault log: id {constraint_id:#04x}: {message}\n"
        ));
    }

    fn watchdog_reset(&self) -> ! {
        let _ = std::io::stdout().flush();
        let id = self.fault_id.load(Ordering::SeqCst) & 0x7F;
        std::process::exit(0x80 | id as i32)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let board: &'static HostBoard = Box::leak(Box::new(HostBoard {
        clock_hz: cli.clock_hz,
        sensor_timeout: cli.sensor_timeout,
        comm_buffer_full: cli.comm_buffer_full,
        fault_id: AtomicU32::new(0),
    }));

    let compiled = BoundsOverrides::COMPILED;
    let overrides = BoundsOverrides {
        clock_min_hz: cli.clock_min.as_deref().or(compiled.clock_min_hz),
        clock_max_hz: cli.clock_max.as_deref().or(compiled.clock_max_hz),
        ram_start: cli.ram_start.as_deref().or(compiled.ram_start),
        ram_size: cli.ram_size.as_deref().or(compiled.ram_size),
    };

    if let Err(err) = firmware::install_logger(board) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = firmware::init_with(board, overrides) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    let Some(constraints) = firmware::constraints() else {
        eprintln!("error: constraint layer unavailable");
        return ExitCode::FAILURE;
    };

    let passed = match cli.command {
        Command::Clock { hz } => constraints.validate_clock_frequency(hz),
        Command::Ram { address } => constraints.validate_ram_address(address),
        Command::Resource { id } => constraints.check_critical_resource(id),
        Command::Report { id, message } => {
            constraints.report_violation(id, &message);
            true
        }
        Command::Boot { ticks } => {
            firmware::boot::run(board, constraints, ticks);
            true
        }
    };

    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
