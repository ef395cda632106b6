//! Command line entry point for the payslip generator.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use payslip_generator::api;
use payslip_generator::config::ConfigLoader;
use payslip_generator::console::ConsoleSession;
use payslip_generator::error::{PayslipResult, USAGE_EXIT_CODE};
use payslip_generator::report::OutputFormat;

/// Generate a monthly payslip for one employee.
#[derive(Parser, Debug)]
#[command(name = "payslip", version, about)]
struct Cli {
    /// YAML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format for the payslip (text or json)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Highest accepted super rate in percent (0 to 100)
    #[arg(long, global = true)]
    max_super_rate: Option<u8>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve payslip calculations over HTTP
    Serve {
        /// Address to listen on, e.g. 0.0.0.0:8080
        #[arg(long)]
        bind: Option<String>,
    },
}

impl Cli {
    fn load_config(&self) -> PayslipResult<ConfigLoader> {
        let mut loader = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => ConfigLoader::defaults(),
        };

        if let Some(format) = self.format {
            loader.set_output_format(format);
        }
        if let Some(max_super_rate) = self.max_super_rate {
            loader.set_max_super_rate(max_super_rate)?;
        }
        if let Some(Command::Serve { bind: Some(bind) }) = &self.command {
            loader.set_bind_address(bind.clone());
        }

        Ok(loader)
    }

    fn run(self) -> PayslipResult<()> {
        let config = self.load_config()?;

        match self.command {
            None => {
                let stdin = io::stdin();
                let stdout = io::stdout();
                ConsoleSession::new(stdin.lock(), stdout.lock()).run(&config)?;
                Ok(())
            }
            Some(Command::Serve { .. }) => {
                let runtime = tokio::runtime::Runtime::new()?;
                runtime.block_on(api::serve(config))
            }
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("payslip_generator=error,payslip=error")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(USAGE_EXIT_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
