//! jfrog-apps-config CLI - inspect and validate .jfrog/jfrog-apps-config.yml

use clap::Parser;

use jfrog_apps_config::cli::{self, Cli, Commands, GlobalOptions};
use jfrog_apps_config::error::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Default to warnings; `--debug` raises it and `RUST_LOG` overrides both
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);
    log::debug!("Repository root: {}", opts.dir_ref().display());

    match cli.command {
        Commands::Show => cli::show::run(&opts),
        Commands::Validate { file } => cli::validate::run(file.as_deref(), &opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Schema => cli::schema::run(),
        Commands::Version => {
            println!("jfrog-apps-config version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => cli::completion::run(shell),
    }
}
