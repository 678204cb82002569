//! CLI application for controlling Artemis RGB.
//!
//! Host and port default to `ARTEMIS_HOST` / `ARTEMIS_PORT`, then to
//! `localhost:9696`.
//!
//! Run with: cargo run --example artemis_cli -- --help

use artemis_rgb::{Artemis, ArtemisConfig, SuspendState};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "artemis-cli")]
#[command(about = "Control Artemis RGB from the command line", long_about = None)]
struct Cli {
    /// Host running Artemis
    #[arg(long, global = true)]
    host: Option<String>,

    /// Port of the Artemis web server
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all profiles
    Profiles,

    /// List all profile categories
    Categories,

    /// Bring the Artemis window to the front
    Foreground {
        /// Page to open (e.g. "settings")
        #[arg(default_value = "")]
        route: String,
    },

    /// Restart Artemis
    Restart {
        /// Arguments passed to the restarted process
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Shut Artemis down
    Shutdown,

    /// Suspend a profile
    Suspend {
        /// Profile ID
        id: String,
    },

    /// Resume a suspended profile
    Resume {
        /// Profile ID
        id: String,
    },

    /// Check whether Artemis is reachable
    Ping,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let env = ArtemisConfig::from_env()?;
    let config = ArtemisConfig::new(
        cli.host.as_deref().unwrap_or(env.host()),
        cli.port.unwrap_or(env.port()),
    );
    let artemis = Artemis::new(config);
    let target = artemis.config().url("");

    match cli.command {
        Commands::Profiles => match artemis.get_profiles().await {
            Ok(profiles) => println!("{profiles:#}"),
            Err(e) => eprintln!("Error getting profiles: {e}"),
        },

        Commands::Categories => match artemis.get_profile_categories().await {
            Ok(categories) => println!("{categories:#}"),
            Err(e) => eprintln!("Error getting categories: {e}"),
        },

        Commands::Foreground { route } => {
            println!("Bringing Artemis at {target} to foreground...");
            match artemis.bring_to_foreground(&route).await {
                Ok(()) => println!("Done"),
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        Commands::Restart { args } => {
            println!("Restarting Artemis at {target}...");
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            match artemis.restart(&args).await {
                Ok(()) => println!("Restart requested"),
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        Commands::Shutdown => {
            println!("Shutting down Artemis at {target}...");
            match artemis.shutdown().await {
                Ok(()) => println!("Shutdown requested"),
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        Commands::Suspend { id } => {
            println!("Suspending profile {id}...");
            match artemis.suspend_profile(&id, SuspendState::True).await {
                Ok(()) => println!("Profile suspended"),
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        Commands::Resume { id } => {
            println!("Resuming profile {id}...");
            match artemis.resume_profile(&id).await {
                Ok(()) => println!("Profile resumed"),
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        Commands::Ping => {
            if artemis.is_available().await {
                println!("Artemis is reachable at {target}");
            } else {
                println!("Artemis is not reachable at {target}");
            }
        }
    }

    Ok(())
}
