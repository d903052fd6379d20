//! Command line client for the OpenTok REST API
//!
//! # Usage
//!
//! ```bash
//! opentok --api-key 123456 --api-secret secret create-session --media-mode routed
//! opentok start-archive SESSION_ID --name "weekly sync" --output-mode individual
//! opentok list-archives --offset 10 --count 50
//! opentok delete-archive ARCHIVE_ID
//! ```
//!
//! Credentials may also come from `OPENTOK_API_KEY` / `OPENTOK_API_SECRET`
//! or a config file (`--config`, `OPENTOK_CONFIG`).

use clap::{Parser, Subcommand, ValueEnum};
use std::net::IpAddr;

use opentok_client::cli::{Command, GlobalArgs, commands::parse_key_value, run_command};
use opentok_client::types::{
    ArchiveMode, ArchiveProperties, MediaMode, OutputMode, SessionProperties,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "opentok")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Account key
    #[arg(long, global = true, value_name = "API_KEY")]
    api_key: Option<u64>,

    /// Account secret
    #[arg(long, global = true, value_name = "API_SECRET")]
    api_secret: Option<String>,

    /// API base URL
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum MediaModeArg {
    Routed,
    Relayed,
}

#[derive(Clone, Copy, ValueEnum)]
enum ArchiveModeArg {
    Manual,
    Always,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputModeArg {
    Composed,
    Individual,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new session
    CreateSession {
        /// Location hint (IP address)
        #[arg(long)]
        location: Option<IpAddr>,

        /// Media routing mode
        #[arg(long, value_enum, default_value = "routed")]
        media_mode: MediaModeArg,

        /// Automatic archiving mode
        #[arg(long, value_enum, default_value = "manual")]
        archive_mode: ArchiveModeArg,

        /// Extra form parameter, may be repeated
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },

    /// Fetch one archive
    GetArchive {
        archive_id: String,
    },

    /// List archives
    ListArchives {
        /// Index of the first archive to return
        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Number of archives to return
        #[arg(long, default_value_t = 1000)]
        count: u32,
    },

    /// Start recording a session
    StartArchive {
        session_id: String,

        /// Archive name
        #[arg(long)]
        name: Option<String>,

        /// Do not record video
        #[arg(long)]
        no_video: bool,

        /// Do not record audio
        #[arg(long)]
        no_audio: bool,

        /// Composed or individual output
        #[arg(long, value_enum, default_value = "composed")]
        output_mode: OutputModeArg,
    },

    /// Stop a running archive
    StopArchive {
        archive_id: String,
    },

    /// Delete an archive
    DeleteArchive {
        archive_id: String,
    },
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::CreateSession {
                location,
                media_mode,
                archive_mode,
                params,
            } => {
                let mut properties = SessionProperties::new()
                    .with_media_mode(match media_mode {
                        MediaModeArg::Routed => MediaMode::Routed,
                        MediaModeArg::Relayed => MediaMode::Relayed,
                    })
                    .with_archive_mode(match archive_mode {
                        ArchiveModeArg::Manual => ArchiveMode::Manual,
                        ArchiveModeArg::Always => ArchiveMode::Always,
                    });
                if let Some(location) = location {
                    properties = properties.with_location(location);
                }
                Command::CreateSession { properties, params }
            }
            Commands::GetArchive { archive_id } => Command::GetArchive { archive_id },
            Commands::ListArchives { offset, count } => Command::ListArchives { offset, count },
            Commands::StartArchive {
                session_id,
                name,
                no_video,
                no_audio,
                output_mode,
            } => {
                let mut properties = ArchiveProperties::new()
                    .with_video(!no_video)
                    .with_audio(!no_audio)
                    .with_output_mode(match output_mode {
                        OutputModeArg::Composed => OutputMode::Composed,
                        OutputModeArg::Individual => OutputMode::Individual,
                    });
                if let Some(name) = name {
                    properties = properties.with_name(name);
                }
                Command::StartArchive {
                    session_id,
                    properties,
                }
            }
            Commands::StopArchive { archive_id } => Command::StopArchive { archive_id },
            Commands::DeleteArchive { archive_id } => Command::DeleteArchive { archive_id },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = GlobalArgs {
        api_key: cli.api_key,
        api_secret: cli.api_secret,
        api_url: cli.api_url,
        config: cli.config,
        verbose: cli.verbose,
    };

    run_command(args, cli.command.into()).await
}
