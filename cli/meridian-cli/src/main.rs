// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Meridian CLI - command-line interface for the Meridian collaboration API

use anyhow::Result;
use clap::{Parser, Subcommand};
use meridian_client::MeridianClient;

mod commands;
mod config;
mod output;

use commands::{
    DeviceCommand, PeopleCommand, ProfileCommand, QueueCommand, RoomCommand, WebhookCommand,
};

#[derive(Parser)]
#[command(
    name = "meridian",
    version,
    about = "Meridian collaboration platform CLI",
    long_about = "User-friendly command-line interface for the Meridian collaboration API"
)]
struct Cli {
    /// Profile to use
    #[arg(short, long, global = true, env = "MERIDIAN_PROFILE")]
    profile: Option<String>,

    /// API base URL override
    #[arg(short = 'U', long, global = true, env = "MERIDIAN_URL")]
    url: Option<String>,

    /// Access token override
    #[arg(short, long, global = true, env = "MERIDIAN_ACCESS_TOKEN")]
    token: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage connection profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Manage people in the directory
    People {
        #[command(subcommand)]
        command: PeopleCommand,
    },

    /// Manage rooms
    Rooms {
        #[command(subcommand)]
        command: RoomCommand,
    },

    /// Manage webhook subscriptions
    Webhooks {
        #[command(subcommand)]
        command: WebhookCommand,
    },

    /// Manage registered devices
    Devices {
        #[command(subcommand)]
        command: DeviceCommand,
    },

    /// Manage call queues
    Queues {
        #[command(subcommand)]
        command: QueueCommand,
    },
}

impl Cli {
    /// Build an authenticated client from CLI options or the saved profile
    fn build_client(&self) -> Result<MeridianClient> {
        // A URL and token straight from flags or the environment are
        // enough on their own; no profile lookup happens in that case.
        if let (Some(url), Some(token)) = (&self.url, &self.token) {
            let client = MeridianClient::builder()
                .base_url(url.clone())
                .access_token(token.clone())
                .build()?;
            return Ok(client);
        }

        let profile = config::resolve_profile(self.profile.as_deref())?;

        // Partial overrides still apply on top of the profile.
        let url = self.url.clone().unwrap_or_else(|| profile.url.clone());
        let token = self.token.clone().unwrap_or_else(|| profile.token.clone());

        let client = MeridianClient::builder()
            .base_url(url)
            .access_token(token)
            .build()?;
        Ok(client)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The workspace builds reqwest without a default TLS provider, so
    // one has to be installed before any client makes a request. See
    // the rustls notes in the workspace Cargo.toml.
    let _ = rustls::crypto::ring::default_provider().install_default();

    // Set up logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("meridian_cli=debug,meridian_client=debug")
            .init();
    }

    match &cli.command {
        Commands::Profile { command } => command.clone().run(cli.json),
        Commands::People { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Rooms { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Webhooks { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Devices { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Queues { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
    }
}
