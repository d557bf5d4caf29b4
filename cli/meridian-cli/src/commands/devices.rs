// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Device commands

use crate::output::{json, table};
use anyhow::Result;
use clap::{Args, Subcommand};
use futures_util::{StreamExt, TryStreamExt};
use meridian_client::{
    ActivationCodeRequest, ConnectionStatus, Device, ListDevicesQuery, MeridianClient,
};

#[derive(Subcommand, Clone)]
pub enum DeviceCommand {
    /// List registered devices
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a device
    Get {
        /// Device id
        id: String,
    },

    /// Remove a device registration
    #[command(alias = "rm")]
    Delete {
        /// Device id
        id: String,
    },

    /// Generate an activation code for onboarding a device
    ActivationCode(ActivationCodeArgs),
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Filter by the person the device belongs to
    #[arg(long)]
    person_id: Option<String>,

    /// Filter by the workspace the device is placed in
    #[arg(long)]
    workspace_id: Option<String>,

    /// Filter by connection status (connected, disconnected,
    /// connectedWithIssues, unknown)
    #[arg(long)]
    connection_status: Option<String>,

    /// Filter by product name
    #[arg(long)]
    product: Option<String>,

    /// Stop after this many results
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args, Clone)]
pub struct ActivationCodeArgs {
    /// Workspace the device will belong to
    #[arg(long)]
    workspace_id: Option<String>,

    /// Person the device will belong to
    #[arg(long)]
    person_id: Option<String>,

    /// Device model
    #[arg(long)]
    model: Option<String>,
}

impl DeviceCommand {
    pub async fn run(self, client: &MeridianClient, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_devices(args, client, use_json).await,
            Self::Get { id } => get_device(&id, client).await,
            Self::Delete { id } => delete_device(&id, client).await,
            Self::ActivationCode(args) => create_activation_code(args, client).await,
        }
    }
}

fn parse_connection_status(value: &str) -> Result<ConnectionStatus> {
    match value {
        "connected" => Ok(ConnectionStatus::Connected),
        "disconnected" => Ok(ConnectionStatus::Disconnected),
        "connectedWithIssues" => Ok(ConnectionStatus::ConnectedWithIssues),
        "unknown" => Ok(ConnectionStatus::Unknown),
        other => Err(anyhow::anyhow!("unknown connection status '{}'", other)),
    }
}

async fn list_devices(args: ListArgs, client: &MeridianClient, use_json: bool) -> Result<()> {
    let query = ListDevicesQuery {
        person_id: args.person_id,
        workspace_id: args.workspace_id,
        connection_status: args
            .connection_status
            .as_deref()
            .map(parse_connection_status)
            .transpose()?,
        product: args.product,
        ..Default::default()
    };

    let stream = client.devices().list(query);
    let stream = match args.limit {
        Some(n) => stream.take(n).boxed(),
        None => stream,
    };
    let devices: Vec<Device> = stream.try_collect().await?;

    if use_json {
        json::print_json(&devices)?;
    } else {
        let mut tbl = table::create_table(&["DISPLAY NAME", "TYPE", "CONNECTION", "ID"]);
        for device in &devices {
            tbl.add_row(vec![
                device.display_name.clone().unwrap_or_else(|| "-".into()),
                device
                    .device_type
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "-".into()),
                device
                    .connection_status
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "-".into()),
                device.id.clone().unwrap_or_else(|| "-".into()),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn get_device(id: &str, client: &MeridianClient) -> Result<()> {
    let device = client.devices().get(id).await?;
    json::print_json(&device)
}

async fn delete_device(id: &str, client: &MeridianClient) -> Result<()> {
    client.devices().delete(id).await?;
    println!("Deleted device '{}'", id);
    Ok(())
}

async fn create_activation_code(
    args: ActivationCodeArgs,
    client: &MeridianClient,
) -> Result<()> {
    let request = ActivationCodeRequest {
        workspace_id: args.workspace_id,
        person_id: args.person_id,
        model: args.model,
    };

    let code = client.devices().create_activation_code(&request).await?;
    json::print_json(&code)
}
