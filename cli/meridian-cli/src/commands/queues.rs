// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Call queue commands

use crate::output::{json, table};
use anyhow::Result;
use clap::{Args, Subcommand};
use futures_util::{StreamExt, TryStreamExt};
use meridian_client::{CallQueue, ListQueuesQuery, MeridianClient, QueueRequest};

#[derive(Subcommand, Clone)]
pub enum QueueCommand {
    /// List call queues across all locations
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a call queue's configuration
    Get {
        /// Location id
        location_id: String,
        /// Queue id
        queue_id: String,
    },

    /// Create a call queue in a location
    Create(CreateArgs),

    /// Delete a call queue
    #[command(alias = "rm")]
    Delete {
        /// Location id
        location_id: String,
        /// Queue id
        queue_id: String,
    },
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Filter by location
    #[arg(long)]
    location_id: Option<String>,

    /// Filter by name prefix
    #[arg(long)]
    name: Option<String>,

    /// Stop after this many results
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args, Clone)]
pub struct CreateArgs {
    /// Location to create the queue in
    location_id: String,

    /// Queue name
    #[arg(long)]
    name: String,

    /// Number callers dial to reach the queue
    #[arg(long)]
    phone_number: Option<String>,

    /// Extension callers dial to reach the queue
    #[arg(long)]
    extension: Option<String>,
}

impl QueueCommand {
    pub async fn run(self, client: &MeridianClient, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_queues(args, client, use_json).await,
            Self::Get {
                location_id,
                queue_id,
            } => get_queue(&location_id, &queue_id, client).await,
            Self::Create(args) => create_queue(args, client).await,
            Self::Delete {
                location_id,
                queue_id,
            } => delete_queue(&location_id, &queue_id, client).await,
        }
    }
}

async fn list_queues(args: ListArgs, client: &MeridianClient, use_json: bool) -> Result<()> {
    let query = ListQueuesQuery {
        location_id: args.location_id,
        name: args.name,
        ..Default::default()
    };

    let stream = client.telephony().queues().list(query);
    let stream = match args.limit {
        Some(n) => stream.take(n).boxed(),
        None => stream,
    };
    let queues: Vec<CallQueue> = stream.try_collect().await?;

    if use_json {
        json::print_json(&queues)?;
    } else {
        let mut tbl = table::create_table(&["NAME", "EXTENSION", "ENABLED", "LOCATION", "ID"]);
        for queue in &queues {
            tbl.add_row(vec![
                queue.name.clone().unwrap_or_else(|| "-".into()),
                queue.extension.clone().unwrap_or_else(|| "-".into()),
                queue
                    .enabled
                    .map(|enabled| enabled.to_string())
                    .unwrap_or_else(|| "-".into()),
                queue.location_name.clone().unwrap_or_else(|| "-".into()),
                queue.id.clone().unwrap_or_else(|| "-".into()),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn get_queue(location_id: &str, queue_id: &str, client: &MeridianClient) -> Result<()> {
    let queue = client.telephony().queues().get(location_id, queue_id).await?;
    json::print_json(&queue)
}

async fn create_queue(args: CreateArgs, client: &MeridianClient) -> Result<()> {
    let request = QueueRequest {
        phone_number: args.phone_number,
        extension: args.extension,
        ..QueueRequest::new(args.name)
    };

    let queue = client
        .telephony()
        .queues()
        .create(&args.location_id, &request)
        .await?;
    json::print_json(&queue)
}

async fn delete_queue(location_id: &str, queue_id: &str, client: &MeridianClient) -> Result<()> {
    client
        .telephony()
        .queues()
        .delete(location_id, queue_id)
        .await?;
    println!("Deleted queue '{}'", queue_id);
    Ok(())
}
