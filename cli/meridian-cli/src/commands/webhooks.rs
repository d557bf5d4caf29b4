// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Webhook subscription commands

use crate::output::{json, table};
use anyhow::Result;
use clap::{Args, Subcommand};
use futures_util::{StreamExt, TryStreamExt};
use meridian_client::{
    ListWebhooksQuery, MeridianClient, Webhook, WebhookEvent, WebhookRequest, WebhookResource,
    WebhookStatus, WebhookUpdate,
};

#[derive(Subcommand, Clone)]
pub enum WebhookCommand {
    /// List webhook subscriptions
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a webhook
    Get {
        /// Webhook id
        id: String,
    },

    /// Register a webhook
    Create(CreateArgs),

    /// Update a webhook's name, target, secret or status
    Update(UpdateArgs),

    /// Delete a webhook
    #[command(alias = "rm")]
    Delete {
        /// Webhook id
        id: String,
    },
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Stop after this many results
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args, Clone)]
pub struct CreateArgs {
    /// Webhook name
    name: String,

    /// URL that receives the callbacks
    #[arg(long)]
    target_url: String,

    /// Resource to watch (all, memberships, messages, rooms, meetings,
    /// telephonyCalls)
    #[arg(long)]
    resource: String,

    /// Event to deliver (all, created, updated, deleted)
    #[arg(long)]
    event: String,

    /// Filter expression, e.g. "roomId=..."
    #[arg(long)]
    filter: Option<String>,

    /// Secret used to sign callback payloads
    #[arg(long)]
    secret: Option<String>,
}

#[derive(Args, Clone)]
pub struct UpdateArgs {
    /// Webhook id
    id: String,

    /// New name
    #[arg(long)]
    name: String,

    /// New target URL
    #[arg(long)]
    target_url: String,

    /// New signing secret
    #[arg(long)]
    secret: Option<String>,

    /// New status (active or inactive)
    #[arg(long)]
    status: Option<String>,
}

impl WebhookCommand {
    pub async fn run(self, client: &MeridianClient, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_webhooks(args, client, use_json).await,
            Self::Get { id } => get_webhook(&id, client).await,
            Self::Create(args) => create_webhook(args, client).await,
            Self::Update(args) => update_webhook(args, client).await,
            Self::Delete { id } => delete_webhook(&id, client).await,
        }
    }
}

fn parse_resource(value: &str) -> Result<WebhookResource> {
    match value {
        "all" => Ok(WebhookResource::All),
        "memberships" => Ok(WebhookResource::Memberships),
        "messages" => Ok(WebhookResource::Messages),
        "rooms" => Ok(WebhookResource::Rooms),
        "meetings" => Ok(WebhookResource::Meetings),
        "telephonyCalls" => Ok(WebhookResource::TelephonyCalls),
        other => Err(anyhow::anyhow!("unknown webhook resource '{}'", other)),
    }
}

fn parse_event(value: &str) -> Result<WebhookEvent> {
    match value {
        "all" => Ok(WebhookEvent::All),
        "created" => Ok(WebhookEvent::Created),
        "updated" => Ok(WebhookEvent::Updated),
        "deleted" => Ok(WebhookEvent::Deleted),
        other => Err(anyhow::anyhow!("unknown webhook event '{}'", other)),
    }
}

fn parse_status(value: &str) -> Result<WebhookStatus> {
    match value {
        "active" => Ok(WebhookStatus::Active),
        "inactive" => Ok(WebhookStatus::Inactive),
        other => Err(anyhow::anyhow!(
            "unknown webhook status '{}' (expected active or inactive)",
            other
        )),
    }
}

async fn list_webhooks(args: ListArgs, client: &MeridianClient, use_json: bool) -> Result<()> {
    let stream = client.webhooks().list(ListWebhooksQuery::default());
    let stream = match args.limit {
        Some(n) => stream.take(n).boxed(),
        None => stream,
    };
    let webhooks: Vec<Webhook> = stream.try_collect().await?;

    if use_json {
        json::print_json(&webhooks)?;
    } else {
        let mut tbl = table::create_table(&["NAME", "RESOURCE", "EVENT", "STATUS", "ID"]);
        for webhook in &webhooks {
            tbl.add_row(vec![
                webhook.name.clone().unwrap_or_else(|| "-".into()),
                webhook
                    .resource
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "-".into()),
                webhook
                    .event
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "-".into()),
                webhook
                    .status
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "-".into()),
                webhook.id.clone().unwrap_or_else(|| "-".into()),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn get_webhook(id: &str, client: &MeridianClient) -> Result<()> {
    let webhook = client.webhooks().get(id).await?;
    json::print_json(&webhook)
}

async fn create_webhook(args: CreateArgs, client: &MeridianClient) -> Result<()> {
    let request = WebhookRequest {
        name: args.name,
        target_url: args.target_url,
        resource: parse_resource(&args.resource)?,
        event: parse_event(&args.event)?,
        filter: args.filter,
        secret: args.secret,
    };

    let webhook = client.webhooks().create(&request).await?;
    json::print_json(&webhook)
}

async fn update_webhook(args: UpdateArgs, client: &MeridianClient) -> Result<()> {
    let update = WebhookUpdate {
        name: args.name,
        target_url: args.target_url,
        secret: args.secret,
        status: args.status.as_deref().map(parse_status).transpose()?,
    };

    let webhook = client.webhooks().update(&args.id, &update).await?;
    json::print_json(&webhook)
}

async fn delete_webhook(id: &str, client: &MeridianClient) -> Result<()> {
    client.webhooks().delete(id).await?;
    println!("Deleted webhook '{}'", id);
    Ok(())
}
