// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Room commands

use crate::output::{json, table};
use anyhow::Result;
use clap::{Args, Subcommand};
use futures_util::{StreamExt, TryStreamExt};
use meridian_client::{ListRoomsQuery, MeridianClient, Room, RoomRequest, RoomSortBy, RoomType};

#[derive(Subcommand, Clone)]
pub enum RoomCommand {
    /// List rooms the caller belongs to
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a room
    Get {
        /// Room id
        id: String,
    },

    /// Create a room
    Create(CreateArgs),

    /// Delete a room
    #[command(alias = "rm")]
    Delete {
        /// Room id
        id: String,
    },
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Filter by type (group or direct)
    #[arg(long = "type")]
    room_type: Option<String>,

    /// Sort order (id, lastactivity, created)
    #[arg(long)]
    sort_by: Option<String>,

    /// Stop after this many results
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args, Clone)]
pub struct CreateArgs {
    /// Room title
    title: String,

    /// Room description
    #[arg(long)]
    description: Option<String>,

    /// Create the room moderated
    #[arg(long)]
    locked: bool,
}

impl RoomCommand {
    pub async fn run(self, client: &MeridianClient, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_rooms(args, client, use_json).await,
            Self::Get { id } => get_room(&id, client).await,
            Self::Create(args) => create_room(args, client).await,
            Self::Delete { id } => delete_room(&id, client).await,
        }
    }
}

fn parse_room_type(value: &str) -> Result<RoomType> {
    match value {
        "direct" => Ok(RoomType::Direct),
        "group" => Ok(RoomType::Group),
        other => Err(anyhow::anyhow!(
            "unknown room type '{}' (expected direct or group)",
            other
        )),
    }
}

fn parse_sort_by(value: &str) -> Result<RoomSortBy> {
    match value {
        "id" => Ok(RoomSortBy::Id),
        "lastactivity" => Ok(RoomSortBy::Lastactivity),
        "created" => Ok(RoomSortBy::Created),
        other => Err(anyhow::anyhow!(
            "unknown sort order '{}' (expected id, lastactivity or created)",
            other
        )),
    }
}

async fn list_rooms(args: ListArgs, client: &MeridianClient, use_json: bool) -> Result<()> {
    let query = ListRoomsQuery {
        room_type: args.room_type.as_deref().map(parse_room_type).transpose()?,
        sort_by: args.sort_by.as_deref().map(parse_sort_by).transpose()?,
        ..Default::default()
    };

    let stream = client.rooms().list(query);
    let stream = match args.limit {
        Some(n) => stream.take(n).boxed(),
        None => stream,
    };
    let rooms: Vec<Room> = stream.try_collect().await?;

    if use_json {
        json::print_json(&rooms)?;
    } else {
        let mut tbl = table::create_table(&["TITLE", "TYPE", "LOCKED", "ID"]);
        for room in &rooms {
            tbl.add_row(vec![
                room.title.clone().unwrap_or_else(|| "-".into()),
                room.room_type
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "-".into()),
                room.is_locked
                    .map(|locked| locked.to_string())
                    .unwrap_or_else(|| "-".into()),
                room.id.clone().unwrap_or_else(|| "-".into()),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn get_room(id: &str, client: &MeridianClient) -> Result<()> {
    let room = client.rooms().get(id).await?;
    json::print_json(&room)
}

async fn create_room(args: CreateArgs, client: &MeridianClient) -> Result<()> {
    let request = RoomRequest {
        description: args.description,
        is_locked: args.locked.then_some(true),
        ..RoomRequest::new(args.title)
    };

    let room = client.rooms().create(&request).await?;
    json::print_json(&room)
}

async fn delete_room(id: &str, client: &MeridianClient) -> Result<()> {
    client.rooms().delete(id).await?;
    println!("Deleted room '{}'", id);
    Ok(())
}
