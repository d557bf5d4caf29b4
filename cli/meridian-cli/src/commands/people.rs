// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! People directory commands

use crate::output::{json, table};
use anyhow::Result;
use clap::{Args, Subcommand};
use futures_util::{StreamExt, TryStreamExt};
use meridian_client::{ListPeopleQuery, MeridianClient, Person, PersonRequest};

#[derive(Subcommand, Clone)]
pub enum PeopleCommand {
    /// List people in the organization
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one person's directory entry
    Get {
        /// Person id, or "me" for the caller's own entry
        id: String,
    },

    /// Add a person to the directory
    Create(CreateArgs),

    /// Remove a person from the directory
    #[command(alias = "rm")]
    Delete {
        /// Person id
        id: String,
    },
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Filter by email address
    #[arg(long)]
    email: Option<String>,

    /// Filter by display name prefix
    #[arg(long)]
    display_name: Option<String>,

    /// Filter by a comma-separated list of ids
    #[arg(long)]
    id: Option<String>,

    /// Filter by location
    #[arg(long)]
    location_id: Option<String>,

    /// Stop after this many results
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args, Clone)]
pub struct CreateArgs {
    /// Email address (also the login)
    email: String,

    /// Display name
    #[arg(long)]
    display_name: Option<String>,

    /// First name
    #[arg(long)]
    first_name: Option<String>,

    /// Last name
    #[arg(long)]
    last_name: Option<String>,

    /// Location id
    #[arg(long)]
    location_id: Option<String>,

    /// Department
    #[arg(long)]
    department: Option<String>,

    /// Job title
    #[arg(long)]
    title: Option<String>,
}

impl PeopleCommand {
    pub async fn run(self, client: &MeridianClient, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_people(args, client, use_json).await,
            Self::Get { id } => get_person(&id, client).await,
            Self::Create(args) => create_person(args, client).await,
            Self::Delete { id } => delete_person(&id, client).await,
        }
    }
}

async fn list_people(args: ListArgs, client: &MeridianClient, use_json: bool) -> Result<()> {
    let query = ListPeopleQuery {
        email: args.email,
        display_name: args.display_name,
        id: args.id,
        location_id: args.location_id,
        ..Default::default()
    };

    let stream = client.people().list(query);
    let stream = match args.limit {
        Some(n) => stream.take(n).boxed(),
        None => stream,
    };
    let people: Vec<Person> = stream.try_collect().await?;

    if use_json {
        json::print_json(&people)?;
    } else {
        let mut tbl = table::create_table(&["EMAIL", "DISPLAY NAME", "STATUS", "ID"]);
        for person in &people {
            let email = person
                .emails
                .as_ref()
                .and_then(|emails| emails.first())
                .map(String::as_str)
                .unwrap_or("-");
            tbl.add_row(vec![
                email.to_string(),
                person.display_name.clone().unwrap_or_else(|| "-".into()),
                person
                    .status
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "-".into()),
                person.id.clone().unwrap_or_else(|| "-".into()),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn get_person(id: &str, client: &MeridianClient) -> Result<()> {
    let person = if id == "me" {
        client.people().me().await?
    } else {
        client.people().get(id).await?
    };
    json::print_json(&person)
}

async fn create_person(args: CreateArgs, client: &MeridianClient) -> Result<()> {
    let request = PersonRequest {
        display_name: args.display_name,
        first_name: args.first_name,
        last_name: args.last_name,
        location_id: args.location_id,
        department: args.department,
        title: args.title,
        ..PersonRequest::new(args.email)
    };

    let person = client.people().create(&request).await?;
    json::print_json(&person)
}

async fn delete_person(id: &str, client: &MeridianClient) -> Result<()> {
    client.people().delete(id).await?;
    println!("Deleted person '{}'", id);
    Ok(())
}
