// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management commands

use crate::config::{Config, Profile};
use crate::output::{json, table};
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Clone)]
pub enum ProfileCommand {
    /// List all profiles
    #[command(alias = "ls")]
    List,

    /// Get profile details
    Get {
        /// Profile name (defaults to current)
        name: Option<String>,
    },

    /// Create a new profile
    Create {
        /// Profile name
        name: String,

        /// API base URL, including the version prefix
        #[arg(long)]
        url: String,

        /// Access token
        #[arg(long)]
        token: String,

        /// Leave the current profile unchanged
        #[arg(long)]
        no_set_current: bool,
    },

    /// Delete a profile
    #[command(alias = "rm")]
    Delete {
        /// Profile name(s)
        names: Vec<String>,

        /// Allow deleting the current profile
        #[arg(short, long)]
        force: bool,
    },

    /// Set the current profile
    SetCurrent {
        /// Profile name (use '-' for previous)
        name: String,
    },
}

impl ProfileCommand {
    pub fn run(self, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_profiles(use_json),
            Self::Get { name } => get_profile(name, use_json),
            Self::Create {
                name,
                url,
                token,
                no_set_current,
            } => create_profile(name, url, token, no_set_current),
            Self::Delete { names, force } => delete_profiles(&names, force),
            Self::SetCurrent { name } => set_current_profile(&name),
        }
    }
}

fn list_profiles(use_json: bool) -> Result<()> {
    let config = Config::load()?;
    let current_name = config.current_profile();

    let mut profiles = Vec::new();
    for name in Profile::list_all()? {
        profiles.push(Profile::load(&name)?);
    }

    if use_json {
        json::print_json(&profiles)?;
    } else {
        let mut tbl = table::create_table(&["NAME", "CURR", "URL"]);
        for profile in &profiles {
            let marker = if Some(profile.name.as_str()) == current_name {
                "*"
            } else {
                ""
            };
            tbl.add_row(vec![profile.name.as_str(), marker, profile.url.as_str()]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

fn get_profile(name: Option<String>, use_json: bool) -> Result<()> {
    let profile = match name {
        Some(n) => Profile::load(&n)?,
        None => {
            let config = Config::load()?;
            let current = config
                .current_profile()
                .ok_or_else(|| anyhow::anyhow!("No current profile set"))?;
            Profile::load(current)?
        }
    };

    if use_json {
        json::print_json(&profile)?;
    } else {
        println!("Name:  {}", profile.name);
        println!("URL:   {}", profile.url);
        println!("Token: {}", profile.token);
    }
    Ok(())
}

fn create_profile(name: String, url: String, token: String, no_set_current: bool) -> Result<()> {
    if Profile::list_all()?.contains(&name) {
        return Err(anyhow::anyhow!("Profile '{}' already exists", name));
    }

    let profile = Profile::new(name.clone(), url, token);
    profile.save()?;
    println!("Created profile '{}'", name);

    if !no_set_current {
        let mut config = Config::load()?;
        config.set_current_profile(&name);
        config.save()?;
        println!("Set '{}' as current profile", name);
    }

    Ok(())
}

fn delete_profiles(names: &[String], force: bool) -> Result<()> {
    let mut config = Config::load()?;

    for name in names {
        let is_current = config.current_profile() == Some(name.as_str());
        if is_current && !force {
            return Err(anyhow::anyhow!(
                "'{}' is the current profile; pass --force to delete it",
                name
            ));
        }

        Profile::delete(name)?;
        if is_current {
            config.profile = None;
            config.save()?;
        }
        println!("Deleted profile '{}'", name);
    }
    Ok(())
}

fn set_current_profile(name: &str) -> Result<()> {
    let mut config = Config::load()?;

    let name = if name == "-" {
        config
            .old_profile
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No previous profile"))?
    } else {
        // Verify profile exists
        Profile::load(name)?;
        name.to_string()
    };

    config.set_current_profile(&name);
    config.save()?;
    println!("Current profile: {}", name);
    Ok(())
}
