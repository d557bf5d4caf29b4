// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod profile;

pub use profile::{Config, Profile};

use anyhow::Result;

/// Resolve which profile to use
///
/// Priority:
/// 1. CLI --profile argument (MERIDIAN_PROFILE lands here too, via clap)
/// 2. Current profile from config.json
///
/// A bare URL and token from MERIDIAN_URL / MERIDIAN_ACCESS_TOKEN skip
/// profile resolution entirely; that path is handled by the caller.
pub fn resolve_profile(cli_profile: Option<&str>) -> Result<Profile> {
    if let Some(name) = cli_profile {
        return Profile::load(name);
    }

    let config = Config::load()?;
    if let Some(name) = config.current_profile() {
        return Profile::load(name);
    }

    Err(anyhow::anyhow!(
        "No profile configured. Use 'meridian profile create' or set MERIDIAN_URL and MERIDIAN_ACCESS_TOKEN."
    ))
}
