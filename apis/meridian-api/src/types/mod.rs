// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Meridian API type definitions

pub mod auth;
pub mod common;
pub mod devices;
pub mod licenses;
pub mod locations;
pub mod meetings;
pub mod organizations;
pub mod people;
pub mod rooms;
pub mod telephony;
pub mod webhooks;
pub mod workspaces;

pub use auth::*;
pub use common::*;
pub use devices::*;
pub use licenses::*;
pub use locations::*;
pub use meetings::*;
pub use organizations::*;
pub use people::*;
pub use rooms::*;
pub use telephony::*;
pub use webhooks::*;
pub use workspaces::*;
