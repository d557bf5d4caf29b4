// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI command implementations

pub mod devices;
pub mod people;
pub mod profile;
pub mod queues;
pub mod rooms;
pub mod webhooks;

pub use devices::DeviceCommand;
pub use people::PeopleCommand;
pub use profile::ProfileCommand;
pub use queues::QueueCommand;
pub use rooms::RoomCommand;
pub use webhooks::WebhookCommand;
