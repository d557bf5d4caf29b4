// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Calling administration APIs
//!
//! Organization-level calling configuration lives under the
//! `telephony/config` prefix; per-person calling features live under
//! `people/{personId}/features`. Both need an admin token with a
//! calling-enabled organization.

mod forwarding;
mod numbers;
mod queues;

pub use forwarding::Forwarding;
pub use numbers::Numbers;
pub use queues::CallQueues;

use std::sync::Arc;

use crate::session::RestSession;

/// Entry point for the calling administration APIs
#[derive(Clone)]
pub struct Telephony {
    session: Arc<RestSession>,
}

impl Telephony {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// Call queue configuration
    pub fn queues(&self) -> CallQueues {
        CallQueues::new(Arc::clone(&self.session))
    }

    /// Per-person call forwarding settings
    pub fn forwarding(&self) -> Forwarding {
        Forwarding::new(Arc::clone(&self.session))
    }

    /// Phone number inventory
    pub fn numbers(&self) -> Numbers {
        Numbers::new(Arc::clone(&self.session))
    }
}
