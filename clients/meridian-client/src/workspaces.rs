// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workspaces API

use std::sync::Arc;

use futures_util::stream::BoxStream;
use meridian_api::{ListWorkspacesQuery, Workspace, WorkspaceRequest};

use crate::Error;
use crate::endpoint::{ApiChild, paginate};
use crate::session::RestSession;

/// Workspaces collection, bound to the `workspaces` endpoint prefix
#[derive(Clone)]
pub struct Workspaces {
    session: Arc<RestSession>,
}

impl ApiChild for Workspaces {
    const PREFIX: &'static str = "workspaces";

    fn session(&self) -> &Arc<RestSession> {
        &self.session
    }
}

impl Workspaces {
    pub(crate) fn new(session: Arc<RestSession>) -> Self {
        Self { session }
    }

    /// List workspaces
    pub fn list(&self, query: ListWorkspacesQuery) -> BoxStream<'static, Result<Workspace, Error>> {
        let first = self
            .collection_url()
            .and_then(|url| self.session.url_with_query(url, &query));
        paginate(&self.session, first)
    }

    /// Create a workspace
    pub async fn create(&self, workspace: &WorkspaceRequest) -> Result<Workspace, Error> {
        let url = self.collection_url()?;
        self.session.post_json(url, workspace).await
    }

    /// Get a workspace by id
    pub async fn get(&self, workspace_id: &str) -> Result<Workspace, Error> {
        let url = self.item_url(&[workspace_id])?;
        self.session.get_json(url).await
    }

    /// Replace a workspace's details
    pub async fn update(
        &self,
        workspace_id: &str,
        workspace: &WorkspaceRequest,
    ) -> Result<Workspace, Error> {
        let url = self.item_url(&[workspace_id])?;
        self.session.put_json(url, workspace).await
    }

    /// Delete a workspace.
    ///
    /// Devices assigned to the workspace fall back to unassigned; they
    /// are not deregistered.
    pub async fn delete(&self, workspace_id: &str) -> Result<(), Error> {
        let url = self.item_url(&[workspace_id])?;
        self.session.delete(url).await
    }
}
