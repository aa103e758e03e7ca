// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Organizations: the hierarchical groups characters join

use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Describes what kind of group an organization is
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OrgKind {
    Faction,
    Unit,
    Ministry,
    Order,
    Senate,
    HighCouncil,
}

/// A hierarchical group entity that characters join via memberships
///
/// Organizations form a forest: each holds at most a weak reference to its
/// parent.  Children are not stored; they are computed by querying for
/// organizations whose `parent_id` equals this organization's id.  The
/// parent-pointer graph is assumed acyclic by construction, though the
/// hierarchy walks in `holonet_auth` tolerate a malformed tree anyway.
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub abbreviation: String,
    pub kind: OrgKind,
    pub parent_id: Option<Uuid>,
}
