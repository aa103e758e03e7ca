// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Security clearances

use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A named, tiered gate controlling document visibility independent of
/// organization membership
///
/// Tiers are a dense, user-managed total order: tier 1 is the lowest and
/// every tier up to the highest is occupied by exactly one clearance.
/// Creating or moving a clearance shifts the affected range to keep tiers
/// contiguous and unique; that maintenance lives in
/// `holonet_auth::authz::clearance` and must be applied transactionally.
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct SecurityClearance {
    pub id: Uuid,
    pub name: String,
    pub tier: i32,
}

/// A character's resolved clearance, as handed back by clearance lookups
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize,
)]
pub struct ClearanceGrant {
    pub clearance_id: Uuid,
    pub tier: i32,
}
