// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Positions held within an organization and the permissions they carry

use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;
use uuid::Uuid;

/// A permission token granted by a position
///
/// These used to be free-form strings in the database; they are a closed
/// enum here so that a misspelled token cannot silently fail a check.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    JsonSchema,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Leader,
    SecondInCommand,
    Leadership,
    ManageMembers,
    ManageAssets,
    ManageDocuments,
    ManageRanks,
}

impl Permission {
    /// Returns whether this token is one of the leadership permissions
    ///
    /// Leadership permissions grant override access to clearance and
    /// assignment gates on documents within the holder's own organization.
    pub fn grants_leadership(self) -> bool {
        matches!(
            self,
            Permission::Leader
                | Permission::SecondInCommand
                | Permission::Leadership
        )
    }
}

/// Display classification for a position
///
/// Used by rosters and character sheets to label leaders and seconds, and
/// deliberately distinct from the raw permission tokens: a position can be
/// displayed as ordinary while still carrying management permissions, and
/// vice versa.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PositionAccess {
    OrganizationLeader,
    Organization2ic,
    OrganizationAdmin,
    Member,
}

/// A named post within exactly one organization
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct Position {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub permissions: BTreeSet<Permission>,
    pub access: PositionAccess,
}

impl Position {
    /// Returns whether any of this position's permissions is a leadership
    /// permission
    pub fn grants_leadership(&self) -> bool {
        self.permissions.iter().any(|p| p.grants_leadership())
    }
}
