// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Site-wide user roles

use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use strum::EnumIter;

/// A user's site-wide role, ordered from least to most privileged
///
/// Every user has exactly one role.  The declaration order is load-bearing:
/// role comparisons are comparisons of position in this list, which is why
/// the type derives `Ord`.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    EnumIter,
    Eq,
    JsonSchema,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Banned,
    Player,
    Staff,
    GameModerator,
    AssistantAdmin,
    Admin,
    SystemAdmin,
}

impl Role {
    /// Returns whether this role meets or exceeds `required`
    ///
    /// This is the total-order comparison only.  The rule evaluator layers
    /// its own handling of missing roles (no requirement, or no actor) on
    /// top of this.
    pub fn meets(self, required: Role) -> bool {
        self >= required
    }
}
