// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Staff teams

use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;
use strum::EnumIter;

/// The fixed set of staff teams
///
/// The reference deployment keyed these by configuration strings resolved at
/// runtime; the set has been stable for years, so it is a closed enum here
/// and an unknown team name is a deserialization error rather than a policy
/// decision.
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
pub enum Team {
    Character,
    Moderation,
    Force,
    Operations,
    Publication,
}

/// A user's staff-team affiliations
#[derive(
    Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize,
)]
pub struct UserTeams {
    /// The team shown on the user's staff badge, if any
    pub primary: Option<Team>,
    /// Every team the user serves on (the primary team is conventionally
    /// also listed here, but rule checks do not rely on that)
    pub teams: BTreeSet<Team>,
}

impl UserTeams {
    /// Returns whether the user serves on `team`, either as their primary
    /// team or as an ordinary member
    pub fn is_on(&self, team: Team) -> bool {
        self.primary == Some(team) || self.teams.contains(&team)
    }
}
