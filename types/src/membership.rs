// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Memberships: the character/organization join

use crate::organization::Organization;
use crate::position::Position;
use crate::position::PositionAccess;
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A rank held within an organization
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct Rank {
    pub id: Uuid,
    pub name: String,
    pub abbreviation: String,
}

/// Links one character to one organization
///
/// A character may hold memberships in multiple organizations at once.
/// Memberships are created when a character joins an organization and
/// deleted or mutated on position change or removal; no history is kept.
/// Lookups hand these back fully resolved (organization, position with its
/// permissions, rank) so that policy decisions need no further fetches.
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct Membership {
    pub id: Uuid,
    pub character_id: Uuid,
    pub organization: Organization,
    pub position: Option<Position>,
    pub rank: Option<Rank>,
    /// Exactly one membership per character should be flagged primary for
    /// display purposes.  This is not enforced; see [`primary_membership`].
    pub primary: bool,
}

impl Membership {
    /// Returns whether this membership's position carries a leadership
    /// permission
    pub fn grants_leadership(&self) -> bool {
        self.position.as_ref().is_some_and(|p| p.grants_leadership())
    }

    /// Display classification for this membership
    pub fn position_access(&self) -> PositionAccess {
        self.position.as_ref().map_or(PositionAccess::Member, |p| p.access)
    }
}

/// Picks the membership shown first on a character sheet: the one flagged
/// primary, falling back to the first listed membership when none is (or
/// when, against expectations, several are -- the first flagged one wins)
pub fn primary_membership(memberships: &[Membership]) -> Option<&Membership> {
    memberships.iter().find(|m| m.primary).or_else(|| memberships.first())
}
