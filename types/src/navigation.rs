// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Navigation entries and the access rules that gate them
//!
//! The same rule language gates UI navigation entries and administrative
//! operations.  Rules come from configuration, so the types here are
//! deserializable; the evaluator lives in `holonet_auth::authz::rules`.

use crate::role::Role;
use crate::team::Team;
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;

/// An access rule gating a navigation entry or administrative operation
///
/// Each variant carries exactly the fields its check needs, so the evaluator
/// match is exhaustive and a rule cannot be configured with, say, a required
/// team it would never consult.  `Open` is the one rule that never inspects
/// the actor; every other variant denies a banned user before its own checks
/// run.
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(tag = "access", rename_all = "snake_case")]
pub enum AccessRule {
    /// Always allowed, even to anonymous or banned visitors
    Open,
    /// Any authenticated, non-banned user
    Authenticated,
    /// Users whose role meets `role`
    Role { role: Role },
    /// Users on `team`; `override_role` short-circuits to allow
    Team {
        team: Team,
        #[serde(default)]
        override_role: Option<Role>,
    },
    /// Users meeting `role` and on `team`; `override_role` short-circuits
    RoleAndTeam {
        role: Role,
        team: Team,
        #[serde(default)]
        override_role: Option<Role>,
    },
    /// A named predicate from the registry, behind optional role/team
    /// guards; `override_role` short-circuits past guards and predicate
    /// alike
    Custom {
        predicate: String,
        #[serde(default)]
        role: Option<Role>,
        #[serde(default)]
        team: Option<Team>,
        #[serde(default)]
        override_role: Option<Role>,
    },
}

/// One entry in a navigation menu
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    pub rule: AccessRule,
}
