// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Characters

use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// An in-game character controlled by a user
///
/// A user may control several characters; requests act as at most one of
/// them at a time.  `force_aware` and `active` feed the custom access
/// predicates; `clearance_id` is resolved to a tier via the clearance
/// lookup when documents are checked.
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct Character {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub active: bool,
    pub force_aware: bool,
    pub clearance_id: Option<Uuid>,
}
