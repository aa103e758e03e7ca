// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Documents and their visibility policies

use crate::clearance::SecurityClearance;
use crate::team::Team;
use chrono::DateTime;
use chrono::Utc;
use holonet_common::api::external::ResourceType;
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;
use uuid::Uuid;

/// The visibility policy tag on an organization document
///
/// The policy determines which of the document's gating fields
/// (`list_clearance`/`view_clearance`, `assignees`) are semantically active;
/// the others are ignored for that document.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewPolicy {
    /// Visible to everyone who can see the owning organization
    Default,
    /// Gated by security-clearance tier
    SecurityClearance,
    /// Restricted to the document's assignees (and org leadership)
    AssigneesOnly,
}

/// Which of the three document stores a document lives in
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Game,
    Organization,
    Personal,
}

impl DocumentKind {
    pub fn resource_type(self) -> ResourceType {
        match self {
            DocumentKind::Game => ResourceType::GameDocument,
            DocumentKind::Organization => ResourceType::OrganizationDocument,
            DocumentKind::Personal => ResourceType::PersonalDocument,
        }
    }
}

/// A lore document owned by a staff team
///
/// Game documents are universally listable and readable; editing is gated
/// by the navigation rules, not by this record.
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct GameDocument {
    pub id: Uuid,
    pub team: Team,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A document owned by an organization, gated by its `policy`
///
/// `list_clearance` and `view_clearance` are independently settable: the
/// list gate can be looser than the read gate so that members know a
/// document exists without being able to open it.  Both are resolved
/// clearances (not bare ids) because the policy engine compares tiers.
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct OrganizationDocument {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub body: String,
    pub policy: ViewPolicy,
    pub list_clearance: Option<SecurityClearance>,
    pub view_clearance: Option<SecurityClearance>,
    /// Characters this document is assigned to.  Only consulted under
    /// [`ViewPolicy::AssigneesOnly`].
    pub assignees: BTreeSet<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A private document authored by a single character
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct PersonalDocument {
    pub id: Uuid,
    pub author_character_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A document from one of the three stores
///
/// The variants share a visibility contract but differ in owning entity,
/// which is why the policy engine takes the sum type rather than a common
/// trait.
#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Document {
    Game(GameDocument),
    Organization(OrganizationDocument),
    Personal(PersonalDocument),
}

impl Document {
    pub fn id(&self) -> Uuid {
        match self {
            Document::Game(doc) => doc.id,
            Document::Organization(doc) => doc.id,
            Document::Personal(doc) => doc.id,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Game(_) => DocumentKind::Game,
            Document::Organization(_) => DocumentKind::Organization,
            Document::Personal(_) => DocumentKind::Personal,
        }
    }
}
