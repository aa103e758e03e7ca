// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document visibility policy
//!
//! Two decisions are made per document, independently: whether the
//! viewer may learn the document *exists* ([`can_list`]) and whether they
//! may open its *content* ([`can_read`]).  The split supports "you can see
//! this exists but need higher clearance to read it": an organization
//! document may carry a looser `list_clearance` than its `view_clearance`,
//! so listability never implies readability.
//!
//! Listing starts from organization containment: the document's owning
//! organization must be in the viewer's [`OrgAccess`] before any policy is
//! consulted.  Reading does not recheck containment; by the time content is
//! rendered the document has already been reached through a listing or a
//! direct link, and the policy gates stand on their own.
//!
//! Everything here is a pure function over already-loaded data.  Missing
//! relations (no clearance grant, no assignees, no acting character) read
//! as the most restrictive value, never as an error.

use crate::authn;
use crate::authz::clearance::has_clearance;
use crate::authz::hierarchy::org_access_for_character;
use crate::authz::hierarchy::OrgAccess;
use crate::authz::roles::role_meets;
use crate::context::OpContext;
use crate::storage::Storage;
use holonet_common::api::external::Error;
use holonet_common::api::external::LookupResult;
use holonet_types::document::Document;
use holonet_types::document::DocumentKind;
use holonet_types::document::OrganizationDocument;
use holonet_types::document::ViewPolicy;
use holonet_types::membership::Membership;
use holonet_types::role::Role;
use slog::trace;
use uuid::Uuid;

/// The viewer's precomputed access profile
///
/// Loaded once per request and threaded through every visibility decision
/// so that a listing of N documents costs one profile load, not N.
#[derive(Clone, Debug)]
pub struct CharacterProfile {
    /// the acting character, if the viewer has selected one
    pub character_id: Option<Uuid>,
    /// the acting character's clearance tier, if they hold a grant
    pub clearance_tier: Option<i32>,
    /// organization access derived from the character's memberships
    pub org_access: OrgAccess,
}

impl CharacterProfile {
    /// The profile of an anonymous visitor: no character, no clearance, no
    /// memberships
    pub fn anonymous() -> CharacterProfile {
        CharacterProfile {
            character_id: None,
            clearance_tier: None,
            org_access: OrgAccess::empty(),
        }
    }

    /// Loads the profile for one acting character
    pub async fn load(
        opctx: &OpContext,
        store: &dyn Storage,
        character_id: Uuid,
    ) -> Result<CharacterProfile, Error> {
        let org_access =
            org_access_for_character(opctx, store, character_id).await?;
        let grant = store.character_clearance(opctx, character_id).await?;
        Ok(CharacterProfile {
            character_id: Some(character_id),
            clearance_tier: grant.map(|grant| grant.tier),
            org_access,
        })
    }
}

/// Returns whether any of `memberships` grants leadership in organization
/// `org_id`
///
/// Leadership is scoped to the one organization the position is held in.
/// It does not extend up or down the tree.
pub fn has_leadership(memberships: &[Membership], org_id: Uuid) -> bool {
    memberships.iter().any(|membership| {
        membership.organization.id == org_id && membership.grants_leadership()
    })
}

/// Decides whether an organization document's existence appears in listings
/// for this viewer
pub fn can_list(
    document: &OrganizationDocument,
    profile: &CharacterProfile,
) -> bool {
    // Containment comes first.  No policy or clearance shows a document
    // whose organization is outside the viewer's access.
    if !profile.org_access.contains(document.organization_id) {
        return false;
    }
    match document.policy {
        ViewPolicy::Default => true,
        ViewPolicy::SecurityClearance => match &document.list_clearance {
            None => true,
            Some(clearance) => {
                has_clearance(profile.clearance_tier, Some(clearance.tier))
            }
        },
        ViewPolicy::AssigneesOnly => {
            is_assignee(document, profile)
                || has_leadership(
                    &profile.org_access.memberships,
                    document.organization_id,
                )
        }
    }
}

/// Decides whether this viewer may open an organization document's content
pub fn can_read(
    document: &OrganizationDocument,
    profile: &CharacterProfile,
) -> bool {
    match document.policy {
        ViewPolicy::Default => true,
        ViewPolicy::SecurityClearance => {
            let Some(clearance) = &document.view_clearance else {
                return true;
            };
            // A viewer with no clearance grant at all is turned away
            // before leadership is consulted.  Leadership overrides an
            // insufficient tier, not a missing one.
            let Some(tier) = profile.clearance_tier else {
                return false;
            };
            has_leadership(
                &profile.org_access.memberships,
                document.organization_id,
            ) || tier >= clearance.tier
        }
        ViewPolicy::AssigneesOnly => {
            is_assignee(document, profile)
                || has_leadership(
                    &profile.org_access.memberships,
                    document.organization_id,
                )
        }
    }
}

fn is_assignee(
    document: &OrganizationDocument,
    profile: &CharacterProfile,
) -> bool {
    profile
        .character_id
        .is_some_and(|character_id| document.assignees.contains(&character_id))
}

/// Decides listability for any document variant
///
/// Game documents are open.  Personal documents belong to their author,
/// with administrators allowed in.  Organization documents go through
/// [`can_list`].
pub fn can_list_document(
    authn: &authn::Context,
    profile: &CharacterProfile,
    document: &Document,
) -> bool {
    match document {
        Document::Game(_) => true,
        Document::Organization(document) => can_list(document, profile),
        Document::Personal(document) => {
            profile.character_id == Some(document.author_character_id)
                || role_meets(
                    Some(Role::Admin),
                    authn.actor().map(|actor| actor.role),
                )
        }
    }
}

/// Decides readability for any document variant
pub fn can_read_document(
    authn: &authn::Context,
    profile: &CharacterProfile,
    document: &Document,
) -> bool {
    match document {
        Document::Game(_) => true,
        Document::Organization(document) => can_read(document, profile),
        Document::Personal(document) => {
            profile.character_id == Some(document.author_character_id)
                || role_meets(
                    Some(Role::Admin),
                    authn.actor().map(|actor| actor.role),
                )
        }
    }
}

/// Fetches a document and enforces the read policy
///
/// A denied read comes back as `ObjectNotFound`, the same error a
/// nonexistent id produces, so responses never distinguish "doesn't exist"
/// from "exists but you may not read it".
pub async fn read_document(
    opctx: &OpContext,
    store: &dyn Storage,
    profile: &CharacterProfile,
    kind: DocumentKind,
    document_id: Uuid,
) -> LookupResult<Document> {
    let document = store.document_fetch(opctx, kind, document_id).await?;
    if !can_read_document(&opctx.authn, profile, &document) {
        trace!(
            opctx.log,
            "document read denied";
            "kind" => ?kind,
            "document_id" => document_id.to_string(),
        );
        return Err(Error::not_found_by_id(kind.resource_type(), &document_id));
    }
    Ok(document)
}
