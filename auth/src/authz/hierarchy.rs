// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolves organization-tree questions for the policy engine
//!
//! Organizations form a forest through `parent_id`.  The walks here are
//! iterative with visited-set guards so that malformed data (a cycle, a
//! parent pointer at a deleted row) degrades to a logged warning instead of
//! a hung request or an error the user can't act on.

use crate::context::OpContext;
use crate::storage::Storage;
use holonet_common::api::external::Error;
use holonet_common::api::external::ListResultVec;
use holonet_types::membership::Membership;
use holonet_types::organization::Organization;
use slog::trace;
use slog::warn;
use std::collections::BTreeSet;
use std::collections::VecDeque;
use uuid::Uuid;

/// Returns the ancestors of `org_id`, nearest parent first
///
/// The starting organization itself is not included.  If the starting
/// organization does not exist, that's the caller's mistake and the
/// `ObjectNotFound` propagates.  A dangling parent pointer further up is a
/// data problem we can work around: the chain is truncated at the last
/// organization that exists, with a warning.
pub async fn ancestor_chain(
    opctx: &OpContext,
    store: &dyn Storage,
    org_id: Uuid,
) -> ListResultVec<Organization> {
    let mut chain = Vec::new();
    let mut visited = BTreeSet::from([org_id]);
    let mut current = store.organization_fetch(opctx, org_id).await?;
    while let Some(parent_id) = current.parent_id {
        if !visited.insert(parent_id) {
            warn!(
                opctx.log,
                "organization hierarchy contains a cycle";
                "org_id" => org_id.to_string(),
                "repeated_org_id" => parent_id.to_string(),
            );
            break;
        }
        let parent = match store.organization_fetch(opctx, parent_id).await {
            Ok(parent) => parent,
            Err(Error::ObjectNotFound { .. }) => {
                warn!(
                    opctx.log,
                    "organization has a dangling parent pointer; \
                     truncating ancestor chain";
                    "org_id" => current.id.to_string(),
                    "parent_id" => parent_id.to_string(),
                );
                break;
            }
            Err(error) => return Err(error),
        };
        trace!(
            opctx.log,
            "resolved ancestor";
            "org_id" => org_id.to_string(),
            "ancestor_id" => parent.id.to_string(),
            "ancestor_name" => parent.name.clone(),
        );
        chain.push(parent.clone());
        current = parent;
    }
    Ok(chain)
}

/// Returns the ids of every organization below `org_id`, to any depth
///
/// The starting organization is not included.  The walk is breadth-first
/// and each organization is visited at most once, so cyclic parent data
/// cannot loop it.
pub async fn descendant_ids(
    opctx: &OpContext,
    store: &dyn Storage,
    org_id: Uuid,
) -> Result<BTreeSet<Uuid>, Error> {
    let mut descendants = BTreeSet::new();
    let mut seen = BTreeSet::from([org_id]);
    let mut frontier = VecDeque::from([org_id]);
    while let Some(current) = frontier.pop_front() {
        for child in store.organizations_by_parent(opctx, current).await? {
            if seen.insert(child.id) {
                descendants.insert(child.id);
                frontier.push_back(child.id);
            }
        }
    }
    Ok(descendants)
}

/// The set of organizations one character can see, with the memberships
/// that produced it
///
/// Membership in an organization confers access to that organization and
/// everything below it.  Leadership does not flow down: that's decided per
/// membership (see [`Membership::grants_leadership`]).
#[derive(Clone, Debug)]
pub struct OrgAccess {
    /// every accessible organization id (membership orgs plus descendants)
    pub org_ids: BTreeSet<Uuid>,
    /// the memberships themselves, for leadership and display decisions
    pub memberships: Vec<Membership>,
}

impl OrgAccess {
    pub fn empty() -> OrgAccess {
        OrgAccess { org_ids: BTreeSet::new(), memberships: Vec::new() }
    }

    pub fn contains(&self, org_id: Uuid) -> bool {
        self.org_ids.contains(&org_id)
    }
}

/// Computes [`OrgAccess`] for one character
pub async fn org_access_for_character(
    opctx: &OpContext,
    store: &dyn Storage,
    character_id: Uuid,
) -> Result<OrgAccess, Error> {
    let memberships =
        store.memberships_by_character(opctx, character_id).await?;
    let mut org_ids = BTreeSet::new();
    for membership in &memberships {
        // If the org is already present it was reached as some other
        // membership's descendant, and its own descendants came with it.
        if org_ids.insert(membership.organization.id) {
            let below =
                descendant_ids(opctx, store, membership.organization.id)
                    .await?;
            org_ids.extend(below);
        }
    }
    trace!(
        opctx.log,
        "resolved organization access";
        "character_id" => character_id.to_string(),
        "memberships" => memberships.len(),
        "org_count" => org_ids.len(),
    );
    Ok(OrgAccess { org_ids, memberships })
}

/// Narrows `access` to the subtree rooted at `org_id`
///
/// Used when a page shows one organization's corner of the tree: the result
/// is the requested organization and its descendants, intersected with what
/// the character can see at all.
pub async fn scoped_org_access(
    opctx: &OpContext,
    store: &dyn Storage,
    access: &OrgAccess,
    org_id: Uuid,
) -> Result<BTreeSet<Uuid>, Error> {
    let mut subtree = descendant_ids(opctx, store, org_id).await?;
    subtree.insert(org_id);
    Ok(subtree.intersection(&access.org_ids).copied().collect())
}
