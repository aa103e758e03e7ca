// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Describes how the access-control engine reaches the relational store

use crate::authz::clearance::TierAssignment;
use crate::context::OpContext;
use async_trait::async_trait;
use holonet_common::api::external::ListResultVec;
use holonet_common::api::external::LookupResult;
use holonet_common::api::external::UpdateResult;
use holonet_types::character::Character;
use holonet_types::clearance::ClearanceGrant;
use holonet_types::clearance::SecurityClearance;
use holonet_types::document::Document;
use holonet_types::document::DocumentKind;
use holonet_types::membership::Membership;
use holonet_types::organization::Organization;
use holonet_types::team::UserTeams;
use uuid::Uuid;

/// The data-access collaborator behind every policy decision
///
/// Persistence lives outside this crate; the application's datastore
/// implements this trait and the engine only ever reads through it.  An
/// in-memory implementation backs the tests.
///
/// Implementations return `Err` only for operational failures (the store is
/// unreachable, a row is corrupt).  "No such row" is expressed in each
/// method's return type: `ObjectNotFound` for fetches of a specific id, an
/// empty vector or `None` for the rest.  The engine relies on the
/// distinction to keep policy denials (`Ok(false)`) separate from outages
/// (`Err`).
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetches one organization by id
    async fn organization_fetch(
        &self,
        opctx: &OpContext,
        org_id: Uuid,
    ) -> LookupResult<Organization>;

    /// Lists the organizations whose parent is `org_id`
    async fn organizations_by_parent(
        &self,
        opctx: &OpContext,
        org_id: Uuid,
    ) -> ListResultVec<Organization>;

    /// Lists a character's memberships, each resolved with its organization,
    /// position (and permissions), and rank
    async fn memberships_by_character(
        &self,
        opctx: &OpContext,
        character_id: Uuid,
    ) -> ListResultVec<Membership>;

    /// Looks up a character's clearance grant, if they hold one
    async fn character_clearance(
        &self,
        opctx: &OpContext,
        character_id: Uuid,
    ) -> LookupResult<Option<ClearanceGrant>>;

    /// Lists the characters controlled by a user
    async fn characters_by_user(
        &self,
        opctx: &OpContext,
        user_id: Uuid,
    ) -> ListResultVec<Character>;

    /// Returns a user's staff-team affiliations
    ///
    /// A user on no teams gets the empty [`UserTeams`], not an error.
    async fn user_teams(
        &self,
        opctx: &OpContext,
        user_id: Uuid,
    ) -> LookupResult<UserTeams>;

    /// Fetches one document from the store named by `kind`
    async fn document_fetch(
        &self,
        opctx: &OpContext,
        kind: DocumentKind,
        document_id: Uuid,
    ) -> LookupResult<Document>;

    /// Lists every security clearance, in ascending tier order
    async fn clearances_list(
        &self,
        opctx: &OpContext,
    ) -> ListResultVec<SecurityClearance>;

    /// Applies a batch of clearance-tier writes
    ///
    /// The engine plans ladder maintenance (see [`crate::authz::clearance`])
    /// and hands the whole batch here.  Implementations must apply every
    /// assignment in a single transaction, locking enough to serialize
    /// concurrent tier mutations, so the dense-unique-tier invariant can
    /// never be observed broken.  Row creation or deletion that accompanies
    /// a planned insert or removal belongs in that same transaction.
    async fn clearances_apply_tiers(
        &self,
        opctx: &OpContext,
        tiers: &[TierAssignment],
    ) -> UpdateResult<()>;
}
