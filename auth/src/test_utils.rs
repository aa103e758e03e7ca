// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared helpers for this crate's tests

use crate::authz::clearance::TierAssignment;
use crate::context::OpContext;
use crate::storage::Storage;
use async_trait::async_trait;
use holonet_common::api::external::Error;
use holonet_common::api::external::ListResultVec;
use holonet_common::api::external::LookupResult;
use holonet_common::api::external::ResourceType;
use holonet_common::api::external::UpdateResult;
use holonet_common::FileKv;
use holonet_types::character::Character;
use holonet_types::clearance::ClearanceGrant;
use holonet_types::clearance::SecurityClearance;
use holonet_types::document::Document;
use holonet_types::document::DocumentKind;
use holonet_types::membership::Membership;
use holonet_types::organization::OrgKind;
use holonet_types::organization::Organization;
use holonet_types::position::Permission;
use holonet_types::position::Position;
use holonet_types::position::PositionAccess;
use holonet_types::team::UserTeams;
use slog::o;
use slog::Drain;
use slog::Logger;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Mutex;
use uuid::Uuid;

/// Returns a logger whose output the test runner captures per test
pub fn test_logger(test_name: &str) -> Logger {
    let decorator =
        slog_term::PlainSyncDecorator::new(slog_term::TestStdoutWriter);
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let log = Logger::root(drain, o!(FileKv));
    log.new(o!("test" => test_name.to_string()))
}

/// A position whose permission set grants leadership
pub fn leadership_position(org_id: Uuid) -> Position {
    Position {
        id: Uuid::new_v4(),
        organization_id: org_id,
        name: "Commanding Officer".to_string(),
        permissions: BTreeSet::from([
            Permission::Leader,
            Permission::ManageDocuments,
        ]),
        access: PositionAccess::OrganizationLeader,
    }
}

/// A position with no leadership tokens
pub fn staff_position(org_id: Uuid) -> Position {
    Position {
        id: Uuid::new_v4(),
        organization_id: org_id,
        name: "Analyst".to_string(),
        permissions: BTreeSet::from([Permission::ManageDocuments]),
        access: PositionAccess::Member,
    }
}

/// A [`Storage`] over plain maps, enough to exercise the whole engine
///
/// Fixtures are built single-threaded through the `&mut self` methods,
/// then the store is shared immutably with the code under test.  The one
/// trait method that writes (`clearances_apply_tiers`) goes through a
/// mutex, which also stands in for the real store's transactionality.
pub struct InMemoryStorage {
    orgs: BTreeMap<Uuid, Organization>,
    characters: BTreeMap<Uuid, Character>,
    memberships: BTreeMap<Uuid, Vec<Membership>>,
    clearance_grants: BTreeMap<Uuid, ClearanceGrant>,
    teams: BTreeMap<Uuid, UserTeams>,
    documents: BTreeMap<Uuid, Document>,
    clearances: Mutex<Vec<SecurityClearance>>,
    unreachable: bool,
}

impl InMemoryStorage {
    pub fn new() -> InMemoryStorage {
        InMemoryStorage {
            orgs: BTreeMap::new(),
            characters: BTreeMap::new(),
            memberships: BTreeMap::new(),
            clearance_grants: BTreeMap::new(),
            teams: BTreeMap::new(),
            documents: BTreeMap::new(),
            clearances: Mutex::new(Vec::new()),
            unreachable: false,
        }
    }

    /// Makes every subsequent call fail like a store outage
    pub fn set_unreachable(&mut self) {
        self.unreachable = true;
    }

    pub fn add_org(
        &mut self,
        name: &str,
        kind: OrgKind,
        parent_id: Option<Uuid>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let abbreviation: String = name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect();
        self.orgs.insert(
            id,
            Organization {
                id,
                name: name.to_string(),
                abbreviation,
                kind,
                parent_id,
            },
        );
        id
    }

    pub fn set_org_parent(&mut self, org_id: Uuid, parent_id: Option<Uuid>) {
        self.orgs.get_mut(&org_id).unwrap().parent_id = parent_id;
    }

    pub fn add_character(&mut self, name: &str, user_id: Uuid) -> Uuid {
        let id = Uuid::new_v4();
        self.characters.insert(
            id,
            Character {
                id,
                user_id,
                name: name.to_string(),
                active: true,
                force_aware: false,
                clearance_id: None,
            },
        );
        id
    }

    pub fn set_character_active(&mut self, character_id: Uuid, active: bool) {
        self.characters.get_mut(&character_id).unwrap().active = active;
    }

    pub fn set_force_aware(&mut self, character_id: Uuid, force_aware: bool) {
        self.characters.get_mut(&character_id).unwrap().force_aware =
            force_aware;
    }

    pub fn add_membership(
        &mut self,
        character_id: Uuid,
        org_id: Uuid,
        position: Option<Position>,
        primary: bool,
    ) -> Uuid {
        let organization = self.orgs.get(&org_id).unwrap().clone();
        let id = Uuid::new_v4();
        self.memberships.entry(character_id).or_default().push(Membership {
            id,
            character_id,
            organization,
            position,
            rank: None,
            primary,
        });
        id
    }

    pub fn add_clearance(&mut self, name: &str, tier: i32) -> Uuid {
        let id = Uuid::new_v4();
        self.clearances.lock().unwrap().push(SecurityClearance {
            id,
            name: name.to_string(),
            tier,
        });
        id
    }

    pub fn grant_clearance(
        &mut self,
        character_id: Uuid,
        clearance_id: Uuid,
        tier: i32,
    ) {
        self.clearance_grants
            .insert(character_id, ClearanceGrant { clearance_id, tier });
        self.characters.get_mut(&character_id).unwrap().clearance_id =
            Some(clearance_id);
    }

    pub fn set_user_teams(&mut self, user_id: Uuid, teams: UserTeams) {
        self.teams.insert(user_id, teams);
    }

    pub fn add_document(&mut self, document: Document) -> Uuid {
        let id = document.id();
        self.documents.insert(id, document);
        id
    }

    fn reachable(&self) -> Result<(), Error> {
        if self.unreachable {
            return Err(Error::unavail("injected store outage"));
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn organization_fetch(
        &self,
        _opctx: &OpContext,
        org_id: Uuid,
    ) -> LookupResult<Organization> {
        self.reachable()?;
        self.orgs.get(&org_id).cloned().ok_or_else(|| {
            Error::not_found_by_id(ResourceType::Organization, &org_id)
        })
    }

    async fn organizations_by_parent(
        &self,
        _opctx: &OpContext,
        org_id: Uuid,
    ) -> ListResultVec<Organization> {
        self.reachable()?;
        Ok(self
            .orgs
            .values()
            .filter(|org| org.parent_id == Some(org_id))
            .cloned()
            .collect())
    }

    async fn memberships_by_character(
        &self,
        _opctx: &OpContext,
        character_id: Uuid,
    ) -> ListResultVec<Membership> {
        self.reachable()?;
        Ok(self.memberships.get(&character_id).cloned().unwrap_or_default())
    }

    async fn character_clearance(
        &self,
        _opctx: &OpContext,
        character_id: Uuid,
    ) -> LookupResult<Option<ClearanceGrant>> {
        self.reachable()?;
        Ok(self.clearance_grants.get(&character_id).copied())
    }

    async fn characters_by_user(
        &self,
        _opctx: &OpContext,
        user_id: Uuid,
    ) -> ListResultVec<Character> {
        self.reachable()?;
        Ok(self
            .characters
            .values()
            .filter(|character| character.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn user_teams(
        &self,
        _opctx: &OpContext,
        user_id: Uuid,
    ) -> LookupResult<UserTeams> {
        self.reachable()?;
        Ok(self.teams.get(&user_id).cloned().unwrap_or_default())
    }

    async fn document_fetch(
        &self,
        _opctx: &OpContext,
        kind: DocumentKind,
        document_id: Uuid,
    ) -> LookupResult<Document> {
        self.reachable()?;
        self.documents
            .get(&document_id)
            .filter(|document| document.kind() == kind)
            .cloned()
            .ok_or_else(|| {
                Error::not_found_by_id(kind.resource_type(), &document_id)
            })
    }

    async fn clearances_list(
        &self,
        _opctx: &OpContext,
    ) -> ListResultVec<SecurityClearance> {
        self.reachable()?;
        let mut ladder = self.clearances.lock().unwrap().clone();
        ladder.sort_by_key(|clearance| clearance.tier);
        Ok(ladder)
    }

    async fn clearances_apply_tiers(
        &self,
        _opctx: &OpContext,
        tiers: &[TierAssignment],
    ) -> UpdateResult<()> {
        self.reachable()?;
        let mut ladder = self.clearances.lock().unwrap();
        for assignment in tiers {
            let clearance = ladder
                .iter_mut()
                .find(|clearance| clearance.id == assignment.clearance_id)
                .unwrap();
            clearance.tier = assignment.tier;
        }
        Ok(())
    }
}
