// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named predicates for custom access rules
//!
//! A `custom` access rule refers to a predicate by name, so the set of
//! names is part of the configuration surface.  Predicates are registered
//! into a [`PredicateRegistry`] at process start and the registry is
//! immutable afterwards.  Menu configuration is validated against the
//! registry when it is loaded: a typo becomes a [`ConfigError`] at startup
//! rather than a mystifying deny at evaluation time.  (Evaluation still
//! fails closed on an unknown name, as the last line of defense.)

use crate::context::OpContext;
use crate::storage::Storage;
use futures::future::BoxFuture;
use futures::FutureExt;
use holonet_common::api::external::Error;
use holonet_types::navigation::AccessRule;
use holonet_types::navigation::NavItem;
use holonet_types::organization::OrgKind;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

/// Names a predicate, as access-rule configuration refers to it
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct PredicateName(pub &'static str);

/// user controls at least one active character
pub const HAS_ACTIVE_CHARACTER: PredicateName =
    PredicateName("has_active_character");
/// some active character of the user sits in a senate organization
pub const SENATE_MEMBER: PredicateName = PredicateName("senate_member");
/// like [`SENATE_MEMBER`], but the seat must grant leadership
pub const SENATE_LEADERSHIP: PredicateName =
    PredicateName("senate_leadership");
/// some active character of the user sits on a high council
pub const HIGH_COUNCIL: PredicateName = PredicateName("high_council");
/// user controls an active, force-aware character
pub const FORCE_AWARE: PredicateName = PredicateName("force_aware");

impl fmt::Display for PredicateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A named boolean check over the acting user
///
/// Predicates answer for the user behind the `OpContext`, reading whatever
/// they need through the store.  An anonymous context answers `false`.
/// Like the rest of the engine, `Err` means the store failed, not that
/// access was denied.
pub trait Predicate: Send + Sync {
    fn name(&self) -> PredicateName;

    fn check<'a, 'b, 'c, 'f>(
        &'a self,
        opctx: &'b OpContext,
        store: &'c dyn Storage,
    ) -> BoxFuture<'f, Result<bool, Error>>
    where
        'a: 'f,
        'b: 'f,
        'c: 'f;
}

struct HasActiveCharacter;

impl Predicate for HasActiveCharacter {
    fn name(&self) -> PredicateName {
        HAS_ACTIVE_CHARACTER
    }

    fn check<'a, 'b, 'c, 'f>(
        &'a self,
        opctx: &'b OpContext,
        store: &'c dyn Storage,
    ) -> BoxFuture<'f, Result<bool, Error>>
    where
        'a: 'f,
        'b: 'f,
        'c: 'f,
    {
        async move {
            let Some(actor) = opctx.authn.actor() else {
                return Ok(false);
            };
            let characters =
                store.characters_by_user(opctx, actor.user_id).await?;
            Ok(characters.iter().any(|character| character.active))
        }
        .boxed()
    }
}

struct ForceAware;

impl Predicate for ForceAware {
    fn name(&self) -> PredicateName {
        FORCE_AWARE
    }

    fn check<'a, 'b, 'c, 'f>(
        &'a self,
        opctx: &'b OpContext,
        store: &'c dyn Storage,
    ) -> BoxFuture<'f, Result<bool, Error>>
    where
        'a: 'f,
        'b: 'f,
        'c: 'f,
    {
        async move {
            let Some(actor) = opctx.authn.actor() else {
                return Ok(false);
            };
            let characters =
                store.characters_by_user(opctx, actor.user_id).await?;
            Ok(characters
                .iter()
                .any(|character| character.active && character.force_aware))
        }
        .boxed()
    }
}

struct SenateMember;

impl Predicate for SenateMember {
    fn name(&self) -> PredicateName {
        SENATE_MEMBER
    }

    fn check<'a, 'b, 'c, 'f>(
        &'a self,
        opctx: &'b OpContext,
        store: &'c dyn Storage,
    ) -> BoxFuture<'f, Result<bool, Error>>
    where
        'a: 'f,
        'b: 'f,
        'c: 'f,
    {
        org_kind_membership(opctx, store, OrgKind::Senate, false).boxed()
    }
}

struct SenateLeadership;

impl Predicate for SenateLeadership {
    fn name(&self) -> PredicateName {
        SENATE_LEADERSHIP
    }

    fn check<'a, 'b, 'c, 'f>(
        &'a self,
        opctx: &'b OpContext,
        store: &'c dyn Storage,
    ) -> BoxFuture<'f, Result<bool, Error>>
    where
        'a: 'f,
        'b: 'f,
        'c: 'f,
    {
        org_kind_membership(opctx, store, OrgKind::Senate, true).boxed()
    }
}

struct HighCouncil;

impl Predicate for HighCouncil {
    fn name(&self) -> PredicateName {
        HIGH_COUNCIL
    }

    fn check<'a, 'b, 'c, 'f>(
        &'a self,
        opctx: &'b OpContext,
        store: &'c dyn Storage,
    ) -> BoxFuture<'f, Result<bool, Error>>
    where
        'a: 'f,
        'b: 'f,
        'c: 'f,
    {
        org_kind_membership(opctx, store, OrgKind::HighCouncil, false).boxed()
    }
}

/// Shared body of the organization-kind predicates: does some active
/// character of the acting user hold a membership in an organization of
/// `kind` (optionally one that grants leadership)?
async fn org_kind_membership(
    opctx: &OpContext,
    store: &dyn Storage,
    kind: OrgKind,
    leadership_only: bool,
) -> Result<bool, Error> {
    let Some(actor) = opctx.authn.actor() else {
        return Ok(false);
    };
    for character in store.characters_by_user(opctx, actor.user_id).await? {
        if !character.active {
            continue;
        }
        let memberships =
            store.memberships_by_character(opctx, character.id).await?;
        for membership in memberships {
            if membership.organization.kind != kind {
                continue;
            }
            if !leadership_only || membership.grants_leadership() {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// A problem in access-rule configuration, caught when it is loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "navigation item {path:?} names unregistered predicate {predicate:?}"
    )]
    UnknownPredicate { predicate: String, path: String },

    #[error("predicate {name:?} is already registered")]
    DuplicatePredicate { name: PredicateName },

    #[error("cannot parse navigation menu")]
    InvalidMenu(#[from] serde_json::Error),
}

/// The process-wide predicate table
///
/// Built once at startup and read-only afterwards, so sharing it across
/// request handlers needs no synchronization.
pub struct PredicateRegistry {
    predicates: BTreeMap<&'static str, Box<dyn Predicate>>,
}

impl PredicateRegistry {
    pub fn new() -> PredicateRegistry {
        PredicateRegistry { predicates: BTreeMap::new() }
    }

    /// Creates a registry holding the built-in catalog
    pub fn builtin() -> PredicateRegistry {
        let mut registry = PredicateRegistry::new();
        let builtins: [Box<dyn Predicate>; 5] = [
            Box::new(HasActiveCharacter),
            Box::new(ForceAware),
            Box::new(SenateMember),
            Box::new(SenateLeadership),
            Box::new(HighCouncil),
        ];
        for predicate in builtins {
            // built-in names are distinct by construction
            registry.predicates.insert(predicate.name().0, predicate);
        }
        registry
    }

    /// Adds a predicate, rejecting a name collision
    pub fn register(
        &mut self,
        predicate: Box<dyn Predicate>,
    ) -> Result<(), ConfigError> {
        let name = predicate.name();
        match self.predicates.entry(name.0) {
            Entry::Occupied(_) => {
                Err(ConfigError::DuplicatePredicate { name })
            }
            Entry::Vacant(entry) => {
                entry.insert(predicate);
                Ok(())
            }
        }
    }

    /// Looks up a predicate under the name a rule uses
    pub fn lookup(&self, name: &str) -> Option<&dyn Predicate> {
        self.predicates.get(name).map(|predicate| &**predicate)
    }

    /// Checks that every custom rule in `items` names a registered
    /// predicate
    pub fn validate_items(
        &self,
        items: &[NavItem],
    ) -> Result<(), ConfigError> {
        for item in items {
            if let AccessRule::Custom { predicate, .. } = &item.rule {
                if self.lookup(predicate).is_none() {
                    return Err(ConfigError::UnknownPredicate {
                        predicate: predicate.clone(),
                        path: item.path.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parses a navigation menu from JSON and validates its predicate
    /// references
    pub fn load_menu(&self, json: &str) -> Result<Vec<NavItem>, ConfigError> {
        let items: Vec<NavItem> = serde_json::from_str(json)?;
        self.validate_items(&items)?;
        Ok(items)
    }
}
