// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Evaluates navigation and administrative access rules
//!
//! Rules are data (see [`holonet_types::navigation`]); this module is the
//! interpreter.  The error model follows the rest of the engine: a
//! decision is `Ok(true)` or `Ok(false)`, a store failure is `Err` and
//! always propagates, and a configuration problem (a rule naming an
//! unregistered predicate) is logged and denied because an access check
//! must resolve to an answer.

use crate::authn::Actor;
use crate::authz::predicates::PredicateRegistry;
use crate::authz::roles::role_meets;
use crate::context::OpContext;
use crate::storage::Storage;
use holonet_common::api::external::Error;
use holonet_types::navigation::AccessRule;
use holonet_types::navigation::NavItem;
use holonet_types::role::Role;
use holonet_types::team::Team;
use slog::error;

/// Evaluates one access rule for the acting user
pub async fn evaluate(
    opctx: &OpContext,
    store: &dyn Storage,
    registry: &PredicateRegistry,
    rule: &AccessRule,
) -> Result<bool, Error> {
    let actor = opctx.authn.actor();
    let actor_role = actor.map(|actor| actor.role);
    let banned = actor_role == Some(Role::Banned);
    match rule {
        // Open admits everyone, banned included.  Every other rule kind
        // turns a banned actor away before its own checks run.
        AccessRule::Open => Ok(true),
        _ if banned => Ok(false),
        AccessRule::Authenticated => Ok(actor.is_some()),
        AccessRule::Role { role } => Ok(role_meets(Some(*role), actor_role)),
        AccessRule::Team { team, override_role } => {
            if override_met(*override_role, actor_role) {
                return Ok(true);
            }
            let Some(actor) = actor else {
                return Ok(false);
            };
            on_team(opctx, store, actor, *team).await
        }
        AccessRule::RoleAndTeam { role, team, override_role } => {
            if override_met(*override_role, actor_role) {
                return Ok(true);
            }
            let Some(actor) = actor else {
                return Ok(false);
            };
            if !role_meets(Some(*role), actor_role) {
                return Ok(false);
            }
            on_team(opctx, store, actor, *team).await
        }
        AccessRule::Custom { predicate, role, team, override_role } => {
            if override_met(*override_role, actor_role) {
                return Ok(true);
            }
            // The guards are optional; an unset guard passes.
            if !role_meets(*role, actor_role) {
                return Ok(false);
            }
            if let Some(team) = team {
                let Some(actor) = actor else {
                    return Ok(false);
                };
                if !on_team(opctx, store, actor, *team).await? {
                    return Ok(false);
                }
            }
            match registry.lookup(predicate) {
                Some(predicate) => predicate.check(opctx, store).await,
                None => {
                    error!(
                        opctx.log,
                        "access rule names an unregistered predicate; \
                         denying";
                        "predicate" => predicate.clone(),
                    );
                    Ok(false)
                }
            }
        }
    }
}

/// Filters a navigation menu down to the entries the acting user may see
pub async fn visible_items<'a>(
    opctx: &OpContext,
    store: &dyn Storage,
    registry: &PredicateRegistry,
    items: &'a [NavItem],
) -> Result<Vec<&'a NavItem>, Error> {
    let mut visible = Vec::new();
    for item in items {
        if evaluate(opctx, store, registry, &item.rule).await? {
            visible.push(item);
        }
    }
    Ok(visible)
}

fn override_met(
    override_role: Option<Role>,
    actor_role: Option<Role>,
) -> bool {
    // An unset override must not reach role_meets, which reads an absent
    // requirement as "admit everyone".
    override_role.is_some() && role_meets(override_role, actor_role)
}

async fn on_team(
    opctx: &OpContext,
    store: &dyn Storage,
    actor: &Actor,
    team: Team,
) -> Result<bool, Error> {
    let teams = store.user_teams(opctx, actor.user_id).await?;
    Ok(teams.is_on(team))
}
