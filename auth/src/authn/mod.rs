// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authentication facilities
//!
//! Holonet does not verify credentials itself.  An external identity
//! provider authenticates each request and hands back a verified user: their
//! id, their site-wide [`Role`], and the in-game character they are
//! currently acting as, if any.  This module is the HTTP-agnostic
//! representation of that handoff: who (or what) is performing the current
//! operation.
//!
//! Keeping this separate from the web layer means subsystems can create
//! contexts for purposes unrelated to HTTP (background jobs, tests) and the
//! policy code in [`crate::authz`] never has to care where an actor came
//! from.

use holonet_common::api::external::Error;
use holonet_types::role::Role;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// User id behind [`Context::privileged_test_user()`]
pub static USER_TEST_PRIVILEGED_ID: Uuid =
    Uuid::from_u128(0x00000000_0000_4000_8000_000000000001);

/// User id behind `Context::unprivileged_test_user()`
pub static USER_TEST_UNPRIVILEGED_ID: Uuid =
    Uuid::from_u128(0x00000000_0000_4000_8000_000000000002);

/// Describes how the actor performing the current operation is authenticated
///
/// This is HTTP-agnostic.  Subsystems could create contexts for purposes
/// unrelated to HTTP (e.g., background jobs).
#[derive(Debug)]
pub struct Context {
    /// Describes whether the user is authenticated and provides more
    /// information that's specific to whether they're authenticated or not
    kind: Kind,
}

impl Context {
    /// Returns the authenticated actor, if any
    pub fn actor(&self) -> Option<&Actor> {
        self.actor_required().ok()
    }

    /// Returns the authenticated actor if present or an Unauthenticated
    /// error otherwise
    pub fn actor_required(&self) -> Result<&Actor, Error> {
        match &self.kind {
            Kind::Authenticated(Details { actor }) => Ok(actor),
            Kind::Unauthenticated => Err(Error::Unauthenticated {
                internal_message: "Actor required".to_string(),
            }),
        }
    }

    /// Returns an unauthenticated context, used both internally and for
    /// anonymous visitors
    pub fn internal_unauthenticated() -> Context {
        Context { kind: Kind::Unauthenticated }
    }

    /// Returns a context for the user the external identity provider has
    /// verified
    pub fn external_authenticated(actor: Actor) -> Context {
        Context { kind: Kind::Authenticated(Details { actor }) }
    }

    /// Returns an authenticated context for a special testing user
    // Ideally this would only be exposed under `#[cfg(test)]`, but it's used
    // by `OpContext::for_tests()`.
    pub fn privileged_test_user() -> Context {
        Context::external_authenticated(Actor {
            user_id: USER_TEST_PRIVILEGED_ID,
            role: Role::SystemAdmin,
            character_id: None,
        })
    }

    /// Returns an authenticated context for the special unprivileged user
    /// (for testing only)
    #[cfg(test)]
    pub fn unprivileged_test_user() -> Context {
        Context::external_authenticated(Actor {
            user_id: USER_TEST_UNPRIVILEGED_ID,
            role: Role::Player,
            character_id: None,
        })
    }
}

/// Describes whether the user is authenticated and provides more information
/// that's specific to whether they're authenticated (or not)
#[derive(Clone, Debug, Deserialize, Serialize)]
enum Kind {
    /// Client did not attempt to authenticate
    Unauthenticated,
    /// Client successfully authenticated
    Authenticated(Details),
}

/// Describes the actor that was authenticated
#[derive(Clone, Debug, Deserialize, Serialize)]
struct Details {
    /// the actor performing the request
    actor: Actor,
}

/// Who is performing an operation
#[derive(Clone, Copy, Deserialize, Eq, PartialEq, Serialize)]
pub struct Actor {
    /// the user's id with the external identity provider
    pub user_id: Uuid,
    /// the user's site-wide role, verified upstream
    pub role: Role,
    /// the in-game character the user is acting as for this operation
    pub character_id: Option<Uuid>,
}

impl std::fmt::Debug for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // This `Debug` impl is approximately the same as what we'd get by
        // deriving it.  We impl it by hand so that adding fields to `Actor`
        // doesn't result in them showing up in `Debug` output (e.g., log
        // messages) unless someone explicitly adds them here.
        f.debug_struct("Actor")
            .field("user_id", &self.user_id)
            .field("role", &self.role)
            .field("character_id", &self.character_id)
            .finish_non_exhaustive()
    }
}
