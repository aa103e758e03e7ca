// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authorization for the Holonet
//!
//! # Overview
//!
//! Every protected operation in Holonet answers the same question: may the
//! authenticated actor (from [`crate::authn`]) do this thing?  The answer is
//! assembled from a handful of orthogonal mechanisms:
//!
//! * **Site roles.**  Each user account carries exactly one
//!   [`Role`](holonet_types::role::Role) from a total order that runs from
//!   `Banned` up through `SystemAdmin`.  Role checks are always "at least":
//!   holding `Admin` satisfies any requirement of `Admin` or below.  See
//!   [`role_meets`] for the two-sided optional comparison the rest of this
//!   module builds on.
//!
//! * **Organization hierarchy.**  In-fiction organizations form a forest via
//!   `parent_id`.  The set of organizations a character can see is the union
//!   of their membership organizations and all descendants of each.
//!   Leadership is *not* inherited down the tree: a character leads exactly
//!   the organizations where their own position says so.  See [`hierarchy`].
//!
//! * **Security clearances.**  Clearances form a single ladder of dense,
//!   unique tiers (1 is the lowest).  A character holds at most one grant.
//!   Tier checks are "at least", like roles.  Reordering the ladder is a
//!   planning problem (shift neighbors, keep tiers dense) handled in
//!   [`clearance`].
//!
//! * **Documents.**  Game documents are open to everyone.  Personal
//!   documents belong to their author.  Organization documents combine the
//!   hierarchy and clearance mechanisms under a per-document
//!   [`ViewPolicy`](holonet_types::document::ViewPolicy), and deliberately
//!   decouple *listing* (the document appears in an index) from *reading*
//!   (the body is served).  A document can be readable by leadership without
//!   being listed for them.  See [`documents`].
//!
//! * **Navigation rules.**  Menu entries carry declarative
//!   [`AccessRule`](holonet_types::navigation::AccessRule)s combining role
//!   floors, staff-team membership, and named custom predicates.  Rules are
//!   data (they arrive as JSON), so the set of predicate names is validated
//!   against a [`PredicateRegistry`] at load time.  See [`rules`] and
//!   [`predicates`].
//!
//! # Control flow
//!
//! [`crate::context::OpContext`] carries the authentication result and a
//! logger.  The data store is passed alongside it as
//! `&dyn `[`Storage`](crate::storage::Storage); the engine never owns a
//! connection.  Checks return `Ok(true)` / `Ok(false)` for decisions and
//! reserve `Err` for operational failure, so a database outage can never be
//! mistaken for a denial.
//!
//! One deliberate exception to fail-closed layering: a `Banned` actor is
//! refused by every navigation rule except the literal `Open` rule, which
//! ignores the actor entirely.  Open means open.

pub mod clearance;
pub mod documents;
pub mod hierarchy;
pub mod predicates;
pub mod rules;

mod roles;
pub use roles::role_meets;

pub use clearance::clearance_move_to_tier;
pub use clearance::TierAssignment;
pub use documents::can_list_document;
pub use documents::can_read_document;
pub use documents::read_document;
pub use documents::CharacterProfile;
pub use hierarchy::OrgAccess;
pub use predicates::ConfigError;
pub use predicates::Predicate;
pub use predicates::PredicateName;
pub use predicates::PredicateRegistry;
pub use rules::evaluate;
pub use rules::visible_items;
