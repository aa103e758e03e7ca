// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Data model shared by the Holonet components
//!
//! These are plain records as handed back by the data store and passed over
//! the wire: characters, organizations and their positions, memberships,
//! security clearances, documents, staff teams, and the access rules gating
//! navigation entries.  The policy logic that interprets them lives in
//! `holonet_auth`.

pub mod character;
pub mod clearance;
pub mod document;
pub mod membership;
pub mod navigation;
pub mod organization;
pub mod position;
pub mod role;
pub mod team;
