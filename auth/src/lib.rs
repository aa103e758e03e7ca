// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authentication and authorization for Holonet
//!
//! This crate answers one question in several forms: may the person behind
//! the current operation see or do the thing they are asking about?  The
//! pieces are:
//!
//! - [`authn`]: who is asking.  Credential verification happens in an
//!   external identity provider; this is the HTTP-agnostic representation of
//!   its verdict.
//! - [`authz`]: the decisions themselves.  Role comparisons, organization
//!   hierarchy resolution, security-clearance gates, the document visibility
//!   policy engine, and the rule evaluator for navigation and administrative
//!   surfaces.
//! - [`storage`]: the interface to the relational store the decisions read
//!   from.
//! - [`context::OpContext`]: the per-operation bundle (logger plus authn
//!   context) threaded through everything above.

pub mod authn;
pub mod authz;
pub mod context;
pub mod storage;

#[cfg(test)]
mod test_utils;
