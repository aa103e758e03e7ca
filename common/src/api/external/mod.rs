// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Data structures and related facilities for representing resources in the
//! API
//!
//! The contents here are all HTTP-agnostic.

mod error;
pub use error::*;

use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FormatResult;

// The type aliases below exist primarily to ensure consistency among return
// types for the operations exposed by the access-control engine and by
// implementations of the `Storage` collaborator.

/// Result of a create operation for the specified type
pub type CreateResult<T> = Result<T, Error>;
/// Result of a delete operation for the specified type
pub type DeleteResult = Result<(), Error>;
/// Result of a list operation that returns a vector
pub type ListResultVec<T> = Result<Vec<T>, Error>;
/// Result of a lookup operation for the specified type
pub type LookupResult<T> = Result<T, Error>;
/// Result of an update operation for the specified type
pub type UpdateResult<T> = Result<T, Error>;

/// Identifies a type of resource managed by the application
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ResourceType {
    Organization,
    Position,
    Membership,
    Character,
    User,
    SecurityClearance,
    GameDocument,
    OrganizationDocument,
    PersonalDocument,
    Team,
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(
            f,
            "{}",
            match self {
                ResourceType::Organization => "organization",
                ResourceType::Position => "position",
                ResourceType::Membership => "membership",
                ResourceType::Character => "character",
                ResourceType::User => "user",
                ResourceType::SecurityClearance => "security clearance",
                ResourceType::GameDocument => "game document",
                ResourceType::OrganizationDocument => "organization document",
                ResourceType::PersonalDocument => "personal document",
                ResourceType::Team => "team",
            }
        )
    }
}
