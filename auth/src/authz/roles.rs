// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The site-role comparison underlying every role check

use holonet_types::role::Role;

/// Returns whether an actor holding `actor` satisfies a requirement of
/// `required`
///
/// Both sides are optional.  No requirement is satisfied by anyone,
/// including anonymous visitors.  Any requirement at all rules out an
/// anonymous visitor.  Otherwise this is an "at least" comparison on the
/// role order.
pub fn role_meets(required: Option<Role>, actor: Option<Role>) -> bool {
    match (required, actor) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(required), Some(actor)) => actor.meets(required),
    }
}
