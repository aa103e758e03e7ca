// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared state available to all operations

use crate::authn;
use slog::debug;
use slog::Logger;
use std::sync::Arc;

/// Provides general facilities scoped to whatever operation is currently
/// being executed
///
/// Whatever code path is executing, it should eventually get an `OpContext`
/// that allows it to log messages with the operation's metadata attached and
/// to find out who, if anyone, is behind the operation.  OpContexts are
/// constructed when the web layer begins work on a request, when a
/// background activity starts, and at the top of tests.
pub struct OpContext {
    pub log: Logger,
    pub authn: Arc<authn::Context>,

    kind: OpKind,
}

/// Describes which path an operation arrived through
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpKind {
    /// Handling a request arriving through the external web layer
    ExternalRequest,
    /// Background operation not associated with any request
    Background,
    /// Test suite
    Test,
}

impl OpContext {
    /// Creates an `OpContext` for handling one request from the web layer
    ///
    /// The external identity provider has already verified the session by
    /// the time this is called; `authn` is its verdict.
    pub fn for_request(log: Logger, authn: authn::Context) -> OpContext {
        let opctx = OpContext {
            log,
            authn: Arc::new(authn),
            kind: OpKind::ExternalRequest,
        };
        debug!(opctx.log, "created operation context";
            "authenticated" => opctx.authn.actor().is_some(),
        );
        opctx
    }

    /// Creates an `OpContext` for background work
    pub fn for_background(log: Logger, authn: authn::Context) -> OpContext {
        OpContext { log, authn: Arc::new(authn), kind: OpKind::Background }
    }

    /// Creates an `OpContext` for use in tests, acting as the privileged
    /// test user
    pub fn for_tests(log: Logger) -> OpContext {
        OpContext {
            log,
            authn: Arc::new(authn::Context::privileged_test_user()),
            kind: OpKind::Test,
        }
    }

    /// Returns which path this operation arrived through
    pub fn kind(&self) -> OpKind {
        self.kind
    }
}
