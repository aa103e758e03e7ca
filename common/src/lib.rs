// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Holonet
//!
//! Holonet is the membership and access-control core of a role-playing
//! community web application: characters, hierarchical organizations,
//! security clearances, and the policy engine that decides which documents
//! and administrative surfaces each user may see.  This crate implements
//! common facilities used by every component.  Other top-level crates
//! implement the pieces themselves (e.g., `holonet_auth`).
//!
//! Since this crate doesn't provide externally-consumable interfaces, the
//! rustdoc (generated with `--document-private-items`) is intended primarily
//! for engineers working on this workspace.

// We only use rustdoc for internal documentation, including private items, so
// it's expected that we'll have links to private items in the docs.
#![allow(rustdoc::private_intra_doc_links)]

pub mod api;

/// A type that allows adding file and line numbers to log messages
/// automatically. It should be instantiated at the root logger of each
/// executable that desires this functionality, as in the following example.
/// ```ignore
///     slog::Logger::root(drain, o!(FileKv))
/// ```
pub struct FileKv;

impl slog::KV for FileKv {
    fn serialize(
        &self,
        record: &slog::Record,
        serializer: &mut dyn slog::Serializer,
    ) -> slog::Result {
        // Only log file information when severity is at least info level
        if record.level() > slog::Level::Info {
            return Ok(());
        }
        serializer.emit_arguments(
            "file".into(),
            &format_args!("{}:{}", record.file(), record.line()),
        )
    }
}
