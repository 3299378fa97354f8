// Copyright 2026 the Pegboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-owned storage for live drag sessions.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::session::DragSession;

/// The set of live drag sessions, keyed by item id.
///
/// The registry is owned by the caller and passed into every
/// [`DragTracker`](crate::DragTracker) call: the tracker holds configuration,
/// the registry holds state, and nothing is hidden in globals. Two surfaces
/// (or two tests) each own their registry and never interfere.
///
/// At most one session exists per id; `start` on a live id is rejected before
/// anything here changes.
#[derive(Clone, Debug)]
pub struct SessionRegistry<K> {
    sessions: HashMap<K, DragSession<K>>,
}

impl<K> Default for SessionRegistry<K> {
    fn default() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }
}

impl<K> SessionRegistry<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no drag is in progress.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl<K: Copy + Eq + Hash> SessionRegistry<K> {
    /// Whether a session is live for `id`.
    #[must_use]
    pub fn contains(&self, id: K) -> bool {
        self.sessions.contains_key(&id)
    }

    /// The live session for `id`, if any.
    #[must_use]
    pub fn session(&self, id: K) -> Option<&DragSession<K>> {
        self.sessions.get(&id)
    }

    /// Ids of all live sessions, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = K> + '_ {
        self.sessions.keys().copied()
    }

    pub(crate) fn insert(&mut self, id: K, session: DragSession<K>) -> &mut DragSession<K> {
        self.sessions.entry(id).insert(session).into_mut()
    }

    pub(crate) fn get_mut(&mut self, id: K) -> Option<&mut DragSession<K>> {
        self.sessions.get_mut(&id)
    }

    pub(crate) fn remove(&mut self, id: K) -> Option<DragSession<K>> {
        self.sessions.remove(&id)
    }
}
