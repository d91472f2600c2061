// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::{LockManager, NoticeHost, Sentinel, Visibility, WakeLockPlatform};
use std::cell::RefCell;

/// Keeps hold of a screen wake lock for the lifetime of a page.
///
/// Hosts release screen wake locks whenever the page is hidden, so the lock is requested again each
/// time the page becomes visible. This only happens if a lock was successfully acquired before; if
/// the first request failed the user has already been told, and nothing more is attempted.
///
/// Dropping the controller releases the lock it holds.
pub struct LifecycleController<P: WakeLockPlatform, N: NoticeHost> {
    manager: LockManager<P, N>,
    sentinel: RefCell<Option<P::Sentinel>>,
}

impl<P: WakeLockPlatform, N: NoticeHost> LifecycleController<P, N> {
    pub fn new(manager: LockManager<P, N>) -> Self {
        Self {
            manager,
            sentinel: RefCell::new(None),
        }
    }

    pub fn manager(&self) -> &LockManager<P, N> {
        &self.manager
    }

    /// Handles the page having loaded.
    pub async fn on_ready(&self) {
        let sentinel = self.manager.acquire().await.ok();
        self.replace(sentinel);
    }

    /// Handles a change in page visibility, requesting the lock again if the page is now visible.
    pub async fn on_visibility_change(&self, visibility: Visibility) {
        if visibility != Visibility::Visible || !self.is_holding() {
            return;
        }
        let sentinel = self.manager.acquire().await.ok();
        self.replace(sentinel);
    }

    /// Returns the sentinel from the most recent successful request, if any.
    pub fn held(&self) -> Option<P::Sentinel> {
        self.sentinel.borrow().clone()
    }

    pub fn is_holding(&self) -> bool {
        self.sentinel.borrow().is_some()
    }

    /// Releases and forgets the current lock, if any.
    pub fn release(&self) {
        self.replace(None);
    }

    /// Stores the new sentinel, releasing the old one if the host hasn't already.
    fn replace(&self, sentinel: Option<P::Sentinel>) {
        let previous = self.sentinel.replace(sentinel);
        if let Some(previous) = previous
            && !previous.released()
        {
            previous.release();
        }
    }
}

impl<P: WakeLockPlatform, N: NoticeHost> Drop for LifecycleController<P, N> {
    fn drop(&mut self) {
        self.release();
    }
}
