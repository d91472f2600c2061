// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Traits for the parts of the host environment that the lock manager uses.

use crate::{AcquireError, NoticeError, NoticeOptions};
use std::time::Duration;

/// An active screen wake lock.
pub trait Sentinel: Clone + 'static {
    /// Returns whether the lock has been released, either by the host or by [`Sentinel::release`].
    fn released(&self) -> bool;

    /// Registers a callback to run when the host releases the lock.
    ///
    /// The callback is passed the value of [`Sentinel::released`] at the time of the release.
    fn on_release(&self, callback: Box<dyn FnOnce(bool)>);

    /// Asks the host to release the lock.
    fn release(&self);
}

/// The host's screen wake lock capability.
#[allow(async_fn_in_trait)]
pub trait WakeLockPlatform {
    type Sentinel: Sentinel;

    /// Returns whether the host supports screen wake locks at all.
    fn is_supported(&self) -> bool;

    /// Requests a screen wake lock, waiting until the host grants or refuses it.
    async fn request(&self) -> Result<Self::Sentinel, AcquireError>;
}

/// The page which the advisory notice is shown on.
pub trait NoticeHost: Clone + 'static {
    /// A notice element which has been inserted into the page.
    type Element: 'static;

    /// Returns whether an element with the given ID is currently in the page.
    fn notice_exists(&self, id: &str) -> bool;

    /// Builds the notice described by `options` and appends it to the page.
    fn insert_notice(&self, options: &NoticeOptions) -> Result<Self::Element, NoticeError>;

    /// Removes the given element from the page, if it is still attached.
    ///
    /// Another element with the same ID must be left alone.
    fn remove_element(&self, element: &Self::Element);

    /// Calls `callback` once after `delay`.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

/// Whether the page is in the foreground.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Visibility {
    Visible,
    Hidden,
}
