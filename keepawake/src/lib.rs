// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Keeps the screen on with a wake lock.
//!
//! The [`LockManager`] requests a screen wake lock from the host, and shows an advisory notice
//! when it can't get one. The [`LifecycleController`] asks for the lock when the page is ready and
//! asks again whenever the page becomes visible, as hosts drop the lock when a page is hidden.
//!
//! The host is abstracted by the traits in [`host`], so this crate doesn't depend on any
//! particular browser binding.

mod error;
pub mod host;
mod lifecycle;
mod manager;
pub mod notice;
#[cfg(test)]
mod testing;

pub use crate::{
    error::{AcquireError, NoticeError},
    host::{NoticeHost, Sentinel, Visibility, WakeLockPlatform},
    lifecycle::LifecycleController,
    manager::LockManager,
    notice::{NoticeOptions, NoticeStyle},
};
