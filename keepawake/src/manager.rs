// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::{AcquireError, NoticeHost, NoticeOptions, Sentinel, WakeLockPlatform};
use log::{error, info, warn};

/// Requests screen wake locks, and tells the user when that isn't possible.
#[derive(Debug)]
pub struct LockManager<P, N> {
    platform: P,
    host: N,
    notice: NoticeOptions,
}

impl<P: WakeLockPlatform, N: NoticeHost> LockManager<P, N> {
    /// Creates a manager which shows the default notice.
    pub fn new(platform: P, host: N) -> Self {
        Self::with_notice(platform, host, NoticeOptions::default())
    }

    pub fn with_notice(platform: P, host: N, notice: NoticeOptions) -> Self {
        Self {
            platform,
            host,
            notice,
        }
    }

    pub fn notice(&self) -> &NoticeOptions {
        &self.notice
    }

    /// Requests the screen wakelock.
    ///
    /// Failures have already been logged and shown to the user by the time this returns, so
    /// callers usually just want `.ok()`.
    pub async fn acquire(&self) -> Result<P::Sentinel, AcquireError> {
        match self.request().await {
            Ok(sentinel) => {
                sentinel.on_release(Box::new(|released| {
                    info!("Screen Wake Lock released: {released}");
                }));
                info!("Screen Wake Lock activated, screen will stay on");
                Ok(sentinel)
            }
            Err(e) => {
                match e {
                    AcquireError::Unsupported => warn!("{e}"),
                    AcquireError::Rejected { .. } => error!("{e}"),
                }
                self.show_advisory_notice();
                Err(e)
            }
        }
    }

    async fn request(&self) -> Result<P::Sentinel, AcquireError> {
        if !self.platform.is_supported() {
            return Err(AcquireError::Unsupported);
        }
        self.platform.request().await
    }

    /// Shows a notice that the screen may turn off, unless one is already showing.
    ///
    /// The notice removes itself after the configured time.
    pub fn show_advisory_notice(&self) {
        if self.host.notice_exists(&self.notice.id) {
            return;
        }
        let element = match self.host.insert_notice(&self.notice) {
            Ok(element) => element,
            Err(e) => {
                error!("Failed to show wake lock notice: {e}");
                return;
            }
        };

        let host = self.host.clone();
        self.host.set_timeout(
            self.notice.display_duration(),
            Box::new(move || {
                // It may already have been removed by someone else, and another notice shown in
                // its place.
                host.remove_element(&element);
            }),
        );
    }
}
