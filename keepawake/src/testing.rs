// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! In-memory host for tests.

use crate::{AcquireError, NoticeError, NoticeHost, NoticeOptions, Sentinel, WakeLockPlatform};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::{
    cell::{Cell, RefCell},
    fmt::{self, Debug, Formatter},
    rc::Rc,
    time::Duration,
};

#[derive(Clone, Default)]
pub struct FakeSentinel(Rc<SentinelState>);

#[derive(Default)]
struct SentinelState {
    id: u32,
    released: Cell<bool>,
    release_calls: Cell<u32>,
    listeners: RefCell<Vec<Box<dyn FnOnce(bool)>>>,
}

impl FakeSentinel {
    fn new(id: u32) -> Self {
        Self(Rc::new(SentinelState {
            id,
            ..Default::default()
        }))
    }

    pub fn id(&self) -> u32 {
        self.0.id
    }

    /// Number of times `release` has been called on this sentinel.
    pub fn release_calls(&self) -> u32 {
        self.0.release_calls.get()
    }

    pub fn release_listeners(&self) -> usize {
        self.0.listeners.borrow().len()
    }

    /// Simulates the host dropping the lock, e.g. because the page was hidden.
    pub fn release_by_host(&self) {
        if self.0.released.replace(true) {
            return;
        }
        let listeners = self.0.listeners.take();
        for listener in listeners {
            listener(true);
        }
    }
}

impl Sentinel for FakeSentinel {
    fn released(&self) -> bool {
        self.0.released.get()
    }

    fn on_release(&self, callback: Box<dyn FnOnce(bool)>) {
        self.0.listeners.borrow_mut().push(callback);
    }

    fn release(&self) {
        self.0.release_calls.set(self.0.release_calls.get() + 1);
        self.release_by_host();
    }
}

impl Debug for FakeSentinel {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("FakeSentinel")
            .field("id", &self.0.id)
            .field("released", &self.0.released.get())
            .finish()
    }
}

impl PartialEq for FakeSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakePlatform(Rc<RefCell<PlatformState>>);

#[derive(Debug, Default)]
struct PlatformState {
    supported: bool,
    rejection: Option<AcquireError>,
    issued: Vec<FakeSentinel>,
    requests: usize,
}

impl FakePlatform {
    pub fn unsupported() -> Self {
        Self::default()
    }

    /// A platform which grants every request with a new sentinel, numbered from 1.
    pub fn granting() -> Self {
        let platform = Self::default();
        platform.0.borrow_mut().supported = true;
        platform
    }

    pub fn rejecting(name: &str, message: &str) -> Self {
        let platform = Self::granting();
        platform.reject_with(name, message);
        platform
    }

    pub fn reject_with(&self, name: &str, message: &str) {
        self.0.borrow_mut().rejection = Some(AcquireError::rejected(name, message));
    }

    pub fn grant(&self) {
        self.0.borrow_mut().rejection = None;
    }

    pub fn requests(&self) -> usize {
        self.0.borrow().requests
    }

    /// Returns all sentinels granted so far.
    pub fn issued(&self) -> Vec<FakeSentinel> {
        self.0.borrow().issued.clone()
    }
}

impl WakeLockPlatform for FakePlatform {
    type Sentinel = FakeSentinel;

    fn is_supported(&self) -> bool {
        self.0.borrow().supported
    }

    async fn request(&self) -> Result<FakeSentinel, AcquireError> {
        let mut state = self.0.borrow_mut();
        state.requests += 1;
        if let Some(rejection) = &state.rejection {
            return Err(rejection.clone());
        }
        let sentinel = FakeSentinel::new(state.issued.len() as u32 + 1);
        state.issued.push(sentinel.clone());
        Ok(sentinel)
    }
}

#[derive(Clone, Default)]
pub struct FakeHost(Rc<RefCell<HostState>>);

#[derive(Default)]
struct HostState {
    /// (token, id, html) of each element currently in the page.
    elements: Vec<(u64, String, String)>,
    timers: Vec<(Duration, Box<dyn FnOnce()>)>,
    inserted: u64,
    removed: usize,
    fail_inserts: bool,
}

impl FakeHost {
    /// Makes every later `insert_notice` fail.
    pub fn fail_inserts(&self) {
        self.0.borrow_mut().fail_inserts = true;
    }

    /// Returns the HTML of every element currently in the page.
    pub fn notices(&self) -> Vec<String> {
        self.0
            .borrow()
            .elements
            .iter()
            .map(|(_, _, html)| html.clone())
            .collect()
    }

    /// Removes the element with the given ID, as some other script might.
    pub fn remove_notice(&self, id: &str) {
        let mut state = self.0.borrow_mut();
        if let Some(index) = state
            .elements
            .iter()
            .position(|(_, element_id, _)| element_id == id)
        {
            state.elements.remove(index);
            state.removed += 1;
        }
    }

    pub fn total_inserted(&self) -> usize {
        self.0.borrow().inserted as usize
    }

    pub fn total_removed(&self) -> usize {
        self.0.borrow().removed
    }

    pub fn pending_timers(&self) -> Vec<Duration> {
        self.0
            .borrow()
            .timers
            .iter()
            .map(|(delay, _)| *delay)
            .collect()
    }

    /// Runs all pending timers, returning how many there were.
    pub fn fire_timers(&self) -> usize {
        let timers = std::mem::take(&mut self.0.borrow_mut().timers);
        let count = timers.len();
        for (_, callback) in timers {
            callback();
        }
        count
    }

    /// Runs the oldest pending timer, returning whether there was one.
    pub fn fire_first_timer(&self) -> bool {
        let timer = {
            let mut state = self.0.borrow_mut();
            if state.timers.is_empty() {
                None
            } else {
                Some(state.timers.remove(0))
            }
        };
        match timer {
            Some((_, callback)) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl NoticeHost for FakeHost {
    type Element = u64;

    fn notice_exists(&self, id: &str) -> bool {
        self.0
            .borrow()
            .elements
            .iter()
            .any(|(_, element_id, _)| element_id == id)
    }

    fn insert_notice(&self, options: &NoticeOptions) -> Result<u64, NoticeError> {
        let mut state = self.0.borrow_mut();
        if state.fail_inserts {
            return Err(NoticeError::NoBody);
        }
        state.inserted += 1;
        let token = state.inserted;
        state
            .elements
            .push((token, options.id.clone(), options.html.clone()));
        Ok(token)
    }

    fn remove_element(&self, element: &u64) {
        let mut state = self.0.borrow_mut();
        if let Some(index) = state
            .elements
            .iter()
            .position(|(token, _, _)| token == element)
        {
            state.elements.remove(index);
            state.removed += 1;
        }
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        self.0.borrow_mut().timers.push((delay, callback));
    }
}

thread_local! {
    static CAPTURED_LOGS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// A [`Log`] which records messages logged on the current thread.
struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED_LOGS.with_borrow_mut(|logs| logs.push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

/// Starts recording log messages from the current thread, discarding any recorded so far.
pub fn capture_logs() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
    CAPTURED_LOGS.with_borrow_mut(Vec::clear);
}

/// Returns and clears the messages recorded on the current thread.
pub fn take_logs() -> Vec<(Level, String)> {
    CAPTURED_LOGS.with_borrow_mut(std::mem::take)
}
