// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use gloo_utils::window;
use keepawake::{AcquireError, Sentinel, WakeLockPlatform};
use log::error;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    DomException, WakeLockSentinel, WakeLockType,
    js_sys::{Error, Reflect},
};

/// The browser's Screen Wake Lock API.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebWakeLock;

impl WakeLockPlatform for WebWakeLock {
    type Sentinel = WebSentinel;

    fn is_supported(&self) -> bool {
        Reflect::has(&window().navigator(), &JsValue::from_str("wakeLock")).unwrap_or(false)
    }

    async fn request(&self) -> Result<WebSentinel, AcquireError> {
        request().await.map(WebSentinel).map_err(rejection)
    }
}

async fn request() -> Result<WakeLockSentinel, JsValue> {
    Ok(JsFuture::from(
        window()
            .navigator()
            .wake_lock()
            .request(WakeLockType::Screen),
    )
    .await?
    .unchecked_into::<WakeLockSentinel>())
}

/// Converts whatever the rejected promise was rejected with into an [`AcquireError`].
fn rejection(error: JsValue) -> AcquireError {
    if let Some(exception) = error.dyn_ref::<DomException>() {
        AcquireError::rejected(exception.name(), exception.message())
    } else if let Some(error) = error.dyn_ref::<Error>() {
        AcquireError::rejected(String::from(error.name()), String::from(error.message()))
    } else {
        AcquireError::rejected("Error", format!("{error:?}"))
    }
}

/// A screen wake lock held by the page.
#[derive(Clone, Debug)]
pub struct WebSentinel(WakeLockSentinel);

impl WebSentinel {
    pub fn into_inner(self) -> WakeLockSentinel {
        self.0
    }
}

impl Sentinel for WebSentinel {
    fn released(&self) -> bool {
        self.0.released()
    }

    fn on_release(&self, callback: Box<dyn FnOnce(bool)>) {
        let sentinel = self.0.clone();
        let listener = Closure::once_into_js(move || callback(sentinel.released()));
        if let Err(e) = self
            .0
            .add_event_listener_with_callback("release", listener.unchecked_ref())
        {
            error!("Failed to listen for wake lock release: {e:?}");
        }
    }

    fn release(&self) {
        spawn_local(release_sentinel(self.0.clone()));
    }
}

async fn release_sentinel(sentinel: WakeLockSentinel) {
    _ = JsFuture::from(sentinel.release()).await;
}
