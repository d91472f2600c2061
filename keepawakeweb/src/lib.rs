// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Keeps the screen on while the page is visible.
//!
//! Loading the module requests a screen wake lock once the page is ready, and requests it again
//! every time the page becomes visible. It also exposes `window.screenWakeLock.activate` for other
//! scripts to request a lock directly.

mod console;
mod notice;
mod wakelock;

pub use crate::{
    console::ConsoleLogger,
    notice::DomNoticeHost,
    wakelock::{WebSentinel, WebWakeLock},
};
use gloo_utils::{document, window};
use keepawake::{LifecycleController, LockManager, NoticeOptions, Visibility};
use log::{LevelFilter, error};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{
    Event, EventTarget, VisibilityState,
    js_sys::{Object, Promise, Reflect},
};

pub type WebLockManager = LockManager<WebWakeLock, DomNoticeHost>;
pub type WebLifecycleController = LifecycleController<WebWakeLock, DomNoticeHost>;

/// Name of the object exported on `window`.
const GLOBAL_NAME: &str = "screenWakeLock";

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console::init(LevelFilter::Info);

    if let Err(e) = export_global() {
        error!("Failed to export {GLOBAL_NAME}: {e:?}");
    }

    let controller = Rc::new(LifecycleController::new(LockManager::new(
        WebWakeLock,
        DomNoticeHost::default(),
    )));
    if let Err(e) = add_lifecycle_listeners(controller) {
        error!("Failed to listen for page events: {e:?}");
    }
}

/// Requests a screen wake lock, resolving to the `WakeLockSentinel` or `null`.
///
/// `options` may be a JSON string overriding parts of the advisory notice shown on failure.
#[wasm_bindgen]
pub fn activate(options: Option<String>) -> Promise {
    let manager = WebLockManager::with_notice(
        WebWakeLock,
        DomNoticeHost::default(),
        notice_options(options.as_deref()),
    );
    future_to_promise(async move {
        Ok(match manager.acquire().await {
            Ok(sentinel) => sentinel.into_inner().into(),
            Err(_) => JsValue::NULL,
        })
    })
}

/// Parses notice options from JSON, falling back to the defaults if they are missing or invalid.
fn notice_options(json: Option<&str>) -> NoticeOptions {
    let Some(json) = json else {
        return NoticeOptions::default();
    };
    serde_json::from_str(json).unwrap_or_else(|e| {
        error!("Invalid wake lock notice options: {e}");
        NoticeOptions::default()
    })
}

/// Sets `window.screenWakeLock = { activate }`.
fn export_global() -> Result<(), JsValue> {
    let namespace = Object::new();
    let entry_point = Closure::<dyn Fn(JsValue) -> Promise>::new(|options: JsValue| {
        activate(options.as_string())
    });
    Reflect::set(&namespace, &"activate".into(), &entry_point.into_js_value())?;
    Reflect::set(&window(), &GLOBAL_NAME.into(), &namespace)?;
    Ok(())
}

fn add_lifecycle_listeners(controller: Rc<WebLifecycleController>) -> Result<(), JsValue> {
    let document = document();

    let visibility_controller = controller.clone();
    add_listener_and_leak(&document, "visibilitychange", move |_| {
        let controller = visibility_controller.clone();
        let visibility = current_visibility();
        spawn_local(async move { controller.on_visibility_change(visibility).await });
    })?;

    // The module may be loaded after the document has been parsed, in which case
    // DOMContentLoaded has already fired.
    if document.ready_state() == "loading" {
        add_listener_and_leak(&document, "DOMContentLoaded", move |_| {
            let controller = controller.clone();
            spawn_local(async move { controller.on_ready().await });
        })?;
    } else {
        spawn_local(async move { controller.on_ready().await });
    }
    Ok(())
}

fn current_visibility() -> Visibility {
    match document().visibility_state() {
        VisibilityState::Visible => Visibility::Visible,
        _ => Visibility::Hidden,
    }
}

fn add_listener_and_leak(
    target: &EventTarget,
    event_type: &str,
    callback: impl Fn(Event) + 'static,
) -> Result<(), JsValue> {
    target.add_event_listener_with_callback(
        event_type,
        Closure::<dyn Fn(Event)>::new(callback)
            .into_js_value()
            .unchecked_ref(),
    )
}
