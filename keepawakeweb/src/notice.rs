// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use gloo_timers::callback::Timeout;
use gloo_utils::document;
use keepawake::{NoticeError, NoticeHost, NoticeOptions};
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Shows the advisory notice as an element in the page.
#[derive(Clone, Debug)]
pub struct DomNoticeHost {
    document: Document,
}

impl DomNoticeHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Removes whichever element currently has the given ID.
    pub fn remove_notice(&self, id: &str) {
        if let Some(notice) = self.document.get_element_by_id(id) {
            notice.remove();
        }
    }
}

impl Default for DomNoticeHost {
    fn default() -> Self {
        Self::new(document())
    }
}

impl NoticeHost for DomNoticeHost {
    type Element = HtmlElement;

    fn notice_exists(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn insert_notice(&self, options: &NoticeOptions) -> Result<HtmlElement, NoticeError> {
        let body = self.document.body().ok_or(NoticeError::NoBody)?;
        let notice = self
            .document
            .create_element("div")
            .map_err(dom_error)?
            .unchecked_into::<HtmlElement>();
        notice.set_id(&options.id);
        let style = notice.style();
        for (property, value) in options.style.properties() {
            style.set_property(property, value).map_err(dom_error)?;
        }
        notice.set_inner_html(&options.html);
        body.append_child(&notice).map_err(dom_error)?;
        Ok(notice)
    }

    fn remove_element(&self, element: &HtmlElement) {
        if element.is_connected() {
            element.remove();
        }
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback).forget();
    }
}

fn dom_error(e: JsValue) -> NoticeError {
    NoticeError::Dom(format!("{e:?}"))
}
