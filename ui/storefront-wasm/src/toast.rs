//! Toast notifications.
//!
//! Every `show` schedules its own two-stage removal; toasts stack freely.

use crate::dom;
use gloo_timers::callback::Timeout;
use sp_chrome::ToastTimeline;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

#[derive(Clone)]
pub struct Toaster {
    container: Element,
    timeline: ToastTimeline,
}

fn millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

impl Toaster {
    pub fn new(container: Element, timeline: ToastTimeline) -> Self {
        Self {
            container,
            timeline,
        }
    }

    pub fn show(&self, message: &str) {
        if let Err(err) = self.try_show(message) {
            tracing::warn!("failed to show toast: {:?}", err);
        }
    }

    fn try_show(&self, message: &str) -> Result<(), JsValue> {
        let toast: HtmlElement = dom::create_element("div")?.dyn_into()?;
        toast.set_class_name("toast");

        let icon = dom::create_element("span")?;
        dom::set_text(&icon, "✅");
        toast.append_child(&icon)?;
        toast.append_with_str_1(&format!(" {message}"))?;
        self.container.append_child(&toast)?;

        let exit_ms = millis(self.timeline.exit);
        let animation = self.timeline.exit_animation();
        Timeout::new(millis(self.timeline.display), move || {
            let _ = toast.style().set_property("animation", &animation);
            Timeout::new(exit_ms, move || toast.remove()).forget();
        })
        .forget();

        Ok(())
    }
}
