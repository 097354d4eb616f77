//! Light/dark theme on `<html data-theme>`, persisted across reloads.

use crate::state::Storefront;
use sp_chrome::Theme;
use web_sys::Element;

fn current(root: &Element) -> Theme {
    Theme::from_attribute(root.get_attribute("data-theme").as_deref())
}

pub fn apply(root: &Element, theme: Theme) {
    let _ = root.set_attribute("data-theme", theme.as_str());
}

/// Re-apply a previously saved choice, if any.
pub fn restore(app: &Storefront) {
    if let Some(theme) = Theme::load(&*app.store) {
        apply(&app.els.root, theme);
    }
}

pub fn toggle(app: &Storefront) {
    let next = current(&app.els.root).toggled();
    apply(&app.els.root, next);
    next.save(&*app.store);
    tracing::debug!(theme = %next, "theme toggled");
}
