//! Page chrome behaviour that does not need a browser: theme flipping,
//! scroll-to-top visibility, the mobile nav state and toast timing.

use sp_storage::{KeyValueStore, THEME_KEY};
use std::fmt;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Read the `data-theme` attribute value. Anything but `dark` is light.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Last persisted choice, if any.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Option<Self> {
        match store.get(THEME_KEY) {
            Ok(Some(value)) => Some(Self::from_attribute(Some(&value))),
            Ok(None) => None,
            Err(err) => {
                warn!("failed to read theme: {}", err);
                None
            }
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(self, store: &S) {
        if let Err(err) = store.set(THEME_KEY, self.as_str()) {
            warn!("failed to persist theme: {}", err);
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the floating scroll-to-top control should be shown.
pub fn scroll_top_visible(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Hamburger button and nav panel share one `active` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: bool,
}

impl NavState {
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn collapse(&mut self) {
        self.active = false;
    }
}

/// Text for the toast raised when an item lands in the cart.
pub fn added_to_cart_message(title: &str) -> String {
    format!("\"{title}\" added!")
}

/// Two-stage toast removal: the toast stays for `display`, then plays its
/// exit animation for `exit` before it is detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimeline {
    pub display: Duration,
    pub exit: Duration,
}

impl ToastTimeline {
    pub fn new(display_ms: u32, exit_ms: u32) -> Self {
        Self {
            display: Duration::from_millis(u64::from(display_ms)),
            exit: Duration::from_millis(u64::from(exit_ms)),
        }
    }

    /// CSS animation applied when the exit stage starts.
    pub fn exit_animation(&self) -> String {
        format!("slideOut {}s ease-in forwards", self.exit.as_secs_f64())
    }

    pub fn lifetime(&self) -> Duration {
        self.display + self.exit
    }
}

impl Default for ToastTimeline {
    fn default() -> Self {
        Self::new(3000, 300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_storage::{InMemoryStore, NoopStore};

    #[test]
    fn theme_toggle_flips_between_two_values() {
        assert_eq!(Theme::from_attribute(Some("dark")).toggled(), Theme::Light);
        assert_eq!(Theme::from_attribute(Some("light")).toggled(), Theme::Dark);
        assert_eq!(Theme::from_attribute(None).toggled(), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("sepia")).toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn theme_persists_through_store() {
        let store = InMemoryStore::default();
        assert_eq!(Theme::load(&store), None);
        Theme::Dark.save(&store);
        assert_eq!(Theme::load(&store), Some(Theme::Dark));
        assert_eq!(Theme::load(&NoopStore), None);
    }

    #[test]
    fn scroll_top_threshold_is_exclusive() {
        assert!(!scroll_top_visible(0.0, 300.0));
        assert!(!scroll_top_visible(300.0, 300.0));
        assert!(scroll_top_visible(300.5, 300.0));
    }

    #[test]
    fn nav_toggle_and_collapse() {
        let mut nav = NavState::default();
        assert!(nav.toggle());
        assert!(!nav.toggle());
        nav.toggle();
        nav.collapse();
        assert!(!nav.active);
        nav.collapse();
        assert!(!nav.active);
    }

    #[test]
    fn toast_timeline_defaults() {
        let timeline = ToastTimeline::default();
        assert_eq!(timeline.display, Duration::from_millis(3000));
        assert_eq!(timeline.lifetime(), Duration::from_millis(3300));
        assert_eq!(timeline.exit_animation(), "slideOut 0.3s ease-in forwards");
    }

    #[test]
    fn toast_message_mentions_title() {
        assert!(added_to_cart_message("Cup").contains("Cup"));
    }
}
