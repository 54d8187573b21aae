mod drawer;

pub use drawer::{actionable, DrawerState, Navigate};
#[cfg(test)]
pub use drawer::RecordingNavigator;

use crate::Route;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::{navigator, NavigationTarget, Navigator};

/// [`Navigate`] backed by the dioxus router. Internal paths are parsed into a [`Route`] so the
/// router can render them without a page load; anything else is handed off as an external URL.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    inner: Navigator,
}

impl RouterNavigator {
    /// Grab the router's navigator. Must be called while rendering a component under the router.
    pub fn current() -> Self {
        Self { inner: navigator() }
    }
}

impl Navigate for RouterNavigator {
    fn navigate_to(&mut self, destination: &str) {
        let target: NavigationTarget = if destination.starts_with('/') {
            match destination.parse::<Route>() {
                Ok(route) => route.into(),
                Err(e) => {
                    warn!("no route for {destination}: {e}");
                    NavigationTarget::External(destination.to_string())
                }
            }
        } else {
            NavigationTarget::External(destination.to_string())
        };
        debug!("navigating to {destination}");
        if let Some(failure) = self.inner.push(target) {
            warn!("external navigation to {destination} failed: {failure:?}");
        }
    }
}
