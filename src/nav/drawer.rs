use crate::config::NavItem;

/// Something that can move the app to another page.
pub trait Navigate {
    fn navigate_to(&mut self, destination: &str);
}

/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        self == DrawerState::Open
    }

    /// The hamburger trigger flips the panel either way.
    pub fn toggle(&mut self) {
        *self = match self {
            DrawerState::Closed => DrawerState::Open,
            DrawerState::Open => DrawerState::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = DrawerState::Closed;
    }

    /// Navigate to the entry's destination and close the drawer. Entries without a destination
    /// are ignored, they are never rendered as links in the first place.
    pub fn select(&mut self, entry: &NavItem, navigator: &mut impl Navigate) {
        let Some(href) = entry.href.as_deref() else {
            return;
        };
        navigator.navigate_to(href);
        self.close();
    }
}

/// Entries that can be rendered as links, in config order.
pub fn actionable(items: &[NavItem]) -> impl Iterator<Item = (&str, &str)> {
    items
        .iter()
        .filter_map(|item| item.href.as_deref().map(|href| (item.title.as_str(), href)))
}

/// Remembers every destination it was asked to visit.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

#[cfg(test)]
impl Navigate for RecordingNavigator {
    fn navigate_to(&mut self, destination: &str) {
        self.visited.push(destination.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, href: Option<&str>) -> NavItem {
        NavItem {
            title: title.to_string(),
            href: href.map(str::to_string),
        }
    }

    #[test]
    fn starts_closed() {
        let drawer = DrawerState::default();
        assert_eq!(drawer, DrawerState::Closed);
        assert!(!drawer.is_open());
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut drawer = DrawerState::default();
        drawer.toggle();
        assert!(drawer.is_open());
        drawer.toggle();
        assert!(!drawer.is_open());

        let mut drawer = DrawerState::Open;
        drawer.toggle();
        drawer.toggle();
        assert!(drawer.is_open());
    }

    #[test]
    fn selecting_an_entry_navigates_once_and_closes() {
        let mut drawer = DrawerState::Open;
        let mut nav = RecordingNavigator::default();
        drawer.select(&item("下载", Some("/download")), &mut nav);
        assert!(!drawer.is_open());
        assert_eq!(nav.visited, vec!["/download".to_string()]);
    }

    #[test]
    fn entry_without_destination_does_nothing() {
        let mut drawer = DrawerState::Open;
        let mut nav = RecordingNavigator::default();
        drawer.select(&item("Soon", None), &mut nav);
        assert!(drawer.is_open());
        assert!(nav.visited.is_empty());
    }

    #[test]
    fn close_is_a_noop_when_closed() {
        let mut drawer = DrawerState::Open;
        drawer.close();
        assert_eq!(drawer, DrawerState::Closed);
        drawer.close();
        assert_eq!(drawer, DrawerState::Closed);
    }

    #[test]
    fn actionable_skips_entries_without_href() {
        let items = vec![item("A", Some("/a")), item("B", None), item("C", Some("/c"))];
        let links: Vec<_> = actionable(&items).collect();
        assert_eq!(links, vec![("A", "/a"), ("C", "/c")]);
    }
}
