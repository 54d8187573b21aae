//! The views module contains the components for all Layouts and Routes for our app. Each layout and route in our [`Route`]
//! enum will render one of these components.
//!
//! The [`SiteLayout`] wraps every page with the header, the navigation and the footer.

mod home;
pub use home::Home;

mod download;
pub use download::Download;

mod layout;
pub use layout::SiteLayout;

mod not_found;
pub use not_found::PageNotFound;
