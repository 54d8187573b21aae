//! Presentational building blocks shared by the pages.

mod brand;
pub use brand::BrandMark;

mod footer;
pub use footer::SiteFooter;

mod icons;
pub use icons::MenuIcon;

mod main_nav;
pub use main_nav::MainNav;

mod mobile_nav;
pub use mobile_nav::MobileNav;
