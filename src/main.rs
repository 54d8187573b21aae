use config::SiteConfig;
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use views::{Download, Home, PageNotFound, SiteLayout};

/// Navigation, footer and other pieces shared by the pages.
mod components;
/// Site metadata and navigation entries bundled with the app.
mod config;
/// Drawer state machine and the navigation seam it drives.
mod nav;
/// One component per route, plus the layout wrapping them.
mod views;

/// Pages of the site. Navigation entries in `site.json` resolve against these paths.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    // Every page shares the header, the navigation drawer and the footer.
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/download")]
        Download {},
        // Anything that didn't match above lands here, with the path split into segments.
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

/// Site logo, used as the tab icon and in the navigation drawer.
const FAVICON: Asset = asset!("/assets/favicon.png");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    dioxus::launch(App);
}

/// App is the root of the site. It loads the bundled config once and either hands it to the router or shows
/// why it couldn't.
#[component]
fn App() -> Element {
    let config = use_hook(|| match SiteConfig::load() {
        Ok(config) => {
            info!("loaded site config with {} nav entries", config.main_nav.len());
            Ok(config)
        }
        Err(e) => {
            error!("failed to load site config: {e}");
            Err(e.to_string())
        }
    });

    let body = match config {
        Ok(config) => rsx! {
            SiteRoot { config }
        },
        Err(message) => rsx! {
            div { class: "status-message", "Error loading site config: {message}" }
        },
    };

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {body}
    }
}

/// Makes the config available to every page through context, then renders the router.
#[component]
fn SiteRoot(config: SiteConfig) -> Element {
    let config = use_context_provider(|| config);

    rsx! {
        document::Title { "{config.name}" }
        document::Meta { name: "description", content: "{config.description}" }

        Router::<Route> {}
    }
}
