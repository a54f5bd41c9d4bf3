//! Static site configuration: asset locations and outbound links.
//!
//! Everything here is fixed at build time. Store links open in a new tab and
//! their reachability is not this crate's concern.

use crate::i18n::Language;

/// Prefix a path with the public asset directory.
pub fn asset(path: &str) -> String {
    format!("/assets/{}", path)
}

pub fn logo_url() -> String {
    asset("logo-takkeh.svg")
}

pub fn app_store_badge_url() -> String {
    asset("badges/app-store.svg")
}

pub fn google_play_badge_url() -> String {
    asset("badges/google-play.svg")
}

pub const SUPPORT_EMAIL: &str = "support@takkeh.app";

/// App-store download links for one audience's app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLinks {
    pub app_store: &'static str,
    pub google_play: &'static str,
}

/// The three audiences the page pitches to. Each owns a page section and a
/// pair of store links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Customer,
    Vendor,
    Driver,
}

impl Audience {
    pub const ALL: [Audience; 3] = [Audience::Customer, Audience::Vendor, Audience::Driver];

    /// The DOM id of this audience's section, used by nav scrolling.
    pub fn section_id(&self) -> &'static str {
        match self {
            Audience::Customer => "customer",
            Audience::Vendor => "vendor",
            Audience::Driver => "driver",
        }
    }

    pub fn store_links(&self) -> StoreLinks {
        match self {
            Audience::Customer => StoreLinks {
                app_store: "https://example.com/download/takkeh-customer-ios",
                google_play: "https://example.com/download/takkeh-customer-android",
            },
            Audience::Vendor => StoreLinks {
                app_store: "https://example.com/download/takkeh-vendor-ios",
                google_play: "https://example.com/download/takkeh-vendor-android",
            },
            Audience::Driver => StoreLinks {
                app_store: "https://example.com/download/takkeh-driver-ios",
                google_play: "https://example.com/download/takkeh-driver-android",
            },
        }
    }

    /// Nav label for this audience in the given language.
    pub fn nav_label(&self, language: Language) -> &'static str {
        let nav = &language.translations().nav;
        match self {
            Audience::Customer => nav.customer,
            Audience::Vendor => nav.vendor,
            Audience::Driver => nav.driver,
        }
    }
}

/// Paths of the three customer app screens shown by the accordion, in display
/// order. Matches `Translations::screens`.
pub fn screen_image_urls() -> [String; 3] {
    [
        asset("customer-screens/home.svg"),
        asset("customer-screens/favorites.svg"),
        asset("customer-screens/tracking.svg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_are_rooted() {
        assert_eq!(asset("logo-takkeh.svg"), "/assets/logo-takkeh.svg");
        assert!(logo_url().starts_with("/assets/"));
        for url in screen_image_urls() {
            assert!(url.starts_with("/assets/customer-screens/"));
        }
    }

    #[test]
    fn every_audience_has_distinct_links_and_section() {
        let mut ids = Vec::new();
        for audience in Audience::ALL {
            let links = audience.store_links();
            assert!(links.app_store.starts_with("https://"));
            assert!(links.google_play.starts_with("https://"));
            assert_ne!(links.app_store, links.google_play);
            ids.push(audience.section_id());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
