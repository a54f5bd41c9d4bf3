//! Server-side render smoke tests: the full page renders in both languages
//! with every section, the accordion's initial selection, and the footer
//! contact details present in the markup.

#![cfg(not(target_arch = "wasm32"))]

use yew::prelude::*;
use yew::LocalServerRenderer;

use takkeh_landing::i18n::{Language, LanguageContext};
use takkeh_landing::pages::landing::Landing;

#[derive(Properties, PartialEq)]
struct HarnessProps {
    language: Language,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let ctx = LanguageContext {
        language: props.language,
        switch: Callback::noop(),
    };
    html! {
        <ContextProvider<LanguageContext> context={ctx}>
            <Landing />
        </ContextProvider<LanguageContext>>
    }
}

async fn render(language: Language) -> String {
    // Plain markup, no hydration markers, so assertions can match substrings.
    LocalServerRenderer::<Harness>::with_props(HarnessProps { language })
        .hydratable(false)
        .render()
        .await
}

#[tokio::test]
async fn english_page_carries_every_section() {
    let html = render(Language::English).await;

    assert!(html.contains("id=\"customer\""));
    assert!(html.contains("id=\"vendor\""));
    assert!(html.contains("id=\"driver\""));

    assert!(html.contains("Fast grocery"));
    assert!(html.contains("Easy ordering from your favorite stores"));
    assert!(html.contains("Vendor Dashboard"));
    assert!(html.contains("15min"));
    assert!(html.contains("Driver Dashboard"));
    assert!(html.contains("$15-25"));
}

#[tokio::test]
async fn arabic_page_renders_arabic_copy() {
    let html = render(Language::Arabic).await;

    assert!(html.contains("توصيل بقالة"));
    assert!(html.contains("كن بائعاً"));
    assert!(html.contains("15 دقيقة"));
    assert!(html.contains("الواجهة الرئيسية"));
    assert!(html.contains("جميع الحقوق محفوظة"));

    // The switcher still offers English.
    assert!(html.contains(">EN<"));
    assert!(!html.contains("15min"));
}

#[tokio::test]
async fn language_switch_shows_both_options_and_marks_the_active_one() {
    let english = render(Language::English).await;
    assert!(english.contains(">EN<"));
    assert!(english.contains(">عربي<"));
    assert!(english.contains("aria-pressed=\"true\">EN<"));
    assert_eq!(english.matches("aria-pressed=\"true\"").count(), 1);

    let arabic = render(Language::Arabic).await;
    assert!(arabic.contains("aria-pressed=\"true\">عربي<"));
    assert_eq!(arabic.matches("aria-pressed=\"true\"").count(), 1);
}

#[tokio::test]
async fn accordion_starts_with_exactly_one_expanded_panel() {
    let html = render(Language::English).await;

    assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
    // Two collapsed panels plus the header's collapsed mobile menu toggle.
    assert_eq!(html.matches("aria-expanded=\"false\"").count(), 3);

    // The expanded panel is the first screen; collapsed panels only show the
    // vertical side label.
    assert!(html.contains("Home Screen"));
    assert!(html.contains("Order Tracking"));
}

#[tokio::test]
async fn store_badges_link_each_audience_to_its_app() {
    let html = render(Language::English).await;

    for slug in [
        "takkeh-customer-ios",
        "takkeh-customer-android",
        "takkeh-vendor-ios",
        "takkeh-vendor-android",
        "takkeh-driver-ios",
        "takkeh-driver-android",
    ] {
        assert!(html.contains(slug), "missing store link for {slug}");
    }

    assert!(html.contains("/assets/badges/app-store.svg"));
    assert!(html.contains("/assets/badges/google-play.svg"));
}

#[tokio::test]
async fn footer_carries_contact_and_availability() {
    let html = render(Language::English).await;

    assert!(html.contains("mailto:support@takkeh.app"));
    assert!(html.contains("Business Hours"));
    assert!(html.contains("Now launching in select cities"));
    assert!(html.contains("All rights reserved."));
}

#[tokio::test]
async fn section_titles_highlight_their_final_word() {
    let html = render(Language::English).await;
    assert!(html.contains("<span class=\"highlight\">delivery</span>"));
}
