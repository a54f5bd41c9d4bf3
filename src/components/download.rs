//! Store badge pair shown under every section's call to action.

use yew::prelude::*;

use crate::config::Audience;
use crate::i18n::use_language;

#[derive(Properties, PartialEq)]
pub struct DownloadButtonsProps {
    /// Which app the badges link to.
    pub audience: Audience,
}

/// App Store and Google Play badges for one audience's app.
///
/// Badge artwork is language-neutral; the accessible name comes from the
/// active string table.
#[function_component(DownloadButtons)]
pub fn download_buttons(props: &DownloadButtonsProps) -> Html {
    let ctx = use_language();
    let t = ctx.translations();
    let links = props.audience.store_links();

    html! {
        <div class="download-buttons">
            <a
                class="store-badge"
                href={links.app_store}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={t.buttons.download_ios}
            >
                <img src={crate::config::app_store_badge_url()} alt={t.buttons.download_ios} loading="lazy" />
            </a>
            <a
                class="store-badge"
                href={links.google_play}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={t.buttons.download_android}
            >
                <img src={crate::config::google_play_badge_url()} alt={t.buttons.download_android} loading="lazy" />
            </a>
            <style>{r#"
                .download-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    align-items: center;
                }
                .store-badge img {
                    height: 3rem;
                    display: block;
                    transition: transform 0.2s ease;
                }
                .store-badge:hover img {
                    transform: translateY(-2px);
                }
            "#}</style>
        </div>
    }
}
