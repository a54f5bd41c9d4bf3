//! Page footer: brand blurb, contact details, legal links, customer app
//! badges, and the availability note.

use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::download::DownloadButtons;
use crate::config::{self, Audience};
use crate::i18n::use_language;

#[function_component(Footer)]
pub fn footer() -> Html {
    let ctx = use_language();
    let t = ctx.translations();
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-col footer-brand">
                    <div class="brand-row">
                        <img src={config::logo_url()} alt="Takkeh" />
                        <span>{ "Takkeh" }</span>
                    </div>
                    <p>{ t.footer.description }</p>
                    <p class="made-with">{ t.footer.made_with }</p>
                </div>

                <div class="footer-col">
                    <h4>{ t.footer.contact }</h4>
                    <a class="footer-link" href={format!("mailto:{}", config::SUPPORT_EMAIL)}>
                        { config::SUPPORT_EMAIL }
                    </a>
                    <p>{ t.footer.hours }</p>
                </div>

                <div class="footer-col">
                    <h4>{ t.footer.legal }</h4>
                    <a class="footer-link" href="#">{ t.footer.privacy }</a>
                    <a class="footer-link" href="#">{ t.footer.terms }</a>
                </div>

                <div class="footer-col">
                    <h4>{ t.footer.download_customer }</h4>
                    <DownloadButtons audience={Audience::Customer} />
                </div>
            </div>

            <div class="footer-bottom">
                <p>{ format!("© {year} Takkeh. {}", t.footer.rights) }</p>
                <p class="availability">{ t.availability }</p>
            </div>

            <style>{r#"
                .site-footer {
                    background: #111827;
                    color: #d1d5db;
                    padding: 3rem 1.5rem 1.5rem;
                }
                .footer-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 2rem;
                }
                .footer-col h4 {
                    margin: 0 0 0.75rem;
                    font-size: 1rem;
                    font-weight: 700;
                    color: #ffffff;
                }
                .footer-col p {
                    margin: 0 0 0.5rem;
                    font-size: 0.9rem;
                    line-height: 1.5;
                }
                .brand-row {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                }
                .brand-row img { height: 2rem; }
                .brand-row span {
                    font-size: 1.25rem;
                    font-weight: 800;
                    color: #FBBF24;
                }
                .made-with { color: #9ca3af; }
                .footer-link {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-size: 0.9rem;
                    color: #d1d5db;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .footer-link:hover { color: #FBBF24; }
                .footer-bottom {
                    max-width: 72rem;
                    margin: 2rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid #1f2937;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 0.5rem;
                    font-size: 0.85rem;
                    color: #9ca3af;
                }
                .footer-bottom p { margin: 0; }
            "#}</style>
        </footer>
    }
}
