//! Hero section for customers: headline, benefits, store badges, cross links
//! to the other audiences, and the app-screen accordion.

use yew::prelude::*;

use crate::components::accordion::ScreenAccordion;
use crate::components::download::DownloadButtons;
use crate::config::Audience;
use crate::i18n::use_language;
use crate::sections::highlighted_title;
use crate::utils::scroll::scroll_to_section;
use crate::utils::viewport::{reveal_class, use_in_viewport};

#[function_component(CustomerSection)]
pub fn customer_section() -> Html {
    let ctx = use_language();
    let t = ctx.translations();
    let (node, visible) = use_in_viewport();

    let to_vendor = Callback::from(|_: MouseEvent| {
        scroll_to_section(Audience::Vendor.section_id());
    });
    let to_driver = Callback::from(|_: MouseEvent| {
        scroll_to_section(Audience::Driver.section_id());
    });

    html! {
        <section
            id={Audience::Customer.section_id()}
            class={classes!("section", "customer-section", reveal_class(visible))}
            ref={node}
        >
            <div class="blob blob-a" aria-hidden="true"></div>
            <div class="blob blob-b" aria-hidden="true"></div>

            <div class="section-inner customer-grid">
                <div class="customer-copy">
                    <h1>{ highlighted_title(t.customer.title) }</h1>
                    <p class="section-subtitle">{ t.customer.subtitle }</p>

                    <ul class="benefits">
                        { for t.customer.benefits.iter().enumerate().map(|(i, benefit)| html! {
                            <li class="reveal-item" style={format!("transition-delay: {}ms", 100 * i)}>
                                <span class="check" aria-hidden="true">{ "✓" }</span>
                                { *benefit }
                            </li>
                        }) }
                    </ul>

                    <DownloadButtons audience={Audience::Customer} />

                    <div class="cta-row">
                        <button class="cta-secondary" onclick={to_vendor}>
                            { t.customer.become_vendor }
                        </button>
                        <button class="cta-secondary" onclick={to_driver}>
                            { t.customer.become_driver }
                        </button>
                    </div>

                    <p class="availability-note">{ t.availability }</p>
                </div>

                <div class="customer-visual">
                    <ScreenAccordion />
                </div>
            </div>

            <style>{r#"
                .customer-section {
                    position: relative;
                    overflow: hidden;
                    padding-top: 7rem;
                    background: linear-gradient(180deg, #FFFBEB 0%, #ffffff 100%);
                }
                .blob {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 9999px;
                    filter: blur(80px);
                    pointer-events: none;
                    animation: blob-pulse 8s ease-in-out infinite;
                }
                .blob-a {
                    top: -6rem;
                    inset-inline-end: -6rem;
                    background: rgba(251, 191, 36, 0.25);
                }
                .blob-b {
                    bottom: -8rem;
                    inset-inline-start: -4rem;
                    background: rgba(253, 230, 138, 0.35);
                    animation-delay: 2s;
                }
                @keyframes blob-pulse {
                    0%, 100% { transform: scale(1); opacity: 0.7; }
                    50% { transform: scale(1.15); opacity: 1; }
                }
                .customer-section .section-inner {
                    position: relative;
                    z-index: 1;
                }
                .customer-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                @media (min-width: 1024px) {
                    .customer-grid { grid-template-columns: 1fr 1fr; }
                }
                .customer-copy h1 {
                    margin: 0 0 1rem;
                    font-size: clamp(2rem, 5vw, 3.25rem);
                    font-weight: 800;
                    line-height: 1.15;
                    color: #111827;
                }
                .benefits {
                    list-style: none;
                    margin: 0 0 2rem;
                    padding: 0;
                }
                .benefits li {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    margin-bottom: 0.6rem;
                    font-size: 1rem;
                    color: #374151;
                }
                .benefits .check {
                    flex-shrink: 0;
                    width: 1.4rem;
                    height: 1.4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    background: #FDE68A;
                    color: #92400E;
                    font-size: 0.8rem;
                    font-weight: 700;
                }
                .cta-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .cta-secondary {
                    border: 2px solid #FBBF24;
                    border-radius: 9999px;
                    padding: 0.6rem 1.4rem;
                    background: none;
                    cursor: pointer;
                    font-size: 0.95rem;
                    font-weight: 700;
                    color: #92400E;
                    transition: background 0.2s ease, transform 0.2s ease;
                }
                .cta-secondary:hover {
                    background: #FDE68A;
                    transform: translateY(-2px);
                }
                .availability-note {
                    margin-top: 1.5rem;
                    font-size: 0.9rem;
                    color: #6b7280;
                }
                .customer-visual {
                    display: flex;
                    justify-content: center;
                }
            "#}</style>
        </section>
    }
}
