//! Vendor pitch: feature cards, the stats strip, and a dashboard mockup.

use yew::prelude::*;

use crate::components::download::DownloadButtons;
use crate::config::Audience;
use crate::i18n::use_language;
use crate::sections::highlighted_title;
use crate::utils::viewport::{reveal_class, use_in_viewport};

#[function_component(VendorSection)]
pub fn vendor_section() -> Html {
    let ctx = use_language();
    let t = ctx.translations();
    let (node, visible) = use_in_viewport();

    html! {
        <section
            id={Audience::Vendor.section_id()}
            class={classes!("section", "vendor-section", reveal_class(visible))}
            ref={node}
        >
            <div class="section-inner">
                <h2>{ highlighted_title(t.vendor.title) }</h2>
                <p class="section-subtitle">{ t.vendor.subtitle }</p>

                <div class="stats-strip">
                    { for [
                        ("500+", t.vendor.stats.active_vendors),
                        ("10K+", t.vendor.stats.monthly_orders),
                        (t.vendor.stats.avg_prep_value, t.vendor.stats.avg_prep_time),
                    ].iter().enumerate().map(|(i, (value, label))| html! {
                        <div class="stat reveal-item" style={format!("transition-delay: {}ms", 100 * i)}>
                            <span class="stat-value">{ *value }</span>
                            <span class="stat-label">{ *label }</span>
                        </div>
                    }) }
                </div>

                <div class="split-grid">
                    <div>
                        <div class="feature-cards">
                            { for t.vendor.features.iter().enumerate().map(|(i, feature)| html! {
                                <div class="feature-card reveal-item" style={format!("transition-delay: {}ms", 100 * i)}>
                                    <h3>{ feature.title }</h3>
                                    <p>{ feature.detail }</p>
                                </div>
                            }) }
                        </div>
                        <DownloadButtons audience={Audience::Vendor} />
                    </div>

                    <div class="mockup-col">
                        <div class="dashboard-card">
                            <div class="dashboard-head">
                                <span class="dot"></span>
                                <h4>{ t.vendor.dashboard.heading }</h4>
                            </div>
                            <div class="dashboard-row">
                                <span>{ t.vendor.stats.todays_orders }</span>
                                <strong>{ "47" }</strong>
                            </div>
                            <div class="dashboard-row">
                                <span>{ t.vendor.dashboard.revenue }</span>
                                <strong>{ "$1,250" }</strong>
                            </div>
                            <div class="dashboard-row">
                                <span>{ t.vendor.dashboard.rating }</span>
                                <strong>{ "4.9 ★" }</strong>
                            </div>
                        </div>
                        <p class="preview-caption">{ t.vendor.preview_caption }</p>
                        <p class="preview-tagline">{ t.vendor.preview_tagline }</p>
                    </div>
                </div>
            </div>

            <style>{r#"
                .vendor-section { background: #ffffff; }
                .stats-strip {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 2.5rem;
                    margin: 2rem 0 2.5rem;
                }
                .stat { display: flex; flex-direction: column; }
                .stat-value {
                    font-size: 2rem;
                    font-weight: 800;
                    color: #F59E0B;
                }
                .stat-label {
                    font-size: 0.9rem;
                    color: #6b7280;
                }
                .split-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                @media (min-width: 1024px) {
                    .split-grid { grid-template-columns: 3fr 2fr; }
                }
                .feature-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .feature-card {
                    padding: 1.25rem 1.5rem;
                    border-radius: 1rem;
                    background: #FFFBEB;
                    border: 1px solid #FDE68A;
                }
                .feature-card h3 {
                    margin: 0 0 0.4rem;
                    font-size: 1.05rem;
                    font-weight: 700;
                    color: #111827;
                }
                .feature-card p {
                    margin: 0;
                    font-size: 0.92rem;
                    line-height: 1.5;
                    color: #4b5563;
                }
                .mockup-col {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .dashboard-card {
                    width: 100%;
                    max-width: 22rem;
                    padding: 1.25rem;
                    border-radius: 1.25rem;
                    background: #111827;
                    color: #f9fafb;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .dashboard-head {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }
                .dashboard-head h4 {
                    margin: 0;
                    font-size: 1rem;
                    font-weight: 700;
                }
                .dashboard-head .dot {
                    width: 0.6rem;
                    height: 0.6rem;
                    border-radius: 9999px;
                    background: #FBBF24;
                }
                .dashboard-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0.6rem 0;
                    border-bottom: 1px solid #1f2937;
                    font-size: 0.92rem;
                }
                .dashboard-row:last-of-type { border-bottom: none; }
                .dashboard-row strong { color: #FBBF24; }
                .preview-caption {
                    margin: 1.25rem 0 0.2rem;
                    font-weight: 700;
                    color: #111827;
                }
                .preview-tagline {
                    margin: 0;
                    font-size: 0.88rem;
                    color: #6b7280;
                }
            "#}</style>
        </section>
    }
}
