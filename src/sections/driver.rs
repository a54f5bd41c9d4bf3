//! Driver pitch: flexibility features, earnings breakdown, and a dashboard
//! mockup with the route view.

use yew::prelude::*;

use crate::components::download::DownloadButtons;
use crate::config::Audience;
use crate::i18n::use_language;
use crate::sections::highlighted_title;
use crate::utils::viewport::{reveal_class, use_in_viewport};

#[function_component(DriverSection)]
pub fn driver_section() -> Html {
    let ctx = use_language();
    let t = ctx.translations();
    let (node, visible) = use_in_viewport();

    html! {
        <section
            id={Audience::Driver.section_id()}
            class={classes!("section", "driver-section", reveal_class(visible))}
            ref={node}
        >
            <div class="section-inner">
                <h2>{ highlighted_title(t.driver.title) }</h2>
                <p class="section-subtitle">{ t.driver.subtitle }</p>

                <div class="stats-strip">
                    { for [
                        ("1K+", t.driver.stats.active_drivers),
                        ("25+", t.driver.stats.service_areas),
                        ("4.8", t.driver.stats.driver_rating),
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
                            { for t.driver.features.iter().enumerate().map(|(i, feature)| html! {
                                <div class="feature-card reveal-item" style={format!("transition-delay: {}ms", 100 * i)}>
                                    <h3>{ feature.title }</h3>
                                    <p>{ feature.detail }</p>
                                </div>
                            }) }
                        </div>

                        <div class="earnings-card">
                            <h4>{ t.driver.metrics.potential_earnings }</h4>
                            <div class="earnings-row">
                                <strong>{ "$15-25" }</strong>
                                <span>{ t.driver.metrics.per_hour }</span>
                            </div>
                            <div class="earnings-row">
                                <strong>{ "$30+" }</strong>
                                <span>{ t.driver.metrics.peak_hours }</span>
                            </div>
                            <div class="earnings-row">
                                <strong>{ "+20%" }</strong>
                                <span>{ t.driver.metrics.weekend_bonus }</span>
                            </div>
                            <p class="earnings-note">{ t.driver.metrics.top_drivers_note }</p>
                        </div>

                        <DownloadButtons audience={Audience::Driver} />
                    </div>

                    <div class="mockup-col">
                        <div class="dashboard-card">
                            <div class="dashboard-head driver-head">
                                <h4>{ t.driver.dashboard.heading }</h4>
                                <span class="online-pill">
                                    <span class="dot"></span>
                                    { t.driver.dashboard.online }
                                </span>
                            </div>
                            <div class="route-map">
                                <span>{ t.driver.dashboard.current_route }</span>
                            </div>
                            <div class="dashboard-row">
                                <span>{ t.driver.metrics.todays_earnings }</span>
                                <strong>{ "$89" }</strong>
                            </div>
                            <div class="dashboard-row">
                                <span>{ t.driver.dashboard.trips }</span>
                                <strong>{ "12" }</strong>
                            </div>
                            <p class="gps-note">{ t.driver.dashboard.gps_badge }</p>
                        </div>
                        <p class="preview-caption">{ t.driver.preview_caption }</p>
                    </div>
                </div>
            </div>

            <style>{r#"
                .driver-section {
                    background: linear-gradient(180deg, #ffffff 0%, #FFFBEB 100%);
                }
                .earnings-card {
                    margin-bottom: 2rem;
                    padding: 1.25rem 1.5rem;
                    border-radius: 1rem;
                    background: #ffffff;
                    border: 2px solid #FDE68A;
                    box-shadow: 0 10px 20px rgba(251, 191, 36, 0.12);
                }
                .earnings-card h4 {
                    margin: 0 0 0.75rem;
                    font-size: 1rem;
                    font-weight: 700;
                    color: #111827;
                }
                .earnings-row {
                    display: flex;
                    align-items: baseline;
                    gap: 0.6rem;
                    padding: 0.35rem 0;
                }
                .earnings-row strong {
                    min-width: 4.5rem;
                    font-size: 1.1rem;
                    color: #F59E0B;
                }
                .earnings-row span {
                    font-size: 0.9rem;
                    color: #4b5563;
                }
                .earnings-note {
                    margin: 0.75rem 0 0;
                    font-size: 0.85rem;
                    color: #92400E;
                }
                .driver-head {
                    justify-content: space-between;
                }
                .online-pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.35rem;
                    padding: 0.2rem 0.7rem;
                    border-radius: 9999px;
                    background: #064e3b;
                    color: #6ee7b7;
                    font-size: 0.75rem;
                    font-weight: 600;
                }
                .online-pill .dot {
                    width: 0.45rem;
                    height: 0.45rem;
                    border-radius: 9999px;
                    background: #34d399;
                }
                .route-map {
                    height: 6rem;
                    margin-bottom: 0.75rem;
                    border-radius: 0.75rem;
                    background: repeating-linear-gradient(
                        45deg,
                        #1f2937,
                        #1f2937 10px,
                        #273549 10px,
                        #273549 20px
                    );
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.85rem;
                    color: #9ca3af;
                }
                .gps-note {
                    margin: 0.75rem 0 0;
                    font-size: 0.8rem;
                    color: #9ca3af;
                }
            "#}</style>
        </section>
    }
}
