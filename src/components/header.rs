//! Fixed top navigation: brand, section links, language switcher, and a
//! collapsible menu for narrow screens.

use yew::prelude::*;

use crate::config::{self, Audience};
use crate::i18n::{use_language, Language};
use crate::utils::scroll::{scroll_to_section, use_scrolled};

/// Scroll depth past which the header swaps its transparent background for a
/// solid one.
const SOLID_AFTER_PX: f64 = 50.0;

fn nav_links(language: Language, on_nav: &Callback<Audience>) -> Html {
    html! {
        { for Audience::ALL.iter().map(|audience| {
            let on_nav = on_nav.clone();
            let audience = *audience;
            html! {
                <button
                    class="nav-link"
                    onclick={Callback::from(move |_: MouseEvent| on_nav.emit(audience))}
                >
                    { audience.nav_label(language) }
                </button>
            }
        }) }
    }
}

/// Both languages side by side in a pill, the active one highlighted.
fn language_switch(current: Language, on_select: &Callback<Language>) -> Html {
    html! {
        <div class="language-switch" role="group" aria-label="Language">
            { for Language::ALL.iter().map(|language| {
                let on_select = on_select.clone();
                let language = *language;
                let selected = language == current;
                html! {
                    <button
                        class={classes!("language-option", selected.then_some("selected"))}
                        aria-pressed={selected.to_string()}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(language))}
                    >
                        { language.switch_label() }
                    </button>
                }
            }) }
        </div>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let ctx = use_language();
    let scrolled = use_scrolled(SOLID_AFTER_PX);
    let menu_open = use_state_eq(|| false);

    let nav_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |audience: Audience| {
            scroll_to_section(audience.section_id());
            menu_open.set(false);
        })
    };

    let brand_home = Callback::from(|_: MouseEvent| {
        scroll_to_section(Audience::Customer.section_id());
    });

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let select_language = {
        let ctx = ctx.clone();
        Callback::from(move |language: Language| ctx.switch.emit(language))
    };

    html! {
        <header class={classes!("site-header", scrolled.then_some("solid"))}>
            <div class="header-inner">
                <button class="brand" onclick={brand_home}>
                    <img src={config::logo_url()} alt="Takkeh" />
                    <span>{ "Takkeh" }</span>
                </button>

                <nav class="desktop-nav">
                    { nav_links(ctx.language, &nav_to) }
                </nav>

                <div class="header-actions">
                    { language_switch(ctx.language, &select_language) }
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded={(*menu_open).to_string()}
                        onclick={toggle_menu}
                    >
                        <span></span><span></span><span></span>
                    </button>
                </div>
            </div>

            if *menu_open {
                <nav class="mobile-nav">
                    { nav_links(ctx.language, &nav_to) }
                </nav>
            }

            <style>{r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.solid {
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                    backdrop-filter: blur(8px);
                }
                .header-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    border: none;
                    background: none;
                    cursor: pointer;
                }
                .brand img { height: 2.25rem; }
                .brand span {
                    font-size: 1.25rem;
                    font-weight: 800;
                    color: #1f2937;
                }
                .desktop-nav {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    border: none;
                    background: none;
                    cursor: pointer;
                    font-size: 0.95rem;
                    font-weight: 600;
                    color: #374151;
                    transition: color 0.2s ease;
                }
                .nav-link:hover { color: #F59E0B; }
                .header-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .language-switch {
                    display: flex;
                    align-items: center;
                    background: #f3f4f6;
                    border-radius: 9999px;
                    padding: 0.25rem;
                }
                .language-option {
                    border: none;
                    background: none;
                    cursor: pointer;
                    border-radius: 9999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #4b5563;
                    transition: all 0.2s ease;
                }
                .language-option:hover { color: #1f2937; }
                .language-option.selected {
                    background: #FBBF24;
                    color: #fff;
                    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
                }
                .menu-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    border: none;
                    background: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .menu-toggle span {
                    width: 22px;
                    height: 2px;
                    background: #1f2937;
                    border-radius: 1px;
                }
                .mobile-nav {
                    display: none;
                    flex-direction: column;
                    gap: 0.25rem;
                    padding: 0.5rem 1.5rem 1rem;
                    background: rgba(255, 255, 255, 0.98);
                    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.08);
                }
                .mobile-nav .nav-link {
                    padding: 0.6rem 0;
                    text-align: start;
                }
                @media (max-width: 768px) {
                    .desktop-nav { display: none; }
                    .menu-toggle { display: flex; }
                    .mobile-nav { display: flex; }
                }
            "#}</style>
        </header>
    }
}
