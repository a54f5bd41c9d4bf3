//! The app-screen accordion: a row of phone mockups where exactly one panel
//! is expanded at a time.
//!
//! All selection state lives in one [`AccordionState`] reducer instead of
//! being scattered across items. Activation opens a short animation window
//! (`just_activated`) that is closed by an explicit timer matching the
//! entrance animation, so a re-activation of the open panel can never restart
//! the animation and a stale timer can never cut a newer one short.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::i18n::strings::Screen;
use crate::i18n::use_language;

/// Duration of the fall-and-rise entrance animation. Keep in sync with the
/// `fall-and-rise` keyframes below.
pub const FALL_ANIMATION_MS: u32 = 420;

/// Inline SVG shown when a screen image fails to load.
pub const FALLBACK_SCREEN: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDEyIiBoZWlnaHQ9IjkxNyIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjRkJCRjI0Ii8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtZmFtaWx5PSJBcmlhbCIgZm9udC1zaXplPSIyMCIgZmlsbD0iI2ZmZiIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZHk9Ii4zZW0iPkFwcCBTY3JlZW48L3RleHQ+PC9zdmc+";

/// Which panel is open and whether its entrance animation is still running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState {
    pub active: usize,
    pub just_activated: bool,
    panels: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionAction {
    /// Pointer, hover, or keyboard selection of a panel.
    Activate(usize),
    /// The entrance animation armed for the given panel has finished.
    TransitionDone(usize),
}

impl AccordionState {
    /// Fresh state with the first panel open and no animation running.
    pub fn new(panels: usize) -> Self {
        debug_assert!(panels > 0);
        Self {
            active: 0,
            just_activated: false,
            panels,
        }
    }

    pub fn panel_count(&self) -> usize {
        self.panels
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: AccordionAction) -> Rc<Self> {
        match action {
            AccordionAction::Activate(index) => {
                // Re-activating the open panel or pointing outside the list
                // changes nothing; in particular it must not restart the
                // animation window.
                if index == self.active || index >= self.panels {
                    self
                } else {
                    Rc::new(Self {
                        active: index,
                        just_activated: true,
                        panels: self.panels,
                    })
                }
            }
            AccordionAction::TransitionDone(index) => {
                if index == self.active && self.just_activated {
                    Rc::new(Self {
                        just_activated: false,
                        ..*self
                    })
                } else {
                    // A timer that lost the race against a newer activation;
                    // the newer panel keeps its own window.
                    self
                }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AccordionItemProps {
    index: usize,
    screen: Screen,
    image_url: String,
    active: bool,
    just_activated: bool,
    on_activate: Callback<usize>,
}

/// One phone panel. Its only local state is whether the image failed to load;
/// everything about selection comes from the parent.
#[function_component(AccordionItem)]
fn accordion_item(props: &AccordionItemProps) -> Html {
    let image_failed = use_state_eq(|| false);

    let activate = {
        let on_activate = props.on_activate.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_activate.emit(index))
    };
    let hover_activate = {
        let on_activate = props.on_activate.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_activate.emit(index))
    };
    let key_activate = {
        let on_activate = props.on_activate.clone();
        let index = props.index;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                on_activate.emit(index);
            }
        })
    };
    let on_image_error = {
        let image_failed = image_failed.clone();
        let title = props.screen.title;
        Callback::from(move |_: Event| {
            log::warn!("screen image for {title:?} failed to load, using placeholder");
            image_failed.set(true);
        })
    };

    // 412x917 is the source aspect ratio of the screen captures.
    let (width, height) = if props.active { (200, 445) } else { (60, 60) };
    let src = if *image_failed {
        FALLBACK_SCREEN.to_string()
    } else {
        props.image_url.clone()
    };

    html! {
        <div
            class={classes!("accordion-item", props.active.then_some("active"))}
            role="button"
            tabindex="0"
            aria-expanded={props.active.to_string()}
            aria-label={props.screen.title}
            onclick={activate}
            onmouseenter={hover_activate}
            onkeydown={key_activate}
        >
            <div class="accordion-phone-slot">
                <div
                    class="accordion-phone"
                    style={format!("width: {width}px; height: {height}px;")}
                >
                    <div class="accordion-screen">
                        if props.active {
                            <div class="accordion-status-bar">
                                <span></span><span></span><span></span>
                            </div>
                            <div class="accordion-screen-image">
                                <img src={src} alt={props.screen.title} onerror={on_image_error} />
                            </div>
                        } else {
                            <div class="accordion-screen-idle">
                                <div class="mark"><span></span></div>
                            </div>
                        }
                    </div>
                </div>
            </div>

            <div
                class="accordion-caption"
                style={(props.active && props.just_activated).then(|| "transition-delay: 120ms".to_string())}
            >
                <h3>{ props.screen.title }</h3>
                <p>{ props.screen.description }</p>
            </div>

            if !props.active {
                <div class="accordion-side-label">
                    <span>{ props.screen.title }</span>
                </div>
            }
            if props.active && props.just_activated {
                <span class="accordion-fall-label">{ props.screen.title }</span>
            }
        </div>
    }
}

/// The full accordion row for the customer app screens.
#[function_component(ScreenAccordion)]
pub fn screen_accordion() -> Html {
    let ctx = use_language();
    let t = ctx.translations();
    let state = use_reducer_eq(|| AccordionState::new(t.screens.len()));

    // Arm one timer per opened animation window. The timer carries the index
    // it was armed for, so the reducer can tell it apart from a stale one.
    {
        let deps = (state.active, state.just_activated);
        let state = state.clone();
        use_effect_with_deps(
            move |deps: &(usize, bool)| {
                let (index, just_activated) = *deps;
                if just_activated {
                    spawn_local(async move {
                        TimeoutFuture::new(FALL_ANIMATION_MS).await;
                        state.dispatch(AccordionAction::TransitionDone(index));
                    });
                }
                || ()
            },
            deps,
        );
    }

    let on_activate = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(AccordionAction::Activate(index)))
    };

    let images = config::screen_image_urls();

    html! {
        <div class="app-slider">
            <div class="accordion-track">
                { for t.screens.iter().enumerate().map(|(index, screen)| html! {
                    <AccordionItem
                        key={index}
                        {index}
                        screen={*screen}
                        image_url={images[index].clone()}
                        active={state.is_active(index)}
                        just_activated={state.is_active(index) && state.just_activated}
                        on_activate={on_activate.clone()}
                    />
                }) }
            </div>
            <style>{r#"
                .app-slider {
                    width: 100%;
                    min-height: 470px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: visible;
                }
                .accordion-track {
                    display: flex;
                    flex-direction: row;
                    align-items: flex-start;
                    justify-content: center;
                    gap: 0.75rem;
                    padding: 1rem 0.5rem;
                    touch-action: pan-y;
                    user-select: none;
                }
                .accordion-item {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    width: 65px;
                    height: 360px;
                    border-radius: 1rem;
                    overflow: visible;
                    cursor: pointer;
                    background: linear-gradient(135deg,
                        rgba(251, 191, 36, 0.20),
                        rgba(255, 237, 213, 0.30),
                        rgba(253, 230, 138, 0.20));
                    transition: all 0.7s ease-in-out;
                }
                .accordion-item:hover {
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    transform: translateY(-4px);
                }
                .accordion-item.active {
                    width: 230px;
                    height: 430px;
                }
                @media (min-width: 768px) {
                    .accordion-item { width: 80px; height: 450px; }
                    .accordion-item.active { width: 280px; height: 550px; }
                }
                .accordion-phone-slot {
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.25rem 0.25rem;
                }
                .accordion-phone {
                    background: #111827;
                    border-radius: 1.5rem;
                    padding: 4px;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transition: all 0.7s ease-in-out;
                }
                .accordion-screen {
                    display: flex;
                    flex-direction: column;
                    width: 100%;
                    height: 100%;
                    background: #ffffff;
                    border-radius: 1.2rem;
                    overflow: hidden;
                    opacity: 0.7;
                    transition: all 0.7s ease-in-out;
                }
                .accordion-item.active .accordion-screen { opacity: 1; }
                .accordion-status-bar {
                    height: 1rem;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 4px;
                    background: #f9fafb;
                }
                .accordion-status-bar span {
                    width: 4px;
                    height: 4px;
                    border-radius: 9999px;
                    background: #9ca3af;
                }
                .accordion-screen-image {
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0.5rem;
                    overflow: hidden;
                }
                .accordion-screen-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    aspect-ratio: 412 / 917;
                }
                .accordion-screen-idle {
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .accordion-screen-idle .mark {
                    width: 1.5rem;
                    height: 1.5rem;
                    background: #FBBF24;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .accordion-screen-idle .mark span {
                    display: block;
                    width: 0.75rem;
                    height: 0.75rem;
                    background: #ffffff;
                    border-radius: 0.125rem;
                }
                .accordion-caption {
                    padding: 0 1rem 0.3em;
                    text-align: center;
                    opacity: 0;
                    transform: translateY(1rem);
                    transition: opacity 0.6s cubic-bezier(0.22, 0.61, 0.36, 1),
                                transform 0.6s cubic-bezier(0.22, 0.61, 0.36, 1);
                }
                .accordion-item.active .accordion-caption {
                    opacity: 1;
                    transform: translateY(0);
                }
                .accordion-caption h3 {
                    margin: 0 0 0.4em;
                    font-size: 1rem;
                    font-weight: 700;
                    line-height: 1.375;
                    color: #1f2937;
                }
                .accordion-caption p {
                    margin: 0;
                    padding-bottom: 0.1em;
                    font-size: 0.75rem;
                    line-height: 1.25;
                    color: #4b5563;
                }
                .accordion-side-label {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    display: flex;
                    justify-content: center;
                    pointer-events: none;
                }
                .accordion-side-label span {
                    writing-mode: vertical-rl;
                    text-orientation: mixed;
                    padding-bottom: 0.3em;
                    font-size: 0.875rem;
                    font-weight: 600;
                    line-height: 1;
                    color: #374151;
                    user-select: none;
                }
                .accordion-fall-label {
                    position: absolute;
                    left: 50%;
                    bottom: 0;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #374151;
                    pointer-events: none;
                    animation: fall-and-rise 420ms cubic-bezier(0.3, 0.7, 0.4, 1) forwards;
                }
                @keyframes fall-and-rise {
                    0% {
                        transform: translateX(-50%) rotate(-90deg) translateY(0);
                        transform-origin: bottom center;
                        opacity: 1;
                    }
                    40% { transform: translateX(-50%) rotate(-20deg) translateY(2px); opacity: 1; }
                    60% { transform: translateX(-50%) rotate(0deg) translateY(8px); opacity: 1; }
                    72% { transform: translateX(-50%) rotate(0deg) translateY(8px); opacity: 1; }
                    100% { transform: translateX(-50%) rotate(0deg) translateY(-10px); opacity: 0; }
                }
            "#}</style>
        </div>
    }
}
