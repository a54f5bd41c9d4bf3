//! Language state shared by the whole page.
//!
//! A single [`LanguageProvider`] sits at the top of the component tree and
//! exposes the active [`Language`] plus a switch callback through Yew's
//! context API. Text direction is never stored anywhere: it is always derived
//! from the language, so the two cannot drift apart.

pub mod strings;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yew::prelude::*;

use strings::{Translations, AR, EN};

/// Languages the page ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Arabic];

    /// BCP 47 code, also what goes into `<html lang>`.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Label on this language's button in the header switcher.
    pub fn switch_label(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Arabic => "عربي",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Language::English => Direction::Ltr,
            Language::Arabic => Direction::Rtl,
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }

    /// The full string table for this language.
    pub fn translations(&self) -> &'static Translations {
        match self {
            Language::English => &EN,
            Language::Arabic => &AR,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ar" | "arabic" => Ok(Language::Arabic),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// Horizontal text direction, always a function of [`Language`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What [`use_language`] hands out: the active language and a callback that
/// switches it for the whole tree.
#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub switch: Callback<Language>,
}

impl LanguageContext {
    pub fn translations(&self) -> &'static Translations {
        self.language.translations()
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    /// Language to start in before the user touches the switcher.
    #[prop_or_default]
    pub initial: Language,
    pub children: Children,
}

/// Owns the language state and mirrors it onto the document element.
#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language = use_state(|| props.initial);

    let switch = {
        let language = language.clone();
        Callback::from(move |next: Language| language.set(next))
    };

    // Runs on mount and again after every switch, so `<html lang dir>` always
    // matches the rendered copy.
    use_effect_with_deps(
        |lang: &Language| {
            sync_document_language(*lang);
            || ()
        },
        *language,
    );

    let ctx = LanguageContext {
        language: *language,
        switch,
    };

    html! {
        <ContextProvider<LanguageContext> context={ctx}>
            { for props.children.iter() }
        </ContextProvider<LanguageContext>>
    }
}

/// Grab the shared language context.
///
/// Panics when no [`LanguageProvider`] is mounted above the caller, which is
/// a wiring bug rather than a runtime condition.
#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>()
        .expect("use_language called outside of a LanguageProvider")
}

/// Set `lang` and `dir` on `<html>` so direction and font selection apply to
/// everything, including text rendered outside our components.
fn sync_document_language(language: Language) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("lang", language.code());
            let _ = root.set_attribute("dir", language.direction().as_str());
            log::debug!("document language set to {}", language);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_a_pure_function_of_language() {
        assert_eq!(Language::English.direction(), Direction::Ltr);
        assert_eq!(Language::Arabic.direction(), Direction::Rtl);
        assert!(!Language::English.is_rtl());
        assert!(Language::Arabic.is_rtl());
    }

    #[test]
    fn switcher_labels_each_language_in_itself() {
        assert_eq!(Language::English.switch_label(), "EN");
        assert_eq!(Language::Arabic.switch_label(), "عربي");
    }

    #[test]
    fn codes_and_attributes_line_up() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Arabic.code(), "ar");
        assert_eq!(Language::English.direction().as_str(), "ltr");
        assert_eq!(Language::Arabic.direction().as_str(), "rtl");
        assert_eq!(Language::Arabic.to_string(), "ar");
    }

    #[test]
    fn parses_codes_and_names_case_insensitively() {
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert_eq!("AR".parse::<Language>(), Ok(Language::Arabic));
        assert_eq!(" english ".parse::<Language>(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn serde_uses_the_code_form() {
        assert_eq!(serde_json::to_string(&Language::Arabic).unwrap(), "\"ar\"");
        assert_eq!(
            serde_json::from_str::<Language>("\"en\"").unwrap(),
            Language::English
        );
    }

    #[test]
    fn each_language_resolves_its_own_table() {
        assert_eq!(Language::English.translations().nav.customer, "Customer App");
        assert_eq!(Language::Arabic.translations().nav.customer, "تطبيق العملاء");
    }

    #[test]
    fn context_accessors_mirror_the_language() {
        let arabic = LanguageContext {
            language: Language::Arabic,
            switch: Callback::noop(),
        };
        assert_eq!(arabic.direction(), Direction::Rtl);
        assert!(arabic.is_rtl());
        assert_eq!(arabic.translations().nav.customer, "تطبيق العملاء");

        let english = LanguageContext {
            language: Language::English,
            switch: Callback::noop(),
        };
        assert_eq!(english.direction(), Direction::Ltr);
        assert!(!english.is_rtl());
        assert_eq!(english.translations().nav.driver, "Become a Driver");
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
