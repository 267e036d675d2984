//! UI Translations
//!
//! Locale is transient per-page UI state: it lives in a signal and resets
//! on reload. Keys without a translation fall back to English.

/// Display language
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    En,
    De,
    Fr,
    Es,
    It,
    Nl,
}

impl Locale {
    pub const ALL: [Locale; 6] = [
        Locale::En,
        Locale::De,
        Locale::Fr,
        Locale::Es,
        Locale::It,
        Locale::Nl,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::Es => "es",
            Locale::It => "it",
            Locale::Nl => "nl",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Locale::ALL.into_iter().find(|l| l.code() == code)
    }
}

/// Translatable UI strings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    NavFeatures,
    NavPricing,
    NavHowItWorks,
    NavFaq,
    NavContact,
    HeroHeadline,
    HeroSub,
    HeroGetStarted,
    FeaturesTitle,
    DemoTitle,
    DemoDropHint,
    DemoBrowseHint,
    DemoBrowseButton,
    DemoInvalidFile,
    DemoAnalyzing,
    DemoComplete,
    DemoReadyTitle,
    DemoReadyBody,
    PricingTitle,
    PricingSub,
    PlanBuy,
    PlanSubscribe,
    FooterPrivacy,
    FooterTerms,
    PrivacyTitle,
    TermsTitle,
}

/// Resolve a string for a locale, falling back to English
pub fn text(locale: Locale, key: Text) -> &'static str {
    let localized = match locale {
        Locale::En => Some(english(key)),
        Locale::De => german(key),
        Locale::Fr => french(key),
        Locale::Es => spanish(key),
        Locale::It => italian(key),
        Locale::Nl => dutch(key),
    };

    localized.unwrap_or_else(|| english(key))
}

fn english(key: Text) -> &'static str {
    match key {
        Text::NavFeatures => "Features",
        Text::NavPricing => "Pricing",
        Text::NavHowItWorks => "How It Works",
        Text::NavFaq => "FAQ",
        Text::NavContact => "Contact Us",
        Text::HeroHeadline => "Calorie counts on every menu, without the lab work",
        Text::HeroSub => {
            "Upload your menu and CalorieCalc overlays estimated calorie counts \
             your customers can actually see."
        }
        Text::HeroGetStarted => "Get Started",
        Text::FeaturesTitle => "Why CalorieCalc",
        Text::DemoTitle => "Interactive Menu Analysis Demo",
        Text::DemoDropHint => "Drag & Drop Your Menu CSV Here",
        Text::DemoBrowseHint => "or click to select file",
        Text::DemoBrowseButton => "Browse Files",
        Text::DemoInvalidFile => "Please upload a valid .csv file.",
        Text::DemoAnalyzing => "Analyzing...",
        Text::DemoComplete => "Analysis Complete!",
        Text::DemoReadyTitle => "Your menu is ready!",
        Text::DemoReadyBody => {
            "You can now see the estimated calorie counts. This is what your \
             customers will see."
        }
        Text::PricingTitle => "Pricing",
        Text::PricingSub => "Simple plans for every restaurant",
        Text::PlanBuy => "Buy Now",
        Text::PlanSubscribe => "Subscribe",
        Text::FooterPrivacy => "Privacy Policy",
        Text::FooterTerms => "Terms of Service",
        Text::PrivacyTitle => "Privacy Policy",
        Text::TermsTitle => "Terms of Service",
    }
}

fn german(key: Text) -> Option<&'static str> {
    let s = match key {
        Text::NavFeatures => "Funktionen",
        Text::NavPricing => "Preise",
        Text::NavHowItWorks => "So funktioniert's",
        Text::NavFaq => "FAQ",
        Text::NavContact => "Kontakt",
        Text::HeroHeadline => "Kalorienangaben auf jeder Speisekarte, ohne Laboranalyse",
        Text::HeroGetStarted => "Jetzt starten",
        Text::DemoTitle => "Interaktive Menü-Analyse",
        Text::DemoDropHint => "Menü-CSV hierher ziehen",
        Text::DemoBrowseHint => "oder klicken, um eine Datei zu wählen",
        Text::DemoBrowseButton => "Datei auswählen",
        Text::DemoInvalidFile => "Bitte eine gültige .csv-Datei hochladen.",
        Text::DemoAnalyzing => "Analysiere...",
        Text::DemoComplete => "Analyse abgeschlossen!",
        Text::PricingTitle => "Preise",
        Text::PlanBuy => "Jetzt kaufen",
        Text::PlanSubscribe => "Abonnieren",
        Text::FooterPrivacy => "Datenschutz",
        Text::FooterTerms => "AGB",
        _ => return None,
    };
    Some(s)
}

fn french(key: Text) -> Option<&'static str> {
    let s = match key {
        Text::NavFeatures => "Fonctionnalités",
        Text::NavPricing => "Tarifs",
        Text::NavHowItWorks => "Comment ça marche",
        Text::NavFaq => "FAQ",
        Text::NavContact => "Contact",
        Text::HeroHeadline => "Les calories sur chaque menu, sans analyse en laboratoire",
        Text::HeroGetStarted => "Commencer",
        Text::DemoTitle => "Démo interactive d'analyse de menu",
        Text::DemoDropHint => "Glissez votre menu CSV ici",
        Text::DemoBrowseHint => "ou cliquez pour choisir un fichier",
        Text::DemoBrowseButton => "Parcourir",
        Text::DemoInvalidFile => "Veuillez téléverser un fichier .csv valide.",
        Text::DemoAnalyzing => "Analyse en cours...",
        Text::DemoComplete => "Analyse terminée !",
        Text::PricingTitle => "Tarifs",
        Text::PlanBuy => "Acheter",
        Text::PlanSubscribe => "S'abonner",
        Text::FooterPrivacy => "Confidentialité",
        Text::FooterTerms => "Conditions",
        _ => return None,
    };
    Some(s)
}

fn spanish(key: Text) -> Option<&'static str> {
    let s = match key {
        Text::NavFeatures => "Funciones",
        Text::NavPricing => "Precios",
        Text::NavHowItWorks => "Cómo funciona",
        Text::NavFaq => "FAQ",
        Text::NavContact => "Contacto",
        Text::HeroHeadline => "Calorías en cada menú, sin trabajo de laboratorio",
        Text::HeroGetStarted => "Empezar",
        Text::DemoTitle => "Demo interactiva de análisis de menú",
        Text::DemoDropHint => "Arrastra aquí el CSV de tu menú",
        Text::DemoBrowseHint => "o haz clic para elegir un archivo",
        Text::DemoBrowseButton => "Buscar archivos",
        Text::DemoInvalidFile => "Sube un archivo .csv válido.",
        Text::DemoAnalyzing => "Analizando...",
        Text::DemoComplete => "¡Análisis completado!",
        Text::PricingTitle => "Precios",
        Text::PlanBuy => "Comprar",
        Text::PlanSubscribe => "Suscribirse",
        Text::FooterPrivacy => "Privacidad",
        Text::FooterTerms => "Términos",
        _ => return None,
    };
    Some(s)
}

fn italian(key: Text) -> Option<&'static str> {
    let s = match key {
        Text::NavFeatures => "Funzionalità",
        Text::NavPricing => "Prezzi",
        Text::NavHowItWorks => "Come funziona",
        Text::NavFaq => "FAQ",
        Text::NavContact => "Contatti",
        Text::HeroGetStarted => "Inizia ora",
        Text::DemoDropHint => "Trascina qui il CSV del tuo menù",
        Text::DemoBrowseButton => "Sfoglia",
        Text::DemoInvalidFile => "Carica un file .csv valido.",
        Text::DemoAnalyzing => "Analisi in corso...",
        Text::DemoComplete => "Analisi completata!",
        Text::PricingTitle => "Prezzi",
        Text::PlanBuy => "Acquista",
        Text::PlanSubscribe => "Abbonati",
        Text::FooterPrivacy => "Privacy",
        Text::FooterTerms => "Termini",
        _ => return None,
    };
    Some(s)
}

fn dutch(key: Text) -> Option<&'static str> {
    let s = match key {
        Text::NavFeatures => "Functies",
        Text::NavPricing => "Prijzen",
        Text::NavHowItWorks => "Hoe het werkt",
        Text::NavFaq => "FAQ",
        Text::NavContact => "Contact",
        Text::HeroGetStarted => "Aan de slag",
        Text::DemoDropHint => "Sleep je menu-CSV hierheen",
        Text::DemoBrowseButton => "Bladeren",
        Text::DemoInvalidFile => "Upload een geldig .csv-bestand.",
        Text::DemoAnalyzing => "Bezig met analyseren...",
        Text::DemoComplete => "Analyse voltooid!",
        Text::PricingTitle => "Prijzen",
        Text::PlanBuy => "Koop nu",
        Text::PlanSubscribe => "Abonneren",
        Text::FooterPrivacy => "Privacy",
        Text::FooterTerms => "Voorwaarden",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("pt"), None);
    }

    #[test]
    fn untranslated_keys_fall_back_to_english() {
        // Dutch has no hero headline; English text must come through.
        assert_eq!(
            text(Locale::Nl, Text::HeroHeadline),
            text(Locale::En, Text::HeroHeadline)
        );
    }

    #[test]
    fn translated_keys_are_localized() {
        assert_eq!(text(Locale::De, Text::NavPricing), "Preise");
        assert_eq!(text(Locale::Fr, Text::PlanSubscribe), "S'abonner");
    }
}
