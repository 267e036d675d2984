//! Shared Site Chrome

use chrono::Datelike;
use leptos::prelude::*;

use crate::i18n::{text, Locale, Text};

/// Top navigation bar with the locale switcher
#[component]
pub fn SiteNav(locale: RwSignal<Locale>) -> impl IntoView {
    view! {
        <nav class="site-nav">
            <a href="/" class="brand">
                <span class="brand-dark">"Calorie"</span>
                <span class="brand-accent">"Calc"</span>
            </a>
            <div class="nav-links">
                <a href="/#features">{move || text(locale.get(), Text::NavFeatures)}</a>
                <a href="/#pricing">{move || text(locale.get(), Text::NavPricing)}</a>
                <a href="/#how-it-works">{move || text(locale.get(), Text::NavHowItWorks)}</a>
                <a href="/#faq">{move || text(locale.get(), Text::NavFaq)}</a>
                <a href="/#contact" class="btn btn-primary">
                    {move || text(locale.get(), Text::NavContact)}
                </a>
                <select
                    class="locale-picker"
                    on:change=move |ev| {
                        if let Some(picked) = Locale::from_code(&event_target_value(&ev)) {
                            locale.set(picked);
                        }
                    }
                >
                    {Locale::ALL
                        .into_iter()
                        .map(|l| view! {
                            <option value=l.code() selected=move || locale.get() == l>
                                {l.code().to_uppercase()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
        </nav>
    }
}

/// Footer with legal links
#[component]
pub fn SiteFooter(locale: RwSignal<Locale>) -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-links">
                <a href="/privacy">{move || text(locale.get(), Text::FooterPrivacy)}</a>
                <a href="/terms">{move || text(locale.get(), Text::FooterTerms)}</a>
            </div>
            <p class="copyright">{format!("© {year} CalorieCalc")}</p>
        </footer>
    }
}
