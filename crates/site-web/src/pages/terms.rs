//! Terms of Service Page

use leptos::prelude::*;

use crate::components::{SiteFooter, SiteNav};
use crate::i18n::{text, Locale, Text};

#[component]
pub fn TermsPage() -> impl IntoView {
    let locale = RwSignal::new(Locale::En);

    view! {
        <div class="legal-page">
            <SiteNav locale=locale />

            <article class="legal-content">
                <h1>{move || text(locale.get(), Text::TermsTitle)}</h1>
                <p class="updated">"Last updated: July 2026"</p>

                <section>
                    <h2>"The service"</h2>
                    <p>"CalorieCalc provides estimated calorie annotations for \
                        restaurant menus. Estimates are derived from the ingredient \
                        and portion data you supply; accuracy depends on that data."</p>
                </section>

                <section>
                    <h2>"Payment"</h2>
                    <p>"Purchases are processed by Stripe under its own terms. \
                        One-time plans are billed once; the Pro plan renews monthly \
                        until cancelled. Prices shown at checkout are final."</p>
                </section>

                <section>
                    <h2>"Liability"</h2>
                    <p>"Calorie estimates are provided for informational and menu- \
                        labelling purposes. Where a jurisdiction requires certified \
                        laboratory analysis, our estimates do not replace it, and we \
                        accept no liability for regulatory findings based on them."</p>
                </section>

                <section>
                    <h2>"Contact"</h2>
                    <p>"Questions about these terms: "
                        <a href="mailto:legal@caloriecalc.app">"legal@caloriecalc.app"</a>
                    "."</p>
                </section>
            </article>

            <SiteFooter locale=locale />
        </div>
    }
}
