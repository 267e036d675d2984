//! Privacy Policy Page

use leptos::prelude::*;

use crate::components::{SiteFooter, SiteNav};
use crate::i18n::{text, Locale, Text};

#[component]
pub fn PrivacyPage() -> impl IntoView {
    let locale = RwSignal::new(Locale::En);

    view! {
        <div class="legal-page">
            <SiteNav locale=locale />

            <article class="legal-content">
                <h1>{move || text(locale.get(), Text::PrivacyTitle)}</h1>
                <p class="updated">"Last updated: July 2026"</p>

                <section>
                    <h2>"What we collect"</h2>
                    <p>"When you buy a plan, our payment provider (Stripe) collects \
                        your payment details and email address. We never see your \
                        card number. If you arrived through a partner link, a \
                        referral tag is attached to your purchase for attribution."</p>
                </section>

                <section>
                    <h2>"Menu files"</h2>
                    <p>"Files uploaded to the demo on our landing page are parsed \
                        entirely in your browser and are never transmitted to our \
                        servers. Menus submitted as part of a purchased analysis are \
                        retained only for the duration of the engagement."</p>
                </section>

                <section>
                    <h2>"Analytics"</h2>
                    <p>"We use privacy-preserving, cookie-free analytics to count \
                        page views and checkout starts. No personal profile is \
                        built and no data is sold."</p>
                </section>

                <section>
                    <h2>"Contact"</h2>
                    <p>"Privacy questions: "
                        <a href="mailto:privacy@caloriecalc.app">"privacy@caloriecalc.app"</a>
                    "."</p>
                </section>
            </article>

            <SiteFooter locale=locale />
        </div>
    }
}
