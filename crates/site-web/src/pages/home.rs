//! Landing Page

use leptos::prelude::*;

use crate::api;
use crate::components::{CsvDemo, SiteFooter, SiteNav};
use crate::i18n::{text, Locale, Text};
use crate::referral::ref_cookie;

// Client-visible price identifiers, baked in at build time. The UI only
// forwards them; billing semantics are resolved server-side.
const PRICE_BASIC: Option<&str> = option_env!("STRIPE_PRICE_BASIC");
const PRICE_MULTI: Option<&str> = option_env!("STRIPE_PRICE_MULTI");
const PRICE_SUB: Option<&str> = option_env!("STRIPE_PRICE_SUB");

#[component]
pub fn HomePage() -> impl IntoView {
    let locale = RwSignal::new(Locale::En);

    let buy = move |price_id: Option<&'static str>| {
        let price_id = price_id.unwrap_or_default().to_string();
        leptos::task::spawn_local(async move {
            api::checkout(&price_id, ref_cookie()).await;
        });
    };

    view! {
        <div class="home">
            <SiteNav locale=locale />

            <header class="hero" id="top">
                <h1>{move || text(locale.get(), Text::HeroHeadline)}</h1>
                <p class="tagline">{move || text(locale.get(), Text::HeroSub)}</p>
                <div class="cta">
                    <a href="#pricing" class="btn btn-primary">
                        {move || text(locale.get(), Text::HeroGetStarted)}
                    </a>
                    <a href="#how-it-works" class="btn">
                        {move || text(locale.get(), Text::NavHowItWorks)}
                    </a>
                </div>
            </header>

            <section class="features" id="features">
                <h2>{move || text(locale.get(), Text::FeaturesTitle)}</h2>
                <div class="feature-grid">
                    <div class="feature">
                        <h3>"No lab work"</h3>
                        <p>"Estimated calorie counts from your existing menu data. \
                            No food sent anywhere, no waiting weeks for results."</p>
                    </div>
                    <div class="feature">
                        <h3>"Menu-native"</h3>
                        <p>"Counts appear directly on your menus, in print and online, \
                            styled to match what you already have."</p>
                    </div>
                    <div class="feature">
                        <h3>"Regulation-ready"</h3>
                        <p>"Stay ahead of calorie-labelling requirements without \
                            hiring a consultant."</p>
                    </div>
                </div>
            </section>

            <section class="how-it-works" id="how-it-works">
                <h2>{move || text(locale.get(), Text::NavHowItWorks)}</h2>
                <ol class="steps">
                    <li>"Export your menu as a CSV — name, ingredients, portion size."</li>
                    <li>"Upload it below and review the preview."</li>
                    <li>"Receive your calorie-annotated menu, ready to publish."</li>
                </ol>
            </section>

            <section class="demo" id="demo">
                <CsvDemo locale=locale />
            </section>

            <section class="pricing" id="pricing">
                <h2>{move || text(locale.get(), Text::PricingTitle)}</h2>
                <p class="subtitle">{move || text(locale.get(), Text::PricingSub)}</p>

                <div class="plans">
                    <div class="plan">
                        <h3>"Basic"</h3>
                        <div class="price">"$99"<span>" one-time"</span></div>
                        <ul>
                            <li>"One menu, one location"</li>
                            <li>"Calorie overlay delivered in 48h"</li>
                        </ul>
                        <button class="btn" on:click=move |_| buy(PRICE_BASIC)>
                            {move || text(locale.get(), Text::PlanBuy)}
                        </button>
                    </div>

                    <div class="plan featured">
                        <span class="badge">"Popular"</span>
                        <h3>"Multi-Location"</h3>
                        <div class="price">"$249"<span>" one-time"</span></div>
                        <ul>
                            <li>"Up to five locations"</li>
                            <li>"Shared dish library"</li>
                            <li>"Priority turnaround"</li>
                        </ul>
                        <button class="btn btn-primary" on:click=move |_| buy(PRICE_MULTI)>
                            {move || text(locale.get(), Text::PlanBuy)}
                        </button>
                    </div>

                    <div class="plan">
                        <h3>"Pro"</h3>
                        <div class="price">"$29"<span>"/month"</span></div>
                        <ul>
                            <li>"Unlimited menu updates"</li>
                            <li>"Seasonal re-analysis"</li>
                            <li>"Email support"</li>
                        </ul>
                        <button class="btn" on:click=move |_| buy(PRICE_SUB)>
                            {move || text(locale.get(), Text::PlanSubscribe)}
                        </button>
                    </div>
                </div>
            </section>

            <section class="faq" id="faq">
                <h2>{move || text(locale.get(), Text::NavFaq)}</h2>
                <details>
                    <summary>"How accurate are the calorie counts?"</summary>
                    <p>"Counts are estimates based on ingredients and portion sizes, \
                        suitable for menu labelling. They are not a substitute for \
                        laboratory analysis where one is legally required."</p>
                </details>
                <details>
                    <summary>"What format does my menu need to be in?"</summary>
                    <p>"A plain CSV export: one row per dish. Try the demo above with \
                        your own file."</p>
                </details>
                <details>
                    <summary>"Can I cancel the Pro plan anytime?"</summary>
                    <p>"Yes. Subscriptions are handled by Stripe and can be cancelled \
                        from your receipt email at any time."</p>
                </details>
            </section>

            <section class="contact" id="contact">
                <h2>{move || text(locale.get(), Text::NavContact)}</h2>
                <p>
                    "Questions before you buy? Write to "
                    <a href="mailto:hello@caloriecalc.app">"hello@caloriecalc.app"</a>
                    "."
                </p>
            </section>

            <SiteFooter locale=locale />
        </div>
    }
}
