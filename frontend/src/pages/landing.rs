use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::faq_section::FaqSection;
use crate::components::footer::Footer;
use crate::components::icons::{Icon, IconGlyph};
use crate::components::newsletter::{NewsletterForm, NewsletterVariant};
use crate::components::reveal::Reveal;
use crate::components::toast::Toast;
use crate::config::HERO_IMAGE_URL;
use crate::content::{Benefit, FeatureGroup, BENEFITS, FEATURE_GROUPS};
use crate::state::feature_tabs::FeatureTabs;

#[derive(Clone, PartialEq)]
struct Notice {
    id: u32,
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_title("IntendCareer | Empower Your Business Education Journey".to_string());

    let notice = use_state(|| None::<Notice>);

    let on_subscribed = {
        let notice = notice.clone();
        Callback::from(move |_email: String| {
            let id = (*notice).as_ref().map_or(0, |n| n.id + 1);
            debug!("showing subscription toast #{}", id);
            notice.set(Some(Notice { id }));
        })
    };

    let dismiss = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <div class="landing-page">
            <main class="landing-main">
                <Hero />
                <ValueProposition />
                <Benefits />
                <KeyFeatures />
                <CallToAction on_subscribed={on_subscribed.clone()} />
                <FaqSection />
            </main>
            <Footer on_subscribed={on_subscribed} />
            {
                if let Some(current) = (*notice).as_ref() {
                    html! {
                        <Toast
                            key={current.id}
                            title="Subscribed!"
                            description="You've successfully subscribed to our newsletter."
                            on_dismiss={dismiss}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <style>{LANDING_STYLE}</style>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-inner">
                <div class="hero-copy">
                    <h2 class="hero-eyebrow">{"Empower Your Business Education Journey"}</h2>
                    <h1 class="hero-title">{"Join a Thriving Community of Future Business Leaders"}</h1>
                    <p class="hero-subtitle">
                        {"Access essential resources, develop crucial skills, and connect with industry leaders, all in one community."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="/join/student" class="primary-cta">{"Join Now for Free"}</a>
                    </div>
                </div>
                <div class="hero-image">
                    <img src={HERO_IMAGE_URL} alt="Successful business professional giving thumbs up" />
                </div>
            </div>
            <svg class="hero-wave" viewBox="0 0 1440 120" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path
                    d="M0 0L60 10C120 20 240 40 360 46.7C480 53 600 47 720 36.7C840 27 960 13 1080 16.7C1200 20 1320 40 1380 50L1440 60V120H1380C1320 120 1200 120 1080 120C960 120 840 120 720 120C600 120 480 120 360 120C240 120 120 120 60 120H0V0Z"
                    fill="currentColor"
                />
            </svg>
        </section>
    }
}

#[function_component(ValueProposition)]
fn value_proposition() -> Html {
    html! {
        <section class="value-proposition">
            <Reveal class={classes!("value-copy")}>
                <p>
                    {"Whether you're seeking the latest business insights, skill-building workshops, or professional networking opportunities, our community is dedicated to supporting your educational journey."}
                </p>
            </Reveal>
        </section>
    }
}

#[function_component(Benefits)]
fn benefits() -> Html {
    html! {
        <section class="benefits-section">
            <div class="section-container">
                <Reveal class={classes!("section-heading")}>
                    <h2>{"Why Choose Our Community?"}</h2>
                    <p>{"Join a thriving ecosystem designed to propel your business education and career to new heights."}</p>
                </Reveal>
                <div class="benefit-grid">
                    { for BENEFITS.iter().map(benefit_card) }
                </div>
                <Reveal class={classes!("centered")}>
                    <a href="/join/student" class="gradient-cta">{"Join Our Community Today"}</a>
                </Reveal>
            </div>
        </section>
    }
}

fn benefit_card(benefit: &'static Benefit) -> Html {
    html! {
        <Reveal key={benefit.title}>
            <div class="benefit-card">
                <div class={classes!("benefit-accent", benefit.gradient)}></div>
                <div class="benefit-body">
                    <div class="benefit-header">
                        <div class={classes!("benefit-icon", benefit.gradient)}>
                            <IconGlyph icon={benefit.icon} />
                        </div>
                        <h3>{benefit.title}</h3>
                    </div>
                    <p class="benefit-description">{benefit.description}</p>
                    <ul class="benefit-features">
                        { for benefit.features.iter().map(|feature| html! {
                            <li key={*feature}>
                                <IconGlyph icon={Icon::ArrowRight} class={classes!("bullet")} />
                                {*feature}
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(KeyFeatures)]
fn key_features() -> Html {
    let tabs = use_state(FeatureTabs::default);

    let tab_buttons = FEATURE_GROUPS
        .iter()
        .map(|group| {
            let is_active = tabs.is_active(group.title);
            let onclick = {
                let tabs = tabs.clone();
                let title = group.title;
                Callback::from(move |_: MouseEvent| {
                    let mut next = *tabs;
                    next.select(title);
                    tabs.set(next);
                })
            };
            html! {
                <button
                    key={group.title}
                    class={classes!("feature-tab", is_active.then(|| "active"))}
                    aria-pressed={is_active.to_string()}
                    onclick={onclick}
                >
                    <IconGlyph icon={group.icon} class={classes!("feature-tab-icon")} />
                    <span>{group.title}</span>
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <section class="features-section">
            <div class="section-container">
                <Reveal class={classes!("section-heading")}>
                    <h2>{"Unlock Your Potential"}</h2>
                    <p>{"Discover the cutting-edge tools and resources that will catapult your business education and career to new heights."}</p>
                </Reveal>
                <div class="features-layout">
                    <div class="feature-tabs">
                        {tab_buttons}
                    </div>
                    {
                        match tabs.active_group() {
                            Some(group) => feature_panel(group),
                            None => html! {},
                        }
                    }
                </div>
            </div>
        </section>
    }
}

fn feature_panel(group: &'static FeatureGroup) -> Html {
    // Keyed on the title so switching tabs replays the entrance animation
    html! {
        <div key={group.title} class="feature-panel">
            { for group.features.iter().map(|feature| html! {
                <div key={feature.title} class="feature-card">
                    <div class="feature-card-icon">
                        <IconGlyph icon={feature.icon} />
                    </div>
                    <div>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CallToActionProps {
    on_subscribed: Callback<String>,
}

#[function_component(CallToAction)]
fn call_to_action(props: &CallToActionProps) -> Html {
    let is_hovered = use_state(|| false);

    let on_enter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let on_leave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    html! {
        <section class="cta-section">
            <div class="section-container">
                <Reveal class={classes!("cta-card")}>
                    <h2 class="cta-title">{"Ready to Take the Next Step?"}</h2>
                    <p class="cta-subtitle">{"Join Our Collaborative Business Education Community Today!"}</p>
                    <div class="cta-actions">
                        <a
                            href="/join/student"
                            class="gradient-cta"
                            onmouseenter={on_enter}
                            onmouseleave={on_leave}
                        >
                            <span>{"Join Now for Free!"}</span>
                            <IconGlyph icon={Icon::ArrowRight} class={classes!("cta-arrow", (*is_hovered).then(|| "nudged"))} />
                        </a>
                        <span class="cta-or">{"or"}</span>
                        <div class="cta-subscribe">
                            <h3>{"Subscribe for Updates"}</h3>
                            <p>{"Stay informed about upcoming workshops, events, and resources."}</p>
                            <NewsletterForm variant={NewsletterVariant::Cta} on_subscribed={props.on_subscribed.clone()} />
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

const LANDING_STYLE: &str = r#"
.landing-page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    background: #ffffff;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}

.landing-main {
    flex-grow: 1;
}

.section-container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
}

.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}

.section-heading h2 {
    font-size: 2.25rem;
    font-weight: 700;
    color: #111827;
    margin-bottom: 1rem;
}

.section-heading p {
    font-size: 1.25rem;
    color: #4b5563;
    max-width: 42rem;
    margin: 0 auto;
}

.centered {
    margin-top: 4rem;
    text-align: center;
}

.reveal {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.revealed {
    opacity: 1;
    transform: translateY(0);
}

.hero {
    position: relative;
    overflow: hidden;
    padding-top: 5rem;
    background: linear-gradient(135deg, #eff6ff, #e0e7ff);
}

.hero-inner {
    position: relative;
    z-index: 1;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
}

.hero-copy {
    width: 100%;
    text-align: center;
    margin-bottom: 2.5rem;
    animation: hero-in 0.6s ease both;
}

.hero-eyebrow {
    font-size: 1.125rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: #2581f3;
}

.hero-title {
    font-size: 2.25rem;
    font-weight: 700;
    line-height: 1.25;
    color: #111827;
}

.hero-subtitle {
    font-size: 1.25rem;
    color: #4b5563;
    max-width: 42rem;
    margin: 1.5rem auto;
}

.primary-cta {
    display: inline-block;
    padding: 1rem 2rem;
    border-radius: 9999px;
    background: #2581f3;
    color: #ffffff;
    font-size: 1.125rem;
    font-weight: 500;
    text-decoration: none;
    transition: transform 0.3s ease, background-color 0.3s ease, box-shadow 0.3s ease;
}

.primary-cta:hover {
    transform: scale(1.05);
    background: #0a274c;
    box-shadow: 0 10px 15px -3px rgba(37, 129, 243, 0.3);
}

.hero-image {
    width: 100%;
    height: 400px;
    animation: hero-image-in 0.6s ease 0.3s both;
}

.hero-image img {
    width: 100%;
    height: 100%;
    object-fit: contain;
    border-radius: 0.5rem;
}

.hero-wave {
    display: block;
    width: 100%;
    color: #ffffff;
}

@keyframes hero-in {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes hero-image-in {
    from { opacity: 0; transform: translateX(50px); }
    to { opacity: 1; transform: translateX(0); }
}

.value-proposition {
    padding: 4rem 1rem;
}

.value-copy {
    max-width: 48rem;
    margin: 0 auto;
    text-align: center;
    font-size: 1.125rem;
    line-height: 1.75;
    color: #374151;
}

.benefits-section,
.features-section {
    padding: 5rem 0;
    background: linear-gradient(to bottom, #f9fafb, #ffffff);
}

.benefit-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}

.benefit-card {
    height: 100%;
    overflow: hidden;
    border-radius: 0.75rem;
    background: linear-gradient(135deg, #ffffff, #f9fafb);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.benefit-card:hover {
    transform: translateY(-0.5rem);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.benefit-accent {
    height: 0.5rem;
}

.benefit-body {
    padding: 1.5rem;
}

.benefit-header {
    display: flex;
    align-items: center;
    margin-bottom: 1rem;
}

.benefit-header h3 {
    font-size: 1.25rem;
    font-weight: 600;
    color: #111827;
}

.benefit-icon {
    margin-right: 1rem;
    padding: 0.75rem;
    border-radius: 9999px;
    font-size: 1.5rem;
    transition: transform 0.3s ease;
}

.benefit-card:hover .benefit-icon {
    transform: scale(1.1);
}

.benefit-description {
    color: #4b5563;
    margin-bottom: 1rem;
}

.benefit-features {
    list-style: none;
    padding: 0;
    display: grid;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: #6b7280;
}

.bullet {
    margin-right: 0.5rem;
    color: #2581f3;
}

.gradient-blue { background: linear-gradient(to right, #60a5fa, #2563eb); }
.gradient-green { background: linear-gradient(to right, #4ade80, #16a34a); }
.gradient-purple { background: linear-gradient(to right, #c084fc, #9333ea); }
.gradient-orange { background: linear-gradient(to right, #fb923c, #ea580c); }
.gradient-pink { background: linear-gradient(to right, #f472b6, #db2777); }

.gradient-cta {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1.5rem;
    border-radius: 0.5rem;
    background: linear-gradient(to right, #2581f3, #1a4fa8);
    color: #ffffff;
    font-weight: 500;
    text-decoration: none;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.gradient-cta:hover {
    transform: scale(1.05);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.features-layout {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
    align-items: start;
}

.feature-tabs {
    display: grid;
    gap: 0.5rem;
}

.feature-tab {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    width: 100%;
    padding: 1rem;
    border: none;
    border-radius: 0.5rem;
    background: #ffffff;
    font-size: 1.125rem;
    font-weight: 600;
    text-align: left;
    cursor: pointer;
    transition: all 0.3s ease;
}

.feature-tab:hover {
    background: #f3f4f6;
}

.feature-tab.active {
    background: linear-gradient(to right, #60a5fa, #2563eb);
    color: #ffffff;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transform: scale(1.05);
}

.feature-panel {
    display: grid;
    gap: 1.5rem;
    animation: panel-in 0.3s ease;
}

.feature-card {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: #ffffff;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.feature-card:hover {
    transform: translateY(-0.25rem);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.feature-card-icon {
    flex-shrink: 0;
    padding: 0.75rem;
    border-radius: 9999px;
    background: linear-gradient(135deg, #f3f4f6, #e5e7eb);
}

.feature-card h3 {
    font-size: 1.25rem;
    font-weight: 600;
    margin-bottom: 0.5rem;
}

.feature-card p {
    color: #4b5563;
}

@keyframes panel-in {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

.cta-section {
    padding: 6rem 0;
    background: linear-gradient(135deg, #eff6ff, #eef2ff, #faf5ff);
}

.cta-card {
    max-width: 64rem;
    margin: 0 auto;
    padding: 3rem 2rem;
    text-align: center;
    border-radius: 1.5rem;
    background: rgba(255, 255, 255, 0.4);
    backdrop-filter: blur(24px);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.cta-title {
    font-size: 2.5rem;
    font-weight: 700;
    margin-bottom: 1rem;
    background: linear-gradient(to right, #2563eb, #9333ea);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.cta-subtitle {
    font-size: 1.5rem;
    color: #374151;
    margin-bottom: 2rem;
}

.cta-actions {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}

.cta-arrow {
    transition: transform 0.2s ease;
}

.cta-arrow.nudged {
    transform: translateX(5px);
}

.cta-or {
    color: #6b7280;
}

.cta-subscribe h3 {
    font-size: 1.125rem;
    font-weight: 600;
    color: #1f2937;
    margin-bottom: 0.5rem;
}

.cta-subscribe p {
    font-size: 0.875rem;
    color: #4b5563;
    margin-bottom: 1rem;
}

.newsletter-form {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.newsletter-field {
    position: relative;
    flex-grow: 1;
}

.newsletter-field-icon {
    position: absolute;
    left: 0.75rem;
    top: 50%;
    transform: translateY(-50%);
    color: #9ca3af;
}

.newsletter-input {
    width: 100%;
    padding: 0.5rem 1rem 0.5rem 2.5rem;
    border: 1px solid #d1d5db;
    border-radius: 0.375rem;
    box-sizing: border-box;
}

.newsletter-input:focus {
    outline: none;
    border-color: #3b82f6;
    box-shadow: 0 0 0 1px #3b82f6;
}

.newsletter-submit {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 0.375rem;
    background: #ffffff;
    cursor: pointer;
}

.newsletter-submit:hover .send-icon {
    transform: translateX(0.25rem);
}

.send-icon {
    transition: transform 0.2s ease;
}

@media (min-width: 640px) {
    .newsletter-form.cta {
        flex-direction: row;
    }
}

@media (min-width: 768px) {
    .benefit-grid { grid-template-columns: repeat(2, 1fr); }
    .feature-panel { grid-template-columns: repeat(2, 1fr); }
    .cta-actions { flex-direction: row; }
    .hero-title { font-size: 3rem; }
}

@media (min-width: 1024px) {
    .hero { padding-top: 0; }
    .hero-inner { flex-direction: row; min-height: 100vh; }
    .hero-copy { width: 50%; text-align: left; margin-bottom: 0; }
    .hero-subtitle { margin-left: 0; }
    .hero-image { width: 50%; height: 600px; }
    .hero-title { font-size: 3.75rem; }
    .benefit-grid { grid-template-columns: repeat(3, 1fr); }
    .features-layout { grid-template-columns: 1fr 2fr; }
    .feature-tabs { position: sticky; top: 6rem; }
}
"#;
