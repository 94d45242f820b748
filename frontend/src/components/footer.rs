use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::components::newsletter::{NewsletterForm, NewsletterVariant};
use crate::config::FOOTER_VISIBILITY_THRESHOLD;
use crate::content::{
    BRAND_NAME, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE_DISPLAY, CONTACT_PHONE_HREF,
    LEGAL_LINKS, QUICK_LINKS, SOCIAL_LINKS,
};
use crate::hooks::{scroll_to_top, use_scroll_state, use_viewport_entry};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub on_subscribed: Callback<String>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let footer_ref = use_node_ref();
    let entered = use_viewport_entry(footer_ref.clone(), FOOTER_VISIBILITY_THRESHOLD);
    let scroll = use_scroll_state();
    let year = chrono::Utc::now().year();

    let back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer ref={footer_ref} class="site-footer">
            <div class="footer-inner">
                <div class={classes!("footer-grid", entered.then(|| "entered"))}>
                    <div class="footer-column">
                        <h3 class="footer-heading">{"Quick Links"}</h3>
                        <ul class="footer-list">
                            { for QUICK_LINKS.iter().map(|link| html! {
                                <li key={link.href}>
                                    <a href={link.href} class="footer-link">
                                        <IconGlyph icon={Icon::ArrowRight} />
                                        {link.label}
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h3 class="footer-heading">{"Connect With Us"}</h3>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a
                                    key={social.label}
                                    href={social.href}
                                    aria-label={social.label}
                                    class={classes!("social-link", format!("social-{}", social.label.to_lowercase()))}
                                >
                                    <IconGlyph icon={social.icon} />
                                </a>
                            }) }
                        </div>
                    </div>

                    <div class="footer-column">
                        <h3 class="footer-heading">{"Stay Updated"}</h3>
                        <NewsletterForm variant={NewsletterVariant::Footer} on_subscribed={props.on_subscribed.clone()} />
                    </div>

                    <div class="footer-column">
                        <h3 class="footer-heading">{"Contact Us"}</h3>
                        <ul class="footer-list">
                            <li class="contact-line">
                                <IconGlyph icon={Icon::Mail} />
                                <a href={format!("mailto:{}", CONTACT_EMAIL)} class="footer-link">{CONTACT_EMAIL}</a>
                            </li>
                            <li class="contact-line">
                                <IconGlyph icon={Icon::Phone} />
                                <a href={CONTACT_PHONE_HREF} class="footer-link">{CONTACT_PHONE_DISPLAY}</a>
                            </li>
                            <li class="contact-line">
                                <IconGlyph icon={Icon::MapPin} />
                                <span>{CONTACT_ADDRESS}</span>
                            </li>
                        </ul>
                    </div>
                </div>

                <hr class="footer-separator" />

                <div class="footer-bottom">
                    <div class="legal-links">
                        { for LEGAL_LINKS.iter().map(|link| html! {
                            <a key={link.href} href={link.href} class="footer-link small">{link.label}</a>
                        }) }
                    </div>
                    <div class="footer-cta">
                        <p>{"Join our community today!"}</p>
                        <a href="/join/student" class="footer-cta-button">
                            {"Get Started"}
                            <IconGlyph icon={Icon::ArrowRight} />
                        </a>
                    </div>
                </div>

                <p class="copyright">{format!("© {} {}. All rights reserved.", year, BRAND_NAME)}</p>
            </div>

            {
                if scroll.show_back_to_top() {
                    html! {
                        <button class="back-to-top" aria-label="Back to top" onclick={back_to_top}>
                            <IconGlyph icon={Icon::ChevronUp} />
                        </button>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    overflow: hidden;
                    padding: 4rem 1rem;
                    color: #ffffff;
                    background: linear-gradient(135deg, #111827, #1f2937, #111827);
                }

                .footer-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    margin-bottom: 3rem;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .footer-grid.entered {
                    opacity: 1;
                    transform: translateY(0);
                }

                .footer-heading {
                    margin-bottom: 1.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    background: linear-gradient(to right, #60a5fa, #c084fc);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .footer-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: grid;
                    gap: 0.75rem;
                }

                .footer-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease, transform 0.2s ease;
                }

                .footer-link:hover {
                    color: #60a5fa;
                    transform: translateX(5px);
                }

                .footer-link.small {
                    font-size: 0.875rem;
                }

                .contact-line {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .social-links {
                    display: flex;
                    gap: 1rem;
                }

                .social-link {
                    color: inherit;
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-decoration: none;
                    transition: color 0.2s ease, transform 0.2s ease;
                }

                .social-link:hover { transform: scale(1.2); }
                .social-facebook:hover { color: #3b82f6; }
                .social-linkedin:hover { color: #1d4ed8; }
                .social-twitter:hover { color: #60a5fa; }
                .social-instagram:hover { color: #ec4899; }

                .newsletter-form.footer {
                    display: grid;
                    gap: 1rem;
                }

                .newsletter-form.footer .newsletter-input {
                    background: #1f2937;
                    border: 1px solid #374151;
                    color: #ffffff;
                    border-radius: 9999px;
                }

                .newsletter-form.footer .newsletter-submit {
                    width: 100%;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #3b82f6, #a855f7);
                    color: #ffffff;
                }

                .footer-separator {
                    margin: 2rem 0;
                    border: none;
                    border-top: 1px solid #374151;
                }

                .footer-bottom {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }

                .legal-links {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }

                .footer-cta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .footer-cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #3b82f6, #a855f7);
                    color: #ffffff;
                    text-decoration: none;
                }

                .copyright {
                    margin-top: 2rem;
                    text-align: center;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .back-to-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    padding: 0.5rem 0.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: #3b82f6;
                    color: #ffffff;
                    font-size: 1.25rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                    cursor: pointer;
                    animation: back-to-top-in 0.2s ease;
                }

                .back-to-top:hover {
                    background: #2563eb;
                }

                @keyframes back-to-top-in {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @media (min-width: 768px) {
                    .footer-grid { grid-template-columns: repeat(2, 1fr); }
                    .footer-bottom { flex-direction: row; }
                }

                @media (min-width: 1024px) {
                    .footer-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </footer>
    }
}
