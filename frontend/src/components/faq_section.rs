use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::components::reveal::Reveal;
use crate::content::{FaqEntry, FAQ_ENTRIES};
use crate::state::accordion::AccordionState;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    let panel_id = format!("faq-panel-{}", props.index);

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button
                class="faq-question"
                aria-expanded={props.is_open.to_string()}
                aria-controls={panel_id.clone()}
                onclick={toggle}
            >
                <span class="question-text">{props.entry.question}</span>
                <IconGlyph icon={Icon::ChevronDown} class={classes!("chevron", props.is_open.then(|| "rotated"))} />
            </button>
            {
                if props.is_open {
                    html! {
                        <div id={panel_id} class="faq-answer">
                            <p>{props.entry.answer}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let accordion = use_state(AccordionState::default);

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |index: usize| {
            let mut next = *accordion;
            next.toggle(index);
            accordion.set(next);
        })
    };

    html! {
        <section class="faq-section" id="faq">
            <div class="section-container">
                <Reveal class={classes!("section-heading")}>
                    <h2>{"Frequently Asked Questions"}</h2>
                    <p>{"Find answers to common questions about our community and services."}</p>
                </Reveal>
                <Reveal class={classes!("faq-list")}>
                    { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| html! {
                        <FaqItem
                            key={index}
                            index={index}
                            entry={*entry}
                            is_open={accordion.is_open(index)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </Reveal>
            </div>
            <style>
                {r#"
                .faq-section {
                    padding: 6rem 0;
                    background: linear-gradient(to bottom, #ffffff, #f9fafb);
                }

                .faq-list {
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                }

                .faq-question {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    width: 100%;
                    padding: 1rem 0;
                    border: none;
                    background: none;
                    text-align: left;
                    cursor: pointer;
                }

                .question-text {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #1f2937;
                }

                .faq-question:hover .question-text {
                    text-decoration: underline;
                }

                .faq-answer {
                    padding-bottom: 1rem;
                    color: #4b5563;
                    animation: faq-open 0.2s ease-out;
                }

                @keyframes faq-open {
                    from { opacity: 0; transform: translateY(-4px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </section>
    }
}
