use yew::prelude::*;

use crate::components::icons::IconGlyph;
use crate::content::JOIN_OPTIONS;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum JoinOptionsVariant {
    /// Floating panel under the desktop join button.
    Dropdown,
    /// Stacked list inside the mobile menu.
    Inline,
}

#[derive(Properties, PartialEq)]
pub struct JoinOptionsProps {
    pub variant: JoinOptionsVariant,
}

#[function_component(JoinOptions)]
pub fn join_options(props: &JoinOptionsProps) -> Html {
    let container_class = match props.variant {
        JoinOptionsVariant::Dropdown => "join-options dropdown",
        JoinOptionsVariant::Inline => "join-options inline",
    };

    html! {
        <div class={container_class}>
            { for JOIN_OPTIONS.iter().map(|option| html! {
                <a key={option.link} href={option.link} class="join-option">
                    <div class={classes!("join-option-icon", format!("tone-{}", option.tone))}>
                        <IconGlyph icon={option.icon} />
                    </div>
                    <div class="join-option-text">
                        <div class="join-option-title">{option.title}</div>
                        <div class="join-option-description">{option.description}</div>
                    </div>
                </a>
            }) }
        </div>
    }
}
