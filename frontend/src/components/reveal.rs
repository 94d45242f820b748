use yew::prelude::*;

use crate::config::SECTION_VISIBILITY_THRESHOLD;
use crate::hooks::use_viewport_entry;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(SECTION_VISIBILITY_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children up the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_viewport_entry(node.clone(), props.threshold);

    html! {
        <div ref={node} class={classes!("reveal", revealed.then(|| "revealed"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
