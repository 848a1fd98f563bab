use yew::prelude::*;

use crate::animation::visibility::TriggerOptions;
use crate::components::viewport::use_on_screen;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Slides its children up into place the first time they scroll into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let (node, visible) = use_on_screen(TriggerOptions::new(config::FADE_IN_MARGIN_PX, true));

    html! {
        <div
            ref={node}
            class={classes!("fade-in", visible.then_some("shown"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
