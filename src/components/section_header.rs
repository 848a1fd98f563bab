use yew::prelude::*;

use crate::components::fade_in::FadeIn;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or(true)]
    pub centered: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <FadeIn class={classes!("section-header", props.centered.then_some("centered"))}>
            <h2>{ props.title.clone() }</h2>
            <div class="section-rule"></div>
            <p>{ props.subtitle.clone() }</p>
        </FadeIn>
    }
}
