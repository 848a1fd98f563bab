use std::rc::Rc;

use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::fade_in::FadeIn;
use crate::components::section_header::SectionHeader;
use crate::content::SiteContent;

/// Accordion rule: clicking the open item closes it, anything else opens
/// that item alone.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
    is_open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{"⌄"}</span>
            </button>
            <div class="faq-answer">
                <p>{ &props.answer }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let faq = &props.content.faq;
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <div class="faq-container">
                <SectionHeader title={faq.title.clone()} subtitle={faq.subtitle.clone()} />

                <FadeIn class={classes!("faq-list")}>
                    { for faq.items.iter().enumerate().map(|(idx, item)| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                open.set(toggle(*open, idx));
                            })
                        };
                        html! {
                            <FaqItem
                                key={idx}
                                question={item.question.clone()}
                                answer={item.answer.clone()}
                                is_open={*open == Some(idx)}
                                on_toggle={on_toggle}
                            />
                        }
                    }) }
                </FadeIn>
            </div>
            <style>
                {r#"
                .faq-section {
                    background: #0f172a;
                }
                .faq-container {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .faq-list {
                    background: #020617;
                    border: 1px solid #1e293b;
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .faq-item {
                    border-bottom: 1px solid #1e293b;
                }
                .faq-item:last-child {
                    border-bottom: none;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                }
                .question-text {
                    font-size: 1.25rem;
                    color: #fff;
                    padding-right: 1rem;
                }
                .faq-question:hover .question-text {
                    color: #22d3ee;
                }
                .toggle-icon {
                    color: #22d3ee;
                    font-size: 1.5rem;
                    transition: transform 0.3s ease;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.5s ease-in-out;
                }
                .faq-item.open .faq-answer {
                    max-height: 24rem;
                    opacity: 1;
                    padding: 1rem 0;
                }
                .faq-answer p {
                    color: #94a3b8;
                    line-height: 1.7;
                    padding: 0 0 1rem 0.5rem;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_an_item_closes_the_others() {
        assert_eq!(toggle(None, 2), Some(2));
        assert_eq!(toggle(Some(2), 0), Some(0));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        assert_eq!(toggle(Some(1), 1), None);
        assert_eq!(toggle(toggle(None, 3), 3), None);
    }
}
