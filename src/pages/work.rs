use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::section_header::SectionHeader;
use crate::content::{PreviewKind, SiteContent, SitePreview};

#[derive(Properties, PartialEq)]
struct PreviewModalProps {
    preview: SitePreview,
    bullets: Vec<String>,
    on_close: Callback<MouseEvent>,
}

/// A mock browser window showing a client site.
#[function_component(PreviewModal)]
fn preview_modal(props: &PreviewModalProps) -> Html {
    let preview = &props.preview;

    html! {
        <div class="preview-backdrop">
            <div class="preview-window">
                <div class="preview-chrome">
                    <div class="window-dots">
                        <span class="dot red"></span>
                        <span class="dot yellow"></span>
                        <span class="dot green"></span>
                    </div>
                    <div class="address-bar">{ &preview.domain }</div>
                    <button class="preview-close" onclick={props.on_close.clone()}>{"✕"}</button>
                </div>
                <div class="preview-page">
                    <img src={preview.image.clone()} alt={preview.image_alt.clone()} />
                    <div class="preview-copy">
                        <h2>{ &preview.title }</h2>
                        <p>{ &preview.description }</p>
                        <ul>
                            { for props.bullets.iter().map(|b| html! { <li>{ b }</li> }) }
                        </ul>
                        <button class={classes!("preview-cta", format!("theme-{}", preview.theme))}>
                            {"Explore Services"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Work)]
pub fn work(props: &WorkProps) -> Html {
    let work = &props.content.work;
    let open_preview = use_state(|| None::<PreviewKind>);

    let close = {
        let open_preview = open_preview.clone();
        Callback::from(move |_: MouseEvent| open_preview.set(None))
    };

    let modal = (*open_preview)
        .and_then(|kind| work.preview(kind))
        .map(|preview| html! {
            <PreviewModal
                preview={preview.clone()}
                bullets={work.preview_bullets.clone()}
                on_close={close}
            />
        });

    html! {
        <section id="work" class="work">
            { for modal }
            <div class="container">
                <SectionHeader title={work.title.clone()} subtitle={work.subtitle.clone()} />

                <div class="case-grid">
                    { for work.cases.iter().enumerate().map(|(i, case)| {
                        let open = {
                            let open_preview = open_preview.clone();
                            let kind = case.preview;
                            Callback::from(move |_: MouseEvent| {
                                info!("Opening {:?} preview", kind);
                                open_preview.set(Some(kind));
                            })
                        };
                        let shot = work.preview(case.preview);
                        html! {
                            <FadeIn key={case.title.clone()} delay_ms={i as u32 * 150}>
                                <div class={classes!("case-card", format!("accent-{}", case.accent))}>
                                    <div class="case-shot" onclick={open}>
                                        if let Some(shot) = shot {
                                            <img src={shot.image.clone()} alt={shot.image_alt.clone()} />
                                        }
                                        <div class="case-shot-hover">
                                            <span class="view-demo">{"View Demo ↗"}</span>
                                        </div>
                                    </div>
                                    <div class="case-body">
                                        <h3>{ &case.title }</h3>
                                        <p>
                                            { &case.summary_before }
                                            <strong>{ &case.highlight }</strong>
                                            { &case.summary_after }
                                        </p>
                                        <div class="case-tags">{ &case.tags }</div>
                                    </div>
                                </div>
                            </FadeIn>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .work {
                    background: #0f172a;
                }
                .case-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 3rem;
                }
                .case-card {
                    background: #020617;
                    border: 1px solid #1e293b;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    transition: box-shadow 0.5s ease;
                }
                .case-card.accent-violet:hover {
                    box-shadow: 0 25px 50px rgba(139, 92, 246, 0.2);
                }
                .case-card.accent-cyan:hover {
                    box-shadow: 0 25px 50px rgba(6, 182, 212, 0.2);
                }
                .case-shot {
                    position: relative;
                    height: 16rem;
                    cursor: pointer;
                }
                .case-shot img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .case-shot-hover {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.5);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .case-card:hover .case-shot-hover {
                    opacity: 1;
                }
                .view-demo {
                    background: #fff;
                    color: #000;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    font-size: 0.875rem;
                }
                .case-body {
                    padding: 2rem;
                }
                .case-body h3 {
                    font-size: 1.875rem;
                    margin: 0 0 0.75rem;
                }
                .accent-violet h3, .accent-cyan .case-tags {
                    color: #a78bfa;
                }
                .accent-cyan h3, .accent-violet .case-tags {
                    color: #22d3ee;
                }
                .case-body p {
                    font-size: 1.125rem;
                    color: #94a3b8;
                    margin: 0 0 1rem;
                }
                .case-body strong {
                    color: #fff;
                }
                .case-tags {
                    font-size: 0.875rem;
                    font-weight: 700;
                }
                .preview-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 70;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(4px);
                }
                .preview-window {
                    width: 100%;
                    max-width: 72rem;
                    height: 85vh;
                    display: flex;
                    flex-direction: column;
                    background: #0f172a;
                    border: 1px solid #334155;
                    border-radius: 1rem;
                    overflow: hidden;
                }
                .preview-chrome {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem;
                    background: #1e293b;
                    border-bottom: 1px solid #334155;
                }
                .window-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 9999px;
                }
                .dot.red { background: #ef4444; }
                .dot.yellow { background: #eab308; }
                .dot.green { background: #22c55e; }
                .address-bar {
                    min-width: 300px;
                    text-align: center;
                    padding: 0.375rem 1rem;
                    background: #020617;
                    border-radius: 0.375rem;
                    color: #94a3b8;
                    font-family: monospace;
                    font-size: 0.75rem;
                }
                .preview-close {
                    background: none;
                    border: none;
                    color: #94a3b8;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .preview-page {
                    flex-grow: 1;
                    overflow-y: auto;
                    background: #fff;
                }
                .preview-page img {
                    width: 100%;
                    height: auto;
                }
                .preview-copy {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 3rem;
                    color: #1f2937;
                }
                .preview-cta {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    color: #fff;
                    font-weight: 700;
                }
                .preview-cta.theme-pink { background: #db2777; }
                .preview-cta.theme-stone { background: #292524; }
                "#}
            </style>
        </section>
    }
}
