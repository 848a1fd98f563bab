use std::rc::Rc;

use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::section_header::SectionHeader;
use crate::content::SiteContent;

/// Fade-in stagger between neighbouring cards.
const CARD_STAGGER_MS: u32 = 150;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub content: Rc<SiteContent>,
    pub on_navigate: Callback<String>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let services = &props.content.services;
    let to_work = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("work".to_string()))
    };

    html! {
        <section id="services" class="services">
            <div class="container">
                <SectionHeader title={services.title.clone()} subtitle={services.subtitle.clone()} />

                <div class="service-grid">
                    { for services.cards.iter().enumerate().map(|(i, card)| html! {
                        <FadeIn key={card.title.clone()} delay_ms={i as u32 * CARD_STAGGER_MS} class={classes!("service-cell")}>
                            <div class="service-card">
                                <div class="service-card-image" style={format!("background-image: url(\"{}\");", card.background_image)}></div>
                                <div class="service-card-overlay"></div>
                                <div class="service-card-body">
                                    <div class="service-icon">{ card.icon.glyph() }</div>
                                    <h3>{ &card.title }</h3>
                                    <p>{ &card.description }</p>
                                    <ul>
                                        { for card.features.iter().map(|f| html! {
                                            <li><span class="check">{"✓"}</span>{ f }</li>
                                        }) }
                                    </ul>
                                    <button class="service-cta" onclick={to_work.clone()}>{ &card.cta }{" →"}</button>
                                </div>
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .services {
                    background: #020617;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 2rem;
                }
                .service-cell {
                    height: 100%;
                }
                .service-card {
                    position: relative;
                    height: 100%;
                    padding: 2rem;
                    background: #0f172a;
                    border: 1px solid #1e293b;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    transition: all 0.5s ease;
                }
                .service-card:hover {
                    border-color: rgba(6, 182, 212, 0.5);
                    box-shadow: 0 0 30px rgba(6, 182, 212, 0.1);
                }
                .service-card-image {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    opacity: 0.05;
                    transition: opacity 0.3s ease;
                }
                .service-card:hover .service-card-image {
                    opacity: 0.1;
                }
                .service-card-overlay {
                    position: absolute;
                    inset: 0;
                    background: #0f172a;
                    opacity: 0.8;
                }
                .service-card-body {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                }
                .service-icon {
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 2rem;
                    background: #1e293b;
                    border-radius: 1rem;
                    font-size: 1.75rem;
                    transition: background 0.5s ease;
                }
                .service-card:hover .service-icon {
                    background: linear-gradient(135deg, #06b6d4 0%, #7c3aed 100%);
                }
                .service-card h3 {
                    font-size: 1.5rem;
                    color: #fff;
                    margin: 0 0 1rem;
                }
                .service-card p {
                    flex-grow: 1;
                    color: #94a3b8;
                    font-size: 0.875rem;
                    margin: 0 0 1.5rem;
                }
                .service-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                }
                .service-card li {
                    display: flex;
                    gap: 0.75rem;
                    color: #94a3b8;
                    font-size: 0.875rem;
                    margin-bottom: 0.75rem;
                }
                .service-card .check {
                    color: #06b6d4;
                }
                .service-cta {
                    width: 100%;
                    padding: 0.75rem;
                    border: 1px solid #334155;
                    border-radius: 0.75rem;
                    background: transparent;
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .service-cta:hover {
                    background: #fff;
                    color: #0f172a;
                }
                "#}
            </style>
        </section>
    }
}
