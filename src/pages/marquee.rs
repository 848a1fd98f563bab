use std::rc::Rc;

use yew::prelude::*;

use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub content: Rc<SiteContent>,
}

/// Client names scrolling sideways. The list is rendered twice so the loop
/// has no visible seam.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let clients = &props.content.clients;

    html! {
        <section class="client-marquee">
            <div class="marquee-container">
                <div class="marquee-content">
                    { for clients.iter().chain(clients.iter()).enumerate().map(|(i, client)| html! {
                        <div class="marquee-item" key={i}>
                            <span>{ client }</span>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .client-marquee {
                    padding: 3rem 0;
                    background: #0f172a;
                    border-top: 1px solid #1e293b;
                    border-bottom: 1px solid #1e293b;
                    overflow: hidden;
                }
                .marquee-container {
                    display: flex;
                    width: 100%;
                    white-space: nowrap;
                }
                @keyframes marquee-scroll {
                    0% { transform: translateX(0); }
                    100% { transform: translateX(-100%); }
                }
                .marquee-content {
                    display: flex;
                    animation: marquee-scroll 30s linear infinite;
                    padding-right: 2rem;
                }
                .marquee-container:hover .marquee-content {
                    animation-play-state: paused;
                }
                .marquee-item {
                    display: flex;
                    align-items: center;
                    margin: 0 2.5rem;
                    opacity: 0.7;
                    transition: opacity 0.3s ease;
                }
                .marquee-item:hover {
                    opacity: 1;
                }
                .marquee-item span {
                    font-size: 2.25rem;
                    font-weight: 800;
                    color: #334155;
                }
                "#}
            </style>
        </section>
    }
}
