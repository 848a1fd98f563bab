use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::components::count_up::StatValue;
use crate::components::fade_in::FadeIn;
use crate::components::wireframe_mesh::WireframeMesh;
use crate::content::SiteContent;
use crate::error::SiteError;

/// Class of the photo layer. Without the mesh the photo carries the hero alone.
pub fn background_class(mesh_failed: bool) -> &'static str {
    if mesh_failed {
        "hero-background without-mesh"
    } else {
        "hero-background"
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: Rc<SiteContent>,
    pub on_navigate: Callback<String>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = &props.content.hero;
    let mesh_failed = use_state_eq(|| false);

    let on_mesh_error = {
        let mesh_failed = mesh_failed.clone();
        Callback::from(move |err: SiteError| {
            warn!("Hiding the hero mesh: {}", err);
            mesh_failed.set(true);
        })
    };

    let to_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("contact".to_string()))
    };
    let to_pricing = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("pricing".to_string()))
    };

    html! {
        <section id="hero" class="hero">
            <div class={background_class(*mesh_failed)} style={format!("background-image: url(\"{}\");", hero.background_image)}></div>
            if !*mesh_failed {
                <WireframeMesh on_error={on_mesh_error} />
            }
            <div class="hero-content">
                <FadeIn delay_ms={0}>
                    <div class="hero-badge">
                        <span class="stars">{"★★★★★"}</span>
                        <span>{ &hero.badge }</span>
                    </div>
                </FadeIn>

                <FadeIn delay_ms={100}>
                    <h1>
                        { &hero.headline }<br />
                        <span class="gradient-text">{ &hero.headline_accent }</span>
                    </h1>
                </FadeIn>

                <FadeIn delay_ms={200}>
                    <p class="hero-subtitle">{ &hero.subtitle }</p>
                </FadeIn>

                <FadeIn delay_ms={300}>
                    <div class="hero-cta-group">
                        <button class="btn-primary" onclick={to_contact}>{ &hero.primary_cta }</button>
                        <button class="btn-secondary" onclick={to_pricing}>{ &hero.secondary_cta }{" →"}</button>
                    </div>
                </FadeIn>

                <FadeIn delay_ms={500} class={classes!("hero-stats")}>
                    { for hero.stats.iter().map(|stat| html! {
                        <div class="hero-stat" key={stat.label.clone()}>
                            <div class="hero-stat-value">
                                <StatValue value={stat.value} suffix={stat.suffix.clone()} />
                            </div>
                            <div class="hero-stat-label">{ &stat.label }</div>
                        </div>
                    }) }
                </FadeIn>
            </div>
            <style>
                {r#"
                .hero {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    padding-top: 12rem;
                    padding-bottom: 8rem;
                    background: #020617;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    opacity: 0.1;
                }
                .hero-background.without-mesh {
                    opacity: 0.25;
                }
                .wireframe-mesh {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0.6;
                    pointer-events: none;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    text-align: center;
                    width: 100%;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(15, 23, 42, 0.8);
                    border: 1px solid #334155;
                    border-radius: 9999px;
                    padding: 0.375rem 1rem;
                    margin-bottom: 2rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #cbd5e1;
                }
                .hero-badge .stars {
                    color: #22d3ee;
                }
                .hero h1 {
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 700;
                    color: #fff;
                    line-height: 1.1;
                    margin: 0 0 2rem;
                }
                .hero-subtitle {
                    font-size: 1.375rem;
                    color: #cbd5e1;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    line-height: 1.6;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .hero-cta-group button {
                    border-radius: 9999px;
                    font-size: 1.125rem;
                }
                .hero-stats {
                    margin: 5rem auto 0;
                    padding-top: 2.5rem;
                    border-top: 1px solid rgba(30, 41, 59, 0.5);
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 5rem;
                    max-width: 64rem;
                }
                .hero-stat {
                    text-align: center;
                    transition: transform 0.3s ease;
                }
                .hero-stat:hover {
                    transform: scale(1.1);
                }
                .hero-stat-value {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #fff;
                }
                .hero-stat-label {
                    margin-top: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: #06b6d4;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
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
    fn photo_layer_steps_up_once_the_mesh_is_gone() {
        assert_eq!(background_class(false), "hero-background");
        assert_eq!(background_class(true), "hero-background without-mesh");
    }
}
