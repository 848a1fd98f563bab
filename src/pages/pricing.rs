use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::section_header::SectionHeader;
use crate::content::{Plan, SiteContent};

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: Plan,
    on_choose: Callback<MouseEvent>,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;
    html! {
        <div class={classes!("plan-card", plan.highlight.then_some("highlight"))}>
            <span class="plan-badge">{ plan.badge() }</span>
            <h3>{ &plan.name }</h3>
            <p class="plan-description">{ &plan.description }</p>
            <div class="plan-price">
                <span class="amount">{ format!("${}", plan.price) }</span>
                <span class="period">{ plan.period_label() }</span>
            </div>
            <ul>
                { for plan.features.iter().map(|f| html! {
                    <li><span class="check">{"✓"}</span>{ f }</li>
                }) }
            </ul>
            <button class="plan-cta" onclick={props.on_choose.clone()}>{ plan.cta() }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub content: Rc<SiteContent>,
    pub on_navigate: Callback<String>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let pricing = &props.content.pricing;
    let first_tab = pricing.tabs.first().map(|t| t.id.clone()).unwrap_or_default();
    let selected = use_state(move || first_tab);

    let choose = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("contact".to_string()))
    };

    let plans = props
        .content
        .pricing_tab(&*selected)
        .map(|tab| tab.plans.as_slice())
        .unwrap_or_default();

    html! {
        <section id="pricing" class="pricing">
            <div class="container">
                <SectionHeader title={pricing.title.clone()} subtitle={pricing.subtitle.clone()} />

                <FadeIn class={classes!("tab-row")}>
                    <div class="tab-switcher">
                        { for pricing.tabs.iter().map(|tab| {
                            let onclick = {
                                let selected = selected.clone();
                                let id = tab.id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    info!("Showing {} pricing", id);
                                    selected.set(id.clone());
                                })
                            };
                            html! {
                                <button
                                    key={tab.id.clone()}
                                    class={classes!("tab-button", (*selected == tab.id).then_some("active"))}
                                    {onclick}
                                >
                                    { &tab.label }
                                </button>
                            }
                        }) }
                    </div>
                </FadeIn>

                <div class="plan-grid">
                    { for plans.iter().enumerate().map(|(i, plan)| html! {
                        <FadeIn key={format!("{}-{}", *selected, plan.name)} delay_ms={i as u32 * 100} class={classes!("plan-cell")}>
                            <PlanCard plan={plan.clone()} on_choose={choose.clone()} />
                        </FadeIn>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .pricing {
                    background: #020617;
                }
                .tab-row {
                    display: flex;
                    justify-content: center;
                    margin-bottom: 4rem;
                }
                .tab-switcher {
                    display: flex;
                    padding: 0.25rem;
                    background: #1e293b;
                    border: 1px solid #334155;
                    border-radius: 9999px;
                }
                .tab-button {
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: transparent;
                    color: #94a3b8;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .tab-button:hover {
                    color: #fff;
                }
                .tab-button.active {
                    background: linear-gradient(135deg, #06b6d4 0%, #7c3aed 100%);
                    color: #fff;
                    box-shadow: 0 10px 15px rgba(139, 92, 246, 0.2);
                }
                .plan-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 2rem;
                }
                .plan-cell {
                    height: 100%;
                }
                .plan-card {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    background: #0f172a;
                    border: 1px solid #1e293b;
                    border-radius: 1.5rem;
                    transition: all 0.3s ease;
                }
                .plan-card:hover {
                    border-color: rgba(139, 92, 246, 0.5);
                }
                .plan-card.highlight {
                    border: 2px solid #06b6d4;
                    box-shadow: 0 0 40px rgba(6, 182, 212, 0.2);
                    transform: scale(1.02);
                }
                .plan-badge {
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #64748b;
                    margin-bottom: 1rem;
                }
                .plan-card.highlight .plan-badge {
                    color: #22d3ee;
                }
                .plan-card h3 {
                    font-size: 1.875rem;
                    color: #fff;
                    margin: 0 0 0.5rem;
                }
                .plan-description {
                    flex-grow: 1;
                    color: #94a3b8;
                    margin: 0 0 2rem;
                }
                .plan-price {
                    margin-bottom: 2rem;
                }
                .plan-price .amount {
                    font-size: 3rem;
                    font-weight: 800;
                    color: #fff;
                }
                .plan-price .period {
                    font-size: 1.25rem;
                    color: #94a3b8;
                    margin-left: 0.5rem;
                }
                .plan-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2.5rem;
                }
                .plan-card li {
                    display: flex;
                    gap: 0.75rem;
                    color: #cbd5e1;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }
                .plan-card .check {
                    color: #a78bfa;
                }
                .plan-cta {
                    margin-top: auto;
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: #334155;
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                .plan-card.highlight .plan-cta {
                    background: linear-gradient(135deg, #06b6d4 0%, #7c3aed 100%);
                }
                "#}
            </style>
        </section>
    }
}
