use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub content: Rc<SiteContent>,
    pub on_navigate: Callback<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);
    let scrolled = scroll_y > config::SCROLLED_THRESHOLD_PX;

    // Navigating from the drawer closes it first.
    let go = |id: &str, close_menu: bool| {
        let id = id.to_string();
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            if close_menu {
                menu_open.set(false);
            }
            on_navigate.emit(id.clone());
        })
    };

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let brand = &props.content.brand;

    html! {
        <>
            <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
                <div class="nav-inner">
                    <div class="brand" onclick={go("hero", false)}>
                        <span class="brand-icon">{"⚡"}</span>
                        <span>{ &brand.lead }<span class="brand-accent">{ &brand.accent }</span></span>
                    </div>

                    <div class="nav-links">
                        { for props.content.nav.iter().map(|item| html! {
                            <button key={item.id.clone()} class="nav-link" onclick={go(&item.id, false)}>
                                { &item.name }
                            </button>
                        }) }
                        <button class="nav-cta" onclick={go("contact", false)}>{"Get Started"}</button>
                    </div>

                    <button class="menu-toggle" onclick={open_menu}>{"☰"}</button>
                </div>
            </nav>

            <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                <div class="mobile-menu-head">
                    <span>{"Menu"}</span>
                    <button class="menu-close" onclick={close_menu}>{"✕"}</button>
                </div>
                <div class="mobile-menu-links">
                    { for props.content.nav.iter().map(|item| html! {
                        <button key={item.id.clone()} onclick={go(&item.id, true)}>{ &item.name }</button>
                    }) }
                </div>
                <button class="mobile-menu-cta" onclick={go("contact", true)}>{"Book Consultation"}</button>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.25rem 0;
                    border-bottom: 1px solid transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(2, 6, 23, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom-color: #1e293b;
                }
                .nav-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    cursor: pointer;
                }
                .brand-icon, .brand-accent {
                    color: #22d3ee;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    color: #cbd5e1;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    cursor: pointer;
                }
                .nav-link:hover {
                    color: #22d3ee;
                }
                .nav-cta {
                    background: #fff;
                    color: #0f172a;
                    border: none;
                    padding: 0.625rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    cursor: pointer;
                    box-shadow: 0 0 15px rgba(6, 182, 212, 0.3);
                }
                .menu-toggle {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 2rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    background: #020617;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    transform: translateX(100%);
                    transition: transform 0.3s ease;
                }
                .mobile-menu.open {
                    transform: translateX(0);
                }
                .mobile-menu-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 3rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                }
                .menu-close {
                    background: none;
                    border: none;
                    color: #94a3b8;
                    font-size: 1.75rem;
                    cursor: pointer;
                }
                .mobile-menu-links {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    flex-grow: 1;
                }
                .mobile-menu-links button {
                    background: none;
                    border: none;
                    text-align: left;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .mobile-menu-cta {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #06b6d4 0%, #7c3aed 100%);
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 700;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .menu-toggle {
                        display: block;
                    }
                }
                "#}
            </style>
        </>
    }
}
