use std::rc::Rc;

use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::content::SiteContent;
use crate::pages::contact::ContactSection;
use crate::pages::faq::Faq;
use crate::pages::footer::Footer;
use crate::pages::header::Header;
use crate::pages::hero::Hero;
use crate::pages::marquee::Marquee;
use crate::pages::pricing::Pricing;
use crate::pages::services::Services;
use crate::pages::work::Work;

/// Document offset to scroll to so that an element whose viewport top is
/// `element_top` ends up just below the fixed header.
pub fn scroll_target(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - config::HEADER_OFFSET_PX
}

/// Smooth-scrolls to the section with the given id. Unknown ids do nothing.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        warn!("No section with id '{}'", id);
        return;
    };
    let top = scroll_target(
        element.get_bounding_client_rect().top(),
        window.page_y_offset().unwrap_or(0.0),
    );
    debug!("Scrolling to '{}' at {}", id, top);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = props.content.clone();
    let navigate = Callback::from(|id: String| scroll_to_section(&id));

    html! {
        <div class="landing-page">
            <Header content={content.clone()} on_navigate={navigate.clone()} />
            <Hero content={content.clone()} on_navigate={navigate.clone()} />
            <Marquee content={content.clone()} />
            <Services content={content.clone()} on_navigate={navigate.clone()} />
            <Work content={content.clone()} />
            <Pricing content={content.clone()} on_navigate={navigate.clone()} />
            <Faq content={content.clone()} />
            <ContactSection content={content.clone()} />
            <Footer content={content} on_navigate={navigate} />
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }
                html, body {
                    margin: 0;
                    background: #020617;
                    color: #e2e8f0;
                    font-family: 'Inter', system-ui, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
                ::selection {
                    background: #06b6d4;
                    color: #fff;
                }
                .landing-page {
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                section {
                    position: relative;
                    padding: 6rem 1.5rem;
                }
                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .gradient-text {
                    background: linear-gradient(to right, #22d3ee, #a855f7);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .fade-in {
                    opacity: 0;
                    transform: translateY(3rem) scale(0.95);
                    transition-property: opacity, transform;
                    transition-duration: 1000ms;
                    transition-timing-function: ease-out;
                }
                .fade-in.shown {
                    opacity: 1;
                    transform: translateY(0) scale(1);
                }
                .section-header {
                    margin-bottom: 4rem;
                }
                .section-header.centered {
                    text-align: center;
                }
                .section-header h2 {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #fff;
                    margin: 0 0 1rem;
                }
                .section-rule {
                    height: 0.25rem;
                    width: 6rem;
                    background: linear-gradient(to right, #06b6d4, #9333ea);
                    border-radius: 9999px;
                    margin-bottom: 1.5rem;
                }
                .section-header.centered .section-rule {
                    margin-left: auto;
                    margin-right: auto;
                }
                .section-header p {
                    color: #94a3b8;
                    font-size: 1.125rem;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .btn-primary {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: linear-gradient(to right, #0891b2, #2563eb);
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                    transition: box-shadow 0.3s ease;
                }
                .btn-primary:hover {
                    box-shadow: 0 0 20px rgba(6, 182, 212, 0.5);
                }
                .btn-primary:disabled {
                    opacity: 0.7;
                    cursor: not-allowed;
                }
                .btn-secondary {
                    padding: 1rem 2rem;
                    border: 1px solid #334155;
                    border-radius: 0.5rem;
                    background: rgba(15, 23, 42, 0.5);
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                }
                .btn-secondary:hover {
                    background: #1e293b;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_target_leaves_room_for_the_header() {
        assert_eq!(scroll_target(500.0, 1_200.0), 1_620.0);
        assert_eq!(scroll_target(0.0, 0.0), -80.0);
        assert_eq!(scroll_target(-300.0, 900.0), 520.0);
    }
}
