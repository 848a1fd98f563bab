use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::content::SiteContent;

/// Section ids double as footer link labels: "faq" becomes "Faq".
pub fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: Rc<SiteContent>,
    pub on_navigate: Callback<String>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let brand = &props.content.brand;
    let footer = &props.content.footer;
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="brand">
                        <span class="brand-icon">{"⚡"}</span>
                        <span>{ &brand.lead }<span class="brand-accent">{ &brand.accent }</span></span>
                    </div>
                    <p>{ &brand.mission }</p>
                </div>

                <div>
                    <h4>{"Navigation"}</h4>
                    <ul>
                        { for footer.sections.iter().map(|id| {
                            let onclick = {
                                let on_navigate = props.on_navigate.clone();
                                let id = id.clone();
                                Callback::from(move |_: MouseEvent| on_navigate.emit(id.clone()))
                            };
                            html! {
                                <li key={id.clone()}>
                                    <button class="footer-link" {onclick}>{ capitalize(id) }</button>
                                </li>
                            }
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { for footer.services.iter().map(|s| html! { <li>{ s }</li> }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Connect"}</h4>
                    <ul>
                        { for footer.social.iter().map(|s| html! { <li><a href="#">{ s }</a></li> }) }
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>
                    { format!("© {} {}{}. All rights reserved. | ", year, brand.lead, brand.accent) }
                    <a href="#">{"Privacy Policy"}</a>
                </p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #0f172a;
                    border-top: 1px solid #1e293b;
                    padding: 3rem 1.5rem;
                }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2rem;
                }
                .footer-brand .brand {
                    margin-bottom: 1rem;
                }
                .footer-brand p {
                    font-size: 0.875rem;
                    color: #94a3b8;
                    max-width: 20rem;
                }
                .site-footer h4 {
                    font-size: 1.125rem;
                    color: #fff;
                    margin: 0 0 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    font-size: 0.875rem;
                    color: #94a3b8;
                }
                .site-footer li {
                    margin-bottom: 0.75rem;
                }
                .site-footer a {
                    color: #94a3b8;
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: #a78bfa;
                }
                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    color: #94a3b8;
                    font: inherit;
                    cursor: pointer;
                }
                .footer-link:hover {
                    color: #22d3ee;
                }
                .footer-bottom {
                    max-width: 80rem;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #1e293b;
                    text-align: center;
                    font-size: 0.875rem;
                    color: #64748b;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                    .footer-brand {
                        grid-column: span 2;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_section_ids() {
        assert_eq!(capitalize("hero"), "Hero");
        assert_eq!(capitalize("faq"), "Faq");
        assert_eq!(capitalize(""), "");
    }
}
