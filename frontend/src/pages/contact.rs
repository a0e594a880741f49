use crate::components::Reveal;
use crate::content::{COMPANY_NAME, SERVICE_AREA};
use yew::prelude::*;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <>
            <section id="contact" class="contact">
                <style>{CONTACT_CSS}</style>
                <Reveal class={classes!("contact-card")}>
                    <h2>{"Get a "}<span class="accent">{"Free Quote"}</span></h2>
                    <p>
                        {"Tell us about your premises and we will arrange a visit from a certified engineer. Covering "}
                        {SERVICE_AREA}
                        {"."}
                    </p>
                    <a href="#services" class="contact-cta">{"See What We Do"}</a>
                </Reveal>
            </section>
            <footer class="site-footer">
                {format!("© {}", COMPANY_NAME)}
            </footer>
        </>
    }
}

const CONTACT_CSS: &str = r#"
    .contact {
        background: linear-gradient(to bottom, #0a0a0a, #1a0000);
        color: #fff;
        padding: 6rem 1.5rem;
        display: flex;
        justify-content: center;
    }
    .contact-card {
        max-width: 44rem;
        text-align: center;
        padding: 3rem 2rem;
        border-radius: 1.25rem;
        background: rgba(255,255,255,0.06);
        border: 1px solid rgba(255,255,255,0.15);
    }
    .contact-card h2 {
        font-family: var(--font-roboto-slab), serif;
        font-size: clamp(2rem, 4vw, 3rem);
        margin-bottom: 1rem;
    }
    .contact-card p {
        color: rgba(255,255,255,0.8);
        font-size: 1.125rem;
        line-height: 1.7;
        margin-bottom: 2rem;
    }
    .contact-cta {
        display: inline-block;
        padding: 0.9rem 2rem;
        border-radius: 0.75rem;
        border: 2px solid rgba(255,255,255,0.4);
        color: #fff;
        text-decoration: none;
        font-weight: 600;
    }
    .contact-cta:hover {
        border-color: #fff;
    }
    .site-footer {
        background: #000;
        color: rgba(255,255,255,0.5);
        text-align: center;
        font-size: 0.875rem;
        padding: 1.5rem;
    }
"#;
