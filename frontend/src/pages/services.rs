use crate::components::Reveal;
use crate::content::SERVICES;
use yew::prelude::*;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <style>{SERVICES_CSS}</style>
            <Reveal class={classes!("services-header")}>
                <h2>{"Our "}<span class="accent">{"Services"}</span></h2>
                <p>{"Installation, testing and maintenance that keeps your premises safe and compliant."}</p>
            </Reveal>
            <div class="services-grid">
                {
                    SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal
                            key={service.title}
                            class={classes!("service-card")}
                            duration_ms={600}
                            delay_ms={index as u32 * 100}
                        >
                            <i class={classes!(service.icon, "service-icon")}></i>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

const SERVICES_CSS: &str = r#"
    .services {
        background: #0a0a0a;
        color: #fff;
        padding: 6rem 1.5rem;
    }
    .services-header {
        text-align: center;
        max-width: 48rem;
        margin: 0 auto 3rem;
    }
    .services-header h2 {
        font-family: var(--font-roboto-slab), serif;
        font-size: clamp(2.25rem, 5vw, 3.5rem);
        margin-bottom: 1rem;
    }
    .services-header p {
        color: rgba(255,255,255,0.75);
        font-size: 1.125rem;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
        gap: 1.5rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    .service-card {
        padding: 1.75rem;
        border-radius: 1rem;
        background: rgba(255,255,255,0.06);
        border: 1px solid rgba(255,255,255,0.12);
        transition: border-color 0.3s;
    }
    .service-card:hover {
        border-color: rgba(239,68,68,0.6);
    }
    .service-icon {
        font-size: 1.75rem;
        color: #ef4444;
        margin-bottom: 1rem;
    }
    .service-card h3 {
        font-size: 1.2rem;
        margin: 0 0 0.5rem;
    }
    .service-card p {
        color: rgba(255,255,255,0.7);
        line-height: 1.6;
        margin: 0;
    }
"#;
