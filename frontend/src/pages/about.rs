use crate::components::{Reveal, RevealFrom};
use crate::config;
use crate::content::FEATURES;
use crate::dom::WindowListener;
use crate::responsive::current_model_scale;
use crate::scene::ModelViewer;
use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    let hover = use_state(|| false);
    let model_scale = use_state(|| config::DEFAULT_MODEL_SCALE);

    // Base scale follows the viewport width
    {
        let model_scale = model_scale.clone();
        use_effect_with_deps(
            move |_| {
                model_scale.set(current_model_scale());
                let listener = WindowListener::new("resize", move || {
                    model_scale.set(current_model_scale());
                });
                if let Err(e) = &listener {
                    log::warn!("Resize tracking disabled: {}", e);
                }
                move || drop(listener)
            },
            (),
        );
    }

    let onpointerenter = {
        let hover = hover.clone();
        Callback::from(move |_: PointerEvent| hover.set(true))
    };
    let onpointerleave = {
        let hover = hover.clone();
        Callback::from(move |_: PointerEvent| hover.set(false))
    };

    html! {
        <section id="about" class="about">
            <style>{ABOUT_CSS}</style>
            <div class="about-inner">
                <Reveal class={classes!("about-header")}>
                    <h2>{"About "}<span class="accent">{"Us"}</span></h2>
                    <p>
                        {"With over "}<span class="about-emphasis">{"25 years"}</span>
                        {" of experience, we deliver safe, reliable, and professional fire alarm & electrical solutions tailored to your needs."}
                    </p>
                </Reveal>

                <div class="about-grid">
                    <div class="about-model" {onpointerenter} {onpointerleave}>
                        <ModelViewer
                            asset={config::MODEL_ASSET}
                            hover={*hover}
                            base_scale={*model_scale}
                        />
                    </div>

                    <div class="about-features">
                        {
                            FEATURES.iter().enumerate().map(|(index, feature)| html! {
                                <Reveal
                                    key={feature.title}
                                    class={classes!("feature-card")}
                                    from={RevealFrom::Right}
                                    duration_ms={500}
                                    delay_ms={index as u32 * 100}
                                >
                                    <div class="feature-icon"><i class={feature.icon}></i></div>
                                    <div>
                                        <h3>{feature.title}</h3>
                                        <p>{feature.description}</p>
                                    </div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                        <a href="#contact" class="about-cta">{"Get a Free Consultation"}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

const ABOUT_CSS: &str = r#"
    .about {
        position: relative;
        width: 100%;
        min-height: 100vh;
        background: #000;
        color: #fff;
        overflow: hidden;
    }
    .about-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 2rem 1.5rem;
    }
    .about-header {
        text-align: center;
        margin-bottom: 1.5rem;
    }
    .about-header h2 {
        font-family: var(--font-roboto-slab), serif;
        font-size: clamp(2.25rem, 5vw, 3.75rem);
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .about-header p {
        font-size: clamp(1rem, 2vw, 1.25rem);
        color: rgba(255,255,255,0.8);
        max-width: 48rem;
        margin: 0 auto;
    }
    .accent {
        color: #ef4444;
    }
    .about-emphasis {
        color: #fff;
        font-weight: 600;
    }
    .about-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
        align-items: center;
    }
    .about-model {
        width: 100%;
        height: 600px;
        border-radius: 0.75rem;
        overflow: hidden;
        box-shadow: 0 25px 50px rgba(0,0,0,0.5);
        touch-action: pan-y;
    }
    .about-features {
        display: grid;
        gap: 1rem;
    }
    .feature-card {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
        padding: 1rem;
        border-radius: 0.75rem;
        background: rgba(255,255,255,0.1);
        border: 1px solid rgba(255,255,255,0.2);
        backdrop-filter: blur(12px);
    }
    .feature-card:hover {
        box-shadow: 0 15px 35px -12px rgba(239,68,68,0.25);
    }
    .feature-icon {
        flex-shrink: 0;
        width: 3rem;
        height: 3rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 9999px;
        background: #ef4444;
    }
    .feature-card h3 {
        font-size: 1.125rem;
        font-weight: 600;
        margin: 0 0 0.25rem;
    }
    .feature-card p {
        color: rgba(255,255,255,0.7);
        line-height: 1.6;
        margin: 0;
    }
    .about-cta {
        display: inline-block;
        margin-top: 1rem;
        padding: 1rem 2rem;
        text-align: center;
        background: #ef4444;
        color: #fff;
        font-weight: 600;
        border-radius: 0.75rem;
        text-decoration: none;
        transition: background 0.3s, transform 0.2s;
    }
    .about-cta:hover {
        background: #dc2626;
        transform: scale(1.02);
    }
    .about-cta:active {
        transform: scale(0.98);
    }
    @media (max-width: 768px) {
        .about-grid {
            grid-template-columns: 1fr;
            gap: 0.5rem;
        }
        .about-model {
            height: 350px;
        }
        .about-inner {
            padding: 0.5rem 0.25rem;
        }
        .about-cta {
            display: block;
        }
    }
"#;
