use crate::config::{self, HERO_REVEAL_DELAY_MS};
use crate::content::STATS;
use crate::stats::StatsPanel;
use gloo_timers::callback::Timeout;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    let is_loaded = use_state(|| false);
    let video_ref = use_node_ref();

    // Autoplay policies look at the muted property, not the attribute
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(true);
                }
                || ()
            },
            (),
        );
    }

    {
        let is_loaded = is_loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(HERO_REVEAL_DELAY_MS, move || is_loaded.set(true));
                move || drop(timer)
            },
            (),
        );
    }

    let content_class = classes!(
        "hero-content",
        if *is_loaded { "hero-content-loaded" } else { "hero-content-pending" }
    );

    html! {
        <section id="home" class="hero">
            <style>{HERO_CSS}</style>
            <video
                ref={video_ref}
                class="hero-video"
                autoplay=true
                muted=true
                loop=true
                playsinline=true
                preload="metadata"
                poster={config::get_asset_url(config::HERO_POSTER)}
            >
                <source src={config::get_asset_url(config::HERO_VIDEO_MP4)} type="video/mp4" />
                <source src={config::get_asset_url(config::HERO_VIDEO_WEBM)} type="video/webm" />
                {"Your browser does not support the video tag."}
            </video>
            <div class="hero-overlay"></div>

            <div class={content_class}>
                <h1 class="hero-title">
                    {"Fire Alarm & Electrical "}
                    <span class="hero-title-accent">{"Services"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Over "}<span class="hero-emphasis">{"25 years"}</span>
                    {" of experience delivering professional fire alarm and electrical solutions with unmatched reliability and safety."}
                </p>

                <div class="hero-cta-group">
                    <a href="#contact" class="hero-cta hero-cta-primary">
                        <span>{"Get Free Quote"}</span>
                        <i class="fa-solid fa-chevron-right"></i>
                    </a>
                    <a href="#services" class="hero-cta hero-cta-secondary">
                        {"Our Services"}
                    </a>
                </div>

                <StatsPanel stats={&STATS[..]} />
            </div>

            <a href="#about" class="scroll-indicator" aria-label="Scroll down">
                <span>{"Scroll Down"}</span>
                <div class="scroll-mouse"><div class="scroll-wheel"></div></div>
            </a>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        width: 100%;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        text-align: center;
        overflow: hidden;
        padding: 8rem 1rem 0;
        box-sizing: border-box;
    }
    .hero-video {
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        transform: scale(1.05);
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(0,0,0,0.8), rgba(0,0,0,0.6), rgba(0,0,0,0.4));
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 64rem;
        margin: 1.25rem auto 0;
        color: #fff;
        transition: transform 1s ease, opacity 1s ease;
    }
    .hero-content-pending {
        transform: translateY(3rem);
        opacity: 0;
    }
    .hero-content-loaded {
        transform: translateY(0);
        opacity: 1;
    }
    .hero-title {
        font-family: var(--font-roboto-slab), serif;
        font-size: clamp(1.9rem, 5vw, 3.75rem);
        font-weight: 900;
        line-height: 1.15;
        margin-bottom: 1.5rem;
        text-shadow: 0 4px 12px rgba(0,0,0,0.5);
    }
    .hero-title-accent {
        display: block;
        color: #dc2626;
    }
    .hero-subtitle {
        font-size: clamp(1rem, 2vw, 1.25rem);
        font-weight: 300;
        line-height: 1.7;
        max-width: 42rem;
        margin: 0 auto 2.5rem;
        color: rgba(255,255,255,0.85);
    }
    .hero-emphasis {
        color: #fff;
        font-weight: 600;
    }
    .hero-cta-group {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        justify-content: center;
        margin-bottom: 3.5rem;
    }
    .hero-cta {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.75rem 2rem;
        border-radius: 0.75rem;
        color: #fff;
        text-decoration: none;
        transition: transform 0.3s, background 0.3s, border-color 0.3s;
    }
    .hero-cta:hover {
        transform: scale(1.05);
    }
    .hero-cta-primary {
        background: #dc2626;
        font-weight: 700;
        box-shadow: 0 20px 25px rgba(0,0,0,0.3);
    }
    .hero-cta-primary:hover {
        background: #b91c1c;
    }
    .hero-cta-secondary {
        border: 2px solid rgba(255,255,255,0.4);
        font-weight: 600;
        backdrop-filter: blur(4px);
    }
    .hero-cta-secondary:hover {
        border-color: #fff;
        background: rgba(255,255,255,0.1);
    }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        max-width: 56rem;
        margin: 3rem auto 5rem;
    }
    .stat-card {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 1.5rem;
        border-radius: 1rem;
        background: rgba(255,255,255,0.1);
        border: 1px solid rgba(255,255,255,0.2);
        backdrop-filter: blur(12px);
        transition: transform 0.5s, border-color 0.5s;
    }
    .stat-card:hover {
        transform: translateY(-4px) scale(1.05);
        border-color: rgba(255,255,255,0.4);
    }
    .stat-value {
        font-size: 2.25rem;
        font-weight: 900;
        margin-bottom: 0.25rem;
    }
    .stat-label {
        font-size: 0.95rem;
        font-weight: 500;
        color: rgba(255,255,255,0.8);
        margin: 0;
    }
    .scroll-indicator {
        position: absolute;
        bottom: 0;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        color: rgba(255,255,255,0.7);
        font-size: 0.85rem;
        text-decoration: none;
    }
    .scroll-mouse {
        width: 1.75rem;
        height: 3rem;
        border: 2px solid rgba(255,255,255,0.4);
        border-radius: 9999px;
        display: flex;
        justify-content: center;
        animation: hero-bounce 1s infinite;
    }
    .scroll-wheel {
        width: 0.25rem;
        height: 0.75rem;
        margin-top: 0.5rem;
        background: rgba(255,255,255,0.7);
        border-radius: 9999px;
    }
    @keyframes hero-bounce {
        0%, 100% { transform: translateY(-25%); }
        50% { transform: translateY(0); }
    }
    @media (max-width: 768px) {
        .stats-grid {
            grid-template-columns: repeat(2, 1fr);
            gap: 1.5rem;
        }
        .stat-value {
            font-size: 1.875rem;
        }
    }
"#;
