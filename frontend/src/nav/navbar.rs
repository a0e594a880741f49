use crate::config::{self, MOBILE_LINK_STAGGER_MS};
use crate::content::NAV_LINKS;
use crate::dom::scroll_lock::lock_body;
use crate::dom::WindowListener;
use crate::nav::state::{NavAction, NavHandle, NavState};
use yew::prelude::*;

fn current_scroll() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Uses the shared nav state from a surrounding `NavProvider`, or its own
/// when mounted on its own.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let local = use_reducer(NavState::default);
    let nav = use_context::<NavHandle>().unwrap_or(local);

    // Hide on scroll down, show on scroll up
    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::passive("scroll", move || {
                    nav.dispatch(NavAction::Scrolled(current_scroll()));
                });
                if let Err(e) = &listener {
                    log::warn!("Scroll tracking disabled: {}", e);
                }
                move || drop(listener)
            },
            (),
        );
    }

    // Lock page scroll while the mobile menu is open
    use_effect_with_deps(
        move |menu_open: &bool| {
            let lock = if *menu_open {
                match lock_body() {
                    Ok(lock) => Some(lock),
                    Err(e) => {
                        log::warn!("Could not lock page scroll: {}", e);
                        None
                    }
                }
            } else {
                None
            };
            move || drop(lock)
        },
        nav.menu_open,
    );

    let open_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::OpenMenu))
    };
    let close_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::CloseMenu))
    };

    let bar_class = classes!(
        "navbar",
        if nav.hidden { "navbar-hidden" } else { "navbar-shown" }
    );
    let inner_class = classes!(
        "navbar-inner",
        nav.scrolled.then_some("navbar-solid")
    );
    let overlay_class = classes!(
        "mobile-menu",
        nav.menu_open.then_some("mobile-menu-open")
    );

    html! {
        <>
            <style>{NAVBAR_CSS}</style>
            <nav class={bar_class} aria-hidden={nav.hidden.to_string()}>
                <div class={inner_class}>
                    <a href="#home" class="navbar-logo">
                        <img src={config::get_asset_url(config::LOGO_ASSET)} alt="FireSafe Pro Logo" width="150" height="70" />
                    </a>
                    <div class="navbar-links">
                        {
                            NAV_LINKS.iter().map(|link| html! {
                                <a
                                    key={link.href}
                                    href={link.href}
                                    class={classes!("navbar-link", nav.is_active(link.href).then_some("active"))}
                                >
                                    {link.label}
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                    <button
                        class="menu-toggle"
                        onclick={open_menu}
                        aria-label="Open mobile menu"
                        aria-expanded={nav.menu_open.to_string()}
                    >
                        <i class="fa-solid fa-bars"></i>
                    </button>
                </div>
            </nav>

            <div class={overlay_class} role="dialog" aria-modal="true">
                <button class="menu-close" onclick={close_menu.clone()} aria-label="Close mobile menu">
                    <i class="fa-solid fa-xmark"></i>
                </button>
                <div class="mobile-links">
                    {
                        NAV_LINKS.iter().enumerate().map(|(index, link)| html! {
                            <a
                                key={link.href}
                                href={link.href}
                                class={classes!("mobile-link", nav.is_active(link.href).then_some("active"))}
                                style={format!("transition-delay: {}ms;", index as u32 * MOBILE_LINK_STAGGER_MS)}
                                onclick={close_menu.clone()}
                            >
                                {link.label}
                            </a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </>
    }
}

const NAVBAR_CSS: &str = r#"
    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 50;
        transition: transform 0.3s ease;
    }
    .navbar-hidden {
        transform: translateY(-100%);
    }
    .navbar-shown {
        transform: translateY(0);
    }
    .navbar-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0.75rem 2rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
        background: transparent;
        transition: background-color 0.3s ease;
    }
    .navbar-solid {
        background: rgba(0, 0, 0, 0.8);
        backdrop-filter: blur(12px);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
    }
    .navbar-logo img {
        filter: brightness(1.1);
        height: auto;
    }
    .navbar-links {
        display: flex;
        gap: 2.5rem;
    }
    .navbar-link {
        position: relative;
        color: #fff;
        font-weight: 500;
        text-decoration: none;
        transition: color 0.2s;
    }
    .navbar-link:hover {
        color: #d1d5db;
    }
    .navbar-link.active::after {
        content: '';
        position: absolute;
        bottom: -4px;
        left: 0;
        width: 100%;
        height: 2px;
        background: #ef4444;
    }
    .menu-toggle, .menu-close {
        display: none;
        background: none;
        border: none;
        color: #fff;
        font-size: 1.75rem;
        padding: 0.75rem;
        border-radius: 9999px;
        cursor: pointer;
    }
    .menu-toggle:hover, .menu-close:hover {
        background: rgba(255, 255, 255, 0.2);
    }
    .mobile-menu {
        position: fixed;
        inset: 0;
        z-index: 60;
        background: rgba(0, 0, 0, 0.95);
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        transform: translateY(-100%);
        transition: transform 0.3s ease;
    }
    .mobile-menu-open {
        transform: translateY(0);
    }
    .mobile-menu .menu-close {
        display: block;
        position: absolute;
        top: 1.5rem;
        right: 1.5rem;
    }
    .mobile-links {
        display: flex;
        flex-direction: column;
        gap: 2.5rem;
    }
    .mobile-link {
        font-size: 2rem;
        font-weight: 600;
        color: #fff;
        text-decoration: none;
        opacity: 0;
        transform: translateY(-1.5rem);
        transition: opacity 0.5s, transform 0.5s;
    }
    .mobile-menu-open .mobile-link {
        opacity: 1;
        transform: translateY(0);
    }
    .mobile-link.active {
        color: #ef4444;
        text-decoration: underline;
        text-underline-offset: 4px;
    }
    @media (max-width: 768px) {
        .navbar-links {
            display: none;
        }
        .menu-toggle {
            display: block;
        }
        .navbar-inner {
            padding: 0.5rem 1rem;
        }
    }
"#;
