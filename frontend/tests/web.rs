#![cfg(target_arch = "wasm32")]

use firesafe_site::dom::scroll_lock::lock_body;
use firesafe_site::dom::OverflowStyle;
use firesafe_site::nav::state::NavHandle;
use firesafe_site::nav::{use_section_tracking, NavProvider, Navbar};
use firesafe_site::pages::Hero;
use firesafe_site::responsive::{current_model_scale, model_scale_for_width};
use firesafe_site::scene::{FrameLoop, ModelViewer, ModelViewerProps};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlVideoElement};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn body() -> HtmlElement {
    web_sys::window().unwrap().document().unwrap().body().unwrap()
}

/// A fresh mount point at the top of the page.
fn mount_point() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    body().prepend_with_node_1(&root).unwrap();
    root
}

fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
fn menu_lock_restores_custom_body_overflow() {
    body().set_overflow("scroll");

    let lock = lock_body().unwrap();
    assert_eq!(body().overflow(), "hidden");
    lock.release();

    assert_eq!(body().overflow(), "scroll");
    body().set_overflow("");
}

#[wasm_bindgen_test]
fn menu_lock_restores_empty_overflow() {
    body().set_overflow("");
    drop(lock_body().unwrap());
    assert_eq!(body().overflow(), "");
}

#[wasm_bindgen_test]
fn viewport_scale_matches_table() {
    let width = web_sys::window().unwrap().inner_width().unwrap().as_f64().unwrap();
    assert_eq!(current_model_scale(), model_scale_for_width(width));
}

#[wasm_bindgen_test]
async fn navbar_menu_lock_follows_menu_and_unmount() {
    body().set_overflow("scroll");
    let root = mount_point();
    let app = yew::Renderer::<Navbar>::with_root(root.clone()).render();
    TimeoutFuture::new(20).await;

    click(&root, ".menu-toggle");
    TimeoutFuture::new(20).await;
    assert_eq!(body().overflow(), "hidden");

    click(&root, ".menu-close");
    TimeoutFuture::new(20).await;
    assert_eq!(body().overflow(), "scroll");

    // Unmounting with the menu open gives the overflow back too
    click(&root, ".menu-toggle");
    TimeoutFuture::new(20).await;
    assert_eq!(body().overflow(), "hidden");
    app.destroy();
    TimeoutFuture::new(20).await;
    assert_eq!(body().overflow(), "scroll");

    body().set_overflow("");
    root.remove();
}

#[wasm_bindgen_test]
async fn frame_loop_stops_for_good() {
    let frames = Rc::new(Cell::new(0u32));
    let counter = frames.clone();
    let frame_loop = FrameLoop::start(move || counter.set(counter.get() + 1)).unwrap();
    TimeoutFuture::new(100).await;
    assert!(frames.get() > 0);
    assert!(frame_loop.is_pending());

    frame_loop.stop();
    assert!(!frame_loop.is_pending());
    let seen = frames.get();
    TimeoutFuture::new(100).await;
    assert_eq!(frames.get(), seen);
}

#[wasm_bindgen_test]
async fn viewer_unmounted_before_its_model_arrives() {
    let root = mount_point();
    let props = ModelViewerProps {
        asset: "/no-such-model.glb".into(),
        hover: true,
        base_scale: 16.0,
    };
    let app = yew::Renderer::<ModelViewer>::with_root_and_props(root.clone(), props).render();
    TimeoutFuture::new(0).await;
    app.destroy();

    // Long enough for the 404 to come back and for stray frames to fire
    TimeoutFuture::new(300).await;
    assert!(root.query_selector("canvas").unwrap().is_none());
    root.remove();
}

#[function_component(ActiveReadout)]
fn active_readout() -> Html {
    let nav = use_context::<NavHandle>().unwrap();
    html! { <p id="active-readout">{ nav.active.clone() }</p> }
}

#[function_component(TrackedPage)]
fn tracked_page() -> Html {
    use_section_tracking();
    html! { <section id="about" style="height: 300px;">{ "About" }</section> }
}

/// Mounts `TrackedPage` a little after the provider, like a route change.
#[function_component(LateRoute)]
fn late_route() -> Html {
    let shown = use_state(|| false);
    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(50, move || shown.set(true));
                move || drop(timeout)
            },
            (),
        );
    }
    html! {
        <NavProvider>
            <ActiveReadout />
            if *shown { <TrackedPage /> }
        </NavProvider>
    }
}

#[wasm_bindgen_test]
async fn sections_mounted_after_the_nav_are_tracked() {
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    let root = mount_point();
    let app = yew::Renderer::<LateRoute>::with_root(root.clone()).render();

    TimeoutFuture::new(20).await;
    let readout = root.query_selector("#active-readout").unwrap().unwrap();
    assert_eq!(readout.text_content().unwrap(), "#home");

    TimeoutFuture::new(300).await;
    assert_eq!(readout.text_content().unwrap(), "#about");

    app.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn hero_video_is_muted_for_autoplay() {
    let root = mount_point();
    let app = yew::Renderer::<Hero>::with_root(root.clone()).render();
    TimeoutFuture::new(20).await;

    let video = root
        .query_selector("video")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlVideoElement>()
        .unwrap();
    assert!(video.muted());

    app.destroy();
    root.remove();
}
