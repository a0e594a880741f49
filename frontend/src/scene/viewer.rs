use crate::error::{SiteError, SiteResult};
use crate::scene::frame_loop::FrameLoop;
use crate::scene::gl::Renderer;
use crate::scene::model::{sphere, Model};
use crate::scene::motion::{ModelPose, MotionParams};
use crate::scene::orbit::{OrbitCamera, OrbitParams};
use gloo_net::http::Request;
use glam::{Mat4, Vec3};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::{HtmlCanvasElement, PointerEvent};
use yew::prelude::*;

const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.5, 1.6);
const MARKER_POSITION: Vec3 = Vec3::new(0.0, 0.5, 0.0);
const MARKER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

#[derive(Properties, PartialEq)]
pub struct ModelViewerProps {
    pub asset: AttrValue,
    pub hover: bool,
    pub base_scale: f32,
}

struct ViewerState {
    hover: bool,
    base_scale: f32,
    pose: ModelPose,
    params: MotionParams,
    centering: Mat4,
    orbit: OrbitCamera,
    drag_from: Option<(f32, f32)>,
    started_at: f64,
}

impl ViewerState {
    fn new(base_scale: f32) -> Self {
        Self {
            hover: false,
            base_scale,
            pose: ModelPose::resting(base_scale),
            params: MotionParams::default(),
            centering: Mat4::IDENTITY,
            orbit: OrbitCamera::looking_from(CAMERA_EYE, OrbitParams::default()),
            drag_from: None,
            started_at: now_ms(),
        }
    }

    fn elapsed_secs(&self) -> f32 {
        ((now_ms() - self.started_at) / 1000.0) as f32
    }

    fn render(&mut self, renderer: &Renderer, device_pixel_ratio: f64) {
        self.orbit.update();
        let elapsed = self.elapsed_secs();
        self.pose = self
            .pose
            .advance(elapsed, self.hover, self.base_scale, &self.params);

        let aspect = renderer.fit_to_canvas(device_pixel_ratio);
        let view_projection = self.orbit.projection(aspect) * self.orbit.view_matrix();
        renderer.draw(
            view_projection,
            self.pose.matrix(self.centering),
            self.hover.then_some(MARKER_POSITION),
        );
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

async fn fetch_model(path: &str) -> SiteResult<Model> {
    let response = Request::get(path).send().await?;
    if !response.ok() {
        return Err(SiteError::AssetStatus {
            path: path.to_string(),
            status: response.status(),
        });
    }
    let bytes = response.binary().await?;
    Model::from_glb(&bytes)
}

/// Rotating, floating rendering of a GLB asset on a transparent canvas.
/// Anything that goes wrong while loading leaves the canvas blank.
#[function_component(ModelViewer)]
pub fn model_viewer(props: &ModelViewerProps) -> Html {
    let canvas_ref = use_node_ref();
    let state = {
        let base_scale = props.base_scale;
        use_mut_ref(move || ViewerState::new(base_scale))
    };

    // Props feed the frame loop through the shared state
    {
        let state = state.clone();
        use_effect_with_deps(
            move |(hover, base_scale): &(bool, f32)| {
                let mut state = state.borrow_mut();
                state.hover = *hover;
                if (state.base_scale - *base_scale).abs() > f32::EPSILON {
                    state.base_scale = *base_scale;
                    state.pose = state.pose.rescaled(*base_scale);
                }
                || ()
            },
            (props.hover, props.base_scale),
        );
    }

    {
        let state = state.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |asset: &AttrValue| {
                // Cleared on teardown; late fetches and frames check it
                let live = Rc::new(Cell::new(true));

                let renderer = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or_else(|| SiteError::Dom("canvas is not mounted".into()))
                    .and_then(Renderer::new);

                let frames = match renderer {
                    Ok(mut renderer) => {
                        if let Err(e) = renderer.set_marker(&sphere(0.15, 8, 8, MARKER_COLOR)) {
                            log::warn!("Hover marker unavailable: {}", e);
                        }
                        let renderer = Rc::new(RefCell::new(renderer));

                        {
                            let state = state.clone();
                            let renderer = renderer.clone();
                            let live = live.clone();
                            let path = crate::config::get_asset_url(asset);
                            wasm_bindgen_futures::spawn_local(async move {
                                let loaded = fetch_model(&path).await;
                                if !live.get() {
                                    return;
                                }
                                let mut state = state.borrow_mut();
                                match loaded.and_then(|model| {
                                    renderer.borrow_mut().set_model(&model.parts)?;
                                    Ok(model)
                                }) {
                                    Ok(model) => {
                                        state.centering = model.centering();
                                        state.pose = ModelPose::resting(state.base_scale);
                                    }
                                    Err(e) => log::warn!("Model {} not shown: {}", path, e),
                                }
                            });
                        }

                        let live = live.clone();
                        FrameLoop::start(move || {
                            if !live.get() {
                                return;
                            }
                            let ratio = web_sys::window()
                                .map(|w| w.device_pixel_ratio())
                                .unwrap_or(1.0);
                            state.borrow_mut().render(&renderer.borrow(), ratio);
                        })
                        .map_err(|e| log::warn!("3D viewer not animated: {}", e))
                        .ok()
                    }
                    Err(e) => {
                        log::warn!("3D viewer disabled: {}", e);
                        None
                    }
                };

                move || {
                    live.set(false);
                    drop(frames);
                }
            },
            props.asset.clone(),
        );
    }

    let onpointerdown = {
        let state = state.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |e: PointerEvent| {
            state.borrow_mut().drag_from = Some((e.client_x() as f32, e.client_y() as f32));
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(err) = canvas.set_pointer_capture(e.pointer_id()) {
                    log::debug!("set_pointer_capture failed: {:?}", err);
                }
            }
        })
    };

    let onpointermove = {
        let state = state.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |e: PointerEvent| {
            let mut state = state.borrow_mut();
            let Some((x, y)) = state.drag_from else {
                return;
            };
            let (nx, ny) = (e.client_x() as f32, e.client_y() as f32);
            let height = canvas_ref
                .cast::<HtmlCanvasElement>()
                .map(|c| c.client_height() as f32)
                .unwrap_or(0.0);
            state.orbit.drag(nx - x, ny - y, height);
            state.drag_from = Some((nx, ny));
        })
    };

    let end_drag = {
        let state = state.clone();
        Callback::from(move |_: PointerEvent| {
            state.borrow_mut().drag_from = None;
        })
    };

    html! {
        <canvas
            ref={canvas_ref}
            class="model-viewer"
            style="width: 100%; height: 100%; display: block; margin: 0; padding: 0; touch-action: pan-y;"
            {onpointerdown}
            {onpointermove}
            onpointerup={end_drag.clone()}
            onpointercancel={end_drag}
        />
    }
}
