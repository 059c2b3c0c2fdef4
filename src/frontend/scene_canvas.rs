use super::dom;
use crate::config::SiteConfig;
use crate::error::FrontendError;
use crate::logging::log_event;
use crate::scene::{Camera, Pointer, SceneState, Sprite};
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use log::Level;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

const BACKGROUND: &str = "#000000";
// Below this diameter a square is indistinguishable from a disc.
const MIN_ARC_DIAMETER_PX: f64 = 2.0;

struct Starfield {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    scene: RefCell<SceneState>,
    camera: Cell<Camera>,
    pointer: Cell<Pointer>,
    last_tick_ms: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Starfield {
    fn mount(canvas: HtmlCanvasElement, seed: u64) -> Result<Rc<Self>, FrontendError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(FrontendError::CanvasContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FrontendError::CanvasContextUnavailable)?;

        let starfield = Rc::new(Self {
            canvas,
            context,
            scene: RefCell::new(SceneState::new(seed)),
            camera: Cell::new(Camera::new(1.0, 1.0, 1.0)),
            pointer: Cell::new(Pointer::default()),
            last_tick_ms: Cell::new(None),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });

        starfield.resize();
        starfield.install_listeners();
        starfield.schedule();
        Ok(starfield)
    }

    /// Sizes the backing store in device pixels; the camera works in the same units.
    fn resize(&self) {
        let rect = self.canvas.get_bounding_client_rect();
        let ratio = dom::device_pixel_ratio();
        let width = (rect.width().max(1.0) * ratio).round();
        let height = (rect.height().max(1.0) * ratio).round();

        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.camera.set(Camera::new(width, height, ratio));
    }

    fn install_listeners(self: &Rc<Self>) {
        let Some(win) = dom::window() else {
            return;
        };

        let weak = Rc::downgrade(self);
        let on_resize = EventListener::new(&win, "resize", move |_| {
            if let Some(view) = Weak::upgrade(&weak) {
                view.resize();
            }
        });

        // The hero copy sits above the canvas, so track the pointer on the window
        // and keep only positions inside the canvas rectangle.
        let weak = Rc::downgrade(self);
        let on_pointer = EventListener::new(&win, "mousemove", move |event| {
            let Some(view) = Weak::upgrade(&weak) else {
                return;
            };
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };

            let rect = view.canvas.get_bounding_client_rect();
            if let Some(pointer) = Pointer::from_client(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            ) {
                view.pointer.set(pointer);
            }
        });

        self.listeners.borrow_mut().extend([on_resize, on_pointer]);
    }

    fn schedule(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| view.tick(timestamp));
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();

        let delta = self
            .last_tick_ms
            .replace(Some(timestamp))
            .map(|previous| (timestamp - previous).max(0.0) / 1000.0)
            .unwrap_or(0.0);
        self.scene.borrow_mut().advance(delta, self.pointer.get());

        if let Err(error) = self.draw() {
            log_event(Level::Warn, "scene_unavailable", json!({ "error": error.to_string() }));
            self.stop();
            return;
        }

        self.schedule();
    }

    fn draw(&self) -> Result<(), FrontendError> {
        let camera = self.camera.get();
        let context = &self.context;

        context.set_global_composite_operation("source-over")?;
        context.set_global_alpha(1.0);
        context.set_fill_style_str(BACKGROUND);
        context.fill_rect(0.0, 0.0, camera.width, camera.height);
        context.set_global_composite_operation("lighter")?;

        let mut result = Ok(());
        self.scene.borrow().for_each_sprite(&camera, |sprite| {
            if result.is_ok() {
                result = draw_sprite(context, sprite);
            }
        });
        result
    }

    fn stop(&self) {
        self.frame.borrow_mut().take();
        self.listeners.borrow_mut().clear();
    }
}

fn draw_sprite(context: &CanvasRenderingContext2d, sprite: Sprite<'_>) -> Result<(), FrontendError> {
    context.set_global_alpha(sprite.alpha);
    context.set_fill_style_str(sprite.color);

    if sprite.size < MIN_ARC_DIAMETER_PX {
        let half = sprite.size / 2.0;
        context.fill_rect(sprite.x - half, sprite.y - half, sprite.size, sprite.size);
        return Ok(());
    }

    context.begin_path();
    context.arc(sprite.x, sprite.y, sprite.size / 2.0, 0.0, TAU)?;
    context.fill();
    Ok(())
}

fn start(canvas_ref: &NodeRef, seed: u64) -> Result<Rc<Starfield>, FrontendError> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or(FrontendError::CanvasNotMounted)?;
    Starfield::mount(canvas, seed)
}

/// Animated star layers and sparkles filling the hero background.
#[function_component(StarfieldCanvas)]
pub fn starfield_canvas() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let canvas_ref = use_node_ref();
    let available = use_state_eq(|| true);

    {
        let canvas_ref = canvas_ref.clone();
        let available = available.clone();
        use_effect_with(config.starfield_seed, move |seed| {
            let starfield = match start(&canvas_ref, *seed) {
                Ok(starfield) => {
                    let (stars, sparkles) = {
                        let scene = starfield.scene.borrow();
                        (scene.star_count(), scene.sparkle_count())
                    };
                    log_event(
                        Level::Info,
                        "scene_started",
                        json!({ "stars": stars, "sparkles": sparkles, "seed": seed }),
                    );
                    Some(starfield)
                }
                Err(error) => {
                    log_event(
                        Level::Warn,
                        "scene_unavailable",
                        json!({ "error": error.to_string() }),
                    );
                    available.set(false);
                    None
                }
            };

            move || {
                if let Some(starfield) = starfield {
                    starfield.stop();
                }
            }
        });
    }

    if !*available {
        return Html::default();
    }

    html! {
        <canvas ref={canvas_ref} class="starfield" aria-hidden="true" />
    }
}
