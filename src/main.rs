//! Ring Arena entry point
//!
//! Web: draws to a 2D canvas and ticks once per animation frame.
//! Native: runs a headless session and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;

    use glam::DVec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use ring_arena::WorldSettings;
    use ring_arena::renderer::Frame;
    use ring_arena::sim::{ClickOutcome, PinSelector, World, tick};

    const CANVAS_ID: &str = "game-canvas";

    /// Game instance holding all state
    struct Game {
        world: World,
        selector: PinSelector,
        ctx: CanvasRenderingContext2d,
    }

    impl Game {
        /// Draw the current frame: rings first, pins (with margin) on top
        fn render(&self) -> Result<(), JsValue> {
            let frame = Frame::capture(&self.world);
            let ctx = &self.ctx;
            ctx.clear_rect(0.0, 0.0, frame.width, frame.height);

            for ring in &frame.rings {
                ctx.begin_path();
                ctx.set_stroke_style_str(&ring.stroke.to_string());
                ctx.set_line_width(ring.stroke_width);
                ctx.arc(ring.center.x, ring.center.y, ring.radius, 0.0, TAU)?;
                ctx.stroke();
            }

            for pin in &frame.pins {
                ctx.begin_path();
                ctx.set_fill_style_str(&pin.margin_color.to_string());
                ctx.arc(pin.center.x, pin.center.y, pin.margin_radius, 0.0, TAU)?;
                ctx.fill();

                ctx.begin_path();
                ctx.set_fill_style_str(&pin.fill.to_hex());
                ctx.arc(pin.center.x, pin.center.y, pin.radius, 0.0, TAU)?;
                ctx.fill();
            }

            Ok(())
        }

        fn on_click(&mut self, point: DVec2) {
            match self.selector.click(&mut self.world, point) {
                ClickOutcome::Armed(i) => log::info!("Pin {} armed", i),
                ClickOutcome::Relocated(i) => log::info!("Pin {} placed", i),
                ClickOutcome::Missed => {}
            }
        }
    }

    fn window() -> Result<web_sys::Window, JsValue> {
        web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
    }

    fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
        window()?.request_animation_frame(f.as_ref().unchecked_ref())
    }

    pub fn run() -> Result<(), JsValue> {
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let settings = WorldSettings::with_seed(seed);
        canvas.set_width(settings.canvas_width as u32);
        canvas.set_height(settings.canvas_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let world = World::new(settings).map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Started new arena with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            world,
            selector: PinSelector::new(),
            ctx,
        }));

        setup_mouse(game.clone(), canvas)?;
        start_loop(game)
    }

    fn setup_mouse(game: Rc<RefCell<Game>>, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let target = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let point = DVec2::new(
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
            );
            game.borrow_mut().on_click(point);
        });
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn start_loop(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let next: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let first = next.clone();

        *first.borrow_mut() = Some(Closure::new(move || {
            {
                let mut g = game.borrow_mut();
                tick(&mut g.world);
                if let Err(e) = g.render() {
                    log::error!("Render error: {:?}", e);
                }
            }
            if let Some(cb) = next.borrow().as_ref() {
                if let Err(e) = request_animation_frame(cb) {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                }
            }
        }));

        match first.borrow().as_ref() {
            Some(cb) => request_animation_frame(cb).map(|_| ()),
            None => Ok(()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Length of a headless session
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_TICKS: u64 = 600;
/// Ticks between summary lines
#[cfg(not(target_arch = "wasm32"))]
const REPORT_EVERY: u64 = 120;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(e) = run_headless() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// `ring-arena [seed] [settings.json]`
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() -> Result<(), Box<dyn std::error::Error>> {
    use glam::DVec2;
    use ring_arena::WorldSettings;
    use ring_arena::sim::{PinSelector, TickStats, World, tick};

    let mut args = std::env::args().skip(1);
    let seed = args.next().map(|s| s.parse::<u64>()).transpose()?;
    let mut settings = match args.next() {
        Some(path) => {
            log::info!("Loading settings from {}", path);
            WorldSettings::from_json(&std::fs::read_to_string(&path)?)?
        }
        None => WorldSettings::default(),
    };
    if let Some(seed) = seed {
        settings.seed = seed;
    }

    log::info!("Ring Arena (native) starting headless run...");
    let mut world = World::new(settings)?;
    let mut selector = PinSelector::new();
    let mut totals = TickStats::default();

    for t in 1..=HEADLESS_TICKS {
        let stats = tick(&mut world);
        totals.wall_hits += stats.wall_hits;
        totals.pin_hits += stats.pin_hits;
        totals.ring_hits += stats.ring_hits;

        // Halfway through, move the first pin to the middle of the canvas
        if t == HEADLESS_TICKS / 2 {
            if let Some(pin) = world.pins.first() {
                let grab = pin.pos();
                let center = DVec2::new(
                    world.settings.canvas_width / 2.0,
                    world.settings.canvas_height / 2.0,
                );
                selector.click(&mut world, grab);
                selector.click(&mut world, center);
            }
        }

        if t % REPORT_EVERY == 0 {
            log::info!(
                "tick {:>4}: energy {:>8.3}, hits wall/pin/ring {}/{}/{}",
                world.tick_count(),
                world.kinetic_energy(),
                totals.wall_hits,
                totals.pin_hits,
                totals.ring_hits
            );
        }
    }

    if !world.is_finite() {
        return Err("simulation produced non-finite state".into());
    }

    for (i, ring) in world.rings.iter().enumerate() {
        println!(
            "ring {}: pos ({:.2}, {:.2}) vel ({:.3}, {:.3}) color {}",
            i,
            ring.pos().x,
            ring.pos().y,
            ring.vel().x,
            ring.vel().y,
            ring.color
        );
    }
    Ok(())
}
