//! Browser front end for the match simulation.
//!
//! JavaScript owns the requestAnimationFrame loop: it calls `frame` once
//! per display refresh with the callback timestamp and forwards
//! `event.key` strings from keydown/keyup handlers. Everything that
//! matters lives in `game_core`; this crate only translates input,
//! advances cosmetics, and draws.

pub mod effects;
pub mod input;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
mod app {
    use game_core::MatchState;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlCanvasElement;

    use crate::effects::Effects;
    use crate::input;
    use crate::render;

    struct App {
        game: MatchState,
        fx: Effects,
        ctx: web_sys::CanvasRenderingContext2d,
        last_ms: Option<f64>,
    }

    // Single-threaded wasm: one global app slot
    static mut APP: Option<App> = None;

    #[wasm_bindgen]
    pub fn init_game(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let game = MatchState::new(js_sys::Date::now() as u64);
        canvas.set_width(game.config.arena_width as u32);
        canvas.set_height(game.config.arena_height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

        unsafe {
            APP = Some(App {
                game,
                fx: Effects::new(),
                ctx,
                last_ms: None,
            });
        }
        web_sys::console::log_1(&"game initialized".into());
        Ok(())
    }

    /// One display refresh: dt from the callback timestamp, input already
    /// queued, update then render. dt is not clamped; a background tab
    /// hands the simulation the whole gap at once.
    #[wasm_bindgen]
    pub fn frame(now_ms: f64) -> Result<(), JsValue> {
        let app = unsafe { APP.as_mut() }
            .ok_or_else(|| JsValue::from_str("Game not initialized"))?;

        let dt = match app.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        app.last_ms = Some(now_ms);

        app.game.update(dt);

        let ball = app.game.ball();
        let ball_pos = ball.map(|b| b.pos).unwrap_or_default();
        let ball_moving = ball.map(|b| !b.is_parked()).unwrap_or(false);
        app.fx.update(
            dt,
            &app.game.events,
            app.game.phase(),
            ball_pos,
            ball_moving,
        );

        render::draw(&app.ctx, &app.game, &app.fx, (now_ms / 1000.0) as f32)
    }

    #[wasm_bindgen]
    pub fn key_down(key: &str) -> Result<(), JsValue> {
        let app = unsafe { APP.as_mut() }
            .ok_or_else(|| JsValue::from_str("Game not initialized"))?;
        if let Some(cmd) = input::handle_key_down(key) {
            app.game.push_command(cmd);
        }
        Ok(())
    }

    #[wasm_bindgen]
    pub fn key_up(key: &str) -> Result<(), JsValue> {
        let app = unsafe { APP.as_mut() }
            .ok_or_else(|| JsValue::from_str("Game not initialized"))?;
        if let Some(cmd) = input::handle_key_up(key) {
            app.game.push_command(cmd);
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use app::*;
