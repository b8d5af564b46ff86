//! Canvas-2D render pass. Reads the match snapshot and the cosmetic
//! state once per frame, after the update; never mutates either.

use game_core::{MatchPhase, MatchState, Side};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::effects::Effects;

const COLOR_BG: &str = "#0b0e14";
const COLOR_LINE: &str = "#2a3142";
const COLOR_PADDLE: &str = "#e8ecf1";
const COLOR_TEXT: &str = "#e8ecf1";
const COLOR_DIM: &str = "#8a93a6";

/// Ball color runs white -> hot as the difficulty multiplier climbs
fn ball_color(multiplier: f32) -> String {
    let t = ((multiplier - 1.0) / 2.0).clamp(0.0, 1.0);
    let g = (236.0 + (90.0 - 236.0) * t) as u8;
    let b = (241.0 + (70.0 - 241.0) * t) as u8;
    format!("rgb(255,{},{})", g, b)
}

pub fn draw(
    ctx: &CanvasRenderingContext2d,
    game: &MatchState,
    fx: &Effects,
    now: f32,
) -> Result<(), JsValue> {
    let w = game.config.arena_width as f64;
    let h = game.config.arena_height as f64;

    ctx.save();
    let shake = fx.shake.offset(now);
    ctx.translate(shake.x as f64, shake.y as f64)?;

    ctx.set_fill_style_str(COLOR_BG);
    ctx.fill_rect(-20.0, -20.0, w + 40.0, h + 40.0);

    // Center line
    ctx.set_fill_style_str(COLOR_LINE);
    let mut y = 10.0;
    while y < h {
        ctx.fill_rect(w / 2.0 - 2.0, y, 4.0, 18.0);
        y += 30.0;
    }

    // Paddles
    ctx.set_fill_style_str(COLOR_PADDLE);
    for side in [Side::Player, Side::Opponent] {
        if let Some(paddle) = game.paddle(side) {
            ctx.fill_rect(
                game.config.paddle_x(side) as f64,
                paddle.y as f64,
                game.config.paddle_width as f64,
                game.config.paddle_height as f64,
            );
        }
    }

    // Trail, oldest and faintest first
    let radius = game.config.ball_radius as f64;
    let color = ball_color(game.difficulty.multiplier);
    for (pos, fade) in fx.trail.iter() {
        ctx.set_global_alpha((fade * 0.35) as f64);
        ctx.set_fill_style_str(&color);
        ctx.begin_path();
        ctx.arc(
            pos.x as f64,
            pos.y as f64,
            radius * (0.4 + 0.6 * fade as f64),
            0.0,
            std::f64::consts::TAU,
        )?;
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);

    // Ball
    if let Some(ball) = game.ball() {
        ctx.set_fill_style_str(&color);
        ctx.begin_path();
        ctx.arc(
            ball.pos.x as f64,
            ball.pos.y as f64,
            radius,
            0.0,
            std::f64::consts::TAU,
        )?;
        ctx.fill();
    }

    // Particles
    for p in fx.particles.iter() {
        ctx.set_global_alpha((p.remaining() * 0.8) as f64);
        ctx.set_fill_style_str(COLOR_PADDLE);
        ctx.fill_rect(
            p.pos.x as f64,
            p.pos.y as f64,
            p.size as f64,
            p.size as f64,
        );
    }
    ctx.set_global_alpha(1.0);

    // Score
    ctx.set_fill_style_str(COLOR_TEXT);
    ctx.set_font("32px monospace");
    ctx.set_text_align("center");
    ctx.fill_text(&game.score.player.to_string(), w / 2.0 - 60.0, 44.0)?;
    ctx.fill_text(&game.score.opponent.to_string(), w / 2.0 + 60.0, 44.0)?;

    draw_overlay(ctx, game, fx, w, h)?;

    ctx.restore();
    Ok(())
}

fn draw_overlay(
    ctx: &CanvasRenderingContext2d,
    game: &MatchState,
    fx: &Effects,
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    ctx.set_text_align("center");
    match game.phase() {
        MatchPhase::Start => {
            ctx.set_fill_style_str(COLOR_TEXT);
            ctx.set_font("24px monospace");
            ctx.fill_text("PRESS SPACE TO START", w / 2.0, h / 2.0 - 40.0)?;
            ctx.set_fill_style_str(COLOR_DIM);
            ctx.set_font("14px monospace");
            ctx.fill_text("arrows move / esc pauses", w / 2.0, h / 2.0 - 14.0)?;
        }
        MatchPhase::Paused => {
            ctx.set_fill_style_str(COLOR_TEXT);
            ctx.set_font("24px monospace");
            ctx.fill_text("PAUSED", w / 2.0, h / 2.0 - 40.0)?;
        }
        MatchPhase::Waiting => {
            ctx.set_fill_style_str(COLOR_DIM);
            ctx.set_font("18px monospace");
            ctx.fill_text("SPACE TO SERVE", w / 2.0, h / 2.0 - 40.0)?;
        }
        MatchPhase::GameOver => {
            ctx.set_global_alpha((fx.fade.progress() * 0.6) as f64);
            ctx.set_fill_style_str("#000000");
            ctx.fill_rect(-20.0, -20.0, w + 40.0, h + 40.0);
            ctx.set_global_alpha(1.0);

            let winner = if game.score.player > game.score.opponent {
                "YOU WIN"
            } else {
                "YOU LOSE"
            };
            ctx.set_fill_style_str(COLOR_TEXT);
            ctx.set_font("28px monospace");
            ctx.fill_text(winner, w / 2.0, h / 2.0 - 40.0)?;
            ctx.set_fill_style_str(COLOR_DIM);
            ctx.set_font("16px monospace");
            ctx.fill_text("SPACE TO RESTART", w / 2.0, h / 2.0 - 10.0)?;
        }
        MatchPhase::Playing => {}
    }
    Ok(())
}
