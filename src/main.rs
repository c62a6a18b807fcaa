use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::logging::{debug, info, warn};
use macroquad::prelude::*;

mod canvas;
mod chaos;
mod color;
mod geometry;
mod input;
mod trace;

use canvas::Canvas;
use chaos::{ChaosGame, QuadRand, Step};
use input::KeyRepeat;
use trace::TraceLog;

const SCREEN_WIDTH: u32 = 900;
const SCREEN_HEIGHT: u32 = 900;
const INITIAL_SIDES: usize = 4;
const INITIAL_JUMP: f64 = 2.0; // Halfway to the vertex, the classic Sierpinski ratio
const JUMP_STEP: f64 = 0.01; // Jump ratio change per Left/Right press
const TRACE_PATH: &str = "log.txt"; // Relative to the working directory, overwritten every run
const TEXT_SIZE: f32 = 20.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Chaos Game".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn draw_command_summary() {
    let lines = [
        "Chaos Game Controls:",
        "Left/Right - Shrink/grow jump ratio",
        "Up/Down    - Add/remove a vertex",
        "Space      - Clear the canvas",
        "R          - Cycle chaos rule",
        "P          - Pause/unpause",
        "/          - Toggle help display",
        "Q          - Quit program",
    ];

    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 24.0 + i as f32 * TEXT_SIZE, TEXT_SIZE, WHITE);
    }
}

fn draw_vertex_markers(game: &ChaosGame) {
    for vertex in game.polygon().vertices() {
        draw_circle_lines(vertex.x as f32, vertex.y as f32, 6.0, 1.0, GRAY);
    }
}

fn draw_status(game: &ChaosGame, paused: bool) {
    let status = format!(
        "Sides: {}  Jump: {:.2}  Rule: {}{}",
        game.sides(),
        game.jump(),
        game.rule().display_name(),
        if paused { "  [PAUSED]" } else { "" },
    );
    let y = screen_height() - 10.0;
    let dims = measure_text(&status, None, TEXT_SIZE as u16, 1.0);
    draw_rectangle(
        5.0,
        y - dims.height - 5.0,
        dims.width + 10.0,
        dims.height + 10.0,
        Color::new(0.0, 0.0, 0.0, 0.6),
    );
    draw_text(&status, 10.0, y, TEXT_SIZE, WHITE);
}

fn seed_rng() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut seed = nanos.wrapping_add((get_time() * 1_000_000.0) as u64);
    seed = seed.wrapping_mul(0x5bd1e995);
    seed ^= seed >> 15;
    seed = seed.wrapping_mul(0x5bd1e995);

    info!("RNG seeded with: {}", seed);
    rand::srand(seed);
}

fn open_trace() -> Option<TraceLog> {
    match TraceLog::create(TRACE_PATH) {
        Ok(log) => Some(log),
        Err(e) => {
            warn!("{}; continuing without a trace log", e);
            None
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    seed_rng();
    prevent_quit();

    let mut chance = QuadRand;
    let mut game = ChaosGame::new(
        INITIAL_SIDES,
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        INITIAL_JUMP,
        &mut chance,
    );
    let mut canvas = Canvas::new(SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16);
    let texture = Texture2D::from_image(canvas.image());
    texture.set_filter(FilterMode::Nearest);

    let mut trace = open_trace();
    let mut grow_jump = KeyRepeat::new(KeyCode::Right);
    let mut shrink_jump = KeyRepeat::new(KeyCode::Left);
    let mut paused = false;
    let mut show_help = false;

    info!(
        "Starting with {} sides, jump ratio {}",
        game.sides(),
        game.jump()
    );

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Q) {
            break;
        }

        let now = get_time();
        if grow_jump.fired(now) {
            let jump = game.nudge_jump(JUMP_STEP);
            debug!("Jump ratio: {:.2}", jump);
        }
        if shrink_jump.fired(now) {
            let jump = game.nudge_jump(-JUMP_STEP);
            debug!("Jump ratio: {:.2}", jump);
        }

        if is_key_pressed(KeyCode::Space) {
            canvas.clear();
        }

        if is_key_released(KeyCode::Up) {
            game.add_side();
            info!("Sides: {}", game.sides());
        }
        if is_key_released(KeyCode::Down) && game.remove_side() {
            info!("Sides: {}", game.sides());
        }

        if is_key_pressed(KeyCode::R) {
            let rule = game.cycle_rule();
            info!("Chaos rule: {}", rule.display_name());
        }

        if is_key_pressed(KeyCode::P) {
            paused = !paused;
            info!("Paused: {}", paused);
        }

        if is_key_pressed(KeyCode::Slash) {
            show_help = !show_help;
        }

        if !paused {
            match game.step(&mut chance) {
                Step::Resync => {
                    debug!("Vertex index resynced to {}", game.prev_index());
                }
                Step::Plot {
                    index,
                    point,
                    color,
                } => {
                    if let Some(Err(e)) = trace.as_mut().map(|log| log.record(index)) {
                        warn!("{}; disabling trace log", e);
                        trace = None;
                    }
                    canvas.plot(point.pixel(), color.into());
                }
            }
        }

        if canvas.take_dirty() {
            texture.update(canvas.image());
        }

        clear_background(BLACK);
        draw_texture(&texture, 0.0, 0.0, WHITE);

        if show_help {
            draw_vertex_markers(&game);
            draw_command_summary();
        }
        draw_status(&game, paused);

        next_frame().await
    }

    if let Some(Err(e)) = trace.as_mut().map(|log| log.flush()) {
        warn!("{}", e);
    }
    info!("Quitting");
}
