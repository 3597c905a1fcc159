//! Active-play simulation: one level's combat per play-state instance
//!
//! The per-tick order is load-bearing: collision and spawn steps must see
//! post-move positions, and the boundary pass must run before the drop
//! bookkeeping that consumes its flags.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{GameOverState, LevelIntroState, PauseState, State, Transition};
use crate::config::{GameConfig, LevelTuning};
use crate::context::GameContext;
use crate::input::Key;
use crate::render::{Color, RenderSink, TextAlign, TextStyle};
use crate::sim::{Bomb, Invader, Rocket, Ship, boxes_overlap, point_in_box};

const SHIP_COLOR: Color = 0x999999;
const INVADER_COLOR: Color = 0x006600;
const BOMB_COLOR: Color = 0xff5555;
const ROCKET_COLOR: Color = 0xff0000;
const DEBUG_COLOR: Color = 0xff0000;

pub struct PlayState {
    config: GameConfig,
    level: u32,
    tuning: LevelTuning,

    ship: Ship,
    invaders: Vec<Invader>,
    rockets: Vec<Rocket>,
    bombs: Vec<Bomb>,

    /// Shared velocity of the whole formation
    formation_velocity: Vec2,
    /// Current speed magnitude; grows by `invader_acceleration` per reversal
    formation_speed: f32,
    dropping: bool,
    drop_travelled: f32,
    /// Horizontal velocity staged for when the current drop completes
    next_velocity: Option<Vec2>,

    /// Sim clock in milliseconds; only advances while this state updates,
    /// so the fire-rate window survives pause round-trips.
    clock_ms: f32,
    last_rocket_ms: Option<f32>,

    rng: Pcg32,
}

impl PlayState {
    pub fn new(config: &GameConfig, level: u32, seed: u64) -> Self {
        let tuning = LevelTuning::derive(config, level);
        Self {
            config: config.clone(),
            level,
            tuning,
            ship: Ship::new(0.0, 0.0),
            invaders: Vec::new(),
            rockets: Vec::new(),
            bombs: Vec::new(),
            formation_velocity: Vec2::ZERO,
            formation_speed: tuning.invader_velocity,
            dropping: false,
            drop_travelled: 0.0,
            next_velocity: None,
            clock_ms: 0.0,
            last_rocket_ms: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Fire if the fire-rate window allows; minimum spacing between rockets
    /// is `1000 / rocket_max_fire_rate` milliseconds.
    fn fire_rocket(&mut self, ctx: &mut GameContext) {
        let window_ms = 1000.0 / self.tuning.rocket_max_fire_rate;
        let ready = match self.last_rocket_ms {
            None => true,
            Some(last) => self.clock_ms - last > window_ms,
        };
        if !ready {
            return;
        }
        // Spawn at the ship's nose.
        self.rockets.push(Rocket::new(
            self.ship.pos.x,
            self.ship.pos.y - 12.0,
            self.config.rocket_velocity,
        ));
        self.last_rocket_ms = Some(self.clock_ms);
        ctx.shots += 1;
        ctx.sounds.play_sound("shoot");
    }

    /// Deterministic flicker color for vis-mode invaders
    fn flicker_color(&self) -> Color {
        let mut h = (self.clock_ms as u32).wrapping_mul(2654435761);
        h ^= h >> 15;
        h & 0x00ff_ffff
    }
}

impl State for PlayState {
    fn name(&self) -> &'static str {
        "play"
    }

    fn enter(&mut self, ctx: &mut GameContext) {
        log::info!(
            "level {} start: {}x{} formation, speed {:.1}",
            self.level,
            self.tuning.rank_count(),
            self.tuning.file_count(),
            self.tuning.invader_velocity
        );

        self.ship = Ship::new(ctx.width / 2.0, ctx.bounds.bottom);

        // Centered grid: horizontal spacing divides 200px by the file
        // count, ranks stack 20px apart from the top of the bounds.
        let files = self.tuning.files;
        self.invaders.clear();
        for rank in 0..self.tuning.rank_count() {
            for file in 0..self.tuning.file_count() {
                self.invaders.push(Invader::new(
                    ctx.width / 2.0 + (files / 2.0 - file as f32) * 200.0 / files,
                    ctx.bounds.top + rank as f32 * 20.0,
                    rank,
                    file,
                ));
            }
        }

        self.formation_speed = self.tuning.invader_velocity;
        self.formation_velocity = Vec2::new(-self.formation_speed, 0.0);
        self.dropping = false;
        self.drop_travelled = 0.0;
        self.next_velocity = None;
    }

    fn update(&mut self, ctx: &mut GameContext, dt: f32) -> Transition {
        self.clock_ms += dt * 1000.0;

        // 1. Ship control from the held-key set, then clamp to bounds.
        if ctx.pressed.is_down(Key::Left) {
            self.ship.pos.x -= self.tuning.ship_speed * dt;
        }
        if ctx.pressed.is_down(Key::Right) {
            self.ship.pos.x += self.tuning.ship_speed * dt;
        }
        if ctx.pressed.is_down(Key::Space) {
            self.fire_rocket(ctx);
        }
        self.ship.pos.x = self.ship.pos.x.clamp(ctx.bounds.left, ctx.bounds.right);

        // 2. Bombs fall; discard past the bottom of the surface.
        let surface_height = ctx.height;
        for bomb in &mut self.bombs {
            bomb.pos.y += bomb.velocity * dt;
        }
        self.bombs.retain(|b| b.pos.y <= surface_height);

        // 3. Rockets climb; discard past the top.
        for rocket in &mut self.rockets {
            rocket.pos.y -= rocket.velocity * dt;
        }
        self.rockets.retain(|r| r.pos.y >= 0.0);

        // 4. Formation advance with formation-wide boundary flags. The
        // first breach freezes the rest of the formation this tick: once
        // any flag is up, no further invader commits its candidate move.
        let mut hit_left = false;
        let mut hit_right = false;
        let mut hit_bottom = false;
        for invader in &mut self.invaders {
            let fresh = invader.pos + self.formation_velocity * dt;
            if !hit_left && fresh.x < ctx.bounds.left {
                hit_left = true;
            } else if !hit_right && fresh.x > ctx.bounds.right {
                hit_right = true;
            } else if !hit_bottom && fresh.y > ctx.bounds.bottom {
                hit_bottom = true;
            }
            if !hit_left && !hit_right && !hit_bottom {
                invader.pos = fresh;
            }
        }

        // 5. Drop-then-reverse bookkeeping.
        if self.dropping {
            self.drop_travelled += self.formation_velocity.y * dt;
            if self.drop_travelled >= self.config.invader_drop_distance {
                self.dropping = false;
                if let Some(velocity) = self.next_velocity.take() {
                    self.formation_velocity = velocity;
                }
                self.drop_travelled = 0.0;
            }
        }
        if hit_left {
            self.formation_speed += self.config.invader_acceleration;
            self.formation_velocity = Vec2::new(0.0, self.formation_speed);
            self.dropping = true;
            self.next_velocity = Some(Vec2::new(self.formation_speed, 0.0));
        }
        if hit_right {
            self.formation_speed += self.config.invader_acceleration;
            self.formation_velocity = Vec2::new(0.0, self.formation_speed);
            self.dropping = true;
            self.next_velocity = Some(Vec2::new(-self.formation_speed, 0.0));
        }
        if hit_bottom {
            ctx.lives = 0;
        }

        // 6. Rocket/invader collisions. The first overlapping rocket kills
        // the invader and is consumed; an invader dies at most once per
        // tick.
        let mut i = 0;
        while i < self.invaders.len() {
            let invader = self.invaders[i];
            let mut bang = false;
            let mut j = 0;
            while j < self.rockets.len() {
                if point_in_box(self.rockets[j].pos, invader.pos, invader.width, invader.height) {
                    self.rockets.remove(j);
                    bang = true;
                    ctx.score += self.config.points_per_invader;
                    ctx.hits += 1;
                    break;
                }
                j += 1;
            }
            if bang {
                self.invaders.remove(i);
                ctx.sounds.play_sound("bang");
            } else {
                i += 1;
            }
        }

        // 7. Bomb spawning: per file, only the surviving invader with the
        // greatest rank (closest to the ship) may drop, with an
        // independent Bernoulli trial per tick.
        let file_count = self.tuning.file_count() as usize;
        let mut front: Vec<Option<usize>> = vec![None; file_count];
        for (idx, invader) in self.invaders.iter().enumerate() {
            let slot = &mut front[invader.file as usize];
            match slot {
                Some(existing) if self.invaders[*existing].rank >= invader.rank => {}
                _ => *slot = Some(idx),
            }
        }
        for idx in front.into_iter().flatten() {
            let invader = self.invaders[idx];
            if self.rng.random::<f32>() < self.tuning.bomb_rate * dt {
                let spread = self.tuning.bomb_max_velocity - self.tuning.bomb_min_velocity;
                let velocity = self.tuning.bomb_min_velocity + self.rng.random::<f32>() * spread;
                self.bombs.push(Bomb::new(
                    invader.pos.x,
                    invader.pos.y + invader.height / 2.0,
                    velocity,
                ));
            }
        }

        // 8. Bomb/ship collisions cost a life each.
        let ship = self.ship;
        self.bombs.retain(|bomb| {
            if point_in_box(bomb.pos, ship.pos, ship.width, ship.height) {
                ctx.lives = ctx.lives.saturating_sub(1);
                ctx.sounds.play_sound("explosion");
                false
            } else {
                true
            }
        });

        // 9. An invader reaching the ship is an instant loss.
        for invader in &self.invaders {
            if boxes_overlap(
                invader.pos,
                invader.width,
                invader.height,
                ship.pos,
                ship.width,
                ship.height,
            ) {
                ctx.lives = 0;
                ctx.sounds.play_sound("explosion");
            }
        }

        // 10. Terminal checks: loss first, then level completion.
        if ctx.lives == 0 {
            return Transition::Replace(Box::new(GameOverState));
        }
        if self.invaders.is_empty() {
            ctx.score += self.level * 50;
            ctx.level = self.level + 1;
            return Transition::Replace(Box::new(LevelIntroState::new(ctx.level)));
        }
        Transition::None
    }

    fn draw(&self, ctx: &GameContext, _dt: f32, sink: &mut dyn RenderSink) {
        sink.clear(ctx.width, ctx.height);

        sink.fill_rect(
            self.ship.pos.x - self.ship.width / 2.0,
            self.ship.pos.y - self.ship.height / 2.0,
            self.ship.width,
            self.ship.height,
            SHIP_COLOR,
        );

        let invader_color = if ctx.vis_mode {
            self.flicker_color()
        } else {
            INVADER_COLOR
        };
        for invader in &self.invaders {
            sink.fill_rect(
                invader.pos.x - invader.width / 2.0,
                invader.pos.y - invader.height / 2.0,
                invader.width,
                invader.height,
                invader_color,
            );
        }

        let projectile_scale = if ctx.vis_mode { 2.0 } else { 1.0 };
        for bomb in &self.bombs {
            sink.fill_rect(
                bomb.pos.x - 2.0,
                bomb.pos.y - 2.0,
                4.0 * projectile_scale,
                4.0 * projectile_scale,
                BOMB_COLOR,
            );
        }
        for rocket in &self.rockets {
            sink.fill_rect(
                rocket.pos.x,
                rocket.pos.y - 2.0,
                projectile_scale,
                4.0 * projectile_scale,
                ROCKET_COLOR,
            );
        }

        // HUD line centered in the strip below the play bounds.
        let text_y = ctx.bounds.bottom + (ctx.height - ctx.bounds.bottom) / 2.0 + 7.0;
        let hud = TextStyle::sized(14.0);
        sink.text(
            &format!("Lives: {}", ctx.lives),
            ctx.bounds.left,
            text_y,
            hud.align(TextAlign::Left),
        );
        sink.text(
            &format!(
                "Score: {}, Level: {}, Hits: {}, Shots: {}",
                ctx.score, ctx.level, ctx.hits, ctx.shots
            ),
            ctx.bounds.right,
            text_y,
            hud.align(TextAlign::Right),
        );

        if self.config.debug_mode {
            sink.stroke_rect(0.0, 0.0, ctx.width, ctx.height, DEBUG_COLOR);
            sink.stroke_rect(
                ctx.bounds.left,
                ctx.bounds.top,
                ctx.bounds.width(),
                ctx.bounds.height(),
                DEBUG_COLOR,
            );
        }
    }

    fn key_down(&mut self, ctx: &mut GameContext, key: Key) -> Transition {
        match key {
            Key::Space => {
                self.fire_rocket(ctx);
                Transition::None
            }
            Key::KeyP => Transition::Push(Box::new(PauseState)),
            _ => Transition::None,
        }
    }
}
