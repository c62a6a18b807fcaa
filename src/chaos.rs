use macroquad::rand;

use crate::color::Rgba;
use crate::geometry::{Polygon, Vertex};

pub const MIN_SIDES: usize = 3;
pub const MIN_JUMP: f64 = 1.0;

/// Source of the coin flips and index picks the rules consume.
pub trait Chance {
    fn coin(&mut self) -> bool;
    /// Uniform index in `0..n`.
    fn below(&mut self, n: usize) -> usize;
}

/// Global macroquad generator, seeded once at startup.
pub struct QuadRand;

impl Chance for QuadRand {
    fn coin(&mut self) -> bool {
        rand::gen_range(0, 2) == 1
    }

    fn below(&mut self, n: usize) -> usize {
        rand::gen_range(0, n as u32) as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChaosRule {
    SkipTwo,        // Walk two vertices left or right
    Neighbor,       // Walk one vertex left or right
    DistinctRandom, // Any vertex but the current one
}

impl ChaosRule {
    pub fn next(self) -> Self {
        match self {
            ChaosRule::SkipTwo => ChaosRule::Neighbor,
            ChaosRule::Neighbor => ChaosRule::DistinctRandom,
            ChaosRule::DistinctRandom => ChaosRule::SkipTwo,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ChaosRule::SkipTwo => "Skip two",
            ChaosRule::Neighbor => "Neighbor",
            ChaosRule::DistinctRandom => "Distinct random",
        }
    }

    fn walk_stride(self) -> Option<i64> {
        match self {
            ChaosRule::SkipTwo => Some(2),
            ChaosRule::Neighbor => Some(1),
            ChaosRule::DistinctRandom => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn pixel(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }

    /// Moves `1 / jump` of the way toward `target`.
    pub fn jump_toward(self, target: Vertex, jump: f64) -> Point {
        let dx = self.x - target.x as f64;
        let dy = self.y - target.y as f64;
        Point {
            x: self.x - dx / jump,
            y: self.y - dy / jump,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// The previous index fell outside a shrunken polygon and was re-picked.
    Resync,
    Plot {
        /// Vertex the point jumped toward.
        index: usize,
        point: Point,
        color: Rgba,
    },
}

/// Everything the render loop mutates between frames.
#[derive(Clone, Debug)]
pub struct ChaosGame {
    polygon: Polygon,
    width: u32,
    height: u32,
    point: Point,
    prev_index: usize,
    next_index: usize,
    jump: f64,
    rule: ChaosRule,
}

impl ChaosGame {
    pub fn new(
        sides: usize,
        width: u32,
        height: u32,
        jump: f64,
        chance: &mut impl Chance,
    ) -> Self {
        let sides = sides.max(MIN_SIDES);
        let point = Point {
            x: chance.below(width as usize) as f64,
            y: chance.below(height as usize) as f64,
        };
        Self {
            polygon: Polygon::inscribed(sides, width, height),
            width,
            height,
            point,
            prev_index: chance.below(sides),
            next_index: 0,
            jump: jump.max(MIN_JUMP),
            rule: ChaosRule::SkipTwo,
        }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn sides(&self) -> usize {
        self.polygon.sides()
    }

    pub fn jump(&self) -> f64 {
        self.jump
    }

    pub fn rule(&self) -> ChaosRule {
        self.rule
    }

    #[cfg(test)]
    fn point(&self) -> Point {
        self.point
    }

    pub fn prev_index(&self) -> usize {
        self.prev_index
    }

    pub fn set_rule(&mut self, rule: ChaosRule) {
        self.rule = rule;
    }

    pub fn cycle_rule(&mut self) -> ChaosRule {
        self.set_rule(self.rule.next());
        self.rule
    }

    #[cfg(test)]
    fn set_prev_index(&mut self, index: usize) {
        self.prev_index = index;
    }

    /// Rebuilds the vertex set. Indices are left alone; `step` resyncs stale ones.
    pub fn set_sides(&mut self, sides: usize) {
        let sides = sides.max(MIN_SIDES);
        self.polygon = Polygon::inscribed(sides, self.width, self.height);
    }

    pub fn add_side(&mut self) {
        self.set_sides(self.sides() + 1);
    }

    /// Returns false when already at the minimum.
    pub fn remove_side(&mut self) -> bool {
        if self.sides() > MIN_SIDES {
            self.set_sides(self.sides() - 1);
            true
        } else {
            false
        }
    }

    pub fn nudge_jump(&mut self, delta: f64) -> f64 {
        self.jump = (self.jump + delta).max(MIN_JUMP);
        self.jump
    }

    fn pick_next_index(&mut self, chance: &mut impl Chance) -> usize {
        let sides = self.sides();
        match self.rule.walk_stride() {
            Some(stride) => {
                let stride = if chance.coin() { stride } else { -stride };
                (self.next_index as i64 + stride).rem_euclid(sides as i64) as usize
            }
            None => loop {
                let candidate = chance.below(sides);
                if candidate != self.prev_index {
                    break candidate;
                }
            },
        }
    }

    pub fn step(&mut self, chance: &mut impl Chance) -> Step {
        let sides = self.sides();
        let target = match self.polygon.vertex(self.prev_index) {
            Some(target) => target,
            None => {
                self.prev_index = chance.below(sides);
                self.next_index = 0;
                return Step::Resync;
            }
        };

        self.next_index = self.pick_next_index(chance);

        let index = self.prev_index;
        let color = Rgba::for_vertex(index, sides);
        let point = self.point.jump_toward(target, self.jump);

        self.point = point;
        self.prev_index = self.next_index;

        Step::Plot {
            index,
            point,
            color,
        }
    }
}
