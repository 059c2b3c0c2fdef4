//! Decorative starfield behind the hero.
//!
//! Four star layers rotate independently; every frame each layer's rotation
//! advances by its constant rate plus a pointer-proportional term scaled by
//! the frame time. Sparkle emitters float in place and do not rotate. The
//! state here is pure; drawing lives in the frontend canvas component.

pub mod camera;
pub mod field;

pub use camera::{Camera, Projected, Vec3};
pub use field::{SparkleSpec, Star, StarLayerSpec, SPARKLES, STAR_LAYERS};

/// Longest frame step fed into the accumulators, so a backgrounded tab does
/// not jump the field when it resumes.
pub const MAX_FRAME_DELTA_S: f64 = 0.1;

const STAR_SIZE_NUMERATOR: f64 = 30.0;
const STAR_TWINKLE_BASE: f64 = 3.0;
const STAR_TWINKLE_PHASE: f64 = 100.0;
const STAR_FADE_CORE: f64 = 0.5;
const SPARKLE_SIZE_FACTOR: f64 = 25.0;
const SPARKLE_DRIFT: f64 = 0.2;
const SPARKLE_NOISE: f64 = 100.0;
const SPARKLE_ALPHA: f64 = 0.85;

/// Pointer position normalised to `[-1, 1]` on both axes, y pointing up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn from_client(
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }

        let inside_x = (left..=left + width).contains(&client_x);
        let inside_y = (top..=top + height).contains(&client_y);
        if !inside_x || !inside_y {
            return None;
        }

        Some(Self {
            x: (client_x - left) / width * 2.0 - 1.0,
            y: -((client_y - top) / height) * 2.0 + 1.0,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

impl Rotation {
    pub fn advanced(self, spec: &StarLayerSpec, delta: f64, pointer: Pointer) -> Self {
        Self {
            x: self.x + delta * spec.rate.0 + pointer.y * delta * spec.pointer_gain,
            y: self.y + delta * spec.rate.1 + pointer.x * delta * spec.pointer_gain,
        }
    }
}

pub struct StarLayer {
    pub spec: StarLayerSpec,
    pub rotation: Rotation,
    stars: Vec<Star>,
}

impl StarLayer {
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

pub struct SparkleCloud {
    pub spec: SparkleSpec,
    points: Vec<Vec3>,
}

impl SparkleCloud {
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite<'a> {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alpha: f64,
    pub color: &'a str,
}

pub struct SceneState {
    layers: Vec<StarLayer>,
    clouds: Vec<SparkleCloud>,
    elapsed: f64,
}

impl SceneState {
    pub fn new(seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);

        let layers = STAR_LAYERS
            .iter()
            .map(|spec| StarLayer {
                spec: *spec,
                rotation: Rotation::default(),
                stars: field::generate_stars(spec, &mut rng),
            })
            .collect();
        let clouds = SPARKLES
            .iter()
            .map(|spec| SparkleCloud {
                spec: *spec,
                points: field::generate_sparkles(spec, &mut rng),
            })
            .collect();

        Self {
            layers,
            clouds,
            elapsed: 0.0,
        }
    }

    pub fn layers(&self) -> &[StarLayer] {
        &self.layers
    }

    pub fn clouds(&self) -> &[SparkleCloud] {
        &self.clouds
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn star_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.stars.len()).sum()
    }

    pub fn sparkle_count(&self) -> usize {
        self.clouds.iter().map(|cloud| cloud.points.len()).sum()
    }

    pub fn advance(&mut self, delta: f64, pointer: Pointer) {
        let delta = if delta.is_finite() {
            delta.clamp(0.0, MAX_FRAME_DELTA_S)
        } else {
            0.0
        };

        self.elapsed += delta;
        for layer in &mut self.layers {
            layer.rotation = layer.rotation.advanced(&layer.spec, delta, pointer);
        }
    }

    /// Projects every visible star and sparkle, back layers first.
    pub fn for_each_sprite<'a, F>(&'a self, camera: &Camera, mut draw: F)
    where
        F: FnMut(Sprite<'a>),
    {
        for layer in self.layers.iter().rev() {
            let twinkle = STAR_TWINKLE_BASE
                + (self.elapsed * layer.spec.twinkle_speed + STAR_TWINKLE_PHASE).sin();
            let core = if layer.spec.fade { STAR_FADE_CORE } else { 1.0 };

            for star in &layer.stars {
                let world = star.position.rotated(layer.rotation.x, layer.rotation.y);
                let Some(projected) = camera.project(world) else {
                    continue;
                };

                draw(Sprite {
                    x: projected.x,
                    y: projected.y,
                    size: star.size * (STAR_SIZE_NUMERATOR / projected.depth) * twinkle * core,
                    alpha: 1.0,
                    color: &star.color,
                });
            }
        }

        for cloud in &self.clouds {
            let origin = Vec3::new(0.0, 0.0, cloud.spec.z);
            for point in &cloud.points {
                let phase = self.elapsed * cloud.spec.speed + point.x * SPARKLE_NOISE;
                let drift = Vec3::new(
                    phase.cos() * SPARKLE_DRIFT,
                    phase.sin() * SPARKLE_DRIFT,
                    phase.cos() * SPARKLE_DRIFT,
                );
                let world = point.offset(origin).offset(drift);
                let Some(projected) = camera.project(world) else {
                    continue;
                };

                draw(Sprite {
                    x: projected.x,
                    y: projected.y,
                    size: cloud.spec.size * SPARKLE_SIZE_FACTOR * camera.pixel_ratio
                        / projected.depth,
                    alpha: SPARKLE_ALPHA,
                    color: cloud.spec.color,
                });
            }
        }
    }
}
