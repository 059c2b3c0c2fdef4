use super::camera::Vec3;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarLayerSpec {
    pub radius: f64,
    pub depth: f64,
    pub count: usize,
    pub factor: f64,
    pub saturation: f64,
    pub fade: bool,
    pub twinkle_speed: f64,
    /// Constant rotation rate (radians per second) about x and y.
    pub rate: (f64, f64),
    /// Extra rotation per second per unit of normalised pointer offset.
    pub pointer_gain: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkleSpec {
    pub count: usize,
    pub scale: f64,
    pub size: f64,
    pub speed: f64,
    pub color: &'static str,
    pub z: f64,
}

pub const STAR_LAYERS: [StarLayerSpec; 4] = [
    StarLayerSpec {
        radius: 225.0,
        depth: 75.0,
        count: 3000,
        factor: 9.0,
        saturation: 0.5,
        fade: true,
        twinkle_speed: 1.0,
        rate: (0.01, 0.02),
        pointer_gain: 0.1,
    },
    StarLayerSpec {
        radius: 375.0,
        depth: 120.0,
        count: 2000,
        factor: 13.5,
        saturation: 0.6,
        fade: true,
        twinkle_speed: 0.5,
        rate: (0.005, 0.01),
        pointer_gain: 0.05,
    },
    StarLayerSpec {
        radius: 525.0,
        depth: 150.0,
        count: 1000,
        factor: 18.0,
        saturation: 0.7,
        fade: true,
        twinkle_speed: 0.3,
        rate: (0.002, 0.003),
        pointer_gain: 0.02,
    },
    StarLayerSpec {
        radius: 750.0,
        depth: 225.0,
        count: 500,
        factor: 22.5,
        saturation: 0.8,
        fade: true,
        twinkle_speed: 0.2,
        rate: (0.001, 0.002),
        pointer_gain: 0.01,
    },
];

pub const SPARKLES: [SparkleSpec; 13] = [
    // blues
    SparkleSpec { count: 600, scale: 30.0, size: 3.0, speed: 0.3, color: "#00BFFF", z: 0.0 },
    SparkleSpec { count: 500, scale: 25.0, size: 2.7, speed: 0.4, color: "#1E90FF", z: 1.0 },
    SparkleSpec { count: 400, scale: 20.0, size: 2.25, speed: 0.5, color: "#4169E1", z: 2.0 },
    // purples
    SparkleSpec { count: 500, scale: 28.0, size: 2.7, speed: 0.4, color: "#9370DB", z: 0.0 },
    SparkleSpec { count: 400, scale: 23.0, size: 2.25, speed: 0.5, color: "#BA55D3", z: 1.0 },
    SparkleSpec { count: 300, scale: 18.0, size: 1.8, speed: 0.6, color: "#DA70D6", z: 2.0 },
    // reds and oranges
    SparkleSpec { count: 500, scale: 26.0, size: 2.55, speed: 0.5, color: "#FF4500", z: 0.0 },
    SparkleSpec { count: 400, scale: 21.0, size: 2.1, speed: 0.6, color: "#FF7F50", z: 1.0 },
    SparkleSpec { count: 300, scale: 16.0, size: 1.65, speed: 0.7, color: "#FFA500", z: 2.0 },
    // greens
    SparkleSpec { count: 400, scale: 24.0, size: 2.4, speed: 0.4, color: "#00FA9A", z: 0.0 },
    SparkleSpec { count: 300, scale: 19.0, size: 1.95, speed: 0.5, color: "#3CB371", z: 1.0 },
    // yellows
    SparkleSpec { count: 400, scale: 22.0, size: 2.25, speed: 0.6, color: "#FFD700", z: 0.0 },
    SparkleSpec { count: 300, scale: 17.0, size: 1.8, speed: 0.7, color: "#FFFF00", z: 1.0 },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub size: f64,
    pub color: String,
}

/// Fills a spherical shell from `radius + depth` inwards, each star stepping a
/// random fraction of `depth / count` closer than the previous one.
pub fn generate_stars(spec: &StarLayerSpec, rng: &mut fastrand::Rng) -> Vec<Star> {
    let mut r = spec.radius + spec.depth;
    let increment = spec.depth / spec.count.max(1) as f64;

    (0..spec.count)
        .map(|index| {
            r -= increment * rng.f64();
            let phi = (1.0 - rng.f64() * 2.0).acos();
            let theta = rng.f64() * TAU;
            let position = from_spherical(r, phi, theta);
            let hue = index as f64 / spec.count as f64;
            let (red, green, blue) = hsl_to_rgb(hue, spec.saturation, 0.9);

            Star {
                position,
                size: (0.5 + 0.5 * rng.f64()) * spec.factor,
                color: format!("rgb({red}, {green}, {blue})"),
            }
        })
        .collect()
}

/// Uniform points in a cube of side `scale`, centred on the emitter.
pub fn generate_sparkles(spec: &SparkleSpec, rng: &mut fastrand::Rng) -> Vec<Vec3> {
    (0..spec.count)
        .map(|_| {
            Vec3::new(
                (rng.f64() - 0.5) * spec.scale,
                (rng.f64() - 0.5) * spec.scale,
                (rng.f64() - 0.5) * spec.scale,
            )
        })
        .collect()
}

fn from_spherical(radius: f64, phi: f64, theta: f64) -> Vec3 {
    let sin_phi = phi.sin();
    Vec3::new(
        radius * sin_phi * theta.sin(),
        radius * phi.cos(),
        radius * sin_phi * theta.cos(),
    )
}

pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let hue = hue.rem_euclid(1.0);
    let saturation = saturation.clamp(0.0, 1.0);
    let lightness = lightness.clamp(0.0, 1.0);

    if saturation == 0.0 {
        let value = to_channel(lightness);
        return (value, value, value);
    }

    let q = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    (
        to_channel(hue_to_channel(p, q, hue + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, hue)),
        to_channel(hue_to_channel(p, q, hue - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_tables_match_expected_counts() {
        let stars: usize = STAR_LAYERS.iter().map(|layer| layer.count).sum();
        let sparkles: usize = SPARKLES.iter().map(|emitter| emitter.count).sum();

        assert_eq!(stars, 6_500);
        assert_eq!(sparkles, 5_300);
    }

    #[test]
    fn stars_stay_inside_their_shell() {
        let spec = STAR_LAYERS[0];
        let mut rng = fastrand::Rng::with_seed(11);
        let stars = generate_stars(&spec, &mut rng);

        assert_eq!(stars.len(), spec.count);
        for star in &stars {
            let p = star.position;
            let distance = (p.x * p.x + p.y * p.y + p.z * p.z).sqrt();
            assert!(distance <= spec.radius + spec.depth + 1e-6);
            assert!(distance >= spec.radius - 1e-6);
            assert!(star.size >= spec.factor * 0.5 && star.size <= spec.factor);
        }
    }

    #[test]
    fn same_seed_yields_same_field() {
        let spec = STAR_LAYERS[3];
        let first = generate_stars(&spec, &mut fastrand::Rng::with_seed(3));
        let second = generate_stars(&spec, &mut fastrand::Rng::with_seed(3));
        assert_eq!(first, second);
    }

    #[test]
    fn sparkles_fill_their_cube() {
        let spec = SPARKLES[0];
        let points = generate_sparkles(&spec, &mut fastrand::Rng::with_seed(5));

        assert_eq!(points.len(), spec.count);
        assert!(points.iter().all(|point| {
            point.x.abs() <= spec.scale / 2.0
                && point.y.abs() <= spec.scale / 2.0
                && point.z.abs() <= spec.scale / 2.0
        }));
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(0.5, 0.0, 0.9), (230, 230, 230));
    }
}
