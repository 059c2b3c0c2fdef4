pub const CAMERA_Z: f64 = 5.0;
pub const CAMERA_FOV_DEGREES: f64 = 75.0;
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 2_000.0;

// Points slightly outside the frustum still overlap the edge with their size.
const NDC_MARGIN: f64 = 1.05;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Applies an XYZ Euler rotation with no z component: yaw first, then pitch.
    pub fn rotated(self, pitch: f64, yaw: f64) -> Self {
        let (sin_y, cos_y) = yaw.sin_cos();
        let x = self.x * cos_y + self.z * sin_y;
        let z = -self.x * sin_y + self.z * cos_y;

        let (sin_x, cos_x) = pitch.sin_cos();
        let y = self.y * cos_x - z * sin_x;
        let z = self.y * sin_x + z * cos_x;

        Self { x, y, z }
    }

    pub fn offset(self, other: Vec3) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Distance in front of the camera along its view axis.
    pub depth: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub z: f64,
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Camera {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            z: CAMERA_Z,
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            width,
            height,
            pixel_ratio,
        }
    }

    pub fn aspect(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    pub fn project(&self, point: Vec3) -> Option<Projected> {
        let depth = self.z - point.z;
        if depth < self.near || depth > self.far || self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }

        let half_height = (self.fov_degrees.to_radians() / 2.0).tan() * depth;
        let half_width = half_height * self.aspect();
        let ndc_x = point.x / half_width;
        let ndc_y = point.y / half_height;

        if ndc_x.abs() > NDC_MARGIN || ndc_y.abs() > NDC_MARGIN {
            return None;
        }

        Some(Projected {
            x: (ndc_x + 1.0) * 0.5 * self.width,
            y: (1.0 - ndc_y) * 0.5 * self.height,
            depth,
        })
    }
}
