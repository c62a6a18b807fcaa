use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

/// Regular polygon inscribed in the window, vertices ordered by angle.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    // Even polygons start at the top, odd ones are turned half a sector so no vertex sits there
    fn start_angle(sides: usize) -> f64 {
        let central = Self::central_angle(sides);
        if sides % 2 == 0 {
            PI / 2.0
        } else {
            PI / 2.0 - central / 2.0
        }
    }

    fn central_angle(sides: usize) -> f64 {
        2.0 * PI / sides as f64
    }

    pub fn inscribed(sides: usize, width: u32, height: u32) -> Self {
        let radius = (width / 2) as f64;
        let center_x = (width / 2) as f64;
        let center_y = (height / 2) as f64;
        let start = Self::start_angle(sides);
        let central = Self::central_angle(sides);

        let vertices = (1..=sides)
            .map(|i| {
                let (sin, cos) = (start + i as f64 * central).sin_cos();
                Vertex {
                    x: (center_x + radius * cos).round() as i32,
                    y: (center_y + radius * sin).round() as i32,
                }
            })
            .collect();

        Self { vertices }
    }

    pub fn sides(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex(&self, index: usize) -> Option<Vertex> {
        self.vertices.get(index).copied()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}
