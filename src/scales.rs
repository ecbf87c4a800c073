use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Linear data-to-pixel scale used for bar positions and heights.
#[derive(Clone)]
pub struct ValueScale {
    scale: LinearScale,
}

impl ValueScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let (d_min, d_max) = padded(domain);
        let scale = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0 as f64, range.1 as f64);
        Self { scale }
    }

    /// Maps a data value to pixels. Non-finite results collapse to 0.
    pub fn map(&self, value: f64) -> f32 {
        let res = self.scale.scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        self.scale.invert(pixel as f64).unwrap_or(0.0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.scale.ticks(count)
    }
}

// A zero-width domain would divide by zero.
fn padded(domain: (f64, f64)) -> (f64, f64) {
    let (mut d_min, mut d_max) = domain;
    if (d_max - d_min).abs() < f64::EPSILON {
        d_min -= 0.5;
        d_max += 0.5;
    }
    (d_min, d_max)
}
