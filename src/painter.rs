use image::{Rgb, Rgba, RgbaImage};
use lazy_static::lazy_static;

use crate::complex::C;
use crate::solver::{EscapeGrid, ESCAPE_RADIUS};

lazy_static! {
    static ref ESCAPE_RADIUS_LOG: f64 = ESCAPE_RADIUS.log2().log2();
    static ref BIG_LOG: f64 = 100000f64.ln();
}

pub const INTERIOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const DIVERGED_ALPHA: u8 = 128;

/// Fractional part in [0, 1), also for negative inputs.
fn frac(r: f64) -> f64 {
    r - r.floor()
}

/// Continuous refinement of the discrete iteration count; removes the
/// staircase banding of raw counts.
pub fn smooth_count(n: i32, z: C<f64>) -> f64 {
    let log_z = z.norm_sqr().log2() / 2.0; // equal to log2(|z|)
    n as f64 + log_z.log2() - *ESCAPE_RADIUS_LOG
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb<u8> {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);
    let (r, g, b) = match (i as i32) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb([
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ])
}

/// Stateless color strategy for diverged points.
pub trait Palette {
    fn pick_color(&self, n: i32, z: C<f64>) -> Rgb<u8>;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Banded;

impl Palette for Banded {
    fn pick_color(&self, n: i32, z: C<f64>) -> Rgb<u8> {
        let s = smooth_count(n, z);
        let mut p = s.ln() / *BIG_LOG;
        let angle;
        if p < 0.5 {
            p = 1.0 - 1.5 * p;
            angle = 1.0 - p;
        } else {
            p = 1.5 * p - 0.5;
            angle = p;
        }

        let mut radius = p.sqrt();
        // darken every other integer iteration band
        if (s.floor() as i64) % 2 != 0 {
            radius *= 0.6;
        }

        let hue = 0.4 + 0.55 * frac(5.0 * angle);
        let saturation = frac(radius);
        let value = 0.9 + 0.1 * frac(z.norm_sqr().sqrt().log10());

        hsv_to_rgb(hue, saturation, value)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Greyscale {
    max_count: f64,
}

impl Greyscale {
    pub fn new(max_count: f64) -> Self {
        Self { max_count }
    }
}

impl Palette for Greyscale {
    fn pick_color(&self, n: i32, z: C<f64>) -> Rgb<u8> {
        let frac = (smooth_count(n, z) / self.max_count).clamp(0.0, 1.0);
        let v: u8 = 255 - (frac * 255.0).round() as u8;
        Rgb([v, v, v])
    }
}

/// Paints a solved grid into an RGBA frame: palette color at alpha 128 for
/// diverged points, opaque black for bounded ones. Every paint rewrites the
/// whole frame.
pub struct EscapePainter<P> {
    palette: P,
}

impl<P> EscapePainter<P>
where
    P: Palette,
{
    pub fn new(palette: P) -> Self {
        Self { palette }
    }

    pub fn paint(&self, escapes: &EscapeGrid) -> RgbaImage {
        let width: u32 = escapes.width().try_into().unwrap();
        let height: u32 = escapes.height().try_into().unwrap();

        let mut img = RgbaImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let escape = escapes.escape(x as usize, y as usize);
                let pixel = if escape.diverged {
                    let Rgb([r, g, b]) = self.palette.pick_color(escape.n, escape.z);
                    Rgba([r, g, b, DIVERGED_ALPHA])
                } else {
                    INTERIOR
                };
                img.put_pixel(x, y, pixel);
            }
        }
        img
    }
}
