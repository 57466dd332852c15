#![allow(clippy::new_without_default)]
use image::RgbaImage;

use crate::coord::{Viewport, ZoomStack};
use crate::painter::{Banded, EscapePainter, Palette};
use crate::solver::EscapeSolver;

pub mod bench;
mod complex;
pub mod coord;
#[cfg(feature = "gui")]
pub mod gui;
pub mod painter;
pub mod solver;

/// Iteration budget adjustment applied on each zoom step.
pub const ITERATION_STEP: i32 = 20;

/// One interactive exploration session: the zoom history, the iteration
/// budget, and the palette used to paint frames.
pub struct Mandelbrot<P> {
    pub zoom: ZoomStack,
    pub solver: EscapeSolver,
    painter: EscapePainter<P>,
}

impl<P> Mandelbrot<P>
where
    P: Palette,
{
    pub fn initialize(viewport: Viewport, max_iterations: i32, palette: P) -> Self {
        Self {
            zoom: ZoomStack::new(viewport),
            solver: EscapeSolver::new(max_iterations),
            painter: EscapePainter::new(palette),
        }
    }

    /// Renders a full frame of the current viewport: RGBA bytes, row-major,
    /// top to bottom.
    pub fn render(&self, width: u32, height: u32) -> RgbaImage {
        let escapes = self.solver.solve(&self.zoom.current(), width, height);
        self.painter.paint(&escapes)
    }

    pub fn zoom_in(&mut self, screen_x: u32, screen_y: u32, width: u32, height: u32) -> RgbaImage {
        self.zoom.zoom_in(screen_x, screen_y, width, height);
        self.solver.max_iterations += ITERATION_STEP;
        self.render(width, height)
    }

    /// Returns to the previous viewport (no-op at the root) and re-renders.
    /// The budget decrement is not clamped; a non-positive budget produces
    /// an all-black frame.
    pub fn zoom_out(&mut self, width: u32, height: u32) -> RgbaImage {
        self.zoom.zoom_out();
        self.solver.max_iterations -= ITERATION_STEP;
        self.render(width, height)
    }
}

pub fn mandelbrot(max_iterations: i32) -> Mandelbrot<Banded> {
    Mandelbrot::initialize(Viewport::default(), max_iterations, Banded)
}

#[cfg(test)]
mod test {
    use image::Rgba;

    use super::*;

    #[test]
    fn test_render_reference_frame() {
        let m = mandelbrot(1000);
        let img = m.render(600, 600);
        // domain origin, bounded
        assert_eq!(img.get_pixel(300, 300), &Rgba([0, 0, 0, 255]));
        // far outside the set
        let Rgba([r, g, b, a]) = *img.get_pixel(0, 0);
        assert_eq!(a, 128);
        assert!(r > 0 || g > 0 || b > 0);
    }

    #[test]
    fn test_render_is_deterministic() {
        let m = mandelbrot(60);
        assert_eq!(m.render(32, 32), m.render(32, 32));
    }

    #[test]
    fn test_zoom_adjusts_budget() {
        let mut m = mandelbrot(100);
        m.zoom_in(5, 5, 10, 10);
        assert_eq!(m.solver.max_iterations, 100 + ITERATION_STEP);
        m.zoom_out(10, 10);
        m.zoom_out(10, 10); // at the root: viewport unchanged, budget still drops
        assert_eq!(m.solver.max_iterations, 100 - ITERATION_STEP);
        assert_eq!(m.zoom.current(), Viewport::default());
    }

    #[test]
    fn test_depleted_budget_renders_black() {
        let mut m = mandelbrot(ITERATION_STEP);
        m.zoom_out(8, 8);
        let img = m.zoom_out(8, 8);
        assert!(m.solver.max_iterations < 0);
        for pixel in img.pixels() {
            assert_eq!(pixel, &Rgba([0, 0, 0, 255]));
        }
    }

    #[test]
    fn test_palette_substitution() {
        use crate::painter::Greyscale;
        let m = Mandelbrot::initialize(Viewport::default(), 50, Greyscale::new(50.0));
        let img = m.render(16, 16);
        let Rgba([r, g, b, a]) = *img.get_pixel(0, 0);
        assert_eq!(a, 128);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}
