use ndarray::Array2;

use crate::complex::{c, C};
use crate::coord::Viewport;

/// Squared-magnitude threshold past which an orbit is declared divergent.
pub const ESCAPE_RADIUS: f64 = 256.0;

/// Outcome of the escape-time test for a single domain point: whether the
/// orbit diverged, the iteration the test stopped at, and the orbit value
/// at that iteration.
#[derive(Copy, Clone, Debug)]
pub struct Escape {
    pub diverged: bool,
    pub n: i32,
    pub z: C<f64>,
}

#[derive(Clone, Debug)]
pub struct EscapeGrid {
    grid: Array2<Escape>,
}

impl EscapeGrid {
    pub fn width(&self) -> usize {
        self.grid.ncols()
    }

    pub fn height(&self) -> usize {
        self.grid.nrows()
    }

    pub fn escape(&self, x: usize, y: usize) -> Escape {
        self.grid[[y, x]]
    }
}

#[derive(Clone, Debug)]
pub struct EscapeSolver {
    pub max_iterations: i32,
}

impl EscapeSolver {
    pub fn new(max_iterations: i32) -> Self {
        Self { max_iterations }
    }

    /// Tests whether the orbit of z = z^2 + c diverges within the iteration
    /// budget. A non-positive budget reports every point as bounded.
    pub fn test(&self, point: C<f64>) -> Escape {
        let (ca, cb) = (point.re, point.im);
        let (mut za, mut zb) = (0.0, 0.0);
        let (mut za2, mut zb2) = (0.0, 0.0);
        let mut n = 0;
        let mut diverged = false;
        while n < self.max_iterations && !diverged {
            // zb must be computed from the old za, before za is overwritten
            zb = 2.0 * za * zb + cb;
            za = za2 - zb2 + ca;
            za2 = za * za;
            zb2 = zb * zb;
            diverged = za2 + zb2 > ESCAPE_RADIUS;
            n += 1;
        }
        Escape {
            diverged,
            n,
            z: c(za, zb),
        }
    }

    pub fn solve(&self, viewport: &Viewport, width: u32, height: u32) -> EscapeGrid {
        let grid = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
            self.test(viewport.map(x as u32, y as u32, width, height))
        });
        EscapeGrid { grid }
    }
}

impl Default for EscapeSolver {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_large_c_diverges_early() {
        let escape = EscapeSolver::new(1000).test(c(3.0, 0.0));
        assert!(escape.diverged);
        assert_eq!(escape.n, 3);
    }

    #[test]
    fn test_origin_exhausts_budget() {
        for budget in [1, 10, 250] {
            let escape = EscapeSolver::new(budget).test(c(0.0, 0.0));
            assert!(!escape.diverged);
            assert_eq!(escape.n, budget);
        }
    }

    #[test]
    fn test_non_positive_budget_is_bounded() {
        for budget in [0, -20, -400] {
            let escape = EscapeSolver::new(budget).test(c(3.0, 0.0));
            assert!(!escape.diverged);
            assert_eq!(escape.n, 0);
        }
    }

    #[test]
    fn test_nan_orbit_is_bounded() {
        let escape = EscapeSolver::new(25).test(c(f64::NAN, 0.0));
        assert!(!escape.diverged);
        assert_eq!(escape.n, 25);
    }

    #[test]
    fn test_grid_dimensions() {
        let grid = EscapeSolver::new(50).solve(&Viewport::default(), 8, 6);
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 6);
    }

    #[test]
    fn test_grid_matches_pointwise_test() {
        let solver = EscapeSolver::new(60);
        let viewport = Viewport::default();
        let grid = solver.solve(&viewport, 12, 12);
        let probe = solver.test(viewport.map(7, 2, 12, 12));
        let cell = grid.escape(7, 2);
        assert_eq!(cell.diverged, probe.diverged);
        assert_eq!(cell.n, probe.n);
        assert_eq!(cell.z, probe.z);
    }
}
