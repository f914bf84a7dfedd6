//! The ambient polygon field.

use myeongham_core::Rand;
use ratatui::widgets::canvas::{Painter, Shape};

use crate::entity::Polygon;

/// Number of entities kept alive for the lifetime of the field.
pub const POLYGON_COUNT: usize = 10;

/// A fixed-size collection of drifting polygons in a pixel viewport.
///
/// The field is advanced once per animation frame with [`tick`] and painted
/// through its [`Shape`] impl. Entities are mutated in place and never
/// destroyed.
///
/// [`tick`]: PolygonField::tick
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonField {
    polygons: Vec<Polygon>,
    width: f64,
    height: f64,
}

impl PolygonField {
    /// Create a field with [`POLYGON_COUNT`] entities spawned inside the
    /// given viewport.
    pub fn new(width: f64, height: f64, rng: &mut dyn Rand) -> Self {
        let polygons = (0..POLYGON_COUNT)
            .map(|_| Polygon::spawn(width, height, rng))
            .collect();
        Self {
            polygons,
            width,
            height,
        }
    }

    /// Resynchronize the surface dimensions.
    ///
    /// Entities are not repositioned; strays fade out and re-enter through
    /// their own update logic.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance every entity by one frame, in stored order.
    pub fn tick(&mut self, rng: &mut dyn Rand) {
        for polygon in &mut self.polygons {
            polygon.advance(self.width, self.height, rng);
        }
    }

    /// Current surface dimensions in pixels.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

impl Shape for PolygonField {
    fn draw(&self, painter: &mut Painter) {
        for polygon in &self.polygons {
            polygon.draw(painter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{FADE_IN_RATE, OPACITY_CEILING};
    use myeongham_core::SplitMix64;

    const W: f64 = 800.0;
    const H: f64 = 480.0;

    #[test]
    fn test_field_holds_fixed_entity_count() {
        let mut rng = SplitMix64::new(1);
        let mut field = PolygonField::new(W, H, &mut rng);
        assert_eq!(field.polygons().len(), POLYGON_COUNT);
        for _ in 0..1000 {
            field.tick(&mut rng);
        }
        assert_eq!(field.polygons().len(), POLYGON_COUNT);
    }

    #[test]
    fn test_opacity_bounded_over_long_runs() {
        let mut rng = SplitMix64::new(2);
        let mut field = PolygonField::new(W, H, &mut rng);
        for _ in 0..5000 {
            field.tick(&mut rng);
            for p in field.polygons() {
                assert!(p.opacity >= 0.0);
                assert!(p.opacity <= OPACITY_CEILING + FADE_IN_RATE + 1e-9);
            }
        }
    }

    #[test]
    fn test_same_seed_yields_identical_fields() {
        let mut rng_a = SplitMix64::new(99);
        let mut rng_b = SplitMix64::new(99);
        let mut a = PolygonField::new(W, H, &mut rng_a);
        let mut b = PolygonField::new(W, H, &mut rng_b);
        assert_eq!(a, b);
        for _ in 0..500 {
            a.tick(&mut rng_a);
            b.tick(&mut rng_b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_resize_applies_exact_dimensions() {
        let mut rng = SplitMix64::new(4);
        let mut field = PolygonField::new(W, H, &mut rng);
        field.resize(1920.0, 1080.0);
        assert_eq!(field.size(), (1920.0, 1080.0));
    }

    #[test]
    fn test_resize_does_not_reposition_entities() {
        let mut rng = SplitMix64::new(6);
        let mut field = PolygonField::new(W, H, &mut rng);
        let before: Vec<_> = field
            .polygons()
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        field.resize(100.0, 100.0);
        let after: Vec<_> = field
            .polygons()
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        assert_eq!(before, after);
    }
}
