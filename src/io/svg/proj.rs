use std::f64::consts::FRAC_PI_4;

use geo::{Coord, Rect};

/// Projection function: lon/lat -> SVG coords (x,y)
pub(crate) type Projection = dyn Fn(&Coord<f64>) -> (f64, f64);

/// Latitude limit of the square Web Mercator world.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Spherical Web Mercator in radians-scaled units (x = lon, y grows northwards).
#[inline]
pub(crate) fn mercator(coord: &Coord<f64>) -> Coord<f64> {
    let lat = coord.y.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    Coord { x: coord.x.to_radians(), y: (FRAC_PI_4 + lat / 2.0).tan().ln() }
}

/// Fits a lon/lat bounding box into a fixed-width canvas region, preserving aspect, Y down.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Viewport {
    min: Coord<f64>,   // projected south-west corner
    max: Coord<f64>,   // projected north-east corner
    scale: f64,
    margin: f64,
    top: f64,
}

impl Viewport {
    /// `top` offsets the drawing below any header band.
    pub(crate) fn fit(bounds: &Rect<f64>, width: f64, margin: f64, top: f64) -> Self {
        let min = mercator(&bounds.min());
        let max = mercator(&bounds.max());
        let span = (max.x - min.x).max(max.y - min.y).max(1e-6);
        let scale = (width - 2.0 * margin).max(1.0) / span;
        Self { min, max, scale, margin, top }
    }

    /// Height of the fitted region including margins.
    pub(crate) fn height(&self) -> f64 {
        (self.max.y - self.min.y) * self.scale + 2.0 * self.margin
    }

    #[inline]
    pub(crate) fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let p = mercator(coord);
        let x = self.margin + (p.x - self.min.x) * self.scale;
        let y = self.top + self.margin + (self.max.y - p.y) * self.scale; // invert vertically
        (x, y)
    }
}
