// Zone boundary resolvers: analytic in 3D and 2D, raster in 2D.

pub mod canvas;
pub mod d2;
pub mod d3;
pub mod raster;

pub use canvas::{color_for_zone, Canvas, Pixel, VertexMap, PALETTE};
pub use d2::{classify, Polygon2, Zone2D};
pub use d3::{Face, OuterSurface, Zone3D, ZoneResolver3D};
pub use raster::{RasterExplorer, RasterRegion, RasterZones};
