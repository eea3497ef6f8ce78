//! # brillouin
//!
//! `brillouin` computes Brillouin zones of crystal lattices in 2D and 3D, designed to be used
//! in Rust as well as compiled to WebAssembly (WASM). It generates reciprocal lattice sites,
//! groups them into distance shells, builds the Bragg boundaries between the center and every
//! shell site, and resolves the zones those boundaries enclose.
//!
//! ## Features
//!
//! - **3D zones**: Exact polyhedral faces for simple cubic, body-centered, face-centered,
//!   base-centered and hexagonal close-packed lattices, or any custom primitive basis.
//! - **2D zones**: A raster resolver that colors every zone on a pixel canvas, plus an
//!   analytic polygon resolver for exact areas.
//! - **WASM-first**: Built with `wasm-bindgen`; geometry crosses the boundary as flat arrays.
//!
//! ## Example
//!
//! See the `demos/` directory for PNG rendering of 2D zones and SVG projection of 3D zones.
//!
//! ## Main Interface
//!
//! The entry points are [`BrillouinZones3D`] and [`BrillouinZones2D`], configured with
//! [`Config3D`] and [`Config2D`].

pub mod bragg;
pub mod brillouin;
pub mod config;
pub mod error;
pub mod geometry;
pub mod lattice;
pub mod shell;
pub mod wasm;
pub mod zone;

pub use brillouin::BrillouinZones2D;
pub use brillouin::BrillouinZones3D;
pub use config::Config2D;
pub use config::Config3D;
pub use error::Error;
pub use error::GeometryError;
pub use error::Result;
pub use geometry::{Point, Point2, Point3, Segment, Vector, Vector2, Vector3};
pub use lattice::LatticeKind2;
pub use lattice::LatticeKind3;
pub use shell::{Shell, Shells};
pub use zone::{Face, Zone2D, Zone3D};
