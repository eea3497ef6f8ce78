use plotters::prelude::*;
use serde::Serialize;
use brillouin::{BrillouinZones3D, Config3D, LatticeKind3, Point3};

#[derive(Serialize)]
struct FaceDump {
    normal: [f64; 3],
    vertices: Vec<[f64; 3]>,
    area: f64,
}

#[derive(Serialize)]
struct ZoneDump {
    lattice: &'static str,
    index: usize,
    volume: f64,
    faces: Vec<FaceDump>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut dumps = Vec::new();
    for kind in LatticeKind3::ALL {
        let mut bz = BrillouinZones3D::new(Config3D::new(kind))?;
        bz.calculate()?;
        let filename = format!("zone_3d_{}.svg", kind.name().replace(' ', "_"));
        draw_zone(&filename, &bz)?;

        for zone in bz.zones() {
            dumps.push(ZoneDump {
                lattice: kind.name(),
                index: zone.index(),
                volume: zone.volume(),
                faces: zone
                    .faces()
                    .iter()
                    .map(|f| FaceDump {
                        normal: f.plane().normal().components,
                        vertices: f.vertices().iter().map(|v| v.coords).collect(),
                        area: f.area(),
                    })
                    .collect(),
            });
        }
    }

    std::fs::write("zones_3d.json", serde_json::to_string_pretty(&dumps)?)?;
    println!("Zone geometry saved to zones_3d.json");
    Ok(())
}

/// Oblique projection: a rotation about z, then a tilt about x.
fn project(p: &Point3) -> (f64, f64) {
    let (sa, ca) = 0.5f64.sin_cos();
    let (sb, cb) = 0.35f64.sin_cos();
    let x = ca * p.x() - sa * p.y();
    let y = sa * p.x() + ca * p.y();
    (x, cb * p.z() - sb * y)
}

fn draw_zone(filename: &str, bz: &BrillouinZones3D) -> Result<(), Box<dyn std::error::Error>> {
    let Some(zone) = bz.zone(1) else {
        return Err("zone 1 was not calculated".into());
    };
    let extent = zone
        .vertices()
        .iter()
        .map(|v| v.to_vector().norm())
        .fold(0.0, f64::max)
        * 1.1;

    let root = SVGBackend::new(filename, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(bz.config().lattice.name(), ("sans-serif", 24))
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    for face in zone.faces() {
        let mut poly: Vec<(f64, f64)> = face.vertices().iter().map(project).collect();
        chart.draw_series(std::iter::once(Polygon::new(poly.clone(), BLUE.mix(0.1).filled())))?;
        poly.push(poly[0]);
        chart.draw_series(std::iter::once(PathElement::new(poly, BLACK.mix(0.6))))?;
    }

    root.present()?;
    println!("Output saved to {}", filename);
    Ok(())
}
