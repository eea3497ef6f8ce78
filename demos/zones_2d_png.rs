use plotters::prelude::*;
use brillouin::{BrillouinZones2D, Config2D, LatticeKind2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    for kind in LatticeKind2::ALL {
        let filename = format!("zones_2d_{}.png", kind.name());
        run_example(&filename, Config2D::new(kind))?;
    }
    Ok(())
}

fn run_example(filename: &str, config: Config2D) -> Result<(), Box<dyn std::error::Error>> {
    let mut bz = BrillouinZones2D::new(config)?;
    bz.calculate()?;

    let Some(canvas) = bz.canvas() else {
        return Err("zones were not calculated".into());
    };
    let (w, h) = (canvas.width() as u32, canvas.height() as u32);
    let root = BitMapBackend::new(filename, (w, h)).into_drawing_area();
    root.fill(&WHITE)?;

    // canvas rows grow with world y, image rows grow downwards
    for (i, pixel) in canvas.pixels().iter().enumerate() {
        let [r, g, b, _] = pixel.color();
        let x = (i % canvas.width()) as i32;
        let y = (h as usize - 1 - i / canvas.width()) as i32;
        root.draw_pixel((x, y), &RGBColor(r, g, b))?;
    }

    // Draw intersections
    for p in bz.intersections() {
        let (x, y) = canvas.to_pixel(p);
        if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
            continue;
        }
        root.draw(&Circle::new((x as i32, h as i32 - 1 - y as i32), 2, RED.filled()))?;
    }

    root.present()?;
    println!(
        "{}: {} zones in {} regions, saved to {}",
        bz.config().lattice.name(),
        bz.count_zones(),
        bz.regions().len(),
        filename
    );
    Ok(())
}
