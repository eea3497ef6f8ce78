use brillouin::bragg::bragg_lines;
use brillouin::zone::d2::{classify, resolve_zones};
use brillouin::zone::Pixel;
use brillouin::{BrillouinZones2D, Config2D, LatticeKind2, Point2, Shells};

fn analytic_lines(kind: LatticeKind2, max_distance: f64) -> Vec<brillouin::geometry::d2::Line2> {
    let sites = kind.sites(1.0, 5);
    let shells: Vec<_> = Shells::new(sites, Point2::origin(), 1e-6)
        .take_while(|s| s.distance <= max_distance + 1e-9)
        .collect();
    bragg_lines(&shells).unwrap()
}

#[test]
fn test_analytic_zone_areas_equal_cell_area() {
    for kind in LatticeKind2::ALL {
        let lines = analytic_lines(kind, 3.0);
        let zones = resolve_zones(&lines, 3, 1.6).unwrap();
        let cell = kind.cell_area(1.0);
        for zone in &zones {
            let error = (zone.area() - cell).abs() / cell;
            println!("{} zone {}: area {:.9}, cell {:.9}", kind.name(), zone.index(), zone.area(), cell);
            assert!(error < 1e-9, "{} zone {} area off by {:.3e}", kind.name(), zone.index(), error);
        }
    }
}

#[test]
fn test_analytic_pieces_classify_consistently() {
    let lines = analytic_lines(LatticeKind2::Hexagonal, 3.0);
    for zone in resolve_zones(&lines, 3, 1.6).unwrap() {
        for piece in zone.pieces() {
            assert_eq!(classify(&piece.centroid(), &lines), zone.index());
        }
    }
}

#[test]
fn test_hexagonal_first_zone_is_hexagon() {
    let lines = analytic_lines(LatticeKind2::Hexagonal, 1.0);
    assert_eq!(lines.len(), 6);
    let zones = resolve_zones(&lines, 1, 2.0).unwrap();
    assert_eq!(zones[0].pieces().len(), 1);
    assert_eq!(zones[0].pieces()[0].vertices().len(), 6);
}

#[test]
fn test_square_raster_twelve_zones() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut bz = BrillouinZones2D::new(Config2D::new(LatticeKind2::Square)).unwrap();
    bz.calculate().unwrap();
    let zones = bz.zones().unwrap();

    assert_eq!(zones.distinct_zones(), (1..=12).collect::<Vec<_>>());
    assert_eq!(bz.count_zones(), 12);

    // zone 1 is the square |x|, |y| < 80 and the 4 nearest bisectors bound it
    assert_eq!(zones.zone_at(&Point2::origin()), Some(1));
    let first = zones.pixel_count(1);
    assert!(first > 150 * 150 && first <= 160 * 160, "zone 1 has {first} pixels");
    assert_eq!(zones.regions().iter().filter(|r| r.zone == 1).count(), 1);
    assert_eq!(zones.zone_at(&Point2::new([70.0, 70.0])), Some(1));
    assert_eq!(zones.zone_at(&Point2::new([90.0, 0.0])), Some(2));

    let canvas = bz.canvas().unwrap();
    assert_eq!(canvas.get(440, 360), Some(Pixel::Stroke));
    assert_eq!(canvas.to_rgba().len(), 720 * 720 * 4);
}

#[test]
fn test_raster_agrees_with_analytic() {
    for kind in [LatticeKind2::Square, LatticeKind2::Hexagonal] {
        let cfg = Config2D::new(kind).with_zone_count(4);
        let mut bz = BrillouinZones2D::new(cfg).unwrap();
        bz.calculate().unwrap();
        let raster = bz.zones().unwrap();

        for zone in bz.analytic_zones(350.0).unwrap().iter().take(3) {
            for piece in zone.pieces().iter().filter(|p| p.area() > 500.0) {
                let c = piece.centroid();
                assert_eq!(
                    raster.zone_at(&c),
                    Some(zone.index()),
                    "{}: analytic zone {} at {:?}",
                    kind.name(),
                    zone.index(),
                    c
                );
            }
        }
    }
}

#[test]
fn test_regions_do_not_overlap() {
    let cfg = Config2D::new(LatticeKind2::Hexagonal).with_zone_count(6);
    let mut bz = BrillouinZones2D::new(cfg).unwrap();
    bz.calculate().unwrap();
    let canvas = bz.canvas().unwrap();

    let filled: usize = bz.regions().iter().map(|r| r.pixels).sum();
    let colored = canvas.pixels().iter().filter(|p| matches!(p, Pixel::Zone(_))).count();
    assert_eq!(filled, colored);
    for region in bz.regions() {
        assert!(region.pixels > 0);
    }
}
