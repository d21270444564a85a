use approx::assert_abs_diff_eq;
use geoproj::{Projection, systems::{Nzcs2000, Nztm2000}};

/// A published NZGD2000 point with its NZCS2000 and NZTM2000 grid coordinates.
struct Reference {
    lon: f64,
    lat: f64,
    nzcs: (f64, f64),
    nztm: (f64, f64),
}

fn dms(deg: f64, min: f64, sec: f64) -> f64 {
    deg.signum() * (deg.abs() + min / 60.0 + sec / 3600.0)
}

fn references() -> Vec<Reference> {
    vec![
        Reference {
            lon: dms(172.0, 29.0, 58.2847),
            lat: dms(-41.0, 43.0, 44.6973),
            nzcs: (2_958_434.27, 6_919_056.80),
            nztm: (1_558_376.32, 5_380_181.71),
        },
        Reference {
            lon: dms(167.0, 55.0, 26.6376),
            lat: dms(-44.0, 40.0, 24.6238),
            nzcs: (2_597_661.53, 6_580_692.05),
            nztm: (1_197_666.98, 5_040_771.40),
        },
        Reference {
            lon: 168.791_399,
            lat: -45.343_956,
            nzcs: (2_669_944.56, 6_509_882.69),
            nztm: (1_270_291.48, 4_970_217.78),
        },
    ]
}

#[test]
fn nzcs2000_inverse() {
    let nzcs = Nzcs2000::new();
    for r in references() {
        let (lon, lat) = nzcs.inverse(r.nzcs.0, r.nzcs.1).unwrap();
        assert_abs_diff_eq!(lon, r.lon, epsilon = 1e-7);
        assert_abs_diff_eq!(lat, r.lat, epsilon = 1e-7);
    }
}

#[test]
fn nzcs2000_forward() {
    let nzcs = Nzcs2000::new();
    for r in references() {
        let (x, y) = nzcs.forward(r.lon, r.lat);
        assert_abs_diff_eq!(x, r.nzcs.0, epsilon = 0.01);
        assert_abs_diff_eq!(y, r.nzcs.1, epsilon = 0.01);
    }
}

#[test]
fn nztm2000_inverse() {
    let nztm = Nztm2000::new();
    for r in references() {
        let (lon, lat) = nztm.inverse(r.nztm.0, r.nztm.1).unwrap();
        assert_abs_diff_eq!(lon, r.lon, epsilon = 1e-5);
        assert_abs_diff_eq!(lat, r.lat, epsilon = 1e-5);
    }
}

#[test]
fn nztm2000_forward() {
    let nztm = Nztm2000::new();
    for r in references() {
        let (x, y) = nztm.forward(r.lon, r.lat);
        assert_abs_diff_eq!(x, r.nztm.0, epsilon = 0.5);
        assert_abs_diff_eq!(y, r.nztm.1, epsilon = 0.5);
    }
}

#[test]
fn both_systems_agree_on_location() {
    let nzcs = Nzcs2000::new();
    let nztm = Nztm2000::new();
    for r in references() {
        let (lon_cs, lat_cs) = nzcs.inverse(r.nzcs.0, r.nzcs.1).unwrap();
        let (lon_tm, lat_tm) = nztm.inverse(r.nztm.0, r.nztm.1).unwrap();
        assert_abs_diff_eq!(lon_cs, lon_tm, epsilon = 1e-5);
        assert_abs_diff_eq!(lat_cs, lat_tm, epsilon = 1e-5);
    }
}

#[test]
fn typed_coordinates_follow_raw_results() {
    let nzcs = Nzcs2000::new();
    let grid = geoproj::GridCoord::create(2_958_434.27, 6_919_056.80).unwrap();
    let point = nzcs.unproject(&grid).unwrap();
    assert_abs_diff_eq!(point.longitude(), 172.499_523_53, epsilon = 1e-7);
    assert_abs_diff_eq!(point.latitude(), -41.729_082_58, epsilon = 1e-7);

    let back = nzcs.project(&point);
    assert_abs_diff_eq!(back.easting(), grid.easting(), epsilon = 1e-4);
    assert_abs_diff_eq!(back.northing(), grid.northing(), epsilon = 1e-4);
}
