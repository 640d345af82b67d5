//! Low-precision geocentric Sun and Moon positions.
//!
//! Truncated periodic series after Meeus, *Astronomical Algorithms*
//! (chapters 22, 25 and 47), with the planetary and lunar perturbations of
//! the solar longitude from Meeus, *Astronomical Formulae for Calculators*.
//! Accuracy is a few thousandths of a degree for the Sun and 10″ for the
//! Moon, which puts phase instants within a couple of minutes and equinoxes
//! within about five. All inputs are TT Julian days.

use crate::time::J2000;

/// Julian day of 1900 January 0.5, epoch of the perturbation arguments.
const B1900: f64 = 2_415_020.0;

/// Periodic terms of the lunar longitude: multiples of D, M, M′, F and the
/// coefficient in 1e-6 degrees.
#[rustfmt::skip]
const MOON_LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 59] = [
    (0, 0, 1, 0, 6_288_774), (2, 0, -1, 0, 1_274_027), (2, 0, 0, 0, 658_314),
    (0, 0, 2, 0, 213_618), (0, 1, 0, 0, -185_116), (0, 0, 0, 2, -114_332),
    (2, 0, -2, 0, 58_793), (2, -1, -1, 0, 57_066), (2, 0, 1, 0, 53_322),
    (2, -1, 0, 0, 45_758), (0, 1, -1, 0, -40_923), (1, 0, 0, 0, -34_720),
    (0, 1, 1, 0, -30_383), (2, 0, 0, -2, 15_327), (0, 0, 1, 2, -12_528),
    (0, 0, 1, -2, 10_980), (4, 0, -1, 0, 10_675), (0, 0, 3, 0, 10_034),
    (4, 0, -2, 0, 8_548), (2, 1, -1, 0, -7_888), (2, 1, 0, 0, -6_766),
    (1, 0, -1, 0, -5_163), (1, 1, 0, 0, 4_987), (2, -1, 1, 0, 4_036),
    (2, 0, 2, 0, 3_994), (4, 0, 0, 0, 3_861), (2, 0, -3, 0, 3_665),
    (0, 1, -2, 0, -2_689), (2, 0, -1, 2, -2_602), (2, -1, -2, 0, 2_390),
    (1, 0, 1, 0, -2_348), (2, -2, 0, 0, 2_236), (0, 1, 2, 0, -2_120),
    (0, 2, 0, 0, -2_069), (2, -2, -1, 0, 2_048), (2, 0, 1, -2, -1_773),
    (2, 0, 0, 2, -1_595), (4, -1, -1, 0, 1_215), (0, 0, 2, 2, -1_110),
    (3, 0, -1, 0, -892), (2, 1, 1, 0, -810), (4, -1, -2, 0, 759),
    (0, 2, -1, 0, -713), (2, 2, -1, 0, -700), (2, 1, -2, 0, 691),
    (2, -1, 0, -2, 596), (4, 0, 1, 0, 549), (0, 0, 4, 0, 537),
    (4, -1, 0, 0, 520), (1, 0, -2, 0, -487), (2, 1, 0, -2, -399),
    (0, 0, 2, -2, -381), (1, 1, 1, 0, 351), (3, 0, -2, 0, -340),
    (4, 0, -3, 0, 330), (2, -1, 2, 0, 327), (0, 2, 1, 0, -323),
    (1, 1, -1, 0, 299), (2, 0, 3, 0, 294),
];

fn centuries(jde: f64) -> f64 {
    (jde - J2000) / 36_525.0
}

fn normalize(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Longitude of the Moon's ascending node, in degrees.
fn node_longitude(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Nutation in longitude, in degrees (the four largest terms).
fn nutation_longitude(t: f64) -> f64 {
    let omega = node_longitude(t).to_radians();
    let sun = (280.4665 + 36_000.7698 * t).to_radians();
    let moon = (218.3165 + 481_267.8813 * t).to_radians();
    let arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * omega).sin();
    arcsec / 3600.0
}

/// Perturbations of the solar longitude by Venus, Jupiter and the Moon,
/// plus a long-period term, in degrees.
fn sun_perturbations(jde: f64) -> f64 {
    let t = (jde - B1900) / 36_525.0;
    let a = (153.23 + 22_518.7541 * t).to_radians();
    let b = (216.57 + 45_037.5082 * t).to_radians();
    let c = (312.69 + 32_964.3577 * t).to_radians();
    let d = (350.74 + 445_267.1142 * t - 0.001_44 * t * t).to_radians();
    let e = (231.19 + 20.20 * t).to_radians();
    0.001_34 * a.cos() + 0.001_54 * b.cos() + 0.002_00 * c.cos() + 0.001_79 * d.sin()
        + 0.001_78 * e.sin()
}

/// Geometric mean longitude of the Sun, in degrees.
fn sun_mean_longitude(t: f64) -> f64 {
    280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t
}

/// Apparent geocentric ecliptic longitude of the Sun, in degrees `[0, 360)`.
pub fn sun_longitude(jde: f64) -> f64 {
    let t = centuries(jde);
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let center = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let true_longitude = sun_mean_longitude(t) + center + sun_perturbations(jde);
    // Aberration plus nutation.
    normalize(true_longitude - 0.005_69 + nutation_longitude(t))
}

/// Apparent geocentric ecliptic longitude of the Moon, in degrees `[0, 360)`.
pub fn moon_longitude(jde: f64) -> f64 {
    let t = centuries(jde);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = (297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0)
        .to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0)
        .to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0)
        .to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0)
        .to_radians();
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let mut sum: f64 = MOON_LONGITUDE_TERMS
        .iter()
        .map(|&(cd, cm, cmp, cf, coeff)| {
            let arg = f64::from(cd) * d + f64::from(cm) * m + f64::from(cmp) * mp + f64::from(cf) * f;
            // Terms involving the solar anomaly shrink with Earth's eccentricity.
            let ecc = match cm.abs() {
                0 => 1.0,
                1 => e,
                _ => e * e,
            };
            f64::from(coeff) * ecc * arg.sin()
        })
        .sum();

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum += 3958.0 * a1.sin() + 1962.0 * (l.to_radians() - f).sin() + 318.0 * a2.sin();

    normalize(l + sum / 1_000_000.0 + nutation_longitude(t))
}

/// Moon−Sun elongation in ecliptic longitude, in degrees `[0, 360)`.
pub fn elongation(jde: f64) -> f64 {
    normalize(moon_longitude(jde) - sun_longitude(jde))
}

/// Apparent right ascension and declination of the Sun, in degrees.
pub fn sun_equatorial(jde: f64) -> (f64, f64) {
    let t = centuries(jde);
    let lambda = sun_longitude(jde).to_radians();
    let epsilon = (23.439_291 - 0.013_004_2 * t + 0.002_56 * node_longitude(t).to_radians().cos())
        .to_radians();
    let ra = (epsilon.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (epsilon.sin() * lambda.sin()).asin();
    (normalize(ra.to_degrees()), dec.to_degrees())
}

/// Greenwich mean sidereal time at a UT Julian day, in degrees.
pub fn sidereal_time(jd_ut: f64) -> f64 {
    let t = centuries(jd_ut);
    normalize(
        280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000) + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}
