//! # Bearing Catalog Tables
//!
//! Fixed manufacturer data for the six main-bearing families. Columns are
//! bore `d` (m), outer diameter `D` (m), facewidth `B` (m), dynamic rating
//! `C` (kN), static rating `C0` (kN) and mass (kg).
//!
//! Rows keep catalog order; selection ties on bore resolve to the first
//! row listed. A few source rows carry values off by a power of ten
//! (a millimetre facewidth in a metre column, a rating in MN); those are
//! stored rescaled and the listed value is noted beside the row.

/// One catalog row. Field names follow catalog column headings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CatalogRow {
    pub d: f64,
    pub outer: f64,
    pub b: f64,
    pub c: f64,
    pub c0: f64,
    pub mass: f64,
}

const fn row(d: f64, outer: f64, b: f64, c: f64, c0: f64, mass: f64) -> CatalogRow {
    CatalogRow { d, outer, b, c, c0, mass }
}

/// Toroidal roller (CARB) bearings
pub(super) static CARB: &[CatalogRow] = &[
    row(0.3, 0.5, 0.16, 3250.0, 5200.0, 120.0),
    row(0.3, 0.46, 0.16, 2900.0, 4900.0, 95.5),
    row(0.32, 0.48, 0.121, 2280.0, 4000.0, 76.5),
    row(0.32, 0.54, 0.176, 4150.0, 6300.0, 160.0),
    row(0.34, 0.52, 0.133, 2900.0, 5000.0, 100.0),
    row(0.34, 0.58, 0.19, 4900.0, 7500.0, 205.0),
    row(0.36, 0.54, 0.134, 2900.0, 5000.0, 105.0),
    row(0.36, 0.6, 0.192, 5000.0, 8000.0, 215.0),
    row(0.38, 0.56, 0.135, 2000.0, 5200.0, 110.0),
    row(0.38, 0.62, 0.194, 4400.0, 7200.0, 243.0),
    row(0.4, 0.6, 0.148, 3650.0, 6200.0, 145.0),
    row(0.4, 0.65, 0.2, 4800.0, 8300.0, 258.0),
    row(0.42, 0.72, 0.15, 3800.0, 6400.0, 150.0),
    row(0.42, 0.7, 0.224, 6000.0, 10400.0, 340.0),
    row(0.44, 0.65, 0.157, 3750.0, 6400.0, 185.0),
    row(0.44, 0.72, 0.226, 6700.0, 11400.0, 385.0),
    row(0.46, 0.68, 0.163, 4000.0, 7500.0, 200.0),
    row(0.46, 0.76, 0.24, 6800.0, 12000.0, 430.0),
    row(0.48, 0.7, 0.165, 4050.0, 7800.0, 210.0),
    row(0.48, 0.79, 0.248, 6950.0, 12500.0, 523.0),
    row(0.5, 0.72, 0.167, 4250.0, 8300.0, 225.0),
    row(0.5, 0.83, 0.246, 7500.0, 12700.0, 550.0),
    row(0.53, 0.78, 0.185, 5100.0, 9500.0, 295.0),
    row(0.53, 0.87, 0.272, 8800.0, 15600.0, 630.0),
    row(0.56, 0.82, 0.195, 5600.0, 11000.0, 345.0),
    row(0.56, 0.92, 0.28, 9500.0, 17000.0, 750.0),
    row(0.6, 0.87, 0.2, 6300.0, 12200.0, 390.0),
    row(0.6, 0.98, 0.3, 10200.0, 18000.0, 929.0),
    row(0.63, 0.92, 0.212, 6800.0, 12900.0, 465.0),
    row(0.63, 1.03, 0.315, 11800.0, 20800.0, 1089.0),
    row(0.67, 0.98, 0.23, 8150.0, 16300.0, 580.0),
    row(0.67, 1.09, 0.336, 12000.0, 22000.0, 1230.0),
    row(0.71, 1.03, 0.315, 20600.0, 21600.0, 860.0),
    row(0.71, 1.15, 0.345, 12700.0, 24000.0, 1410.0),
    row(0.75, 1.09, 0.25, 9500.0, 19300.0, 838.0),
    row(0.75, 1.22, 0.365, 13700.0, 20500.0, 1802.0),
    row(0.8, 1.15, 0.258, 9150.0, 18600.0, 860.0),
    row(0.8, 1.28, 0.375, 15600.0, 30500.0, 1870.0),
    row(0.85, 1.22, 0.272, 11600.0, 24500.0, 1105.0),
    row(0.85, 1.36, 0.4, 16000.0, 32000.0, 2260.0),
    row(0.9, 1.18, 0.206, 8150.0, 18000.0, 580.0),
    row(0.9, 1.28, 0.28, 12700.0, 26500.0, 1200.0),
    row(0.95, 1.25, 0.224, 9300.0, 22000.0, 745.0),
    row(0.95, 1.36, 0.3, 12900.0, 27500.0, 1410.0),
    row(1.0, 1.42, 0.308, 13400.0, 29000.0, 1570.0),
    row(1.0, 1.58, 0.462, 22800.0, 45500.0, 3470.0),
    row(1.06, 1.4, 0.25, 11000.0, 26000.0, 1120.0),
    row(1.18, 1.54, 0.272, 13400.0, 33500.0, 1400.0),
    row(1.25, 1.75, 0.375, 20400.0, 45000.0, 2740.0),
];

/// Spherical roller bearings
pub(super) static SRB: &[CatalogRow] = &[
    row(0.3, 0.46, 0.16, 2700.0, 4750.0, 97.0),
    row(0.3, 0.5, 0.16, 3200.0, 5100.0, 120.0),
    row(0.32, 0.48, 0.16, 2850.0, 5100.0, 100.0),
    row(0.32, 0.54, 0.176, 3750.0, 6000.0, 160.0),
    row(0.32, 0.58, 0.15, 4400.0, 6700.0, 240.0),
    row(0.34, 0.52, 0.18, 3450.0, 6200.0, 140.0),
    row(0.34, 0.58, 0.19, 4259.0, 6800.0, 210.0),
    row(0.34, 0.62, 0.224, 5100.0, 7800.0, 295.0),
    row(0.36, 0.54, 0.134, 2750.0, 4800.0, 110.0),
    row(0.36, 0.6, 0.192, 4300.0, 6950.0, 220.0),
    row(0.36, 0.65, 0.232, 5400.0, 8300.0, 335.0),
    row(0.38, 0.56, 0.135, 2900.0, 5000.0, 115.0),
    row(0.38, 0.62, 0.194, 4400.0, 7100.0, 230.0),
    row(0.38, 0.68, 0.24, 5850.0, 9150.0, 375.0),
    row(0.4, 0.6, 0.148, 3250.0, 5850.0, 150.0),
    row(0.4, 0.65, 0.2, 4650.0, 7650.0, 265.0),
    row(0.4, 0.72, 0.256, 6550.0, 10400.0, 450.0),
    row(0.4, 0.82, 0.243, 7500.0, 20400.0, 650.0),
    row(0.42, 0.62, 0.2, 4400.0, 8300.0, 205.0),
    row(0.42, 0.7, 0.28, 7350.0, 12600.0, 445.0),
    row(0.44, 0.65, 0.157, 3650.0, 6550.0, 180.0),
    row(0.44, 0.72, 0.226, 6000.0, 10000.0, 360.0),
    row(0.44, 0.72, 0.28, 7500.0, 13200.0, 460.0),
    row(0.46, 0.62, 0.118, 2500.0, 5000.0, 100.0),
    row(0.46, 0.68, 0.218, 5200.0, 10000.0, 275.0),
    row(0.46, 0.76, 0.3, 8300.0, 14600.0, 560.0),
    row(0.48, 0.7, 0.165, 3900.0, 6800.0, 210.0),
    row(0.48, 0.79, 0.308, 9000.0, 15600.0, 605.0),
    row(0.5, 0.72, 0.218, 5500.0, 11000.0, 295.0),
    row(0.5, 0.83, 0.325, 9800.0, 17000.0, 700.0),
    row(0.5, 0.92, 0.336, 10600.0, 17300.0, 985.0),
    row(0.53, 0.71, 0.136, 3200.0, 6700.0, 155.0),
    row(0.53, 0.78, 0.25, 6700.0, 13200.0, 410.0),
    row(0.53, 0.87, 0.335, 10600.0, 19000.0, 830.0),
    row(0.53, 0.98, 0.335, 12700.0, 20400.0, 1200.0),
    row(0.56, 0.82, 0.258, 7350.0, 14600.0, 465.0),
    row(0.56, 0.92, 0.335, 12000.0, 21600.0, 985.0),
    row(0.6, 0.87, 0.272, 8150.0, 17000.0, 520.0),
    row(0.6, 0.98, 0.375, 13200.0, 23600.0, 1200.0),
    row(0.6, 1.09, 0.388, 15000.0, 25500.0, 1600.0),
    row(0.63, 0.85, 0.165, 4650.0, 9800.0, 270.0),
    row(0.63, 0.92, 0.29, 8800.0, 18000.0, 645.0),
    row(0.63, 1.03, 0.4, 14600.0, 27000.0, 1400.0),
    row(0.67, 0.9, 0.17, 5000.0, 10800.0, 315.0),
    row(0.67, 0.98, 0.308, 10000.0, 20400.0, 790.0),
    row(0.67, 1.09, 0.412, 16000.0, 29000.0, 1600.0),
    row(0.71, 0.95, 0.18, 5600.0, 12000.0, 355.0),
    row(0.71, 1.03, 0.236, 8300.0, 16300.0, 650.0),
    row(0.71, 1.15, 0.345, 14000.0, 26000.0, 1405.0),
    row(0.71, 1.28, 0.45, 20400.0, 34500.0, 2610.0),
    row(0.75, 1.0, 0.185, 6000.0, 13200.0, 405.0),
    row(0.75, 1.09, 0.25, 9650.0, 18600.0, 795.0),
    row(0.75, 1.22, 0.365, 15600.0, 29000.0, 1650.0), // listed B = 365
    row(0.75, 1.36, 0.475, 21600.0, 36500.0, 3050.0),
    row(0.8, 1.06, 0.195, 6400.0, 14300.0, 455.0),
    row(0.8, 1.15, 0.258, 10000.0, 20000.0, 865.0),
    row(0.8, 1.28, 0.375, 17300.0, 31500.0, 1920.0),
    row(0.85, 1.12, 0.272, 9300.0, 22800.0, 740.0),
    row(0.85, 1.36, 0.5, 23200.0, 45000.0, 2710.0), // listed B = 500
    row(0.9, 1.118, 0.206, 7500.0, 17000.0, 585.0),
    row(0.9, 1.28, 0.28, 11600.0, 23200.0, 1200.0),
    row(0.9, 1.42, 0.515, 24500.0, 49000.0, 3350.0),
    row(0.95, 1.25, 0.3, 10600.0, 26000.0, 995.0),
    row(0.95, 1.36, 0.412, 17000.0, 39000.0, 1990.0),
    row(0.95, 1.5, 0.545, 27000.0, 55000.0, 3475.0),
    row(1.0, 1.32, 0.315, 11800.0, 29000.0, 1200.0),
    row(1.0, 1.42, 0.412, 17600.0, 40500.0, 2140.0),
    row(1.0, 1.58, 0.462, 24500.0, 48000.0, 3390.0),
    row(1.06, 1.28, 0.218, 6950.0, 20000.0, 570.0),
    row(1.06, 1.4, 0.25, 11000.0, 26000.0, 1065.0),
    row(1.06, 1.5, 0.325, 16000.0, 30500.0, 2190.0),
    row(1.12, 1.46, 0.335, 13700.0, 34500.0, 1475.0),
    row(1.12, 1.58, 0.462, 21200.0, 50000.0, 2825.0),
    row(1.12, 2.58, 0.462, 21200.0, 50000.0, 2925.0),
    row(1.18, 1.42, 0.243, 8800.0, 27000.0, 770.0),
    row(1.18, 1.42, 0.243, 8800.0, 27000.0, 755.0),
    row(1.18, 1.54, 0.355, 15600.0, 40500.0, 1770.0),
    row(1.25, 1.75, 0.375, 20400.0, 45000.0, 2840.0),
    row(1.32, 1.6, 0.28, 11200.0, 33500.0, 1160.0),
    row(1.32, 1.72, 0.4, 18600.0, 49000.0, 2455.0),
    row(1.5, 1.82, 0.315, 14600.0, 45000.0, 1710.0),
    row(1.8, 2.18, 0.375, 20000.0, 63000.0, 2900.0),
];

/// Single-row tapered roller bearings
pub(super) static TRB1: &[CatalogRow] = &[
    row(0.3, 0.46, 0.1, 140.0, 3000.0, 58.0),
    row(0.3, 0.54, 0.149, 2750.0, 4750.0, 140.0),
    row(0.32, 0.48, 0.1, 1540.0, 3100.0, 64.0),
    row(0.32, 0.62, 0.141, 2810.0, 4650.0, 180.0),
    row(0.34, 0.46, 0.076, 1080.0, 2400.0, 35.0),
    row(0.3556, 0.482, 0.06032, 572.0, 1200.0, 26.5),
    row(0.36, 0.68, 0.165, 3690.0, 6300.0, 260.0),
    row(0.36, 0.48, 0.076, 1120.0, 2550.0, 37.0),
    row(0.381, 0.479425, 0.0492, 594.0, 1500.0, 20.0),
    row(0.4064, 0.508, 0.0619, 825.0, 2120.0, 26.5),
    row(0.4064, 0.762, 0.181, 3690.0, 610.0, 320.0),
    row(0.416, 0.59, 0.1143, 2120.0, 4800.0, 120.0),
    row(0.4302, 0.60325, 0.0762, 1100.0, 2320.0, 59.0),
    row(0.4319, 0.6857, 0.1778, 3910.0, 8650.0, 253.0),
    row(0.4477, 0.635, 0.12065, 2380.0, 5500.0, 120.0),
    row(0.4572, 0.603, 0.0857, 1450.0, 3400.0, 61.5),
    row(0.4572, 0.61595, 0.08573, 1470.0, 3800.0, 72.0),
    row(0.479425, 0.795, 0.12859, 2750.0, 6300.0, 145.0),
    row(0.48, 0.95, 0.24, 7040.0, 12700.0, 760.0),
    row(0.4985, 0.63487, 0.0809, 1470.0, 3650.0, 59.5),
    row(0.5207, 0.7366, 0.0889, 1650.0, 3350.0, 100.0),
    row(0.5366, 0.82, 0.152, 3910.0, 7800.0, 272.0),
    row(0.5398, 0.635, 0.0508, 781.0, 2160.0, 27.0),
    row(0.5493, 0.69215, 0.08096, 1340.0, 3450.0, 67.0),
    row(0.5588, 0.7366, 0.1048, 2330.0, 5700.0, 115.0),
    row(0.56, 1.08, 0.265, 8970.0, 16000.0, 1060.0),
    row(0.60772, 0.7874, 0.09366, 2160.0, 5300.0, 110.0),
    row(0.635, 0.7366, 0.05715, 858.0, 2650.0, 37.0),
    row(0.6604, 0.9398, 0.1365, 3740.0, 8150.0, 287.0),
    row(0.724, 0.914, 0.0841, 1050.0, 4900.0, 115.0),
    row(0.68, 0.901, 0.1429, 3580.0, 9000.0, 242.0),
    row(0.71, 0.95, 0.113, 2860.0, 6550.0, 200.0),
    row(0.737, 0.8255, 0.0318, 429.0, 1370.0, 22.5),
    row(0.7493, 0.9906, 0.1595, 4570.0, 12000.0, 330.0),
    row(0.76, 0.889, 0.06985, 1230.0, 3800.0, 67.5),
    row(0.76, 0.889, 0.0889, 1870.0, 5850.0, 94.0),
    row(0.774, 0.965, 0.0937, 1940.0, 4900.0, 131.0),
    row(0.8, 0.914, 0.0587, 1100.0, 3550.0, 53.5),
    row(0.838, 1.041, 0.09366, 1900.0, 4800.0, 160.0),
    row(0.857, 1.092, 0.1207, 2810.0, 7350.0, 245.0),
    row(0.9, 1.18, 0.122, 3960.0, 9150.0, 340.0),
    row(0.978, 1.13, 0.0667, 1450.0, 4400.0, 100.0),
    row(1.016, 1.27, 0.1016, 250.0, 750.0, 275.0),
    row(1.27, 1.465, 0.073, 2120.0, 6950.0, 153.0),
    row(1.27, 1.465, 0.1, 3190.0, 10800.0, 265.0),
];

/// Cylindrical roller bearings
pub(super) static CRB: &[CatalogRow] = &[
    row(0.3, 0.46, 0.074, 858.0, 1370.0, 47.0),
    row(0.3, 0.54, 0.085, 1420.0, 2120.0, 89.5),
    row(0.3, 0.54, 0.14, 2090.0, 3450.0, 145.0),
    row(0.32, 0.4, 0.048, 495.0, 1060.0, 14.5),
    row(0.32, 0.44, 0.072, 765.0, 1500.0, 34.5),
    row(0.32, 0.58, 0.15, 3190.0, 5000.0, 180.0),
    row(0.34, 0.46, 0.056, 1020.0, 2040.0, 37.0),
    row(0.34, 0.58, 0.19, 3190.0, 5700.0, 210.0),
    row(0.35, 0.48, 0.085, 1060.0, 2160.0, 48.0),
    row(0.36, 0.54, 0.106, 1940.0, 3600.0, 88.5),
    row(0.36, 0.6, 0.192, 4310.0, 5700.0, 225.0),
    row(0.38, 0.48, 0.046, 539.0, 1060.0, 23.0),
    row(0.38, 0.56, 0.106, 1980.0, 3750.0, 92.5),
    row(0.38, 0.68, 0.175, 3960.0, 6400.0, 275.0),
    row(0.4, 0.54, 0.082, 1190.0, 2500.0, 54.5),
    row(0.4, 0.6, 0.118, 220.0, 4750.0, 120.0),
    row(0.42, 0.56, 0.082, 1210.0, 2550.0, 59.0),
    row(0.42, 0.62, 0.15, 2920.0, 5400.0, 160.0),
    row(0.44, 0.6, 0.095, 1720.0, 3600.0, 84.0),
    row(0.44, 0.65, 0.122, 2550.0, 4900.0, 145.0),
    row(0.44, 0.72, 0.226, 5120.0, 9650.0, 395.0),
    row(0.46, 0.58, 0.072, 1080.0, 2400.0, 48.0), // listed B = 0.72
    row(0.46, 0.68, 0.128, 2810.0, 5400.0, 165.0), // listed B = 128
    row(0.46, 0.83, 0.165, 4180.0, 6800.0, 415.0),
    row(0.48, 0.6, 0.072, 1100.0, 2450.0, 47.5),
    row(0.48, 0.65, 0.078, 1170.0, 2240.0, 78.0),
    row(0.48, 0.7, 0.128, 2860.0, 5600.0, 170.0),
    row(0.5, 0.67, 0.128, 2330.0, 5200.0, 130.0),
    row(0.5, 0.72, 0.128, 2920.0, 5850.0, 180.0),
    row(0.5, 0.83, 0.264, 6440.0, 12000.0, 595.0),
    row(0.53, 0.71, 0.106, 2380.0, 5000.0, 120.0),
    row(0.53, 0.78, 0.145, 3740.0, 7350.0, 225.0),
    row(0.53, 0.87, 0.272, 7480.0, 14600.0, 660.0),
    row(0.56, 0.68, 0.056, 809.0, 1830.0, 44.5),
    row(0.56, 0.75, 0.112, 2460.0, 5400.0, 145.0),
    row(0.56, 0.82, 0.15, 3800.0, 7650.0, 290.0),
    row(0.56, 1.03, 0.206, 7210.0, 11200.0, 805.0),
    row(0.6, 0.8, 0.09, 1900.0, 3800.0, 135.0),
    row(0.6, 0.87, 0.118, 2750.0, 5100.0, 245.0),
    row(0.6, 1.09, 0.155, 5610.0, 9800.0, 710.0),
    row(0.63, 0.78, 0.088, 1570.0, 3900.0, 100.0),
    row(0.63, 0.85, 0.128, 3410.0, 6200.0, 285.0),
    row(0.63, 0.92, 0.212, 6440.0, 14300.0, 490.0),
    row(0.6604, 0.8636, 0.10795, 3080.0, 6550.0, 177.0),
    row(0.67, 0.9, 0.103, 2330.0, 4750.0, 195.0),
    row(0.67, 0.98, 0.18, 5390.0, 11000.0, 480.0),
    row(0.71, 0.95, 0.14, 3740.0, 8300.0, 300.0),
    row(0.71, 1.03, 0.185, 5940.0, 12000.0, 540.0),
    row(0.75, 1.0, 0.112, 2810.0, 5850.0, 265.0), // listed B = 112
    row(0.75, 1.09, 0.195, 7040.0, 14600.0, 635.0),
    row(0.8, 1.15, 0.2, 7040.0, 14600.0, 715.0),
    row(0.8, 0.98, 0.082, 1720.0, 4150.0, 145.0),
    row(0.82, 0.99, 0.072, 858.0, 1960.0, 100.0),
    row(0.85, 1.03, 0.106, 2120.0, 6000.0, 195.0),
    row(0.85, 1.12, 0.118, 3190.0, 6950.0, 330.0),
    row(0.9, 1.09, 0.112, 2700.0, 7200.0, 240.0),
    row(0.9, 1.18, 0.165, 5830.0, 14000.0, 560.0),
    row(0.95, 1.25, 0.175, 5830.0, 14000.0, 745.0),
    row(0.95, 1.15, 0.09, 1340.0, 3100.0, 170.0),
    row(1.0, 1.22, 0.128, 3690.0, 10000.0, 350.0),
    row(1.0, 1.32, 0.185, 7040.0, 17300.0, 700.0),
    row(1.03, 1.25, 0.1, 1510.0, 3450.0, 230.0), // listed D = 1250
    row(1.06, 1.28, 0.128, 3580.0, 10400.0, 360.0),
    row(1.06, 1.4, 0.195, 7210.0, 17300.0, 870.0),
    row(1.06, 1.5, 0.325, 13000.0, 32500.0, 1900.0),
    row(1.12, 1.36, 0.106, 3410.0, 8650.0, 335.0),
    row(1.12, 1.58, 0.345, 15700.0, 39000.0, 2150.0),
    row(1.18, 1.42, 0.106, 3030.0, 7800.0, 350.0),
    row(1.18, 1.54, 0.206, 8970.0, 21600.0, 1050.0),
    row(1.18, 1.54, 0.272, 11200.0, 29000.0, 1400.0),
    row(1.25, 1.5, 0.106, 1720.0, 4150.0, 330.0),
    row(1.25, 1.75, 0.29, 12800.0, 30500.0, 2320.0),
    row(1.32, 1.6, 0.122, 3800.0, 10000.0, 530.0),
    row(1.32, 1.72, 0.3, 13200.0, 34000.0, 1900.0),
    row(1.32, 1.85, 0.4, 21600.0, 55000.0, 3550.0),
    row(1.4, 1.2, 0.175, 6600.0, 18300.0, 860.0),
    row(1.5, 1.82, 0.14, 3300.0, 8000.0, 665.0),
    row(1.7, 2.06, 0.16, 3690.0, 9150.0, 925.0),
    row(1.7, 2.06, 0.16, 7210.0, 19300.0, 1150.0),
    row(1.7, 2.06, 0.16, 3690.0, 9150.0, 935.0),
];

/// Double-row tapered roller bearings
pub(super) static TRB2: &[CatalogRow] = &[
    row(0.3, 0.5, 0.203, 2810.0, 5100.0, 140.0),
    row(0.3175, 0.447675, 0.181, 2330.0, 5400.0, 84.0),
    row(0.3302, 0.482, 0.1778, 2240.0, 5000.0, 100.0),
    row(0.34, 0.46, 0.16, 2050.0, 4900.0, 71.0),
    row(0.34, 0.5334, 0.174625, 2380.0, 4400.0, 130.0),
    row(0.3556, 0.444, 0.1365, 1250.0, 3650.0, 46.0),
    row(0.3556, 0.5017, 0.1556, 1830.0, 4250.0, 87.0),
    row(0.368, 0.524, 0.214, 3140.0, 7500.0, 140.0),
    row(0.38, 0.52, 0.148, 2160.0, 4500.0, 80.2),
    row(0.38, 0.66, 0.38, 7650.0, 16000.0, 520.0),
    row(0.384, 0.5461, 0.2223, 3470.0, 8300.0, 161.0),
    row(0.431, 0.5715, 0.1556, 1980.0, 5100.0, 100.0),
    row(0.431, 0.5715, 0.1921, 2640.0, 6950.0, 125.0),
    row(0.4477, 0.635, 0.2572, 4400.0, 11000.0, 245.0),
    row(0.4985, 0.635, 0.1778, 2750.0, 7350.0, 125.0),
    row(0.508, 0.8382, 0.3048, 6440.0, 14000.0, 630.0),
    row(0.5366, 0.762, 0.311, 6270.0, 16000.0, 430.0),
    row(0.5588, 0.7366, 0.1873, 3410.0, 8300.0, 190.0),
    row(0.5715, 0.8128, 0.1905, 3580.0, 8800.0, 250.0),
    row(0.6096, 0.787, 0.206, 4020.0, 10600.0, 232.0),
    row(0.635, 0.99, 0.339, 8090.0, 16000.0, 840.0),
    row(0.6858, 0.8763, 0.2, 3910.0, 11000.0, 270.0),
    row(0.711, 0.9144, 0.1905, 3800.0, 9650.0, 265.0),
    row(0.7239, 0.9144, 0.1873, 3800.0, 9650.0, 250.0),
    row(0.775, 0.965, 0.187, 3580.0, 10200.0, 350.0),
    row(0.775, 1.016, 0.2267, 6440.0, 17000.0, 525.0),
    row(0.8128, 1.016, 0.19, 3580.0, 10200.0, 350.0),
    row(0.8636, 1.371, 0.4699, 14700.0, 32000.0, 2250.0),
    row(0.9144, 1.066, 0.1397, 2600.0, 8000.0, 190.0),
    row(0.9398, 1.27, 0.457, 9680.0, 29000.0, 1540.0),
    row(1.12, 1.48, 0.4, 13400.0, 38000.0, 1900.0),
    row(1.16, 1.54, 0.4, 14200.0, 38000.0, 1900.0),
    row(1.25, 1.5, 0.25, 7370.0, 2240.0, 795.0),
    row(1.321, 1.727, 0.41275, 14000.0, 40500.0, 2325.0),
    row(1.562, 1.8066, 0.2794, 7210.0, 28000.0, 1045.0),
    row(1.778, 2.159, 0.3937, 15400.0, 53000.0, 2750.0),
    row(2.0, 2.5, 0.32, 7810.0, 33500.0, 3040.0),
    row(2.134, 2.8194, 0.742, 34700.0, 10800.0, 11600.0),
    row(2.1844, 2.527, 0.3048, 3950.0, 37500.0, 2230.0),
    row(2.616, 3.048, 0.381, 12300.0, 53000.0, 4485.0),
    row(3.3782, 3.835, 0.3937, 15100.0, 63000.0, 6380.0),
    row(3.811, 4.216, 0.419, 19400.0, 108000.0, 6315.0),
];

/// Deep-groove radial ball bearings
pub(super) static RB: &[CatalogRow] = &[
    row(0.3, 0.42, 0.056, 270.0, 375.0, 24.5),
    row(0.3, 0.46, 0.074, 358.0, 500.0, 44.0),
    row(0.3, 0.54, 0.085, 462.0, 670.0, 88.5),
    row(0.32, 0.44, 0.056, 276.0, 400.0, 25.5),
    row(0.32, 0.48, 0.074, 371.0, 540.0, 46.0),
    row(0.33, 0.46, 0.056, 281.0, 425.0, 26.5),
    row(0.34, 0.48, 0.06, 291.0, 430.0, 36.0),
    row(0.34, 0.52, 0.082, 423.0, 640.0, 62.0),
    row(0.34, 0.62, 0.092, 559.0, 900.0, 110.0),
    row(0.35, 0.5, 0.07, 319.0, 475.0, 46.0),
    row(0.36, 0.48, 0.056, 291.0, 450.0, 28.0),
    row(0.36, 0.54, 0.082, 462.0, 735.0, 64.5),
    row(0.38, 0.48, 0.046, 242.0, 390.0, 20.0),
    row(0.38, 0.56, 0.057, 377.0, 620.0, 51.0), // listed C = 0.377, C0 = 0.62
    row(0.4, 0.54, 0.065, 345.0, 570.0, 41.5),
    row(0.4, 0.6, 0.09, 520.0, 865.0, 87.5), // listed C0 = 0.865
    row(0.4, 0.72, 0.13, 663.0, 1160.0, 235.0),
    row(0.42, 0.56, 0.065, 351.0, 600.0, 43.0),
    row(0.42, 0.62, 0.09, 507.0, 880.0, 91.5),
    row(0.46, 0.62, 0.074, 423.0, 750.0, 62.5),
    row(0.46, 0.68, 0.1, 582.0, 1060.0, 120.0),
    row(0.48, 0.65, 0.078, 449.0, 815.0, 74.0),
    row(0.48, 0.7, 0.1, 618.0, 1140.0, 125.0),
    row(0.5, 0.62, 0.056, 332.0, 620.0, 40.0),
    row(0.5, 0.689, 0.1, 475.0, 865.0, 77.0), // listed B = 100
    row(0.5, 0.72, 0.1, 605.0, 1140.0, 135.0),
    row(0.53, 0.71, 0.082, 488.0, 930.0, 90.5),
    row(0.53, 0.76, 0.1, 585.0, 1120.0, 150.0),
    row(0.53, 0.78, 0.112, 650.0, 1270.0, 185.0),
    row(0.56, 0.68, 0.056, 345.0, 695.0, 42.0),
    row(0.56, 0.82, 0.115, 663.0, 1470.0, 210.0),
    row(0.6, 0.8, 0.09, 585.0, 1220.0, 125.0),
    row(0.6, 0.87, 0.118, 728.0, 1500.0, 230.0),
    row(0.63, 0.78, 0.069, 442.0, 965.0, 73.0),
    row(0.63, 0.92, 0.128, 819.0, 1760.0, 285.0),
    row(0.67, 0.82, 0.069, 442.0, 1000.0, 800.0),
    row(0.67, 0.9, 0.103, 676.0, 1500.0, 185.0),
    row(0.67, 0.98, 0.136, 904.0, 2040.0, 345.0),
    row(0.71, 1.0, 0.14, 832.0, 1900.0, 335.0),
    row(0.71, 1.08, 0.16, 1040.0, 2400.0, 505.0),
    row(0.73, 0.94, 0.1, 650.0, 1500.0, 175.0),
    row(0.75, 1.0, 0.112, 761.0, 1800.0, 255.0),
    row(0.75, 1.09, 0.15, 995.0, 2360.0, 485.0),
    row(0.76, 1.08, 0.15, 923.0, 2200.0, 430.0),
    row(0.8, 1.08, 0.115, 819.0, 2040.0, 320.0),
    row(0.8, 1.15, 0.155, 1010.0, 2550.0, 535.0),
    row(0.85, 1.03, 0.082, 559.0, 1430.0, 140.0),
    row(0.85, 1.22, 0.165, 1120.0, 2900.0, 630.0),
    row(0.9, 1.18, 0.122, 852.0, 2280.0, 350.0),
    row(0.9, 1.28, 0.17, 1140.0, 3100.0, 720.0),
    row(0.95, 1.25, 0.132, 1010.0, 2800.0, 390.0),
    row(0.95, 1.36, 0.18, 1170.0, 3250.0, 860.0),
    row(0.97, 1.125, 0.075, 488.0, 1340.0, 125.0),
    row(1.0, 1.32, 0.103, 819.0, 2360.0, 410.0),
    row(1.0, 1.42, 0.185, 1350.0, 3900.0, 930.0),
    row(1.06, 1.28, 0.1, 728.0, 2120.0, 240.0),
    row(1.06, 1.5, 0.195, 1350.0, 3900.0, 1080.0),
    row(1.12, 1.36, 0.106, 761.0, 2360.0, 330.0),
    row(1.12, 1.58, 0.2, 1460.0, 4400.0, 1250.0),
    row(1.12, 1.46, 0.15, 1040.0, 3100.0, 650.0),
    row(1.18, 1.42, 0.106, 761.0, 2360.0, 330.0),
    row(1.18, 1.54, 0.16, 1140.0, 4400.0, 1250.0),
    row(1.25, 1.5, 0.112, 852.0, 2750.0, 385.0),
    row(1.32, 1.6, 0.122, 956.0, 3150.0, 500.0),
    row(1.32, 1.72, 0.128, 1210.0, 4050.0, 830.0),
    row(1.4, 1.82, 0.185, 1590.0, 5500.0, 1250.0),
    row(1.5, 1.82, 0.14, 1210.0, 4400.0, 690.0),
    row(1.5, 1.95, 0.195, 1720.0, 6100.0, 1500.0),
    row(1.6, 1.95, 0.155, 1270.0, 4800.0, 965.0),
    row(1.6, 2.06, 0.2, 1860.0, 6950.0, 1650.0),
    row(1.7, 2.06, 0.16, 1270.0, 4900.0, 1100.0),
    row(1.7, 2.18, 0.212, 1990.0, 7650.0, 1950.0),
    row(1.8, 2.0, 0.1, 715.0, 2850.0, 325.0),
    row(2.0, 2.2, 0.075, 936.0, 4500.0, 290.0),
    row(2.39, 2.69, 0.12, 1300.0, 6200.0, 975.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_physical() {
        for table in [CARB, SRB, TRB1, CRB, TRB2, RB] {
            assert!(!table.is_empty());
            for r in table.iter() {
                assert!(r.d > 0.0 && r.b > 0.0 && r.c > 0.0 && r.mass > 0.0, "{:?}", r);
                // Facewidths are all well under a metre
                assert!(r.b < 1.0, "{:?}", r);
            }
        }
    }

    #[test]
    fn test_rescaled_rows_stored_in_table_units() {
        assert!(SRB.contains(&row(0.75, 1.22, 0.365, 15600.0, 29000.0, 1650.0)));
        assert!(CRB.contains(&row(1.03, 1.25, 0.1, 1510.0, 3450.0, 230.0)));
        assert!(RB.contains(&row(0.38, 0.56, 0.057, 377.0, 620.0, 51.0)));
        // Ratings never fall below a kilonewton
        assert!(RB.iter().all(|r| r.c >= 1.0 && r.c0 >= 1.0));
    }

    #[test]
    fn test_reference_srb_row_present() {
        assert!(SRB.contains(&row(0.6, 0.87, 0.272, 8150.0, 17000.0, 520.0)));
    }
}
