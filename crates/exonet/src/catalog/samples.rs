use crate::classifier::FeatureSet;
use rand::Rng;
use serde::Serialize;

/// Pool rows are reported with the row number they had in the source export.
pub const ROW_NUMBER_OFFSET: usize = 71;

/// One fully populated candidate row, in catalog field order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleRow {
    pub koi_period: f64,
    pub koi_time0bk: f64,
    pub koi_impact: f64,
    pub koi_duration: f64,
    pub koi_depth: f64,
    pub koi_prad: f64,
    pub koi_teq: f64,
    pub koi_insol: f64,
    pub koi_model_snr: f64,
    pub koi_tce_plnt_num: u8,
    pub koi_steff: f64,
    pub koi_slogg: f64,
    pub koi_srad: f64,
    pub ra: f64,
    pub dec: f64,
    pub koi_kepmag: f64,
    pub koi_fpflag_nt: u8,
    pub koi_fpflag_ss: u8,
    pub koi_fpflag_co: u8,
    pub koi_fpflag_ec: u8,
}

impl SampleRow {
    pub fn to_feature_set(&self) -> FeatureSet {
        [
            ("koi_period", self.koi_period),
            ("koi_time0bk", self.koi_time0bk),
            ("koi_impact", self.koi_impact),
            ("koi_duration", self.koi_duration),
            ("koi_depth", self.koi_depth),
            ("koi_prad", self.koi_prad),
            ("koi_teq", self.koi_teq),
            ("koi_insol", self.koi_insol),
            ("koi_model_snr", self.koi_model_snr),
            ("koi_tce_plnt_num", f64::from(self.koi_tce_plnt_num)),
            ("koi_steff", self.koi_steff),
            ("koi_slogg", self.koi_slogg),
            ("koi_srad", self.koi_srad),
            ("ra", self.ra),
            ("dec", self.dec),
            ("koi_kepmag", self.koi_kepmag),
            ("koi_fpflag_nt", f64::from(self.koi_fpflag_nt)),
            ("koi_fpflag_ss", f64::from(self.koi_fpflag_ss)),
            ("koi_fpflag_co", f64::from(self.koi_fpflag_co)),
            ("koi_fpflag_ec", f64::from(self.koi_fpflag_ec)),
        ]
        .into_iter()
        .collect()
    }
}

/// A row drawn from the pool together with its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleDraw {
    pub index: usize,
    pub row_number: usize,
    pub row: &'static SampleRow,
}

/// Named showcase candidate used to pre-fill the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeaturedCandidate {
    pub name: &'static str,
    pub mission: &'static str,
    pub description: &'static str,
    pub features: SampleRow,
}

pub fn sample_pool() -> &'static [SampleRow] {
    &SAMPLE_POOL
}

pub fn sample_at(index: usize) -> Option<SampleDraw> {
    SAMPLE_POOL.get(index).map(|row| SampleDraw {
        index,
        row_number: ROW_NUMBER_OFFSET + index,
        row,
    })
}

/// Picks a pool row uniformly at random.
pub fn random_sample<R: Rng>(rng: &mut R) -> SampleDraw {
    let index = rng.gen_range(0..SAMPLE_POOL.len());
    SampleDraw {
        index,
        row_number: ROW_NUMBER_OFFSET + index,
        row: &SAMPLE_POOL[index],
    }
}

pub fn featured_candidate() -> &'static FeaturedCandidate {
    &TOI_700_D
}

const fn sample(measurements: [f64; 15], tce_plnt_num: u8, flags: [u8; 4]) -> SampleRow {
    SampleRow {
        koi_period: measurements[0],
        koi_time0bk: measurements[1],
        koi_impact: measurements[2],
        koi_duration: measurements[3],
        koi_depth: measurements[4],
        koi_prad: measurements[5],
        koi_teq: measurements[6],
        koi_insol: measurements[7],
        koi_model_snr: measurements[8],
        koi_tce_plnt_num: tce_plnt_num,
        koi_steff: measurements[9],
        koi_slogg: measurements[10],
        koi_srad: measurements[11],
        ra: measurements[12],
        dec: measurements[13],
        koi_kepmag: measurements[14],
        koi_fpflag_nt: flags[0],
        koi_fpflag_ss: flags[1],
        koi_fpflag_co: flags[2],
        koi_fpflag_ec: flags[3],
    }
}

static TOI_700_D: FeaturedCandidate = FeaturedCandidate {
    name: "TOI-700 d (TESS Confirmed Planet)",
    mission: "TESS",
    description: "Earth-sized planet in the habitable zone of its star",
    features: sample(
        [
            37.4242, 1570.0, 0.34, 3.65, 287.5, 1.19, 268.8, 0.867, 42.3, 3480.0, 4.95, 0.415,
            103.0886, -65.1436, 9.75,
        ],
        3,
        [0, 0, 0, 0],
    ),
};

// Measurements: period, epoch, impact, duration, depth, radius, teq, insolation, snr,
// steff, slogg, srad, ra, dec, kepmag.
static SAMPLE_POOL: [SampleRow; 21] = [
    sample(
        [
            37.426, 1570.0, 0.234, 3.68, 144.0, 1.19, 269.0, 0.867, 52.3, 3480.0, 4.95, 0.415,
            102.196, -65.468, 9.8,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            3.689, 1450.2, 0.12, 2.4, 890.0, 2.65, 1350.0, 185.0, 78.5, 5500.0, 4.45, 0.98, 45.234,
            12.567, 11.2,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            5.66, 1520.8, 0.45, 1.89, 320.0, 2.42, 525.0, 12.8, 45.2, 3386.0, 4.89, 0.38, 158.974,
            -51.933, 12.4,
        ],
        2,
        [0, 0, 0, 0],
    ),
    sample(
        [
            24.246, 1605.5, 0.28, 4.2, 425.0, 3.45, 330.0, 1.95, 62.8, 3250.0, 4.92, 0.46, 178.456,
            -66.223, 10.5,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            16.056, 1490.3, 0.34, 3.1, 780.0, 2.98, 890.0, 48.5, 58.9, 6180.0, 4.12, 1.56, 203.567,
            18.445, 9.3,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            8.138, 1472.6, 0.19, 2.95, 567.0, 1.87, 745.0, 28.4, 68.3, 4890.0, 4.62, 0.78, 67.892,
            -34.156, 10.7,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            42.189, 1588.9, 0.41, 5.12, 298.0, 2.14, 412.0, 3.67, 41.7, 5670.0, 4.38, 1.12, 189.234,
            23.678, 11.8,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            11.437, 1501.4, 0.22, 3.45, 634.0, 2.31, 658.0, 19.8, 55.6, 5230.0, 4.51, 0.89, 124.567,
            -12.345, 10.2,
        ],
        2,
        [0, 0, 0, 0],
    ),
    sample(
        [
            6.724, 1467.8, 0.15, 2.18, 423.0, 1.65, 892.0, 42.3, 72.1, 5890.0, 4.29, 1.05, 234.789,
            45.123, 9.9,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            28.934, 1576.2, 0.38, 4.67, 189.0, 1.42, 356.0, 2.14, 48.9, 4120.0, 4.78, 0.61, 312.456,
            -56.789, 11.4,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            14.892, 1512.7, 0.29, 3.78, 712.0, 2.78, 589.0, 15.6, 63.4, 5450.0, 4.42, 0.95, 89.123,
            8.456, 10.6,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            4.523, 1458.3, 0.08, 1.89, 956.0, 3.12, 1120.0, 98.7, 84.2, 6230.0, 4.18, 1.34, 156.789,
            -28.901, 9.5,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            19.678, 1534.1, 0.33, 4.12, 534.0, 2.45, 478.0, 8.9, 51.8, 4780.0, 4.68, 0.72, 267.345,
            34.567, 11.1,
        ],
        2,
        [0, 0, 0, 0],
    ),
    sample(
        [
            9.234, 1485.6, 0.17, 2.87, 689.0, 2.23, 723.0, 32.4, 69.5, 5340.0, 4.48, 0.91, 198.234,
            -7.890, 10.3,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            32.567, 1592.8, 0.42, 4.95, 267.0, 1.78, 389.0, 2.89, 44.3, 4450.0, 4.72, 0.68, 78.901,
            -41.234, 11.6,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            7.891, 1478.9, 0.21, 2.67, 812.0, 2.89, 812.0, 38.6, 74.8, 5780.0, 4.35, 1.02, 145.678,
            19.345, 9.7,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            13.456, 1508.4, 0.26, 3.56, 478.0, 2.01, 612.0, 17.3, 58.7, 5120.0, 4.55, 0.86, 289.456,
            -15.678, 10.9,
        ],
        2,
        [0, 0, 0, 0],
    ),
    sample(
        [
            5.123, 1461.7, 0.11, 2.03, 734.0, 2.56, 998.0, 67.8, 79.2, 5920.0, 4.26, 1.08, 223.789,
            52.123, 9.8,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            21.789, 1548.3, 0.35, 4.34, 356.0, 1.92, 445.0, 6.7, 49.6, 4890.0, 4.64, 0.75, 112.345,
            -22.567, 11.3,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            10.234, 1493.6, 0.19, 3.12, 623.0, 2.34, 689.0, 24.5, 66.4, 5450.0, 4.44, 0.93, 178.901,
            6.789, 10.4,
        ],
        1,
        [0, 0, 0, 0],
    ),
    sample(
        [
            27.345, 1571.9, 0.39, 4.78, 212.0, 1.56, 367.0, 2.45, 46.2, 4230.0, 4.75, 0.64, 301.234,
            -48.901, 11.7,
        ],
        1,
        [0, 0, 0, 0],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{classify, FeatureKey, Label};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sample_at_reports_offset_row_numbers() {
        let first = sample_at(0).expect("first row");
        assert_eq!(first.row_number, 71);
        assert_eq!(first.row.koi_period, 37.426);

        let last = sample_at(20).expect("last row");
        assert_eq!(last.row_number, 91);
        assert!(sample_at(21).is_none());
    }

    #[test]
    fn random_sample_stays_within_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let draw = random_sample(&mut rng);
            assert!(draw.index < sample_pool().len());
            assert_eq!(draw.row, &sample_pool()[draw.index]);
        }
    }

    #[test]
    fn feature_set_carries_every_column() {
        let features = sample_pool()[1].to_feature_set();
        assert_eq!(features.len(), 20);
        assert_eq!(features.get(FeatureKey::KoiModelSnr), 78.5);
        assert_eq!(features.raw("koi_tce_plnt_num"), Some(1.0));
    }

    #[test]
    fn every_pool_row_classifies_as_planet() {
        for (index, row) in sample_pool().iter().enumerate() {
            let result = classify(&row.to_feature_set());
            assert_eq!(result.label, Label::Planet, "pool row {index}");
        }
    }

    #[test]
    fn featured_candidate_serializes_features_by_name() {
        let encoded = serde_json::to_value(featured_candidate()).expect("serializes");
        assert_eq!(encoded["mission"], "TESS");
        assert_eq!(encoded["features"]["koi_model_snr"], 42.3);
        assert_eq!(encoded["features"]["koi_fpflag_nt"], 0);
    }
}
