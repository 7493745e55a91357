//! Built-in sample dataset.
//!
//! Fallback fixture used whenever a configured source fails or no input
//! is given. One tuple per (vehicle, registration year) cell:
//! (category, vehicle, year, depreciation, units observed).

use crate::config::Config;

use super::listing::{Category, RawListing, Source, SourceResult};

use Category::{FourteenFtDiesel, TenFtDiesel, VanDiesel, VanPetrol};

#[rustfmt::skip]
const SAMPLE_CELLS: &[(Category, &str, &str, u32, u32)] = &[
    (TenFtDiesel, "HINO DUTRO 2.8", "2025", 11510, 49),
    (TenFtDiesel, "HINO DUTRO 2.8", "2024", 11450, 8),
    (TenFtDiesel, "TOYOTA DYNA 2.8", "2023", 14720, 2),
    (TenFtDiesel, "TOYOTA DYNA 2.8", "2022", 12740, 14),
    (TenFtDiesel, "TOYOTA DYNA 2.8", "2021", 13310, 4),
    (TenFtDiesel, "TOYOTA DYNA 3.0", "2022", 13470, 1),
    (TenFtDiesel, "TOYOTA DYNA 3.0", "2021", 15580, 4),
    (TenFtDiesel, "TOYOTA DYNA 3.0", "2020", 15330, 11),
    (TenFtDiesel, "TOYOTA DYNA 3.0", "2019", 16160, 10),
    (TenFtDiesel, "TOYOTA DYNA 3.0", "2018", 16220, 7),
    (TenFtDiesel, "TOYOTA DYNA 3.0", "2017", 16700, 5),
    (TenFtDiesel, "TOYOTA DYNA 3.0", "2016", 9950, 19),
    (TenFtDiesel, "TOYOTA DYNA 3.0", "2015", 9840, 23),
    (TenFtDiesel, "TOYOTA DYNA 3.0", "2014", 8960, 19),
    (TenFtDiesel, "NISSAN CABSTAR", "2022", 10110, 1),
    (TenFtDiesel, "NISSAN CABSTAR", "2021", 8530, 1),
    (TenFtDiesel, "NISSAN CABSTAR", "2020", 9770, 2),
    (TenFtDiesel, "NISSAN CABSTAR", "2017", 11090, 9),
    (TenFtDiesel, "NISSAN CABSTAR", "2016", 8360, 3),
    (TenFtDiesel, "NISSAN CABSTAR", "2015", 9620, 1),
    (TenFtDiesel, "NISSAN CABSTAR", "2014", 8700, 7),
    (TenFtDiesel, "MITSUBISHI FEA01", "2021", 11550, 5),
    (TenFtDiesel, "MITSUBISHI FEA01", "2020", 11670, 3),
    (TenFtDiesel, "MITSUBISHI FEA01", "2019", 12060, 4),
    (TenFtDiesel, "MITSUBISHI FEA01", "2017", 11550, 2),
    (TenFtDiesel, "MITSUBISHI FEA01", "2016", 18840, 2),
    (TenFtDiesel, "MITSUBISHI FEA01", "2015", 8560, 3),
    (TenFtDiesel, "MITSUBISHI FEA01", "2014", 10940, 3),
    (TenFtDiesel, "ISUZU NHR / NJR", "2025", 13470, 2),
    (TenFtDiesel, "ISUZU NHR / NJR", "2021", 11400, 1),
    (TenFtDiesel, "ISUZU NHR / NJR", "2020", 12990, 2),
    (TenFtDiesel, "ISUZU NHR / NJR", "2018", 11680, 3),
    (TenFtDiesel, "ISUZU NHR / NJR", "2017", 11740, 3),
    (TenFtDiesel, "ISUZU NHR / NJR", "2016", 9150, 6),
    (TenFtDiesel, "ISUZU NHR / NJR", "2015", 8080, 6),
    (TenFtDiesel, "ISUZU NHR / NJR", "2014", 8920, 2),
    (TenFtDiesel, "KIA 2500", "2024", 10550, 1),
    (TenFtDiesel, "KIA 2500", "2023", 11170, 2),
    (TenFtDiesel, "KIA 2500", "2022", 10020, 3),
    (TenFtDiesel, "KIA 2500", "2021", 11180, 3),
    (TenFtDiesel, "KIA 2500", "2020", 10350, 2),
    (FourteenFtDiesel, "HINO XZU710", "2025", 12220, 27),
    (FourteenFtDiesel, "HINO XZU710", "2024", 12220, 6),
    (FourteenFtDiesel, "HINO XZU710", "2023", 13120, 2),
    (FourteenFtDiesel, "HINO XZU710", "2022", 13880, 2),
    (FourteenFtDiesel, "HINO XZU710", "2021", 15790, 1),
    (FourteenFtDiesel, "HINO XZU710", "2020", 16130, 2),
    (FourteenFtDiesel, "HINO XZU710", "2019", 16280, 1),
    (FourteenFtDiesel, "HINO XZU710", "2018", 16270, 3),
    (FourteenFtDiesel, "HINO XZU710", "2017", 18440, 1),
    (FourteenFtDiesel, "HINO XZU710", "2016", 29970, 3),
    (FourteenFtDiesel, "HINO XZU710", "2015", 10370, 3),
    (FourteenFtDiesel, "HINO XZU710", "2014", 18020, 1),
    (FourteenFtDiesel, "ISUZU NPR85", "2025", 13180, 2),
    (FourteenFtDiesel, "ISUZU NPR85", "2022", 14060, 5),
    (FourteenFtDiesel, "ISUZU NPR85", "2021", 13760, 3),
    (FourteenFtDiesel, "ISUZU NPR85", "2018", 19710, 1),
    (FourteenFtDiesel, "ISUZU NPR85", "2017", 13610, 3),
    (FourteenFtDiesel, "ISUZU NPR85", "2015", 9170, 2),
    (FourteenFtDiesel, "ISUZU NPR85", "2014", 13640, 1),
    (FourteenFtDiesel, "ISUZU NMR85", "2025", 12520, 2),
    (FourteenFtDiesel, "ISUZU NMR85", "2022", 13530, 1),
    (FourteenFtDiesel, "ISUZU NMR85", "2019", 13460, 1),
    (FourteenFtDiesel, "ISUZU NMR85", "2018", 17190, 1),
    (FourteenFtDiesel, "ISUZU NNR85", "2025", 12250, 1),
    (FourteenFtDiesel, "ISUZU NNR85", "2022", 13740, 2),
    (FourteenFtDiesel, "ISUZU NNR85", "2018", 14560, 2),
    (FourteenFtDiesel, "ISUZU NNR85", "2017", 16420, 1),
    (FourteenFtDiesel, "ISUZU NNR85", "2016", 10150, 1),
    (FourteenFtDiesel, "ISUZU NNR85", "2014", 10230, 1),
    (FourteenFtDiesel, "MITSUBISHI FEB21", "2025", 12370, 12),
    (FourteenFtDiesel, "MITSUBISHI FEB21", "2023", 12470, 2),
    (FourteenFtDiesel, "MITSUBISHI FEB21", "2020", 13060, 4),
    (FourteenFtDiesel, "MITSUBISHI FEB21", "2019", 14770, 5),
    (FourteenFtDiesel, "MITSUBISHI FEB21", "2018", 15740, 7),
    (FourteenFtDiesel, "MITSUBISHI FEB21", "2017", 16320, 7),
    (FourteenFtDiesel, "MITSUBISHI FEB21", "2016", 9950, 8),
    (FourteenFtDiesel, "MITSUBISHI FEB21", "2015", 8360, 19),
    (FourteenFtDiesel, "MITSUBISHI FEB21", "2014", 10030, 5),
    (VanDiesel, "TOYOTA HIACE 3.0M", "2022", 13610, 1),
    (VanDiesel, "TOYOTA HIACE 3.0M", "2021", 13590, 7),
    (VanDiesel, "TOYOTA HIACE 3.0M", "2020", 13310, 12),
    (VanDiesel, "TOYOTA HIACE 3.0M", "2019", 14130, 10),
    (VanDiesel, "TOYOTA HIACE 3.0M", "2018", 13780, 13),
    (VanDiesel, "TOYOTA HIACE 3.0M", "2017", 13630, 9),
    (VanDiesel, "TOYOTA HIACE 3.0M", "2016", 9750, 6),
    (VanDiesel, "TOYOTA HIACE 3.0M", "2015", 8010, 19),
    (VanDiesel, "TOYOTA HIACE 3.0M", "2014", 8980, 9),
    (VanDiesel, "TOYOTA HIACE 3.0A", "2021", 13780, 10),
    (VanDiesel, "TOYOTA HIACE 3.0A", "2020", 13990, 3),
    (VanDiesel, "TOYOTA HIACE 3.0A", "2019", 14110, 3),
    (VanDiesel, "TOYOTA HIACE 3.0A", "2018", 16600, 5),
    (VanDiesel, "TOYOTA HIACE 3.0A", "2017", 15130, 3),
    (VanDiesel, "TOYOTA HIACE 3.0A", "2016", 29200, 1),
    (VanDiesel, "TOYOTA HIACE 3.0A", "2015", 11410, 1),
    (VanDiesel, "TOYOTA HIACE 3.0A", "2014", 11170, 4),
    (VanDiesel, "TOYOTA HIACE 2.8A", "2025", 13230, 14),
    (VanDiesel, "TOYOTA HIACE 2.8A", "2024", 13050, 1),
    (VanDiesel, "TOYOTA HIACE 2.8A", "2023", 15180, 1),
    (VanDiesel, "TOYOTA HIACE 2.8A", "2022", 14230, 1),
    (VanDiesel, "TOYOTA HIACE 2.8A", "2021", 14030, 22),
    (VanDiesel, "TOYOTA HIACE 2.8A", "2020", 14660, 22),
    (VanDiesel, "TOYOTA HIACE 2.8A", "2019", 14830, 6),
    (VanDiesel, "TOYOTA HIACE 2.8A", "2018", 21270, 1),
    (VanDiesel, "NISSAN NV350 2.5M", "2020", 10350, 3),
    (VanDiesel, "NISSAN NV350 2.5M", "2019", 11530, 2),
    (VanDiesel, "NISSAN NV350 2.5M", "2018", 10370, 6),
    (VanDiesel, "NISSAN NV350 2.5M", "2017", 10320, 4),
    (VanDiesel, "NISSAN NV350 2.5M", "2015", 8070, 7),
    (VanDiesel, "NISSAN NV350 2.5M", "2014", 9050, 3),
    (VanDiesel, "NISSAN NV200 1.5M", "2020", 11570, 1),
    (VanDiesel, "NISSAN NV200 1.5M", "2019", 9530, 6),
    (VanDiesel, "NISSAN NV200 1.5M", "2018", 9720, 6),
    (VanDiesel, "NISSAN NV200 1.5M", "2017", 9320, 8),
    (VanDiesel, "NISSAN NV200 1.5M", "2016", 8160, 6),
    (VanDiesel, "NISSAN NV200 1.5M", "2015", 8360, 6),
    (VanDiesel, "NISSAN NV200 1.5M", "2014", 7760, 2),
    (VanPetrol, "HONDA N-VAN", "2025", 9540, 27),
    (VanPetrol, "HONDA N-VAN", "2024", 9350, 3),
    (VanPetrol, "HONDA N-VAN", "2023", 9950, 1),
    (VanPetrol, "HONDA N-VAN", "2022", 10040, 13),
    (VanPetrol, "TOYOTA HIACE 2.0", "2025", 12260, 1),
    (VanPetrol, "TOYOTA HIACE 2.0", "2023", 10760, 3),
    (VanPetrol, "TOYOTA HIACE 2.0", "2022", 11240, 9),
    (VanPetrol, "TOYOTA HIACE 2.0", "2021", 11360, 11),
    (VanPetrol, "NISSAN NV350 2.0", "2023", 8870, 1),
    (VanPetrol, "NISSAN NV350 2.0", "2022", 9550, 4),
    (VanPetrol, "NISSAN NV350 2.0", "2021", 9860, 1),
    (VanPetrol, "NISSAN NV200 1.6A", "2025", 9340, 9),
    (VanPetrol, "NISSAN NV200 1.6A", "2024", 9860, 3),
    (VanPetrol, "NISSAN NV200 1.6A", "2023", 9690, 3),
    (VanPetrol, "NISSAN NV200 1.6A", "2021", 9980, 18),
    (VanPetrol, "NISSAN NV200 1.6A", "2020", 9860, 8),
    (VanPetrol, "NISSAN NV200 1.6A", "2019", 11530, 8),
    (VanPetrol, "NISSAN NV200 1.6A", "2018", 11300, 1),
    (VanPetrol, "NISSAN NV200 1.6A", "2017", 11590, 7),
    (VanPetrol, "NISSAN NV200 1.6A", "2016", 9150, 2),
    (VanPetrol, "NISSAN NV200 1.6A", "2015", 8560, 11),
    (VanPetrol, "NISSAN NV200 1.6A", "2014", 9760, 1),
];

/// Expand the fixture cells into individual listings so the sample goes
/// through the same aggregation path as any real source.
pub fn listings() -> Vec<RawListing> {
    let mut rows = Vec::new();

    for &(category, vehicle, year, depreciation, units) in SAMPLE_CELLS {
        for _ in 0..units {
            rows.push(RawListing {
                category,
                vehicle: vehicle.to_string(),
                year: year.to_string(),
                depreciation,
            });
        }
    }

    rows
}

pub struct SampleSource;

impl Source for SampleSource {
    fn name(&self) -> &'static str {
        "sample data"
    }

    fn available(&self, _config: &Config) -> bool {
        true
    }

    fn collect(&self, _config: &Config) -> Result<SourceResult, Box<dyn std::error::Error>> {
        Ok(SourceResult {
            listings: listings(),
            diagnostics: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::aggregate::aggregate;

    #[test]
    fn sample_covers_all_four_categories() {
        let records = aggregate(&listings());

        for cat in [TenFtDiesel, FourteenFtDiesel, VanDiesel, VanPetrol] {
            assert!(
                records.iter().any(|r| r.category == cat),
                "missing category {}",
                cat.as_str()
            );
        }
    }

    #[test]
    fn sample_totals_match_fixture_units() {
        let records = aggregate(&listings());

        let dyna = records
            .iter()
            .find(|r| r.vehicle == "TOYOTA DYNA 3.0")
            .unwrap();
        assert_eq!(dyna.total_units, 99);

        let xzu = records.iter().find(|r| r.vehicle == "HINO XZU710").unwrap();
        assert_eq!(xzu.total_units, 52);
    }
}
