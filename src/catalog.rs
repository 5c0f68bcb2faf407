//! Compiled-in query grid: regions, Sentinel products and the fiscal range.

/// Executable of the SARA catalogue search client.
pub const SEARCH_PROGRAM: &str = "auscophub_searchSara.py";

/// First and last fiscal-year boundary (July 1st) of the reporting range.
pub const FISCAL_START_YEAR: i32 = 2015;
pub const FISCAL_END_YEAR: i32 = 2019;

pub const REGIONS: [&str; 9] = [
    "Oceania",
    "Asia",
    "Antartica",
    "OpenOcean",
    "Africa",
    "Europe",
    "NorthAmerica",
    "SouthAmerica",
    "Unclassified",
];

/// A catalogue entry: product type code, Sentinel mission and whether the
/// product is part of the current report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub product_type: &'static str,
    pub mission_id: &'static str,
    pub enabled: bool,
}

const fn entry(
    product_type: &'static str,
    mission_id: &'static str,
    enabled: bool,
) -> CatalogEntry {
    CatalogEntry {
        product_type,
        mission_id,
        enabled,
    }
}

pub const PRODUCTS: [CatalogEntry; 24] = [
    // Sentinel-1
    entry("SLC", "1", false),
    entry("GRD", "1", false),
    entry("OCN", "1", false),
    entry("RAW", "1", false),
    // Sentinel-2
    entry("S2MSIL1C", "2", true),
    entry("S2MSIL2A", "2", true),
    // Sentinel-3
    entry("OL_1_EFR___", "3", false),
    entry("OL_1_ERR___", "3", false),
    entry("OL_2_LFR___", "3", false),
    entry("OL_2_LRR___", "3", false),
    entry("OL_2_WFR___", "3", false),
    entry("OL_2_WRR___", "3", false),
    entry("SL_1_RBT___", "3", false),
    entry("SL_2_LST___", "3", false),
    entry("SL_2_WST___", "3", false),
    entry("SR_1_SRA_A_", "3", false),
    entry("SR_1_SRA_BS", "3", false),
    entry("SL_2_SRA___", "3", false),
    entry("SR_2_LAN___", "3", false),
    entry("SR_2_WAT___", "3", false),
    entry("SY_2_SYN___", "3", false),
    entry("SY_2_V10___", "3", false),
    entry("SY_2_VG1___", "3", false),
    entry("SY_2_SGP___", "3", false),
];
