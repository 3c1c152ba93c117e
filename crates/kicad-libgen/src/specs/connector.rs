//! Pin headers, terminal blocks and board-to-board connector series
//!
//! A connector series expands to one part per pin count. The part number
//! is derived from the series code, either by substituting the two-digit pin
//! count for the `xx` placeholder or, for Same Sky terminal blocks, by
//! appending `-NNBE`.

use super::Registry;
use crate::units::float_text;
use crate::Family;

/// How a series code turns into an orderable part number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorMpn {
    /// `<series>-NNBE`
    SameSky,
    /// `xx` in the series code is replaced with the pin count
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct ConnectorSeries {
    pub manufacturer: &'static str,
    pub base_series: &'static str,
    pub mpn_scheme: ConnectorMpn,
    pub datasheet: &'static str,
    /// Variants, ascending
    pub pin_counts: Vec<u32>,
    pub trustedparts_link: &'static str,
    pub color: &'static str,
    pub pitch: f64,
    pub mounting_angle: &'static str,
    /// `None` prints as `N/A`
    pub current_rating: Option<f64>,
    pub voltage_rating: Option<u32>,
    pub mounting_style: &'static str,
    pub contact_plating: &'static str,
    pub reference: &'static str,
    pub number_of_rows: u32,
    pub rectangle_width: f64,
    /// Pin number to signal name, drawn instead of numbered pins
    pub pin_names: Option<Vec<(&'static str, &'static str)>>,
    pub pin_length: f64,
}

impl ConnectorSeries {
    pub fn mpn(&self, pin_count: u32) -> String {
        match self.mpn_scheme {
            ConnectorMpn::SameSky => format!("{}-{pin_count:02}BE", self.base_series),
            ConnectorMpn::Placeholder => self
                .base_series
                .replace("xx", &format!("{pin_count:02}")),
        }
    }

    pub fn footprint(&self, pin_count: u32) -> String {
        format!("connector_footprints:{}", self.mpn(pin_count))
    }

    /// Datasheet URL without analytics query parameters
    pub fn datasheet(&self) -> &'static str {
        match self.datasheet.find("?_gl=") {
            Some(idx) => &self.datasheet[..idx],
            None => self.datasheet,
        }
    }

    pub fn current_text(&self) -> String {
        self.current_rating
            .map(float_text)
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn voltage_text(&self) -> String {
        self.voltage_rating
            .map(|v| v.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Body outline measured from the first/last pad, before pin-count growth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyExtent {
    pub width_left: f64,
    pub width_right: f64,
    pub height_top: f64,
    pub height_bottom: f64,
}

/// Explicitly placed plated through hole
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughHolePad {
    pub number: &'static str,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub drill: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PadLayout {
    /// Plated holes on one row, or two interleaved rows
    ThroughHole {
        size: f64,
        drill: f64,
        row_pitch: f64,
        rows: u32,
    },
    CustomThroughHole(Vec<ThroughHolePad>),
    /// Single row of SMD pads alternating above and below the axis
    SmdZigZag {
        width: f64,
        height: f64,
        row_pitch: f64,
        mirror: bool,
    },
    /// Two parallel rows of SMD pads, odd numbers on top unless mirrored
    SmdTwoRow {
        width: f64,
        height: f64,
        row_pitch: f64,
        mirror_x: bool,
    },
}

/// Row of non-plated alignment holes that follows the pads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpthRow {
    pub size: f64,
    pub drill: f64,
    pub row_pitch: f64,
    pub rows: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountingHole {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
}

/// Plated slot, e.g. the anchoring legs of a slide switch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OvalHole {
    pub x: f64,
    pub y: f64,
    pub pad_width: f64,
    pub pad_height: f64,
    pub drill_width: f64,
    pub drill_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountingPad {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Footprint of a part whose pads are laid out along a pitch, shared by
/// connectors and tactile switches
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFootprint {
    pub pitch: f64,
    pub body: BodyExtent,
    pub pads: PadLayout,
    pub mpn_y: f64,
    pub ref_y: f64,
    pub npth_row: Option<NpthRow>,
    pub mounting_holes: Vec<MountingHole>,
    pub mounting_pads: Vec<MountingPad>,
    pub plated_oval_holes: Vec<OvalHole>,
    /// Second courtyard around the actuator; does not grow with pin count
    pub internal_courtyard: Option<BodyExtent>,
    /// 3D model file stem, when it differs from the footprint name
    pub model_name: Option<&'static str>,
}

impl HeaderFootprint {
    pub(crate) fn new(pitch: f64, body: [f64; 4], pads: PadLayout, mpn_y: f64, ref_y: f64) -> Self {
        Self {
            pitch,
            body: BodyExtent {
                width_left: body[0],
                width_right: body[1],
                height_top: body[2],
                height_bottom: body[3],
            },
            pads,
            mpn_y,
            ref_y,
            npth_row: None,
            mounting_holes: Vec::new(),
            mounting_pads: Vec::new(),
            plated_oval_holes: Vec::new(),
            internal_courtyard: None,
            model_name: None,
        }
    }

    pub(crate) fn with_mounting_holes(mut self, holes: &[[f64; 3]]) -> Self {
        self.mounting_holes = holes
            .iter()
            .map(|&[x, y, diameter]| MountingHole { x, y, diameter })
            .collect();
        self
    }

    /// `[x, y, pad width, pad height, drill width, drill height]` per slot
    pub(crate) fn with_oval_holes(mut self, holes: &[[f64; 6]]) -> Self {
        self.plated_oval_holes = holes
            .iter()
            .map(|&[x, y, pad_width, pad_height, drill_width, drill_height]| OvalHole {
                x,
                y,
                pad_width,
                pad_height,
                drill_width,
                drill_height,
            })
            .collect();
        self
    }

    /// `[left, right, top, bottom]` measured from the origin
    pub(crate) fn with_internal_courtyard(mut self, extent: [f64; 4]) -> Self {
        self.internal_courtyard = Some(BodyExtent {
            width_left: extent[0],
            width_right: extent[1],
            height_top: extent[2],
            height_bottom: extent[3],
        });
        self
    }
}

const TRUSTEDPARTS: &str = "https://www.trustedparts.com/en/search";

fn same_sky(
    base_series: &'static str,
    datasheet: &'static str,
    pin_counts: Vec<u32>,
    pitch: f64,
    current: f64,
) -> (&'static str, ConnectorSeries) {
    (
        base_series,
        ConnectorSeries {
            manufacturer: "Same Sky",
            base_series,
            mpn_scheme: ConnectorMpn::SameSky,
            datasheet,
            pin_counts,
            trustedparts_link: TRUSTEDPARTS,
            color: "Blue",
            pitch,
            mounting_angle: "Vertical",
            current_rating: Some(current),
            voltage_rating: Some(300),
            mounting_style: "Through Hole",
            contact_plating: "Tin",
            reference: "J",
            number_of_rows: 1,
            rectangle_width: 5.08,
            pin_names: None,
            pin_length: 2.54,
        },
    )
}

#[allow(clippy::too_many_arguments)]
fn samtec(
    base_series: &'static str,
    datasheet: &'static str,
    pin_counts: std::ops::RangeInclusive<u32>,
    pitch: f64,
    rows: u32,
    mounting_style: &'static str,
    contact_plating: &'static str,
) -> (&'static str, ConnectorSeries) {
    (
        base_series,
        ConnectorSeries {
            manufacturer: "Samtec",
            base_series,
            mpn_scheme: ConnectorMpn::Placeholder,
            datasheet,
            pin_counts: pin_counts.collect(),
            trustedparts_link: TRUSTEDPARTS,
            color: "Black",
            pitch,
            mounting_angle: "Vertical",
            current_rating: Some(5.2),
            voltage_rating: Some(300),
            mounting_style,
            contact_plating,
            reference: "J",
            number_of_rows: rows,
            rectangle_width: 5.08,
            pin_names: None,
            pin_length: 2.54,
        },
    )
}

pub fn series() -> Registry<ConnectorSeries> {
    let tbp02: Vec<u32> = (2..=10).chain([12, 14, 16]).collect();
    let th = "Through Hole";
    let smd = "Surface Mount";

    let mut entries = vec![
        same_sky(
            "TBP02R1-381",
            "https://www.sameskydevices.com/product/resource/tbp02r1-381.pdf",
            tbp02.clone(),
            3.81,
            8.0,
        ),
        same_sky(
            "TBP02R2-381",
            "https://www.sameskydevices.com/product/resource/tbp02r2-381.pdf",
            tbp02,
            3.81,
            8.0,
        ),
        same_sky(
            "TBP04R1-500",
            "https://www.sameskydevices.com/product/resource/tbp04r1-500.pdf",
            (2..=12).collect(),
            5.0,
            15.0,
        ),
        same_sky(
            "TBP04R12-500",
            "https://www.sameskydevices.com/product/resource/tbp04r12-500.pdf",
            (2..=12).collect(),
            5.0,
            15.0,
        ),
        same_sky(
            "TBP04R2-500",
            "https://www.sameskydevices.com/product/resource/tbp04r2-500.pdf",
            (2..=12).collect(),
            5.0,
            15.0,
        ),
        same_sky(
            "TBP04R3-500",
            "https://www.sameskydevices.com/product/resource/tbp04r3-500.pdf",
            (2..=6).collect(),
            5.0,
            15.0,
        ),
        same_sky(
            "TB004-508",
            "https://www.sameskydevices.com/product/resource/tb004-508.pdf",
            (2..=24).collect(),
            5.08,
            16.0,
        ),
        same_sky(
            "TB006-508",
            "https://www.sameskydevices.com/product/resource/tb006-508.pdf",
            (2..=24).collect(),
            5.08,
            12.0,
        ),
        samtec(
            "SLM-1xx-01-G-S",
            "https://suddendocs.samtec.com/catalog_english/slm_th.pdf?_gl=1*1d4b5ri*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            1..=50,
            1.27,
            1,
            th,
            "Tin",
        ),
        samtec(
            "HMTSW-1xx-10-G-S-530-RA",
            "https://suddendocs.samtec.com/catalog_english/hmtsw.pdf?_gl=1*ilxh7h*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            1..=50,
            2.54,
            1,
            th,
            "Tin",
        ),
        samtec(
            "MTSW-1xx-10-L-D-530-RA",
            "https://suddendocs.samtec.com/catalog_english/mtsw.pdf?_gl=1*143vrvp*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            1..=50,
            2.54,
            2,
            th,
            "Tin",
        ),
        samtec(
            "TMS-1xx-02-G-S",
            "https://suddendocs.samtec.com/catalog_english/tms_th.pdf?_gl=1*ta0q2w*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            1..=50,
            1.27,
            1,
            th,
            "Tin",
        ),
        samtec(
            "TMS-1xx-02-G-D",
            "https://suddendocs.samtec.com/catalog_english/tms_th.pdf?_gl=1*ta0q2w*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            1..=50,
            1.27,
            2,
            th,
            "Tin",
        ),
        samtec(
            "SL-1xx-G-11",
            "https://suddendocs.samtec.com/catalog_english/sl.pdf?_gl=1*1p6n3ck*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            1..=32,
            2.54,
            1,
            th,
            "Tin",
        ),
        samtec(
            "BBS-1xx-G-A",
            "https://suddendocs.samtec.com/catalog_english/bbs.pdf?_gl=1*oynpe4*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            1..=32,
            2.54,
            1,
            th,
            "Tin",
        ),
        samtec(
            "CLP-1xx-02-G-D-BE",
            "https://suddendocs.samtec.com/catalog_english/clp_sm.pdf?_gl=1*1y4jlr9*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            2..=50,
            1.27,
            2,
            smd,
            "Tin",
        ),
        samtec(
            "FW-xx-04-G-D-070-315",
            "https://suddendocs.samtec.com/catalog_english/fw_th.pdf?_gl=1*bk9ipk*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            2..=50,
            1.27,
            2,
            th,
            "Gold",
        ),
        samtec(
            "FW-xx-03-G-D-085-315",
            "https://suddendocs.samtec.com/catalog_english/fw_sm.pdf?_gl=1*1xtxv9c*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            2..=50,
            1.27,
            2,
            smd,
            "Gold",
        ),
        samtec(
            "FTSH-1xx-01-L-DV",
            "https://suddendocs.samtec.com/catalog_english/ftsh_smt.pdf?_gl=1*sm7rbj*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            2..=50,
            1.27,
            2,
            smd,
            "Tin",
        ),
        samtec(
            "FTSH-1xx-01-L-DV-K",
            "https://suddendocs.samtec.com/catalog_english/ftsh_smt.pdf?_gl=1*13r0j96*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            5..=25,
            1.27,
            2,
            smd,
            "Tin",
        ),
        samtec(
            "FTSH-1xx-04-L-D",
            "https://suddendocs.samtec.com/catalog_english/ftsh_th.pdf?_gl=1*bi311t*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            2..=50,
            1.27,
            2,
            th,
            "Tin",
        ),
        samtec(
            "TSM-1xx-01-S-SV-P-TR",
            "https://suddendocs.samtec.com/catalog_english/tsm.pdf?_gl=1*1eihxyt*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            2..=50,
            2.54,
            1,
            smd,
            "Tin",
        ),
        samtec(
            "RSM-1xx-02-STL-S",
            "https://suddendocs.samtec.com/catalog_english/rsm_sm.pdf?_gl=1*1uxcywd*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            2..=36,
            1.27,
            1,
            smd,
            "Tin",
        ),
        samtec(
            "FTR-1xx-03-L-S",
            "https://suddendocs.samtec.com/catalog_english/ftr_smt.pdf?_gl=1*17eh0a1*_gcl_au*MTM0MTYyNTQ5MS4xNzM2MDk5MTUz",
            2..=40,
            1.27,
            1,
            smd,
            "Tin",
        ),
    ];

    // Battery holder: a single part with no electrical ratings
    entries.push((
        "1043",
        ConnectorSeries {
            manufacturer: "Keystone Electronics",
            base_series: "1043",
            mpn_scheme: ConnectorMpn::Placeholder,
            datasheet: "https://www.keyelco.com/userAssets/file/M65p27.pdf",
            pin_counts: vec![2],
            trustedparts_link: TRUSTEDPARTS,
            color: "Black",
            pitch: 71.6,
            mounting_angle: "Vertical",
            current_rating: None,
            voltage_rating: None,
            mounting_style: th,
            contact_plating: "Tin",
            reference: "J",
            number_of_rows: 1,
            rectangle_width: 5.08,
            pin_names: None,
            pin_length: 2.54,
        },
    ));

    Registry::series(Family::Connector, entries)
}

pub fn footprints() -> Registry<HeaderFootprint> {
    let th = |size, drill| PadLayout::ThroughHole {
        size,
        drill,
        row_pitch: 0.0,
        rows: 1,
    };
    let th2 = |size, drill, row_pitch| PadLayout::ThroughHole {
        size,
        drill,
        row_pitch,
        rows: 2,
    };
    let smd2 = |width, height, row_pitch| PadLayout::SmdTwoRow {
        width,
        height,
        row_pitch,
        mirror_x: false,
    };
    let zig_zag = |width, height, row_pitch, mirror| PadLayout::SmdZigZag {
        width,
        height,
        row_pitch,
        mirror,
    };
    let fp = HeaderFootprint::new;

    let tb_508 = |height, text_y: f64| fp(5.08, [5.8, 5.2, height, height], th(2.55, 1.7), text_y, -text_y);
    let samtec_127 = fp(1.27, [1.45, 1.45, 1.35, 1.35], th(1.0874, 0.787), 2.032, -2.032);
    let samtec_254 = fp(2.54, [2.65, 2.65, 1.35, 1.35], th(1.264, 0.914), 2.032, -2.032);
    let ftsh_smd = fp(1.27, [1.4, 1.4, 3.5, 3.5], smd2(0.74, 2.79, 3.734), 4.318, -4.318);
    let fw_smd = fp(1.27, [1.5, 1.5, 3.8, 3.8], smd2(0.74, 2.79, 4.07), 4.572, -4.572);

    Registry::footprints(
        Family::Connector,
        vec![
            ("TB004-508", tb_508(5.2, 6.096)),
            ("TB006-508", tb_508(4.2, 5.334)),
            ("TBP02R1-381", fp(3.81, [4.4, 4.4, 7.9, 1.4], th(2.1, 1.4), -10.2, 2.4)),
            ("TBP02R2-381", fp(3.81, [4.445, 4.445, 4.445, 3.2512], th(2.1, 1.4), -6.8, 4.2)),
            ("TBP04R1-500", fp(5.0, [5.2, 5.2, 2.2, 9.9], th(2.55, 1.7), 10.8, -3.0)),
            ("TBP04R12-500", fp(5.0, [5.8, 5.8, 2.2, 9.9], th(2.55, 1.7), 10.8, -3.0)),
            ("TBP04R2-500", fp(5.0, [5.8, 5.8, 4.0, 4.8], th(2.55, 1.7), -6.6, 5.8)),
            ("TBP04R3-500", fp(5.0, [5.2, 5.2, 4.0, 4.8], th(2.55, 1.7), -6.6, 5.8)),
            ("SLM-1xx-01-G-S", samtec_127.clone()),
            ("TMS-1xx-02-G-S", samtec_127),
            (
                "HMTSW-1xx-10-G-S-530-RA",
                fp(2.54, [2.7, 2.7, 18.0, 1.35], th(1.7, 1.0), 2.286, -19.05),
            ),
            (
                "MTSW-1xx-10-L-D-530-RA",
                fp(2.54, [2.7, 2.7, 19.0, 2.7], th2(1.7, 1.0, 2.54), 3.81, -19.812),
            ),
            (
                "TMS-1xx-02-G-D",
                fp(1.27, [1.45, 1.45, 2.7, 2.6], th2(1.0874, 0.787, 2.54), 3.302, -3.302),
            ),
            ("SL-1xx-G-11", samtec_254.clone()),
            ("BBS-1xx-G-A", samtec_254),
            (
                "CLP-1xx-02-G-D-BE",
                HeaderFootprint {
                    npth_row: Some(NpthRow {
                        size: 0.74,
                        drill: 0.74,
                        row_pitch: 1.27,
                        rows: 2,
                    }),
                    ..fp(1.27, [1.7, 1.7, 2.9, 2.9], smd2(0.74, 1.47, 3.734), 3.556, -3.556)
                },
            ),
            (
                "FW-xx-04-G-D-070-315",
                fp(1.27, [1.5, 1.5, 2.0, 2.0], th2(1.0874, 0.787, 1.27), 3.302, -3.302),
            ),
            ("FW-xx-03-G-D-085-315", fw_smd),
            ("FTSH-1xx-01-L-DV", ftsh_smd.clone()),
            ("FTSH-1xx-01-L-DV-K", ftsh_smd),
            (
                "FTSH-1xx-04-L-D",
                fp(1.27, [1.4, 1.4, 1.8, 1.8], th2(1.0874, 0.787, 1.27), 4.318, -4.318),
            ),
            (
                "TSM-1xx-01-S-SV-P-TR",
                fp(2.54, [2.7, 2.7, 3.5, 3.5], zig_zag(1.27, 3.43, 2.92, false), 4.318, -4.318),
            ),
            (
                "RSM-1xx-02-STL-S",
                fp(1.27, [1.5, 1.5, 2.6, 2.6], zig_zag(0.91, 1.715, 2.985, true), 4.318, -4.318),
            ),
            (
                "FTR-1xx-03-L-S",
                fp(1.27, [1.5, 1.5, 3.6, 3.6], zig_zag(0.74, 3.73, 2.985, false), 4.318, -4.318),
            ),
            (
                "1043",
                fp(71.6, [39.0, 39.0, 11.0, 11.0], th(2.0828, 1.5748), 12.7, -12.7)
                    .with_mounting_holes(&[[27.6, -8.0, 3.45], [-27.6, 8.0, 3.45], [35.8, 8.0, 2.39]]),
            ),
        ],
    )
}
