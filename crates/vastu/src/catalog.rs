//! Fixed catalogs: marma line sets, midpoint allow-list, spokes, devta names
//! and zone templates.

use crate::direction::*;
use crate::zones::Corner::{Direction, Inner, Midpoint, OuterInner};
use crate::zones::{ZoneFamily, ZoneTemplate};

/// A named line between two direction points.
pub type LinePair = (DirectionLabel, DirectionLabel);

/// A set of lines walked one by one against a target set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarmaWalk {
    pub name: &'static str,
    pub lines: &'static [LinePair],
    pub targets: &'static [LinePair],
}

/// Every table the pipeline reads, bundled so callers can swap one out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catalogs {
    pub primary_lines: &'static [LinePair],
    pub mirrored_lines: &'static [LinePair],
    pub core_lines: &'static [LinePair],
    pub walks: &'static [MarmaWalk],
    pub midpoint_indices: &'static [usize],
    pub midpoint_links: &'static [(usize, usize)],
    pub spoke_midpoints: &'static [(DirectionLabel, usize)],
    pub spoke_extras: &'static [(DirectionLabel, usize)],
    pub devta_names: &'static [&'static str],
    pub zones: &'static [ZoneTemplate],
}

impl Catalogs {
    pub const fn standard() -> Self {
        Self {
            primary_lines: &PRIMARY_LINES,
            mirrored_lines: &MIRRORED_LINES,
            core_lines: &CORE_LINES,
            walks: &MARMA_WALKS,
            midpoint_indices: &MIDPOINT_INDICES,
            midpoint_links: &MIDPOINT_LINKS,
            spoke_midpoints: &SPOKE_MIDPOINTS,
            spoke_extras: &SPOKE_EXTRAS,
            devta_names: &DEVTA_NAMES,
            zones: &ZONE_TEMPLATES,
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// MARMA LINES
// ============================================================================

/// The six cross diagonals.
pub const CORE_LINES: [LinePair; 6] = [
    (N8, W2), (E1, W1), (E2, S8),
    (W8, S2), (N1, S1), (N2, E8),
];

/// North-east and south-west diagonals plus the core. N5-E5 appears twice.
pub const PRIMARY_LINES: [LinePair; 22] = [
    (N8, E2), (N7, E3), (N6, E4), (N5, E5), (N5, E5), (N4, E6), (N3, E7), (N2, E8),
    (N1, S1), (W8, S2), (W7, S3), (W6, S4), (W5, S5), (W4, S6), (W3, S7), (W2, S8),
    (N8, W2), (E1, W1), (E2, S8), (W8, S2), (N1, S1), (N2, E8),
];

/// North-west and south-east diagonals with the left half of the core.
pub const MIRRORED_LINES: [LinePair; 18] = [
    (W8, S2), (N1, S1), (N2, E8),
    (W8, N2), (W7, N3), (W6, N4), (W5, N5), (W4, N6), (W3, N7), (W2, N8),
    (W1, E1), (S8, E2), (S7, E3), (S6, E4), (S5, E5), (S4, E6), (S3, E7), (S2, E8),
];

pub const RIGHT_WALK_LINES: [LinePair; 3] = [(N8, W2), (E1, W1), (E2, S8)];

pub const RIGHT_WALK_TARGETS: [LinePair; 15] = [
    (N8, E2), (N7, E3), (N6, E4), (N5, E5), (N4, E6), (N3, E7), (N2, E8), (N1, S1),
    (W8, S2), (W7, S3), (W6, S4), (W5, S5), (W4, S6), (W3, S7), (W2, S8),
];

pub const LEFT_WALK_LINES: [LinePair; 3] = [(W8, S2), (N1, S1), (N2, E8)];

pub const LEFT_WALK_TARGETS: [LinePair; 15] = [
    (W8, N2), (W7, N3), (W6, N4), (W5, N5), (W4, N6), (W3, N7), (W2, N8), (W1, E1),
    (S8, E2), (S7, E3), (S6, E4), (S5, E5), (S4, E6), (S3, E7), (S2, E8),
];

pub const MARMA_WALKS: [MarmaWalk; 2] = [
    MarmaWalk { name: "right", lines: &RIGHT_WALK_LINES, targets: &RIGHT_WALK_TARGETS },
    MarmaWalk { name: "left", lines: &LEFT_WALK_LINES, targets: &LEFT_WALK_TARGETS },
];

// ============================================================================
// MIDPOINTS AND SPOKES
// ============================================================================

/// Positional indices of the `I`/`X` points averaged into `A1..=A20`.
pub const MIDPOINT_INDICES: [usize; 20] = [
    2, 3, 4, 5, 6, 10, 11, 12, 13, 14, 18, 19, 20, 21, 22, 26, 27, 28, 29, 30,
];

/// Decorative `A{k}`-`A{k'}` links.
pub const MIDPOINT_LINKS: [(usize, usize); 16] = [
    (1, 2), (2, 3), (3, 4), (4, 5),
    (6, 7), (7, 8), (8, 9), (9, 10),
    (11, 12), (12, 13), (13, 14), (14, 15),
    (16, 17), (17, 18), (18, 19), (19, 20),
];

/// Direction points whose spoke ends at an `A{k}` instead of their inner point.
pub const SPOKE_MIDPOINTS: [(DirectionLabel, usize); 12] = [
    (E7, 1), (S1, 3), (S3, 5), (S7, 6), (W1, 8), (W3, 10),
    (W7, 11), (N1, 13), (N3, 15), (N7, 16), (E1, 18), (E3, 20),
];

/// Corner labels that also join `X{n}` to the same spoke target.
pub const SPOKE_EXTRAS: [(DirectionLabel, usize); 4] = [(E1, 28), (S1, 4), (W1, 12), (N1, 20)];

// ============================================================================
// ZONES
// ============================================================================

/// Zone labels, index-aligned with [`ZONE_TEMPLATES`].
pub const DEVTA_NAMES: [&str; 45] = [
    "Brahma", "Bhudhar", "Aryama", "Viviswan", "Mitra",
    "Aapaha", "Aapahavatsa", "Savita", "Savitra", "Indra", "Jaya", "Rudra", "Rajyakshma",
    "Shikhi", "Parjanya", "Jayant", "Mahendra", "Surya", "Satya", "Bhrisha", "Antriksh",
    "Anil", "Pusha", "Vitasta", "GrihaSpatya", "Yama", "Gandharva", "Bhringraj", "Mrigah",
    "Pitra", "Dauwarik", "Sugreev", "Pushpdant", "Varun", "Asur", "Shosha", "Papyakshma",
    "Roga", "Ahir", "Mukhya", "Bhallat", "Soma", "Bhujag", "Aditi", "Diti",
];

/// Zone corner templates in display order.
pub const ZONE_TEMPLATES: [ZoneTemplate; 45] = [
    // Center
    ZoneTemplate::new(ZoneFamily::Center, &[OuterInner(28), OuterInner(4), OuterInner(12), OuterInner(20)]),
    // Octagons
    ZoneTemplate::new(ZoneFamily::Octagon, &[Inner(22), Midpoint(15), Midpoint(13), OuterInner(20), OuterInner(28), Midpoint(18), Midpoint(16), Inner(26)]),
    ZoneTemplate::new(ZoneFamily::Octagon, &[Inner(30), Midpoint(20), Midpoint(18), OuterInner(28), OuterInner(4), Midpoint(3), Midpoint(1), Inner(2)]),
    ZoneTemplate::new(ZoneFamily::Octagon, &[Inner(6), Midpoint(5), Midpoint(3), OuterInner(4), OuterInner(12), Midpoint(8), Midpoint(6), Inner(10)]),
    ZoneTemplate::new(ZoneFamily::Octagon, &[Inner(14), Midpoint(10), Midpoint(8), OuterInner(12), OuterInner(20), Midpoint(13), Midpoint(11), Inner(20)]),
    // Inner quads
    ZoneTemplate::new(ZoneFamily::InnerQuad, &[Inner(28), Inner(26), Midpoint(16), Midpoint(18)]),
    ZoneTemplate::new(ZoneFamily::InnerQuad, &[Inner(30), Inner(28), Midpoint(18), Midpoint(20)]),
    ZoneTemplate::new(ZoneFamily::InnerQuad, &[Inner(4), Inner(2), Midpoint(1), Midpoint(3)]),
    ZoneTemplate::new(ZoneFamily::InnerQuad, &[Inner(6), Inner(4), Midpoint(3), Midpoint(5)]),
    ZoneTemplate::new(ZoneFamily::InnerQuad, &[Inner(12), Inner(10), Midpoint(6), Midpoint(8)]),
    ZoneTemplate::new(ZoneFamily::InnerQuad, &[Inner(14), Inner(12), Midpoint(8), Midpoint(10)]),
    ZoneTemplate::new(ZoneFamily::InnerQuad, &[Inner(20), Inner(18), Midpoint(11), Midpoint(13)]),
    ZoneTemplate::new(ZoneFamily::InnerQuad, &[Inner(22), Inner(20), Midpoint(13), Midpoint(15)]),
    // Outer ring, clockwise from E1
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(E1), Direction(E2), Inner(29), Inner(28)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(E2), Direction(E3), Inner(30), Inner(29)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(E3), Direction(E4), Inner(31), Inner(30)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(E4), Direction(E5), Inner(0), Inner(31)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(E5), Direction(E6), Inner(1), Inner(0)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(E6), Direction(E7), Inner(2), Inner(1)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(E7), Direction(E8), Inner(3), Inner(2)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(E8), Direction(S1), Inner(4), Inner(3)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(S1), Direction(S2), Inner(5), Inner(4)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(S2), Direction(S3), Inner(6), Inner(5)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(S3), Direction(S4), Inner(7), Inner(6)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(S4), Direction(S5), Inner(8), Inner(7)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(S5), Direction(S6), Inner(9), Inner(8)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(S6), Direction(S7), Inner(10), Inner(9)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(S7), Direction(S8), Inner(11), Inner(10)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(S8), Direction(W1), Inner(12), Inner(11)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(W1), Direction(W2), Inner(13), Inner(12)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(W2), Direction(W3), Inner(14), Inner(13)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(W3), Direction(W4), Inner(15), Inner(14)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(W4), Direction(W5), Inner(16), Inner(15)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(W5), Direction(W6), Inner(17), Inner(16)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(W6), Direction(W7), Inner(18), Inner(17)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(W7), Direction(W8), Inner(19), Inner(18)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(W8), Direction(N1), Inner(20), Inner(19)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(N1), Direction(N2), Inner(21), Inner(20)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(N2), Direction(N3), Inner(22), Inner(21)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(N3), Direction(N4), Inner(23), Inner(22)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(N4), Direction(N5), Inner(24), Inner(23)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(N5), Direction(N6), Inner(25), Inner(24)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(N6), Direction(N7), Inner(26), Inner(25)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(N7), Direction(N8), Inner(27), Inner(26)]),
    ZoneTemplate::new(ZoneFamily::Ring, &[Direction(N8), Direction(E1), Inner(28), Inner(27)]),
];
