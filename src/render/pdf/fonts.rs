//! Standard Type 1 fonts: faces, roles, metrics and WinAnsi encoding.

use lopdf::{dictionary, Dictionary};

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Width used for characters without a metric entry (1/1000 em).
const DEFAULT_WIDTH: u16 = 556;

/// Font face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    /// Helvetica
    Regular,
    /// Helvetica-Bold
    Bold,
}

impl FontFace {
    /// Both faces, in resource order.
    pub const ALL: [FontFace; 2] = [FontFace::Regular, FontFace::Bold];

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }

    /// PostScript name of the standard font.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }

    /// Font dictionary for embedding by reference.
    pub fn dictionary(self) -> Dictionary {
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => self.base_font(),
            "Encoding" => "WinAnsiEncoding",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            FontFace::Regular => &HELVETICA_WIDTHS,
            FontFace::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Advance width of an encoded byte in 1/1000 em.
    pub fn byte_width(self, byte: u8) -> u16 {
        match byte {
            32..=126 => self.widths()[(byte - 32) as usize],
            _ => DEFAULT_WIDTH,
        }
    }
}

/// Typographic role of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    /// Page header title
    Title,
    /// Page header generation timestamp
    Timestamp,
    /// Section heading
    SectionTitle,
    /// Paragraph text
    Body,
    /// Table header row
    TableHeader,
    /// Table body rows
    TableBody,
    /// Page footer
    Footer,
}

impl FontRole {
    /// Face used for this role.
    pub fn face(self) -> FontFace {
        match self {
            FontRole::Title | FontRole::SectionTitle | FontRole::TableHeader => FontFace::Bold,
            _ => FontFace::Regular,
        }
    }

    /// Size in points.
    pub fn size(self) -> f32 {
        match self {
            FontRole::Title => 16.0,
            FontRole::SectionTitle => 13.0,
            FontRole::Body => 11.0,
            FontRole::Timestamp | FontRole::TableHeader | FontRole::TableBody => 10.0,
            FontRole::Footer => 8.0,
        }
    }

    /// Size in millimetres.
    pub fn size_mm(self) -> f32 {
        self.size() / PT_PER_MM
    }

    /// Width of WinAnsi-encoded text in millimetres.
    pub fn width_of(self, encoded: &[u8]) -> f32 {
        let face = self.face();
        let units: u32 = encoded.iter().map(|b| face.byte_width(*b) as u32).sum();
        units as f32 * self.size_mm() / 1000.0
    }
}

/// Encode text as WinAnsi (CP-1252) bytes.
///
/// Returns the bytes and the number of characters that had no WinAnsi
/// code point and were replaced by `?`.
pub fn encode_win_ansi(text: &str) -> (Vec<u8>, usize) {
    let mut bytes = Vec::with_capacity(text.len());
    let mut replaced = 0;

    for ch in text.chars() {
        match win_ansi_byte(ch) {
            Some(b) => bytes.push(b),
            None => {
                bytes.push(b'?');
                replaced += 1;
            }
        }
    }

    (bytes, replaced)
}

fn win_ansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        0x09 => Some(b' '),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}

// Adobe core font metrics for the printable ASCII range (32..=126).

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];
