// File: crates/linkchart-core/src/palette.rs
// Summary: RGB colors and categorical palettes passed by value into chart configs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const NAMED: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xffffff),
    ("red", 0xff0000),
    ("green", 0x008000),
    ("blue", 0x0000ff),
    ("orange", 0xffa500),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("steelblue", 0x4682b4),
];

impl FromStr for Color {
    type Err = String;

    /// Accepts `#rrggbb`, `#rgb`, or a few CSS color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let expanded = match hex.len() {
                6 => hex.to_string(),
                3 => hex.chars().flat_map(|c| [c, c]).collect(),
                _ => return Err(format!("bad hex color '{s}'")),
            };
            return u32::from_str_radix(&expanded, 16)
                .map(Color::from_hex)
                .map_err(|_| format!("bad hex color '{s}'"));
        }
        NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, hex)| Color::from_hex(hex))
            .ok_or_else(|| format!("unknown color '{s}'"))
    }
}

impl TryFrom<String> for Color {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<Color> for String {
    fn from(c: Color) -> Self { c.to_hex() }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

/// Ordered categorical colors; index `i` maps to `colors[i % len]`.
///
/// Deserializes from a preset name (`"category10"`), a bare color list, or
/// the full `{ "name", "colors" }` form it serializes to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PaletteRepr")]
pub struct Palette {
    pub name: String,
    pub colors: Vec<Color>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteRepr {
    Named(String),
    Colors(Vec<Color>),
    Full { name: String, colors: Vec<Color> },
}

impl TryFrom<PaletteRepr> for Palette {
    type Error = String;
    fn try_from(repr: PaletteRepr) -> Result<Self, Self::Error> {
        match repr {
            PaletteRepr::Named(name) => lookup(&name).ok_or_else(|| format!("unknown palette '{name}'")),
            PaletteRepr::Colors(colors) => Ok(Palette { name: "custom".to_string(), colors }),
            PaletteRepr::Full { name, colors } => Ok(Palette { name, colors }),
        }
    }
}

fn build(name: &str, hex: &[u32]) -> Palette {
    Palette { name: name.to_string(), colors: hex.iter().map(|&h| Color::from_hex(h)).collect() }
}

impl Palette {
    pub fn category10() -> Self {
        build("category10", &[
            0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd,
            0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22, 0x17becf,
        ])
    }

    pub fn category20() -> Self {
        build("category20", &[
            0x1f77b4, 0xaec7e8, 0xff7f0e, 0xffbb78, 0x2ca02c, 0x98df8a, 0xd62728, 0xff9896,
            0x9467bd, 0xc5b0d5, 0x8c564b, 0xc49c94, 0xe377c2, 0xf7b6d2, 0x7f7f7f, 0xc7c7c7,
            0xbcbd22, 0xdbdb8d, 0x17becf, 0x9edae5,
        ])
    }

    // Blues, oranges, greens, purples, greys; four shades each.
    pub fn category20c() -> Self {
        build("category20c", &[
            0x3182bd, 0x6baed6, 0x9ecae1, 0xc6dbef, 0xe6550d, 0xfd8d3c, 0xfdae6b, 0xfdd0a2,
            0x31a354, 0x74c476, 0xa1d99b, 0xc7e9c0, 0x756bb1, 0x9e9ac8, 0xbcbddc, 0xdadaeb,
            0x636363, 0x969696, 0xbdbdbd, 0xd9d9d9,
        ])
    }

    /// Color for category `i`, cycling. An empty palette yields black.
    pub fn color(&self, i: usize) -> Color {
        if self.colors.is_empty() {
            return Color::rgb(0, 0, 0);
        }
        self.colors[i % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self { Palette::category20c() }
}

/// Return the built-in palettes.
pub fn presets() -> Vec<Palette> {
    vec![Palette::category10(), Palette::category20(), Palette::category20c()]
}

fn lookup(name: &str) -> Option<Palette> {
    presets().into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Find a palette by name, falling back to category20c.
pub fn find(name: &str) -> Palette {
    lookup(name).unwrap_or_default()
}
