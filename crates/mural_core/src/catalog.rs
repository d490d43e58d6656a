use std::sync::OnceLock;

use serde::Serialize;

use crate::color::{parse_hex_color, PaletteColor, PaletteError};

/// One mural card's worth of content. The catalog is baked into the binary,
/// so the fields borrow from static data rather than owning strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mural {
    pub title: &'static str,
    pub location: &'static str,
    /// Four `#rrggbb` values, in display order.
    pub palette: [&'static str; 4],
    pub note: &'static str,
}

impl Mural {
    /// Parses the palette into channel values, in array order.
    pub fn palette_colors(&self) -> Result<[PaletteColor; 4], PaletteError> {
        Ok([
            parse_hex_color(self.palette[0])?,
            parse_hex_color(self.palette[1])?,
            parse_hex_color(self.palette[2])?,
            parse_hex_color(self.palette[3])?,
        ])
    }
}

pub const MURAL_COUNT: usize = 6;

/// The fixed mural sequence. Order matters: the columns walk it top to
/// bottom, and [`duplicated_murals`] concatenates it with itself.
pub const MURALS: [Mural; MURAL_COUNT] = [
    Mural {
        title: "Jardines de neón",
        location: "Monserrate",
        palette: ["#f3c742", "#1a1f2c", "#3bc3d1", "#f06d4f"],
        note: "Flores tropicales suspendidas sobre concreto lluvioso.",
    },
    Mural {
        title: "Bruma sobre acero",
        location: "San Telmo",
        palette: ["#d9e4f5", "#5b6c94", "#101420", "#f7f3e9"],
        note: "Niebla y tranvías cruzando un cielo eléctrico.",
    },
    Mural {
        title: "Ritmo selvático",
        location: "Xochimilco",
        palette: ["#142013", "#39a96b", "#fbbf24", "#f97316"],
        note: "Guacamayas escondidas entre hojas metálicas.",
    },
    Mural {
        title: "Azoteas en fuga",
        location: "Providencia",
        palette: ["#0b1724", "#3f5b8b", "#9ac8fa", "#f2f5fb"],
        note: "Sombras largas y antenas que se repiten como notas de jazz.",
    },
    Mural {
        title: "Mar rojo",
        location: "Barrio Cordial",
        palette: ["#f25555", "#0f1218", "#1f5a92", "#f6e7cf"],
        note: "Oleaje que recuerda grafitis viejos en barcos oxidados.",
    },
    Mural {
        title: "Línea estelar",
        location: "Núcleo Centro",
        palette: ["#141218", "#2f1e54", "#9f7aea", "#f1e4ff"],
        note: "Un mapamundi imaginario pintado a la luz morada de los letreros.",
    },
];

/// The catalog concatenated with itself, so a column can wrap seamlessly.
/// Entry `i` and entry `i + MURAL_COUNT` alias the same mural. Built once,
/// not per frame.
pub fn duplicated_murals() -> &'static [&'static Mural] {
    static DOUBLED: OnceLock<Vec<&'static Mural>> = OnceLock::new();
    DOUBLED.get_or_init(|| MURALS.iter().chain(MURALS.iter()).collect())
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
