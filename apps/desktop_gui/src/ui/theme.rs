use egui::Color32;

pub const PAGE_KICKER: &str = "MODO POLEA";
pub const PAGE_TITLE: &str = "Un doble ticker que solo responde a tu scroll.";
pub const PAGE_LEDE: &str = "En lugar de animarse solo, el riel es un scrollbar real: al bajar, \
    un mural desciende y el otro asciende como dos cadenas opuestas. Desplázate para ir \
    revelando cada lienzo duplicado en la secuencia.";

pub const SECTION_KICKER: &str = "DOBLE TICKER";
pub const SECTION_TITLE: &str = "Un mural baja y el otro sube, ligados por tu scroll.";
pub const SECTION_LEDE: &str = "El contenedor es un scrollbar real: mueve la rueda y verás cómo \
    las dos cadenas se desplazan en sentidos opuestos. Los murales están duplicados para que \
    cada tramo de desplazamiento revele el siguiente lienzo.";

/// Colors of the page, rail, and cards. One fixed dark palette; there is no
/// light variant of this page.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub page_top: Color32,
    pub page_bottom: Color32,
    pub rail_top: Color32,
    pub rail_mid: Color32,
    pub rail_bottom: Color32,
    pub rail_ring: Color32,
    pub column_fill: Color32,
    pub column_stroke: Color32,
    pub card_fill: Color32,
    pub card_stroke: Color32,
    pub badge_fill: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_faint: Color32,
    pub text_muted: Color32,
    pub kicker: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            page_top: Color32::from_rgb(0x09, 0x09, 0x0b),
            page_bottom: Color32::from_rgb(0x08, 0x08, 0x08),
            rail_top: Color32::from_rgb(0x0b, 0x0b, 0x12),
            rail_mid: Color32::from_rgb(0x0b, 0x11, 0x20),
            rail_bottom: Color32::BLACK,
            rail_ring: Color32::from_rgba_unmultiplied(255, 255, 255, 26),
            column_fill: Color32::from_rgba_unmultiplied(255, 255, 255, 13),
            column_stroke: Color32::from_rgba_unmultiplied(255, 255, 255, 13),
            card_fill: Color32::from_rgba_unmultiplied(255, 255, 255, 26),
            card_stroke: Color32::from_rgba_unmultiplied(255, 255, 255, 13),
            badge_fill: Color32::from_rgba_unmultiplied(255, 255, 255, 26),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgba_unmultiplied(255, 255, 255, 178),
            text_faint: Color32::from_rgba_unmultiplied(255, 255, 255, 153),
            text_muted: Color32::from_rgb(0xa1, 0xa1, 0xaa),
            kicker: Color32::from_rgb(0x71, 0x71, 0x7a),
        }
    }
}

/// Fills `rect` with a top-to-bottom gradient between two colors.
pub fn vertical_gradient(painter: &egui::Painter, rect: egui::Rect, top: Color32, bottom: Color32) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}
