use eframe::egui;
use image::{Rgba, RgbaImage};
use snake_engine::{GrassEdge, GroundTile, SegmentTile};

const SNAKE: Rgba<u8> = Rgba([0x4e, 0x8c, 0x2e, 0xff]);
const SNAKE_BELLY: Rgba<u8> = Rgba([0x6f, 0xb9, 0x45, 0xff]);
const EYE: Rgba<u8> = Rgba([0x1a, 0x1a, 0x1a, 0xff]);
const APPLE: Rgba<u8> = Rgba([0xd3, 0x2f, 0x2f, 0xff]);
const STEM: Rgba<u8> = Rgba([0x6d, 0x4c, 0x2f, 0xff]);
const GROUND_LIGHT: Rgba<u8> = Rgba([0xa7, 0xd9, 0x4a, 0xff]);
const GROUND_DARK: Rgba<u8> = Rgba([0x8f, 0xcb, 0x3a, 0xff]);
const TUFT: Rgba<u8> = Rgba([0x5e, 0x9e, 0x2e, 0xff]);

/// Which cell edge a half-band of snake body reaches.
#[derive(Clone, Copy)]
enum Side {
    East,
    North,
    West,
    South,
}

/// The sprite sheet: a 7x2 grid of 64 px tiles generated in memory, uploaded
/// once as a single egui texture. Every tile is addressed by a UV
/// sub-rectangle, so drawing is always "blit a sub-region of the sheet".
///
/// Sheet layout (column, row):
/// row 0: tail, body, head, apple, ground-light, grass-from-north, grass-from-east
/// row 1: the four corners (up-left, up-right, down-left, down-right),
///        ground-dark, grass-from-west, grass-from-south
pub struct SpriteSheet {
    image: RgbaImage,
}

impl SpriteSheet {
    pub const CELL: u32 = 64;
    pub const COLS: u32 = 7;
    pub const ROWS: u32 = 2;

    pub fn build() -> Self {
        let mut image = RgbaImage::new(Self::CELL * Self::COLS, Self::CELL * Self::ROWS);

        draw_tail(&mut image, 0, 0);
        draw_body(&mut image, 1, 0);
        draw_head(&mut image, 2, 0);
        draw_apple(&mut image, 3, 0);
        fill_cell(&mut image, 4, 0, GROUND_LIGHT);
        draw_tufts(&mut image, 5, 0, Side::North);
        draw_tufts(&mut image, 6, 0, Side::East);

        draw_corner(&mut image, 0, 1, Side::East, Side::South);
        draw_corner(&mut image, 1, 1, Side::West, Side::South);
        draw_corner(&mut image, 2, 1, Side::East, Side::North);
        draw_corner(&mut image, 3, 1, Side::West, Side::North);
        fill_cell(&mut image, 4, 1, GROUND_DARK);
        draw_tufts(&mut image, 5, 1, Side::West);
        draw_tufts(&mut image, 6, 1, Side::South);

        Self { image }
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.image.width() as usize, self.image.height() as usize],
            self.image.as_raw(),
        )
    }

    pub fn segment_uv(tile: SegmentTile) -> egui::Rect {
        let (col, row) = match tile {
            SegmentTile::Tail => (0, 0),
            SegmentTile::Straight => (1, 0),
            SegmentTile::Head => (2, 0),
            SegmentTile::CornerUpLeft => (0, 1),
            SegmentTile::CornerUpRight => (1, 1),
            SegmentTile::CornerDownLeft => (2, 1),
            SegmentTile::CornerDownRight => (3, 1),
        };
        Self::uv(col, row)
    }

    pub fn ground_uv(tile: GroundTile) -> egui::Rect {
        match tile {
            GroundTile::Light => Self::uv(4, 0),
            GroundTile::Dark => Self::uv(4, 1),
        }
    }

    pub fn grass_uv(edge: GrassEdge) -> egui::Rect {
        match edge {
            GrassEdge::North => Self::uv(5, 0),
            GrassEdge::East => Self::uv(6, 0),
            GrassEdge::West => Self::uv(5, 1),
            GrassEdge::South => Self::uv(6, 1),
        }
    }

    pub fn pickup_uv() -> egui::Rect {
        Self::uv(3, 0)
    }

    fn uv(col: u32, row: u32) -> egui::Rect {
        egui::Rect::from_min_max(
            egui::pos2(
                col as f32 / Self::COLS as f32,
                row as f32 / Self::ROWS as f32,
            ),
            egui::pos2(
                (col + 1) as f32 / Self::COLS as f32,
                (row + 1) as f32 / Self::ROWS as f32,
            ),
        )
    }

    #[cfg(test)]
    fn pixel(&self, col: u32, row: u32, x: u32, y: u32) -> Rgba<u8> {
        *self
            .image
            .get_pixel(col * Self::CELL + x, row * Self::CELL + y)
    }
}

fn fill_rect(image: &mut RgbaImage, col: u32, row: u32, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    let ox = col * SpriteSheet::CELL;
    let oy = row * SpriteSheet::CELL;
    for y in y0..y1 {
        for x in x0..x1 {
            image.put_pixel(ox + x, oy + y, color);
        }
    }
}

fn fill_disc(image: &mut RgbaImage, col: u32, row: u32, cx: i32, cy: i32, radius: i32, color: Rgba<u8>) {
    let ox = col * SpriteSheet::CELL;
    let oy = row * SpriteSheet::CELL;
    for y in 0..SpriteSheet::CELL as i32 {
        for x in 0..SpriteSheet::CELL as i32 {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= radius * radius {
                image.put_pixel(ox + x as u32, oy + y as u32, color);
            }
        }
    }
}

fn fill_cell(image: &mut RgbaImage, col: u32, row: u32, color: Rgba<u8>) {
    fill_rect(image, col, row, 0, 0, SpriteSheet::CELL, SpriteSheet::CELL, color);
}

/// Body band from the cell center to one edge, thick enough to meet the
/// neighboring segment without a seam.
fn half_band(image: &mut RgbaImage, col: u32, row: u32, side: Side, color: Rgba<u8>) {
    match side {
        Side::East => fill_rect(image, col, row, 32, 12, 64, 52, color),
        Side::West => fill_rect(image, col, row, 0, 12, 32, 52, color),
        Side::North => fill_rect(image, col, row, 12, 0, 52, 32, color),
        Side::South => fill_rect(image, col, row, 12, 32, 52, 64, color),
    }
}

/// Straight segment: an orientation-neutral blob, used unrotated for both
/// horizontal and vertical runs.
fn draw_body(image: &mut RgbaImage, col: u32, row: u32) {
    fill_disc(image, col, row, 32, 32, 22, SNAKE);
    fill_disc(image, col, row, 32, 32, 12, SNAKE_BELLY);
}

/// Head at rotation zero faces east; the neck reaches the west edge where
/// the next segment sits.
fn draw_head(image: &mut RgbaImage, col: u32, row: u32) {
    half_band(image, col, row, Side::West, SNAKE);
    fill_disc(image, col, row, 38, 32, 24, SNAKE);
    fill_disc(image, col, row, 46, 22, 4, EYE);
    fill_disc(image, col, row, 46, 42, 4, EYE);
}

/// Tail at rotation zero attaches to the east edge and tapers westwards.
fn draw_tail(image: &mut RgbaImage, col: u32, row: u32) {
    for x in 0..SpriteSheet::CELL {
        let half = 6 + (x as i32 * 14 / 63);
        let y0 = (32 - half).max(0) as u32;
        let y1 = (32 + half).min(63) as u32;
        fill_rect(image, col, row, x, y0, x + 1, y1, SNAKE);
    }
}

fn draw_corner(image: &mut RgbaImage, col: u32, row: u32, a: Side, b: Side) {
    half_band(image, col, row, a, SNAKE);
    half_band(image, col, row, b, SNAKE);
    fill_disc(image, col, row, 32, 32, 20, SNAKE);
}

fn draw_apple(image: &mut RgbaImage, col: u32, row: u32) {
    fill_rect(image, col, row, 30, 8, 34, 20, STEM);
    fill_disc(image, col, row, 32, 38, 20, APPLE);
}

/// Grass spilling in from the named neighbor: small tufts along that edge.
fn draw_tufts(image: &mut RgbaImage, col: u32, row: u32, from: Side) {
    for i in 0..4u32 {
        let along = 6 + i * 15;
        match from {
            Side::North => fill_rect(image, col, row, along, 0, along + 5, 7, TUFT),
            Side::South => fill_rect(image, col, row, along, 57, along + 5, 64, TUFT),
            Side::West => fill_rect(image, col, row, 0, along, 7, along + 5, TUFT),
            Side::East => fill_rect(image, col, row, 57, along, 64, along + 5, TUFT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_dimensions() {
        let sheet = SpriteSheet::build();
        assert_eq!(sheet.image.width(), 7 * 64);
        assert_eq!(sheet.image.height(), 2 * 64);
    }

    #[test]
    fn test_uv_rects_are_normalized_and_distinct() {
        let tiles = [
            SegmentTile::Head,
            SegmentTile::Tail,
            SegmentTile::Straight,
            SegmentTile::CornerUpLeft,
            SegmentTile::CornerUpRight,
            SegmentTile::CornerDownLeft,
            SegmentTile::CornerDownRight,
        ];
        let rects: Vec<egui::Rect> = tiles.iter().map(|&t| SpriteSheet::segment_uv(t)).collect();
        for (i, rect) in rects.iter().enumerate() {
            assert!(rect.min.x >= 0.0 && rect.max.x <= 1.0);
            assert!(rect.min.y >= 0.0 && rect.max.y <= 1.0);
            for other in &rects[i + 1..] {
                assert_ne!(rect, other);
            }
        }
    }

    #[test]
    fn test_ground_tiles_are_fully_opaque() {
        let sheet = SpriteSheet::build();
        for (col, row) in [(4, 0), (4, 1)] {
            for y in 0..SpriteSheet::CELL {
                for x in 0..SpriteSheet::CELL {
                    assert_eq!(sheet.pixel(col, row, x, y).0[3], 0xff);
                }
            }
        }
    }

    #[test]
    fn test_apple_cell_contains_apple_pixels() {
        let sheet = SpriteSheet::build();
        assert_eq!(sheet.pixel(3, 0, 32, 38), APPLE);
        // Tile corners stay transparent so the ground shows through.
        assert_eq!(sheet.pixel(3, 0, 0, 0).0[3], 0);
    }

    #[test]
    fn test_head_neck_reaches_the_west_edge() {
        let sheet = SpriteSheet::build();
        assert_eq!(sheet.pixel(2, 0, 0, 32), SNAKE);
    }

    #[test]
    fn test_tail_attaches_to_the_east_edge() {
        let sheet = SpriteSheet::build();
        assert_eq!(sheet.pixel(0, 0, 63, 32), SNAKE);
        assert_eq!(sheet.pixel(0, 0, 0, 0).0[3], 0);
    }
}
