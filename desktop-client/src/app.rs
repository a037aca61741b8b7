use eframe::egui;
use snake_engine::{
    Game, GamePhase, GroundLayer, InputEvent, Position, Rotation, SessionRng, Snapshot,
};

use crate::config::Config;
use crate::sprites::SpriteSheet;

/// The windowed frontend: owns the frame loop, samples key edges once per
/// frame, forwards them to the engine, and blits the engine's snapshot.
pub struct SnakeApp {
    game: Game,
    ground: GroundLayer,
    sheet: SpriteSheet,
    texture: Option<egui::TextureHandle>,
    cell_pixels: f32,
}

impl SnakeApp {
    pub fn new(config: &Config, mut rng: SessionRng) -> Self {
        let ground = GroundLayer::generate(
            config.game.board_width,
            config.game.board_height,
            &mut rng,
        );
        let game = Game::new(config.game, rng);

        Self {
            game,
            ground,
            sheet: SpriteSheet::build(),
            texture: None,
            cell_pixels: config.cell_pixels as f32,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| {
            let mut events = Vec::new();
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                events.push(InputEvent::TurnClockwise);
            }
            if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                events.push(InputEvent::TurnCounterClockwise);
            }
            if i.key_pressed(egui::Key::P) {
                events.push(InputEvent::PauseToggle);
            }
            if i.key_pressed(egui::Key::Enter) {
                events.push(InputEvent::Confirm);
            }
            events
        });

        for event in events {
            self.game.handle_input(event);
        }
    }

    fn texture_id(&mut self, ctx: &egui::Context) -> egui::TextureId {
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture(
                "sprite_sheet",
                self.sheet.to_color_image(),
                egui::TextureOptions::NEAREST,
            )
        });
        texture.id()
    }

    fn cell_rect(&self, origin: egui::Pos2, cell: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                origin.x + cell.x as f32 * self.cell_pixels,
                origin.y + cell.y as f32 * self.cell_pixels,
            ),
            egui::vec2(self.cell_pixels, self.cell_pixels),
        )
    }

    fn draw_board(&self, ui: &mut egui::Ui, texture_id: egui::TextureId, snapshot: &Snapshot) {
        let board_size = egui::vec2(
            self.ground.width() as f32 * self.cell_pixels,
            self.ground.height() as f32 * self.cell_pixels,
        );
        let (response, painter) = ui.allocate_painter(board_size, egui::Sense::hover());
        let origin = response.rect.min;

        for y in 0..self.ground.height() {
            for x in 0..self.ground.width() {
                let cell = Position::new(x, y);
                let rect = self.cell_rect(origin, cell);
                blit(
                    &painter,
                    texture_id,
                    rect,
                    SpriteSheet::ground_uv(self.ground.tile(cell)),
                    Rotation::Deg0,
                );
                for edge in self.ground.edges(cell) {
                    blit(
                        &painter,
                        texture_id,
                        rect,
                        SpriteSheet::grass_uv(edge),
                        Rotation::Deg0,
                    );
                }
            }
        }

        blit(
            &painter,
            texture_id,
            self.cell_rect(origin, snapshot.pickup),
            SpriteSheet::pickup_uv(),
            Rotation::Deg0,
        );

        for segment in &snapshot.segments {
            blit(
                &painter,
                texture_id,
                self.cell_rect(origin, segment.cell),
                SpriteSheet::segment_uv(segment.tile),
                segment.rotation,
            );
        }

        match snapshot.phase {
            GamePhase::Starting => {
                overlay(&painter, response.rect, "Press Enter to start");
            }
            GamePhase::Paused => {
                overlay(&painter, response.rect, "Game paused. Press P to continue");
            }
            GamePhase::Over => {
                overlay(
                    &painter,
                    response.rect,
                    &format!("Game over! Final score: {}", snapshot.score),
                );
            }
            GamePhase::Running => {}
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.game.on_frame();

        let texture_id = self.texture_id(ctx);
        let snapshot = self.game.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_board(ui, texture_id, &snapshot);
            ui.label(format!("Score: {}", snapshot.score));
        });

        // The engine counts frames, so keep them coming at display rate.
        ctx.request_repaint();
    }
}

/// The one draw primitive: a sub-region of the sprite sheet onto a cell
/// rectangle, optionally rotated around the cell center.
fn blit(
    painter: &egui::Painter,
    texture_id: egui::TextureId,
    rect: egui::Rect,
    uv: egui::Rect,
    rotation: Rotation,
) {
    let mut mesh = egui::Mesh::with_texture(texture_id);
    mesh.add_rect_with_uv(rect, uv, egui::Color32::WHITE);
    if rotation != Rotation::Deg0 {
        mesh.rotate(egui::emath::Rot2::from_angle(rotation.radians()), rect.center());
    }
    painter.add(egui::Shape::mesh(mesh));
}

fn overlay(painter: &egui::Painter, rect: egui::Rect, message: &str) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(140));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        message,
        egui::FontId::proportional(28.0),
        egui::Color32::WHITE,
    );
}
