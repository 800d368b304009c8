use crate::config::{GameConfig, HEADER_HEIGHT};
use crate::game::{EndCause, GameState, Phase};
use crate::grid::Cell;
use ggez::graphics::{self, BlendMode, Canvas, Color, DrawMode, DrawParam, Mesh, MeshBuilder, Rect};
use ggez::mint::Point2;
use ggez::{Context, GameResult};

// Arcade neon palette
const BG: Color = Color::new(0.031, 0.039, 0.078, 1.0);
const FG: Color = Color::new(0.922, 0.969, 1.0, 1.0);
const NEON_GREEN: Color = Color::new(0.0, 1.0, 0.706, 1.0);
const NEON_YELLOW: Color = Color::new(1.0, 0.902, 0.314, 1.0);
const NEON_PINK: Color = Color::new(1.0, 0.275, 0.588, 1.0);
const NEON_PURPLE: Color = Color::new(0.667, 0.0, 0.863, 1.0);
const NEON_BLUE: Color = Color::new(0.0, 0.784, 1.0, 1.0);
const GRID_COLOR: Color = Color::new(0.094, 0.118, 0.196, 1.0);
const WALL_COLOR: Color = Color::new(0.157, 0.196, 0.314, 1.0);
const PLATE_COLOR: Color = Color::new(0.071, 0.086, 0.141, 1.0);
const PLAYFIELD_COLOR: Color = Color::new(0.039, 0.047, 0.086, 1.0);
const FRAME_COLOR: Color = Color::new(0.235, 0.275, 0.431, 1.0);

/// Milliseconds the playfield flashes after a fruit is eaten.
pub const FLASH_MS: f32 = 120.0;

const TITLE_SCALE: f32 = 34.0;
const TEXT_SCALE: f32 = 20.0;
const BANNER_SCALE: f32 = 48.0;
const SCANLINE_GAP: u32 = 4;
const VIGNETTE_RINGS: u32 = 8;

fn inflate(rect: Rect, by: f32) -> Rect {
    Rect::new(rect.x - by, rect.y - by, rect.w + by * 2.0, rect.h + by * 2.0)
}

fn center(rect: Rect) -> Point2<f32> {
    Point2 {
        x: rect.x + rect.w / 2.0,
        y: rect.y + rect.h / 2.0,
    }
}

/// Pixel geometry of the window, derived from the config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    cell: f32,
    border: f32,
    width: f32,
    height: f32,
    grid_w: i32,
    grid_h: i32,
}

impl Layout {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cell: config.cell_size as f32,
            border: config.border as f32,
            width: config.window_width(),
            height: config.window_height(),
            grid_w: config.grid_width,
            grid_h: config.grid_height,
        }
    }

    pub fn playfield(&self) -> Rect {
        Rect::new(
            self.border,
            self.border + HEADER_HEIGHT as f32,
            self.grid_w as f32 * self.cell,
            self.grid_h as f32 * self.cell,
        )
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let field = self.playfield();
        Rect::new(
            field.x + cell.x as f32 * self.cell,
            field.y + cell.y as f32 * self.cell,
            self.cell,
            self.cell,
        )
    }

    fn bezel(&self, ctx: &mut Context) -> GameResult<Mesh> {
        let field = self.playfield();
        let mut mb = MeshBuilder::new();
        mb.rounded_rectangle(
            DrawMode::fill(),
            Rect::new(16.0, 16.0, self.width - 32.0, self.height - 32.0),
            18.0,
            WALL_COLOR,
        )?;
        // Header plate
        mb.rounded_rectangle(
            DrawMode::fill(),
            Rect::new(self.border - 8.0, self.border - 8.0, field.w + 16.0, 64.0),
            14.0,
            PLATE_COLOR,
        )?;
        // Playfield plate
        mb.rounded_rectangle(DrawMode::fill(), inflate(field, 8.0), 14.0, PLATE_COLOR)?;
        mb.rectangle(DrawMode::fill(), field, PLAYFIELD_COLOR)?;
        Ok(Mesh::from_data(ctx, mb.build()))
    }

    fn grid_lines(&self, ctx: &mut Context) -> GameResult<Mesh> {
        let field = self.playfield();
        let mut mb = MeshBuilder::new();
        for x in 0..=self.grid_w {
            let px = field.x + x as f32 * self.cell;
            mb.line(
                &[Point2 { x: px, y: field.y }, Point2 { x: px, y: field.bottom() }],
                1.0,
                GRID_COLOR,
            )?;
        }
        for y in 0..=self.grid_h {
            let py = field.y + y as f32 * self.cell;
            mb.line(
                &[Point2 { x: field.x, y: py }, Point2 { x: field.right(), y: py }],
                1.0,
                GRID_COLOR,
            )?;
        }
        mb.rectangle(DrawMode::stroke(2.0), field, FRAME_COLOR)?;
        Ok(Mesh::from_data(ctx, mb.build()))
    }

    fn scanlines(&self, ctx: &mut Context) -> GameResult<Mesh> {
        let shade = Color::new(0.0, 0.0, 0.0, 0.15);
        let mut mb = MeshBuilder::new();
        for y in (0..self.height as u32).step_by(SCANLINE_GAP as usize) {
            mb.rectangle(
                DrawMode::fill(),
                Rect::new(0.0, y as f32, self.width, 1.0),
                shade,
            )?;
        }
        Ok(Mesh::from_data(ctx, mb.build()))
    }

    /// Dark rings hugging the window edge, darkest outside.
    fn vignette(&self, ctx: &mut Context) -> GameResult<Mesh> {
        let mut mb = MeshBuilder::new();
        let ring = 6.0;
        for i in 0..VIGNETTE_RINGS {
            let inset = i as f32 * ring + ring / 2.0;
            let alpha = 0.3 * (VIGNETTE_RINGS - i) as f32 / VIGNETTE_RINGS as f32;
            mb.rectangle(
                DrawMode::stroke(ring),
                Rect::new(
                    inset,
                    inset,
                    self.width - inset * 2.0,
                    self.height - inset * 2.0,
                ),
                Color::new(0.0, 0.0, 0.0, alpha),
            )?;
        }
        Ok(Mesh::from_data(ctx, mb.build()))
    }
}

/// Draws one frame from the game state. Holds only meshes that never change
/// during a session.
pub struct Renderer {
    layout: Layout,
    glow_layers: u32,
    bezel: Mesh,
    grid_lines: Mesh,
    scanlines: Mesh,
    vignette: Mesh,
}

impl Renderer {
    pub fn new(ctx: &mut Context, config: &GameConfig) -> GameResult<Self> {
        let layout = Layout::new(config);
        Ok(Renderer {
            layout,
            glow_layers: config.glow_layers,
            bezel: layout.bezel(ctx)?,
            grid_lines: layout.grid_lines(ctx)?,
            scanlines: layout.scanlines(ctx)?,
            vignette: layout.vignette(ctx)?,
        })
    }

    pub fn background() -> Color {
        BG
    }

    /// Queue a neon block: fading halo layers into `glow`, solid core into
    /// `solid`.
    fn glow_rect(
        &self,
        glow: &mut MeshBuilder,
        solid: &mut MeshBuilder,
        rect: Rect,
        color: Color,
        radius: f32,
    ) -> GameResult {
        for i in (1..=self.glow_layers).rev() {
            let halo = Color::new(color.r, color.g, color.b, 0.14 / i as f32);
            glow.rounded_rectangle(
                DrawMode::fill(),
                inflate(rect, i as f32 * 2.0),
                radius + i as f32,
                halo,
            )?;
        }
        solid.rounded_rectangle(DrawMode::fill(), rect, radius, color)?;
        Ok(())
    }

    pub fn draw(
        &self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        game: &GameState,
        flash_ms: f32,
    ) -> GameResult {
        canvas.draw(&self.bezel, DrawParam::default());
        canvas.draw(&self.grid_lines, DrawParam::default());

        if flash_ms > 0.0 {
            let alpha = flash_ms.clamp(0.0, FLASH_MS) * 1.2 / 255.0;
            let overlay = Mesh::new_rectangle(
                ctx,
                DrawMode::fill(),
                self.layout.playfield(),
                Color::new(1.0, 1.0, 1.0, alpha),
            )?;
            canvas.set_blend_mode(BlendMode::ADD);
            canvas.draw(&overlay, DrawParam::default());
            canvas.set_blend_mode(BlendMode::ALPHA);
        }

        self.draw_pieces(ctx, canvas, game)?;
        self.draw_header(ctx, canvas, game)?;
        self.draw_banner(ctx, canvas, game)?;

        canvas.draw(&self.scanlines, DrawParam::default());
        canvas.draw(&self.vignette, DrawParam::default());
        Ok(())
    }

    fn draw_pieces(&self, ctx: &mut Context, canvas: &mut Canvas, game: &GameState) -> GameResult {
        let mut glow = MeshBuilder::new();
        let mut solid = MeshBuilder::new();
        let mut details = MeshBuilder::new();

        if let Some(food) = game.food() {
            let r = inflate(self.layout.cell_rect(food), -4.0);
            self.glow_rect(&mut glow, &mut solid, r, NEON_PINK, 5.0)?;
            // Sparkle
            let c = center(r);
            details.line(
                &[Point2 { x: c.x - 6.0, y: c.y }, Point2 { x: c.x + 6.0, y: c.y }],
                2.0,
                FG,
            )?;
            details.line(
                &[Point2 { x: c.x, y: c.y - 6.0 }, Point2 { x: c.x, y: c.y + 6.0 }],
                2.0,
                FG,
            )?;
        }

        let snake = game.snake();
        for cell in snake.cells().take(snake.len() - 1) {
            let r = inflate(self.layout.cell_rect(cell), -3.0);
            self.glow_rect(&mut glow, &mut solid, r, NEON_GREEN, 7.0)?;
        }

        let head = inflate(self.layout.cell_rect(snake.head()), -2.0);
        self.glow_rect(&mut glow, &mut solid, head, NEON_YELLOW, 8.0)?;

        // Eyes sit forward of centre, either side of the heading.
        let (dx, dy) = game.heading().delta();
        let c = center(head);
        let (fx, fy) = (c.x + dx as f32 * 4.0, c.y + dy as f32 * 4.0);
        let (px, py) = (-dy as f32 * 5.0, dx as f32 * 5.0);
        for side in [-1.0, 1.0] {
            details.circle(
                DrawMode::fill(),
                Point2 {
                    x: fx + px * side,
                    y: fy + py * side,
                },
                3.0,
                0.5,
                BG,
            )?;
        }

        if self.glow_layers > 0 {
            canvas.set_blend_mode(BlendMode::ADD);
            canvas.draw(&Mesh::from_data(ctx, glow.build()), DrawParam::default());
            canvas.set_blend_mode(BlendMode::ALPHA);
        }
        canvas.draw(&Mesh::from_data(ctx, solid.build()), DrawParam::default());
        canvas.draw(&Mesh::from_data(ctx, details.build()), DrawParam::default());
        Ok(())
    }

    fn draw_header(&self, ctx: &mut Context, canvas: &mut Canvas, game: &GameState) -> GameResult {
        let mut title = graphics::Text::new("NEON SNAKE");
        title.set_scale(TITLE_SCALE);
        canvas.draw(
            &title,
            DrawParam::default()
                .dest(Point2 {
                    x: self.layout.border,
                    y: self.layout.border - 6.0,
                })
                .color(NEON_BLUE),
        );

        let row = self.layout.border + 30.0;
        let mut score = graphics::Text::new(format!("SCORE: {}", game.score()));
        score.set_scale(TEXT_SCALE);
        canvas.draw(
            &score,
            DrawParam::default()
                .dest(Point2 { x: self.layout.border, y: row })
                .color(FG),
        );

        let mut speed = graphics::Text::new(format!("SPEED: {}", 1000 / game.move_delay_ms().max(1)));
        speed.set_scale(TEXT_SCALE);
        let speed_w = speed.measure(ctx)?.x;
        canvas.draw(
            &speed,
            DrawParam::default()
                .dest(Point2 {
                    x: self.layout.width / 2.0 - speed_w / 2.0,
                    y: row,
                })
                .color(FG),
        );

        let mut high = graphics::Text::new(format!("HIGHSCORE: {}", game.high_score()));
        high.set_scale(TEXT_SCALE);
        let high_w = high.measure(ctx)?.x;
        canvas.draw(
            &high,
            DrawParam::default()
                .dest(Point2 {
                    x: self.layout.width - self.layout.border - high_w,
                    y: row,
                })
                .color(FG),
        );
        Ok(())
    }

    fn draw_banner(&self, ctx: &mut Context, canvas: &mut Canvas, game: &GameState) -> GameResult {
        let (headline, color, tip) = match game.phase() {
            Phase::Running => return Ok(()),
            Phase::Paused => ("PAUSED", NEON_PURPLE, "Press P to resume"),
            Phase::Over(EndCause::BoardCleared) => {
                ("BOARD CLEARED", NEON_GREEN, "Press SPACE or R to restart")
            }
            Phase::Over(_) => ("GAME OVER", NEON_PINK, "Press SPACE or R to restart"),
        };

        let c = center(self.layout.playfield());
        let mut big = graphics::Text::new(headline);
        big.set_scale(BANNER_SCALE);
        let mut small = graphics::Text::new(tip);
        small.set_scale(TEXT_SCALE);

        for (text, color, y) in [(&big, color, c.y - 24.0), (&small, FG, c.y + 18.0)] {
            let size = text.measure(ctx)?;
            canvas.draw(
                text,
                DrawParam::default()
                    .dest(Point2 {
                        x: c.x - size.x / 2.0,
                        y: y - size.y / 2.0,
                    })
                    .color(color),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate_and_center() {
        let r = inflate(Rect::new(10.0, 20.0, 24.0, 24.0), -3.0);
        assert_eq!(r, Rect::new(13.0, 23.0, 18.0, 18.0));
        let c = center(r);
        assert_eq!((c.x, c.y), (22.0, 32.0));
    }

    #[test]
    fn test_playfield_sits_below_header() {
        let layout = Layout::new(&GameConfig::default());
        assert_eq!(layout.playfield(), Rect::new(32.0, 92.0, 576.0, 480.0));
        assert_eq!(
            layout.cell_rect(Cell::new(23, 19)),
            Rect::new(584.0, 548.0, 24.0, 24.0)
        );
    }
}
