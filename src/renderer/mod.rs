//! Drawing
//!
//! The simulation never draws itself. Anything that can fill a colored rectangle
//! given its center and size is a `Surface`, and every court entity knows how to put
//! itself on one.

pub mod shapes;
pub mod text;
pub mod vertex;

pub use shapes::VertexSurface;
pub use text::TextSurface;
pub use vertex::Vertex;

use crate::sim::{Ball, Color, GameState, Player, Wall};

/// A target that can fill axis-aligned rectangles
pub trait Surface {
    /// Fill a `width` x `height` rectangle centered on (`cx`, `cy`)
    fn fill_rect(&mut self, color: Color, cx: f32, cy: f32, width: f32, height: f32);
}

/// Something that can be drawn onto a surface
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

impl Drawable for Ball {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.color(), self.cx(), self.cy(), self.width(), self.height());
    }
}

impl Drawable for Wall {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.color, self.center.x, self.center.y, self.width, self.height);
    }
}

impl Drawable for Player {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.color, self.center.x, self.center.y, self.width, self.height);
    }
}

/// Draw the whole court: walls, then paddles, then the ball on top
pub fn draw_state(state: &GameState, surface: &mut dyn Surface) {
    for wall in &state.walls {
        wall.draw(surface);
    }
    for player in &state.players {
        player.draw(surface);
    }
    state.ball.draw(surface);
}
