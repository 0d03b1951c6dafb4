//! Shape generation for 2D primitives

use glam::Vec2;

use super::Surface;
use super::vertex::Vertex;
use crate::sim::Color;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(center: Vec2, width: f32, height: f32, color: Color) -> [Vertex; 6] {
    let half = Vec2::new(width / 2.0, height / 2.0);
    let min = center - half;
    let max = center + half;

    [
        Vertex::colored(min.x, min.y, color),
        Vertex::colored(max.x, min.y, color),
        Vertex::colored(min.x, max.y, color),
        Vertex::colored(min.x, max.y, color),
        Vertex::colored(max.x, min.y, color),
        Vertex::colored(max.x, max.y, color),
    ]
}

/// Surface that collects a triangle list, ready to upload to a GPU vertex buffer
#[derive(Debug, Default)]
pub struct VertexSurface {
    pub vertices: Vec<Vertex>,
}

impl VertexSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Surface for VertexSurface {
    fn fill_rect(&mut self, color: Color, cx: f32, cy: f32, width: f32, height: f32) {
        self.vertices
            .extend_from_slice(&rect(Vec2::new(cx, cy), width, height, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::renderer::draw_state;
    use crate::sim::GameState;

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(10.0, 20.0), 4.0, 6.0, Color::RED);
        assert_eq!(v[0].position, [8.0, 17.0]);
        assert_eq!(v[5].position, [12.0, 23.0]);
        assert!(v.iter().all(|vert| vert.color == Color::RED.rgba()));
    }

    #[test]
    fn test_vertex_surface_collects_court() {
        let state = GameState::new(Settings::default());
        let mut surface = VertexSurface::new();
        draw_state(&state, &mut surface);
        assert_eq!(surface.triangle_count(), 14);

        surface.clear();
        assert!(surface.vertices.is_empty());
    }
}
