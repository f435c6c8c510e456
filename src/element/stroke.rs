use egui::{Color32, Painter, Pos2, Stroke as EguiStroke};

use super::Drawable;

/// Freehand marker stroke: a series of connected points
#[derive(Debug, Clone)]
pub struct FreehandStroke {
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl FreehandStroke {
    /// Create a new stroke with the given properties
    pub fn new(points: Vec<Pos2>, thickness: f32, color: Color32) -> Self {
        Self {
            points,
            thickness,
            color,
        }
    }

    /// Get the points that make up this stroke, in drawing order
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// Get the stroke thickness
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Get the stroke color
    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Drawable for FreehandStroke {
    fn kind(&self) -> &'static str {
        "stroke"
    }

    fn extend(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    fn draw(&self, painter: &Painter) {
        // A single sample has no extent; nothing to trace.
        if self.points.len() < 2 {
            return;
        }

        painter.add(egui::Shape::line(
            self.points.clone(),
            EguiStroke::new(self.thickness, self.color),
        ));
    }
}
