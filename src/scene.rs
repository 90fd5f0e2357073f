//! Retained display list of the canvas
//!
//! Everything the editor shows is a [`Shape`] in the [`Scene`]: node bodies,
//! terminal circles, connection lines, the padding frame and the new-node
//! control. Components keep [`ShapeId`]s and mutate their shapes in place;
//! the editor paints the list in insertion order every frame.

use crate::nodes::{NodeId, TerminalId};
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

/// Handle to a shape in the scene
pub type ShapeId = usize;

/// Component a shape resolves to when the pointer hits it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeOwner {
    Terminal(TerminalId),
    NodeBody(NodeId),
    NewNodeButton,
}

/// Geometry and paint of a shape
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Rect {
        rect: Rect,
        fill: Color32,
        stroke: Stroke,
        label: Option<String>,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
    },
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
}

/// A visual primitive with its visibility and optional owner
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub visible: bool,
    pub owner: Option<ShapeOwner>,
}

impl Shape {
    fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            visible: true,
            owner: None,
        }
    }

    /// Whether `point` lies inside the shape. Lines have no area.
    pub fn contains(&self, point: Pos2) -> bool {
        match &self.kind {
            ShapeKind::Rect { rect, .. } => rect.contains(point),
            ShapeKind::Circle { center, radius, .. } => center.distance(point) <= *radius,
            ShapeKind::Line { .. } => false,
        }
    }

    /// Center of the shape's bounds
    pub fn center(&self) -> Pos2 {
        match &self.kind {
            ShapeKind::Rect { rect, .. } => rect.center(),
            ShapeKind::Circle { center, .. } => *center,
            ShapeKind::Line { from, to, .. } => from.lerp(*to, 0.5),
        }
    }
}

/// Ordered collection of every shape on the canvas
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Creates an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: ShapeKind) -> ShapeId {
        self.shapes.push(Shape::new(kind));
        self.shapes.len() - 1
    }

    /// Adds a filled rectangle
    pub fn add_rect(&mut self, rect: Rect, fill: Color32) -> ShapeId {
        self.push(ShapeKind::Rect {
            rect,
            fill,
            stroke: Stroke::NONE,
            label: None,
        })
    }

    /// Adds an unfilled, stroked rectangle
    pub fn add_outline(&mut self, rect: Rect, stroke: Stroke) -> ShapeId {
        self.push(ShapeKind::Rect {
            rect,
            fill: Color32::TRANSPARENT,
            stroke,
            label: None,
        })
    }

    /// Adds a filled circle
    pub fn add_circle(&mut self, center: Pos2, radius: f32, fill: Color32) -> ShapeId {
        self.push(ShapeKind::Circle {
            center,
            radius,
            fill,
        })
    }

    /// Adds a line segment
    pub fn add_line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) -> ShapeId {
        self.push(ShapeKind::Line { from, to, stroke })
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Attaches a back-reference so pointer hits on the shape resolve to `owner`
    pub fn bind(&mut self, id: ShapeId, owner: ShapeOwner) {
        if let Some(shape) = self.shapes.get_mut(id) {
            shape.owner = Some(owner);
        }
    }

    pub fn set_visible(&mut self, id: ShapeId, visible: bool) {
        if let Some(shape) = self.shapes.get_mut(id) {
            shape.visible = visible;
        }
    }

    pub fn is_visible(&self, id: ShapeId) -> bool {
        self.shapes.get(id).is_some_and(|shape| shape.visible)
    }

    /// Sets the fill of a rectangle or circle
    pub fn set_fill(&mut self, id: ShapeId, color: Color32) {
        match self.shapes.get_mut(id).map(|shape| &mut shape.kind) {
            Some(ShapeKind::Rect { fill, .. }) | Some(ShapeKind::Circle { fill, .. }) => {
                *fill = color
            }
            _ => {}
        }
    }

    /// Fill of a rectangle or circle
    pub fn fill(&self, id: ShapeId) -> Option<Color32> {
        match self.shapes.get(id).map(|shape| &shape.kind) {
            Some(ShapeKind::Rect { fill, .. }) | Some(ShapeKind::Circle { fill, .. }) => {
                Some(*fill)
            }
            _ => None,
        }
    }

    /// Center of any shape
    pub fn center(&self, id: ShapeId) -> Option<Pos2> {
        self.shapes.get(id).map(Shape::center)
    }

    /// Bounds of a rectangle
    pub fn rect(&self, id: ShapeId) -> Option<Rect> {
        match self.shapes.get(id).map(|shape| &shape.kind) {
            Some(ShapeKind::Rect { rect, .. }) => Some(*rect),
            _ => None,
        }
    }

    pub fn set_rect(&mut self, id: ShapeId, new_rect: Rect) {
        if let Some(ShapeKind::Rect { rect, .. }) = self.shapes.get_mut(id).map(|s| &mut s.kind) {
            *rect = new_rect;
        }
    }

    pub fn set_label(&mut self, id: ShapeId, text: impl Into<String>) {
        if let Some(ShapeKind::Rect { label, .. }) = self.shapes.get_mut(id).map(|s| &mut s.kind) {
            *label = Some(text.into());
        }
    }

    /// Endpoints of a line
    pub fn line(&self, id: ShapeId) -> Option<(Pos2, Pos2)> {
        match self.shapes.get(id).map(|shape| &shape.kind) {
            Some(ShapeKind::Line { from, to, .. }) => Some((*from, *to)),
            _ => None,
        }
    }

    /// Replaces both endpoints of a line
    pub fn set_line(&mut self, id: ShapeId, start: Pos2, end: Pos2) {
        if let Some(ShapeKind::Line { from, to, .. }) = self.shapes.get_mut(id).map(|s| &mut s.kind)
        {
            *from = start;
            *to = end;
        }
    }

    /// Moves the start point of a line, keeping its end
    pub fn set_line_start(&mut self, id: ShapeId, start: Pos2) {
        if let Some(ShapeKind::Line { from, .. }) = self.shapes.get_mut(id).map(|s| &mut s.kind) {
            *from = start;
        }
    }

    /// Moves the end point of a line, keeping its start
    pub fn set_line_end(&mut self, id: ShapeId, end: Pos2) {
        if let Some(ShapeKind::Line { to, .. }) = self.shapes.get_mut(id).map(|s| &mut s.kind) {
            *to = end;
        }
    }

    /// Translates a shape by `delta`
    pub fn translate(&mut self, id: ShapeId, delta: Vec2) {
        let Some(shape) = self.shapes.get_mut(id) else {
            return;
        };
        match &mut shape.kind {
            ShapeKind::Rect { rect, .. } => *rect = rect.translate(delta),
            ShapeKind::Circle { center, .. } => *center += delta,
            ShapeKind::Line { from, to, .. } => {
                *from += delta;
                *to += delta;
            }
        }
    }

    /// Topmost visible, owned shape under `point`
    pub fn hit_test(&self, point: Pos2) -> Option<ShapeOwner> {
        self.shapes
            .iter()
            .rev()
            .filter(|shape| shape.visible)
            .find_map(|shape| match shape.owner {
                Some(owner) if shape.contains(point) => Some(owner),
                _ => None,
            })
    }
}
