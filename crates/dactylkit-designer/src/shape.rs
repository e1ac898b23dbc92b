//! Solid geometry tree.
//!
//! Shapes are immutable, cheaply clonable handles onto a constructive solid
//! geometry tree. Nothing is evaluated here: the tree is handed to
//! [`ScadRenderer`](crate::scad_renderer::ScadRenderer), which writes it out
//! for an external mesh kernel. Hulls and unions with zero or one child are
//! left for the kernel to resolve.

use std::path::Path;
use std::rc::Rc;

use dactylkit_core::{Point3, Transform, TransformList, Vector3};

use crate::error::Result;
use crate::scad_renderer::ScadRenderer;

/// A node in the solid geometry tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Empty,
    Cube {
        size: Vector3<f64>,
        center: bool,
    },
    Cylinder {
        height: f64,
        radius_bottom: f64,
        radius_top: f64,
        segments: u32,
        center: bool,
    },
    Sphere {
        radius: f64,
        segments: u32,
    },
    Transformed {
        transform: Transform,
        child: Shape,
    },
    Mirror {
        normal: Vector3<f64>,
        child: Shape,
    },
    Color {
        color: String,
        child: Shape,
    },
    Hull(Vec<Shape>),
    Union(Vec<Shape>),
    Difference {
        base: Shape,
        cut: Shape,
    },
    /// Flatten onto the XY plane
    Projection(Shape),
    /// Extrude a flat shape upwards from z = 0
    LinearExtrude {
        height: f64,
        child: Shape,
    },
}

/// Handle to a node of the geometry tree
#[derive(Debug, Clone, PartialEq)]
pub struct Shape(Rc<Node>);

impl Default for Shape {
    fn default() -> Self {
        Shape::empty()
    }
}

impl Shape {
    fn from_node(node: Node) -> Self {
        Shape(Rc::new(node))
    }

    pub fn node(&self) -> &Node {
        &self.0
    }

    pub fn empty() -> Self {
        Shape::from_node(Node::Empty)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.node(), Node::Empty)
    }

    /// Box centered on the origin
    pub fn cube(x: f64, y: f64, z: f64) -> Self {
        Shape::from_node(Node::Cube {
            size: Vector3::new(x, y, z),
            center: true,
        })
    }

    /// Cylinder along Z centered on the origin
    pub fn cylinder(height: f64, radius: f64, segments: u32) -> Self {
        Shape::cone(height, radius, radius, segments)
    }

    pub fn cone(height: f64, radius_bottom: f64, radius_top: f64, segments: u32) -> Self {
        Shape::from_node(Node::Cylinder {
            height,
            radius_bottom,
            radius_top,
            segments,
            center: true,
        })
    }

    pub fn sphere(radius: f64, segments: u32) -> Self {
        Shape::from_node(Node::Sphere { radius, segments })
    }

    fn transformed_by(&self, transform: Transform) -> Shape {
        if transform.is_identity() {
            return self.clone();
        }
        Shape::from_node(Node::Transformed {
            transform,
            child: self.clone(),
        })
    }

    pub fn translate(&self, x: f64, y: f64, z: f64) -> Shape {
        self.transformed_by(Transform::translate(x, y, z))
    }

    pub fn translate_z(&self, z: f64) -> Shape {
        self.translate(0.0, 0.0, z)
    }

    pub fn translate_to(&self, p: Point3<f64>) -> Shape {
        self.translate(p.x, p.y, p.z)
    }

    /// Rotate about X, then Y, then Z (degrees)
    pub fn rotate(&self, rx: f64, ry: f64, rz: f64) -> Shape {
        self.transformed_by(Transform::rotate_x(rx))
            .transformed_by(Transform::rotate_y(ry))
            .transformed_by(Transform::rotate_z(rz))
    }

    /// Place this shape in the frame described by `transforms`
    pub fn transformed(&self, transforms: &TransformList) -> Shape {
        transforms
            .iter()
            .fold(self.clone(), |shape, t| shape.transformed_by(*t))
    }

    /// Reflect through the YZ plane
    pub fn mirror_x(&self) -> Shape {
        Shape::from_node(Node::Mirror {
            normal: Vector3::new(1.0, 0.0, 0.0),
            child: self.clone(),
        })
    }

    pub fn color(&self, color: impl Into<String>) -> Shape {
        Shape::from_node(Node::Color {
            color: color.into(),
            child: self.clone(),
        })
    }

    pub fn union(&self, other: &Shape) -> Shape {
        union_all([self.clone(), other.clone()])
    }

    pub fn subtract(&self, cut: &Shape) -> Shape {
        if cut.is_empty() {
            return self.clone();
        }
        Shape::from_node(Node::Difference {
            base: self.clone(),
            cut: cut.clone(),
        })
    }

    pub fn projection(&self) -> Shape {
        Shape::from_node(Node::Projection(self.clone()))
    }

    pub fn linear_extrude(&self, height: f64) -> Shape {
        Shape::from_node(Node::LinearExtrude {
            height,
            child: self.clone(),
        })
    }

    /// Render with the default renderer and write to `path`
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        ScadRenderer::default().write_to_file(self, path)
    }
}

/// Convex hull of the given shapes
pub fn hull<I: IntoIterator<Item = Shape>>(shapes: I) -> Shape {
    let children: Vec<Shape> = shapes.into_iter().filter(|s| !s.is_empty()).collect();
    if children.is_empty() {
        return Shape::empty();
    }
    Shape::from_node(Node::Hull(children))
}

/// Union of the given shapes. Nested unions are flattened.
pub fn union_all<I: IntoIterator<Item = Shape>>(shapes: I) -> Shape {
    let mut children = Vec::new();
    for shape in shapes {
        match shape.node() {
            Node::Empty => {}
            Node::Union(inner) => children.extend(inner.iter().cloned()),
            _ => children.push(shape),
        }
    }
    match children.len() {
        0 => Shape::empty(),
        1 => children.remove(0),
        _ => Shape::from_node(Node::Union(children)),
    }
}

/// Places shapes in the frame a transform chain describes
pub trait ApplyShape {
    fn apply_shape(&self, shape: &Shape) -> Shape;
}

impl ApplyShape for TransformList {
    fn apply_shape(&self, shape: &Shape) -> Shape {
        shape.transformed(self)
    }
}
