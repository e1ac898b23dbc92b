//! OpenSCAD writer for the geometry tree.
//!
//! Output is a plain function of the tree and the renderer settings: no
//! timestamps, fixed decimal precision, negative zero folded to zero. Two
//! runs over the same tree produce byte-identical files.

use std::fs;
use std::path::Path;

use dactylkit_core::{Axis, Transform};
use tracing::debug;

use crate::error::Result;
use crate::shape::{Node, Shape};

const INDENT: &str = "  ";

/// Renders shapes as OpenSCAD source
#[derive(Debug, Clone)]
pub struct ScadRenderer {
    /// Digits after the decimal point
    pub precision: usize,
    /// First line of every file
    pub header: String,
}

impl Default for ScadRenderer {
    fn default() -> Self {
        Self {
            precision: 4,
            header: "// Generated by dactylkit".to_string(),
        }
    }
}

impl ScadRenderer {
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    pub fn render(&self, shape: &Shape) -> String {
        let mut out = String::new();
        out.push_str(&self.header);
        out.push('\n');
        self.render_node(shape, 0, &mut out);
        out
    }

    pub fn write_to_file(&self, shape: &Shape, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = self.render(shape);
        fs::write(path, &text)?;
        debug!("Wrote {} ({} bytes)", path.display(), text.len());
        Ok(())
    }

    fn num(&self, v: f64) -> String {
        let text = format!("{:.*}", self.precision, v);
        // "-0.0000" and "0.0000" must render the same
        if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
            text[1..].to_string()
        } else {
            text
        }
    }

    fn vec3(&self, x: f64, y: f64, z: f64) -> String {
        format!("[{}, {}, {}]", self.num(x), self.num(y), self.num(z))
    }

    fn line(out: &mut String, depth: usize, text: &str) {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push_str(text);
        out.push('\n');
    }

    fn block(&self, out: &mut String, depth: usize, head: &str, children: &[&Shape]) {
        Self::line(out, depth, &format!("{head} {{"));
        for child in children {
            self.render_node(child, depth + 1, out);
        }
        Self::line(out, depth, "}");
    }

    fn render_node(&self, shape: &Shape, depth: usize, out: &mut String) {
        match shape.node() {
            Node::Empty => Self::line(out, depth, "// empty"),
            Node::Cube { size, center } => {
                let text = format!(
                    "cube({}, center = {});",
                    self.vec3(size.x, size.y, size.z),
                    center
                );
                Self::line(out, depth, &text);
            }
            Node::Cylinder {
                height,
                radius_bottom,
                radius_top,
                segments,
                center,
            } => {
                let text = format!(
                    "cylinder(h = {}, r1 = {}, r2 = {}, center = {}, $fn = {});",
                    self.num(*height),
                    self.num(*radius_bottom),
                    self.num(*radius_top),
                    center,
                    segments
                );
                Self::line(out, depth, &text);
            }
            Node::Sphere { radius, segments } => {
                let text = format!("sphere(r = {}, $fn = {});", self.num(*radius), segments);
                Self::line(out, depth, &text);
            }
            Node::Transformed { transform, child } => {
                let head = match transform {
                    Transform::Translate(v) => format!("translate({})", self.vec3(v.x, v.y, v.z)),
                    Transform::Rotate { axis, degrees } => {
                        let d = *degrees;
                        let v = match axis {
                            Axis::X => self.vec3(d, 0.0, 0.0),
                            Axis::Y => self.vec3(0.0, d, 0.0),
                            Axis::Z => self.vec3(0.0, 0.0, d),
                        };
                        format!("rotate({v})")
                    }
                };
                self.block(out, depth, &head, &[child]);
            }
            Node::Mirror { normal, child } => {
                let head = format!("mirror({})", self.vec3(normal.x, normal.y, normal.z));
                self.block(out, depth, &head, &[child]);
            }
            Node::Color { color, child } => {
                self.block(out, depth, &format!("color(\"{color}\")"), &[child]);
            }
            Node::Hull(children) => {
                let refs: Vec<&Shape> = children.iter().collect();
                self.block(out, depth, "hull()", &refs);
            }
            Node::Union(children) => {
                let refs: Vec<&Shape> = children.iter().collect();
                self.block(out, depth, "union()", &refs);
            }
            Node::Difference { base, cut } => {
                self.block(out, depth, "difference()", &[base, cut]);
            }
            Node::Projection(child) => {
                self.block(out, depth, "projection(cut = false)", &[child]);
            }
            Node::LinearExtrude { height, child } => {
                let head = format!("linear_extrude(height = {})", self.num(*height));
                self.block(out, depth, &head, &[child]);
            }
        }
    }
}
