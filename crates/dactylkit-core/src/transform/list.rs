use nalgebra::{Matrix4, Point3, Vector3};

use super::Transform;

/// An ordered chain of transforms.
///
/// Element 0 is applied first (closest to the local frame), the last element
/// is applied last (closest to world space). Lists have value semantics:
/// every builder method consumes `self` and returns the adjusted chain, so
/// adjusting a copy can never disturb the list it was taken from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformList {
    transforms: Vec<Transform>,
}

impl TransformList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transforms(transforms: impl IntoIterator<Item = Transform>) -> Self {
        Self {
            transforms: transforms.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Transforms in application order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Transform> {
        self.transforms.iter()
    }

    /// Add a transform applied after the existing chain
    pub fn push(&mut self, transform: Transform) {
        self.transforms.push(transform);
    }

    /// Add a transform applied before the existing chain
    pub fn push_front(&mut self, transform: Transform) {
        self.transforms.insert(0, transform);
    }

    pub fn append(mut self, transform: Transform) -> Self {
        self.push(transform);
        self
    }

    pub fn translate(self, x: f64, y: f64, z: f64) -> Self {
        self.append(Transform::translate(x, y, z))
    }

    pub fn translate_z(self, z: f64) -> Self {
        self.translate(0.0, 0.0, z)
    }

    pub fn rotate_x(self, degrees: f64) -> Self {
        self.append(Transform::rotate_x(degrees))
    }

    pub fn rotate_y(self, degrees: f64) -> Self {
        self.append(Transform::rotate_y(degrees))
    }

    pub fn rotate_z(self, degrees: f64) -> Self {
        self.append(Transform::rotate_z(degrees))
    }

    /// Rotate about X, then Y, then Z. Zero angles are skipped.
    pub fn rotate(self, rx: f64, ry: f64, rz: f64) -> Self {
        self.append_list(&rotation_list(rx, ry, rz))
    }

    /// Chain `other` after this list (`other` ends up closer to world space)
    pub fn append_list(mut self, other: &TransformList) -> Self {
        self.transforms.extend(other.transforms.iter().copied());
        self
    }

    /// Chain `other` before this list (`other` ends up closer to the local frame)
    pub fn append_front(self, other: &TransformList) -> Self {
        other.clone().append_list(&self)
    }

    /// Offset in the innermost frame, e.g. move a corner anchor along its key's own axes
    pub fn translate_front(self, x: f64, y: f64, z: f64) -> Self {
        self.append_front(&TransformList::new().translate(x, y, z))
    }

    /// Rotate in the innermost frame
    pub fn rotate_front(self, rx: f64, ry: f64, rz: f64) -> Self {
        self.append_front(&rotation_list(rx, ry, rz))
    }

    /// Resolve a child chain against its parent: the child's list first, then the parent's
    pub fn then(&self, parent: &TransformList) -> TransformList {
        self.clone().append_list(parent)
    }

    pub fn apply(&self, point: Point3<f64>) -> Point3<f64> {
        self.transforms
            .iter()
            .fold(point, |p, transform| transform.apply_point(p))
    }

    pub fn apply_vector(&self, vector: Vector3<f64>) -> Vector3<f64> {
        self.transforms
            .iter()
            .fold(vector, |v, transform| transform.apply_vector(v))
    }

    /// Where the chain puts its local origin
    pub fn origin(&self) -> Point3<f64> {
        self.apply(Point3::origin())
    }

    /// Homogeneous matrix equivalent of the whole chain
    pub fn to_matrix(&self) -> Matrix4<f64> {
        self.transforms
            .iter()
            .fold(Matrix4::identity(), |m, transform| {
                let step = match transform {
                    Transform::Translate(v) => Matrix4::new_translation(v),
                    Transform::Rotate { .. } => transform.rotation().to_homogeneous(),
                };
                step * m
            })
    }
}

impl FromIterator<Transform> for TransformList {
    fn from_iter<I: IntoIterator<Item = Transform>>(iter: I) -> Self {
        Self::from_transforms(iter)
    }
}

fn rotation_list(rx: f64, ry: f64, rz: f64) -> TransformList {
    [
        Transform::rotate_x(rx),
        Transform::rotate_y(ry),
        Transform::rotate_z(rz),
    ]
    .into_iter()
    .filter(|t| !t.is_identity())
    .collect()
}
