use crate::geometry::Aabb;

/// Immutable, ordered collection of static colliders (walls).
///
/// Built once from level data and borrowed by every collision query. Order is
/// significant: resolvers visit obstacles in insertion order, which keeps
/// resolution reproducible for identical inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    boxes: Vec<Aabb>,
}

impl ObstacleSet {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Aabb> {
        self.boxes.iter()
    }

    pub fn as_slice(&self) -> &[Aabb] {
        &self.boxes
    }

    /// Obstacles overlapping `body`, in set order.
    pub fn overlapping<'a>(&'a self, body: &'a Aabb) -> impl Iterator<Item = &'a Aabb> + 'a {
        self.boxes.iter().filter(move |obstacle| body.intersects(obstacle))
    }

    pub fn any_overlap(&self, body: &Aabb) -> bool {
        self.boxes.iter().any(|obstacle| body.intersects(obstacle))
    }
}

impl FromIterator<Aabb> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Aabb>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ObstacleSet {
    type Item = &'a Aabb;
    type IntoIter = core::slice::Iter<'a, Aabb>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}
