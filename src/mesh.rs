//! Polygon mesh store with derived face planes, vertex normals and discrete
//! curvature.
//!
//! The mesh exclusively owns its vertices and faces; both are addressed
//! through opaque [`VertexId`] / [`FaceId`] handles that wrap the element's
//! identity index. Identity indices equal insertion order until the first
//! deletion; deletions swap the last element into the vacated slot, so a
//! handle is only guaranteed valid until the next deletion.

use crate::error::OwnershipError;
use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Handle to a vertex of a [`Mesh`], wrapping its identity index.
///
/// Valid until the next deletion on the owning mesh: [`Mesh::delete_vertex`]
/// reassigns the identity index of whichever vertex occupied the last slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexId(pub(crate) u32);

impl VertexId {
    /// The identity index, e.g. for serialization. Only stable while no
    /// deletions occur on the owning mesh.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a face of a [`Mesh`], wrapping its identity index.
///
/// Same validity rules as [`VertexId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceId(pub(crate) u32);

impl FaceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A mesh vertex. `normal` and `curvature` are derived quantities: they are
/// only fresh immediately after [`Mesh::update`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub texcoords: Vec2,
    /// Discrete Gaussian curvature by angle deficit, derived.
    pub curvature: f32,
}

/// A polygon face: an ordered vertex boundary plus its derived best-fit
/// plane. Counter-clockwise winding defines the outward normal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Face {
    vertices: Vec<VertexId>,
    plane: Plane,
}

impl Face {
    /// The ordered polygon boundary.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Best-fit plane from Newell's method; degenerate (zero normal) for
    /// faces with fewer than three vertices. Fresh immediately after face
    /// creation or [`Mesh::update`].
    pub fn plane(&self) -> Plane {
        self.plane
    }
}

/// A plane in `normal · p + d = 0` form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            normal,
            d: -normal.dot(point),
        }
    }

    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }
}

/// An axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// The empty box: unioning any point with it yields that point.
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    pub fn union_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            (self.min + self.max) / 2.0
        }
    }

    pub fn diagonal_radius(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            (self.max - self.min).length() / 2.0
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Vertex and face store with maintained vertex→face adjacency and an
/// axis-aligned bounding box.
///
/// Entities are created only through [`create_vertex`](Self::create_vertex) /
/// [`create_face`](Self::create_face) and destroyed only through the
/// deletion operations (or with the mesh itself).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    /// Faces touching each vertex, parallel to `vertices`. Kept current on
    /// creation and deletion so per-vertex passes run in O(degree).
    incident: Vec<Vec<FaceId>>,
    bounds: Bounds,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len() as u32).map(VertexId)
    }

    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len() as u32).map(FaceId)
    }

    /// Faces incident to a vertex, in registration order.
    pub fn incident_faces(&self, id: VertexId) -> &[FaceId] {
        &self.incident[id.index()]
    }

    /// The bounding box as last maintained: unioned on every vertex
    /// creation, rebuilt from scratch by [`update`](Self::update). Direct
    /// position edits leave it stale until then.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Vec3 {
        self.bounds.center()
    }

    /// Half the bounding box diagonal.
    pub fn radius(&self) -> f32 {
        self.bounds.diagonal_radius()
    }

    /// Appends a vertex and returns its handle. The identity index is the
    /// vertex count before insertion; the bounding box is unioned with
    /// `position` immediately. O(1).
    pub fn create_vertex(&mut self, position: Vec3, normal: Vec3, texcoords: Vec2) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex {
            position,
            normal,
            texcoords,
            curvature: 0.0,
        });
        self.incident.push(Vec::new());
        self.bounds.union_point(position);
        id
    }

    /// Appends a face over the given boundary and returns its handle.
    ///
    /// Requires at least one vertex, all belonging to this mesh. The face's
    /// best-fit plane is computed immediately via Newell's method, which
    /// tolerates non-planar boundaries; fewer than three vertices yield a
    /// degenerate plane.
    pub fn create_face(&mut self, vertices: &[VertexId]) -> Result<FaceId, OwnershipError> {
        if vertices.is_empty() {
            return Err(OwnershipError::EmptyFace);
        }
        for &v in vertices {
            if v.index() >= self.vertices.len() {
                return Err(OwnershipError::ForeignVertex {
                    vertex: v,
                    vertex_count: self.vertices.len(),
                });
            }
        }
        Ok(self.add_face(vertices.to_vec()))
    }

    /// Appends a face whose handles are known to come from this mesh.
    pub(crate) fn add_face(&mut self, vertices: Vec<VertexId>) -> FaceId {
        let id = FaceId(self.faces.len() as u32);
        let plane = self.face_plane_for(&vertices);
        for &v in &vertices {
            let list = &mut self.incident[v.index()];
            if !list.contains(&id) {
                list.push(id);
            }
        }
        self.faces.push(Face { vertices, plane });
        id
    }

    /// Removes a vertex in O(1) by swapping the last vertex into its slot.
    ///
    /// The moved vertex takes over the vacated identity index; faces
    /// referencing the moved vertex are patched through the adjacency lists.
    /// HAZARD: any external structure holding identity indices must be
    /// updated after this call, and a face still referencing the *deleted*
    /// vertex is left pointing at whichever vertex was swapped into the
    /// slot. Delete faces before their vertices, or avoid deletion entirely.
    pub fn delete_vertex(&mut self, vertex: VertexId) {
        let idx = vertex.index();
        let last = VertexId((self.vertices.len() - 1) as u32);
        self.vertices.swap_remove(idx);
        self.incident.swap_remove(idx);
        if vertex != last {
            let moved_faces = self.incident[idx].clone();
            for f in moved_faces {
                for v in &mut self.faces[f.index()].vertices {
                    if *v == last {
                        *v = vertex;
                    }
                }
            }
        }
    }

    /// Removes a face in O(1) by swapping the last face into its slot; the
    /// moved face takes over the vacated identity index. Same external
    /// identity-index hazard as [`delete_vertex`](Self::delete_vertex).
    pub fn delete_face(&mut self, face: FaceId) {
        let idx = face.index();
        let boundary = self.faces[idx].vertices.clone();
        for v in boundary {
            self.incident[v.index()].retain(|&f| f != face);
        }
        let last = FaceId((self.faces.len() - 1) as u32);
        self.faces.swap_remove(idx);
        if face != last {
            let moved_boundary = self.faces[idx].vertices.clone();
            for v in moved_boundary {
                for f in &mut self.incident[v.index()] {
                    if *f == last {
                        *f = face;
                    }
                }
            }
        }
    }

    /// Full recomputation of every derived quantity: bounding box, face
    /// planes, vertex normals, vertex curvatures.
    ///
    /// Derived quantities must not be assumed fresh except immediately after
    /// this returns; any direct position edit staled them.
    pub fn update(&mut self) {
        self.update_bounds();
        self.update_face_planes();
        self.update_vertex_normals();
        self.update_vertex_curvatures();
    }

    fn update_bounds(&mut self) {
        self.bounds = Bounds::EMPTY;
        for vertex in &self.vertices {
            self.bounds.union_point(vertex.position);
        }
    }

    fn update_face_planes(&mut self) {
        for i in 0..self.faces.len() {
            let plane = self.face_plane_for(&self.faces[i].vertices);
            self.faces[i].plane = plane;
        }
    }

    fn update_vertex_normals(&mut self) {
        for i in 0..self.vertices.len() {
            // The Newell vector is 2·area·normal, so summing incident
            // vectors and normalizing is the area-weighted average.
            let mut accumulated = Vec3::ZERO;
            for &f in &self.incident[i] {
                accumulated += self.newell_vector(&self.faces[f.index()].vertices);
            }
            self.vertices[i].normal = accumulated.normalize_or_zero();
        }
    }

    fn update_vertex_curvatures(&mut self) {
        for i in 0..self.vertices.len() {
            let here = VertexId(i as u32);
            let mut angle_sum = 0.0;
            let mut area_sum = 0.0;
            for &f in &self.incident[i] {
                let boundary = &self.faces[f.index()].vertices;
                angle_sum += self.interior_angle(boundary, here);
                area_sum += 0.5 * self.newell_vector(boundary).length();
            }
            let local_area = area_sum / 3.0;
            self.vertices[i].curvature = if local_area > 0.0 {
                (TAU - angle_sum) / local_area
            } else {
                0.0
            };
        }
    }

    /// Perimeter accumulation over wrapped consecutive vertex pairs. The
    /// result points along the polygon normal for counter-clockwise
    /// boundaries and has length 2·area.
    fn newell_vector(&self, boundary: &[VertexId]) -> Vec3 {
        let mut sum = Vec3::ZERO;
        if boundary.len() < 3 {
            return sum;
        }
        let mut p1 = self.vertices[boundary[boundary.len() - 1].index()].position;
        for &v in boundary {
            let p2 = self.vertices[v.index()].position;
            sum.x += (p1.y - p2.y) * (p1.z + p2.z);
            sum.y += (p1.z - p2.z) * (p1.x + p2.x);
            sum.z += (p1.x - p2.x) * (p1.y + p2.y);
            p1 = p2;
        }
        sum
    }

    fn face_plane_for(&self, boundary: &[VertexId]) -> Plane {
        if boundary.len() < 3 {
            return Plane::default();
        }
        let mut centroid = Vec3::ZERO;
        for &v in boundary {
            centroid += self.vertices[v.index()].position;
        }
        centroid /= boundary.len() as f32;
        Plane::new(centroid, self.newell_vector(boundary).normalize_or_zero())
    }

    /// Sum of the polygon's interior angles at `vertex`, over every
    /// occurrence of it on the boundary.
    fn interior_angle(&self, boundary: &[VertexId], vertex: VertexId) -> f32 {
        let n = boundary.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for j in 0..n {
            if boundary[j] != vertex {
                continue;
            }
            let here = self.vertices[boundary[j].index()].position;
            let prev = self.vertices[boundary[(j + n - 1) % n].index()].position;
            let next = self.vertices[boundary[(j + 1) % n].index()].position;
            let a = prev - here;
            let b = next - here;
            if a.length_squared() > 0.0 && b.length_squared() > 0.0 {
                sum += a.angle_between(b);
            }
        }
        sum
    }

    /// Translates a subset of vertices. Derived quantities (and the bounding
    /// box) are stale until [`update`](Self::update).
    pub fn translate_vertices(&mut self, shape: &[VertexId], offset: Vec3) {
        for &v in shape {
            self.vertices[v.index()].position += offset;
        }
    }

    /// Scales a subset of vertices about the origin. Stale until
    /// [`update`](Self::update).
    pub fn scale_vertices(&mut self, shape: &[VertexId], factors: Vec3) {
        for &v in shape {
            self.vertices[v.index()].position *= factors;
        }
    }

    /// Rotates a subset of vertices about the origin. Stale until
    /// [`update`](Self::update).
    pub fn rotate_vertices(&mut self, shape: &[VertexId], rotation: Quat) {
        for &v in shape {
            let p = self.vertices[v.index()].position;
            self.vertices[v.index()].position = rotation * p;
        }
    }

    /// Translates the whole mesh and refreshes derived quantities.
    pub fn translate(&mut self, offset: Vec3) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
        self.update();
    }

    /// Scales the whole mesh about the origin and refreshes derived
    /// quantities.
    pub fn scale(&mut self, factors: Vec3) {
        for vertex in &mut self.vertices {
            vertex.position *= factors;
        }
        self.update();
    }

    /// Rotates the whole mesh about the origin and refreshes derived
    /// quantities.
    pub fn rotate(&mut self, rotation: Quat) {
        for vertex in &mut self.vertices {
            vertex.position = rotation * vertex.position;
        }
        self.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square(mesh: &mut Mesh) -> (Vec<VertexId>, FaceId) {
        let ids = vec![
            mesh.create_vertex(Vec3::new(0.0, 0.0, 0.0), Vec3::ZERO, Vec2::ZERO),
            mesh.create_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, Vec2::ZERO),
            mesh.create_vertex(Vec3::new(1.0, 1.0, 0.0), Vec3::ZERO, Vec2::ZERO),
            mesh.create_vertex(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, Vec2::ZERO),
        ];
        let face = mesh.create_face(&ids).unwrap();
        (ids, face)
    }

    #[test]
    fn vertex_identity_indices_follow_insertion_order() {
        let mut mesh = Mesh::new();
        for i in 0..5 {
            let id = mesh.create_vertex(Vec3::splat(i as f32), Vec3::ZERO, Vec2::ZERO);
            assert_eq!(id.index(), i);
        }
        assert_eq!(mesh.vertex_count(), 5);
    }

    #[test]
    fn bounds_are_componentwise_min_max() {
        let mut mesh = Mesh::new();
        mesh.create_vertex(Vec3::new(-1.0, 2.0, 0.0), Vec3::ZERO, Vec2::ZERO);
        mesh.create_vertex(Vec3::new(3.0, -4.0, 5.0), Vec3::ZERO, Vec2::ZERO);
        let bounds = mesh.bounds();
        assert_eq!(bounds.min, Vec3::new(-1.0, -4.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(3.0, 2.0, 5.0));
    }

    #[test]
    fn empty_bounds_have_zero_center_and_radius() {
        let mesh = Mesh::new();
        assert!(mesh.bounds().is_empty());
        assert_eq!(mesh.center(), Vec3::ZERO);
        assert_eq!(mesh.radius(), 0.0);
    }

    #[test]
    fn ccw_square_normal_points_along_positive_z() {
        let mut mesh = Mesh::new();
        let (_, face) = square(&mut mesh);
        let plane = mesh.face(face).plane();
        assert_abs_diff_eq!(plane.normal.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(plane.normal.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(plane.normal.z, 1.0, epsilon = 1e-6);
        // Anchored at the centroid.
        assert_abs_diff_eq!(
            plane.signed_distance(Vec3::new(0.5, 0.5, 0.0)),
            0.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn faces_with_fewer_than_three_vertices_get_a_degenerate_plane() {
        let mut mesh = Mesh::new();
        let a = mesh.create_vertex(Vec3::ZERO, Vec3::ZERO, Vec2::ZERO);
        let b = mesh.create_vertex(Vec3::X, Vec3::ZERO, Vec2::ZERO);
        let face = mesh.create_face(&[a, b]).unwrap();
        assert_eq!(mesh.face(face).plane().normal, Vec3::ZERO);
    }

    #[test]
    fn foreign_vertex_is_rejected() {
        let mut donor = Mesh::new();
        for _ in 0..3 {
            donor.create_vertex(Vec3::ZERO, Vec3::ZERO, Vec2::ZERO);
        }
        let foreign = VertexId(2);
        let mut mesh = Mesh::new();
        mesh.create_vertex(Vec3::ZERO, Vec3::ZERO, Vec2::ZERO);
        let result = mesh.create_face(&[foreign]);
        assert_eq!(
            result,
            Err(OwnershipError::ForeignVertex {
                vertex: foreign,
                vertex_count: 1
            })
        );
    }

    #[test]
    fn empty_face_is_rejected() {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.create_face(&[]), Err(OwnershipError::EmptyFace));
    }

    #[test]
    fn delete_vertex_swaps_the_last_vertex_into_the_slot() {
        let mut mesh = Mesh::new();
        let v0 = mesh.create_vertex(Vec3::new(0.0, 0.0, 0.0), Vec3::ZERO, Vec2::ZERO);
        let v1 = mesh.create_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, Vec2::ZERO);
        let v2 = mesh.create_vertex(Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO, Vec2::ZERO);
        let v3 = mesh.create_vertex(Vec3::new(3.0, 0.0, 0.0), Vec3::ZERO, Vec2::ZERO);
        let face = mesh.create_face(&[v1, v2, v3]).unwrap();

        mesh.delete_vertex(v0);
        assert_eq!(mesh.vertex_count(), 3);
        // The old last vertex took over identity index 0...
        assert_eq!(mesh.vertex(VertexId(0)).position, Vec3::new(3.0, 0.0, 0.0));
        // ...and the face that referenced it was patched.
        assert_eq!(mesh.face(face).vertices(), [v1, v2, VertexId(0)]);
    }

    #[test]
    fn delete_face_swaps_and_patches_adjacency() {
        let mut mesh = Mesh::new();
        let a = mesh.create_vertex(Vec3::ZERO, Vec3::ZERO, Vec2::ZERO);
        let b = mesh.create_vertex(Vec3::X, Vec3::ZERO, Vec2::ZERO);
        let c = mesh.create_vertex(Vec3::Y, Vec3::ZERO, Vec2::ZERO);
        let d = mesh.create_vertex(Vec3::Z, Vec3::ZERO, Vec2::ZERO);
        let first = mesh.create_face(&[a, b, c]).unwrap();
        let _second = mesh.create_face(&[a, b, d]).unwrap();
        let third = mesh.create_face(&[b, c, d]).unwrap();

        mesh.delete_face(first);
        assert_eq!(mesh.face_count(), 2);
        // The old last face now answers to `first`'s identity index.
        assert_eq!(mesh.face(FaceId(0)).vertices(), [b, c, d]);
        assert!(mesh.incident_faces(d).contains(&FaceId(0)));
        assert!(!mesh.incident_faces(d).contains(&third));
        assert!(!mesh.incident_faces(a).contains(&FaceId(0)));
    }

    #[test]
    fn update_computes_unit_normals_on_a_flat_square() {
        let mut mesh = Mesh::new();
        let (ids, _) = square(&mut mesh);
        mesh.update();
        for id in ids {
            let normal = mesh.vertex(id).normal;
            assert_abs_diff_eq!(normal.z, 1.0, epsilon = 1e-6);
            assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn flat_interior_vertex_has_zero_curvature() {
        let mut mesh = Mesh::new();
        let mut grid = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                grid.push(mesh.create_vertex(
                    Vec3::new(x as f32, y as f32, 0.0),
                    Vec3::ZERO,
                    Vec2::ZERO,
                ));
            }
        }
        for y in 0..2 {
            for x in 0..2 {
                let i = y * 3 + x;
                mesh.create_face(&[grid[i], grid[i + 1], grid[i + 4], grid[i + 3]])
                    .unwrap();
            }
        }
        mesh.update();
        let center = mesh.vertex(grid[4]);
        assert_abs_diff_eq!(center.curvature, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn pyramid_apex_has_positive_curvature() {
        let mut mesh = Mesh::new();
        let apex = mesh.create_vertex(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO, Vec2::ZERO);
        let corners = [
            mesh.create_vertex(Vec3::new(1.0, 1.0, 0.0), Vec3::ZERO, Vec2::ZERO),
            mesh.create_vertex(Vec3::new(-1.0, 1.0, 0.0), Vec3::ZERO, Vec2::ZERO),
            mesh.create_vertex(Vec3::new(-1.0, -1.0, 0.0), Vec3::ZERO, Vec2::ZERO),
            mesh.create_vertex(Vec3::new(1.0, -1.0, 0.0), Vec3::ZERO, Vec2::ZERO),
        ];
        for i in 0..4 {
            mesh.create_face(&[apex, corners[i], corners[(i + 1) % 4]])
                .unwrap();
        }
        mesh.update();
        assert!(mesh.vertex(apex).curvature > 0.0);
    }

    #[test]
    fn subset_transforms_leave_derived_data_stale_until_update() {
        let mut mesh = Mesh::new();
        let (ids, _) = square(&mut mesh);
        let before = mesh.bounds();
        mesh.translate_vertices(&ids, Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(mesh.bounds(), before);
        mesh.update();
        assert_eq!(mesh.bounds().min.x, 10.0);
        assert_eq!(mesh.bounds().max.x, 11.0);
    }

    #[test]
    fn whole_mesh_translate_refreshes_derived_data() {
        let mut mesh = Mesh::new();
        square(&mut mesh);
        mesh.translate(Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(mesh.bounds().min.z, 2.0);
        assert_eq!(mesh.bounds().max.z, 2.0);
    }

    #[test]
    fn scale_and_rotate_subsets_move_positions_only() {
        let mut mesh = Mesh::new();
        let id = mesh.create_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, Vec2::ZERO);
        mesh.scale_vertices(&[id], Vec3::splat(2.0));
        assert_eq!(mesh.vertex(id).position, Vec3::new(2.0, 0.0, 0.0));
        mesh.rotate_vertices(&[id], Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
        let rotated = mesh.vertex(id).position;
        assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rotated.y, 2.0, epsilon = 1e-6);
    }
}
