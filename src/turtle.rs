//! Turtle pose state and drawing primitives.
//!
//! The turtle is a pen in 3D space: a position plus an orthonormal frame of
//! `direction` (forward) and `right`, with the up axis derived as
//! `right × direction`. Rotations take degrees; movement and drawing run
//! along `direction`. Drawing primitives emit polygons into a [`Mesh`].

use crate::mesh::{Mesh, VertexId};
use glam::{Mat3, Quat, Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// World axis leaves bend toward, independent of the turtle's own frame.
const LEAF_BEND_AXIS: Vec3 = Vec3::Y;

/// The state of the drawing turtle.
///
/// `direction` and `right` stay unit length and mutually orthogonal: every
/// rotation renormalizes both to bound floating-point drift.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Turtle {
    /// Current world-space position of the pen.
    pub position: Vec3,

    /// Forward axis (unit). Movement and drawing run along it.
    pub direction: Vec3,

    /// Right axis (unit), orthogonal to `direction`.
    pub right: Vec3,

    /// Radius of the next drawn segment at its base.
    pub thickness: f32,

    /// Taper factor: a drawn segment's far radius is
    /// `thickness * reduction`, and the turtle adopts that radius after
    /// drawing, so consecutive segments narrow continuously.
    pub reduction: f32,
}

impl Default for Turtle {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::Y,
            right: Vec3::X,
            thickness: 0.1,
            reduction: 1.0,
        }
    }
}

impl Turtle {
    /// The derived up axis, `right × direction`.
    pub fn up(&self) -> Vec3 {
        self.right.cross(self.direction)
    }

    fn rotate_about(&mut self, axis: Vec3, angle_deg: f32) {
        let rotation = Quat::from_axis_angle(axis, angle_deg.to_radians());
        self.direction = (rotation * self.direction).normalize();
        self.right = (rotation * self.right).normalize();
    }

    /// Rotates `direction` and `right` about the up axis.
    pub fn turn_left(&mut self, angle: f32) {
        self.rotate_about(self.up(), angle);
    }

    pub fn turn_right(&mut self, angle: f32) {
        self.rotate_about(self.up(), -angle);
    }

    /// Rotates `direction` about `right`.
    pub fn pitch_down(&mut self, angle: f32) {
        self.rotate_about(self.right, angle);
    }

    pub fn pitch_up(&mut self, angle: f32) {
        self.rotate_about(self.right, -angle);
    }

    /// Rotates `right` about `direction`.
    pub fn roll_left(&mut self, angle: f32) {
        self.rotate_about(self.direction, angle);
    }

    pub fn roll_right(&mut self, angle: f32) {
        self.rotate_about(self.direction, -angle);
    }

    /// Reverses course: 180° about the up axis.
    pub fn turn_180(&mut self) {
        self.rotate_about(self.up(), 180.0);
    }

    /// Translates the pen along `direction` without emitting geometry.
    pub fn move_by(&mut self, distance: f32) {
        self.position += self.direction * distance;
    }

    /// Multiplies the branch thickness.
    pub fn thicken(&mut self, amount: f32) {
        self.thickness *= amount;
    }

    /// Divides the branch thickness.
    pub fn narrow(&mut self, amount: f32) {
        self.thickness /= amount;
    }

    pub fn set_thickness(&mut self, value: f32) {
        self.thickness = value;
    }

    pub fn set_reduction(&mut self, value: f32) {
        self.reduction = value;
    }

    /// Model-to-world frame: X maps to `right`, Y to `direction`, Z to up.
    fn frame(&self) -> Mat3 {
        Mat3::from_cols(self.right, self.direction, self.up())
    }

    /// Translates the pen along `direction` and emits a tapered solid
    /// segment between the old and new position.
    ///
    /// The segment is a cylinder with `slices` sides (at least 3): base ring
    /// radius `thickness`, far ring radius `thickness * reduction`, two
    /// triangles per slice for the wall and a polygon cap at each end, wound
    /// so outward normals follow the counter-clockwise convention. After
    /// drawing, the turtle stands at the far end with the far radius as its
    /// thickness.
    pub fn draw(&mut self, distance: f32, slices: u32, mesh: &mut Mesh) {
        let slices = slices.max(3) as usize;
        let base = self.position;
        let tip = base + self.direction * distance;
        let up = self.up();
        let tip_radius = self.thickness * self.reduction;

        let mut base_ring: Vec<VertexId> = Vec::with_capacity(slices);
        let mut tip_ring: Vec<VertexId> = Vec::with_capacity(slices);
        for i in 0..slices {
            let theta = i as f32 * TAU / slices as f32;
            let offset = self.right * theta.cos() + up * theta.sin();
            base_ring.push(mesh.create_vertex(
                base + offset * self.thickness,
                Vec3::ZERO,
                Vec2::ZERO,
            ));
            tip_ring.push(mesh.create_vertex(tip + offset * tip_radius, Vec3::ZERO, Vec2::ZERO));
        }

        for i in 0..slices {
            let next = (i + 1) % slices;
            mesh.add_face(vec![base_ring[i], tip_ring[i], tip_ring[next]]);
            mesh.add_face(vec![base_ring[i], tip_ring[next], base_ring[next]]);
        }
        let mut tip_cap = tip_ring;
        tip_cap.reverse();
        mesh.add_face(tip_cap);
        mesh.add_face(base_ring);

        self.position = tip;
        self.thickness = tip_radius;
    }

    /// Emits a leaf polygon at the pen, oriented by the turtle frame and
    /// scaled by `size`. The pen does not move.
    ///
    /// The bend toward the ground is the component of `direction` along the
    /// world up axis, quartered; a leaf growing exactly sideways gets a
    /// small random bend instead so it is not perfectly flat.
    pub fn draw_leaf(&mut self, size: f32, mesh: &mut Mesh) {
        let mut bend = self.direction.dot(LEAF_BEND_AXIS) / 4.0;
        if bend == 0.0 {
            bend = rand::thread_rng().gen_range(-10..10) as f32 / 100.0;
        }
        let frame = self.frame();
        let boundary: Vec<VertexId> = leaf_outline(bend)
            .iter()
            .map(|&p| mesh.create_vertex(self.position + frame * (p * size), Vec3::ZERO, Vec2::ZERO))
            .collect();
        mesh.add_face(boundary);
    }
}

/// Leaf outline in model space: +Y runs from stem to tip, X is the blade
/// width, Z carries the bend.
fn leaf_outline(bend: f32) -> [Vec3; 8] {
    [
        Vec3::new(0.0, 0.01, 0.0),
        Vec3::new(0.2, 0.1, 0.0),
        Vec3::new(0.25, 0.3, 0.0),
        Vec3::new(0.2, 0.6, bend / 2.0),
        Vec3::new(0.0, 1.0 - bend, bend),
        Vec3::new(-0.2, 0.6, bend / 2.0),
        Vec3::new(-0.25, 0.3, 0.0),
        Vec3::new(-0.2, 0.1, 0.0),
    ]
}
