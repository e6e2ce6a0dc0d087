//! User-parameterised torus with a wobble into the fourth dimension
//!
//! A regular torus (major radius 1.2R, minor radius 0.6R) in xyz whose w
//! coordinate oscillates as `0.4R·sin(3φ)` around the major circle, so the
//! ring weaves in and out of 3D space three times per revolution.

use std::f32::consts::TAU;
use crate::{Vec4, shape::{Shape4D, Wireframe}};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwistedTorus4D {
    points: usize,
    radius: f32,
}

impl TwistedTorus4D {
    pub const MAJOR_FACTOR: f32 = 1.2;
    pub const MINOR_FACTOR: f32 = 0.6;
    pub const WOBBLE_FACTOR: f32 = 0.4;
    pub const WOBBLE_FREQUENCY: f32 = 3.0;

    /// Torus sampled on a `points × points` grid with base radius `radius`
    pub fn new(points: usize, radius: f32) -> Self {
        Self { points, radius }
    }

    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape4D for TwistedTorus4D {
    fn generate(&self) -> Wireframe {
        let n = self.points;
        let major = self.radius * Self::MAJOR_FACTOR;
        let minor = self.radius * Self::MINOR_FACTOR;
        let wobble = self.radius * Self::WOBBLE_FACTOR;

        let mut vertices = Vec::with_capacity(n * n);
        for i in 0..n {
            let tube = i as f32 / n as f32 * TAU;
            for j in 0..n {
                let ring = j as f32 / n as f32 * TAU;
                let reach = major + minor * tube.cos();
                vertices.push(Vec4::new(
                    reach * ring.cos(),
                    reach * ring.sin(),
                    minor * tube.sin(),
                    (ring * Self::WOBBLE_FREQUENCY).sin() * wobble,
                ));
            }
        }

        let mut wireframe = Wireframe::from_parts(vertices, Vec::new());
        wireframe.connect_toroidal_grid(n);
        wireframe
    }
}
