//! Rigid mesh transforms.
//!
//! Triangulation produces camera-space vertices; moving the mesh into
//! world space is a separate step applied here.

use nalgebra::Matrix4;

use crate::TriangleMesh;

impl TriangleMesh {
    /// Applies a homogeneous 4×4 transform to every vertex in place.
    ///
    /// Typically used with a camera-to-world matrix after triangulation.
    /// Faces and colors are unaffected.
    ///
    /// # Example
    ///
    /// ```
    /// use nalgebra::{Matrix4, Point3, Vector3};
    /// use scan_mesh::TriangleMesh;
    ///
    /// let mut mesh = TriangleMesh::new();
    /// mesh.vertices.push(Point3::new(0.0, 0.0, 1.0));
    ///
    /// let cam_to_world = Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0));
    /// mesh.transform(&cam_to_world);
    ///
    /// assert!((mesh.vertices[0].z - 4.0).abs() < 1e-6);
    /// ```
    pub fn transform(&mut self, matrix: &Matrix4<f32>) {
        for vertex in &mut self.vertices {
            *vertex = matrix.transform_point(vertex);
        }
    }

    /// Returns a transformed copy of the mesh.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4<f32>) -> Self {
        let mut mesh = self.clone();
        mesh.transform(matrix);
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    #[test]
    fn translation_moves_vertices() {
        let mut mesh = TriangleMesh::new();
        mesh.vertices.push(Point3::new(1.0, 0.0, 2.0));
        mesh.faces.push([0, 0, 0]);

        mesh.transform(&Matrix4::new_translation(&Vector3::new(0.5, -1.0, 3.0)));

        let v = mesh.vertices[0];
        assert_relative_eq!(v.x, 1.5);
        assert_relative_eq!(v.y, -1.0);
        assert_relative_eq!(v.z, 5.0);
        assert_eq!(mesh.faces[0], [0, 0, 0]);
    }

    #[test]
    fn rotation_about_z() {
        let mut mesh = TriangleMesh::new();
        mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));

        let rot = Matrix4::from_axis_angle(&Vector3::z_axis(), std::f32::consts::FRAC_PI_2);
        mesh.transform(&rot);

        let v = mesh.vertices[0];
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn transformed_leaves_original() {
        let mut mesh = TriangleMesh::new();
        mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));

        let moved = mesh.transformed(&Matrix4::new_translation(&Vector3::new(1.0, 0.0, 0.0)));

        assert_relative_eq!(mesh.vertices[0].x, 0.0);
        assert_relative_eq!(moved.vertices[0].x, 1.0);
    }
}
