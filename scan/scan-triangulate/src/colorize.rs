//! Vertex coloring from an aligned color image.

use nalgebra::Vector4;
use scan_mesh::TriangleMesh;
use scan_types::ColorImage;

use crate::triangulate::VertexIndexMap;

/// Paints every emitted vertex from the pixel it was allocated for.
///
/// Channel 0 becomes red; with three or more channels, channels 1 and 2
/// become green and blue, otherwise channel 0 is replicated (grayscale).
/// Alpha is always full. Components are normalized to `[0, 1]`.
///
/// Callers have already verified that the image is pixel-aligned with the
/// depth map the vertex index map was built from.
pub(crate) fn colorize_mesh(mesh: &mut TriangleMesh, image: &ColorImage, vidx: &VertexIndexMap) {
    mesh.colors.clear();
    mesh.colors
        .resize(mesh.vertices.len(), Vector4::new(0.0, 0.0, 0.0, 0.0));

    for pixel in 0..vidx.pixel_count() {
        let Some(vertex) = vidx.get(pixel) else {
            continue;
        };

        let red = f32::from(image.sample(pixel, 0));
        let (green, blue) = if image.channels >= 3 {
            (
                f32::from(image.sample(pixel, 1)),
                f32::from(image.sample(pixel, 2)),
            )
        } else {
            (red, red)
        };

        mesh.colors[vertex as usize] = Vector4::new(red, green, blue, 255.0) / 255.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn mesh_with_vertices(count: usize) -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        for i in 0..count {
            #[allow(clippy::cast_precision_loss)]
            mesh.vertices.push(Point3::new(i as f32, 0.0, 1.0));
        }
        mesh
    }

    #[test]
    fn rgb_channels_mapped() {
        let mut mesh = mesh_with_vertices(1);
        let mut vidx = VertexIndexMap::new(2, 1);
        vidx.set(1, 0);

        let image = ColorImage {
            data: vec![0, 0, 0, 255, 128, 64],
            width: 2,
            height: 1,
            channels: 3,
        };

        colorize_mesh(&mut mesh, &image, &vidx);

        assert_eq!(mesh.colors.len(), 1);
        let c = mesh.colors[0];
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 128.0 / 255.0);
        assert_relative_eq!(c.z, 64.0 / 255.0);
        assert_relative_eq!(c.w, 1.0);
    }

    #[test]
    fn grayscale_replicates_first_channel() {
        let mut mesh = mesh_with_vertices(1);
        let mut vidx = VertexIndexMap::new(1, 1);
        vidx.set(0, 0);

        let image = ColorImage {
            data: vec![51],
            width: 1,
            height: 1,
            channels: 1,
        };

        colorize_mesh(&mut mesh, &image, &vidx);

        let c = mesh.colors[0];
        assert_relative_eq!(c.x, 0.2);
        assert_relative_eq!(c.y, 0.2);
        assert_relative_eq!(c.z, 0.2);
        assert_relative_eq!(c.w, 1.0);
    }

    #[test]
    fn color_list_matches_vertex_count() {
        let mut mesh = mesh_with_vertices(3);
        let vidx = VertexIndexMap::new(2, 2);

        let image = ColorImage {
            data: vec![10; 4],
            width: 2,
            height: 2,
            channels: 1,
        };

        colorize_mesh(&mut mesh, &image, &vidx);
        assert_eq!(mesh.colors.len(), mesh.vertices.len());
        assert!(mesh.has_consistent_colors());
    }
}
