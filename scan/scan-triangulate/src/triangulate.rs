//! Core depth-map triangulation.
//!
//! Scans the depth map in 2×2 blocks, picks triangles per block from a
//! validity mask, rejects triangles whose edges cross a depth
//! discontinuity, and lazily allocates one mesh vertex per contributing
//! pixel.

// Pixel indices and vertex counts fit the cast targets for any real image
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use std::f32::consts::SQRT_2;

use scan_mesh::TriangleMesh;
use scan_types::{ColorImage, DepthMap, InverseCalibration};
use tracing::{debug, warn};

use crate::colorize::colorize_mesh;
use crate::error::{TriangulateError, TriangulateResult};
use crate::params::TriangulateParams;
use crate::result::TriangulationResult;

/// Corner sets of the four candidate triangles within a 2×2 block.
///
/// Block-local corner indices are laid out as
/// ```text
/// 0 1
/// 2 3
/// ```
const BLOCK_TRIANGLES: [[usize; 3]; 4] = [[0, 2, 1], [0, 3, 1], [0, 2, 3], [1, 2, 3]];

/// Maps each depth-map pixel to the mesh vertex allocated for it, if any.
///
/// Entries are `None` until a kept triangle first touches the pixel;
/// afterwards they hold an index strictly below the mesh vertex count.
pub(crate) struct VertexIndexMap {
    width: usize,
    entries: Vec<Option<u32>>,
}

impl VertexIndexMap {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as usize,
            entries: vec![None; width as usize * height as usize],
        }
    }

    pub(crate) fn get(&self, pixel: usize) -> Option<u32> {
        self.entries[pixel]
    }

    pub(crate) fn set(&mut self, pixel: usize, vertex: u32) {
        self.entries[pixel] = Some(vertex);
    }

    pub(crate) fn pixel_count(&self) -> usize {
        self.entries.len()
    }
}

/// Decides whether two depth samples of a block belong to different
/// surfaces.
///
/// The threshold is the pixel footprint of the *nearer* sample scaled by
/// `dd_factor`; a block-diagonal pair (`i1 + i2 == 3`) gets an extra √2
/// for the longer sampling distance.
fn is_depth_discontinuity(
    widths: &[f32; 4],
    depths: &[f32; 4],
    dd_factor: f32,
    i1: usize,
    i2: usize,
) -> bool {
    let (i_min, i_max) = if depths[i2] < depths[i1] {
        (i2, i1)
    } else {
        (i1, i2)
    };

    let factor = if i1 + i2 == 3 {
        dd_factor * SQRT_2
    } else {
        dd_factor
    };

    depths[i_max] - depths[i_min] > widths[i_min] * factor
}

/// Appends one triangle to the mesh, allocating vertices for pixels that
/// don't have one yet.
///
/// `base` is the linear pixel index of the block's top-left corner;
/// `corners` are block-local corner indices in emission order.
fn emit_triangle(
    mesh: &mut TriangleMesh,
    vidx: &mut VertexIndexMap,
    dm: &DepthMap,
    invproj: &InverseCalibration,
    base: usize,
    corners: [usize; 3],
) {
    let width = vidx.width;
    let mut face = [0u32; 3];

    for (slot, &corner) in face.iter_mut().zip(corners.iter()) {
        let pixel = base + corner % 2 + width * (corner / 2);
        let vertex = if let Some(vertex) = vidx.get(pixel) {
            vertex
        } else {
            let x = (pixel % width) as u32;
            let y = (pixel / width) as u32;
            let vertex = mesh.vertices.len() as u32;
            mesh.vertices.push(invproj.unproject(x, y, dm.depths[pixel]));
            vidx.set(pixel, vertex);
            vertex
        };
        *slot = vertex;
    }

    mesh.faces.push(face);
}

/// Triangulates a depth map into a camera-space mesh.
///
/// Walks the depth map in 2×2 blocks (row-major). Each block with at
/// least three valid depth samples contributes one or two triangles;
/// fully valid blocks split along the diagonal with the smaller depth
/// difference. With a positive `dd_factor`, triangles with an edge across
/// a depth discontinuity are dropped whole. Vertices are shared between
/// adjacent triangles, one per contributing pixel, numbered in emission
/// order.
///
/// If `color_image` is given and matches the depth-map dimensions, the
/// mesh is colored per vertex; a mismatching image is skipped with a
/// warning and triangulation still succeeds.
///
/// # Errors
///
/// - [`TriangulateError::EmptyDepthMap`] for a zero-pixel depth map
/// - [`TriangulateError::DepthBufferSizeMismatch`] for an inconsistent buffer
/// - [`TriangulateError::InvalidDiscontinuityFactor`] for a negative or
///   NaN `dd_factor`
///
/// # Example
///
/// ```
/// use nalgebra::Matrix3;
/// use scan_types::{DepthMap, InverseCalibration};
/// use scan_triangulate::{triangulate_depthmap, TriangulateParams};
///
/// let dm = DepthMap {
///     depths: vec![1.0f32; 4],
///     width: 2,
///     height: 2,
/// };
/// let invproj = InverseCalibration::from_matrix(Matrix3::identity());
///
/// let result =
///     triangulate_depthmap(&dm, None, &invproj, &TriangulateParams::default()).unwrap();
/// assert_eq!(result.mesh.face_count(), 2);
/// assert_eq!(result.mesh.vertex_count(), 4);
/// ```
pub fn triangulate_depthmap(
    dm: &DepthMap,
    color_image: Option<&ColorImage>,
    invproj: &InverseCalibration,
    params: &TriangulateParams,
) -> TriangulateResult<TriangulationResult> {
    if dm.pixel_count() == 0 {
        return Err(TriangulateError::EmptyDepthMap);
    }
    if !dm.has_valid_buffer_size() {
        return Err(TriangulateError::DepthBufferSizeMismatch {
            expected: dm.pixel_count(),
            actual: dm.depths.len(),
        });
    }
    let dd_factor = params.dd_factor;
    if dd_factor.is_nan() || dd_factor < 0.0 {
        return Err(TriangulateError::InvalidDiscontinuityFactor(dd_factor));
    }

    debug!(
        width = dm.width,
        height = dm.height,
        dd_factor,
        "triangulating depth map"
    );

    let width = dm.width as usize;
    let height = dm.height as usize;

    let mut mesh = TriangleMesh::new();
    let mut vidx = VertexIndexMap::new(dm.width, dm.height);

    let mut blocks_visited = 0;
    let mut blocks_skipped = 0;
    let mut triangles_emitted = 0;
    let mut triangles_dropped = 0;

    for y in 0..height.saturating_sub(1) {
        for x in 0..width - 1 {
            blocks_visited += 1;
            let base = y * width + x;

            // Corner depths, laid out as [0, 1 / 2, 3].
            let depths = [
                dm.depths[base],
                dm.depths[base + 1],
                dm.depths[base + width],
                dm.depths[base + width + 1],
            ];

            let mut mask = 0u8;
            let mut valid = 0;
            for (j, &d) in depths.iter().enumerate() {
                if DepthMap::is_valid_depth(d) {
                    mask |= 1 << j;
                    valid += 1;
                }
            }

            // At least three valid depth samples are required.
            if valid < 3 {
                blocks_skipped += 1;
                continue;
            }

            // Selected entries of BLOCK_TRIANGLES for this block.
            let mut selected: [Option<usize>; 2] = match mask {
                0b0111 => [Some(0), None],
                0b1011 => [Some(1), None],
                0b1101 => [Some(2), None],
                0b1110 => [Some(3), None],
                0b1111 => {
                    // Split along the diagonal with the smaller depth
                    // difference; ties take the 1-2 diagonal.
                    let ddiff1 = (depths[0] - depths[3]).abs();
                    let ddiff2 = (depths[1] - depths[2]).abs();
                    if ddiff1 < ddiff2 {
                        [Some(1), Some(2)]
                    } else {
                        [Some(0), Some(3)]
                    }
                }
                _ => {
                    blocks_skipped += 1;
                    continue;
                }
            };

            if dd_factor > 0.0 {
                let mut widths = [0.0f32; 4];
                for (j, &d) in depths.iter().enumerate() {
                    if DepthMap::is_valid_depth(d) {
                        widths[j] =
                            invproj.pixel_footprint((x + j % 2) as u32, (y + j / 2) as u32, d);
                    }
                }

                for slot in &mut selected {
                    if let Some(t) = *slot {
                        let [a, b, c] = BLOCK_TRIANGLES[t];
                        if is_depth_discontinuity(&widths, &depths, dd_factor, a, b)
                            || is_depth_discontinuity(&widths, &depths, dd_factor, b, c)
                            || is_depth_discontinuity(&widths, &depths, dd_factor, c, a)
                        {
                            *slot = None;
                            triangles_dropped += 1;
                        }
                    }
                }
            }

            for slot in selected {
                if let Some(t) = slot {
                    emit_triangle(&mut mesh, &mut vidx, dm, invproj, base, BLOCK_TRIANGLES[t]);
                    triangles_emitted += 1;
                }
            }
        }
    }

    let mut colored = false;
    if let Some(ci) = color_image {
        if ci.width == dm.width && ci.height == dm.height && ci.has_valid_buffer_size() {
            colorize_mesh(&mut mesh, ci, &vidx);
            colored = true;
        } else {
            warn!(
                depth_width = dm.width,
                depth_height = dm.height,
                color_width = ci.width,
                color_height = ci.height,
                "color image does not match depth map, skipping coloring"
            );
        }
    }

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        triangles_dropped,
        "triangulation finished"
    );

    Ok(TriangulationResult {
        mesh,
        blocks_visited,
        blocks_skipped,
        triangles_emitted,
        triangles_dropped,
        colored,
    })
}
