use bytemuck::{Pod, Zeroable};

use super::program::{POSITION_ATTRIBUTE, TEX_COORD_ATTRIBUTE};

/// Unit-quad vertex: object-space position plus texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub tex_coord: [f32; 2],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
            shader_location: POSITION_ATTRIBUTE,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: std::mem::size_of::<[f32; 2]>() as u64,
            shader_location: TEX_COORD_ATTRIBUTE,
        },
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const fn v(x: f32, y: f32, u: f32, t: f32) -> QuadVertex {
    QuadVertex {
        position: [x, y],
        tex_coord: [u, t],
    }
}

/// Two triangles covering [-0.5, 0.5]². Texture row 0 is the top of the image.
pub const QUAD_VERTICES: [QuadVertex; 6] = [
    v(-0.5, -0.5, 0.0, 1.0),
    v(0.5, -0.5, 1.0, 1.0),
    v(0.5, 0.5, 1.0, 0.0),
    v(-0.5, -0.5, 0.0, 1.0),
    v(0.5, 0.5, 1.0, 0.0),
    v(-0.5, 0.5, 0.0, 0.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_centred_unit_square() {
        for vtx in QUAD_VERTICES {
            assert_eq!(vtx.position[0].abs(), 0.5);
            assert_eq!(vtx.position[1].abs(), 0.5);
        }
    }

    #[test]
    fn bottom_edge_samples_last_texture_row() {
        for vtx in QUAD_VERTICES {
            let expected_t = if vtx.position[1] < 0.0 { 1.0 } else { 0.0 };
            assert_eq!(vtx.tex_coord[1], expected_t);
        }
    }

    #[test]
    fn triangles_are_counter_clockwise() {
        for tri in QUAD_VERTICES.chunks(3) {
            let [a, b, c] = [tri[0].position, tri[1].position, tri[2].position];
            let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(cross > 0.0);
        }
    }
}
