//! Instance transformation data for GPU rendering.
//!
//! Per-instance data like position, rotation, and scale is stored as
//! GPU buffers and passed to shaders. Door panels are resized purely by
//! rewriting these transforms, never their meshes.

use std::ops::Mul;

use cgmath::{Matrix, One, SquareMatrix};

use crate::data_structures::model;

/// Per-instance transformation: position, rotation (as quaternion), and scale.
///
/// The scale is non-uniform so that a unit of geometry can be stretched along
/// a single axis (a door rail getting wider, a panel getting taller).
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub position: cgmath::Vector3<f32>,
    pub rotation: cgmath::Quaternion<f32>,
    pub scale: cgmath::Vector3<f32>,
}

impl Instance {
    /// Create a new instance with identity transformation (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            position: cgmath::Vector3::new(0.0, 0.0, 0.0),
            // `Quaternion::one()` is the identity quaternion (no rotation)
            rotation: cgmath::Quaternion::one(),
            scale: cgmath::Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn to_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::Matrix4::from_translation(self.position)
            * cgmath::Matrix4::from(self.rotation)
            * cgmath::Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /// Matrix used to bring normals into world space.
    ///
    /// Non-uniform scale needs the inverse transpose. A collapsed axis has no
    /// inverse, in which case only the rotation is applied.
    pub fn normal_matrix(&self) -> cgmath::Matrix3<f32> {
        let rotation = cgmath::Matrix3::from(self.rotation);
        let linear = rotation
            * cgmath::Matrix3::from_diagonal(cgmath::Vector3::new(
                self.scale.x,
                self.scale.y,
                self.scale.z,
            ));
        linear
            .invert()
            .map(|inverse| inverse.transpose())
            .unwrap_or(rotation)
    }

    pub fn to_raw(&self) -> InstanceRaw {
        let world_matrix = self.to_matrix();
        let handedness = world_matrix.determinant().signum();
        InstanceRaw {
            model: world_matrix.into(),
            normal: self.normal_matrix().into(),
            handedness,
        }
    }
}

impl<'a, 'b> Mul<&'b Instance> for &'a Instance {
    type Output = Instance;

    fn mul(self, rhs: &'b Instance) -> Self::Output {
        let new_rotation = self.rotation * rhs.rotation;

        let new_scale = cgmath::Vector3::new(
            self.scale.x * rhs.scale.x,
            self.scale.y * rhs.scale.y,
            self.scale.z * rhs.scale.z,
        );
        let scaled_rhs_pos = cgmath::Vector3::new(
            self.scale.x * rhs.position.x,
            self.scale.y * rhs.position.y,
            self.scale.z * rhs.position.z,
        );
        let new_position = self.position + (self.rotation * scaled_rhs_pos);

        Instance {
            position: new_position,
            rotation: new_rotation,
            scale: new_scale,
        }
    }
}

impl Mul<Instance> for Instance {
    type Output = Self;

    fn mul(self, rhs: Instance) -> Self::Output {
        &self * &rhs
    }
}

impl From<cgmath::Vector3<f32>> for Instance {
    fn from(position: cgmath::Vector3<f32>) -> Self {
        Instance {
            position,
            ..Default::default()
        }
    }
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}

/**
 * The raw instance is the actual data stored on the GPU
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    model: [[f32; 4]; 4],
    normal: [[f32; 3]; 3],
    handedness: f32,
}

/**
 * As we store vertex data directly in the GPU memory we need to tell what the bytes refer to:
 *
 * offset: zero as we want to use the full space.
 * stride: length of a vertex
 *
 * Stride layout here: the model matrix as four 4d vectors, the normal matrix as
 * three 3d vectors and the handedness of the transform.
 */
impl model::Vertex for InstanceRaw {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            // Shaders only advance to the next instance once a new instance starts
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // A mat4 takes up 4 vertex slots as it is technically 4 vec4s.
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 8,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: 9,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 19]>() as wgpu::BufferAddress,
                    shader_location: 10,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 22]>() as wgpu::BufferAddress,
                    shader_location: 11,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 25]>() as wgpu::BufferAddress,
                    shader_location: 12,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{Rotation3, Transform};

    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn matrix_applies_scale_before_translation() {
        let instance = Instance {
            position: cgmath::Vector3::new(1.0, 2.0, 0.0),
            rotation: cgmath::Quaternion::one(),
            scale: cgmath::Vector3::new(2.0, 0.5, 1.0),
        };
        let p = instance
            .to_matrix()
            .transform_point(cgmath::Point3::new(1.0, 1.0, 1.0));
        assert!(close(p.x, 3.0));
        assert!(close(p.y, 2.5));
        assert!(close(p.z, 1.0));
    }

    #[test]
    fn parent_transform_scales_child_offset() {
        let parent = Instance {
            position: cgmath::Vector3::new(0.0, 1.0, 0.0),
            rotation: cgmath::Quaternion::one(),
            scale: cgmath::Vector3::new(2.0, 2.0, 2.0),
        };
        let child = Instance::from(cgmath::Vector3::new(1.0, 0.0, 0.0));
        let world = &parent * &child;
        assert!(close(world.position.x, 2.0));
        assert!(close(world.position.y, 1.0));
        assert!(close(world.scale.x, 2.0));
    }

    #[test]
    fn rotated_parent_rotates_child_position() {
        let parent = Instance {
            rotation: cgmath::Quaternion::from_angle_y(cgmath::Deg(90.0)),
            ..Instance::new()
        };
        let child = Instance::from(cgmath::Vector3::new(1.0, 0.0, 0.0));
        let world = parent * child;
        assert!(close(world.position.x, 0.0));
        assert!(close(world.position.z, -1.0));
    }

    #[test]
    fn collapsed_scale_falls_back_to_rotation_for_normals() {
        let instance = Instance {
            scale: cgmath::Vector3::new(0.0, 1.0, 1.0),
            ..Instance::new()
        };
        assert_eq!(instance.normal_matrix(), cgmath::Matrix3::identity());
    }

    #[test]
    fn negative_scale_flips_handedness() {
        let instance = Instance {
            scale: cgmath::Vector3::new(-1.0, 1.0, 1.0),
            ..Instance::new()
        };
        assert_eq!(instance.to_raw().handedness, -1.0);
        assert_eq!(Instance::new().to_raw().handedness, 1.0);
    }
}
