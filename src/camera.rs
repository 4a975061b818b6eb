//! Orbit camera, projection and the uniform that carries them to the GPU.
//!
//! The camera circles a target point. Dragging with the left button rotates
//! it, dragging with the right button pans the target across the view plane
//! and the scroll wheel moves it closer or further away.

use std::f32::consts::FRAC_PI_2;

use cgmath::{InnerSpace, Matrix4, Point3, Rad, Vector3, perspective};
use instant::Duration;
use winit::event::{MouseScrollDelta, WindowEvent};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

const SAFE_PITCH: f32 = FRAC_PI_2 - 0.01;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 500.0;
/// Pan per pixel of mouse motion, as a fraction of the orbit distance.
const PAN_PER_PIXEL: f32 = 0.002;

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub target: Point3<f32>,
    pub distance: f32,
    /// Rotation around the vertical axis; zero looks down the negative z axis.
    pub yaw: Rad<f32>,
    /// Elevation above the target's horizon.
    pub pitch: Rad<f32>,
}

impl Camera {
    pub fn new<T: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        target: T,
        distance: f32,
        yaw: Y,
        pitch: P,
    ) -> Self {
        Self {
            target: target.into(),
            distance,
            yaw: yaw.into(),
            pitch: pitch.into(),
        }
    }

    /// Places the camera at `eye`, looking at `target`.
    pub fn looking_at(eye: Point3<f32>, target: Point3<f32>) -> Self {
        let offset = eye - target;
        let distance = offset.magnitude();
        let horizontal = (offset.x * offset.x + offset.z * offset.z).sqrt();
        Self {
            target,
            distance,
            yaw: Rad(offset.x.atan2(offset.z)),
            pitch: Rad(offset.y.atan2(horizontal)),
        }
    }

    pub fn position(&self) -> Point3<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        self.target
            + Vector3::new(
                self.distance * cos_pitch * sin_yaw,
                self.distance * sin_pitch,
                self.distance * cos_pitch * cos_yaw,
            )
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position(), self.target, Vector3::unit_y())
    }
}

#[derive(Clone, Debug)]
pub struct Projection {
    aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    #[cfg(test)]
    fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// Accumulates mouse input and applies it to the camera once per frame.
#[derive(Debug)]
pub struct CameraController {
    rotate_horizontal: f32,
    rotate_vertical: f32,
    pan_horizontal: f32,
    pan_vertical: f32,
    scroll: f32,
    speed: f32,
    sensitivity: f32,
}

impl CameraController {
    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self {
            rotate_horizontal: 0.0,
            rotate_vertical: 0.0,
            pan_horizontal: 0.0,
            pan_vertical: 0.0,
            scroll: 0.0,
            speed,
            sensitivity,
        }
    }

    pub fn handle_mouse(&mut self, mouse_dx: f64, mouse_dy: f64) {
        self.rotate_horizontal += mouse_dx as f32;
        self.rotate_vertical += mouse_dy as f32;
    }

    pub fn handle_pan(&mut self, mouse_dx: f64, mouse_dy: f64) {
        self.pan_horizontal += mouse_dx as f32;
        self.pan_vertical += mouse_dy as f32;
    }

    pub fn handle_window_events(&mut self, event: &WindowEvent) {
        if let WindowEvent::MouseWheel { delta, .. } = event {
            self.scroll += match delta {
                MouseScrollDelta::LineDelta(_, scroll) => *scroll,
                MouseScrollDelta::PixelDelta(position) => position.y as f32 / 100.0,
            };
        }
    }

    pub fn update(&mut self, camera: &mut Camera, dt: Duration) {
        let dt = dt.as_secs_f32();

        camera.yaw -= Rad(self.rotate_horizontal * self.sensitivity * dt);
        camera.pitch += Rad(self.rotate_vertical * self.sensitivity * dt);
        camera.pitch = Rad(camera.pitch.0.clamp(-SAFE_PITCH, SAFE_PITCH));

        if self.pan_horizontal != 0.0 || self.pan_vertical != 0.0 {
            let forward = (camera.target - camera.position()).normalize();
            let right = forward.cross(Vector3::unit_y()).normalize();
            let up = right.cross(forward);
            let scale = camera.distance * PAN_PER_PIXEL;
            camera.target += (up * self.pan_vertical - right * self.pan_horizontal) * scale;
        }

        // Zoom is proportional to the distance so it feels the same near and far.
        let zoom = 1.0 - self.scroll * self.speed * 0.01;
        camera.distance = (camera.distance * zoom).clamp(MIN_DISTANCE, MAX_DISTANCE);

        self.rotate_horizontal = 0.0;
        self.rotate_vertical = 0.0;
        self.pan_horizontal = 0.0;
        self.pan_vertical = 0.0;
        self.scroll = 0.0;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.view_position = camera.position().to_homogeneous().into();
        self.view_proj = (projection.calc_matrix() * camera.calc_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub controller: CameraController,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

#[cfg(test)]
mod tests {
    use cgmath::{Deg, EuclideanSpace};

    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn unrotated_camera_sits_on_positive_z() {
        let camera = Camera::new(Point3::origin(), 5.0, Deg(0.0), Deg(0.0));
        let p = camera.position();
        assert!(close(p.x, 0.0) && close(p.y, 0.0) && close(p.z, 5.0));
    }

    #[test]
    fn looking_at_round_trips_the_eye() {
        let eye = Point3::new(3.0, 4.0, -2.0);
        let camera = Camera::looking_at(eye, Point3::new(0.0, 1.0, 0.0));
        let p = camera.position();
        assert!(close(p.x, eye.x) && close(p.y, eye.y) && close(p.z, eye.z));
    }

    #[test]
    fn pitch_is_clamped_short_of_the_pole() {
        let mut camera = Camera::new(Point3::origin(), 5.0, Deg(0.0), Deg(0.0));
        let mut controller = CameraController::new(1.0, 1.0);
        controller.handle_mouse(0.0, 10_000.0);
        controller.update(&mut camera, Duration::from_secs(1));
        assert!(camera.pitch.0 < FRAC_PI_2);
    }

    #[test]
    fn scrolling_zooms_within_bounds() {
        let mut camera = Camera::new(Point3::origin(), 5.0, Deg(0.0), Deg(0.0));
        let mut controller = CameraController::new(10.0, 0.4);
        controller.scroll = 5.0;
        controller.update(&mut camera, Duration::from_millis(16));
        assert!(camera.distance < 5.0);
        controller.scroll = 10_000.0;
        controller.update(&mut camera, Duration::from_millis(16));
        assert!(close(camera.distance, MIN_DISTANCE));
    }

    #[test]
    fn rotation_is_radians_scaled_by_sensitivity_and_frame_time() {
        let mut camera = Camera::new(Point3::origin(), 5.0, Deg(0.0), Deg(0.0));
        let mut controller = CameraController::new(1.0, 0.5);
        controller.handle_mouse(2.0, 1.0);
        controller.update(&mut camera, Duration::from_millis(500));
        assert!(close(camera.yaw.0, -0.5));
        assert!(close(camera.pitch.0, 0.25));
    }

    #[test]
    fn right_drag_pans_target_without_rotating() {
        let mut camera = Camera::new(Point3::origin(), 5.0, Deg(0.0), Deg(0.0));
        let mut controller = CameraController::new(1.0, 1.0);
        controller.handle_pan(100.0, 0.0);
        controller.update(&mut camera, Duration::from_millis(16));
        // Looking down -z, the view's right is +x; dragging right drags the scene along.
        assert!(close(camera.target.x, -5.0 * PAN_PER_PIXEL * 100.0));
        assert!(close(camera.target.y, 0.0) && close(camera.target.z, 0.0));
        assert!(close(camera.distance, 5.0));
        assert_eq!(camera.yaw, Rad(0.0));
        assert_eq!(camera.pitch, Rad(0.0));

        controller.handle_pan(0.0, 50.0);
        controller.update(&mut camera, Duration::from_millis(16));
        assert!(close(camera.target.y, 5.0 * PAN_PER_PIXEL * 50.0));
        let offset = camera.position() - camera.target;
        assert!(close(offset.z, 5.0));
    }

    #[test]
    fn projection_tracks_aspect_ratio() {
        let mut projection = Projection::new(800, 600, Deg(75.0), 0.1, 1000.0);
        assert!(close(projection.aspect(), 800.0 / 600.0));
        projection.resize(600, 600);
        assert!(close(projection.aspect(), 1.0));
    }
}
