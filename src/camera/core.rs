use glam::{Mat3, Mat4, Quat, Vec3};

/// Projection parameters of a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection.
    Perspective {
        /// Vertical field of view in degrees.
        fovy: f32,
        /// Viewport aspect ratio (width / height).
        aspect: f32,
        /// Near clipping plane distance.
        znear: f32,
        /// Far clipping plane distance.
        zfar: f32,
    },
    /// Orthographic projection; the frustum extents are divided by the
    /// camera's zoom.
    Orthographic {
        /// Left frustum plane.
        left: f32,
        /// Right frustum plane.
        right: f32,
        /// Top frustum plane.
        top: f32,
        /// Bottom frustum plane.
        bottom: f32,
        /// Near clipping plane distance.
        znear: f32,
        /// Far clipping plane distance.
        zfar: f32,
    },
    /// Caller-supplied projection matrix. The controller can orbit such a
    /// camera but cannot pan or dolly it.
    Custom(Mat4),
}

/// Discriminator for [`Projection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    /// [`Projection::Perspective`].
    Perspective,
    /// [`Projection::Orthographic`].
    Orthographic,
    /// [`Projection::Custom`].
    Custom,
}

/// Camera proxy: a world-space pose plus projection parameters.
///
/// The orientation follows the usual right-handed convention: the camera
/// looks down its local -Z axis with +Y up.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Camera-to-world rotation.
    pub orientation: Quat,
    /// World up direction used when orienting the camera.
    pub up: Vec3,
    /// Zoom factor. Narrows the field of view (perspective) or shrinks the
    /// frustum (orthographic).
    pub zoom: f32,
    /// Projection parameters.
    pub projection: Projection,
    projection_changed: bool,
}

impl Camera {
    /// Perspective camera at the origin looking down -Z.
    #[must_use]
    pub fn perspective(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self::with_projection(Projection::Perspective {
            fovy,
            aspect,
            znear,
            zfar,
        })
    }

    /// Orthographic camera at the origin looking down -Z.
    #[must_use]
    pub fn orthographic(
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self::with_projection(Projection::Orthographic {
            left,
            right,
            top,
            bottom,
            znear,
            zfar,
        })
    }

    /// Camera at the origin with an arbitrary projection.
    #[must_use]
    pub fn with_projection(projection: Projection) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
            zoom: 1.0,
            projection,
            projection_changed: true,
        }
    }

    /// Which kind of projection this camera uses.
    #[must_use]
    pub fn kind(&self) -> ProjectionKind {
        match self.projection {
            Projection::Perspective { .. } => ProjectionKind::Perspective,
            Projection::Orthographic { .. } => ProjectionKind::Orthographic,
            Projection::Custom(_) => ProjectionKind::Custom,
        }
    }

    /// Move the camera (builder style).
    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Rotate the camera so its -Z axis points at `target`, keeping `up`
    /// as close to vertical as possible.
    pub fn look_at(&mut self, target: Vec3) {
        let mut z = self.position - target;
        if z.length_squared() == 0.0 {
            z = Vec3::Z;
        }
        z = z.normalize();

        let mut x = self.up.cross(z);
        if x.length_squared() == 0.0 {
            // up and view direction are parallel; nudge off the pole
            if (self.up.z.abs() - 1.0).abs() < f32::EPSILON {
                z.x += 1.0e-4;
            } else {
                z.z += 1.0e-4;
            }
            z = z.normalize();
            x = self.up.cross(z);
        }
        x = x.normalize();
        let y = z.cross(x);

        self.orientation = Quat::from_mat3(&Mat3::from_cols(x, y, z));
    }

    /// Camera's local +X axis in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Camera's local +Y axis in world space.
    #[must_use]
    pub fn local_up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Viewing direction in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Update the aspect ratio of a perspective camera after a resize.
    pub fn set_aspect(&mut self, new_aspect: f32) {
        if let Projection::Perspective { aspect, .. } = &mut self.projection {
            *aspect = new_aspect;
            self.projection_changed = true;
        }
    }

    /// Flag the projection matrix as stale (zoom or frustum changed).
    pub fn mark_projection_changed(&mut self) {
        self.projection_changed = true;
    }

    /// Returns whether the projection changed since the last call, and
    /// clears the flag. Renderers use this to skip re-uploading matrices.
    pub fn take_projection_changed(&mut self) -> bool {
        std::mem::take(&mut self.projection_changed)
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
            .inverse()
    }

    /// Projection matrix, with zoom applied. Uses the [0,1] depth range
    /// (wgpu/Vulkan convention).
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        let zoom = if self.zoom > 0.0 { self.zoom } else { 1.0 };
        match self.projection {
            Projection::Perspective {
                fovy,
                aspect,
                znear,
                zfar,
            } => {
                let half = (fovy.to_radians() * 0.5).tan() / zoom;
                Mat4::perspective_rh(2.0 * half.atan(), aspect, znear, zfar)
            }
            Projection::Orthographic {
                left,
                right,
                top,
                bottom,
                znear,
                zfar,
            } => {
                let cx = (left + right) * 0.5;
                let cy = (top + bottom) * 0.5;
                let dx = (right - left) / (2.0 * zoom);
                let dy = (top - bottom) / (2.0 * zoom);
                Mat4::orthographic_rh(
                    cx - dx,
                    cx + dx,
                    cy - dy,
                    cy + dy,
                    znear,
                    zfar,
                )
            }
            Projection::Custom(matrix) => matrix,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Zoom factor.
    pub zoom: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            zoom: 1.0,
            forward: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.position.to_array();
        self.zoom = camera.zoom;
        self.forward = camera.forward().to_array();
    }
}
