use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

/// 4x4 affine transform stored as the 16 floats a GL matrix uniform
/// expects, i.e. what `uniformMatrix4fv(loc, false, m)` consumes directly.
///
/// In that layout the translation components live at indices 12, 13
/// and 14. With column vectors, `multiply(a, b)` is the product `a · b`:
/// the transform that applies `b` first in `a`'s local frame. The fluent
/// helpers ([`translate`](Mat4::translate), [`z_rotate`](Mat4::z_rotate),
/// ...) all post-multiply, so a chain reads outermost-first:
///
/// ```rust
/// use quadro_core::transform::Mat4;
///
/// // Move, then spin within the moved frame.
/// let m = Mat4::identity().translate(0.3, 0.0, 0.0).z_rotate(0.5);
/// assert_eq!(m, Mat4::translation(0.3, 0.0, 0.0) * Mat4::z_rotation(0.5));
/// ```
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4(pub [f32; 16]);

// ── constructors ────────────────────────────────────────────────────────────

impl Mat4 {
    #[rustfmt::skip]
    #[inline]
    pub const fn identity() -> Mat4 {
        Mat4([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    #[rustfmt::skip]
    #[inline]
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
        Mat4([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            tx,  ty,  tz,  1.0,
        ])
    }

    /// Non-uniform scale. Zero and negative factors are legal; negatives
    /// mirror, which flips winding.
    #[rustfmt::skip]
    #[inline]
    pub const fn scaling(sx: f32, sy: f32, sz: f32) -> Mat4 {
        Mat4([
            sx,  0.0, 0.0, 0.0,
            0.0, sy,  0.0, 0.0,
            0.0, 0.0, sz,  0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about +X by `angle` radians, counter-clockwise looking
    /// down the axis toward the origin.
    #[rustfmt::skip]
    pub fn x_rotation(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        Mat4([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about +Y, same handedness as [`x_rotation`](Mat4::x_rotation).
    #[rustfmt::skip]
    pub fn y_rotation(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        Mat4([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation about +Z; in the 2D drawing plane this is the
    /// counter-clockwise screen rotation.
    #[rustfmt::skip]
    pub fn z_rotation(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        Mat4([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }
}

// ── composition ─────────────────────────────────────────────────────────────

impl Mat4 {
    /// The product `a · b` under the column-vector convention.
    ///
    /// In flat-storage terms: row `r` of `b` dotted with column `c` of
    /// `a`. Not commutative; translate-then-rotate and
    /// rotate-then-translate are different transforms.
    pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
        let a = &a.0;
        let b = &b.0;
        let mut out = [0.0f32; 16];
        for r in 0..4 {
            for c in 0..4 {
                out[r * 4 + c] = b[r * 4] * a[c]
                    + b[r * 4 + 1] * a[4 + c]
                    + b[r * 4 + 2] * a[8 + c]
                    + b[r * 4 + 3] * a[12 + c];
            }
        }
        Mat4(out)
    }

    #[inline]
    #[must_use]
    pub fn translate(self, tx: f32, ty: f32, tz: f32) -> Mat4 {
        Mat4::multiply(self, Mat4::translation(tx, ty, tz))
    }

    #[inline]
    #[must_use]
    pub fn x_rotate(self, angle: f32) -> Mat4 {
        Mat4::multiply(self, Mat4::x_rotation(angle))
    }

    #[inline]
    #[must_use]
    pub fn y_rotate(self, angle: f32) -> Mat4 {
        Mat4::multiply(self, Mat4::y_rotation(angle))
    }

    #[inline]
    #[must_use]
    pub fn z_rotate(self, angle: f32) -> Mat4 {
        Mat4::multiply(self, Mat4::z_rotation(angle))
    }

    #[inline]
    #[must_use]
    pub fn scale(self, sx: f32, sy: f32, sz: f32) -> Mat4 {
        Mat4::multiply(self, Mat4::scaling(sx, sy, sz))
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4::multiply(self, rhs)
    }
}

impl Default for Mat4 {
    #[inline]
    fn default() -> Self {
        Mat4::identity()
    }
}

// ── upload views ────────────────────────────────────────────────────────────

impl Mat4 {
    /// The 16 floats in upload order.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    /// Raw bytes for writing into a uniform buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
