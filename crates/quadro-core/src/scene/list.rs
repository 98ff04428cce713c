use crate::scene::DrawCmd;
use crate::transform::Mat4;

/// One recorded draw: the command plus the transform that was current
/// when it was pushed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// World matrix the host binds before drawing this item.
    pub transform: Mat4,
}

/// Recorded draw stream for one frame.
///
/// Paint order is insertion order; there is no z machinery, callers
/// record back-to-front the way painters do.
///
/// The list carries a current transform, initially identity. Every push
/// captures it into the item, mirroring a matrix uniform that stays
/// bound across draw calls until it is set again. Recording never
/// fails; parameter validation happens at
/// [`assemble`](crate::scene::assemble) time.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    transform: Mat4,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets recorded items and resets the transform to identity.
    /// Allocated capacity survives for per-frame reuse.
    pub fn clear(&mut self) {
        self.items.clear();
        self.transform = Mat4::identity();
    }

    /// Sets the transform captured by subsequent pushes.
    #[inline]
    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    /// The transform the next push will capture.
    #[inline]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Records `cmd` under the current transform. The typed helpers in
    /// `scene::shapes` are the usual entry points.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem { cmd, transform: self.transform });
    }

    /// Recorded items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }
}
