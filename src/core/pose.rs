use glam::Vec3;

/// Per-frame output of the button physics, uploaded verbatim as the first
/// 24 bytes of the jelly uniform block.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Pose {
    pub pos_x: f32,
    pub pos_y: f32,
    pub pos_z: f32,
    pub squash_x: f32,
    pub squash_z: f32,
    pub wiggle_x: f32,
}

impl Pose {
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.pos_x, self.pos_y, self.pos_z)
    }
}

/// Write-only destination for poses (normally a GPU uniform buffer).
pub trait PoseSink {
    fn write(&mut self, pose: &Pose);
}

impl<F: FnMut(&Pose)> PoseSink for F {
    fn write(&mut self, pose: &Pose) {
        self(pose)
    }
}

// Recording sink
impl PoseSink for Vec<Pose> {
    fn write(&mut self, pose: &Pose) {
        self.push(*pose);
    }
}

impl<S: PoseSink> PoseSink for Option<S> {
    fn write(&mut self, pose: &Pose) {
        if let Some(sink) = self {
            sink.write(pose);
        }
    }
}
