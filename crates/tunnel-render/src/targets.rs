use super::helpers;

/// Multisampled colour and depth attachments sized to the surface.
///
/// The colour target resolves into the swapchain texture each frame.
pub(crate) struct RenderTargets {
    _msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    _depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) =
            helpers::create_attachment(device, "msaa_color", width, height, format, sample_count);
        let (depth_tex, depth_view) = helpers::create_attachment(
            device,
            "depth",
            width,
            height,
            helpers::DEPTH_FORMAT,
            sample_count,
        );
        Self {
            _msaa_tex: msaa_tex,
            msaa_view,
            _depth_tex: depth_tex,
            depth_view,
            format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height, self.format, self.sample_count);
    }
}
