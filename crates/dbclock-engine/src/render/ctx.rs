use crate::coords::Viewport;

/// Renderer-facing context (device/queue + target format + viewport).
///
/// This is intentionally small and stable.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// MSAA sample count of the color attachment renderers draw into.
    pub sample_count: u32,
    pub viewport: Viewport, // logical px
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        sample_count: u32,
        viewport: Viewport,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            sample_count,
            viewport,
        }
    }
}

/// Target for drawing (encoder + color view + optional MSAA resolve view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    /// Swapchain view to resolve into when `color_view` is multisampled.
    pub resolve_target: Option<&'a wgpu::TextureView>,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        resolve_target: Option<&'a wgpu::TextureView>,
    ) -> Self {
        Self { encoder, color_view, resolve_target }
    }
}
