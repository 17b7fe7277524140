//! wgpu renderer for [`SceneController`], usable from a canvas or a window.

use tunnel_core::{SceneController, SceneRenderer, StarfieldImage};

mod helpers;
mod targets;
mod tube;

pub use helpers::{clear_color, pick_surface_format};
pub use tube::{pack_vertices, SceneUniforms, TubeVertex};

use targets::RenderTargets;
use tube::{create_tube_resources, TubeResources};

pub static TUNNEL_WGSL: &str = include_str!("../shaders/tunnel.wgsl");

/// Multisample count for the colour and depth attachments.
pub const SAMPLE_COUNT: u32 = 4;

pub struct TunnelRenderer<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    tube: TubeResources,
    _starfield: wgpu::Texture,
    vertex_scratch: Vec<TubeVertex>,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl<'a> TunnelRenderer<'a> {
    /// Acquire a device for `surface`, upload the starfield and build the
    /// tube buffers from the scene's initial geometry.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
        starfield: &StarfieldImage,
        scene: &SceneController,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;

        let caps = surface.get_capabilities(&adapter);
        let format = pick_surface_format(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[render] surface {}x{} {:?}", width, height, format);

        let targets = RenderTargets::new(&device, width, height, format, SAMPLE_COUNT);

        let (starfield_tex, starfield_view) =
            helpers::upload_starfield(&device, &queue, starfield);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("starfield_sampler"),
            address_mode_u: wgpu::AddressMode::MirrorRepeat,
            address_mode_v: wgpu::AddressMode::MirrorRepeat,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let tube = create_tube_resources(
            &device,
            format,
            SAMPLE_COUNT,
            scene.tube(),
            &starfield_view,
            &sampler,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            tube,
            _starfield: starfield_tex,
            vertex_scratch: Vec::with_capacity(scene.tube().render_vertex_count()),
            clear_color: clear_color(scene.environment().clear_color),
            width,
            height,
        })
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resize the swapchain and attachments to physical pixels; zero is ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            log::debug!("[render] resized to {}x{}", width, height);
        }
    }

    /// Reconfigure after the surface was lost or became outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn draw(&mut self, scene: &SceneController) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.tube.uniform_buffer,
            0,
            bytemuck::bytes_of(&SceneUniforms::from_scene(scene)),
        );
        pack_vertices(scene.tube(), &mut self.vertex_scratch);
        self.queue.write_buffer(
            &self.tube.vertex_buffer,
            0,
            bytemuck::cast_slice(&self.vertex_scratch),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tunnel_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.tube.pipeline);
            rpass.set_bind_group(0, &self.tube.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.tube.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.tube.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.tube.index_count, 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl SceneRenderer for TunnelRenderer<'_> {
    type Error = wgpu::SurfaceError;

    fn render(&mut self, scene: &SceneController) -> Result<(), Self::Error> {
        self.draw(scene)
    }
}
