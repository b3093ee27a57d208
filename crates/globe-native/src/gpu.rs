use globe_core::renderer::{self, PointRenderer};
use globe_core::{Camera, FrameOutput, Lighting};

const CLEAR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

/// Window surface plus the shared point renderer.
pub struct GpuState<'w> {
    pub window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    points: PointRenderer,
}

impl<'w> GpuState<'w> {
    pub async fn new(window: &'w winit::window::Window, point_count: usize) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
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
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let config = renderer::surface_config(
            &caps,
            size.width,
            size.height,
            wgpu::CompositeAlphaMode::Opaque,
        )
        .ok_or_else(|| anyhow::anyhow!("Surface reports no formats"))?;
        surface.configure(&device, &config);
        let view_format = renderer::view_format(&config);
        let points = PointRenderer::new(&device, view_format, point_count, CLEAR);

        log::info!(
            "[gpu] {} {}x{} format={:?} view={:?}",
            adapter.get_info().name,
            config.width,
            config.height,
            config.format,
            view_format
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            view_format,
            points,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        lighting: &Lighting,
        frame: &FrameOutput<'_>,
    ) -> Result<(), wgpu::SurfaceError> {
        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        self.points
            .render(&self.device, &self.queue, &view, camera, lighting, frame);
        surface_tex.present();
        Ok(())
    }
}
