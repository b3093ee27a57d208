use globe_core::renderer::{self, PointRenderer};
use globe_core::{Camera, FrameOutput, Lighting};
use web_sys as web;

/// WebGPU surface bound to the page canvas, plus the shared point renderer.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    points: PointRenderer,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        point_count: usize,
        clear: [f64; 4],
    ) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        // the surface keeps its own handle to the canvas element
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let config = renderer::surface_config(
            &caps,
            canvas.width(),
            canvas.height(),
            wgpu::CompositeAlphaMode::PreMultiplied,
        )
        .ok_or_else(|| anyhow::anyhow!("Surface reports no formats"))?;
        surface.configure(&device, &config);
        let view_format = renderer::view_format(&config);
        let points = PointRenderer::new(&device, view_format, point_count, clear);

        log::info!(
            "[gpu] surface {}x{} format={:?} view={:?} points={}",
            config.width,
            config.height,
            config.format,
            view_format,
            point_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            points,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.reconfigure();
        }
    }

    /// Re-applies the surface configuration after a lost or outdated frame.
    pub fn reconfigure(&mut self) {
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
