//! The instanced point pipeline shared by the web and native front ends.
//!
//! Front ends own the surface and its configuration; [`PointRenderer`] owns
//! everything needed to draw a [`FrameOutput`] into a texture view.

use crate::field::FrameOutput;
use crate::gpu::{
    instance_count, position_buffer_size, PointUniforms, POINT_STRIDE, QUAD_CORNERS,
};
use crate::state::{Camera, Lighting};
use wgpu::util::DeviceExt;

/// Picks the surface format and the format its views are rendered through.
///
/// Point colors are linear, so drawing goes through an sRGB view whenever
/// the surface offers one (a WebGPU canvas usually only exposes the plain
/// `*8Unorm` formats and takes the sRGB variant as a view format).
pub fn pick_formats(
    formats: &[wgpu::TextureFormat],
) -> Option<(wgpu::TextureFormat, wgpu::TextureFormat)> {
    let format = formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())?;
    Some((format, format.add_srgb_suffix()))
}

/// Builds a FIFO surface configuration for `caps`, preferring `alpha` when offered.
pub fn surface_config(
    caps: &wgpu::SurfaceCapabilities,
    width: u32,
    height: u32,
    alpha: wgpu::CompositeAlphaMode,
) -> Option<wgpu::SurfaceConfiguration> {
    let (format, view_format) = pick_formats(&caps.formats)?;
    let alpha_mode = caps
        .alpha_modes
        .iter()
        .copied()
        .find(|m| *m == alpha)
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto);
    Some(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: width.max(1),
        height: height.max(1),
        present_mode: wgpu::PresentMode::Fifo,
        alpha_mode,
        view_formats: if view_format == format {
            vec![]
        } else {
            vec![view_format]
        },
        desired_maximum_frame_latency: 2,
    })
}

/// The format views of a surface configured by [`surface_config`] should use.
#[inline]
pub fn view_format(config: &wgpu::SurfaceConfiguration) -> wgpu::TextureFormat {
    config.view_formats.first().copied().unwrap_or(config.format)
}

pub struct PointRenderer {
    pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    position_buffer: wgpu::Buffer,
    position_capacity: u64,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    clear: wgpu::Color,
}

impl PointRenderer {
    pub fn new(
        device: &wgpu::Device,
        target: wgpu::TextureFormat,
        point_count: usize,
        clear: [f64; 4],
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::POINTS_WGSL.into()),
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("points_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let vertex_layouts = [
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                }],
            },
            wgpu::VertexBufferLayout {
                array_stride: POINT_STRIDE,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                }],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("points_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_layouts,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let position_capacity = position_buffer_size(point_count);
        let position_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("point_positions"),
            size: position_capacity,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("point_uniforms"),
            size: std::mem::size_of::<PointUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("points_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        log::debug!("[renderer] target={:?} points={}", target, point_count);

        Self {
            pipeline,
            quad_vb,
            position_buffer,
            position_capacity,
            uniform_buffer,
            bind_group,
            clear: wgpu::Color {
                r: clear[0],
                g: clear[1],
                b: clear[2],
                a: clear[3],
            },
        }
    }

    /// Uploads the frame (positions only when dirty), then clears `view` and draws into it.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &Camera,
        lighting: &Lighting,
        frame: &FrameOutput<'_>,
    ) {
        if frame.positions_dirty && !frame.positions.is_empty() {
            let bytes: &[u8] = bytemuck::cast_slice(frame.positions);
            let len = (bytes.len() as u64).min(self.position_capacity) as usize;
            queue.write_buffer(&self.position_buffer, 0, &bytes[..len]);
        }
        let uniforms = PointUniforms::new(camera, lighting, frame);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("encoder"),
        });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let instances = instance_count(frame.point_count(), self.position_capacity);
            if instances > 0 {
                rpass.set_pipeline(&self.pipeline);
                rpass.set_bind_group(0, &self.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.position_buffer.slice(..));
                rpass.draw(0..QUAD_CORNERS.len() as u32, 0..instances);
            }
        }
        queue.submit(Some(encoder.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    #[test]
    fn plain_canvas_formats_render_through_an_srgb_view() {
        assert_eq!(
            pick_formats(&[F::Bgra8Unorm, F::Rgba8Unorm]),
            Some((F::Bgra8Unorm, F::Bgra8UnormSrgb))
        );
    }

    #[test]
    fn srgb_surface_formats_are_preferred() {
        assert_eq!(
            pick_formats(&[F::Rgba16Float, F::Bgra8UnormSrgb]),
            Some((F::Bgra8UnormSrgb, F::Bgra8UnormSrgb))
        );
        assert_eq!(pick_formats(&[]), None);
    }

    #[test]
    fn view_formats_only_list_a_differing_srgb_variant() {
        let caps = |formats: Vec<F>| wgpu::SurfaceCapabilities {
            formats,
            present_modes: vec![wgpu::PresentMode::Fifo],
            alpha_modes: vec![
                wgpu::CompositeAlphaMode::Opaque,
                wgpu::CompositeAlphaMode::PreMultiplied,
            ],
            usages: wgpu::TextureUsages::RENDER_ATTACHMENT,
        };

        let cfg = surface_config(
            &caps(vec![F::Bgra8Unorm]),
            0,
            300,
            wgpu::CompositeAlphaMode::PreMultiplied,
        )
        .expect("a format");
        assert_eq!(cfg.view_formats, vec![F::Bgra8UnormSrgb]);
        assert_eq!(view_format(&cfg), F::Bgra8UnormSrgb);
        assert_eq!(cfg.alpha_mode, wgpu::CompositeAlphaMode::PreMultiplied);
        assert_eq!((cfg.width, cfg.height), (1, 300));

        let cfg = surface_config(
            &caps(vec![F::Rgba8UnormSrgb]),
            10,
            10,
            wgpu::CompositeAlphaMode::PostMultiplied,
        )
        .expect("a format");
        assert!(cfg.view_formats.is_empty());
        assert_eq!(view_format(&cfg), F::Rgba8UnormSrgb);
        assert_eq!(cfg.alpha_mode, wgpu::CompositeAlphaMode::Opaque);
    }
}
