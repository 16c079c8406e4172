//! WebGPU rendering pipeline for the card backdrop.
//!
//! The blob trail needs last frame's pixels, which swapchain textures do
//! not guarantee, so the backdrop is composited in a persistent offscreen
//! texture: a low-alpha fade quad over the previous contents, then the
//! instanced blob circles, then a blit to the surface. The egui overlay is
//! painted on top of the blitted surface.

use std::sync::Arc;

use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;
use winit::{dpi::PhysicalSize, window::Window};

use super::hud::HudOverlay;
use crate::config::{FieldParameters, ProfileRecord};
use crate::sim::BlobField;
use crate::state::FrameMetrics;

/// Backdrop base color (linear-ish dark navy, matches the card theme)
const BACKGROUND: [f32; 3] = [0.010, 0.014, 0.040];

/// Offscreen trail format; fixed so captures are always RGBA
const TRAIL_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Per-blob instance data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct BlobInstance {
    center: [f32; 2],
    radius: f32,
    _pad: f32,
    color: [f32; 4],
}

/// Viewport uniform for the blob vertex shader
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct ViewUniform {
    viewport: [f32; 2],
    _pad: [f32; 2],
}

/// Fade-quad uniform: background color with the trail alpha
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct FadeUniform {
    color: [f32; 4],
}

/// Main render state managing all GPU resources
pub struct RenderState {
    #[allow(dead_code)]
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize<u32>,

    // Pipelines
    fade_pipeline: wgpu::RenderPipeline,
    blob_pipeline: wgpu::RenderPipeline,
    blit_pipeline: wgpu::RenderPipeline,

    // Buffers
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    view_buffer: wgpu::Buffer,
    #[allow(dead_code)]
    fade_buffer: wgpu::Buffer,

    // Bind groups
    view_bind_group: wgpu::BindGroup,
    fade_bind_group: wgpu::BindGroup,
    blit_bind_group: wgpu::BindGroup,
    blit_layout: wgpu::BindGroupLayout,
    trail_sampler: wgpu::Sampler,

    // Persistent trail target
    trail_texture: wgpu::Texture,
    trail_view: wgpu::TextureView,
    trail_needs_clear: bool,
}

impl RenderState {
    /// Create new render state from window and field parameters
    pub async fn new(window: Arc<Window>, params: &FieldParameters) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // The Arc<Window> is stored in RenderState, so the window outlives
        // the surface
        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        log::info!("Using adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Cardscape Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Backdrop Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../shaders/blob.wgsl").into()),
        });

        // Uniform buffers
        let view_uniform = ViewUniform {
            viewport: [size.width as f32, size.height as f32],
            _pad: [0.0; 2],
        };
        let view_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("View Buffer"),
            contents: bytemuck::cast_slice(&[view_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let fade_uniform = FadeUniform {
            color: [
                BACKGROUND[0],
                BACKGROUND[1],
                BACKGROUND[2],
                params.trail_fade_alpha,
            ],
        };
        let fade_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Fade Buffer"),
            contents: bytemuck::cast_slice(&[fade_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        // Bind group layouts; the shader module declares all bindings but
        // each entry point only uses its own
        let view_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("View Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let fade_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Fade Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let blit_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Blit Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let view_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("View Bind Group"),
            layout: &view_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: view_buffer.as_entire_binding(),
            }],
        });

        let fade_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Fade Bind Group"),
            layout: &fade_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 1,
                resource: fade_buffer.as_entire_binding(),
            }],
        });

        // Pipelines
        let fade_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Fade Pipeline Layout"),
                bind_group_layouts: &[&fade_layout],
                push_constant_ranges: &[],
            });

        let fade_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Fade Pipeline"),
            layout: Some(&fade_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_fade",
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_fade",
                targets: &[Some(wgpu::ColorTargetState {
                    format: TRAIL_FORMAT,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let blob_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Blob Pipeline Layout"),
                bind_group_layouts: &[&view_layout],
                push_constant_ranges: &[],
            });

        let blob_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Blob Pipeline"),
            layout: Some(&blob_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_blob",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<BlobInstance>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x2,
                        },
                        wgpu::VertexAttribute {
                            offset: 8,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32,
                        },
                        wgpu::VertexAttribute {
                            offset: 16,
                            shader_location: 2,
                            format: wgpu::VertexFormat::Float32x4,
                        },
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_blob",
                targets: &[Some(wgpu::ColorTargetState {
                    format: TRAIL_FORMAT,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let blit_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Blit Pipeline Layout"),
                bind_group_layouts: &[&blit_layout],
                push_constant_ranges: &[],
            });

        let blit_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Blit Pipeline"),
            layout: Some(&blit_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_blit",
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_blit",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        // Instance buffer sized for the fixed blob census
        let instance_count = params.blob_count as u32;
        let instances = vec![BlobInstance::zeroed(); params.blob_count];
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Blob Instance Buffer"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let trail_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Trail Sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let (trail_texture, trail_view) = Self::create_trail_texture(&device, &config);
        let blit_bind_group =
            Self::create_blit_bind_group(&device, &blit_layout, &trail_view, &trail_sampler);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            fade_pipeline,
            blob_pipeline,
            blit_pipeline,
            instance_buffer,
            instance_count,
            view_buffer,
            fade_buffer,
            view_bind_group,
            fade_bind_group,
            blit_bind_group,
            blit_layout,
            trail_sampler,
            trail_texture,
            trail_view,
            trail_needs_clear: true,
        })
    }

    fn create_trail_texture(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Trail Texture"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TRAIL_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }

    fn create_blit_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        trail_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Blit Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(trail_view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    /// Device handle for overlay construction
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Configured surface format
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Resize the render surface and the trail texture.
    ///
    /// The trail restarts from the base color; blob state is untouched.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);

            let (texture, view) = Self::create_trail_texture(&self.device, &self.config);
            self.trail_texture = texture;
            self.trail_view = view;
            self.blit_bind_group = Self::create_blit_bind_group(
                &self.device,
                &self.blit_layout,
                &self.trail_view,
                &self.trail_sampler,
            );
            self.trail_needs_clear = true;

            let view_uniform = ViewUniform {
                viewport: [new_size.width as f32, new_size.height as f32],
                _pad: [0.0; 2],
            };
            self.queue
                .write_buffer(&self.view_buffer, 0, bytemuck::cast_slice(&[view_uniform]));
        }
    }

    /// Upload the current blob set to the instance buffer
    pub fn update_field(&mut self, field: &BlobField) {
        let params = &field.params;
        let instances: Vec<BlobInstance> = field
            .blobs
            .iter()
            .map(|blob| {
                let rgb = hsb_to_rgb(blob.hue, params.saturation, params.brightness);
                BlobInstance {
                    center: blob.position.to_array(),
                    radius: blob.radius(),
                    _pad: 0.0,
                    color: [rgb[0], rgb[1], rgb[2], params.blob_alpha],
                }
            })
            .collect();

        self.instance_count = instances.len() as u32;
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
    }

    /// Render a frame: fade + blobs into the trail, blit to the surface,
    /// then the egui overlay on top
    pub fn render(
        &mut self,
        window: &Window,
        hud: &mut HudOverlay,
        metrics: &FrameMetrics,
        profile: &ProfileRecord,
    ) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let surface_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        // Backdrop pass into the persistent trail texture
        {
            let load = if self.trail_needs_clear {
                self.trail_needs_clear = false;
                wgpu::LoadOp::Clear(wgpu::Color {
                    r: BACKGROUND[0] as f64,
                    g: BACKGROUND[1] as f64,
                    b: BACKGROUND[2] as f64,
                    a: 1.0,
                })
            } else {
                wgpu::LoadOp::Load
            };

            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Trail Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.trail_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.fade_pipeline);
            pass.set_bind_group(0, &self.fade_bind_group, &[]);
            pass.draw(0..3, 0..1);

            pass.set_pipeline(&self.blob_pipeline);
            pass.set_bind_group(0, &self.view_bind_group, &[]);
            pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
            pass.draw(0..4, 0..self.instance_count);
        }

        // Blit the trail onto the surface
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Blit Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.blit_pipeline);
            pass.set_bind_group(0, &self.blit_bind_group, &[]);
            pass.draw(0..3, 0..1);
        }

        // Overlay pass
        let (paint_jobs, textures_delta) = hud.render(window, metrics, profile);
        let screen_descriptor = hud.screen_descriptor(window);
        hud.paint(
            &self.device,
            &self.queue,
            &mut encoder,
            &surface_view,
            screen_descriptor,
            paint_jobs,
            textures_delta,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Read the trail texture back for screenshot export.
    ///
    /// Captures the generative backdrop layer; the overlay is not part of
    /// the trail. Returns RGBA pixels with the capture dimensions.
    pub fn capture_backdrop(&self) -> Result<(Vec<u8>, u32, u32)> {
        let width = self.config.width;
        let height = self.config.height;

        // COPY_BYTES_PER_ROW_ALIGNMENT padding
        let bytes_per_pixel = 4u32;
        let unpadded_bytes_per_row = width * bytes_per_pixel;
        let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
        let padded_bytes_per_row = unpadded_bytes_per_row.div_ceil(align) * align;

        let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Capture Buffer"),
            size: (padded_bytes_per_row * height) as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Capture Encoder"),
            });
        encoder.copy_texture_to_buffer(
            wgpu::ImageCopyTexture {
                texture: &self.trail_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::ImageCopyBuffer {
                buffer: &buffer,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_bytes_per_row),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.queue.submit(std::iter::once(encoder.finish()));

        let slice = buffer.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        let _ = self.device.poll(wgpu::Maintain::Wait);
        rx.recv()??;

        let data = slice.get_mapped_range();
        let mut pixels = Vec::with_capacity((unpadded_bytes_per_row * height) as usize);
        for row in data.chunks(padded_bytes_per_row as usize) {
            pixels.extend_from_slice(&row[..unpadded_bytes_per_row as usize]);
        }
        drop(data);
        buffer.unmap();

        Ok((pixels, width, height))
    }
}

/// Convert hue (degrees) / saturation / brightness to RGB, all in [0, 1]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> [f32; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = brightness * saturation;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = brightness - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_hsb_primaries() {
        let red = hsb_to_rgb(0.0, 1.0, 1.0);
        assert!(close(red[0], 1.0) && close(red[1], 0.0) && close(red[2], 0.0));

        let green = hsb_to_rgb(120.0, 1.0, 1.0);
        assert!(close(green[0], 0.0) && close(green[1], 1.0) && close(green[2], 0.0));

        let blue = hsb_to_rgb(240.0, 1.0, 1.0);
        assert!(close(blue[0], 0.0) && close(blue[1], 0.0) && close(blue[2], 1.0));
    }

    #[test]
    fn test_hsb_desaturated_is_gray() {
        let gray = hsb_to_rgb(200.0, 0.0, 0.6);
        assert!(close(gray[0], 0.6) && close(gray[1], 0.6) && close(gray[2], 0.6));
    }

    #[test]
    fn test_hsb_card_range_stays_blue() {
        // The field's hue range [180, 240] should always dominate in blue
        for hue in [180.0_f32, 200.0, 220.0, 240.0] {
            let rgb = hsb_to_rgb(hue, 0.75, 0.9);
            assert!(rgb[2] >= rgb[0], "hue {} not blue-dominant: {:?}", hue, rgb);
        }
    }
}
