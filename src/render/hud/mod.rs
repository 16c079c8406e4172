//! Card overlay system using egui.
//!
//! Renders the profile card, contact rows and auxiliary panels above the
//! blob backdrop, and surfaces export requests back to the host loop.

mod panels;
mod state;
mod theme;
mod widgets;

pub use state::HudState;
pub use theme::{CardColors, CardTheme};

use egui::Context;
use egui_wgpu::ScreenDescriptor;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::config::ProfileRecord;
use crate::state::FrameMetrics;

/// Export action requested by the user through the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportAction {
    /// Serialize the profile to a `.vcf` file
    ContactCard,
    /// Capture the backdrop to a PNG
    Screenshot,
}

/// Overlay manager integrating egui with wgpu
pub struct HudOverlay {
    /// Panel visibility state
    pub state: HudState,
    /// Theme configuration
    pub theme: CardTheme,
    /// egui context
    ctx: Context,
    /// egui-winit state
    egui_state: egui_winit::State,
    /// egui-wgpu renderer
    renderer: egui_wgpu::Renderer,
    /// Pending export action
    pending_export: Option<ExportAction>,
}

impl HudOverlay {
    /// Create a new overlay
    pub fn new(
        window: &Window,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let ctx = Context::default();
        let theme = CardTheme::default();
        theme.apply(&ctx);

        let viewport_id = ctx.viewport_id();
        let egui_state = egui_winit::State::new(
            ctx.clone(),
            viewport_id,
            window,
            Some(window.scale_factor() as f32),
            None,
        );

        let renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1);

        Self {
            state: HudState::default(),
            theme,
            ctx,
            egui_state,
            renderer,
            pending_export: None,
        }
    }

    /// Handle window events, returns true if egui consumed the event
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        response.consumed
    }

    /// Take any pending export action
    pub fn take_export_action(&mut self) -> Option<ExportAction> {
        self.pending_export.take()
    }

    /// Queue an export action (keyboard shortcuts share the button path)
    pub fn request_export(&mut self, action: ExportAction) {
        self.pending_export = Some(action);
    }

    /// Run the overlay UI for this frame.
    ///
    /// Returns paint jobs and texture delta for the paint pass.
    pub fn render(
        &mut self,
        window: &Window,
        metrics: &FrameMetrics,
        profile: &ProfileRecord,
    ) -> (Vec<egui::ClippedPrimitive>, egui::TexturesDelta) {
        let raw_input = self.egui_state.take_egui_input(window);

        let mut action = None;
        let output = self.ctx.run(raw_input, |ctx| {
            action = panels::render_panels(ctx, &self.state, metrics, profile);
        });

        if let Some(action) = action {
            self.pending_export = Some(action);
        }

        self.egui_state
            .handle_platform_output(window, output.platform_output);

        let pixels_per_point = self.ctx.pixels_per_point();
        let primitives = self.ctx.tessellate(output.shapes, pixels_per_point);

        (primitives, output.textures_delta)
    }

    /// Paint the overlay to the screen
    #[allow(clippy::too_many_arguments)]
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        screen_descriptor: ScreenDescriptor,
        paint_jobs: Vec<egui::ClippedPrimitive>,
        textures_delta: egui::TexturesDelta,
    ) {
        for (id, image_delta) in &textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.renderer
            .update_buffers(device, queue, encoder, &paint_jobs, &screen_descriptor);

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load, // Don't clear - render on top
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in &textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    /// Get screen descriptor from window size
    pub fn screen_descriptor(&self, window: &Window) -> ScreenDescriptor {
        let size = window.inner_size();
        ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        }
    }

    /// Check if the overlay wants to capture keyboard input
    pub fn wants_keyboard_input(&self) -> bool {
        self.ctx.wants_keyboard_input()
    }

    /// Check if the overlay wants to capture mouse input
    pub fn wants_pointer_input(&self) -> bool {
        self.ctx.wants_pointer_input()
    }
}
