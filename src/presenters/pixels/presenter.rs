use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, SurfaceTexture, TextureError, wgpu};
use thiserror::Error;
use winit::window::Window;

use crate::core::actions::render_frame::{RenderFrameError, render_frame_rgba};
use crate::core::viewport::frame::FrameParams;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error(transparent)]
    Render(#[from] RenderFrameError),
    #[error(transparent)]
    Pixels(#[from] pixels::Error),
    #[error(transparent)]
    Texture(#[from] TextureError),
}

/// Shades frames straight into the `pixels` framebuffer and draws the egui
/// overlay on top in the same pass.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, PresentError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width.max(1), size.height.max(1), surface_texture)?;

        let egui_renderer =
            EguiRenderer::new(pixels.device(), pixels.render_texture_format(), None, 1);

        Ok(Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PresentError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        Ok(())
    }

    pub fn present(
        &mut self,
        params: &FrameParams,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), PresentError> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        // Skip shading until the controller has caught up with a resize.
        if params.pixel_rect.width() == self.width && params.pixel_rect.height() == self.height {
            render_frame_rgba(params, self.pixels.frame_mut())?;
        }

        let width = self.width;
        let height = self.height;
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let pixels_per_point = egui_ctx.pixels_per_point();
            let clipped_primitives = egui_ctx.tessellate(egui_output.shapes, pixels_per_point);
            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [width, height],
                pixels_per_point,
            };
            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }
            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }
}
