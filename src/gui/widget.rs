use druid::widget::prelude::*;
use druid::{Code, MouseButton, Widget};
use image::RgbaImage;

use crate::gui::convert_image;
use crate::painter::Banded;
use crate::{mandelbrot, Mandelbrot};

pub struct MandelbrotWidget {
    session: Mandelbrot<Banded>,
    frame: Option<RgbaImage>,
    width: u32,
    height: u32,
}

impl MandelbrotWidget {
    pub fn new() -> Self {
        Self {
            session: mandelbrot(1000),
            frame: None,
            width: 0,
            height: 0,
        }
    }

    fn resize(&mut self, size: Size) -> bool {
        let width = f64::round(size.width) as u32;
        let height = f64::round(size.height) as u32;
        if self.width == width && self.height == height {
            false
        } else {
            self.width = width;
            self.height = height;
            if width > 0 && height > 0 {
                self.frame = Some(self.session.render(width, height));
            }
            true
        }
    }
}

impl Widget<()> for MandelbrotWidget {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut (), _env: &Env) {
        match event {
            Event::KeyDown(key_event) => {
                if let Code::KeyR = key_event.code {
                    self.frame = Some(self.session.zoom_out(self.width, self.height));
                    ctx.request_paint();
                }
            }
            Event::MouseMove(_) => {
                if !ctx.is_focused() {
                    ctx.request_focus();
                }
            }
            Event::MouseDown(mouse) => {
                if let MouseButton::Left = mouse.button {
                    if self.width > 0 && self.height > 0 {
                        let x = f64::round(mouse.pos.x) as u32;
                        let y = f64::round(mouse.pos.y) as u32;
                        self.frame = Some(self.session.zoom_in(x, y, self.width, self.height));
                        ctx.request_paint();
                    }
                }
            }
            _ => (),
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &(), _env: &Env) {
        match event {
            LifeCycle::WidgetAdded => {
                ctx.register_for_focus();
                self.resize(ctx.size());
            }
            LifeCycle::Size(size) => {
                self.resize(*size);
            }
            _ => (),
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &(), _new_data: &(), _env: &Env) {}

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &(),
        _env: &Env,
    ) -> Size {
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _: &(), _env: &Env) {
        let size = ctx.size();
        self.resize(size);
        if let Some(ref frame) = self.frame {
            let image_buf = convert_image(frame);
            let ctx_image = image_buf.to_image(ctx.render_ctx);
            ctx.draw_image(
                &ctx_image,
                size.to_rect(),
                druid::piet::InterpolationMode::NearestNeighbor,
            );
        }
    }
}
