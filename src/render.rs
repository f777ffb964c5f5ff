use crate::constants::{
    BACKGROUND_CSS, CIRCLE_SEGMENTS, GRID_CSS, GROUND_CSS, GROUND_Y, HEADING_LENGTH, LABEL_CSS,
    LABEL_FONT, MODEL_BODY_RADIUS,
};
use crate::shapes;
use glam::{Vec2, Vec3};
use viewer_core::{
    Camera, ObjectView, ViewMode, Viewport, ViewerSnapshot, GRID_DIVISIONS, GROUND_HALF_EXTENT,
};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas2D presentation of the scene, projected through the same camera
/// the pointer handlers pick with.
pub struct Renderer {
    ctx: web::CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    pub fn draw(
        &self,
        viewport: &Viewport,
        dpr: f64,
        camera: &Camera,
        mode: ViewMode,
        snapshot: &ViewerSnapshot,
    ) {
        let ctx = &self.ctx;
        _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        ctx.set_fill_style_str(BACKGROUND_CSS);
        ctx.fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
        if viewport.is_empty() {
            return;
        }

        let project = |p: Vec3| camera.world_to_screen(viewport, p);

        let ground: Option<Vec<Vec2>> = shapes::ground_corners(GROUND_HALF_EXTENT, GROUND_Y)
            .into_iter()
            .map(project)
            .collect();
        if let Some(ground) = ground {
            ctx.begin_path();
            trace(ctx, &ground);
            ctx.set_fill_style_str(GROUND_CSS);
            ctx.fill();
        }

        if mode.shows_grid() {
            ctx.begin_path();
            for (a, b) in shapes::grid_lines(GROUND_HALF_EXTENT, GROUND_Y, GRID_DIVISIONS) {
                if let (Some(a), Some(b)) = (project(a), project(b)) {
                    ctx.move_to(a.x as f64, a.y as f64);
                    ctx.line_to(b.x as f64, b.y as f64);
                }
            }
            ctx.set_stroke_style_str(GRID_CSS);
            ctx.set_line_width(1.0);
            ctx.stroke();
        }

        // painter's order: farthest model first
        let eye = camera.eye;
        let mut order: Vec<&ObjectView> = snapshot.objects.iter().collect();
        order.sort_by(|a, b| {
            b.position
                .distance_squared(eye)
                .total_cmp(&a.position.distance_squared(eye))
        });
        for object in order {
            self.draw_object(camera, viewport, object);
        }
    }

    fn draw_object(&self, camera: &Camera, viewport: &Viewport, object: &ObjectView) {
        let ctx = &self.ctx;
        let project = |p: Vec3| camera.world_to_screen(viewport, p);
        let center = object.position;

        for ring in object.indicator.rings() {
            let height = center.y - ring.depth;
            let outer: Option<Vec<Vec2>> =
                shapes::circle_points(center, ring.outer_radius, height, CIRCLE_SEGMENTS)
                    .into_iter()
                    .map(project)
                    .collect();
            let Some(outer) = outer else { continue };
            ctx.begin_path();
            trace(ctx, &outer);
            if ring.inner_radius > 0.0 {
                let inner: Option<Vec<Vec2>> =
                    shapes::circle_points(center, ring.inner_radius, height, CIRCLE_SEGMENTS)
                        .into_iter()
                        .rev()
                        .map(project)
                        .collect();
                if let Some(inner) = inner {
                    // opposite winding cuts the hole under the nonzero rule
                    trace(ctx, &inner);
                }
            }
            ctx.set_fill_style_str(&ring.color.css());
            ctx.fill();
        }

        let body: Option<Vec<Vec2>> =
            shapes::circle_points(center, MODEL_BODY_RADIUS, center.y, CIRCLE_SEGMENTS)
                .into_iter()
                .map(project)
                .collect();
        if let Some(body) = body {
            ctx.begin_path();
            trace(ctx, &body);
            ctx.set_fill_style_str(&object.tint.css());
            ctx.fill();
            ctx.set_stroke_style_str(LABEL_CSS);
            ctx.set_line_width(1.0);
            ctx.stroke();
        }

        let tip = shapes::heading_tip(center, object.rotation.radians(), HEADING_LENGTH);
        if let (Some(a), Some(b)) = (project(center), project(tip)) {
            ctx.begin_path();
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
            ctx.set_stroke_style_str(LABEL_CSS);
            ctx.set_line_width(2.0);
            ctx.stroke();
        }

        if let Some(at) = project(center + Vec3::Y * (MODEL_BODY_RADIUS + 0.5)) {
            ctx.set_font(LABEL_FONT);
            ctx.set_text_align("center");
            ctx.set_fill_style_str(LABEL_CSS);
            _ = ctx.fill_text(&object.label, at.x as f64, at.y as f64);
        }
    }
}

fn trace(ctx: &web::CanvasRenderingContext2d, points: &[Vec2]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.move_to(first.x as f64, first.y as f64);
    for p in rest {
        ctx.line_to(p.x as f64, p.y as f64);
    }
    ctx.close_path();
}
