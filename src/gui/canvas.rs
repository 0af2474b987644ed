use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::{
    config::CityLayout,
    network::{edge::EdgeWeight, route_graph::RouteGraph},
    routing::RouteResult,
};

const NODE_RADIUS: f32 = 20.0;
const EDGE_COLOR: Color32 = Color32::BLACK;
const WITHIN_BUDGET_COLOR: Color32 = Color32::from_rgb(0, 160, 0);
const OVER_BUDGET_COLOR: Color32 = Color32::from_rgb(200, 0, 0);

/// Maps layout coordinates onto a screen rect, keeping the aspect ratio and centering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    origin: Pos2,
    scale: f32,
}

impl CanvasTransform {
    pub fn fit(layout_size: [f32; 2], rect: Rect) -> Self {
        let [width, height] = layout_size;
        let scale = if width > 0.0 && height > 0.0 {
            (rect.width() / width).min(rect.height() / height)
        } else {
            1.0
        };
        let origin = rect.center() - Vec2::new(width * scale, height * scale) / 2.0;
        CanvasTransform { origin, scale }
    }

    pub fn to_screen(&self, point: [f32; 2]) -> Pos2 {
        self.origin + Vec2::new(point[0], point[1]) * self.scale
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

/// Edge annotation drawn at the midpoint: `distance (tariff)`.
pub fn edge_label(weight: &EdgeWeight) -> String {
    format!("{} ({})", weight.distance, weight.tariff)
}

pub fn route_color(result: &RouteResult, max_tariff: u64) -> Color32 {
    if result.within_budget(max_tariff) {
        WITHIN_BUDGET_COLOR
    } else {
        OVER_BUDGET_COLOR
    }
}

/// Draw every edge with its label. A pair of opposite edges is drawn once when both
/// directions carry the same weight.
pub fn draw_edges(
    painter: &Painter,
    transform: &CanvasTransform,
    graph: &RouteGraph,
    layout: &CityLayout,
) {
    let font = FontId::proportional(12.0 * transform.scale().max(0.5));
    for (from, to, weight) in graph.edges() {
        if from > to && graph.weight(to, from) == Some(weight) {
            continue;
        }
        let (Some(a), Some(b)) = (layout.position(from), layout.position(to)) else {
            continue;
        };
        let (a, b) = (transform.to_screen(a), transform.to_screen(b));
        painter.line_segment([a, b], Stroke::new(1.0, EDGE_COLOR));
        painter.text(
            a.lerp(b, 0.5),
            Align2::CENTER_BOTTOM,
            edge_label(&weight),
            font.clone(),
            EDGE_COLOR,
        );
    }
}

/// Draw the cities as labelled white circles.
pub fn draw_cities(painter: &Painter, transform: &CanvasTransform, layout: &CityLayout) {
    let radius = NODE_RADIUS * transform.scale();
    let font = FontId::proportional(16.0 * transform.scale().max(0.5));
    for (city, position) in &layout.positions {
        let center = transform.to_screen(*position);
        painter.circle(center, radius, Color32::WHITE, Stroke::new(1.0, EDGE_COLOR));
        painter.text(center, Align2::CENTER_CENTER, city.label(), font.clone(), EDGE_COLOR);
    }
}

/// Overlay routes, green when within `max_tariff` and red otherwise.
pub fn draw_routes<'a>(
    painter: &Painter,
    transform: &CanvasTransform,
    layout: &CityLayout,
    routes: impl IntoIterator<Item = &'a RouteResult>,
    max_tariff: u64,
    width: f32,
) {
    for result in routes {
        let stroke = Stroke::new(width, route_color(result, max_tariff));
        for (from, to) in result.legs() {
            if let (Some(a), Some(b)) = (layout.position(from), layout.position(to)) {
                painter.line_segment([transform.to_screen(a), transform.to_screen(b)], stroke);
            }
        }
    }
}
