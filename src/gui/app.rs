use eframe::egui;
use egui::{CentralPanel, CollapsingHeader, Color32, ComboBox, Context, Sense, SidePanel, Ui};
use egui_extras::{Column, TableBuilder};
use tracing::{error, info, warn};

use crate::{
    config::CityLayout,
    gui::canvas::{self, CanvasTransform},
    network::{city::City, route_graph::RouteGraph},
    routing::{SearchMode, SearchOutcome, SearchRequest, search},
};

const DEFAULT_MAX_TARIFF: u64 = 10_000;

pub fn main(graph: RouteGraph, layout: CityLayout) -> eframe::Result {
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Route search",
        native_options,
        Box::new(move |cc| {
            catppuccin_egui::set_theme(&cc.egui_ctx, catppuccin_egui::LATTE);
            Ok(Box::new(App::new(graph, layout)) as Box<dyn eframe::App>)
        }),
    )
}

struct App {
    graph: RouteGraph,
    layout: CityLayout,
    cities: Vec<City>,

    start: City,
    end: City,
    mode: SearchMode,
    max_tariff: u64,

    outcome: Option<SearchOutcome>,
    last_error: Option<String>,
    // Index into outcome.routes; None draws every route
    highlighted: Option<usize>,
}

impl App {
    fn new(graph: RouteGraph, layout: CityLayout) -> Self {
        let cities = graph.cities();
        let start = cities.first().copied().unwrap_or(City::A);
        let end = cities.last().copied().unwrap_or(City::A);
        Self {
            graph,
            layout,
            cities,
            start,
            end,
            mode: SearchMode::default(),
            max_tariff: DEFAULT_MAX_TARIFF,
            outcome: None,
            last_error: None,
            highlighted: None,
        }
    }

    fn request(&self) -> SearchRequest {
        SearchRequest {
            start: self.start,
            end: self.end,
            mode: self.mode,
            max_tariff: self.max_tariff,
        }
    }

    fn run_search(&mut self) {
        let request = self.request();
        info!(?request, "[app] Pressed find route button");
        self.highlighted = None;
        match search(&self.graph, &request) {
            Ok(outcome) => {
                self.outcome = Some(outcome);
                self.last_error = None;
            }
            Err(e) => {
                warn!("Route search failed: {}", e);
                self.outcome = None;
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn render_inputs(&mut self, ui: &mut Ui) {
        CollapsingHeader::new("Search")
            .default_open(true)
            .show(ui, |ui| {
                city_combo(ui, "Start", &mut self.start, &self.cities);
                city_combo(ui, "End", &mut self.end, &self.cities);

                ComboBox::from_label("Method")
                    .selected_text(self.mode.as_str())
                    .show_ui(ui, |ui| {
                        for mode in SearchMode::ALL {
                            ui.selectable_value(&mut self.mode, mode, mode.as_str());
                        }
                    });

                ui.horizontal(|ui| {
                    ui.label("Max tariff");
                    ui.add(
                        egui::DragValue::new(&mut self.max_tariff)
                            .range(0..=1_000_000)
                            .speed(100),
                    );
                });

                if ui.button("Find route").clicked() {
                    self.run_search();
                }
            });
    }

    fn render_results(&mut self, ui: &mut Ui) {
        CollapsingHeader::new("Results")
            .default_open(true)
            .show(ui, |ui| {
                if let Some(message) = &self.last_error {
                    ui.colored_label(Color32::RED, message);
                    return;
                }
                let Some(outcome) = &self.outcome else {
                    ui.label("No search yet");
                    return;
                };

                let summary = outcome.summary_lines();
                if let Some(header) = summary.first() {
                    ui.label(header);
                }
                ui.small(format!(
                    "{} search took {}",
                    outcome.request.mode,
                    humantime::format_duration(outcome.elapsed)
                ));

                if ui.button("Print results as JSON").clicked() {
                    match serde_json::to_string_pretty(outcome) {
                        Ok(json) => println!("{}", json),
                        Err(e) => error!("Error serializing results: {}", e),
                    }
                }

                if outcome.routes.is_empty() {
                    return;
                }

                let mut clicked = None;
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .column(Column::auto().at_least(140.0))
                    .column(Column::auto().at_least(60.0))
                    .column(Column::auto().at_least(60.0))
                    .column(Column::auto().at_least(30.0))
                    .header(20.0, |mut header| {
                        header.col(|ui| {
                            ui.strong("Route");
                        });
                        header.col(|ui| {
                            ui.strong("Distance");
                        });
                        header.col(|ui| {
                            ui.strong("Tariff");
                        });
                        header.col(|ui| {
                            ui.strong("Show");
                        });
                    })
                    .body(|mut body| {
                        for (index, result) in outcome.routes.iter().enumerate() {
                            body.row(22.0, |mut row| {
                                row.col(|ui| {
                                    ui.label(result.path_string());
                                });
                                row.col(|ui| {
                                    ui.label(result.distance.to_string());
                                });
                                row.col(|ui| {
                                    ui.label(result.tariff.to_string());
                                });
                                row.col(|ui| {
                                    let selected = self.highlighted == Some(index);
                                    let response = ui
                                        .selectable_label(selected, "●")
                                        .on_hover_text("Draw only this route");
                                    if response.clicked() {
                                        clicked = Some(index);
                                    }
                                });
                            });
                        }
                    });

                if let Some(index) = clicked {
                    self.highlighted = if self.highlighted == Some(index) {
                        None
                    } else {
                        Some(index)
                    };
                }
            });
    }

    fn render_canvas(&self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, Color32::WHITE);

        let transform = CanvasTransform::fit(self.layout.size, rect);
        canvas::draw_edges(&painter, &transform, &self.graph, &self.layout);

        if let Some(outcome) = &self.outcome {
            let max_tariff = outcome.request.max_tariff;
            match self.highlighted.and_then(|index| outcome.routes.get(index)) {
                Some(result) => canvas::draw_routes(
                    &painter,
                    &transform,
                    &self.layout,
                    [result],
                    max_tariff,
                    4.0,
                ),
                None => canvas::draw_routes(
                    &painter,
                    &transform,
                    &self.layout,
                    &outcome.routes,
                    max_tariff,
                    2.0,
                ),
            }
        }

        canvas::draw_cities(&painter, &transform, &self.layout);
    }

    fn render(&mut self, ctx: &Context) {
        SidePanel::right("right_panel").show(ctx, |ui| {
            self.render_inputs(ui);
            ui.separator();
            self.render_results(ui);
        });

        CentralPanel::default().show(ctx, |ui| self.render_canvas(ui));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        self.render(ctx);
    }
}

fn city_combo(ui: &mut Ui, label: &str, value: &mut City, cities: &[City]) {
    ComboBox::from_label(label)
        .selected_text(value.label())
        .show_ui(ui, |ui| {
            for city in cities {
                ui.selectable_value(value, *city, city.label());
            }
        });
}
