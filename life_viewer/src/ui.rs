// ui.rs - Controls, pattern buttons and the clickable cell grid

use std::time::Duration;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_engine::PATTERNS;

use crate::LifeViewer;

const BOX_SIZE: f32 = 15.0;
const SPACING: f32 = 1.0;

impl eframe::App for LifeViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life with Logic Gates");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.controller.is_running() { "⏸ Stop" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.controller.with_simulation(|sim| sim.clear());
                }

                if ui.button("🎲 Random").clicked() {
                    self.controller.with_simulation(|sim| sim.randomize());
                }

                if ui.button("⏭ Step").clicked() {
                    self.controller.with_simulation(|sim| sim.step());
                }
            });

            // One button per catalog pattern
            ui.horizontal_wrapped(|ui| {
                for pattern in PATTERNS {
                    if ui.button(pattern.label).on_hover_text(pattern.description).clicked() {
                        self.controller.with_simulation(|sim| sim.load_pattern(pattern.name));
                    }
                }
            });

            ui.separator();

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.controller.step_interval().as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                    self.controller.set_step_interval(Duration::from_millis((1000.0 / speed) as u64));
                    if self.controller.is_running() {
                        // Restart so the new interval applies right away.
                        self.controller.stop();
                        self.controller.start(self.runtime.handle());
                    }
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            let (grid, generation) = self.controller.snapshot();
            ui.label(format!("Generation: {generation}"));

            ui.separator();

            let pitch = BOX_SIZE + SPACING;
            let total_size = Vec2::new(
                pitch * grid.cols() as f32 - SPACING,
                pitch * grid.rows() as f32 - SPACING,
            );
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, Color32::from_gray(200));

            for row in 0..grid.rows() {
                for (col, &alive) in grid[row].iter().enumerate() {
                    let rect = Rect::from_min_size(
                        origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                        Vec2::splat(BOX_SIZE),
                    );
                    let cell_color = if alive { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 1.0, cell_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(160)));
                }
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - origin;
                    let (row, col) = ((offset.y / pitch) as usize, (offset.x / pitch) as usize);
                    if let Err(err) = self.controller.with_simulation(|sim| sim.toggle_cell(row, col)) {
                        log::warn!("ignoring click: {err}");
                    }
                }
            }

            ui.separator();

            let live_cells = grid.population();
            let total = grid.rows() * grid.cols();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });

            ui.separator();

            ui.label(
                "Logic Gates in Game of Life: These patterns represent simplified \
                 versions of logic circuit elements.",
            );
            for pattern in PATTERNS.iter().skip(2) {
                ui.label(format!("{}: {}", pattern.label, pattern.description));
            }
        });

        if self.controller.is_running() {
            ctx.request_repaint_after(self.controller.step_interval());
        }
    }
}
