// ui.rs - egui front end for the viewer

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::Viewer;
use conway::patterns;

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.random_pattern();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.sim.generation()));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();
            ui.label("Click cells to toggle them while paused. Press Q to quit.");
            ui.separator();

            let width = self.sim.width();
            let height = self.sim.height();
            let available = ui.available_size();
            let spacing = 0.5;
            let box_size = (available.x / width as f32)
                .min(available.y / height as f32)
                .clamp(2.0, 15.0)
                - spacing;

            let total_size = Vec2::new(
                (box_size + spacing) * width as f32 - spacing,
                (box_size + spacing) * height as f32 - spacing,
            );
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let start_pos = response.rect.min;

            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            let grid = self.sim.current();
            for (y, row) in grid.rows().enumerate() {
                for (x, cell) in row.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        egui::pos2(
                            start_pos.x + x as f32 * (box_size + spacing),
                            start_pos.y + y as f32 * (box_size + spacing),
                        ),
                        Vec2::splat(box_size),
                    );
                    let color = if cell.is_alive() { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 1.0, color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - start_pos;
                    let x = (local.x / (box_size + spacing)).floor();
                    let y = (local.y / (box_size + spacing)).floor();
                    if x >= 0.0 && y >= 0.0 {
                        self.toggle_cell(x as usize, y as usize);
                    }
                }
            }

            ui.separator();

            let live_cells = self.sim.current().population();
            let total = width * height;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    live_cells as f32 / total as f32 * 100.0
                ));
            });
        });

        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}
