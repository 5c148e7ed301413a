//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{status_bar, toolbar};
use crate::viewport::CanvasPanel;

/// Main application
pub struct PolydrawApp {
    state: AppState,
    canvas: CanvasPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl PolydrawApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::default();

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);
        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            canvas: CanvasPanel::new(),
            last_font_size,
        }
    }
}

impl eframe::App for PolydrawApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        let pointer_down = ctx.input(|i| i.pointer.any_down());
        if self.state.take_settings_save(pointer_down) {
            self.state.settings.save();
        }

        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::edit_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
            });

        // ── Status bar ───────────────────────────────────────
        if self.state.settings.ui.status_bar {
            egui::TopBottomPanel::bottom("status_bar")
                .exact_height(22.0)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style())
                        .inner_margin(egui::Margin::symmetric(8, 2)),
                )
                .show(ctx, |ui| {
                    status_bar::show(ui, &self.state);
                });
        }

        // ── Central panel: drawing surface ───────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.canvas.show(ui, &mut self.state);
            });
    }
}
