#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

//! Double tap to show the panel, triple tap to hide it, two-finger double tap (or
//! command + double click) for the secondary sheet. Hold the panel to be asked to hide it.
//!
//! Usage: `cargo run --example custom_gestures [options.ron]`, where the file looks like
//! `(window_size: (x: 390.0, y: 844.0), panel: (max_tap_interval: 0.5))`.

use eframe::egui;
use egui_dragable_panel::{PanelOptions, ViewController};

/// Everything the demo reads from its options file.
#[derive(Debug, serde::Deserialize)]
#[serde(default)]
struct DemoOptions {
    /// Initial inner size of the window.
    window_size: egui::Vec2,

    panel: PanelOptions,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            window_size: egui::vec2(390.0, 844.0),
            panel: PanelOptions::default(),
        }
    }
}

struct App {
    controller: ViewController,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.ui(ctx);
    }
}

fn load_options() -> DemoOptions {
    let Some(path) = std::env::args().nth(1) else {
        return DemoOptions::default();
    };
    let parsed = std::fs::read_to_string(&path)
        .map_err(|err| err.to_string())
        .and_then(|text| ron::from_str::<DemoOptions>(&text).map_err(|err| err.to_string()));
    match parsed {
        Ok(options) => {
            log::info!("loaded demo options from {path}");
            options
        }
        Err(err) => {
            log::warn!("failed to load demo options from {path}: {err}; using defaults");
            DemoOptions::default()
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = load_options();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(options.window_size)
            .with_title("egui_dragable_panel: custom gestures"),
        ..Default::default()
    };
    eframe::run_native(
        "egui_dragable_panel: custom gestures",
        native_options,
        Box::new(move |_cc| Ok(Box::new(App {
            controller: ViewController::new(options.panel),
        }))),
    )
}
