// main.rs - Desktop front-end for the bounded Game of Life engine
//
// All simulation state lives in `life_engine::Controller`; this crate only
// draws it and forwards button presses and clicks.

use std::error::Error;

use eframe::egui;
use egui::Color32;
use life_engine::{Controller, LifeConfig};

mod ui;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = LifeConfig::from_env().unwrap_or_else(|err| {
        log::error!("{err}; falling back to the default configuration");
        LifeConfig::default()
    });
    let viewer = LifeViewer::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life with Logic Gates",
        options,
        Box::new(move |_cc| Box::new(viewer)),
    )?;
    Ok(())
}

pub struct LifeViewer {
    pub controller: Controller,
    pub runtime: tokio::runtime::Runtime,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl LifeViewer {
    fn new(config: &LifeConfig) -> Result<Self, Box<dyn Error>> {
        let runtime = tokio::runtime::Runtime::new()?;
        let controller = Controller::from_config(config)?;
        log::info!("grid {}x{}", config.rows, config.cols);
        Ok(Self {
            controller,
            runtime,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
        })
    }

    pub fn toggle_running(&mut self) {
        if self.controller.is_running() {
            self.controller.stop();
        } else {
            self.controller.start(self.runtime.handle());
        }
    }
}
