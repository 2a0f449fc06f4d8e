//! Scripted multi-slider demo.
//!
//! Usage: `multislider-demo [config.json]`
//!
//! Loads a demo config (or uses defaults), drags one handle across the track
//! the way a host event loop would, logs every notification, and prints the
//! draw commands of the final frame.

use std::path::Path;

use serde::{Deserialize, Serialize};

use multislider::{
    ConfigError, DrawList, Event, LogLevel, MouseButton, MultiSlider, Point, Rectangle,
    SliderConfig,
};

/// Demo settings, loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DemoConfig {
    #[serde(default)]
    slider: SliderConfig,

    /// Initial handle values
    #[serde(default = "default_values")]
    values: Vec<f32>,

    /// Widget width in pixels
    #[serde(default = "default_width")]
    width: f32,

    #[serde(default)]
    log_level: LogLevel,
}

fn default_values() -> Vec<f32> {
    vec![0.2, 0.5, 0.8]
}

fn default_width() -> f32 {
    400.0
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            slider: SliderConfig::default(),
            values: default_values(),
            width: default_width(),
            log_level: LogLevel::default(),
        }
    }
}

impl DemoConfig {
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.slider.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone)]
enum Message {
    DragStarted(Vec<f32>),
    Changed(Vec<f32>),
    DragEnded(Vec<f32>),
}

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match DemoConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => DemoConfig::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    if let Err(e) = run(config) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(config: DemoConfig) -> Result<(), ConfigError> {
    let bounds = Rectangle::new(0.0, 0.0, config.width, config.slider.height);
    let mut slider = MultiSlider::new(config.slider, config.values)?
        .on_drag_start(Message::DragStarted)
        .on_change(Message::Changed)
        .on_drag_end(Message::DragEnded);

    if !slider.is_interactive(bounds) {
        log::warn!("Slider is disabled for these bounds; the gesture will be ignored");
    }

    // Grab the handle nearest the middle and sweep it to the right edge
    let space = slider.value_space(bounds);
    let y = bounds.center_y();
    let middle = (slider.config().min + slider.config().max) / 2.0;
    let start_x = space.value_to_pixel(middle);
    let end_x = space.track_end() + 20.0;

    let mut events = vec![Event::PointerPressed {
        button: MouseButton::Left,
        position: Point::new(start_x, y),
    }];
    for step in 1..=8 {
        let x = start_x + (end_x - start_x) * step as f32 / 8.0;
        events.push(Event::PointerMoved {
            position: Point::new(x, y),
        });
    }
    events.push(Event::PointerReleased {
        button: MouseButton::Left,
        position: Point::new(end_x, y),
    });

    for event in &events {
        for message in slider.on_event(event, bounds) {
            let values = match &message {
                Message::DragStarted(v) | Message::Changed(v) | Message::DragEnded(v) => v,
            };
            log::info!("{:?}", message);
            slider.set_values(values)?;
        }
    }

    let mut frame = DrawList::new();
    slider.draw(&mut frame, bounds);
    println!("Final values: {:?}", slider.values());
    for command in frame.commands() {
        println!("{:?}", command);
    }
    Ok(())
}
