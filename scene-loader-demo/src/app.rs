//! The showcase scene: three buttons, each revealing a different loader.

use std::time::{Duration, Instant};

use log::info;
use scene_loader::{
    paint, AnimationDescriptor, Buffer, Color, ConfigError, Element, LoaderProps, SceneLoader,
    Style, Technique, Viewport,
};

/// How long a loader stays up after its button is pressed.
const SHOW_FOR: Duration = Duration::from_secs(3);

const FADE_DESCRIPTOR: &str = r#"{"fade": {"timing": {"duration": 1000, "easing": "circle"}}}"#;

struct Slot {
    key: char,
    label: &'static str,
    loader: SceneLoader,
    hide_at: Option<Instant>,
    tree: Option<Element>,
}

pub struct DemoApp {
    viewport: Viewport,
    background: Color,
    slots: Vec<Slot>,
    started: Instant,
}

impl DemoApp {
    pub fn new(viewport: Viewport) -> Result<Self, ConfigError> {
        let default_loader = SceneLoader::new(LoaderProps::new(false).id("default"), viewport)?;

        let fading_loader = SceneLoader::new(
            LoaderProps::new(false)
                .id("fading")
                .animation(AnimationDescriptor::from_json_str(FADE_DESCRIPTOR)?),
            viewport,
        )?;

        let custom_loader = SceneLoader::new(
            LoaderProps::new(false)
                .id("custom")
                .animation(AnimationDescriptor::top(Technique::spring(15.0)))
                .custom_underlay(|_| {
                    Element::pattern('╱').style(
                        Style::new()
                            .bg(Color::rgb(58, 36, 24))
                            .fg(Color::rgb(120, 78, 50)),
                    )
                })
                .custom_indicator(|| {
                    Element::text(LOADER_ART)
                        .style(Style::new().fg(Color::rgb(255, 174, 120)).bold())
                })
                .on_in_animation_start(|| info!("custom loader: falling in"))
                .on_in_animation_end(|| info!("custom loader: landed"))
                .on_out_animation_start(|| info!("custom loader: leaving"))
                .on_out_animation_end(|| info!("custom loader: gone")),
            viewport,
        )?;

        let slots = vec![
            Slot::new('1', "Default ActivityIndicator", default_loader),
            Slot::new('2', "Fading ActivityIndicator", fading_loader),
            Slot::new('3', "Falling custom loader", custom_loader),
        ];

        Ok(Self {
            viewport,
            background: Color::rgb(255, 174, 120),
            slots,
            started: Instant::now(),
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Handle a key press. Returns false if the key is not a button.
    pub fn press(&mut self, key: char, now: Instant) -> bool {
        let Some(slot) = self.slots.iter_mut().find(|s| s.key == key) else {
            return false;
        };
        info!("button '{}' pressed", slot.label);
        slot.loader.set_visible(true);
        slot.hide_at = Some(now + SHOW_FOR);
        true
    }

    /// Advance timers and animations by one frame.
    pub fn update(&mut self, now: Instant, dt: Duration) {
        for slot in &mut self.slots {
            if slot.hide_at.is_some_and(|at| now >= at) {
                slot.hide_at = None;
                slot.loader.set_visible(false);
            }

            slot.loader.tick(dt);

            if slot.loader.should_update() {
                slot.tree = slot.loader.render();
            }
        }
    }

    /// True while something on screen moves on its own.
    pub fn is_busy(&self) -> bool {
        self.slots.iter().any(|s| s.loader.is_mounted())
    }

    pub fn draw(&self, now: Instant) -> Buffer {
        let mut buf = Buffer::new(
            self.viewport.width,
            self.viewport.height,
            self.background.to_rgb(),
        );

        let area = self.viewport.rect();
        let elapsed = now.duration_since(self.started);
        paint(&self.scene(), area, &mut buf, elapsed);

        for tree in self.slots.iter().filter_map(|s| s.tree.as_ref()) {
            paint(tree, area, &mut buf, elapsed);
        }
        buf
    }

    fn scene(&self) -> Element {
        let mut lines: Vec<String> = self
            .slots
            .iter()
            .map(|s| format!("[ {} ]  {}", s.key, s.label))
            .collect();
        lines.push(String::new());
        lines.push("q to quit".to_string());

        Element::text(lines.join("\n\n"))
            .style(Style::new().fg(Color::rgb(30, 20, 10)))
    }
}

impl Slot {
    fn new(key: char, label: &'static str, loader: SceneLoader) -> Self {
        Self {
            key,
            label,
            loader,
            hide_at: None,
            tree: None,
        }
    }
}

const LOADER_ART: &str = "\
 .-------------.
 |  LOADING... |
 |   _     _   |
 |  (o)   (o)  |
 |      ^      |
 |    \\___/    |
 '-------------'";
