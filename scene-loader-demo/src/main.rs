mod app;
mod terminal;

use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEventKind};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use app::DemoApp;
use terminal::Terminal;

/// Poll interval while a loader is on screen.
const FRAME: Duration = Duration::from_millis(16);
/// Poll interval while idle.
const IDLE: Duration = Duration::from_millis(250);

fn main() -> io::Result<()> {
    let log_file = File::create("scene-loader-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let mut app = DemoApp::new(term.viewport()?).map_err(io::Error::other)?;
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        app.update(now, now.duration_since(last));
        last = now;
        term.draw(app.draw(now))?;

        let timeout = if app.is_busy() { FRAME } else { IDLE };
        for event in term.poll(timeout)? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(c) => {
                        app.press(c, Instant::now());
                    }
                    _ => {}
                },
                Event::Resize(width, height) => {
                    let viewport = term.viewport()?;
                    if viewport != app.viewport() {
                        // Bounds derive from the viewport, so loaders are rebuilt.
                        info!("resized to {width}x{height}");
                        app = DemoApp::new(viewport).map_err(io::Error::other)?;
                    }
                }
                _ => {}
            }
        }
    }
}
