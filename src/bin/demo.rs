//! 演示程序 - 可拖动窗口中放一个水果蔬菜列表
//!
//! 用法: mini-widgets-demo [content.txt] [--config demo.json] [--assets dir] [--font font.ttf]

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use mini_widgets::assets::AssetBundle;
use mini_widgets::config::{DemoConfig, WindowConfig};
use mini_widgets::event::{Event, MouseButton, Pointer};
use mini_widgets::ui::{MoveWindow, RelativeRect, ScrollWindow, Widget, WidgetEvent};
use mini_widgets::{Color, FontRenderer, Point, Rect, Surface};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

const SAMPLE_CONTENT: &[&str] = &[
    "Apple", "Apricot", "Artichoke", "Asparagus", "Avocado", "Banana", "Beetroot",
    "Blackberry", "Blueberry", "Broccoli", "Brussels Sprout", "Cabbage", "Cantaloupe",
    "Carrot", "Cauliflower", "Celery", "Cherry", "Coconut", "Cucumber", "Date",
    "Eggplant", "Fig", "Garlic", "Grape", "Grapefruit", "Kale", "Kiwi", "Leek",
    "Lemon", "Lettuce", "Lime", "Mango", "Nectarine", "Okra", "Onion", "Orange",
    "Papaya", "Parsnip", "Peach", "Pear", "Pepper", "Pineapple", "Plum", "Potato",
    "Pumpkin", "Radish", "Raspberry", "Spinach", "Strawberry", "Tomato", "Turnip",
    "Watermelon", "Zucchini",
];

#[derive(Default)]
struct Args {
    content: Option<PathBuf>,
    config: Option<PathBuf>,
    assets: Option<PathBuf>,
    font: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut args = Args::default();
        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            let mut value = |flag: &str| iter.next().map(PathBuf::from).ok_or(format!("{flag} needs a value"));
            match arg.as_str() {
                "--config" => args.config = Some(value("--config")?),
                "--assets" => args.assets = Some(value("--assets")?),
                "--font" => args.font = Some(value("--font")?),
                other if other.starts_with("--") => return Err(format!("unknown flag {other}")),
                _ => args.content = Some(PathBuf::from(&arg)),
            }
        }
        Ok(args)
    }
}

struct DemoApp {
    window: Option<Arc<Window>>,
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    config: WindowConfig,
    screen: Surface,
    root: MoveWindow,
    pointer: Pointer,
    last_frame: Instant,
}

impl DemoApp {
    fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.config.fps.max(1) as f64)
    }

    fn dispatch(&mut self, event: Event) {
        self.pointer.track(&event);
        if let Some(WidgetEvent::Selected(item)) = self.root.dispatch_event(&event) {
            log::info!("selected: {}", item);
        }
    }

    fn render(&mut self) {
        self.screen.fill(self.config.clear_color);
        self.root.update(&mut self.screen, &self.pointer);
    }

    fn present(&mut self) {
        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else { return };
        let size = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return;
        };
        if let Err(e) = surface.resize(width, height) {
            log::warn!("surface resize failed: {e}");
            return;
        }
        match surface.buffer_mut() {
            Ok(mut buffer) => {
                buffer.fill(0);
                self.screen.present_to_buffer(&mut buffer, size.width, size.height);
                if let Err(e) = buffer.present() {
                    log::warn!("present failed: {e}");
                }
            }
            Err(e) => log::warn!("buffer unavailable: {e}"),
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(self.config.resizable);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        let surface = softbuffer::Context::new(window.clone())
            .and_then(|context| softbuffer::Surface::new(&context, window.clone()));
        match surface {
            Ok(surface) => self.surface = Some(surface),
            Err(e) => {
                log::error!("failed to create softbuffer surface: {e}");
                event_loop.exit();
                return;
            }
        }
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                {
                    event_loop.exit();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let pos = Point::new(position.x as i32, position.y as i32);
                self.dispatch(Event::PointerMotion { pos });
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Middle => MouseButton::Middle,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    winit::event::MouseButton::Back => MouseButton::Other(8),
                    winit::event::MouseButton::Forward => MouseButton::Other(9),
                    winit::event::MouseButton::Other(id) => MouseButton::Other(id.min(255) as u8),
                };
                let pos = self.pointer.position();
                let event = match state {
                    ElementState::Pressed => Event::PointerDown { button, pos },
                    ElementState::Released => Event::PointerUp { button, pos },
                };
                self.dispatch(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32,
                };
                if dy == 0.0 {
                    return;
                }
                // 滚轮按按键 4/5 的按下加抬起派发
                let button = if dy > 0.0 { MouseButton::WheelUp } else { MouseButton::WheelDown };
                let pos = self.pointer.position();
                self.dispatch(Event::PointerDown { button, pos });
                self.dispatch(Event::PointerUp { button, pos });
            }

            WindowEvent::RedrawRequested => {
                self.render();
                self.present();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let next = self.last_frame + self.frame_duration();
        if Instant::now() >= next {
            self.last_frame = Instant::now();
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.last_frame + self.frame_duration()));
    }
}

fn default_config() -> DemoConfig {
    let mut config = DemoConfig::default();
    config.move_window.text = Some("Fruits and Vegetables".to_string());
    config.move_window.text_color = Color::WHITE;
    config
}

fn load_content(path: Option<&PathBuf>) -> std::io::Result<Vec<String>> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?
            .lines()
            .map(|line| line.trim().to_string())
            .collect()),
        None => Ok(SAMPLE_CONTENT.iter().map(|s| s.to_string()).collect()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse()?;
    let config = match &args.config {
        Some(path) => DemoConfig::from_file(path)?,
        None => default_config(),
    };

    let mut assets = AssetBundle::builtin();
    if let Some(dir) = &args.assets {
        let loaded = assets.extend_from_dir(dir)?;
        log::info!("loaded {} assets from {}", loaded, dir.display());
    }

    let font = match &args.font {
        Some(path) => FontRenderer::from_file(path, config.window.font_size)?,
        None => FontRenderer::load_system_font(config.window.font_size)?,
    };

    let content = load_content(args.content.as_ref())?;
    log::info!("{} content items", content.len());

    let win_rect = RelativeRect::root(Rect::new(50, 50, 200, 300));
    let mut root = MoveWindow::new(win_rect.clone(), Some(&font), &assets, config.move_window.clone())?;
    let list_rect = RelativeRect::child_of(Rect::new(25, 45, 150, 230), &win_rect);
    let list = ScrollWindow::new(list_rect, content, &font, &assets, config.scroll_window.clone())?;
    root.add_child(Box::new(list));

    let screen = Surface::new(config.window.width, config.window.height);
    let mut app = DemoApp {
        window: None,
        surface: None,
        config: config.window,
        screen,
        root,
        pointer: Pointer::new(),
        last_frame: Instant::now(),
    };

    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
