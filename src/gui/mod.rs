//! Windowed viewer
//!
//! Ties together the window, the animation driver and the presenter. The
//! event loop sleeps until the driver's next deadline, so an idle viewer
//! uses no CPU.

mod input;
mod presenter;

use std::rc::Rc;
use std::time::Instant;

use arboard::Clipboard;
use rand::rngs::StdRng;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::window::{Window, WindowBuilder};

use crate::app::{Animation, Config, Settings};
pub use input::{command_for_key, Command};
use presenter::Presenter;

/// Application state
pub struct App {
    config: Config,
    animation: Animation,
    window: Option<Rc<Window>>,
    presenter: Option<Presenter>,
    clipboard: Option<Clipboard>,
    needs_redraw: bool,
}

impl App {
    /// Create the viewer and draw the first generation
    pub fn new(
        config: Config,
        settings: Settings,
        rng: StdRng,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let animation = Animation::new(
            settings,
            config.surface,
            config.start,
            rng,
            config.colors.ink_rgb(),
        )?;
        Ok(Self {
            config,
            animation,
            window: None,
            presenter: None,
            clipboard: Clipboard::new().ok(),
            needs_redraw: true,
        })
    }

    /// Run the application
    pub fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        let event_loop = EventLoop::new()?;

        let window = WindowBuilder::new()
            .with_title(self.title())
            .with_inner_size(PhysicalSize::new(
                self.config.surface.width,
                self.config.surface.height,
            ))
            .with_resizable(false)
            .build(&event_loop)?;
        let window = Rc::new(window);

        self.presenter = Some(Presenter::new(
            window.clone(),
            self.config.colors.background_rgb(),
        )?);
        self.window = Some(window);

        if self.config.autostart {
            self.animation.start(Instant::now());
        }

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => self.handle_window_event(event, elwt),
            Event::AboutToWait => {
                match self.animation.poll(Instant::now()) {
                    Ok(drawn) => self.needs_redraw |= drawn,
                    Err(e) => {
                        log::error!("Animation failed: {}", e);
                        elwt.exit();
                        return;
                    }
                }

                if self.needs_redraw {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }

                match self.animation.next_deadline() {
                    Some(deadline) => elwt.set_control_flow(ControlFlow::WaitUntil(deadline)),
                    None => elwt.set_control_flow(ControlFlow::Wait),
                }
            }
            _ => {}
        })?;

        Ok(())
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if self.handle_key_input(&event) == Some(Command::Quit) {
                    elwt.exit();
                }
            }
            WindowEvent::Resized(_) => self.needs_redraw = true,
            WindowEvent::RedrawRequested => self.render(),
            _ => {}
        }
    }

    /// Apply the command bound to a pressed key
    fn handle_key_input(&mut self, event: &KeyEvent) -> Option<Command> {
        if event.state != ElementState::Pressed {
            return None;
        }
        let command = command_for_key(&event.logical_key)?;
        let now = Instant::now();
        let surface = self.config.surface;

        let result = match command {
            Command::Toggle => {
                self.animation.toggle(now);
                Ok(())
            }
            Command::Reset => self.animation.reset(),
            Command::SingleCell => self.animation.single_cell(),
            Command::Faster => {
                let speed = self.animation.settings().speed.faster();
                self.animation.set_speed(speed, now);
                Ok(())
            }
            Command::Slower => {
                let speed = self.animation.settings().speed.slower();
                self.animation.set_speed(speed, now);
                Ok(())
            }
            Command::LargerCells | Command::SmallerCells => {
                let current = self.animation.settings().cell_size;
                let larger = command == Command::LargerCells;
                match surface.step_cell_size(current, larger) {
                    Some(size) => self.animation.set_cell_size(size),
                    None => Ok(()),
                }
            }
            Command::NextRule => {
                let rule = self.animation.settings().rule.next();
                self.animation.set_rule(rule);
                Ok(())
            }
            Command::PreviousRule => {
                let rule = self.animation.settings().rule.previous();
                self.animation.set_rule(rule);
                Ok(())
            }
            Command::CopyLink => {
                self.copy_link();
                Ok(())
            }
            Command::Quit => Ok(()),
        };
        if let Err(e) = result {
            log::warn!("{:?} failed: {}", command, e);
        }

        if let Some(window) = &self.window {
            window.set_title(&self.title());
        }
        self.needs_redraw = true;
        Some(command)
    }

    fn copy_link(&mut self) {
        let Some(clipboard) = &mut self.clipboard else {
            log::warn!("Clipboard not available");
            return;
        };
        let link = self.config.share_link(&self.animation.preset());
        match clipboard.set_text(link.clone()) {
            Ok(()) => log::info!("Copied {}", link),
            Err(e) => log::warn!("Failed to copy preset link: {}", e),
        }
    }

    fn title(&self) -> String {
        let settings = self.animation.settings();
        format!(
            "Rule {} (0b{}, 0x{}) | {} gen/s | {}px{}",
            settings.rule,
            settings.rule.to_binary(),
            settings.rule.to_hex(),
            settings.speed,
            settings.cell_size,
            if self.animation.is_running() { "" } else { " | paused" }
        )
    }

    fn render(&mut self) {
        let (Some(window), Some(presenter)) = (&self.window, &mut self.presenter) else {
            return;
        };
        let size = window.inner_size();
        if let Err(e) = presenter.present(
            self.animation.renderer().surface(),
            size.width,
            size.height,
        ) {
            log::error!("Render error: {}", e);
        }
        self.needs_redraw = false;
    }
}
