//! The main loop: render, then wait for input, a timer, or the next frame.

use std::time::Instant;

use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures::StreamExt;
use log::{debug, error, info, trace};
use tokio::time::{MissedTickBehavior, interval, sleep_until};

use crate::app::App;
use crate::error::AppError;
use crate::settings::Settings;
use crate::terminal::TerminalGuard;
use crate::theme::Theme;
use crate::view::{self, Layout};

/// Sleep until a deadline, or wait forever if None.
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

pub async fn run(settings: &Settings) -> Result<(), AppError> {
    let mut terminal = TerminalGuard::new()?;
    let theme = Theme::new();
    let mut app = App::new(settings.choices_config());
    let mut events = EventStream::new();

    let mut frames = interval(settings.frame_duration());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        "[loop] started, {} fps, reduced motion {}",
        settings.animation_fps, settings.reduced_motion
    );

    loop {
        let now = Instant::now();
        let (width, height) = crossterm::terminal::size()?;
        let layout = Layout::compute(&app, width, height);

        app.tick(&layout, now);
        terminal.draw(|buffer| view::render(&app, &layout, &theme, buffer, now))?;

        if app.should_quit() {
            info!("[loop] quit requested");
            break;
        }

        let deadline = app.next_deadline(now);
        let animating = app.is_animating(now);

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(CrosstermEvent::Resize(width, height))) => {
                    debug!("[loop] resize {}x{}", width, height);
                    let layout = Layout::compute(&app, width, height);
                    app.on_resize(&layout, Instant::now());
                }
                Some(Ok(event)) => {
                    trace!("[loop] event {:?}", event);
                    app.on_event(event, &layout, Instant::now());
                }
                Some(Err(e)) => error!("[loop] event stream error: {}", e),
                None => {
                    info!("[loop] event stream closed");
                    break;
                }
            },
            _ = sleep_until_optional(deadline) => trace!("[loop] deadline reached"),
            _ = frames.tick(), if animating => {}
        }
    }

    Ok(())
}
