use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(match crossterm::event::read()? {
                // Windows reports key releases as well
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            });
        }

        // No pending input: yield to background tasks and report a tick
        tokio::time::sleep(TICK_RATE).await;
        Ok(EventType::Tick)
    }
}
