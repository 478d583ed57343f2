use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures::StreamExt as _;
use tokio::time::sleep;

/// Future returned by [`InputEventSource::next_event`]
pub type EventFuture<'src> = Pin<Box<dyn Future<Output = io::Result<Option<Event>>> + Send + 'src>>;

/// Abstraction over the input event source used by the TUI.
///
/// `Ok(None)` means the source is exhausted and the form should close.
pub trait InputEventSource: Send {
    /// Waits for the next input event.
    fn next_event(&mut self) -> EventFuture<'_>;
}

/// Default event source backed by crossterm's async event stream.
pub struct CrosstermEventSource {
    stream: EventStream,
}

impl CrosstermEventSource {
    /// Creates a source reading from the process terminal
    pub fn new() -> Self {
        Self {
            stream: EventStream::new(),
        }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> EventFuture<'_> {
        Box::pin(async move { self.stream.next().await.transpose() })
    }
}

/// One step of a scripted input session
#[derive(Debug, Clone)]
pub enum ScriptedInput {
    /// Deliver this event
    Event(Event),
    /// Wait before delivering the next event
    Pause(Duration),
}

/// Replays a fixed list of inputs, then reports exhaustion.
#[derive(Debug, Default)]
pub struct ScriptedEventSource {
    script: VecDeque<ScriptedInput>,
}

impl ScriptedEventSource {
    /// Appends typing `text` one character at a time
    #[must_use]
    pub fn typed(mut self, text: &str) -> Self {
        self.script.extend(
            text.chars()
                .map(|character| ScriptedInput::Event(key_event(KeyCode::Char(character), KeyModifiers::NONE))),
        );
        self
    }

    /// Appends a key press
    #[must_use]
    pub fn key(mut self, code: KeyCode, modifiers: KeyModifiers) -> Self {
        self.script
            .push_back(ScriptedInput::Event(key_event(code, modifiers)));
        self
    }

    /// Appends a pause
    #[must_use]
    pub fn pause(mut self, duration: Duration) -> Self {
        self.script.push_back(ScriptedInput::Pause(duration));
        self
    }
}

impl InputEventSource for ScriptedEventSource {
    fn next_event(&mut self) -> EventFuture<'_> {
        Box::pin(async move {
            while let Some(step) = self.script.pop_front() {
                match step {
                    ScriptedInput::Event(event) => return Ok(Some(event)),
                    ScriptedInput::Pause(duration) => sleep(duration).await,
                }
            }
            Ok(None)
        })
    }
}

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_source_replays_then_exhausts() {
        let mut source = ScriptedEventSource::default()
            .typed("ab")
            .pause(Duration::from_millis(1))
            .key(KeyCode::Enter, KeyModifiers::NONE);

        let mut codes = Vec::new();
        while let Some(Event::Key(key)) = source.next_event().await.unwrap() {
            codes.push(key.code);
        }

        assert_eq!(
            codes,
            vec![KeyCode::Char('a'), KeyCode::Char('b'), KeyCode::Enter]
        );
        assert!(source.next_event().await.unwrap().is_none());
    }
}
