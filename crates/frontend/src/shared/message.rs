//! Transient success/error banner shared by every page.
//!
//! There is a single slot: showing a message replaces the current one and
//! restarts its dismiss timer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// Slot contents plus a generation counter so that a stale timer cannot
/// dismiss a newer message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageSlot {
    current: Option<(u64, Message)>,
    generation: u64,
}

impl MessageSlot {
    pub fn show(&mut self, message: Message) -> u64 {
        self.generation += 1;
        self.current = Some((self.generation, message));
        self.generation
    }

    /// Clear the slot if it still holds the message of `generation`
    pub fn dismiss(&mut self, generation: u64) -> bool {
        match &self.current {
            Some((g, _)) if *g == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref().map(|(_, m)| m)
    }
}

#[derive(Clone, Copy)]
pub struct MessageCenter {
    slot: RwSignal<MessageSlot>,
    ttl_ms: u32,
}

impl MessageCenter {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(MessageSlot::default()),
            ttl_ms,
        }
    }

    pub fn show(&self, message: Message) {
        let mut generation = 0;
        self.slot.update(|s| generation = s.show(message));
        let slot = self.slot;
        let ttl = self.ttl_ms;
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            slot.try_update(|s| s.dismiss(generation));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(Message::success(text));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(Message::error(text));
    }

    pub fn clear(&self) {
        self.slot.update(|s| s.clear());
    }

    pub fn current(&self) -> Option<Message> {
        self.slot.with(|s| s.current().cloned())
    }
}

/// Message center from context; falls back to a private one so that
/// components stay usable in isolation.
pub fn use_messages() -> MessageCenter {
    use_context::<MessageCenter>().unwrap_or_else(|| MessageCenter::new(5_000))
}

#[component]
pub fn MessageBanner() -> impl IntoView {
    let messages = use_messages();

    view! {
        {move || messages.current().map(|m| {
            let class = match m.kind {
                MessageKind::Success => "alert alert--success",
                MessageKind::Error => "alert alert--error",
            };
            view! {
                <div class=class role="status">
                    <span>{m.text}</span>
                    <button class="alert__close" on:click=move |_| messages.clear()>
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_replaces_old() {
        let mut slot = MessageSlot::default();
        slot.show(Message::success("Saved"));
        slot.show(Message::error("Operation failed"));
        assert_eq!(slot.current(), Some(&Message::error("Operation failed")));
    }

    #[test]
    fn test_stale_timer_keeps_newer_message() {
        let mut slot = MessageSlot::default();
        let first = slot.show(Message::success("Saved"));
        let second = slot.show(Message::success("Deleted"));
        assert!(!slot.dismiss(first));
        assert_eq!(slot.current().map(|m| m.text.as_str()), Some("Deleted"));
        assert!(slot.dismiss(second));
        assert!(slot.current().is_none());
    }
}
