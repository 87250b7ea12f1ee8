//! # Assistant Session Module
//!
//! Conversational mini-chat that records expenses on the user's behalf.
//!
//! ## Responsibilities:
//! - Append-only turn log for the life of a conversation
//! - Single in-flight request at a time (a second send is rejected, never
//!   queued)
//! - Scheduling the automatic log clear after an assistant-created expense
//! - Optional voice capture that always resolves back to idle
//!
//! The collection reload an `ExpenseCreated` reply triggers belongs to the
//! coordinator; this module owns only the conversation itself.

use std::time::Duration;

use log::{info, warn};
use shared::ChatMessage;

use crate::effects::Effect;

/// Delay before an assistant-created expense clears the chat log.
pub const CHAT_CLEAR_DELAY: Duration = Duration::from_secs(5);

/// Conversation state for the assistant mini-chat.
#[derive(Debug)]
pub struct ChatSession {
    /// Ordered turn log, oldest first
    pub turns: Vec<ChatMessage>,

    /// Whether a chat request is in flight
    pub in_flight: bool,

    /// Whether speech recognition is currently capturing
    pub recording: bool,

    /// Fixed at construction: the host environment exposes speech
    /// recognition. Absence just disables the voice affordance.
    speech_supported: bool,

    /// Invalidates scheduled auto-clears: only the generation current at
    /// schedule time may clear the log.
    clear_generation: u64,
}

impl ChatSession {
    pub fn new(speech_supported: bool) -> Self {
        Self {
            turns: Vec::new(),
            in_flight: false,
            recording: false,
            speech_supported,
            clear_generation: 0,
        }
    }

    pub fn speech_supported(&self) -> bool {
        self.speech_supported
    }

    /// Send a message to the assistant.
    ///
    /// Blank input and sends while a request is in flight are rejected: no
    /// turn is appended and no request is issued. The dispatched history is
    /// the log as it stood before this message.
    pub fn send(&mut self, text: &str) -> Vec<Effect> {
        let message = text.trim();
        if message.is_empty() {
            return Vec::new();
        }
        if self.in_flight {
            info!("💬 Rejecting send: a request is already in flight");
            return Vec::new();
        }

        // A newer message always outlives a previously scheduled auto-clear.
        self.clear_generation += 1;

        let history = self.turns.clone();
        self.turns.push(ChatMessage::user(message));
        self.in_flight = true;
        info!("💬 Dispatching chat message ({} prior turns)", history.len());

        vec![Effect::SendChatMessage {
            message: message.to_string(),
            history,
        }]
    }

    /// Record the assistant's reply and release the in-flight slot.
    pub fn complete(&mut self, reply: String) {
        self.turns.push(ChatMessage::assistant(reply));
        self.in_flight = false;
    }

    /// Record a transport failure as an assistant-authored turn (already
    /// localized by the caller) and release the in-flight slot. The failure
    /// is scoped to this exchange, so it lives in the conversation rather
    /// than in a global toast.
    pub fn fail(&mut self, error_text: String) {
        warn!("💬 Chat request failed, surfacing in-conversation");
        self.turns.push(ChatMessage::assistant(error_text));
        self.in_flight = false;
    }

    /// Schedule the automatic clear that follows an assistant-created
    /// expense. Returns the effect the host turns into a timer.
    pub fn schedule_clear(&mut self) -> Effect {
        self.clear_generation += 1;
        Effect::ScheduleChatClear {
            generation: self.clear_generation,
            delay: CHAT_CLEAR_DELAY,
        }
    }

    /// A scheduled clear elapsed. Only the generation current at schedule
    /// time clears; anything older was invalidated by a newer send.
    pub fn on_clear_elapsed(&mut self, generation: u64) {
        if generation == self.clear_generation {
            self.clear();
        } else {
            info!("💬 Ignoring stale chat auto-clear");
        }
    }

    /// Drop the turn log. The in-flight flag is left alone: a pending
    /// request still settles normally and keeps the session serialized.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Toggle voice capture. No-op without the speech capability, and while
    /// a chat request is in flight.
    pub fn toggle_voice(&mut self) -> Vec<Effect> {
        if !self.speech_supported || self.in_flight {
            return Vec::new();
        }
        if self.recording {
            vec![Effect::StopVoiceCapture]
        } else {
            vec![Effect::StartVoiceCapture]
        }
    }

    /// Speech recognition actually started capturing.
    pub fn on_voice_started(&mut self) {
        self.recording = true;
    }

    /// A recognized utterance: submitted exactly as if typed.
    pub fn on_voice_result(&mut self, transcript: &str) -> Vec<Effect> {
        self.recording = false;
        self.send(transcript)
    }

    /// Recognition failed; recording never stays stuck on.
    pub fn on_voice_error(&mut self) {
        self.recording = false;
    }

    /// Recognition ended (explicit stop or natural end).
    pub fn on_voice_ended(&mut self) {
        self.recording = false;
    }
}
