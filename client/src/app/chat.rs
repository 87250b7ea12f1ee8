//! # Assistant Wiring
//!
//! Connects the chat session to the rest of the screen: an assistant-created
//! expense reloads the current page (the new record may not even land on the
//! viewed page or period, so pagination is left alone) and schedules the
//! conversation's auto-clear.

use anyhow::Result;
use log::info;
use shared::{ChatResponse, ChatResponseKind};

use super::ExpenseListApp;
use crate::effects::Effect;
use crate::error::ClientError;
use crate::notifications::Notification;

impl ExpenseListApp {
    /// Send a chat message. Blank input and sends while a request is in
    /// flight are rejected by the session itself.
    pub fn send_chat_message(&mut self, text: &str) -> Vec<Effect> {
        self.chat.send(text)
    }

    /// The assistant replied or the transport failed.
    pub fn on_chat_response(&mut self, result: Result<ChatResponse>) -> Vec<Effect> {
        if self.is_torn_down() {
            return Vec::new();
        }
        match result {
            Ok(response) => {
                let created = response.kind == ChatResponseKind::ExpenseCreated;
                self.chat.complete(response.message);
                if !created {
                    return Vec::new();
                }

                info!("💬 Assistant created an expense, reloading the list");
                let mut effects = vec![Effect::Notify(Notification::success(
                    "toast.aiExpenseCreated",
                ))];
                effects.extend(self.store.reload());
                effects.push(self.chat.schedule_clear());
                effects
            }
            Err(error) => {
                // Scoped to the exchange: the failure lives in the
                // conversation, never as a global toast, and the expense
                // collection is left untouched.
                let text = self.translator().translate("ai.error");
                self.chat.fail(text);
                self.last_error = Some(ClientError::Assistant(error));
                Vec::new()
            }
        }
    }

    /// A scheduled chat auto-clear elapsed.
    pub fn on_chat_clear_elapsed(&mut self, generation: u64) {
        if self.is_torn_down() {
            return;
        }
        self.chat.on_clear_elapsed(generation);
    }

    /// Explicit clear from the conversation's dismiss control.
    pub fn clear_chat(&mut self) {
        self.chat.clear();
    }

    // --- voice capture -----------------------------------------------------

    pub fn toggle_voice(&mut self) -> Vec<Effect> {
        self.chat.toggle_voice()
    }

    pub fn on_voice_started(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.chat.on_voice_started();
    }

    /// A recognized utterance is submitted exactly as if typed.
    pub fn on_voice_result(&mut self, transcript: &str) -> Vec<Effect> {
        if self.is_torn_down() {
            return Vec::new();
        }
        self.chat.on_voice_result(transcript)
    }

    pub fn on_voice_error(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.chat.on_voice_error();
    }

    pub fn on_voice_ended(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.chat.on_voice_ended();
    }
}
