use super::{Delay, HttpTransport};
use crate::error::{ModelsLabError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Replays scripted bodies in order and records every call.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<String>>>,
    posts: Mutex<Vec<(String, Value)>>,
    gets: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, body: Value) -> Self {
        self.respond_raw(&body.to_string())
    }

    pub fn respond_raw(self, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.to_string()));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ModelsLabError::TransportError(message.to_string())));
        self
    }

    pub fn posts(&self) -> Vec<(String, Value)> {
        self.posts.lock().unwrap().clone()
    }

    pub fn gets(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<String> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ModelsLabError::TransportError("no scripted response".into())))
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<String> {
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        self.next_response()
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        self.gets.lock().unwrap().push(url.to_string());
        self.next_response()
    }
}

/// Records requested sleeps and returns immediately.
#[derive(Default)]
pub struct RecordingDelay {
    slept: Mutex<Vec<Duration>>,
}

impl RecordingDelay {
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}
