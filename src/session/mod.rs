//! One user session: validate, build, dispatch.
//!
//! A [`Session`] owns the backend and a reentrancy guard. Each call to
//! [`Session::submit`] is one pass of input collection, request building and
//! inference; nothing is kept between submissions.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::error::{AppError, Result};
use crate::gemini::InferenceBackend;
use crate::input::collect;
use crate::request::build_request;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

pub struct Session<B> {
    backend: B,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the submission ends, however it ends.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<B: InferenceBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether a submission is currently awaiting the model.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validate the inputs and, if they pass, make exactly one inference call.
    ///
    /// Errors:
    /// - [`AppError::Busy`] if another submission on this session is in flight
    /// - [`AppError::Validation`] for missing/empty image or blank question
    ///   (no request is sent)
    /// - [`AppError::Inference`] for any failure of the model call
    pub async fn submit(&self, image: Option<Vec<u8>>, mime_type: &str, question: &str) -> Result<String> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or_else(|| {
            warn!("Submission rejected: previous request still in flight");
            AppError::Busy
        })?;

        let prompt = collect(image, mime_type, question).map_err(|e| {
            debug!("Validation failed: {}", e);
            e
        })?;

        let request = build_request(&prompt);
        info!("Submitting question ({} image bytes)", prompt.image.bytes().len());

        let answer = self.backend.generate_content(&request).await?;
        debug!("Received answer ({} chars)", answer.len());
        Ok(answer)
    }
}
