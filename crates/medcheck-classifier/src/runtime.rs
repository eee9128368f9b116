//! Model runtime capability boundary.
//!
//! The classification engine is injected behind [`ModelRuntime`]; this crate
//! owns the policy around it (initialization state, single-flight, failure
//! mapping), never the engine itself.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::bail;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

/// Index-aligned labels and scores from a zero-shot classification call.
/// Scores are raw model confidences in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifierOutput {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}

/// Injected classification capability: an asynchronous, potentially slow,
/// potentially failing black box.
#[async_trait]
pub trait ModelRuntime: Send + Sync {
    /// Idempotent initialization. `model` selects a backend model by opaque
    /// key; `None` selects the default.
    async fn ensure_ready(&self, model: Option<&str>) -> anyhow::Result<()>;

    /// Classify free text against candidate labels.
    async fn classify(&self, text: &str, labels: &[String]) -> anyhow::Result<ClassifierOutput>;
}

/// Adapter-level failures, mapped from whatever the runtime surfaces.
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("model runtime unavailable: {0}")]
    Unavailable(String),

    #[error("classification call failed: {0}")]
    CallFailed(String),
}

/// Initialization state of the runtime behind a handle.
#[derive(Debug, Clone)]
enum InitState {
    Uninitialized,
    Ready,
    Failed(String),
}

/// Owned, shareable handle over an injected runtime.
///
/// Initialization runs at most once: the state mutex is held across the
/// backend call, so concurrent callers await the same in-flight
/// initialization and observe its outcome. A recorded failure is sticky;
/// later callers get [`ClassifierError::Unavailable`] without re-triggering
/// the backend.
pub struct ModelHandle {
    runtime: Arc<dyn ModelRuntime>,
    model: Option<String>,
    init: Mutex<InitState>,
    call_gate: Option<Mutex<()>>,
}

impl ModelHandle {
    pub fn new(runtime: Arc<dyn ModelRuntime>) -> Self {
        Self {
            runtime,
            model: None,
            init: Mutex::new(InitState::Uninitialized),
            call_gate: None,
        }
    }

    /// Select a specific backend model instead of the runtime's default.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    /// Funnel `classify` calls through a gate, for runtimes that hold a
    /// single mutable session and are not safe for concurrent use.
    pub fn with_serialized_calls(mut self) -> Self {
        self.call_gate = Some(Mutex::new(()));
        self
    }

    /// Drive the runtime to the Ready state, initializing at most once.
    pub async fn ensure_ready(&self) -> Result<(), ClassifierError> {
        let mut state = self.init.lock().await;
        match &*state {
            InitState::Ready => Ok(()),
            InitState::Failed(reason) => Err(ClassifierError::Unavailable(reason.clone())),
            InitState::Uninitialized => match self.runtime.ensure_ready(self.model.as_deref()).await {
                Ok(()) => {
                    *state = InitState::Ready;
                    Ok(())
                }
                Err(e) => {
                    let reason = e.to_string();
                    tracing::warn!(error = %reason, "model runtime initialization failed");
                    *state = InitState::Failed(reason.clone());
                    Err(ClassifierError::Unavailable(reason))
                }
            },
        }
    }

    /// Run one classification call, serialized if the handle was configured
    /// that way. Misaligned output counts as a failed call.
    pub async fn classify(
        &self,
        text: &str,
        labels: &[String],
    ) -> Result<ClassifierOutput, ClassifierError> {
        let result = match &self.call_gate {
            Some(gate) => {
                let _guard = gate.lock().await;
                self.runtime.classify(text, labels).await
            }
            None => self.runtime.classify(text, labels).await,
        };

        let output = result.map_err(|e| ClassifierError::CallFailed(e.to_string()))?;

        if output.labels.len() != output.scores.len() {
            return Err(ClassifierError::CallFailed(format!(
                "misaligned classifier output: {} labels, {} scores",
                output.labels.len(),
                output.scores.len()
            )));
        }

        Ok(output)
    }
}

/// Scripted behavior for [`MockRuntime`].
#[derive(Debug, Clone)]
enum MockBehavior {
    Succeed(ClassifierOutput),
    FailInit(String),
    FailCall(String),
}

/// Mock runtime for testing without actual model inference.
pub struct MockRuntime {
    behavior: MockBehavior,
    init_calls: AtomicUsize,
    classify_calls: AtomicUsize,
}

impl MockRuntime {
    /// A runtime that initializes and answers with the given output.
    pub fn succeeding(output: ClassifierOutput) -> Self {
        Self {
            behavior: MockBehavior::Succeed(output),
            init_calls: AtomicUsize::new(0),
            classify_calls: AtomicUsize::new(0),
        }
    }

    /// A runtime that never becomes ready.
    pub fn failing_init(message: &str) -> Self {
        Self {
            behavior: MockBehavior::FailInit(message.to_string()),
            init_calls: AtomicUsize::new(0),
            classify_calls: AtomicUsize::new(0),
        }
    }

    /// A runtime that initializes but fails every classification call.
    pub fn failing_call(message: &str) -> Self {
        Self {
            behavior: MockBehavior::FailCall(message.to_string()),
            init_calls: AtomicUsize::new(0),
            classify_calls: AtomicUsize::new(0),
        }
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }

    pub fn classify_calls(&self) -> usize {
        self.classify_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelRuntime for MockRuntime {
    async fn ensure_ready(&self, _model: Option<&str>) -> anyhow::Result<()> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        if let MockBehavior::FailInit(message) = &self.behavior {
            bail!("{}", message);
        }
        Ok(())
    }

    async fn classify(&self, _text: &str, _labels: &[String]) -> anyhow::Result<ClassifierOutput> {
        self.classify_calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Succeed(output) => Ok(output.clone()),
            MockBehavior::FailCall(message) => bail!("{}", message),
            MockBehavior::FailInit(message) => bail!("{}", message),
        }
    }
}
