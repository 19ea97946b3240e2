//! Relays between the prompt builders and a [`CompletionService`].
//!
//! Each call site pins its own system text and output budget. The reply is
//! returned trimmed and otherwise untouched.

use crate::error::ServiceError;
use crate::prompts::{
    build_enhancement_prompt, build_feedback_prompt, build_wireframe_prompt, EnhancementCategory,
    FeedbackCategory, Fidelity,
};
use crate::services::{CompletionRequest, CompletionService};

/// Sampling temperature used for every completion.
pub const TEMPERATURE: f32 = 0.7;

/// Output budget for feedback and enhancement replies.
pub const SUGGESTION_MAX_TOKENS: u32 = 300;

/// Output budget for generated wireframes.
pub const WIREFRAME_MAX_TOKENS: u32 = 500;

pub const FEEDBACK_SYSTEM: &str = "You are a professional design mentor.";
pub const ENHANCEMENT_SYSTEM: &str = "You are a design expert providing enhancement suggestions.";
pub const WIREFRAME_SYSTEM: &str = "You are an expert wireframe designer.";

pub fn feedback_request(design_context: &str, category: FeedbackCategory) -> CompletionRequest {
    CompletionRequest {
        system: FEEDBACK_SYSTEM.to_string(),
        prompt: build_feedback_prompt(design_context, category),
        temperature: TEMPERATURE,
        max_tokens: SUGGESTION_MAX_TOKENS,
    }
}

pub fn enhancement_request(category: EnhancementCategory) -> CompletionRequest {
    CompletionRequest {
        system: ENHANCEMENT_SYSTEM.to_string(),
        prompt: build_enhancement_prompt(category),
        temperature: TEMPERATURE,
        max_tokens: SUGGESTION_MAX_TOKENS,
    }
}

pub fn wireframe_request(description: &str, fidelity: Fidelity) -> CompletionRequest {
    CompletionRequest {
        system: WIREFRAME_SYSTEM.to_string(),
        prompt: build_wireframe_prompt(description, fidelity),
        temperature: TEMPERATURE,
        max_tokens: WIREFRAME_MAX_TOKENS,
    }
}

fn relay(
    service: &dyn CompletionService,
    request: CompletionRequest,
    what: &'static str,
) -> Result<String, ServiceError> {
    tracing::info!(what, max_tokens = request.max_tokens, "requesting completion");
    let reply = service.complete(&request).inspect_err(|e| {
        tracing::warn!(what, error = %e, "completion failed");
    })?;
    Ok(reply.trim().to_string())
}

/// AI feedback on the uploaded design.
pub fn request_feedback(
    service: &dyn CompletionService,
    design_context: &str,
    category: FeedbackCategory,
) -> Result<String, ServiceError> {
    relay(service, feedback_request(design_context, category), "feedback")
}

/// AI enhancement suggestions for the uploaded design.
pub fn request_enhancements(
    service: &dyn CompletionService,
    category: EnhancementCategory,
) -> Result<String, ServiceError> {
    relay(service, enhancement_request(category), "enhancements")
}

/// AI-generated wireframe structure/code for `description`.
pub fn request_wireframe(
    service: &dyn CompletionService,
    description: &str,
    fidelity: Fidelity,
) -> Result<String, ServiceError> {
    relay(service, wireframe_request(description, fidelity), "wireframe")
}
