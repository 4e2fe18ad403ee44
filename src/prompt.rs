//! Prompt construction for the admissions assistant
//!
//! The model sees one synthesized context message describing the academy,
//! then the transcript so far, then the visitor's new message. Visitor text
//! is passed through verbatim.

use crate::conversation::{ChatTurn, Speaker};
use crate::llm::LlmMessage;
use crate::profile::BusinessProfile;
use std::fmt::Write;

/// Persona sent as the system instruction
pub const SYSTEM_INSTRUCTION: &str =
    "You are a knowledgeable and encouraging admissions advisor for a barber academy.";

/// Behavioral rules appended to the context block
const GUIDELINES: &str = r#"Your goal is to answer questions about learning to cut hair, getting certified, and starting a career as a barber.
Encourage potential students to "Apply Now" or "Book a Tour" using the form on the page.
Keep your answers concise (under 50 words) and professional but edgy/cool.
If asked about class schedules, mention that new cohorts start the first Monday of every month."#;

/// Build the context block from the business profile
pub fn context_block(profile: &BusinessProfile) -> String {
    let mut context = String::new();

    let _ = writeln!(
        context,
        "You are the Student Admissions Assistant for \"{}\", a prestigious {}.",
        profile.name, profile.industry
    );
    context.push_str("\nHere is our course curriculum and pricing:\n");
    for offering in &profile.offerings {
        let _ = writeln!(
            context,
            "- {}: {} ({}). {}",
            offering.title, offering.price, offering.duration, offering.description
        );
    }
    let _ = writeln!(context, "\nAbout Us: {}", profile.about);
    context.push('\n');
    context.push_str(GUIDELINES);

    context
}

/// Assemble the ordered message list for one assistant call
///
/// `transcript` is the conversation before `new_text` was added.
pub fn assemble(profile: &BusinessProfile, transcript: &[ChatTurn], new_text: &str) -> Vec<LlmMessage> {
    let mut messages = Vec::with_capacity(transcript.len() + 2);

    messages.push(LlmMessage::user(context_block(profile)));
    messages.extend(transcript.iter().map(|turn| match turn.speaker {
        Speaker::Visitor => LlmMessage::user(turn.text.clone()),
        Speaker::Assistant => LlmMessage::assistant(turn.text.clone()),
    }));
    messages.push(LlmMessage::user(new_text));

    messages
}
