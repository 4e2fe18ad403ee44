//! Property-based tests for the chat state machine
//!
//! These tests verify key invariants hold across arbitrary input sequences.

use super::*;
use crate::conversation::{ChatTurn, Conversation, Speaker};
use crate::profile::BusinessProfile;
use proptest::prelude::*;

fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ?$]{1,40}",
        "[ \t\n]{0,5}",
    ]
}

/// Drive the pure machine the way the widget does, delivering each reply
/// before the next submission
fn run(inputs: &[String]) -> Vec<ChatTurn> {
    let mut conv = Conversation::seeded(&BusinessProfile::crown_and_blade());
    let mut state = ChatState::Idle;

    for input in inputs {
        let result = transition(state, conv.snapshot(), Event::VisitorSubmitted { text: input.clone() })
            .expect("idle machine accepts submissions");
        state = result.new_state;
        let mut requested = false;
        for effect in result.effects {
            match effect {
                Effect::AppendTurn(turn) => conv.append(turn),
                Effect::RequestReply { .. } => requested = true,
            }
        }
        if requested {
            let result = transition(state, conv.snapshot(), Event::ReplyArrived {
                text: format!("re: {input}"),
            })
            .expect("pending reply is accepted");
            state = result.new_state;
            for effect in result.effects {
                if let Effect::AppendTurn(turn) = effect {
                    conv.append(turn);
                }
            }
        }
        assert_eq!(state, ChatState::Idle);
    }

    conv.snapshot().to_vec()
}

proptest! {
    #[test]
    fn two_turns_per_completed_send(inputs in proptest::collection::vec(arb_input(), 0..15)) {
        let transcript = run(&inputs);
        let sent = inputs.iter().filter(|i| !i.trim().is_empty()).count();
        prop_assert_eq!(transcript.len(), 1 + 2 * sent);
    }

    #[test]
    fn transcript_alternates_after_greeting(inputs in proptest::collection::vec(arb_input(), 0..15)) {
        let transcript = run(&inputs);
        prop_assert_eq!(transcript[0].speaker, Speaker::Assistant);
        for (i, turn) in transcript.iter().enumerate().skip(1) {
            let expected = if i % 2 == 1 { Speaker::Visitor } else { Speaker::Assistant };
            prop_assert_eq!(turn.speaker, expected);
        }
    }

    #[test]
    fn busy_state_never_changes_transcript(input in arb_input()) {
        let transcript = vec![ChatTurn::assistant("hi"), ChatTurn::visitor("q")];
        match transition(ChatState::AwaitingReply, &transcript, Event::VisitorSubmitted { text: input.clone() }) {
            Ok(result) => {
                prop_assert!(input.trim().is_empty());
                prop_assert_eq!(result.new_state, ChatState::AwaitingReply);
                prop_assert!(result.effects.is_empty());
            }
            Err(e) => prop_assert_eq!(e, TransitionError::Busy),
        }
    }

    #[test]
    fn request_carries_history_before_message(
        history in proptest::collection::vec("[a-z ]{1,10}".prop_map(ChatTurn::visitor), 0..6),
        text in "[a-zA-Z]{1,20}",
    ) {
        let result = transition(ChatState::Idle, &history, Event::VisitorSubmitted { text: text.clone() }).unwrap();
        prop_assert_eq!(
            result.effects.last(),
            Some(&Effect::RequestReply { history: history.clone(), message: text })
        );
    }
}
