//! One chat turn: normalize, encode, classify, respond.

use tracing::{debug, error};

use biochat_core::config::BioChatConfig;
use biochat_core::errors::{BioChatError, BioChatResult};
use biochat_core::models::{EmbeddingSummary, Message};
use biochat_embeddings::engine::{self, EncoderCell};

use crate::classify::Classification;
use crate::normalize::{looks_like_sequence, normalize};
use crate::respond;
use crate::session::{ChatSession, TurnState};

/// Turn-by-turn driver for a chat session.
///
/// Owns the configuration and a handle to the encoder cell. Every failure
/// is mapped to a canned reply here: `process` never fails outward, and a
/// failed turn leaves the session usable for the next one.
pub struct TurnProcessor {
    config: BioChatConfig,
    cell: EncoderCell,
}

impl TurnProcessor {
    /// Processor backed by the process-wide encoder cell.
    pub fn new(config: BioChatConfig) -> Self {
        Self::with_cell(config, engine::global().clone())
    }

    /// Processor backed by a private cell.
    pub fn with_cell(config: BioChatConfig, cell: EncoderCell) -> Self {
        Self { config, cell }
    }

    pub fn config(&self) -> &BioChatConfig {
        &self.config
    }

    /// Process one user turn.
    ///
    /// Appends the user message, composes the assistant reply, appends it
    /// and returns it. The session is back in `Idle` when this returns.
    pub fn process(&self, session: &mut ChatSession, raw_input: &str) -> Message {
        session.state = TurnState::Responding;
        session.push(Message::user(raw_input));

        let reply = Message::assistant(self.compose_reply(raw_input));
        session.push(reply.clone());

        session.state = TurnState::Idle;
        reply
    }

    /// Build the reply text for one raw input.
    ///
    /// Empty input short-circuits to the greeting before any model work.
    fn compose_reply(&self, raw_input: &str) -> String {
        if raw_input.trim().is_empty() {
            return respond::GREETING_REPLY.to_string();
        }

        let sequence = normalize(raw_input);

        let summary = match self.summarize(sequence.as_str()) {
            Ok(summary) => summary,
            Err(BioChatError::ModelError(e)) if e.is_load_failure() => {
                error!(error = %e, "encoder unavailable");
                return respond::MODEL_LOAD_FAILURE_REPLY.to_string();
            }
            Err(e) => {
                error!(error = %e, sequence_len = sequence.len(), "analysis failed");
                return respond::INFERENCE_FAILURE_REPLY.to_string();
            }
        };

        let classification = Classification::from_summary(&summary);
        debug!(
            norm = summary.norm,
            mean = summary.mean,
            len = sequence.len(),
            "sequence classified"
        );

        if looks_like_sequence(raw_input) {
            respond::analysis_report(
                raw_input,
                &sequence,
                &summary,
                &classification,
                &self.config.chat,
            )
        } else {
            respond::rejection(raw_input, &classification, &self.config.chat)
        }
    }

    /// Encode one normalized sequence and reduce it to summary statistics.
    fn summarize(&self, sequence: &str) -> BioChatResult<EmbeddingSummary> {
        let encoder = self.cell.get_or_load(&self.config.model)?;
        let vector = encoder.encode(sequence)?;
        Ok(EmbeddingSummary::from_vector(&vector))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use biochat_core::config::ModelConfig;
    use biochat_core::models::Role;

    use super::*;

    fn kmer_processor() -> TurnProcessor {
        let config = BioChatConfig {
            model: ModelConfig {
                provider: "kmer".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        TurnProcessor::with_cell(config, EncoderCell::new())
    }

    fn broken_onnx_processor() -> TurnProcessor {
        let config = BioChatConfig {
            model: ModelConfig {
                model_dir: "/nonexistent/models".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        TurnProcessor::with_cell(config, EncoderCell::new())
    }

    #[test]
    fn empty_input_greets_without_touching_the_encoder() {
        let processor = kmer_processor();
        let mut session = ChatSession::new();

        let reply = processor.process(&mut session, "   ");
        assert_eq!(reply.content, respond::GREETING_REPLY);
        assert!(
            !processor.cell.is_loaded(),
            "greeting must not initialize the encoder"
        );
    }

    #[test]
    fn turn_appends_user_then_assistant() {
        let processor = kmer_processor();
        let mut session = ChatSession::new();

        processor.process(&mut session, "ATGCGATCGATCGATCG");
        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "ATGCGATCGATCGATCG");
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(session.state, TurnState::Idle);
    }

    #[test]
    fn sequence_input_gets_the_analysis_report() {
        let processor = kmer_processor();
        let mut session = ChatSession::new();

        let reply = processor.process(&mut session, "ATGCGATCGATCGATCG");
        assert!(reply.content.contains("Nucleotide sequence analysis"));
        assert!(reply.content.contains("ATGCGATCGATCGATCG"));
        assert!(reply.content.contains("**Sequence length**: 17 bp"));
    }

    #[test]
    fn non_sequence_input_gets_the_rejection() {
        let processor = kmer_processor();
        let mut session = ChatSession::new();

        let reply = processor.process(&mut session, "hello world");
        assert!(reply.content.contains("specialized for DNA/RNA"));
        assert!(reply.content.contains("hello world"));
    }

    #[test]
    fn cat_and_dog_routes_to_analysis() {
        // The heuristic looks at the original input and C/A/T qualify.
        let processor = kmer_processor();
        let mut session = ChatSession::new();

        let reply = processor.process(&mut session, "CAT and dog");
        assert!(reply.content.contains("Nucleotide sequence analysis"));
    }

    #[test]
    fn load_failure_turns_into_the_fixed_reply_and_session_survives() {
        let processor = broken_onnx_processor();
        let mut session = ChatSession::new();

        let reply = processor.process(&mut session, "ATGCGATCGATCGATCG");
        assert_eq!(reply.content, respond::MODEL_LOAD_FAILURE_REPLY);
        assert_eq!(session.message_count(), 2);
        assert_eq!(session.state, TurnState::Idle);

        // The next turn still works and gets the same canned reply.
        let again = processor.process(&mut session, "ATGC");
        assert_eq!(again.content, respond::MODEL_LOAD_FAILURE_REPLY);
        assert_eq!(session.message_count(), 4);
    }

    #[test]
    fn inference_failure_apologizes_and_session_survives() {
        #[derive(Debug)]
        struct FailingEncoder;

        impl biochat_core::traits::SequenceEncoder for FailingEncoder {
            fn encode(&self, _sequence: &str) -> biochat_core::BioChatResult<Vec<f32>> {
                Err(biochat_core::ModelError::InferenceFailed {
                    reason: "tensor exploded".to_string(),
                }
                .into())
            }

            fn encode_batch(
                &self,
                _sequences: &[String],
            ) -> biochat_core::BioChatResult<Vec<Vec<f32>>> {
                Err(biochat_core::ModelError::InferenceFailed {
                    reason: "tensor exploded".to_string(),
                }
                .into())
            }

            fn hidden_size(&self) -> usize {
                8
            }

            fn name(&self) -> &str {
                "failing"
            }

            fn is_available(&self) -> bool {
                false
            }
        }

        let cell = EncoderCell::new();
        cell.install(Arc::new(FailingEncoder)).unwrap();
        let processor = TurnProcessor::with_cell(BioChatConfig::default(), cell);
        let mut session = ChatSession::new();

        let reply = processor.process(&mut session, "ATGCGATCGATCGATCG");
        assert_eq!(reply.content, respond::INFERENCE_FAILURE_REPLY);
        assert_eq!(session.state, TurnState::Idle);

        // Greeting still works on the same session.
        let greeting = processor.process(&mut session, "");
        assert_eq!(greeting.content, respond::GREETING_REPLY);
        assert_eq!(session.message_count(), 4);
    }

    #[test]
    fn empty_input_is_stored_in_the_transcript() {
        let processor = kmer_processor();
        let mut session = ChatSession::new();

        processor.process(&mut session, "");
        assert_eq!(session.messages()[0].content, "");
        assert_eq!(session.messages()[1].content, respond::GREETING_REPLY);
    }
}
