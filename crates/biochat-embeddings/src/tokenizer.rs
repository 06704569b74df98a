//! K-mer tokenizer for pretrained nucleotide models.
//!
//! Loads the vocabulary published with the model (one token per line, id =
//! line index) and applies the nucleotide-transformer scheme: a `<cls>`
//! head, the sequence split left to right into non-overlapping k-mers, and
//! any trailing remainder shorter than k emitted base by base. Chunks absent
//! from the vocabulary resolve to `<unk>`; RNA `U` against a DNA-only
//! vocabulary, for instance.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use biochat_core::errors::{BioChatResult, ModelError};

const DEFAULT_CLS_TOKEN: &str = "<cls>";
const DEFAULT_PAD_TOKEN: &str = "<pad>";
const DEFAULT_UNK_TOKEN: &str = "<unk>";

/// Token ids and attention mask for one encoded sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedInput {
    pub input_ids: Vec<i64>,
    pub attention_mask: Vec<i64>,
}

impl TokenizedInput {
    pub fn len(&self) -> usize {
        self.input_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input_ids.is_empty()
    }
}

/// The subset of `special_tokens_map.json` this tokenizer reads.
#[derive(Debug, Default, Deserialize)]
struct SpecialTokensMap {
    cls_token: Option<String>,
    pad_token: Option<String>,
    unk_token: Option<String>,
}

/// Vocabulary-file k-mer tokenizer.
#[derive(Debug)]
pub struct KmerTokenizer {
    vocab: HashMap<String, i64>,
    kmer_size: usize,
    cls_id: i64,
    pad_id: i64,
    unk_id: i64,
}

impl KmerTokenizer {
    /// Load a tokenizer from a model directory's vocab file.
    ///
    /// A `special_tokens_map.json` next to the vocab file overrides the
    /// default special-token names when present.
    ///
    /// # Errors
    /// `ModelError::TokenizerLoadFailed` when the vocab file is unreadable
    /// or is missing one of the special tokens.
    pub fn load(vocab_path: &Path, kmer_size: usize) -> BioChatResult<Self> {
        let raw = fs::read_to_string(vocab_path).map_err(|e| ModelError::TokenizerLoadFailed {
            path: vocab_path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut vocab = HashMap::new();
        for (id, line) in raw.lines().enumerate() {
            let token = line.trim();
            if token.is_empty() {
                continue; // trailing newline; ids stay line-indexed
            }
            vocab.insert(token.to_string(), id as i64);
        }

        if vocab.is_empty() {
            return Err(ModelError::TokenizerLoadFailed {
                path: vocab_path.display().to_string(),
                reason: "vocab file is empty".to_string(),
            }
            .into());
        }

        let specials = Self::special_names(vocab_path);
        let lookup = |name: &str| {
            vocab
                .get(name)
                .copied()
                .ok_or_else(|| ModelError::TokenizerLoadFailed {
                    path: vocab_path.display().to_string(),
                    reason: format!("special token {name} not in vocab"),
                })
        };
        let cls_id = lookup(&specials.0)?;
        let pad_id = lookup(&specials.1)?;
        let unk_id = lookup(&specials.2)?;

        Ok(Self {
            vocab,
            kmer_size,
            cls_id,
            pad_id,
            unk_id,
        })
    }

    /// Resolve special-token names, preferring `special_tokens_map.json`.
    fn special_names(vocab_path: &Path) -> (String, String, String) {
        let defaults = (
            DEFAULT_CLS_TOKEN.to_string(),
            DEFAULT_PAD_TOKEN.to_string(),
            DEFAULT_UNK_TOKEN.to_string(),
        );
        let map_path = vocab_path.with_file_name("special_tokens_map.json");
        let Ok(raw) = fs::read_to_string(&map_path) else {
            return defaults;
        };
        match serde_json::from_str::<SpecialTokensMap>(&raw) {
            Ok(map) => (
                map.cls_token.unwrap_or(defaults.0),
                map.pad_token.unwrap_or(defaults.1),
                map.unk_token.unwrap_or(defaults.2),
            ),
            Err(e) => {
                warn!(path = %map_path.display(), error = %e, "ignoring unparseable special tokens map");
                defaults
            }
        }
    }

    /// Encode one sequence, truncating at `max_tokens` ids including `<cls>`.
    pub fn encode(&self, sequence: &str, max_tokens: usize) -> TokenizedInput {
        let chars: Vec<char> = sequence.chars().collect();
        let mut input_ids = Vec::with_capacity((chars.len() / self.kmer_size) + 2);
        input_ids.push(self.cls_id);

        let mut pos = 0;
        while pos < chars.len() && input_ids.len() < max_tokens {
            let remaining = chars.len() - pos;
            let width = if remaining >= self.kmer_size {
                self.kmer_size
            } else {
                1
            };
            let chunk: String = chars[pos..pos + width].iter().collect();
            input_ids.push(self.lookup(&chunk));
            pos += width;
        }

        let attention_mask = vec![1i64; input_ids.len()];
        TokenizedInput {
            input_ids,
            attention_mask,
        }
    }

    /// Encode a batch, right-padding every row to the widest with `<pad>`
    /// (mask 0).
    pub fn encode_batch(&self, sequences: &[String], max_tokens: usize) -> Vec<TokenizedInput> {
        let mut rows: Vec<TokenizedInput> = sequences
            .iter()
            .map(|s| self.encode(s, max_tokens))
            .collect();
        let widest = rows.iter().map(TokenizedInput::len).max().unwrap_or(0);
        for row in &mut rows {
            while row.input_ids.len() < widest {
                row.input_ids.push(self.pad_id);
                row.attention_mask.push(0);
            }
        }
        rows
    }

    fn lookup(&self, chunk: &str) -> i64 {
        self.vocab.get(chunk).copied().unwrap_or(self.unk_id)
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    pub fn kmer_size(&self) -> usize {
        self.kmer_size
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    /// Minimal vocab in the published layout: specials first, then single
    /// bases, then a few 6-mers.
    const VOCAB: &str = "<unk>\n<pad>\n<mask>\n<cls>\n<eos>\n<bos>\nA\nT\nG\nC\nN\nATGCGA\nTCGATC\nAAAAAA\n";

    fn write_vocab(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("vocab.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(VOCAB.as_bytes()).unwrap();
        path
    }

    fn tokenizer(dir: &TempDir) -> KmerTokenizer {
        KmerTokenizer::load(&write_vocab(dir), 6).unwrap()
    }

    #[test]
    fn ids_are_line_indexed() {
        let dir = TempDir::new().unwrap();
        let tok = tokenizer(&dir);
        assert_eq!(tok.vocab_size(), 14);
        // <unk>=0, <pad>=1, <cls>=3, A=6, ATGCGA=11
        let encoded = tok.encode("ATGCGA", 512);
        assert_eq!(encoded.input_ids, vec![3, 11]);
    }

    #[test]
    fn seventeen_bases_split_into_two_kmers_and_five_singles() {
        let dir = TempDir::new().unwrap();
        let tok = tokenizer(&dir);
        let encoded = tok.encode("ATGCGATCGATCGATCG", 512);
        // <cls> + ATGCGA + TCGATC + G A T C G
        assert_eq!(encoded.input_ids.len(), 8);
        assert_eq!(encoded.input_ids[0], 3);
        assert_eq!(encoded.input_ids[1], 11);
        assert_eq!(encoded.input_ids[2], 12);
        assert_eq!(&encoded.input_ids[3..], &[8, 6, 7, 9, 8]);
        assert_eq!(encoded.attention_mask, vec![1; 8]);
    }

    #[test]
    fn unknown_kmers_resolve_to_unk() {
        let dir = TempDir::new().unwrap();
        let tok = tokenizer(&dir);
        let encoded = tok.encode("TTTTTT", 512);
        assert_eq!(encoded.input_ids, vec![3, 0]);
    }

    #[test]
    fn rna_chunks_against_a_dna_vocab_resolve_to_unk() {
        let dir = TempDir::new().unwrap();
        let tok = tokenizer(&dir);
        let encoded = tok.encode("AUGGCU", 512);
        assert_eq!(encoded.input_ids, vec![3, 0]);
    }

    #[test]
    fn truncates_at_max_tokens() {
        let dir = TempDir::new().unwrap();
        let tok = tokenizer(&dir);
        let long = "A".repeat(1000);
        let encoded = tok.encode(&long, 16);
        assert_eq!(encoded.input_ids.len(), 16);
        assert_eq!(encoded.input_ids[0], 3);
        assert!(encoded.input_ids[1..].iter().all(|&id| id == 13)); // AAAAAA
    }

    #[test]
    fn empty_sequence_is_just_cls() {
        let dir = TempDir::new().unwrap();
        let tok = tokenizer(&dir);
        let encoded = tok.encode("", 512);
        assert_eq!(encoded.input_ids, vec![3]);
    }

    #[test]
    fn batch_rows_are_padded_to_the_widest() {
        let dir = TempDir::new().unwrap();
        let tok = tokenizer(&dir);
        let rows = tok.encode_batch(
            &["ATGCGA".to_string(), "ATGCGATCGATCGATCG".to_string()],
            512,
        );
        assert_eq!(rows[0].len(), rows[1].len());
        assert_eq!(rows[0].input_ids[2..], vec![1; 6][..]); // <pad>
        assert_eq!(rows[0].attention_mask[2..], vec![0; 6][..]);
        assert_eq!(rows[1].attention_mask, vec![1; 8]);
    }

    #[test]
    fn special_tokens_map_overrides_names() {
        let dir = TempDir::new().unwrap();
        let vocab_path = dir.path().join("vocab.txt");
        std::fs::write(&vocab_path, "[UNK]\n[PAD]\n[CLS]\nA\nT\n").unwrap();
        std::fs::write(
            dir.path().join("special_tokens_map.json"),
            r#"{"cls_token": "[CLS]", "pad_token": "[PAD]", "unk_token": "[UNK]"}"#,
        )
        .unwrap();
        let tok = KmerTokenizer::load(&vocab_path, 6).unwrap();
        let encoded = tok.encode("AT", 512);
        assert_eq!(encoded.input_ids, vec![2, 3, 4]);
    }

    #[test]
    fn missing_vocab_file_is_a_tokenizer_load_failure() {
        let err = KmerTokenizer::load(Path::new("/nonexistent/vocab.txt"), 6).unwrap_err();
        assert!(matches!(
            err,
            biochat_core::BioChatError::ModelError(ModelError::TokenizerLoadFailed { .. })
        ));
    }

    #[test]
    fn vocab_without_specials_is_rejected() {
        let dir = TempDir::new().unwrap();
        let vocab_path = dir.path().join("vocab.txt");
        std::fs::write(&vocab_path, "A\nT\nG\nC\n").unwrap();
        let err = KmerTokenizer::load(&vocab_path, 6).unwrap_err();
        assert!(err.to_string().contains("special token"));
    }
}
