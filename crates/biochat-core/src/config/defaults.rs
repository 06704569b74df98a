// Single source of truth for all default values.

// --- Model ---
pub const DEFAULT_PROVIDER: &str = "onnx";
pub const DEFAULT_MODEL_DIR: &str = "./models/agro-nucleotide-transformer-1b";
pub const DEFAULT_MODEL_FILE: &str = "model.onnx";
pub const DEFAULT_VOCAB_FILE: &str = "vocab.txt";
pub const DEFAULT_MAX_TOKENS: usize = 512;
pub const DEFAULT_KMER_SIZE: usize = 6;
pub const DEFAULT_HIDDEN_SIZE: usize = 0; // 0 = accept whatever the model emits
pub const DEFAULT_FALLBACK_DIMENSIONS: usize = 256;

// --- Chat ---
pub const DEFAULT_RAW_PREVIEW_CHARS: usize = 50;
pub const DEFAULT_SEQUENCE_PREVIEW_CHARS: usize = 30;
pub const DEFAULT_REJECTED_PREVIEW_CHARS: usize = 100;

// --- Logging ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
