//! One-shot model provisioning.
//!
//! Downloads the pretrained model and tokenizer files from the Hugging Face
//! hub into the local directory the encoder loads from. The hub access
//! token comes from the `HF_TOKEN` environment variable; it is never read
//! from the config file or the command line.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use biochat_core::config::BioChatConfig;

/// Hub model id the demo is built around.
const DEFAULT_MODEL_ID: &str = "InstaDeepAI/agro-nucleotide-transformer-1b";

/// Files fetched when `--files` is not given.
const DEFAULT_FILES: &[&str] = &[
    "config.json",
    "vocab.txt",
    "tokenizer_config.json",
    "special_tokens_map.json",
    "onnx/model.onnx",
];

const HUB_BASE_URL: &str = "https://huggingface.co";
const TOKEN_ENV_VAR: &str = "HF_TOKEN";

/// Options for the `fetch-model` subcommand.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Hub model id to download.
    #[arg(long, value_name = "ID", default_value = DEFAULT_MODEL_ID)]
    pub model: String,

    /// Target directory; defaults to the configured model directory.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Specific files to fetch instead of the default set.
    #[arg(long, value_name = "FILE", num_args = 1..)]
    pub files: Vec<String>,
}

/// Build the hub download URL for one file of a model.
fn file_url(model_id: &str, file: &str) -> String {
    format!("{HUB_BASE_URL}/{model_id}/resolve/main/{file}")
}

/// Local filename for a hub path. The hub keeps the ONNX export under an
/// `onnx/` prefix, but locally every file lands flat in the model
/// directory, which is where the encoder looks for them.
fn local_name(file: &str) -> &str {
    file.rsplit('/').next().unwrap_or(file)
}

pub fn run(config: &BioChatConfig, args: &FetchArgs) -> Result<()> {
    let token = std::env::var(TOKEN_ENV_VAR).with_context(|| {
        format!("{TOKEN_ENV_VAR} is not set; the hub requires an access token")
    })?;

    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.model.model_dir));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let files: Vec<String> = if args.files.is_empty() {
        DEFAULT_FILES.iter().map(ToString::to_string).collect()
    } else {
        args.files.clone()
    };

    // No client timeout: the ONNX graph is multi-gigabyte.
    let client = reqwest::blocking::Client::builder()
        .timeout(None)
        .build()
        .context("building HTTP client")?;

    for file in &files {
        let url = file_url(&args.model, file);
        let dest = out_dir.join(local_name(file));

        info!(%url, "downloading");
        let mut response = client
            .get(&url)
            .bearer_auth(&token)
            .send()
            .with_context(|| format!("requesting {url}"))?;

        if !response.status().is_success() {
            bail!("hub returned {} for {url}", response.status());
        }

        let mut sink = fs::File::create(&dest)
            .with_context(|| format!("creating {}", dest.display()))?;
        let bytes = response
            .copy_to(&mut sink)
            .with_context(|| format!("writing {}", dest.display()))?;
        println!("fetched {} ({bytes} bytes)", dest.display());
    }

    println!("model files written to {}", out_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_the_hub_resolve_layout() {
        assert_eq!(
            file_url("InstaDeepAI/agro-nucleotide-transformer-1b", "vocab.txt"),
            "https://huggingface.co/InstaDeepAI/agro-nucleotide-transformer-1b/resolve/main/vocab.txt"
        );
        assert_eq!(
            file_url("org/model", "onnx/model.onnx"),
            "https://huggingface.co/org/model/resolve/main/onnx/model.onnx"
        );
    }

    #[test]
    fn default_file_set_covers_model_and_tokenizer() {
        assert!(DEFAULT_FILES.contains(&"vocab.txt"));
        assert!(DEFAULT_FILES.contains(&"onnx/model.onnx"));
        assert!(DEFAULT_FILES.contains(&"special_tokens_map.json"));
    }

    #[test]
    fn hub_subdirectories_are_flattened_locally() {
        assert_eq!(local_name("onnx/model.onnx"), "model.onnx");
        assert_eq!(local_name("vocab.txt"), "vocab.txt");
    }
}
