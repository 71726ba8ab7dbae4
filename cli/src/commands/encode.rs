//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Directory containing the trained vocabulary
    #[arg(short, long)]
    pub vocab: String,

    /// Sentence to encode ("-" reads stdin, one sentence per line)
    #[arg(short, long)]
    pub input: String,

    /// Marker for text no learned token covers
    #[arg(short, long, default_value = wordpair_tokenizer::UNKNOWN_TOKEN)]
    pub unknown_token: String,

    /// Also write the token catalog with its ids to this directory
    #[arg(short, long)]
    pub tokens_out: Option<String>,
}

use anyhow::Result as AnyhowResult;
use std::path::Path;
use wordpair_tokenizer::Tokenizer;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load_with_unknown(Path::new(&cmd.vocab), &cmd.unknown_token)?;

    if let Some(dir) = &cmd.tokens_out {
        tokenizer.save_catalog(Path::new(dir))?;
    }

    // Read input text (from stdin if "-")
    let sentences: Vec<String> = if cmd.input == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer.lines().map(str::to_string).collect()
    } else {
        vec![cmd.input]
    };

    for encoding in tokenizer.encode_batch(&sentences)? {
        println!("{}", encoding.get_tokens().join(" "));
        let ids: Vec<String> = encoding.ids.iter().map(|id| id.to_string()).collect();
        println!("{}", ids.join(" "));
    }

    Ok(())
}
