use std::error::Error as _;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use speech_align_rs::{
    write_report, write_report_json, AlignerConfig, AlignmentError, AudioSource,
    GreedySequenceAligner, SequenceAligner, SpeechAligner, SpeechAlignerBuilder, TranscriptSource,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_AUDIO: &str = "resource:10001-90210-01803.wav";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "aligner_demo")]
#[command(about = "Align audio to its transcript and print matched, inserted and missing words")]
struct Args {
    /// Audio file (16 kHz, 16-bit, mono). Used only together with TRANSCRIPT.
    audio: Option<String>,
    /// Transcript file, lowercase UTF-8 without punctuation.
    transcript: Option<PathBuf>,
    /// Acoustic model location [default: resource:models/acoustic/wsj].
    acoustic_model: Option<String>,
    /// Pronunciation dictionary location [default: the bundled cmudict].
    dictionary: Option<String>,
    /// Grapheme-to-phoneme model location.
    g2p_model: Option<String>,
    #[arg(long, env = "SPEECH_ALIGN_RESOURCE_DIR")]
    resource_dir: Option<PathBuf>,
    #[arg(
        long,
        env = "SPEECH_ALIGN_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Text
    )]
    format: OutputFormat,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("aligner_demo: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AlignmentError> {
    let (audio_location, transcript_source) = match (args.audio, args.transcript) {
        (Some(audio), Some(transcript)) => (audio, TranscriptSource::File(transcript)),
        (audio, _) => {
            if let Some(audio) = audio {
                tracing::warn!(%audio, "audio given without a transcript; using the bundled sample");
            }
            (DEFAULT_AUDIO.to_string(), TranscriptSource::default())
        }
    };

    let config = AlignerConfig {
        acoustic_model: args
            .acoustic_model
            .unwrap_or_else(|| AlignerConfig::DEFAULT_ACOUSTIC_MODEL.to_string()),
        dictionary: args
            .dictionary
            .unwrap_or_else(|| AlignerConfig::DEFAULT_DICTIONARY.to_string()),
        g2p_model: args.g2p_model,
        resource_root: args
            .resource_dir
            .unwrap_or_else(AlignerConfig::bundled_resource_root),
        ..AlignerConfig::default()
    };

    let transcript = transcript_source.load()?;
    let audio = AudioSource::open(&audio_location, &config.resource_root)?;
    let aligner = SpeechAlignerBuilder::new(config).build()?;

    let results = aligner.align(audio, &transcript)?;
    let words = aligner.word_expander().expand(&transcript);
    let alignment = GreedySequenceAligner::from_results(&results).align(&words)?;

    let stdout = io::stdout();
    let mut sink = BufWriter::new(stdout.lock());
    let summary = match args.format {
        OutputFormat::Text => write_report(&mut sink, &words, &results, &alignment)?,
        OutputFormat::Json => write_report_json(&mut sink, &words, &results, &alignment)?,
    };
    tracing::info!(
        matched = summary.matched,
        inserted = summary.inserted,
        deleted = summary.deleted,
        "report written"
    );
    Ok(())
}
