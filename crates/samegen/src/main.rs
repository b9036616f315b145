use std::str::FromStr;

use anyhow::{anyhow, Context};
use clap::Parser;
use log::{info, LevelFilter};

use samewave::{
    decode_same, generate_eas_alert, AlertOptions, CodeBook, EncoderMode, SameErr,
};

mod cli;

use cli::{Args, Command};

fn main() {
    let args = Args::parse();
    log_setup(args.verbose, args.quiet);

    if let Err(err) = run(&args) {
        eprintln!("samegen: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let book = book_setup(args)?;

    match &args.command {
        Command::Decode { header } => {
            let alert = decode_same(&book, header)
                .with_context(|| format!("unable to decode \"{}\"", header))?;
            if !args.quiet {
                println!("{}", alert.formatted);
            }
        }
        Command::Encode {
            message,
            mode,
            no_attention_tone,
            audio,
            output,
            transcoder,
        } => {
            let mode = EncoderMode::from_str(mode)
                .map_err(|_| anyhow!("unknown encoder mode \"{}\"", mode))?;

            let mut options = AlertOptions::new();
            options
                .with_mode(mode)
                .with_attention_tone(!no_attention_tone)
                .with_output_file(output.clone())
                .with_transcoder(transcoder.clone());
            if let Some(audio) = audio {
                options.with_audio_path(audio.clone());
            }

            let samples =
                generate_eas_alert(message, &options).context("unable to generate alert")?;
            info!("assembled {} samples", samples.len());
            if !args.quiet {
                println!("{}", output);
            }
        }
    }

    Ok(())
}

// SAME data the library rejected exits 2, so scripts can tell a bad
// header or narration file from an environment failure.
fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<SameErr>().is_some() {
        2
    } else {
        1
    }
}

fn log_setup(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.filter_level(match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    }
    builder.init();
}

fn book_setup(args: &Args) -> anyhow::Result<CodeBook> {
    match &args.codes {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("unable to open --codes \"{}\"", path))?;
            let book = CodeBook::from_json_str(&json)
                .with_context(|| format!("unable to parse --codes \"{}\"", path))?;
            info!("loaded code dictionaries from \"{}\"", path);
            Ok(book)
        }
        None => Ok(CodeBook::builtin()),
    }
}
