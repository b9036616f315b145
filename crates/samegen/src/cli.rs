use clap::{Parser, Subcommand};

const USAGE_LONG: &str = r#"
Encode SAME/EAS alert audio or decode SAME headers.

Generate a required-weekly-test alert with narration:

    samegen encode "ZCZC-EAS-RWT-012057-012081+0030-2780415-WTSP/TV-" \
        --audio narration.wav --output rwt.wav

An .mp3 output extension routes through the external transcoder
(ffmpeg by default), which is also used to read narration audio in
any common format.

Decode a header into a human-readable description:

    samegen decode "ZCZC-CIV-ADR-020173+0100-3441707-ERN/LB-"

A header or narration file the SAME library rejects exits with
status 2; other failures exit with status 1.

ALWAYS TEST YOUR ENCODING SETUP! Broadcasting EAS attention tones or
alert audio without authorization is illegal in the United States.
"#;

/// Top-level program arguments
#[derive(Parser, Clone, Debug)]
#[command(version)]
#[command(about, long_about = None)]
#[command(after_long_help = USAGE_LONG)]
#[command(max_term_width = 100)]
pub struct Args {
    /// Verbosity level (-vvv for more)
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print nothing but errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Load code dictionaries from a JSON artifact instead of the
    /// built-in tables
    #[arg(long, value_name = "FILE")]
    pub codes: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Decode a SAME header into an alert description
    Decode {
        /// The complete header, like
        /// "ZCZC-CIV-ADR-020173+0100-3441707-ERN/LB-"
        header: String,
    },

    /// Encode a SAME header as alert audio
    Encode {
        /// The ZCZC-prefixed message to transmit
        message: String,

        /// Encoder framing: DEFAULT, NWS, DIGITAL, SAGE, or
        /// TRILITHIC (case-insensitive)
        #[arg(short, long, default_value = "default")]
        mode: String,

        /// Skip the attention tone
        #[arg(long)]
        no_attention_tone: bool,

        /// Narration audio file, in any format the transcoder accepts
        #[arg(short, long, value_name = "FILE")]
        audio: Option<String>,

        /// Output file; an .mp3 extension selects MP3 encoding
        #[arg(short, long, default_value = "output.wav")]
        output: String,

        /// External transcoder executable
        #[arg(long, default_value = "ffmpeg")]
        transcoder: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_encode_defaults() {
        let args = Args::try_parse_from(["samegen", "encode", "ZCZC-TEST"]).expect("bad args");

        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        match args.command {
            Command::Encode {
                message,
                mode,
                no_attention_tone,
                audio,
                output,
                transcoder,
            } => {
                assert_eq!(message, "ZCZC-TEST");
                assert_eq!(mode, "default");
                assert!(!no_attention_tone);
                assert_eq!(audio, None);
                assert_eq!(output, "output.wav");
                assert_eq!(transcoder, "ffmpeg");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_parse_decode_with_codes() {
        let args = Args::try_parse_from([
            "samegen",
            "-vv",
            "--codes",
            "national.json",
            "decode",
            "ZCZC-CIV-ADR-020173+0100-3441707-ERN/LB-",
        ])
        .expect("bad args");

        assert_eq!(args.verbose, 2);
        assert_eq!(args.codes.as_deref(), Some("national.json"));
        assert!(matches!(args.command, Command::Decode { .. }));
    }
}
