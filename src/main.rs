//! video-embed CLI
//!
//! Usage:
//!   video-embed [OPTIONS] [ARGS]...
//!   echo 'youtube|dQw4w9WgXcQ|center' | video-embed
//!
//! Options:
//!   -c, --config <FILE>    Host configuration (TOML)
//!   -m, --messages <FILE>  Message bundle (TOML)
//!   --consent              Gate playback behind a consent click
//!   --services             List built-in video services
//!   -e, --examples         Show annotated examples

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use video_embed::{render_with_config, HostConfig, MessageBundle, RenderConfig, ServiceRegistry};

#[derive(Parser)]
#[command(name = "video-embed")]
#[command(about = "Render wiki video-embed directives as HTML fragments")]
struct Cli {
    /// Directive arguments: service name, then `key=value` pairs or bare values
    args: Vec<String>,

    /// Host configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Message bundle file (TOML)
    #[arg(short, long)]
    messages: Option<PathBuf>,

    /// Gate playback behind a consent click
    #[arg(long)]
    consent: bool,

    /// List built-in video services
    #[arg(long)]
    services: bool,

    /// Show annotated examples
    #[arg(short, long)]
    examples: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.services {
        print_services();
        return;
    }

    if cli.examples {
        print_examples();
        return;
    }

    // A missing or unreadable host configuration means "no restriction",
    // not a refusal to render.
    let mut host = match &cli.config {
        Some(path) => HostConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("Warning: ignoring host configuration '{}': {}", path.display(), e);
            HostConfig::default()
        }),
        None => HostConfig::default(),
    };
    if cli.consent {
        host = host.with_require_consent(true);
    }

    let messages = match &cli.messages {
        Some(path) => match MessageBundle::from_file(path) {
            Ok(bundle) => bundle,
            Err(e) => {
                eprintln!("Error loading message bundle '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => MessageBundle::default(),
    };

    // Arguments come from the command line, or as one pipe-separated
    // directive line on stdin.
    let args: Vec<String> = if !cli.args.is_empty() {
        cli.args
    } else if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading from stdin: {}", e);
            std::process::exit(1);
        }
        match buffer.lines().find(|line| !line.trim().is_empty()) {
            Some(line) => line.split('|').map(|part| part.to_string()).collect(),
            None => {
                eprintln!("Error: empty directive on stdin");
                std::process::exit(1);
            }
        }
    } else {
        print_intro();
        return;
    };

    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let config = RenderConfig::new().with_host(host).with_messages(messages);
    let output = render_with_config(&arg_refs, &config);
    println!("{}", output.html);
}

fn print_intro() {
    println!(
        r#"video-embed - Render wiki video-embed directives as HTML fragments

USAGE:
    video-embed [OPTIONS] [ARGS]...
    echo 'youtube|dQw4w9WgXcQ|center' | video-embed

OPTIONS:
    -c, --config <FILE>    Host configuration (TOML)
    -m, --messages <FILE>  Message bundle (TOML)
    --consent              Gate playback behind a consent click
    --services             List built-in video services
    -e, --examples         Show annotated examples
    -h, --help             Print help

QUICK START:
    video-embed youtube dQw4w9WgXcQ center '' 400x300

This renders a centered 400x300 YouTube embed. Malformed directives render
an inline error box instead of failing. Run --examples for more patterns."#
    );
}

fn print_services() {
    let registry = ServiceRegistry::with_builtin_services();
    let mut names: Vec<&str> = registry.names().collect();
    names.sort_unstable();
    for name in names {
        println!("{}", name);
    }
}

fn print_examples() {
    println!(
        r#"VIDEO-EMBED EXAMPLES
====================

EXAMPLE 1: Plain embed
----------------------
video-embed youtube dQw4w9WgXcQ

Default 640x360 player, auto-resizing, no alignment.

EXAMPLE 2: Positional arguments
-------------------------------
video-embed youtube dQw4w9WgXcQ center 'My caption' 400x300

Positional order is: id, alignment, description, dimensions, urlargs,
width, height, autoresize, valignment. Empty values ('') skip a slot.

EXAMPLE 3: Named arguments
--------------------------
video-embed youtube dQw4w9WgXcQ alignment=right container=frame

Named arguments may appear anywhere, but note that each one still
consumes a positional slot for any bare values that follow it.

EXAMPLE 4: Parent-locked services
---------------------------------
video-embed --config host.toml twitch some_channel

Twitch-family embeds require the public server name; it is read from
`server_name` in the host configuration and injected as the `parent`
query parameter automatically.

EXAMPLE 5: Consent gating
-------------------------
video-embed --consent youtube dQw4w9WgXcQ

Adds a click-to-consent overlay in front of the player.

HOST CONFIGURATION (TOML)
-------------------------
enabled_services = ["youtube", "vimeo"]   # empty list allows all
require_consent = false
fetch_external_thumbnails = true
server_name = "wiki.example.org""#
    );
}
