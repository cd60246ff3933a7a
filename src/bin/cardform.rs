//! Terminal front end for the card entry core.
//!
//! # Usage
//!
//! ```bash
//! # Detect the card type of a (partial) number
//! cardform classify 3782
//!
//! # Render input under its mask, or a custom one
//! cardform render 41111
//! cardform render 5551234 --mask "(###) ####"
//!
//! # Show the caret mapping for an input
//! cardform offsets 37828224631
//! cardform expiry 123
//!
//! # Any command can print JSON instead
//! cardform offsets 41111 --output json
//!
//! # Type into a form one keystroke at a time and show the card
//! cardform type --number 378282246310005 --name "jane doe" --expiry 1230 --cvv 1234 --steps
//! ```
//!
//! Set `RUST_LOG=card_form=debug` to see rejected keystrokes.

use card_form::format::{digits_only, render_expiry, render_placeholder};
use card_form::mask::{mask_for, MaskTemplate, EXPIRY_MASK};
use card_form::offset::{translator, ExpiryOffsets, OffsetMapping};
use card_form::{classify, render, CardPreview, FieldKind, FormSession};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardform")]
#[command(author, version, about = "Credit card entry masks and form state")]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the card type from a (partial) number
    Classify {
        /// Card number as typed
        card_number: String,
    },

    /// Render raw input under a mask
    Render {
        /// Raw input
        raw: String,

        /// Mask pattern, `#` for slots (default: the card number's own mask)
        #[arg(short, long)]
        mask: Option<String>,

        /// Draw unfilled slots as `#`
        #[arg(short, long)]
        placeholder: bool,
    },

    /// Print the caret mapping between raw input and its rendering
    Offsets {
        /// Raw input
        raw: String,

        /// Mask pattern, `#` for slots (default: the card number's own mask)
        #[arg(short, long)]
        mask: Option<String>,
    },

    /// Render an expiry date and print its caret mapping
    Expiry {
        /// Raw expiry digits, e.g. 1230
        raw: String,
    },

    /// Type into a form keystroke by keystroke and show the card
    Type {
        /// Card number keystrokes
        #[arg(long, default_value = "")]
        number: String,

        /// Card holder keystrokes
        #[arg(long, default_value = "")]
        name: String,

        /// Expiry keystrokes
        #[arg(long, default_value = "")]
        expiry: String,

        /// CVV keystrokes
        #[arg(long, default_value = "")]
        cvv: String,

        /// Print the field value after every keystroke
        #[arg(short, long)]
        steps: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { card_number } => cmd_classify(&card_number, cli.output),
        Commands::Render {
            raw,
            mask,
            placeholder,
        } => cmd_render(&raw, mask, placeholder, cli.output),
        Commands::Offsets { raw, mask } => cmd_offsets(&raw, mask, cli.output),
        Commands::Expiry { raw } => cmd_expiry(&raw, cli.output),
        Commands::Type {
            number,
            name,
            expiry,
            cvv,
            steps,
        } => cmd_type(
            &[
                (FieldKind::Number, number),
                (FieldKind::Name, name),
                (FieldKind::Expiry, expiry),
                (FieldKind::Cvv, cvv),
            ],
            steps,
            cli.output,
        ),
    }
}

fn resolve_mask(raw: &str, pattern: Option<String>) -> MaskTemplate {
    match pattern {
        Some(pattern) => match MaskTemplate::parse(pattern) {
            Ok(mask) => mask,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => mask_for(classify(raw)).clone(),
    }
}

fn cmd_classify(card_number: &str, output: OutputFormat) {
    let card_type = classify(card_number);
    let mask = mask_for(card_type);

    match output {
        OutputFormat::Text => {
            println!("Card Type: {}", card_type);
            println!("Mask: {}", mask);
            println!("Max Digits: {}", mask.slot_count());
            println!("CVV Length: {}", card_type.cvv_length());
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "card_type": card_type,
                "mask": mask.as_str(),
                "max_digits": mask.slot_count(),
                "cvv_length": card_type.cvv_length(),
            });
            println!("{}", value);
        }
    }
}

fn cmd_render(raw: &str, pattern: Option<String>, placeholder: bool, output: OutputFormat) {
    let mask = resolve_mask(raw, pattern);
    let rendered = if placeholder {
        render_placeholder(raw, &mask)
    } else {
        render(raw, &mask)
    };

    match output {
        OutputFormat::Text => println!("{}", rendered),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "mask": mask.as_str(),
                "rendered": rendered,
            });
            println!("{}", value);
        }
    }
}

/// Caret mapping of one rendered input, in both directions.
struct OffsetTable {
    rendered: String,
    to_display: Vec<usize>,
    to_raw: Vec<usize>,
}

impl OffsetTable {
    /// Tabulates `offsets` for `filled` raw characters shown as `rendered`.
    fn new(rendered: String, filled: usize, offsets: &dyn OffsetMapping) -> Self {
        let to_display = (0..=filled).map(|o| offsets.to_display(o)).collect();
        let to_raw = (0..=rendered.chars().count())
            .map(|d| offsets.to_raw(d))
            .collect();
        Self {
            rendered,
            to_display,
            to_raw,
        }
    }

    fn to_json(&self, mask: &str) -> serde_json::Value {
        serde_json::json!({
            "mask": mask,
            "rendered": self.rendered,
            "to_display": self.to_display,
            "to_raw": self.to_raw,
        })
    }

    fn print(&self, mask: &str, output: OutputFormat) {
        match output {
            OutputFormat::Text => {
                println!("Mask: {}", mask);
                println!("Rendered: {:?}", self.rendered);
                println!("raw -> display");
                for (o, d) in self.to_display.iter().enumerate() {
                    println!("{:>3} -> {}", o, d);
                }
                println!("display -> raw");
                for (d, o) in self.to_raw.iter().enumerate() {
                    println!("{:>3} -> {}", d, o);
                }
            }
            OutputFormat::Json => println!("{}", self.to_json(mask)),
        }
    }
}

fn offset_table(raw: &str, mask: &MaskTemplate) -> OffsetTable {
    let filled = raw.chars().count().min(mask.slot_count());
    OffsetTable::new(render(raw, mask), filled, &translator(mask))
}

fn expiry_table(raw: &str) -> OffsetTable {
    let digits = digits_only(raw);
    let filled = digits.chars().count().min(EXPIRY_MASK.slot_count());
    OffsetTable::new(render_expiry(&digits), filled, &ExpiryOffsets)
}

fn cmd_offsets(raw: &str, pattern: Option<String>, output: OutputFormat) {
    let mask = resolve_mask(raw, pattern);
    offset_table(raw, &mask).print(mask.as_str(), output);
}

fn cmd_expiry(raw: &str, output: OutputFormat) {
    expiry_table(raw).print(EXPIRY_MASK.as_str(), output);
}

fn cmd_type(keystrokes: &[(FieldKind, String)], steps: bool, output: OutputFormat) {
    let mut form = FormSession::new();

    for (kind, keys) in keystrokes {
        if keys.is_empty() {
            continue;
        }
        form.focus(*kind);

        for c in keys.chars() {
            let mut candidate = form.field(*kind).value().to_owned();
            candidate.push(c);
            let value = form.input(*kind, &candidate);
            if steps {
                eprintln!("{:<12} {:?} -> {:?}", kind.label(), c, value);
            }
        }
    }

    let preview = form.preview();
    print_preview(&preview, output);

    let submission = form.submit();
    if let OutputFormat::Text = output {
        println!("Submitted: {} {}", submission.card_type, submission.number);
    }
}

fn print_preview(preview: &CardPreview, output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            println!("Card Type: {}", preview.card_type);
            println!("Face: {:?}", preview.face);
            println!("Number: {}", preview.number);
            println!("Holder: {}", preview.holder);
            println!("Expires: {}", preview.expiry);
            println!("CVV: {}", preview.cvv);
        }
        OutputFormat::Json => match serde_json::to_string_pretty(preview) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}
