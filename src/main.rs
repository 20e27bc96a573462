use clap::Parser;
use std::path::PathBuf;
use textside_pdf::{BuiltinFont, DEFAULT_INPUT, DEFAULT_OUTPUT, Options};

#[derive(Parser)]
#[command(name = "textside-pdf", about = "Convert text and markdown files to PDF")]
struct Args {
    /// Input text or markdown file
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Output PDF file
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Font size in points
    #[arg(long, default_value_t = 10.0)]
    font_size: f32,
    /// Line height in millimetres
    #[arg(long, default_value_t = 5.0)]
    line_height: f32,
    /// Bottom margin that triggers a page break, in millimetres
    #[arg(long, default_value_t = 15.0)]
    bottom_margin: f32,
    /// Built-in font: helvetica (alias arial), helvetica-bold, helvetica-oblique,
    /// helvetica-boldoblique or courier
    #[arg(long, default_value = "helvetica")]
    font: BuiltinFont,
    /// Document title stored in the PDF metadata
    #[arg(long)]
    title: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.input.exists() {
        eprintln!("Error: file not found: {}", args.input.display());
        std::process::exit(1);
    }
    if !args.input.is_file() {
        eprintln!("Error: not a file: {}", args.input.display());
        std::process::exit(1);
    }

    let mut options = Options::default();
    options.style.font = args.font;
    options.style.font_size = args.font_size;
    options.style.line_height = args.line_height;
    options.layout.margin_bottom = args.bottom_margin;
    options.metadata.title = args.title;

    if let Err(e) = textside_pdf::create_pdf_with(&args.input, &args.output, &options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    println!("PDF created successfully: {}", args.output.display());
}
