//! gdocmark CLI - Google Docs JSON to HTML and Markdown converter

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use gdocmark::{
    parse_file_with_options, Document, ErrorMode, IntermediateLevels, JsonFormat, ParseOptions,
    RenderOptions,
};

#[derive(Parser)]
#[command(name = "gdocmark")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Google Docs JSON exports to HTML and Markdown", long_about = None)]
struct Cli {
    /// Input document JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Fail on list references missing from the document's list table
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to HTML
    Html {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Convert a document to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,

        /// Bullet character for unordered list items
        #[arg(long, value_name = "CHAR", default_value = "-")]
        list_marker: char,
    },

    /// Dump the normalized document nodes as JSON
    Json {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Normalize paragraphs with Markdown inline markup
        #[arg(long)]
        markdown: bool,
    },

    /// Show document information
    Info {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the information as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert several documents in parallel
    Batch {
        /// Input document JSON files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: Format,

        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Escape characters that are special in the output markup
    #[arg(long)]
    escape: bool,

    /// Open skipped list levels with their own list definitions
    #[arg(long)]
    resolve_levels: bool,
}

impl RenderArgs {
    fn options(&self) -> RenderOptions {
        let levels = if self.resolve_levels {
            IntermediateLevels::Resolve
        } else {
            IntermediateLevels::InheritDeepest
        };
        RenderOptions::new()
            .with_escaping(self.escape)
            .with_intermediate_levels(levels)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// HTML fragment
    Html,
    /// Markdown with explicit list numbering
    Markdown,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Markdown => "md",
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let parse_options = parse_options(cli.strict);

    let result = match cli.command {
        Some(Commands::Html {
            input,
            output,
            render,
        }) => cmd_html(&input, output.as_deref(), parse_options, render.options()),
        Some(Commands::Markdown {
            input,
            output,
            render,
            list_marker,
        }) => cmd_markdown(
            &input,
            output.as_deref(),
            parse_options,
            render.options().with_list_marker(list_marker),
        ),
        Some(Commands::Json {
            input,
            output,
            compact,
            markdown,
        }) => cmd_json(&input, output.as_deref(), parse_options, compact, markdown),
        Some(Commands::Info { input, json }) => cmd_info(&input, parse_options, json),
        Some(Commands::Batch {
            inputs,
            output,
            format,
            render,
        }) => cmd_batch(&inputs, &output, parse_options, format, render.options()),
        None => {
            // Default behavior: convert to Markdown if input is provided
            if let Some(input) = cli.input {
                cmd_markdown(
                    &input,
                    cli.output.as_deref(),
                    parse_options,
                    RenderOptions::new(),
                )
            } else {
                println!("{}", "Usage: gdocmark <FILE> [OUTPUT]".yellow());
                println!("       gdocmark --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_options(strict: bool) -> ParseOptions {
    let mode = if strict {
        ErrorMode::Strict
    } else {
        ErrorMode::Lenient
    };
    ParseOptions::new().with_error_mode(mode)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    parse_options: ParseOptions,
    render_options: RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, parse_options)?;
    let html = gdocmark::render::to_html(&doc, &render_options)?;
    write_output(output, &html)
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    parse_options: ParseOptions,
    render_options: RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, parse_options)?;
    let markdown = gdocmark::render::to_markdown(&doc, &render_options)?;
    write_output(output, &markdown)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    parse_options: ParseOptions,
    compact: bool,
    markdown: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, parse_options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let render_options = if markdown {
        RenderOptions::new().markdown()
    } else {
        RenderOptions::new().html()
    };

    let json = gdocmark::render::to_json(&doc, &render_options, format)?;
    write_output(output, &json)
}

fn cmd_info(
    input: &Path,
    parse_options: ParseOptions,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, parse_options)?;
    let result = gdocmark::render::render_with_stats(&doc, &RenderOptions::new())?;
    let stats = result.stats;

    if json {
        let info = serde_json::json!({
            "file": input.display().to_string(),
            "metadata": doc.metadata,
            "blocks": doc.block_count(),
            "lists": doc.lists.len(),
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref id) = doc.metadata.document_id {
        println!("{}: {}", "Document ID".bold(), id);
    }
    if let Some(ref revision) = doc.metadata.revision_id {
        println!("{}: {}", "Revision".bold(), revision);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), doc.block_count());
    println!("{}: {}", "Lists".bold(), doc.lists.len());
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Deepest list".bold(), stats.max_list_depth);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Cells".bold(), stats.cell_count);

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    parse_options: ParseOptions,
    format: Format,
    render_options: RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing...");
    let mut failed = 0;
    let mut paths = Vec::with_capacity(inputs.len());
    let mut docs: Vec<Document> = Vec::with_capacity(inputs.len());
    for input in inputs {
        match parse_file_with_options(input, parse_options.clone()) {
            Ok(doc) => {
                paths.push(input.as_path());
                docs.push(doc);
            }
            Err(e) => {
                log::warn!("Failed to parse {}: {}", input.display(), e);
                pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
                failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.set_message("Rendering...");
    let render_options = match format {
        Format::Html => render_options.html(),
        Format::Markdown => render_options.markdown(),
    };
    let results = gdocmark::render::render_batch(&docs, &render_options);
    let names = output_names(&paths, format.extension());

    let mut written = Vec::new();
    for ((input, name), result) in paths.iter().zip(names).zip(results) {
        match result {
            Ok(content) => {
                fs::write(output_dir.join(&name), content)?;
                written.push(name);
            }
            Err(e) => {
                log::warn!("Failed to render {}: {}", input.display(), e);
                pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
                failed += 1;
            }
        }
    }
    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, name) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), name);
    }

    if failed > 0 {
        return Err(format!("{} of {} documents failed", failed, inputs.len()).into());
    }
    Ok(())
}

/// One output file name per input. Repeated stems get a `-2`, `-3`, ... suffix.
fn output_names(inputs: &[&Path], extension: &str) -> Vec<String> {
    let mut used = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            let mut name = format!("{}.{}", stem, extension);
            let mut suffix = 2;
            while !used.insert(name.clone()) {
                name = format!("{}-{}.{}", stem, suffix, extension);
                suffix += 1;
            }
            if suffix > 2 {
                log::warn!("{} written as {} to avoid a name clash", input.display(), name);
            }
            name
        })
        .collect()
}
