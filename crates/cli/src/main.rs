use annotator_core::{Annotator, InsertionPlan, Selection, TextBuffer};
use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod command;

#[derive(Parser)]
#[command(name = "annotate")]
#[command(about = "Insert descriptive comments above source lines", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate the line under the caret
    Line(LineArgs),

    /// Annotate a selection spanning one or more lines
    Selection(SelectionArgs),

    /// Print the classification for a single line of text
    Classify(ClassifyArgs),

    /// Execute a JSON request (from --json or stdin)
    Command(CommandArgs),
}

#[derive(Args)]
struct LineArgs {
    /// File to annotate
    file: PathBuf,

    /// Caret line (1-indexed)
    #[arg(short, long)]
    line: usize,

    /// Caret column (1-indexed)
    #[arg(short, long, default_value_t = 1)]
    column: usize,

    /// Print the insertion plan as JSON instead of the annotated text
    #[arg(long)]
    json: bool,

    /// Rewrite the file in place instead of printing to stdout
    #[arg(long)]
    write: bool,
}

#[derive(Args)]
struct SelectionArgs {
    /// File to annotate
    file: PathBuf,

    /// Selection start line (1-indexed)
    #[arg(long)]
    start_line: usize,

    /// Selection start column (1-indexed)
    #[arg(long, default_value_t = 1)]
    start_column: usize,

    /// Selection end line (1-indexed)
    #[arg(long)]
    end_line: usize,

    /// Selection end column (1-indexed, exclusive); defaults to the end of
    /// the end line
    #[arg(long)]
    end_column: Option<usize>,

    /// Print the insertion plan as JSON instead of the annotated text
    #[arg(long)]
    json: bool,

    /// Rewrite the file in place instead of printing to stdout
    #[arg(long)]
    write: bool,
}

#[derive(Args)]
struct ClassifyArgs {
    /// Line of source text; read from stdin when omitted
    text: Option<String>,

    /// Emit the classification as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CommandArgs {
    /// Inline JSON request; read from stdin when omitted
    #[arg(long)]
    json: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Commands::Line(args) => run_line(args),
        Commands::Selection(args) => run_selection(args),
        Commands::Classify(args) => run_classify(args),
        Commands::Command(args) => command::run(args.json.as_deref()),
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run_line(args: LineArgs) -> Result<()> {
    let mut buf = load_buffer(&args.file)?;
    buf.set_caret(args.line, args.column)
        .with_context(|| format!("cannot place caret in {}", args.file.display()))?;

    let plan = Annotator::new()
        .run(&mut buf)?
        .context("buffer produced no annotation target")?;
    emit(&args.file, &buf, &plan, args.json, args.write)
}

fn run_selection(args: SelectionArgs) -> Result<()> {
    let mut buf = load_buffer(&args.file)?;
    let end_column = match args.end_column {
        Some(column) => column,
        None => {
            let line = buf.line(args.end_line).with_context(|| {
                format!("line {} is out of range in {}", args.end_line, args.file.display())
            })?;
            line.chars().count() + 1
        }
    };
    buf.select(Selection {
        start_line: args.start_line,
        start_column: args.start_column,
        end_line: args.end_line,
        end_column,
    })
    .with_context(|| format!("cannot select in {}", args.file.display()))?;

    let plan = Annotator::new()
        .run(&mut buf)?
        .context("buffer produced no annotation target")?;
    emit(&args.file, &buf, &plan, args.json, args.write)
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("cannot read line from stdin")?;
            input
        }
    };
    let line = text.split('\n').next().unwrap_or_default();
    let classification = annotator_core::classify(line);

    if args.json {
        return print_stdout(&serde_json::to_string_pretty(&classification)?);
    }

    let mut out = format!("category: {}", classification.category.as_str());
    if let Some(name) = &classification.identifier {
        out.push_str(&format!(", identifier: {name}"));
    }
    if let Some(kind) = classification.control_flow {
        out.push_str(&format!(", kind: {}", kind.label()));
    }
    out.push_str(&format!(
        ", comment: {}",
        annotator_core::line_comment(&classification)
    ));
    print_stdout(&out)
}

fn load_buffer(file: &Path) -> Result<TextBuffer> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("cannot read {}", file.display()))?;
    Ok(TextBuffer::from_text(&content))
}

fn emit(file: &Path, buf: &TextBuffer, plan: &InsertionPlan, json: bool, write: bool) -> Result<()> {
    if json {
        return print_stdout(&serde_json::to_string_pretty(plan)?);
    }
    if write {
        fs::write(file, buf.text())
            .with_context(|| format!("cannot write {}", file.display()))?;
        log::info!("annotated {}", file.display());
        return Ok(());
    }
    let text = buf.text();
    print_stdout(text.strip_suffix('\n').unwrap_or(&text))
}

pub(crate) fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}
