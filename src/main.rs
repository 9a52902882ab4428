use anyhow::Result;
use clap::{Parser, Subcommand};
use snapdiff::areas::session::{ColorChoice, Session};

#[derive(Parser)]
#[command(
    name = "snapdiff",
    version = "0.1.0",
    about = "Minimal edit scripts between two texts",
    long_about = "This tool computes the shortest edit script between two texts \
    with Myers' algorithm and prints it either inline, character by character, \
    or line by line. It can also check text against an expected snapshot.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "Treat operands as literal text instead of file paths"
    )]
    literal: bool,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "When to colour the output"
    )]
    color: ColorChoice,
    #[arg(long, global = true, help = "Page long output")]
    pager: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "inline",
        about = "Print the inline character diff",
        long_about = "This command prints the character diff of two operands as quoted spans, \
        each prefixed with a space (retained), '-' (deleted) or '+' (inserted)."
    )]
    Inline {
        #[arg(index = 1, help = "The old text")]
        old: String,
        #[arg(index = 2, help = "The new text")]
        new: String,
        #[arg(short, long, help = "Run only the solver, without trimming or cleanup")]
        raw: bool,
    },
    #[command(
        name = "lines",
        about = "Print the line diff",
        long_about = "This command prints one line per input line, \
        each prefixed with a space (retained), '-' (deleted) or '+' (inserted)."
    )]
    Lines {
        #[arg(index = 1, help = "The old text")]
        old: String,
        #[arg(index = 2, help = "The new text")]
        new: String,
    },
    #[command(
        name = "check",
        about = "Check actual text against an expected snapshot",
        long_about = "This command compares the actual text with the expected snapshot. \
        On a mismatch it prints the line diff and exits with status 1."
    )]
    Check {
        #[arg(index = 1, help = "The expected snapshot")]
        expected: String,
        #[arg(index = 2, help = "The actual text")]
        actual: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    let session = if Session::wants_pager(cli.pager) {
        Session::paged(cli.literal)
    } else {
        Session::new(Box::new(std::io::stdout()), cli.literal)
    };

    let matched = match &cli.command {
        Commands::Inline { old, new, raw } => {
            session.inline(old, new, *raw)?;
            true
        }
        Commands::Lines { old, new } => {
            session.lines(old, new)?;
            true
        }
        Commands::Check { expected, actual } => session.check(expected, actual)?,
    };

    session.finish()?;

    if !matched {
        std::process::exit(1);
    }

    Ok(())
}
