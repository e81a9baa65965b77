use clap::{Args, Parser, Subcommand, ValueEnum};
use mutdet_access::{AccessFlagQuery, ElementKind, parse_flags};
use serde::Serialize;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "mdq", about = "Query JVM class-file access flags")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every access predicate against a flag mask
    Query {
        #[command(flatten)]
        input: FlagInput,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the modifier names set in a flag mask
    Describe {
        #[command(flatten)]
        input: FlagInput,
    },
    /// Print a flag expression as a numeric mask
    Encode {
        #[command(flatten)]
        input: FlagInput,
    },
}

#[derive(Args)]
struct FlagInput {
    /// Element the flags were read from
    #[arg(short, long, value_enum, default_value_t = Kind::Method)]
    kind: Kind,
    /// Flag expression: integer literals and/or modifier names, e.g. `0x0012` or `private final`
    #[arg(required = true, num_args = 1..)]
    flags: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    #[value(alias = "class")]
    Type,
    Field,
    Method,
}

impl From<Kind> for ElementKind {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Type => ElementKind::Type,
            Kind::Field => ElementKind::Field,
            Kind::Method => ElementKind::Method,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Yaml,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { input, format } => cmd_query(&input, format),
        Commands::Describe { input } => cmd_describe(&input),
        Commands::Encode { input } => cmd_encode(&input),
    }
}

fn read_query(input: &FlagInput) -> (ElementKind, AccessFlagQuery) {
    let kind = ElementKind::from(input.kind);
    let text = input.flags.join(" ");
    match parse_flags(kind, &text) {
        Ok(flags) => (kind, AccessFlagQuery::for_kind(kind, flags)),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
struct QueryReport {
    kind: &'static str,
    flags: String,
    modifiers: String,
    is_private: bool,
    is_not_private: bool,
    is_final: bool,
    is_abstract: bool,
    is_interface: bool,
    is_static: bool,
    is_not_static: bool,
}

impl QueryReport {
    fn new(kind: ElementKind, q: AccessFlagQuery) -> Self {
        Self {
            kind: kind.name(),
            flags: format!("{:#06x}", q.raw()),
            modifiers: q.describe(kind).to_string(),
            is_private: q.is_private(),
            is_not_private: q.is_not_private(),
            is_final: q.is_final(),
            is_abstract: q.is_abstract(),
            is_interface: q.is_interface(),
            is_static: q.is_static(),
            is_not_static: q.is_not_static(),
        }
    }

    fn predicates(&self) -> [(&'static str, bool); 7] {
        [
            ("is_private", self.is_private),
            ("is_not_private", self.is_not_private),
            ("is_final", self.is_final),
            ("is_abstract", self.is_abstract),
            ("is_interface", self.is_interface),
            ("is_static", self.is_static),
            ("is_not_static", self.is_not_static),
        ]
    }
}

fn cmd_query(input: &FlagInput, format: Format) {
    let (kind, q) = read_query(input);
    let report = QueryReport::new(kind, q);
    log::debug!("{kind} {q:?}");

    match format {
        Format::Text => {
            println!("Kind:             {}", report.kind);
            println!("Flags:            {}", report.flags);
            println!("Modifiers:        {}", report.modifiers);
            for (name, value) in report.predicates() {
                println!("{:<18}{value}", format!("{name}:"));
            }
        }
        Format::Yaml => match serde_yaml::to_string(&report) {
            Ok(s) => print!("{s}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
    }
}

fn cmd_describe(input: &FlagInput) {
    let (kind, q) = read_query(input);
    println!("{}", q.describe(kind));
}

fn cmd_encode(input: &FlagInput) {
    let (_, q) = read_query(input);
    println!("{:#06x} {}", q.raw(), q.raw());
}
