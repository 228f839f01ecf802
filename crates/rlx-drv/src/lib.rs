//! rlx-drv - the Rouleaux compiler driver.
//!
//! Wires lexer, parser, and resolver into a single pipeline behind a
//! `clap`-derived CLI, and renders the first error encountered in
//! `rlx-util`'s diagnostic format. Grounded on `faxc-drv`'s `Session`
//! pipeline, trimmed to this front end's single-file, lex-parse-resolve
//! sequence — there is no MIR/LIR/codegen/linking here, so `compile` is a
//! straight line rather than a phase table keyed by an `EmitType`.

pub mod error;

use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::Parser as _;
use rlx_lex::Lexer;
use rlx_par::Parser;
use rlx_sem::Resolver;
use rlx_util::{Diagnostic, SourceFile};

pub use error::{CompileError, CompileResult, DriverError};

/// `rlxc <path>` - compile a single Rouleaux source file.
///
/// `--version`/`-V` and `-h`/`--help` come from `clap` for free. There are
/// no other flags: no `-o`, no `-O`, no `--emit-*` — this front end stops
/// at type resolution and produces no codegen artifacts to name an output
/// for.
#[derive(clap::Parser, Debug)]
#[command(name = "rlxc", author, version, about = "Rouleaux compiler front end")]
pub struct Cli {
    /// Path to the source file to compile.
    pub path: PathBuf,
}

/// A failed [`compile`]: the error itself, plus the source file it
/// happened in — present for every error except `DriverError::Io`, which
/// means the file never got far enough to become a [`SourceFile`].
pub struct Failure {
    pub error: CompileError,
    pub source: Option<SourceFile>,
}

/// Reads `path`, then runs it through the lexer, parser, and resolver in
/// order. Returns the first error seen in any phase, wrapped in a
/// [`Failure`] carrying the source needed to render it.
pub fn compile(path: &Path) -> Result<(), Failure> {
    let content = std::fs::read_to_string(path).map_err(|source| Failure {
        error: CompileError::Driver(DriverError::Io {
            path: path.to_path_buf(),
            source,
        }),
        source: None,
    })?;

    let file_name: Rc<str> = path.to_string_lossy().into_owned().into();
    let source_file = SourceFile::new(file_name.clone(), content.clone());

    run_pipeline(file_name, &content).map_err(|error| Failure {
        error,
        source: Some(source_file),
    })
}

fn run_pipeline(file_name: Rc<str>, content: &str) -> CompileResult<()> {
    tracing::debug!(target: "driver", file = %file_name, "lexing + parsing");
    let lexer = Lexer::new(file_name, content);
    let ast = Parser::new(lexer).parse_file()?;

    tracing::debug!(target: "driver", "resolving types");
    Resolver::new().resolve(&ast)?;

    Ok(())
}

/// Renders a [`Failure`] to stderr: `rlx_util::Diagnostic`'s fixed format
/// when the source made it far enough to have one, or a plain
/// `error: ...` line for a driver-level failure (a file that was never
/// read).
pub fn report(failure: &Failure) {
    match &failure.source {
        Some(source) => {
            let location = failure
                .error
                .location()
                .expect("a Failure with a source always has a located error")
                .clone();
            let diagnostic = Diagnostic::new(location, failure.error.to_string());
            eprintln!("{}", diagnostic.render(source, failure.error.token_len()));
        }
        None => eprintln!("error: {}", failure.error),
    }
}

/// Initializes `tracing_subscriber`, honoring `RUST_LOG` and defaulting to
/// `warn` so a normal invocation prints only the diagnostic, never phase
/// traces.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Parses arguments, compiles, reports any error, and returns the process
/// exit code: `0` on success, `1` on a lex/parse/type error, `2` on a
/// usage error. `clap` itself exits `2` when the positional argument is
/// missing, before this function is even reached; an unreadable path
/// reaches here as a `DriverError` and is given the same code, since both
/// are usage-class failures rather than errors in the source text.
pub fn main() -> i32 {
    init_logging();
    let cli = Cli::parse();

    match compile(&cli.path) {
        Ok(()) => 0,
        Err(failure) => {
            let code = match failure.error {
                CompileError::Driver(_) => 2,
                _ => 1,
            };
            report(&failure);
            code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn compiles_a_valid_program() {
        let file = write_temp("x : int = 3 + 4 * 2;");
        compile(file.path()).unwrap();
    }

    #[test]
    fn reports_undeclared_symbol() {
        let file = write_temp("x = 1;");
        let failure = compile(file.path()).unwrap_err();
        assert!(failure.source.is_some());
        assert!(matches!(failure.error, CompileError::Semantic(_)));
    }

    #[test]
    fn missing_file_has_no_source() {
        let failure = compile(Path::new("definitely/does/not/exist.rlx")).unwrap_err();
        assert!(failure.source.is_none());
        assert!(matches!(failure.error, CompileError::Driver(_)));
    }

    #[test]
    fn unterminated_block_comment_surfaces_as_parse_error() {
        let file = write_temp("/* unterminated");
        let failure = compile(file.path()).unwrap_err();
        assert!(matches!(failure.error, CompileError::Parse(_)));
    }
}
