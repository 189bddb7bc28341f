//! File-level compilation driver
//!
//! Reads a `.ts` file, runs it through [`crate::transpile_detailed`] and
//! writes the result next to it (or to an explicit output path):
//! - [`read_source`]: load the input, reporting a missing file distinctly
//! - [`derive_output_path`]: `foo.ts` → `foo.js`
//! - [`compile_file`]: the whole read → transpile → write sequence
//!
//! All I/O of the crate lives here; the pipeline itself is pure.

pub mod errors;

pub use errors::DriverError;

use crate::codegen::EmitOptions;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension given to generated files
pub const OUTPUT_EXTENSION: &str = "js";

/// One file to compile
#[derive(Debug, Clone)]
pub struct CompileRequest {
    pub input: PathBuf,
    /// Explicit destination; derived from `input` when `None`
    pub output: Option<PathBuf>,
    pub options: EmitOptions,
}

impl CompileRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            options: EmitOptions::default(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    /// Destination path for the generated code.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| derive_output_path(&self.input))
    }
}

/// Outcome of a successful [`compile_file`]
#[derive(Debug, Clone)]
pub struct CompileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub source: String,
    pub generated: String,
    /// Number of statements that survived parsing
    pub statements: usize,
}

/// Read the source file at `path`.
pub fn read_source(path: &Path) -> Result<String, DriverError> {
    fs::read_to_string(path)
        .map_err(|err| DriverError::from_read(path.to_path_buf(), err))
}

/// `dir/foo.ts` → `dir/foo.js`; a path without extension gains `.js`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Read, transpile and write one file.
pub fn compile_file(request: &CompileRequest) -> Result<CompileReport, DriverError> {
    let input = request.input.clone();
    let output = request.output_path();

    if output == input {
        return Err(DriverError::OutputIsInput { path: output });
    }

    log::info!("compiling {} -> {}", input.display(), output.display());
    let source = read_source(&input)?;

    let transpiled = crate::transpile_detailed(&source, &request.options);
    write_output(&output, &transpiled.code)?;

    Ok(CompileReport {
        input,
        output,
        source,
        generated: transpiled.code,
        statements: transpiled.statements,
    })
}

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_output(path: &Path, contents: &str) -> Result<(), DriverError> {
    let write_err = |source| DriverError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::MissingValue;

    #[test]
    fn test_derive_output_path() {
        assert_eq!(
            derive_output_path(Path::new("src/app.ts")),
            PathBuf::from("src/app.js")
        );
        assert_eq!(
            derive_output_path(Path::new("script")),
            PathBuf::from("script.js")
        );
        assert_eq!(
            derive_output_path(Path::new("my.types.ts")),
            PathBuf::from("my.types.js")
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.ts");

        match read_source(&missing) {
            Err(DriverError::NotFound { path }) => assert_eq!(path, missing),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_input_is_read_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = read_source(dir.path()).unwrap_err();
        assert!(matches!(err, DriverError::Read { .. }), "{err:?}");
    }

    #[test]
    fn test_compile_file_writes_js() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("main.ts");
        fs::write(&input, "let x: number = 5;\nconsole.log(x);\n").unwrap();

        let report = compile_file(&CompileRequest::new(&input)).unwrap();

        assert_eq!(report.output, dir.path().join("main.js"));
        assert_eq!(report.statements, 2);
        assert_eq!(report.generated, "let x = 5;\nconsole.log(x);\n");
        assert_eq!(
            fs::read_to_string(&report.output).unwrap(),
            report.generated
        );
    }

    #[test]
    fn test_compile_file_explicit_output_and_options() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("decl.ts");
        let output = dir.path().join("out").join("decl.mjs");
        fs::write(&input, "let pending: string;").unwrap();

        let request = CompileRequest::new(&input)
            .with_output(&output)
            .with_options(EmitOptions::new().with_missing_value(MissingValue::Omit));
        let report = compile_file(&request).unwrap();

        assert_eq!(report.output, output);
        assert_eq!(fs::read_to_string(&output).unwrap(), "let pending;\n");
    }

    #[test]
    fn test_unwritable_output_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("main.ts");
        fs::write(&input, "let a = 1;").unwrap();
        // A regular file where the output directory should be.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let output = blocker.join("main.js");

        let request = CompileRequest::new(&input).with_output(&output);
        let err = compile_file(&request).unwrap_err();

        match err {
            DriverError::Write { path, .. } => assert_eq!(path, output),
            other => panic!("Expected Write, got {:?}", other),
        }
        assert!(blocker.is_file());
    }

    #[test]
    fn test_write_output_onto_directory_fails() {
        let dir = tempfile::tempdir().unwrap();

        // The target itself is an existing directory.
        let err = write_output(dir.path(), "let a = 1;\n").unwrap_err();
        assert!(matches!(err, DriverError::Write { .. }), "{err:?}");
    }

    #[test]
    fn test_refuses_to_overwrite_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("already.js");
        fs::write(&input, "let a = 1;").unwrap();

        let err = compile_file(&CompileRequest::new(&input)).unwrap_err();

        assert!(matches!(err, DriverError::OutputIsInput { .. }));
        assert_eq!(fs::read_to_string(&input).unwrap(), "let a = 1;");
    }
}
