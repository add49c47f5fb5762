use crate::formats::OutputFormat;
use crate::lll_error::{LllError, LllErrorKind};
use crate::session::Session;
use crate::step::{ActionStep, Step};
use log::info;
use std::fs;
use std::io::{self, Write};

pub(crate) struct EmitBasis {
    name: String,
}

impl ActionStep for EmitBasis {
    fn new() -> Self
    where
        Self: Sized,
    {
        EmitBasis {
            name: "emit_basis".to_owned(),
        }
    }

    fn get_name(&self) -> &str {
        &self.name
    }

    fn execute(&self, session: &mut Session) -> Result<Step, Box<LllError>> {
        if let Some(original) = &session.original {
            session.progress.suspend(|| {
                println!("Original basis: {original}");
                println!("\nReduced basis (LLL): {}", session.basis);
            });
            return Ok(Step::Stop);
        }

        let mut rendered = session.format.render(&session.basis);
        if session.format == OutputFormat::Json {
            rendered.push('\n');
        }

        match &session.output {
            Some(path) => {
                fs::write(path, &rendered).map_err(|e| {
                    LllError::boxed(
                        "Failed to write output",
                        &format!("Could not write {}: {}", path.display(), e),
                        LllErrorKind::Output,
                    )
                })?;
                info!("Wrote reduced basis to {}", path.display());
            }
            None => session.progress.suspend(|| {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(rendered.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|e| {
                        LllError::boxed(
                            "Failed to write output",
                            &format!("Could not write to stdout: {e}"),
                            LllErrorKind::Output,
                        )
                    })
            })?,
        }
        Ok(Step::Stop)
    }
}
