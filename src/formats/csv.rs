use crate::lattice::Basis;
use crate::lll_error::{LllError, LllErrorKind};
use log::debug;
use rug::Integer;
use std::fs;
use std::path::Path;

/// One row per line, comma separated. Blank lines and `#` comments are skipped.
pub(crate) fn parse_basis(content: &str) -> Result<Basis, Box<LllError>> {
    let mut rows = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split(',')
            .map(|field| {
                let field = field.trim();
                field.parse::<Integer>().map_err(|e| {
                    LllError::boxed(
                        "Invalid number in CSV",
                        &format!("line {}: '{field}' is not an integer ({e})", idx + 1),
                        LllErrorKind::Input,
                    )
                })
            })
            .collect::<Result<Vec<Integer>, _>>()?;
        rows.push(row);
    }
    Ok(Basis::new(rows))
}

pub(crate) fn load_basis(path: &Path) -> Result<Basis, Box<LllError>> {
    debug!("Reading CSV basis from {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| {
        LllError::boxed(
            "Could not open file",
            &format!("Could not read {}: {}", path.display(), e),
            LllErrorKind::Input,
        )
    })?;
    parse_basis(&content)
}

pub(crate) fn format_basis(basis: &Basis) -> String {
    let mut out = String::new();
    for row in basis.rows() {
        let fields: Vec<String> = row.iter().map(Integer::to_string).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}
